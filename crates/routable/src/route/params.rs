/// Parameter extraction and merging
///
/// Precedence, lowest to highest: default params < query params < path
/// bindings < explicit call arguments. Every layer is copied into the result,
/// so later mutation of a source map never reaches a produced mapping.

use std::collections::HashMap;

use serde_json::Value;

use super::pattern::{RoutePattern, Segment};
use crate::path::RequestPath;

/// Parameter mapping handed to callbacks and presenters
pub type Params = HashMap<String, Value>;

/// Extracts path bindings for a pattern (pure function)
///
/// Precondition: `request` holds at least as many segments as `pattern`
/// and the pattern already accepted them. Extra request segments are ignored,
/// which lets child-router prefixes reuse this. Returns an empty mapping when
/// the pattern has no parameters.
///
/// # Examples
///
/// ```
/// use routable::route::{compile, extract};
/// use serde_json::json;
///
/// let params = extract(&compile("users/:id"), &["users", "42"]);
/// assert_eq!(params.get("id"), Some(&json!("42")));
/// ```
pub fn extract(pattern: &RoutePattern, request: &[&str]) -> Params {
    pattern
        .segments()
        .iter()
        .zip(request)
        .filter_map(|(seg, value)| match seg {
            Segment::Param(name) if !name.is_empty() => {
                Some((name.clone(), Value::String((*value).to_string())))
            }
            _ => None,
        })
        .collect()
}

/// Query-string params as string values; later duplicates win
pub fn query_params(request: &RequestPath<'_>) -> Params {
    request
        .query_pairs()
        .into_iter()
        .map(|(key, value)| (key.into_owned(), Value::String(value.into_owned())))
        .collect()
}

/// Overlays `layers` in order onto an empty map; later layers win
///
/// # Examples
///
/// ```
/// use routable::route::{merge_params, Params};
/// use serde_json::json;
///
/// let defaults: Params = [("id".to_string(), json!("0"))].into();
/// let path: Params = [("id".to_string(), json!("7"))].into();
///
/// let merged = merge_params([&defaults, &path]);
/// assert_eq!(merged["id"], json!("7"));
/// ```
pub fn merge_params<'a, I>(layers: I) -> Params
where
    I: IntoIterator<Item = &'a Params>,
{
    layers.into_iter().fold(Params::new(), |mut acc, layer| {
        acc.extend(layer.iter().map(|(k, v)| (k.clone(), v.clone())));
        acc
    })
}
