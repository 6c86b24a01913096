/// Request path utilities
///
/// All functions are **pure** and borrow from their input; nothing here allocates
/// except query decoding.

use std::borrow::Cow;

/// Splits a path or format into `/`-delimited components
///
/// Leading and trailing slashes are trimmed first. Interior empty components
/// are kept, so `a//b` yields three components. A string that trims to empty
/// yields a single empty component (the root).
///
/// # Examples
///
/// ```
/// use routable::path::split_segments;
///
/// let segs: Vec<&str> = split_segments("/users/42/").collect();
/// assert_eq!(segs, vec!["users", "42"]);
///
/// let segs: Vec<&str> = split_segments("/").collect();
/// assert_eq!(segs, vec![""]);
/// ```
pub fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.trim_matches('/').split('/')
}

/// A request URL broken into its matchable path and raw query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestPath<'a> {
    pub path: &'a str,
    pub query: Option<&'a str>,
}

impl<'a> RequestPath<'a> {
    /// Separates `path?query#fragment`; the fragment is dropped
    ///
    /// # Examples
    ///
    /// ```
    /// use routable::path::RequestPath;
    ///
    /// let req = RequestPath::parse("users/42?tab=posts#top");
    /// assert_eq!(req.path, "users/42");
    /// assert_eq!(req.query, Some("tab=posts"));
    /// ```
    pub fn parse(url: &'a str) -> Self {
        let without_fragment = url.split_once('#').map_or(url, |(before, _)| before);

        match without_fragment.split_once('?') {
            Some((path, query)) => Self {
                path,
                query: Some(query),
            },
            None => Self {
                path: without_fragment,
                query: None,
            },
        }
    }

    /// Path components, see [`split_segments`]
    pub fn segments(&self) -> Vec<&'a str> {
        split_segments(self.path).collect()
    }

    /// Decoded `(key, value)` pairs of the query string
    ///
    /// `+` is treated as a space. Pairs without `=` get an empty value; empty
    /// keys are skipped. Undecodable input is passed through verbatim.
    pub fn query_pairs(&self) -> Vec<(Cow<'a, str>, Cow<'a, str>)> {
        self.query
            .into_iter()
            .flat_map(|q| q.split('&'))
            .filter(|pair| !pair.is_empty())
            .filter_map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                let key = decode_component(key);
                (!key.is_empty()).then(|| (key, decode_component(value)))
            })
            .collect()
    }
}

fn decode_component(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['%', '+']) {
        return Cow::Borrowed(raw);
    }

    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => Cow::Owned(decoded.into_owned()),
        Err(_) => Cow::Owned(spaced),
    }
}

/// Heuristic for scheme-qualified URLs such as `https://example.com`
///
/// The scheme must start with an ASCII letter and contain only letters,
/// digits, `+`, `-` or `.`, followed by `://`.
///
/// # Examples
///
/// ```
/// use routable::path::looks_external;
///
/// assert!(looks_external("https://example.com"));
/// assert!(looks_external("mailto+x://a"));
/// assert!(!looks_external("users/42"));
/// assert!(!looks_external("users/:id://x"));
/// ```
pub fn looks_external(url: &str) -> bool {
    let Some((scheme, _)) = url.split_once("://") else {
        return false;
    };

    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
