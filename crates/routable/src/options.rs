//! Per-route configuration consumed by the presentation layer.
//!
//! Options are built once at mapping time with a chainable DSL and never
//! change afterwards. The router reads only `default_params`; everything else
//! is a hint passed through untouched.
//!
//! ```
//! use routable::{PresentationStyle, RouteOptions};
//!
//! let options = RouteOptions::modal().with_presentation_style(PresentationStyle::FormSheet);
//! assert!(options.is_modal());
//! ```

use crate::route::Params;
use serde_json::Value;

/// How a constructed view should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentationIntent {
    /// Pushed onto the navigation stack
    #[default]
    Push,
    /// Presented modally
    Modal,
}

/// Modal presentation style hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentationStyle {
    #[default]
    None,
    FullScreen,
    PageSheet,
    FormSheet,
    CurrentContext,
    OverFullScreen,
    OverCurrentContext,
    Popover,
}

/// Modal transition style hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionStyle {
    #[default]
    CoverVertical,
    FlipHorizontal,
    CrossDissolve,
    PartialCurl,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteOptions {
    /// Base parameters; overwritten by query, path and call-time params
    pub default_params: Params,
    pub presentation: PresentationIntent,
    /// Always assigned, regardless of `presentation`
    pub presentation_style: PresentationStyle,
    /// Always assigned, regardless of `presentation`
    pub transition_style: TransitionStyle,
    /// Replace the whole navigation stack instead of pushing
    pub is_root: bool,
}

impl RouteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// New options with modal presentation
    pub fn modal() -> Self {
        Self::new().as_modal()
    }

    /// New options carrying `params` as defaults
    pub fn for_default_params(params: Params) -> Self {
        Self::new().with_default_params(params)
    }

    pub fn as_modal(mut self) -> Self {
        self.presentation = PresentationIntent::Modal;
        self
    }

    pub fn as_root(mut self) -> Self {
        self.is_root = true;
        self
    }

    pub fn with_presentation_style(mut self, style: PresentationStyle) -> Self {
        self.presentation_style = style;
        self
    }

    pub fn with_transition_style(mut self, style: TransitionStyle) -> Self {
        self.transition_style = style;
        self
    }

    /// Replaces the default parameters
    pub fn with_default_params(mut self, params: Params) -> Self {
        self.default_params = params;
        self
    }

    /// Adds a single default parameter
    ///
    /// ```
    /// use routable::RouteOptions;
    /// use serde_json::json;
    ///
    /// let options = RouteOptions::new().with_default("page", 1).with_default("sort", "name");
    /// assert_eq!(options.default_params["page"], json!(1));
    /// ```
    pub fn with_default(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.default_params.insert(key.into(), value.into());
        self
    }

    pub fn is_modal(&self) -> bool {
        self.presentation == PresentationIntent::Modal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_match_initial_values() {
        let options = RouteOptions::new();
        assert_eq!(options.presentation, PresentationIntent::Push);
        assert_eq!(options.presentation_style, PresentationStyle::None);
        assert_eq!(options.transition_style, TransitionStyle::CoverVertical);
        assert!(!options.is_root);
        assert!(options.default_params.is_empty());
    }

    #[test]
    fn test_chained_dsl() {
        let options = RouteOptions::modal()
            .with_presentation_style(PresentationStyle::FormSheet)
            .with_transition_style(TransitionStyle::CrossDissolve)
            .as_root()
            .with_default("id", "0");

        assert!(options.is_modal());
        assert!(options.is_root);
        assert_eq!(options.presentation_style, PresentationStyle::FormSheet);
        assert_eq!(options.transition_style, TransitionStyle::CrossDissolve);
        assert_eq!(options.default_params.get("id"), Some(&json!("0")));
    }

    #[test]
    fn test_with_default_params_replaces() {
        let params: Params = [("a".to_string(), json!(1))].into();
        let options = RouteOptions::new()
            .with_default("b", 2)
            .with_default_params(params.clone());
        assert_eq!(options.default_params, params);
    }
}
