//! Typed routing outcomes.
//!
//! The router never panics on bad input; it reports through these variants and
//! the caller decides whether a failure is fatal.

use crate::target::TargetId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// No registered pattern, at any nesting depth, matches the path
    #[error("no route matches `{path}`")]
    NoMatch { path: String },

    /// A resolved target cannot be used by the presentation layer
    #[error("route target `{target}` is misconfigured: {reason}")]
    MisconfiguredTarget { target: TargetId, reason: String },

    /// The presenter cannot hand URLs to the operating system
    #[error("opening external URL `{url}` is not supported")]
    ExternalUnsupported { url: String },
}

impl RouteError {
    pub fn no_match(path: impl Into<String>) -> Self {
        Self::NoMatch { path: path.into() }
    }

    pub fn misconfigured(target: TargetId, reason: impl Into<String>) -> Self {
        Self::MisconfiguredTarget {
            target,
            reason: reason.into(),
        }
    }

    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch { .. })
    }
}

pub type Result<T, E = RouteError> = std::result::Result<T, E>;
