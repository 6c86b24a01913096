//! Handler targets a route can resolve to.
//!
//! The kind of target is fixed at registration time, so nothing is probed at
//! match time. Equality is identity for callbacks and child routers and by
//! name for constructible targets.

use std::fmt;
use std::sync::Arc;

use crate::route::Params;
use crate::Router;

/// Shared closure invoked with the merged parameters of a match
#[derive(Clone)]
pub struct Callback(Arc<dyn Fn(&Params) + Send + Sync>);

impl Callback {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Params) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self, params: &Params) {
        (self.0)(params)
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Callback")
            .field(&Arc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}

/// Name of a view the presentation layer knows how to construct
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(String);

impl TargetId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TargetId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TargetId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

#[derive(Debug, Clone)]
pub enum HandlerTarget {
    /// Run a closure
    Callback(Callback),
    /// Construct and present a view
    Constructible(TargetId),
    /// Delegate the unmatched suffix to a nested router
    ChildRouter(Arc<Router>),
}

impl HandlerTarget {
    pub fn callback<F>(f: F) -> Self
    where
        F: Fn(&Params) + Send + Sync + 'static,
    {
        Self::Callback(Callback::new(f))
    }

    pub fn constructible(id: impl Into<TargetId>) -> Self {
        Self::Constructible(id.into())
    }

    pub fn is_child_router(&self) -> bool {
        matches!(self, Self::ChildRouter(_))
    }

    /// Short label for logs
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::Callback(_) => "callback",
            Self::Constructible(_) => "constructible",
            Self::ChildRouter(_) => "child_router",
        }
    }
}

impl PartialEq for HandlerTarget {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Callback(a), Self::Callback(b)) => a == b,
            (Self::Constructible(a), Self::Constructible(b)) => a == b,
            (Self::ChildRouter(a), Self::ChildRouter(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_identity_equality() {
        let a = Callback::new(|_| {});
        let b = Callback::new(|_| {});
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_constructible_equality_by_name() {
        assert_eq!(
            HandlerTarget::constructible("UserView"),
            HandlerTarget::constructible(String::from("UserView"))
        );
        assert_ne!(
            HandlerTarget::constructible("UserView"),
            HandlerTarget::constructible("PostView")
        );
    }

    #[test]
    fn test_child_router_identity() {
        let child = Arc::new(Router::new());
        let a = HandlerTarget::ChildRouter(Arc::clone(&child));
        assert_eq!(a, HandlerTarget::ChildRouter(child));
        assert_ne!(a, HandlerTarget::ChildRouter(Arc::new(Router::new())));
        assert!(a.is_child_router());
    }
}
