//! # Routable
//!
//! Maps string URLs such as `users/:id` to registered handlers:
//! - Callbacks run with the extracted parameters
//! - Constructible view targets handed to a [`Presenter`]
//! - Child routers that resolve the unmatched suffix of a path
//!
//! ## Matching Rules
//!
//! - Registration order is priority order: the first matching entry wins
//! - Plain entries must match the full segment count
//! - Child routers are only tried when no plain entry matches, and only as a
//!   strict prefix; the first matching prefix is final
//! - Literal segments compare byte-for-byte (case-sensitive)
//!
//! ## Parameter Precedence
//!
//! Lowest to highest: default params < query params < path bindings <
//! explicit call arguments. Inside a child router, defaults of the enclosing
//! entries rank with the other defaults and prefix bindings rank below the
//! child's own bindings but above every default and query param.
//!
//! ## Example
//!
//! ```
//! use routable::{HandlerTarget, Router};
//! use serde_json::json;
//!
//! let mut admin = Router::new();
//! admin.map_target("users/:id", "AdminUserView");
//!
//! let mut router = Router::new();
//! router.map_target("users/:id", "UserView");
//! router.register_child_router("admin", admin);
//!
//! let m = router.match_route("users/42").unwrap();
//! assert_eq!(m.params["id"], json!("42"));
//!
//! let m = router.match_route("admin/users/9").unwrap();
//! assert_eq!(m.target, HandlerTarget::constructible("AdminUserView"));
//! ```

use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;
use tracing::{debug, trace};

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod error;
pub mod navigator;
pub mod options;
pub mod path;
pub mod route;
pub mod target;

pub use config::RouterConfig;
pub use error::{Result, RouteError};
pub use navigator::{Navigator, Opened, Presenter};
pub use options::{PresentationIntent, PresentationStyle, RouteOptions, TransitionStyle};
pub use path::{looks_external, RequestPath};
pub use route::{compile, extract, Params, RoutePattern, Segment};
pub use target::{Callback, HandlerTarget, TargetId};

use path::split_segments;
use route::params::{merge_params, query_params};

// ============================================================================
// Core Types
// ============================================================================

/// A registered route; immutable once added to a [`Router`]
#[derive(Debug, Clone)]
pub struct RouteEntry {
    pattern: RoutePattern,
    target: HandlerTarget,
    options: RouteOptions,
}

impl RouteEntry {
    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn target(&self) -> &HandlerTarget {
        &self.target
    }

    pub fn options(&self) -> &RouteOptions {
        &self.options
    }
}

/// Result of matching a path; never a `ChildRouter` target
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch {
    /// Leaf target that should handle the path
    pub target: HandlerTarget,
    /// Merged parameters, owned by this match
    pub params: Params,
    /// Options of the leaf entry
    pub options: RouteOptions,
    /// Pattern of the leaf entry
    pub pattern: RoutePattern,
}

// ============================================================================
// Router Implementation
// ============================================================================

/// Insertion-ordered route registry with first-match-wins lookup
///
/// Registration needs `&mut self`; matching needs only `&self`, so any number
/// of lookups may run concurrently while no registration is in progress.
#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: Vec<RouteEntry>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a route; never fails, deduplicates or reorders
    ///
    /// Re-registering an identical format appends a second entry that the
    /// first one shadows.
    pub fn register(
        &mut self,
        format: &str,
        target: HandlerTarget,
        options: RouteOptions,
    ) -> &mut Self {
        let pattern = RoutePattern::compile(format);
        debug!(
            format,
            segments = pattern.len(),
            kind = target.kind(),
            index = self.routes.len(),
            "registered route"
        );

        self.routes.push(RouteEntry {
            pattern,
            target,
            options,
        });
        self
    }

    /// Delegates every path under `prefix` to `child`
    ///
    /// The prefix may contain parameters; their bindings reach the child's
    /// match above its defaults and query params but below its own bindings.
    pub fn register_child_router(
        &mut self,
        prefix: &str,
        child: impl Into<Arc<Router>>,
    ) -> &mut Self {
        self.register(
            prefix,
            HandlerTarget::ChildRouter(child.into()),
            RouteOptions::default(),
        )
    }

    pub fn map_callback<F>(&mut self, format: &str, callback: F) -> &mut Self
    where
        F: Fn(&Params) + Send + Sync + 'static,
    {
        self.map_callback_with(format, callback, RouteOptions::default())
    }

    pub fn map_callback_with<F>(
        &mut self,
        format: &str,
        callback: F,
        options: RouteOptions,
    ) -> &mut Self
    where
        F: Fn(&Params) + Send + Sync + 'static,
    {
        self.register(format, HandlerTarget::callback(callback), options)
    }

    pub fn map_target(&mut self, format: &str, target: impl Into<TargetId>) -> &mut Self {
        self.map_target_with(format, target, RouteOptions::default())
    }

    pub fn map_target_with(
        &mut self,
        format: &str,
        target: impl Into<TargetId>,
        options: RouteOptions,
    ) -> &mut Self {
        self.register(format, HandlerTarget::constructible(target), options)
    }

    /// Registered entries in registration order
    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Matches a path against all routes and returns the first match
    ///
    /// # Examples
    ///
    /// ```
    /// use routable::{RouteError, Router};
    ///
    /// let mut router = Router::new();
    /// router.map_target("users/new", "NewUserView");
    ///
    /// assert!(router.match_route("/users/new/").is_ok());
    /// assert_eq!(
    ///     router.match_route("users/NEW"),
    ///     Err(RouteError::no_match("users/NEW"))
    /// );
    /// ```
    pub fn match_route(&self, path: &str) -> Result<RouteMatch> {
        self.match_with(path, &Params::new())
    }

    /// Like [`match_route`](Self::match_route), with call-time arguments that
    /// override every other parameter source
    pub fn match_with(&self, path: &str, extra: &Params) -> Result<RouteMatch> {
        let request = RequestPath::parse(path);
        let segments = request.segments();
        let query = query_params(&request);

        match self.resolve(&segments, &Inherited::root(&query)) {
            Some(mut found) => {
                found
                    .params
                    .extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
                debug!(
                    path,
                    pattern = found.pattern.format(),
                    kind = found.target.kind(),
                    "route matched"
                );
                Ok(found)
            }
            None => {
                debug!(path, "no route matched");
                Err(RouteError::no_match(path))
            }
        }
    }

    /// Plain entries first, then child-router prefixes
    fn resolve(&self, segments: &[&str], layers: &Inherited<'_>) -> Option<RouteMatch> {
        self.resolve_plain(segments, layers)
            .or_else(|| self.resolve_child(segments, layers))
    }

    fn resolve_plain(&self, segments: &[&str], layers: &Inherited<'_>) -> Option<RouteMatch> {
        let entry = self
            .routes
            .iter()
            .filter(|entry| !entry.target.is_child_router())
            .find(|entry| {
                let hit = entry.pattern.matches(segments);
                trace!(pattern = entry.pattern.format(), hit, "tried route");
                hit
            })?;

        let bindings = extract(&entry.pattern, segments);
        let params = merge_params([
            &layers.defaults,
            &entry.options.default_params,
            layers.query,
            &layers.bindings,
            &bindings,
        ]);

        Some(RouteMatch {
            target: entry.target.clone(),
            params,
            options: entry.options.clone(),
            pattern: entry.pattern.clone(),
        })
    }

    fn resolve_child(&self, segments: &[&str], layers: &Inherited<'_>) -> Option<RouteMatch> {
        let (entry, child) = self.routes.iter().find_map(|entry| match &entry.target {
            HandlerTarget::ChildRouter(child)
                if entry.pattern.len() < segments.len()
                    && entry.pattern.accepts_prefix(segments) =>
            {
                Some((entry, child))
            }
            _ => None,
        })?;

        let sub_path = segments[entry.pattern.len()..].join("/");
        let sub_segments: Vec<&str> = split_segments(&sub_path).collect();
        trace!(
            prefix = entry.pattern.format(),
            sub_path = %sub_path,
            "delegating to child router"
        );

        let nested = Inherited {
            defaults: merge_params([&layers.defaults, &entry.options.default_params]),
            query: layers.query,
            bindings: merge_params([&layers.bindings, &extract(&entry.pattern, segments)]),
        };

        // First matching prefix is final: a child miss is a miss here too.
        child.resolve(&sub_segments, &nested)
    }
}

/// Parameter layers handed down through child routers
///
/// Final order, lowest first: `defaults`, leaf defaults, `query`, `bindings`,
/// leaf bindings.
struct Inherited<'q> {
    /// Defaults of enclosing child-router entries, outermost first
    defaults: Params,
    query: &'q Params,
    /// Path bindings of enclosing prefixes, outermost first
    bindings: Params,
}

impl<'q> Inherited<'q> {
    fn root(query: &'q Params) -> Self {
        Self {
            defaults: Params::new(),
            query,
            bindings: Params::new(),
        }
    }
}

// ============================================================================
// Shared Router
// ============================================================================

static SHARED_ROUTER: Lazy<RwLock<Router>> = Lazy::new(|| RwLock::new(Router::new()));

/// Process-wide router, created on first use and never torn down
///
/// Nothing in this crate reads it implicitly; it exists for applications that
/// want a single ambient registry.
pub fn shared_router() -> &'static RwLock<Router> {
    &SHARED_ROUTER
}
