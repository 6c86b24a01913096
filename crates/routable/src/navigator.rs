//! Opening URLs on top of a [`Router`].
//!
//! The router only resolves; acting on a match is the job of the caller. A
//! `Navigator` is that caller: it runs callbacks itself and hands
//! constructible targets to a [`Presenter`], which owns view construction,
//! presentation and the operating system's URL opener.
//!
//! # Data Flow
//! ```text
//! open(url)
//!     → Router::match_with
//!     → Callback          → invoke with params       → Opened::Invoked
//!     → Constructible     → Presenter::present        → Opened::Presented
//!     → NoMatch + scheme  → Presenter::open_external  → Opened::External
//!     → NoMatch           → ignore policy             → Opened::Ignored | Err
//! ```

use tracing::{debug, warn};

use crate::config::RouterConfig;
use crate::error::{Result, RouteError};
use crate::options::RouteOptions;
use crate::path::looks_external;
use crate::route::Params;
use crate::target::{HandlerTarget, TargetId};
use crate::Router;

/// Presentation-layer collaborator
pub trait Presenter {
    /// Constructs and shows the view named by `target`
    ///
    /// Returns [`RouteError::MisconfiguredTarget`] when the target cannot be
    /// built, e.g. it is unknown or lacks a parameter initializer.
    fn present(&self, target: &TargetId, params: &Params, options: &RouteOptions) -> Result<()>;

    /// Hands a scheme-qualified URL to the operating system
    fn open_external(&self, url: &str) -> Result<()> {
        Err(RouteError::ExternalUnsupported {
            url: url.to_string(),
        })
    }
}

impl<P: Presenter + ?Sized> Presenter for &P {
    fn present(&self, target: &TargetId, params: &Params, options: &RouteOptions) -> Result<()> {
        (**self).present(target, params, options)
    }

    fn open_external(&self, url: &str) -> Result<()> {
        (**self).open_external(url)
    }
}

/// What `open` did with a URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Opened {
    /// A callback ran
    Invoked,
    /// The presenter showed this target
    Presented(TargetId),
    /// The URL went to the external opener
    External,
    /// Nothing matched and the config says to ignore that
    Ignored,
}

pub struct Navigator<'r, P> {
    router: &'r Router,
    presenter: P,
    config: RouterConfig,
}

impl<'r, P: Presenter> Navigator<'r, P> {
    pub fn new(router: &'r Router, presenter: P) -> Self {
        Self::with_config(router, presenter, RouterConfig::default())
    }

    pub fn with_config(router: &'r Router, presenter: P, config: RouterConfig) -> Self {
        Self {
            router,
            presenter,
            config,
        }
    }

    pub fn router(&self) -> &Router {
        self.router
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn open(&self, url: &str) -> Result<Opened> {
        self.open_with(url, &Params::new())
    }

    /// Opens `url` with call-time arguments that override all other params
    #[tracing::instrument(level = "debug", skip(self, extra))]
    pub fn open_with(&self, url: &str, extra: &Params) -> Result<Opened> {
        let found = match self.router.match_with(url, extra) {
            Ok(found) => found,
            Err(err) => return self.unmatched(url, err),
        };

        match &found.target {
            HandlerTarget::Callback(callback) => {
                callback.call(&found.params);
                Ok(Opened::Invoked)
            }
            HandlerTarget::Constructible(target) => {
                self.presenter.present(target, &found.params, &found.options)?;
                Ok(Opened::Presented(target.clone()))
            }
            // Matching never yields a child router.
            HandlerTarget::ChildRouter(_) => Err(RouteError::no_match(url)),
        }
    }

    /// Hands `url` straight to the presenter's external opener
    pub fn open_external(&self, url: &str) -> Result<()> {
        debug!(url, "opening external url");
        self.presenter.open_external(url)
    }

    fn unmatched(&self, url: &str, err: RouteError) -> Result<Opened> {
        if self.config.open_external_fallback && looks_external(url) {
            self.open_external(url)?;
            return Ok(Opened::External);
        }

        if self.config.ignore_unmatched {
            warn!(url, error = %err, "ignoring unmatched url");
            return Ok(Opened::Ignored);
        }

        Err(err)
    }
}
