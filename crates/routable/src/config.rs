//! Router configuration types

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Caller-side policy for URLs that do not resolve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Report unmatched URLs as `Opened::Ignored` instead of an error
    pub ignore_unmatched: bool,

    /// Send unmatched scheme-qualified URLs to the external opener
    pub open_external_fallback: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            ignore_unmatched: false,
            open_external_fallback: true,
        }
    }
}

/// TOML document holding an optional `[router]` table
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    router: RouterConfig,
}

impl RouterConfig {
    /// Parses the `[router]` table of a TOML document
    ///
    /// ```
    /// use routable::RouterConfig;
    ///
    /// let config = RouterConfig::from_toml_str("[router]\nignore_unmatched = true\n").unwrap();
    /// assert!(config.ignore_unmatched);
    /// assert!(config.open_external_fallback);
    /// ```
    pub fn from_toml_str(source: &str) -> anyhow::Result<Self> {
        let file: ConfigFile = toml::from_str(source).context("invalid router configuration")?;
        Ok(file.router)
    }

    /// Reads a TOML file; see [`from_toml_str`](Self::from_toml_str)
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let config = Self::from_toml_str(&source)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded router config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_table_uses_defaults() {
        let config = RouterConfig::from_toml_str("[other]\nkey = 1\n").unwrap();
        assert_eq!(config, RouterConfig::default());
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(RouterConfig::from_toml_str("").unwrap(), RouterConfig::default());
    }

    #[test]
    fn test_full_table() {
        let config = RouterConfig::from_toml_str(
            "[router]\nignore_unmatched = true\nopen_external_fallback = false\n",
        )
        .unwrap();
        assert!(config.ignore_unmatched);
        assert!(!config.open_external_fallback);
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        let err = RouterConfig::from_toml_str("[router]\nignore_unmatched = \"yes\"\n").unwrap_err();
        assert!(err.to_string().contains("invalid router configuration"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = RouterConfig::load("/nonexistent/routable.toml").unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("routable-config-{}.toml", std::process::id()));
        std::fs::write(&path, "[router]\nignore_unmatched = true\n").unwrap();

        let config = RouterConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(config.ignore_unmatched);
    }
}
