//! Engine Integration Layer
//!
//! Wires the composition core into a host:
//!   - `CoreConfig`: startup configuration (catalog file, roster tuning, tracing)
//!   - `TowerPlugin`: Bevy plugin ticking `TowerEntity` components each frame
//!
//! Hosts without Bevy use `TowerRoster` directly.

pub mod config;
pub mod plugin;

pub use config::CoreConfig;
pub use plugin::{TowerEntity, TowerPlugin, TowerRemoved};

use tracing::info;

use crate::error::CatalogError;
use crate::factory::{catalog, Catalog};
use crate::logging;
use crate::tower::TowerRoster;

/// Apply a config at startup: initialize tracing, install the global catalog
/// and return an empty roster tuned by the config.
///
/// Fails with `CatalogError::AlreadyInstalled` when an earlier install left a
/// catalog that differs from the one this config describes. Re-applying a
/// config whose catalog matches the installed one succeeds.
pub fn bootstrap(config: &CoreConfig) -> Result<TowerRoster, CatalogError> {
    logging::init_tracing(&config.tracing);
    let catalog = Catalog::from_config(config)?;
    if let Err(rejected) = catalog::install(catalog) {
        if rejected != *catalog::global() {
            return Err(CatalogError::AlreadyInstalled);
        }
    }
    info!(
        source = ?config.catalog_path,
        parallel_threshold = config.parallel_threshold,
        "tower catalog active"
    );
    Ok(TowerRoster::new(config.parallel_threshold))
}

// =====================================================
// Tests
// =====================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = CoreConfig::default();
        assert!(config.catalog_path.is_none());
        assert_eq!(config.parallel_threshold, 256);
    }

    #[test]
    fn test_config_json_partial() {
        let config = CoreConfig::from_json_str(r#"{ "parallel_threshold": 8 }"#).unwrap();
        assert_eq!(config.parallel_threshold, 8);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_config_ron() {
        let config =
            CoreConfig::from_ron_str(r#"(catalog_path: Some("towers.ron"), parallel_threshold: 32)"#)
                .unwrap();
        assert_eq!(config.parallel_threshold, 32);
        assert_eq!(
            config.catalog_path.as_deref(),
            Some(std::path::Path::new("towers.ron"))
        );
    }

    #[test]
    fn test_config_missing_file() {
        let err = CoreConfig::load("missing/config.ron").unwrap_err();
        assert!(matches!(err, crate::error::ConfigError::Io(_)));
    }

    #[test]
    fn test_bootstrap_default() {
        let roster = bootstrap(&CoreConfig::default()).unwrap();
        assert!(roster.is_empty());
        assert_eq!(catalog::global().iter().count(), 10);
    }

    #[test]
    fn test_bootstrap_twice_with_same_catalog() {
        assert!(bootstrap(&CoreConfig::default()).is_ok());
        assert!(bootstrap(&CoreConfig::default()).is_ok());
    }

    #[test]
    fn test_bootstrap_missing_catalog_file() {
        let config = CoreConfig {
            catalog_path: Some("does/not/exist.ron".into()),
            ..Default::default()
        };
        assert!(matches!(bootstrap(&config), Err(CatalogError::Io(_))));
    }
}
