//! Error types for the composition core.
//!
//! Only construction and catalog/config loading can fail outward. Tower
//! updates and teardown are total; component faults are reported to the
//! owning tower and stop there.

use std::collections::TryReserveError;

use crate::component::ComponentKind;
use crate::factory::Archetype;

/// Why a factory refused to build a tower
#[derive(Debug, thiserror::Error)]
pub enum ConstructionError {
    #[error("placement point is missing")]
    MissingPoint,
    #[error("owning player is missing")]
    MissingOwner,
    #[error("placement point ({x}, {y}) is not a finite board location")]
    InvalidPoint { x: f64, y: f64 },
    #[error("could not reserve storage for {archetype:?} components: {source}")]
    Allocation {
        archetype: Archetype,
        #[source]
        source: TryReserveError,
    },
}

/// Invalid internal state detected by a component during its own update
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind:?} component fault: {reason}")]
pub struct ComponentFault {
    pub kind: ComponentKind,
    pub reason: String,
}

impl ComponentFault {
    pub fn new(kind: ComponentKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            reason: reason.into(),
        }
    }
}

/// Error type for loading and validating factory catalogs
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported catalog file extension: {0}")]
    UnsupportedFormat(String),
    #[error("invalid {archetype:?} descriptor: {reason}")]
    Invalid { archetype: Archetype, reason: String },
    #[error("{archetype:?} descriptor carries a {found} loadout")]
    LoadoutMismatch {
        archetype: Archetype,
        found: &'static str,
    },
    #[error("archetype {0:?} is missing from the catalog")]
    Missing(Archetype),
    #[error("archetype {0:?} is described more than once")]
    Duplicate(Archetype),
    #[error("a different tower catalog is already installed for this process")]
    AlreadyInstalled,
}

/// Error type for loading `CoreConfig`
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported config file extension: {0}")]
    UnsupportedFormat(String),
}
