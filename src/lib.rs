//! Tower Defense - Composition Core Library
//!
//! Towers are assembled from independently owned components and built by
//! per-archetype factories:
//! - Component contract and stock capabilities (position, graphic, health,
//!   power, targeted/active/passive skills)
//! - Tower aggregate (ownership, per-tick fan-out, teardown)
//! - Archetype factories and the read-only factory catalog
//! - Roster of active towers with optional parallel ticking
//! - Bevy plugin for hosts running a Bevy app
//! - Structured logging and startup configuration

pub mod component;
pub mod constants;
pub mod engine;
pub mod error;
pub mod factory;
pub mod handles;
pub mod logging;
pub mod tower;

pub use component::{Component, ComponentKind};
pub use error::{CatalogError, ComponentFault, ConfigError, ConstructionError};
pub use factory::{Archetype, ArchetypeSpec, Catalog, Factory, Loadout, TowerFactory};
pub use handles::{PlacementPoint, PlayerId};
pub use tower::{Tower, TowerRoster, TowerState};
