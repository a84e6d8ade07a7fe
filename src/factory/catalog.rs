//! Factory Catalog
//!
//! The catalog holds exactly one factory per archetype. It is built once
//! (stock tunables or a validated descriptor file) and only read afterwards.
//! A process-wide instance can be installed at startup; readers that never
//! install one get the stock catalog.

use std::path::Path;
use std::sync::OnceLock;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::engine::config::CoreConfig;
use crate::error::CatalogError;
use crate::factory::{Archetype, ArchetypeSpec, Factory, TowerFactory};

/// On-disk catalog layout (RON or JSON)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub towers: Vec<ArchetypeSpec>,
}

/// Read-only registry of archetype factories
#[derive(Debug, Clone, PartialEq, Resource)]
pub struct Catalog {
    /// Indexed by `Archetype::index`
    factories: Vec<Factory>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    /// Catalog with the stock tunables
    pub fn standard() -> Self {
        Self {
            factories: Archetype::ALL.iter().map(|a| Factory::standard(*a)).collect(),
        }
    }

    /// Build from descriptors; every archetype must appear exactly once
    pub fn from_specs(specs: Vec<ArchetypeSpec>) -> Result<Self, CatalogError> {
        let mut slots: Vec<Option<Factory>> = vec![None; Archetype::ALL.len()];
        for spec in specs {
            let slot = &mut slots[spec.archetype.index()];
            if slot.is_some() {
                return Err(CatalogError::Duplicate(spec.archetype));
            }
            *slot = Some(Factory::new(spec)?);
        }

        let factories = slots
            .into_iter()
            .zip(Archetype::ALL)
            .map(|(slot, archetype)| slot.ok_or(CatalogError::Missing(archetype)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { factories })
    }

    pub fn from_ron_str(text: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = ron::from_str(text)?;
        Self::from_specs(file.towers)
    }

    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(text)?;
        Self::from_specs(file.towers)
    }

    /// Load a `.ron` or `.json` catalog file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let catalog = match path.extension().and_then(|e| e.to_str()) {
            Some("ron") => Self::from_ron_str(&text)?,
            Some("json") => Self::from_json_str(&text)?,
            other => {
                return Err(CatalogError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                ))
            }
        };
        info!(path = %path.display(), "loaded tower catalog");
        Ok(catalog)
    }

    /// Catalog named by the config, or the stock one if none is configured
    pub fn from_config(config: &CoreConfig) -> Result<Self, CatalogError> {
        match &config.catalog_path {
            Some(path) => Self::load(path),
            None => Ok(Self::standard()),
        }
    }

    pub fn to_file(&self) -> CatalogFile {
        CatalogFile {
            towers: self.factories.iter().map(|f| *f.spec()).collect(),
        }
    }

    pub fn to_ron_string(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(&self.to_file(), ron::ser::PrettyConfig::default())
    }

    pub fn factory(&self, archetype: Archetype) -> &Factory {
        &self.factories[archetype.index()]
    }

    /// Factories in `Archetype::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = &Factory> {
        self.factories.iter()
    }

    /// Archetypes whose cost fits within `budget`
    pub fn affordable(&self, budget: u32) -> Vec<Archetype> {
        self.factories
            .iter()
            .filter(|f| f.cost() <= budget)
            .map(|f| f.archetype())
            .collect()
    }
}

static GLOBAL: OnceLock<Catalog> = OnceLock::new();

/// Install the process-wide catalog. Only the first install wins; a later
/// catalog is handed back unchanged.
pub fn install(catalog: Catalog) -> Result<(), Catalog> {
    GLOBAL.set(catalog).inspect_err(|_| {
        warn!("tower catalog already installed; keeping the existing one");
    })
}

/// The process-wide catalog (stock tunables unless one was installed first)
pub fn global() -> &'static Catalog {
    GLOBAL.get_or_init(Catalog::standard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::Loadout;

    #[test]
    fn test_standard_has_every_archetype() {
        let catalog = Catalog::standard();
        for archetype in Archetype::ALL {
            assert_eq!(catalog.factory(archetype).archetype(), archetype);
        }
        assert_eq!(catalog.iter().count(), 10);
    }

    #[test]
    fn test_standard_costs_and_cooldowns() {
        let catalog = Catalog::standard();
        let table = [
            (Archetype::Normal, 10, 10),
            (Archetype::LongRange, 15, 10),
            (Archetype::Protective, 15, 10),
            (Archetype::Missile, 25, 30),
            (Archetype::Support, 15, 10),
            (Archetype::Moving, 25, 40),
            (Archetype::Healer, 20, 20),
            (Archetype::Enlarger, 20, 20),
            (Archetype::Generator, 10, 10),
            (Archetype::Base, 10, 10),
        ];
        for (archetype, cost, cd) in table {
            let factory = catalog.factory(archetype);
            assert_eq!(factory.cost(), cost, "{archetype:?} cost");
            assert_eq!(factory.cd(), cd, "{archetype:?} cd");
        }
    }

    #[test]
    fn test_affordable() {
        let catalog = Catalog::standard();
        let cheap = catalog.affordable(10);
        assert_eq!(
            cheap,
            vec![Archetype::Normal, Archetype::Generator, Archetype::Base]
        );
        assert!(catalog.affordable(0).is_empty());
        assert_eq!(catalog.affordable(u32::MAX).len(), 10);
    }

    #[test]
    fn test_ron_round_trip() {
        let catalog = Catalog::standard();
        let text = catalog.to_ron_string().unwrap();
        assert_eq!(Catalog::from_ron_str(&text).unwrap(), catalog);
    }

    #[test]
    fn test_missing_archetype() {
        let mut specs = Catalog::standard().to_file().towers;
        specs.retain(|s| s.archetype != Archetype::Healer);
        assert!(matches!(
            Catalog::from_specs(specs),
            Err(CatalogError::Missing(Archetype::Healer))
        ));
    }

    #[test]
    fn test_duplicate_archetype() {
        let mut specs = Catalog::standard().to_file().towers;
        specs.push(ArchetypeSpec::standard(Archetype::Base));
        assert!(matches!(
            Catalog::from_specs(specs),
            Err(CatalogError::Duplicate(Archetype::Base))
        ));
    }

    #[test]
    fn test_custom_tunables() {
        let mut specs = Catalog::standard().to_file().towers;
        specs[Archetype::Support.index()].loadout = Loadout::Support {
            radius: 150.0,
            multiply: 3.0,
        };
        let catalog = Catalog::from_specs(specs).unwrap();
        assert_eq!(
            *catalog.factory(Archetype::Support).loadout(),
            Loadout::Support {
                radius: 150.0,
                multiply: 3.0
            }
        );
    }

    #[test]
    fn test_global_defaults_to_standard() {
        assert_eq!(global().iter().count(), 10);
    }
}
