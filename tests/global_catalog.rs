//! Process-wide catalog shared by `bootstrap`, `TowerPlugin` and direct readers.
//!
//! Kept in its own test binary: the global catalog can only be installed once
//! per process, so the whole sequence runs in a single test.

use std::fs;

use bevy::prelude::App;
use tower_core::engine::{self, CoreConfig, TowerPlugin};
use tower_core::factory::catalog;
use tower_core::{Archetype, Catalog, CatalogError, TowerFactory};

#[test]
fn installed_catalog_is_shared_everywhere() -> anyhow::Result<()> {
    let mut file = Catalog::standard().to_file();
    file.towers[Archetype::Normal.index()].cost = 99;
    let custom = Catalog::from_specs(file.towers.clone())?;

    assert!(catalog::install(custom.clone()).is_ok());
    assert_eq!(catalog::global().factory(Archetype::Normal).cost(), 99);

    // plugin picks up the installed catalog
    let mut app = App::new();
    app.add_plugins(TowerPlugin);
    let resource = app.world().resource::<Catalog>();
    assert_eq!(resource.factory(Archetype::Normal).cost(), 99);
    assert_eq!(resource, &custom);

    // a config describing a different catalog is refused
    let err = engine::bootstrap(&CoreConfig::default()).unwrap_err();
    assert!(matches!(err, CatalogError::AlreadyInstalled));

    // a config describing the installed catalog is accepted
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("towers.json");
    fs::write(&path, serde_json::to_string(&custom.to_file())?)?;
    let config = CoreConfig {
        catalog_path: Some(path),
        ..Default::default()
    };
    let roster = engine::bootstrap(&config)?;
    assert!(roster.is_empty());
    assert_eq!(catalog::global(), &custom);
    Ok(())
}
