//! Edge case & boundary tests
//!
//! Tests behavior at system boundaries:
//! - Absent point / owner → construction error, nothing built
//! - Non-finite placement coordinates
//! - Ticking towers in the wrong lifecycle state
//! - Negative, zero, NaN and huge dtime values
//! - Components added after construction

use tower_core::component::{ActiveSkill, Graphic, Health, PassiveSkill, Power, TargetSkill};
use tower_core::{
    Archetype, Catalog, ComponentKind, ConstructionError, PlacementPoint, PlayerId, Tower,
    TowerFactory, TowerRoster, TowerState,
};

// ============================================================
// Helpers
// ============================================================

fn build(archetype: Archetype) -> Tower {
    Catalog::standard()
        .factory(archetype)
        .create(Some(PlacementPoint::new(5.0, 5.0)), Some(PlayerId(9)))
        .unwrap()
}

// ============================================================
// 1. Construction contract violations
// ============================================================

#[test]
fn every_archetype_rejects_missing_point() {
    let catalog = Catalog::standard();
    for archetype in Archetype::ALL {
        let result = catalog.factory(archetype).create(None, Some(PlayerId(1)));
        assert!(
            matches!(result, Err(ConstructionError::MissingPoint)),
            "{archetype:?} should reject a missing point"
        );
    }
}

#[test]
fn every_archetype_rejects_missing_owner() {
    let catalog = Catalog::standard();
    for archetype in Archetype::ALL {
        let result = catalog
            .factory(archetype)
            .create(Some(PlacementPoint::new(0.0, 0.0)), None);
        assert!(
            matches!(result, Err(ConstructionError::MissingOwner)),
            "{archetype:?} should reject a missing owner"
        );
    }
}

#[test]
fn missing_both_reports_point_first() {
    let result = Catalog::standard().factory(Archetype::Base).create(None, None);
    assert!(matches!(result, Err(ConstructionError::MissingPoint)));
}

#[test]
fn infinite_point_rejected() {
    let result = Catalog::standard()
        .factory(Archetype::Support)
        .create(Some(PlacementPoint::new(f64::INFINITY, 0.0)), Some(PlayerId(1)));
    let err = result.unwrap_err();
    assert!(err.to_string().contains("not a finite board location"));
}

#[test]
fn failed_create_leaves_factory_usable() {
    let catalog = Catalog::standard();
    let factory = catalog.factory(Archetype::Normal);
    assert!(factory.create(None, None).is_err());
    assert_eq!(factory.cost(), 10);
    assert!(factory
        .create(Some(PlacementPoint::new(0.0, 0.0)), Some(PlayerId(1)))
        .is_ok());
}

// ============================================================
// 2. Lifecycle state
// ============================================================

#[test]
fn update_after_die_is_noop() {
    let mut tower = build(Archetype::Moving);
    assert!(tower.die());
    assert_eq!(tower.update(1.0), 0);
    assert_eq!(tower.update(1.0), 0);
    assert_eq!(tower.ticks(), 0);
}

#[test]
fn die_twice_is_same_as_once() {
    let mut once = build(Archetype::Healer);
    let mut twice = build(Archetype::Healer);
    once.die();
    twice.die();
    twice.die();
    assert_eq!(once.state(), twice.state());
    assert_eq!(once.len(), twice.len());
    assert_eq!(once.kinds(), twice.kinds());
}

#[test]
fn dead_tower_has_no_reachable_components() {
    let mut tower = build(Archetype::Missile);
    tower.die();
    assert!(tower.components().next().is_none());
    assert!(tower.get::<Health>().is_none());
    for kind in ComponentKind::ALL {
        assert!(tower.find(kind).is_none());
    }
}

#[test]
fn add_component_after_create_is_rejected() {
    let mut tower = build(Archetype::Protective);
    assert!(!tower.add_component(Box::new(Graphic::new("extra"))));
    assert_eq!(tower.len(), 3);
}

#[test]
fn add_component_on_dead_tower_is_rejected() {
    let mut tower = build(Archetype::Protective);
    tower.die();
    assert!(!tower.add_component(Box::new(Health::new(10.0))));
    assert!(tower.is_empty());
}

#[test]
fn duplicate_categories_are_allowed_during_construction() {
    let mut tower = Tower::constructing(
        Archetype::Protective,
        PlacementPoint::new(0.0, 0.0),
        PlayerId(1),
    );
    assert!(tower.add_component(Box::new(Health::new(100.0))));
    assert!(tower.add_component(Box::new(Health::new(50.0))));
    tower.activate();
    assert_eq!(tower.update(1.0), 2);
    // lookup returns the first one inserted
    assert_eq!(tower.get::<Health>().unwrap().max(), 100.0);
}

#[test]
fn constructing_tower_is_not_ticked_by_roster() {
    let mut roster = TowerRoster::default();
    roster.spawn(Tower::constructing(
        Archetype::Normal,
        PlacementPoint::new(0.0, 0.0),
        PlayerId(1),
    ));
    let report = roster.tick(1.0);
    assert_eq!(report.towers, 0);
    assert_eq!(report.advanced, 0);
}

// ============================================================
// 3. dtime boundaries
// ============================================================

#[test]
fn zero_dtime_still_dispatches() {
    let mut tower = build(Archetype::Normal);
    assert_eq!(tower.update(0.0), 4);
    assert_eq!(tower.ticks(), 1);
}

#[test]
fn negative_dtime_does_not_rewind_cooldowns() {
    let mut tower = build(Archetype::Missile);
    tower.update(10.0);
    tower.update(-100.0);
    let skill = tower.get::<ActiveSkill>().unwrap();
    assert_eq!(skill.cooldown().elapsed(), 10.0);
}

#[test]
fn nan_dtime_does_not_poison_power() {
    let mut tower = build(Archetype::Generator);
    tower.update(f64::NAN);
    tower.update(2.0);
    assert_eq!(tower.get::<Power>().unwrap().stored(), 10.0);
    assert_eq!(tower.faults(), 0);
}

#[test]
fn huge_dtime_saturates_cooldowns() {
    let mut tower = build(Archetype::Moving);
    tower.update(1.0e300);
    let target = tower.get::<TargetSkill>().unwrap();
    assert!(target.cooldown().is_ready());
    let relocate = tower.get::<ActiveSkill>().unwrap();
    assert!(relocate.is_ready());
    assert_eq!(relocate.cooldown().elapsed(), 20.0);
}

#[test]
fn healer_accumulates_over_ticks() {
    let mut tower = build(Archetype::Healer);
    for _ in 0..4 {
        tower.update(0.5);
    }
    let aura = tower.get_mut::<PassiveSkill>().unwrap();
    assert_eq!(aura.drain_heal(), 10.0);
}

#[test]
fn fault_from_corrupted_health_is_contained() {
    let mut tower = build(Archetype::Normal);
    tower.get_mut::<Health>().unwrap().damage(1000.0);
    // depleted health is a valid state, not a fault
    assert_eq!(tower.update(0.1), 4);
    assert_eq!(tower.faults(), 0);
    assert_eq!(tower.state(), TowerState::Live);
}
