use bevy::prelude::*;

use crate::factory::{catalog, Archetype, Catalog};
use crate::handles::PlayerId;
use crate::tower::Tower;

/// Drives towers from a Bevy app: every `Update` each `TowerEntity` is ticked
/// with the frame delta, then dead towers are despawned and announced.
///
/// The host must provide `Time` (e.g. via `MinimalPlugins`). Unless a
/// `Catalog` resource is inserted first, the process-wide catalog is copied
/// in, so the ECS and `catalog::global()` agree.
pub struct TowerPlugin;

impl Plugin for TowerPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<Catalog>() {
            app.insert_resource(catalog::global().clone());
        }
        app.add_event::<TowerRemoved>()
            .add_systems(Update, (tick_towers, despawn_dead_towers).chain());
    }
}

/// A tower living on a Bevy entity
#[derive(Component, Debug)]
pub struct TowerEntity(pub Tower);

/// Sent once when a dead tower's entity is despawned
#[derive(Event, Debug, Clone)]
pub struct TowerRemoved {
    pub entity: Entity,
    pub archetype: Archetype,
    pub owner: PlayerId,
}

fn tick_towers(time: Res<Time>, mut towers: Query<&mut TowerEntity>) {
    let dt = time.delta_secs_f64();
    for mut tower in &mut towers {
        tower.0.update(dt);
    }
}

fn despawn_dead_towers(
    mut commands: Commands,
    towers: Query<(Entity, &TowerEntity)>,
    mut removed: EventWriter<TowerRemoved>,
) {
    for (entity, tower) in &towers {
        if tower.0.is_dead() {
            commands.entity(entity).despawn();
            removed.send(TowerRemoved {
                entity,
                archetype: tower.0.archetype(),
                owner: tower.0.owner(),
            });
        }
    }
}
