//! Tower Aggregate
//!
//! A tower owns an ordered list of components and drives them:
//! - `add_component` while the tower is being assembled
//! - `update` fans one tick out to every component, in insertion order
//! - `die` releases every component; afterwards the tower is inert
//!
//! Lifecycle: Constructing → Live → Dead. Calls made in the wrong state are
//! no-ops, never panics: ticking a tower that was destroyed earlier in the
//! same frame is an ordinary race in the game loop.

use std::collections::TryReserveError;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::component::{Component, ComponentKind};
use crate::factory::Archetype;
use crate::handles::{PlacementPoint, PlayerId};

pub mod roster;

pub use roster::{TickReport, TowerId, TowerRoster};

/// Tower lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TowerState {
    Constructing,
    Live,
    Dead,
}

/// Composite of exclusively owned components
#[derive(Debug)]
pub struct Tower {
    archetype: Archetype,
    owner: PlayerId,
    origin: PlacementPoint,
    state: TowerState,
    components: Vec<Box<dyn Component>>,
    ticks: u64,
    faults: u64,
}

impl Tower {
    /// Start assembling a tower. Components can be added until `activate`.
    pub fn constructing(archetype: Archetype, origin: PlacementPoint, owner: PlayerId) -> Self {
        Self {
            archetype,
            owner,
            origin,
            state: TowerState::Constructing,
            components: Vec::new(),
            ticks: 0,
            faults: 0,
        }
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    /// The point the tower was built on. `Position` tracks where it is now.
    pub fn origin(&self) -> PlacementPoint {
        self.origin
    }

    pub fn state(&self) -> TowerState {
        self.state
    }

    pub fn is_live(&self) -> bool {
        self.state == TowerState::Live
    }

    pub fn is_dead(&self) -> bool {
        self.state == TowerState::Dead
    }

    /// Number of `update` calls that reached the components
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Component faults reported since construction
    pub fn faults(&self) -> u64 {
        self.faults
    }

    /// Reserve slots for `additional` components without aborting on failure
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.components.try_reserve(additional)
    }

    /// Take ownership of a component. Only accepted while Constructing; in
    /// any other state the component is dropped and `false` is returned.
    pub fn add_component(&mut self, component: Box<dyn Component>) -> bool {
        if self.state != TowerState::Constructing {
            debug!(
                archetype = ?self.archetype,
                kind = %component.kind(),
                state = ?self.state,
                "rejected component on finalized tower"
            );
            return false;
        }
        self.components.push(component);
        true
    }

    /// Finish construction. Has no effect unless the tower is Constructing.
    pub fn activate(&mut self) -> bool {
        if self.state != TowerState::Constructing {
            return false;
        }
        self.state = TowerState::Live;
        true
    }

    /// Advance every owned component by `dtime` seconds, in insertion order.
    ///
    /// Returns how many components were advanced: all of them when Live,
    /// zero otherwise. Negative or non-finite `dtime` is treated as zero.
    /// Component faults are logged and counted; the remaining components
    /// still advance.
    pub fn update(&mut self, dtime: f64) -> usize {
        if self.state != TowerState::Live {
            return 0;
        }
        let dtime = sanitize_dtime(dtime);

        for component in self.components.iter_mut() {
            if let Err(fault) = component.update(dtime) {
                self.faults += 1;
                warn!(archetype = ?self.archetype, owner = self.owner.0, %fault, "component fault");
            }
        }
        self.ticks += 1;
        self.components.len()
    }

    /// Tear the tower down: every component is dropped and the tower stops
    /// updating. Returns `true` only for the call that performed teardown.
    pub fn die(&mut self) -> bool {
        if self.state == TowerState::Dead {
            return false;
        }
        let released = self.components.len();
        self.components.clear();
        self.components.shrink_to_fit();
        self.state = TowerState::Dead;
        info!(archetype = ?self.archetype, owner = self.owner.0, released, "tower destroyed");
        true
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Components in insertion order
    pub fn components(&self) -> impl Iterator<Item = &(dyn Component + 'static)> + '_ {
        self.components.iter().map(|c| c.as_ref())
    }

    /// Categories in insertion order
    pub fn kinds(&self) -> Vec<ComponentKind> {
        self.components.iter().map(|c| c.kind()).collect()
    }

    pub fn has(&self, kind: ComponentKind) -> bool {
        self.components.iter().any(|c| c.kind() == kind)
    }

    /// First component of the given category
    pub fn find(&self, kind: ComponentKind) -> Option<&dyn Component> {
        self.components().find(|c| c.kind() == kind)
    }

    /// First component of concrete type `T`
    pub fn get<T: Component + 'static>(&self) -> Option<&T> {
        self.components
            .iter()
            .find_map(|c| (**c).as_any().downcast_ref::<T>())
    }

    /// First component of concrete type `T`, mutably
    pub fn get_mut<T: Component + 'static>(&mut self) -> Option<&mut T> {
        self.components
            .iter_mut()
            .find_map(|c| (**c).as_any_mut().downcast_mut::<T>())
    }
}

fn sanitize_dtime(dtime: f64) -> f64 {
    if dtime.is_finite() && dtime > 0.0 {
        dtime
    } else {
        0.0
    }
}
