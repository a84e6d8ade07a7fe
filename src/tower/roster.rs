//! Active tower set for hosts that do not bring their own.
//!
//! Towers are ticked sequentially, or across the rayon pool once the roster
//! grows past `parallel_threshold`. Each tower is reached through a unique
//! `&mut` borrow, so no tower is ever updated by two threads at once.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::DEFAULT_PARALLEL_THRESHOLD;
use crate::tower::Tower;

/// Roster-assigned tower identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TowerId(pub u64);

/// Outcome of one roster tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    /// Live towers that were updated
    pub towers: usize,
    /// Component advancements across all towers
    pub advanced: usize,
    /// Component faults raised during this tick
    pub faults: u64,
}

impl TickReport {
    fn combine(self, other: TickReport) -> TickReport {
        TickReport {
            towers: self.towers + other.towers,
            advanced: self.advanced + other.advanced,
            faults: self.faults + other.faults,
        }
    }
}

/// Owns live and dead towers under roster-assigned ids
#[derive(Debug)]
pub struct TowerRoster {
    towers: Vec<(TowerId, Tower)>,
    next_id: u64,
    parallel_threshold: usize,
}

impl Default for TowerRoster {
    fn default() -> Self {
        Self::new(DEFAULT_PARALLEL_THRESHOLD)
    }
}

impl TowerRoster {
    pub fn new(parallel_threshold: usize) -> Self {
        Self {
            towers: Vec::new(),
            next_id: 0,
            parallel_threshold,
        }
    }

    /// Add a tower to the active set
    pub fn spawn(&mut self, tower: Tower) -> TowerId {
        let id = TowerId(self.next_id);
        self.next_id += 1;
        self.towers.push((id, tower));
        id
    }

    pub fn len(&self) -> usize {
        self.towers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.towers.is_empty()
    }

    pub fn get(&self, id: TowerId) -> Option<&Tower> {
        self.towers.iter().find(|(tid, _)| *tid == id).map(|(_, t)| t)
    }

    pub fn get_mut(&mut self, id: TowerId) -> Option<&mut Tower> {
        self.towers
            .iter_mut()
            .find(|(tid, _)| *tid == id)
            .map(|(_, t)| t)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TowerId, &Tower)> {
        self.towers.iter().map(|(id, t)| (*id, t))
    }

    /// Destroy a tower. It stays in the roster until the next `sweep`.
    pub fn kill(&mut self, id: TowerId) -> bool {
        self.get_mut(id).is_some_and(Tower::die)
    }

    /// Tick every live tower, choosing sequential or parallel dispatch
    pub fn tick(&mut self, dtime: f64) -> TickReport {
        if self.towers.len() > self.parallel_threshold {
            self.tick_parallel(dtime)
        } else {
            self.tick_sequential(dtime)
        }
    }

    pub fn tick_sequential(&mut self, dtime: f64) -> TickReport {
        self.towers
            .iter_mut()
            .map(|(_, tower)| tick_one(tower, dtime))
            .fold(TickReport::default(), TickReport::combine)
    }

    pub fn tick_parallel(&mut self, dtime: f64) -> TickReport {
        self.towers
            .par_iter_mut()
            .map(|(_, tower)| tick_one(tower, dtime))
            .reduce(TickReport::default, TickReport::combine)
    }

    /// Remove dead towers, returning their ids in roster order
    pub fn sweep(&mut self) -> Vec<TowerId> {
        let mut removed = Vec::new();
        self.towers.retain(|(id, tower)| {
            if tower.is_dead() {
                removed.push(*id);
                false
            } else {
                true
            }
        });
        if !removed.is_empty() {
            debug!(count = removed.len(), "swept dead towers");
        }
        removed
    }
}

fn tick_one(tower: &mut Tower, dtime: f64) -> TickReport {
    if !tower.is_live() {
        return TickReport::default();
    }
    let faults_before = tower.faults();
    let advanced = tower.update(dtime);
    TickReport {
        towers: 1,
        advanced,
        faults: tower.faults() - faults_before,
    }
}
