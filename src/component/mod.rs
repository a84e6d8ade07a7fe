//! Tower Components
//!
//! A tower is nothing but an ordered bag of components. Each component is one
//! orthogonal capability (where the tower stands, how it is drawn, how much
//! damage it can take, what it fires) and identifies itself by a fixed
//! category tag.
//!
//! Stock capabilities:
//! - `Position`: placement on the board
//! - `Graphic`: sprite key and animation clock
//! - `Health`: hit points
//! - `Power`: resource accumulation
//! - `TargetSkill`: auto-attack against enemies in range
//! - `ActiveSkill`: triggered abilities gated by a cooldown
//! - `PassiveSkill`: auras applied to allied towers
//!
//! Hosts can attach their own components under `Accessory` or `Other`.

use std::any::Any;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ComponentFault;

pub mod graphic;
pub mod health;
pub mod position;
pub mod power;
pub mod skill;

pub use graphic::Graphic;
pub use health::Health;
pub use position::Position;
pub use power::{Power, PowerSource};
pub use skill::{ActiveSkill, ActiveSkillKind, Aura, Cooldown, PassiveSkill, Shot, TargetSkill};

/// Component category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComponentKind {
    Position,
    Graphic,
    Accessory,
    Health,
    Power,
    ActiveSkill,
    PassiveSkill,
    TargetSkill,
    Other,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 9] = [
        ComponentKind::Position,
        ComponentKind::Graphic,
        ComponentKind::Accessory,
        ComponentKind::Health,
        ComponentKind::Power,
        ComponentKind::ActiveSkill,
        ComponentKind::PassiveSkill,
        ComponentKind::TargetSkill,
        ComponentKind::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Position => "position",
            ComponentKind::Graphic => "graphic",
            ComponentKind::Accessory => "accessory",
            ComponentKind::Health => "health",
            ComponentKind::Power => "power",
            ComponentKind::ActiveSkill => "active_skill",
            ComponentKind::PassiveSkill => "passive_skill",
            ComponentKind::TargetSkill => "target_skill",
            ComponentKind::Other => "other",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Downcasting support for concrete component lookups
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A capability owned by exactly one tower.
///
/// `kind` must return the same tag for the whole lifetime of the value.
/// `update` is called once per tower tick with the tick's elapsed seconds;
/// an `Err` is reported by the tower and never stops sibling components.
pub trait Component: AsAny + Send + Sync + fmt::Debug {
    fn kind(&self) -> ComponentKind;

    fn update(&mut self, _dtime: f64) -> Result<(), ComponentFault> {
        Ok(())
    }
}
