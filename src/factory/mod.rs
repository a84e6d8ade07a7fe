//! Tower Factories
//!
//! One factory per archetype. A factory is a frozen `ArchetypeSpec` plus the
//! wiring recipe that turns it into components:
//!
//! | Loadout  | Components beyond Position + Graphic + Health |
//! |----------|-----------------------------------------------|
//! | Turret   | TargetSkill                                    |
//! | Bulwark  | none                                           |
//! | Missile  | ActiveSkill (missile strike)                   |
//! | Support  | PassiveSkill (damage boost)                    |
//! | Mobile   | TargetSkill, ActiveSkill (relocate)            |
//! | Healer   | PassiveSkill (heal)                            |
//! | Power    | Power                                          |
//!
//! Cost and cooldown are only reported; charging the player and gating
//! rebuilds is the host build system's job.

use tracing::debug;

use crate::component::{
    ActiveSkill, ActiveSkillKind, Aura, Graphic, Health, PassiveSkill, Position, Power,
    PowerSource, TargetSkill,
};
use crate::error::{CatalogError, ConstructionError};
use crate::handles::{PlacementPoint, PlayerId};
use crate::tower::Tower;

pub mod archetype;
pub mod catalog;

pub use archetype::{Archetype, ArchetypeSpec, Loadout};
pub use catalog::Catalog;

/// Construction contract shared by every archetype
pub trait TowerFactory: Send + Sync {
    fn archetype(&self) -> Archetype;

    /// Build cooldown (`GetCD`)
    fn cd(&self) -> u32;

    /// Resource cost (`GetCOST`)
    fn cost(&self) -> u32;

    /// Build a Live tower at `point` owned by `owner`. Either argument being
    /// absent is a construction error and nothing is built.
    fn create(
        &self,
        point: Option<PlacementPoint>,
        owner: Option<PlayerId>,
    ) -> Result<Tower, ConstructionError>;
}

/// Data-driven factory for a single archetype
#[derive(Debug, Clone, PartialEq)]
pub struct Factory {
    spec: ArchetypeSpec,
}

impl Factory {
    pub fn new(spec: ArchetypeSpec) -> Result<Self, CatalogError> {
        spec.validate()?;
        Ok(Self { spec })
    }

    pub fn standard(archetype: Archetype) -> Self {
        Self {
            spec: ArchetypeSpec::standard(archetype),
        }
    }

    pub fn spec(&self) -> &ArchetypeSpec {
        &self.spec
    }

    pub fn hp(&self) -> u32 {
        self.spec.hp
    }

    pub fn loadout(&self) -> &Loadout {
        &self.spec.loadout
    }

    fn wire(&self, tower: &mut Tower, point: PlacementPoint) {
        let archetype = self.spec.archetype;
        tower.add_component(Box::new(Position::new(point)));
        tower.add_component(Box::new(Graphic::new(archetype.sprite_key())));
        tower.add_component(Box::new(Health::new(self.spec.hp as f64)));

        match self.spec.loadout {
            Loadout::Turret {
                dmg,
                radius,
                attack_cd,
            } => {
                tower.add_component(Box::new(TargetSkill::new(dmg, radius, attack_cd)));
            }
            Loadout::Bulwark => {}
            Loadout::Missile { skill_cd } => {
                tower.add_component(Box::new(ActiveSkill::new(
                    ActiveSkillKind::MissileStrike,
                    skill_cd,
                )));
            }
            Loadout::Support { radius, multiply } => {
                tower.add_component(Box::new(PassiveSkill::new(
                    Aura::DamageBoost { multiply },
                    radius,
                )));
            }
            Loadout::Mobile {
                dmg,
                radius,
                attack_cd,
                skill_cd,
            } => {
                tower.add_component(Box::new(TargetSkill::new(dmg, radius, attack_cd)));
                tower.add_component(Box::new(ActiveSkill::new(
                    ActiveSkillKind::Relocate,
                    skill_cd,
                )));
            }
            Loadout::Healer { radius, heal_speed } => {
                tower.add_component(Box::new(PassiveSkill::new(
                    Aura::Heal {
                        per_second: heal_speed,
                    },
                    radius,
                )));
            }
            Loadout::Power { enlarge_speed } => {
                let source = archetype.power_source().unwrap_or(PowerSource::Generation);
                tower.add_component(Box::new(Power::new(source, enlarge_speed)));
            }
        }
    }
}

impl TowerFactory for Factory {
    fn archetype(&self) -> Archetype {
        self.spec.archetype
    }

    fn cd(&self) -> u32 {
        self.spec.cd
    }

    fn cost(&self) -> u32 {
        self.spec.cost
    }

    fn create(
        &self,
        point: Option<PlacementPoint>,
        owner: Option<PlayerId>,
    ) -> Result<Tower, ConstructionError> {
        let point = point.ok_or(ConstructionError::MissingPoint)?;
        let owner = owner.ok_or(ConstructionError::MissingOwner)?;
        if !point.is_finite() {
            return Err(ConstructionError::InvalidPoint {
                x: point.x,
                y: point.y,
            });
        }

        let archetype = self.spec.archetype;
        let mut tower = Tower::constructing(archetype, point, owner);
        tower
            .try_reserve(self.spec.component_count())
            .map_err(|source| ConstructionError::Allocation { archetype, source })?;

        self.wire(&mut tower, point);
        tower.activate();

        debug!(
            ?archetype,
            owner = owner.0,
            x = point.x,
            y = point.y,
            components = tower.len(),
            "tower created"
        );
        Ok(tower)
    }
}
