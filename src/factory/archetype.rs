//! Archetype descriptors: the data table a factory is parameterized by.

use serde::{Deserialize, Serialize};

use crate::component::PowerSource;
use crate::constants::*;
use crate::error::CatalogError;

/// The ten tower kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Archetype {
    Normal,
    LongRange,
    Protective,
    Missile,
    Support,
    Moving,
    Healer,
    Enlarger,
    Generator,
    Base,
}

impl Archetype {
    pub const ALL: [Archetype; 10] = [
        Archetype::Normal,
        Archetype::LongRange,
        Archetype::Protective,
        Archetype::Missile,
        Archetype::Support,
        Archetype::Moving,
        Archetype::Healer,
        Archetype::Enlarger,
        Archetype::Generator,
        Archetype::Base,
    ];

    /// Position in `ALL`
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Sprite key handed to the `Graphic` component
    pub fn sprite_key(&self) -> &'static str {
        match self {
            Archetype::Normal => "tower/normal",
            Archetype::LongRange => "tower/long_range",
            Archetype::Protective => "tower/protective",
            Archetype::Missile => "tower/missile",
            Archetype::Support => "tower/support",
            Archetype::Moving => "tower/moving",
            Archetype::Healer => "tower/healer",
            Archetype::Enlarger => "tower/enlarger",
            Archetype::Generator => "tower/generator",
            Archetype::Base => "tower/base",
        }
    }

    /// Whether a loadout has the stat set this archetype is wired from
    pub fn accepts(&self, loadout: &Loadout) -> bool {
        matches!(
            (self, loadout),
            (
                Archetype::Normal | Archetype::LongRange | Archetype::Base,
                Loadout::Turret { .. }
            ) | (Archetype::Protective, Loadout::Bulwark)
                | (Archetype::Missile, Loadout::Missile { .. })
                | (Archetype::Support, Loadout::Support { .. })
                | (Archetype::Moving, Loadout::Mobile { .. })
                | (Archetype::Healer, Loadout::Healer { .. })
                | (Archetype::Enlarger | Archetype::Generator, Loadout::Power { .. })
        )
    }

    /// Output kind of the power component, for resource archetypes
    pub fn power_source(&self) -> Option<PowerSource> {
        match self {
            Archetype::Enlarger => Some(PowerSource::Mining),
            Archetype::Generator => Some(PowerSource::Generation),
            _ => None,
        }
    }
}

/// Archetype-specific stats beyond HP, CD and COST
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Loadout {
    /// Auto-attacking turret (Normal, LongRange, Base)
    Turret {
        dmg: f64,
        radius: f64,
        attack_cd: f64,
    },
    /// Pure wall, no skills (Protective)
    Bulwark,
    /// Triggered strike (Missile)
    Missile { skill_cd: f64 },
    /// Damage aura (Support)
    Support { radius: f64, multiply: f64 },
    /// Turret that can relocate (Moving)
    Mobile {
        dmg: f64,
        radius: f64,
        attack_cd: f64,
        skill_cd: f64,
    },
    /// Healing aura (Healer)
    Healer { radius: f64, heal_speed: f64 },
    /// Resource production (Enlarger, Generator)
    Power { enlarge_speed: f64 },
}

impl Loadout {
    pub fn name(&self) -> &'static str {
        match self {
            Loadout::Turret { .. } => "turret",
            Loadout::Bulwark => "bulwark",
            Loadout::Missile { .. } => "missile",
            Loadout::Support { .. } => "support",
            Loadout::Mobile { .. } => "mobile",
            Loadout::Healer { .. } => "healer",
            Loadout::Power { .. } => "power",
        }
    }

    /// Components wired on top of position, graphic and health
    pub fn extra_components(&self) -> usize {
        match self {
            Loadout::Bulwark => 0,
            Loadout::Mobile { .. } => 2,
            _ => 1,
        }
    }

    /// Named stats, for validation and logging
    fn stats(&self) -> Vec<(&'static str, f64)> {
        match *self {
            Loadout::Turret {
                dmg,
                radius,
                attack_cd,
            } => vec![("dmg", dmg), ("radius", radius), ("attack_cd", attack_cd)],
            Loadout::Bulwark => vec![],
            Loadout::Missile { skill_cd } => vec![("skill_cd", skill_cd)],
            Loadout::Support { radius, multiply } => {
                vec![("radius", radius), ("multiply", multiply)]
            }
            Loadout::Mobile {
                dmg,
                radius,
                attack_cd,
                skill_cd,
            } => vec![
                ("dmg", dmg),
                ("radius", radius),
                ("attack_cd", attack_cd),
                ("skill_cd", skill_cd),
            ],
            Loadout::Healer { radius, heal_speed } => {
                vec![("radius", radius), ("heal_speed", heal_speed)]
            }
            Loadout::Power { enlarge_speed } => vec![("enlarge_speed", enlarge_speed)],
        }
    }
}

/// Everything a factory needs to build one archetype
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeSpec {
    pub archetype: Archetype,
    pub hp: u32,
    /// Build cooldown in seconds, enforced by the host's build system
    pub cd: u32,
    /// Resource cost, charged by the host's economy
    pub cost: u32,
    pub loadout: Loadout,
}

impl ArchetypeSpec {
    /// Number of components a tower of this spec carries
    pub fn component_count(&self) -> usize {
        3 + self.loadout.extra_components()
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if !self.archetype.accepts(&self.loadout) {
            return Err(CatalogError::LoadoutMismatch {
                archetype: self.archetype,
                found: self.loadout.name(),
            });
        }
        if self.hp == 0 {
            return Err(self.invalid("hp must be positive"));
        }
        for (name, value) in self.loadout.stats() {
            if !value.is_finite() || value <= 0.0 {
                return Err(self.invalid(format!("{name} must be a positive number, got {value}")));
            }
        }
        Ok(())
    }

    fn invalid(&self, reason: impl Into<String>) -> CatalogError {
        CatalogError::Invalid {
            archetype: self.archetype,
            reason: reason.into(),
        }
    }

    /// Stock tunables for an archetype
    pub fn standard(archetype: Archetype) -> Self {
        let turret = Loadout::Turret {
            dmg: TURRET_DMG,
            radius: TURRET_RADIUS,
            attack_cd: TURRET_ATTACK_CD,
        };
        let (hp, cd, cost, loadout) = match archetype {
            Archetype::Normal => (STANDARD_HP, NORMAL_CD, NORMAL_COST, turret),
            Archetype::LongRange => (
                LONG_RANGE_HP,
                LONG_RANGE_CD,
                LONG_RANGE_COST,
                Loadout::Turret {
                    dmg: TURRET_DMG,
                    radius: LONG_RANGE_RADIUS,
                    attack_cd: TURRET_ATTACK_CD,
                },
            ),
            Archetype::Protective => (
                PROTECTIVE_HP,
                PROTECTIVE_CD,
                PROTECTIVE_COST,
                Loadout::Bulwark,
            ),
            Archetype::Missile => (
                STANDARD_HP,
                MISSILE_CD,
                MISSILE_COST,
                Loadout::Missile {
                    skill_cd: MISSILE_SKILL_CD,
                },
            ),
            Archetype::Support => (
                STANDARD_HP,
                SUPPORT_CD,
                SUPPORT_COST,
                Loadout::Support {
                    radius: SUPPORT_RADIUS,
                    multiply: SUPPORT_MULTIPLY,
                },
            ),
            Archetype::Moving => (
                STANDARD_HP,
                MOVING_CD,
                MOVING_COST,
                Loadout::Mobile {
                    dmg: TURRET_DMG,
                    radius: TURRET_RADIUS,
                    attack_cd: TURRET_ATTACK_CD,
                    skill_cd: MOVING_SKILL_CD,
                },
            ),
            Archetype::Healer => (
                STANDARD_HP,
                HEALER_CD,
                HEALER_COST,
                Loadout::Healer {
                    radius: HEALER_RADIUS,
                    heal_speed: HEALER_HEAL_SPEED,
                },
            ),
            Archetype::Enlarger => (
                STANDARD_HP,
                ENLARGER_CD,
                ENLARGER_COST,
                Loadout::Power {
                    enlarge_speed: ENLARGER_SPEED,
                },
            ),
            Archetype::Generator => (
                STANDARD_HP,
                GENERATOR_CD,
                GENERATOR_COST,
                Loadout::Power {
                    enlarge_speed: GENERATOR_SPEED,
                },
            ),
            Archetype::Base => (STANDARD_HP, BASE_CD, BASE_COST, turret),
        };
        Self {
            archetype,
            hp,
            cd,
            cost,
            loadout,
        }
    }
}
