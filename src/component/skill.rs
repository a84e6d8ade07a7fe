//! Skill components: targeted auto-attacks, triggered abilities and auras.

use serde::{Deserialize, Serialize};

use crate::component::{Component, ComponentKind};
use crate::constants::COOLDOWN_EPSILON;
use crate::error::ComponentFault;
use crate::handles::PlacementPoint;

/// Elapsed-time gate shared by every skill
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cooldown {
    period: f64,
    elapsed: f64,
}

impl Cooldown {
    /// Starts charging from zero
    pub fn charging(period: f64) -> Self {
        Self {
            period,
            elapsed: 0.0,
        }
    }

    /// Starts fully charged
    pub fn ready(period: f64) -> Self {
        Self {
            period,
            elapsed: period,
        }
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn remaining(&self) -> f64 {
        (self.period - self.elapsed).max(0.0)
    }

    /// Ready once elapsed time is within `COOLDOWN_EPSILON` of the period.
    /// The slack absorbs float drift from summing many small `dtime` steps,
    /// so thirty 1.0 s ticks or three hundred 0.1 s ticks both reach 30 s.
    pub fn is_ready(&self) -> bool {
        self.elapsed + COOLDOWN_EPSILON >= self.period
    }

    /// Advance by `dtime` seconds. Elapsed time saturates at the period.
    pub fn tick(&mut self, dtime: f64) {
        self.elapsed = (self.elapsed + dtime).min(self.period);
    }

    /// Consume readiness. Returns false if still charging.
    pub fn trigger(&mut self) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.elapsed = 0.0;
        true
    }

    fn is_valid(&self) -> bool {
        self.period.is_finite() && self.elapsed.is_finite() && self.elapsed >= 0.0
    }
}

// =====================================================
// Targeted skill
// =====================================================

/// One shot released by a target skill
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shot {
    pub damage: f64,
    pub radius: f64,
}

/// Auto-attack against enemies within `radius`. Target selection belongs to
/// the host; this component only gates the rate of fire.
#[derive(Debug, Clone)]
pub struct TargetSkill {
    damage: f64,
    radius: f64,
    multiplier: f64,
    cooldown: Cooldown,
}

impl TargetSkill {
    pub fn new(damage: f64, radius: f64, attack_cd: f64) -> Self {
        Self {
            damage,
            radius,
            multiplier: 1.0,
            cooldown: Cooldown::ready(attack_cd),
        }
    }

    pub fn damage(&self) -> f64 {
        self.damage * self.multiplier
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn attack_cd(&self) -> f64 {
        self.cooldown.period()
    }

    pub fn cooldown(&self) -> &Cooldown {
        &self.cooldown
    }

    /// Damage multiplier granted by allied support auras (1.0 = none)
    pub fn set_multiplier(&mut self, multiplier: f64) {
        if multiplier.is_finite() && multiplier > 0.0 {
            self.multiplier = multiplier;
        }
    }

    pub fn in_range(&self, from: &PlacementPoint, target: &PlacementPoint) -> bool {
        from.distance_to(target) <= self.radius
    }

    /// Fire if the attack cooldown has elapsed
    pub fn try_fire(&mut self) -> Option<Shot> {
        if !self.cooldown.trigger() {
            return None;
        }
        Some(Shot {
            damage: self.damage(),
            radius: self.radius,
        })
    }
}

impl Component for TargetSkill {
    fn kind(&self) -> ComponentKind {
        ComponentKind::TargetSkill
    }

    fn update(&mut self, dtime: f64) -> Result<(), ComponentFault> {
        self.cooldown.tick(dtime);
        if !self.cooldown.is_valid() {
            self.cooldown = Cooldown::ready(self.cooldown.period());
            return Err(ComponentFault::new(
                ComponentKind::TargetSkill,
                "attack cooldown state is invalid",
            ));
        }
        Ok(())
    }
}

// =====================================================
// Active skill
// =====================================================

/// Triggered ability carried by an active skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActiveSkillKind {
    /// Long-range strike launched by the owning player (Missile)
    MissileStrike,
    /// Relocate the tower to a new board point (Moving)
    Relocate,
}

/// Player-triggered ability that recharges over `skill_cd` seconds. Charging
/// starts at construction, so a fresh tower cannot fire immediately.
#[derive(Debug, Clone)]
pub struct ActiveSkill {
    ability: ActiveSkillKind,
    cooldown: Cooldown,
    uses: u32,
}

impl ActiveSkill {
    pub fn new(ability: ActiveSkillKind, skill_cd: f64) -> Self {
        Self {
            ability,
            cooldown: Cooldown::charging(skill_cd),
            uses: 0,
        }
    }

    pub fn ability(&self) -> ActiveSkillKind {
        self.ability
    }

    pub fn skill_cd(&self) -> f64 {
        self.cooldown.period()
    }

    pub fn cooldown(&self) -> &Cooldown {
        &self.cooldown
    }

    pub fn is_ready(&self) -> bool {
        self.cooldown.is_ready()
    }

    pub fn uses(&self) -> u32 {
        self.uses
    }

    /// Activate the ability; restarts the cooldown on success
    pub fn activate(&mut self) -> bool {
        if !self.cooldown.trigger() {
            return false;
        }
        self.uses += 1;
        true
    }
}

impl Component for ActiveSkill {
    fn kind(&self) -> ComponentKind {
        ComponentKind::ActiveSkill
    }

    fn update(&mut self, dtime: f64) -> Result<(), ComponentFault> {
        self.cooldown.tick(dtime);
        if !self.cooldown.is_valid() {
            self.cooldown = Cooldown::charging(self.cooldown.period());
            return Err(ComponentFault::new(
                ComponentKind::ActiveSkill,
                "skill cooldown state is invalid",
            ));
        }
        Ok(())
    }
}

// =====================================================
// Passive skill
// =====================================================

/// Effect broadcast to allied towers inside the aura radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Aura {
    /// Multiplies allied target-skill damage (Support)
    DamageBoost { multiply: f64 },
    /// Restores allied hit points per second (Healer)
    Heal { per_second: f64 },
}

/// Always-on aura. Healing accumulates here each tick and is handed to the
/// host, which applies it to the allies it finds in range.
#[derive(Debug, Clone)]
pub struct PassiveSkill {
    aura: Aura,
    radius: f64,
    pending_heal: f64,
}

impl PassiveSkill {
    pub fn new(aura: Aura, radius: f64) -> Self {
        Self {
            aura,
            radius,
            pending_heal: 0.0,
        }
    }

    pub fn aura(&self) -> Aura {
        self.aura
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn affects(&self, source: &PlacementPoint, ally: &PlacementPoint) -> bool {
        source.distance_to(ally) <= self.radius
    }

    /// Damage multiplier for allies in range; 1.0 for non-boost auras
    pub fn damage_multiplier(&self) -> f64 {
        match self.aura {
            Aura::DamageBoost { multiply } => multiply,
            Aura::Heal { .. } => 1.0,
        }
    }

    pub fn pending_heal(&self) -> f64 {
        self.pending_heal
    }

    /// Take the healing accumulated since the last drain
    pub fn drain_heal(&mut self) -> f64 {
        std::mem::take(&mut self.pending_heal)
    }
}

impl Component for PassiveSkill {
    fn kind(&self) -> ComponentKind {
        ComponentKind::PassiveSkill
    }

    fn update(&mut self, dtime: f64) -> Result<(), ComponentFault> {
        if let Aura::Heal { per_second } = self.aura {
            self.pending_heal += per_second * dtime;
            if !self.pending_heal.is_finite() {
                self.pending_heal = 0.0;
                return Err(ComponentFault::new(
                    ComponentKind::PassiveSkill,
                    "pending heal is not finite",
                ));
            }
        }
        Ok(())
    }
}
