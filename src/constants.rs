//! Centralized tower tunables for the composition core.
//!
//! These are the stock values behind `Catalog::standard()`. A catalog loaded
//! from a descriptor file replaces them wholesale; nothing mutates them at
//! runtime.

// =====================================================
// Shared turret profile (Normal, Base, Moving)
// =====================================================

/// Hit points of a standard tower
pub const STANDARD_HP: u32 = 100;

/// Damage per shot of a turret
pub const TURRET_DMG: f64 = 5.0;

/// Targeting radius of a standard turret (board units)
pub const TURRET_RADIUS: f64 = 100.0;

/// Seconds between turret shots
pub const TURRET_ATTACK_CD: f64 = 0.5;

// =====================================================
// Normal / Base
// =====================================================

pub const NORMAL_CD: u32 = 10;
pub const NORMAL_COST: u32 = 10;

pub const BASE_CD: u32 = 10;
pub const BASE_COST: u32 = 10;

// =====================================================
// Long range
// =====================================================

pub const LONG_RANGE_HP: u32 = 50;
pub const LONG_RANGE_RADIUS: f64 = 200.0;
pub const LONG_RANGE_CD: u32 = 10;
pub const LONG_RANGE_COST: u32 = 15;

// =====================================================
// Protective
// =====================================================

pub const PROTECTIVE_HP: u32 = 200;
pub const PROTECTIVE_CD: u32 = 10;
pub const PROTECTIVE_COST: u32 = 15;

// =====================================================
// Missile
// =====================================================

/// Seconds before the missile strike can be launched again
pub const MISSILE_SKILL_CD: f64 = 30.0;
pub const MISSILE_CD: u32 = 30;
pub const MISSILE_COST: u32 = 25;

// =====================================================
// Support
// =====================================================

pub const SUPPORT_RADIUS: f64 = 100.0;

/// Damage multiplier granted to allied towers inside the aura
pub const SUPPORT_MULTIPLY: f64 = 2.0;
pub const SUPPORT_CD: u32 = 10;
pub const SUPPORT_COST: u32 = 15;

// =====================================================
// Moving
// =====================================================

/// Seconds between relocations
pub const MOVING_SKILL_CD: f64 = 20.0;
pub const MOVING_CD: u32 = 40;
pub const MOVING_COST: u32 = 25;

// =====================================================
// Healer
// =====================================================

pub const HEALER_RADIUS: f64 = 200.0;

/// Hit points restored per second to allies inside the aura
pub const HEALER_HEAL_SPEED: f64 = 5.0;
pub const HEALER_CD: u32 = 20;
pub const HEALER_COST: u32 = 20;

// =====================================================
// Resource towers
// =====================================================

/// Resource units mined per second
pub const ENLARGER_SPEED: f64 = 10.0;
pub const ENLARGER_CD: u32 = 20;
pub const ENLARGER_COST: u32 = 20;

/// Energy units produced per second
pub const GENERATOR_SPEED: f64 = 5.0;
pub const GENERATOR_CD: u32 = 10;
pub const GENERATOR_COST: u32 = 10;

// =====================================================
// Runtime
// =====================================================

/// Slack used when comparing accumulated tick time against a cooldown
pub const COOLDOWN_EPSILON: f64 = 1e-9;

/// Roster size above which ticks are spread across the rayon pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;
