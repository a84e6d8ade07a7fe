//! Health component: current and maximum hit points.

use crate::component::{Component, ComponentKind};
use crate::error::ComponentFault;

/// Hit points of a tower. Reaching zero is what the host treats as the
/// destruction trigger; the component never tears the tower down itself.
#[derive(Debug, Clone)]
pub struct Health {
    current: f64,
    max: f64,
}

impl Health {
    pub fn new(max: f64) -> Self {
        Self { current: max, max }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn fraction(&self) -> f64 {
        if self.max <= 0.0 {
            0.0
        } else {
            self.current / self.max
        }
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }

    /// Apply damage, returning the amount actually removed
    pub fn damage(&mut self, amount: f64) -> f64 {
        if amount <= 0.0 || amount.is_nan() {
            return 0.0;
        }
        let dealt = amount.min(self.current);
        self.current -= dealt;
        dealt
    }

    /// Restore hit points up to max, returning the amount actually healed
    pub fn heal(&mut self, amount: f64) -> f64 {
        if amount <= 0.0 || amount.is_nan() {
            return 0.0;
        }
        let healed = amount.min(self.max - self.current);
        self.current += healed;
        healed
    }
}

impl Component for Health {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Health
    }

    fn update(&mut self, _dtime: f64) -> Result<(), ComponentFault> {
        if !self.current.is_finite() || self.current < 0.0 {
            self.current = 0.0;
            return Err(ComponentFault::new(
                ComponentKind::Health,
                "hit points fell outside [0, max]",
            ));
        }
        if self.current > self.max {
            self.current = self.max;
            return Err(ComponentFault::new(
                ComponentKind::Health,
                "hit points exceeded max",
            ));
        }
        Ok(())
    }
}
