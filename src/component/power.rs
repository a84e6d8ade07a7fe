//! Power component: mining and generation towers accumulating a resource.

use serde::{Deserialize, Serialize};

use crate::component::{Component, ComponentKind};
use crate::error::ComponentFault;

/// What a power component produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerSource {
    /// Extracts map resources (Enlarger)
    Mining,
    /// Produces energy (Generator)
    Generation,
}

/// Accumulates output at a fixed rate per second until the host drains it
#[derive(Debug, Clone)]
pub struct Power {
    source: PowerSource,
    rate: f64,
    stored: f64,
}

impl Power {
    pub fn new(source: PowerSource, rate: f64) -> Self {
        Self {
            source,
            rate,
            stored: 0.0,
        }
    }

    pub fn source(&self) -> PowerSource {
        self.source
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn stored(&self) -> f64 {
        self.stored
    }

    /// Take everything accumulated so far
    pub fn drain(&mut self) -> f64 {
        std::mem::take(&mut self.stored)
    }
}

impl Component for Power {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Power
    }

    fn update(&mut self, dtime: f64) -> Result<(), ComponentFault> {
        self.stored += self.rate * dtime;
        if !self.stored.is_finite() {
            self.stored = 0.0;
            return Err(ComponentFault::new(
                ComponentKind::Power,
                "stored output is not finite",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_at_rate() {
        let mut p = Power::new(PowerSource::Mining, 10.0);
        p.update(0.5).unwrap();
        p.update(1.5).unwrap();
        assert_eq!(p.stored(), 20.0);
    }

    #[test]
    fn test_drain_empties() {
        let mut p = Power::new(PowerSource::Generation, 5.0);
        p.update(2.0).unwrap();
        assert_eq!(p.drain(), 10.0);
        assert_eq!(p.stored(), 0.0);
    }

    #[test]
    fn test_overflow_is_fault() {
        let mut p = Power::new(PowerSource::Generation, f64::MAX);
        assert!(p.update(f64::MAX).is_err());
        assert_eq!(p.stored(), 0.0);
    }
}
