//! Graphic component: sprite key and animation clock.

use crate::component::{Component, ComponentKind};
use crate::error::ComponentFault;

/// Sprite reference plus the animation clock the renderer samples.
/// Drawing itself belongs to the host.
#[derive(Debug, Clone)]
pub struct Graphic {
    sprite: String,
    clock: f64,
}

impl Graphic {
    pub fn new(sprite: impl Into<String>) -> Self {
        Self {
            sprite: sprite.into(),
            clock: 0.0,
        }
    }

    pub fn sprite(&self) -> &str {
        &self.sprite
    }

    /// Seconds of animation played so far
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Animation frame for a sheet of `frames` played at `fps`
    pub fn frame(&self, fps: f64, frames: u32) -> u32 {
        if frames == 0 || fps <= 0.0 {
            return 0;
        }
        ((self.clock * fps) as u64 % frames as u64) as u32
    }
}

impl Component for Graphic {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Graphic
    }

    fn update(&mut self, dtime: f64) -> Result<(), ComponentFault> {
        self.clock += dtime;
        if !self.clock.is_finite() {
            self.clock = 0.0;
            return Err(ComponentFault::new(
                ComponentKind::Graphic,
                "animation clock overflowed",
            ));
        }
        Ok(())
    }
}
