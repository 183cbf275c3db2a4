//! Base entity shared by everything drawn on screen
//!
//! Specialized objects embed an [`Entity`] rather than inheriting from it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_ANGLE;
use crate::render::Canvas;

/// Configuration record every entity is built from. Absent fields take defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntitySpec {
    pub x: f32,
    pub y: f32,
    /// Facing angle in radians (absent = π/2). An explicit 0 is kept as 0,
    /// unlike the explode fields where 0 means unset.
    pub angle: Option<f32>,
    pub hit_radius: f32,
    pub speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    pub delay: f32,
    pub sprite_path: Option<String>,
}

/// Position, facing and motion parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub pos: Vec2,
    /// Facing angle (radians, never wrapped)
    pub angle: f32,
    /// Inner circle used for collision detection
    pub hit_radius: f32,
    pub speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    pub delay: f32,
    pub sprite_path: Option<String>,
}

impl Default for Entity {
    fn default() -> Self {
        Self::new(&EntitySpec::default())
    }
}

impl Entity {
    pub fn new(spec: &EntitySpec) -> Self {
        Self {
            pos: Vec2::new(spec.x, spec.y),
            angle: spec.angle.unwrap_or(DEFAULT_ANGLE),
            hit_radius: spec.hit_radius.max(0.0),
            speed: spec.speed,
            acceleration: spec.acceleration,
            deceleration: spec.deceleration,
            delay: spec.delay,
            sprite_path: spec.sprite_path.clone(),
        }
    }

    /// Current position
    #[inline]
    pub fn vector(&self) -> Vec2 {
        self.pos
    }

    /// Translate in place
    #[inline]
    pub fn shift(&mut self, dx: f32, dy: f32) {
        self.pos.x += dx;
        self.pos.y += dy;
    }

    /// Draw the sprite, if one is configured
    pub fn draw_sprite(&self, canvas: &mut dyn Canvas) {
        if let Some(path) = &self.sprite_path {
            canvas.sprite(path, self.pos, self.angle);
        }
    }
}

/// Anything that lives in a scene and can be handed to a renderer
pub trait GameObject {
    /// Type tag ("Hero", "Urchin", ...)
    fn name(&self) -> &'static str;

    fn entity(&self) -> &Entity;

    fn entity_mut(&mut self) -> &mut Entity;

    fn vector(&self) -> Vec2 {
        self.entity().vector()
    }

    fn shift(&mut self, dx: f32, dy: f32) {
        self.entity_mut().shift(dx, dy);
    }

    fn draw(&self, _canvas: &mut dyn Canvas) {}
}

impl GameObject for Entity {
    fn name(&self) -> &'static str {
        "GameObject"
    }

    fn entity(&self) -> &Entity {
        self
    }

    fn entity_mut(&mut self) -> &mut Entity {
        self
    }
}
