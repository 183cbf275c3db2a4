//! Urchin Arcade - entities for a 2D arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, urchin arms, scene tick)
//! - `render`: Canvas seam handed to an external renderer
//! - `settings`: Runtime configuration

pub mod error;
pub mod render;
pub mod settings;
pub mod sim;

pub use error::Error;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Facing angle of an entity whose spec leaves it out (pointing "down" the screen)
    pub const DEFAULT_ANGLE: f32 = std::f32::consts::FRAC_PI_2;

    /// Fixed collision radius of every urchin body
    pub const URCHIN_HIT_RADIUS: f32 = 3.0;

    /// Parallax modifier for backgrounds that don't set one
    pub const DEFAULT_PARALLAX: f32 = 1.0;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
