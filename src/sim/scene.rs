//! Scene: every entity the game loop drives, plus scene loading
//!
//! Entities are kept in spawn order and never reordered, so indices in
//! [`SceneEvent`](super::tick::SceneEvent)s stay valid for the scene's lifetime.

use std::f32::consts::TAU;
use std::path::Path;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arm::ArmSpec;
use super::entity::{EntitySpec, GameObject};
use super::objects::{Background, BackgroundSpec, Hero, Item};
use super::urchin::{Urchin, UrchinSpec};
use crate::render::Canvas;
use crate::{Error, polar_to_cartesian};

/// Scene description as stored on disk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSpec {
    pub hero: EntitySpec,
    pub backgrounds: Vec<BackgroundSpec>,
    pub urchins: Vec<UrchinSpec>,
    pub items: Vec<EntitySpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub hero: Hero,
    pub backgrounds: Vec<Background>,
    pub urchins: Vec<Urchin>,
    pub items: Vec<Item>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

/// Urchins are placed on a ring around the hero's start
const SCATTER_MIN_RADIUS: f32 = 80.0;
const SCATTER_MAX_RADIUS: f32 = 300.0;

impl Scene {
    pub fn from_spec(spec: &SceneSpec) -> Self {
        Self {
            hero: Hero::new(&spec.hero),
            backgrounds: spec.backgrounds.iter().map(Background::new).collect(),
            urchins: spec.urchins.iter().map(Urchin::new).collect(),
            items: spec.items.iter().map(Item::new).collect(),
            time_ticks: 0,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        let spec: SceneSpec = serde_json::from_str(json)?;
        let scene = Self::from_spec(&spec);
        log::info!(
            "Loaded scene: {} urchins, {} items, {} backgrounds",
            scene.urchins.len(),
            scene.items.len(),
            scene.backgrounds.len()
        );
        Ok(scene)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Generate a scene with `count` urchins scattered around the origin.
    /// The same seed always produces the same scene.
    pub fn scatter(seed: u64, count: usize) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        let urchins = (0..count)
            .map(|_| {
                let pos = polar_to_cartesian(
                    rng.random_range(SCATTER_MIN_RADIUS..SCATTER_MAX_RADIUS),
                    rng.random_range(0.0..TAU),
                );

                // Evenly spaced arms, like spines
                let num_arms = rng.random_range(3..=8u32);
                let base_length = rng.random_range(4.0..10.0f32);
                let explode_length = rng.random_range(20.0..40.0f32);
                let arms = (0..num_arms)
                    .map(|i| ArmSpec {
                        entity: EntitySpec {
                            angle: Some(i as f32 * TAU / num_arms as f32),
                            ..Default::default()
                        },
                        length: base_length,
                        grow_speed: 0.01,
                        explode_length,
                        ..Default::default()
                    })
                    .collect();

                let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
                UrchinSpec {
                    entity: EntitySpec {
                        x: pos.x,
                        y: pos.y,
                        ..Default::default()
                    },
                    rotate_speed: direction * rng.random_range(0.005..0.03f32),
                    active_radius: rng.random_range(40.0..80.0f32),
                    explode_by_length: rng.random_bool(0.25).then_some(15.0),
                    arms,
                    ..Default::default()
                }
            })
            .collect();

        let spec = SceneSpec {
            urchins,
            ..Default::default()
        };
        log::info!("Scattered {} urchins (seed {})", count, seed);
        Self::from_spec(&spec)
    }

    /// Hand every visible entity to the canvas, back to front
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        for background in &self.backgrounds {
            background.draw(canvas);
        }
        for item in &self.items {
            item.draw(canvas);
        }
        for urchin in &self.urchins {
            urchin.draw(canvas);
        }
        self.hero.draw(canvas);
    }
}
