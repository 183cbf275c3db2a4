//! Thin entity specializations: decorations, backgrounds, characters, hero, items
//!
//! None of these carry behavior beyond their rendering hooks.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntitySpec, GameObject};
use crate::consts::DEFAULT_PARALLAX;
use crate::render::Canvas;

/// Non-interactive scenery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decoration {
    pub entity: Entity,
}

impl Decoration {
    pub fn new(spec: &EntitySpec) -> Self {
        Self {
            entity: Entity::new(spec),
        }
    }
}

/// Background spec: an entity plus its parallax modifier
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundSpec {
    #[serde(flatten)]
    pub entity: EntitySpec,
    /// Scroll factor relative to the camera (absent = 1)
    pub parallax: Option<f32>,
}

/// The game's backdrop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Background {
    pub entity: Entity,
    pub parallax: f32,
}

impl Background {
    pub fn new(spec: &BackgroundSpec) -> Self {
        Self {
            entity: Entity::new(&spec.entity),
            parallax: spec.parallax.unwrap_or(DEFAULT_PARALLAX),
        }
    }
}

/// Generic interactive object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub entity: Entity,
}

impl Character {
    pub fn new(spec: &EntitySpec) -> Self {
        Self {
            entity: Entity::new(spec),
        }
    }
}

/// The player's character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub entity: Entity,
}

impl Hero {
    pub fn new(spec: &EntitySpec) -> Self {
        Self {
            entity: Entity::new(spec),
        }
    }
}

/// A pickup the hero can claim once
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub entity: Entity,
    claimed: bool,
}

impl Item {
    pub fn new(spec: &EntitySpec) -> Self {
        Self {
            entity: Entity::new(spec),
            claimed: false,
        }
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    /// Mark the item as taken. Returns false if it was already claimed.
    pub fn claim(&mut self) -> bool {
        if self.claimed {
            return false;
        }
        self.claimed = true;
        true
    }
}

macro_rules! game_object {
    ($ty:ty, $name:literal) => {
        impl GameObject for $ty {
            fn name(&self) -> &'static str {
                $name
            }

            fn entity(&self) -> &Entity {
                &self.entity
            }

            fn entity_mut(&mut self) -> &mut Entity {
                &mut self.entity
            }
        }
    };
    ($ty:ty, $name:literal, sprite) => {
        impl GameObject for $ty {
            fn name(&self) -> &'static str {
                $name
            }

            fn entity(&self) -> &Entity {
                &self.entity
            }

            fn entity_mut(&mut self) -> &mut Entity {
                &mut self.entity
            }

            fn draw(&self, canvas: &mut dyn Canvas) {
                self.entity.draw_sprite(canvas);
            }
        }
    };
}

game_object!(Decoration, "Decoration");
game_object!(Character, "Character");
game_object!(Background, "Background", sprite);
game_object!(Hero, "Hero", sprite);

impl GameObject for Item {
    fn name(&self) -> &'static str {
        "Item"
    }

    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        if !self.claimed {
            self.entity.draw_sprite(canvas);
        }
    }
}
