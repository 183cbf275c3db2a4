//! Fixed-step scene tick
//!
//! Steps every urchin once, then runs the proximity and contact checks that
//! decide when urchins spring and what the hero touched.

use serde::{Deserialize, Serialize};

use super::collision::{Contact, circles_overlap, urchin_contact};
use super::scene::Scene;
use super::urchin::Explosion;
use crate::Settings;

/// Something that happened during a tick (indices into the scene's vectors)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SceneEvent {
    /// The hero entered an urchin's active radius and it exploded
    Activated { urchin: usize, explosion: Option<Explosion> },
    /// The hero overlaps an urchin's body or one of its arms
    HeroStruck { urchin: usize, contact: Contact },
    /// The hero picked up an item
    ItemClaimed { item: usize },
}

/// Advance the scene by one tick
pub fn tick(scene: &mut Scene, settings: &Settings) -> Vec<SceneEvent> {
    let mut events = Vec::new();
    scene.time_ticks += 1;

    // Urchins are independent; order doesn't matter
    for urchin in &mut scene.urchins {
        urchin.step();
    }

    let hero_pos = scene.hero.entity.pos;
    let hero_radius = scene.hero.entity.hit_radius;

    if settings.proximity_activation {
        for (index, urchin) in scene.urchins.iter_mut().enumerate() {
            if urchin.is_exploded() || urchin.active_radius <= 0.0 {
                continue;
            }
            if hero_pos.distance(urchin.entity.pos) <= urchin.active_radius {
                let explosion = urchin.activate();
                log::info!("Urchin {} activated at tick {}", index, scene.time_ticks);
                events.push(SceneEvent::Activated { urchin: index, explosion });
            }
        }
    }

    if settings.contact_events {
        for (index, urchin) in scene.urchins.iter().enumerate() {
            if let Some(contact) = urchin_contact(urchin, hero_pos, hero_radius) {
                events.push(SceneEvent::HeroStruck { urchin: index, contact });
            }
        }

        for (index, item) in scene.items.iter_mut().enumerate() {
            if item.is_claimed() {
                continue;
            }
            if circles_overlap(hero_pos, hero_radius, item.entity.pos, item.entity.hit_radius)
                && item.claim()
            {
                log::info!("Item {} claimed", index);
                events.push(SceneEvent::ItemClaimed { item: index });
            }
        }
    }

    events
}
