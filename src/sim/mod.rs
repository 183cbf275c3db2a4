//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - Fixed step only (one `tick` per game loop step)
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies beyond the `Canvas` seam

pub mod arm;
pub mod collision;
pub mod entity;
pub mod objects;
pub mod scene;
pub mod tick;
pub mod urchin;

pub use arm::{Arm, ArmSpec, ArmView};
pub use collision::{Contact, urchin_contact};
pub use entity::{Entity, EntitySpec, GameObject};
pub use objects::{Background, BackgroundSpec, Character, Decoration, Hero, Item};
pub use scene::{Scene, SceneSpec};
pub use tick::{SceneEvent, tick};
pub use urchin::{Explosion, Urchin, UrchinSpec};
