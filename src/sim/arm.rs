//! Urchin arms
//!
//! An arm is a line segment anchored at its urchin's body. It owns its length
//! and facing angle; its origin is always read from the body, so an arm never
//! carries position state of its own.

use std::ops::Deref;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntitySpec, GameObject};
use crate::polar_to_cartesian;

/// Arm configuration. Unset numeric fields default to 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmSpec {
    #[serde(flatten)]
    pub entity: EntitySpec,
    pub length: f32,
    /// Length added per step when the urchin doesn't override it
    pub grow_speed: f32,
    /// Target length when the urchin explodes without a uniform policy
    pub explode_length: f32,
    /// Accepted for compatibility; nothing reads it
    pub implode_length: f32,
}

impl ArmSpec {
    pub fn new(length: f32, explode_length: f32) -> Self {
        Self {
            length,
            explode_length,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arm {
    /// Shared entity fields. `entity.pos` is the body position at bind time
    /// and is not kept in sync afterwards.
    pub entity: Entity,
    pub length: f32,
    pub grow_speed: f32,
    pub explode_length: f32,
    pub implode_length: f32,
}

impl Arm {
    /// Build an arm already bound to `body`
    pub fn bound(spec: &ArmSpec, body: &Entity) -> Self {
        let mut entity = Entity::new(&spec.entity);
        entity.pos = body.pos;
        Self {
            entity,
            length: spec.length,
            grow_speed: spec.grow_speed,
            explode_length: spec.explode_length,
            implode_length: spec.implode_length,
        }
    }

    /// Own rotation in radians
    #[inline]
    pub fn angle(&self) -> f32 {
        self.entity.angle
    }

    /// Far end of the arm for a body at `origin`
    #[inline]
    pub fn end_from(&self, origin: Vec2) -> Vec2 {
        origin + polar_to_cartesian(self.length, self.entity.angle)
    }

    /// Lengthen by `amount`, or by the arm's own grow speed when no
    /// (or a zero) amount is given. Length is not clamped.
    pub fn grow(&mut self, amount: Option<f32>) {
        match amount {
            Some(amount) if amount != 0.0 => self.length += amount,
            _ => self.length += self.grow_speed,
        }
    }
}

impl GameObject for Arm {
    fn name(&self) -> &'static str {
        "Arm"
    }

    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}

/// Borrowed view of an arm together with the body it hangs off
#[derive(Debug, Clone, Copy)]
pub struct ArmView<'a> {
    arm: &'a Arm,
    body: &'a Entity,
}

impl<'a> ArmView<'a> {
    pub(crate) fn new(arm: &'a Arm, body: &'a Entity) -> Self {
        Self { arm, body }
    }

    pub fn arm(&self) -> &'a Arm {
        self.arm
    }

    /// Point the arm extends outward from (the body's current position)
    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.body.pos
    }

    /// End point away from the body, recomputed on every call
    #[inline]
    pub fn end(&self) -> Vec2 {
        self.arm.end_from(self.body.pos)
    }
}

impl Deref for ArmView<'_> {
    type Target = Arm;

    fn deref(&self) -> &Arm {
        self.arm
    }
}
