//! Urchins are the primary enemy: a small body with arms that reach out to
//! strike the hero or block its path.
//!
//! Per-tick behavior is gated by `active`. `activate()` fires the one-time
//! explosion and stops the per-tick animation.

use serde::{Deserialize, Serialize};

use super::arm::{Arm, ArmSpec, ArmView};
use super::entity::{Entity, EntitySpec, GameObject};
use crate::consts::URCHIN_HIT_RADIUS;
use crate::render::Canvas;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrchinSpec {
    #[serde(flatten)]
    pub entity: EntitySpec,
    /// Radians per step: 0 = no rotation, (+) = clockwise, (-) = counterclockwise
    pub rotate_speed: f32,
    /// Per-step arm growth overriding each arm's own grow speed when non-zero
    pub grow_speed: f32,
    /// Whether the urchin animates from the start (absent = true)
    pub active: Option<bool>,
    /// Distance from the hero at which the explosion should be triggered
    pub active_radius: f32,
    pub explode_to_length: Option<f32>,
    pub explode_by_length: Option<f32>,
    pub arms: Vec<ArmSpec>,
}

/// Which explosion policy was applied
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Explosion {
    /// Every arm set to this length
    To(f32),
    /// Every arm lengthened by this amount
    By(f32),
    /// Every arm set to its own explode length
    PerArm,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UrchinState")]
pub struct Urchin {
    pub entity: Entity,
    pub rotate_speed: f32,
    pub grow_speed: f32,
    pub active: bool,
    pub active_radius: f32,
    pub explode_to_length: Option<f32>,
    pub explode_by_length: Option<f32>,
    exploded: bool,
    arms: Vec<Arm>,
    /// Arm lengths at construction, index-aligned with `arms`
    initial_arm_lengths: Vec<f32>,
}

/// Serialized urchin, checked before it becomes an [`Urchin`]
#[derive(Deserialize)]
struct UrchinState {
    entity: Entity,
    rotate_speed: f32,
    grow_speed: f32,
    active: bool,
    active_radius: f32,
    explode_to_length: Option<f32>,
    explode_by_length: Option<f32>,
    exploded: bool,
    arms: Vec<Arm>,
    initial_arm_lengths: Vec<f32>,
}

impl TryFrom<UrchinState> for Urchin {
    type Error = String;

    fn try_from(state: UrchinState) -> Result<Self, Self::Error> {
        if state.initial_arm_lengths.len() != state.arms.len() {
            return Err(format!(
                "urchin has {} arms but {} initial arm lengths",
                state.arms.len(),
                state.initial_arm_lengths.len()
            ));
        }

        Ok(Self {
            entity: state.entity,
            rotate_speed: state.rotate_speed,
            grow_speed: state.grow_speed,
            active: state.active,
            active_radius: state.active_radius,
            explode_to_length: state.explode_to_length,
            explode_by_length: state.explode_by_length,
            exploded: state.exploded,
            arms: state.arms,
            initial_arm_lengths: state.initial_arm_lengths,
        })
    }
}

/// Zero means "not set" for the explode policies
fn non_zero(value: Option<f32>) -> Option<f32> {
    value.filter(|v| *v != 0.0)
}

impl Urchin {
    pub fn new(spec: &UrchinSpec) -> Self {
        let mut entity = Entity::new(&spec.entity);
        entity.hit_radius = URCHIN_HIT_RADIUS;

        let arms: Vec<Arm> = spec.arms.iter().map(|a| Arm::bound(a, &entity)).collect();
        let initial_arm_lengths = arms.iter().map(|a| a.length).collect();

        Self {
            entity,
            rotate_speed: spec.rotate_speed,
            grow_speed: spec.grow_speed,
            active: spec.active.unwrap_or(true),
            active_radius: spec.active_radius,
            explode_to_length: non_zero(spec.explode_to_length),
            explode_by_length: non_zero(spec.explode_by_length),
            exploded: false,
            arms,
            initial_arm_lengths,
        }
    }

    pub fn is_exploded(&self) -> bool {
        self.exploded
    }

    pub fn arm_count(&self) -> usize {
        self.arms.len()
    }

    pub fn arm(&self, index: usize) -> Option<ArmView<'_>> {
        self.arms.get(index).map(|arm| ArmView::new(arm, &self.entity))
    }

    /// Mutable access to a single arm. The arm set itself is fixed.
    pub fn arm_mut(&mut self, index: usize) -> Option<&mut Arm> {
        self.arms.get_mut(index)
    }

    pub fn arms(&self) -> impl ExactSizeIterator<Item = ArmView<'_>> + '_ {
        self.arms.iter().map(|arm| ArmView::new(arm, &self.entity))
    }

    pub fn initial_arm_lengths(&self) -> &[f32] {
        &self.initial_arm_lengths
    }

    /// Trigger the urchin's one-time ability and stop its animation
    pub fn activate(&mut self) -> Option<Explosion> {
        let explosion = self.explode();
        self.active = false;
        explosion
    }

    /// Snap every arm out to its explode length. Only the first call has an
    /// effect; later calls return `None`.
    pub fn explode(&mut self) -> Option<Explosion> {
        if self.exploded {
            return None;
        }

        let explosion = if let Some(length) = non_zero(self.explode_to_length) {
            self.explode_to(length);
            Explosion::To(length)
        } else if let Some(delta) = non_zero(self.explode_by_length) {
            self.explode_by(delta);
            // Reset so the delta can't be applied twice
            self.explode_by_length = Some(0.0);
            Explosion::By(delta)
        } else {
            for arm in &mut self.arms {
                arm.length = arm.explode_length;
            }
            Explosion::PerArm
        };

        self.exploded = true;
        log::debug!(
            "Urchin at ({:.1}, {:.1}) exploded: {:?}",
            self.entity.pos.x,
            self.entity.pos.y,
            explosion
        );
        Some(explosion)
    }

    /// Set every arm to `length`
    pub fn explode_to(&mut self, length: f32) {
        for arm in &mut self.arms {
            arm.length = length;
        }
    }

    /// Lengthen every arm by `delta`
    pub fn explode_by(&mut self, delta: f32) {
        for arm in &mut self.arms {
            arm.length += delta;
        }
    }

    /// Advance one tick: rotate body and arms, then grow the arms
    pub fn step(&mut self) {
        if !self.active {
            return;
        }

        if self.rotate_speed != 0.0 {
            for arm in &mut self.arms {
                arm.entity.angle += self.rotate_speed;
            }
            self.entity.angle += self.rotate_speed;
        }

        // Positive speed is reserved for movement; bodies don't translate yet.

        let amount = (self.grow_speed != 0.0).then_some(self.grow_speed);
        for arm in &mut self.arms {
            arm.grow(amount);
        }
    }
}

impl GameObject for Urchin {
    fn name(&self) -> &'static str {
        "Urchin"
    }

    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        for arm in self.arms() {
            canvas.line(arm.origin(), arm.end());
        }
        canvas.circle(self.entity.pos, self.entity.hit_radius);
        self.entity.draw_sprite(canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{CommandList, DrawCommand};
    use glam::Vec2;

    fn two_armed(rotate_speed: f32) -> Urchin {
        Urchin::new(&UrchinSpec {
            rotate_speed,
            arms: vec![ArmSpec::new(5.0, 20.0), ArmSpec::new(3.0, 15.0)],
            ..Default::default()
        })
    }

    #[test]
    fn test_construction_defaults() {
        let u = Urchin::new(&UrchinSpec {
            entity: EntitySpec {
                hit_radius: 50.0,
                ..Default::default()
            },
            explode_to_length: Some(0.0),
            ..Default::default()
        });
        assert_eq!(u.name(), "Urchin");
        assert_eq!(u.entity.hit_radius, 3.0);
        assert!(u.active);
        assert!(!u.is_exploded());
        assert_eq!(u.explode_to_length, None);
        assert_eq!(u.explode_by_length, None);
        assert_eq!(u.arm_count(), 0);
        assert!(u.initial_arm_lengths().is_empty());
    }

    #[test]
    fn test_arms_bound_and_lengths_recorded() {
        let u = Urchin::new(&UrchinSpec {
            entity: EntitySpec {
                x: 7.0,
                y: -2.0,
                ..Default::default()
            },
            arms: vec![ArmSpec::new(5.0, 20.0), ArmSpec::new(3.0, 15.0), ArmSpec::new(1.0, 0.0)],
            ..Default::default()
        });
        assert_eq!(u.arm_count(), 3);
        assert_eq!(u.initial_arm_lengths(), &[5.0, 3.0, 1.0]);
        for arm in u.arms() {
            assert_eq!(arm.origin(), Vec2::new(7.0, -2.0));
            assert_eq!(arm.entity.pos, Vec2::new(7.0, -2.0));
        }
    }

    #[test]
    fn test_step_rotates_and_uses_arm_grow_speed() {
        let mut u = two_armed(0.1);
        let body_angle = u.entity.angle;
        let arm_angles: Vec<f32> = u.arms().map(|a| a.angle()).collect();

        u.step();

        assert!((u.entity.angle - (body_angle + 0.1)).abs() < 1e-6);
        for (arm, before) in u.arms().zip(arm_angles) {
            assert!((arm.angle() - (before + 0.1)).abs() < 1e-6);
        }
        // No grow speed anywhere: lengths unchanged
        assert_eq!(u.arm(0).unwrap().length, 5.0);
        assert_eq!(u.arm(1).unwrap().length, 3.0);
        // Rotation changes facing, not orbit position
        assert_eq!(u.arm(0).unwrap().origin(), u.entity.pos);
    }

    #[test]
    fn test_step_urchin_grow_speed_overrides_arms() {
        let mut u = Urchin::new(&UrchinSpec {
            grow_speed: 2.0,
            arms: vec![ArmSpec {
                length: 1.0,
                grow_speed: 0.5,
                ..Default::default()
            }],
            ..Default::default()
        });
        u.step();
        assert_eq!(u.arm(0).unwrap().length, 3.0);

        u.grow_speed = 0.0;
        u.step();
        assert_eq!(u.arm(0).unwrap().length, 3.5);
    }

    #[test]
    fn test_step_ignores_speed() {
        let mut u = Urchin::new(&UrchinSpec {
            entity: EntitySpec {
                x: 1.0,
                y: 1.0,
                speed: 5.0,
                ..Default::default()
            },
            ..Default::default()
        });
        u.step();
        assert_eq!(u.entity.pos, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_step_zero_rotate_speed_keeps_angles() {
        let mut u = two_armed(0.0);
        let body_angle = u.entity.angle;
        let arm_angles: Vec<f32> = u.arms().map(|a| a.angle()).collect();

        u.step();

        assert!(u.active);
        assert_eq!(u.entity.angle, body_angle);
        assert_eq!(u.arms().map(|a| a.angle()).collect::<Vec<_>>(), arm_angles);
    }

    #[test]
    fn test_state_round_trips() {
        let mut u = two_armed(0.1);
        u.step();
        u.explode();
        let json = serde_json::to_value(&u).unwrap();
        let restored: Urchin = serde_json::from_value(json).unwrap();
        assert_eq!(restored, u);
    }

    #[test]
    fn test_mismatched_initial_lengths_rejected() {
        let u = two_armed(0.0);
        let mut json = serde_json::to_value(&u).unwrap();
        json["initial_arm_lengths"] = serde_json::json!([]);
        assert!(serde_json::from_value::<Urchin>(json).is_err());
    }

    #[test]
    fn test_inactive_step_is_noop() {
        let mut u = Urchin::new(&UrchinSpec {
            rotate_speed: 0.3,
            grow_speed: 1.0,
            active: Some(false),
            arms: vec![ArmSpec::new(5.0, 20.0)],
            ..Default::default()
        });
        let before = u.clone();
        u.step();
        assert_eq!(u, before);
    }

    #[test]
    fn test_activate_uses_per_arm_lengths() {
        let mut u = two_armed(0.1);
        u.step();
        let explosion = u.activate();

        assert_eq!(explosion, Some(Explosion::PerArm));
        assert!(u.is_exploded());
        assert!(!u.active);
        assert_eq!(u.arm(0).unwrap().length, 20.0);
        assert_eq!(u.arm(1).unwrap().length, 15.0);
    }

    #[test]
    fn test_explode_to_takes_priority() {
        let mut u = Urchin::new(&UrchinSpec {
            explode_to_length: Some(12.0),
            explode_by_length: Some(4.0),
            arms: vec![ArmSpec::new(5.0, 20.0), ArmSpec::new(30.0, 15.0)],
            ..Default::default()
        });
        assert_eq!(u.explode(), Some(Explosion::To(12.0)));
        assert!(u.arms().all(|a| a.length == 12.0));
        // explode_by untouched when not applied
        assert_eq!(u.explode_by_length, Some(4.0));
    }

    #[test]
    fn test_explode_by_applies_once() {
        let mut u = Urchin::new(&UrchinSpec {
            explode_by_length: Some(4.0),
            arms: vec![ArmSpec::new(5.0, 20.0), ArmSpec::new(3.0, 15.0)],
            ..Default::default()
        });
        assert_eq!(u.explode(), Some(Explosion::By(4.0)));
        assert_eq!(u.explode_by_length, Some(0.0));
        assert_eq!(u.explode(), None);
        assert_eq!(u.arm(0).unwrap().length, 9.0);
        assert_eq!(u.arm(1).unwrap().length, 7.0);
    }

    #[test]
    fn test_explode_is_latched() {
        let mut u = two_armed(0.0);
        u.explode();
        u.arm_mut(0).unwrap().length = 1.0;
        assert_eq!(u.explode(), None);
        assert_eq!(u.arm(0).unwrap().length, 1.0);
        // Still active: explode alone doesn't stop animation
        assert!(u.active);
    }

    #[test]
    fn test_initial_lengths_survive_changes() {
        let mut u = two_armed(0.0);
        u.explode();
        u.step();
        assert_eq!(u.initial_arm_lengths(), &[5.0, 3.0]);
        assert_eq!(u.initial_arm_lengths().len(), u.arm_count());
    }

    #[test]
    fn test_draw_lines_per_arm() {
        let u = two_armed(0.0);
        let mut canvas = CommandList::new();
        u.draw(&mut canvas);
        assert_eq!(canvas.line_count(), 2);
        let arm = u.arm(1).unwrap();
        assert!(canvas.commands.contains(&DrawCommand::Line {
            from: arm.origin(),
            to: arm.end(),
        }));
        assert!(canvas
            .commands
            .contains(&DrawCommand::Circle { center: u.entity.pos, radius: 3.0 }));
    }
}
