//! Hit detection primitives
//!
//! Only answers "do these overlap". Pushing things apart is left to the game.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::urchin::Urchin;

/// What part of an urchin a circle touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contact {
    /// The body's hit circle
    Body,
    /// The arm at this index
    Arm(usize),
}

/// Closest point to `p` on segment `a`-`b`
pub fn closest_point_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let line_vec = b - a;
    let line_len_sq = line_vec.length_squared();

    if line_len_sq < 1e-8 {
        return a; // Degenerate segment
    }

    let t = ((p - a).dot(line_vec) / line_len_sq).clamp(0.0, 1.0);
    a + line_vec * t
}

#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    let reach = radius_a + radius_b;
    a.distance_squared(b) <= reach * reach
}

#[inline]
pub fn circle_segment_overlap(center: Vec2, radius: f32, a: Vec2, b: Vec2) -> bool {
    let closest = closest_point_on_segment(center, a, b);
    center.distance_squared(closest) <= radius * radius
}

/// Check a circle against an urchin's body, then its arms in order
pub fn urchin_contact(urchin: &Urchin, center: Vec2, radius: f32) -> Option<Contact> {
    if circles_overlap(center, radius, urchin.entity.pos, urchin.entity.hit_radius) {
        return Some(Contact::Body);
    }

    urchin
        .arms()
        .position(|arm| circle_segment_overlap(center, radius, arm.origin(), arm.end()))
        .map(Contact::Arm)
}
