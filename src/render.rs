//! Renderer seam
//!
//! The simulation never draws pixels itself. Entities describe themselves to a
//! [`Canvas`]; an external renderer implements it (or consumes the recorded
//! [`DrawCommand`]s from a [`CommandList`]).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Drawing surface supplied by the renderer
pub trait Canvas {
    /// Draw the sprite at `path` centered on `pos`, rotated by `angle` radians
    fn sprite(&mut self, path: &str, pos: Vec2, angle: f32);
    /// Draw a circle outline (urchin bodies, debug hit radii)
    fn circle(&mut self, center: Vec2, radius: f32);
    /// Draw a line segment (urchin arms)
    fn line(&mut self, from: Vec2, to: Vec2);
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Sprite { path: String, pos: Vec2, angle: f32 },
    Circle { center: Vec2, radius: f32 },
    Line { from: Vec2, to: Vec2 },
}

/// Canvas that records every call in order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandList {
    pub commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of recorded line segments
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }
}

impl Canvas for CommandList {
    fn sprite(&mut self, path: &str, pos: Vec2, angle: f32) {
        self.commands.push(DrawCommand::Sprite {
            path: path.to_string(),
            pos,
            angle,
        });
    }

    fn circle(&mut self, center: Vec2, radius: f32) {
        self.commands.push(DrawCommand::Circle { center, radius });
    }

    fn line(&mut self, from: Vec2, to: Vec2) {
        self.commands.push(DrawCommand::Line { from, to });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_list_records_in_order() {
        let mut list = CommandList::new();
        list.circle(Vec2::ZERO, 3.0);
        list.line(Vec2::ZERO, Vec2::X);
        list.sprite("hero.png", Vec2::ONE, 0.5);

        assert_eq!(list.commands.len(), 3);
        assert_eq!(list.line_count(), 1);
        assert!(matches!(list.commands[0], DrawCommand::Circle { radius, .. } if radius == 3.0));
        assert!(matches!(&list.commands[2], DrawCommand::Sprite { path, .. } if path == "hero.png"));

        list.clear();
        assert!(list.commands.is_empty());
    }
}
