//! Headless surface that records draw calls

use super::Surface;

/// One recorded primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: String,
    },
    Circle {
        x: f32,
        y: f32,
        r: f32,
        color: String,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        color: String,
    },
}

/// Surface that keeps every draw call in order
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Text draws only, as (text, x, y)
    pub fn texts(&self) -> Vec<(String, f32, f32)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, x, y, .. } => Some((text.clone(), *x, *y)),
                _ => None,
            })
            .collect()
    }

    /// Drop everything recorded so far
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            w,
            h,
            color: color.to_string(),
        });
    }

    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: &str) {
        self.commands.push(DrawCommand::Circle {
            x,
            y,
            r,
            color: color.to_string(),
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: &str) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            color: color.to_string(),
        });
    }
}
