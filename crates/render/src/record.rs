use crate::surface::{Color, Rect, Surface, TextAnchor};
use glam::Vec2;

/// One recorded draw call.
///
/// The compositor contract says two frames rendered from identical state
/// must produce identical draw sequences, which makes the recorded command
/// list the comparison oracle for that property.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear,
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f32),
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        width: f32,
        color: Color,
    },
    Text {
        pos: Vec2,
        text: String,
        size: f32,
        color: Color,
        anchor: TextAnchor,
    },
}

impl std::fmt::Display for DrawCmd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawCmd::Clear => write!(f, "clear"),
            DrawCmd::Save => write!(f, "save"),
            DrawCmd::Restore => write!(f, "restore"),
            DrawCmd::Translate(v) => write!(f, "translate ({:.1}, {:.1})", v.x, v.y),
            DrawCmd::Rotate(a) => write!(f, "rotate {a:.4}"),
            DrawCmd::FillRect { rect, .. } => write!(
                f,
                "fill_rect ({:.1}, {:.1}) {}x{}",
                rect.x, rect.y, rect.w, rect.h
            ),
            DrawCmd::StrokeRect { rect, .. } => write!(
                f,
                "stroke_rect ({:.1}, {:.1}) {}x{}",
                rect.x, rect.y, rect.w, rect.h
            ),
            DrawCmd::Text { pos, text, .. } => {
                write!(f, "text {:?} at ({:.1}, {:.1})", text, pos.x, pos.y)
            }
        }
    }
}

/// Surface implementation that records every call instead of drawing.
///
/// Headless counterpart to the GPU-backed surface: the CLI renders frames
/// into it for inspection, and tests assert on the exact sequence.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCmd>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands recorded so far, in call order.
    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    /// Take the recorded commands, leaving the surface empty for reuse.
    pub fn take_commands(&mut self) -> Vec<DrawCmd> {
        std::mem::take(&mut self.commands)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.push(DrawCmd::Clear);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCmd::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, width: f32, color: Color) {
        self.commands.push(DrawCmd::StrokeRect { rect, width, color });
    }

    fn text(&mut self, pos: Vec2, text: &str, size: f32, color: Color, anchor: TextAnchor) {
        self.commands.push(DrawCmd::Text {
            pos,
            text: text.to_owned(),
            size,
            color,
            anchor,
        });
    }

    fn save(&mut self) {
        self.commands.push(DrawCmd::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCmd::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.commands.push(DrawCmd::Translate(offset));
    }

    fn rotate(&mut self, angle: f32) {
        self.commands.push(DrawCmd::Rotate(angle));
    }
}
