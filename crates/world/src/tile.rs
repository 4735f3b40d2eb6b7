use glam::Vec2;
use gridwalk_render::{Color, Rect, Renderable, Surface, TextAnchor};

/// Font size of the debug labels on tiles and chunks.
pub(crate) const LABEL_SIZE: f32 = 10.0;

/// Smallest renderable cell of the grid.
///
/// A tile knows its integer position within its chunk and the world origin
/// of that chunk; its own world rectangle is derived from the two.
/// Immutable once built, owned by exactly one chunk.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    x: u32,
    y: u32,
    chunk_origin: Vec2,
    size: f32,
}

impl Tile {
    pub fn new(x: u32, y: u32, chunk_origin: Vec2, size: f32) -> Self {
        Self {
            x,
            y,
            chunk_origin,
            size,
        }
    }

    /// Local grid coordinates within the owning chunk.
    pub fn local(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    /// World-space rectangle covered by this tile.
    pub fn bounds(&self) -> Rect {
        let origin = self.chunk_origin + Vec2::new(self.x as f32, self.y as f32) * self.size;
        Rect::new(origin.x, origin.y, self.size, self.size)
    }
}

impl Renderable for Tile {
    /// White fill, light-gray border, and the local `(x,y)` index centered
    /// in the cell. The label text is exact; it doubles as the oracle for
    /// visual-regression checks.
    fn render(&self, surface: &mut dyn Surface) {
        let bounds = self.bounds();
        surface.fill_rect(bounds, Color::WHITE);
        surface.stroke_rect(bounds, 1.0, Color::LIGHT_GRAY);
        surface.text(
            bounds.center(),
            &format!("({},{})", self.x, self.y),
            LABEL_SIZE,
            Color::BLACK,
            TextAnchor::Center,
        );
    }
}
