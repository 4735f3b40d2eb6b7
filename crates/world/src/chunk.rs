use glam::Vec2;
use gridwalk_common::ChunkCoord;
use gridwalk_render::{Color, Rect, Renderable, Surface, TextAnchor};

use crate::tile::{LABEL_SIZE, Tile};

/// Fixed-size square block of tiles, the unit of visibility culling.
///
/// Identity is the integer grid index; the world origin follows from it.
/// Tiles are built eagerly at construction, row-major (y outer, x inner),
/// so storage order and draw order are deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    coord: ChunkCoord,
    origin: Vec2,
    tile_size: f32,
    chunk_size: u32,
    tiles: Vec<Tile>,
}

impl Chunk {
    pub fn new(coord: ChunkCoord, tile_size: f32, chunk_size: u32) -> Self {
        let span = chunk_size as f32 * tile_size;
        let origin = Vec2::new(coord.x as f32, coord.y as f32) * span;
        let mut tiles = Vec::with_capacity((chunk_size * chunk_size) as usize);
        for y in 0..chunk_size {
            for x in 0..chunk_size {
                tiles.push(Tile::new(x, y, origin, tile_size));
            }
        }
        Self {
            coord,
            origin,
            tile_size,
            chunk_size,
            tiles,
        }
    }

    /// Grid index, the chunk's identity.
    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    /// World-space edge length.
    pub fn span(&self) -> f32 {
        self.chunk_size as f32 * self.tile_size
    }

    /// World-space bounding box.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.origin.x, self.origin.y, self.span(), self.span())
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

impl Renderable for Chunk {
    /// Tiles in storage order, then the red chunk border, then the index
    /// label centered on the top edge of the bounds.
    fn render(&self, surface: &mut dyn Surface) {
        for tile in &self.tiles {
            tile.render(surface);
        }
        surface.stroke_rect(self.bounds(), 1.0, Color::RED);
        surface.text(
            Vec2::new(self.origin.x + self.span() / 2.0, self.origin.y),
            &self.coord.to_string(),
            LABEL_SIZE,
            Color::BLACK,
            TextAnchor::Center,
        );
    }
}
