use glam::Vec2;
use gridwalk_common::ChunkCoord;
use serde::{Deserialize, Serialize};

/// Geometry of the chunked map.
///
/// All four values are fixed for the lifetime of a `Map`; changing them
/// means building a new one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Edge length of one tile in world units.
    pub tile_size: f32,
    /// Tiles per chunk edge.
    pub chunk_size: u32,
    /// Chunks are materialized for indices `-extent..=extent` on both axes.
    pub extent: i32,
    /// Chebyshev radius, in chunks, of the active set around the player.
    /// A radius of 1 keeps a 3x3 block visible.
    pub view_radius: i32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_size: 32.0,
            chunk_size: 10,
            extent: 5,
            view_radius: 1,
        }
    }
}

impl MapConfig {
    /// World-space edge length of one chunk.
    pub fn chunk_span(&self) -> f32 {
        self.chunk_size as f32 * self.tile_size
    }

    /// The chunk index containing a world position.
    ///
    /// Floor division per axis: a position exactly on a chunk boundary
    /// belongs to the chunk whose origin sits at that coordinate.
    pub fn world_to_chunk(&self, pos: Vec2) -> ChunkCoord {
        let span = self.chunk_span();
        ChunkCoord::new((pos.x / span).floor() as i32, (pos.y / span).floor() as i32)
    }

    /// World-space origin (top-left corner) of the chunk at `coord`.
    pub fn chunk_origin(&self, coord: ChunkCoord) -> Vec2 {
        Vec2::new(coord.x as f32, coord.y as f32) * self.chunk_span()
    }
}

/// Player movement and presentation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Edge length of the player square in world units.
    pub size: f32,
    /// Displacement per tick while a movement key is held.
    pub speed: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            size: 10.0,
            speed: 10.0,
        }
    }
}
