use glam::Vec2;

/// Integer chunk-index coordinate in the world grid.
///
/// Chunk identity is its grid index; the world-space origin of a chunk is
/// `index * chunk_size * tile_size` per axis. Screen y grows downward, so
/// `y` increases toward the bottom of the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkCoord {
    pub x: i32,
    pub y: i32,
}

impl ChunkCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate shifted by `(dx, dy)` chunk indices.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Chebyshev distance: max of the per-axis absolute differences.
    ///
    /// This is the metric used for visibility culling, which makes the
    /// visible region a square block of chunks rather than a disc.
    pub fn chebyshev(self, other: Self) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

impl std::fmt::Display for ChunkCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Logical viewport extents in world units (1 world unit == 1 pixel).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center of the viewport in viewport-local coordinates.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Half of the viewport extents, the offset from center to corner.
    pub fn half_extents(&self) -> Vec2 {
        self.center()
    }
}
