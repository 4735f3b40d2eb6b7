//! Shared leaf types for the gridwalk crates.
//!
//! # Invariants
//! - Chunk identity is its integer grid index, never a world position.
//! - Coordinate convention is y-down (screen space and world space agree).

mod types;

pub use types::{ChunkCoord, Viewport};
