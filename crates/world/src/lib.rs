//! World truth: the chunked tile map and the player that walks it.
//!
//! # Invariants
//! - The active chunk set is derived state, recomputed in full on every
//!   update, and always a subset of the materialized chunks.
//! - A chunk owns exactly `chunk_size²` tiles laid out row-major, so draw
//!   order is deterministic.
//! - Player movement is per-tick displacement: held keys sum, opposing
//!   keys cancel, and a tick with no keys held moves nothing.

mod chunk;
mod config;
mod map;
mod player;
mod tile;

pub use chunk::Chunk;
pub use config::{MapConfig, PlayerConfig};
pub use map::Map;
pub use player::Player;
pub use tile::Tile;

pub fn crate_info() -> &'static str {
    "gridwalk-world v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("world"));
    }
}
