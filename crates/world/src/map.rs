use std::collections::HashMap;

use glam::Vec2;
use gridwalk_common::ChunkCoord;
use gridwalk_render::{Renderable, Surface};
use tracing::{debug, trace, trace_span};

use crate::chunk::Chunk;
use crate::config::MapConfig;

/// The chunk store plus the per-frame visibility culling over it.
///
/// Every chunk in the configured extent is materialized up front; the world
/// is bounded even though play feels unbounded away from the edges. The
/// active set is derived state, recomputed from scratch on every update so
/// it can never go stale, and always a subset of the store.
pub struct Map {
    config: MapConfig,
    chunks: HashMap<ChunkCoord, Chunk>,
    active: Vec<ChunkCoord>,
    center: Option<ChunkCoord>,
}

impl Map {
    /// Materialize every chunk in `-extent..=extent` on both axes.
    pub fn new(config: MapConfig) -> Self {
        assert!(config.tile_size > 0.0, "tile_size must be positive");
        assert!(config.chunk_size > 0, "chunk_size must be positive");
        assert!(config.extent >= 0, "extent must be non-negative");
        assert!(config.view_radius >= 0, "view_radius must be non-negative");

        let side = (config.extent * 2 + 1) as usize;
        let mut chunks = HashMap::with_capacity(side * side);
        for cy in -config.extent..=config.extent {
            for cx in -config.extent..=config.extent {
                let coord = ChunkCoord::new(cx, cy);
                chunks.insert(coord, Chunk::new(coord, config.tile_size, config.chunk_size));
            }
        }
        debug!(chunks = chunks.len(), extent = config.extent, "map materialized");

        Self {
            config,
            chunks,
            active: Vec::new(),
            center: None,
        }
    }

    /// Recompute the active set for the player's current position.
    ///
    /// Probes the `(2r+1)²` candidate window around the player's chunk
    /// rather than scanning the whole store, visiting candidates in (y, x)
    /// order so the active list and the draw order derived from it are
    /// deterministic. A position outside the materialized extent yields an
    /// empty set; nothing is created on demand.
    pub fn update(&mut self, player_pos: Vec2) {
        let _span = trace_span!("map_update").entered();
        let center = self.config.world_to_chunk(player_pos);
        let radius = self.config.view_radius;

        self.active.clear();
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let coord = center.offset(dx, dy);
                if self.chunks.contains_key(&coord) {
                    self.active.push(coord);
                }
            }
        }

        if self.center != Some(center) {
            debug!(%center, active = self.active.len(), "crossed chunk boundary");
            self.center = Some(center);
        }
        trace!(active = self.active.len(), "culling complete");
    }

    /// Chunk indices within view radius of the last update's position, in
    /// draw order.
    pub fn active(&self) -> &[ChunkCoord] {
        &self.active
    }

    /// The player's chunk as of the last update.
    pub fn player_chunk(&self) -> Option<ChunkCoord> {
        self.center
    }

    pub fn chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn config(&self) -> MapConfig {
        self.config
    }
}

impl Renderable for Map {
    /// Exactly the active chunks, in active order.
    fn render(&self, surface: &mut dyn Surface) {
        for coord in &self.active {
            if let Some(chunk) = self.chunks.get(coord) {
                chunk.render(surface);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwalk_render::{Color, DrawCmd, RecordingSurface};

    fn sorted(coords: &[ChunkCoord]) -> Vec<ChunkCoord> {
        let mut v = coords.to_vec();
        v.sort();
        v
    }

    /// Brute-force oracle: every materialized chunk within Chebyshev
    /// distance of the position's chunk.
    fn expected_active(map: &Map, pos: Vec2) -> Vec<ChunkCoord> {
        let config = map.config();
        let center = config.world_to_chunk(pos);
        let mut v: Vec<ChunkCoord> = (-config.extent..=config.extent)
            .flat_map(|cy| (-config.extent..=config.extent).map(move |cx| ChunkCoord::new(cx, cy)))
            .filter(|c| c.chebyshev(center) <= config.view_radius)
            .collect();
        v.sort();
        v
    }

    #[test]
    fn materializes_full_extent() {
        let map = Map::new(MapConfig::default());
        assert_eq!(map.chunk_count(), 11 * 11);
        assert!(map.chunk(ChunkCoord::new(-5, 5)).is_some());
        assert!(map.chunk(ChunkCoord::new(6, 0)).is_none());
    }

    #[test]
    fn active_set_is_the_chebyshev_ball() {
        let mut map = Map::new(MapConfig::default());
        let samples = [
            Vec2::new(0.0, 0.0),
            Vec2::new(319.9, 12.0),
            Vec2::new(320.0, 0.0),
            Vec2::new(-0.1, -0.1),
            Vec2::new(-1600.0, 1600.0),
            Vec2::new(959.5, -321.0),
        ];
        for pos in samples {
            map.update(pos);
            assert_eq!(sorted(map.active()), expected_active(&map, pos), "at {pos}");
        }
    }

    #[test]
    fn update_is_idempotent() {
        let mut map = Map::new(MapConfig::default());
        let pos = Vec2::new(123.0, -456.0);
        map.update(pos);
        let first = map.active().to_vec();
        map.update(pos);
        assert_eq!(map.active(), first.as_slice());
    }

    #[test]
    fn radius_one_around_origin_is_a_3x3_block() {
        let mut map = Map::new(MapConfig::default());
        map.update(Vec2::ZERO);
        let expected = [
            ChunkCoord::new(-1, -1),
            ChunkCoord::new(0, -1),
            ChunkCoord::new(1, -1),
            ChunkCoord::new(-1, 0),
            ChunkCoord::new(0, 0),
            ChunkCoord::new(1, 0),
            ChunkCoord::new(-1, 1),
            ChunkCoord::new(0, 1),
            ChunkCoord::new(1, 1),
        ];
        assert_eq!(map.active(), expected);
        assert_eq!(map.player_chunk(), Some(ChunkCoord::new(0, 0)));
    }

    #[test]
    fn crossing_one_tile_past_the_boundary_shifts_the_window() {
        let mut map = Map::new(MapConfig::default());
        map.update(Vec2::new(330.0, 0.0));
        // One tile past the first boundary on x: the x range becomes 0..=2,
        // the y range stays -1..=1.
        let expected = [
            ChunkCoord::new(0, -1),
            ChunkCoord::new(1, -1),
            ChunkCoord::new(2, -1),
            ChunkCoord::new(0, 0),
            ChunkCoord::new(1, 0),
            ChunkCoord::new(2, 0),
            ChunkCoord::new(0, 1),
            ChunkCoord::new(1, 1),
            ChunkCoord::new(2, 1),
        ];
        assert_eq!(map.active(), expected);
    }

    #[test]
    fn outside_the_extent_yields_an_empty_set() {
        let mut map = Map::new(MapConfig::default());
        map.update(Vec2::new(10_000.0, 10_000.0));
        assert!(map.active().is_empty());
    }

    #[test]
    fn window_clips_at_the_edge_of_the_extent() {
        let mut map = Map::new(MapConfig::default());
        // Player one chunk past the edge: only the edge column survives.
        map.update(Vec2::new(6.5 * 320.0, 0.0));
        let expected = [
            ChunkCoord::new(5, -1),
            ChunkCoord::new(5, 0),
            ChunkCoord::new(5, 1),
        ];
        assert_eq!(map.active(), expected);
    }

    #[test]
    fn active_is_subset_of_store() {
        let mut map = Map::new(MapConfig {
            extent: 2,
            ..MapConfig::default()
        });
        for pos in [Vec2::ZERO, Vec2::new(700.0, -700.0), Vec2::new(-5000.0, 0.0)] {
            map.update(pos);
            for coord in map.active() {
                assert!(map.chunk(*coord).is_some());
            }
        }
    }

    #[test]
    fn render_draws_one_red_border_per_active_chunk() {
        let mut map = Map::new(MapConfig {
            tile_size: 16.0,
            chunk_size: 2,
            extent: 1,
            view_radius: 1,
        });
        map.update(Vec2::ZERO);
        let mut surface = RecordingSurface::new();
        map.render(&mut surface);

        let red_borders = surface
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCmd::StrokeRect { color, .. } if *color == Color::RED))
            .count();
        assert_eq!(red_borders, map.active().len());
    }

    #[test]
    fn identical_state_renders_identical_sequences() {
        let mut map = Map::new(MapConfig::default());
        map.update(Vec2::new(42.0, 42.0));

        let mut first = RecordingSurface::new();
        map.render(&mut first);
        let mut second = RecordingSurface::new();
        map.render(&mut second);
        assert_eq!(first.commands(), second.commands());
    }
}
