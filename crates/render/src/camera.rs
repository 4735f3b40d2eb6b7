use glam::Vec2;
use gridwalk_common::Viewport;

/// Viewport-sized window into the world, pinned to a focus point.
///
/// The position is the world-space top-left corner of the viewport, derived
/// as `focus - viewport/2` so the focus (the player) sits exactly at the
/// center of the screen. No smoothing: the camera snaps to the focus on
/// every update, keeping the player pixel-stable at screen center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec2,
    viewport: Viewport,
}

impl Camera {
    /// A camera already centered on `focus`. Derivation happens here too,
    /// not just in `update`, so the first frame is never stale.
    pub fn new(viewport: Viewport, focus: Vec2) -> Self {
        Self {
            position: focus - viewport.half_extents(),
            viewport,
        }
    }

    /// Re-derive the offset from the current focus position.
    pub fn update(&mut self, focus: Vec2) {
        self.position = focus - self.viewport.half_extents();
    }

    /// Adopt new viewport extents. Callers re-run `update` in the same
    /// breath; the game does exactly that so no frame renders with stale
    /// half-extents.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// World-space top-left corner of the viewport. Subtracting this from
    /// every draw is what keeps the focus centered.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}
