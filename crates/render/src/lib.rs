//! Rendering contract: surface trait, camera, and the layer compositor.
//!
//! # Invariants
//! - Rendering cannot mutate world truth; `Renderable::render` takes `&self`.
//! - Identical state renders byte-identical draw sequences.
//! - Transforms are scoped: a save/restore pair leaves the surface exactly
//!   as it found it.
//!
//! The `RecordingSurface` is the headless backend: it captures the draw
//! sequence for tests and CLI inspection. The windowed backend lives in
//! `gridwalk-render-egui` behind the same trait.

mod camera;
mod compose;
mod record;
mod surface;

pub use camera::Camera;
pub use compose::{Compositor, Renderable};
pub use record::{DrawCmd, RecordingSurface};
pub use surface::{Color, Rect, Surface, TextAnchor};

pub fn crate_info() -> &'static str {
    "gridwalk-render v0.1.0"
}
