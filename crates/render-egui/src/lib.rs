//! egui backend for the drawing surface.
//!
//! The windowed app paints the world through an [`EguiSurface`] on the
//! background layer, then egui's own widgets (the HUD) land on top, and
//! one egui-wgpu pass renders both. The headless `RecordingSurface` in
//! `gridwalk-render` remains the test oracle; this crate only has to agree
//! with it about what each call means.

mod surface;

pub use surface::EguiSurface;

pub fn crate_info() -> &'static str {
    "gridwalk-render-egui v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("egui"));
    }
}
