use crate::camera::Camera;
use crate::surface::Surface;

/// Anything that can draw itself onto a surface in world coordinates.
///
/// Render never mutates state: a frame rendered twice from the same state
/// produces the same draw sequence.
pub trait Renderable {
    fn render(&self, surface: &mut dyn Surface);
}

/// Back-to-front layer pass under a single camera transform.
///
/// The frame structure is fixed: clear, push the camera translation, draw
/// each layer in the order given, pop. Layers draw in world coordinates and
/// never see the camera; subtracting the camera position up front is the
/// whole of camera-relative rendering.
#[derive(Debug, Default)]
pub struct Compositor;

impl Compositor {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        surface: &mut dyn Surface,
        camera: &Camera,
        layers: &[&dyn Renderable],
    ) {
        let _span = tracing::trace_span!("compose", layers = layers.len()).entered();
        surface.clear();
        surface.save();
        surface.translate(-camera.position());
        for layer in layers {
            layer.render(surface);
        }
        surface.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{DrawCmd, RecordingSurface};
    use crate::surface::{Color, Rect};
    use glam::Vec2;
    use gridwalk_common::Viewport;

    struct Square;

    impl Renderable for Square {
        fn render(&self, surface: &mut dyn Surface) {
            surface.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
        }
    }

    #[test]
    fn frame_structure_brackets_layers() {
        let camera = Camera::new(Viewport::new(200.0, 100.0), Vec2::ZERO);
        let mut surface = RecordingSurface::new();
        Compositor::new().render(&mut surface, &camera, &[&Square]);

        let cmds = surface.commands();
        assert_eq!(cmds[0], DrawCmd::Clear);
        assert_eq!(cmds[1], DrawCmd::Save);
        // Camera at (-100, -50); the pass translates by its negation.
        assert_eq!(cmds[2], DrawCmd::Translate(Vec2::new(100.0, 50.0)));
        assert!(matches!(cmds[3], DrawCmd::FillRect { .. }));
        assert_eq!(cmds[4], DrawCmd::Restore);
    }

    #[test]
    fn layers_draw_in_given_order() {
        struct Tagged(f32);
        impl Renderable for Tagged {
            fn render(&self, surface: &mut dyn Surface) {
                surface.rotate(self.0);
            }
        }

        let camera = Camera::new(Viewport::new(2.0, 2.0), Vec2::ZERO);
        let mut surface = RecordingSurface::new();
        let (a, b) = (Tagged(1.0), Tagged(2.0));
        Compositor::new().render(&mut surface, &camera, &[&a, &b]);

        let rotations: Vec<f32> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Rotate(r) => Some(*r),
                _ => None,
            })
            .collect();
        assert_eq!(rotations, vec![1.0, 2.0]);
    }

    #[test]
    fn identical_state_renders_identical_sequences() {
        let camera = Camera::new(Viewport::new(800.0, 600.0), Vec2::new(3.0, 4.0));
        let mut first = RecordingSurface::new();
        let mut second = RecordingSurface::new();
        let compositor = Compositor::new();
        compositor.render(&mut first, &camera, &[&Square]);
        compositor.render(&mut second, &camera, &[&Square]);
        assert_eq!(first.commands(), second.commands());
    }

    #[test]
    fn empty_layer_list_still_clears() {
        let camera = Camera::new(Viewport::new(10.0, 10.0), Vec2::ZERO);
        let mut surface = RecordingSurface::new();
        Compositor::new().render(&mut surface, &camera, &[]);
        assert_eq!(surface.len(), 4); // clear, save, translate, restore
    }
}
