use egui::epaint::PathStroke;
use egui::{Align2, Color32, CornerRadius, FontId, Painter, Pos2, Shape, Stroke, StrokeKind};
use glam::{Affine2, Vec2};
use gridwalk_render::{Color, Rect, Surface, TextAnchor};

/// [`Surface`] backed by an egui [`Painter`].
///
/// Carries its own affine transform stack, since egui paints in screen
/// points with no transform state of its own. Axis-aligned rectangles take
/// the cheap `rect_filled`/`rect_stroke` path; under rotation the four
/// corners are transformed and drawn as a polygon. Text positions are
/// transformed but glyphs stay upright and unscaled.
pub struct EguiSurface {
    painter: Painter,
    background: Color32,
    current: Affine2,
    stack: Vec<Affine2>,
}

impl EguiSurface {
    pub fn new(painter: Painter, background: Color) -> Self {
        Self {
            painter,
            background: color32(background),
            current: Affine2::IDENTITY,
            stack: Vec::new(),
        }
    }

    /// True when the current transform carries no rotation beyond a half
    /// turn, so rectangles stay rectangles on screen. The epsilon absorbs
    /// the f32 residue of `sin(π)`.
    fn is_axis_aligned(&self) -> bool {
        const EPS: f32 = 1e-6;
        let m = self.current.matrix2;
        m.x_axis.y.abs() < EPS && m.y_axis.x.abs() < EPS
    }

    fn to_screen(&self, point: Vec2) -> Pos2 {
        let p = self.current.transform_point2(point);
        Pos2::new(p.x, p.y)
    }

    /// Screen-space rect for an axis-aligned transform. `from_two_pos`
    /// normalizes the corners for half-turn rotations, where the diagonal
    /// goes negative.
    fn to_screen_rect(&self, rect: Rect) -> egui::Rect {
        egui::Rect::from_two_pos(self.to_screen(rect.min()), self.to_screen(rect.max()))
    }

    fn transformed_corners(&self, rect: Rect) -> Vec<Pos2> {
        let (min, max) = (rect.min(), rect.max());
        [
            min,
            Vec2::new(max.x, min.y),
            max,
            Vec2::new(min.x, max.y),
        ]
        .into_iter()
        .map(|c| self.to_screen(c))
        .collect()
    }
}

impl Surface for EguiSurface {
    fn clear(&mut self) {
        self.painter
            .rect_filled(self.painter.clip_rect(), CornerRadius::ZERO, self.background);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if self.is_axis_aligned() {
            self.painter
                .rect_filled(self.to_screen_rect(rect), CornerRadius::ZERO, color32(color));
        } else {
            self.painter.add(Shape::convex_polygon(
                self.transformed_corners(rect),
                color32(color),
                PathStroke::NONE,
            ));
        }
    }

    fn stroke_rect(&mut self, rect: Rect, width: f32, color: Color) {
        let stroke = Stroke::new(width, color32(color));
        if self.is_axis_aligned() {
            self.painter.rect_stroke(
                self.to_screen_rect(rect),
                CornerRadius::ZERO,
                stroke,
                StrokeKind::Middle,
            );
        } else {
            self.painter
                .add(Shape::closed_line(self.transformed_corners(rect), stroke));
        }
    }

    fn text(&mut self, pos: Vec2, text: &str, size: f32, color: Color, anchor: TextAnchor) {
        let align = match anchor {
            TextAnchor::TopLeft => Align2::LEFT_TOP,
            TextAnchor::TopCenter => Align2::CENTER_TOP,
            TextAnchor::Center => Align2::CENTER_CENTER,
        };
        self.painter.text(
            self.to_screen(pos),
            align,
            text,
            FontId::proportional(size),
            color32(color),
        );
    }

    fn save(&mut self) {
        self.stack.push(self.current);
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(transform) => self.current = transform,
            None => debug_assert!(false, "restore without matching save"),
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.current = self.current * Affine2::from_translation(offset);
    }

    fn rotate(&mut self, angle: f32) {
        self.current = self.current * Affine2::from_angle(angle);
    }
}

fn color32(c: Color) -> Color32 {
    Color32::from_rgba_unmultiplied(
        (c.r * 255.0).round() as u8,
        (c.g * 255.0).round() as u8,
        (c.b * 255.0).round() as u8,
        (c.a * 255.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Context, LayerId, RawInput};
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    /// Run one headless egui pass, drive `draw` against a fresh surface,
    /// and return the painted shapes.
    fn painted(mut draw: impl FnMut(&mut EguiSurface)) -> Vec<Shape> {
        let ctx = Context::default();
        let output = ctx.run(RawInput::default(), |ctx| {
            let painter = ctx.layer_painter(LayerId::background());
            let mut surface = EguiSurface::new(painter, Color::BLACK);
            draw(&mut surface);
        });
        output
            .shapes
            .into_iter()
            .map(|clipped| clipped.shape)
            .collect()
    }

    #[test]
    fn untransformed_fill_is_a_rect_shape() {
        let shapes = painted(|s| {
            s.fill_rect(Rect::new(10.0, 20.0, 30.0, 40.0), Color::WHITE);
        });
        match &shapes[0] {
            Shape::Rect(r) => {
                assert_eq!(r.rect.min, Pos2::new(10.0, 20.0));
                assert_eq!(r.rect.max, Pos2::new(40.0, 60.0));
                assert_eq!(r.fill, Color32::WHITE);
            }
            other => panic!("unexpected shape {other:?}"),
        }
    }

    #[test]
    fn translation_offsets_the_rect() {
        let shapes = painted(|s| {
            s.translate(Vec2::new(100.0, -5.0));
            s.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::RED);
        });
        match &shapes[0] {
            Shape::Rect(r) => {
                assert_eq!(r.rect.min, Pos2::new(100.0, -5.0));
                assert_eq!(r.rect.max, Pos2::new(110.0, 5.0));
            }
            other => panic!("unexpected shape {other:?}"),
        }
    }

    #[test]
    fn rotation_falls_back_to_a_polygon() {
        let shapes = painted(|s| {
            s.rotate(FRAC_PI_4);
            s.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLUE);
        });
        match &shapes[0] {
            Shape::Path(path) => {
                assert_eq!(path.points.len(), 4);
                assert!(path.fill != Color32::TRANSPARENT);
            }
            other => panic!("unexpected shape {other:?}"),
        }
    }

    #[test]
    fn quarter_turn_maps_x_onto_y() {
        let shapes = painted(|s| {
            s.rotate(FRAC_PI_2);
            s.fill_rect(Rect::new(0.0, 0.0, 10.0, 20.0), Color::WHITE);
        });
        match &shapes[0] {
            Shape::Path(path) => {
                // (10, 0) lands on (0, 10) under a y-down quarter turn.
                assert_eq!(path.points.len(), 4);
                assert!((path.points[1].x - 0.0).abs() < 1e-4);
                assert!((path.points[1].y - 10.0).abs() < 1e-4);
            }
            other => panic!("unexpected shape {other:?}"),
        }
    }

    #[test]
    fn half_turn_stays_on_the_rect_path() {
        use std::f32::consts::PI;
        let shapes = painted(|s| {
            s.rotate(PI);
            s.fill_rect(Rect::new(0.0, 0.0, 10.0, 20.0), Color::WHITE);
        });
        match &shapes[0] {
            Shape::Rect(r) => {
                assert!((r.rect.min.x + 10.0).abs() < 1e-4);
                assert!((r.rect.min.y + 20.0).abs() < 1e-4);
                assert!(r.rect.max.x.abs() < 1e-4);
                assert!(r.rect.max.y.abs() < 1e-4);
            }
            other => panic!("unexpected shape {other:?}"),
        }
    }

    #[test]
    fn restore_unwinds_the_transform() {
        let shapes = painted(|s| {
            s.save();
            s.translate(Vec2::new(50.0, 50.0));
            s.restore();
            s.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
        });
        match &shapes[0] {
            Shape::Rect(r) => assert_eq!(r.rect.min, Pos2::new(0.0, 0.0)),
            other => panic!("unexpected shape {other:?}"),
        }
    }

    #[test]
    fn clear_covers_the_clip_rect() {
        let shapes = painted(|s| s.clear());
        assert!(matches!(shapes[0], Shape::Rect(_)));
    }
}
