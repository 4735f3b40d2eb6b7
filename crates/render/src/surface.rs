use glam::Vec2;

/// RGBA color with components in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// The palette of the viewer. Tile labels and borders are part of the
    /// visual-regression oracle, so these values stay put.
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const LIGHT_GRAY: Color = Color::rgb(0.827, 0.827, 0.827);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Axis-aligned rectangle in the current drawing space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given size centered on `center`.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            x: center.x - size.x / 2.0,
            y: center.y - size.y / 2.0,
            w: size.x,
            h: size.y,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.w, self.y + self.h)
    }
}

/// Where a text string hangs relative to the position it is drawn at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    TopLeft,
    TopCenter,
    Center,
}

/// The 2D drawing contract everything renders through.
///
/// Canvas-style immediate API: every call carries its color explicitly
/// (there is no inherited style state), and the transform stack is scoped by
/// `save`/`restore` so a translate or rotate applied for one draw never
/// leaks into the next. Text position is transformed; glyphs stay upright.
///
/// All operations are total. Acquiring a concrete surface from the host is
/// the only thing that can fail, and that happens before the first frame.
pub trait Surface {
    /// Wipe the whole surface to the background.
    fn clear(&mut self);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn stroke_rect(&mut self, rect: Rect, width: f32, color: Color);

    fn text(&mut self, pos: Vec2, text: &str, size: f32, color: Color, anchor: TextAnchor);

    /// Push the current transform onto the stack.
    fn save(&mut self);

    /// Pop the transform stack. Unbalanced restores are a caller bug.
    fn restore(&mut self);

    fn translate(&mut self, offset: Vec2);

    /// Rotate the drawing space by `angle` radians (clockwise on screen,
    /// since y points down).
    fn rotate(&mut self, angle: f32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_from_center() {
        let r = Rect::from_center(Vec2::new(10.0, 20.0), Vec2::new(4.0, 6.0));
        assert_eq!(r, Rect::new(8.0, 17.0, 4.0, 6.0));
        assert_eq!(r.center(), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn rect_min_max() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r.min(), Vec2::new(1.0, 2.0));
        assert_eq!(r.max(), Vec2::new(4.0, 6.0));
    }

    #[test]
    fn color_to_array() {
        assert_eq!(Color::rgba(0.1, 0.2, 0.3, 0.4).to_array(), [0.1, 0.2, 0.3, 0.4]);
        assert_eq!(Color::BLUE.to_array(), [0.0, 0.0, 1.0, 1.0]);
    }
}
