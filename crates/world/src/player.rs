use std::collections::HashSet;
use std::f32::consts::TAU;

use glam::Vec2;
use gridwalk_common::Viewport;
use gridwalk_input::MoveKey;
use gridwalk_render::{Color, Rect, Renderable, Surface};

use crate::config::PlayerConfig;

/// World-space dimensions of the aim indicator.
const AIM_LENGTH: f32 = 50.0;
const AIM_WIDTH: f32 = 10.0;

/// The player: continuous world position, held-key movement, pointer aim.
///
/// Movement is discrete per-tick displacement with no inertia: each tick
/// the held keys sum to a direction, the position integrates once, and the
/// intent resets. Motion continues only while keys stay held.
#[derive(Debug, Clone)]
pub struct Player {
    position: Vec2,
    size: f32,
    speed: f32,
    intent: Vec2,
    keys: HashSet<MoveKey>,
    aim_angle: f32,
}

impl Player {
    pub fn new(config: PlayerConfig, position: Vec2) -> Self {
        Self {
            position,
            size: config.size,
            speed: config.speed,
            intent: Vec2::ZERO,
            keys: HashSet::new(),
            aim_angle: 0.0,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Aim angle in radians, normalized to `[0, 2π)`, measured from +x
    /// turning toward +y (clockwise on screen, since y points down).
    pub fn aim_angle(&self) -> f32 {
        self.aim_angle
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Record a key edge. Idempotent: re-pressing a held key or releasing
    /// an unheld one changes nothing.
    pub fn handle_input(&mut self, key: MoveKey, pressed: bool) {
        if pressed {
            self.keys.insert(key);
        } else {
            self.keys.remove(&key);
        }
    }

    /// Re-derive the aim angle from a pointer position in viewport space.
    ///
    /// The player is always drawn at the viewport center, so the aim vector
    /// is pointer minus center, independent of where the camera sits in the
    /// world.
    pub fn handle_mouse(&mut self, pointer: Vec2, viewport: Viewport) {
        let delta = pointer - viewport.center();
        let mut angle = delta.y.atan2(delta.x);
        if angle < 0.0 {
            angle += TAU;
        }
        self.aim_angle = angle;
    }

    /// Integrate one tick of movement from the currently held keys.
    ///
    /// Held keys sum, so opposing keys cancel to zero displacement instead
    /// of racing on evaluation order. The intent is consumed by the
    /// integration and does not carry into the next tick.
    pub fn update(&mut self) {
        let mut direction = Vec2::ZERO;
        if self.keys.contains(&MoveKey::Up) {
            direction.y -= 1.0;
        }
        if self.keys.contains(&MoveKey::Down) {
            direction.y += 1.0;
        }
        if self.keys.contains(&MoveKey::Left) {
            direction.x -= 1.0;
        }
        if self.keys.contains(&MoveKey::Right) {
            direction.x += 1.0;
        }
        self.intent = direction * self.speed;
        self.position += self.intent;
        self.intent = Vec2::ZERO;
    }
}

impl Renderable for Player {
    /// Blue body square centered on the position, then the red aim
    /// indicator in a translated and rotated local frame so it extends
    /// along the aim direction.
    fn render(&self, surface: &mut dyn Surface) {
        surface.fill_rect(
            Rect::from_center(self.position, Vec2::splat(self.size)),
            Color::BLUE,
        );

        surface.save();
        surface.translate(self.position);
        surface.rotate(self.aim_angle);
        surface.fill_rect(
            Rect::new(0.0, -AIM_WIDTH / 2.0, AIM_LENGTH, AIM_WIDTH),
            Color::RED,
        );
        surface.restore();
    }
}
