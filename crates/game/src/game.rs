use glam::Vec2;
use gridwalk_common::Viewport;
use gridwalk_input::{InputEvent, InputQueue};
use gridwalk_render::{Camera, Compositor, Surface};
use gridwalk_world::{Map, Player};
use tracing::{debug, info, trace_span};

use crate::config::GameConfig;

/// One running game session.
///
/// Owns the map, player, camera, compositor, and the input queue, all
/// created together and torn down together. The host feeds events through
/// [`push_input`] and calls [`frame`] once per display refresh; everything
/// between those two calls is synchronous single-threaded state.
///
/// [`push_input`]: Game::push_input
/// [`frame`]: Game::frame
pub struct Game {
    map: Map,
    player: Player,
    camera: Camera,
    compositor: Compositor,
    input: InputQueue,
    viewport: Viewport,
    running: bool,
    tick: u64,
}

impl Game {
    /// Build a session from config. The player spawns at the world origin
    /// with the camera already centered on it.
    pub fn new(config: GameConfig) -> Self {
        let viewport = config.viewport();
        let player = Player::new(config.player, Vec2::ZERO);
        let camera = Camera::new(viewport, player.position());
        let map = Map::new(config.map);
        info!(
            chunks = map.chunk_count(),
            width = viewport.width,
            height = viewport.height,
            "game session created"
        );

        Self {
            map,
            player,
            camera,
            compositor: Compositor::new(),
            input: InputQueue::new(),
            viewport,
            running: true,
            tick: 0,
        }
    }

    /// Queue an input event for the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Adopt new viewport extents and re-derive the camera immediately, so
    /// no frame can render with stale half-extents.
    pub fn handle_resize(&mut self, viewport: Viewport) {
        debug!(
            width = viewport.width,
            height = viewport.height,
            "viewport resized"
        );
        self.viewport = viewport;
        self.camera.resize(viewport);
        self.camera.update(self.player.position());
    }

    /// Advance the world one tick.
    ///
    /// Drains the input queue in arrival order, integrates the player,
    /// re-derives the camera, then recomputes the active chunk set. The
    /// order is fixed: every consumer of player position sees this tick's
    /// position, never last tick's.
    pub fn update(&mut self) {
        let _span = trace_span!("tick", tick = self.tick).entered();

        for event in self.input.drain() {
            match event {
                InputEvent::KeyDown(key) => self.player.handle_input(key, true),
                InputEvent::KeyUp(key) => self.player.handle_input(key, false),
                InputEvent::MouseMove(pos) => self.player.handle_mouse(pos, self.viewport),
            }
        }

        self.player.update();
        self.camera.update(self.player.position());
        self.map.update(self.player.position());
        self.tick += 1;
    }

    /// Draw the current state: active chunks below, player on top, all
    /// inside one camera transform.
    pub fn render(&self, surface: &mut dyn Surface) {
        self.compositor
            .render(surface, &self.camera, &[&self.map, &self.player]);
    }

    /// One full frame: update, then render.
    pub fn frame(&mut self, surface: &mut dyn Surface) {
        self.update();
        self.render(surface);
    }

    /// Ask the session to stop. Cooperative: the host checks
    /// [`is_running`] before scheduling the next frame.
    ///
    /// [`is_running`]: Game::is_running
    pub fn request_exit(&mut self) {
        info!(tick = self.tick, "exit requested");
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Ticks completed since the session started.
    pub fn tick(&self) -> u64 {
        self.tick
    }
}
