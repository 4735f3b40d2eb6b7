use anyhow::Result;
use clap::Parser;
use egui::Context as EguiContext;
use glam::Vec2;
use gridwalk_common::Viewport;
use gridwalk_game::{FrameTimer, Game, GameConfig};
use gridwalk_input::{InputEvent, MoveKey};
use gridwalk_render::Color;
use gridwalk_render_egui::EguiSurface;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "gridwalk-desktop", about = "Gridwalk desktop viewer")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to a YAML config file (defaults are used when omitted)
    #[arg(long)]
    config: Option<String>,
}

fn move_key(key: KeyCode) -> Option<MoveKey> {
    match key {
        KeyCode::KeyW | KeyCode::ArrowUp => Some(MoveKey::Up),
        KeyCode::KeyS | KeyCode::ArrowDown => Some(MoveKey::Down),
        KeyCode::KeyA | KeyCode::ArrowLeft => Some(MoveKey::Left),
        KeyCode::KeyD | KeyCode::ArrowRight => Some(MoveKey::Right),
        _ => None,
    }
}

struct GpuApp {
    game: Game,
    config: GameConfig,
    frame_timer: FrameTimer,
    last_frame: Instant,
    show_hud: bool,
    window: Option<Arc<Window>>,
    surface: Option<wgpu::Surface<'static>>,
    device: Option<wgpu::Device>,
    queue: Option<wgpu::Queue>,
    surface_config: Option<wgpu::SurfaceConfiguration>,
    egui_ctx: EguiContext,
    egui_winit: Option<egui_winit::State>,
    egui_renderer: Option<egui_wgpu::Renderer>,
}

impl GpuApp {
    fn new(config: GameConfig) -> Self {
        Self {
            game: Game::new(config),
            config,
            frame_timer: FrameTimer::new(120),
            last_frame: Instant::now(),
            show_hud: true,
            window: None,
            surface: None,
            device: None,
            queue: None,
            surface_config: None,
            egui_ctx: EguiContext::default(),
            egui_winit: None,
            egui_renderer: None,
        }
    }

    fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if let Some(dir) = move_key(key) {
            let event = if pressed {
                InputEvent::KeyDown(dir)
            } else {
                InputEvent::KeyUp(dir)
            };
            self.game.push_input(event);
            return;
        }

        if !pressed {
            return;
        }

        match key {
            KeyCode::F1 => {
                self.show_hud = !self.show_hud;
            }
            KeyCode::Escape => {
                self.game.request_exit();
            }
            _ => {}
        }
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Gridwalk")
            .with_inner_size(LogicalSize::new(
                f64::from(self.config.window.width),
                f64::from(self.config.window.height),
            ));
        let window = Arc::new(event_loop.create_window(attrs).expect("create window"));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .expect("create surface");

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("find adapter");

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("gridwalk_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .expect("create device");

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        // The game runs in logical units so the camera math is unaffected
        // by monitor scale. Derive the starting viewport from the window
        // rather than trusting the config, the OS may have clamped it.
        let logical = size.to_logical::<f32>(window.scale_factor());
        self.game
            .handle_resize(Viewport::new(logical.width.max(1.0), logical.height.max(1.0)));

        let egui_winit = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1, false);

        self.window = Some(window);
        self.surface = Some(surface);
        self.device = Some(device);
        self.queue = Some(queue);
        self.surface_config = Some(surface_config);
        self.egui_winit = Some(egui_winit);
        self.egui_renderer = Some(egui_renderer);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(egui_winit) = &mut self.egui_winit {
            let response = egui_winit.on_window_event(self.window.as_ref().unwrap(), &event);
            if response.consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                self.game.request_exit();
            }
            WindowEvent::Resized(new_size) => {
                if let (Some(surface), Some(device), Some(surface_config)) =
                    (&self.surface, &self.device, &mut self.surface_config)
                {
                    surface_config.width = new_size.width.max(1);
                    surface_config.height = new_size.height.max(1);
                    surface.configure(device, surface_config);
                }
                if let Some(window) = &self.window {
                    let logical = new_size.to_logical::<f32>(window.scale_factor());
                    self.game.handle_resize(Viewport::new(
                        logical.width.max(1.0),
                        logical.height.max(1.0),
                    ));
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                self.handle_key(key, key_state == ElementState::Pressed);
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let Some(window) = &self.window {
                    let logical = position.to_logical::<f32>(window.scale_factor());
                    self.game
                        .push_input(InputEvent::MouseMove(Vec2::new(logical.x, logical.y)));
                }
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                self.frame_timer.record(now - self.last_frame);
                self.last_frame = now;

                self.game.update();

                let (Some(surface), Some(device), Some(queue)) =
                    (&self.surface, &self.device, &self.queue)
                else {
                    return;
                };

                let output = match surface.get_current_texture() {
                    Ok(t) => t,
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        if let Some(surface_config) = &self.surface_config {
                            surface.configure(device, surface_config);
                        }
                        return;
                    }
                    Err(e) => {
                        tracing::error!("surface error: {e}");
                        return;
                    }
                };

                let view = output
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                let raw_input = self
                    .egui_winit
                    .as_mut()
                    .unwrap()
                    .take_egui_input(self.window.as_ref().unwrap());

                let background = Color::rgb(
                    self.config.background[0],
                    self.config.background[1],
                    self.config.background[2],
                );
                let show_hud = self.show_hud;
                let full_output = self.egui_ctx.run(raw_input, |ctx| {
                    // World shapes go on the background layer so HUD
                    // windows stack above them.
                    let painter = ctx.layer_painter(egui::LayerId::background());
                    let mut canvas = EguiSurface::new(painter, background);
                    self.game.render(&mut canvas);
                    if show_hud {
                        draw_hud(ctx, &self.game, &self.frame_timer);
                    }
                });

                self.egui_winit.as_mut().unwrap().handle_platform_output(
                    self.window.as_ref().unwrap(),
                    full_output.platform_output,
                );

                let paint_jobs = self
                    .egui_ctx
                    .tessellate(full_output.shapes, full_output.pixels_per_point);

                let screen_descriptor = egui_wgpu::ScreenDescriptor {
                    size_in_pixels: [
                        self.surface_config.as_ref().unwrap().width,
                        self.surface_config.as_ref().unwrap().height,
                    ],
                    pixels_per_point: full_output.pixels_per_point,
                };

                let clear = wgpu::Color {
                    r: f64::from(self.config.background[0]),
                    g: f64::from(self.config.background[1]),
                    b: f64::from(self.config.background[2]),
                    a: 1.0,
                };

                {
                    let egui_renderer = self.egui_renderer.as_mut().unwrap();
                    for (id, image_delta) in &full_output.textures_delta.set {
                        egui_renderer.update_texture(device, queue, *id, image_delta);
                    }
                    let mut encoder =
                        device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
                            label: Some("gridwalk_encoder"),
                        });
                    egui_renderer.update_buffers(
                        device,
                        queue,
                        &mut encoder,
                        &paint_jobs,
                        &screen_descriptor,
                    );
                    {
                        let mut pass = encoder
                            .begin_render_pass(&wgpu::RenderPassDescriptor {
                                label: Some("gridwalk_pass"),
                                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                                    view: &view,
                                    resolve_target: None,
                                    ops: wgpu::Operations {
                                        load: wgpu::LoadOp::Clear(clear),
                                        store: wgpu::StoreOp::Store,
                                    },
                                })],
                                depth_stencil_attachment: None,
                                ..Default::default()
                            })
                            .forget_lifetime();
                        egui_renderer.render(&mut pass, &paint_jobs, &screen_descriptor);
                    }
                    queue.submit(std::iter::once(encoder.finish()));
                    for id in &full_output.textures_delta.free {
                        egui_renderer.free_texture(id);
                    }
                }

                output.present();
                if self.game.is_running() {
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // The session owns shutdown. No new frame is scheduled once the
        // exit flag is set, so an in-flight frame finishes cleanly.
        if !self.game.is_running() {
            event_loop.exit();
            return;
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Overlay window with live session stats.
fn draw_hud(ctx: &EguiContext, game: &Game, timer: &FrameTimer) {
    egui::Window::new("gridwalk")
        .default_width(220.0)
        .show(ctx, |ui| {
            let pos = game.player().position();
            ui.label(format!("Tick: {}", game.tick()));
            ui.label(format!("Player: ({:.1}, {:.1})", pos.x, pos.y));
            if let Some(chunk) = game.map().player_chunk() {
                ui.label(format!("Chunk: {chunk}"));
            }
            ui.label(format!(
                "Chunks: {} visible / {} loaded",
                game.map().active().len(),
                game.map().chunk_count()
            ));
            ui.label(format!("Aim: {:.2} rad", game.player().aim_angle()));
            ui.separator();
            ui.label(format!(
                "Frame: {:.2} ms avg, {:.2} ms last",
                timer.average().as_secs_f64() * 1000.0,
                timer.last().as_secs_f64() * 1000.0,
            ));
            ui.small("WASD/Arrows: Move | Mouse: Aim | F1: HUD | Esc: Quit");
        });
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    tracing::info!("gridwalk-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(config);
    event_loop.run_app(&mut app)?;

    Ok(())
}
