use anyhow::Result;
use clap::Parser;
use egui::Context as EguiContext;
use glam::Vec3;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use voxelfield_common::FieldConfig;
use voxelfield_input::{Action, PointerButton, PointerTracker};
use voxelfield_kernel::{JitterSource, SeededJitter, Tickable, Viewport, VoxelField};
use voxelfield_render_wgpu::{FlyCamera, WgpuRenderer};
use voxelfield_tools::FieldInspector;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "voxelfield-desktop", about = "Voxel field desktop demo")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON field configuration; defaults apply to missing fields
    #[arg(short, long)]
    config: Option<String>,

    /// Jitter seed; omit for entropy
    #[arg(short, long)]
    seed: Option<u64>,
}

/// Application state.
struct AppState {
    field: VoxelField,
    camera: FlyCamera,
    pointer: PointerTracker,
    viewport: Viewport,
    paused: bool,
    show_inspector: bool,
    keys_held: HashSet<KeyCode>,
    last_frame: Instant,
}

impl AppState {
    fn new(field: VoxelField) -> Self {
        Self {
            field,
            camera: FlyCamera::default(),
            pointer: PointerTracker::new(),
            viewport: Viewport::new(1280, 720),
            paused: false,
            show_inspector: true,
            keys_held: HashSet::new(),
            last_frame: Instant::now(),
        }
    }

    fn update(&mut self, dt: f32) {
        let speed_mult = if self.keys_held.contains(&KeyCode::ShiftLeft) {
            3.0
        } else {
            1.0
        };

        let mut direction = Vec3::ZERO;
        for (key, axis) in [
            (KeyCode::KeyD, Vec3::X),
            (KeyCode::KeyA, Vec3::NEG_X),
            (KeyCode::Space, Vec3::Y),
            (KeyCode::ControlLeft, Vec3::NEG_Y),
            (KeyCode::KeyW, Vec3::Z),
            (KeyCode::KeyS, Vec3::NEG_Z),
        ] {
            if self.keys_held.contains(&key) {
                direction += axis;
            }
        }
        if direction != Vec3::ZERO {
            self.apply(Action::Move(direction * speed_mult), dt);
        }

        if !self.paused {
            self.field.tick(dt);
        }
    }

    fn apply(&mut self, action: Action, dt: f32) {
        match action {
            Action::Pick { x, y } => {
                let camera = self.camera.camera_state();
                if let Some(outcome) = self.field.on_pick(x, y, &camera, self.viewport) {
                    tracing::info!(
                        accepted = outcome.accepted,
                        moving = self.field.chunk().moving_count(),
                        "pick hit ({:.2}, {:.2}, {:.2})",
                        outcome.impact.x,
                        outcome.impact.y,
                        outcome.impact.z
                    );
                }
            }
            Action::Reset => self.field.reset(),
            Action::TogglePause => {
                self.paused = !self.paused;
                tracing::info!(paused = self.paused, "simulation toggled");
            }
            Action::Move(direction) => self.camera.translate(direction, dt),
            Action::Noop => {}
        }
    }

    fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.keys_held.insert(key);
        } else {
            self.keys_held.remove(&key);
        }

        if !pressed {
            return;
        }

        let action = match key {
            KeyCode::KeyR => Action::Reset,
            KeyCode::KeyP => Action::TogglePause,
            KeyCode::F1 => {
                self.show_inspector = !self.show_inspector;
                Action::Noop
            }
            _ => Action::Noop,
        };
        self.apply(action, 0.0);
    }

    fn draw_ui(&mut self, ctx: &EguiContext) {
        if !self.show_inspector {
            return;
        }

        let summary = FieldInspector::summary(&self.field);

        egui::SidePanel::left("inspector")
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.heading("Voxel Field");
                ui.separator();
                ui.label(format!("Frame: {}", summary.frame));
                ui.label(format!(
                    "Voxels: {}  Moving: {}",
                    summary.voxel_count, summary.moving_count
                ));
                ui.label(format!("Picks: {}", summary.pick_count));
                ui.label(format!("Max speed: {:.3}", summary.max_speed));
                if let Some(y) = summary.lowest_y {
                    ui.label(format!("Lowest voxel y: {y:.2}"));
                }
                if let Some(p) = summary.last_impact {
                    ui.label(format!("Last impact: ({:.2}, {:.2}, {:.2})", p.x, p.y, p.z));
                }
                ui.label(format!(
                    "Camera: ({:.1}, {:.1}, {:.1})",
                    self.camera.position.x, self.camera.position.y, self.camera.position.z
                ));
                ui.separator();

                ui.horizontal(|ui| {
                    if ui.button("Reset (R)").clicked() {
                        self.apply(Action::Reset, 0.0);
                    }
                    let label = if self.paused { "Resume (P)" } else { "Pause (P)" };
                    if ui.button(label).clicked() {
                        self.apply(Action::TogglePause, 0.0);
                    }
                });

                ui.separator();
                ui.small("LMB: Pick | RMB: Look | WASD/Space/Ctrl: Move | F1: Panel");
            });
    }
}

struct GpuApp {
    state: AppState,
    window: Option<Arc<Window>>,
    surface: Option<wgpu::Surface<'static>>,
    device: Option<wgpu::Device>,
    queue: Option<wgpu::Queue>,
    config: Option<wgpu::SurfaceConfiguration>,
    renderer: Option<WgpuRenderer>,
    egui_ctx: EguiContext,
    egui_winit: Option<egui_winit::State>,
    egui_renderer: Option<egui_wgpu::Renderer>,
}

impl GpuApp {
    fn new(field: VoxelField) -> Self {
        Self {
            state: AppState::new(field),
            window: None,
            surface: None,
            device: None,
            queue: None,
            config: None,
            renderer: None,
            egui_ctx: EguiContext::default(),
            egui_winit: None,
            egui_renderer: None,
        }
    }

    fn init_gpu(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title("Voxel Field")
            .with_inner_size(PhysicalSize::new(1280u32, 720));
        let window = Arc::new(event_loop.create_window(attrs)?);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance.create_surface(window.clone())?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .ok_or_else(|| anyhow::anyhow!("no compatible GPU adapter"))?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("voxelfield_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        self.state.camera.aspect = config.width as f32 / config.height as f32;
        self.state.viewport = Viewport::new(config.width, config.height);

        let max_instances = self.state.field.config().voxel_count() as u32;
        let renderer = WgpuRenderer::new(
            &device,
            surface_format,
            config.width,
            config.height,
            max_instances,
        );

        let egui_winit = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1, false);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );

        self.window = Some(window);
        self.surface = Some(surface);
        self.device = Some(device);
        self.queue = Some(queue);
        self.config = Some(config);
        self.renderer = Some(renderer);
        self.egui_winit = Some(egui_winit);
        self.egui_renderer = Some(egui_renderer);
        Ok(())
    }

    fn redraw(&mut self) {
        let now = Instant::now();
        let dt = (now - self.state.last_frame).as_secs_f32().min(0.1);
        self.state.last_frame = now;
        self.state.update(dt);

        let (
            Some(window),
            Some(surface),
            Some(device),
            Some(queue),
            Some(config),
            Some(egui_winit),
            Some(egui_renderer),
        ) = (
            &self.window,
            &self.surface,
            &self.device,
            &self.queue,
            &self.config,
            &mut self.egui_winit,
            &mut self.egui_renderer,
        )
        else {
            return;
        };

        let output = match surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                surface.configure(device, config);
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

        if let Some(renderer) = &self.renderer {
            renderer.render(device, queue, &view, &self.state.camera, &self.state.field);
        }

        let raw_input = egui_winit.take_egui_input(window);
        let state = &mut self.state;
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            state.draw_ui(ctx);
        });
        egui_winit.handle_platform_output(window, full_output.platform_output);

        let paint_jobs = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [config.width, config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            egui_renderer.update_texture(device, queue, *id, image_delta);
        }
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("egui_encoder"),
        });
        egui_renderer.update_buffers(device, queue, &mut encoder, &paint_jobs, &screen_descriptor);
        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui_pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
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

        output.present();
        window.request_redraw();
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_gpu(event_loop) {
            tracing::error!("failed to initialize GPU: {e:#}");
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let (Some(egui_winit), Some(window)) = (&mut self.egui_winit, &self.window) {
            let response = egui_winit.on_window_event(window, &event);
            if response.consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let (Some(surface), Some(device), Some(config)) =
                    (&self.surface, &self.device, &mut self.config)
                {
                    config.width = new_size.width.max(1);
                    config.height = new_size.height.max(1);
                    surface.configure(device, config);
                    self.state.camera.aspect = config.width as f32 / config.height as f32;
                    self.state.viewport = Viewport::new(config.width, config.height);
                    if let Some(renderer) = &mut self.renderer {
                        renderer.resize(device, config.width, config.height);
                    }
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
                self.state
                    .handle_key(key, key_state == ElementState::Pressed);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.state
                    .pointer
                    .moved(position.x as f32, position.y as f32);
            }
            WindowEvent::CursorLeft { .. } => {
                self.state.pointer.left();
            }
            WindowEvent::MouseInput {
                button,
                state: btn_state,
                ..
            } => {
                let button = match button {
                    MouseButton::Left => PointerButton::Primary,
                    MouseButton::Right => PointerButton::Secondary,
                    _ => PointerButton::Other,
                };
                let action = self
                    .state
                    .pointer
                    .button(button, btn_state == ElementState::Pressed);
                self.state.apply(action, 0.0);
                if let Some(window) = &self.window {
                    window.set_cursor_visible(!self.state.pointer.looking());
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if self.state.pointer.looking() {
                self.state.camera.rotate(delta.0 as f32, delta.1 as f32);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("voxelfield-desktop starting");

    let config = match &cli.config {
        Some(path) => FieldConfig::load(path)?,
        None => FieldConfig::default(),
    };
    let jitter: Box<dyn JitterSource> = match cli.seed {
        Some(seed) => Box::new(SeededJitter::new(seed)),
        None => Box::new(SeededJitter::from_entropy()),
    };
    let field = VoxelField::with_jitter(config, jitter)?;
    tracing::info!(voxels = field.chunk().len(), "field initialized");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(field);
    event_loop.run_app(&mut app)?;

    Ok(())
}
