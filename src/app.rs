//! Window, GPU surface and the per-frame tick/draw loop

use crate::clock::TickScheduler;
use crate::gui::{Gui, Scene, UiState};
use orrery_renderer::Camera2d;
use orrery_simulation::{Scenario, Simulation, TICK_RATE};
use std::collections::VecDeque;
use std::error::Error;
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    error::EventLoopError,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    simulation: Simulation,
    scheduler: TickScheduler,
    camera: Camera2d,

    gui: Gui,
    ui_state: UiState,

    frame_times: VecDeque<f32>,
    last_frame_time: Instant,
}

impl GpuState {
    async fn new(window: Arc<Window>, scenario: Scenario) -> Result<Self, Box<dyn Error>> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("✓ Using GPU: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::default(),
                experimental_features: wgpu::ExperimentalFeatures::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or("surface is not supported by the adapter")?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let simulation = Simulation::new(scenario);
        let viewport = simulation.params().viewport.as_vec2();
        let camera = Camera2d::new(viewport.x, viewport.y);

        let gui = Gui::new(&device, config.format, &window);
        let ui_state = UiState {
            gravity: simulation.params().gravity,
            body_count: simulation.bodies().len(),
            ..Default::default()
        };
        log::info!("✓ GUI initialized");

        Ok(Self {
            surface,
            device,
            queue,
            config,
            simulation,
            scheduler: TickScheduler::new(TICK_RATE),
            camera,
            gui,
            ui_state,
            frame_times: VecDeque::with_capacity(100),
            last_frame_time: Instant::now(),
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>, scale_factor: f64) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);

            let logical = new_size.to_logical::<f32>(scale_factor);
            self.camera.resize(logical.width, logical.height);
        }
    }

    fn render(&mut self, window: &Window) -> Result<(f32, f32), wgpu::SurfaceError> {
        // Track frame time
        let now = Instant::now();
        let frame_time = (now - self.last_frame_time).as_secs_f32() * 1000.0;
        self.last_frame_time = now;

        self.frame_times.push_back(frame_time);
        if self.frame_times.len() > 100 {
            self.frame_times.pop_front();
        }

        let avg_frame_time = self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32;
        let fps = 1000.0 / avg_frame_time;

        // Requests from last frame's widgets land before the next tick
        if self.ui_state.restart_requested {
            self.simulation.restart();
            self.ui_state.restart_requested = false;
        }

        if self.ui_state.gravity_dirty {
            self.simulation.set_gravity(self.ui_state.gravity);
            self.ui_state.gravity_dirty = false;
        }

        // Step simulation
        if let Some(dt) = self.scheduler.poll(now) {
            if !self.ui_state.is_paused {
                self.simulation.advance(dt);
            }
        }

        if let Some(offset) = self.simulation.camera_offset() {
            self.camera.move_to(offset);
        }

        // Update UI state
        self.ui_state.fps = fps;
        self.ui_state.frame_time = avg_frame_time;
        self.ui_state.body_count = self.simulation.bodies().len();
        self.ui_state.ticks = self.simulation.ticks();
        self.ui_state.sim_time = self.simulation.elapsed();

        let commands = self.simulation.render_data();

        // Render
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        self.gui.render(
            &self.device,
            &self.queue,
            &mut encoder,
            window,
            &view,
            &mut self.ui_state,
            Scene {
                camera: &self.camera,
                commands: &commands,
            },
        );

        self.queue.submit(std::iter::once(encoder.finish()));

        output.present();
        Ok((fps, avg_frame_time))
    }
}

struct App {
    scenario: Scenario,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
}

impl App {
    fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            window: None,
            gpu_state: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), Box<dyn Error>> {
        let viewport = self.scenario.default_params().viewport;
        let window_attributes = Window::default_attributes()
            .with_title(self.scenario.title())
            .with_inner_size(winit::dpi::LogicalSize::new(viewport.x, viewport.y))
            .with_resizable(false);

        let window = Arc::new(event_loop.create_window(window_attributes)?);
        let gpu_state = pollster::block_on(GpuState::new(window.clone(), self.scenario))?;

        self.window = Some(window);
        self.gpu_state = Some(gpu_state);
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                log::error!("Failed to start {}: {}", self.scenario.title(), e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Handle GUI events
        if let (Some(gpu_state), Some(window)) = (&mut self.gpu_state, &self.window) {
            if gpu_state.gui.handle_event(window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Space),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.ui_state.is_paused = !gpu_state.ui_state.is_paused;
                    log::debug!("paused: {}", gpu_state.ui_state.is_paused);
                }
            }

            WindowEvent::Resized(physical_size) => {
                if let (Some(gpu_state), Some(window)) = (&mut self.gpu_state, &self.window) {
                    gpu_state.resize(physical_size, window.scale_factor());
                }
            }

            WindowEvent::RedrawRequested => {
                if let (Some(window), Some(gpu_state)) = (&self.window, &mut self.gpu_state) {
                    match gpu_state.render(window) {
                        Ok((fps, frame_time)) => {
                            window.set_title(&format!(
                                "{} - {:.0} FPS ({:.2}ms)",
                                self.scenario.title(),
                                fps,
                                frame_time
                            ));
                        }
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            gpu_state.resize(window.inner_size(), window.scale_factor())
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => log::warn!("Render error: {:?}", e),
                    }

                    if gpu_state.ui_state.stop_requested {
                        log::info!("Stop requested");
                        event_loop.exit();
                    }
                }
            }

            _ => {}
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Open a window for `scenario` and run until it is closed
pub fn run(scenario: Scenario) -> Result<(), EventLoopError> {
    log::info!("Starting {} simulation...", scenario.title());

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(scenario);
    event_loop.run_app(&mut app)
}
