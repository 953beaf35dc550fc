use egui::Context;
use egui_wgpu::Renderer;
use egui_winit::State;
use orrery_renderer::{Camera2d, BACKGROUND};
use orrery_simulation::DrawCommand;
use wgpu::{Device, TextureFormat};
use winit::{event::WindowEvent, window::Window};

const BUTTON_SIZE: [f32; 2] = [64.0, 64.0];

pub struct UiState {
    pub fps: f32,
    pub frame_time: f32,
    pub body_count: usize,
    pub ticks: u64,
    pub sim_time: f64,
    pub gravity: f64,
    pub gravity_dirty: bool,
    pub is_paused: bool,
    pub restart_requested: bool,
    pub stop_requested: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: 0.0,
            body_count: 0,
            ticks: 0,
            sim_time: 0.0,
            gravity: orrery_physics::G,
            gravity_dirty: false,
            is_paused: false,
            restart_requested: false,
            stop_requested: false,
        }
    }
}

/// What to paint underneath the widgets this frame
pub struct Scene<'a> {
    pub camera: &'a Camera2d,
    pub commands: &'a [DrawCommand],
}

pub struct Gui {
    context: Context,
    state: State,
    renderer: Renderer,
}

impl Gui {
    pub fn new(device: &Device, output_color_format: TextureFormat, window: &Window) -> Self {
        let context = Context::default();
        let id = context.viewport_id();

        let state = State::new(
            context.clone(),
            id,
            window,
            Some(window.scale_factor() as f32),
            None,
            Some(device.limits().max_texture_dimension_2d as usize),
        );

        let renderer = Renderer::new(
            device,
            output_color_format,
            egui_wgpu::RendererOptions::default(),
        );

        Self {
            context,
            state,
            renderer,
        }
    }

    pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.state.on_window_event(window, event);
        response.consumed
    }

    /// Clear the frame, paint the scene and the widgets on top
    #[allow(clippy::too_many_arguments)]
    pub fn render(
        &mut self,
        device: &Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        window: &Window,
        view: &wgpu::TextureView,
        ui_state: &mut UiState,
        scene: Scene<'_>,
    ) {
        let raw_input = self.state.take_egui_input(window);

        let full_output = self.context.run(raw_input, |ctx| {
            orrery_renderer::paint(
                &ctx.layer_painter(egui::LayerId::background()),
                scene.camera,
                scene.commands,
            );
            self.ui(ctx, ui_state);
        });

        self.state
            .handle_platform_output(window, full_output.platform_output);

        let clipped_primitives = self
            .context
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        let size = window.inner_size();
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [size.width, size.height],
            pixels_per_point: window.scale_factor() as f32,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            self.renderer
                .update_texture(device, queue, *id, image_delta);
        }

        self.renderer.update_buffers(
            device,
            queue,
            encoder,
            &clipped_primitives,
            &screen_descriptor,
        );

        // egui colors are sRGB, the clear color is linear
        let background = egui::Rgba::from(BACKGROUND);

        let mut render_pass = encoder
            .begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: background.r() as f64,
                            g: background.g() as f64,
                            b: background.b() as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            })
            .forget_lifetime();

        self.renderer
            .render(&mut render_pass, &clipped_primitives, &screen_descriptor);

        for id in &full_output.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }

    fn ui(&self, ctx: &Context, state: &mut UiState) {
        // Diagnostics Panel (Top Left)
        egui::Window::new("Diagnostics")
            .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
            .resizable(false)
            .collapsible(true)
            .default_open(false)
            .show(ctx, |ui| {
                ui.label(format!("FPS: {:.1}", state.fps));
                ui.label(format!("Frame Time: {:.2} ms", state.frame_time));
                ui.separator();
                ui.label(format!("Bodies: {}", state.body_count));
                ui.label(format!("Ticks: {}", state.ticks));
                ui.label(format!("Time: {:.2}", state.sim_time));
                ui.separator();
                if ui
                    .add(
                        egui::Slider::new(&mut state.gravity, 0.0..=50.0)
                            .text("Gravity (G)"),
                    )
                    .changed()
                {
                    state.gravity_dirty = true;
                }
                ui.checkbox(&mut state.is_paused, "Paused (Space)");
            });

        // Restart / Stop (Bottom Center)
        egui::Area::new(egui::Id::new("controls"))
            .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -20.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 20.0;
                    if ui
                        .add_sized(BUTTON_SIZE, egui::Button::new("Restart"))
                        .clicked()
                    {
                        state.restart_requested = true;
                    }
                    if ui
                        .add_sized(BUTTON_SIZE, egui::Button::new("Stop"))
                        .clicked()
                    {
                        state.stop_requested = true;
                    }
                });
            });
    }
}
