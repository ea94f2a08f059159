use glam::Vec3;
use winit::window::Window;

use crate::camera::CameraMode;
use crate::session::Session;

/// Snapshot of what the overlay prints for one frame
#[derive(Debug, Clone, Copy)]
pub struct OverlayStats {
    pub fps: f32,
    pub time: f32,
    pub mode: CameraMode,
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub zoom: f32,
    pub mix_value: f32,
}

impl OverlayStats {
    pub fn capture(session: &Session, fps: f32, time: f32) -> Self {
        let camera = session.camera();
        Self {
            fps,
            time,
            mode: camera.mode(),
            position: camera.position(),
            yaw: camera.yaw(),
            pitch: camera.pitch(),
            zoom: camera.zoom(),
            mix_value: session.mix_value(),
        }
    }

    /// Yaw accumulates without bound; wrap it for display only
    pub fn display_yaw(&self) -> f32 {
        self.yaw.rem_euclid(360.0)
    }
}

/// egui overlay drawn on top of the scene
pub struct Overlay {
    egui_renderer: egui_wgpu::Renderer,
    egui_state: egui_winit::State,
    egui_ctx: egui::Context,
}

impl Overlay {
    pub fn new(window: &Window, device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer =
            egui_wgpu::Renderer::new(device, format, egui_wgpu::RendererOptions::default());

        Self {
            egui_renderer,
            egui_state,
            egui_ctx,
        }
    }

    pub fn handle_event(&mut self, window: &Window, event: &winit::event::WindowEvent) -> bool {
        self.egui_state.on_window_event(window, event).consumed
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &mut self,
        window: &Window,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        size: (u32, u32),
        stats: &OverlayStats,
    ) {
        let raw_input = self.egui_state.take_egui_input(window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Camera")
                .title_bar(true)
                .resizable(false)
                .fixed_pos(egui::pos2(10.0, 10.0))
                .default_width(220.0)
                .show(ctx, |ui| {
                    ui.heading(
                        egui::RichText::new(format!("{:.0} FPS", stats.fps))
                            .size(28.0)
                            .color(egui::Color32::from_rgb(74, 158, 255)),
                    );

                    let frame_time_ms = if stats.fps > 0.0 { 1000.0 / stats.fps } else { 0.0 };
                    ui.label(
                        egui::RichText::new(format!("{:.2} ms", frame_time_ms))
                            .size(14.0)
                            .color(egui::Color32::GRAY),
                    );

                    ui.add_space(6.0);
                    ui.separator();

                    ui.label(
                        egui::RichText::new(format!("Mode: {}", stats.mode))
                            .size(16.0)
                            .color(egui::Color32::from_rgb(100, 200, 100)),
                    );
                    ui.monospace(format!(
                        "Pos: ({:.2}, {:.2}, {:.2})",
                        stats.position.x, stats.position.y, stats.position.z
                    ));
                    ui.monospace(format!(
                        "Yaw: {:.1}° Pitch: {:.1}°",
                        stats.display_yaw(),
                        stats.pitch
                    ));
                    ui.monospace(format!("FOV: {:.1}°", stats.zoom));
                    ui.monospace(format!("Mix: {:.2}", stats.mix_value));
                    ui.monospace(format!("Time: {:.2}s", stats.time));

                    ui.add_space(6.0);
                    ui.separator();
                    ui.label(
                        egui::RichText::new("WASD move · mouse look · wheel zoom\nQ mode · ↑/↓ mix · Esc quit")
                            .size(12.0)
                            .color(egui::Color32::GRAY),
                    );
                });
        });

        self.egui_state
            .handle_platform_output(window, full_output.platform_output);

        let tris = self
            .egui_ctx
            .tessellate(full_output.shapes, self.egui_ctx.pixels_per_point());
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(device, queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [size.0, size.1],
            pixels_per_point: window.scale_factor() as f32,
        };

        self.egui_renderer
            .update_buffers(device, queue, encoder, &tris, &screen_descriptor);

        {
            let mut render_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    occlusion_query_set: None,
                    timestamp_writes: None,
                })
                .forget_lifetime();

            self.egui_renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
    }
}
