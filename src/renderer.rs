use anyhow::Result;
use std::sync::Arc;
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::core::GpuContext;
use crate::frame::FrameInfo;
use crate::overlay::{Overlay, OverlayStats};
use crate::scene::{cube_instances, CUBE_POSITIONS, CUBE_VERTICES};
use crate::session::Session;
use crate::texture::{GpuTexture, TextureImage};
use crate::types::{CameraUniform, InstanceRaw, Vertex};

const CUBE_SHADER: &str = include_str!("shaders/cube.wgsl");
const TEXTURE_SIZE: u32 = 256;

pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.2,
    g: 0.3,
    b: 0.3,
    a: 1.0,
};

/// Draws the textured cube field from the session's camera
pub struct Renderer {
    gpu: GpuContext,
    pipeline: wgpu::RenderPipeline,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    texture_bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    instance_buffer: wgpu::Buffer,
    depth: GpuTexture,
    overlay: Option<Overlay>,
}

impl Renderer {
    pub async fn new(window: Arc<Window>, show_ui: bool) -> Result<Self> {
        let gpu = GpuContext::new(window.clone()).await?;
        let device = gpu.device();
        let (width, height) = gpu.size();

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[CameraUniform::default()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Cube Vertices"),
            contents: bytemuck::cast_slice(&CUBE_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Cube Instances"),
            contents: bytemuck::cast_slice(&cube_instances(0.0)),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        let container = GpuTexture::from_image(
            device,
            gpu.queue(),
            &TextureImage::crate_planks(TEXTURE_SIZE),
            "Container Texture",
        );
        let face = GpuTexture::from_image(
            device,
            gpu.queue(),
            &TextureImage::smiley(TEXTURE_SIZE),
            "Face Texture",
        );

        let camera_layout = Self::create_camera_layout(device);
        let texture_layout = Self::create_texture_layout(device);

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &camera_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
            label: Some("camera_bind_group"),
        });

        let texture_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &texture_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&container.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&container.sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::TextureView(&face.view),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: wgpu::BindingResource::Sampler(&face.sampler),
                },
            ],
            label: Some("texture_bind_group"),
        });

        let pipeline = Self::create_pipeline(&gpu, &camera_layout, &texture_layout)?;
        let depth = GpuTexture::depth(device, width, height);

        let overlay = show_ui.then(|| Overlay::new(&window, gpu.device(), gpu.format()));

        log::info!("Renderer initialized: {} cubes", CUBE_POSITIONS.len());

        Ok(Self {
            gpu,
            pipeline,
            camera_buffer,
            camera_bind_group,
            texture_bind_group,
            vertex_buffer,
            instance_buffer,
            depth,
            overlay,
        })
    }

    fn create_camera_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
            label: Some("camera_bind_group_layout"),
        })
    }

    fn create_texture_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
        let texture_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Texture {
                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                view_dimension: wgpu::TextureViewDimension::D2,
                multisampled: false,
            },
            count: None,
        };
        let sampler_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
            count: None,
        };

        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[
                texture_entry(0),
                sampler_entry(1),
                texture_entry(2),
                sampler_entry(3),
            ],
            label: Some("texture_bind_group_layout"),
        })
    }

    fn create_pipeline(
        gpu: &GpuContext,
        camera_layout: &wgpu::BindGroupLayout,
        texture_layout: &wgpu::BindGroupLayout,
    ) -> Result<wgpu::RenderPipeline> {
        let shader = gpu.compile_shader("Cube Shader", CUBE_SHADER)?;

        let pipeline_layout = gpu
            .device()
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Cube Pipeline Layout"),
                bind_group_layouts: &[camera_layout, texture_layout],
                push_constant_ranges: &[],
            });

        gpu.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Cube Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::desc(), InstanceRaw::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: gpu.format(),
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: GpuTexture::DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if self.gpu.resize(width, height) {
            self.depth = GpuTexture::depth(self.gpu.device(), width, height);
            log::debug!("Resized to {}x{}", width, height);
        }
    }

    /// Surface lost or outdated: configure again with the current size
    pub fn recover_surface(&mut self) {
        self.gpu.reconfigure();
    }

    pub fn handle_event(&mut self, window: &Window, event: &winit::event::WindowEvent) -> bool {
        match &mut self.overlay {
            Some(overlay) => overlay.handle_event(window, event),
            None => false,
        }
    }

    pub fn render(
        &mut self,
        window: &Window,
        session: &Session,
        frame: &FrameInfo,
        fps: f32,
        aspect: f32,
    ) -> std::result::Result<(), wgpu::SurfaceError> {
        let camera_uniform = CameraUniform::new(session.camera(), aspect, session.mix_value());
        self.gpu.queue().write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[camera_uniform]),
        );
        self.gpu.queue().write_buffer(
            &self.instance_buffer,
            0,
            bytemuck::cast_slice(&cube_instances(frame.time)),
        );

        let output = self.gpu.surface().get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Cube Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });
            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &self.camera_bind_group, &[]);
            render_pass.set_bind_group(1, &self.texture_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            render_pass.draw(
                0..CUBE_VERTICES.len() as u32,
                0..CUBE_POSITIONS.len() as u32,
            );
        }

        if let Some(overlay) = &mut self.overlay {
            let stats = OverlayStats::capture(session, fps, frame.time);
            overlay.draw(
                window,
                self.gpu.device(),
                self.gpu.queue(),
                &mut encoder,
                &view,
                self.gpu.size(),
                &stats,
            );
        }

        self.gpu.queue().submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
