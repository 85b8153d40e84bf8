//! Render pipeline that draws a sphere mesh with a gradient `ShaderProgram`

use glam::Mat4;
use wgpu::util::DeviceExt;

use super::context::{DEPTH_FORMAT, GpuContext};
use crate::gradient::ShaderProgram;
use crate::gradient::wgsl::{FRAGMENT_ENTRY, VERTEX_ENTRY};
use crate::scene::{SphereMesh, Vertex};

const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

/// Buffer layout for `scene::Vertex`
pub const VERTEX_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
    step_mode: wgpu::VertexStepMode::Vertex,
    attributes: &VERTEX_ATTRIBUTES,
};

/// Uniform data sent to the vertex shader
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniforms {
    /// Column-major, matching WGSL `mat4x4<f32>`
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniforms {
    pub fn new(view_proj: Mat4) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
        }
    }
}

/// Pipeline for drawing the gradient sphere
///
/// The render pipeline is tied to the program's fragment source, so a new
/// variant needs `set_program`; angle/strength/color edits only rewrite the
/// uniform buffer.
pub struct GradientPipeline {
    render_pipeline: wgpu::RenderPipeline,
    pipeline_layout: wgpu::PipelineLayout,
    bind_group: wgpu::BindGroup,
    camera_buffer: wgpu::Buffer,
    gradient_buffer: wgpu::Buffer,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    program: ShaderProgram,
}

impl GradientPipeline {
    pub fn new(ctx: &GpuContext, program: ShaderProgram, mesh: &SphereMesh) -> Self {
        let device = &ctx.device;

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Gradient Bind Group Layout"),
            entries: &[
                // Camera
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                // Gradient
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Gradient Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Uniforms"),
            contents: bytemuck::bytes_of(&CameraUniforms::new(Mat4::IDENTITY)),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let gradient_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Gradient Uniforms"),
            contents: bytemuck::bytes_of(&program.uniforms().to_gpu()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Gradient Bind Group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: gradient_buffer.as_entire_binding(),
                },
            ],
        });

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sphere Vertices"),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sphere Indices"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let render_pipeline = create_render_pipeline(ctx, &pipeline_layout, &program);

        Self {
            render_pipeline,
            pipeline_layout,
            bind_group,
            camera_buffer,
            gradient_buffer,
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
            program,
        }
    }

    /// Swap in a new material, recompiling only when the shader sources changed
    pub fn set_program(&mut self, ctx: &GpuContext, program: ShaderProgram) {
        if program.fragment_source() != self.program.fragment_source()
            || program.vertex_source() != self.program.vertex_source()
        {
            log::debug!("Recompiling gradient pipeline ({})", program.variant().name());
            self.render_pipeline = create_render_pipeline(ctx, &self.pipeline_layout, &program);
        }
        ctx.queue.write_buffer(
            &self.gradient_buffer,
            0,
            bytemuck::bytes_of(&program.uniforms().to_gpu()),
        );
        self.program = program;
    }

    pub fn update_camera(&self, ctx: &GpuContext, view_proj: Mat4) {
        ctx.queue
            .write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&CameraUniforms::new(view_proj)));
    }

    /// Draw the sphere to the current surface texture
    pub fn render(&self, ctx: &GpuContext) -> Result<(), wgpu::SurfaceError> {
        let output = ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Gradient Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Gradient Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: ctx.depth_view(),
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.render_pipeline);
            render_pass.set_bind_group(0, &self.bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            render_pass.draw_indexed(0..self.index_count, 0, 0..1);
        }

        ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

fn create_render_pipeline(
    ctx: &GpuContext,
    layout: &wgpu::PipelineLayout,
    program: &ShaderProgram,
) -> wgpu::RenderPipeline {
    let device = &ctx.device;

    // The program's two stages are separate WGSL modules
    let vertex_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Gradient Vertex Shader"),
        source: wgpu::ShaderSource::Wgsl(program.vertex_source().into()),
    });
    let fragment_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Gradient Fragment Shader"),
        source: wgpu::ShaderSource::Wgsl(program.fragment_source().into()),
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Gradient Render Pipeline"),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: &vertex_module,
            entry_point: Some(VERTEX_ENTRY),
            buffers: &[VERTEX_LAYOUT],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &fragment_module,
            entry_point: Some(FRAGMENT_ENTRY),
            targets: &[Some(wgpu::ColorTargetState {
                format: ctx.format(),
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
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}
