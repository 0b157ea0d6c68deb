use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use wgpu::util::DeviceExt;

use crate::render::{RenderCtx, RenderTarget};
use crate::vertex::{PackedVertexBuffer, VertexLayout};

/// Non-indexed triangle-list renderer for interleaved `f32` vertex data.
///
/// The vertex shader multiplies each position by a single MVP uniform; the
/// fragment shader outputs the interpolated vertex color.
///
/// Resources are created lazily: [`upload_vertices`](Self::upload_vertices)
/// fixes the vertex layout, and the pipeline is (re)built whenever the layout
/// or the surface format changes.
#[derive(Default)]
pub struct TriangleRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    mvp_ubo: Option<wgpu::Buffer>,
    mvp: Mat4,

    vbo: Option<wgpu::Buffer>,
    vertex_count: u32,
    vertex_stride: u64,
    vertex_attributes: Vec<wgpu::VertexAttribute>,
}

impl TriangleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.pipeline.is_some() && self.bind_group.is_some() && self.vbo.is_some()
    }

    /// Uploads `vertices` and records where each attribute of `layout` lives.
    ///
    /// Each attribute offset is taken from the buffer cursor after seeking to
    /// that attribute; the cursor is rewound afterwards.
    pub fn upload_vertices<const N: usize>(
        &mut self,
        ctx: &RenderCtx<'_>,
        vertices: &mut PackedVertexBuffer,
        layout: &VertexLayout<N>,
    ) {
        let attributes: Vec<wgpu::VertexAttribute> = layout
            .attributes
            .iter()
            .map(|attr| wgpu::VertexAttribute {
                format: attr.format(),
                offset: vertices.seek_attribute(attr) as u64,
                shader_location: attr.location,
            })
            .collect();
        vertices.rewind();

        let stride = layout.stride_bytes() as u64;
        if stride != self.vertex_stride || attributes != self.vertex_attributes {
            // layout changed: pipeline must be rebuilt
            self.pipeline = None;
        }
        self.vertex_stride = stride;
        self.vertex_attributes = attributes;
        self.vertex_count = layout.vertex_count(vertices.float_count()) as u32;

        self.vbo = if vertices.is_empty() {
            None
        } else {
            Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("learngl triangle vbo"),
                contents: vertices.as_bytes(),
                usage: wgpu::BufferUsages::VERTEX,
            }))
        };

        log::debug!(
            "uploaded {} bytes ({} vertices, stride {stride})",
            vertices.len(),
            self.vertex_count
        );
    }

    /// Ensures the pipeline and uniform bindings exist for the current surface.
    pub fn prepare(&mut self, ctx: &RenderCtx<'_>) {
        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);
    }

    /// Sets the model-view-projection matrix (wgpu clip convention).
    ///
    /// The value is kept and re-uploaded if the bindings are rebuilt.
    pub fn set_mvp(&mut self, ctx: &RenderCtx<'_>, mvp: Mat4) {
        self.mvp = mvp;
        let Some(ubo) = self.mvp_ubo.as_ref() else { return };
        let u = MvpUniform::from(mvp);
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&u));
    }

    #[inline]
    pub fn mvp(&self) -> Mat4 {
        self.mvp
    }

    /// Draws the uploaded vertices on top of whatever `target` already holds.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        if self.vertex_count == 0 {
            return;
        }
        self.prepare(ctx);

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(vbo) = self.vbo.as_ref() else { return };

        let mut rpass = target.begin_pass("learngl triangle pass", wgpu::LoadOp::Load);
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.draw(0..self.vertex_count, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("learngl triangle shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/triangle.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("learngl triangle bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: Some(mvp_ubo_min_binding_size()),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("learngl triangle pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: self.vertex_stride,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &self.vertex_attributes,
        };

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("learngl triangle pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[vertex_layout],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
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

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        // bind group references the old layout
        self.bind_group = None;
        self.mvp_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.mvp_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let mvp_ubo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("learngl triangle mvp ubo"),
            contents: bytemuck::bytes_of(&MvpUniform::from(self.mvp)),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("learngl triangle bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: mvp_ubo.as_entire_binding(),
            }],
        });

        self.mvp_ubo = Some(mvp_ubo);
        self.bind_group = Some(bind_group);
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct MvpUniform {
    mvp: [[f32; 4]; 4],
}

impl From<Mat4> for MvpUniform {
    fn from(m: Mat4) -> Self {
        Self { mvp: m.to_cols_array_2d() }
    }
}

fn mvp_ubo_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<MvpUniform>() as u64)
        .expect("MvpUniform has non-zero size by construction")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mvp_uniform_is_one_mat4() {
        assert_eq!(std::mem::size_of::<MvpUniform>(), 64);
        assert_eq!(mvp_ubo_min_binding_size().get(), 64);
    }

    #[test]
    fn uniform_is_column_major() {
        let m = Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 3.0));
        let u = MvpUniform::from(m);
        let raw: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&u));
        assert_eq!(raw, m.to_cols_array().as_slice());
        assert_eq!(&raw[12..15], &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn new_renderer_has_nothing_to_draw() {
        let r = TriangleRenderer::new();
        assert_eq!(r.vertex_count(), 0);
        assert!(!r.is_ready());
        assert_eq!(r.mvp(), Mat4::IDENTITY);
    }
}
