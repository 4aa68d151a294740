use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::shapes::polygon::PolygonCmd;
use crate::scene::{DrawCmd, DrawList};

use super::common::{ViewportUniform, PREMULTIPLIED_OVER};

/// Miter length cap, in multiples of half the stroke width.
const MITER_LIMIT: f32 = 4.0;

/// Renderer for `DrawCmd::Polygon`.
///
/// Polygons are tessellated on the CPU into a single triangle list per frame:
/// fills as a fan from the first point, borders as a mitered ring of quads
/// centered on the outline. Paint order from the draw list is preserved
/// because fill and border of each command are emitted back to back.
#[derive(Default)]
pub struct PolygonRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,

    vertex_vbo: Option<wgpu::Buffer>,
    vertex_capacity: usize,

    /// Reused tessellation scratch buffer.
    vertices: Vec<PolygonVertex>,
}

impl PolygonRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        self.vertices.clear();
        for item in draw_list.iter_in_paint_order() {
            let DrawCmd::Polygon(cmd) = &item.cmd;
            tessellate(cmd, &mut self.vertices);
        }

        if self.vertices.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);
        self.write_viewport_uniform(ctx);
        self.ensure_vertex_capacity(ctx, self.vertices.len());

        let Some(vbo) = self.vertex_vbo.as_ref() else { return };
        ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(&self.vertices));

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("hexmap polygon pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.draw(0..self.vertices.len() as u32, 0..1);
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("hexmap polygon shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/polygon.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("hexmap polygon bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: Some(ViewportUniform::SIZE),
                    },
                    count: None,
                }],
            });

        let pipeline_layout =
            ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("hexmap polygon pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("hexmap polygon pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[PolygonVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(PREMULTIPLIED_OVER),
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

        log::debug!("polygon pipeline built for {:?}", ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);
        self.bind_group = None;
        self.viewport_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.viewport_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let viewport_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("hexmap polygon viewport ubo"),
            size: ViewportUniform::SIZE.get(),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("hexmap polygon bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        self.viewport_ubo = Some(viewport_ubo);
        self.bind_group = Some(bind_group);
    }

    fn write_viewport_uniform(&self, ctx: &RenderCtx<'_>) {
        let Some(ubo) = self.viewport_ubo.as_ref() else { return };
        ctx.queue.write_buffer(
            ubo,
            0,
            bytemuck::bytes_of(&ViewportUniform::new(ctx.viewport.width, ctx.viewport.height)),
        );
    }

    fn ensure_vertex_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.vertex_capacity && self.vertex_vbo.is_some() {
            return;
        }
        let new_cap = required.next_power_of_two().max(1024);
        let new_size = (new_cap * std::mem::size_of::<PolygonVertex>()) as u64;
        self.vertex_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("hexmap polygon vbo"),
            size: new_size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vertex_capacity = new_cap;
    }
}

// ── tessellation ──────────────────────────────────────────────────────────

/// Appends the triangles for `cmd` to `out`.
///
/// Emits `3 * (n - 2)` vertices for the fill and `6 * n` for the border.
fn tessellate(cmd: &PolygonCmd, out: &mut Vec<PolygonVertex>) {
    if cmd.is_degenerate() || cmd.points.iter().any(|p| !p.is_finite()) {
        return;
    }
    let pts = &cmd.points;
    let n = pts.len();

    if let Some(fill) = cmd.fill {
        let color = fill.to_array();
        for i in 1..n - 1 {
            out.push(PolygonVertex::new(pts[0], color));
            out.push(PolygonVertex::new(pts[i], color));
            out.push(PolygonVertex::new(pts[i + 1], color));
        }
    }

    let Some(border) = cmd.border else { return };
    let half = border.width * 0.5;
    if half <= 0.0 {
        return;
    }
    let color = border.color.to_array();

    let offsets: Vec<Vec2> = (0..n)
        .map(|i| miter_offset(pts[(i + n - 1) % n], pts[i], pts[(i + 1) % n], half))
        .collect();

    for i in 0..n {
        let j = (i + 1) % n;
        let (a_out, a_in) = (pts[i] + offsets[i], pts[i] - offsets[i]);
        let (b_out, b_in) = (pts[j] + offsets[j], pts[j] - offsets[j]);

        out.push(PolygonVertex::new(a_out, color));
        out.push(PolygonVertex::new(b_out, color));
        out.push(PolygonVertex::new(b_in, color));

        out.push(PolygonVertex::new(a_out, color));
        out.push(PolygonVertex::new(b_in, color));
        out.push(PolygonVertex::new(a_in, color));
    }
}

/// Offset from `cur` to the outer stroke edge at that corner.
fn miter_offset(prev: Vec2, cur: Vec2, next: Vec2, half: f32) -> Vec2 {
    let n0 = edge_normal(prev, cur);
    let n1 = edge_normal(cur, next);
    let sum = n0 + n1;
    let len = sum.length();
    if len <= f32::EPSILON {
        return n1 * half;
    }
    let miter = sum / len;
    let cos = miter.dot(n1);
    let scale = (half / cos.max(1.0 / MITER_LIMIT)).min(half * MITER_LIMIT);
    miter * scale
}

fn edge_normal(a: Vec2, b: Vec2) -> Vec2 {
    let d = b - a;
    let len = d.length();
    if len <= f32::EPSILON {
        Vec2::zero()
    } else {
        Vec2::new(d.y / len, -d.x / len)
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Vertex layout (24 bytes):
///
///  offset  0  pos    [f32; 2]   loc 0  (logical px)
///  offset  8  color  [f32; 4]   loc 1  (premultiplied)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct PolygonVertex {
    pos: [f32; 2],
    color: [f32; 4],
}

impl PolygonVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    #[inline]
    fn new(p: Vec2, color: [f32; 4]) -> Self {
        Self { pos: [p.x, p.y], color }
    }

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PolygonVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}
