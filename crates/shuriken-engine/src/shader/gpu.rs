use std::cell::Cell;

use glam::Mat4;

use crate::geometry::{GeometryBuffer, VertexLayout};

use super::{Program, ShaderError, Uniform};

/// Attachment formats a pipeline renders into.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PipelineTargets {
    pub color: wgpu::TextureFormat,
    /// Depth testing is enabled when present.
    pub depth: Option<wgpu::TextureFormat>,
}

/// GPU side of a linked [`Program`]: render pipeline plus one uniform buffer
/// per declared uniform, all in bind group 0.
pub struct GpuProgram {
    pipeline: wgpu::RenderPipeline,
    bind_group: Option<wgpu::BindGroup>,
    uniforms: Vec<(String, u32, wgpu::Buffer)>,
    /// Uniforms already reported as undeclared, one bit per [`Uniform`].
    warned: Cell<u8>,
}

impl GpuProgram {
    /// Allocates the GPU objects for `program` drawn with `layout`.
    pub fn new(
        device: &wgpu::Device,
        program: &Program,
        layout: &VertexLayout,
        targets: PipelineTargets,
    ) -> Result<Self, ShaderError> {
        if let Some(u) = program.uniforms().iter().find(|u| u.slot.group != 0) {
            let log = format!(
                "uniform `{}` is in @group({}); only group 0 is supported",
                u.slot.name, u.slot.group
            );
            log::error!("error linking program: {log}");
            return Err(ShaderError::link(log));
        }

        let vs = program.vertex();
        let fs = program.fragment();

        let vs_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("shuriken vertex shader"),
            source: wgpu::ShaderSource::Wgsl(vs.source().to_owned().into()),
        });
        let fs_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("shuriken fragment shader"),
            source: wgpu::ShaderSource::Wgsl(fs.source().to_owned().into()),
        });

        let layout_entries: Vec<wgpu::BindGroupLayoutEntry> = program
            .uniforms()
            .iter()
            .map(|u| wgpu::BindGroupLayoutEntry {
                binding: u.slot.binding,
                visibility: u.visibility,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: std::num::NonZeroU64::new(u64::from(u.slot.size)),
                },
                count: None,
            })
            .collect();

        let uniforms: Vec<(String, u32, wgpu::Buffer)> = program
            .uniforms()
            .iter()
            .map(|u| {
                let buffer = device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some(&format!("shuriken uniform {}", u.slot.name)),
                    size: u64::from(u.slot.size),
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                });
                (u.slot.name.clone(), u.slot.binding, buffer)
            })
            .collect();

        let (bind_group_layout, bind_group) = if uniforms.is_empty() {
            (None, None)
        } else {
            let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("shuriken uniforms bgl"),
                entries: &layout_entries,
            });
            let entries: Vec<wgpu::BindGroupEntry> = uniforms
                .iter()
                .map(|(_, binding, buffer)| wgpu::BindGroupEntry {
                    binding: *binding,
                    resource: buffer.as_entire_binding(),
                })
                .collect();
            let bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("shuriken uniforms bind group"),
                layout: &bgl,
                entries: &entries,
            });
            (Some(bgl), Some(bg))
        };

        let bind_group_layouts: Vec<&wgpu::BindGroupLayout> = bind_group_layout.iter().collect();
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("shuriken pipeline layout"),
            bind_group_layouts: &bind_group_layouts,
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("shuriken pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &vs_module,
                entry_point: Some(vs.entry_point()),
                compilation_options: Default::default(),
                buffers: &[layout.buffer_layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &fs_module,
                entry_point: Some(fs.entry_point()),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: targets.color,
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

            depth_stencil: targets.depth.map(|format| wgpu::DepthStencilState {
                format,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::info!(
            "created pipeline ({} attributes, {} uniforms, depth test {})",
            layout.bindings().len(),
            uniforms.len(),
            if targets.depth.is_some() { "on" } else { "off" }
        );

        Ok(Self {
            pipeline,
            bind_group,
            uniforms,
            warned: Cell::new(0),
        })
    }

    /// Uploads a matrix to `uniform`.
    ///
    /// Returns `false` without touching the GPU when the program does not
    /// declare it; the first such call per uniform logs a warning.
    pub fn set_uniform(&self, queue: &wgpu::Queue, uniform: Uniform, value: &Mat4) -> bool {
        let Some((_, _, buffer)) = self.uniforms.iter().find(|(name, ..)| name == uniform.name())
        else {
            let bit = 1u8 << uniform as u8;
            if self.warned.get() & bit == 0 {
                self.warned.set(self.warned.get() | bit);
                log::warn!("program does not declare uniform `{uniform}`; value ignored");
            }
            return false;
        };
        let cols = value.to_cols_array();
        queue.write_buffer(buffer, 0, bytemuck::cast_slice(&cols));
        true
    }

    /// Records one non-indexed draw over every vertex in `geometry`.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>, geometry: &GeometryBuffer) {
        pass.set_pipeline(&self.pipeline);
        if let Some(bind_group) = &self.bind_group {
            pass.set_bind_group(0, bind_group, &[]);
        }
        pass.set_vertex_buffer(0, geometry.slice());
        pass.draw(0..geometry.vertex_count(), 0..1);
    }
}
