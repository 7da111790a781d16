use anyhow::{Context, Result};

use shuriken_engine::device::Gpu;
use shuriken_engine::geometry::{AttributeBinding, GeometryBuffer, VertexRecord, FLOAT_BYTES};
use shuriken_engine::shader::{link, Attribute, GpuProgram, Program, ProgramConfig, ShaderSource, Uniform};
use shuriken_engine::transform::TransformState;

/// A ready-to-draw demo: linked program plus its uploaded geometry.
pub struct DemoPipeline {
    program: GpuProgram,
    geometry: GeometryBuffer,
}

impl DemoPipeline {
    /// Compiles, links and validates the shader pair, uploads `vertices` and
    /// creates the GPU pipeline.
    pub fn build<V: VertexRecord>(
        gpu: &Gpu<'_>,
        label: &str,
        vertex: ShaderSource,
        fragment: ShaderSource,
        vertices: &[V],
        config: ProgramConfig,
    ) -> Result<Self> {
        let vs = vertex.compile().context("vertex shader")?;
        let fs = fragment.compile().context("fragment shader")?;
        let program = link(vs, fs)?;

        let mut geometry = GeometryBuffer::upload(gpu.device(), label, vertices)?;
        let stride = std::mem::size_of::<V>() as u64;
        for b in record_bindings::<V>(&program)? {
            geometry.bind_attribute(b.slot, b.components, stride, b.offset)?;
        }

        if config.validate {
            program.validate(geometry.layout())?;
        }

        let program = GpuProgram::new(gpu.device(), &program, geometry.layout(), gpu.targets())?;
        log::info!("{label}: {} vertices ready", geometry.vertex_count());

        Ok(Self { program, geometry })
    }

    /// Uploads all three matrices.
    pub fn push_transforms(&self, queue: &wgpu::Queue, transforms: &TransformState) {
        self.program.set_uniform(queue, Uniform::World, &transforms.world);
        self.program.set_uniform(queue, Uniform::View, &transforms.view);
        self.program.set_uniform(queue, Uniform::Projection, &transforms.proj);
    }

    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        self.program.draw(pass, &self.geometry);
    }
}

/// Resolves where each field of `V` goes: the program's location for the
/// attribute, the field's width, and its byte offset in the record.
fn record_bindings<V: VertexRecord>(program: &Program) -> Result<Vec<AttributeBinding>> {
    let mut offset = 0;
    let mut bindings = Vec::with_capacity(V::FIELDS.len());
    for (&attribute, &components) in Attribute::ALL.iter().zip(V::FIELDS) {
        bindings.push(AttributeBinding {
            slot: program.require_attribute(attribute)?,
            components,
            offset,
        });
        offset += u64::from(components) * FLOAT_BYTES;
    }
    Ok(bindings)
}
