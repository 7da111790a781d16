use wgpu::util::DeviceExt;

use super::{GeometryError, VertexLayout, VertexRecord};

/// GPU-resident static vertex data plus the layout used to read it.
pub struct GeometryBuffer {
    buffer: wgpu::Buffer,
    vertex_count: u32,
    layout: VertexLayout,
}

impl GeometryBuffer {
    /// Uploads `vertices` once. The buffer is never written again.
    pub fn upload<V: VertexRecord>(
        device: &wgpu::Device,
        label: &str,
        vertices: &[V],
    ) -> Result<Self, GeometryError> {
        if vertices.is_empty() {
            return Err(GeometryError::Empty);
        }
        let vertex_count = u32::try_from(vertices.len())
            .map_err(|_| GeometryError::TooManyVertices(vertices.len()))?;

        let contents: &[u8] = bytemuck::cast_slice(vertices);
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents,
            usage: wgpu::BufferUsages::VERTEX,
        });

        log::debug!("uploaded {vertex_count} vertices ({} bytes) to `{label}`", contents.len());

        Ok(Self {
            buffer,
            vertex_count,
            layout: VertexLayout::new::<V>(),
        })
    }

    /// See [`VertexLayout::bind_attribute`].
    pub fn bind_attribute(
        &mut self,
        slot: u32,
        components: u32,
        stride_bytes: u64,
        offset_bytes: u64,
    ) -> Result<(), GeometryError> {
        self.layout.bind_attribute(slot, components, stride_bytes, offset_bytes)
    }

    pub fn layout(&self) -> &VertexLayout {
        &self.layout
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn slice(&self) -> wgpu::BufferSlice<'_> {
        self.buffer.slice(..)
    }
}
