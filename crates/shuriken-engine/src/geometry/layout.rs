use super::{GeometryError, VertexRecord};

/// Size of one vertex component.
pub const FLOAT_BYTES: u64 = std::mem::size_of::<f32>() as u64;

/// One shader attribute reading from the vertex buffer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AttributeBinding {
    pub slot: u32,
    pub components: u32,
    pub offset: u64,
}

/// How a shader interprets one interleaved vertex buffer.
///
/// Built for a concrete [`VertexRecord`]; every binding is checked against the
/// record's field order.
#[derive(Debug, Clone)]
pub struct VertexLayout {
    stride: u64,
    fields: &'static [u32],
    bindings: Vec<AttributeBinding>,
    attributes: Vec<wgpu::VertexAttribute>,
}

impl VertexLayout {
    /// Creates an empty layout for records of type `V`.
    pub fn new<V: VertexRecord>() -> Self {
        Self {
            stride: std::mem::size_of::<V>() as u64,
            fields: V::FIELDS,
            bindings: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// Creates a layout binding each field of `V`, in order, to `slots`.
    pub fn for_record<V: VertexRecord>(slots: &[u32]) -> Result<Self, GeometryError> {
        let mut layout = Self::new::<V>();
        for (i, (&slot, &components)) in slots.iter().zip(V::FIELDS).enumerate() {
            let offset = layout.field_offset(i);
            layout.bind_attribute(slot, components, layout.stride, offset)?;
        }
        Ok(layout)
    }

    /// Size of one vertex in bytes.
    pub fn stride(&self) -> u64 {
        self.stride
    }

    /// Number of fields in the record.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Byte offset of field `index` (sum of the preceding fields).
    pub fn field_offset(&self, index: usize) -> u64 {
        self.fields[..index].iter().map(|&c| u64::from(c) * FLOAT_BYTES).sum()
    }

    pub fn bindings(&self) -> &[AttributeBinding] {
        &self.bindings
    }

    pub fn binding_at(&self, slot: u32) -> Option<&AttributeBinding> {
        self.bindings.iter().find(|b| b.slot == slot)
    }

    /// Describes how attribute `slot` reads the buffer.
    ///
    /// `components` must be 2 or 3, `stride_bytes` must be the record size and
    /// `offset_bytes` must be the start of a field with exactly `components`
    /// floats.
    pub fn bind_attribute(
        &mut self,
        slot: u32,
        components: u32,
        stride_bytes: u64,
        offset_bytes: u64,
    ) -> Result<(), GeometryError> {
        let format = match components {
            2 => wgpu::VertexFormat::Float32x2,
            3 => wgpu::VertexFormat::Float32x3,
            _ => return Err(GeometryError::UnsupportedComponentCount { slot, components }),
        };

        if stride_bytes != self.stride {
            return Err(GeometryError::StrideMismatch {
                expected: self.stride,
                actual: stride_bytes,
            });
        }

        let field = (0..self.fields.len()).find(|&i| self.field_offset(i) == offset_bytes);
        let Some(field) = field else {
            return Err(GeometryError::OffsetMismatch {
                slot,
                offset: offset_bytes,
                valid: (0..self.fields.len()).map(|i| self.field_offset(i)).collect(),
            });
        };

        let expected = self.fields[field];
        if expected != components {
            return Err(GeometryError::ComponentMismatch {
                slot,
                offset: offset_bytes,
                components,
                expected,
            });
        }

        if self.binding_at(slot).is_some() {
            return Err(GeometryError::SlotInUse { slot });
        }

        self.bindings.push(AttributeBinding { slot, components, offset: offset_bytes });
        self.attributes.push(wgpu::VertexAttribute {
            format,
            offset: offset_bytes,
            shader_location: slot,
        });
        Ok(())
    }

    /// Returns the wgpu description of this layout.
    pub fn buffer_layout(&self) -> wgpu::VertexBufferLayout<'_> {
        wgpu::VertexBufferLayout {
            array_stride: self.stride,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &self.attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Vertex2, Vertex3};

    // ── record layout ─────────────────────────────────────────────────────

    #[test]
    fn vertex3_stride_and_offsets() {
        let layout = VertexLayout::new::<Vertex3>();
        assert_eq!(layout.stride(), 6 * FLOAT_BYTES);
        assert_eq!(layout.field_offset(0), 0);
        assert_eq!(layout.field_offset(1), 3 * FLOAT_BYTES);
    }

    #[test]
    fn vertex2_stride_and_offsets() {
        let layout = VertexLayout::new::<Vertex2>();
        assert_eq!(layout.stride(), 5 * FLOAT_BYTES);
        assert_eq!(layout.field_offset(0), 0);
        assert_eq!(layout.field_offset(1), 2 * FLOAT_BYTES);
    }

    #[test]
    fn for_record_binds_fields_in_order() {
        let layout = VertexLayout::for_record::<Vertex2>(&[4, 9]).unwrap();
        assert_eq!(
            layout.bindings(),
            &[
                AttributeBinding { slot: 4, components: 2, offset: 0 },
                AttributeBinding { slot: 9, components: 3, offset: 8 },
            ]
        );
        let wgpu_layout = layout.buffer_layout();
        assert_eq!(wgpu_layout.array_stride, 20);
        assert_eq!(wgpu_layout.attributes[1].format, wgpu::VertexFormat::Float32x3);
        assert_eq!(wgpu_layout.attributes[1].shader_location, 9);
    }

    // ── bind_attribute checks ─────────────────────────────────────────────

    #[test]
    fn rejects_unsupported_component_count() {
        let mut layout = VertexLayout::new::<Vertex3>();
        let err = layout.bind_attribute(0, 4, 24, 0).unwrap_err();
        assert_eq!(err, GeometryError::UnsupportedComponentCount { slot: 0, components: 4 });
    }

    #[test]
    fn rejects_wrong_stride() {
        let mut layout = VertexLayout::new::<Vertex3>();
        let err = layout.bind_attribute(0, 3, 5 * FLOAT_BYTES, 0).unwrap_err();
        assert_eq!(err, GeometryError::StrideMismatch { expected: 24, actual: 20 });
    }

    #[test]
    fn rejects_offset_inside_a_field() {
        let mut layout = VertexLayout::new::<Vertex3>();
        let err = layout.bind_attribute(1, 3, 24, 2 * FLOAT_BYTES).unwrap_err();
        assert_eq!(
            err,
            GeometryError::OffsetMismatch { slot: 1, offset: 8, valid: vec![0, 12] }
        );
    }

    #[test]
    fn rejects_component_count_of_other_field() {
        let mut layout = VertexLayout::new::<Vertex2>();
        let err = layout.bind_attribute(0, 3, 20, 0).unwrap_err();
        assert!(matches!(err, GeometryError::ComponentMismatch { expected: 2, .. }));
    }

    #[test]
    fn rejects_rebinding_a_slot() {
        let mut layout = VertexLayout::new::<Vertex3>();
        layout.bind_attribute(0, 3, 24, 0).unwrap();
        let err = layout.bind_attribute(0, 3, 24, 12).unwrap_err();
        assert_eq!(err, GeometryError::SlotInUse { slot: 0 });
        assert_eq!(layout.bindings().len(), 1);
    }
}
