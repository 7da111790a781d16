use bytemuck::{Pod, Zeroable};

/// A fixed-size interleaved vertex.
///
/// `FIELDS` lists the float component count of each attribute in memory
/// order; the record must be exactly those floats packed back to back.
pub trait VertexRecord: Pod {
    const FIELDS: &'static [u32];
}

/// 2D position + RGB color (5 floats).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex2 {
    pub position: [f32; 2],
    pub color: [f32; 3],
}

impl Vertex2 {
    pub const fn new(position: [f32; 2], color: [f32; 3]) -> Self {
        Self { position, color }
    }
}

impl VertexRecord for Vertex2 {
    const FIELDS: &'static [u32] = &[2, 3];
}

/// 3D position + RGB color (6 floats).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex3 {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex3 {
    pub const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }
}

impl VertexRecord for Vertex3 {
    const FIELDS: &'static [u32] = &[3, 3];
}

const _: () = assert!(std::mem::size_of::<Vertex2>() == 5 * 4);
const _: () = assert!(std::mem::size_of::<Vertex3>() == 6 * 4);
