/// Misuse of a vertex layout or geometry upload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("attribute at location {slot}: {components} components unsupported (expected 2 or 3)")]
    UnsupportedComponentCount { slot: u32, components: u32 },

    #[error("stride of {actual} bytes does not match the {expected}-byte vertex record")]
    StrideMismatch { expected: u64, actual: u64 },

    #[error("attribute at location {slot}: offset {offset} does not start a field (fields start at {valid:?})")]
    OffsetMismatch { slot: u32, offset: u64, valid: Vec<u64> },

    #[error("attribute at location {slot}: field at offset {offset} has {expected} components, not {components}")]
    ComponentMismatch { slot: u32, offset: u64, components: u32, expected: u32 },

    #[error("location {slot} is already bound")]
    SlotInUse { slot: u32 },

    #[error("cannot upload an empty vertex set")]
    Empty,

    #[error("{0} vertices exceed the draw range")]
    TooManyVertices(usize),
}
