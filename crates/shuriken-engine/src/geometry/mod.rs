//! Static vertex geometry.
//!
//! Vertices are interleaved `position + color` records uploaded once and never
//! touched again. The layout describing how a shader reads them is checked
//! against the record type at bind time, so a wrong stride or offset is an
//! error instead of garbled triangles.

mod buffer;
mod error;
mod layout;
mod record;

pub use buffer::GeometryBuffer;
pub use error::GeometryError;
pub use layout::{AttributeBinding, VertexLayout, FLOAT_BYTES};
pub use record::{Vertex2, Vertex3, VertexRecord};
