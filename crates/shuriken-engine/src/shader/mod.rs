//! Shader compilation and program linking.
//!
//! The pipeline mirrors the classic compile → link → validate sequence:
//! - [`compile`] parses and validates one WGSL stage and reflects its interface
//! - [`link`] pairs a vertex and a fragment stage and checks their varyings
//! - [`Program::validate`] checks the program against a vertex layout
//! - [`GpuProgram`] turns a linked program into a wgpu render pipeline
//!
//! Everything up to `GpuProgram` runs on the CPU and needs no device.

mod compile;
mod error;
mod gpu;
mod program;
mod reflect;
mod source;

pub use compile::{compile, CompiledShader};
pub use error::ShaderError;
pub use gpu::{GpuProgram, PipelineTargets};
pub use program::{
    link, Attribute, Program, ProgramConfig, ProgramUniform, Uniform, UniformLocation,
};
pub use reflect::{IoSlot, IoType, ShaderInterface, UniformSlot};
pub use source::{ShaderSource, ShaderStage};
