//! Shader sources shipped with the demos.

use shuriken_engine::shader::ShaderSource;

/// Position passed straight to clip space; no uniforms.
pub const FLAT_VERTEX: ShaderSource = ShaderSource::vertex(include_str!("flat.vert.wgsl"));

/// Position transformed by the `world`, `view` and `proj` uniforms.
pub const TRANSFORM_VERTEX: ShaderSource =
    ShaderSource::vertex(include_str!("transform.vert.wgsl"));

/// Interpolated vertex color, opaque.
pub const COLOR_FRAGMENT: ShaderSource = ShaderSource::fragment(include_str!("color.frag.wgsl"));
