use naga::valid::{Capabilities, ValidationFlags, Validator};

use super::reflect::{self, ShaderInterface};
use super::{ShaderError, ShaderSource, ShaderStage};

/// A shader stage that parsed, validated and exposes exactly one entry point.
///
/// Holding one of these is proof that compilation succeeded; there is no
/// "failed" handle.
#[derive(Debug, Clone)]
pub struct CompiledShader {
    stage: ShaderStage,
    entry_point: String,
    source: String,
    interface: ShaderInterface,
}

impl CompiledShader {
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn interface(&self) -> &ShaderInterface {
        &self.interface
    }
}

/// Compiles `source` as a shader for `stage`.
///
/// On failure the diagnostic log is returned (and logged); no handle is produced.
pub fn compile(stage: ShaderStage, source: &str) -> Result<CompiledShader, ShaderError> {
    let module = naga::front::wgsl::parse_str(source)
        .map_err(|e| compile_failed(stage, e.emit_to_string(source)))?;

    let mut validator = Validator::new(ValidationFlags::all(), Capabilities::default());
    validator
        .validate(&module)
        .map_err(|e| compile_failed(stage, e.emit_to_string(source)))?;

    let wanted = stage.to_naga();
    let mut candidates = module.entry_points.iter().filter(|ep| ep.stage == wanted);
    let entry = match (candidates.next(), candidates.next()) {
        (Some(ep), None) => ep,
        (None, _) => return Err(compile_failed(stage, format!("no @{stage} entry point"))),
        (Some(_), Some(_)) => {
            return Err(compile_failed(stage, format!("more than one @{stage} entry point")));
        }
    };

    let interface = reflect::reflect(&module, entry).map_err(|log| compile_failed(stage, log))?;

    log::debug!(
        "compiled {stage} shader `{}` ({} inputs, {} outputs, {} uniforms)",
        entry.name,
        interface.inputs.len(),
        interface.outputs.len(),
        interface.uniforms.len()
    );

    Ok(CompiledShader {
        stage,
        entry_point: entry.name.clone(),
        source: source.to_owned(),
        interface,
    })
}

impl ShaderSource {
    /// Compiles this fixed source for its declared stage.
    pub fn compile(&self) -> Result<CompiledShader, ShaderError> {
        compile(self.stage, self.text)
    }
}

fn compile_failed(stage: ShaderStage, log: String) -> ShaderError {
    log::error!("error compiling {stage} shader: {log}");
    ShaderError::compile(stage, log)
}
