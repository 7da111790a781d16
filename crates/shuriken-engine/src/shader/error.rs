use super::ShaderStage;

/// Failure raised while building a shader program.
///
/// Every variant carries the diagnostic log produced by the failing step.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShaderError {
    /// The source text was rejected by the WGSL front end or validator.
    #[error("failed to compile {stage} shader:\n{log}")]
    Compile { stage: ShaderStage, log: String },

    /// The two stages do not form a usable pipeline.
    #[error("failed to link program: {log}")]
    Link { log: String },

    /// The program does not agree with the state it will be drawn with.
    #[error("program validation failed: {log}")]
    Validation { log: String },
}

impl ShaderError {
    pub(crate) fn compile(stage: ShaderStage, log: impl Into<String>) -> Self {
        Self::Compile { stage, log: log.into() }
    }

    pub(crate) fn link(log: impl Into<String>) -> Self {
        Self::Link { log: log.into() }
    }

    pub(crate) fn validation(log: impl Into<String>) -> Self {
        Self::Validation { log: log.into() }
    }

    /// Returns the diagnostic log attached to this error.
    pub fn log(&self) -> &str {
        match self {
            ShaderError::Compile { log, .. }
            | ShaderError::Link { log }
            | ShaderError::Validation { log } => log,
        }
    }
}
