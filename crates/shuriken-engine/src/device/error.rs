/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); terminate gracefully.
    Fatal,
}

/// No rendering context could be obtained (no adapter, device or surface).
///
/// Attached as context to the underlying wgpu error so callers can
/// `downcast_ref` it out of an `anyhow::Error`.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("rendering context unavailable: {0}")]
pub struct ContextUnavailable(pub &'static str);

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Context, Result};

    fn missing_adapter() -> Result<()> {
        let adapter: Option<()> = None;
        adapter.context(ContextUnavailable("failed to find a suitable GPU adapter"))?;
        Ok(())
    }

    #[test]
    fn context_unavailable_survives_outer_context() {
        let err = missing_adapter()
            .context("GPU initialization failed for window")
            .unwrap_err();

        let cause = err.downcast_ref::<ContextUnavailable>();
        assert_eq!(cause, Some(&ContextUnavailable("failed to find a suitable GPU adapter")));
        assert!(format!("{err:#}").contains("rendering context unavailable"));
    }

    #[test]
    fn context_unavailable_wraps_underlying_error() {
        let io: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::other("no surface"));
        let err = io.context(ContextUnavailable("failed to create wgpu surface")).unwrap_err();

        assert!(err.downcast_ref::<ContextUnavailable>().is_some());
        assert!(err.downcast_ref::<std::io::Error>().is_some());
    }
}
