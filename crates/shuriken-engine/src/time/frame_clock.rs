/// Counts rendered frames.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    frame_index: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index the next tick will return (number of frames ticked so far).
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Returns the index of the frame being rendered, then advances.
    pub fn tick(&mut self) -> u64 {
        let index = self.frame_index;
        self.frame_index = self.frame_index.wrapping_add(1);
        index
    }
}

/// Optional cap on the number of rendered frames.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FrameLimit {
    max: Option<u64>,
}

impl FrameLimit {
    pub const fn new(max: Option<u64>) -> Self {
        Self { max }
    }

    /// Whether frame `index` (zero-based) may still render.
    pub fn allows(&self, index: u64) -> bool {
        self.max.is_none_or(|max| index < max)
    }

    /// Whether the run is over once frame `index` has rendered.
    pub fn exhausted_after(&self, index: u64) -> bool {
        !self.allows(index.saturating_add(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drives `iterations` redraws the way the runtime does and returns how
    /// many frames rendered before the loop stopped.
    fn rendered_frames(limit: FrameLimit, iterations: u64) -> u64 {
        let mut clock = FrameClock::new();
        let mut rendered = 0;
        for _ in 0..iterations {
            if !limit.allows(clock.frame_index()) {
                break;
            }
            let index = clock.tick();
            rendered += 1;
            if limit.exhausted_after(index) {
                break;
            }
        }
        rendered
    }

    // ── clock ─────────────────────────────────────────────────────────────

    #[test]
    fn tick_counts_from_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(), 0);
        assert_eq!(clock.tick(), 1);
        assert_eq!(clock.frame_index(), 2);
    }

    // ── limit ─────────────────────────────────────────────────────────────

    #[test]
    fn limit_of_one_renders_one_frame() {
        assert_eq!(rendered_frames(FrameLimit::new(Some(1)), 10), 1);
    }

    #[test]
    fn limit_of_three_renders_three_frames() {
        assert_eq!(rendered_frames(FrameLimit::new(Some(3)), 10), 3);
    }

    #[test]
    fn limit_of_zero_renders_nothing() {
        assert_eq!(rendered_frames(FrameLimit::new(Some(0)), 10), 0);
        assert!(FrameLimit::new(Some(0)).exhausted_after(0));
    }

    #[test]
    fn no_limit_never_stops() {
        assert_eq!(rendered_frames(FrameLimit::default(), 500), 500);
        assert!(!FrameLimit::default().exhausted_after(u64::MAX));
    }
}
