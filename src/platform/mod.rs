//! Browser/native platform glue
//!
//! The simulation consumes time as plain seconds; this module turns host
//! timestamps into the elapsed/delta pair the frame loop feeds it.

/// Frame clock fed host timestamps in milliseconds
///
/// Mirrors the clock collaborator the game loop expects: `elapsed()` is
/// monotonic seconds since the first advance, and each `advance` returns
/// the delta in seconds since the previous one.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    started: bool,
    last_ms: f64,
    elapsed: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to `now_ms`, returning seconds since the previous call
    /// (zero on the first call, which starts the clock)
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let delta = if self.started {
            (((now_ms - self.last_ms) / 1000.0).max(0.0)) as f32
        } else {
            self.started = true;
            0.0
        };
        self.last_ms = now_ms;
        self.elapsed += delta;
        delta
    }

    /// Seconds since the clock started
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_advance_starts_the_clock() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(5000.0), 0.0);
        assert_eq!(clock.elapsed(), 0.0);
    }

    #[test]
    fn deltas_accumulate_into_elapsed() {
        let mut clock = FrameClock::new();
        clock.advance(1000.0);
        assert!((clock.advance(1016.0) - 0.016).abs() < 1e-6);
        assert!((clock.advance(1032.0) - 0.016).abs() < 1e-6);
        assert!((clock.elapsed() - 0.032).abs() < 1e-6);
    }

    #[test]
    fn backwards_timestamps_clamp_to_zero() {
        let mut clock = FrameClock::new();
        clock.advance(1000.0);
        assert_eq!(clock.advance(900.0), 0.0);
    }
}
