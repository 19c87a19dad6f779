//! Driver configuration.

use std::time::Duration;

use sortvis_engine::Algorithm;

/// Fastest cadence the speed control allows.
pub const MIN_STEP_DELAY: Duration = Duration::from_millis(1);
/// Slowest cadence the speed control allows.
pub const MAX_STEP_DELAY: Duration = Duration::from_secs(1);

/// Configuration options for a [`Driver`](crate::Driver).
#[derive(Debug, Clone)]
pub struct DriverOptions {
    /// Variant selected at start-up.
    pub algorithm: Algorithm,
    /// Number of keys (bars).
    pub size: usize,
    /// Upper bound of the random part of each key (the bar height range).
    pub max_height: i32,
    /// Time between two steps; clamped to `MIN_STEP_DELAY..=MAX_STEP_DELAY`.
    pub step_delay: Duration,
    /// Seed for key generation and Bogo's shuffles. `None` draws one from
    /// the OS.
    pub seed: Option<u64>,
    /// Whether stepping is paused until the caller resumes it.
    pub start_paused: bool,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Bubble,
            size: 99,
            // 540 px window height over 1.5.
            max_height: 360,
            step_delay: Duration::from_millis(100),
            seed: None,
            start_paused: true,
        }
    }
}

/// Clamp `delay` into the range the speed control exposes.
pub fn clamp_step_delay(delay: Duration) -> Duration {
    delay.clamp(MIN_STEP_DELAY, MAX_STEP_DELAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_window_layout() {
        let options = DriverOptions::default();
        assert_eq!(options.algorithm, Algorithm::Bubble);
        assert_eq!(options.size, 99);
        assert_eq!(options.max_height, 360);
        assert!(options.start_paused);
    }

    #[test]
    fn delay_is_clamped_both_ways() {
        assert_eq!(clamp_step_delay(Duration::ZERO), MIN_STEP_DELAY);
        assert_eq!(clamp_step_delay(Duration::from_secs(5)), MAX_STEP_DELAY);
        assert_eq!(
            clamp_step_delay(Duration::from_millis(250)),
            Duration::from_millis(250)
        );
    }
}
