use std::time::Instant;

/// Process start timestamp plus the most recent frame delta.
#[derive(Debug, Clone)]
pub struct FrameClock {
    started_at: Instant,
    delta_seconds: f32,
    frame_start_seconds: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(started_at: Instant) -> Self {
        Self {
            started_at,
            delta_seconds: 0.0,
            frame_start_seconds: 0.0,
        }
    }

    /// Monotonic seconds since the clock was created.
    pub fn elapsed_since_start(&self) -> f64 {
        Instant::now()
            .saturating_duration_since(self.started_at)
            .as_secs_f64()
    }

    pub fn set_delta(&mut self, delta_seconds: f32) {
        self.delta_seconds = delta_seconds;
    }

    pub fn delta(&self) -> f32 {
        self.delta_seconds
    }

    pub fn frame_start(&self) -> f64 {
        self.frame_start_seconds
    }

    /// Records `elapsed_seconds` as the new frame start and returns the time
    /// since the previous one. Negative gaps collapse to zero.
    pub fn mark_frame(&mut self, elapsed_seconds: f64) -> f32 {
        let delta = (elapsed_seconds - self.frame_start_seconds).max(0.0) as f32;
        self.frame_start_seconds = elapsed_seconds;
        self.set_delta(delta);
        delta
    }

    pub fn mark_frame_now(&mut self) -> f32 {
        let now = self.elapsed_since_start();
        self.mark_frame(now)
    }
}

/// Instantaneous frames per second for a readout; `None` when no time passed.
pub fn frame_rate(delta_seconds: f32) -> Option<f32> {
    (delta_seconds > 0.0).then(|| 1.0 / delta_seconds)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn delta_is_difference_of_frame_starts() {
        let mut clock = FrameClock::new();
        clock.mark_frame(1.000);
        let delta = clock.mark_frame(1.016);

        assert!((delta - 0.016).abs() < 1e-5);
        assert!((clock.delta() - 0.016).abs() < 1e-5);
        assert!((clock.frame_start() - 1.016).abs() < 1e-12);

        let fps = frame_rate(clock.delta()).expect("fps");
        assert!((fps - 62.5).abs() < 0.01);
    }

    #[test]
    fn degenerate_deltas_become_zero() {
        let mut clock = FrameClock::new();
        clock.mark_frame(2.0);
        assert_eq!(clock.mark_frame(2.0), 0.0);
        assert_eq!(clock.mark_frame(1.5), 0.0);
        assert_eq!(frame_rate(0.0), None);
        assert_eq!(frame_rate(-1.0), None);
    }

    #[test]
    fn elapsed_never_decreases() {
        let started_at = Instant::now()
            .checked_sub(Duration::from_millis(50))
            .unwrap_or_else(Instant::now);
        let clock = FrameClock::starting_at(started_at);

        let first = clock.elapsed_since_start();
        let second = clock.elapsed_since_start();
        assert!(second >= first);
    }

    #[test]
    fn set_delta_is_read_back() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.delta(), 0.0);
        clock.set_delta(0.25);
        assert_eq!(clock.delta(), 0.25);
    }
}
