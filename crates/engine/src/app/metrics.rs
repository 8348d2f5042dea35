use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use tracing::warn;

static METRICS_LOCK_POISON_WARNED: AtomicBool = AtomicBool::new(false);

fn warn_metrics_lock_poison_once(operation: &'static str) {
    if METRICS_LOCK_POISON_WARNED
        .compare_exchange(false, true, Ordering::Relaxed, Ordering::Relaxed)
        .is_ok()
    {
        warn!(operation, "metrics lock poisoned; recovered inner value");
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoopMetricsSnapshot {
    pub fps: f32,
    pub frame_time_ms: f32,
    pub frames: u64,
}

/// Read side of the loop's averaged frame metrics; cheap to clone.
#[derive(Clone, Debug)]
pub struct MetricsHandle {
    snapshot: Arc<RwLock<LoopMetricsSnapshot>>,
}

impl Default for MetricsHandle {
    fn default() -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(LoopMetricsSnapshot::default())),
        }
    }
}

impl MetricsHandle {
    pub fn snapshot(&self) -> LoopMetricsSnapshot {
        match self.snapshot.read() {
            Ok(guard) => *guard,
            Err(poisoned) => {
                warn_metrics_lock_poison_once("read");
                *poisoned.into_inner()
            }
        }
    }

    pub(crate) fn publish(&self, snapshot: LoopMetricsSnapshot) {
        match self.snapshot.write() {
            Ok(mut guard) => *guard = snapshot,
            Err(poisoned) => {
                warn_metrics_lock_poison_once("write");
                let mut guard = poisoned.into_inner();
                *guard = snapshot;
            }
        }
    }
}

/// Sums frame deltas until a full interval of loop time has passed.
#[derive(Debug)]
pub(crate) struct MetricsAccumulator {
    interval: Duration,
    interval_elapsed: Duration,
    interval_frames: u32,
    total_frames: u64,
}

impl MetricsAccumulator {
    pub(crate) fn new(interval: Duration) -> Self {
        Self {
            interval,
            interval_elapsed: Duration::ZERO,
            interval_frames: 0,
            total_frames: 0,
        }
    }

    pub(crate) fn record_frame(&mut self, delta_seconds: f32) {
        let frame_dt = Duration::try_from_secs_f32(delta_seconds).unwrap_or(Duration::ZERO);
        self.interval_frames = self.interval_frames.saturating_add(1);
        self.total_frames = self.total_frames.saturating_add(1);
        self.interval_elapsed = self.interval_elapsed.saturating_add(frame_dt);
    }

    pub(crate) fn maybe_snapshot(&mut self) -> Option<LoopMetricsSnapshot> {
        if self.interval.is_zero() || self.interval_elapsed < self.interval {
            return None;
        }

        let elapsed_seconds = self.interval_elapsed.as_secs_f32().max(f32::EPSILON);
        let frame_time_ms = if self.interval_frames == 0 {
            0.0
        } else {
            (elapsed_seconds / self.interval_frames as f32) * 1000.0
        };

        let snapshot = LoopMetricsSnapshot {
            fps: self.interval_frames as f32 / elapsed_seconds,
            frame_time_ms,
            frames: self.total_frames,
        };

        self.interval_elapsed = Duration::ZERO;
        self.interval_frames = 0;

        Some(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::RwLock;
    use std::thread;

    use super::*;

    fn poison_lock(lock: &RwLock<LoopMetricsSnapshot>) {
        thread::scope(|scope| {
            let _ = scope
                .spawn(|| {
                    let _guard = lock.write().expect("write guard");
                    panic!("poison metrics lock");
                })
                .join();
        });
    }

    #[test]
    fn snapshot_averages_over_interval() {
        let mut accumulator = MetricsAccumulator::new(Duration::from_secs(1));
        for _ in 0..4 {
            accumulator.record_frame(0.25);
        }

        let snapshot = accumulator
            .maybe_snapshot()
            .expect("snapshot should be emitted");

        assert!((snapshot.fps - 4.0).abs() < 0.05);
        assert!((snapshot.frame_time_ms - 250.0).abs() < 0.01);
        assert_eq!(snapshot.frames, 4);
        assert!(accumulator.maybe_snapshot().is_none());
    }

    #[test]
    fn snapshot_not_emitted_before_interval() {
        let mut accumulator = MetricsAccumulator::new(Duration::from_secs(1));
        accumulator.record_frame(0.016);

        assert!(accumulator.maybe_snapshot().is_none());
    }

    #[test]
    fn zero_and_invalid_deltas_count_frames_without_time() {
        let mut accumulator = MetricsAccumulator::new(Duration::from_millis(10));
        accumulator.record_frame(0.0);
        accumulator.record_frame(f32::NAN);
        assert!(accumulator.maybe_snapshot().is_none());

        accumulator.record_frame(0.02);
        let snapshot = accumulator.maybe_snapshot().expect("snapshot");
        assert_eq!(snapshot.frames, 3);
        assert!((snapshot.fps - 150.0).abs() < 1.0);
    }

    #[test]
    fn snapshot_recovers_after_poison_without_panic() {
        let handle = MetricsHandle::default();
        poison_lock(handle.snapshot.as_ref());

        let snapshot = handle.snapshot();
        assert_eq!(snapshot, LoopMetricsSnapshot::default());
    }

    #[test]
    fn publish_recovers_after_poison_without_panic() {
        let handle = MetricsHandle::default();
        poison_lock(handle.snapshot.as_ref());

        let expected = LoopMetricsSnapshot {
            fps: 60.0,
            frame_time_ms: 16.6,
            frames: 120,
        };
        handle.publish(expected);

        assert_eq!(handle.snapshot(), expected);
    }
}
