use std::time::{Duration, Instant};

/// Decouples the movement cadence from the render frame rate.
///
/// One reference instant backs both operations, as in a stopwatch that is
/// restarted whenever either of them fires.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct MoveTimer {
    last: Instant,
}

impl MoveTimer {
    pub(super) fn new() -> MoveTimer {
        MoveTimer {
            last: Instant::now(),
        }
    }

    /// Non-blocking poll: `true`, at most once per elapsed `interval`, when
    /// enough wall-clock time has passed since the last firing.  Callers
    /// invoke this every frame and step the simulation only on `true`.
    pub(super) fn should_step(&mut self, interval: Duration) -> bool {
        if self.last.elapsed() >= interval {
            self.last = Instant::now();
            true
        } else {
            false
        }
    }

    /// Wall-clock time since the previous `mark`, resetting the reference
    /// point.  For frame-delta bookkeeping; the movement cadence only uses
    /// [`MoveTimer::should_step`].
    #[allow(unused)]
    pub(super) fn mark(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        elapsed
    }
}
