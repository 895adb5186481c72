use std::time::{Duration, Instant};

use super::{Clock, SystemClock};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds (clamped).
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter since the last reset.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots from a `Clock`.
///
/// `now` is always the raw clock reading; only `dt` is clamped, so elapsed-time
/// arithmetic done by callers is unaffected by the clamps.
pub struct FrameClock {
    source: Box<dyn Clock>,
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a clock reading the system time with default clamps.
    pub fn new() -> Self {
        Self::with_source(Box::new(SystemClock))
    }

    /// Creates a clock over an arbitrary time source with default clamps.
    ///
    /// Clamp rationale:
    /// - minimum prevents zero-dt behavior from tight loops on some platforms
    /// - maximum keeps dt readable after long stalls (debugger, minimized window)
    pub fn with_source(source: Box<dyn Clock>) -> Self {
        Self::with_clamps(source, Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(source: Box<dyn Clock>, dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        let last = source.now();
        Self {
            source,
            last,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Reads the underlying clock without advancing the frame counter.
    #[inline]
    pub fn now(&self) -> Instant {
        self.source.now()
    }

    /// Resets the baseline and frame counter, e.g. when a loop (re)starts.
    pub fn reset(&mut self) {
        self.last = self.source.now();
        self.frame_index = 0;
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = self.source.now();
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FrameClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameClock")
            .field("last", &self.last)
            .field("frame_index", &self.frame_index)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::ManualClock;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn tick_reports_raw_now_and_counts_frames() {
        let clock = ManualClock::new();
        let mut frames = FrameClock::with_source(Box::new(clock.clone()));

        clock.advance(ms(16));
        let a = frames.tick();
        clock.advance(ms(17));
        let b = frames.tick();

        assert_eq!(a.frame_index, 0);
        assert_eq!(b.frame_index, 1);
        assert_eq!(b.now, clock.now());
        assert!((b.dt - 0.017).abs() < 1e-6);
    }

    #[test]
    fn dt_is_clamped_but_now_is_not() {
        let clock = ManualClock::new();
        let mut frames = FrameClock::with_source(Box::new(clock.clone()));

        clock.advance(Duration::from_secs(5));
        let stalled = frames.tick();
        assert_eq!(stalled.dt, 0.25);
        assert_eq!(stalled.now, clock.now());

        let same_instant = frames.tick();
        assert_eq!(same_instant.dt, 0.0001);
    }

    #[test]
    fn reset_restarts_frame_index() {
        let clock = ManualClock::new();
        let mut frames = FrameClock::with_source(Box::new(clock.clone()));
        frames.tick();
        frames.tick();
        frames.reset();
        assert_eq!(frames.tick().frame_index, 0);
    }
}
