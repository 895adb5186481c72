use std::time::{Duration, Instant};

/// Spaces redraw requests at least `interval` apart.
#[derive(Debug, Clone)]
pub(crate) struct FramePacer {
    interval: Duration,
    last: Option<Instant>,
}

impl FramePacer {
    pub(crate) fn new(interval: Duration) -> Self {
        Self { interval, last: None }
    }

    /// Earliest instant the next redraw may happen; `None` when it may happen now.
    pub(crate) fn wait_until(&self, now: Instant) -> Option<Instant> {
        let deadline = self.last? + self.interval;
        (deadline > now).then_some(deadline)
    }

    pub(crate) fn mark(&mut self, at: Instant) {
        self.last = Some(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_is_immediate() {
        let pacer = FramePacer::new(Duration::from_millis(16));
        assert_eq!(pacer.wait_until(Instant::now()), None);
    }

    #[test]
    fn waits_out_the_interval() {
        let t0 = Instant::now();
        let mut pacer = FramePacer::new(Duration::from_millis(16));
        pacer.mark(t0);

        let deadline = t0 + Duration::from_millis(16);
        assert_eq!(pacer.wait_until(t0 + Duration::from_millis(5)), Some(deadline));
        assert_eq!(pacer.wait_until(deadline), None);
        assert_eq!(pacer.wait_until(t0 + Duration::from_millis(40)), None);
    }
}
