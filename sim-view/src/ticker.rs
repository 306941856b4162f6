//! Fixed-cadence simulation clock, decoupled from the frame rate.

/// Smallest tick interval the ticker will honour, in seconds.
const MIN_INTERVAL: f64 = 1e-4;

/// Converts frame timestamps into a number of due simulation ticks.
///
/// Ticks are scheduled every `interval` seconds regardless of how often
/// frames are drawn. When frames arrive late, the missed ticks are caught
/// up on the next frame, but never more than `max_per_frame` at once; any
/// backlog beyond that is dropped.
///
/// ### Fields
/// - `interval` - Target time between simulation ticks (seconds).
/// - `max_per_frame` - Upper bound on ticks returned by a single [`Ticker::due`].
/// - `last` - Time stamp the next tick is measured from, `None` until the
///   first frame has been seen.
#[derive(Debug, Clone)]
pub struct Ticker {
    pub interval: f64,
    pub max_per_frame: u32,
    last: Option<f64>,
}

impl Ticker {
    pub fn new(interval: f64, max_per_frame: u32) -> Self {
        Self {
            interval,
            max_per_frame,
            last: None,
        }
    }

    /// Returns how many ticks are due at time `now` and consumes them.
    ///
    /// The first call only starts the clock and returns `0`.
    pub fn due(&mut self, now: f64) -> u32 {
        let Some(last) = self.last else {
            self.last = Some(now);
            return 0;
        };

        let interval = self.interval.max(MIN_INTERVAL);
        let elapsed = now - last;
        if elapsed < interval {
            return 0;
        }

        let ticks = (elapsed / interval).floor();
        if ticks > self.max_per_frame as f64 {
            self.last = Some(now);
            return self.max_per_frame;
        }

        self.last = Some(last + ticks * interval);
        ticks as u32
    }

    /// Forgets the last tick time, e.g. after pausing.
    pub fn restart(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_only_starts_the_clock() {
        let mut t = Ticker::new(0.1, 100);
        assert_eq!(t.due(5.0), 0);
    }

    #[test]
    fn ticks_follow_interval_not_frame_rate() {
        let mut t = Ticker::new(0.1, 100);
        t.due(0.0);

        // Frame faster than the interval: nothing due yet.
        assert_eq!(t.due(0.05), 0);
        // 0.35 s after start: three whole intervals.
        assert_eq!(t.due(0.35), 3);
        // The remaining 0.05 s carry over to the next frame.
        assert_eq!(t.due(0.41), 1);
    }

    #[test]
    fn catch_up_is_capped_per_frame() {
        let mut t = Ticker::new(0.001, 50);
        t.due(0.0);

        // A one second stall would need 1000 ticks.
        assert_eq!(t.due(1.0), 50);
        // The dropped backlog is not replayed.
        assert_eq!(t.due(1.0005), 0);
    }

    #[test]
    fn restart_discards_elapsed_time() {
        let mut t = Ticker::new(0.1, 100);
        t.due(0.0);
        t.restart();

        assert_eq!(t.due(10.0), 0);
        assert_eq!(t.due(10.1001), 1);
    }

    #[test]
    fn non_positive_interval_is_clamped() {
        let mut t = Ticker::new(0.0, 5);
        t.due(0.0);
        assert_eq!(t.due(1.0), 5);
    }
}
