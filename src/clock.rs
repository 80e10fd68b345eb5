use std::time::{Duration, Instant};

/// Fixed-interval tick gate with a pause flag.
///
/// The first observed instant only becomes the reference point; a tick is
/// due once at least `interval` has passed since the previous tick.
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    interval: Duration,
    last_tick: Option<Instant>,
    paused: bool,
}

impl TickClock {
    /// Creates a running clock.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: None,
            paused: false,
        }
    }

    /// Returns true when a tick should run at `now`, recording it if so.
    pub fn due(&mut self, now: Instant) -> bool {
        let Some(last_tick) = self.last_tick else {
            self.last_tick = Some(now);
            return false;
        };

        if self.paused || now.saturating_duration_since(last_tick) < self.interval {
            return false;
        }

        self.last_tick = Some(now);
        true
    }

    /// Stops ticks until [`TickClock::resume`].
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Lets ticks run again.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Forgets the reference instant and unpauses.
    pub fn reset(&mut self) {
        self.last_tick = None;
        self.paused = false;
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }
}
