use std::thread;
use std::time::{Duration, Instant};

/// Paces the game loop to a fixed number of ticks per second.
#[derive(Debug)]
pub struct TickClock {
    interval: Duration,
    last_tick: Instant,
}

impl TickClock {
    #[must_use]
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            interval: interval_for_rate(ticks_per_second),
            last_tick: Instant::now(),
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Blocks until one interval has passed since the previous call.
    ///
    /// A tick that already overran its interval does not sleep at all.
    pub fn wait(&mut self) {
        if let Some(remaining) = self.interval.checked_sub(self.last_tick.elapsed()) {
            thread::sleep(remaining);
        }
        self.last_tick = Instant::now();
    }
}

fn interval_for_rate(ticks_per_second: u32) -> Duration {
    Duration::from_secs(1) / ticks_per_second.max(1)
}
