use std::time::Duration;

use crate::Params;

/// Turns elapsed wall time into whole fixed ticks
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    accumulator: Duration,
    max_ticks: u32,
}

impl FrameClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulator: Duration::ZERO,
            max_ticks: Params::MAX_CATCH_UP_TICKS,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Ticks due after `elapsed` more wall time. A long stall (hidden tab,
    /// debugger) yields at most `MAX_CATCH_UP_TICKS` and drops the rest.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.interval.is_zero() {
            return 0;
        }

        self.accumulator += elapsed;
        let due = self.accumulator.as_nanos() / self.interval.as_nanos();
        if due > u128::from(self.max_ticks) {
            self.accumulator = Duration::ZERO;
            return self.max_ticks;
        }

        let ticks = due as u32;
        self.accumulator -= self.interval * ticks;
        ticks
    }
}
