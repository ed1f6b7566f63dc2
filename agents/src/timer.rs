use crate::search::SearchTimeout;
use std::time::{Duration, Instant};

/// Default safety margin, in milliseconds, kept before the turn's deadline.
pub const DEFAULT_THRESHOLD_MS: f64 = 10.0;

fn unlimited_time() -> f64 {
    f64::INFINITY
}

static UNLIMITED: fn() -> f64 = unlimited_time;

/// Decides when a search has to give up.
///
/// Wraps the caller's "milliseconds left" query. The query is polled once per
/// node and must never increase.
#[derive(Clone, Copy)]
pub struct TimeGovernor<'a> {
    time_left: &'a dyn Fn() -> f64,
    threshold: f64,
}

impl<'a> TimeGovernor<'a> {
    pub fn new(time_left: &'a dyn Fn() -> f64, threshold: f64) -> Self {
        Self {
            time_left,
            threshold,
        }
    }

    /// Returns `Err(SearchTimeout)` once less than `threshold` ms remain.
    pub fn check(&self) -> Result<(), SearchTimeout> {
        if self.remaining() < self.threshold {
            Err(SearchTimeout)
        } else {
            Ok(())
        }
    }

    pub fn remaining(&self) -> f64 {
        (self.time_left)()
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl TimeGovernor<'static> {
    /// A governor that never stops the search.
    pub fn unlimited() -> Self {
        Self::new(&UNLIMITED, 0.0)
    }
}

/// Returns a query reporting the milliseconds left of `budget`, counted from
/// now. Goes negative once the budget is spent.
pub fn countdown(budget: Duration) -> impl Fn() -> f64 {
    let start = Instant::now();
    let budget_ms = budget.as_secs_f64() * 1000.0;
    move || budget_ms - start.elapsed().as_secs_f64() * 1000.0
}
