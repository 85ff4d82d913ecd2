//! Accumulating stopwatch for move timings.

use std::time::{Duration, Instant};

const UNITS: [&str; 4] = ["ns", "μs", "ms", "s"];

/// Renders a duration in the largest unit that keeps the value at or
/// above 1, truncating, e.g. `12 ms`.
pub fn format_duration(duration: Duration) -> String {
    let mut value = duration.as_nanos();
    let mut unit = 0;
    while unit + 1 < UNITS.len() && value >= 1000 {
        value /= 1000;
        unit += 1;
    }
    format!("{} {}", value, UNITS[unit])
}

/// A stopwatch that can be paused and resumed.
///
/// Starts paused. Time accumulates only between [`start`](Self::start)
/// and [`pause`](Self::pause).
#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    label: Option<String>,
    accumulated: Duration,
    running_since: Option<Instant>,
}

impl Stopwatch {
    /// A stopwatch reported as "Took ...".
    pub fn new() -> Self {
        Self::default()
    }

    /// A stopwatch reported as "<label> took ...".
    pub fn named(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Starts or resumes timing. No-op while running.
    pub fn start(&mut self) {
        if self.running_since.is_none() {
            self.running_since = Some(Instant::now());
        }
    }

    /// Stops timing and banks the elapsed interval. No-op while paused.
    pub fn pause(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.accumulated += since.elapsed();
        }
    }

    /// True between `start` and `pause`.
    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    /// Total time measured, including the current interval if running.
    pub fn elapsed(&self) -> Duration {
        self.accumulated + self.running_since.map_or(Duration::ZERO, |since| since.elapsed())
    }

    /// One-line summary such as "The computer took 12 ms.".
    pub fn report(&self) -> String {
        let took = format_duration(self.elapsed());
        match &self.label {
            Some(label) => format!("{label} took {took}."),
            None => format!("Took {took}."),
        }
    }
}
