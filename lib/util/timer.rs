use std::time::{Duration, Instant};

/// A wall-clock deadline.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Timer {
    deadline: Option<Instant>,
}

impl Timer {
    /// Constructs a timer that never elapses.
    pub fn disarmed() -> Self {
        Timer { deadline: None }
    }

    /// Constructs a timer that elapses after the given duration.
    ///
    /// Durations too large to be represented never elapse.
    pub fn start(duration: Duration) -> Self {
        Timer {
            deadline: Instant::now().checked_add(duration),
        }
    }

    /// Whether the deadline has been reached.
    #[inline(always)]
    pub fn is_elapsed(&self) -> bool {
        self.deadline.map_or(false, |t| Instant::now() >= t)
    }

    /// The time remaining until the deadline, if it's armed.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|t| t.saturating_duration_since(Instant::now()))
    }
}
