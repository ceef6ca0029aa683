//! A trailing-edge timer used to settle resize bursts.
use iced_core::time::{Duration, Instant};

/// Delays an action until no new request has arrived for `delay`.
///
/// Every call to [`Debounce::schedule`] pushes the deadline back, so only
/// the last request of a burst fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Debounce {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    /// Creates a new idle [`Debounce`] with the given delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// The configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Changes the delay. A pending deadline is left untouched.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Returns whether a zero delay was configured.
    pub fn is_immediate(&self) -> bool {
        self.delay.is_zero()
    }

    /// Arms the timer so it fires `delay` after `now`, replacing any
    /// pending deadline.
    pub fn schedule(&mut self, now: Instant) -> Instant {
        let deadline = now + self.delay;
        self.deadline = Some(deadline);
        deadline
    }

    /// Returns whether the timer is armed.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns whether the timer is armed and its deadline has passed.
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Disarms the timer and returns `true` if it was due at `now`.
    ///
    /// A timer that is armed but not yet due stays armed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.is_due(now) {
            self.deadline = None;
            true
        } else {
            false
        }
    }

    /// Disarms the timer.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}
