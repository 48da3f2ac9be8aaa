//! Grace timers for transient visual modes
//!
//! The controller never spawns anything; the shell calls `tick(now)` and the
//! timers compare against their deadline. Re-arming supersedes the old deadline.

use std::time::Duration;
use web_time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerState {
    Idle,
    /// Active until explicitly armed or cleared
    Held,
    /// Active until the deadline passes
    Armed(Instant),
}

/// Keeps a flag raised for a grace period after the last activity
#[derive(Debug, Clone)]
pub struct GraceTimer {
    period: Duration,
    state: TimerState,
}

impl GraceTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            state: TimerState::Idle,
        }
    }

    /// Raise the flag with no deadline, cancelling a pending one
    pub fn hold(&mut self) {
        self.state = TimerState::Held;
    }

    /// Raise the flag until `now + period`
    pub fn arm(&mut self, now: Instant) {
        self.state = TimerState::Armed(now + self.period);
    }

    pub fn clear(&mut self) {
        self.state = TimerState::Idle;
    }

    pub fn is_active(&self) -> bool {
        self.state != TimerState::Idle
    }

    /// Returns true once, on the first poll at or after the deadline
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.state {
            TimerState::Armed(deadline) if now >= deadline => {
                self.state = TimerState::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_secs(1);

    #[test]
    fn new_timer_is_idle() {
        let mut timer = GraceTimer::new(PERIOD);

        assert_eq!(timer.period(), PERIOD);
        assert!(!timer.is_active());
        assert!(!timer.poll(Instant::now() + PERIOD * 2));
    }

    #[test]
    fn armed_timer_expires_once() {
        let start = Instant::now();
        let mut timer = GraceTimer::new(PERIOD);
        timer.arm(start);

        assert!(timer.is_active());
        assert!(!timer.poll(start + Duration::from_millis(999)));
        assert!(timer.poll(start + PERIOD));
        assert!(!timer.is_active());
        assert!(!timer.poll(start + PERIOD * 2));
    }

    #[test]
    fn rearming_supersedes_deadline() {
        let start = Instant::now();
        let mut timer = GraceTimer::new(PERIOD);
        timer.arm(start);
        timer.arm(start + Duration::from_millis(800));

        assert!(!timer.poll(start + PERIOD));
        assert!(timer.poll(start + Duration::from_millis(1800)));
    }

    #[test]
    fn held_timer_never_expires() {
        let start = Instant::now();
        let mut timer = GraceTimer::new(PERIOD);
        timer.arm(start);
        timer.hold();

        assert!(!timer.poll(start + PERIOD * 10));
        assert!(timer.is_active());

        timer.clear();
        assert!(!timer.is_active());
    }
}
