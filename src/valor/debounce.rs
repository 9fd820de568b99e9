//! # Debouncing
//!
//! Search input arrives as bursts of events. Recomputing the view for each one is
//! wasted work, so a [`Debouncer`] holds the latest value until the input has been
//! quiet for a full window and then releases it exactly once.
//!
//! The debouncer never reads a clock. Callers pass `now` in, which keeps it usable
//! from any event loop and lets tests drive time by hand:
//!
//! ```
//! use std::time::{Duration, Instant};
//! use valor::debounce::Debouncer;
//!
//! let start = Instant::now();
//! let mut search = Debouncer::new(Duration::from_millis(300));
//! search.input("sol".to_string(), start);
//! search.input("soldiers".to_string(), start + Duration::from_millis(50));
//!
//! assert_eq!(search.poll(start + Duration::from_millis(200)), None);
//! assert_eq!(
//!     search.poll(start + Duration::from_millis(350)),
//!     Some("soldiers".to_string())
//! );
//! assert_eq!(search.poll(start + Duration::from_millis(900)), None);
//! ```

use std::time::{Duration, Instant};

pub const DEFAULT_WINDOW: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Records a new input. Any pending value is replaced and its trigger
    /// rescheduled to one full window after `now`.
    pub fn input(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.window,
        });
    }

    /// Releases the pending value if its window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(p) if now >= p.deadline => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// When the pending value is due, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Time left until the pending value is due; zero if it is already due.
    pub fn time_left(&self, now: Instant) -> Option<Duration> {
        self.deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Releases the pending value regardless of its deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn burst_of_keystrokes_fires_once_with_final_text() {
        let start = Instant::now();
        let mut debouncer = Debouncer::default();
        let mut fired = Vec::new();

        // "s", "so", "sol", "sold", "soldi" typed 50ms apart, polling every 10ms.
        let typed = ["s", "so", "sol", "sold", "soldi"];
        let mut clock = 0;
        while clock <= 1000 {
            if clock % 50 == 0 && (clock / 50) < typed.len() as u64 {
                debouncer.input(typed[(clock / 50) as usize].to_string(), start + ms(clock));
            }
            if let Some(value) = debouncer.poll(start + ms(clock)) {
                fired.push((clock, value));
            }
            clock += 10;
        }

        // Last keystroke at 200ms, so the one recomputation lands at 500ms.
        assert_eq!(fired, vec![(500, "soldi".to_string())]);
    }

    #[test]
    fn does_not_fire_before_window() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(300));
        debouncer.input(1, start);
        assert_eq!(debouncer.poll(start + ms(299)), None);
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.poll(start + ms(300)), Some(1));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn each_input_reschedules_the_trigger() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(300));
        debouncer.input("a", start);
        assert_eq!(debouncer.deadline(), Some(start + ms(300)));
        debouncer.input("ab", start + ms(250));
        assert_eq!(debouncer.deadline(), Some(start + ms(550)));
        assert_eq!(debouncer.poll(start + ms(400)), None);
        assert_eq!(debouncer.poll(start + ms(550)), Some("ab"));
    }

    #[test]
    fn time_left_saturates_at_zero() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(300));
        assert_eq!(debouncer.time_left(start), None);
        debouncer.input((), start);
        assert_eq!(debouncer.time_left(start + ms(100)), Some(ms(200)));
        assert_eq!(debouncer.time_left(start + ms(900)), Some(Duration::ZERO));
    }

    #[test]
    fn flush_and_cancel() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(300));
        debouncer.input("x", start);
        assert_eq!(debouncer.flush(), Some("x"));
        assert_eq!(debouncer.flush(), None);

        debouncer.input("y", start);
        debouncer.cancel();
        assert_eq!(debouncer.poll(start + ms(1000)), None);
    }
}
