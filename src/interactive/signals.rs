//! Transient UI signals: toast text and row shake
//!
//! Each signal is a single-shot deadline stamped with the level epoch it was
//! raised in. Starting a new level cancels everything pending, and a signal
//! from an older epoch is dropped on the next expiry pass, so a stale deadline
//! can never clear a flag that belongs to the new level.

use crate::game::Outcome;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalTimings {
    pub toast: Duration,
    pub shake: Duration,
}

impl Default for SignalTimings {
    fn default() -> Self {
        Self {
            toast: Duration::from_millis(2000),
            shake: Duration::from_millis(600),
        }
    }
}

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
    epoch: u64,
}

#[derive(Debug, Clone)]
pub struct SignalBoard {
    timings: SignalTimings,
    epoch: u64,
    toast: Option<Pending<String>>,
    shake: Option<Pending<()>>,
}

impl SignalBoard {
    #[must_use]
    pub const fn new(timings: SignalTimings, epoch: u64) -> Self {
        Self {
            timings,
            epoch,
            toast: None,
            shake: None,
        }
    }

    /// Raise the signals an action produced during `epoch`
    pub fn record(&mut self, outcome: &Outcome, epoch: u64, now: Instant) {
        if outcome.new_level || epoch != self.epoch {
            self.cancel_all(epoch);
        }
        if let Some(text) = &outcome.message {
            self.toast = Some(Pending {
                value: text.clone(),
                deadline: now + self.timings.toast,
                epoch,
            });
        }
        if outcome.shake {
            self.shake = Some(Pending {
                value: (),
                deadline: now + self.timings.shake,
                epoch,
            });
        }
    }

    /// Drop every pending signal and bind the board to `epoch`
    pub fn cancel_all(&mut self, epoch: u64) {
        self.epoch = epoch;
        self.toast = None;
        self.shake = None;
    }

    /// Clear signals whose deadline has passed or whose epoch is stale
    pub fn expire(&mut self, now: Instant) {
        let epoch = self.epoch;
        let live = |deadline: Instant, raised: u64| raised == epoch && now < deadline;

        if self
            .toast
            .as_ref()
            .is_some_and(|p| !live(p.deadline, p.epoch))
        {
            self.toast = None;
        }
        if self
            .shake
            .as_ref()
            .is_some_and(|p| !live(p.deadline, p.epoch))
        {
            self.shake = None;
        }
    }

    #[must_use]
    pub fn toast(&self) -> Option<&str> {
        self.toast.as_ref().map(|p| p.value.as_str())
    }

    #[must_use]
    pub const fn is_shaking(&self) -> bool {
        self.shake.is_some()
    }

    /// Earliest pending deadline, used to size the event poll timeout
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        let toast = self.toast.as_ref().map(|p| p.deadline);
        let shake = self.shake.as_ref().map(|p| p.deadline);
        toast.into_iter().chain(shake).min()
    }
}
