//! Cancellable one-shot timers and a trailing-edge debouncer on top of them.
//!
//! The browser drives timers with `setTimeout`; tests and server rendering use
//! [`ManualTimers`], a virtual clock that only moves when told to.

use std::{
    cell::RefCell,
    collections::BTreeMap,
    rc::{Rc, Weak},
};

/// Handle to an armed timer. Cancelling a timer that already fired is a no-op.
pub trait CancelToken {
    fn cancel(self);
}

/// Something that can run a callback once after `delay_ms`.
pub trait TimerDriver {
    type Token: CancelToken;

    fn start(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Token;
}

/// Holds at most one pending callback; scheduling a new one cancels the old one.
pub struct Debouncer<D: TimerDriver> {
    driver: D,
    pending: Option<D::Token>,
}

impl<D: TimerDriver> Debouncer<D> {
    pub fn new(driver: D) -> Self {
        Self { driver, pending: None }
    }

    pub fn schedule(&mut self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        self.cancel_all();
        self.pending = Some(self.driver.start(delay_ms, Box::new(callback)));
    }

    pub fn cancel_all(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }
}

impl<D: TimerDriver> Drop for Debouncer<D> {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

type TimerKey = (u64, u64);

#[derive(Default)]
struct ManualTimersInner {
    now_ms: u64,
    next_id: u64,
    queue: BTreeMap<TimerKey, Box<dyn FnOnce()>>,
}

/// Deterministic timer driver: callbacks fire from [`ManualTimers::advance`].
#[derive(Clone, Default)]
pub struct ManualTimers {
    inner: Rc<RefCell<ManualTimersInner>>,
}

pub struct ManualTimerToken {
    key: TimerKey,
    timers: Weak<RefCell<ManualTimersInner>>,
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.inner.borrow().now_ms
    }

    /// Number of armed timers that have neither fired nor been cancelled.
    pub fn pending(&self) -> usize {
        self.inner.borrow().queue.len()
    }

    /// Move the clock forward, firing due callbacks in deadline order.
    /// Callbacks may arm new timers; those fire too if they fall inside the window.
    pub fn advance(&self, delta_ms: u64) {
        let target = self.inner.borrow().now_ms + delta_ms;
        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                let due = inner
                    .queue
                    .first_key_value()
                    .map(|(key, _)| *key)
                    .filter(|(deadline, _)| *deadline <= target);
                match due {
                    Some(key) => {
                        inner.now_ms = key.0;
                        inner.queue.remove(&key)
                    }
                    None => None,
                }
            };
            match next {
                Some(callback) => callback(),
                None => break,
            }
        }
        self.inner.borrow_mut().now_ms = target;
    }

    /// Advance to an absolute time.
    pub fn advance_to(&self, at_ms: u64) {
        let now = self.now_ms();
        self.advance(at_ms.saturating_sub(now));
    }
}

impl TimerDriver for ManualTimers {
    type Token = ManualTimerToken;

    fn start(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Token {
        let mut inner = self.inner.borrow_mut();
        let key = (inner.now_ms + u64::from(delay_ms), inner.next_id);
        inner.next_id += 1;
        inner.queue.insert(key, callback);
        ManualTimerToken { key, timers: Rc::downgrade(&self.inner) }
    }
}

impl CancelToken for ManualTimerToken {
    fn cancel(self) {
        if let Some(timers) = self.timers.upgrade() {
            // Detach before dropping: the callback may own the last handle to
            // state that itself holds these timers.
            let removed = timers.borrow_mut().queue.remove(&self.key);
            drop(removed);
        }
    }
}
