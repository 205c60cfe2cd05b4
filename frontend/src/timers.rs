//! Browser `setTimeout` timers for the debouncers in `common`.

use common::debounce::{CancelToken, TimerDriver};
use gloo_timers::callback::Timeout;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimers;

pub struct BrowserTimer(Timeout);

impl CancelToken for BrowserTimer {
    fn cancel(self) {
        // dropping a gloo Timeout clears it
        drop(self.0);
    }
}

impl TimerDriver for BrowserTimers {
    type Token = BrowserTimer;

    fn start(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> BrowserTimer {
        BrowserTimer(Timeout::new(delay_ms, callback))
    }
}
