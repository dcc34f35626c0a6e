//! Fixed-interval recurring task with an explicit stop handle.

use gloo_timers::callback::Interval;

/// Runs a callback every `millis` until stopped or dropped.
///
/// There is no backoff and no overlap control: a tick fires whether or not
/// the previous tick's work has finished.
pub struct Poller {
    interval: Option<Interval>,
}

impl Poller {
    pub fn start<F>(millis: u32, tick: F) -> Self
    where
        F: FnMut() + 'static,
    {
        Self { interval: Some(Interval::new(millis, tick)) }
    }

    pub fn stop(&mut self) {
        if let Some(interval) = self.interval.take() {
            interval.cancel();
        }
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }
}
