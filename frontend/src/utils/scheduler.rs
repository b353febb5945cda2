use gloo_timers::{callback::Interval, future::TimeoutFuture};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

/// Owns a pending timer. Dropping the handle cancels it.
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle")
            .field("pending", &self.cancel.is_some())
            .finish()
    }
}

/// Clock and timer capability used by every time-driven piece of the UI.
pub trait Scheduler {
    /// Milliseconds on a monotonic-enough clock.
    fn now_ms(&self) -> u64;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TimerHandle;

    fn schedule_interval(&self, period_ms: u32, task: Box<dyn FnMut()>) -> TimerHandle;
}

/// Browser scheduler built on `setTimeout` futures.
///
/// One-shot timers cancel by flipping a flag checked when they fire, so a
/// handle may be dropped from inside its own task. Intervals own a gloo
/// `Interval` and are cleared on drop.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn now_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TimerHandle {
        let cancelled = Rc::new(Cell::new(false));
        let flag = cancelled.clone();
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if !flag.get() {
                task();
            }
        });
        TimerHandle::new(move || cancelled.set(true))
    }

    fn schedule_interval(&self, period_ms: u32, mut task: Box<dyn FnMut()>) -> TimerHandle {
        // Dropping the `Interval` clears it.
        let interval = Interval::new(period_ms, move || task());
        TimerHandle::new(move || drop(interval))
    }
}
