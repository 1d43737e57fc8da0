//! Debounced analytics emission.
//!
//! Coalesces an arbitrary burst of state-change signals into a single
//! terminal emission once the user has been quiet for the configured
//! delay. Each new signal cancels the armed deadline and arms a fresh
//! one, so at most one timer is live at any instant.

use crate::analytics::{build_event, AnalyticsSink};
use crate::Selection;
use gloo_timers::callback::Timeout;
use log::warn;
use std::cell::RefCell;
use std::rc::Rc;

/// Seam over the host's one-shot timer facility. Dropping the returned
/// handle before the deadline cancels the callback.
pub trait DelayScheduler {
    type Pending: 'static;

    /// Schedule `callback` to run once after `delay_ms`. Returns `None`
    /// when the host has no timer facility; the caller degrades
    /// gracefully in that case.
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Option<Self::Pending>;
}

/// Scheduler backed by `setTimeout` via gloo. The `Timeout` handle
/// clears the underlying timer when dropped.
pub struct BrowserScheduler;

impl DelayScheduler for BrowserScheduler {
    type Pending = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Option<Timeout> {
        Some(Timeout::new(delay_ms, callback))
    }
}

/// Reset-on-activity debouncer. Idle until a signal arrives, then
/// Pending until either another signal replaces the deadline or the
/// deadline elapses and the emission fires.
///
/// The emitter holds a shared handle to the live [`Selection`], never a
/// captured snapshot: the payload is read at expiry time and therefore
/// reflects the final state of the burst that armed the timer.
pub struct DebouncedEmitter<S: DelayScheduler> {
    selection: Rc<RefCell<Selection>>,
    sink: Rc<dyn AnalyticsSink>,
    scheduler: S,
    delay_ms: u32,
    pending: Rc<RefCell<Option<S::Pending>>>,
}

impl<S: DelayScheduler> DebouncedEmitter<S> {
    pub fn new(
        selection: Rc<RefCell<Selection>>,
        sink: Rc<dyn AnalyticsSink>,
        scheduler: S,
        delay_ms: u32,
    ) -> Self {
        DebouncedEmitter {
            selection,
            sink,
            scheduler,
            delay_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Note a state change: cancel any armed deadline and arm a fresh
    /// one. Any number of calls in quick succession results in exactly
    /// one eventual emission.
    pub fn signal(&self) {
        // Cancel the existing timer by dropping its handle
        self.pending.borrow_mut().take();

        let selection = Rc::clone(&self.selection);
        let sink = Rc::clone(&self.sink);
        let pending = Rc::clone(&self.pending);
        let armed = self.scheduler.schedule(
            self.delay_ms,
            Box::new(move || {
                // Clear the handle first so the debounce period is over
                // from the state machine's point of view
                pending.borrow_mut().take();
                // Read the snapshot now, at expiry: the emission must
                // reflect the last state of the burst, not the state
                // that originally armed the timer
                let snapshot = selection.borrow().snapshot();
                sink.record(build_event(&snapshot));
            }),
        );

        match armed {
            Some(handle) => *self.pending.borrow_mut() = Some(handle),
            None => warn!("no timer facility available, skipping analytics emission"),
        }
    }

    /// Cancel the armed deadline, if any. Called on teardown so no
    /// emission fires against a destroyed state machine.
    pub fn cancel_pending(&self) {
        self.pending.borrow_mut().take();
    }

    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }
}

impl<S: DelayScheduler> Drop for DebouncedEmitter<S> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
