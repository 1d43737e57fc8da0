//! Test doubles: a manually driven timer scheduler plus recording
//! collaborator implementations.

use crate::analytics::{AnalyticsSink, ConfigurationEvent};
use crate::emitter::DelayScheduler;
use crate::url_sync::UrlSync;
use crate::Category;
use std::cell::RefCell;
use std::rc::Rc;

struct ScheduledEntry {
    id: u64,
    due: u64,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct SchedulerInner {
    now: u64,
    next_id: u64,
    queue: Vec<ScheduledEntry>,
}

/// Deterministic stand-in for the browser timer: callbacks fire only
/// when the test advances the clock past their deadline.
#[derive(Clone, Default)]
pub(crate) struct ManualScheduler {
    inner: Rc<RefCell<SchedulerInner>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by `ms`, firing every callback whose deadline
    /// falls inside the window, in deadline order.
    pub fn advance(&self, ms: u64) {
        let target = self.inner.borrow().now + ms;
        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                let due_idx = inner
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, entry)| entry.due <= target)
                    .min_by_key(|(_, entry)| entry.due)
                    .map(|(idx, _)| idx);
                match due_idx {
                    Some(idx) => {
                        let entry = inner.queue.remove(idx);
                        inner.now = entry.due;
                        Some(entry.callback)
                    }
                    None => {
                        inner.now = target;
                        None
                    }
                }
            };
            // run outside the borrow: the callback may drop timer handles
            match next {
                Some(callback) => callback(),
                None => break,
            }
        }
    }

    /// Number of armed, not-yet-fired timers.
    pub fn pending(&self) -> usize {
        self.inner.borrow().queue.len()
    }
}

/// Handle for one armed timer; dropping it cancels the callback.
pub(crate) struct ManualTimer {
    id: u64,
    inner: Rc<RefCell<SchedulerInner>>,
}

impl Drop for ManualTimer {
    fn drop(&mut self) {
        self.inner
            .borrow_mut()
            .queue
            .retain(|entry| entry.id != self.id);
    }
}

impl DelayScheduler for ManualScheduler {
    type Pending = ManualTimer;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Option<ManualTimer> {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let due = inner.now + u64::from(delay_ms);
        inner.queue.push(ScheduledEntry { id, due, callback });
        Some(ManualTimer {
            id,
            inner: Rc::clone(&self.inner),
        })
    }
}

/// Scheduler for a host without any timer facility.
pub(crate) struct NoTimerScheduler;

impl DelayScheduler for NoTimerScheduler {
    type Pending = ManualTimer;

    fn schedule(&self, _delay_ms: u32, _callback: Box<dyn FnOnce()>) -> Option<ManualTimer> {
        None
    }
}

#[derive(Clone, Default)]
pub(crate) struct RecordingSink {
    pub events: Rc<RefCell<Vec<ConfigurationEvent>>>,
}

impl AnalyticsSink for RecordingSink {
    fn record(&self, event: ConfigurationEvent) {
        self.events.borrow_mut().push(event);
    }
}

#[derive(Clone, Default)]
pub(crate) struct RecordingUrlSync {
    pub paths: Rc<RefCell<Vec<String>>>,
}

impl UrlSync for RecordingUrlSync {
    fn write_category(&self, category: Category) {
        self.paths.borrow_mut().push(format!("/{}", category));
    }
}
