//! Glue between the selection state machine and its collaborators.
//!
//! [`Configurator`] owns the shared [`Selection`] and routes each
//! mutation's side effects: category switches notify the URL sync and
//! the debounced emitter, slider updates notify only the emitter.

use crate::analytics::AnalyticsSink;
use crate::emitter::{DebouncedEmitter, DelayScheduler};
use crate::url_sync::UrlSync;
use crate::{Category, Selection, SelectionError, SliderId, Snapshot};
use std::cell::RefCell;
use std::rc::Rc;

pub struct Configurator<S: DelayScheduler> {
    selection: Rc<RefCell<Selection>>,
    url: Rc<dyn UrlSync>,
    emitter: DebouncedEmitter<S>,
}

impl<S: DelayScheduler> Configurator<S> {
    pub fn new(
        url: Rc<dyn UrlSync>,
        sink: Rc<dyn AnalyticsSink>,
        scheduler: S,
        delay_ms: u32,
    ) -> Self {
        let selection = Rc::new(RefCell::new(Selection::new()));
        let emitter = DebouncedEmitter::new(Rc::clone(&selection), sink, scheduler, delay_ms);
        Configurator { selection, url, emitter }
    }

    /// Switch the active category. Resets every slider to the new
    /// specs' midpoints, writes the new path, and (re-)arms the
    /// debounced emission.
    pub fn switch_category(&self, category: Category) {
        self.selection.borrow_mut().switch_category(category);
        self.url.write_category(category);
        self.emitter.signal();
    }

    /// Apply a bounded slider update. A rejected value mutates nothing
    /// and arms no emission.
    pub fn update_slider(&self, slider: SliderId, value: u32) -> Result<(), SelectionError> {
        self.selection.borrow_mut().update_slider(slider, value)?;
        self.emitter.signal();
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        self.selection.borrow().snapshot()
    }

    /// Cancel any armed emission. Called when the hosting UI surface is
    /// torn down.
    pub fn cancel_pending(&self) {
        self.emitter.cancel_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEBOUNCE_MS;
    use crate::testing::{ManualScheduler, RecordingSink, RecordingUrlSync};
    use crate::analytics::ConfigurationEvent;

    fn setup() -> (
        Rc<RefCell<Vec<String>>>,
        Rc<RefCell<Vec<ConfigurationEvent>>>,
        ManualScheduler,
        Configurator<ManualScheduler>,
    ) {
        let url = RecordingUrlSync::default();
        let paths = url.paths.clone();
        let sink = RecordingSink::default();
        let events = sink.events.clone();
        let scheduler = ManualScheduler::new();
        let configurator = Configurator::new(
            Rc::new(url),
            Rc::new(sink),
            scheduler.clone(),
            DEBOUNCE_MS,
        );
        (paths, events, scheduler, configurator)
    }

    #[test]
    fn category_switch_writes_url_and_resets_values() {
        let (paths, _events, _scheduler, configurator) = setup();

        configurator.switch_category(Category::Commercial);

        assert_eq!(*paths.borrow(), vec!["/commercial".to_string()]);
        let snapshot = configurator.snapshot();
        assert_eq!(snapshot.category, Category::Commercial);
        let values: Vec<u32> = snapshot.sliders.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![500, 25, 25500]);
    }

    #[test]
    fn slider_update_does_not_touch_the_url() {
        let (paths, _events, _scheduler, configurator) = setup();

        configurator.update_slider(SliderId::Slider1, 30).unwrap();

        assert!(paths.borrow().is_empty());
    }

    #[test]
    fn rapid_drag_emits_once_with_the_final_value() {
        let (_paths, events, scheduler, configurator) = setup();

        for value in [10, 20, 30] {
            configurator.update_slider(SliderId::Slider1, value).unwrap();
            scheduler.advance(200);
        }
        scheduler.advance(u64::from(DEBOUNCE_MS));

        let events = events.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event, "user_configuration_final");
        assert_eq!(events[0].property_type, "residential");
        assert_eq!(events[0].values["price_range_k"], 30);
        // intermediate values never left the state machine
        assert_eq!(events[0].values.len(), 3);
    }

    #[test]
    fn category_switch_mid_burst_reports_the_new_category_keys() {
        let (_paths, events, scheduler, configurator) = setup();

        configurator.update_slider(SliderId::Slider1, 10).unwrap();
        scheduler.advance(100);
        configurator.switch_category(Category::Commercial);
        scheduler.advance(u64::from(DEBOUNCE_MS));

        let events = events.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].property_type, "commercial");
        assert_eq!(events[0].values["budget_k"], 500);
        assert!(!events[0].values.contains_key("price_range_k"));
    }

    #[test]
    fn rejected_update_arms_no_emission() {
        let (_paths, events, scheduler, configurator) = setup();

        let before = configurator.snapshot();
        assert!(configurator.update_slider(SliderId::Slider1, 9999).is_err());
        scheduler.advance(u64::from(DEBOUNCE_MS) * 2);

        assert!(events.borrow().is_empty());
        assert_eq!(configurator.snapshot(), before);
    }

    #[test]
    fn teardown_cancels_the_armed_emission() {
        let (_paths, events, scheduler, configurator) = setup();

        configurator.update_slider(SliderId::Slider1, 30).unwrap();
        configurator.cancel_pending();
        scheduler.advance(u64::from(DEBOUNCE_MS) * 2);

        assert!(events.borrow().is_empty());
    }
}
