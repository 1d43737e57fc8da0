//! Analytics event construction and sink collaborators.
//!
//! The browser sink forwards records to helper functions defined in
//! analytics_helpers.js, which push them onto the page's data layer.

use crate::config::ANALYTICS_EVENT_NAME;
use crate::utils::analytics_key;
use crate::Snapshot;
use log::{info, warn};
use serde::Serialize;
use std::collections::BTreeMap;
use wasm_bindgen::prelude::*;

/// Terminal analytics record, emitted at most once per quiescent
/// period. The slider values appear as top-level fields keyed by their
/// label-derived names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigurationEvent {
    pub event: &'static str,
    pub property_type: &'static str,
    pub timestamp: String,
    #[serde(flatten)]
    pub values: BTreeMap<String, u32>,
}

/// Consumer of emitted configuration events. Initialized once and
/// accepts records for the lifetime of the session.
pub trait AnalyticsSink {
    fn record(&self, event: ConfigurationEvent);
}

/// Build the emission record from a live snapshot. Keys and the
/// timestamp are derived at call time, so a category switched
/// mid-burst reports under the new category's labels.
pub fn build_event(snapshot: &Snapshot) -> ConfigurationEvent {
    let mut values = BTreeMap::new();
    for reading in &snapshot.sliders {
        values.insert(analytics_key(reading.label), reading.value);
    }
    ConfigurationEvent {
        event: ANALYTICS_EVENT_NAME,
        property_type: snapshot.category.as_str(),
        timestamp: now_iso8601(),
        values,
    }
}

#[cfg(target_arch = "wasm32")]
fn now_iso8601() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_iso8601() -> String {
    chrono::Utc::now()
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

#[wasm_bindgen(module = "/analytics_helpers.js")]
extern "C" {
    #[wasm_bindgen(js_name = recordConfigurationEvent)]
    fn record_configuration_event(event: JsValue);
}

/// Sink that hands events to the page-level data layer via the
/// analytics helper script.
pub struct DataLayerSink;

impl AnalyticsSink for DataLayerSink {
    fn record(&self, event: ConfigurationEvent) {
        match serde_wasm_bindgen::to_value(&event) {
            Ok(value) => record_configuration_event(value),
            Err(e) => warn!("failed to serialize analytics event: {}", e),
        }
    }
}

/// Sink that writes events to the log, for hosts without a data layer.
pub struct LogSink;

impl AnalyticsSink for LogSink {
    fn record(&self, event: ConfigurationEvent) {
        match serde_json::to_string(&event) {
            Ok(json) => info!("analytics event: {}", json),
            Err(e) => warn!("failed to serialize analytics event: {}", e),
        }
    }
}
