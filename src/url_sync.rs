//! URL path synchronization collaborator.

use crate::Category;
use log::{debug, warn};
use wasm_bindgen::JsValue;

/// Receives the active category and mirrors it into the navigable
/// path. Last write wins; no deduplication.
pub trait UrlSync {
    fn write_category(&self, category: Category);
}

/// Browser implementation writing `/{category}` through the History
/// API. Failures are logged and never surfaced.
pub struct BrowserHistory;

impl UrlSync for BrowserHistory {
    fn write_category(&self, category: Category) {
        let path = format!("/{}", category);
        let history = match web_sys::window().and_then(|w| w.history().ok()) {
            Some(history) => history,
            None => {
                warn!("history API unavailable, skipping URL update to {}", path);
                return;
            }
        };
        if history
            .push_state_with_url(&JsValue::NULL, "", Some(&path))
            .is_err()
        {
            warn!("failed to push history entry for {}", path);
            return;
        }
        debug!("URL updated to {}", path);
    }
}
