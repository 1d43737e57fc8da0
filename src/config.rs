//! Application-level configuration constants.

// UI Behavior
/// Quiescence window before the terminal analytics emission fires.
pub const DEBOUNCE_MS: u32 = 5_000;

// Analytics
pub const ANALYTICS_EVENT_NAME: &str = "user_configuration_final";
