//! Base trait for intents (operator/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Operator actions (key presses, form submission)
/// - System events (API responses, timers)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
