//! Transient notification shown after a local operation.

use crate::mvi::{Intent, Reducer, SliceState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertKind {
    Success,
    #[default]
    Error,
}

impl AlertKind {
    pub fn title(self) -> &'static str {
        match self {
            AlertKind::Success => "Success",
            AlertKind::Error => "Failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlertState {
    pub show: bool,
    pub kind: AlertKind,
    pub message: String,
}

impl SliceState for AlertState {}

impl AlertState {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            show: true,
            kind: AlertKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            show: true,
            kind: AlertKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum AlertIntent {
    /// Overwrite the whole alert. No partial update.
    Set(AlertState),
    /// Hide the alert, keeping kind and message.
    Dismiss,
}

impl Intent for AlertIntent {}

pub struct AlertReducer;

impl Reducer for AlertReducer {
    type State = AlertState;
    type Intent = AlertIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AlertIntent::Set(alert) => alert,
            AlertIntent::Dismiss => AlertState {
                show: false,
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_alert_is_hidden_error() {
        let state = AlertState::default();
        assert!(!state.show);
        assert_eq!(state.kind, AlertKind::Error);
        assert!(state.message.is_empty());
    }

    #[test]
    fn set_replaces_whole_alert() {
        let state = AlertReducer::reduce(
            AlertState::error("Operation failed"),
            AlertIntent::Set(AlertState::success("Operation successful")),
        );
        assert_eq!(state, AlertState::success("Operation successful"));
    }

    #[test]
    fn set_hidden_alert() {
        let hidden = AlertState {
            show: false,
            kind: AlertKind::Success,
            message: String::new(),
        };
        let state = AlertReducer::reduce(
            AlertState::success("Success message"),
            AlertIntent::Set(hidden.clone()),
        );
        assert_eq!(state, hidden);
    }

    #[test]
    fn dismiss_hides_but_keeps_content() {
        let state = AlertReducer::reduce(AlertState::success("Saved"), AlertIntent::Dismiss);
        assert!(!state.show);
        assert_eq!(state.kind, AlertKind::Success);
        assert_eq!(state.message, "Saved");
    }

    #[test]
    fn titles() {
        assert_eq!(AlertKind::Success.title(), "Success");
        assert_eq!(AlertKind::Error.title(), "Failed");
    }
}
