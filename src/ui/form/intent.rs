use crate::model::UserRecord;
use crate::mvi::Intent;
use crate::ui::form::state::FieldError;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Show the form. `Some` pre-fills from the user and edits it in place.
    Open { user: Option<UserRecord> },
    Close,
    FocusNext,
    FocusPrev,
    InsertChar(char),
    Backspace,
    /// Validation failed: show the message and move focus to the field.
    Reject(FieldError),
}

impl Intent for FormIntent {}
