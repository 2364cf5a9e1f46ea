use crate::mvi::Reducer;
use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::{FormField, FormMode, FormValues, UserFormState};

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = UserFormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Open { user } => {
                let (mode, values) = match user {
                    Some(user) => (FormMode::Edit { id: user.id }, FormValues::from_user(&user)),
                    None => (FormMode::Add, FormValues::default()),
                };
                UserFormState::Visible {
                    mode,
                    values,
                    focused: 0,
                    error: None,
                }
            }
            FormIntent::Close => UserFormState::Hidden,
            FormIntent::FocusNext => match state {
                UserFormState::Visible {
                    mode,
                    values,
                    focused,
                    error,
                } => UserFormState::Visible {
                    mode,
                    values,
                    focused: (focused + 1) % FormField::COUNT,
                    error,
                },
                other => other,
            },
            FormIntent::FocusPrev => match state {
                UserFormState::Visible {
                    mode,
                    values,
                    focused,
                    error,
                } => UserFormState::Visible {
                    mode,
                    values,
                    focused: if focused == 0 {
                        FormField::COUNT - 1
                    } else {
                        focused - 1
                    },
                    error,
                },
                other => other,
            },
            FormIntent::InsertChar(ch) => match state {
                UserFormState::Visible {
                    mode,
                    mut values,
                    focused,
                    ..
                } => {
                    values.get_mut(FormField::ALL[focused]).push(ch);
                    // Any edit clears the validation message.
                    UserFormState::Visible {
                        mode,
                        values,
                        focused,
                        error: None,
                    }
                }
                other => other,
            },
            FormIntent::Backspace => match state {
                UserFormState::Visible {
                    mode,
                    mut values,
                    focused,
                    ..
                } => {
                    values.get_mut(FormField::ALL[focused]).pop();
                    UserFormState::Visible {
                        mode,
                        values,
                        focused,
                        error: None,
                    }
                }
                other => other,
            },
            FormIntent::Reject(error) => match state {
                UserFormState::Visible { mode, values, .. } => UserFormState::Visible {
                    mode,
                    values,
                    focused: error.field.index(),
                    error: Some(error),
                },
                other => other,
            },
        }
    }
}
