//! Add/edit user form (MVI).

mod intent;
mod reducer;
mod state;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FieldError, FormField, FormMode, FormValues, UserFormState};
