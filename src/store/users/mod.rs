mod intent;
mod reducer;
mod selectors;
mod state;

pub use intent::UsersIntent;
pub use reducer::UsersReducer;
pub use selectors::{filtered_users, next_user_id, total_users};
pub use state::UsersState;
