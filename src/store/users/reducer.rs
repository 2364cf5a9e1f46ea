use crate::mvi::Reducer;
use crate::store::users::intent::UsersIntent;
use crate::store::users::state::UsersState;

pub struct UsersReducer;

impl Reducer for UsersReducer {
    type State = UsersState;
    type Intent = UsersIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            UsersIntent::SetUsers(users) => UsersState { users, ..state },
            UsersIntent::SetSearch(search) => UsersState { search, ..state },
            UsersIntent::SetSelectedUser(id) => {
                let selected = id.and_then(|id| state.find(id).cloned());
                UsersState { selected, ..state }
            }
            UsersIntent::AddUser(user) => {
                let mut users = state.users;
                users.push(user);
                UsersState { users, ..state }
            }
            UsersIntent::EditUser(user) => {
                let mut users = state.users;
                if let Some(slot) = users.iter_mut().find(|existing| existing.id == user.id) {
                    *slot = user;
                }
                UsersState { users, ..state }
            }
            UsersIntent::DeleteUser(id) => {
                let mut users = state.users;
                users.retain(|user| user.id != id);
                UsersState { users, ..state }
            }
        }
    }
}
