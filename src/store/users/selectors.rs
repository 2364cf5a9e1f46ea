//! Derived views over the users slice.

use crate::model::UserRecord;
use crate::store::users::state::UsersState;

/// Users whose name or username contains the search term.
///
/// The term is trimmed and lower-cased here, never in storage. An empty term
/// returns every user. Stored order is preserved.
pub fn filtered_users(state: &UsersState) -> Vec<&UserRecord> {
    let term = state.search.trim().to_lowercase();
    if term.is_empty() {
        return state.users.iter().collect();
    }

    state
        .users
        .iter()
        .filter(|user| {
            user.name.to_lowercase().contains(&term)
                || user.username.to_lowercase().contains(&term)
        })
        .collect()
}

pub fn total_users(state: &UsersState) -> usize {
    filtered_users(state).len()
}

/// Id for a newly created user: one past the largest id, or 1 when empty.
pub fn next_user_id(state: &UsersState) -> u64 {
    state
        .users
        .iter()
        .map(|user| user.id)
        .max()
        .map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u64, name: &str, username: &str) -> UserRecord {
        UserRecord {
            id,
            name: name.to_string(),
            username: username.to_string(),
            ..UserRecord::default()
        }
    }

    fn sample() -> UsersState {
        UsersState::with_users(vec![
            user(1, "John Doe", "johndoe"),
            user(2, "Jane Smith", "janesmith"),
            user(3, "Alice Johnson", "alicej"),
        ])
    }

    #[test]
    fn empty_term_returns_everything_in_order() {
        let state = sample();
        let ids: Vec<_> = filtered_users(&state).iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn whitespace_only_term_counts_as_empty() {
        let mut state = sample();
        state.search = "   ".to_string();
        assert_eq!(total_users(&state), 3);
    }

    #[test]
    fn matches_username_only() {
        let mut state = sample();
        state.search = "alicej".to_string();
        let ids: Vec<_> = filtered_users(&state).iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn no_match_is_empty() {
        let mut state = sample();
        state.search = "zed".to_string();
        assert!(filtered_users(&state).is_empty());
        assert_eq!(total_users(&state), 0);
    }

    #[test]
    fn next_id_is_one_for_empty_collection() {
        assert_eq!(next_user_id(&UsersState::default()), 1);
    }

    #[test]
    fn next_id_uses_max_not_len() {
        let state = UsersState::with_users(vec![user(10, "a", "a"), user(3, "b", "b")]);
        assert_eq!(next_user_id(&state), 11);
    }
}
