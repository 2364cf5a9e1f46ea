use crate::model::UserRecord;
use crate::mvi::SliceState;

/// The users slice: the directory itself, the raw search text and the
/// current selection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UsersState {
    /// Insertion order is fetch/add order. Never re-sorted.
    pub users: Vec<UserRecord>,
    /// Stored exactly as typed; normalized only by the selectors.
    pub search: String,
    /// Snapshot taken when the selection was made, not a live reference.
    pub selected: Option<UserRecord>,
}

impl SliceState for UsersState {}

impl UsersState {
    pub fn with_users(users: Vec<UserRecord>) -> Self {
        Self {
            users,
            ..Self::default()
        }
    }

    pub fn find(&self, id: u64) -> Option<&UserRecord> {
        self.users.iter().find(|user| user.id == id)
    }
}
