use crate::model::UserRecord;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum UsersIntent {
    /// Replace the whole list. No merge.
    SetUsers(Vec<UserRecord>),
    SetSearch(String),
    /// Snapshot the user with this id, or clear the selection.
    SetSelectedUser(Option<u64>),
    /// Append. The caller assigns the id.
    AddUser(UserRecord),
    /// Replace in place by id; ignored when the id is unknown.
    EditUser(UserRecord),
    /// Remove by id; ignored when the id is unknown.
    DeleteUser(u64),
}

impl Intent for UsersIntent {}
