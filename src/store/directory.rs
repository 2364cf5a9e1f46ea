//! Orchestration over the store.
//!
//! `UserDirectory` sequences the slices around each logical operation:
//! loading on, mutation, alert, loading off. Loading is cleared on every
//! path, including failures.

use std::time::{Duration, Instant};

use thiserror::Error;

use crate::model::UserRecord;
use crate::store::users::next_user_id;
use crate::store::{
    AlertIntent, AlertState, AppStore, LoadingIntent, UsersIntent, ViewMode, ViewModeIntent,
};

pub const USER_ADDED: &str = "User added successfully";
pub const USER_UPDATED: &str = "User updated successfully";
pub const USER_DELETED: &str = "User deleted successfully";

/// Failures surfaced by composite operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
    #[error("A user with id {id} already exists")]
    DuplicateId { id: u64 },
}

pub struct UserDirectory {
    store: AppStore,
    /// `None` means alerts stay until dismissed.
    alert_auto_dismiss: Option<Duration>,
    alert_shown_at: Option<Instant>,
}

impl UserDirectory {
    pub fn new(store: AppStore) -> Self {
        Self {
            store,
            alert_auto_dismiss: None,
            alert_shown_at: None,
        }
    }

    pub fn with_alert_auto_dismiss(mut self, delay: Option<Duration>) -> Self {
        self.alert_auto_dismiss = delay;
        self
    }

    pub fn store(&self) -> &AppStore {
        &self.store
    }

    pub fn alert_auto_dismiss(&self) -> Option<Duration> {
        self.alert_auto_dismiss
    }

    pub fn next_user_id(&self) -> u64 {
        next_user_id(self.store.users())
    }

    // ========================================================================
    // Plain state writes (never fail)
    // ========================================================================

    pub fn set_users(&mut self, users: Vec<UserRecord>) {
        self.store.dispatch(UsersIntent::SetUsers(users));
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.store.dispatch(UsersIntent::SetSearch(term.into()));
    }

    pub fn set_selected_user(&mut self, id: Option<u64>) {
        self.store.dispatch(UsersIntent::SetSelectedUser(id));
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.store.dispatch(ViewModeIntent::Set(mode));
    }

    pub fn toggle_view_mode(&mut self) {
        self.store.dispatch(ViewModeIntent::Toggle);
    }

    // ========================================================================
    // Fetch lifecycle
    // ========================================================================

    pub fn begin_fetch(&mut self) {
        tracing::info!("Fetching users");
        self.store.dispatch(LoadingIntent::Set(true));
    }

    /// Apply the fetch outcome. Failures are logged only; no alert is raised
    /// for the initial load and the directory stays empty.
    pub fn finish_fetch(&mut self, result: Result<Vec<UserRecord>, String>) {
        match result {
            Ok(users) => {
                tracing::info!(count = users.len(), "Users loaded");
                self.store.dispatch(UsersIntent::SetUsers(users));
            }
            Err(message) => {
                tracing::error!(error = %message, "Failed to load users");
            }
        }
        self.store.dispatch(LoadingIntent::Set(false));
    }

    // ========================================================================
    // Composite operations
    // ========================================================================

    pub fn add_user(&mut self, user: UserRecord, now: Instant) -> Result<(), OperationError> {
        tracing::debug!(id = user.id, "Adding user");
        self.run(now, USER_ADDED, |store| {
            if store.users().find(user.id).is_some() {
                return Err(OperationError::DuplicateId { id: user.id });
            }
            store.dispatch(UsersIntent::AddUser(user));
            Ok(())
        })
    }

    /// Replace the user with the same id. An unknown id is silently ignored.
    pub fn edit_user(&mut self, user: UserRecord, now: Instant) -> Result<(), OperationError> {
        tracing::debug!(id = user.id, "Editing user");
        let result = self.run(now, USER_UPDATED, |store| {
            store.dispatch(UsersIntent::EditUser(user));
            Ok(())
        });
        self.set_selected_user(None);
        result
    }

    pub fn delete_user(&mut self, id: u64, now: Instant) -> Result<(), OperationError> {
        tracing::debug!(id, "Deleting user");
        let result = self.run(now, USER_DELETED, |store| {
            store.dispatch(UsersIntent::DeleteUser(id));
            Ok(())
        });
        self.set_selected_user(None);
        result
    }

    fn run<F>(&mut self, now: Instant, success: &str, op: F) -> Result<(), OperationError>
    where
        F: FnOnce(&mut AppStore) -> Result<(), OperationError>,
    {
        self.store.dispatch(LoadingIntent::Set(true));
        let result = op(&mut self.store);
        let alert = match &result {
            Ok(()) => AlertState::success(success),
            Err(err) => {
                tracing::warn!(error = %err, "Operation failed");
                AlertState::error(err.to_string())
            }
        };
        self.show_alert(alert, now);
        self.store.dispatch(LoadingIntent::Set(false));
        result
    }

    // ========================================================================
    // Alert
    // ========================================================================

    pub fn show_alert(&mut self, alert: AlertState, now: Instant) {
        self.alert_shown_at = alert.show.then_some(now);
        self.store.dispatch(AlertIntent::Set(alert));
    }

    pub fn dismiss_alert(&mut self) {
        self.alert_shown_at = None;
        self.store.dispatch(AlertIntent::Dismiss);
    }

    /// Hide an alert that has outlived the configured auto-dismiss delay.
    pub fn tick(&mut self, now: Instant) {
        let (Some(delay), Some(shown_at)) = (self.alert_auto_dismiss, self.alert_shown_at) else {
            return;
        };
        if now.saturating_duration_since(shown_at) >= delay {
            self.dismiss_alert();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::AlertKind;

    fn user(id: u64, name: &str) -> UserRecord {
        UserRecord {
            id,
            name: name.to_string(),
            username: name.to_lowercase(),
            ..UserRecord::default()
        }
    }

    fn directory_with(users: Vec<UserRecord>) -> UserDirectory {
        let mut directory = UserDirectory::new(AppStore::new());
        directory.set_users(users);
        directory
    }

    #[test]
    fn add_appends_and_reports_success() {
        let mut directory = directory_with(vec![user(1, "Ann")]);
        let id = directory.next_user_id();
        directory.add_user(user(id, "Bob"), Instant::now()).unwrap();

        let users = &directory.store().users().users;
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].id, 2);
        assert!(!directory.store().is_loading());
        assert_eq!(*directory.store().alert(), AlertState::success(USER_ADDED));
    }

    #[test]
    fn add_with_duplicate_id_reports_error_and_clears_loading() {
        let mut directory = directory_with(vec![user(1, "Ann")]);
        let err = directory.add_user(user(1, "Imposter"), Instant::now()).unwrap_err();

        assert_eq!(err, OperationError::DuplicateId { id: 1 });
        assert_eq!(directory.store().users().users, vec![user(1, "Ann")]);
        assert!(!directory.store().is_loading());
        let alert = directory.store().alert();
        assert!(alert.show);
        assert_eq!(alert.kind, AlertKind::Error);
        assert_eq!(alert.message, "A user with id 1 already exists");
    }

    #[test]
    fn edit_clears_selection() {
        let mut directory = directory_with(vec![user(1, "Ann")]);
        directory.set_selected_user(Some(1));
        directory.edit_user(user(1, "Anna"), Instant::now()).unwrap();

        assert!(directory.store().selected_user().is_none());
        assert_eq!(directory.store().users().users[0].name, "Anna");
        assert_eq!(directory.store().alert().message, USER_UPDATED);
    }

    #[test]
    fn delete_clears_selection() {
        let mut directory = directory_with(vec![user(1, "Ann"), user(2, "Bob")]);
        directory.set_selected_user(Some(2));
        directory.delete_user(2, Instant::now()).unwrap();

        assert!(directory.store().selected_user().is_none());
        assert_eq!(directory.store().users().users, vec![user(1, "Ann")]);
        assert_eq!(directory.store().alert().message, USER_DELETED);
    }

    #[test]
    fn fetch_success_populates_and_clears_loading() {
        let mut directory = UserDirectory::new(AppStore::new());
        directory.begin_fetch();
        assert!(directory.store().is_loading());

        directory.finish_fetch(Ok(vec![user(1, "Ann")]));
        assert!(!directory.store().is_loading());
        assert_eq!(directory.store().total_users(), 1);
    }

    #[test]
    fn fetch_failure_leaves_directory_empty_without_alert() {
        let mut directory = UserDirectory::new(AppStore::new());
        directory.begin_fetch();
        directory.finish_fetch(Err("error sending request".to_string()));

        assert!(!directory.store().is_loading());
        assert!(directory.store().users().users.is_empty());
        assert!(!directory.store().alert().show);
    }

    #[test]
    fn alerts_stay_until_dismissed_by_default() {
        let mut directory = directory_with(vec![]);
        let start = Instant::now();
        directory.add_user(user(1, "Ann"), start).unwrap();

        directory.tick(start + Duration::from_secs(3600));
        assert!(directory.store().alert().show);

        directory.dismiss_alert();
        assert!(!directory.store().alert().show);
    }

    #[test]
    fn auto_dismiss_hides_after_delay() {
        let mut directory = directory_with(vec![])
            .with_alert_auto_dismiss(Some(Duration::from_millis(2000)));
        let start = Instant::now();
        directory.add_user(user(1, "Ann"), start).unwrap();

        directory.tick(start + Duration::from_millis(1999));
        assert!(directory.store().alert().show);

        directory.tick(start + Duration::from_millis(2000));
        assert!(!directory.store().alert().show);
        assert_eq!(directory.store().alert().message, USER_ADDED);
    }
}
