//! Application state container.
//!
//! `AppStore` aggregates the four slices. Every change goes through
//! [`AppStore::dispatch`], which routes a closed [`Action`] to the slice's
//! reducer. The store is synchronous and has no side effects; sequencing
//! across slices belongs to [`directory::UserDirectory`].

pub mod alert;
pub mod directory;
pub mod loading;
pub mod users;
pub mod view_mode;

use crate::model::UserRecord;

pub use alert::{AlertIntent, AlertKind, AlertReducer, AlertState};
pub use directory::{OperationError, UserDirectory};
pub use loading::{LoadingIntent, LoadingReducer, LoadingState};
pub use users::{UsersIntent, UsersReducer, UsersState};
pub use view_mode::{ViewMode, ViewModeIntent, ViewModeReducer};

/// Every update the store accepts.
#[derive(Debug, Clone)]
pub enum Action {
    Users(UsersIntent),
    Loading(LoadingIntent),
    Alert(AlertIntent),
    ViewMode(ViewModeIntent),
}

impl From<UsersIntent> for Action {
    fn from(intent: UsersIntent) -> Self {
        Action::Users(intent)
    }
}

impl From<LoadingIntent> for Action {
    fn from(intent: LoadingIntent) -> Self {
        Action::Loading(intent)
    }
}

impl From<AlertIntent> for Action {
    fn from(intent: AlertIntent) -> Self {
        Action::Alert(intent)
    }
}

impl From<ViewModeIntent> for Action {
    fn from(intent: ViewModeIntent) -> Self {
        Action::ViewMode(intent)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppStore {
    users: UsersState,
    loading: LoadingState,
    alert: AlertState,
    view_mode: ViewMode,
}

impl AppStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_view_mode(view_mode: ViewMode) -> Self {
        Self {
            view_mode,
            ..Self::default()
        }
    }

    pub fn dispatch(&mut self, action: impl Into<Action>) {
        match action.into() {
            Action::Users(intent) => {
                crate::dispatch_mvi!(self, users, UsersReducer, intent);
            }
            Action::Loading(intent) => {
                crate::dispatch_mvi!(self, loading, LoadingReducer, intent);
            }
            Action::Alert(intent) => {
                crate::dispatch_mvi!(self, alert, AlertReducer, intent);
            }
            Action::ViewMode(intent) => {
                crate::dispatch_mvi!(self, view_mode, ViewModeReducer, intent);
            }
        }
    }

    pub fn users(&self) -> &UsersState {
        &self.users
    }

    /// Users matching the current search, in stored order.
    pub fn filtered_users(&self) -> Vec<&UserRecord> {
        users::filtered_users(&self.users)
    }

    pub fn total_users(&self) -> usize {
        users::total_users(&self.users)
    }

    pub fn search(&self) -> &str {
        &self.users.search
    }

    pub fn selected_user(&self) -> Option<&UserRecord> {
        self.users.selected.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    pub fn alert(&self) -> &AlertState {
        &self.alert
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }
}
