//! Composite operations: loading, mutation and alert sequencing.

mod common;

use common::{sample_users, user};
use std::time::{Duration, Instant};
use userdesk::store::directory::{USER_ADDED, USER_DELETED, USER_UPDATED};
use userdesk::store::{AlertKind, AppStore, OperationError, UserDirectory, ViewMode};

fn loaded_directory() -> UserDirectory {
    let mut directory = UserDirectory::new(AppStore::new());
    directory.begin_fetch();
    directory.finish_fetch(Ok(sample_users()));
    directory
}

#[test]
fn add_uses_next_id_and_shows_success() {
    let mut directory = loaded_directory();
    let id = directory.next_user_id();
    assert_eq!(id, 4);

    directory
        .add_user(user(id, "Dana White", "danaw"), Instant::now())
        .unwrap();

    let store = directory.store();
    assert_eq!(store.total_users(), 4);
    assert!(!store.is_loading());
    assert!(store.alert().show);
    assert_eq!(store.alert().kind, AlertKind::Success);
    assert_eq!(store.alert().kind.title(), "Success");
    assert_eq!(store.alert().message, USER_ADDED);
}

#[test]
fn first_user_in_empty_directory_gets_id_one() {
    let mut directory = UserDirectory::new(AppStore::new());
    let id = directory.next_user_id();
    directory.add_user(user(id, "First", "first"), Instant::now()).unwrap();
    assert_eq!(directory.store().users().users[0].id, 1);
}

#[test]
fn duplicate_add_fails_without_mutation() {
    let mut directory = loaded_directory();
    let result = directory.add_user(user(2, "Copy", "copy"), Instant::now());

    assert_eq!(result, Err(OperationError::DuplicateId { id: 2 }));
    let store = directory.store();
    assert_eq!(store.users().users, sample_users());
    assert!(!store.is_loading());
    assert_eq!(store.alert().kind, AlertKind::Error);
    assert_eq!(store.alert().kind.title(), "Failed");
}

#[test]
fn edit_and_delete_report_and_clear_selection() {
    let mut directory = loaded_directory();
    directory.set_selected_user(Some(1));
    directory
        .edit_user(user(1, "John Q. Doe", "johndoe"), Instant::now())
        .unwrap();
    assert_eq!(directory.store().alert().message, USER_UPDATED);
    assert!(directory.store().selected_user().is_none());

    directory.dismiss_alert();
    directory.set_selected_user(Some(3));
    directory.delete_user(3, Instant::now()).unwrap();
    assert_eq!(directory.store().alert().message, USER_DELETED);
    assert!(directory.store().selected_user().is_none());
    assert_eq!(directory.store().total_users(), 2);
}

#[test]
fn failed_fetch_is_silent() {
    let mut directory = UserDirectory::new(AppStore::new());
    directory.begin_fetch();
    assert!(directory.store().is_loading());
    directory.finish_fetch(Err("Upstream returned status 500".into()));

    assert!(!directory.store().is_loading());
    assert_eq!(directory.store().total_users(), 0);
    assert!(!directory.store().alert().show);
}

#[test]
fn view_mode_set_and_toggle() {
    let mut directory = UserDirectory::new(AppStore::with_view_mode(ViewMode::List));
    assert_eq!(directory.store().view_mode(), ViewMode::List);
    directory.toggle_view_mode();
    assert_eq!(directory.store().view_mode(), ViewMode::Grid);
    directory.set_view_mode(ViewMode::List);
    assert_eq!(directory.store().view_mode(), ViewMode::List);
}

#[test]
fn auto_dismiss_restarts_for_each_alert() {
    let mut directory = loaded_directory().with_alert_auto_dismiss(Some(Duration::from_secs(2)));
    let start = Instant::now();
    directory.delete_user(1, start).unwrap();
    directory.delete_user(2, start + Duration::from_secs(1)).unwrap();

    directory.tick(start + Duration::from_secs(2));
    assert!(directory.store().alert().show);

    directory.tick(start + Duration::from_secs(3));
    assert!(!directory.store().alert().show);
}
