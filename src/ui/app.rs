use std::time::Instant;

use crate::config::UiConfig;
use crate::debounce::Debouncer;
use crate::model::UserRecord;
use crate::store::{AppStore, UserDirectory, ViewMode};
use crate::ui::form::{FormIntent, FormMode, FormReducer, UserFormState};
use crate::ui::users_view::{display_order, grid_columns};

/// Which part of the screen receives key presses.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Browse,
    Search,
    Detail,
    Form,
    ConfirmDelete,
    /// Alerts capture input until dismissed.
    Alert,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Overlay {
    None,
    Detail,
    Form,
    ConfirmDelete,
}

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    directory: UserDirectory,
    overlay: Overlay,
    searching: bool,
    /// What the operator has typed; reaches the store through the debouncer.
    search_input: String,
    search_debounce: Debouncer<String>,
    /// Index into the displayed (sorted, filtered) users.
    cursor: usize,
    form: UserFormState,
    /// Advances every tick; drives the loading spinner.
    animation_tick: u8,
}

impl App {
    pub fn new(config: &UiConfig) -> Self {
        let directory = UserDirectory::new(AppStore::with_view_mode(config.default_view_mode))
            .with_alert_auto_dismiss(config.alert_auto_dismiss());
        Self {
            should_quit: false,
            size: None,
            directory,
            overlay: Overlay::None,
            searching: false,
            search_input: String::new(),
            search_debounce: Debouncer::new(config.search_debounce()),
            cursor: 0,
            form: UserFormState::default(),
            animation_tick: 0,
        }
    }

    pub fn store(&self) -> &AppStore {
        self.directory.store()
    }

    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        if self.store().alert().show {
            return Focus::Alert;
        }
        match self.overlay {
            Overlay::Detail => Focus::Detail,
            Overlay::Form => Focus::Form,
            Overlay::ConfirmDelete => Focus::ConfirmDelete,
            Overlay::None if self.searching => Focus::Search,
            Overlay::None => Focus::Browse,
        }
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn form(&self) -> &UserFormState {
        &self.form
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    /// Users in display order (filtered, id descending).
    pub fn visible_users(&self) -> Vec<&UserRecord> {
        display_order(self.store())
    }

    pub fn highlighted_user(&self) -> Option<&UserRecord> {
        self.visible_users().get(self.cursor).copied()
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
        if let Some(term) = self.search_debounce.poll(now) {
            self.directory.set_search(term);
            self.cursor = 0;
        }
        self.directory.tick(now);
        self.clamp_cursor();
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    // ========================================================================
    // Fetch lifecycle
    // ========================================================================

    pub fn start_fetch(&mut self) {
        self.directory.begin_fetch();
    }

    pub fn on_users_loaded(&mut self, result: Result<Vec<UserRecord>, String>) {
        self.directory.finish_fetch(result);
        self.cursor = 0;
    }

    // ========================================================================
    // Browsing
    // ========================================================================

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.directory.set_view_mode(mode);
    }

    pub fn toggle_view_mode(&mut self) {
        self.directory.toggle_view_mode();
    }

    /// Move the highlight. In grid mode vertical moves jump a whole row.
    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        let len = self.visible_users().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let step = match self.store().view_mode() {
            ViewMode::Grid => dx as i64 + dy as i64 * self.grid_columns() as i64,
            ViewMode::List => dy as i64,
        };
        let target = (self.cursor as i64 + step).clamp(0, len as i64 - 1);
        self.cursor = target as usize;
    }

    fn grid_columns(&self) -> usize {
        let width = self.size.map(|(cols, _)| cols).unwrap_or(80);
        grid_columns(width)
    }

    fn clamp_cursor(&mut self) {
        let len = self.visible_users().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    // ========================================================================
    // Search
    // ========================================================================

    pub fn start_search(&mut self) {
        self.searching = true;
    }

    /// Leave search mode, applying any term still waiting on the debounce.
    pub fn finish_search(&mut self) {
        self.searching = false;
        if let Some(term) = self.search_debounce.flush() {
            self.directory.set_search(term);
            self.cursor = 0;
        }
    }

    pub fn on_search_char(&mut self, ch: char, now: Instant) {
        self.search_input.push(ch);
        self.search_debounce.push(self.search_input.clone(), now);
    }

    pub fn on_search_backspace(&mut self, now: Instant) {
        self.search_input.pop();
        self.search_debounce.push(self.search_input.clone(), now);
    }

    // ========================================================================
    // Detail dialog
    // ========================================================================

    pub fn open_detail(&mut self) {
        if let Some(id) = self.highlighted_user().map(|user| user.id) {
            self.directory.set_selected_user(Some(id));
            self.overlay = Overlay::Detail;
        }
    }

    pub fn close_detail(&mut self) {
        self.directory.set_selected_user(None);
        self.overlay = Overlay::None;
    }

    // ========================================================================
    // Add / edit form
    // ========================================================================

    pub fn dispatch_form(&mut self, intent: FormIntent) {
        crate::dispatch_mvi!(self, form, FormReducer, intent);
    }

    pub fn open_add_form(&mut self) {
        self.directory.set_selected_user(None);
        self.dispatch_form(FormIntent::Open { user: None });
        self.overlay = Overlay::Form;
    }

    pub fn open_edit_form(&mut self) {
        let Some(id) = self.highlighted_user().map(|user| user.id) else {
            return;
        };
        self.directory.set_selected_user(Some(id));
        let user = self.store().selected_user().cloned();
        self.dispatch_form(FormIntent::Open { user });
        self.overlay = Overlay::Form;
    }

    pub fn close_form(&mut self) {
        self.dispatch_form(FormIntent::Close);
        self.directory.set_selected_user(None);
        self.overlay = Overlay::None;
    }

    /// Validate and apply the form. Validation failures stay in the form;
    /// operation failures surface through the alert.
    pub fn submit_form(&mut self, now: Instant) {
        let UserFormState::Visible { mode, values, .. } = &self.form else {
            return;
        };
        if let Err(error) = values.validate() {
            self.dispatch_form(FormIntent::Reject(error));
            return;
        }

        let mode = *mode;
        let id = match mode {
            FormMode::Add => self.directory.next_user_id(),
            FormMode::Edit { id } => id,
        };
        let record = values.to_record(id);
        self.dispatch_form(FormIntent::Close);
        self.overlay = Overlay::None;

        let result = match mode {
            FormMode::Add => self.directory.add_user(record, now),
            FormMode::Edit { .. } => self.directory.edit_user(record, now),
        };
        if result.is_ok() && mode == FormMode::Add {
            // Newest id sorts first.
            self.cursor = 0;
        }
        self.directory.set_selected_user(None);
        self.clamp_cursor();
    }

    // ========================================================================
    // Delete confirmation
    // ========================================================================

    pub fn open_delete_confirmation(&mut self) {
        if let Some(id) = self.highlighted_user().map(|user| user.id) {
            self.directory.set_selected_user(Some(id));
            self.overlay = Overlay::ConfirmDelete;
        }
    }

    pub fn confirm_delete(&mut self, now: Instant) {
        if let Some(id) = self.store().selected_user().map(|user| user.id) {
            // Errors are already reported through the alert.
            let _ = self.directory.delete_user(id, now);
        }
        self.overlay = Overlay::None;
        self.clamp_cursor();
    }

    pub fn cancel_delete(&mut self) {
        self.directory.set_selected_user(None);
        self.overlay = Overlay::None;
    }

    // ========================================================================
    // Alert
    // ========================================================================

    pub fn dismiss_alert(&mut self) {
        self.directory.dismiss_alert();
    }
}
