use std::time::Instant;

use crate::store::ViewMode;
use crate::ui::app::{App, Focus};
use crate::ui::form::FormIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    handle_key_at(app, key, Instant::now());
}

/// Route a key press by focus. `now` feeds the search debounce and alert timer.
pub fn handle_key_at(app: &mut App, key: KeyEvent, now: Instant) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    match app.focus() {
        Focus::Alert => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                app.dismiss_alert();
            }
        }
        Focus::Detail => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q')) {
                app.close_detail();
            }
        }
        Focus::ConfirmDelete => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_delete(now),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
            _ => {}
        },
        Focus::Form => handle_form_key(app, key, now),
        Focus::Search => match key.code {
            KeyCode::Enter | KeyCode::Esc => app.finish_search(),
            KeyCode::Backspace => app.on_search_backspace(now),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.on_search_char(ch, now)
            }
            _ => {}
        },
        Focus::Browse => handle_browse_key(app, key),
    }
}

fn handle_browse_key(app: &mut App, key: KeyEvent) {
    // Edits made before the initial load lands would be overwritten by it.
    if app.store().is_loading() && matches!(key.code, KeyCode::Char('a' | 'e' | 'd')) {
        return;
    }
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Char('g') => app.set_view_mode(ViewMode::Grid),
        KeyCode::Char('l') => app.set_view_mode(ViewMode::List),
        KeyCode::Tab => app.toggle_view_mode(),
        KeyCode::Left => app.move_cursor(-1, 0),
        KeyCode::Right => app.move_cursor(1, 0),
        KeyCode::Up => app.move_cursor(0, -1),
        KeyCode::Down => app.move_cursor(0, 1),
        KeyCode::Enter => app.open_detail(),
        KeyCode::Char('a') => app.open_add_form(),
        KeyCode::Char('e') => app.open_edit_form(),
        KeyCode::Char('d') => app.open_delete_confirmation(),
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Esc => app.close_form(),
        KeyCode::Enter => app.submit_form(now),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_form(FormIntent::FocusPrev),
        KeyCode::Tab | KeyCode::Down => app.dispatch_form(FormIntent::FocusNext),
        KeyCode::Backspace => app.dispatch_form(FormIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_form(FormIntent::InsertChar(ch))
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
