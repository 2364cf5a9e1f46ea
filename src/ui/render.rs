use crate::ui::app::{App, Focus};
use crate::ui::dialogs::{render_alert, render_confirm_delete, render_detail, render_form};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::users_view::{render_loading, render_users};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let store = app.store();
    let focus = app.focus();

    let header_widget = Header::new(
        app.search_input(),
        focus == Focus::Search,
        store.total_users(),
        store.view_mode(),
    );
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    if store.is_loading() {
        render_loading(frame, body, app.animation_tick());
    } else {
        let users = app.visible_users();
        render_users(frame, body, &users, app.cursor(), store.view_mode());
    }

    let footer_widget = Footer::new(focus);
    frame.render_widget(footer_widget.widget(footer), footer);

    if app.form().is_visible() {
        render_form(frame, body, app.form());
    }
    if let Some(user) = store.selected_user() {
        match focus {
            Focus::Detail => render_detail(frame, body, user),
            Focus::ConfirmDelete => render_confirm_delete(frame, body, user),
            _ => {}
        }
    }
    // Alerts sit above everything else.
    if store.alert().show {
        let auto_close = app.directory().alert_auto_dismiss().is_some();
        render_alert(frame, area, store.alert(), auto_close);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;
    use crate::model::UserRecord;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Instant;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn user(id: u64, name: &str) -> UserRecord {
        UserRecord {
            id,
            name: name.to_string(),
            username: name.to_lowercase(),
            ..UserRecord::default()
        }
    }

    #[test]
    fn shows_loading_then_users_and_count() {
        let mut app = App::new(&UiConfig::default());
        app.start_fetch();
        assert!(screen_text(&app).contains("Loading users"));

        app.on_users_loaded(Ok(vec![user(1, "Ann"), user(2, "Bob")]));
        let text = screen_text(&app);
        assert!(text.contains("Showed: 2 Users"));
        assert!(text.contains("Ann"));
        assert!(text.contains("@bob"));
    }

    #[test]
    fn empty_directory_shows_not_found() {
        let mut app = App::new(&UiConfig::default());
        app.start_fetch();
        app.on_users_loaded(Err("connection refused".into()));
        let text = screen_text(&app);
        assert!(text.contains("Data not found."));
        assert!(text.contains("Showed: 0 Users"));
    }

    #[test]
    fn alert_dialog_has_heading() {
        let mut app = App::new(&UiConfig::default());
        app.on_users_loaded(Ok(vec![user(1, "Ann")]));
        app.open_delete_confirmation();
        assert!(screen_text(&app).contains("Delete Ann (@ann)?"));

        app.confirm_delete(Instant::now());
        let text = screen_text(&app);
        assert!(text.contains("Success"));
        assert!(text.contains("User deleted successfully"));
        assert!(!text.contains("(Automatic Close)"));
    }
}
