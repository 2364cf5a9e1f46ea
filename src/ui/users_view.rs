//! Body of the screen: the directory as a list or a grid of cards.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::model::UserRecord;
use crate::store::{AppStore, ViewMode};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, SELECTED_BORDER};

/// Width of one grid card, borders included.
pub const CARD_WIDTH: u16 = 32;
/// Height of one grid card, borders included.
pub const CARD_HEIGHT: u16 = 6;
/// Height of one list row, borders included.
const ROW_HEIGHT: u16 = 3;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Filtered users, newest id first. Sorting is a display concern only.
pub fn display_order(store: &AppStore) -> Vec<&UserRecord> {
    let mut users = store.filtered_users();
    users.sort_by(|a, b| b.id.cmp(&a.id));
    users
}

/// Number of cards that fit side by side in `width` columns.
pub fn grid_columns(width: u16) -> usize {
    usize::from((width / CARD_WIDTH).max(1))
}

pub fn render_users(
    frame: &mut Frame,
    area: Rect,
    users: &[&UserRecord],
    cursor: usize,
    mode: ViewMode,
) {
    if users.is_empty() {
        render_message(frame, area, "Data not found.");
        return;
    }

    match mode {
        ViewMode::List => render_list(frame, area, users, cursor),
        ViewMode::Grid => render_grid(frame, area, users, cursor),
    }
}

pub fn render_loading(frame: &mut Frame, area: Rect, animation_tick: u8) {
    let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];
    render_message(frame, area, &format!("{} Loading users...", spinner));
}

fn render_message(frame: &mut Frame, area: Rect, message: &str) {
    let top = area.height / 3;
    let target = Rect {
        x: area.x,
        y: area.y + top,
        width: area.width,
        height: area.height.saturating_sub(top).min(1),
    };
    frame.render_widget(
        Paragraph::new(message.to_string())
            .style(Style::default().fg(HEADER_TEXT))
            .alignment(Alignment::Center),
        target,
    );
}

/// First visible item so that `cursor` stays on screen.
fn scroll_offset(cursor: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    (cursor / per_page) * per_page
}

fn render_list(frame: &mut Frame, area: Rect, users: &[&UserRecord], cursor: usize) {
    let per_page = usize::from(area.height / ROW_HEIGHT);
    let offset = scroll_offset(cursor, per_page);

    for (slot, (index, user)) in users
        .iter()
        .enumerate()
        .skip(offset)
        .take(per_page)
        .enumerate()
    {
        let row = Rect {
            x: area.x,
            y: area.y + slot as u16 * ROW_HEIGHT,
            width: area.width,
            height: ROW_HEIGHT,
        };
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", user.name),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("@{}", user.username), Style::default().fg(MUTED_TEXT)),
            Span::styled("  │  ", Style::default().fg(GLOBAL_BORDER)),
            Span::styled(user.company.name.clone(), Style::default().fg(HEADER_TEXT)),
            Span::styled(
                format!("  {}", user.company.catch_phrase),
                Style::default().fg(MUTED_TEXT),
            ),
        ]);
        frame.render_widget(Paragraph::new(line).block(item_block(index == cursor)), row);
    }
}

fn render_grid(frame: &mut Frame, area: Rect, users: &[&UserRecord], cursor: usize) {
    let columns = grid_columns(area.width);
    let rows = usize::from((area.height / CARD_HEIGHT).max(1));
    let offset = scroll_offset(cursor, columns * rows);

    for (slot, (index, user)) in users
        .iter()
        .enumerate()
        .skip(offset)
        .take(columns * rows)
        .enumerate()
    {
        let card = Rect {
            x: area.x + (slot % columns) as u16 * CARD_WIDTH,
            y: area.y + (slot / columns) as u16 * CARD_HEIGHT,
            width: CARD_WIDTH.min(area.width),
            height: CARD_HEIGHT.min(area.height),
        };
        let lines = vec![
            Line::from(Span::styled(
                user.name.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("@{}", user.username),
                Style::default().fg(MUTED_TEXT),
            )),
            Line::from(Span::styled(user.email.clone(), Style::default().fg(HEADER_TEXT))),
            Line::from(Span::styled(
                user.company.name.clone(),
                Style::default().fg(MUTED_TEXT),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(item_block(index == cursor)),
            card,
        );
    }
}

fn item_block(highlighted: bool) -> Block<'static> {
    let color = if highlighted { SELECTED_BORDER } else { GLOBAL_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    if highlighted {
        block.title(Span::styled(" ● ", Style::default().fg(ACCENT)))
    } else {
        block
    }
}
