//! Modal popups drawn over the body.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::model::UserRecord;
use crate::store::{AlertKind, AlertState};
use crate::ui::form::{FormField, UserFormState};
use crate::ui::layout::{centered_fixed, centered_rect};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR, STATUS_OK,
};

fn popup_block(title: &str, color: ratatui::style::Color) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER))
}

fn field_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<14}", label), Style::default().fg(MUTED_TEXT)),
        Span::styled(value.to_string(), Style::default().fg(HEADER_TEXT)),
    ])
}

fn detail_lines(user: &UserRecord) -> Vec<Line<'static>> {
    let or_dash = |value: &str| {
        if value.is_empty() {
            "-".to_string()
        } else {
            value.to_string()
        }
    };
    vec![
        Line::from(Span::styled(
            format!("@{}", user.username),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field_line("Name", &user.name),
        field_line("Email", &user.email),
        field_line("Phone", &or_dash(&user.phone)),
        field_line("Website", &or_dash(&user.website)),
        Line::from(""),
        field_line("Company", &user.company.name),
        field_line("Catch phrase", &user.company.catch_phrase),
        field_line("Bs", &user.company.bs),
        Line::from(""),
        field_line("Address", &user.address.one_line()),
        field_line("Lat", &user.address.geo.lat),
        field_line("Lng", &user.address.geo.lng),
    ]
}

pub fn render_detail(frame: &mut Frame, area: Rect, user: &UserRecord) {
    let lines = detail_lines(user);
    let popup = centered_fixed(72, lines.len() as u16 + 2, area);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(popup_block(&user.name, ACCENT)),
        popup,
    );
}

pub fn render_confirm_delete(frame: &mut Frame, area: Rect, user: &UserRecord) {
    let lines = vec![
        Line::from(format!("Delete {} (@{})?", user.name, user.username)),
        Line::from(""),
        Line::from(Span::styled(
            "y: Yes   n: No",
            Style::default().fg(MUTED_TEXT),
        )),
    ];
    let popup = centered_fixed(48, lines.len() as u16 + 2, area);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(popup_block("Delete User", STATUS_ERROR)),
        popup,
    );
}

pub fn render_alert(frame: &mut Frame, area: Rect, alert: &AlertState, auto_close: bool) {
    let color = match alert.kind {
        AlertKind::Success => STATUS_OK,
        AlertKind::Error => STATUS_ERROR,
    };
    let mut lines = vec![Line::from(alert.message.clone()), Line::from("")];
    let hint = if auto_close {
        "(Automatic Close)"
    } else {
        "Enter: OK"
    };
    lines.push(Line::from(Span::styled(hint, Style::default().fg(MUTED_TEXT))));

    let width = (alert.message.chars().count() as u16 + 6).clamp(32, 72);
    let popup = centered_fixed(width, lines.len() as u16 + 2, area);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(popup_block(alert.kind.title(), color)),
        popup,
    );
}

fn form_lines(form: &UserFormState) -> Option<(&'static str, Vec<Line<'static>>)> {
    let UserFormState::Visible {
        mode,
        values,
        focused,
        error,
    } = form
    else {
        return None;
    };

    let mut lines = Vec::new();
    for field in FormField::ALL {
        if let Some(section) = field.section() {
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                section,
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )));
        }

        let is_focused = field.index() == *focused;
        let marker = if field.required_message().is_some() { "*" } else { " " };
        let value = if is_focused {
            format!("{}▏", values.get(field))
        } else {
            values.get(field).to_string()
        };
        let mut line = Line::from(vec![
            Span::styled(
                format!(" {}{:<14}", marker, field.label()),
                Style::default().fg(MUTED_TEXT),
            ),
            Span::styled(value, Style::default().fg(HEADER_TEXT)),
        ]);
        if is_focused {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);

        if let Some(error) = error.as_ref().filter(|error| error.field == field) {
            lines.push(Line::from(Span::styled(
                format!("   {}", error.message),
                Style::default().fg(STATUS_ERROR),
            )));
        }
    }

    Some((mode.title(), lines))
}

pub fn render_form(frame: &mut Frame, area: Rect, form: &UserFormState) {
    let Some((title, lines)) = form_lines(form) else {
        return;
    };
    let popup = centered_rect(70, 90, area);
    frame.render_widget(Clear, popup);

    // Keep the focused line in view on short terminals.
    let inner_height = popup.height.saturating_sub(2) as usize;
    let focused_line = lines
        .iter()
        .position(|line| line.style.bg == Some(ACTIVE_HIGHLIGHT))
        .unwrap_or(0);
    let scroll = (focused_line + 2).saturating_sub(inner_height) as u16;

    frame.render_widget(
        Paragraph::new(lines)
            .scroll((scroll, 0))
            .block(popup_block(title, ACCENT)),
        popup,
    );
}
