use crate::store::ViewMode;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Search box, visible count and view mode.
pub struct Header<'a> {
    search: &'a str,
    searching: bool,
    shown: usize,
    view_mode: ViewMode,
}

impl<'a> Header<'a> {
    pub fn new(search: &'a str, searching: bool, shown: usize, view_mode: ViewMode) -> Self {
        Self {
            search,
            searching,
            shown,
            view_mode,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let search = if self.searching {
            Span::styled(
                format!("{}▏", self.search),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )
        } else if self.search.is_empty() {
            Span::styled("Search name or username...", Style::default().fg(MUTED_TEXT))
        } else {
            Span::styled(self.search.to_string(), text_style)
        };

        let line = Line::from(vec![
            Span::styled("  🔍 ", text_style),
            search,
            Span::styled("  │  ", separator_style),
            Span::styled(format!("Showed: {} Users", self.shown), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.view_mode.label(), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
