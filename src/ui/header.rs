use crate::ui::route::Route;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Navigation entries in display order, with their function key.
const NAV: [(&str, &str); 3] = [("F1", "Home"), ("F2", "Add User"), ("F3", "About")];

pub struct Header;

impl Header {
    pub fn widget(route: &Route) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let active_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

        let active = match route {
            Route::Home | Route::UserInfo(_) => 0,
            Route::AddUser | Route::EditUser(_) => 1,
            Route::About => 2,
        };

        let mut spans = vec![
            Span::styled("  User Console", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
        ];
        for (index, (key, label)) in NAV.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled("  ", text_style));
            }
            let style = if index == active { active_style } else { text_style };
            spans.push(Span::styled(format!("{} {}", key, label), style));
        }
        spans.push(Span::styled("  │  ", separator_style));
        spans.push(Span::styled(route.path(), separator_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
