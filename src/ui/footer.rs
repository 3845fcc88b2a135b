use crate::ui::route::Route;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Footer {
    pub fn hints(route: &Route) -> &'static str {
        match route {
            Route::Home => " ↑↓: Select │ a: Add │ e: Edit │ v: View │ d: Delete │ r: Reload │ q: Quit",
            Route::AddUser | Route::EditUser(_) => {
                " Tab: Next field │ Shift+Tab: Previous │ Enter: Submit │ Esc: Cancel"
            }
            Route::UserInfo(_) => " e: Edit │ Esc: Back │ q: Quit",
            Route::About => " Esc: Back │ q: Quit",
        }
    }

    pub fn widget(route: &Route, area: Rect) -> Paragraph<'static> {
        let hints = Self::hints(route);
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
