use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const ABOUT: [&str; 3] = [
    "User Console manages user records held by a remote users API.",
    "List, add, edit, inspect and delete users from the keyboard.",
    "Changes are sent to the server; the list reloads whenever it is shown.",
];

pub fn render(frame: &mut Frame<'_>, area: Rect) {
    let lines: Vec<Line<'_>> = ABOUT.iter().map(|text| Line::from(*text)).collect();
    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(HEADER_TEXT))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" About ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(paragraph, area);
}
