use crate::ui::app::App;
use crate::ui::route::Route;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let block = Block::default()
        .title(" User Detail ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    let user = match app.route() {
        Route::UserInfo(id) => app.users().find(id),
        _ => None,
    };
    let Some(user) = user else {
        frame.render_widget(Paragraph::new("User not found").block(block), area);
        return;
    };

    let label = Style::default().fg(MUTED_TEXT);
    let value = Style::default().fg(HEADER_TEXT);
    let row = |name: &'static str, text: String| {
        Line::from(vec![
            Span::styled(format!("{:<9}", name), label),
            Span::styled(text, value),
        ])
    };
    let lines = vec![
        row("ID:", user.id.to_string()),
        row("Name:", user.fields.name.clone()),
        row("Email:", user.fields.email.clone()),
        row("Phone:", user.fields.phone.clone()),
        row("Address:", user.fields.address.clone()),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
