use crate::ui::app::App;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

const COLUMNS: [&str; 5] = ["No.", "Name", "Email", "Phone", "Address"];

/// The user list. Loading and error states replace the table entirely.
pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let block = Block::default()
        .title(" User Management ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let state = app.users();

    if state.loading {
        let spinner = Paragraph::new(Line::from("Loading..."))
            .alignment(Alignment::Center)
            .style(Style::default().fg(MUTED_TEXT))
            .block(block);
        frame.render_widget(spinner, area);
        return;
    }

    if let Some(error) = &state.error {
        let banner = Paragraph::new(Line::from(format!("Error: {}", error)))
            .style(Style::default().fg(STATUS_ERROR))
            .wrap(Wrap { trim: true })
            .block(block.border_style(Style::default().fg(STATUS_ERROR)));
        frame.render_widget(banner, area);
        return;
    }

    let header = Row::new(COLUMNS.iter().map(|title| Cell::from(*title)))
        .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD));
    let widths = [
        Constraint::Length(5),
        Constraint::Percentage(20),
        Constraint::Percentage(25),
        Constraint::Length(12),
        Constraint::Min(10),
    ];

    let rows: Vec<Row<'_>> = if state.users.is_empty() {
        vec![Row::new(vec![Cell::from(""), Cell::from("No users found")])
            .style(Style::default().fg(MUTED_TEXT))]
    } else {
        state
            .users
            .iter()
            .enumerate()
            .map(|(index, user)| {
                Row::new(vec![
                    Cell::from((index + 1).to_string()),
                    Cell::from(user.fields.name.as_str()),
                    Cell::from(user.fields.email.as_str()),
                    Cell::from(user.fields.phone.as_str()),
                    Cell::from(user.fields.address.as_str()),
                ])
            })
            .collect()
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");

    let mut table_state = TableState::default();
    if !state.users.is_empty() {
        table_state.select(Some(app.selected()));
    }
    frame.render_stateful_widget(table, area, &mut table_state);
}
