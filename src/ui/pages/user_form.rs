use crate::ui::app::App;
use crate::ui::form::FormField;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let form = app.form();
    let label_style = Style::default().fg(MUTED_TEXT);
    let value_style = Style::default().fg(HEADER_TEXT);
    let focus_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let error_style = Style::default().fg(STATUS_ERROR);

    let mut lines = Vec::with_capacity(FormField::ALL.len() * 3 + 2);
    for field in FormField::ALL {
        let focused = form.focus == field;
        let marker = if focused { "› " } else { "  " };
        let cursor = if focused { "▏" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(marker, focus_style),
            Span::styled(
                format!("{:<8}", field.label()),
                if focused { focus_style } else { label_style },
            ),
            Span::styled(form.value(field).to_string(), value_style),
            Span::styled(cursor, focus_style),
        ]));
        if let Some(error) = form.error_for(field) {
            lines.push(Line::from(Span::styled(
                format!("          {}", error.message),
                error_style,
            )));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled(format!("  [Enter] {}", form.submit_label()), focus_style),
        Span::styled("   [Esc] Cancel", label_style),
    ]));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {} ", form.title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(paragraph, area);
}
