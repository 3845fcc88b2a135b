use crate::effects::NoticeLevel;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions, top_right};
use crate::ui::pages;
use crate::ui::route::Route;
use crate::ui::theme::{HEADER_TEXT, POPUP_BORDER, STATUS_ERROR, STATUS_OK};
use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::widget(app.route()), header);
    frame.render_widget(Clear, body);
    match app.route() {
        Route::Home => pages::home::render(frame, body, app),
        Route::AddUser | Route::EditUser(_) => pages::user_form::render(frame, body, app),
        Route::UserInfo(_) => pages::detail::render(frame, body, app),
        Route::About => pages::about::render(frame, body),
    }
    frame.render_widget(Footer::widget(app.route(), footer), footer);

    if app.pending_delete().is_some() {
        let popup = centered_rect(50, 30, area);
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(vec![
                Line::from("Are you sure you want to delete the user?"),
                Line::from(""),
                Line::from("[y] Delete   [n] Cancel"),
            ])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(HEADER_TEXT))
            .block(
                Block::default()
                    .title(" Confirm ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(POPUP_BORDER)),
            ),
            popup,
        );
    }

    if let Some(toast) = app.toast() {
        let color = match toast.notice.level {
            NoticeLevel::Success => STATUS_OK,
            NoticeLevel::Error => STATUS_ERROR,
        };
        let width = (toast.notice.message.chars().count() as u16).saturating_add(4);
        let rect = top_right(width, 3, body);
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(toast.notice.message.clone())
                .style(Style::default().fg(color))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color)),
                ),
            rect,
        );
    }
}
