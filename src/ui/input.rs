use crate::ui::app::App;
use crate::ui::form::{FormIntent, FormStatus};
use crate::ui::route::Route;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.pending_delete().is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.resolve_delete(true),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.resolve_delete(false),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::F(1) => return app.navigate(Route::Home),
        KeyCode::F(2) => return app.navigate(Route::AddUser),
        KeyCode::F(3) => return app.navigate(Route::About),
        _ => {}
    }

    match app.route().clone() {
        Route::Home => handle_home_key(app, key),
        Route::AddUser | Route::EditUser(_) => handle_form_key(app, key),
        Route::UserInfo(id) => match key.code {
            KeyCode::Char('e') => app.navigate(Route::EditUser(id)),
            KeyCode::Char('q') => app.request_quit(),
            KeyCode::Esc | KeyCode::Backspace => app.navigate(Route::Home),
            _ => {}
        },
        Route::About => match key.code {
            KeyCode::Char('q') => app.request_quit(),
            KeyCode::Esc | KeyCode::Backspace => app.navigate(Route::Home),
            _ => {}
        },
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    let selected = app.selected_user().map(|user| user.id.clone());
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Char('a') => app.navigate(Route::AddUser),
        KeyCode::Char('r') => app.reload(),
        KeyCode::Char('d') => app.request_delete(),
        KeyCode::Char('e') => {
            if let Some(id) = selected {
                app.navigate(Route::EditUser(id));
            }
        }
        KeyCode::Char('v') | KeyCode::Enter => {
            if let Some(id) = selected {
                app.navigate(Route::UserInfo(id));
            }
        }
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    // Submitted forms wait for the scheduled return to the list.
    if app.form().status == FormStatus::Submitted {
        if key.code == KeyCode::Esc {
            app.navigate(Route::Home);
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.navigate(Route::Home),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab | KeyCode::Down => app.form_intent(FormIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.form_intent(FormIntent::FocusPrev),
        KeyCode::Backspace => app.form_intent(FormIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form_intent(FormIntent::Input(ch))
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
