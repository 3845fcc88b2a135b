use crate::config::TimingConfig;
use crate::effects::{Dispatcher, Notice};
use crate::model::{User, UserFields, UserId};
use crate::mvi::Reducer;
use crate::store::{UserAction, UsersState};
use crate::ui::events::AppEvent;
use crate::ui::form::{self, FormIntent, FormMode, FormReducer, FormState, FormStatus};
use crate::ui::route::Route;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::warn;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub notice: Notice,
    pub shown_at: Instant,
}

/// View-side state: current page, the last store snapshot, and page-local
/// bits (selection, form, pending confirmation, toast).
pub struct App {
    should_quit: bool,
    route: Route,
    users: UsersState,
    selected: usize,
    form: FormState,
    confirm_delete: Option<UserId>,
    toast: Option<Toast>,
    dispatcher: Dispatcher,
    events: mpsc::UnboundedSender<AppEvent>,
    navigate_delay: Duration,
    toast_duration: Duration,
}

impl App {
    pub fn new(
        dispatcher: Dispatcher,
        events: mpsc::UnboundedSender<AppEvent>,
        timing: &TimingConfig,
        toast_duration: Duration,
    ) -> Self {
        Self {
            should_quit: false,
            route: Route::Home,
            users: UsersState::default(),
            selected: 0,
            form: FormState::default(),
            confirm_delete: None,
            toast: None,
            dispatcher,
            events,
            navigate_delay: timing.navigate_delay(),
            toast_duration,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn users(&self) -> &UsersState {
        &self.users
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.users.users.get(self.selected)
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn pending_delete(&self) -> Option<&UserId> {
        self.confirm_delete.as_ref()
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    /// Switches page and runs its entry behavior: the list reloads every
    /// time it is shown, the form is filled from the store. Pages keyed by
    /// an id the store does not hold yet request the list.
    pub fn navigate(&mut self, route: Route) {
        self.confirm_delete = None;
        match &route {
            Route::Home => self.dispatch(UserAction::LoadStart),
            Route::AddUser => {
                self.open_form(FormMode::Add, UserFields::default());
            }
            Route::EditUser(id) => {
                let fields = self.users.find(id).map(|user| user.fields.clone());
                if fields.is_none() {
                    self.dispatch(UserAction::LoadStart);
                }
                self.open_form(FormMode::Edit(id.clone()), fields.unwrap_or_default());
            }
            Route::UserInfo(id) => {
                if self.users.find(id).is_none() {
                    self.dispatch(UserAction::LoadStart);
                }
            }
            Route::About => {}
        }
        self.route = route;
    }

    pub fn on_state(&mut self, state: UsersState) {
        self.users = state;
        self.selected = self.selected.min(self.users.users.len().saturating_sub(1));

        // A deep link into the editor may arrive before the list does.
        if let Route::EditUser(id) = self.route.clone() {
            let untouched = self.form.fields == UserFields::default()
                && self.form.status == FormStatus::Editing;
            if untouched {
                if let Some(fields) = self.users.find(&id).map(|user| user.fields.clone()) {
                    self.open_form(FormMode::Edit(id), fields);
                }
            }
        }
    }

    pub fn on_notice(&mut self, notice: Notice) {
        self.toast = Some(Toast {
            notice,
            shown_at: Instant::now(),
        });
    }

    pub fn on_tick(&mut self, now: Instant) {
        if let Some(toast) = &self.toast {
            if now.duration_since(toast.shown_at) >= self.toast_duration {
                self.toast = None;
            }
        }
    }

    pub fn select_next(&mut self) {
        let len = self.users.users.len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_prev(&mut self) {
        let len = self.users.users.len();
        if len > 0 {
            self.selected = if self.selected == 0 { len - 1 } else { self.selected - 1 };
        }
    }

    pub fn reload(&mut self) {
        self.dispatch(UserAction::LoadStart);
    }

    /// Asks for confirmation before deleting the selected user.
    pub fn request_delete(&mut self) {
        self.confirm_delete = self.selected_user().map(|user| user.id.clone());
    }

    pub fn resolve_delete(&mut self, confirmed: bool) {
        if let Some(id) = self.confirm_delete.take() {
            if confirmed {
                self.dispatch(UserAction::DeleteStart(id));
            }
        }
    }

    pub fn form_intent(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    /// Validates and, when valid, dispatches the create/update intent and
    /// schedules the return to the list. The outcome is not awaited.
    pub fn submit_form(&mut self) {
        let (form, action) = form::submit(std::mem::take(&mut self.form));
        self.form = form;
        if let Some(action) = action {
            self.dispatch(action);
            self.schedule_navigation(Route::Home);
        }
    }

    fn open_form(&mut self, mode: FormMode, fields: UserFields) {
        self.form_intent(FormIntent::Open { mode, fields });
    }

    fn schedule_navigation(&self, route: Route) {
        let events = self.events.clone();
        let delay = self.navigate_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = events.send(AppEvent::Navigate(route));
        });
    }

    fn dispatch(&mut self, action: UserAction) {
        if let Err(err) = self.dispatcher.dispatch(action) {
            warn!(error = %err, "dispatch failed");
            self.on_notice(Notice::error(err.to_string()));
        }
    }
}
