//! Add/edit form state machine.
//!
//! ```text
//! Editing ──Submit──▶ valid?  ──yes──▶ Submitted (fields cleared, intent dispatched)
//!    ▲                  │
//!    └──────no──── Invalid(errors)
//! ```
//!
//! The form never waits for the remote outcome. The caller dispatches the
//! intent returned by [`submit`] and navigates away after a fixed pause.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{UserFields, UserId};
use crate::mvi::{Intent, Reducer, State};
use crate::store::UserAction;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email pattern compiles")
});

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Phone,
    Address,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Address,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Phone => "Phone",
            FormField::Address => "Address",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Phone,
            FormField::Phone => FormField::Address,
            FormField::Address => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Address,
            FormField::Email => FormField::Name,
            FormField::Phone => FormField::Email,
            FormField::Address => FormField::Phone,
        }
    }

    fn feedback(self) -> &'static str {
        match self {
            FormField::Name => "Please provide a name.",
            FormField::Email => "Please provide a valid email.",
            FormField::Phone => "Please provide a 10-digit phone number.",
            FormField::Address => "Please provide an address.",
        }
    }

    fn is_valid(self, value: &str) -> bool {
        let value = value.trim();
        match self {
            FormField::Name | FormField::Address => !value.is_empty(),
            FormField::Email => EMAIL.is_match(value),
            FormField::Phone => PHONE.is_match(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: &'static str,
}

/// Client-side checks run on submit. Empty result means valid.
pub fn validate(fields: &UserFields) -> Vec<FieldError> {
    FormField::ALL
        .into_iter()
        .filter(|field| !field.is_valid(field_value(fields, *field)))
        .map(|field| FieldError {
            field,
            message: field.feedback(),
        })
        .collect()
}

fn field_value(fields: &UserFields, field: FormField) -> &str {
    match field {
        FormField::Name => &fields.name,
        FormField::Email => &fields.email,
        FormField::Phone => &fields.phone,
        FormField::Address => &fields.address,
    }
}

fn field_value_mut(fields: &mut UserFields, field: FormField) -> &mut String {
    match field {
        FormField::Name => &mut fields.name,
        FormField::Email => &mut fields.email,
        FormField::Phone => &mut fields.phone,
        FormField::Address => &mut fields.address,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Add,
    Edit(UserId),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Editing,
    Invalid(Vec<FieldError>),
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub mode: FormMode,
    pub fields: UserFields,
    pub focus: FormField,
    pub status: FormStatus,
}

impl State for FormState {}

impl FormState {
    pub fn value(&self, field: FormField) -> &str {
        field_value(&self.fields, field)
    }

    pub fn error_for(&self, field: FormField) -> Option<&FieldError> {
        match &self.status {
            FormStatus::Invalid(errors) => errors.iter().find(|e| e.field == field),
            _ => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self.status, FormStatus::Invalid(_))
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Add => "Add User",
            FormMode::Edit(_) => "Edit User",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Add => "Submit",
            FormMode::Edit(_) => "Update",
        }
    }
}

#[derive(Debug, Clone)]
pub enum FormIntent {
    Open { mode: FormMode, fields: UserFields },
    FocusNext,
    FocusPrev,
    Input(char),
    Backspace,
    Submit,
    Reset,
}

impl Intent for FormIntent {}

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Open { mode, fields } => FormState {
                mode,
                fields,
                ..FormState::default()
            },
            FormIntent::FocusNext => {
                state.focus = state.focus.next();
                state
            }
            FormIntent::FocusPrev => {
                state.focus = state.focus.prev();
                state
            }
            FormIntent::Input(ch) => {
                field_value_mut(&mut state.fields, state.focus).push(ch);
                revalidate(state)
            }
            FormIntent::Backspace => {
                field_value_mut(&mut state.fields, state.focus).pop();
                revalidate(state)
            }
            FormIntent::Submit => {
                let errors = validate(&state.fields);
                if errors.is_empty() {
                    FormState {
                        mode: state.mode,
                        status: FormStatus::Submitted,
                        ..FormState::default()
                    }
                } else {
                    state.status = FormStatus::Invalid(errors);
                    state
                }
            }
            FormIntent::Reset => FormState {
                mode: state.mode,
                ..FormState::default()
            },
        }
    }
}

/// After a rejected submit, feedback follows the user's edits.
fn revalidate(mut state: FormState) -> FormState {
    if state.is_invalid() {
        let errors = validate(&state.fields);
        state.status = if errors.is_empty() {
            FormStatus::Editing
        } else {
            FormStatus::Invalid(errors)
        };
    }
    state
}

/// Runs a submit attempt. Returns the intent to dispatch when the form
/// passed validation, alongside the new form state.
pub fn submit(state: FormState) -> (FormState, Option<UserAction>) {
    let action = validate(&state.fields).is_empty().then(|| {
        let fields = state.fields.trimmed();
        match &state.mode {
            FormMode::Add => UserAction::CreateStart(fields),
            FormMode::Edit(id) => UserAction::UpdateStart {
                id: id.clone(),
                fields,
            },
        }
    });
    (FormReducer::reduce(state, FormIntent::Submit), action)
}
