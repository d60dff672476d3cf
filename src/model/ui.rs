//! UI state - presentation state separate from form data

use crate::model::form::FormField;

/// Which control on the home screen has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    FirstName,
    Surname,
    AddUser,
}

impl Focus {
    pub fn next(&self) -> Focus {
        match self {
            Focus::FirstName => Focus::Surname,
            Focus::Surname => Focus::AddUser,
            Focus::AddUser => Focus::FirstName,
        }
    }

    pub fn prev(&self) -> Focus {
        match self {
            Focus::FirstName => Focus::AddUser,
            Focus::Surname => Focus::FirstName,
            Focus::AddUser => Focus::Surname,
        }
    }

    /// The text field this focus edits, if any
    pub fn field(&self) -> Option<FormField> {
        match self {
            Focus::FirstName => Some(FormField::FirstName),
            Focus::Surname => Some(FormField::Surname),
            Focus::AddUser => None,
        }
    }
}

impl From<FormField> for Focus {
    fn from(field: FormField) -> Self {
        match field {
            FormField::FirstName => Focus::FirstName,
            FormField::Surname => Focus::Surname,
        }
    }
}
