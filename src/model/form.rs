//! Form state - the values typed into the home screen
//!
//! `FormState` is owned by the home screen and only changes through
//! [`FormState::update`]. `NavigationParams` is the frozen copy handed to the
//! details screen when the user submits.

/// The two editable fields on the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FirstName,
    Surname,
}

impl FormField {
    /// Label shown to the left of the input box
    pub fn label(&self) -> &str {
        match self {
            FormField::FirstName => "Enter Name:",
            FormField::Surname => "Enter Surname:",
        }
    }

    /// Placeholder shown while the field is empty
    pub fn placeholder(&self) -> &str {
        match self {
            FormField::FirstName => "First Name",
            FormField::Surname => "Surname",
        }
    }
}

/// An edit to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormUpdate {
    /// Replace a field with the full current text of its input
    Set { field: FormField, text: String },
}

/// In-memory record of what the user has typed so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub first_name: String,
    pub surname: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::Surname => &self.surname,
        }
    }

    /// Apply an edit. Returns whether the state actually changed.
    pub fn update(&mut self, update: FormUpdate) -> bool {
        match update {
            FormUpdate::Set { field, text } => {
                let slot = match field {
                    FormField::FirstName => &mut self.first_name,
                    FormField::Surname => &mut self.surname,
                };
                if *slot == text {
                    return false;
                }
                *slot = text;
                true
            }
        }
    }
}

/// Parameters carried by the `ViewDetails` route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationParams {
    pub name: String,
    pub surname: String,
}

impl NavigationParams {
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
        }
    }
}

impl From<&FormState> for NavigationParams {
    fn from(form: &FormState) -> Self {
        Self {
            name: form.first_name.clone(),
            surname: form.surname.clone(),
        }
    }
}
