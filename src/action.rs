//! Action enum - All possible application actions
//!
//! Screens turn key and mouse events into Actions, and the App applies
//! them to update state.

use crate::model::form::FormUpdate;
use crate::model::route::Route;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick while no input arrives
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Form
    // ─────────────────────────────────────────────────────────────────────────
    /// Move focus to the next control
    FocusNext,
    /// Move focus to the previous control
    FocusPrev,
    /// Apply an edit to the form
    UpdateForm(FormUpdate),
    /// Activate "Add user"
    Submit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Push a route on the navigation stack
    Navigate(Route),
    /// Pop the active route
    NavigateBack,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::FocusNext => write!(f, "FocusNext"),
            Action::FocusPrev => write!(f, "FocusPrev"),
            Action::UpdateForm(FormUpdate::Set { field, .. }) => {
                write!(f, "UpdateForm({:?})", field)
            }
            Action::Submit => write!(f, "Submit"),
            Action::Navigate(route) => write!(f, "Navigate({})", route.name()),
            Action::NavigateBack => write!(f, "NavigateBack"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::form::{FormField, NavigationParams};

    #[test]
    fn test_display_hides_field_text() {
        let action = Action::UpdateForm(FormUpdate::Set {
            field: FormField::Surname,
            text: "Lovelace".to_string(),
        });
        assert_eq!(action.to_string(), "UpdateForm(Surname)");
    }

    #[test]
    fn test_display_navigate_uses_route_name() {
        let action = Action::Navigate(Route::ViewDetails(NavigationParams::new("Ada", "L")));
        assert_eq!(action.to_string(), "Navigate(ViewDetails)");
    }
}
