//! UI Components
//!
//! Screens and overlays. Each one owns its presentation state and talks to
//! the App through Actions.

pub mod details;
pub mod help_dialog;
pub mod home;
pub mod layout;
pub mod quit_dialog;
pub mod status_bar;
pub mod text_input;

#[cfg(test)]
pub mod test_util;

pub use details::DetailsScreen;
pub use help_dialog::HelpDialog;
pub use home::HomeComponent;
pub use layout::split_status_bar;
pub use quit_dialog::QuitDialog;
pub use status_bar::draw_status_bar;
