//! Root application component
//!
//! The App struct implements the Component trait. It owns the navigation
//! stack and the modal stack, sends input to whichever screen is active,
//! and draws that screen with the status bar and any open modal.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_status_bar, split_status_bar, DetailsScreen, HelpDialog, HomeComponent, QuitDialog,
};
use crate::model::modal::{Modal, ModalStack};
use crate::model::{FormState, NavError, NavStack, Route};
use anyhow::Result;
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{layout::Rect, Frame};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between screens
pub struct App {
    /// Navigation stack, `Home` at the root
    pub nav: NavStack,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Last rejected navigation, shown in the status bar
    pub nav_error: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub home: HomeComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create a new App instance on the home screen with an empty form
    pub fn new() -> App {
        App {
            nav: NavStack::new(),
            modals: ModalStack::new(),
            should_quit: false,
            nav_error: None,
            home: HomeComponent::new(),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
        }
    }

    /// Create an App with a pre-filled form, opened at `entry`
    pub fn with_entry(form: FormState, entry: Route) -> Result<App, NavError> {
        let mut app = App::new();
        app.home = HomeComponent::with_form(form);
        if entry != Route::Home {
            app.nav.navigate(entry)?;
        }
        Ok(app)
    }

    fn navigate(&mut self, route: Route) {
        match self.nav.navigate(route) {
            Ok(()) => self.nav_error = None,
            Err(e) => {
                tracing::warn!(error = %e, "navigation rejected");
                self.nav_error = Some(e.to_string());
            }
        }
    }

    fn handle_modal_key_event(&mut self, modal: Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area),
            Modal::Help => self.help_dialog.draw(frame, area),
        }
    }
}

/// The details screen has no state; its only keys go back
fn details_key_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => Some(Action::NavigateBack),
        _ => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.home.init()?;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        if let Some(modal) = self.modals.top().copied() {
            return self.handle_modal_key_event(modal, key);
        }

        if key.code == KeyCode::F(1) {
            return Ok(Some(Action::OpenHelp));
        }

        match self.nav.current() {
            Route::Home => self.home.handle_key_event(key),
            Route::ViewDetails(_) => Ok(details_key_action(key)),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if !self.modals.is_empty() {
            return Ok(None);
        }

        match self.nav.current() {
            Route::Home => self.home.handle_mouse_event(mouse),
            Route::ViewDetails(_) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Right) => Ok(Some(Action::NavigateBack)),
                _ => Ok(None),
            },
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick | Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Form (delegate to HomeComponent while it is active)
            // ─────────────────────────────────────────────────────────────────
            Action::FocusNext | Action::FocusPrev | Action::UpdateForm(_) | Action::Submit => {
                if *self.nav.current() == Route::Home {
                    return self.home.update(action);
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::Navigate(route) => self.navigate(route),
            Action::NavigateBack => {
                self.nav.back();
                self.nav_error = None;
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let (body, status) = split_status_bar(area);

        match self.nav.current() {
            Route::Home => self.home.draw(frame, body)?,
            Route::ViewDetails(params) => DetailsScreen::new(params).draw(frame, body),
        }

        draw_status_bar(
            frame,
            status,
            self.nav.current().name(),
            self.nav_error.as_deref(),
        );

        if let Some(modal) = self.modals.top().copied() {
            self.draw_modal(frame, area, modal)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_util::render_to_string;
    use crate::model::{NavigationParams, RouteName};

    /// Run one key through the app the way the main loop does
    fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        let mut action = app.handle_key_event(KeyEvent::new(code, modifiers)).unwrap();
        while let Some(a) = action {
            action = app.update(a).unwrap();
        }
    }

    fn key(app: &mut App, code: KeyCode) {
        press(app, code, KeyModifiers::NONE);
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            key(app, KeyCode::Char(c));
        }
    }

    /// Fill both fields and press "Add user"
    fn fill_and_submit(app: &mut App, name: &str, surname: &str) {
        type_text(app, name);
        key(app, KeyCode::Tab);
        type_text(app, surname);
        key(app, KeyCode::Tab);
        key(app, KeyCode::Enter);
    }

    fn screen(app: &mut App) -> String {
        render_to_string(80, 30, |frame| {
            app.draw(frame, frame.area()).unwrap();
        })
    }

    #[test]
    fn test_starts_on_home() {
        let mut app = App::new();
        app.init().unwrap();
        assert_eq!(app.nav.current(), &Route::Home);
        assert!(screen(&mut app).contains("Enter Name:"));
    }

    #[test]
    fn test_submit_shows_details() {
        let mut app = App::new();
        fill_and_submit(&mut app, "Ada", "Lovelace");

        assert_eq!(
            app.nav.current(),
            &Route::ViewDetails(NavigationParams::new("Ada", "Lovelace"))
        );
        assert!(screen(&mut app).contains("Name: Ada Surname: Lovelace"));
    }

    #[test]
    fn test_submit_empty_values() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);

        match app.nav.current() {
            Route::ViewDetails(params) => {
                assert_eq!(crate::components::details::details_line(params), "Name:  Surname: ");
            }
            other => panic!("expected ViewDetails, got {:?}", other),
        }
    }

    #[test]
    fn test_submit_whitespace_and_unicode() {
        let mut app = App::new();
        fill_and_submit(&mut app, " Zoë  ", "岩田");

        assert_eq!(
            app.nav.current(),
            &Route::ViewDetails(NavigationParams::new(" Zoë  ", "岩田"))
        );
    }

    #[test]
    fn test_keystrokes_alone_never_navigate() {
        let mut app = App::new();
        type_text(&mut app, "Ada");
        key(&mut app, KeyCode::Tab);
        type_text(&mut app, "Lovelace");
        key(&mut app, KeyCode::Backspace);
        key(&mut app, KeyCode::BackTab);

        assert_eq!(app.nav.current(), &Route::Home);
        assert_eq!(app.home.form().surname, "Lovelac");
    }

    #[test]
    fn test_back_returns_home_with_form_intact() {
        let mut app = App::new();
        fill_and_submit(&mut app, "Ada", "Lovelace");

        key(&mut app, KeyCode::Esc);
        assert_eq!(app.nav.current(), &Route::Home);
        assert_eq!(app.nav.depth(), 1);
        assert_eq!(app.home.form().first_name, "Ada");
    }

    #[test]
    fn test_typing_on_details_is_ignored() {
        let mut app = App::new();
        fill_and_submit(&mut app, "Ada", "Lovelace");
        type_text(&mut app, "xyz");

        assert_eq!(app.home.form().first_name, "Ada");
        assert_eq!(app.nav.depth(), 2);
    }

    #[test]
    fn test_form_actions_ignored_off_home() {
        let mut app = App::new();
        fill_and_submit(&mut app, "Ada", "Lovelace");

        assert_eq!(app.update(Action::Submit).unwrap(), None);
        assert_eq!(app.nav.depth(), 2);
    }

    #[test]
    fn test_undefined_transition_reported() {
        let mut app = App::new();
        fill_and_submit(&mut app, "Ada", "Lovelace");

        app.update(Action::Navigate(Route::ViewDetails(NavigationParams::new("a", "b"))))
            .unwrap();

        assert_eq!(
            app.nav.current(),
            &Route::ViewDetails(NavigationParams::new("Ada", "Lovelace"))
        );
        let message = app.nav_error.clone().unwrap();
        assert!(message.contains("ViewDetails"));
        assert!(screen(&mut app).contains("no transition defined"));
    }

    #[test]
    fn test_with_entry_opens_details() {
        let params = NavigationParams::new("Grace", "Hopper");
        let route = Route::resolve(RouteName::ViewDetails, Some(params.clone())).unwrap();
        let app = App::with_entry(FormState::default(), route).unwrap();

        assert_eq!(app.nav.current(), &Route::ViewDetails(params));
        assert_eq!(app.nav.depth(), 2);
    }

    #[test]
    fn test_with_entry_prefills_home() {
        let form = FormState {
            first_name: "Grace".to_string(),
            surname: String::new(),
        };
        let app = App::with_entry(form.clone(), Route::Home).unwrap();
        assert_eq!(app.home.form(), &form);
        assert_eq!(app.nav.current(), &Route::Home);
    }

    #[test]
    fn test_quit_dialog_flow() {
        let mut app = App::new();
        key(&mut app, KeyCode::Esc);
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));

        // Typing goes to the dialog, not the form
        key(&mut app, KeyCode::Char('n'));
        assert!(app.modals.is_empty());
        assert_eq!(app.home.form().first_name, "");

        key(&mut app, KeyCode::Esc);
        key(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_toggle() {
        let mut app = App::new();
        key(&mut app, KeyCode::F(1));
        assert_eq!(app.modals.top(), Some(&Modal::Help));
        assert!(screen(&mut app).contains("Keyboard Shortcuts"));

        key(&mut app, KeyCode::F(1));
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_ctrl_c_quits_from_anywhere() {
        let mut app = App::new();
        key(&mut app, KeyCode::F(1));
        press(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn test_right_click_on_details_goes_back() {
        let mut app = App::new();
        fill_and_submit(&mut app, "Ada", "Lovelace");

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        let action = app.handle_mouse_event(click).unwrap();
        assert_eq!(action, Some(Action::NavigateBack));
        app.update(Action::NavigateBack).unwrap();
        assert_eq!(app.nav.current(), &Route::Home);
    }
}
