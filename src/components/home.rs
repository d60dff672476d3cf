//! Home screen - the input form
//!
//! Owns the `FormState` and one `TextInput` per field. Each edit keystroke
//! replaces the matching form field with the input's full text. "Add user"
//! snapshots the form into `NavigationParams` and requests `ViewDetails`.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{calculate_home_layout, HomeLayout};
use crate::components::text_input::TextInput;
use crate::model::form::{FormField, FormState, FormUpdate, NavigationParams};
use crate::model::route::Route;
use crate::model::ui::Focus;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Title shown under the banner
pub const WELCOME_TEXT: &str = "My first terminal app";

/// Label on the submit control
pub const ADD_USER_LABEL: &str = "Add user";

/// Static banner drawn above the form
const BANNER: [&str; 5] = [
    "   .-----.   ",
    "  /  o o  \\  ",
    " |    ^    | ",
    "  \\ '---' /  ",
    "   '-----'   ",
];

/// Home screen component
pub struct HomeComponent {
    form: FormState,
    first_name: TextInput,
    surname: TextInput,
    pub focus: Focus,
    /// Areas from the last draw, for mouse hit testing
    last_layout: Option<HomeLayout>,
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeComponent {
    pub fn new() -> Self {
        Self::with_form(FormState::new())
    }

    /// Start with the fields already filled in
    pub fn with_form(form: FormState) -> Self {
        Self {
            first_name: TextInput::with_value(form.first_name.clone()),
            surname: TextInput::with_value(form.surname.clone()),
            form,
            focus: Focus::default(),
            last_layout: None,
        }
    }

    #[cfg(test)]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    fn input_mut(&mut self, field: FormField) -> &mut TextInput {
        match field {
            FormField::FirstName => &mut self.first_name,
            FormField::Surname => &mut self.surname,
        }
    }

    fn input(&self, field: FormField) -> &TextInput {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::Surname => &self.surname,
        }
    }

    /// Edit keys for a focused text field
    fn handle_field_key(&mut self, field: FormField, key: KeyEvent) -> Option<Action> {
        let input = self.input_mut(field);
        let text = match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(input.insert(c).to_string())
            }
            KeyCode::Backspace => input.backspace().map(str::to_string),
            KeyCode::Delete => input.delete().map(str::to_string),
            KeyCode::Left => {
                input.move_left();
                None
            }
            KeyCode::Right => {
                input.move_right();
                None
            }
            KeyCode::Home => {
                input.move_home();
                None
            }
            KeyCode::End => {
                input.move_end();
                None
            }
            KeyCode::Enter => return Some(Action::FocusNext),
            _ => None,
        };

        text.map(|text| Action::UpdateForm(FormUpdate::Set { field, text }))
    }

    /// Snapshot the form and request the details screen
    fn submit(&self) -> Action {
        let params = NavigationParams::from(&self.form);
        tracing::info!("Name: {} Surname: {}", params.name, params.surname);
        Action::Navigate(Route::ViewDetails(params))
    }

    fn draw_banner(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = BANNER
            .iter()
            .map(|row| Line::from(Span::styled(*row, Style::default().fg(Color::Magenta))))
            .collect();
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn draw_field(&self, frame: &mut Frame, label_area: Rect, input_area: Rect, field: FormField) {
        let focused = self.focus.field() == Some(field);
        let label_style = if focused {
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(field.label(), label_style))),
            label_area,
        );
        self.input(field)
            .render(frame, input_area, field.placeholder(), focused);
    }

    fn draw_button(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::AddUser;
        let (border, text) = if focused {
            (
                Style::default().fg(Color::Magenta),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                Style::default().fg(Color::Blue),
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            )
        };

        let button = Paragraph::new(Line::from(Span::styled(ADD_USER_LABEL, text)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(border),
            );
        frame.render_widget(button, area);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for HomeComponent {
    fn init(&mut self) -> Result<()> {
        tracing::info!("App starting up");
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Submit)
            }
            KeyCode::Tab | KeyCode::Down => Some(Action::FocusNext),
            KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrev),
            KeyCode::Esc => Some(Action::OpenQuitDialog),
            _ => match self.focus.field() {
                Some(field) => self.handle_field_key(field, key),
                None => match key.code {
                    KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Submit),
                    _ => None,
                },
            },
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        let Some(layout) = self.last_layout else {
            return Ok(None);
        };

        let at = Position::new(mouse.column, mouse.row);
        if layout.button.contains(at) {
            self.focus = Focus::AddUser;
            return Ok(Some(Action::Submit));
        }
        if layout.first_name.contains(at) || layout.first_name_label.contains(at) {
            self.focus = Focus::FirstName;
        } else if layout.surname.contains(at) || layout.surname_label.contains(at) {
            self.focus = Focus::Surname;
        }
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),
            Action::UpdateForm(update) => {
                self.form.update(update);
            }
            Action::Submit => return Ok(Some(self.submit())),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_home_layout(area, BANNER.len() as u16);

        self.draw_banner(frame, layout.banner);

        let title = Paragraph::new(Line::from(Span::styled(
            WELCOME_TEXT,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, layout.title);

        self.draw_field(
            frame,
            layout.first_name_label,
            layout.first_name,
            FormField::FirstName,
        );
        self.draw_field(frame, layout.surname_label, layout.surname, FormField::Surname);
        self.draw_button(frame, layout.button);

        self.last_layout = Some(layout);
        Ok(())
    }
}
