//! Single-line text input
//!
//! Holds the edit buffer and cursor for one form field. Every edit returns
//! the full resulting text so the caller can replace the form field with it.

use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: String,
    /// Cursor position in chars, `0..=len`
    cursor: usize,
}

impl TextInput {
    /// Start with `value`, cursor at the end
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    #[cfg(test)]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    /// Insert at the cursor
    pub fn insert(&mut self, c: char) -> &str {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
        &self.value
    }

    /// Remove the char before the cursor. `None` when nothing changed.
    pub fn backspace(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
        Some(&self.value)
    }

    /// Remove the char under the cursor. `None` when nothing changed.
    pub fn delete(&mut self) -> Option<&str> {
        if self.cursor >= self.len() {
            return None;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
        Some(&self.value)
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    /// Text that fits in `width` columns with the cursor kept visible,
    /// plus the cursor's column within it
    fn visible(&self, width: u16) -> (String, u16) {
        let width = width as usize;
        if width == 0 {
            return (String::new(), 0);
        }

        let chars: Vec<char> = self.value.chars().collect();
        let col = |range: &[char]| -> usize { range.iter().filter_map(|c| c.width()).sum() };

        // Drop chars from the left until the cursor fits
        let mut start = 0;
        while start < self.cursor && col(&chars[start..self.cursor]) >= width {
            start += 1;
        }

        let mut shown = String::new();
        let mut used = 0;
        for c in &chars[start..] {
            let w = c.width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            shown.push(*c);
        }

        (shown, col(&chars[start..self.cursor]) as u16)
    }

    /// Render as an underlined box. Places the terminal cursor when focused.
    pub fn render(&self, frame: &mut Frame, area: Rect, placeholder: &str, focused: bool) {
        let underline = if focused { Color::Magenta } else { Color::White };
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(underline));
        let inner = block.inner(area);

        let (shown, cursor_x) = self.visible(inner.width);
        let line = if self.value.is_empty() {
            Line::from(Span::styled(
                placeholder.to_string(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))
        } else {
            Line::from(Span::raw(shown))
        };

        frame.render_widget(Paragraph::new(line).block(block), area);

        if focused && inner.width > 0 && inner.height > 0 {
            frame.set_cursor_position(Position::new(
                inner.x + cursor_x.min(inner.width - 1),
                inner.y,
            ));
        }
    }
}
