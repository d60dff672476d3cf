//! Rendering helpers for component tests

use ratatui::{backend::TestBackend, buffer::Buffer, Frame, Terminal};

pub fn buffer_to_string(buf: &Buffer) -> String {
    let mut s = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            s.push_str(buf[(x, y)].symbol());
        }
        s.push('\n');
    }
    s
}

/// Draw once into an in-memory terminal and return the screen as text
pub fn render_to_string<F>(width: u16, height: u16, f: F) -> String
where
    F: FnOnce(&mut Frame),
{
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(f).unwrap();
    buffer_to_string(terminal.backend().buffer())
}
