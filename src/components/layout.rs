//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the form column on the home screen
const FORM_WIDTH: u16 = 60;
/// Width of the label column in a form row
const LABEL_WIDTH: u16 = 16;

/// Home screen layout areas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeLayout {
    pub banner: Rect,
    pub title: Rect,
    pub first_name_label: Rect,
    pub first_name: Rect,
    pub surname_label: Rect,
    pub surname: Rect,
    pub button: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Split off the one-line status bar at the bottom
pub fn split_status_bar(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Calculate home screen layout
pub fn calculate_home_layout(area: Rect, banner_height: u16) -> HomeLayout {
    let column = centered_popup(area, FORM_WIDTH, area.height);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Top padding
            Constraint::Length(banner_height), // Banner
            Constraint::Length(1),             // Gap
            Constraint::Length(1),             // Title
            Constraint::Length(1),             // Gap
            Constraint::Length(2),             // First name
            Constraint::Length(1),             // Gap
            Constraint::Length(2),             // Surname
            Constraint::Length(1),             // Gap
            Constraint::Length(3),             // Button
            Constraint::Min(0),                // Bottom padding
        ])
        .split(column);

    let (first_name_label, first_name) = split_form_row(rows[5]);
    let (surname_label, surname) = split_form_row(rows[7]);

    HomeLayout {
        banner: rows[1],
        title: rows[3],
        first_name_label,
        first_name,
        surname_label,
        surname,
        button: centered_popup(rows[9], 14, 3),
    }
}

fn split_form_row(row: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(LABEL_WIDTH), Constraint::Min(1)])
        .split(row);
    (chunks[0], chunks[1])
}
