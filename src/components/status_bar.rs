//! Bottom status bar: active route, key hints, and the last rejected
//! navigation if any

use crate::model::route::RouteName;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn draw_status_bar(frame: &mut Frame, area: Rect, route: RouteName, error: Option<&str>) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", route.title()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ];

    match error {
        Some(message) => spans.push(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        )),
        None => {
            let hints = match route {
                RouteName::Home => "Tab next field  Ctrl+s add user  F1 help  Esc quit",
                RouteName::ViewDetails => "Esc back  F1 help  Ctrl+c quit",
            };
            spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_util::render_to_string;

    #[test]
    fn test_status_bar_shows_route_and_hints() {
        let output = render_to_string(80, 1, |frame| {
            draw_status_bar(frame, frame.area(), RouteName::ViewDetails, None);
        });
        assert!(output.contains("ViewDetails"));
        assert!(output.contains("Esc back"));
    }

    #[test]
    fn test_home_hint_names_submit_key() {
        let output = render_to_string(80, 1, |frame| {
            draw_status_bar(frame, frame.area(), RouteName::Home, None);
        });
        assert!(output.contains("Ctrl+s add user"));
        assert!(!output.contains("Enter/Ctrl+s"));
    }

    #[test]
    fn test_status_bar_prefers_error() {
        let output = render_to_string(80, 1, |frame| {
            draw_status_bar(frame, frame.area(), RouteName::Home, Some("nope"));
        });
        assert!(output.contains("nope"));
        assert!(!output.contains("F1 help"));
    }
}
