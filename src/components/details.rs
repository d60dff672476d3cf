//! Details screen
//!
//! Shows the submitted name and surname. Pure function of its parameters.

use crate::model::form::NavigationParams;
use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// The line the details screen shows for `params`
pub fn details_line(params: &NavigationParams) -> String {
    format!("Name: {} Surname: {}", params.name, params.surname)
}

/// Stateless view over one route's parameters
pub struct DetailsScreen<'a> {
    params: &'a NavigationParams,
}

impl<'a> DetailsScreen<'a> {
    pub fn new(params: &'a NavigationParams) -> Self {
        Self { params }
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1.min(area.height));
        let text = Paragraph::new(Line::from(details_line(self.params))).alignment(Alignment::Center);
        frame.render_widget(text, row);
    }
}
