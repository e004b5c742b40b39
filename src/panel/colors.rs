use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::Panel;

/// The switchable color palette (iOS system color values). Order is
/// the menu order.
pub const SYSTEM_COLORS: [(&str, Color); 7] = [
    ("Red", Color::Rgb(255, 59, 48)),
    ("Orange", Color::Rgb(255, 149, 0)),
    ("Yellow", Color::Rgb(255, 204, 0)),
    ("Green", Color::Rgb(52, 199, 89)),
    ("Blue", Color::Rgb(0, 122, 255)),
    ("Indigo", Color::Rgb(88, 86, 214)),
    ("Purple", Color::Rgb(175, 82, 222)),
];

/// A full-bleed colored panel titled after its color.
pub struct ColorPanel {
    name: String,
    color: Color,
}

impl ColorPanel {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

impl Panel for ColorPanel {
    fn title(&self) -> &str {
        &self.name
    }

    fn accent(&self) -> Color {
        self.color
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Block::default().style(Style::default().bg(self.color)), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(45),
                Constraint::Length(1),
                Constraint::Percentage(45),
            ])
            .split(area);

        if let Some(label_area) = chunks.get(1) {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    self.name.clone(),
                    Style::default()
                        .fg(Color::Rgb(255, 255, 255))
                        .add_modifier(Modifier::BOLD),
                )))
                .alignment(Alignment::Center),
                *label_area,
            );
        }
    }
}

/// Builds the seven color panels in menu order.
pub fn color_panels() -> Vec<Box<dyn Panel>> {
    SYSTEM_COLORS
        .iter()
        .map(|(name, color)| Box::new(ColorPanel::new(*name, *color)) as Box<dyn Panel>)
        .collect()
}
