use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::Panel;

const TEAL: Color = Color::Rgb(48, 176, 199);

/// The jobs search screen: two mock search fields above a numbered
/// result list.
struct JobSearchPanel;

impl Panel for JobSearchPanel {
    fn title(&self) -> &str {
        "Search Jobs"
    }

    fn accent(&self) -> Color {
        TEAL
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        if let [job_field, city_field, results] = &chunks[..] {
            render_search_field(frame, *job_field, "Look for a job");
            render_search_field(frame, *city_field, "Look for a city");
            render_job_results(frame, *results);
        }
    }
}

fn render_search_field(frame: &mut Frame, area: Rect, placeholder: &str) {
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                placeholder,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}

fn render_job_results(frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = (0..100)
        .map(|job_number| {
            ListItem::new(Line::from(vec![
                Span::styled(" ", Style::default()),
                Span::styled(
                    format!("{}", job_number),
                    Style::default().fg(Color::Rgb(255, 255, 255)).bg(TEAL),
                ),
            ]))
        })
        .collect();

    frame.render_widget(
        List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}

/// A colored placeholder screen for the search domains that have no
/// dedicated layout.
struct PlaceholderSearchPanel {
    name: String,
    color: Color,
}

impl PlaceholderSearchPanel {
    fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

impl Panel for PlaceholderSearchPanel {
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
                Constraint::Length(2),
                Constraint::Percentage(45),
            ])
            .split(area);

        if let Some(label_area) = chunks.get(1) {
            frame.render_widget(
                Paragraph::new(vec![
                    Line::from(Span::styled(
                        self.name.clone(),
                        Style::default()
                            .fg(Color::Rgb(255, 255, 255))
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        "coming soon",
                        Style::default().fg(Color::Rgb(255, 255, 255)),
                    )),
                ])
                .alignment(Alignment::Center),
                *label_area,
            );
        }
    }
}

/// Builds the five search-domain panels in menu order.
pub fn search_panels() -> Vec<Box<dyn Panel>> {
    vec![
        Box::new(JobSearchPanel),
        Box::new(PlaceholderSearchPanel::new(
            "Search Members",
            Color::Rgb(255, 59, 48),
        )),
        Box::new(PlaceholderSearchPanel::new(
            "Search Companies",
            Color::Rgb(0, 199, 190),
        )),
        Box::new(PlaceholderSearchPanel::new(
            "Search News",
            Color::Rgb(255, 204, 0),
        )),
        Box::new(PlaceholderSearchPanel::new("Search Messages", TEAL)),
    ]
}
