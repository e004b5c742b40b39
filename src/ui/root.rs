use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use crate::app::{App, Demo};
use crate::panel::SYSTEM_COLORS;
use crate::ui::components;

pub fn render_root(f: &mut Frame, app: &App) {
    match app.demo {
        Demo::Colors => render_color_list(f, app),
        Demo::Search => render_search_root(f, app),
    }
}

/// Entry screen of the colors demo: one tinted row per panel, opening
/// the container seeded at the chosen row.
fn render_color_list(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Color rows
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    if let [header, list, footer] = &chunks[..] {
        components::render_view_header(f, *header, "Colors", None);
        render_color_rows(f, app, *list);
        components::render_footer_hints(f, *footer, "↑/↓ move · enter open · ctrl+c quit");
    }
}

fn render_color_rows(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = SYSTEM_COLORS
        .iter()
        .enumerate()
        .map(|(index, (name, color))| {
            let is_selected = index == app.root_selected;
            let prefix = if is_selected { "> " } else { "  " };
            let mut name_style = Style::default()
                .fg(Color::Rgb(255, 255, 255))
                .bg(*color)
                .add_modifier(Modifier::BOLD);
            if is_selected {
                name_style = name_style.add_modifier(Modifier::REVERSED);
            }

            ListItem::new(Line::from(vec![
                Span::styled(" ", Style::default()),
                Span::styled(prefix, Style::default().fg(Color::DarkGray)),
                Span::styled(format!(" {} ", name), name_style),
                Span::styled("  ›", Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    f.render_widget(List::new(items), area);
}

/// Entry screen of the search demo: a single action that opens the
/// container on the configured search domain.
fn render_search_root(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    if let [header, body, footer] = &chunks[..] {
        components::render_view_header(f, *header, "Search Domains", None);
        render_open_search_action(f, app, *body);
        components::render_footer_hints(f, *footer, "enter open search · ctrl+c quit");
    }
}

fn render_open_search_action(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(2),
            Constraint::Percentage(45),
        ])
        .split(area);

    let is_selected = app.root_selected == 0;
    let action_style = if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    };

    if let Some(action_area) = chunks.get(1) {
        f.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(" Open Search ", action_style)),
                Line::from(Span::styled(
                    "press enter",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .alignment(Alignment::Center),
            *action_area,
        );
    }
}
