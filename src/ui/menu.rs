use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
};

use crate::app::App;
use crate::ui::utils::centered_rect;

/// Renders the switcher menu overlay: one option per panel, the active
/// one checked, the cursor row highlighted.
pub fn render_switcher_menu(f: &mut Frame, app: &App) {
    let Some(container) = &app.container else {
        return;
    };
    let menu = container.menu();

    let area = centered_rect(40, 50, f.area());
    f.render_widget(Clear, area);

    let items: Vec<ListItem> = menu
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let is_cursor = index == app.menu_cursor;
            let prefix = if is_cursor { "> " } else { "  " };
            let check = if option.checked { "●" } else { "○" };
            let check_style = if option.checked {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let label_style = if is_cursor {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };

            ListItem::new(Line::from(vec![
                Span::styled(" ", Style::default()),
                Span::styled(prefix, Style::default().fg(Color::DarkGray)),
                Span::styled(check, check_style),
                Span::styled(" ", Style::default()),
                Span::styled(option.label.clone(), label_style),
            ]))
        })
        .collect();

    f.render_widget(
        List::new(items).block(
            Block::default()
                .title(Line::from(vec![
                    Span::raw(" "),
                    Span::styled(
                        menu.title.clone(),
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                ]))
                .title_alignment(Alignment::Left)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}
