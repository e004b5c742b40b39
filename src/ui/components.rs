use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

/// Renders the standard bordered header line: app name, section, and an
/// optional detail (the container title)
pub fn render_view_header(frame: &mut Frame, area: Rect, section: &str, detail: Option<&str>) {
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            "Switchdeck",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ", Style::default().fg(Color::DarkGray)),
        Span::styled(section.to_string(), Style::default().fg(Color::Cyan)),
    ];
    if let Some(detail) = detail {
        let used: usize = spans.iter().map(|span| span.content.width()).sum();
        let available = (area.width as usize).saturating_sub(used + 5);
        spans.push(Span::styled("  —  ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            truncate_to_width(detail, available),
            Style::default().fg(Color::White),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .alignment(Alignment::Left),
        area,
    );
}

/// Renders the bordered footer with dimmed key hints
pub fn render_footer_hints(frame: &mut Frame, area: Rect, hints: &str) {
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled(hints.to_string(), Style::default().fg(Color::DarkGray)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(Alignment::Left),
        area,
    );
}

/// Truncates a label to a display width, appending an ellipsis when cut
fn truncate_to_width(label: &str, max_width: usize) -> String {
    if label.width() <= max_width {
        return label.to_string();
    }
    let mut truncated = String::new();
    let budget = max_width.saturating_sub(1);
    for character in label.chars() {
        let next_width = truncated.width() + character.to_string().width();
        if next_width > budget {
            break;
        }
        truncated.push(character);
    }
    truncated.push('…');
    truncated
}
