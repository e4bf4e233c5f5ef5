//! Tier list tab view

use super::tier_color;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    for (tier, units) in app.catalog.by_tier() {
        let mut spans = vec![Span::styled(
            format!(" {:3} │ ", tier.label()),
            Style::default()
                .fg(tier_color(tier))
                .add_modifier(Modifier::BOLD),
        )];
        for (i, unit) in units.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(", ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(
                unit.name.clone(),
                Style::default().fg(Color::White),
            ));
            spans.push(Span::styled(
                format!(" ({})", unit.element.label()),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if lines.is_empty() {
        lines.push(Line::from("No units loaded"));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Tier List "))
        .wrap(Wrap { trim: false })
        .scroll((u16::try_from(app.tier_scroll).unwrap_or(u16::MAX), 0));

    f.render_widget(paragraph, area);
}
