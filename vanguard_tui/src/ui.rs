//! UI rendering

mod calculator_view;
mod help_view;
mod tier_view;
mod traits_view;
mod units_view;

use crate::app::{App, Tab};
use vanguard_core::{StatGrade, Tier};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.current_tab {
        Tab::Units => units_view::draw(f, app, chunks[1]),
        Tab::TierList => tier_view::draw(f, app, chunks[1]),
        Tab::Calculator => calculator_view::draw(f, app, chunks[1]),
        Tab::Traits => traits_view::draw(f, app, chunks[1]),
        Tab::Help => help_view::draw(f, chunks[1]),
    }

    draw_keybindings(f, app, chunks[2]);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let common_keys = vec![
        ("Tab", "Next tab"),
        ("q", "Quit"),
    ];

    let tab_keys: Vec<(&str, &str)> = match app.current_tab {
        Tab::Units => vec![
            ("↑/↓", "Select unit"),
            ("Enter", "Open in calculator"),
        ],
        Tab::TierList => vec![
            ("↑/↓", "Scroll"),
        ],
        Tab::Calculator => vec![
            ("↑/↓", "Select field"),
            ("←/→", "Adjust"),
            ("c", "Clear trait"),
            ("r", "Reset"),
        ],
        Tab::Traits => vec![
            ("↑/↓", "Select trait"),
            ("Enter", "Use in calculator"),
        ],
        Tab::Help => vec![],
    };

    let mut spans: Vec<Span> = Vec::new();

    // Add tab-specific keys first
    for (i, (key, desc)) in tab_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    // Add separator if we have tab-specific keys
    if !tab_keys.is_empty() {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    }

    // Add common keys
    for (i, (key, desc)) in common_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::Gray),
        ));
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == app.current_tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(t.name(), style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Anime Vanguards Hub "),
        )
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider("|");

    f.render_widget(tabs, area);
}

/// Section heading used by every view
pub fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("═══ {} ═══", title),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

/// Slider bar for a value's position within its range
pub fn slider(position: f64, width: usize) -> String {
    let filled = ((position.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn stat_line(name: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:16}", name),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

/// Composed value next to its base, highlighted when they differ.
/// `lower_is_better` flips the colouring for attack interval.
pub fn stat_line_with_base(
    name: &str,
    base: f64,
    composed: f64,
    decimals: usize,
    lower_is_better: bool,
) -> Line<'static> {
    if (base - composed).abs() < 1e-9 {
        return stat_line(name, format!("{:.*}", decimals, composed));
    }
    let improved = (composed > base) != lower_is_better;
    let color = if improved { Color::Green } else { Color::Red };
    Line::from(vec![
        Span::styled(
            format!("{:16}", name),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(format!("{:.*}", decimals, composed), Style::default().fg(color)),
        Span::styled(
            format!(" (base: {:.*})", decimals, base),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

pub fn grade_color(grade: StatGrade) -> Color {
    match grade {
        StatGrade::D => Color::DarkGray,
        StatGrade::C => Color::Gray,
        StatGrade::B => Color::Green,
        StatGrade::A => Color::Blue,
        StatGrade::S => Color::Magenta,
        StatGrade::Ss | StatGrade::Sss => Color::Yellow,
        StatGrade::O => Color::Red,
    }
}

pub fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::SPlus => Color::Red,
        Tier::S => Color::LightRed,
        Tier::A => Color::Yellow,
        Tier::B => Color::Green,
        Tier::C => Color::Cyan,
        Tier::D => Color::Gray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_bounds() {
        assert_eq!(slider(0.0, 4), "░░░░");
        assert_eq!(slider(1.0, 4), "████");
        assert_eq!(slider(0.5, 4), "██░░");
        assert_eq!(slider(7.0, 4), "████");
    }
}
