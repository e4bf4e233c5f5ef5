//! Help tab view

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, area: Rect) {
    let lines = vec![
        heading("═══ Navigation ═══"),
        key_line("1-5", "Jump to tab (Units/Tier List/Calc/Traits/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑/k  ↓/j", "Navigate lists / scroll"),
        key_line("q / Ctrl+C", "Quit"),
        key_line("?", "Show this help"),
        Line::from(""),
        heading("═══ Units & Traits ═══"),
        key_line("Enter (Units)", "Open the selected unit in the calculator"),
        key_line("Enter (Traits)", "Apply the highlighted trait in the calculator"),
        Line::from(""),
        heading("═══ Calculator ═══"),
        key_line("↑/↓", "Move between fields"),
        key_line("←/→", "Adjust level, grade, roll or trait"),
        key_line("c", "Clear the active trait"),
        key_line("r", "Reset to the unit's listed grades"),
        Line::from(""),
        heading("═══ Mechanics ═══"),
        Line::from(""),
        Line::from(Span::styled("Stat grades:", Style::default().fg(Color::Yellow))),
        Line::from("  Each grade (D..O) covers a percentage window per stat."),
        Line::from("  Changing grade resets the roll to the window minimum."),
        Line::from(""),
        Line::from(Span::styled("Composition:", Style::default().fg(Color::Yellow))),
        Line::from("  Damage = Base × (1 + (roll% + trait%) / 100)"),
        Line::from("  SPA    = Base × (1 - (roll% + trait%) / 100)"),
        Line::from("  Range  = Base × (1 + (roll% + trait%) / 100)"),
        Line::from("  Crit chance and crit damage add trait values flat"),
        Line::from(""),
        Line::from(Span::styled("Legacy stats:", Style::default().fg(Color::Yellow))),
        Line::from("  ≥2000 S, ≥1500 A, ≥1000 B, ≥500 C, otherwise D"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help & Mechanics "))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:20}", key), Style::default().fg(Color::Yellow)),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
