//! Stat calculator tab view

use super::{grade_color, section, slider, stat_line, stat_line_with_base};
use crate::app::{App, CalcField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use vanguard_core::compose::Contribution;
use vanguard_core::{ComposedStats, StatKind};

const SLIDER_WIDTH: usize = 20;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_inputs(f, app, chunks[0]);
    draw_results(f, app, chunks[1]);
}

fn field_style(app: &App, field: CalcField) -> Style {
    if app.focused_field() == field {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn draw_inputs(f: &mut Frame, app: &App, area: Rect) {
    let title = app
        .unit()
        .map(|u| format!(" {} ", u.name))
        .unwrap_or_else(|| " Calculator ".to_string());

    let level_text = match app.current_level() {
        Some(level) => format!("{} (¥{})", level.level, level.yen_cost),
        None => "-".to_string(),
    };

    let mut lines = vec![
        section("Upgrade"),
        Line::from(vec![
            Span::styled(format!("{:16}", "Level"), field_style(app, CalcField::Level)),
            Span::raw(format!(" ◀ {} ▶", level_text)),
        ]),
        Line::from(""),
        section("Stat Potential"),
    ];

    for &kind in StatKind::all() {
        let grade = app.selection.grade(kind);
        let range = app.selection.range(&app.grades, kind);
        let pct = app.selection.percentage(kind);

        lines.push(Line::from(vec![
            Span::styled(
                format!("{:16}", format!("{} grade", kind.label())),
                field_style(app, CalcField::Grade(kind)),
            ),
            Span::raw(" ◀ "),
            Span::styled(
                grade.symbol().to_string(),
                Style::default().fg(grade_color(grade)).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ▶"),
            Span::styled(
                format!("  [{:+.1}% … {:+.1}%]", range.min, range.max),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:16}", format!("{} roll", kind.label())),
                field_style(app, CalcField::Percentage(kind)),
            ),
            Span::raw(" "),
            Span::styled(
                slider(range.position(pct), SLIDER_WIDTH),
                Style::default().fg(grade_color(grade)),
            ),
            Span::raw(format!(" {:+.2}%", pct)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(section("Trait"));
    let trait_text = app.trait_key().unwrap_or("None").to_string();
    lines.push(Line::from(vec![
        Span::styled(format!("{:16}", "Trait"), field_style(app, CalcField::Trait)),
        Span::raw(format!(" ◀ {} ▶", trait_text)),
    ]));
    if let Some(bonus) = app.trait_bonus() {
        lines.push(Line::from(Span::styled(
            format!("  {}", bonus.summary()),
            Style::default().fg(Color::Green),
        )));
    }

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(paragraph, area);
}

fn draw_results(f: &mut Frame, app: &App, area: Rect) {
    let (Some(base), Some(composed)) = (app.current_level(), app.composed()) else {
        let empty = Paragraph::new("Select a unit with upgrade data")
            .block(Block::default().borders(Borders::ALL).title(" Result "));
        f.render_widget(empty, area);
        return;
    };
    let base_stats = ComposedStats::from(base);

    let mut lines = vec![
        section("Final Stats"),
        stat_line_with_base("Damage", base_stats.atk_damage.round(), composed.atk_damage.round(), 0, false),
        stat_line_with_base("SPA", base_stats.spa, composed.spa, 1, true),
        stat_line_with_base("Range", base_stats.range, composed.range, 1, false),
        stat_line_with_base("Crit Chance", base_stats.crit_chance, composed.crit_chance, 1, false),
        stat_line_with_base("Crit Damage", base_stats.crit_damage, composed.crit_damage, 1, false),
        stat_line("DPS", format!("{:.1}", composed.dps())),
        Line::from(""),
        section("Breakdown"),
    ];

    for contribution in app.contributions() {
        lines.extend(contribution_lines(&contribution));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Result "));
    f.render_widget(paragraph, area);
}

fn contribution_lines(contribution: &Contribution) -> Vec<Line<'static>> {
    let delta = &contribution.delta;
    let mut parts = Vec::new();
    if delta.damage_increased != 0.0 {
        parts.push(format!("{:+.2}% DMG", delta.damage_increased));
    }
    if delta.spa_reduced != 0.0 {
        parts.push(format!("-{:.2}% SPA", delta.spa_reduced));
    }
    if delta.range_increased != 0.0 {
        parts.push(format!("{:+.2}% Range", delta.range_increased));
    }
    if delta.crit_chance_flat != 0.0 {
        parts.push(format!("{:+.1} Crit", delta.crit_chance_flat));
    }
    if delta.crit_damage_flat != 0.0 {
        parts.push(format!("{:+.1} Crit DMG", delta.crit_damage_flat));
    }
    if parts.is_empty() {
        parts.push("no change".to_string());
    }

    vec![Line::from(vec![
        Span::styled(
            format!("  {:14}", contribution.source),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(parts.join(", ")),
    ])]
}
