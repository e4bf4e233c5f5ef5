//! Units tab view

use super::{grade_color, section, stat_line, tier_color};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use vanguard_core::catalog::Unit;
use vanguard_core::StatKind;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    draw_list(f, app, chunks[0]);
    draw_details(f, app, chunks[1]);
}

fn draw_list(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .catalog
        .units()
        .iter()
        .map(|unit| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:3} ", unit.tier.label()),
                    Style::default().fg(tier_color(unit.tier)),
                ),
                Span::raw(unit.name.clone()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Units ({}) ", app.catalog.len())),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if !app.catalog.is_empty() {
        state.select(Some(app.selected_unit));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_details(f: &mut Frame, app: &App, area: Rect) {
    let Some(unit) = app.unit() else {
        let empty = Paragraph::new("No units loaded")
            .block(Block::default().borders(Borders::ALL).title(" Details "));
        f.render_widget(empty, area);
        return;
    };

    let paragraph = Paragraph::new(detail_lines(unit))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", unit.name)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn detail_lines(unit: &Unit) -> Vec<Line<'static>> {
    let mut lines = vec![
        section("Overview"),
        stat_line("Tier", unit.tier.label().to_string()),
        stat_line("Element", unit.element.label().to_string()),
        stat_line("Rarity", unit.rarity.label().to_string()),
        stat_line("Placement", format!("¥{}", unit.cost)),
        Line::from(""),
        section("Stat Grades"),
    ];

    let grades = unit.stat_grades();
    for &kind in StatKind::all() {
        let grade = grades[kind.index()];
        lines.push(Line::from(vec![
            Span::styled(format!("{:16}", kind.label()), Style::default().fg(Color::Gray)),
            Span::styled(
                grade.symbol().to_string(),
                Style::default().fg(grade_color(grade)).add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    if unit.stats.is_numeric() {
        lines.push(Line::from(Span::styled(
            "  (classified from legacy numeric stats)",
            Style::default().fg(Color::DarkGray),
        )));
    }

    if let Some(max) = unit.max_level() {
        lines.push(Line::from(""));
        lines.push(section(&format!("Level {} Base Stats", max.level)));
        lines.push(stat_line("Damage", format!("{:.0}", max.atk_damage)));
        lines.push(stat_line("SPA", format!("{:.1}s", max.spa)));
        lines.push(stat_line("Range", format!("{:.1}", max.range)));
        lines.push(stat_line("Crit Chance", format!("{:.1}%", max.crit_chance)));
        lines.push(stat_line("Crit Damage", format!("{:.1}%", max.crit_damage)));
        lines.push(stat_line("Total Cost", format!("¥{}", unit.total_cost_to(max.level))));
    }

    if !unit.traits.is_empty() {
        lines.push(Line::from(""));
        lines.push(section("Recommended Traits"));
        for name in &unit.traits {
            lines.push(Line::from(format!("  • {}", name)));
        }
    }

    if !unit.skills.is_empty() {
        lines.push(Line::from(""));
        lines.push(section("Skills"));
        for skill in &unit.skills {
            let unlock = skill
                .unlock_level
                .map(|l| format!(" (upgrade {})", l))
                .unwrap_or_default();
            lines.push(Line::from(Span::styled(
                format!("  {}{}", skill.name, unlock),
                Style::default().fg(Color::Yellow),
            )));
            if !skill.description.is_empty() {
                lines.push(Line::from(format!("    {}", skill.description)));
            }
        }
    }

    if !unit.evolutions.is_empty() {
        lines.push(Line::from(""));
        lines.push(section("Evolutions"));
        for evo in &unit.evolutions {
            lines.push(Line::from(Span::styled(
                format!("  {}", evo.name),
                Style::default().fg(Color::Magenta),
            )));
            for req in &evo.requirements {
                lines.push(Line::from(format!("    - {}", req)));
            }
            if let Some(desc) = &evo.description {
                lines.push(Line::from(format!("    {}", desc)));
            }
        }
    }

    lines
}
