//! Traits tab view

use super::section;
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use vanguard_core::traits::TraitKind;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let items: Vec<ListItem> = app
        .traits
        .traits()
        .iter()
        .map(|def| ListItem::new(def.name.clone()))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Traits "))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if !app.traits.is_empty() {
        state.select(Some(app.selected_trait_row));
    }
    f.render_stateful_widget(list, chunks[0], &mut state);

    let Some(def) = app.traits.traits().get(app.selected_trait_row) else {
        return;
    };

    let mut lines = vec![section(&def.name)];
    if !def.description.is_empty() {
        lines.push(Line::from(def.description.clone()));
    }
    lines.push(Line::from(""));

    match &def.kind {
        TraitKind::Flat(bonus) => {
            lines.push(Line::from(Span::styled(
                bonus.summary(),
                Style::default().fg(Color::Green),
            )));
        }
        TraitKind::Leveled(levels) => {
            for level in levels {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{} {:5}", def.name, level.label),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::styled(level.bonus.summary(), Style::default().fg(Color::Green)),
                ]));
                if !level.description.is_empty() {
                    lines.push(Line::from(format!("  {}", level.description)));
                }
            }
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Enter selects {} in the calculator", def.default_key()),
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Details "))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, chunks[1]);
}
