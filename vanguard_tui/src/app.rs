//! Application state

use crate::data::HubData;
use vanguard_core::catalog::{Catalog, Unit, UpgradeLevel};
use vanguard_core::compose::{breakdown, compose_stats, BonusSource, Contribution, TraitSource};
use vanguard_core::{ComposedStats, GradeTable, StatKind, StatSelection, TraitBonus, TraitCatalog};

/// Number of slider steps across one grade's range
const PERCENT_STEPS: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Units,
    TierList,
    Calculator,
    Traits,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Units, Tab::TierList, Tab::Calculator, Tab::Traits, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Units => "Units",
            Tab::TierList => "Tier List",
            Tab::Calculator => "Calc",
            Tab::Traits => "Traits",
            Tab::Help => "Help",
        }
    }
}

/// Editable rows of the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcField {
    Level,
    Grade(StatKind),
    Percentage(StatKind),
    Trait,
}

impl CalcField {
    pub fn all() -> &'static [CalcField] {
        &[
            CalcField::Level,
            CalcField::Grade(StatKind::Damage),
            CalcField::Percentage(StatKind::Damage),
            CalcField::Grade(StatKind::Spa),
            CalcField::Percentage(StatKind::Spa),
            CalcField::Grade(StatKind::Range),
            CalcField::Percentage(StatKind::Range),
            CalcField::Trait,
        ]
    }
}

pub struct App {
    pub current_tab: Tab,
    pub catalog: Catalog,
    pub grades: GradeTable,
    pub traits: TraitCatalog,
    /// Every selectable trait key, in catalog order
    pub trait_keys: Vec<String>,
    pub selected_unit: usize,
    /// Index into the selected unit's upgrade levels
    pub selected_level: usize,
    pub selection: StatSelection,
    /// Index into `trait_keys`; `None` means no trait
    pub trait_choice: Option<usize>,
    pub calc_field: usize,
    pub selected_trait_row: usize,
    pub tier_scroll: usize,
}

impl App {
    pub fn new(data: HubData) -> Self {
        let trait_keys = data.traits.selection_keys();
        let selection = StatSelection::new(&data.grades);
        let mut app = App {
            current_tab: Tab::Units,
            catalog: data.catalog,
            grades: data.grades,
            traits: data.traits,
            trait_keys,
            selected_unit: 0,
            selected_level: 0,
            selection,
            trait_choice: None,
            calc_field: 0,
            selected_trait_row: 0,
            tier_scroll: 0,
        };
        app.select_unit(0);
        app
    }

    pub fn unit(&self) -> Option<&Unit> {
        self.catalog.get(self.selected_unit)
    }

    pub fn current_level(&self) -> Option<&UpgradeLevel> {
        self.unit()?.upgrade_stats.levels.get(self.selected_level)
    }

    pub fn trait_key(&self) -> Option<&str> {
        self.trait_choice
            .and_then(|i| self.trait_keys.get(i))
            .map(String::as_str)
    }

    pub fn trait_bonus(&self) -> Option<TraitBonus> {
        self.trait_key().map(|key| self.traits.resolve(key))
    }

    /// Stats for the current unit, level, grades and trait
    pub fn composed(&self) -> Option<ComposedStats> {
        let base = self.current_level()?;
        let bonus = self.trait_bonus();
        Some(compose_stats(base, &self.selection.percentages(), bonus.as_ref()))
    }

    /// Per-source contributions behind [`App::composed`]
    pub fn contributions(&self) -> Vec<Contribution> {
        let percentages = self.selection.percentages();
        let bonus = self.trait_bonus();
        let trait_source = match (self.trait_key(), bonus.as_ref()) {
            (Some(key), Some(bonus)) => Some(TraitSource::new(key, bonus)),
            _ => None,
        };
        let mut sources: Vec<&dyn BonusSource> = vec![&percentages];
        if let Some(source) = trait_source.as_ref() {
            sources.push(source);
        }
        breakdown(&sources)
    }

    /// Select a unit and reset the calculator to its listed grades, its
    /// highest upgrade level and its first recognised trait.
    pub fn select_unit(&mut self, index: usize) {
        let Some(unit) = self.catalog.get(index) else {
            return;
        };
        let last_level = unit.upgrade_stats.levels.len().saturating_sub(1);
        let grades = unit.stat_grades();
        let trait_choice = unit.traits.iter().find_map(|listed| self.trait_index(listed));
        tracing::debug!(unit = %unit.name, "selected unit");

        self.selected_unit = index;
        self.selected_level = last_level;
        self.selection = StatSelection::with_grades(&self.grades, grades);
        self.trait_choice = trait_choice;
    }

    fn trait_index(&self, listed: &str) -> Option<usize> {
        let key = self
            .traits
            .default_key(listed)
            .unwrap_or_else(|| listed.trim().to_string());
        self.trait_keys.iter().position(|k| k.eq_ignore_ascii_case(&key))
    }

    pub fn reset_calculator(&mut self) {
        self.select_unit(self.selected_unit);
    }

    pub fn clear_trait(&mut self) {
        self.trait_choice = None;
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let next_idx = (current_idx + 1) % tabs.len();
        self.current_tab = tabs[next_idx];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let prev_idx = if current_idx == 0 {
            tabs.len() - 1
        } else {
            current_idx - 1
        };
        self.current_tab = tabs[prev_idx];
    }

    pub fn set_tab(&mut self, index: usize) {
        let tabs = Tab::all();
        if index < tabs.len() {
            self.current_tab = tabs[index];
        }
    }

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Units => {
                if self.selected_unit > 0 {
                    self.select_unit(self.selected_unit - 1);
                }
            }
            Tab::TierList => {
                self.tier_scroll = self.tier_scroll.saturating_sub(1);
            }
            Tab::Calculator => {
                self.calc_field = self.calc_field.saturating_sub(1);
            }
            Tab::Traits => {
                self.selected_trait_row = self.selected_trait_row.saturating_sub(1);
            }
            Tab::Help => {}
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Units => {
                if self.selected_unit + 1 < self.catalog.len() {
                    self.select_unit(self.selected_unit + 1);
                }
            }
            Tab::TierList => {
                if self.tier_scroll < self.max_tier_scroll() {
                    self.tier_scroll += 1;
                }
            }
            Tab::Calculator => {
                if self.calc_field + 1 < CalcField::all().len() {
                    self.calc_field += 1;
                }
            }
            Tab::Traits => {
                if self.selected_trait_row + 1 < self.traits.len() {
                    self.selected_trait_row += 1;
                }
            }
            Tab::Help => {}
        }
    }

    pub fn on_left(&mut self) {
        if self.current_tab == Tab::Calculator {
            self.adjust_field(false);
        }
    }

    pub fn on_right(&mut self) {
        if self.current_tab == Tab::Calculator {
            self.adjust_field(true);
        }
    }

    pub fn on_enter(&mut self) {
        match self.current_tab {
            Tab::Units => self.current_tab = Tab::Calculator,
            Tab::Traits => self.apply_trait_row(),
            _ => {}
        }
    }

    /// Last scroll offset that still shows a tier row; each row is followed
    /// by a blank line in the tier list
    pub fn max_tier_scroll(&self) -> usize {
        (self.catalog.by_tier().len() * 2).saturating_sub(1)
    }

    pub fn focused_field(&self) -> CalcField {
        CalcField::all()[self.calc_field.min(CalcField::all().len() - 1)]
    }

    fn adjust_field(&mut self, up: bool) {
        match self.focused_field() {
            CalcField::Level => {
                let count = self.unit().map_or(0, |u| u.upgrade_stats.levels.len());
                if up && self.selected_level + 1 < count {
                    self.selected_level += 1;
                } else if !up {
                    self.selected_level = self.selected_level.saturating_sub(1);
                }
            }
            CalcField::Grade(kind) => {
                self.selection.step_grade(&self.grades, kind, up);
            }
            CalcField::Percentage(kind) => {
                let width = self.selection.range(&self.grades, kind).width();
                let step = width / PERCENT_STEPS;
                let delta = if up { step } else { -step };
                self.selection.step_percentage(&self.grades, kind, delta);
            }
            CalcField::Trait => self.cycle_trait(up),
        }
    }

    /// Walk None -> first key -> ... -> last key -> None
    fn cycle_trait(&mut self, forward: bool) {
        let count = self.trait_keys.len();
        if count == 0 {
            self.trait_choice = None;
            return;
        }
        self.trait_choice = match (self.trait_choice, forward) {
            (None, true) => Some(0),
            (None, false) => Some(count - 1),
            (Some(i), true) if i + 1 < count => Some(i + 1),
            (Some(_), true) => None,
            (Some(0), false) => None,
            (Some(i), false) => Some(i - 1),
        };
    }

    /// Make the highlighted row of the Traits tab the active trait
    fn apply_trait_row(&mut self) {
        let Some(def) = self.traits.traits().get(self.selected_trait_row) else {
            return;
        };
        let key = def.default_key();
        self.trait_choice = self.trait_keys.iter().position(|k| *k == key);
        self.current_tab = Tab::Calculator;
    }
}
