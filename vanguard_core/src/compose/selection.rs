//! StatSelection - Chosen grade and percentage for each stat kind

use crate::compose::StatPercentages;
use crate::grade::{GradeTable, StatRange};
use crate::types::{StatGrade, StatKind};

/// Selected grade per stat kind plus the chosen point inside each grade's range
///
/// Changing a grade resets that stat's percentage to the new range's minimum.
/// Percentages set through this type are always inside the current range.
#[derive(Debug, Clone, PartialEq)]
pub struct StatSelection {
    grades: [StatGrade; 3],
    percentages: StatPercentages,
}

impl StatSelection {
    /// Start every stat at the weakest grade
    pub fn new(table: &GradeTable) -> Self {
        Self::with_grades(table, [StatGrade::D; 3])
    }

    /// Start from explicit grades, ordered damage, spa, range
    pub fn with_grades(table: &GradeTable, grades: [StatGrade; 3]) -> Self {
        let mut selection = StatSelection {
            grades,
            percentages: StatPercentages::default(),
        };
        for &kind in StatKind::all() {
            let min = selection.range(table, kind).default_selection();
            selection.percentages.set(kind, min);
        }
        selection
    }

    pub fn grade(&self, kind: StatKind) -> StatGrade {
        self.grades[kind.index()]
    }

    pub fn percentage(&self, kind: StatKind) -> f64 {
        self.percentages.get(kind)
    }

    /// Percentages to feed into [`crate::compose::compose_stats`]
    pub fn percentages(&self) -> StatPercentages {
        self.percentages
    }

    /// Range of the currently selected grade for `kind`
    pub fn range(&self, table: &GradeTable, kind: StatKind) -> StatRange {
        table.range(self.grade(kind), kind)
    }

    /// Select a grade; the percentage drops to the grade's minimum
    pub fn set_grade(&mut self, table: &GradeTable, kind: StatKind, grade: StatGrade) {
        self.grades[kind.index()] = grade;
        let min = table.range(grade, kind).default_selection();
        self.percentages.set(kind, min);
    }

    /// Move one grade stronger (`up`) or weaker, saturating at the ends
    pub fn step_grade(&mut self, table: &GradeTable, kind: StatKind, up: bool) {
        let current = self.grade(kind);
        let next = if up { current.stronger() } else { current.weaker() };
        if next != current {
            self.set_grade(table, kind, next);
        }
    }

    /// Set the percentage, clamped into the current grade's range
    pub fn set_percentage(&mut self, table: &GradeTable, kind: StatKind, value: f64) {
        let clamped = self.range(table, kind).clamp(value);
        self.percentages.set(kind, clamped);
    }

    /// Nudge the percentage by `delta`, clamped into the current range
    pub fn step_percentage(&mut self, table: &GradeTable, kind: StatKind, delta: f64) {
        let value = self.percentage(kind) + delta;
        self.set_percentage(table, kind, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_weakest_minimums() {
        let table = GradeTable::default();
        let selection = StatSelection::new(&table);
        for &kind in StatKind::all() {
            assert_eq!(selection.grade(kind), StatGrade::D);
            let min = table.range(StatGrade::D, kind).min;
            assert!((selection.percentage(kind) - min).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_grade_change_resets_percentage_to_min() {
        let table = GradeTable::default();
        let mut selection = StatSelection::new(&table);
        selection.set_grade(&table, StatKind::Damage, StatGrade::S);
        selection.set_percentage(&table, StatKind::Damage, 11.0);
        assert!((selection.percentage(StatKind::Damage) - 11.0).abs() < f64::EPSILON);

        selection.set_grade(&table, StatKind::Damage, StatGrade::A);
        assert!((selection.percentage(StatKind::Damage) - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_percentage_is_clamped() {
        let table = GradeTable::default();
        let mut selection = StatSelection::with_grades(&table, [StatGrade::B; 3]);
        selection.set_percentage(&table, StatKind::Spa, 99.0);
        assert!((selection.percentage(StatKind::Spa) - 3.0).abs() < f64::EPSILON);
        selection.step_percentage(&table, StatKind::Spa, -10.0);
        assert!(selection.percentage(StatKind::Spa).abs() < f64::EPSILON);
    }

    #[test]
    fn test_step_grade_saturates() {
        let table = GradeTable::default();
        let mut selection = StatSelection::with_grades(&table, [StatGrade::O; 3]);
        selection.set_percentage(&table, StatKind::Range, 11.0);
        selection.step_grade(&table, StatKind::Range, true);
        assert_eq!(selection.grade(StatKind::Range), StatGrade::O);
        // Saturated step leaves the percentage alone
        assert!((selection.percentage(StatKind::Range) - 11.0).abs() < f64::EPSILON);

        selection.step_grade(&table, StatKind::Range, false);
        assert_eq!(selection.grade(StatKind::Range), StatGrade::Sss);
        assert!((selection.percentage(StatKind::Range) - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_percentages_snapshot() {
        let table = GradeTable::default();
        let selection = StatSelection::with_grades(&table, [StatGrade::S, StatGrade::A, StatGrade::C]);
        let pct = selection.percentages();
        assert!((pct.damage - 8.0).abs() < f64::EPSILON);
        assert!((pct.spa - 3.0).abs() < f64::EPSILON);
        assert!((pct.range + 3.0).abs() < f64::EPSILON);
    }
}
