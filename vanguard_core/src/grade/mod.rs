//! Grade range table and resolver
//!
//! Every (grade, stat kind) pair maps to a percentage interval. The table is a
//! fixed-size array indexed by the two closed enumerations, so lookups are total.

mod range;

pub use range::StatRange;

use crate::types::{StatGrade, StatKind};

const GRADE_COUNT: usize = 8;
const KIND_COUNT: usize = 3;

/// Rows are grades weakest first; columns are damage, spa, range.
const BUILTIN_RANGES: [[StatRange; KIND_COUNT]; GRADE_COUNT] = [
    // D
    [StatRange::new(-10.0, -5.0), StatRange::new(-8.0, -4.0), StatRange::new(-6.0, -3.0)],
    // C
    [StatRange::new(-5.0, 0.0), StatRange::new(-4.0, 0.0), StatRange::new(-3.0, 0.0)],
    // B
    [StatRange::new(0.0, 4.0), StatRange::new(0.0, 3.0), StatRange::new(0.0, 2.0)],
    // A
    [StatRange::new(4.0, 8.0), StatRange::new(3.0, 6.0), StatRange::new(2.0, 4.0)],
    // S
    [StatRange::new(8.0, 12.0), StatRange::new(6.0, 9.0), StatRange::new(4.0, 6.0)],
    // SS
    [StatRange::new(12.0, 15.0), StatRange::new(9.0, 11.0), StatRange::new(6.0, 8.0)],
    // SSS
    [StatRange::new(15.0, 18.0), StatRange::new(11.0, 12.5), StatRange::new(8.0, 10.0)],
    // O
    [StatRange::new(18.0, 20.0), StatRange::new(12.5, 14.0), StatRange::new(10.0, 12.0)],
];

/// Percentage intervals for every grade and stat kind
#[derive(Debug, Clone, PartialEq)]
pub struct GradeTable {
    ranges: [[StatRange; KIND_COUNT]; GRADE_COUNT],
}

impl Default for GradeTable {
    fn default() -> Self {
        GradeTable {
            ranges: BUILTIN_RANGES,
        }
    }
}

impl GradeTable {
    /// Build a table from a complete set of rows. Callers validate first.
    pub(crate) fn from_ranges(ranges: [[StatRange; KIND_COUNT]; GRADE_COUNT]) -> Self {
        GradeTable { ranges }
    }

    /// Interval for a grade and stat kind
    pub fn range(&self, grade: StatGrade, kind: StatKind) -> StatRange {
        self.ranges[grade.index()][kind.index()]
    }

    /// Grades this table defines, weakest first
    pub fn grades(&self) -> &'static [StatGrade] {
        StatGrade::all()
    }

    /// Check the ordering invariants: `min <= max`, and lower bounds never
    /// decrease as grades get stronger.
    pub fn validate(&self) -> Result<(), String> {
        for &kind in StatKind::all() {
            let mut previous_min = f64::NEG_INFINITY;
            for &grade in StatGrade::all() {
                let range = self.range(grade, kind);
                if !range.min.is_finite() || !range.max.is_finite() {
                    return Err(format!("{grade} {} range is not finite", kind.label()));
                }
                if range.min > range.max {
                    return Err(format!(
                        "{grade} {} range has min {} above max {}",
                        kind.label(),
                        range.min,
                        range.max
                    ));
                }
                if range.min < previous_min {
                    return Err(format!(
                        "{grade} {} lower bound {} is below the weaker grade's {}",
                        kind.label(),
                        range.min,
                        previous_min
                    ));
                }
                previous_min = range.min;
            }
        }
        Ok(())
    }
}

/// Interval for a grade and stat kind from the built-in table
pub fn get_stat_range(grade: StatGrade, kind: StatKind) -> StatRange {
    BUILTIN_RANGES[grade.index()][kind.index()]
}

/// Every defined grade, weakest first
pub fn get_available_stat_grades() -> &'static [StatGrade] {
    StatGrade::all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_builtin_table_is_valid() {
        assert_eq!(GradeTable::default().validate(), Ok(()));
    }

    #[test]
    fn test_table_dimensions_match_enums() {
        assert_eq!(StatGrade::all().len(), GRADE_COUNT);
        assert_eq!(StatKind::all().len(), KIND_COUNT);
    }

    #[test]
    fn test_available_grades_ordered_and_non_empty() {
        let grades = get_available_stat_grades();
        assert!(!grades.is_empty());
        assert_eq!(grades.first(), Some(&StatGrade::D));
        assert_eq!(grades.last(), Some(&StatGrade::O));
        assert!(grades.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_known_ranges() {
        let s_damage = get_stat_range(StatGrade::S, StatKind::Damage);
        assert!((s_damage.min - 8.0).abs() < f64::EPSILON);
        assert!((s_damage.max - 12.0).abs() < f64::EPSILON);

        let sss_spa = get_stat_range(StatGrade::Sss, StatKind::Spa);
        assert!((sss_spa.max - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let mut ranges = BUILTIN_RANGES;
        ranges[StatGrade::A.index()][StatKind::Range.index()] = StatRange::new(5.0, 1.0);
        let table = GradeTable::from_ranges(ranges);
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_decreasing_lower_bound() {
        let mut ranges = BUILTIN_RANGES;
        ranges[StatGrade::S.index()][StatKind::Damage.index()] = StatRange::new(1.0, 12.0);
        let table = GradeTable::from_ranges(ranges);
        assert!(table.validate().is_err());
    }

    proptest! {
        #[test]
        fn prop_min_not_above_max(g in 0usize..GRADE_COUNT, k in 0usize..KIND_COUNT) {
            let range = get_stat_range(StatGrade::all()[g], StatKind::all()[k]);
            prop_assert!(range.min <= range.max);
        }

        #[test]
        fn prop_stronger_grade_never_lowers_min(
            a in 0usize..GRADE_COUNT,
            b in 0usize..GRADE_COUNT,
            k in 0usize..KIND_COUNT,
        ) {
            let (weak, strong) = if a <= b { (a, b) } else { (b, a) };
            let kind = StatKind::all()[k];
            let weak_range = get_stat_range(StatGrade::all()[weak], kind);
            let strong_range = get_stat_range(StatGrade::all()[strong], kind);
            prop_assert!(weak_range.min <= strong_range.min);
        }
    }
}
