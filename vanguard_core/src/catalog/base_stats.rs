//! BaseStats - The two historical shapes of a unit's base stats

use crate::classifier::{grade_to_num, num_to_grade};
use crate::types::{StatGrade, StatKind};
use serde::{Deserialize, Serialize};

/// Legacy numeric shape: `{ "damage": 1500, "speed": 1000, "range": 500 }`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericStats {
    #[serde(default)]
    pub damage: Option<f64>,
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub range: Option<f64>,
}

/// Current graded shape: `{ "damage": "A", "speed": "S", "range": "B" }`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GradedStats {
    #[serde(default)]
    pub damage: Option<StatGrade>,
    #[serde(default)]
    pub speed: Option<StatGrade>,
    #[serde(default)]
    pub range: Option<StatGrade>,
}

impl GradedStats {
    pub fn get(&self, kind: StatKind) -> Option<StatGrade> {
        match kind {
            StatKind::Damage => self.damage,
            StatKind::Spa => self.speed,
            StatKind::Range => self.range,
        }
    }

    /// Grades ordered damage, spa, range with missing entries classified as
    /// missing numbers would be
    pub fn resolved(&self) -> [StatGrade; 3] {
        let pick = |g: Option<StatGrade>| g.unwrap_or_else(|| num_to_grade(None));
        [pick(self.damage), pick(self.speed), pick(self.range)]
    }
}

/// Base stats in either historical shape
///
/// Numeric is tried first when reading, so a record with only numbers (or no
/// fields at all) reads as numeric and one with grade symbols reads as graded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BaseStats {
    Numeric(NumericStats),
    Graded(GradedStats),
}

impl Default for BaseStats {
    fn default() -> Self {
        BaseStats::Graded(GradedStats::default())
    }
}

impl BaseStats {
    /// View as grades, classifying numbers where needed
    pub fn to_graded(&self) -> GradedStats {
        match self {
            BaseStats::Graded(graded) => *graded,
            BaseStats::Numeric(numeric) => GradedStats {
                damage: Some(num_to_grade(numeric.damage)),
                speed: Some(num_to_grade(numeric.speed)),
                range: Some(num_to_grade(numeric.range)),
            },
        }
    }

    /// View as numbers, using each grade's representative value
    pub fn to_numeric(&self) -> NumericStats {
        match self {
            BaseStats::Numeric(numeric) => *numeric,
            BaseStats::Graded(graded) => NumericStats {
                damage: Some(grade_to_num(graded.damage)),
                speed: Some(grade_to_num(graded.speed)),
                range: Some(grade_to_num(graded.range)),
            },
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, BaseStats::Numeric(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_numeric_shape() {
        let stats: BaseStats =
            serde_json::from_str(r#"{"damage": 1500, "speed": 1000, "range": 250}"#).unwrap();
        assert!(stats.is_numeric());
        let graded = stats.to_graded();
        assert_eq!(graded.damage, Some(StatGrade::A));
        assert_eq!(graded.speed, Some(StatGrade::B));
        assert_eq!(graded.range, Some(StatGrade::D));
    }

    #[test]
    fn test_reads_graded_shape() {
        let stats: BaseStats =
            serde_json::from_str(r#"{"damage": "S", "speed": "SSS", "range": "c"}"#).unwrap();
        assert!(!stats.is_numeric());
        let graded = stats.to_graded();
        assert_eq!(graded.resolved(), [StatGrade::S, StatGrade::Sss, StatGrade::C]);
    }

    #[test]
    fn test_missing_numbers_become_neutral_grade() {
        let stats = BaseStats::Numeric(NumericStats {
            damage: Some(2100.0),
            speed: None,
            range: None,
        });
        let graded = stats.to_graded();
        assert_eq!(graded.damage, Some(StatGrade::S));
        assert_eq!(graded.speed, Some(StatGrade::C));
    }

    #[test]
    fn test_missing_grades_become_neutral_number() {
        let stats = BaseStats::Graded(GradedStats {
            damage: Some(StatGrade::A),
            ..GradedStats::default()
        });
        let numeric = stats.to_numeric();
        assert_eq!(numeric.damage, Some(1500.0));
        assert_eq!(numeric.range, Some(500.0));
    }

    #[test]
    fn test_resolved_fills_missing_with_c() {
        assert_eq!(GradedStats::default().resolved(), [StatGrade::C; 3]);
    }

    #[test]
    fn test_graded_round_trips_through_json() {
        let stats = BaseStats::Graded(GradedStats {
            damage: Some(StatGrade::Ss),
            speed: Some(StatGrade::O),
            range: None,
        });
        let json = serde_json::to_string(&stats).unwrap();
        let back: BaseStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }
}
