//! Grade classifier: bridge between numeric base stats and letter grades
//!
//! Older unit records stored base stats as plain numbers; newer ones store
//! grades. The bridge only knows the five letters D through S and quantizes,
//! so converting a number to a grade and back does not return the number.
//!
//! Missing values map to the neutral grade C and the neutral number 500, which
//! are each other's image, so absent data stays absent-looking in both shapes.

use crate::types::StatGrade;

/// Descending thresholds: the first bound the value reaches picks the grade.
const GRADE_THRESHOLDS: [(f64, StatGrade); 4] = [
    (2000.0, StatGrade::S),
    (1500.0, StatGrade::A),
    (1000.0, StatGrade::B),
    (500.0, StatGrade::C),
];

/// Number used for a missing or unrecognised grade
pub const NEUTRAL_NUMBER: f64 = 500.0;

/// Grade used for a missing number
pub const NEUTRAL_GRADE: StatGrade = StatGrade::C;

/// Classify a numeric base stat
///
/// `>= 2000` S, `>= 1500` A, `>= 1000` B, `>= 500` C, anything lower
/// (including NaN) D. `None` is [`NEUTRAL_GRADE`].
pub fn num_to_grade(value: Option<f64>) -> StatGrade {
    let Some(value) = value else {
        return NEUTRAL_GRADE;
    };
    GRADE_THRESHOLDS
        .iter()
        .find(|(bound, _)| value >= *bound)
        .map(|(_, grade)| *grade)
        .unwrap_or(StatGrade::D)
}

/// Representative number for a grade
///
/// Tiers above S have no legacy number and saturate at S's 2000.
/// `None` is [`NEUTRAL_NUMBER`].
pub fn grade_to_num(grade: Option<StatGrade>) -> f64 {
    match grade {
        Some(StatGrade::D) => 200.0,
        Some(StatGrade::C) => 500.0,
        Some(StatGrade::B) => 1000.0,
        Some(StatGrade::A) => 1500.0,
        Some(StatGrade::S | StatGrade::Ss | StatGrade::Sss | StatGrade::O) => 2000.0,
        None => NEUTRAL_NUMBER,
    }
}

/// Representative number for a grade symbol; unknown symbols are neutral
pub fn grade_str_to_num(symbol: &str) -> f64 {
    grade_to_num(symbol.parse().ok())
}
