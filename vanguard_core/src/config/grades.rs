//! Grade range table loading

use super::ConfigError;
use crate::grade::{GradeTable, StatRange};
use crate::types::{StatGrade, StatKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One `[[grades]]` row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeRow {
    pub grade: StatGrade,
    pub damage: StatRange,
    pub spa: StatRange,
    pub range: StatRange,
}

impl GradeRow {
    fn get(&self, kind: StatKind) -> StatRange {
        match kind {
            StatKind::Damage => self.damage,
            StatKind::Spa => self.spa,
            StatKind::Range => self.range,
        }
    }
}

/// Container for grade range configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradesConfig {
    pub grades: Vec<GradeRow>,
}

impl From<&GradeTable> for GradesConfig {
    fn from(table: &GradeTable) -> Self {
        let grades = table
            .grades()
            .iter()
            .map(|&grade| GradeRow {
                grade,
                damage: table.range(grade, StatKind::Damage),
                spa: table.range(grade, StatKind::Spa),
                range: table.range(grade, StatKind::Range),
            })
            .collect();
        GradesConfig { grades }
    }
}

impl GradesConfig {
    /// Every grade must appear exactly once and the result must satisfy the
    /// table's ordering invariants.
    fn into_table(self) -> Result<GradeTable, ConfigError> {
        let mut rows: [Option<GradeRow>; 8] = Default::default();
        for row in self.grades {
            let slot = &mut rows[row.grade.index()];
            if slot.is_some() {
                return Err(ConfigError::ValidationError(format!(
                    "grade {} is defined more than once",
                    row.grade
                )));
            }
            *slot = Some(row);
        }

        let mut ranges = [[StatRange::new(0.0, 0.0); 3]; 8];
        for &grade in StatGrade::all() {
            let row = rows[grade.index()].as_ref().ok_or_else(|| {
                ConfigError::ValidationError(format!("grade {grade} is missing"))
            })?;
            for &kind in StatKind::all() {
                ranges[grade.index()][kind.index()] = row.get(kind);
            }
        }

        let table = GradeTable::from_ranges(ranges);
        table.validate().map_err(ConfigError::ValidationError)?;
        Ok(table)
    }
}

/// Load a grade table from a TOML file
pub fn load_grade_table(path: &Path) -> Result<GradeTable, ConfigError> {
    let config: GradesConfig = super::load_toml(path)?;
    config.into_table()
}

/// Load a grade table from a TOML string
pub fn parse_grade_table(content: &str) -> Result<GradeTable, ConfigError> {
    let config: GradesConfig = super::parse_toml(content)?;
    config.into_table()
}

/// Render a table as `grades.toml`, the starting point for an override file
pub fn grade_table_to_toml(table: &GradeTable) -> Result<String, ConfigError> {
    Ok(toml::to_string(&GradesConfig::from(table))?)
}

/// Grade table used when no override file is present
pub fn default_grade_table() -> GradeTable {
    GradeTable::default()
}
