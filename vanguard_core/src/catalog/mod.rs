//! Unit catalog: typed unit records and the collection the hub browses

mod base_stats;
mod unit;

pub use base_stats::{BaseStats, GradedStats, NumericStats};
pub use unit::{Evolution, Skill, Unit, UpgradeLevel, UpgradeStats};

use crate::types::Tier;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Catalog loading error
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid unit record: {0}")]
    Invalid(String),
}

/// Container for loading units from JSON
#[derive(Debug, Serialize, Deserialize)]
struct UnitsFile {
    units: Vec<Unit>,
}

/// Normalize a name for lookup: lowercase, spaces/underscores/dashes ignored.
fn normalize_lookup(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// All known units in catalog order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    units: Vec<Unit>,
}

impl Catalog {
    /// Build a catalog, validating every record
    pub fn new(units: Vec<Unit>) -> Result<Self, CatalogError> {
        for unit in &units {
            unit.validate().map_err(CatalogError::Invalid)?;
        }
        Ok(Catalog { units })
    }

    /// Parse `{ "units": [...] }` or a bare array of units
    ///
    /// The shape is chosen from the first non-whitespace character, so parse
    /// errors point at the offending record.
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let units = if content.trim_start().starts_with('[') {
            serde_json::from_str::<Vec<Unit>>(content)?
        } else {
            serde_json::from_str::<UnitsFile>(content)?.units
        };
        Self::new(units)
    }

    /// Units shipped with the crate
    pub fn builtin() -> Self {
        let json = include_str!("../../data/units.json");
        Self::from_json(json).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "bundled units.json rejected, starting with an empty catalog");
            Catalog::default()
        })
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Unit> {
        self.units.get(index)
    }

    /// Find by id or by name, ignoring case and separators
    pub fn find(&self, name_or_id: &str) -> Option<&Unit> {
        let wanted = normalize_lookup(name_or_id);
        self.units
            .iter()
            .find(|u| u.id.as_deref().is_some_and(|id| normalize_lookup(id) == wanted))
            .or_else(|| self.units.iter().find(|u| normalize_lookup(&u.name) == wanted))
    }

    /// Tier list rows: strongest tier first, names alphabetical within a tier,
    /// empty tiers omitted
    pub fn by_tier(&self) -> Vec<(Tier, Vec<&Unit>)> {
        Tier::all()
            .iter()
            .filter_map(|&tier| {
                let mut units: Vec<&Unit> = self.units.iter().filter(|u| u.tier == tier).collect();
                if units.is_empty() {
                    return None;
                }
                units.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
                Some((tier, units))
            })
            .collect()
    }
}

/// Load a catalog from a JSON file
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let content = fs::read_to_string(path)?;
    let catalog = Catalog::from_json(&content)?;
    tracing::debug!(path = %path.display(), units = catalog.len(), "loaded unit catalog");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StatGrade;

    #[test]
    fn test_builtin_catalog_loads() {
        let json = include_str!("../../data/units.json");
        let catalog = Catalog::from_json(json).unwrap();
        assert!(catalog.len() >= 6);
        for unit in catalog.units() {
            assert!(unit.max_level().is_some(), "{} has no upgrade levels", unit.name);
        }
    }

    #[test]
    fn test_find_ignores_case_and_separators() {
        let catalog = Catalog::builtin();
        let unit = catalog.find("song_jinwu").unwrap();
        assert_eq!(unit.name, "Song Jinwu");
        assert!(catalog.find("nobody").is_none());
    }

    #[test]
    fn test_by_tier_orders_strongest_first() {
        let catalog = Catalog::builtin();
        let rows = catalog.by_tier();
        assert!(!rows.is_empty());
        let positions: Vec<usize> = rows
            .iter()
            .map(|(tier, _)| Tier::all().iter().position(|t| t == tier).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        for (_, units) in &rows {
            assert!(!units.is_empty());
            assert!(units
                .windows(2)
                .all(|w| w[0].name.to_lowercase() <= w[1].name.to_lowercase()));
        }
    }

    #[test]
    fn test_bare_array_accepted() {
        let json = r#"[{"name": "Test", "tier": "C", "element": "Water", "rarity": "Rare",
                        "stats": {"damage": "B"}}]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.units()[0].stat_grades()[0], StatGrade::B);
    }

    #[test]
    fn test_invalid_unit_rejected() {
        let json = r#"{"units": [{"name": "Broken", "tier": "C", "element": "Water", "rarity": "Rare",
            "upgradeStats": {"maxUpgrades": 0, "levels": [
                {"level": 0, "atkDamage": 10, "range": 10, "spa": 2},
                {"level": 1, "atkDamage": 12, "range": 10, "spa": 2}
            ]}}]}"#;
        assert!(matches!(Catalog::from_json(json), Err(CatalogError::Invalid(_))));
    }

    #[test]
    fn test_bad_record_error_names_the_cause() {
        let json = r#"{"units": [{"name": "Test", "tier": "C", "element": "Water", "rarity": "Rare",
                        "stats": {"damage": "Z"}}]}"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
        let message = err.to_string();
        assert!(!message.contains("expected a sequence"), "{message}");
        assert!(message.contains("BaseStats"), "{message}");

        let bare = r#"
            [{"name": "Test", "tier": "Q", "element": "Water", "rarity": "Rare"}]"#;
        let message = Catalog::from_json(bare).unwrap_err().to_string();
        assert!(message.contains("Q"), "{message}");
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(matches!(Catalog::from_json("{ nope"), Err(CatalogError::Json(_))));
    }
}
