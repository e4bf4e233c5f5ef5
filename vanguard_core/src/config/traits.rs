//! Trait catalog loading

use super::ConfigError;
use crate::traits::{TraitBonus, TraitCatalog, TraitDef, TraitKind, TraitLevel};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// One `[[traits]]` entry. Flat modifiers are ignored when `levels` is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub damage: f64,
    #[serde(default)]
    pub spa: f64,
    #[serde(default)]
    pub range: f64,
    #[serde(default)]
    pub crit_chance: f64,
    #[serde(default)]
    pub crit_damage: f64,
    #[serde(default)]
    pub levels: Vec<TraitLevel>,
}

impl From<TraitEntry> for TraitDef {
    fn from(entry: TraitEntry) -> Self {
        let kind = if entry.levels.is_empty() {
            TraitKind::Flat(TraitBonus {
                damage: entry.damage,
                spa: entry.spa,
                range: entry.range,
                crit_chance: entry.crit_chance,
                crit_damage: entry.crit_damage,
            })
        } else {
            TraitKind::Leveled(entry.levels)
        };
        TraitDef {
            name: entry.name,
            description: entry.description,
            kind,
        }
    }
}

/// Container for trait configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitsConfig {
    #[serde(rename = "traits")]
    pub traits: Vec<TraitEntry>,
}

impl TraitsConfig {
    fn into_catalog(self) -> Result<TraitCatalog, ConfigError> {
        let mut seen = HashSet::new();
        for entry in &self.traits {
            let name = entry.name.trim();
            if name.is_empty() {
                return Err(ConfigError::ValidationError("trait with empty name".to_string()));
            }
            if !seen.insert(name.to_ascii_lowercase()) {
                return Err(ConfigError::ValidationError(format!(
                    "trait {name} is defined more than once"
                )));
            }
            let mut labels = HashSet::new();
            for level in &entry.levels {
                let label = level.label.trim();
                if label.is_empty() || label.contains(' ') {
                    return Err(ConfigError::ValidationError(format!(
                        "trait {name} has an invalid level label {:?}",
                        level.label
                    )));
                }
                if !labels.insert(label.to_ascii_lowercase()) {
                    return Err(ConfigError::ValidationError(format!(
                        "trait {name} repeats level {label}"
                    )));
                }
            }
        }

        Ok(TraitCatalog::new(
            self.traits.into_iter().map(TraitDef::from).collect(),
        ))
    }
}

/// Load a trait catalog from a TOML file
pub fn load_trait_catalog(path: &Path) -> Result<TraitCatalog, ConfigError> {
    let config: TraitsConfig = super::load_toml(path)?;
    config.into_catalog()
}

/// Load a trait catalog from a TOML string
pub fn parse_trait_catalog(content: &str) -> Result<TraitCatalog, ConfigError> {
    let config: TraitsConfig = super::parse_toml(content)?;
    config.into_catalog()
}

/// Trait catalog shipped with the crate
pub fn default_traits() -> TraitCatalog {
    let toml = include_str!("../../config/traits.toml");
    parse_trait_catalog(toml).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "bundled traits.toml rejected, trait bonuses disabled");
        TraitCatalog::default()
    })
}
