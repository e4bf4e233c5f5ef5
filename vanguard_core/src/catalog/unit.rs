//! Unit catalog records

use crate::catalog::{BaseStats, GradedStats};
use crate::types::{Element, Rarity, StatGrade, Tier};
use serde::{Deserialize, Serialize};

/// Base combat stats at one upgrade rung
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeLevel {
    pub level: u32,
    #[serde(default)]
    pub yen_cost: u32,
    pub atk_damage: f64,
    pub range: f64,
    /// Seconds per attack
    pub spa: f64,
    #[serde(default)]
    pub crit_damage: f64,
    #[serde(default)]
    pub crit_chance: f64,
}

/// Upgrade progression for a unit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeStats {
    #[serde(default)]
    pub max_upgrades: u32,
    /// Ordered by increasing `level`
    #[serde(default)]
    pub levels: Vec<UpgradeLevel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Upgrade level at which the skill unlocks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlock_level: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evolution {
    pub name: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A unit as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    /// Store-assigned identifier; absent on records that were never saved
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub tier: Tier,
    pub element: Element,
    pub rarity: Rarity,
    /// Placement cost in yen
    #[serde(default)]
    pub cost: u32,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub stats: BaseStats,
    #[serde(default)]
    pub upgrade_stats: UpgradeStats,
    #[serde(default)]
    pub traits: Vec<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub evolutions: Vec<Evolution>,
}

impl Unit {
    /// Grades for damage, spa and range, whatever shape the record uses
    pub fn graded_stats(&self) -> GradedStats {
        self.stats.to_graded()
    }

    /// Grades ordered damage, spa, range with missing values filled in
    pub fn stat_grades(&self) -> [StatGrade; 3] {
        self.graded_stats().resolved()
    }

    /// Base stats at a given upgrade level
    pub fn level(&self, level: u32) -> Option<&UpgradeLevel> {
        self.upgrade_stats.levels.iter().find(|l| l.level == level)
    }

    /// Highest authored upgrade rung
    pub fn max_level(&self) -> Option<&UpgradeLevel> {
        self.upgrade_stats.levels.last()
    }

    /// Total yen to place the unit and buy every upgrade up to `level`
    pub fn total_cost_to(&self, level: u32) -> u64 {
        let upgrades: u64 = self
            .upgrade_stats
            .levels
            .iter()
            .filter(|l| l.level <= level)
            .map(|l| u64::from(l.yen_cost))
            .sum();
        u64::from(self.cost) + upgrades
    }

    /// Convert numeric base stats to the graded shape in place
    pub fn normalize_stats(&mut self) {
        if self.stats.is_numeric() {
            self.stats = BaseStats::Graded(self.stats.to_graded());
        }
    }

    /// Check internal consistency of the upgrade table
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("unit has an empty name".to_string());
        }
        let levels = &self.upgrade_stats.levels;
        if let Some(pair) = levels.windows(2).find(|w| w[0].level >= w[1].level) {
            return Err(format!(
                "{}: upgrade level {} follows level {}",
                self.name, pair[1].level, pair[0].level
            ));
        }
        if let Some(last) = levels.last() {
            if last.level > self.upgrade_stats.max_upgrades {
                return Err(format!(
                    "{}: upgrade level {} exceeds maxUpgrades {}",
                    self.name, last.level, self.upgrade_stats.max_upgrades
                ));
            }
        }
        Ok(())
    }
}
