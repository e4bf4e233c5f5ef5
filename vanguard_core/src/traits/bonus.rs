//! TraitBonus - The five modifiers a trait can carry

use serde::{Deserialize, Serialize};

/// Trait modifiers
///
/// `damage`, `spa` and `range` are percentages; `crit_chance` and
/// `crit_damage` are flat additions to the unit's crit stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TraitBonus {
    #[serde(default)]
    pub damage: f64,
    /// Attack interval reduction in percent
    #[serde(default)]
    pub spa: f64,
    #[serde(default)]
    pub range: f64,
    #[serde(default)]
    pub crit_chance: f64,
    #[serde(default)]
    pub crit_damage: f64,
}

impl TraitBonus {
    pub const ZERO: TraitBonus = TraitBonus {
        damage: 0.0,
        spa: 0.0,
        range: 0.0,
        crit_chance: 0.0,
        crit_damage: 0.0,
    };

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Short human-readable summary, e.g. `+15% DMG, +45 Crit`
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.damage != 0.0 {
            parts.push(format!("{:+}% DMG", self.damage));
        }
        if self.spa != 0.0 {
            parts.push(format!("{:+}% Speed", self.spa));
        }
        if self.range != 0.0 {
            parts.push(format!("{:+}% Range", self.range));
        }
        if self.crit_chance != 0.0 {
            parts.push(format!("{:+}% Crit", self.crit_chance));
        }
        if self.crit_damage != 0.0 {
            parts.push(format!("{:+}% Crit DMG", self.crit_damage));
        }
        if parts.is_empty() {
            "No combat modifiers".to_string()
        } else {
            parts.join(", ")
        }
    }
}
