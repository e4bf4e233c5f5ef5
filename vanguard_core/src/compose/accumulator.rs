//! StatAccumulator - Collects bonus contributions before they meet the base level

use crate::catalog::UpgradeLevel;
use crate::compose::ComposedStats;

/// Summed contributions from every bonus source
///
/// Percentages are stored as percent points (8.0 = 8%). Contributions to the
/// same stat add together before being applied to the base value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatAccumulator {
    pub damage_increased: f64,
    /// Reduction of the attack interval
    pub spa_reduced: f64,
    pub range_increased: f64,
    pub crit_chance_flat: f64,
    pub crit_damage_flat: f64,
}

impl StatAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the summed bonuses to a base upgrade level
    ///
    /// damage = base × (1 + Σdamage/100)
    /// spa    = base × (1 − Σspa/100)
    /// range  = base × (1 + Σrange/100)
    /// crit   = base + Σcrit
    pub fn finalize(&self, base: &UpgradeLevel) -> ComposedStats {
        ComposedStats {
            atk_damage: base.atk_damage * (1.0 + self.damage_increased / 100.0),
            spa: base.spa * (1.0 - self.spa_reduced / 100.0),
            range: base.range * (1.0 + self.range_increased / 100.0),
            crit_damage: base.crit_damage + self.crit_damage_flat,
            crit_chance: base.crit_chance + self.crit_chance_flat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> UpgradeLevel {
        UpgradeLevel {
            level: 0,
            yen_cost: 400,
            atk_damage: 100.0,
            range: 20.0,
            spa: 5.0,
            crit_damage: 150.0,
            crit_chance: 5.0,
        }
    }

    #[test]
    fn test_empty_accumulator_is_identity() {
        let composed = StatAccumulator::new().finalize(&base());
        assert!((composed.atk_damage - 100.0).abs() < f64::EPSILON);
        assert!((composed.spa - 5.0).abs() < f64::EPSILON);
        assert!((composed.range - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_contributions_stack_additively() {
        let acc = StatAccumulator {
            damage_increased: 20.0 + 30.0,
            ..StatAccumulator::default()
        };
        // 100 × (1 + 0.50), not 100 × 1.2 × 1.3
        assert!((acc.finalize(&base()).atk_damage - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_spa_reduction_is_subtractive() {
        let acc = StatAccumulator {
            spa_reduced: 10.0,
            ..StatAccumulator::default()
        };
        assert!((acc.finalize(&base()).spa - 4.5).abs() < 1e-9);
    }
}
