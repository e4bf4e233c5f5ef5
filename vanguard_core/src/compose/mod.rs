//! Stat compositor
//!
//! Turns a base upgrade level plus the chosen percentage-within-grade and an
//! optional trait bonus into the final numbers shown for a unit. Results keep
//! full precision; rounding is left to the caller.

mod accumulator;
mod selection;
mod source;

pub use accumulator::StatAccumulator;
pub use selection::StatSelection;
pub use source::{accumulate, breakdown, BonusSource, Contribution, TraitSource};

use crate::catalog::UpgradeLevel;
use crate::traits::TraitBonus;
use crate::types::StatKind;
use serde::{Deserialize, Serialize};

/// Chosen point within each grade's range, in percent
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatPercentages {
    pub damage: f64,
    pub spa: f64,
    pub range: f64,
}

impl StatPercentages {
    pub fn get(&self, kind: StatKind) -> f64 {
        match kind {
            StatKind::Damage => self.damage,
            StatKind::Spa => self.spa,
            StatKind::Range => self.range,
        }
    }

    pub fn set(&mut self, kind: StatKind, value: f64) {
        match kind {
            StatKind::Damage => self.damage = value,
            StatKind::Spa => self.spa = value,
            StatKind::Range => self.range = value,
        }
    }
}

/// Final stats after grade percentages and trait bonus
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposedStats {
    pub atk_damage: f64,
    pub spa: f64,
    pub range: f64,
    pub crit_damage: f64,
    pub crit_chance: f64,
}

impl ComposedStats {
    /// Damage per second of attack interval; zero when the interval is not positive
    pub fn dps(&self) -> f64 {
        if self.spa <= 0.0 {
            return 0.0;
        }
        self.atk_damage / self.spa
    }
}

impl From<&UpgradeLevel> for ComposedStats {
    fn from(level: &UpgradeLevel) -> Self {
        ComposedStats {
            atk_damage: level.atk_damage,
            spa: level.spa,
            range: level.range,
            crit_damage: level.crit_damage,
            crit_chance: level.crit_chance,
        }
    }
}

/// Compose the displayed stats for one upgrade level
///
/// Percentages outside their grade's range are used as given.
pub fn compose_stats(
    base: &UpgradeLevel,
    percentages: &StatPercentages,
    trait_bonus: Option<&TraitBonus>,
) -> ComposedStats {
    let acc = match trait_bonus {
        Some(bonus) => accumulate(&[percentages, bonus]),
        None => accumulate(&[percentages]),
    };
    acc.finalize(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn level(atk_damage: f64, range: f64, spa: f64) -> UpgradeLevel {
        UpgradeLevel {
            level: 0,
            yen_cost: 0,
            atk_damage,
            range,
            spa,
            crit_damage: 300.0,
            crit_chance: 0.0,
        }
    }

    #[test]
    fn test_identity_without_bonuses() {
        let base = level(24.0, 5.0, 5.0);
        let composed = compose_stats(&base, &StatPercentages::default(), None);
        assert_eq!(composed, ComposedStats::from(&base));
        assert!((composed.atk_damage - 24.0).abs() < f64::EPSILON);
        assert!((composed.range - 5.0).abs() < f64::EPSILON);
        assert!((composed.spa - 5.0).abs() < f64::EPSILON);
        assert!((composed.crit_damage - 300.0).abs() < f64::EPSILON);
        assert!(composed.crit_chance.abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_trait_is_identity() {
        let base = level(24.0, 5.0, 5.0);
        let composed = compose_stats(&base, &StatPercentages::default(), Some(&TraitBonus::ZERO));
        assert_eq!(composed, ComposedStats::from(&base));
    }

    #[test]
    fn test_damage_percentage() {
        let base = level(100.0, 10.0, 5.0);
        let pct = StatPercentages {
            damage: 50.0,
            ..StatPercentages::default()
        };
        let composed = compose_stats(&base, &pct, None);
        assert!((composed.atk_damage - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_speed_percentage_reduces_spa() {
        let base = level(100.0, 10.0, 5.0);
        let pct = StatPercentages {
            spa: 20.0,
            ..StatPercentages::default()
        };
        let composed = compose_stats(&base, &pct, None);
        assert!((composed.spa - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_trait_and_grade_add_before_multiplying() {
        let base = level(100.0, 20.0, 10.0);
        let pct = StatPercentages {
            damage: 10.0,
            spa: 5.0,
            range: 4.0,
        };
        let bonus = TraitBonus {
            damage: 15.0,
            spa: 12.5,
            range: 6.0,
            crit_chance: 0.0,
            crit_damage: 0.0,
        };
        let composed = compose_stats(&base, &pct, Some(&bonus));
        assert!((composed.atk_damage - 125.0).abs() < 1e-9);
        assert!((composed.spa - 8.25).abs() < 1e-9);
        assert!((composed.range - 22.0).abs() < 1e-9);
    }

    #[test]
    fn test_crit_bonus_is_flat_only() {
        let base = level(100.0, 20.0, 5.0);
        let pct = StatPercentages {
            damage: 12.0,
            spa: 9.0,
            range: 6.0,
        };
        let deadeye = TraitBonus {
            crit_chance: 45.0,
            crit_damage: 50.0,
            ..TraitBonus::ZERO
        };
        let composed = compose_stats(&base, &pct, Some(&deadeye));
        assert!((composed.crit_chance - 45.0).abs() < f64::EPSILON);
        assert!((composed.crit_damage - 350.0).abs() < f64::EPSILON);
        // Grade sliders do not move crit stats
        let without = compose_stats(&base, &StatPercentages::default(), Some(&deadeye));
        assert!((without.crit_damage - composed.crit_damage).abs() < f64::EPSILON);
    }

    #[test]
    fn test_dps() {
        let stats = ComposedStats {
            atk_damage: 100.0,
            spa: 4.0,
            ..ComposedStats::default()
        };
        assert!((stats.dps() - 25.0).abs() < f64::EPSILON);
        assert!(ComposedStats::default().dps().abs() < f64::EPSILON);
    }

    proptest! {
        #[test]
        fn prop_damage_monotonic_in_percentage(
            base_damage in 0.0f64..100_000.0,
            low in -20.0f64..40.0,
            step in 0.0f64..40.0,
        ) {
            let base = level(base_damage, 10.0, 5.0);
            let a = StatPercentages { damage: low, ..StatPercentages::default() };
            let b = StatPercentages { damage: low + step, ..StatPercentages::default() };
            let da = compose_stats(&base, &a, None).atk_damage;
            let db = compose_stats(&base, &b, None).atk_damage;
            prop_assert!(db >= da - 1e-9);
        }

        #[test]
        fn prop_spa_non_increasing_in_percentage(
            base_spa in 0.1f64..30.0,
            low in -20.0f64..40.0,
            step in 0.0f64..40.0,
        ) {
            let base = level(100.0, 10.0, base_spa);
            let a = StatPercentages { spa: low, ..StatPercentages::default() };
            let b = StatPercentages { spa: low + step, ..StatPercentages::default() };
            let sa = compose_stats(&base, &a, None).spa;
            let sb = compose_stats(&base, &b, None).spa;
            prop_assert!(sb <= sa + 1e-9);
        }

        #[test]
        fn prop_range_monotonic_in_percentage(
            base_range in 0.0f64..100.0,
            low in -20.0f64..40.0,
            step in 0.0f64..40.0,
        ) {
            let base = level(100.0, base_range, 5.0);
            let a = StatPercentages { range: low, ..StatPercentages::default() };
            let b = StatPercentages { range: low + step, ..StatPercentages::default() };
            prop_assert!(
                compose_stats(&base, &b, None).range >= compose_stats(&base, &a, None).range - 1e-9
            );
        }
    }
}
