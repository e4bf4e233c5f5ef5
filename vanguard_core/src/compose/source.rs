//! BonusSource - Anything that contributes to a composed stat preview

use crate::compose::{StatAccumulator, StatPercentages};
use crate::traits::TraitBonus;

/// Trait for anything that contributes bonuses to a [`StatAccumulator`]
pub trait BonusSource {
    /// Identifier shown in breakdowns
    fn id(&self) -> &str;

    /// Add this source's contribution to the accumulator
    fn apply(&self, stats: &mut StatAccumulator);
}

impl BonusSource for StatPercentages {
    fn id(&self) -> &str {
        "grade"
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        stats.damage_increased += self.damage;
        stats.spa_reduced += self.spa;
        stats.range_increased += self.range;
    }
}

/// The active trait, labelled by its selection key
#[derive(Debug, Clone, Copy)]
pub struct TraitSource<'a> {
    pub key: &'a str,
    pub bonus: &'a TraitBonus,
}

impl<'a> TraitSource<'a> {
    pub fn new(key: &'a str, bonus: &'a TraitBonus) -> Self {
        TraitSource { key, bonus }
    }
}

impl BonusSource for TraitSource<'_> {
    fn id(&self) -> &str {
        self.key
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        self.bonus.apply(stats);
    }
}

impl BonusSource for TraitBonus {
    fn id(&self) -> &str {
        "trait"
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        stats.damage_increased += self.damage;
        stats.spa_reduced += self.spa;
        stats.range_increased += self.range;
        stats.crit_chance_flat += self.crit_chance;
        stats.crit_damage_flat += self.crit_damage;
    }
}

/// Accumulate a set of sources in order
pub fn accumulate(sources: &[&dyn BonusSource]) -> StatAccumulator {
    let mut acc = StatAccumulator::new();
    for source in sources {
        source.apply(&mut acc);
    }
    acc
}

/// One source's contribution, for display
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    pub source: String,
    pub delta: StatAccumulator,
}

/// Per-source contributions, in the order given
pub fn breakdown(sources: &[&dyn BonusSource]) -> Vec<Contribution> {
    sources
        .iter()
        .map(|source| {
            let mut delta = StatAccumulator::new();
            source.apply(&mut delta);
            Contribution {
                source: source.id().to_string(),
                delta,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentages_leave_crit_untouched() {
        let pct = StatPercentages {
            damage: 10.0,
            spa: 5.0,
            range: 2.0,
        };
        let mut acc = StatAccumulator::new();
        pct.apply(&mut acc);
        assert!((acc.damage_increased - 10.0).abs() < f64::EPSILON);
        assert!(acc.crit_chance_flat.abs() < f64::EPSILON);
        assert!(acc.crit_damage_flat.abs() < f64::EPSILON);
    }

    #[test]
    fn test_accumulate_sums_sources() {
        let pct = StatPercentages {
            damage: 10.0,
            spa: 0.0,
            range: 0.0,
        };
        let bonus = TraitBonus {
            damage: 15.0,
            crit_chance: 45.0,
            ..TraitBonus::ZERO
        };
        let acc = accumulate(&[&pct, &bonus]);
        assert!((acc.damage_increased - 25.0).abs() < f64::EPSILON);
        assert!((acc.crit_chance_flat - 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_breakdown_labels_sources() {
        let pct = StatPercentages::default();
        let bonus = TraitBonus {
            spa: 12.5,
            ..TraitBonus::ZERO
        };
        let source = TraitSource::new("Swift III", &bonus);
        let parts = breakdown(&[&pct, &source]);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].source, "grade");
        assert_eq!(parts[1].source, "Swift III");
        assert!((parts[1].delta.spa_reduced - 12.5).abs() < f64::EPSILON);
    }
}
