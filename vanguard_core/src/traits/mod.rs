//! Trait bonus table
//!
//! Traits are named modifier bundles. Flat traits carry one bonus; leveled
//! traits carry an ordered list of sub-levels (I, II, III), each with its own
//! bonus. A selection key is either a flat trait name (`"Deadeye"`) or a base
//! name plus level label (`"Swift II"`).

mod bonus;

pub use bonus::TraitBonus;

use serde::{Deserialize, Serialize};

/// One sub-level of a leveled trait
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitLevel {
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub bonus: TraitBonus,
}

/// Shape of a trait's modifiers
#[derive(Debug, Clone, PartialEq)]
pub enum TraitKind {
    Flat(TraitBonus),
    /// Ordered weakest to strongest
    Leveled(Vec<TraitLevel>),
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq)]
pub struct TraitDef {
    pub name: String,
    pub description: String,
    pub kind: TraitKind,
}

impl TraitDef {
    /// Key the selector picks when this trait is chosen: the strongest level
    /// for leveled traits, the bare name otherwise.
    pub fn default_key(&self) -> String {
        match &self.kind {
            TraitKind::Flat(_) => self.name.clone(),
            TraitKind::Leveled(levels) => match levels.last() {
                Some(level) => format!("{} {}", self.name, level.label),
                None => self.name.clone(),
            },
        }
    }

    /// Every selectable key for this trait, weakest level first
    pub fn keys(&self) -> Vec<String> {
        match &self.kind {
            TraitKind::Flat(_) => vec![self.name.clone()],
            TraitKind::Leveled(levels) => levels
                .iter()
                .map(|level| format!("{} {}", self.name, level.label))
                .collect(),
        }
    }

    fn level(&self, label: &str) -> Option<&TraitLevel> {
        match &self.kind {
            TraitKind::Flat(_) => None,
            TraitKind::Leveled(levels) => levels.iter().find(|l| l.label.eq_ignore_ascii_case(label)),
        }
    }

    fn strongest_bonus(&self) -> TraitBonus {
        match &self.kind {
            TraitKind::Flat(bonus) => *bonus,
            TraitKind::Leveled(levels) => levels.last().map(|l| l.bonus).unwrap_or_default(),
        }
    }
}

/// Static trait catalog, in display order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraitCatalog {
    traits: Vec<TraitDef>,
}

impl TraitCatalog {
    pub fn new(traits: Vec<TraitDef>) -> Self {
        TraitCatalog { traits }
    }

    pub fn traits(&self) -> &[TraitDef] {
        &self.traits
    }

    pub fn len(&self) -> usize {
        self.traits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }

    /// Look up a trait by its base name
    pub fn get(&self, name: &str) -> Option<&TraitDef> {
        let name = name.trim();
        self.traits.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Resolve a selection key to a bonus. Never fails: keys that do not name
    /// a trait or one of its levels yield [`TraitBonus::ZERO`].
    pub fn resolve(&self, key: &str) -> TraitBonus {
        self.try_resolve(key).unwrap_or_else(|| {
            tracing::debug!(key, "unresolved trait key, using zero bonus");
            TraitBonus::ZERO
        })
    }

    /// Like [`TraitCatalog::resolve`] but reports whether the key matched
    pub fn try_resolve(&self, key: &str) -> Option<TraitBonus> {
        let key = key.trim();
        if key.is_empty() {
            return None;
        }

        // A bare name: flat bonus, or the strongest level of a leveled trait
        if let Some(def) = self.get(key) {
            return Some(def.strongest_bonus());
        }

        let (base, label) = key.rsplit_once(' ')?;
        self.get(base)?.level(label.trim()).map(|level| level.bonus)
    }

    /// Every selectable key in catalog order
    pub fn selection_keys(&self) -> Vec<String> {
        self.traits.iter().flat_map(TraitDef::keys).collect()
    }

    /// Default selection key for a trait name, if the trait exists
    pub fn default_key(&self, name: &str) -> Option<String> {
        self.get(name).map(TraitDef::default_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> TraitCatalog {
        TraitCatalog::new(vec![
            TraitDef {
                name: "Deadeye".to_string(),
                description: String::new(),
                kind: TraitKind::Flat(TraitBonus {
                    crit_chance: 45.0,
                    crit_damage: 50.0,
                    ..TraitBonus::ZERO
                }),
            },
            TraitDef {
                name: "Vigor".to_string(),
                description: String::new(),
                kind: TraitKind::Leveled(
                    [("I", 5.0), ("II", 10.0), ("III", 15.0)]
                        .iter()
                        .map(|(label, damage)| TraitLevel {
                            label: label.to_string(),
                            description: String::new(),
                            bonus: TraitBonus {
                                damage: *damage,
                                ..TraitBonus::ZERO
                            },
                        })
                        .collect(),
                ),
            },
        ])
    }

    #[test]
    fn test_resolve_flat_trait() {
        let bonus = catalog().resolve("Deadeye");
        assert!((bonus.crit_chance - 45.0).abs() < f64::EPSILON);
        assert!((bonus.crit_damage - 50.0).abs() < f64::EPSILON);
        assert!(bonus.damage.abs() < f64::EPSILON);
    }

    #[test]
    fn test_resolve_level_key() {
        let bonus = catalog().resolve("Vigor II");
        assert!((bonus.damage - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bare_leveled_name_uses_strongest_level() {
        let bonus = catalog().resolve("vigor");
        assert!((bonus.damage - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_keys_resolve_to_zero() {
        let catalog = catalog();
        assert_eq!(catalog.resolve("Nonexistent"), TraitBonus::ZERO);
        assert_eq!(catalog.resolve("Vigor IV"), TraitBonus::ZERO);
        assert_eq!(catalog.resolve("Deadeye II"), TraitBonus::ZERO);
        assert_eq!(catalog.resolve(""), TraitBonus::ZERO);
        assert!(catalog.try_resolve("Nonexistent").is_none());
    }

    #[test]
    fn test_selection_keys_and_default_key() {
        let catalog = catalog();
        assert_eq!(
            catalog.selection_keys(),
            vec!["Deadeye", "Vigor I", "Vigor II", "Vigor III"]
        );
        assert_eq!(catalog.default_key("Vigor").as_deref(), Some("Vigor III"));
        assert_eq!(catalog.default_key("Deadeye").as_deref(), Some("Deadeye"));
        assert_eq!(catalog.default_key("Nope"), None);
    }
}
