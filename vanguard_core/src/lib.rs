//! vanguard_core - Stat grading and unit data for the Anime Vanguards hub
//!
//! This library provides:
//! - Grade tables: percentage ranges per stat grade and stat kind
//! - Trait catalog: named modifier bundles, optionally leveled
//! - Stat compositor: base upgrade level + grade percentages + trait = displayed stats
//! - Grade classifier: bridge between legacy numeric stats and letter grades
//! - Unit catalog, storage seams and the local-storage migration

pub mod catalog;
pub mod classifier;
pub mod compose;
pub mod config;
pub mod grade;
pub mod prelude;
pub mod store;
pub mod traits;
pub mod types;

// Re-export core types for convenience
pub use catalog::{load_catalog, BaseStats, Catalog, CatalogError, Unit, UpgradeLevel};
pub use classifier::{grade_to_num, num_to_grade};
pub use compose::{compose_stats, ComposedStats, StatPercentages, StatSelection};
pub use config::{default_grade_table, default_traits, ConfigError};
pub use grade::{get_available_stat_grades, get_stat_range, GradeTable, StatRange};
pub use traits::{TraitBonus, TraitCatalog};
pub use types::{Element, Rarity, StatGrade, StatKind, Tier};
