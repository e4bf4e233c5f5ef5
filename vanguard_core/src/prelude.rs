//! Prelude module for convenient imports
//!
//! ```rust
//! use vanguard_core::prelude::*;
//! ```

// Core types
pub use crate::types::{Element, Rarity, StatGrade, StatKind, Tier};

// Grades and traits
pub use crate::grade::{get_available_stat_grades, get_stat_range, GradeTable, StatRange};
pub use crate::traits::{TraitBonus, TraitCatalog};

// Composition
pub use crate::compose::{compose_stats, ComposedStats, StatPercentages, StatSelection};
pub use crate::classifier::{grade_to_num, num_to_grade};

// Catalog
pub use crate::catalog::{BaseStats, Catalog, Unit, UpgradeLevel};

// Config
pub use crate::config::{default_grade_table, default_traits};
