//! Startup data loading: unit catalog, grade table and trait catalog
//!
//! Each piece is looked up on disk first so it can be edited without a
//! rebuild, and falls back to the copy bundled with vanguard_core.

use std::env;
use std::path::PathBuf;
use vanguard_core::catalog::{load_catalog, Catalog};
use vanguard_core::config::{
    default_grade_table, default_traits, load_grade_table, load_trait_catalog,
};
use vanguard_core::{GradeTable, TraitCatalog};

/// Directory searched for `grades.toml` / `traits.toml` overrides
pub const CONFIG_DIR_VAR: &str = "VANGUARD_CONFIG_DIR";
/// Explicit path to a units JSON file
pub const UNITS_PATH_VAR: &str = "VANGUARD_UNITS";

const CONFIG_DIRS: [&str; 2] = ["config", "vanguard_core/config"];
const UNITS_PATHS: [&str; 3] = [
    "data/units.json",
    "vanguard_core/data/units.json",
    "../vanguard_core/data/units.json",
];

/// Everything the browser needs
pub struct HubData {
    pub catalog: Catalog,
    pub grades: GradeTable,
    pub traits: TraitCatalog,
}

impl HubData {
    pub fn load() -> Self {
        let config_dirs = config_dirs();
        HubData {
            catalog: load_units(),
            grades: load_grades(&config_dirs),
            traits: load_traits(&config_dirs),
        }
    }
}

fn config_dirs() -> Vec<PathBuf> {
    match env::var(CONFIG_DIR_VAR) {
        Ok(dir) => vec![PathBuf::from(dir)],
        Err(_) => CONFIG_DIRS.iter().map(PathBuf::from).collect(),
    }
}

fn first_existing(dirs: &[PathBuf], file: &str) -> Option<PathBuf> {
    dirs.iter().map(|d| d.join(file)).find(|p| p.is_file())
}

fn load_grades(dirs: &[PathBuf]) -> GradeTable {
    if let Some(path) = first_existing(dirs, "grades.toml") {
        match load_grade_table(&path) {
            Ok(table) => {
                tracing::info!(path = %path.display(), "loaded grade table");
                return table;
            }
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "ignoring grade table"),
        }
    }
    default_grade_table()
}

fn load_traits(dirs: &[PathBuf]) -> TraitCatalog {
    if let Some(path) = first_existing(dirs, "traits.toml") {
        match load_trait_catalog(&path) {
            Ok(catalog) => {
                tracing::info!(path = %path.display(), traits = catalog.len(), "loaded trait catalog");
                return catalog;
            }
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "ignoring trait catalog"),
        }
    }
    default_traits()
}

fn load_units() -> Catalog {
    let candidates: Vec<PathBuf> = match env::var(UNITS_PATH_VAR) {
        Ok(path) => vec![PathBuf::from(path)],
        Err(_) => UNITS_PATHS.iter().map(PathBuf::from).collect(),
    };

    for path in candidates.iter().filter(|p| p.is_file()) {
        match load_catalog(path) {
            Ok(catalog) => {
                tracing::info!(path = %path.display(), units = catalog.len(), "loaded units");
                return catalog;
            }
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "failed to load units"),
        }
    }

    tracing::info!("no units file found, using bundled catalog");
    Catalog::builtin()
}
