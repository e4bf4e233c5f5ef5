//! Move units kept in local key/value storage into the unit store

use super::{KeyValueStore, StoreError, UnitStore};
use crate::catalog::Unit;
use thiserror::Error;

/// Key under which the old client kept its unit list
pub const LEGACY_UNITS_KEY: &str = "units";

#[derive(Error, Debug)]
pub enum MigrationError {
    #[error("stored unit list is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("could not write back unmigrated units: {0}")]
    WriteBack(serde_json::Error),
}

/// Outcome of a migration run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MigrationReport {
    /// Store ids of units saved
    pub migrated: Vec<String>,
    /// Unit name and reason for each unit the store refused
    pub failed: Vec<(String, StoreError)>,
}

impl MigrationReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Copy every locally stored unit into `store`
///
/// Local ids are dropped so the store assigns its own, and numeric base stats
/// are converted to grades. The local entry is removed once every unit is
/// saved; after a partial run it holds only the units the store refused, so a
/// retry picks up where the last run stopped.
pub fn migrate_local_units<K, S>(kv: &mut K, store: &mut S) -> Result<MigrationReport, MigrationError>
where
    K: KeyValueStore,
    S: UnitStore,
{
    let Some(raw) = kv.get(LEGACY_UNITS_KEY) else {
        return Ok(MigrationReport::default());
    };
    let units: Vec<Unit> = serde_json::from_str(&raw)?;

    let mut report = MigrationReport::default();
    let mut pending = Vec::new();
    for mut unit in units {
        unit.id = None;
        unit.normalize_stats();
        match store.save_unit(unit.clone()) {
            Ok(id) => report.migrated.push(id),
            Err(e) => {
                tracing::warn!(unit = %unit.name, error = %e, "unit not migrated");
                report.failed.push((unit.name.clone(), e));
                pending.push(unit);
            }
        }
    }

    if pending.is_empty() {
        kv.remove(LEGACY_UNITS_KEY);
    } else {
        let remaining = serde_json::to_string(&pending).map_err(MigrationError::WriteBack)?;
        kv.set(LEGACY_UNITS_KEY, remaining);
    }
    tracing::info!(
        migrated = report.migrated.len(),
        failed = report.failed.len(),
        "local unit migration finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryKeyValueStore, MemoryUnitStore};
    use crate::types::StatGrade;

    const LOCAL_UNITS: &str = r#"[
        {"id": "local-1", "name": "Noruto", "tier": "C", "element": "Fire", "rarity": "Rare",
         "stats": {"damage": 700, "speed": 400}},
        {"id": "local-2", "name": "Deku", "tier": "D", "element": "Blast", "rarity": "Rare",
         "stats": {"damage": "C", "speed": "D", "range": "C"}}
    ]"#;

    #[test]
    fn test_missing_key_is_noop() {
        let mut kv = MemoryKeyValueStore::new();
        let mut store = MemoryUnitStore::new();
        let report = migrate_local_units(&mut kv, &mut store).unwrap();
        assert_eq!(report, MigrationReport::default());
        assert!(store.is_empty());
    }

    #[test]
    fn test_migrates_and_clears_key() {
        let mut kv = MemoryKeyValueStore::new();
        kv.set(LEGACY_UNITS_KEY, LOCAL_UNITS.to_string());
        let mut store = MemoryUnitStore::new();

        let report = migrate_local_units(&mut kv, &mut store).unwrap();
        assert_eq!(report.migrated.len(), 2);
        assert!(report.is_complete());
        assert!(kv.get(LEGACY_UNITS_KEY).is_none());

        let noruto = store.fetch_unit(&report.migrated[0]).unwrap();
        assert_ne!(noruto.id.as_deref(), Some("local-1"));
        assert!(!noruto.stats.is_numeric());
        assert_eq!(noruto.stat_grades(), [StatGrade::C, StatGrade::D, StatGrade::C]);
    }

    #[test]
    fn test_partial_failure_keeps_key() {
        let mut kv = MemoryKeyValueStore::new();
        kv.set(LEGACY_UNITS_KEY, LOCAL_UNITS.to_string());
        let mut store = MemoryUnitStore::new();
        // Deku already exists remotely
        let existing: Unit = serde_json::from_str(
            r#"{"name": "Deku", "tier": "D", "element": "Blast", "rarity": "Rare"}"#,
        )
        .unwrap();
        store.save_unit(existing).unwrap();

        let report = migrate_local_units(&mut kv, &mut store).unwrap();
        assert_eq!(report.migrated.len(), 1);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, "Deku");
        assert!(matches!(report.failed[0].1, StoreError::Conflict(_)));

        let left: Vec<Unit> = serde_json::from_str(&kv.get(LEGACY_UNITS_KEY).unwrap()).unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].name, "Deku");
    }

    #[test]
    fn test_retry_after_partial_failure_completes() {
        let mut kv = MemoryKeyValueStore::new();
        kv.set(LEGACY_UNITS_KEY, LOCAL_UNITS.to_string());
        let mut store = MemoryUnitStore::new();
        let blocker: Unit = serde_json::from_str(
            r#"{"name": "Deku", "tier": "D", "element": "Blast", "rarity": "Rare"}"#,
        )
        .unwrap();
        let blocker_id = store.save_unit(blocker).unwrap();

        let first = migrate_local_units(&mut kv, &mut store).unwrap();
        assert!(!first.is_complete());

        store.delete_unit(&blocker_id).unwrap();
        let retry = migrate_local_units(&mut kv, &mut store).unwrap();
        assert!(retry.is_complete(), "{:?}", retry.failed);
        assert_eq!(retry.migrated.len(), 1);
        assert!(kv.get(LEGACY_UNITS_KEY).is_none());

        let mut names: Vec<String> = store.list_units().unwrap().into_iter().map(|u| u.name).collect();
        names.sort();
        assert_eq!(names, ["Deku", "Noruto"]);
    }

    #[test]
    fn test_malformed_blob_is_error() {
        let mut kv = MemoryKeyValueStore::new();
        kv.set(LEGACY_UNITS_KEY, "not json".to_string());
        let mut store = MemoryUnitStore::new();
        assert!(matches!(
            migrate_local_units(&mut kv, &mut store),
            Err(MigrationError::Malformed(_))
        ));
        assert!(kv.get(LEGACY_UNITS_KEY).is_some());
    }
}
