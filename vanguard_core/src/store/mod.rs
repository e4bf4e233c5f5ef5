//! Persistence seams
//!
//! The hub's backend (unit CRUD and account login) lives outside this crate.
//! These traits are the shape the rest of the code talks to, with in-memory
//! implementations for the terminal browser and tests.

mod kv;
mod migrate;
mod session;

pub use kv::{KeyValueStore, MemoryKeyValueStore};
pub use migrate::{migrate_local_units, MigrationError, MigrationReport, LEGACY_UNITS_KEY};
pub use session::{Credentials, Session, SessionStore, SESSION_KEY};

use crate::catalog::Unit;
use std::collections::BTreeMap;
use thiserror::Error;

/// Failure from a store or gateway
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("unit {0} not found")]
    NotFound(String),
    #[error("a unit named {0} already exists")]
    Conflict(String),
    #[error("authentication failed: {0}")]
    Unauthorized(String),
    #[error("backend error: {0}")]
    Backend(String),
}

/// Unit CRUD as offered by the backend
pub trait UnitStore {
    fn fetch_unit(&self, id: &str) -> Result<Unit, StoreError>;

    /// Insert or update. Units without an id are inserted and get one assigned.
    /// Returns the unit's id.
    fn save_unit(&mut self, unit: Unit) -> Result<String, StoreError>;

    fn delete_unit(&mut self, id: &str) -> Result<(), StoreError>;

    fn list_units(&self) -> Result<Vec<Unit>, StoreError>;
}

/// Account login as offered by the backend
pub trait AuthGateway {
    fn login(&self, credentials: &Credentials) -> Result<Session, StoreError>;
}

/// In-memory [`UnitStore`]
#[derive(Debug, Clone, Default)]
pub struct MemoryUnitStore {
    units: BTreeMap<String, Unit>,
    next_id: u64,
}

impl MemoryUnitStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with units, assigning ids where missing
    pub fn with_units(units: impl IntoIterator<Item = Unit>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for unit in units {
            store.save_unit(unit)?;
        }
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    fn assign_id(&mut self) -> String {
        loop {
            self.next_id += 1;
            let id = format!("unit-{}", self.next_id);
            if !self.units.contains_key(&id) {
                return id;
            }
        }
    }

    fn name_taken(&self, name: &str, except_id: Option<&str>) -> bool {
        self.units.iter().any(|(id, unit)| {
            Some(id.as_str()) != except_id && unit.name.eq_ignore_ascii_case(name.trim())
        })
    }
}

impl UnitStore for MemoryUnitStore {
    fn fetch_unit(&self, id: &str) -> Result<Unit, StoreError> {
        self.units
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn save_unit(&mut self, mut unit: Unit) -> Result<String, StoreError> {
        unit.validate().map_err(StoreError::Backend)?;
        if self.name_taken(&unit.name, unit.id.as_deref()) {
            return Err(StoreError::Conflict(unit.name));
        }
        let id = match unit.id.clone() {
            Some(id) => id,
            None => self.assign_id(),
        };
        unit.id = Some(id.clone());
        self.units.insert(id.clone(), unit);
        Ok(id)
    }

    fn delete_unit(&mut self, id: &str) -> Result<(), StoreError> {
        self.units
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn list_units(&self) -> Result<Vec<Unit>, StoreError> {
        Ok(self.units.values().cloned().collect())
    }
}
