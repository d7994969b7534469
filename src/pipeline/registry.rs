use std::collections::{HashMap, HashSet};

use rusqlite::Connection;

use crate::db::{self, DatabaseError};

use super::EntityKind;

/// In-process cache of identifiers known to exist in the target store,
/// per entity type. Consulted before every import attempt (idempotence) and
/// for foreign-key resolution; updated the moment a record is written.
///
/// Never the system of record — after a restart it must be reseeded from the
/// store via `seed_from_store` before the importer resumes.
#[derive(Debug, Default)]
pub struct ReferenceRegistry {
    ids: HashMap<EntityKind, HashSet<String>>,
}

impl ReferenceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from the target store's current contents at run start.
    pub fn seed_from_store(conn: &Connection) -> Result<Self, DatabaseError> {
        let mut registry = Self::new();
        registry.bulk_load(EntityKind::Department, db::list_department_ids(conn)?);
        registry.bulk_load(EntityKind::Doctor, db::list_doctor_ids(conn)?);
        registry.bulk_load(EntityKind::Patient, db::list_patient_ids(conn)?);
        registry.bulk_load(EntityKind::Bed, db::list_bed_numbers(conn)?);
        registry.bulk_load(EntityKind::Transaction, db::list_transaction_ids(conn)?);
        Ok(registry)
    }

    pub fn contains(&self, kind: EntityKind, id: &str) -> bool {
        self.ids.get(&kind).is_some_and(|set| set.contains(id))
    }

    pub fn register(&mut self, kind: EntityKind, id: impl Into<String>) {
        self.ids.entry(kind).or_default().insert(id.into());
    }

    pub fn bulk_load(&mut self, kind: EntityKind, ids: impl IntoIterator<Item = String>) {
        self.ids.entry(kind).or_default().extend(ids);
    }

    pub fn known_count(&self, kind: EntityKind) -> usize {
        self.ids.get(&kind).map_or(0, HashSet::len)
    }
}
