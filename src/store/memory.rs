use std::collections::HashMap;

use chrono::Utc;
use parking_lot::RwLock;
use serde_json::{Map, Value};

use crate::error::StoreError;
use crate::store::traits::RecordStore;
use crate::types::{ComponentList, RecordSnapshot};

/// In-memory reference backend. Revisions start at 1 and bump on every
/// write; conflict checking follows the trait contract.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, RecordSnapshot>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record. Replaces any existing record with the same id.
    pub fn insert(&self, id: impl Into<String>, data: Value) -> RecordSnapshot {
        let id = id.into();
        let snapshot = RecordSnapshot {
            id: id.clone(),
            revision: 1,
            data,
        };
        self.records.write().insert(id, snapshot.clone());
        snapshot
    }
}

impl RecordStore for MemoryStore {
    fn list(&self) -> Result<Vec<RecordSnapshot>, StoreError> {
        let mut all: Vec<RecordSnapshot> = self.records.read().values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(all)
    }

    fn read(&self, record_id: &str) -> Result<Option<RecordSnapshot>, StoreError> {
        Ok(self.records.read().get(record_id).cloned())
    }

    fn write_list(
        &self,
        record_id: &str,
        zone_field: &str,
        list: ComponentList,
        expected_revision: u64,
    ) -> Result<RecordSnapshot, StoreError> {
        let mut records = self.records.write();
        let record = records
            .get_mut(record_id)
            .ok_or_else(|| StoreError::NotFound(record_id.to_string()))?;

        if record.revision != expected_revision {
            return Err(StoreError::Conflict {
                id: record_id.to_string(),
                expected: expected_revision,
                found: record.revision,
            });
        }

        match &mut record.data {
            Value::Object(map) => {
                map.insert(zone_field.to_string(), Value::Array(list));
            }
            other => {
                let mut map = Map::new();
                map.insert(zone_field.to_string(), Value::Array(list));
                *other = Value::Object(map);
            }
        }
        record.revision += 1;
        Ok(record.clone())
    }

    fn publish(&self, record_id: &str) -> Result<RecordSnapshot, StoreError> {
        let mut records = self.records.write();
        let record = records
            .get_mut(record_id)
            .ok_or_else(|| StoreError::NotFound(record_id.to_string()))?;

        if let Value::Object(map) = &mut record.data {
            map.insert(
                "publishedAt".to_string(),
                Value::String(Utc::now().to_rfc3339()),
            );
        }
        record.revision += 1;
        Ok(record.clone())
    }
}
