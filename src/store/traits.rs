use crate::error::StoreError;
use crate::types::{ComponentList, RecordSnapshot};

/// Record access as this crate consumes it: read a record, replace its
/// component list, publish it. Persistence, transactions, and ID resolution
/// all live behind this trait.
///
/// Writes are revision-checked (optimistic versioning): `write_list` takes
/// the revision the caller read and must fail with [`StoreError::Conflict`]
/// when the stored record has moved on, so two concurrent copies against the
/// same target cannot silently lose each other's work.
///
/// Implementors must be `Send + Sync` so they can be shared across threads.
pub trait RecordStore: Send + Sync {
    /// All records of the configured content type.
    fn list(&self) -> Result<Vec<RecordSnapshot>, StoreError>;

    /// Fetch one record. `Ok(None)` when the id does not resolve.
    fn read(&self, record_id: &str) -> Result<Option<RecordSnapshot>, StoreError>;

    /// Replace the record's `zone_field` with `list`, provided the stored
    /// revision still equals `expected_revision`. Returns the new snapshot.
    fn write_list(
        &self,
        record_id: &str,
        zone_field: &str,
        list: ComponentList,
        expected_revision: u64,
    ) -> Result<RecordSnapshot, StoreError>;

    /// Publish the record, stamping its publish timestamp.
    fn publish(&self, record_id: &str) -> Result<RecordSnapshot, StoreError>;
}
