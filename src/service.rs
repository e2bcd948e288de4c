use serde_json::Value;
use tracing::{debug, info};

use crate::classify::component_tag;
use crate::config::CopyConfig;
use crate::copy::copy_components;
use crate::error::{CopyError, Result, StoreError, ValidationError};
use crate::list;
use crate::store::RecordStore;
use crate::types::{
    ComponentList, CopySummary, PublishSummary, RecordListing, RecordSections, RecordSnapshot,
};

/// Record-level operations over an external [`RecordStore`]: list records,
/// fetch a record's sections, copy sections between records, replace or
/// reorder a record's sections, and publish.
///
/// Writes use the revision read at the start of each operation; a concurrent
/// writer surfaces as [`StoreError::Conflict`], and callers retry by calling
/// the operation again.
pub struct CopyService<S: RecordStore> {
    store: S,
    config: CopyConfig,
}

impl<S: RecordStore> CopyService<S> {
    pub fn new(store: S, config: CopyConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &CopyConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn read_required(&self, record_id: &str) -> Result<RecordSnapshot> {
        self.store
            .read(record_id)?
            .ok_or_else(|| CopyError::Store(StoreError::NotFound(record_id.to_string())))
    }

    /// All records with their display titles and section counts.
    pub fn list_records(&self) -> Result<Vec<RecordListing>> {
        let records = self.store.list()?;
        Ok(records
            .into_iter()
            .map(|record| RecordListing {
                title: record.display_title(),
                section_count: record.sections(&self.config.zone_field).len(),
                record_id: record.id,
            })
            .collect())
    }

    /// The ordered section list of one record.
    pub fn record_sections(&self, record_id: &str) -> Result<RecordSections> {
        let record = self.read_required(record_id)?;
        let sections = record.sections(&self.config.zone_field);
        debug!(record_id, count = sections.len(), "fetched record sections");
        Ok(RecordSections {
            title: record.display_title(),
            record_id: record.id,
            sections,
        })
    }

    /// Copy sections from `source_id` into `target_id` at `insert_index`
    /// (append when `None`), returning the per-component manifests.
    /// `source_id == target_id` duplicates within the same record.
    pub fn copy_sections(
        &self,
        source_id: &str,
        target_id: &str,
        indices: Option<&[usize]>,
        insert_index: Option<usize>,
    ) -> Result<CopySummary> {
        let source = self.read_required(source_id)?;
        let target = self.read_required(target_id)?;

        let source_sections = source.sections(&self.config.zone_field);
        let target_sections = target.sections(&self.config.zone_field);

        let outcome = copy_components(&source_sections, &target_sections, indices, insert_index)?;
        let copied_count = outcome.manifest.len();
        let total_sections = outcome.list.len();

        let updated = self.store.write_list(
            &target.id,
            &self.config.zone_field,
            outcome.list,
            target.revision,
        )?;
        info!(
            source_id,
            target_id,
            copied = copied_count,
            total = total_sections,
            "copied sections"
        );

        Ok(CopySummary {
            target_title: updated.display_title(),
            target_id: updated.id,
            copied_count,
            total_sections,
            details: outcome.manifest,
        })
    }

    /// Replace a record's section list wholesale. Every item must be an
    /// object carrying a component tag.
    pub fn update_sections(
        &self,
        record_id: &str,
        sections: ComponentList,
    ) -> Result<RecordSections> {
        validate_sections(&sections)?;

        let record = self.read_required(record_id)?;
        let count = sections.len();
        let updated =
            self.store
                .write_list(&record.id, &self.config.zone_field, sections, record.revision)?;
        info!(record_id, count, "replaced record sections");

        Ok(RecordSections {
            title: updated.display_title(),
            sections: updated.sections(&self.config.zone_field),
            record_id: updated.id,
        })
    }

    /// Reorder one section: remove at `from`, reinsert at `to` (interpreted
    /// after removal).
    pub fn move_section(&self, record_id: &str, from: usize, to: usize) -> Result<RecordSections> {
        let record = self.read_required(record_id)?;
        let sections = record.sections(&self.config.zone_field);

        if from >= sections.len() {
            return Err(ValidationError {
                path: "from".to_string(),
                expected: format!("index < {}", sections.len()),
                received: from.to_string(),
            }
            .into());
        }

        let moved = list::move_item(&sections, from, to);
        let updated =
            self.store
                .write_list(&record.id, &self.config.zone_field, moved, record.revision)?;
        debug!(record_id, from, to, "moved section");

        Ok(RecordSections {
            title: updated.display_title(),
            sections: updated.sections(&self.config.zone_field),
            record_id: updated.id,
        })
    }

    /// Publish a record, returning its publish timestamp.
    pub fn publish(&self, record_id: &str) -> Result<PublishSummary> {
        let updated = self.store.publish(record_id)?;
        let published_at = updated
            .data
            .get("publishedAt")
            .and_then(Value::as_str)
            .map(str::to_string);
        info!(record_id, "published record");

        Ok(PublishSummary {
            title: updated.display_title(),
            record_id: updated.id,
            published_at,
        })
    }
}

fn validate_sections(sections: &[Value]) -> Result<()> {
    for (idx, section) in sections.iter().enumerate() {
        if !section.is_object() {
            return Err(ValidationError {
                path: format!("sections[{idx}]"),
                expected: "object".to_string(),
                received: json_type_name(section).to_string(),
            }
            .into());
        }
        if component_tag(section).map_or(true, str::is_empty) {
            return Err(ValidationError {
                path: format!("sections[{idx}].__component"),
                expected: "component tag".to_string(),
                received: "missing".to_string(),
            }
            .into());
        }
    }
    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
