use serde_json::Value;

use crate::analyze::analyze;
use crate::classify::component_tag;
use crate::error::{CopyError, Result};
use crate::list::{select_by_indices, splice_insert};
use crate::sanitize::sanitize;
use crate::types::{CopyManifest, CopyOutcome};

/// Copy components from `source` into `target` at `insert_index`, reporting
/// what happened to each one.
///
/// `indices` selects source components in caller order; `None` (or an empty
/// slice) selects the entire source list. The selection is cloned before
/// sanitizing, so copying a list onto itself duplicates entries rather than
/// aliasing them. Nothing is persisted.
pub fn copy_components(
    source: &[Value],
    target: &[Value],
    indices: Option<&[usize]>,
    insert_index: Option<usize>,
) -> Result<CopyOutcome> {
    if source.is_empty() {
        return Err(CopyError::EmptySource);
    }

    let (selection, positions): (Vec<Value>, Vec<usize>) = match indices {
        Some(idx) if !idx.is_empty() => {
            let selection = select_by_indices(source, idx);
            if selection.is_empty() {
                return Err(CopyError::SelectionNotFound);
            }
            let positions = idx.iter().copied().filter(|&i| i < source.len()).collect();
            (selection, positions)
        }
        _ => (source.to_vec(), (0..source.len()).collect()),
    };

    let sanitized: Vec<Value> = selection.iter().map(sanitize).collect();

    let manifest: Vec<CopyManifest> = selection
        .iter()
        .zip(&sanitized)
        .zip(&positions)
        .map(|((original, clean), &index)| {
            let component_type = component_tag(original).unwrap_or("unknown").to_string();
            CopyManifest::new(index, component_type, analyze(original, clean))
        })
        .collect();

    let list = splice_insert(target, sanitized, insert_index);
    Ok(CopyOutcome { list, manifest })
}
