//! Pure edit operations over an ordered component list. None of these mutate
//! their input; each returns a fresh list.

/// Sub-sequence at the given zero-based indices, in the order of `indices`
/// (not the order of `list`). Out-of-range indices are silently dropped.
pub fn select_by_indices<T: Clone>(list: &[T], indices: &[usize]) -> Vec<T> {
    indices
        .iter()
        .filter_map(|&idx| list.get(idx).cloned())
        .collect()
}

/// Insert `new_items` at `insert_index` when it falls within `[0, len]`,
/// preserving their relative order; any other index (or `None`) appends.
/// There is no separate append mode.
pub fn splice_insert<T: Clone>(list: &[T], new_items: Vec<T>, insert_index: Option<usize>) -> Vec<T> {
    let mut out = list.to_vec();
    match insert_index {
        Some(idx) if idx <= out.len() => {
            let tail = out.split_off(idx);
            out.extend(new_items);
            out.extend(tail);
        }
        _ => out.extend(new_items),
    }
    out
}

/// Remove the element at `from` and reinsert it at `to`, where `to` is
/// interpreted against the list after removal (standard splice semantics,
/// clamped to the end). Returns an unchanged copy when `from` is out of
/// range or equals `to`.
pub fn move_item<T: Clone>(list: &[T], from: usize, to: usize) -> Vec<T> {
    let mut out = list.to_vec();
    if from == to || from >= out.len() {
        return out;
    }
    let item = out.remove(from);
    let to = to.min(out.len());
    out.insert(to, item);
    out
}
