use component_copy::config::CopyConfig;
use component_copy::error::{CopyError, StoreError};
use component_copy::service::CopyService;
use component_copy::store::{MemoryStore, RecordStore};
use serde_json::{json, Value};

// ============================================================================
// Helpers
// ============================================================================

fn hero(title: &str) -> Value {
    json!({
        "__component": "sections.hero",
        "id": 7,
        "title": title,
        "image": { "id": 3, "mime": "image/png", "url": "/x.png" }
    })
}

fn service_with_two_pages() -> CopyService<MemoryStore> {
    let store = MemoryStore::new();
    store.insert(
        "home",
        json!({ "title": "Home", "sections": [hero("Welcome"), hero("About")] }),
    );
    store.insert("landing", json!({ "title": "Landing", "sections": [] }));
    CopyService::new(store, CopyConfig::default())
}

// ============================================================================
// Listing and reading
// ============================================================================

#[test]
fn list_records_reports_titles_and_counts() {
    let service = service_with_two_pages();
    let listings = service.list_records().unwrap();
    assert_eq!(listings.len(), 2);

    let home = listings.iter().find(|l| l.record_id == "home").unwrap();
    assert_eq!(home.title, "Home");
    assert_eq!(home.section_count, 2);

    let landing = listings.iter().find(|l| l.record_id == "landing").unwrap();
    assert_eq!(landing.section_count, 0);
}

#[test]
fn record_sections_returns_ordered_list() {
    let service = service_with_two_pages();
    let page = service.record_sections("home").unwrap();
    assert_eq!(page.title, "Home");
    assert_eq!(page.sections.len(), 2);
    assert_eq!(page.sections[0]["title"], "Welcome");
    assert_eq!(page.sections[1]["title"], "About");
}

#[test]
fn record_sections_missing_record_is_not_found() {
    let service = service_with_two_pages();
    let err = service.record_sections("nope").unwrap_err();
    assert!(matches!(err, CopyError::Store(StoreError::NotFound(_))));
}

// ============================================================================
// Copying between records
// ============================================================================

#[test]
fn copy_sections_writes_sanitized_list_to_target() {
    let service = service_with_two_pages();
    let summary = service.copy_sections("home", "landing", Some(&[0]), None).unwrap();

    assert_eq!(summary.target_id, "landing");
    assert_eq!(summary.target_title, "Landing");
    assert_eq!(summary.copied_count, 1);
    assert_eq!(summary.total_sections, 1);
    assert_eq!(summary.details[0].component_type, "sections.hero");
    assert_eq!(summary.details[0].total_removed, 1);

    let landing = service.record_sections("landing").unwrap();
    assert_eq!(landing.sections.len(), 1);
    assert!(landing.sections[0].get("id").is_none());
    assert_eq!(landing.sections[0]["title"], "Welcome");
}

#[test]
fn copy_sections_inserts_at_position() {
    let service = service_with_two_pages();
    service.copy_sections("home", "landing", None, None).unwrap();
    // Landing now has [Welcome, About]; insert Welcome again at index 1.
    let summary = service
        .copy_sections("home", "landing", Some(&[0]), Some(1))
        .unwrap();
    assert_eq!(summary.total_sections, 3);

    let landing = service.record_sections("landing").unwrap();
    assert_eq!(landing.sections[0]["title"], "Welcome");
    assert_eq!(landing.sections[1]["title"], "Welcome");
    assert_eq!(landing.sections[2]["title"], "About");
}

#[test]
fn copy_from_empty_source_fails() {
    let service = service_with_two_pages();
    let err = service.copy_sections("landing", "home", None, None).unwrap_err();
    assert!(matches!(err, CopyError::EmptySource));
}

#[test]
fn copy_with_unresolvable_selection_fails() {
    let service = service_with_two_pages();
    let err = service
        .copy_sections("home", "landing", Some(&[9]), None)
        .unwrap_err();
    assert!(matches!(err, CopyError::SelectionNotFound));
}

#[test]
fn copy_missing_source_is_not_found() {
    let service = service_with_two_pages();
    let err = service.copy_sections("nope", "landing", None, None).unwrap_err();
    assert!(matches!(err, CopyError::Store(StoreError::NotFound(_))));
}

#[test]
fn self_copy_duplicates_within_record() {
    let service = service_with_two_pages();
    let summary = service.copy_sections("home", "home", Some(&[0]), None).unwrap();
    assert_eq!(summary.total_sections, 3);

    let home = service.record_sections("home").unwrap();
    assert_eq!(home.sections[0]["id"], 7);
    assert!(home.sections[2].get("id").is_none());
    assert_eq!(home.sections[2]["title"], "Welcome");
}

// ============================================================================
// Updating and reordering
// ============================================================================

#[test]
fn update_sections_replaces_list() {
    let service = service_with_two_pages();
    let updated = service
        .update_sections("home", vec![json!({ "__component": "sections.text", "body": "solo" })])
        .unwrap();
    assert_eq!(updated.sections.len(), 1);
    assert_eq!(updated.sections[0]["body"], "solo");
}

#[test]
fn update_sections_rejects_untagged_item() {
    let service = service_with_two_pages();
    let err = service
        .update_sections("home", vec![json!({ "body": "no tag" })])
        .unwrap_err();
    match err {
        CopyError::Validation(v) => assert_eq!(v.path, "sections[0].__component"),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn update_sections_rejects_non_object_item() {
    let service = service_with_two_pages();
    let err = service
        .update_sections("home", vec![json!({ "__component": "a.b" }), json!("scalar")])
        .unwrap_err();
    match err {
        CopyError::Validation(v) => {
            assert_eq!(v.path, "sections[1]");
            assert_eq!(v.received, "string");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn move_section_reorders() {
    let service = service_with_two_pages();
    let moved = service.move_section("home", 0, 1).unwrap();
    assert_eq!(moved.sections[0]["title"], "About");
    assert_eq!(moved.sections[1]["title"], "Welcome");
}

#[test]
fn move_section_out_of_range_is_validation_error() {
    let service = service_with_two_pages();
    let err = service.move_section("home", 9, 0).unwrap_err();
    assert!(matches!(err, CopyError::Validation(_)));
}

// ============================================================================
// Publishing
// ============================================================================

#[test]
fn publish_stamps_timestamp() {
    let service = service_with_two_pages();
    let summary = service.publish("home").unwrap();
    assert_eq!(summary.record_id, "home");
    assert_eq!(summary.title, "Home");
    let stamp = summary.published_at.expect("published_at set");
    assert!(stamp.contains('T'), "not a timestamp: {stamp}");
}

#[test]
fn publish_missing_record_is_not_found() {
    let service = service_with_two_pages();
    let err = service.publish("nope").unwrap_err();
    assert!(matches!(err, CopyError::Store(StoreError::NotFound(_))));
}

// ============================================================================
// Optimistic versioning
// ============================================================================

#[test]
fn stale_revision_write_conflicts() {
    let store = MemoryStore::new();
    let snapshot = store.insert("p", json!({ "sections": [] }));

    // A concurrent writer bumps the revision.
    store
        .write_list("p", "sections", vec![json!({ "__component": "a.b" })], snapshot.revision)
        .unwrap();

    // Writing with the stale revision must fail, not silently overwrite.
    let err = store
        .write_list("p", "sections", Vec::new(), snapshot.revision)
        .unwrap_err();
    assert!(matches!(err, StoreError::Conflict { .. }));
}

#[test]
fn revision_advances_on_each_write() {
    let store = MemoryStore::new();
    let s0 = store.insert("p", json!({ "sections": [] }));
    let s1 = store.write_list("p", "sections", Vec::new(), s0.revision).unwrap();
    let s2 = store.write_list("p", "sections", Vec::new(), s1.revision).unwrap();
    assert!(s2.revision > s1.revision);
    assert!(s1.revision > s0.revision);
}
