use teatime_core::{FsNoteStore, NoteStore, PeriodCategory, StoreError};
use tempfile::TempDir;

fn open_store() -> (TempDir, FsNoteStore) {
    let temp = tempfile::tempdir().unwrap();
    let store = FsNoteStore::open(temp.path().join("teatime")).unwrap();
    (temp, store)
}

#[test]
fn missing_note_reads_as_empty_text() {
    let (_temp, store) = open_store();
    store.create_project("work").unwrap();

    let content = store
        .read_note("work", PeriodCategory::Daily, "2025-01-13")
        .unwrap();
    assert!(content.is_empty());
    assert!(!store.note_exists("work", PeriodCategory::Daily, "2025-01-13"));
}

#[test]
fn write_then_read_replaces_full_content() {
    let (_temp, store) = open_store();
    store
        .write_note("work", PeriodCategory::Weekly, "2025-W03", "first draft")
        .unwrap();
    store
        .write_note("work", PeriodCategory::Weekly, "2025-W03", "final")
        .unwrap();

    assert!(store.note_exists("work", PeriodCategory::Weekly, "2025-W03"));
    assert_eq!(
        store
            .read_note("work", PeriodCategory::Weekly, "2025-W03")
            .unwrap(),
        "final"
    );
    let on_disk = store.root().join("work").join("weeks").join("2025-W03.md");
    assert_eq!(std::fs::read_to_string(on_disk).unwrap(), "final");
}

#[test]
fn list_notes_is_descending_and_ignores_non_markdown() {
    let (_temp, store) = open_store();
    for day in ["2025-01-13", "2025-01-20", "2024-12-31"] {
        store
            .write_note("work", PeriodCategory::Daily, day, "x")
            .unwrap();
    }
    let days_dir = store.root().join("work").join("days");
    std::fs::write(days_dir.join("scratch.txt"), "ignored").unwrap();
    std::fs::create_dir(days_dir.join("attachments.md")).unwrap();

    let notes = store.list_notes("work", PeriodCategory::Daily).unwrap();
    let names: Vec<&str> = notes.iter().map(|note| note.name.as_str()).collect();

    assert_eq!(names, vec!["2025-01-20", "2025-01-13", "2024-12-31"]);
    assert!(notes.iter().all(|note| note.category == PeriodCategory::Daily));
    assert_eq!(notes[0].path, days_dir.join("2025-01-20.md"));
}

#[test]
fn list_notes_creates_missing_directory() {
    let (_temp, store) = open_store();

    let notes = store.list_notes("fresh", PeriodCategory::Yearly).unwrap();
    assert!(notes.is_empty());
    assert!(store.root().join("fresh").join("years").is_dir());
}

#[test]
fn create_project_sanitizes_and_lays_out_categories() {
    let (_temp, store) = open_store();

    let name = store.create_project("  Side Quest! ").unwrap();
    assert_eq!(name, "side-quest");
    for category in PeriodCategory::ALL {
        assert!(store.root().join(&name).join(category.dir_name()).is_dir());
    }
    assert!(store.project_exists("side-quest"));

    let error = store.create_project("???").expect_err("empty after sanitize");
    assert!(matches!(error, StoreError::InvalidProjectName(_)));
}

#[test]
fn list_projects_is_sorted_and_hides_dot_directories() {
    let (_temp, store) = open_store();
    for name in ["zeta", "alpha", "mid"] {
        store.create_project(name).unwrap();
    }
    std::fs::create_dir_all(store.root().join(".logs")).unwrap();
    std::fs::write(store.root().join("stray.md"), "not a project").unwrap();

    assert_eq!(store.list_projects().unwrap(), vec!["alpha", "mid", "zeta"]);
}

#[test]
fn delete_project_and_note() {
    let (_temp, store) = open_store();
    store.create_project("tmp").unwrap();
    store
        .write_note("tmp", PeriodCategory::Monthly, "2025-01", "jan")
        .unwrap();

    store
        .delete_note("tmp", PeriodCategory::Monthly, "2025-01")
        .unwrap();
    assert!(!store.note_exists("tmp", PeriodCategory::Monthly, "2025-01"));
    assert!(matches!(
        store.delete_note("tmp", PeriodCategory::Monthly, "2025-01"),
        Err(StoreError::NoteNotFound(_))
    ));

    store.delete_project("tmp").unwrap();
    assert!(!store.project_exists("tmp"));
    assert!(matches!(
        store.delete_project("tmp"),
        Err(StoreError::ProjectNotFound(_))
    ));
}

#[test]
fn path_like_names_are_rejected() {
    let (_temp, store) = open_store();

    assert!(matches!(
        store.read_note("../escape", PeriodCategory::Daily, "2025-01-13"),
        Err(StoreError::InvalidName(_))
    ));
    assert!(matches!(
        store.write_note("work", PeriodCategory::Daily, "../../etc", "x"),
        Err(StoreError::InvalidName(_))
    ));
    assert!(!store.note_exists("work", PeriodCategory::Daily, ".."));
}

#[test]
fn category_serializes_in_snake_case() {
    let value = serde_json::to_value(PeriodCategory::Weekly).unwrap();
    assert_eq!(value, "weekly");
    let parsed: PeriodCategory = serde_json::from_str("\"yearly\"").unwrap();
    assert_eq!(parsed, PeriodCategory::Yearly);
}
