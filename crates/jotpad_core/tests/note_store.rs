use jotpad_core::{Note, NoteStore, StoreError};

fn ids(notes: &[Note]) -> Vec<u64> {
    notes.iter().map(|note| note.id).collect()
}

#[test]
fn add_assigns_increasing_ids_and_prepends() {
    let mut store = NoteStore::new();
    let first = store.add("A", "B").unwrap();
    let second = store.add("C", "D").unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(ids(&store.filter("")), vec![2, 1]);
}

#[test]
fn add_accepts_title_only_or_content_only() {
    let mut store = NoteStore::new();
    store.add("title only", "").unwrap();
    store.add("   ", "content only").unwrap();
    assert_eq!(store.len(), 2);
}

#[test]
fn add_allows_duplicate_titles() {
    let mut store = NoteStore::new();
    let first = store.add("Same", "one").unwrap();
    let second = store.add("Same", "two").unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(store.filter("same").len(), 2);
}

#[test]
fn add_stores_fields_untrimmed() {
    let mut store = NoteStore::new();
    let note = store.add("  padded ", "\tbody\n").unwrap();
    assert_eq!(note.title, "  padded ");
    assert_eq!(note.content, "\tbody\n");
}

#[test]
fn add_rejects_blank_drafts_without_touching_store() {
    let mut store = NoteStore::new();
    store.add("keep", "me").unwrap();
    let before = store.snapshot();

    assert_eq!(store.add("", ""), Err(StoreError::ValidationFailed));
    assert_eq!(store.add("  ", "\n\t"), Err(StoreError::ValidationFailed));

    assert_eq!(store.snapshot(), before);
    assert_eq!(store.next_id(), 2);
}

#[test]
fn update_changes_only_target_note_and_keeps_position() {
    let mut store = NoteStore::new();
    store.add("one", "1").unwrap();
    store.add("two", "2").unwrap();
    store.add("three", "3").unwrap();

    let updated = store.update(2, "two!", "22").unwrap();
    assert_eq!(updated, Note::new(2, "two!", "22"));

    let listed = store.filter("");
    assert_eq!(ids(&listed), vec![3, 2, 1]);
    assert_eq!(listed[0], Note::new(3, "three", "3"));
    assert_eq!(listed[1], Note::new(2, "two!", "22"));
    assert_eq!(listed[2], Note::new(1, "one", "1"));
}

#[test]
fn update_unknown_id_reports_not_found_and_changes_nothing() {
    let mut store = NoteStore::new();
    store.add("one", "1").unwrap();
    let before = store.snapshot();

    assert_eq!(store.update(42, "x", "y"), Err(StoreError::NotFound(42)));
    assert_eq!(store.snapshot(), before);
}

#[test]
fn update_accepts_blank_fields() {
    let mut store = NoteStore::new();
    let note = store.add("title", "body").unwrap();
    let updated = store.update(note.id, "", "").unwrap();
    assert!(updated.title.is_empty());
    assert!(updated.content.is_empty());
    assert_eq!(store.len(), 1);
}

#[test]
fn delete_removes_exactly_one_note() {
    let mut store = NoteStore::new();
    store.add("one", "").unwrap();
    store.add("two", "").unwrap();
    store.add("three", "").unwrap();

    let removed = store.delete(2).unwrap();
    assert_eq!(removed.title, "two");
    assert_eq!(ids(&store.filter("")), vec![3, 1]);
    assert!(store.get(2).is_none());
}

#[test]
fn delete_unknown_id_reports_not_found_and_changes_nothing() {
    let mut store = NoteStore::new();
    store.add("one", "").unwrap();
    let before = store.snapshot();

    assert_eq!(store.delete(9), Err(StoreError::NotFound(9)));
    assert_eq!(store.snapshot(), before);
}

#[test]
fn delete_twice_reports_not_found_second_time() {
    let mut store = NoteStore::new();
    let note = store.add("one", "").unwrap();
    store.delete(note.id).unwrap();
    assert_eq!(store.delete(note.id), Err(StoreError::NotFound(note.id)));
    assert!(store.is_empty());
}

#[test]
fn ids_are_never_reused_after_delete() {
    let mut store = NoteStore::new();
    store.add("a", "").unwrap();
    store.add("b", "").unwrap();
    store.delete(2).unwrap();
    store.delete(1).unwrap();

    let next = store.add("c", "").unwrap();
    assert_eq!(next.id, 3);
}

#[test]
fn filter_matches_title_or_content_case_insensitively() {
    let mut store = NoteStore::new();
    store.add("Shopping", "milk, eggs").unwrap();
    store.add("Work", "Email the TEAM").unwrap();
    store.add("Ideas", "none yet").unwrap();

    let by_title = store.filter("SHOP");
    assert_eq!(ids(&by_title), vec![1]);

    let by_content = store.filter("team");
    assert_eq!(ids(&by_content), vec![2]);

    assert!(store.filter("nothing matches this").is_empty());
}

#[test]
fn filter_trims_query_and_blank_query_returns_everything() {
    let mut store = NoteStore::new();
    store.add("alpha", "").unwrap();
    store.add("beta", "").unwrap();

    assert_eq!(ids(&store.filter("   ")), vec![2, 1]);
    assert_eq!(ids(&store.filter("  Alpha  ")), vec![1]);
}

#[test]
fn filter_is_idempotent_without_mutation() {
    let mut store = NoteStore::new();
    store.add("alpha", "one").unwrap();
    store.add("beta", "two").unwrap();

    assert_eq!(store.filter("a"), store.filter("a"));
    assert_eq!(store.filter(""), store.filter(""));
}

#[test]
fn filter_returns_snapshot_unaffected_by_later_mutations() {
    let mut store = NoteStore::new();
    store.add("alpha", "").unwrap();
    let snapshot = store.filter("");

    store.update(1, "changed", "").unwrap();
    store.add("beta", "").unwrap();
    store.delete(1).unwrap();

    assert_eq!(snapshot, vec![Note::new(1, "alpha", "")]);
}

#[test]
fn welcome_tip_scenario() {
    let mut store = NoteStore::new();
    store.add("Welcome", "Start creating your notes!").unwrap();
    store
        .add("Tip", "Use the + button to add a new note.")
        .unwrap();

    let all = store.filter("");
    assert_eq!(ids(&all), vec![2, 1]);
    assert_eq!(all[0].title, "Tip");
    assert_eq!(all[1].title, "Welcome");

    let welcome = store.filter("welcome");
    assert_eq!(welcome.len(), 1);
    assert_eq!(welcome[0].title, "Welcome");

    store.delete(1).unwrap();
    let remaining = store.filter("");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].title, "Tip");
}

#[test]
fn update_keeps_position_scenario() {
    let mut store = NoteStore::new();
    assert_eq!(store.add("A", "B").unwrap().id, 1);
    assert_eq!(store.add("C", "D").unwrap().id, 2);
    store.update(1, "A2", "B2").unwrap();

    assert_eq!(
        store.filter(""),
        vec![Note::new(2, "C", "D"), Note::new(1, "A2", "B2")]
    );
}
