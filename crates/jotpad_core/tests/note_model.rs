use jotpad_core::{Note, NoteDraft};

#[test]
fn note_serialization_uses_expected_wire_fields() {
    let note = Note::new(3, "Tip", "Use the + button to add a new note.");

    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["title"], "Tip");
    assert_eq!(json["content"], "Use the + button to add a new note.");
    assert_eq!(json.as_object().unwrap().len(), 3);

    let decoded: Note = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, note);
}

#[test]
fn note_deserialize_rejects_negative_id() {
    let value = serde_json::json!({
        "id": -1,
        "title": "bad",
        "content": ""
    });

    assert!(serde_json::from_value::<Note>(value).is_err());
}

#[test]
fn default_draft_is_blank() {
    assert!(NoteDraft::default().is_blank());
}
