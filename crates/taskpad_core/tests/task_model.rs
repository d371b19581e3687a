use taskpad_core::{normalize_task_text, TaskItem, TaskValidationError};
use uuid::Uuid;

#[test]
fn task_new_sets_defaults() {
    let task = TaskItem::new("buy milk");

    assert!(!task.id.is_nil());
    assert_eq!(task.text, "buy milk");
    assert!(!task.completed);
}

#[test]
fn with_id_keeps_caller_identity() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let task = TaskItem::with_id(id, "fixed");

    assert_eq!(task.id, id);
    assert!(!task.completed);
}

#[test]
fn normalize_trims_surrounding_whitespace() {
    assert_eq!(normalize_task_text("  buy milk  ").unwrap(), "buy milk");
    assert_eq!(normalize_task_text("x").unwrap(), "x");
}

#[test]
fn normalize_rejects_empty_and_whitespace_only() {
    assert_eq!(
        normalize_task_text("").unwrap_err(),
        TaskValidationError::EmptyText
    );
    assert_eq!(
        normalize_task_text("   ").unwrap_err(),
        TaskValidationError::EmptyText
    );
    assert_eq!(
        normalize_task_text("\t\n").unwrap_err(),
        TaskValidationError::EmptyText
    );
}

#[test]
fn validation_error_has_user_facing_message() {
    assert_eq!(
        TaskValidationError::EmptyText.to_string(),
        "task text must not be empty"
    );
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut task = TaskItem::with_id(id, "ship release");
    task.completed = true;

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["text"], "ship release");
    assert_eq!(json["completed"], true);

    let decoded: TaskItem = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}
