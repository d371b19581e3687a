use std::collections::HashSet;
use taskpad_core::{TaskStore, TaskValidationError};
use uuid::Uuid;

#[test]
fn add_appends_open_tasks_in_insertion_order() {
    let mut store = TaskStore::new();
    store.add("one").unwrap();
    store.add("two").unwrap();
    store.add("three").unwrap();

    let texts: Vec<&str> = store.tasks().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["one", "two", "three"]);
    assert!(store.tasks().iter().all(|t| !t.completed));
    assert_eq!(store.len(), 3);
}

#[test]
fn add_trims_input_before_storing() {
    let mut store = TaskStore::new();
    let id = store.add("  buy milk  ").unwrap();

    assert_eq!(store.get(id).unwrap().text, "buy milk");
}

#[test]
fn add_rejects_whitespace_only_input_without_mutation() {
    let mut store = TaskStore::new();
    store.add("keep me").unwrap();

    assert_eq!(store.add("").unwrap_err(), TaskValidationError::EmptyText);
    assert_eq!(store.add("   ").unwrap_err(), TaskValidationError::EmptyText);
    assert_eq!(store.len(), 1);
}

#[test]
fn ids_are_unique_across_rapid_adds() {
    let mut store = TaskStore::new();
    let mut seen = HashSet::new();
    for i in 0..100 {
        let id = store.add(format!("task {i}").as_str()).unwrap();
        assert!(seen.insert(id));
    }
}

#[test]
fn toggle_marks_exactly_one_task_completed() {
    let mut store = TaskStore::new();
    let a = store.add("a").unwrap();
    let b = store.add("b").unwrap();

    store.toggle_complete(a);

    assert!(store.get(a).unwrap().completed);
    assert!(!store.get(b).unwrap().completed);
}

#[test]
fn toggle_twice_restores_original_flag() {
    let mut store = TaskStore::new();
    let id = store.add("flip me").unwrap();

    store.toggle_complete(id);
    store.toggle_complete(id);

    assert!(!store.get(id).unwrap().completed);
}

#[test]
fn remove_keeps_relative_order_of_survivors() {
    let mut store = TaskStore::new();
    let a = store.add("a").unwrap();
    store.add("b").unwrap();
    store.add("c").unwrap();

    store.remove(a);

    let texts: Vec<&str> = store.tasks().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["b", "c"]);
    assert!(store.get(a).is_none());
}

#[test]
fn mutations_on_absent_id_are_silent_noops() {
    let mut store = TaskStore::new();
    store.add("only").unwrap();
    let ghost = Uuid::new_v4();
    let before = store.revision();

    store.remove(ghost);
    store.toggle_complete(ghost);
    store.update_text(ghost, "never lands");

    assert_eq!(store.len(), 1);
    assert_eq!(store.tasks()[0].text, "only");
    assert_eq!(store.revision(), before);
}

#[test]
fn update_text_replaces_verbatim_without_validation() {
    let mut store = TaskStore::new();
    let id = store.add("draft").unwrap();

    // Validation is the edit flow's job; the store stores what it is given.
    store.update_text(id, "  padded  ");

    assert_eq!(store.get(id).unwrap().text, "  padded  ");
}

#[test]
fn edit_and_toggle_do_not_reorder() {
    let mut store = TaskStore::new();
    let a = store.add("a").unwrap();
    let b = store.add("b").unwrap();

    store.toggle_complete(b);
    store.update_text(a, "a2");

    let ids: Vec<_> = store.tasks().iter().map(|t| t.id).collect();
    assert_eq!(ids, [a, b]);
}

#[test]
fn revision_advances_only_on_effective_mutation() {
    let mut store = TaskStore::new();
    assert_eq!(store.revision(), 0);

    let id = store.add("one").unwrap();
    assert_eq!(store.revision(), 1);

    let _ = store.add("  ");
    assert_eq!(store.revision(), 1);

    store.toggle_complete(id);
    assert_eq!(store.revision(), 2);

    store.remove(id);
    assert_eq!(store.revision(), 3);

    store.remove(id);
    assert_eq!(store.revision(), 3);
}
