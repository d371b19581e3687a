use taskpad_core::{EditSession, EditState, TaskStore};
use uuid::Uuid;

#[test]
fn begin_snapshots_current_text_as_draft() {
    let mut store = TaskStore::new();
    let id = store.add("original").unwrap();
    let mut session = EditSession::new();

    session.begin(&store, id);

    assert_eq!(
        session.state(),
        &EditState::Editing {
            task_id: id,
            draft: "original".to_string(),
        }
    );
}

#[test]
fn begin_on_absent_id_stays_idle() {
    let store = TaskStore::new();
    let mut session = EditSession::new();

    session.begin(&store, Uuid::new_v4());

    assert_eq!(session.state(), &EditState::Idle);
}

#[test]
fn confirm_applies_draft_and_closes() {
    let mut store = TaskStore::new();
    let id = store.add("X").unwrap();
    let mut session = EditSession::new();

    session.begin(&store, id);
    session.set_draft("Y");
    session.confirm(&mut store);

    assert_eq!(store.get(id).unwrap().text, "Y");
    assert_eq!(session.state(), &EditState::Idle);
}

#[test]
fn confirm_trims_draft_before_applying() {
    let mut store = TaskStore::new();
    let id = store.add("X").unwrap();
    let mut session = EditSession::new();

    session.begin(&store, id);
    session.set_draft("  Y  ");
    session.confirm(&mut store);

    assert_eq!(store.get(id).unwrap().text, "Y");
}

#[test]
fn confirm_with_whitespace_draft_keeps_dialog_open() {
    let mut store = TaskStore::new();
    let id = store.add("X").unwrap();
    let revision_before = store.revision();
    let mut session = EditSession::new();

    session.begin(&store, id);
    session.set_draft("   ");
    session.confirm(&mut store);

    // Dialog stays open, nothing is applied, no error is surfaced.
    assert!(matches!(session.state(), EditState::Editing { .. }));
    assert_eq!(store.get(id).unwrap().text, "X");
    assert_eq!(store.revision(), revision_before);
}

#[test]
fn cancel_discards_draft_unconditionally() {
    let mut store = TaskStore::new();
    let id = store.add("X").unwrap();
    let mut session = EditSession::new();

    session.begin(&store, id);
    session.set_draft("Z");
    session.cancel();

    assert_eq!(store.get(id).unwrap().text, "X");
    assert_eq!(session.state(), &EditState::Idle);
}

#[test]
fn draft_edits_never_touch_the_store() {
    let mut store = TaskStore::new();
    let id = store.add("X").unwrap();
    let revision_before = store.revision();
    let mut session = EditSession::new();

    session.begin(&store, id);
    session.set_draft("typing");
    session.set_draft("typing more");

    assert_eq!(store.get(id).unwrap().text, "X");
    assert_eq!(store.revision(), revision_before);
}

#[test]
fn set_draft_while_idle_is_a_noop() {
    let mut session = EditSession::new();

    session.set_draft("nowhere to go");

    assert_eq!(session.state(), &EditState::Idle);
}
