use taskpad_core::{init_logging, logging_status};
use tempfile::TempDir;

// Logging state is process-global, so everything that depends on init
// ordering lives in one test.
#[test]
fn init_is_idempotent_and_rejects_reconfiguration() {
    let dir = TempDir::new().unwrap();
    let dir_str = dir.path().to_str().unwrap();

    init_logging("info", dir_str).unwrap();
    init_logging("info", dir_str).unwrap();

    let (level, active_dir) = logging_status().unwrap();
    assert_eq!(level, "info");
    assert_eq!(active_dir, dir.path());

    let other = TempDir::new().unwrap();
    let err = init_logging("info", other.path().to_str().unwrap()).unwrap_err();
    assert!(err.contains("already initialized"));

    let err = init_logging("debug", dir_str).unwrap_err();
    assert!(err.contains("already initialized"));
}

#[test]
fn init_rejects_bad_inputs_before_touching_state() {
    assert!(init_logging("loud", "/tmp").unwrap_err().contains("unsupported log level"));
    assert!(init_logging("info", "").unwrap_err().contains("cannot be empty"));
    assert!(init_logging("info", "relative/logs")
        .unwrap_err()
        .contains("absolute path"));
}
