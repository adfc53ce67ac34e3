//! File-backed storage adapter tests.

use camino::Utf8Path;
use rstest::{fixture, rstest};
use tempfile::TempDir;

use super::support::FixedClock;
use crate::task::{
    adapters::file::{DEFAULT_STORAGE_KEY, FileTaskStorage},
    domain::{NewTask, Priority, Task, TaskStatus},
    ports::{TaskStorage, TaskStorageError},
};

#[fixture]
fn temp_dir() -> TempDir {
    TempDir::new().expect("create temporary directory")
}

fn storage_in(dir: &TempDir) -> FileTaskStorage {
    let path = Utf8Path::from_path(dir.path()).expect("temporary path is UTF-8");
    FileTaskStorage::open(path, DEFAULT_STORAGE_KEY).expect("open storage directory")
}

fn sample_tasks() -> Vec<Task> {
    let clock = FixedClock::at("2024-02-01T08:30:00Z");
    vec![
        Task::new(
            NewTask::new("Invoice run", 1500.0, 3.0)
                .expect("valid payload")
                .with_priority(Priority::High)
                .with_status(TaskStatus::Done)
                .with_notes("paid in full"),
            &clock,
        ),
        Task::new(
            NewTask::new("Follow-up", 0.0, 0.5).expect("valid payload"),
            &clock,
        ),
    ]
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_blob_loads_as_empty(temp_dir: TempDir) {
    let storage = storage_in(&temp_dir);

    let tasks = storage.load().await.expect("load should succeed");

    assert!(tasks.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn saved_collection_loads_back_unchanged(temp_dir: TempDir) {
    let storage = storage_in(&temp_dir);
    let tasks = sample_tasks();

    storage.save(&tasks).await.expect("save should succeed");
    let loaded = storage.load().await.expect("load should succeed");

    assert_eq!(loaded, tasks);
    assert!(temp_dir.path().join("tasks.json").is_file());
    assert!(!temp_dir.path().join(".tasks.json.tmp").exists());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn later_save_replaces_earlier_one(temp_dir: TempDir) {
    let storage = storage_in(&temp_dir);
    let mut tasks = sample_tasks();
    storage.save(&tasks).await.expect("first save should succeed");

    tasks.truncate(1);
    storage.save(&tasks).await.expect("second save should succeed");

    assert_eq!(storage.load().await.expect("load should succeed"), tasks);
}

#[rstest]
#[case::whitespace("  \n")]
#[case::empty("")]
#[tokio::test(flavor = "multi_thread")]
async fn blank_blob_loads_as_empty(temp_dir: TempDir, #[case] content: &str) {
    std::fs::write(temp_dir.path().join("tasks.json"), content).expect("seed blob");
    let storage = storage_in(&temp_dir);

    let tasks = storage.load().await.expect("load should succeed");

    assert!(tasks.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn malformed_blob_is_a_serialization_error(temp_dir: TempDir) {
    std::fs::write(temp_dir.path().join("tasks.json"), "{not json").expect("seed blob");
    let storage = storage_in(&temp_dir);

    let err = storage.load().await.expect_err("load should fail");

    assert!(matches!(err, TaskStorageError::Serialization(_)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clear_removes_blob_and_is_idempotent(temp_dir: TempDir) {
    let storage = storage_in(&temp_dir);
    storage.save(&sample_tasks()).await.expect("save should succeed");

    storage.clear().await.expect("first clear should succeed");
    storage.clear().await.expect("second clear should succeed");

    assert!(storage.load().await.expect("load should succeed").is_empty());
}

#[rstest]
#[case::empty("")]
#[case::blank("   ")]
#[case::nested("nested/tasks")]
fn invalid_keys_are_rejected(temp_dir: TempDir, #[case] key: &str) {
    let path = Utf8Path::from_path(temp_dir.path()).expect("temporary path is UTF-8");

    let err = FileTaskStorage::open(path, key).expect_err("key should be rejected");

    assert!(matches!(
        err,
        TaskStorageError::Io(ref io) if io.kind() == std::io::ErrorKind::InvalidInput
    ));
}

#[rstest]
fn custom_key_names_the_blob(temp_dir: TempDir) {
    let path = Utf8Path::from_path(temp_dir.path()).expect("temporary path is UTF-8");

    let storage = FileTaskStorage::open(path, "board").expect("open storage directory");

    assert_eq!(storage.file_name(), "board.json");
}
