use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use bookworm_core::model::AccountId;
use storage::demo::{demo_account, seed_sample_roster};
use storage::repository::{
    InMemoryRepository, Storage, StorageError, StudentRecord, StudentRepository,
};

use super::test_harness::{ViewHarness, setup_view_harness};

async fn settle(harness: &mut ViewHarness) -> String {
    harness.rebuild();
    for _ in 0..5 {
        harness.drive_async().await;
    }
    harness.render()
}

#[tokio::test]
async fn overview_renders_the_seeded_roster() {
    let repo = InMemoryRepository::new();
    seed_sample_roster(&repo);

    let mut harness = setup_view_harness(Storage::in_memory(repo), demo_account());
    let html = settle(&mut harness).await;

    assert!(html.contains("Emma Watson"), "missing student card: {html}");
    assert!(html.contains("John Smith"));
    assert!(html.contains("Reading Progress Dashboard"));
}

#[tokio::test]
async fn empty_roster_shows_the_empty_state() {
    let repo = InMemoryRepository::new();
    let account = AccountId::new(Uuid::from_u128(1));

    let mut harness = setup_view_harness(Storage::in_memory(repo), account);
    let html = settle(&mut harness).await;

    assert!(html.contains("No students yet."), "missing empty state: {html}");
}

struct FailingStudents;

#[async_trait]
impl StudentRepository for FailingStudents {
    async fn list_students(&self, _account: AccountId) -> Result<Vec<StudentRecord>, StorageError> {
        Err(StorageError::Connection("service offline".to_owned()))
    }
}

#[tokio::test]
async fn fetch_failure_shows_a_single_error_state() {
    let repo = InMemoryRepository::new();
    let storage = Storage {
        students: Arc::new(FailingStudents),
        student_books: Arc::new(repo.clone()),
        sessions: Arc::new(repo),
    };

    let mut harness = setup_view_harness(storage, AccountId::new(Uuid::from_u128(1)));
    let html = settle(&mut harness).await;

    assert!(
        html.contains("Could not load reading data"),
        "missing error state: {html}"
    );
}
