use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;

use bookworm_core::model::{AccountId, StudentBookId, StudentId};

use crate::repository::{
    ReadingSessionRepository, SessionRecord, Storage, StorageError, StudentBookRepository,
    StudentBookRecord, StudentRecord, StudentRepository,
};

mod mapping;

use mapping::{RawSessionRow, RawStudentBookRow, RawStudentRow};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RestInitError {
    #[error("invalid base url: {0:?}")]
    InvalidBaseUrl(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Generic query client for the remote data service.
///
/// Speaks plain REST: one collection per path, filters as query parameters,
/// JSON row arrays back. Knows nothing about the domain beyond the three
/// collections it reads.
#[derive(Clone, Debug)]
pub struct RestRepository {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl RestRepository {
    /// Build a client for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `RestInitError` if the URL is empty or the HTTP client cannot
    /// be constructed.
    pub fn connect(base_url: &str, api_key: Option<String>) -> Result<Self, RestInitError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(RestInitError::InvalidBaseUrl(base_url.to_owned()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: trimmed.to_owned(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    async fn get_rows<T: DeserializeOwned>(
        &self,
        collection: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, StorageError> {
        let url = format!("{}/{collection}", self.base_url);
        let mut request = self.client.get(url).query(query);
        if let Some(key) = &self.api_key {
            request = request.header("apikey", key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StorageError::NotFound);
        }
        if !status.is_success() {
            return Err(StorageError::Connection(format!(
                "unexpected status {status} from {collection}"
            )));
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| StorageError::Serialization(e.to_string()))
    }
}

#[async_trait]
impl StudentRepository for RestRepository {
    async fn list_students(&self, account: AccountId) -> Result<Vec<StudentRecord>, StorageError> {
        let rows: Vec<RawStudentRow> = self
            .get_rows("students", &[("user_id", format!("eq.{account}"))])
            .await?;
        rows.into_iter().map(mapping::student_from_row).collect()
    }
}

#[async_trait]
impl StudentBookRepository for RestRepository {
    async fn list_books_for_student(
        &self,
        student: StudentId,
    ) -> Result<Vec<StudentBookRecord>, StorageError> {
        let rows: Vec<RawStudentBookRow> = self
            .get_rows(
                "student_books",
                &[
                    ("student_id", format!("eq.{student}")),
                    ("select", "*,book:books(*)".to_owned()),
                ],
            )
            .await?;
        rows.into_iter().map(mapping::student_book_from_row).collect()
    }
}

#[async_trait]
impl ReadingSessionRepository for RestRepository {
    async fn list_sessions_for_book(
        &self,
        book: StudentBookId,
    ) -> Result<Vec<SessionRecord>, StorageError> {
        let rows: Vec<RawSessionRow> = self
            .get_rows(
                "sessions",
                &[
                    ("student_book_id", format!("eq.{book}")),
                    ("order", "date.desc".to_owned()),
                ],
            )
            .await?;
        rows.into_iter().map(mapping::session_from_row).collect()
    }
}

impl Storage {
    /// Build a `Storage` backed by the remote data service.
    ///
    /// # Errors
    ///
    /// Returns `RestInitError` if the client cannot be constructed.
    pub fn rest(base_url: &str, api_key: Option<String>) -> Result<Self, RestInitError> {
        let repo = RestRepository::connect(base_url, api_key)?;
        let students: Arc<dyn StudentRepository> = Arc::new(repo.clone());
        let student_books: Arc<dyn StudentBookRepository> = Arc::new(repo.clone());
        let sessions: Arc<dyn ReadingSessionRepository> = Arc::new(repo);
        Ok(Self {
            students,
            student_books,
            sessions,
        })
    }
}
