use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use bookworm_core::model::{BookId, SessionId, StudentBookId, StudentId};

use crate::repository::{
    BookRecord, SessionRecord, StorageError, StudentBookRecord, StudentRecord,
};

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

/// Parse a wire timestamp: RFC 3339, or a bare `YYYY-MM-DD` date column
/// (taken as midnight UTC).
fn parse_timestamp(field: &'static str, raw: &str) -> Result<DateTime<Utc>, StorageError> {
    if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
        return Ok(t.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|d| {
            d.and_hms_opt(0, 0, 0)
                .unwrap_or_default()
                .and_utc()
        })
        .map_err(|_| StorageError::Serialization(format!("invalid {field}: {raw}")))
}

fn parse_optional_timestamp(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<DateTime<Utc>>, StorageError> {
    raw.map(|value| parse_timestamp(field, value)).transpose()
}

fn count_from_i64(field: &'static str, v: i64) -> Result<u32, StorageError> {
    u32::try_from(v).map_err(|_| StorageError::Serialization(format!("invalid {field}: {v}")))
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawStudentRow {
    pub id: Uuid,
    pub name: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawBookRow {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub cover: Option<String>,
    pub total_pages: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawStudentBookRow {
    pub id: Uuid,
    pub student_id: Uuid,
    pub book: RawBookRow,
    pub status: String,
    pub progress: i64,
    pub last_read_date: Option<String>,
    pub assigned_date: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSessionRow {
    pub id: Uuid,
    pub student_book_id: Uuid,
    pub date: String,
    pub pages_read: i64,
    pub time_spent: i64,
    pub notes: Option<String>,
}

pub(crate) fn student_from_row(row: RawStudentRow) -> Result<StudentRecord, StorageError> {
    Ok(StudentRecord {
        id: StudentId::new(row.id),
        name: row.name,
        avatar: row.avatar,
    })
}

pub(crate) fn student_book_from_row(
    row: RawStudentBookRow,
) -> Result<StudentBookRecord, StorageError> {
    let status = row.status.parse().map_err(ser)?;

    let progress = u8::try_from(row.progress)
        .map_err(|_| StorageError::Serialization(format!("invalid progress: {}", row.progress)))?;

    let last_read_date = parse_optional_timestamp("last_read_date", row.last_read_date.as_deref())?;

    // A missing assigned_date falls back to the row's creation timestamp.
    let assigned_raw = row.assigned_date.as_deref().unwrap_or(&row.created_at);
    let assigned_date = parse_timestamp("assigned_date", assigned_raw)?;

    Ok(StudentBookRecord {
        id: StudentBookId::new(row.id),
        student_id: StudentId::new(row.student_id),
        book: BookRecord {
            id: BookId::new(row.book.id),
            title: row.book.title,
            author: row.book.author,
            cover: row.book.cover.unwrap_or_default(),
            total_pages: row.book.total_pages,
        },
        status,
        progress,
        last_read_date,
        assigned_date,
    })
}

pub(crate) fn session_from_row(row: RawSessionRow) -> Result<SessionRecord, StorageError> {
    Ok(SessionRecord {
        id: SessionId::new(row.id),
        student_book_id: StudentBookId::new(row.student_book_id),
        date: parse_timestamp("date", &row.date)?,
        pages_read: count_from_i64("pages_read", row.pages_read)?,
        time_spent_mins: count_from_i64("time_spent", row.time_spent)?,
        notes: row.notes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookworm_core::model::ReadingStatus;
    use serde_json::json;

    fn book_row() -> serde_json::Value {
        json!({
            "id": "00000000-0000-0000-0000-000000000001",
            "title": "To Kill a Mockingbird",
            "author": "Harper Lee",
            "cover": null,
            "total_pages": 376
        })
    }

    #[test]
    fn null_cover_becomes_empty_string() {
        let row: RawStudentBookRow = serde_json::from_value(json!({
            "id": "00000000-0000-0000-0000-000000000002",
            "student_id": "00000000-0000-0000-0000-000000000003",
            "book": book_row(),
            "status": "reading",
            "progress": 65,
            "last_read_date": "2024-06-14",
            "assigned_date": "2024-06-01",
            "created_at": "2024-05-30T08:00:00Z"
        }))
        .unwrap();

        let record = student_book_from_row(row).unwrap();
        assert_eq!(record.book.cover, "");
        assert_eq!(record.status, ReadingStatus::Reading);
        assert_eq!(record.progress, 65);
    }

    #[test]
    fn missing_assigned_date_falls_back_to_created_at() {
        let row: RawStudentBookRow = serde_json::from_value(json!({
            "id": "00000000-0000-0000-0000-000000000002",
            "student_id": "00000000-0000-0000-0000-000000000003",
            "book": book_row(),
            "status": "completed",
            "progress": 100,
            "last_read_date": null,
            "assigned_date": null,
            "created_at": "2024-05-30T08:00:00Z"
        }))
        .unwrap();

        let record = student_book_from_row(row).unwrap();
        assert_eq!(
            record.assigned_date,
            parse_timestamp("created_at", "2024-05-30T08:00:00Z").unwrap()
        );
        assert_eq!(record.last_read_date, None);
    }

    #[test]
    fn unknown_status_is_a_serialization_error() {
        let row: RawStudentBookRow = serde_json::from_value(json!({
            "id": "00000000-0000-0000-0000-000000000002",
            "student_id": "00000000-0000-0000-0000-000000000003",
            "book": book_row(),
            "status": "finished",
            "progress": 100,
            "last_read_date": null,
            "assigned_date": null,
            "created_at": "2024-05-30T08:00:00Z"
        }))
        .unwrap();

        let err = student_book_from_row(row).unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }

    #[test]
    fn bad_date_is_a_serialization_error() {
        let row: RawSessionRow = serde_json::from_value(json!({
            "id": "00000000-0000-0000-0000-000000000004",
            "student_book_id": "00000000-0000-0000-0000-000000000002",
            "date": "last tuesday",
            "pages_read": 25,
            "time_spent": 45,
            "notes": "Great progress today!"
        }))
        .unwrap();

        let err = session_from_row(row).unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }

    #[test]
    fn session_row_maps_fields() {
        let row: RawSessionRow = serde_json::from_value(json!({
            "id": "00000000-0000-0000-0000-000000000004",
            "student_book_id": "00000000-0000-0000-0000-000000000002",
            "date": "2024-06-14T18:30:00Z",
            "pages_read": 25,
            "time_spent": 45,
            "notes": null
        }))
        .unwrap();

        let record = session_from_row(row).unwrap();
        assert_eq!(record.pages_read, 25);
        assert_eq!(record.time_spent_mins, 45);
        assert_eq!(record.notes, None);
    }

    #[test]
    fn negative_pages_are_rejected() {
        let row: RawSessionRow = serde_json::from_value(json!({
            "id": "00000000-0000-0000-0000-000000000004",
            "student_book_id": "00000000-0000-0000-0000-000000000002",
            "date": "2024-06-14",
            "pages_read": -3,
            "time_spent": 45,
            "notes": null
        }))
        .unwrap();

        let err = session_from_row(row).unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }
}
