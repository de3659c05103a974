use chrono::{DateTime, Utc};

use crate::model::ids::SessionId;

/// One recorded reading event.
///
/// Immutable once fetched; pages and minutes are non-negative by type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingSession {
    id: SessionId,
    date: DateTime<Utc>,
    pages_read: u32,
    time_spent_mins: u32,
    notes: Option<String>,
}

impl ReadingSession {
    /// Creates a new `ReadingSession`. Empty or whitespace-only notes
    /// collapse to `None`.
    #[must_use]
    pub fn new(
        id: SessionId,
        date: DateTime<Utc>,
        pages_read: u32,
        time_spent_mins: u32,
        notes: Option<String>,
    ) -> Self {
        let notes = notes
            .map(|n| n.trim().to_owned())
            .filter(|n| !n.is_empty());

        Self {
            id,
            date,
            pages_read,
            time_spent_mins,
            notes,
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    #[must_use]
    pub fn pages_read(&self) -> u32 {
        self.pages_read
    }

    /// Minutes spent reading in this session.
    #[must_use]
    pub fn time_spent_mins(&self) -> u32 {
        self.time_spent_mins
    }

    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}
