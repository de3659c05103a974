use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lifecycle of one book assignment.
///
/// The wire names are the kebab-case strings the data service stores
/// (`yet-to-start`, `reading`, `completed`, `paused`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadingStatus {
    YetToStart,
    Reading,
    Completed,
    Paused,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown reading status: {raw}")]
pub struct ParseStatusError {
    raw: String,
}

impl ReadingStatus {
    /// Canonical wire name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ReadingStatus::YetToStart => "yet-to-start",
            ReadingStatus::Reading => "reading",
            ReadingStatus::Completed => "completed",
            ReadingStatus::Paused => "paused",
        }
    }
}

impl fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReadingStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yet-to-start" => Ok(ReadingStatus::YetToStart),
            "reading" => Ok(ReadingStatus::Reading),
            "completed" => Ok(ReadingStatus::Completed),
            "paused" => Ok(ReadingStatus::Paused),
            _ => Err(ParseStatusError { raw: s.to_owned() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_roundtrips_through_wire_names() {
        for status in [
            ReadingStatus::YetToStart,
            ReadingStatus::Reading,
            ReadingStatus::Completed,
            ReadingStatus::Paused,
        ] {
            let parsed: ReadingStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn unknown_status_is_an_error() {
        let err = "finished".parse::<ReadingStatus>().unwrap_err();
        assert_eq!(err.to_string(), "unknown reading status: finished");
    }
}
