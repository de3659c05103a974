use bookworm_core::model::ReadingStatus;

/// Human label for a status badge.
#[must_use]
pub fn status_label(status: ReadingStatus) -> &'static str {
    match status {
        ReadingStatus::YetToStart => "yet to start",
        ReadingStatus::Reading => "reading",
        ReadingStatus::Completed => "completed",
        ReadingStatus::Paused => "paused",
    }
}

/// CSS class for a status badge. Exhaustive on purpose: a new status cannot
/// ship without display attributes.
#[must_use]
pub fn status_class(status: ReadingStatus) -> &'static str {
    match status {
        ReadingStatus::YetToStart => "badge badge-muted",
        ReadingStatus::Reading => "badge badge-reading",
        ReadingStatus::Completed => "badge badge-completed",
        ReadingStatus::Paused => "badge badge-paused",
    }
}
