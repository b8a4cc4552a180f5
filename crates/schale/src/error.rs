//! Domain errors for schedule data and calendar input.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid month '{0}'. Expected YYYY-MM")]
    InvalidMonth(String),

    #[error("Invalid week start '{0}'. Expected a weekday name such as 'sun' or 'mon'")]
    InvalidWeekStart(String),

    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    #[error("Duplicate event id {0}")]
    DuplicateId(u32),

    #[error("Event {id} ends before it starts")]
    InvertedRange { id: u32 },
}
