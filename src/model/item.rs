// File: ./src/model/item.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sentinel subject used when a line yields no subject text at all.
pub const UNKNOWN_SUBJECT: &str = "Onbekend vak";

/// One homework assignment recovered from a pasted block of text.
///
/// `deadline` always carries a value: lines without any recognizable date
/// phrase default to the day after the reference instant, so every item is
/// reviewable rather than half-filled.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HomeworkItem {
    pub subject: String,
    pub description: String,
    pub deadline: NaiveDate,
}

/// One lesson in a weekly class schedule.
///
/// `day_of_week` follows 0 = zondag .. 6 = zaterdag. `time_start` and
/// `time_end` are zero-padded `HH:MM` strings; no date is attached because
/// the schedule repeats weekly.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct LessonItem {
    pub day_of_week: u8,
    pub time_start: String,
    pub time_end: String,
    pub subject: String,
    pub teacher_name: Option<String>,
    pub location: Option<String>,
}
