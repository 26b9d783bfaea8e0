// File: ./src/model/display.rs
use chrono::{Datelike, NaiveDate};

use crate::model::dates::MONTH_NAMES;
use crate::model::item::HomeworkItem;

/// Rendering helpers for parsed homework records.
pub trait HomeworkDisplay {
    /// Canonical one-line form: `<subject>: <description> - <YYYY-MM-DD>`.
    ///
    /// This is the shape preview surfaces echo back to the user; feeding it
    /// through the homework parser again reproduces the deadline and an
    /// equivalent normalized subject.
    fn to_line(&self) -> String;
}

impl HomeworkDisplay for HomeworkItem {
    fn to_line(&self) -> String {
        format!(
            "{}: {} - {}",
            self.subject,
            self.description,
            self.deadline.format("%Y-%m-%d")
        )
    }
}

/// Short Dutch rendering of a deadline relative to `today`, the way
/// notification messages phrase it.
pub fn format_deadline_dutch(deadline: NaiveDate, today: NaiveDate) -> String {
    match (deadline - today).num_days() {
        0 => "vandaag".to_string(),
        1 => "morgen".to_string(),
        2 => "overmorgen".to_string(),
        _ => format!(
            "{} {}",
            deadline.day(),
            MONTH_NAMES[deadline.month0() as usize]
        ),
    }
}
