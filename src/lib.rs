// Crate root library declaration and module exports.
pub mod model;

pub use model::dates::parse_deadline;
pub use model::display::{HomeworkDisplay, format_deadline_dutch};
pub use model::item::{HomeworkItem, LessonItem, UNKNOWN_SUBJECT};
pub use model::parser::{parse_homework_text, parse_homework_text_at};
pub use model::schedule::parse_schedule_text;
pub use model::subjects::normalize_subject;
