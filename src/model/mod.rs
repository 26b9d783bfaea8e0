// File: ./src/model/mod.rs
pub mod dates;
pub mod display;
pub mod item;
pub mod parser;
pub mod schedule;
pub mod subjects;

pub use item::{HomeworkItem, LessonItem};
