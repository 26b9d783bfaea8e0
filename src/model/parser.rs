// File: ./src/model/parser.rs
use chrono::{Duration, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::dates::{DEADLINE_WORDS, RELATIVE_DAYS, WEEKDAYS, parse_deadline};
use crate::model::item::{HomeworkItem, UNKNOWN_SUBJECT};
use crate::model::subjects::normalize_subject;

static BULLET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*•●]\s*").unwrap());
static NUMBERING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+[.)]\s*").unwrap());

// "Engels: opdracht" or "Engels - opdracht"; the prefix stops at the first
// digit, so "Werkblad 5 maken - morgen" is not split.
static SUBJECT_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z\s]+)[:：\-]\s*(.+)$").unwrap());

// Every date/weekday/introducer token, removed from the retained
// description. Word-bounded so "voor" does not eat into "voorbereiden".
static STRIP_RE: Lazy<Regex> = Lazy::new(|| {
    let mut words: Vec<&str> = vec!["volgende week"];
    words.extend_from_slice(DEADLINE_WORDS);
    words.extend(RELATIVE_DAYS.iter().map(|&(word, _)| word));
    words.extend(WEEKDAYS.iter().map(|&(word, _)| word));
    Regex::new(&format!(r"(?i)\b(?:{})\b", words.join("|"))).unwrap()
});

static TRAILING_SEP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*[-:]\s*$").unwrap());

/// Splits a pasted block into candidate lines: newline-separated, trimmed,
/// with a single leading bullet or numeric list marker removed. Lines that
/// end up empty are dropped.
pub(crate) fn segment(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let line = BULLET_RE.replace(line, "");
            let line = NUMBERING_RE.replace(&line, "");
            line.trim().to_string()
        })
        .filter(|line| !line.is_empty())
        .collect()
}

/// Parses one segmented line. Never fails: a line without recognizable
/// structure still yields an item with defaulted fields for human review.
fn parse_line(line: &str, today: NaiveDate) -> HomeworkItem {
    let (subject, description) = match SUBJECT_PREFIX_RE.captures(line) {
        Some(caps) => (
            normalize_subject(&caps[1]),
            caps[2].trim().to_string(),
        ),
        None => (normalize_subject(line), line.to_string()),
    };

    // The deadline phrase may sit anywhere, including before the subject
    // marker, so resolution runs against the full original line.
    let deadline =
        parse_deadline(line, today).unwrap_or_else(|| today + Duration::days(1));

    let cleaned = strip_date_phrases(&description);
    let description = if cleaned.is_empty() { description } else { cleaned };

    let subject = if subject.is_empty() {
        UNKNOWN_SUBJECT.to_string()
    } else {
        subject
    };

    HomeworkItem {
        subject,
        description,
        deadline,
    }
}

fn strip_date_phrases(description: &str) -> String {
    let stripped = STRIP_RE.replace_all(description, "");
    let stripped = TRAILING_SEP_RE.replace(&stripped, "");
    stripped.trim().to_string()
}

/// Parses a pasted block of homework text into structured items.
///
/// The reference instant is captured exactly once, so every relative date
/// expression in the block resolves against the same anchor.
pub fn parse_homework_text(text: &str) -> Vec<HomeworkItem> {
    parse_homework_text_at(text, Local::now().date_naive())
}

/// Deterministic variant of [`parse_homework_text`] with an explicit
/// reference date.
pub fn parse_homework_text_at(text: &str, today: NaiveDate) -> Vec<HomeworkItem> {
    let lines = segment(text);
    let items: Vec<HomeworkItem> = lines.iter().map(|line| parse_line(line, today)).collect();
    log::debug!(
        "parsed {} homework item(s) from {} line(s)",
        items.len(),
        lines.len()
    );
    items
}
