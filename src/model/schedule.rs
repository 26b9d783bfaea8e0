// File: ./src/model/schedule.rs
use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::dates::weekday_number;
use crate::model::item::LessonItem;

// A day header is a line *starting with* a weekday name or its 2-letter
// abbreviation; full names are tried first so "woensdag" is not cut short
// at "wo".
static DAY_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(maandag|dinsdag|woensdag|donderdag|vrijdag|zaterdag|zondag|ma|di|wo|do|vr|za|zo)")
        .unwrap()
});

/// The lesson-line shapes observed in pasted schedules, tried in this
/// order; the first match wins. Capture groups line up across patterns:
/// 1-4 start/end time, 5 subject, 6 teacher (optional), 7 location
/// (optional).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LessonPattern {
    /// `08:00-08:50 Nederlands (Jansen) A102`
    Compact,
    /// `08:00 - 08:50 | Nederlands | Jansen | A102`
    Piped,
    /// `1. 08:00-08:50 Nederlands`
    Numbered,
}

static LESSON_PATTERNS: Lazy<Vec<(LessonPattern, Regex)>> = Lazy::new(|| {
    vec![
        (
            LessonPattern::Compact,
            // The room token only follows a parenthesized teacher; without
            // parens the whole tail is the subject.
            Regex::new(
                r"^(\d{1,2}):(\d{2})\s*[-–]\s*(\d{1,2}):(\d{2})\s+([^(|]+?)(?:\s*\(([^)]+)\)(?:\s+(\S+))?)?\s*$",
            )
            .unwrap(),
        ),
        (
            LessonPattern::Piped,
            Regex::new(
                r"^(\d{1,2}):(\d{2})\s*[-–|]\s*(\d{1,2}):(\d{2})\s*\|\s*([^|]+?)\s*(?:\|\s*([^|]*?)\s*)?(?:\|\s*(.*?)\s*)?$",
            )
            .unwrap(),
        ),
        (
            LessonPattern::Numbered,
            Regex::new(r"^\d+\.\s*(\d{1,2}):(\d{2})\s*[-–]\s*(\d{1,2}):(\d{2})\s+(.+)$").unwrap(),
        ),
    ]
});

/// Parses schedule text into lesson entries.
///
/// Day-header lines set the active day for the lesson lines below them;
/// lines before the first header, and lines matching none of the lesson
/// patterns, are skipped. There is no parse error: an empty result from
/// non-empty input is the caller's signal that nothing was recognized.
pub fn parse_schedule_text(text: &str) -> Vec<LessonItem> {
    let mut lessons = Vec::new();
    let mut current_day: Option<u8> = None;

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if let Some(caps) = DAY_HEADER_RE.captures(line) {
            current_day = weekday_number(&caps[1].to_lowercase());
            continue;
        }

        let Some(day) = current_day else {
            log::debug!("schedule line before first day header, skipping: {line:?}");
            continue;
        };

        match LESSON_PATTERNS
            .iter()
            .find_map(|(_, pattern)| pattern.captures(line))
        {
            Some(caps) => lessons.push(lesson_from_captures(&caps, day)),
            None => log::debug!("no lesson pattern matched, skipping: {line:?}"),
        }
    }

    lessons
}

fn lesson_from_captures(caps: &regex::Captures<'_>, day: u8) -> LessonItem {
    let optional = |index: usize| {
        caps.get(index)
            .map(|m| m.as_str().trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    LessonItem {
        day_of_week: day,
        time_start: format!("{:0>2}:{}", &caps[1], &caps[2]),
        time_end: format!("{:0>2}:{}", &caps[3], &caps[4]),
        subject: caps[5].trim().to_string(),
        teacher_name: optional(6),
        location: optional(7),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_precedence_is_fixed() {
        let order: Vec<LessonPattern> = LESSON_PATTERNS.iter().map(|(tag, _)| *tag).collect();
        assert_eq!(
            order,
            vec![
                LessonPattern::Compact,
                LessonPattern::Piped,
                LessonPattern::Numbered
            ]
        );
    }

    #[test]
    fn compact_pattern_rejects_piped_and_numbered_lines() {
        let (_, compact) = &LESSON_PATTERNS[0];
        assert!(!compact.is_match("08:00 - 08:50 | Nederlands | Jansen | A102"));
        assert!(!compact.is_match("1. 08:00-08:50 Nederlands"));
    }

    #[test]
    fn compact_pattern_captures_teacher_and_room() {
        let lessons = parse_schedule_text("Maandag\n08:00-08:50 Nederlands (Jansen) A102");
        assert_eq!(lessons.len(), 1);
        let lesson = &lessons[0];
        assert_eq!(lesson.subject, "Nederlands");
        assert_eq!(lesson.teacher_name.as_deref(), Some("Jansen"));
        assert_eq!(lesson.location.as_deref(), Some("A102"));
    }

    #[test]
    fn compact_pattern_without_parens_keeps_full_subject() {
        let lessons = parse_schedule_text("Dinsdag\n10:15-11:05 Lichamelijke opvoeding");
        assert_eq!(lessons[0].subject, "Lichamelijke opvoeding");
        assert_eq!(lessons[0].teacher_name, None);
        assert_eq!(lessons[0].location, None);
    }

    #[test]
    fn piped_pattern_fields_are_optional_from_the_right() {
        let lessons = parse_schedule_text(
            "Woensdag\n08:00 - 08:50 | Engels | De Vries | B205\n09:00 - 09:50 | Wiskunde | Smit\n10:00 - 10:50 | Frans",
        );
        assert_eq!(lessons.len(), 3);
        assert_eq!(lessons[0].location.as_deref(), Some("B205"));
        assert_eq!(lessons[1].teacher_name.as_deref(), Some("Smit"));
        assert_eq!(lessons[1].location, None);
        assert_eq!(lessons[2].subject, "Frans");
        assert_eq!(lessons[2].teacher_name, None);
    }

    #[test]
    fn numbered_pattern_takes_the_tail_as_subject() {
        let lessons = parse_schedule_text("Vrijdag\n1. 08:00-08:50 Geschiedenis");
        assert_eq!(lessons[0].subject, "Geschiedenis");
        assert_eq!(lessons[0].day_of_week, 5);
    }

    #[test]
    fn start_hour_is_zero_padded() {
        let lessons = parse_schedule_text("Maandag\n8:00-8:50 Muziek");
        assert_eq!(lessons[0].time_start, "08:00");
        assert_eq!(lessons[0].time_end, "08:50");
    }
}
