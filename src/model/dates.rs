// File: ./src/model/dates.rs
use chrono::{Datelike, Duration, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Relative-day keywords and their offsets from the reference date.
/// `overmorgen` is listed before `morgen`: lookup is containment and the
/// shorter word is a substring of the longer one.
pub(crate) const RELATIVE_DAYS: &[(&str, i64)] =
    &[("vandaag", 0), ("overmorgen", 2), ("morgen", 1)];

/// Weekday tokens, full names before abbreviations, zondag = 0.
pub(crate) const WEEKDAYS: &[(&str, u8)] = &[
    ("maandag", 1),
    ("dinsdag", 2),
    ("woensdag", 3),
    ("donderdag", 4),
    ("vrijdag", 5),
    ("zaterdag", 6),
    ("zondag", 0),
    ("ma", 1),
    ("di", 2),
    ("wo", 3),
    ("do", 4),
    ("vr", 5),
    ("za", 6),
    ("zo", 0),
];

/// Words that introduce a deadline phrase; the line parser strips these
/// from descriptions. `inleverdatum` precedes `inleveren` so the longer
/// form is consumed whole.
pub(crate) const DEADLINE_WORDS: &[&str] =
    &["voor", "tegen", "uiterlijk", "deadline", "inleverdatum", "inleveren"];

/// Dutch month names and abbreviations. Both `okt` and the English `oct`
/// show up in pasted portal text.
const MONTHS: &[(&str, u32)] = &[
    ("januari", 1),
    ("jan", 1),
    ("februari", 2),
    ("feb", 2),
    ("maart", 3),
    ("mrt", 3),
    ("april", 4),
    ("apr", 4),
    ("mei", 5),
    ("juni", 6),
    ("jun", 6),
    ("juli", 7),
    ("jul", 7),
    ("augustus", 8),
    ("aug", 8),
    ("september", 9),
    ("sept", 9),
    ("sep", 9),
    ("oktober", 10),
    ("okt", 10),
    ("oct", 10),
    ("november", 11),
    ("nov", 11),
    ("december", 12),
    ("dec", 12),
];

pub(crate) const MONTH_NAMES: [&str; 12] = [
    "januari",
    "februari",
    "maart",
    "april",
    "mei",
    "juni",
    "juli",
    "augustus",
    "september",
    "oktober",
    "november",
    "december",
];

// Full weekday names match anywhere ("vrijdagmiddag" still counts as
// Friday); the 2-letter forms are word-bounded so "maken" does not read as
// maandag. Input is lower-cased before matching.
static WEEKDAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(maandag|dinsdag|woensdag|donderdag|vrijdag|zaterdag|zondag)|\b(ma|di|wo|do|vr|za|zo)\b",
    )
    .unwrap()
});

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})\b").unwrap());

static DAY_MONTH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(\d{1,2})\s+(januari|februari|maart|april|mei|juni|juli|augustus|september|sept|sep|oktober|okt|oct|november|nov|december|dec|jan|feb|mrt|apr|jun|jul|aug)\b",
    )
    .unwrap()
});

static DAY_NUMERIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{1,2})[-/](\d{1,2})\b").unwrap());

/// Deadline resolution strategies, evaluated in declaration order; the
/// first one that produces a date wins. Relative terms are the least
/// ambiguous signal, weekday names the next most common phrasing, and
/// absolute dates go last so incidental numbers near a relative phrase
/// cannot misfire.
#[derive(Debug, Clone, Copy)]
enum Strategy {
    RelativeDay,
    Weekday,
    AbsoluteDate,
}

const STRATEGY_ORDER: [Strategy; 3] =
    [Strategy::RelativeDay, Strategy::Weekday, Strategy::AbsoluteDate];

impl Strategy {
    fn resolve(self, lower: &str, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Strategy::RelativeDay => resolve_relative(lower, today),
            Strategy::Weekday => resolve_weekday(lower, today),
            Strategy::AbsoluteDate => resolve_absolute(lower, today),
        }
    }
}

/// Resolves a natural-language date expression against the reference date
/// `today`. Returns `None` when no known pattern occurs in the text; the
/// caller decides the fallback policy.
pub fn parse_deadline(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let lower = text.to_lowercase();
    STRATEGY_ORDER
        .iter()
        .find_map(|strategy| strategy.resolve(&lower, today))
}

fn resolve_relative(lower: &str, today: NaiveDate) -> Option<NaiveDate> {
    RELATIVE_DAYS
        .iter()
        .find(|(word, _)| lower.contains(word))
        .map(|&(_, offset)| today + Duration::days(offset))
}

fn resolve_weekday(lower: &str, today: NaiveDate) -> Option<NaiveDate> {
    let caps = WEEKDAY_RE.captures(lower)?;
    let token = caps.get(1).or_else(|| caps.get(2))?.as_str();
    let target = weekday_number(token)?;

    let current = today.weekday().num_days_from_sunday();
    let mut days = i64::from(target) - i64::from(current);

    // Naming today's weekday or one already passed means next week.
    if days <= 0 {
        days += 7;
    }
    if lower.contains("volgende week") {
        days += 7;
    }

    Some(today + Duration::days(days))
}

fn resolve_absolute(lower: &str, today: NaiveDate) -> Option<NaiveDate> {
    // An explicit year needs no rollover.
    if let Some(caps) = ISO_DATE_RE.captures(lower) {
        return NaiveDate::from_ymd_opt(
            caps[1].parse().ok()?,
            caps[2].parse().ok()?,
            caps[3].parse().ok()?,
        );
    }

    if let Some(caps) = DAY_MONTH_RE.captures(lower) {
        let day = caps[1].parse().ok()?;
        let month = month_number(&caps[2])?;
        return roll_forward(today, month, day);
    }

    if let Some(caps) = DAY_NUMERIC_RE.captures(lower) {
        let day = caps[1].parse().ok()?;
        let month = caps[2].parse().ok()?;
        return roll_forward(today, month, day);
    }

    None
}

/// Defaults to the reference year; a date strictly before the reference
/// rolls over to next year ("3 januari" pasted in December means the
/// coming January).
fn roll_forward(today: NaiveDate, month: u32, day: u32) -> Option<NaiveDate> {
    let candidate = NaiveDate::from_ymd_opt(today.year(), month, day)?;
    if candidate < today {
        NaiveDate::from_ymd_opt(today.year() + 1, month, day)
    } else {
        Some(candidate)
    }
}

pub(crate) fn weekday_number(token: &str) -> Option<u8> {
    WEEKDAYS
        .iter()
        .find(|(name, _)| *name == token)
        .map(|&(_, day)| day)
}

fn month_number(token: &str) -> Option<u32> {
    MONTHS
        .iter()
        .find(|(name, _)| *name == token)
        .map(|&(_, month)| month)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Thursday.
    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn relative_terms_resolve_against_reference() {
        assert_eq!(parse_deadline("af voor vandaag", reference()), Some(date(2024, 3, 14)));
        assert_eq!(parse_deadline("morgen inleveren", reference()), Some(date(2024, 3, 15)));
        assert_eq!(parse_deadline("toets overmorgen", reference()), Some(date(2024, 3, 16)));
    }

    #[test]
    fn overmorgen_is_not_read_as_morgen() {
        assert_eq!(parse_deadline("overmorgen", reference()), Some(date(2024, 3, 16)));
    }

    #[test]
    fn weekday_looks_strictly_forward() {
        // Friday is one day ahead of the Thursday reference.
        assert_eq!(parse_deadline("klaar op vrijdag", reference()), Some(date(2024, 3, 15)));
        // Naming the reference's own weekday means next week.
        assert_eq!(parse_deadline("donderdag", reference()), Some(date(2024, 3, 21)));
        // An already-passed weekday also rolls a week forward.
        assert_eq!(parse_deadline("maandag", reference()), Some(date(2024, 3, 18)));
    }

    #[test]
    fn volgende_week_adds_seven_days() {
        assert_eq!(
            parse_deadline("volgende week vrijdag", reference()),
            Some(date(2024, 3, 22))
        );
    }

    #[test]
    fn weekday_abbreviations_are_word_bounded() {
        assert_eq!(parse_deadline("af op wo", reference()), Some(date(2024, 3, 20)));
        // "maken" must not be read as maandag via "ma".
        assert_eq!(parse_deadline("werkblad maken", reference()), None);
    }

    #[test]
    fn day_month_name_with_year_rollover() {
        assert_eq!(parse_deadline("toets 3 januari", reference()), Some(date(2025, 1, 3)));
        assert_eq!(parse_deadline("toets 20 maart", reference()), Some(date(2024, 3, 20)));
        assert_eq!(parse_deadline("af op 1 Sept", reference()), Some(date(2024, 9, 1)));
    }

    #[test]
    fn numeric_day_month_formats() {
        assert_eq!(parse_deadline("klaar 15-03", reference()), Some(date(2024, 3, 15)));
        assert_eq!(parse_deadline("klaar 3/12", reference()), Some(date(2024, 12, 3)));
        // Strictly-before check: the reference day itself stays this year.
        assert_eq!(parse_deadline("14-03", reference()), Some(date(2024, 3, 14)));
        // 13-03 already passed, so next year.
        assert_eq!(parse_deadline("13-03", reference()), Some(date(2025, 3, 13)));
    }

    #[test]
    fn iso_dates_parse_exactly() {
        assert_eq!(parse_deadline("af op 2024-03-15", reference()), Some(date(2024, 3, 15)));
    }

    #[test]
    fn strategy_order_relative_beats_absolute() {
        // Both a relative term and a numeric date occur; the relative term
        // is the higher-precedence signal.
        assert_eq!(
            parse_deadline("morgen hoofdstuk 15-03 lezen", reference()),
            Some(date(2024, 3, 15))
        );
    }

    #[test]
    fn nonsense_dates_fall_through() {
        assert_eq!(parse_deadline("paragraaf 40-40 lezen", reference()), None);
        assert_eq!(parse_deadline("geen datum hier", reference()), None);
    }
}
