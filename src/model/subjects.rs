// File: ./src/model/subjects.rs

/// Canonical subjects with their accepted spellings, in match-priority
/// order. Lookup is substring containment on the lower-cased input and the
/// first entry wins, so earlier subjects shadow later ones when a line
/// happens to contain several synonyms. Underscores in the canonical id
/// become spaces for display.
const SUBJECTS: &[(&str, &[&str])] = &[
    ("nederlands", &["nederlands", "ned", "ne"]),
    ("engels", &["engels", "eng", "en"]),
    ("wiskunde", &["wiskunde", "wisk", "wi", "math", "maths"]),
    ("natuurkunde", &["natuurkunde", "natuur", "nat", "nk"]),
    ("scheikunde", &["scheikunde", "schei", "sk"]),
    ("biologie", &["biologie", "bio"]),
    ("geschiedenis", &["geschiedenis", "gesch", "gs"]),
    ("aardrijkskunde", &["aardrijkskunde", "ak"]),
    ("economie", &["economie", "econ", "ec"]),
    ("informatica", &["informatica", "inf"]),
    ("lichamelijke_opvoeding", &["lichamelijke opvoeding", "lo", "gym"]),
    ("maatschappijleer", &["maatschappijleer", "ma"]),
    ("frans", &["frans", "fr"]),
    ("duits", &["duits", "du"]),
    ("spaans", &["spaans", "sp"]),
    ("latijn", &["latijn", "la"]),
    ("grieks", &["grieks", "gr"]),
    ("kunst", &["kunst", "kv", "ckv", "tekenen"]),
    ("muziek", &["muziek", "mu"]),
    ("mentorles", &["mentorles", "mentor"]),
];

/// Maps a free-text subject token to its canonical form.
///
/// Unrecognized input passes through trimmed with its original casing, so
/// exotic subjects survive instead of being discarded.
pub fn normalize_subject(raw: &str) -> String {
    let lower = raw.trim().to_lowercase();

    for (canonical, synonyms) in SUBJECTS {
        if synonyms.iter().any(|s| lower.contains(s)) {
            return canonical.replace('_', " ");
        }
    }

    raw.trim().to_string()
}
