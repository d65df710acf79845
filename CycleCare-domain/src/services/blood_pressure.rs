use once_cell::sync::Lazy;
use regex::Regex;

/// Two 2-3 digit numbers separated by a slash, whitespace-tolerant
static BP_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d{2,3})\s*/\s*(\d{2,3})\s*$").expect("blood pressure pattern is valid")
});

/// Parse a free-text blood pressure reading like "120/80" into a
/// (systolic, diastolic) pair.
///
/// Clinical free text is frequently malformed, so failing to parse is a
/// recognized outcome rather than an error: the result is `(None, None)`
/// and the caller keeps the raw text.
pub fn parse_blood_pressure(raw: &str) -> (Option<u16>, Option<u16>) {
    let caps = match BP_PATTERN.captures(raw.trim()) {
        Some(caps) => caps,
        None => return (None, None),
    };

    match (caps[1].parse::<u16>(), caps[2].parse::<u16>()) {
        (Ok(systolic), Ok(diastolic)) => (Some(systolic), Some(diastolic)),
        _ => (None, None),
    }
}
