use once_cell::sync::Lazy;
use regex::Regex;

static IDENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[a-z_][a-z0-9_]*$").expect("ident regex"));

// Unanchored on purpose: a date/time shape anywhere in the cell is enough to
// leave it alone.
static DATE_LIKE_RES: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"\d{1,4}[-/]\d{1,2}[-/]\d{1,4}").expect("calendar regex"),
        Regex::new(r"\d{1,2}:\d{2}").expect("clock regex"),
        Regex::new(r"[A-Z]{2,3}\s+\d{1,2}").expect("month-day regex"),
    ]
});

/// Decides whether a source cell must bypass translation entirely: blank
/// cells, URLs, text that is already mostly Arabic, identifier-shaped tokens,
/// bare numbers and date/time shapes.
pub fn should_not_translate(text: &str) -> bool {
    if text.trim().is_empty() {
        return true;
    }

    if ["http://", "https://", "www.", "ftp://"]
        .iter()
        .any(|p| text.starts_with(p))
    {
        return true;
    }

    if arabic_ratio(text) > 0.3 {
        return true;
    }

    if IDENT_RE.is_match(text) && (text.contains('_') || is_single_case(text)) {
        return true;
    }

    if is_bare_number(text) {
        return true;
    }

    DATE_LIKE_RES.iter().any(|re| re.is_match(text))
}

fn arabic_ratio(text: &str) -> f64 {
    let total = text.chars().count();
    if total == 0 {
        return 0.0;
    }
    let arabic = text
        .chars()
        .filter(|c| ('\u{0600}'..='\u{06FF}').contains(c))
        .count();
    arabic as f64 / total as f64
}

// True when the text has at least one cased character and all cased
// characters agree on case.
fn is_single_case(text: &str) -> bool {
    let has_lower = text.chars().any(char::is_lowercase);
    let has_upper = text.chars().any(char::is_uppercase);
    has_lower != has_upper
}

// Digits plus separators only, e.g. "12,345.67" or "1 000".
fn is_bare_number(text: &str) -> bool {
    let mut seen_digit = false;
    for c in text.chars() {
        match c {
            '.' | ',' | ' ' => {}
            c if c.is_ascii_digit() => seen_digit = true,
            _ => return false,
        }
    }
    seen_digit
}
