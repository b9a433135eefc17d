//! Formatting helpers
//!
//! Relative times, digit grouping and link sanitizing used by the regions.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;

/// Format a timestamp as a coarse relative age ("5m ago").
///
/// Rules, in order: missing → "N/A"; under a minute → "Just now"; under an
/// hour → minutes; under a day → hours; otherwise days. A timestamp in the
/// future yields a negative diff and lands in "Just now".
pub fn format_time(iso: Option<&str>, now: DateTime<Utc>, naive_offset: FixedOffset) -> String {
    let Some(timestamp) = iso.map(str::trim).filter(|s| !s.is_empty()) else {
        return "N/A".to_string();
    };
    let Some(then) = parse_timestamp(timestamp, naive_offset) else {
        tracing::debug!("Unparseable timestamp: {}", timestamp);
        return "N/A".to_string();
    };

    let diff = (now - then).num_milliseconds() as f64 / 1000.0;

    if diff < MINUTE {
        "Just now".to_string()
    } else if diff < HOUR {
        format!("{}m ago", (diff / MINUTE).floor() as i64)
    } else if diff < DAY {
        format!("{}h ago", (diff / HOUR).floor() as i64)
    } else {
        format!("{}d ago", (diff / DAY).floor() as i64)
    }
}

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC 3339 with an offset, naive date-times (read in
/// `naive_offset`) and bare dates (read as UTC midnight).
pub fn parse_timestamp(s: &str, naive_offset: FixedOffset) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return naive_offset
                .from_local_datetime(&naive)
                .single()
                .map(|dt| dt.with_timezone(&Utc));
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Digit grouping convention for large counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberLocale {
    #[default]
    En,
    De,
    Fr,
    Plain,
}

impl NumberLocale {
    fn separator(&self) -> Option<&'static str> {
        match self {
            NumberLocale::En => Some(","),
            NumberLocale::De => Some("."),
            NumberLocale::Fr => Some("\u{202f}"),
            NumberLocale::Plain => None,
        }
    }
}

impl std::str::FromStr for NumberLocale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "en-us" | "en-gb" | "zh" | "zh-cn" => Ok(NumberLocale::En),
            "de" | "de-de" => Ok(NumberLocale::De),
            "fr" | "fr-fr" => Ok(NumberLocale::Fr),
            "plain" | "none" => Ok(NumberLocale::Plain),
            _ => Err(format!("Unknown locale: {}", s)),
        }
    }
}

/// Group digits in threes using the locale's separator
pub fn group_thousands(n: u64, locale: NumberLocale) -> String {
    let digits = n.to_string();
    let Some(sep) = locale.separator() else {
        return digits;
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * sep.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(sep);
        }
        out.push(ch);
    }
    out
}

/// Keep http(s) and relative links; anything else (javascript:, data:) becomes "#"
pub fn safe_link(link: &str) -> &str {
    let trimmed = link.trim();
    let scheme = trimmed
        .split_once(':')
        .map(|(scheme, _)| scheme)
        .filter(|s| !s.contains(|c: char| matches!(c, '/' | '?' | '#')));

    match scheme {
        None => trimmed,
        Some(s) if s.eq_ignore_ascii_case("http") || s.eq_ignore_ascii_case("https") => trimmed,
        Some(_) => "#",
    }
}
