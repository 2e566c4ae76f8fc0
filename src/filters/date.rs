//! Date filters

use chrono::{DateTime, Locale, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};

use crate::error::{SiteError, SiteResult};

/// Medium date in UTC with a localized month, like `05 Mar 2024`
pub fn readable_date<Tz: TimeZone>(date: &DateTime<Tz>, language: &str) -> String {
    date.with_timezone(&Utc)
        .format_localized("%d %b %Y", locale_for(language))
        .to_string()
}

/// Short machine-readable date in UTC, like `2024-03-05`
pub fn html_date_string<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    date.with_timezone(&Utc).format("%Y-%m-%d").to_string()
}

/// Parse a date string and render it as an ISO 8601 UTC timestamp
///
/// # Examples
/// ```
/// use leafkit::filters::date_to_iso;
/// assert_eq!(date_to_iso("2024-03-05").unwrap(), "2024-03-05T00:00:00.000Z");
/// ```
pub fn date_to_iso(s: &str) -> SiteResult<String> {
    parse_date(s)
        .map(|date| date.to_rfc3339_opts(SecondsFormat::Millis, true))
        .ok_or_else(|| SiteError::InvalidDate(s.to_string()))
}

/// RFC 3339 timestamp for feed entries
pub fn date_to_rfc3339<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    date.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse a date string in the formats front matter commonly uses
///
/// Strings without an offset are taken as UTC.
pub fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];
    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&dt));
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&d.and_hms_opt(0, 0, 0)?));
        }
    }

    None
}

/// Map a language code (`de`, `de-AT`, `fr_FR`) to a chrono locale
///
/// Only the primary language subtag is considered.
fn locale_for(language: &str) -> Locale {
    let primary = language
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    match primary.as_str() {
        "de" => Locale::de_DE,
        "fr" => Locale::fr_FR,
        "es" => Locale::es_ES,
        "it" => Locale::it_IT,
        "nl" => Locale::nl_NL,
        "pt" => Locale::pt_PT,
        _ => Locale::en_US,
    }
}
