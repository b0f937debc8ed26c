use chrono::{Local, NaiveDateTime};

use crate::consts::TIMESTAMP_FORMAT;

/// Reduce free-form event text to a filename-safe stem.
///
/// Keeps ASCII letters, ASCII digits and whitespace, then joins the
/// remaining words with `_`. Returns `None` when nothing survives.
pub fn sanitize_event_name(name: &str) -> Option<String> {
    let kept: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();
    let stem = kept.split_whitespace().collect::<Vec<_>>().join("_");
    if stem.is_empty() {
        None
    } else {
        Some(stem)
    }
}

/// Stem for `event_name`, or `fallback` when it is absent or cleans to nothing.
pub fn banner_stem(event_name: Option<&str>, fallback: &str) -> String {
    event_name
        .and_then(sanitize_event_name)
        .unwrap_or_else(|| fallback.to_string())
}

/// Current wall-clock time in the server's local zone.
pub fn local_timestamp() -> NaiveDateTime {
    Local::now().naive_local()
}

/// `{stem}-{YYYYMMDDHHMMSS}-{suffix}.jpg`
pub fn banner_filename(stem: &str, timestamp: &NaiveDateTime, suffix: &str) -> String {
    format!("{stem}-{}-{suffix}.jpg", timestamp.format(TIMESTAMP_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn strips_punctuation() {
        assert_eq!(
            sanitize_event_name("Spring Fest 2026!!").as_deref(),
            Some("Spring_Fest_2026")
        );
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(
            sanitize_event_name("  Tech \t  Summit\n").as_deref(),
            Some("Tech_Summit")
        );
    }

    #[test]
    fn drops_non_ascii_letters() {
        assert_eq!(sanitize_event_name("Café Día").as_deref(), Some("Caf_Da"));
    }

    #[test]
    fn symbols_only_is_none() {
        assert_eq!(sanitize_event_name("***"), None);
        assert_eq!(sanitize_event_name("   "), None);
    }

    #[test]
    fn stem_falls_back() {
        assert_eq!(banner_stem(Some("***"), "EventBanner"), "EventBanner");
        assert_eq!(banner_stem(None, "EventBanner"), "EventBanner");
    }

    #[test]
    fn filename_layout() {
        let ts = NaiveDate::from_ymd_opt(2026, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 1)
            .unwrap();
        assert_eq!(
            banner_filename("Spring_Fest", &ts, "Techtical"),
            "Spring_Fest-20260307090501-Techtical.jpg"
        );
    }
}
