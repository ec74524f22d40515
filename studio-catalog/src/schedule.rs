use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Resolve an IANA zone name like `Asia/Kolkata`
pub fn parse_zone(name: &str) -> Result<Tz, TimezoneError> {
    name.parse::<Tz>()
        .map_err(|_| TimezoneError::Unrecognized(name.to_string()))
}

/// Render a stored UTC instant for display.
///
/// Converts into the target zone when one is given; otherwise the canonical
/// UTC time is rendered unchanged. Display-only, never feeds back into
/// admission decisions.
pub fn format_in_zone(start: DateTime<Utc>, zone: Option<Tz>) -> String {
    match zone {
        Some(tz) => start.with_timezone(&tz).to_rfc3339(),
        None => start.to_rfc3339(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TimezoneError {
    #[error("Invalid timezone: {0}")]
    Unrecognized(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_known_zone() {
        assert!(parse_zone("Asia/Kolkata").is_ok());
        assert!(parse_zone("UTC").is_ok());
    }

    #[test]
    fn test_parse_unknown_zone() {
        let result = parse_zone("Mars/Olympus_Mons");
        assert!(matches!(result, Err(TimezoneError::Unrecognized(_))));
    }

    #[test]
    fn test_format_converts_to_target_zone() {
        let start = Utc.with_ymd_and_hms(2026, 8, 10, 9, 0, 0).unwrap();
        let tz = parse_zone("Asia/Kolkata").unwrap();

        let rendered = format_in_zone(start, Some(tz));
        assert_eq!(rendered, "2026-08-10T14:30:00+05:30");
    }

    #[test]
    fn test_format_without_zone_is_canonical_utc() {
        let start = Utc.with_ymd_and_hms(2026, 8, 10, 9, 0, 0).unwrap();

        let rendered = format_in_zone(start, None);
        assert_eq!(rendered, "2026-08-10T09:00:00+00:00");
    }
}
