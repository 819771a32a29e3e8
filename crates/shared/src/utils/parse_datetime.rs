use chrono::{DateTime, Utc};

/// Normalizes upstream timestamp strings to UTC RFC 3339; empty or
/// unparseable values become `None`.
pub fn parse_datetime(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        DateTime::parse_from_rfc3339(value)
            .map(|dt| dt.with_timezone(&Utc).to_rfc3339())
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_none() {
        assert_eq!(parse_datetime(""), None);
    }

    #[test]
    fn offset_is_normalized_to_utc() {
        let out = parse_datetime("2026-08-01T10:00:00+02:00").unwrap();
        assert!(out.starts_with("2026-08-01T08:00:00"));
    }
}
