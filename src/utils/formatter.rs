// src/utils/formatter.rs
use chrono::{Local, LocalResult, TimeZone};

/// Human-readable byte count, decimal units (1 Kb = 1000 b).
pub fn format_size(bytes: u64) -> String {
    match bytes {
        b @ 0..=999 => format!("{} b", b),
        b @ 1_000..=999_999 => format!("{}.{} Kb", b / 1_000, (b % 1_000) / 10),
        b @ 1_000_000..=999_999_999 => {
            format!("{}.{} Mb", b / 1_000_000, (b % 1_000_000) / 10_000)
        }
        b => format!("{}.{} Gb", b / 1_000_000_000, (b % 1_000_000_000) / 10_000_000),
    }
}

/// Local-time display of a unix timestamp, "-" when the server did not
/// provide one or it falls outside the representable range.
pub fn format_modified(timestamp: Option<i64>) -> String {
    let Some(ts) = timestamp else {
        return "-".to_string();
    };
    match Local.timestamp_opt(ts, 0) {
        LocalResult::Single(dt) => dt.format("%a, %b %d %Y  %H:%M:%S").to_string(),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_units() {
        assert_eq!(format_size(0), "0 b");
        assert_eq!(format_size(999), "999 b");
        assert_eq!(format_size(1_000), "1.0 Kb");
        assert_eq!(format_size(1_234), "1.23 Kb");
        assert_eq!(format_size(999_999), "999.99 Kb");
        assert_eq!(format_size(5_000_000), "5.0 Mb");
        assert_eq!(format_size(2_500_000_000), "2.50 Gb");
    }

    #[test]
    fn test_format_modified_missing() {
        assert_eq!(format_modified(None), "-");
    }

    #[test]
    fn test_format_modified_known_timestamp() {
        let rendered = format_modified(Some(1_700_000_000));
        assert_ne!(rendered, "-");
        assert!(rendered.contains(':'));
    }
}
