//! Playtime formatting helpers.

/// Format a playtime in minutes the way review gates phrase it:
/// whole hours as `"2h"`, anything else as `"1h 30m"` or `"45m"`.
pub fn format_playtime(minutes: u64) -> String {
    let (hours, rest) = (minutes / 60, minutes % 60);
    match (hours, rest) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_hours_and_minutes() {
        assert_eq!(format_playtime(120), "2h");
        assert_eq!(format_playtime(1800), "30h");
        assert_eq!(format_playtime(90), "1h 30m");
        assert_eq!(format_playtime(45), "45m");
        assert_eq!(format_playtime(0), "0m");
    }
}
