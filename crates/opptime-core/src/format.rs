//! Duration formatting shared by the timer display and the exports.
//!
//! All formatters truncate: hours are `secs / 3600`, minutes are
//! `(secs % 3600) / 60`, and leftover seconds are dropped unless the format
//! shows them.

/// `"{h}:{mm}"`, used for timesheet cells and totals.
pub fn format_hm(secs: u64) -> String {
    let (h, m, _) = split(secs);
    format!("{h}:{m:02}")
}

/// `"{h}h {m}m"`, used for the attendance row.
pub fn format_hm_words(secs: u64) -> String {
    let (h, m, _) = split(secs);
    format!("{h}h {m}m")
}

/// `"HH:MM:SS"`, used for the live timer and the detailed log.
pub fn format_hms(secs: u64) -> String {
    let (h, m, s) = split(secs);
    format!("{h:02}:{m:02}:{s:02}")
}

fn split(secs: u64) -> (u64, u64, u64) {
    (secs / 3600, (secs % 3600) / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_formats() {
        assert_eq!(format_hm(0), "0:00");
        assert_eq!(format_hm_words(0), "0h 0m");
        assert_eq!(format_hms(0), "00:00:00");
    }

    #[test]
    fn seconds_are_truncated_not_rounded() {
        assert_eq!(format_hm(59), "0:00");
        assert_eq!(format_hm(3599), "0:59");
        assert_eq!(format_hm_words(5399), "1h 29m");
    }

    #[test]
    fn hours_are_not_padded_or_wrapped() {
        assert_eq!(format_hm(36 * 3600 + 5 * 60), "36:05");
        assert_eq!(format_hms(100 * 3600 + 61), "100:01:01");
    }
}
