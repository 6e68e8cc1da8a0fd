// Copyright (c) The markdown-reporter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Human-readable report timestamps.

use chrono::{DateTime, Datelike, FixedOffset, Timelike};

/// Formats a timestamp the way it appears in a report header, e.g.
/// `January 1st 2024, 3:04:05`.
///
/// Full English month name, ordinal day, year, then a 12-hour clock with an
/// unpadded hour and no meridiem.
pub fn format_timestamp(timestamp: &DateTime<FixedOffset>) -> String {
    let (_, hour) = timestamp.hour12();
    format!(
        "{} {}{} {}, {}:{:02}:{:02}",
        timestamp.format("%B"),
        timestamp.day(),
        ordinal_suffix(timestamp.day()),
        timestamp.year(),
        hour,
        timestamp.minute(),
        timestamp.second(),
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn fixed(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .expect("offset is in range")
            .with_ymd_and_hms(y, mo, d, h, mi, s)
            .single()
            .expect("timestamp is valid")
    }

    #[test]
    fn ordinal_suffixes() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (30, "th"),
            (31, "st"),
        ];
        for (day, suffix) in cases {
            assert_eq!(ordinal_suffix(day), suffix, "suffix for day {day}");
        }
    }

    #[test]
    fn formats_like_a_report_header() {
        assert_eq!(
            format_timestamp(&fixed(2024, 1, 1, 3, 4, 5)),
            "January 1st 2024, 3:04:05"
        );
        // 12-hour clock, no meridiem
        assert_eq!(
            format_timestamp(&fixed(2023, 11, 22, 15, 30, 0)),
            "November 22nd 2023, 3:30:00"
        );
        // midnight renders as 12
        assert_eq!(
            format_timestamp(&fixed(2025, 6, 13, 0, 0, 9)),
            "June 13th 2025, 12:00:09"
        );
    }
}
