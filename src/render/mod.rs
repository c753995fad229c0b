// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Text rendering of start times.

use crate::model::StartTime;

/// Raw millisecond cell format, e.g. `5250ms`.
pub fn format_millis(ms: i64) -> String {
    let mut digits = itoa::Buffer::new();
    let mut out = String::with_capacity(22);
    out.push_str(digits.format(ms));
    out.push_str("ms");
    out
}

/// Clock-style format, `h:mm:ss.mmm`, e.g. `0:00:05.250`.
pub fn format_clock(ms: i64) -> String {
    let sign = if ms < 0 { "-" } else { "" };
    let ms = ms.unsigned_abs();

    let hours = ms / 3_600_000;
    let minutes = (ms / 60_000) % 60;
    let seconds = (ms / 1_000) % 60;
    let millis = ms % 1_000;

    format!("{sign}{hours}:{minutes:02}:{seconds:02}.{millis:03}")
}

/// Row label for a start time; unanchored and unresolved rows get a dash.
pub fn format_start_time(start: &StartTime) -> String {
    match start {
        StartTime::Anchored(ms) => format_clock(*ms),
        StartTime::Unanchored | StartTime::Unresolved(_) => "-".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use smol_str::SmolStr;

    use crate::model::{StartTime, TimepointError};

    use super::{format_clock, format_millis, format_start_time};

    #[test]
    fn format_millis_matches_the_cell_format() {
        assert_eq!(format_millis(0), "0ms");
        assert_eq!(format_millis(5250), "5250ms");
        assert_eq!(format_millis(-1), "-1ms");
    }

    #[test]
    fn format_clock_carries_hours_and_pads_the_rest() {
        assert_eq!(format_clock(0), "0:00:00.000");
        assert_eq!(format_clock(5250), "0:00:05.250");
        assert_eq!(format_clock(61_500), "0:01:01.500");
        assert_eq!(format_clock(3_599_999), "0:59:59.999");
        assert_eq!(format_clock(3_661_001), "1:01:01.001");
        assert_eq!(format_clock(-5250), "-0:00:05.250");
    }

    #[test]
    fn start_times_without_a_time_render_as_a_dash() {
        assert_eq!(format_start_time(&StartTime::Anchored(5250)), "0:00:05.250");
        assert_eq!(format_start_time(&StartTime::Unanchored), "-");
        assert_eq!(
            format_start_time(&StartTime::Unresolved(TimepointError::UnknownReference {
                reference: SmolStr::new("T9"),
            })),
            "-"
        );
    }
}
