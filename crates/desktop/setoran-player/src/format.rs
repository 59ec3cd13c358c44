// Copyright 2025 Crrow
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Placeholder shown while a time is unknown or not positive.
pub const ZERO_TIME: &str = "0:00";

/// Formats a millisecond position as `M:SS`.
///
/// Absent and non-positive inputs render as `"0:00"`. Minutes are not
/// wrapped into hours, so an hour-long clip reads `"60:00"`.
///
/// ```
/// use setoran_player::format_time;
///
/// assert_eq!(format_time(Some(61_000)), "1:01");
/// assert_eq!(format_time(None), "0:00");
/// ```
pub fn format_time(ms: Option<i64>) -> String {
    match ms {
        Some(ms) if ms > 0 => {
            let total_secs = ms / 1000;
            format!("{}:{:02}", total_secs / 60, total_secs % 60)
        }
        _ => ZERO_TIME.to_string(),
    }
}

/// `format_time` for the unsigned positions the provider reports.
pub fn format_millis(ms: u64) -> String { format_time(Some(i64::try_from(ms).unwrap_or(i64::MAX))) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_or_non_positive_is_zero() {
        assert_eq!(format_time(None), "0:00");
        assert_eq!(format_time(Some(0)), "0:00");
        assert_eq!(format_time(Some(-5)), "0:00");
    }

    #[test]
    fn pads_seconds() {
        assert_eq!(format_time(Some(61_000)), "1:01");
        assert_eq!(format_time(Some(599_000)), "9:59");
        assert_eq!(format_time(Some(5_000)), "0:05");
    }

    #[test]
    fn truncates_partial_seconds() {
        assert_eq!(format_time(Some(999)), "0:00");
        assert_eq!(format_time(Some(59_999)), "0:59");
    }

    #[test]
    fn no_hour_rollover() {
        assert_eq!(format_time(Some(3_600_000)), "60:00");
        assert_eq!(format_millis(7_322_000), "122:02");
    }
}
