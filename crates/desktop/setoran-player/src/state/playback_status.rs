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

use serde::{Deserialize, Serialize};
use setoran_ui::models::PlaybackGlyph;

use crate::format::{ZERO_TIME, format_millis};

/// Snapshot of the provider's playback state.
///
/// A `duration_ms` of zero means the duration is not known yet (metadata
/// still loading); every seek and skip is disabled in that state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaybackStatus {
    /// Current playback position
    pub current_time_ms: u64,
    /// Total clip length, 0 while unknown
    pub duration_ms: u64,
    /// Whether audio is currently running
    pub is_playing: bool,
    /// Whether the provider is loading or stalled
    pub is_buffering: bool,
}

impl PlaybackStatus {
    /// Whether the provider has reported a duration yet.
    pub const fn has_duration(&self) -> bool { self.duration_ms > 0 }

    /// Played fraction in `[0, 1]`.
    pub fn progress_fraction(&self) -> f32 { progress_fraction(self.current_time_ms, self.duration_ms) }

    /// Played percentage in `[0, 100]`.
    pub fn progress_percent(&self) -> f32 { progress_percent(self.current_time_ms, self.duration_ms) }

    /// Glyph for the centre transport button.
    pub const fn glyph(&self) -> PlaybackGlyph {
        PlaybackGlyph::select(self.is_playing, self.is_buffering)
    }

    /// Elapsed time label.
    pub fn elapsed_label(&self) -> String { format_millis(self.current_time_ms) }

    /// Total time label, `"0:00"` until the duration is known.
    pub fn total_label(&self) -> String {
        if self.has_duration() {
            format_millis(self.duration_ms)
        } else {
            ZERO_TIME.to_string()
        }
    }
}

/// `current / duration` clamped to `[0, 1]`, or 0 when the duration is
/// unknown.
pub fn progress_fraction(current_ms: u64, duration_ms: u64) -> f32 {
    if duration_ms == 0 {
        return 0.0;
    }
    (current_ms as f64 / duration_ms as f64).clamp(0.0, 1.0) as f32
}

/// `progress_fraction` scaled to percent.
pub fn progress_percent(current_ms: u64, duration_ms: u64) -> f32 {
    100.0 * progress_fraction(current_ms, duration_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_duration_has_no_progress() {
        assert!(progress_percent(5_000, 0).abs() < f32::EPSILON);
        let status = PlaybackStatus {
            current_time_ms: 12_000,
            ..Default::default()
        };
        assert!(status.progress_fraction().abs() < f32::EPSILON);
        assert_eq!(status.total_label(), "0:00");
        assert_eq!(status.elapsed_label(), "0:12");
    }

    #[test]
    fn progress_stays_within_bounds() {
        for duration in [1_u64, 999, 120_000, 3_600_000] {
            for current in [0, duration / 3, duration / 2, duration] {
                let p = progress_percent(current, duration);
                assert!((0.0..=100.0).contains(&p), "{current}/{duration} -> {p}");
            }
        }
    }

    #[test]
    fn position_past_duration_is_clamped() {
        assert!((progress_percent(130_000, 120_000) - 100.0).abs() < f32::EPSILON);
        assert!((progress_percent(60_000, 120_000) - 50.0).abs() < f32::EPSILON);
    }

    #[test]
    fn glyph_follows_status() {
        let mut status = PlaybackStatus {
            is_playing: true,
            is_buffering: true,
            ..Default::default()
        };
        assert_eq!(status.glyph(), PlaybackGlyph::Buffering);
        status.is_buffering = false;
        assert_eq!(status.glyph(), PlaybackGlyph::Playing);
        status.is_playing = false;
        assert_eq!(status.glyph(), PlaybackGlyph::Paused);
    }
}
