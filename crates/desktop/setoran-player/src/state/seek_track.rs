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

/// Measured geometry of the seek track.
///
/// Width is 0 until the first layout pass and is refreshed on every
/// re-layout. Touch positions are relative to `origin_x`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SeekTrackGeometry {
    /// Window x of the track's left edge
    pub origin_x: f32,
    /// Track width in pixels
    pub width_px: f32,
}

impl SeekTrackGeometry {
    /// Whether a touch can be mapped to a position yet.
    pub fn is_measured(&self) -> bool { self.width_px > 0.0 }

    /// Converts a window x coordinate into a track-local one.
    pub fn local_x(&self, window_x: f32) -> f32 { window_x - self.origin_x }

    /// Maps a track-local x to a ratio in `[0, 1]`.
    ///
    /// `None` until the track has a positive width or for a non-finite x.
    pub fn ratio_at(&self, local_x: f32) -> Option<f64> {
        if !self.is_measured() || !local_x.is_finite() {
            return None;
        }
        Some((f64::from(local_x) / f64::from(self.width_px)).clamp(0.0, 1.0))
    }
}

/// Sanitises a measured width: negative or NaN widths count as unmeasured.
pub(crate) fn sanitize_width(width_px: f32) -> f32 {
    if width_px.is_finite() && width_px > 0.0 {
        width_px
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmeasured_track_has_no_ratio() {
        let geometry = SeekTrackGeometry::default();
        assert!(!geometry.is_measured());
        assert_eq!(geometry.ratio_at(10.0), None);
    }

    #[test]
    fn ratio_is_clamped() {
        let geometry = SeekTrackGeometry {
            origin_x: 20.0,
            width_px: 300.0,
        };
        assert_eq!(geometry.ratio_at(-50.0), Some(0.0));
        assert_eq!(geometry.ratio_at(350.0), Some(1.0));
        assert_eq!(geometry.ratio_at(150.0), Some(0.5));
        assert_eq!(geometry.ratio_at(f32::NAN), None);
        assert!((geometry.local_x(170.0) - 150.0).abs() < f32::EPSILON);
    }

    #[test]
    fn bad_widths_count_as_unmeasured() {
        assert!(sanitize_width(-3.0).abs() < f32::EPSILON);
        assert!(sanitize_width(f32::NAN).abs() < f32::EPSILON);
        assert!((sanitize_width(42.0) - 42.0).abs() < f32::EPSILON);
    }
}
