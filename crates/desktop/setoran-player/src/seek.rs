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

//! Seek-bar interpreter: pointer x on the track to an absolute seek.

use crate::{
    controller::TransportController,
    state::{SeekTrackGeometry, sanitize_width},
};

/// Tracks the measured seek track and the scrub gesture in progress.
///
/// Touches arrive as track-local x coordinates (or window coordinates via the
/// `*_window` helpers) and are turned into `seek_to` commands on the
/// transport. Nothing is issued until the track has been measured and the
/// player knows its duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeekBarInterpreter {
    geometry: SeekTrackGeometry,
    scrubbing: bool,
}

impl SeekBarInterpreter {
    pub fn new() -> Self { Self::default() }

    pub const fn geometry(&self) -> SeekTrackGeometry { self.geometry }

    /// Records the track width after a layout pass.
    pub fn on_track_measured(&mut self, width_px: f32) {
        self.geometry.width_px = sanitize_width(width_px);
    }

    /// Records the track's window origin and width after a layout pass.
    pub fn on_track_bounds(&mut self, origin_x: f32, width_px: f32) {
        if origin_x.is_finite() {
            self.geometry.origin_x = origin_x;
        }
        self.on_track_measured(width_px);
    }

    /// Maps a track-local x to a position and seeks there.
    ///
    /// Returns the issued target in milliseconds, `None` when the track is
    /// unmeasured or the duration unknown.
    pub fn touch_to_seek_time(&self, local_x: f32, transport: &TransportController) -> Option<u64> {
        let duration_ms = transport.status().duration_ms;
        if duration_ms == 0 {
            tracing::trace!(local_x, "seek ignored, duration unknown");
            return None;
        }
        let Some(ratio) = self.geometry.ratio_at(local_x) else {
            tracing::trace!(local_x, "seek ignored, track not measured");
            return None;
        };
        let target = (ratio * duration_ms as f64).round() as u64;
        transport.seek_to(target)
    }

    /// Same as [`Self::touch_to_seek_time`] for a window x coordinate.
    pub fn touch_window_x(&self, window_x: f32, transport: &TransportController) -> Option<u64> {
        self.touch_to_seek_time(self.geometry.local_x(window_x), transport)
    }

    /// Starts a scrub gesture and seeks to the press position.
    pub fn begin_scrub(&mut self, window_x: f32, transport: &TransportController) -> Option<u64> {
        self.scrubbing = true;
        self.touch_window_x(window_x, transport)
    }

    /// Follows the pointer while a scrub is active. Moves outside a gesture
    /// are ignored.
    pub fn scrub_to(&self, window_x: f32, transport: &TransportController) -> Option<u64> {
        if !self.scrubbing {
            return None;
        }
        self.touch_window_x(window_x, transport)
    }

    /// Handles a pointer move during a scrub. A move with the primary button
    /// no longer held means the release was missed (it happened outside the
    /// window), so the scrub ends without seeking.
    pub fn pointer_moved(
        &mut self,
        window_x: f32,
        button_held: bool,
        transport: &TransportController,
    ) -> Option<u64> {
        if !button_held {
            if self.scrubbing {
                tracing::debug!("scrub ended by a move without the button held");
            }
            self.end_scrub();
            return None;
        }
        self.scrub_to(window_x, transport)
    }

    pub fn end_scrub(&mut self) { self.scrubbing = false; }

    pub const fn is_scrubbing(&self) -> bool { self.scrubbing }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use super::*;
    use crate::{PlaybackStatus, TransportCommand, testing::FakeProvider};

    fn setup(duration_ms: u64) -> (Arc<FakeProvider>, TransportController) {
        let provider = Arc::new(FakeProvider::new(PlaybackStatus {
            duration_ms,
            ..Default::default()
        }));
        let transport = TransportController::new(provider.clone(), Duration::from_secs(10));
        (provider, transport)
    }

    #[test]
    fn touches_are_clamped_to_the_track() {
        let (provider, transport) = setup(120_000);
        let mut seek = SeekBarInterpreter::new();
        seek.on_track_measured(300.0);

        assert_eq!(seek.touch_to_seek_time(-50.0, &transport), Some(0));
        assert_eq!(seek.touch_to_seek_time(350.0, &transport), Some(120_000));
        assert_eq!(seek.touch_to_seek_time(150.0, &transport), Some(60_000));
        assert_eq!(provider.commands(), vec![
            TransportCommand::SeekTo(0),
            TransportCommand::SeekTo(120_000),
            TransportCommand::SeekTo(60_000),
        ]);
    }

    #[test]
    fn unknown_duration_issues_nothing() {
        let (provider, transport) = setup(0);
        let mut seek = SeekBarInterpreter::new();
        seek.on_track_measured(300.0);
        assert_eq!(seek.touch_to_seek_time(150.0, &transport), None);
        assert!(provider.commands().is_empty());
    }

    #[test]
    fn unmeasured_track_issues_nothing() {
        let (provider, transport) = setup(120_000);
        let mut seek = SeekBarInterpreter::new();
        assert_eq!(seek.touch_to_seek_time(150.0, &transport), None);

        seek.on_track_measured(-10.0);
        assert_eq!(seek.touch_to_seek_time(150.0, &transport), None);
        assert!(provider.commands().is_empty());
    }

    #[test]
    fn scrub_uses_window_coordinates() {
        let (provider, transport) = setup(100_000);
        let mut seek = SeekBarInterpreter::new();
        seek.on_track_bounds(40.0, 200.0);

        assert_eq!(seek.scrub_to(140.0, &transport), None);
        assert_eq!(seek.begin_scrub(40.0, &transport), Some(0));
        assert!(seek.is_scrubbing());
        assert_eq!(seek.scrub_to(140.0, &transport), Some(50_000));
        assert_eq!(seek.scrub_to(1_000.0, &transport), Some(100_000));
        seek.end_scrub();
        assert_eq!(seek.scrub_to(90.0, &transport), None);

        assert_eq!(provider.commands().len(), 3);
    }

    #[test]
    fn move_without_button_ends_the_scrub() {
        let (provider, transport) = setup(100_000);
        let mut seek = SeekBarInterpreter::new();
        seek.on_track_bounds(0.0, 200.0);

        assert_eq!(seek.begin_scrub(100.0, &transport), Some(50_000));
        assert_eq!(seek.pointer_moved(150.0, true, &transport), Some(75_000));

        // Released outside the window: the next hover must not seek.
        assert_eq!(seek.pointer_moved(20.0, false, &transport), None);
        assert!(!seek.is_scrubbing());
        assert_eq!(seek.pointer_moved(40.0, true, &transport), None);

        assert_eq!(provider.commands(), vec![
            TransportCommand::SeekTo(50_000),
            TransportCommand::SeekTo(75_000),
        ]);
    }

    #[test]
    fn relayout_replaces_geometry() {
        let (_provider, transport) = setup(120_000);
        let mut seek = SeekBarInterpreter::new();
        seek.on_track_measured(300.0);
        seek.on_track_measured(600.0);
        assert_eq!(seek.touch_to_seek_time(150.0, &transport), Some(30_000));
    }
}
