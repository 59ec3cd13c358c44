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

//! Transport controller: play/pause and relative skips.

use std::{sync::Arc, time::Duration};

use tokio::sync::watch;

use crate::{
    provider::{AudioProvider, TransportCommand},
    state::PlaybackStatus,
};

/// Maps discrete transport actions onto an injected [`AudioProvider`].
///
/// Every decision is made against the provider's latest status; the
/// controller keeps no playback state of its own.
#[derive(Clone)]
pub struct TransportController {
    provider: Arc<dyn AudioProvider>,
    skip_interval: Duration,
}

impl std::fmt::Debug for TransportController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportController")
            .field("skip_interval", &self.skip_interval)
            .field("status", &self.status())
            .finish_non_exhaustive()
    }
}

impl TransportController {
    pub fn new(provider: Arc<dyn AudioProvider>, skip_interval: Duration) -> Self {
        Self {
            provider,
            skip_interval,
        }
    }

    pub fn status(&self) -> PlaybackStatus { self.provider.status() }

    pub fn subscribe(&self) -> watch::Receiver<PlaybackStatus> { self.provider.subscribe() }

    pub const fn skip_interval(&self) -> Duration { self.skip_interval }

    /// Pauses when the provider reports playing, plays otherwise.
    pub fn toggle_play_pause(&self) -> TransportCommand {
        let command = if self.status().is_playing {
            TransportCommand::Pause
        } else {
            TransportCommand::Play
        };
        tracing::debug!(?command, "toggle play/pause");
        self.provider.execute(command);
        command
    }

    /// Seeks `delta_secs` relative to the current position, clamped to
    /// `[0, duration]`. Returns the issued target, or `None` while the
    /// duration is unknown.
    pub fn skip(&self, delta_secs: i64) -> Option<u64> {
        let status = self.status();
        if !status.has_duration() {
            tracing::trace!(delta_secs, "skip ignored, duration unknown");
            return None;
        }
        let target = skip_target(status.current_time_ms, status.duration_ms, delta_secs);
        tracing::debug!(delta_secs, target_ms = target, "skip");
        self.provider.seek_to(target);
        Some(target)
    }

    /// Skips back by the configured interval.
    pub fn skip_back(&self) -> Option<u64> { self.skip(-self.skip_interval_secs()) }

    /// Skips forward by the configured interval.
    pub fn skip_forward(&self) -> Option<u64> { self.skip(self.skip_interval_secs()) }

    /// Seeks to an absolute position, clamped to the duration. `None` while
    /// the duration is unknown.
    pub fn seek_to(&self, position_ms: u64) -> Option<u64> {
        let status = self.status();
        if !status.has_duration() {
            tracing::trace!(position_ms, "seek ignored, duration unknown");
            return None;
        }
        let target = position_ms.min(status.duration_ms);
        tracing::debug!(target_ms = target, "seek");
        self.provider.seek_to(target);
        Some(target)
    }

    fn skip_interval_secs(&self) -> i64 {
        i64::try_from(self.skip_interval.as_secs()).unwrap_or(i64::MAX)
    }
}

/// `clamp(current + delta_secs * 1000, 0, duration)`.
fn skip_target(current_ms: u64, duration_ms: u64, delta_secs: i64) -> u64 {
    let current = i128::from(current_ms);
    let delta = i128::from(delta_secs) * 1000;
    (current + delta).clamp(0, i128::from(duration_ms)) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeProvider;

    fn controller(status: PlaybackStatus) -> (Arc<FakeProvider>, TransportController) {
        let provider = Arc::new(FakeProvider::new(status));
        let controller = TransportController::new(provider.clone(), Duration::from_secs(10));
        (provider, controller)
    }

    fn at(current_time_ms: u64, duration_ms: u64) -> PlaybackStatus {
        PlaybackStatus {
            current_time_ms,
            duration_ms,
            ..Default::default()
        }
    }

    #[test]
    fn skip_back_clamps_at_zero() {
        let (provider, controller) = controller(at(5_000, 120_000));
        assert_eq!(controller.skip(-10), Some(0));
        assert_eq!(provider.commands(), vec![TransportCommand::SeekTo(0)]);
    }

    #[test]
    fn skip_forward_clamps_at_duration() {
        let (provider, controller) = controller(at(119_000, 120_000));
        assert_eq!(controller.skip(10), Some(120_000));
        assert_eq!(provider.commands(), vec![TransportCommand::SeekTo(120_000)]);
    }

    #[test]
    fn skip_within_range() {
        let (provider, controller) = controller(at(30_000, 120_000));
        assert_eq!(controller.skip_forward(), Some(40_000));
        assert_eq!(controller.skip_back(), Some(20_000));
        assert_eq!(provider.commands(), vec![
            TransportCommand::SeekTo(40_000),
            TransportCommand::SeekTo(20_000)
        ]);
    }

    #[test]
    fn nothing_issued_while_duration_unknown() {
        let (provider, controller) = controller(at(5_000, 0));
        assert_eq!(controller.skip(10), None);
        assert_eq!(controller.skip(-10), None);
        assert_eq!(controller.seek_to(1_000), None);
        assert!(provider.commands().is_empty());
    }

    #[test]
    fn toggle_follows_reported_state() {
        let (provider, controller) = controller(at(0, 1_000));
        assert_eq!(controller.toggle_play_pause(), TransportCommand::Play);

        provider.set_status(PlaybackStatus {
            is_playing: true,
            ..at(0, 1_000)
        });
        assert_eq!(controller.toggle_play_pause(), TransportCommand::Pause);
        assert_eq!(provider.commands(), vec![
            TransportCommand::Play,
            TransportCommand::Pause
        ]);
    }

    #[test]
    fn toggle_works_before_metadata() {
        let (provider, controller) = controller(PlaybackStatus {
            is_buffering: true,
            ..Default::default()
        });
        assert_eq!(controller.toggle_play_pause(), TransportCommand::Play);
        assert_eq!(provider.commands(), vec![TransportCommand::Play]);
    }

    #[test]
    fn absolute_seek_is_clamped() {
        let (provider, controller) = controller(at(0, 90_000));
        assert_eq!(controller.seek_to(100_000), Some(90_000));
        assert_eq!(provider.commands(), vec![TransportCommand::SeekTo(90_000)]);
    }

    #[test]
    fn skip_target_handles_extremes() {
        assert_eq!(skip_target(0, u64::MAX, i64::MAX), u64::MAX);
        assert_eq!(skip_target(u64::MAX, u64::MAX, i64::MIN), 0);
    }
}
