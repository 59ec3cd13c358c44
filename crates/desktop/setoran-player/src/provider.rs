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

//! The player handle the widget is built on.
//!
//! A provider owns decoding, buffering and output. The widget only sends it
//! fire-and-forget commands and listens to its status stream.

use std::sync::Arc;

use tokio::sync::watch;

use crate::state::PlaybackStatus;

/// Commands the widget can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportCommand {
    Play,
    Pause,
    /// Absolute position in milliseconds.
    SeekTo(u64),
}

/// Capability set of an external audio player.
///
/// Commands never fail from the widget's point of view; a provider reports
/// trouble through its status (staying in `is_buffering`, or keeping
/// `duration_ms` at 0). Redundant commands, such as `play` while playing
/// or the same seek twice, must be harmless.
pub trait AudioProvider: Send + Sync + 'static {
    fn play(&self);

    fn pause(&self);

    fn seek_to(&self, position_ms: u64);

    /// Subscribes to status updates. The receiver always holds the latest
    /// snapshot; dropping it unsubscribes.
    fn subscribe(&self) -> watch::Receiver<PlaybackStatus>;

    /// Latest status snapshot.
    fn status(&self) -> PlaybackStatus { *self.subscribe().borrow() }

    /// Dispatches a `TransportCommand`.
    fn execute(&self, command: TransportCommand) {
        match command {
            TransportCommand::Play => self.play(),
            TransportCommand::Pause => self.pause(),
            TransportCommand::SeekTo(position_ms) => self.seek_to(position_ms),
        }
    }
}

impl<P: AudioProvider + ?Sized> AudioProvider for Arc<P> {
    fn play(&self) { (**self).play(); }

    fn pause(&self) { (**self).pause(); }

    fn seek_to(&self, position_ms: u64) { (**self).seek_to(position_ms); }

    fn subscribe(&self) -> watch::Receiver<PlaybackStatus> { (**self).subscribe() }

    fn status(&self) -> PlaybackStatus { (**self).status() }
}

/// Sending half of a provider's status stream.
///
/// Subscribers are only woken when the snapshot actually changes, so a
/// provider can publish on a fixed tick without forcing redundant re-renders.
#[derive(Debug, Clone)]
pub struct StatusPublisher {
    tx: Arc<watch::Sender<PlaybackStatus>>,
}

impl Default for StatusPublisher {
    fn default() -> Self { Self::new(PlaybackStatus::default()) }
}

impl StatusPublisher {
    pub fn new(initial: PlaybackStatus) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    /// Replaces the snapshot. Returns whether subscribers were notified.
    pub fn publish(&self, status: PlaybackStatus) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == status {
                false
            } else {
                *current = status;
                true
            }
        })
    }

    /// Edits the snapshot in place. Returns whether it changed.
    pub fn update(&self, f: impl FnOnce(&mut PlaybackStatus)) -> bool {
        self.tx.send_if_modified(|current| {
            let before = *current;
            f(current);
            *current != before
        })
    }

    pub fn current(&self) -> PlaybackStatus { *self.tx.borrow() }

    pub fn subscribe(&self) -> watch::Receiver<PlaybackStatus> { self.tx.subscribe() }

    pub fn subscriber_count(&self) -> usize { self.tx.receiver_count() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn identical_snapshots_do_not_wake_subscribers() {
        let publisher = StatusPublisher::default();
        let mut rx = publisher.subscribe();

        assert!(!publisher.publish(PlaybackStatus::default()));
        assert!(!rx.has_changed().unwrap());

        let playing = PlaybackStatus {
            is_playing: true,
            duration_ms: 10_000,
            ..Default::default()
        };
        assert!(publisher.publish(playing));
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), playing);

        assert!(!publisher.update(|s| s.is_playing = true));
        assert!(publisher.update(|s| s.current_time_ms = 500));
        assert_eq!(publisher.current().current_time_ms, 500);
    }

    #[test]
    fn publishing_without_subscribers_still_updates() {
        let publisher = StatusPublisher::default();
        assert_eq!(publisher.subscriber_count(), 0);
        publisher.update(|s| s.duration_ms = 42);
        assert_eq!(publisher.current().duration_ms, 42);
    }

    #[test]
    fn dropping_a_receiver_unsubscribes() {
        let publisher = StatusPublisher::default();
        let rx = publisher.subscribe();
        assert_eq!(publisher.subscriber_count(), 1);
        drop(rx);
        assert_eq!(publisher.subscriber_count(), 0);
    }
}
