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

//! In-memory [`AudioProvider`] for tests.

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::{
    provider::{AudioProvider, StatusPublisher, TransportCommand},
    state::PlaybackStatus,
};

/// Records every command it receives. Status only changes through
/// [`FakeProvider::set_status`] unless echo is enabled, in which case
/// commands are reflected back into the status like a real player would.
#[derive(Debug, Default)]
pub struct FakeProvider {
    publisher: StatusPublisher,
    commands: Mutex<Vec<TransportCommand>>,
    echo: bool,
}

impl FakeProvider {
    pub fn new(status: PlaybackStatus) -> Self {
        Self {
            publisher: StatusPublisher::new(status),
            ..Default::default()
        }
    }

    /// A fake that applies `play`/`pause`/`seek_to` to its own status.
    pub fn echoing(status: PlaybackStatus) -> Self {
        Self {
            echo: true,
            ..Self::new(status)
        }
    }

    /// Pushes a new status to subscribers.
    pub fn set_status(&self, status: PlaybackStatus) { self.publisher.publish(status); }

    pub fn update_status(&self, f: impl FnOnce(&mut PlaybackStatus)) { self.publisher.update(f); }

    pub fn commands(&self) -> Vec<TransportCommand> { self.commands.lock().clone() }

    pub fn take_commands(&self) -> Vec<TransportCommand> { std::mem::take(&mut *self.commands.lock()) }

    pub fn subscriber_count(&self) -> usize { self.publisher.subscriber_count() }

    fn record(&self, command: TransportCommand) {
        self.commands.lock().push(command);
        if !self.echo {
            return;
        }
        self.publisher.update(|status| match command {
            TransportCommand::Play => status.is_playing = true,
            TransportCommand::Pause => status.is_playing = false,
            TransportCommand::SeekTo(position_ms) => status.current_time_ms = position_ms,
        });
    }
}

impl AudioProvider for FakeProvider {
    fn play(&self) { self.record(TransportCommand::Play); }

    fn pause(&self) { self.record(TransportCommand::Pause); }

    fn seek_to(&self, position_ms: u64) { self.record(TransportCommand::SeekTo(position_ms)); }

    fn subscribe(&self) -> watch::Receiver<PlaybackStatus> { self.publisher.subscribe() }

    fn status(&self) -> PlaybackStatus { self.publisher.current() }
}
