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

//! Setoran Player - the audio player widget.
//!
//! The widget never touches audio itself. It is handed an [`AudioProvider`]
//! (play, pause, seek, status stream), turns taps and drags into commands
//! against it, and renders whatever status the provider pushes back.

pub mod config;

pub use config::PlayerConfig;

pub mod provider;

pub use provider::{AudioProvider, StatusPublisher, TransportCommand};

pub mod state;

pub use state::{PlaybackStatus, SeekTrackGeometry};

pub mod format;

pub use format::format_time;

pub mod controller;
pub mod seek;

pub use controller::TransportController;
pub use seek::SeekBarInterpreter;

pub mod audio_player;

pub use audio_player::{AudioPlayer, AudioPlayerProps};

pub mod util;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
