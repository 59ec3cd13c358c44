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

//! Player widget pieces.
//!
//! - `PlayerHeader`: speaker glyph and title
//! - `TransportButtons`: skip back, play/pause/buffering, skip forward
//! - `TimeReadout`: "elapsed / total"
//! - `SeekBar`: track, fill and knob with press/measure hooks

mod player_header;
mod seek_bar;
mod time_readout;
mod transport_buttons;

pub use player_header::PlayerHeader;
pub use seek_bar::{KNOB_SIZE, SEEK_AREA_HEIGHT, SeekBar, TRACK_HEIGHT};
pub use time_readout::TimeReadout;
pub use transport_buttons::TransportButtons;
