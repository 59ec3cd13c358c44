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

//! Data the widget renders from.
//!
//! `PlaybackStatus` is owned by the provider and only ever read here;
//! `SeekTrackGeometry` is the one piece of state the widget measures itself.

mod playback_status;
mod seek_track;

pub use playback_status::{PlaybackStatus, progress_fraction, progress_percent};
pub use seek_track::SeekTrackGeometry;
pub(crate) use seek_track::sanitize_width;
