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

/// What the centre transport button shows.
///
/// Exactly one glyph is visible at a time; buffering wins over the
/// playing/paused distinction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::AsRefStr, strum_macros::Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum PlaybackGlyph {
    /// The provider is still loading or stalled.
    Buffering,
    /// Audio is running; the button offers "pause".
    Playing,
    /// Audio is stopped; the button offers "play".
    Paused,
}

impl PlaybackGlyph {
    /// Picks the glyph for a status snapshot.
    pub const fn select(is_playing: bool, is_buffering: bool) -> Self {
        if is_buffering {
            Self::Buffering
        } else if is_playing {
            Self::Playing
        } else {
            Self::Paused
        }
    }

    /// Text drawn inside the button.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Buffering => "...",
            Self::Playing => "❚❚",
            Self::Paused => "▶",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffering_takes_priority() {
        assert_eq!(PlaybackGlyph::select(true, true), PlaybackGlyph::Buffering);
        assert_eq!(PlaybackGlyph::select(false, true), PlaybackGlyph::Buffering);
    }

    #[test]
    fn playing_shows_pause_symbol() {
        let glyph = PlaybackGlyph::select(true, false);
        assert_eq!(glyph, PlaybackGlyph::Playing);
        assert_eq!(glyph.symbol(), "❚❚");
        assert_eq!(PlaybackGlyph::select(false, false).symbol(), "▶");
        assert_eq!(PlaybackGlyph::Buffering.as_ref(), "buffering");
    }
}
