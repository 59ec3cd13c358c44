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

//! Palette for the audio player card.
//!
//! The default preset is the green "setoran" card: pale mint surface, emerald
//! accent for the play button and progress fill, grey secondary buttons.

use gpui::Rgba;
use serde::{Deserialize, Serialize};

use crate::styles::color::{rgba_from_hex, rgba_from_hex_alpha};

/// Every colour the player widget paints with.
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    /// Card surface
    pub card_background: Rgba,
    /// Card outline
    pub card_border: Rgba,

    /// Title text in the header row
    pub title_text: Rgba,
    /// Elapsed/total time text
    pub time_text: Rgba,

    /// Primary accent: header speaker glyph and play button
    pub accent: Rgba,
    /// Accent while hovered
    pub accent_hover: Rgba,
    /// Glyph colour drawn on top of the accent
    pub on_accent: Rgba,

    /// Skip button surface
    pub button_background: Rgba,
    /// Skip button outline
    pub button_border: Rgba,
    /// Skip button glyph
    pub button_icon: Rgba,
    /// Skip button glyph while the player has no duration yet
    pub button_icon_disabled: Rgba,
    /// Skip button surface while hovered
    pub hover: Rgba,

    /// Unfilled part of the seek track
    pub progress_track: Rgba,
    /// Filled part of the seek track
    pub progress_fill: Rgba,
    /// Seek knob
    pub knob: Rgba,
}

impl ThemeConfig {
    /// The light green card the widget ships with.
    pub fn setoran() -> Self {
        Self {
            card_background: rgba_from_hex(0xF0FDF4),
            card_border: rgba_from_hex(0xDCFCE7),

            title_text: rgba_from_hex(0x065F46),
            time_text: rgba_from_hex(0x374151),

            accent: rgba_from_hex(0x10B981),
            accent_hover: rgba_from_hex(0x059669),
            on_accent: rgba_from_hex(0xFFFFFF),

            button_background: rgba_from_hex(0xFFFFFF),
            button_border: rgba_from_hex(0xE5E7EB),
            button_icon: rgba_from_hex(0x6B7280),
            button_icon_disabled: rgba_from_hex_alpha(0x6B7280, 0.4),
            hover: rgba_from_hex(0xF3F4F6),

            progress_track: rgba_from_hex(0xE5E7EB),
            progress_fill: rgba_from_hex(0x10B981),
            knob: rgba_from_hex(0x059669),
        }
    }

    /// Dark variant for hosts with a dark window background.
    pub fn dark() -> Self {
        Self {
            card_background: rgba_from_hex(0x0F1F17),
            card_border: rgba_from_hex(0x1F3A2C),

            title_text: rgba_from_hex(0xA7F3D0),
            time_text: rgba_from_hex(0xD1D5DB),

            accent: rgba_from_hex(0x10B981),
            accent_hover: rgba_from_hex(0x34D399),
            on_accent: rgba_from_hex(0x0F1F17),

            button_background: rgba_from_hex(0x1D1D1D),
            button_border: rgba_from_hex(0x3A3A3A),
            button_icon: rgba_from_hex(0xA0A0A0),
            button_icon_disabled: rgba_from_hex(0x4A4A4A),
            hover: rgba_from_hex(0x2A2A2A),

            progress_track: rgba_from_hex(0x3A3A3A),
            progress_fill: rgba_from_hex(0x10B981),
            knob: rgba_from_hex(0x34D399),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self { Self::setoran() }
}

/// Named palettes selectable from configuration.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ThemePreset {
    #[default]
    Setoran,
    Dark,
}

impl ThemePreset {
    /// Builds the palette for this preset.
    pub fn config(self) -> ThemeConfig {
        match self {
            Self::Setoran => ThemeConfig::setoran(),
            Self::Dark => ThemeConfig::dark(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn preset_names_round_trip_through_strum() {
        assert_eq!(ThemePreset::from_str("dark").unwrap(), ThemePreset::Dark);
        assert_eq!(ThemePreset::Setoran.as_ref(), "setoran");
        assert!(ThemePreset::from_str("neon").is_err());
    }

    #[test]
    fn default_preset_is_the_green_card() {
        let theme = ThemePreset::default().config();
        assert_eq!(theme.accent, rgba_from_hex(0x10B981));
        assert_eq!(theme.knob, rgba_from_hex(0x059669));
    }
}
