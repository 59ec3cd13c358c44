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

use std::time::Duration;

use serde::{Deserialize, Serialize};
use setoran_common_telemetry::LoggingOptions;
use setoran_ui::components::theme::ThemePreset;
use smart_default::SmartDefault;

/// Player configuration, deserialized from `setoran.toml` by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SmartDefault, bon::Builder)]
#[serde(default)]
#[builder(on(String, into))]
pub struct PlayerConfig {
    /// Seconds moved by the skip buttons.
    #[default = 10]
    #[builder(default = 10)]
    pub skip_interval_secs: u64,

    /// Header title used when the caller passes none.
    #[default = "Audio Setoran"]
    #[builder(default = "Audio Setoran".to_string())]
    pub default_title: String,

    /// How often the audio backend republishes its position.
    #[default = 200]
    #[builder(default = 200)]
    pub status_tick_ms: u64,

    #[builder(default)]
    pub theme: ThemePreset,

    #[builder(default)]
    pub logging: LoggingOptions,
}

impl PlayerConfig {
    pub const fn skip_interval(&self) -> Duration { Duration::from_secs(self.skip_interval_secs) }

    /// Status tick, never below 10ms.
    pub fn status_tick(&self) -> Duration { Duration::from_millis(self.status_tick_ms.max(10)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_matches_defaults() {
        let config = PlayerConfig::builder().build();
        assert_eq!(config, PlayerConfig::default());
        assert_eq!(config.skip_interval(), Duration::from_secs(10));
        assert_eq!(config.status_tick(), Duration::from_millis(200));
        assert_eq!(config.default_title, "Audio Setoran");
        assert_eq!(config.theme, ThemePreset::Setoran);
    }

    #[test]
    fn tick_has_a_floor() {
        let config = PlayerConfig::builder().status_tick_ms(0).build();
        assert_eq!(config.status_tick(), Duration::from_millis(10));
    }

    #[test]
    fn overrides_apply() {
        let config = PlayerConfig::builder()
            .skip_interval_secs(30)
            .default_title("Murottal")
            .theme(ThemePreset::Dark)
            .build();
        assert_eq!(config.skip_interval(), Duration::from_secs(30));
        assert_eq!(config.default_title, "Murottal");
        assert_eq!(config.theme, ThemePreset::Dark);
    }
}
