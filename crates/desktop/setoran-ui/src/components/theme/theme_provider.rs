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

//! Global theme access for the player widget.
//!
//! Components read the palette through `ThemeExt`:
//! ```ignore
//! let theme = cx.theme();
//! ```

use gpui::{App, Global};

use super::theme_config::{ThemeConfig, ThemePreset};

/// Holds the active palette as a GPUI global.
pub struct ThemeProvider {
    theme: ThemeConfig,
}

impl Global for ThemeProvider {}

impl ThemeProvider {
    pub fn new(theme: ThemeConfig) -> Self { Self { theme } }

    pub fn theme(&self) -> &ThemeConfig { &self.theme }

    pub fn set_theme(&mut self, theme: ThemeConfig) { self.theme = theme; }

    /// Registers the default (setoran) palette. Call once during startup,
    /// before the first player view renders.
    pub fn init(cx: &mut App) { Self::init_with_preset(cx, ThemePreset::default()); }

    /// Registers the palette for `preset`.
    pub fn init_with_preset(cx: &mut App, preset: ThemePreset) {
        cx.set_global(Self::new(preset.config()));
    }
}

/// Extension trait for convenient theme access from any context.
pub trait ThemeExt {
    /// Returns the active palette.
    fn theme(&self) -> &ThemeConfig;
}

impl ThemeExt for App {
    fn theme(&self) -> &ThemeConfig { self.global::<ThemeProvider>().theme() }
}
