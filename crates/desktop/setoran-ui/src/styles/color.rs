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

//! Hex helpers for GPUI's `Rgba`, so palettes can be written as
//! `0x10B981` instead of float triples.

use gpui::Rgba;

/// Converts a 24-bit hex colour to an opaque `Rgba`.
///
/// # Example
/// ```ignore
/// let emerald = rgba_from_hex(0x10B981);
/// ```
pub fn rgba_from_hex(hex: u32) -> Rgba { rgba_from_hex_alpha(hex, 1.0) }

/// Converts a 24-bit hex colour to an `Rgba` with the given opacity.
pub fn rgba_from_hex_alpha(hex: u32, alpha: f32) -> Rgba {
    let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
    let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
    let b = (hex & 0xFF) as f32 / 255.0;
    Rgba { r, g, b, a: alpha }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_channels() {
        let c = rgba_from_hex(0xFF8000);
        assert!((c.r - 1.0).abs() < f32::EPSILON);
        assert!((c.g - 128.0 / 255.0).abs() < f32::EPSILON);
        assert!(c.b.abs() < f32::EPSILON);
        assert!((c.a - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn keeps_alpha() {
        let c = rgba_from_hex_alpha(0x000000, 0.25);
        assert!((c.a - 0.25).abs() < f32::EPSILON);
    }
}
