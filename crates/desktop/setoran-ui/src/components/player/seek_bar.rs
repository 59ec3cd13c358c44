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

//! Seek bar: a thin track with a filled portion and a round knob.
//!
//! The bar itself is stateless. It reports the measured bounds of the track
//! after every prepaint and the window position of a left press; turning
//! those into a seek target is the caller's job.

use gpui::{
    App, Bounds, ElementId, InteractiveElement, IntoElement, MouseButton, ParentElement, Pixels,
    Point, Styled, Window, div, prelude::*, px, relative,
};

use crate::components::theme::ThemeExt;

/// Height of the invisible hit area around the track.
pub const SEEK_AREA_HEIGHT: f32 = 30.0;
/// Height of the visible track.
pub const TRACK_HEIGHT: f32 = 6.0;
/// Diameter of the knob.
pub const KNOB_SIZE: f32 = 14.0;

type BoundsHandler = Box<dyn Fn(Bounds<Pixels>, &mut Window, &mut App) + 'static>;
type PressHandler = Box<dyn Fn(Point<Pixels>, &mut Window, &mut App) + 'static>;

/// Layout:
/// ```text
/// ━━━━━━━━━━━●─────────────────
/// ```
#[derive(IntoElement)]
pub struct SeekBar {
    id: ElementId,
    fraction: f32,
    on_track_bounds: Option<BoundsHandler>,
    on_press: Option<PressHandler>,
}

impl SeekBar {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            fraction: 0.0,
            on_track_bounds: None,
            on_press: None,
        }
    }

    /// Sets the filled fraction. Values outside `[0, 1]` are clamped; NaN
    /// renders as empty.
    pub fn fraction(mut self, fraction: f32) -> Self {
        self.fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        self
    }

    /// Called with the track bounds after every prepaint, so the caller
    /// always has the latest width (resize, rotation, first layout).
    pub fn on_track_bounds(
        mut self,
        handler: impl Fn(Bounds<Pixels>, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_track_bounds = Some(Box::new(handler));
        self
    }

    /// Called with the window position of a left press inside the hit area.
    pub fn on_press(
        mut self,
        handler: impl Fn(Point<Pixels>, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_press = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for SeekBar {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();
        let fraction = self.fraction;
        let on_track_bounds = self.on_track_bounds;

        let track = div()
            .relative()
            .w_full()
            .h(px(TRACK_HEIGHT))
            .rounded(px(TRACK_HEIGHT / 2.0))
            .bg(theme.progress_track)
            .child(
                div()
                    .h_full()
                    .w(relative(fraction))
                    .rounded(px(TRACK_HEIGHT / 2.0))
                    .bg(theme.progress_fill),
            )
            // Knob centre sits on the fill edge.
            .child(
                div()
                    .absolute()
                    .top(px(-(KNOB_SIZE - TRACK_HEIGHT) / 2.0))
                    .left(relative(fraction))
                    .ml(px(-KNOB_SIZE / 2.0))
                    .size(px(KNOB_SIZE))
                    .rounded_full()
                    .bg(theme.knob),
            );

        div()
            .w_full()
            .h(px(SEEK_AREA_HEIGHT))
            .mt(px(10.0))
            .flex()
            .flex_col()
            .justify_center()
            .cursor_pointer()
            .on_children_prepainted(move |bounds, window, cx| {
                if let (Some(handler), Some(track_bounds)) = (&on_track_bounds, bounds.first()) {
                    handler(*track_bounds, window, cx);
                }
            })
            .when_some(self.on_press, |el, handler| {
                el.on_mouse_down(MouseButton::Left, move |event, window, cx| {
                    handler(event.position, window, cx);
                })
            })
            .child(track)
            .id(self.id)
    }
}
