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

//! Skip-back, play/pause and skip-forward buttons.
//!
//! The skip buttons are dimmed and inert while the player has no duration;
//! the centre button always accepts a press.

use gpui::{
    App, Div, ElementId, InteractiveElement, IntoElement, ParentElement, Stateful,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::{components::theme::ThemeExt, models::PlaybackGlyph};

type ClickHandler = Box<dyn Fn(&mut Window, &mut App) + 'static>;

const SKIP_BUTTON_SIZE: f32 = 36.0;
const PLAY_BUTTON_SIZE: f32 = 48.0;

/// Transport buttons for a single audio clip.
///
/// Layout:
/// ```text
/// (‹) (▶) (›)
/// ```
#[derive(IntoElement)]
pub struct TransportButtons {
    id: ElementId,
    glyph: PlaybackGlyph,
    skip_enabled: bool,
    on_skip_back: Option<ClickHandler>,
    on_play_pause: Option<ClickHandler>,
    on_skip_forward: Option<ClickHandler>,
}

impl TransportButtons {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            glyph: PlaybackGlyph::Paused,
            skip_enabled: false,
            on_skip_back: None,
            on_play_pause: None,
            on_skip_forward: None,
        }
    }

    /// Sets the glyph shown in the centre button.
    pub const fn glyph(mut self, glyph: PlaybackGlyph) -> Self {
        self.glyph = glyph;
        self
    }

    /// Enables the skip buttons (the player knows its duration).
    pub const fn skip_enabled(mut self, enabled: bool) -> Self {
        self.skip_enabled = enabled;
        self
    }

    pub fn on_skip_back(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_skip_back = Some(Box::new(handler));
        self
    }

    pub fn on_play_pause(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_play_pause = Some(Box::new(handler));
        self
    }

    pub fn on_skip_forward(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_skip_forward = Some(Box::new(handler));
        self
    }
}

fn skip_button(
    id: &'static str,
    symbol: &'static str,
    enabled: bool,
    handler: Option<ClickHandler>,
    cx: &App,
) -> Stateful<Div> {
    let theme = cx.theme();
    let hover_bg = theme.hover;

    div()
        .id(id)
        .size(px(SKIP_BUTTON_SIZE))
        .rounded_full()
        .bg(theme.button_background)
        .border_1()
        .border_color(theme.button_border)
        .flex()
        .items_center()
        .justify_center()
        .text_size(px(18.0))
        .text_color(if enabled {
            theme.button_icon
        } else {
            theme.button_icon_disabled
        })
        .when(enabled, |el| {
            el.cursor_pointer().hover(move |style| style.bg(hover_bg))
        })
        .when_some(handler.filter(|_| enabled), |el, handler| {
            el.on_click(move |_event, window, cx| handler(window, cx))
        })
        .child(symbol)
}

impl RenderOnce for TransportButtons {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let skip_enabled = self.skip_enabled;
        let glyph = self.glyph;
        let on_play_pause = self.on_play_pause;

        let back = skip_button("skip-back-btn", "‹", skip_enabled, self.on_skip_back, cx);
        let forward = skip_button(
            "skip-forward-btn",
            "›",
            skip_enabled,
            self.on_skip_forward,
            cx,
        );

        let theme = cx.theme();
        let accent_hover = theme.accent_hover;

        div()
            .id(self.id)
            .flex()
            .items_center()
            .gap(px(12.0))
            .child(back)
            .child(
                div()
                    .id("play-btn")
                    .size(px(PLAY_BUTTON_SIZE))
                    .rounded_full()
                    .bg(theme.accent)
                    .shadow_md()
                    .flex()
                    .items_center()
                    .justify_center()
                    .cursor_pointer()
                    .text_color(theme.on_accent)
                    .text_size(px(if glyph == PlaybackGlyph::Buffering {
                        14.0
                    } else {
                        20.0
                    }))
                    .font_weight(gpui::FontWeight::BOLD)
                    .hover(move |style| style.bg(accent_hover))
                    .when_some(on_play_pause, |el, handler| {
                        el.on_click(move |_event, window, cx| handler(window, cx))
                    })
                    .child(glyph.symbol()),
            )
            .child(forward)
    }
}
