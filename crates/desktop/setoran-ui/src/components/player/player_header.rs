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

use gpui::{
    App, FontWeight, IntoElement, ParentElement, SharedString, Styled, Window, div, prelude::*, px,
};

use crate::components::theme::ThemeExt;

/// Header row of the player card: a speaker glyph followed by the title.
#[derive(IntoElement)]
pub struct PlayerHeader {
    title: SharedString,
}

impl PlayerHeader {
    pub fn new(title: impl Into<SharedString>) -> Self { Self { title: title.into() } }
}

impl RenderOnce for PlayerHeader {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();

        div()
            .flex()
            .items_center()
            .gap(px(8.0))
            .mb(px(16.0))
            .child(
                div()
                    .text_size(px(16.0))
                    .text_color(theme.accent)
                    .child("🔊"),
            )
            .child(
                div()
                    .flex_1()
                    .overflow_hidden()
                    .text_ellipsis()
                    .text_size(px(14.0))
                    .font_weight(FontWeight::BOLD)
                    .text_color(theme.title_text)
                    .child(self.title),
            )
    }
}
