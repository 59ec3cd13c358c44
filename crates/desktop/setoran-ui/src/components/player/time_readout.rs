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

/// Right-aligned "elapsed / total" label.
#[derive(IntoElement)]
pub struct TimeReadout {
    elapsed: SharedString,
    total: SharedString,
}

impl TimeReadout {
    pub fn new(elapsed: impl Into<SharedString>, total: impl Into<SharedString>) -> Self {
        Self {
            elapsed: elapsed.into(),
            total: total.into(),
        }
    }
}

impl RenderOnce for TimeReadout {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();

        div().flex_1().flex().justify_end().child(
            div()
                .text_size(px(11.0))
                .font_family("monospace")
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(theme.time_text)
                .child(format!("{} / {}", self.elapsed, self.total)),
        )
    }
}
