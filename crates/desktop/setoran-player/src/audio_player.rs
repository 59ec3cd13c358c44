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

//! AudioPlayer - the stateful widget view.

use std::sync::Arc;

use gpui::{
    App, Bounds, Context, DispatchPhase, IntoElement, MouseButton, MouseMoveEvent, MouseUpEvent,
    ParentElement, Pixels, Point, Render, SharedString, Styled, Task, Window, div, prelude::*, px,
};
use setoran_ui::components::{
    player::{PlayerHeader, SeekBar, TimeReadout, TransportButtons},
    theme::ThemeExt,
};

use crate::{
    config::PlayerConfig, controller::TransportController, provider::AudioProvider,
    seek::SeekBarInterpreter, state::PlaybackStatus, util::ResultExt,
};

/// Caller-supplied widget inputs.
#[derive(Debug, Clone, bon::Builder)]
pub struct AudioPlayerProps {
    /// Path, `file://` URL or other identifier the provider was opened with.
    #[builder(into)]
    pub file_url: SharedString,
    #[builder(into)]
    pub title: Option<SharedString>,
}

/// Audio player widget.
///
/// Owns the transport, the seek interpreter and the last status snapshot.
/// The status subscription lives in `_status_task` and ends when the view is
/// dropped.
pub struct AudioPlayer {
    title: SharedString,
    file_url: SharedString,
    transport: TransportController,
    seek: SeekBarInterpreter,
    status: PlaybackStatus,
    _status_task: Task<()>,
}

fn to_f32(value: Pixels) -> f32 { value / px(1.0) }

impl AudioPlayer {
    pub fn new(
        props: AudioPlayerProps,
        provider: Arc<dyn AudioProvider>,
        config: &PlayerConfig,
        cx: &mut Context<Self>,
    ) -> Self {
        let transport = TransportController::new(provider, config.skip_interval());
        let mut status_rx = transport.subscribe();
        let status = *status_rx.borrow_and_update();

        let status_task = cx.spawn(async move |this, cx| {
            while status_rx.changed().await.is_ok() {
                let status = *status_rx.borrow_and_update();
                if this
                    .update(cx, |view, cx| view.apply_status(status, cx))
                    .is_err()
                {
                    break;
                }
            }
            tracing::debug!("status subscription closed");
        });

        let title = props
            .title
            .filter(|title| !title.trim().is_empty())
            .unwrap_or_else(|| config.default_title.clone().into());
        tracing::info!(file_url = %props.file_url, %title, "audio player mounted");

        Self {
            title,
            file_url: props.file_url,
            transport,
            seek: SeekBarInterpreter::new(),
            status,
            _status_task: status_task,
        }
    }

    pub fn title(&self) -> &SharedString { &self.title }

    pub fn file_url(&self) -> &SharedString { &self.file_url }

    pub const fn status(&self) -> PlaybackStatus { self.status }

    pub const fn transport(&self) -> &TransportController { &self.transport }

    fn apply_status(&mut self, status: PlaybackStatus, cx: &mut Context<Self>) {
        if self.status != status {
            self.status = status;
            cx.notify();
        }
    }

    fn toggle_play_pause(&mut self, _cx: &mut Context<Self>) { self.transport.toggle_play_pause(); }

    fn skip_back(&mut self, _cx: &mut Context<Self>) { self.transport.skip_back(); }

    fn skip_forward(&mut self, _cx: &mut Context<Self>) { self.transport.skip_forward(); }

    fn begin_scrub(&mut self, window_x: Pixels, cx: &mut Context<Self>) {
        self.seek.begin_scrub(to_f32(window_x), &self.transport);
        cx.notify();
    }

    fn pointer_moved(&mut self, window_x: Pixels, button_held: bool, cx: &mut Context<Self>) {
        self.seek
            .pointer_moved(to_f32(window_x), button_held, &self.transport);
        if !self.seek.is_scrubbing() {
            cx.notify();
        }
    }

    fn end_scrub(&mut self, window_x: Pixels, cx: &mut Context<Self>) {
        self.seek.scrub_to(to_f32(window_x), &self.transport);
        self.seek.end_scrub();
        cx.notify();
    }
}

impl Render for AudioPlayer {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        // While scrubbing, follow the pointer anywhere in the window.
        if self.seek.is_scrubbing() {
            let handle = cx.entity();
            window.on_mouse_event(move |event: &MouseMoveEvent, phase, _window, cx| {
                if phase != DispatchPhase::Capture {
                    return;
                }
                let button_held = event.pressed_button == Some(MouseButton::Left);
                handle.update(cx, |this, cx| {
                    this.pointer_moved(event.position.x, button_held, cx);
                });
            });

            let handle = cx.entity();
            window.on_mouse_event(move |event: &MouseUpEvent, phase, window, cx| {
                if phase != DispatchPhase::Capture || event.button != MouseButton::Left {
                    return;
                }
                handle.update(cx, |this, cx| this.end_scrub(event.position.x, cx));
                window.refresh();
            });
        }

        let status = self.status;
        let theme = cx.theme();

        let weak = cx.weak_entity();
        let on_skip_back = move |_: &mut Window, cx: &mut App| {
            weak.update(cx, |view, cx| view.skip_back(cx)).log_err();
        };
        let weak = cx.weak_entity();
        let on_play_pause = move |_: &mut Window, cx: &mut App| {
            weak.update(cx, |view, cx| view.toggle_play_pause(cx)).log_err();
        };
        let weak = cx.weak_entity();
        let on_skip_forward = move |_: &mut Window, cx: &mut App| {
            weak.update(cx, |view, cx| view.skip_forward(cx)).log_err();
        };

        let handle = cx.entity();
        let on_track_bounds = move |bounds: Bounds<Pixels>, _: &mut Window, cx: &mut App| {
            handle.update(cx, |view, _| {
                view.seek
                    .on_track_bounds(to_f32(bounds.origin.x), to_f32(bounds.size.width));
            });
        };
        let weak = cx.weak_entity();
        let on_press = move |position: Point<Pixels>, _: &mut Window, cx: &mut App| {
            weak.update(cx, |view, cx| view.begin_scrub(position.x, cx))
                .log_err();
        };

        div()
            .w_full()
            .p(px(16.0))
            .rounded(px(12.0))
            .bg(theme.card_background)
            .border_1()
            .border_color(theme.card_border)
            .flex()
            .flex_col()
            .child(PlayerHeader::new(self.title.clone()))
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        TransportButtons::new("audio-player-transport")
                            .glyph(status.glyph())
                            .skip_enabled(status.has_duration())
                            .on_skip_back(on_skip_back)
                            .on_play_pause(on_play_pause)
                            .on_skip_forward(on_skip_forward),
                    )
                    .child(TimeReadout::new(status.elapsed_label(), status.total_label())),
            )
            .child(
                SeekBar::new("audio-player-seek")
                    .fraction(status.progress_fraction())
                    .on_track_bounds(on_track_bounds)
                    .on_press(on_press),
            )
    }
}
