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

use std::{sync::Arc, time::Duration};

use setoran_player::{
    PlaybackStatus, PlayerConfig, SeekBarInterpreter, TransportCommand, TransportController,
    format_time, testing::FakeProvider,
};
use setoran_ui::models::PlaybackGlyph;

fn widget(status: PlaybackStatus) -> (Arc<FakeProvider>, TransportController) {
    setoran_common_telemetry::init_default_ut_logging();
    let provider = Arc::new(FakeProvider::echoing(status));
    let config = PlayerConfig::default();
    let transport = TransportController::new(provider.clone(), config.skip_interval());
    (provider, transport)
}

#[tokio::test]
async fn status_updates_are_pushed_to_subscribers() {
    let (provider, transport) = widget(PlaybackStatus {
        is_buffering: true,
        ..Default::default()
    });
    let mut rx = transport.subscribe();
    assert_eq!(rx.borrow_and_update().glyph(), PlaybackGlyph::Buffering);

    provider.set_status(PlaybackStatus {
        duration_ms: 120_000,
        ..Default::default()
    });
    rx.changed().await.unwrap();
    let status = *rx.borrow_and_update();
    assert_eq!(status.glyph(), PlaybackGlyph::Paused);
    assert_eq!(status.total_label(), "2:00");

    transport.toggle_play_pause();
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().glyph(), PlaybackGlyph::Playing);
}

#[tokio::test]
async fn dropping_the_subscription_detaches() {
    let (provider, transport) = widget(PlaybackStatus::default());
    let rx = transport.subscribe();
    assert_eq!(provider.subscriber_count(), 1);
    drop(rx);
    assert_eq!(provider.subscriber_count(), 0);

    drop(transport);
    assert_eq!(Arc::strong_count(&provider), 1);
}

#[test]
fn listening_session() {
    let (provider, transport) = widget(PlaybackStatus {
        duration_ms: 120_000,
        ..Default::default()
    });
    let mut seek = SeekBarInterpreter::new();
    seek.on_track_bounds(10.0, 300.0);

    transport.toggle_play_pause();
    assert_eq!(transport.skip_forward(), Some(10_000));
    assert_eq!(format_time(Some(10_000)), "0:10");

    // Scrub from the middle past the right edge, then release.
    assert_eq!(seek.begin_scrub(160.0, &transport), Some(60_000));
    assert_eq!(seek.scrub_to(500.0, &transport), Some(120_000));
    seek.end_scrub();
    assert!((transport.status().progress_percent() - 100.0).abs() < f32::EPSILON);

    assert_eq!(transport.skip_forward(), Some(120_000));
    assert_eq!(transport.skip_back(), Some(110_000));
    transport.toggle_play_pause();

    assert_eq!(provider.take_commands(), vec![
        TransportCommand::Play,
        TransportCommand::SeekTo(10_000),
        TransportCommand::SeekTo(60_000),
        TransportCommand::SeekTo(120_000),
        TransportCommand::SeekTo(120_000),
        TransportCommand::SeekTo(110_000),
        TransportCommand::Pause,
    ]);
    assert!(provider.commands().is_empty());
}

#[test]
fn loading_player_ignores_seeks_but_accepts_play() {
    let (provider, transport) = widget(PlaybackStatus {
        is_buffering: true,
        ..Default::default()
    });
    let mut seek = SeekBarInterpreter::new();
    seek.on_track_measured(300.0);

    assert_eq!(seek.touch_to_seek_time(150.0, &transport), None);
    assert_eq!(transport.skip_back(), None);
    assert_eq!(transport.skip_forward(), None);
    assert_eq!(transport.toggle_play_pause(), TransportCommand::Play);
    assert_eq!(provider.commands(), vec![TransportCommand::Play]);
    assert_eq!(transport.status().total_label(), "0:00");
}

#[test]
fn custom_skip_interval() {
    let provider = Arc::new(FakeProvider::new(PlaybackStatus {
        current_time_ms: 60_000,
        duration_ms: 120_000,
        ..Default::default()
    }));
    let config = PlayerConfig::builder().skip_interval_secs(15).build();
    let transport = TransportController::new(provider.clone(), config.skip_interval());
    assert_eq!(transport.skip_interval(), Duration::from_secs(15));
    assert_eq!(transport.skip_back(), Some(45_000));
}
