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

mod build_info;
mod error;
mod helper;
mod media_source;
mod rodio_backend;
mod settings;

use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use gpui::{
    AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds, WindowOptions,
    px, size,
};
use setoran_common_telemetry::{LoggingOptions, init_global_logging, set_panic_hook};
use setoran_player::{AudioPlayer, AudioPlayerProps, AudioProvider, PlayerConfig};
use setoran_ui::components::theme::ThemeProvider;
use snafu::ensure;

use crate::{
    error::{Error, InitPathsSnafu},
    media_source::MediaSource,
    rodio_backend::RodioProvider,
};

#[derive(Debug, Parser)]
#[command(
    name = "setoran",
    about = "Play a recitation recording",
    author = build_info::AUTHOR,
    version = build_info::FULL_VERSION
)]
struct Cli {
    /// Audio file path or file:// URL.
    file_url: String,

    /// Title shown above the controls.
    #[arg(long)]
    title: Option<String>,

    /// Extra config file layered over the user config.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Keep config and logs under this directory instead of the platform
    /// defaults.
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn main() -> snafu::Report<Error> { snafu::Report::capture(run) }

fn logging_options(config: &PlayerConfig) -> LoggingOptions {
    let mut logging = config.logging.clone();
    if logging.dir.is_empty() {
        logging.dir = setoran_paths::logs_dir().to_string_lossy().into_owned();
    }
    logging.append_stdout &= helper::stdout_is_a_pty();
    logging
}

fn run() -> Result<(), Error> {
    helper::startup_time();
    let cli = Cli::parse();

    if let Some(dir) = &cli.data_dir {
        setoran_paths::set_custom_data_dir(dir);
    }
    let file_errors = helper::init_paths();
    ensure!(
        file_errors.is_empty(),
        InitPathsSnafu {
            details: helper::describe_path_errors(file_errors),
        }
    );

    let config = settings::load(cli.config.as_deref())?;
    let _guards = init_global_logging(&logging_options(&config));
    set_panic_hook();
    tracing::info!(
        "========== starting setoran version {}, sha {} ==========",
        build_info::FULL_VERSION,
        build_info::COMMIT_HASH,
    );

    let source = MediaSource::parse(&cli.file_url)?;
    let provider: Arc<dyn AudioProvider> =
        Arc::new(RodioProvider::open(&source, config.status_tick())?);

    let window_title: SharedString = match (&cli.title, source.file_stem()) {
        (Some(title), _) => format!("Setoran - {title}").into(),
        (None, Some(stem)) => format!("Setoran - {stem}").into(),
        (None, None) => "Setoran".into(),
    };
    let props = AudioPlayerProps::builder()
        .file_url(source.to_string())
        .maybe_title(cli.title)
        .build();

    Application::new().run(move |cx| {
        ThemeProvider::init_with_preset(cx, config.theme);
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(420.0), px(200.0)),
                cx,
            ))),
            titlebar: Some(TitlebarOptions {
                title: Some(window_title),
                ..Default::default()
            }),
            ..Default::default()
        };

        if let Err(error) = cx.open_window(options, |_, cx| {
            cx.new(|cx| AudioPlayer::new(props, provider, &config, cx))
        }) {
            tracing::error!(?error, "failed to open the player window");
            cx.quit();
        }
    });

    tracing::info!(started_at = %helper::startup_time(), "setoran exited");
    Ok(())
}
