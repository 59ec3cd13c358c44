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

use std::{
    env,
    io::IsTerminal,
    sync::{Arc, Mutex, Once},
};

use bon::Builder;
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, de};
use smart_default::SmartDefault;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, filter, layer::SubscriberExt, prelude::*, registry::LookupSpan,
};

/// Deserializes a string value, using `Default::default()` if the string is
/// empty.
///
/// Lets config files write `log_format = ""` and get the default format
/// instead of a parse error.
///
/// # Errors
/// Returns an error if the non-empty string is not a valid `T`.
pub fn empty_string_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let s = String::deserialize(deserializer)?;
    if s.is_empty() {
        Ok(T::default())
    } else {
        T::deserialize(de::value::StrDeserializer::new(&s)).map_err(|e: de::value::Error| {
            de::Error::custom(format!("invalid value, expect empty string, err: {e}"))
        })
    }
}

/// Configuration options for the logging system.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, SmartDefault, Builder)]
#[serde(default)]
#[builder(on(String, into))]
pub struct LoggingOptions {
    /// Directory for rolling log files. Empty disables file logging.
    #[default = ""]
    #[builder(default)]
    pub dir: String,

    /// Log filter, e.g. `"info"` or `"info,setoran_player=debug"`.
    ///
    /// Falls back to `RUST_LOG`, then to `"info"`.
    pub level: Option<String>,

    /// Output format for log lines.
    #[serde(default, deserialize_with = "empty_string_as_default")]
    #[builder(default)]
    pub log_format: LogFormat,

    /// Prefix used for the rolling file names (`<prefix>.<hour>` and
    /// `<prefix>-err.<hour>`).
    #[default = "setoran"]
    #[builder(default = "setoran".to_string())]
    pub file_prefix: String,

    /// Maximum number of rotated log files to retain, per file kind.
    #[default = 72]
    #[builder(default = 72)]
    pub max_log_files: usize,

    /// Whether to also write logs to stdout.
    #[default = true]
    #[builder(default = true)]
    pub append_stdout: bool,
}

/// Available log output formats.
#[derive(
    Clone, Debug, Copy, PartialEq, Eq, Serialize, Deserialize, Default, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// One JSON object per line.
    Json,

    /// Human-readable text.
    #[default]
    Text,
}

/// Initialize logging for unit tests.
///
/// Writes to `UNITTEST_LOG_DIR` (default `/tmp/__unittest_logs`) at
/// `UNITTEST_LOG_LEVEL` (default `debug`). Safe to call from every test.
pub fn init_default_ut_logging() {
    static START: Once = Once::new();

    START.call_once(|| {
        let mut g = GLOBAL_UT_LOG_GUARD
            .as_ref()
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let dir =
            env::var("UNITTEST_LOG_DIR").unwrap_or_else(|_| "/tmp/__unittest_logs".to_string());
        let level = env::var("UNITTEST_LOG_LEVEL").unwrap_or_else(|_| "debug".to_string());

        let opts = LoggingOptions {
            dir: dir.clone(),
            level: Some(level),
            file_prefix: "unittest".to_string(),
            append_stdout: false,
            ..Default::default()
        };
        *g = Some(init_global_logging(&opts));

        tracing::info!("logs dir = {}", dir);
    });
}

static GLOBAL_UT_LOG_GUARD: Lazy<Arc<Mutex<Option<Vec<WorkerGuard>>>>> =
    Lazy::new(|| Arc::new(Mutex::new(None)));

const DEFAULT_LOG_TARGETS: &str = "info";

fn fmt_layer<S, W>(writer: W, format: LogFormat, ansi: bool) -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> tracing_subscriber::fmt::MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        LogFormat::Json => tracing_subscriber::fmt::Layer::new()
            .json()
            .with_writer(writer)
            .with_ansi(ansi)
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
        LogFormat::Text => tracing_subscriber::fmt::Layer::new()
            .with_writer(writer)
            .with_ansi(ansi)
            .boxed(),
    }
}

fn rolling_appender(opts: &LoggingOptions, prefix: &str) -> RollingFileAppender {
    RollingFileAppender::builder()
        .rotation(Rotation::HOURLY)
        .filename_prefix(prefix)
        .max_log_files(opts.max_log_files)
        .build(&opts.dir)
        .unwrap_or_else(|e| {
            panic!(
                "initializing rolling file appender at {} failed: {}",
                &opts.dir, e
            )
        })
}

/// Parses the effective filter for `opts`.
///
/// Priority: `opts.level`, then `RUST_LOG`, then `"info"`.
fn resolve_filter(opts: &LoggingOptions) -> filter::Targets {
    opts.level
        .as_deref()
        .or(env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
        .unwrap_or(DEFAULT_LOG_TARGETS)
        .parse::<filter::Targets>()
        .expect("error parsing log level string")
}

/// Initialize the global tracing subscriber.
///
/// Layers:
/// - stdout (when `append_stdout`)
/// - hourly rolling file (when `dir` is set)
/// - hourly rolling error-only file (when `dir` is set)
///
/// Returns the `WorkerGuard`s of the non-blocking writers; keep them alive for
/// the lifetime of the process. Only the first call has any effect.
///
/// # Panics
/// Panics if the log directory cannot be used or the level string is invalid.
pub fn init_global_logging(opts: &LoggingOptions) -> Vec<WorkerGuard> {
    static START: Once = Once::new();
    let mut guards = vec![];

    START.call_once(|| {
        LogTracer::init().expect("log tracer must be valid");

        let stdout_logging_layer = if opts.append_stdout {
            let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
            guards.push(guard);
            Some(fmt_layer(
                writer,
                opts.log_format,
                std::io::stdout().is_terminal(),
            ))
        } else {
            None
        };

        let file_logging_layer = if opts.dir.is_empty() {
            None
        } else {
            let (writer, guard) =
                tracing_appender::non_blocking(rolling_appender(opts, &opts.file_prefix));
            guards.push(guard);
            Some(fmt_layer(writer, opts.log_format, false))
        };

        let err_file_logging_layer = if opts.dir.is_empty() {
            None
        } else {
            let prefix = format!("{}-err", opts.file_prefix);
            let (writer, guard) = tracing_appender::non_blocking(rolling_appender(opts, &prefix));
            guards.push(guard);
            Some(
                fmt_layer(writer, opts.log_format, false)
                    .with_filter(filter::LevelFilter::ERROR)
                    .boxed(),
            )
        };

        let subscriber = Registry::default()
            .with(resolve_filter(opts))
            .with(stdout_logging_layer)
            .with(file_logging_layer)
            .with(err_file_logging_layer);

        tracing::subscriber::set_global_default(subscriber)
            .expect("error setting global tracing subscriber");
    });

    guards
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_default_impl() {
        let built = LoggingOptions::builder().build();
        assert_eq!(built, LoggingOptions::default());
        assert_eq!(built.file_prefix, "setoran");
        assert!(built.append_stdout);
        assert!(built.dir.is_empty());
    }

    #[test]
    fn explicit_level_wins_over_default() {
        let opts = LoggingOptions::builder().level("warn".to_string()).build();
        let targets = resolve_filter(&opts);
        assert!(targets.would_enable("setoran_player", &tracing::Level::WARN));
        assert!(!targets.would_enable("setoran_player", &tracing::Level::INFO));
    }

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(deserialize_with = "empty_string_as_default")]
        format: LogFormat,
    }

    fn parse_format(raw: &'static str) -> LogFormat {
        let map = de::value::MapDeserializer::<_, de::value::Error>::new(std::iter::once((
            "format", raw,
        )));
        Wrapper::deserialize(map).unwrap().format
    }

    #[test]
    fn empty_log_format_falls_back_to_text() {
        assert_eq!(parse_format(""), LogFormat::Text);
        assert_eq!(parse_format("json"), LogFormat::Json);
        assert_eq!(parse_format("text"), LogFormat::Text);
    }

    #[test]
    fn ut_logging_can_be_initialized_twice() {
        init_default_ut_logging();
        init_default_ut_logging();
        assert!(tracing::dispatcher::has_been_set());
    }
}
