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

use std::path::PathBuf;

use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Snafu, Debug)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Setoran failed to launch: {details}"))]
    InitPaths {
        details: String,
        #[snafu(implicit)]
        loc:     snafu::Location,
    },

    #[snafu(display("Empty media source"))]
    EmptySource {
        #[snafu(implicit)]
        loc: snafu::Location,
    },

    #[snafu(display("Unsupported scheme '{scheme}' in {url}, only local files can be played"))]
    UnsupportedScheme {
        scheme: String,
        url:    String,
        #[snafu(implicit)]
        loc:    snafu::Location,
    },

    #[snafu(display("Invalid media url {url}"))]
    InvalidUrl {
        url:    String,
        source: url::ParseError,
        #[snafu(implicit)]
        loc:    snafu::Location,
    },

    #[snafu(display("{url} does not name a local file"))]
    NotAFilePath {
        url: String,
        #[snafu(implicit)]
        loc: snafu::Location,
    },

    #[snafu(display("Failed to open {}", path.display()))]
    OpenFile {
        path:   PathBuf,
        source: std::io::Error,
        #[snafu(implicit)]
        loc:    snafu::Location,
    },

    #[snafu(display("Failed to decode {}", path.display()))]
    Decode {
        path:   PathBuf,
        source: rodio::decoder::DecoderError,
        #[snafu(implicit)]
        loc:    snafu::Location,
    },

    #[snafu(display("No audio output device available"))]
    OutputStream {
        source: rodio::StreamError,
        #[snafu(implicit)]
        loc:    snafu::Location,
    },

    #[snafu(display("Failed to create audio sink"))]
    Sink {
        source: rodio::PlayError,
        #[snafu(implicit)]
        loc:    snafu::Location,
    },

    #[snafu(transparent)]
    Config {
        source: config::ConfigError,
        #[snafu(implicit)]
        loc:    snafu::Location,
    },

    #[snafu(display("Config file {} does not exist", path.display()))]
    MissingConfigFile {
        path: PathBuf,
        #[snafu(implicit)]
        loc:  snafu::Location,
    },

    #[snafu(display("Failed to spawn the audio thread"))]
    SpawnAudioThread {
        source: std::io::Error,
        #[snafu(implicit)]
        loc:    snafu::Location,
    },

    #[snafu(display("Audio thread failed: {message}"))]
    AudioThread {
        message: String,
        #[snafu(implicit)]
        loc:     snafu::Location,
    },
}
