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

use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use setoran_player::PlayerConfig;
use snafu::ensure;

use crate::error::{MissingConfigFileSnafu, Result};

const ENV_PREFIX: &str = "SETORAN";

/// Loads the player configuration.
///
/// Layers, later ones win:
/// 1. built-in defaults
/// 2. `<config_dir>/setoran.toml`, if present
/// 3. `--config <path>`, which must exist
/// 4. `SETORAN__*` environment variables, e.g. `SETORAN__SKIP_INTERVAL_SECS=15`
///    or `SETORAN__LOGGING__LEVEL=debug`
pub fn load(explicit: Option<&Path>) -> Result<PlayerConfig> {
    load_layers(setoran_paths::config_file(), explicit, None)
}

fn load_layers(
    user_file: &Path,
    explicit: Option<&Path>,
    env: Option<config::Map<String, String>>,
) -> Result<PlayerConfig> {
    if let Some(path) = explicit {
        ensure!(path.is_file(), MissingConfigFileSnafu { path });
    }

    let mut builder = Config::builder()
        .add_source(File::from(user_file).format(FileFormat::Toml).required(false));

    if let Some(path) = explicit {
        builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
    }

    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
            .source(env),
    );

    let settings: PlayerConfig = builder.build()?.try_deserialize()?;
    tracing::debug!(?settings, "configuration loaded");
    Ok(settings)
}
