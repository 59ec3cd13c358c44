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
    path::{Path, PathBuf},
    sync::OnceLock,
};

static HOME_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Override for the data directory, set only by `set_custom_data_dir`.
static CUSTOM_DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Resolved data directory.
/// On macOS, this is `~/Library/Application Support/Setoran`.
/// On Linux/FreeBSD, this is `$XDG_DATA_HOME/setoran`.
static CURRENT_DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Resolved config directory.
/// On macOS, this is `~/.config/setoran`.
/// On Linux/FreeBSD, this is `$XDG_CONFIG_HOME/setoran`.
static CONFIG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Returns the path to the user's home directory.
pub fn home_dir() -> &'static PathBuf {
    HOME_DIR.get_or_init(|| dirs::home_dir().expect("failed to determine home directory"))
}

/// Returns the path to the configuration directory.
pub fn config_dir() -> &'static PathBuf {
    CONFIG_DIR.get_or_init(|| {
        if let Some(custom_dir) = CUSTOM_DATA_DIR.get() {
            custom_dir.join("config")
        } else if cfg!(target_os = "windows") {
            dirs::config_dir()
                .expect("failed to determine RoamingAppData directory")
                .join("Setoran")
        } else if cfg!(any(target_os = "linux", target_os = "freebsd")) {
            if let Ok(flatpak_xdg_config) = std::env::var("FLATPAK_XDG_CONFIG_HOME") {
                flatpak_xdg_config.into()
            } else {
                dirs::config_dir().expect("failed to determine XDG_CONFIG_HOME directory")
            }
            .join("setoran")
        } else {
            home_dir().join(".config").join("setoran")
        }
    })
}

/// Returns the path to the data directory.
pub fn data_dir() -> &'static PathBuf {
    CURRENT_DATA_DIR.get_or_init(|| {
        if let Some(custom_dir) = CUSTOM_DATA_DIR.get() {
            custom_dir.clone()
        } else if cfg!(any(target_os = "linux", target_os = "freebsd")) {
            if let Ok(flatpak_xdg_data) = std::env::var("FLATPAK_XDG_DATA_HOME") {
                flatpak_xdg_data.into()
            } else {
                dirs::data_local_dir().expect("failed to determine XDG_DATA_HOME directory")
            }
            .join("setoran")
        } else {
            dirs::data_local_dir()
                .expect("failed to determine LocalAppData directory")
                .join("Setoran")
        }
    })
}

/// Sets a custom directory for all user data. Must run before `data_dir` or
/// `config_dir` is first called. Relative paths are canonicalized and the
/// directory is created if missing.
///
/// # Panics
///
/// Panics if called after the data or config directory was resolved, or if
/// the directory cannot be created.
pub fn set_custom_data_dir<P: ?Sized + AsRef<Path>>(dir: &P) -> &'static PathBuf {
    assert!(
        CURRENT_DATA_DIR.get().is_none() && CONFIG_DIR.get().is_none(),
        "set_custom_data_dir called after data_dir or config_dir was initialized"
    );
    CUSTOM_DATA_DIR.get_or_init(|| {
        let mut path = dir.as_ref().to_path_buf();
        if path.is_relative()
            && let Ok(abs) = path.canonicalize()
        {
            path = abs;
        }

        std::fs::create_dir_all(&path).unwrap_or_else(|e| {
            panic!(
                "failed to create custom data directory {}: {e}",
                path.display()
            )
        });

        path
    })
}

/// Returns the path to the logs directory.
pub fn logs_dir() -> &'static PathBuf {
    static LOGS_DIR: OnceLock<PathBuf> = OnceLock::new();
    LOGS_DIR.get_or_init(|| {
        if cfg!(target_os = "macos") && CUSTOM_DATA_DIR.get().is_none() {
            home_dir().join("Library/Logs/Setoran")
        } else {
            data_dir().join("logs")
        }
    })
}

/// Returns the path to the user config file, `<config_dir>/setoran.toml`.
pub fn config_file() -> &'static PathBuf {
    static CONFIG_FILE: OnceLock<PathBuf> = OnceLock::new();
    CONFIG_FILE.get_or_init(|| config_dir().join("setoran.toml"))
}
