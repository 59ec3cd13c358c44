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
    collections::HashMap,
    io::{self, IsTerminal},
    path::Path,
    sync::OnceLock,
};

use jiff::Timestamp;

static STARTUP_TIME: OnceLock<Timestamp> = OnceLock::new();

const FORCE_CLI_MODE_ENV_VAR_NAME: &str = "SETORAN_FORCE_CLI_MODE";

#[inline]
pub(crate) fn startup_time() -> Timestamp { *STARTUP_TIME.get_or_init(Timestamp::now) }

pub(crate) fn init_paths() -> HashMap<io::ErrorKind, Vec<&'static Path>> {
    [setoran_paths::config_dir(), setoran_paths::logs_dir()]
        .into_iter()
        .fold(HashMap::default(), |mut errors, path| {
            if let Err(e) = std::fs::create_dir_all(path) {
                errors.entry(e.kind()).or_insert_with(Vec::new).push(path.as_path());
            }
            errors
        })
}

/// Renders the directory creation failures for the launch error.
pub(crate) fn describe_path_errors(errors: HashMap<io::ErrorKind, Vec<&Path>>) -> String {
    errors
        .into_iter()
        .filter_map(|(kind, paths)| {
            #[allow(unused_mut)] // for non-unix platforms
            let mut details = match paths.as_slice() {
                [] => return None,
                [path] => format!("{kind} when creating directory {}", path.display()),
                _many => format!("{kind} when creating directories {paths:?}"),
            };

            #[cfg(unix)]
            {
                if kind == io::ErrorKind::PermissionDenied {
                    details.push_str(
                        "\n\nConsider using chown and chmod tools for altering the directories \
                         permissions if your user has corresponding rights.\nFor example, `sudo \
                         chown $(whoami):staff ~/.config` and `chmod +uwrx ~/.config`",
                    );
                }
            }

            Some(details)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub(crate) fn stdout_is_a_pty() -> bool {
    std::env::var(FORCE_CLI_MODE_ENV_VAR_NAME).ok().is_none() && io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_path_error_names_the_directory() {
        let errors = HashMap::from([(io::ErrorKind::NotFound, vec![Path::new("/nope/logs")])]);
        assert_eq!(
            describe_path_errors(errors),
            format!(
                "{} when creating directory /nope/logs",
                io::ErrorKind::NotFound
            )
        );
    }

    #[test]
    fn empty_groups_are_skipped() {
        let errors = HashMap::from([(io::ErrorKind::Other, Vec::new())]);
        assert!(describe_path_errors(errors).is_empty());
    }

    #[test]
    fn startup_time_is_stable() {
        assert_eq!(startup_time(), startup_time());
    }
}
