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
    fmt,
    path::{Path, PathBuf},
};

use snafu::{ResultExt, ensure};
use url::Url;

use crate::error::{
    EmptySourceSnafu, InvalidUrlSnafu, NotAFilePathSnafu, Result, UnsupportedSchemeSnafu,
};

/// A local audio file named by a path or a `file://` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSource {
    raw:  String,
    path: PathBuf,
}

impl MediaSource {
    /// Parses the `file_url` argument.
    ///
    /// Anything containing `://` is treated as a URL and must use the `file`
    /// scheme; everything else is a filesystem path.
    pub fn parse(input: &str) -> Result<Self> {
        let raw = input.trim();
        ensure!(!raw.is_empty(), EmptySourceSnafu);

        let path = if raw.contains("://") {
            let url = Url::parse(raw).context(InvalidUrlSnafu { url: raw })?;
            ensure!(
                url.scheme() == "file",
                UnsupportedSchemeSnafu {
                    scheme: url.scheme(),
                    url:    raw,
                }
            );
            url.to_file_path()
                .ok()
                .ok_or_else(|| NotAFilePathSnafu { url: raw }.build())?
        } else {
            PathBuf::from(raw)
        };

        Ok(Self {
            raw: raw.to_string(),
            path,
        })
    }

    pub fn path(&self) -> &Path { &self.path }

    /// The string the source was parsed from.
    pub fn as_str(&self) -> &str { &self.raw }

    /// File name without extension, used as a fallback title.
    pub fn file_stem(&self) -> Option<String> {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
    }
}

impl fmt::Display for MediaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.raw) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn plain_paths_pass_through() {
        let source = MediaSource::parse("  recordings/an-naba.mp3 ").unwrap();
        assert_eq!(source.path(), Path::new("recordings/an-naba.mp3"));
        assert_eq!(source.as_str(), "recordings/an-naba.mp3");
        assert_eq!(source.file_stem().as_deref(), Some("an-naba"));
    }

    #[cfg(unix)]
    #[test]
    fn file_urls_are_decoded() {
        let source = MediaSource::parse("file:///tmp/setoran/al%20fatiha.ogg").unwrap();
        assert_eq!(source.path(), Path::new("/tmp/setoran/al fatiha.ogg"));
        assert_eq!(source.to_string(), "file:///tmp/setoran/al%20fatiha.ogg");
    }

    #[test]
    fn network_urls_are_rejected() {
        let err = MediaSource::parse("https://example.com/a.mp3").unwrap_err();
        assert!(
            matches!(&err, Error::UnsupportedScheme { scheme, .. } if scheme == "https"),
            "{err:?}"
        );
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            MediaSource::parse("   "),
            Err(Error::EmptySource { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn remote_file_hosts_are_rejected() {
        assert!(MediaSource::parse("file://server/share/a.mp3").is_err());
    }
}
