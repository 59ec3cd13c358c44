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

//! Local-file [`AudioProvider`] backed by rodio.
//!
//! rodio's `OutputStream` is not `Send`, so the stream, the sink and the
//! decoder live on a dedicated thread. The provider talks to it over a
//! command channel and reads status from a [`StatusPublisher`].

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    sync::mpsc::{self, RecvTimeoutError},
    thread::{self, JoinHandle},
    time::Duration,
};

use rodio::{Decoder, OutputStream, Sink, Source};
use setoran_player::{AudioProvider, PlaybackStatus, StatusPublisher, util::ResultExt as _};
use snafu::ResultExt;
use tokio::sync::watch;

use crate::{
    error::{
        AudioThreadSnafu, DecodeSnafu, OpenFileSnafu, OutputStreamSnafu, Result, SinkSnafu,
        SpawnAudioThreadSnafu,
    },
    media_source::MediaSource,
};

const AUDIO_THREAD_NAME: &str = "setoran-audio";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AudioCommand {
    Play,
    Pause,
    Seek(u64),
    Shutdown,
}

pub struct RodioProvider {
    source:    MediaSource,
    publisher: StatusPublisher,
    commands:  mpsc::Sender<AudioCommand>,
    thread:    Option<JoinHandle<()>>,
}

impl std::fmt::Debug for RodioProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RodioProvider")
            .field("source", &self.source)
            .field("status", &self.publisher.current())
            .finish_non_exhaustive()
    }
}

impl RodioProvider {
    /// Opens `source` and starts the audio thread, paused.
    ///
    /// Only a missing or unreadable file fails here. Decoder and output
    /// device failures happen on the audio thread; they are logged and the
    /// status drops out of buffering with an unknown duration.
    pub fn open(source: &MediaSource, tick: Duration) -> Result<Self> {
        let path = source.path().to_path_buf();
        let file = File::open(&path).context(OpenFileSnafu { path: path.clone() })?;

        let publisher = StatusPublisher::new(PlaybackStatus {
            is_buffering: true,
            ..Default::default()
        });
        let (commands, rx) = mpsc::channel();

        let thread_publisher = publisher.clone();
        let thread = thread::Builder::new()
            .name(AUDIO_THREAD_NAME.to_string())
            .spawn(move || run_audio_thread(file, path, tick, &thread_publisher, &rx))
            .context(SpawnAudioThreadSnafu)?;

        tracing::info!(source = %source, tick_ms = tick.as_millis(), "audio provider opened");
        Ok(Self {
            source: source.clone(),
            publisher,
            commands,
            thread: Some(thread),
        })
    }

    pub const fn source(&self) -> &MediaSource { &self.source }

    /// Stops playback and joins the audio thread. Later calls are no-ops.
    pub fn shutdown(&mut self) -> Result<()> {
        let Some(thread) = self.thread.take() else {
            return Ok(());
        };
        self.send(AudioCommand::Shutdown);
        thread.join().map_err(|_| {
            AudioThreadSnafu {
                message: "audio thread panicked",
            }
            .build()
        })
    }

    fn send(&self, command: AudioCommand) {
        if self.commands.send(command).is_err() {
            tracing::debug!(?command, "audio thread gone, command dropped");
        }
    }
}

impl AudioProvider for RodioProvider {
    fn play(&self) { self.send(AudioCommand::Play); }

    fn pause(&self) { self.send(AudioCommand::Pause); }

    fn seek_to(&self, position_ms: u64) { self.send(AudioCommand::Seek(position_ms)); }

    fn subscribe(&self) -> watch::Receiver<PlaybackStatus> { self.publisher.subscribe() }

    fn status(&self) -> PlaybackStatus { self.publisher.current() }
}

impl Drop for RodioProvider {
    fn drop(&mut self) { self.shutdown().log_err(); }
}

/// Owns everything that must stay on the audio thread.
struct AudioSession {
    path:        PathBuf,
    _stream:     OutputStream,
    sink:        Sink,
    duration_ms: u64,
}

impl AudioSession {
    fn open(file: File, path: PathBuf) -> Result<Self> {
        let decoder = decode(file, &path)?;
        let duration_ms = decoder
            .total_duration()
            .map_or(0, |duration| duration.as_millis() as u64);

        let (stream, handle) = OutputStream::try_default().context(OutputStreamSnafu)?;
        let sink = Sink::try_new(&handle).context(SinkSnafu)?;
        sink.pause();
        sink.append(decoder);

        tracing::info!(path = %path.display(), duration_ms, "audio decoded");
        Ok(Self {
            path,
            _stream: stream,
            sink,
            duration_ms,
        })
    }

    /// Re-queues the file once playback ran off the end.
    fn ensure_loaded(&self) -> Result<()> {
        if !self.sink.empty() {
            return Ok(());
        }
        let file = File::open(&self.path).context(OpenFileSnafu {
            path: self.path.clone(),
        })?;
        self.sink.append(decode(file, &self.path)?);
        tracing::debug!("source re-queued after end of stream");
        Ok(())
    }

    fn apply(&self, command: AudioCommand) {
        match command {
            AudioCommand::Play => {
                if self.ensure_loaded().log_err().is_some() {
                    self.sink.play();
                }
            }
            AudioCommand::Pause => self.sink.pause(),
            AudioCommand::Seek(position_ms) => {
                let plan = SeekPlan::new(self.sink.empty(), self.duration_ms, position_ms);
                if plan.requeue {
                    // A finished sink is still in play state; re-queueing into
                    // it would resume playback.
                    self.sink.pause();
                    if self.ensure_loaded().log_err().is_none() {
                        return;
                    }
                }
                if let Err(error) = self.sink.try_seek(Duration::from_millis(plan.target_ms)) {
                    tracing::warn!(%error, target_ms = plan.target_ms, "seek failed");
                }
            }
            AudioCommand::Shutdown => self.sink.stop(),
        }
    }

    fn snapshot(&self) -> PlaybackStatus {
        let finished = self.sink.empty();
        let position = self.sink.get_pos().as_millis() as u64;
        let current_time_ms = if self.duration_ms == 0 {
            position
        } else if finished {
            self.duration_ms
        } else {
            position.min(self.duration_ms)
        };
        PlaybackStatus {
            current_time_ms,
            duration_ms: self.duration_ms,
            is_playing: !finished && !self.sink.is_paused(),
            is_buffering: false,
        }
    }
}

/// What a seek has to do to the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SeekPlan {
    /// The clip ran off the end and must be queued again, paused.
    requeue:   bool,
    target_ms: u64,
}

impl SeekPlan {
    const fn new(sink_empty: bool, duration_ms: u64, position_ms: u64) -> Self {
        let target_ms = if duration_ms > 0 && position_ms > duration_ms {
            duration_ms
        } else {
            position_ms
        };
        Self {
            requeue: sink_empty,
            target_ms,
        }
    }
}

fn decode(file: File, path: &Path) -> Result<Decoder<BufReader<File>>> {
    Decoder::new(BufReader::new(file)).context(DecodeSnafu { path })
}

fn run_audio_thread(
    file: File,
    path: PathBuf,
    tick: Duration,
    publisher: &StatusPublisher,
    commands: &mpsc::Receiver<AudioCommand>,
) {
    let Some(session) = AudioSession::open(file, path).log_err() else {
        publisher.update(|status| {
            status.is_buffering = false;
            status.is_playing = false;
        });
        return;
    };
    publisher.publish(session.snapshot());

    loop {
        match commands.recv_timeout(tick) {
            Ok(AudioCommand::Shutdown) | Err(RecvTimeoutError::Disconnected) => {
                session.apply(AudioCommand::Shutdown);
                break;
            }
            Ok(command) => {
                tracing::trace!(?command, "audio command");
                session.apply(command);
            }
            Err(RecvTimeoutError::Timeout) => {}
        }
        publisher.publish(session.snapshot());
    }
    tracing::debug!("audio thread stopped");
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::error::Error;

    #[test]
    fn seek_after_end_requeues_without_playing() {
        let plan = SeekPlan::new(true, 120_000, 60_000);
        assert!(plan.requeue);
        assert_eq!(plan.target_ms, 60_000);

        let plan = SeekPlan::new(false, 120_000, 150_000);
        assert!(!plan.requeue);
        assert_eq!(plan.target_ms, 120_000);

        // Unknown duration passes the target through.
        assert_eq!(SeekPlan::new(false, 0, 5_000).target_ms, 5_000);
    }

    #[test]
    fn missing_file_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.mp3");
        let source = MediaSource::parse(&missing.to_string_lossy()).unwrap();
        let err = RodioProvider::open(&source, Duration::from_millis(50)).unwrap_err();
        assert!(matches!(err, Error::OpenFile { .. }), "{err:?}");
    }

    #[test]
    fn undecodable_file_leaves_buffering() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"definitely not audio").unwrap();
        let source = MediaSource::parse(&file.path().to_string_lossy()).unwrap();

        let mut provider = RodioProvider::open(&source, Duration::from_millis(10)).unwrap();
        let mut rx = provider.subscribe();
        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while rx.borrow_and_update().is_buffering && std::time::Instant::now() < deadline {
            thread::sleep(Duration::from_millis(10));
        }

        let status = provider.status();
        assert!(!status.is_buffering);
        assert!(!status.is_playing);
        assert_eq!(status.duration_ms, 0);

        // Commands after a failed open are ignored.
        provider.play();
        provider.seek_to(1_000);
        provider.shutdown().unwrap();
        provider.shutdown().unwrap();
    }
}
