use crate::playable::Playable;
use crate::track::{TrackId, TrackSet};
use log::warn;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    StreamError(#[from] rodio::StreamError),
}

/// `Playable` backed by a rodio sink, one per ambient track.
///
/// Preloading keeps the decoded-file bytes in memory; every playback start
/// builds a fresh sink over them, which also rewinds to the beginning. All
/// playback failures degrade to silence with a warning, matching the rest of
/// the soundscape's error policy.
pub struct RodioPlayer {
    path: PathBuf,
    handle: OutputStreamHandle,
    bytes: Option<Arc<[u8]>>,
    sink: Option<Sink>,
    volume: f32,
    looping: bool,
}

impl RodioPlayer {
    pub fn new(handle: &OutputStreamHandle, path: PathBuf) -> RodioPlayer {
        RodioPlayer {
            path,
            handle: handle.clone(),
            bytes: None,
            sink: None,
            volume: 0.0,
            looping: false,
        }
    }
}

impl Playable for RodioPlayer {
    fn prepare(&mut self) {
        self.looping = true;
        match fs::read(&self.path) {
            Ok(bytes) => self.bytes = Some(bytes.into()),
            Err(error) => {
                warn!("could not preload {}: {}", self.path.display(), error);
            }
        }
    }

    fn play_from_start(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        let bytes = match &self.bytes {
            Some(bytes) => bytes.clone(),
            None => {
                warn!("{} has no loaded source, staying silent", self.path.display());
                return;
            }
        };
        let source = match Decoder::new(Cursor::new(bytes)) {
            Ok(source) => source,
            Err(error) => {
                warn!("could not decode {}: {}", self.path.display(), error);
                return;
            }
        };
        let sink = match Sink::try_new(&self.handle) {
            Ok(sink) => sink,
            Err(error) => {
                warn!("audio play prevented: {}", error);
                return;
            }
        };
        sink.set_volume(self.volume);
        if self.looping {
            sink.append(source.repeat_infinite());
        } else {
            sink.append(source);
        }
        sink.play();
        self.sink = Some(sink);
    }

    fn pause(&mut self) {
        if let Some(sink) = &self.sink {
            sink.pause();
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        if let Some(sink) = &self.sink {
            sink.set_volume(volume);
        }
    }

    fn release(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        self.bytes = None;
    }
}

/// Open the default output device and the three ambient tracks from
/// `asset_dir`, looking for `palace.mp3`, `docks.mp3` and `sea.mp3`.
pub fn open_track_set(asset_dir: &Path) -> Result<TrackSet<RodioPlayer>, Error> {
    let (stream, handle) = OutputStream::try_default()?;
    // the handle keeps working as long as the stream exists; leak the stream
    // once so the sinks stay usable for the life of the process
    std::mem::forget(stream);

    let player = |id: TrackId| {
        RodioPlayer::new(&handle, asset_dir.join(format!("{}.mp3", id.asset_stem())))
    };
    Ok(TrackSet::new(
        player(TrackId::Palace),
        player(TrackId::Docks),
        player(TrackId::Sea),
    ))
}
