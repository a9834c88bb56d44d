use crate::config::Config;
use crate::control;
use crate::engine::CrossfadeEngine;
use crate::error::Error;
use crate::playable::Playable;
use crate::player;
use crate::runner;
use crate::shutdown::Shutdown;
use crate::start_gate::{GestureSource, StartGate};
use crate::track::TrackSet;
use crate::trigger::{TriggerSet, VisibilityWatcher};
use std::path::Path;
use std::thread;

/// A running soundscape: engine, gate and triggers wired together on their
/// own thread, fed by the embedder through the event sender.
pub struct Soundscape {
    events: control::Sender,
    shutdown: Shutdown,
    join: Option<thread::JoinHandle<()>>,
}

impl Soundscape {
    /// Wire up a soundscape over an already-built track set and start it.
    ///
    /// `watcher` is asked to bind each trigger anchor up front; anchors it
    /// cannot bind are skipped. `gestures` is detached as soon as the start
    /// gate fires.
    pub fn start<P, W>(
        config: Config,
        tracks: TrackSet<P>,
        watcher: &mut W,
        gestures: Box<dyn GestureSource + Send>,
    ) -> Soundscape
    where
        P: Playable + Send + 'static,
        W: VisibilityWatcher,
    {
        let (sender, receiver) = control::channel();
        let engine = CrossfadeEngine::new(tracks);
        let gate = StartGate::new(&config);
        let mut triggers = TriggerSet::from_config(&config);
        triggers.attach(watcher, &sender);

        let shutdown = Shutdown::new();
        let join = {
            let shutdown = shutdown.clone();
            thread::spawn(move || {
                runner::run(engine, gate, triggers, Some(gestures), receiver, shutdown);
            })
        };

        Soundscape {
            events: sender,
            shutdown,
            join: Some(join),
        }
    }

    /// Convenience: rodio playback over the default output device, assets
    /// from `asset_dir`.
    pub fn open<W: VisibilityWatcher>(
        config: Config,
        asset_dir: &Path,
        watcher: &mut W,
        gestures: Box<dyn GestureSource + Send>,
    ) -> Result<Soundscape, Error> {
        let tracks = player::open_track_set(asset_dir)?;
        Ok(Soundscape::start(config, tracks, watcher, gestures))
    }

    /// Sender for gesture and visibility events; clone freely into listeners.
    pub fn events(&self) -> control::Sender {
        self.events.clone()
    }

    /// Page teardown: stop the runner and release every track. Idempotent.
    pub fn shutdown(&mut self) {
        self.shutdown.signal();
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

impl Drop for Soundscape {
    fn drop(&mut self) {
        self.shutdown();
    }
}
