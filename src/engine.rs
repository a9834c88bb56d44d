use crate::playable::Playable;
use crate::track::{TrackId, TrackSet};
use log::warn;
use std::time::Duration;

/// Every fade ramps in this many equally spaced volume steps.
pub const FADE_STEPS: u32 = 60;

/// One in-flight crossfade. Lives only while ramping.
struct FadeJob {
    from: Option<TrackId>,
    to: TrackId,
    step: u32,
    from_delta: f32,
    to_delta: f32,
    target_volume: f32,
    step_interval: Duration,
}

enum FadeState {
    Idle,
    Ramping(FadeJob),
}

/// Linear volume ramp between two tracks, one fade at a time.
///
/// The engine is purely tick-driven: `tick` advances one step and the caller
/// decides when ticks happen, so tests can run a fade in virtual time. There
/// is no cancellation; a started fade always runs its 60 steps.
pub struct CrossfadeEngine<P> {
    tracks: TrackSet<P>,
    current: Option<TrackId>,
    state: FadeState,
}

impl<P: Playable> CrossfadeEngine<P> {
    pub fn new(tracks: TrackSet<P>) -> CrossfadeEngine<P> {
        CrossfadeEngine {
            tracks,
            current: None,
            state: FadeState::Idle,
        }
    }

    /// The track that last completed a fade-in, if any.
    pub fn current(&self) -> Option<TrackId> {
        self.current
    }

    pub fn is_ramping(&self) -> bool {
        match self.state {
            FadeState::Idle => false,
            FadeState::Ramping(_) => true,
        }
    }

    /// Time between two ticks of the in-flight fade; None while idle.
    pub fn step_interval(&self) -> Option<Duration> {
        match &self.state {
            FadeState::Idle => None,
            FadeState::Ramping(job) => Some(job.step_interval),
        }
    }

    pub fn tracks(&self) -> &TrackSet<P> {
        &self.tracks
    }

    pub fn release_all(&mut self) {
        self.tracks.release_all();
    }

    /// Begin fading `from` out and `to` in over `duration_seconds`.
    ///
    /// `from = None` means fading in from silence. While a fade is already
    /// ramping the request is dropped without comment; busy is not an error
    /// and callers re-trigger if they still care. Out-of-range durations and
    /// volumes are also dropped, with a warning.
    pub fn crossfade(
        &mut self,
        from: Option<TrackId>,
        to: TrackId,
        duration_seconds: f64,
        target_volume: f32,
    ) {
        if let FadeState::Ramping(_) = self.state {
            return;
        }
        if !(duration_seconds > 0.0) {
            warn!(
                "dropping fade to {}: duration {}s is not positive",
                to.name(),
                duration_seconds
            );
            return;
        }
        if !(0.0..=1.0).contains(&target_volume) {
            warn!(
                "dropping fade to {}: target volume {} outside [0, 1]",
                to.name(),
                target_volume
            );
            return;
        }
        // fading a track into itself degenerates to a plain fade-in
        let from = from.filter(|id| *id != to);

        let from_volume = match from {
            Some(id) => self.tracks.get(id).volume(),
            None => 0.0,
        };
        let job = FadeJob {
            from,
            to,
            step: 0,
            from_delta: from_volume / FADE_STEPS as f32,
            to_delta: target_volume / FADE_STEPS as f32,
            target_volume,
            step_interval: Duration::from_secs_f64(duration_seconds / FADE_STEPS as f64),
        };

        let to_track = self.tracks.get_mut(to);
        if !to_track.is_playing() {
            to_track.start();
        }
        self.state = FadeState::Ramping(job);
    }

    /// Advance the in-flight fade by one step. A tick while idle does nothing.
    pub fn tick(&mut self) {
        let job = match &mut self.state {
            FadeState::Idle => return,
            FadeState::Ramping(job) => job,
        };
        job.step += 1;

        if let Some(from) = job.from {
            let track = self.tracks.get_mut(from);
            if track.volume() > 0.0 {
                let faded = f32::max(0.0, track.volume() - job.from_delta);
                track.set_volume(faded);
            }
        }
        {
            let track = self.tracks.get_mut(job.to);
            if track.volume() < job.target_volume {
                let raised = f32::min(job.target_volume, track.volume() + job.to_delta);
                track.set_volume(raised);
            }
        }

        if job.step < FADE_STEPS {
            return;
        }

        // terminal step: clamp both ends, hand over "current", go idle
        let (from, to, target_volume) = (job.from, job.to, job.target_volume);
        if let Some(from) = from {
            let track = self.tracks.get_mut(from);
            track.set_volume(0.0);
            track.pause();
        }
        self.tracks.get_mut(to).set_volume(target_volume);
        self.current = Some(to);
        self.state = FadeState::Idle;
    }
}
