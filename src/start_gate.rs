use crate::config::Config;
use crate::engine::CrossfadeEngine;
use crate::playable::Playable;
use crate::track::TrackId;
use log::info;

/// The user gestures any one of which may open the soundscape. Platforms
/// refuse unsolicited playback, so nothing sounds before one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Click,
    Scroll,
    TouchStart,
}

/// Embedder-side hookup of the click/scroll/touchstart listeners.
///
/// `detach` is called exactly once, as soon as the gate fires; after that the
/// soundscape has no further use for gestures.
pub trait GestureSource {
    fn detach(&mut self);
}

/// One-shot gate that opens the ambience on the first user gesture.
pub struct StartGate {
    started: bool,
    opening_duration: f64,
    opening_volume: f32,
}

impl StartGate {
    pub fn new(config: &Config) -> StartGate {
        StartGate {
            started: false,
            opening_duration: config.start.duration,
            opening_volume: config.start.volume,
        }
    }

    pub fn has_fired(&self) -> bool {
        self.started
    }

    /// Handle one gesture. The first one fades the palace in from silence and
    /// returns true so the caller can detach its listeners; every later
    /// gesture is ignored.
    pub fn on_gesture<P: Playable>(
        &mut self,
        gesture: Gesture,
        engine: &mut CrossfadeEngine<P>,
    ) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        info!("Starting {} ambience on {:?}", TrackId::Palace.name(), gesture);
        engine.crossfade(None, TrackId::Palace, self.opening_duration, self.opening_volume);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playable::fake::FakePlayer;
    use crate::track::TrackSet;

    fn engine() -> CrossfadeEngine<FakePlayer> {
        CrossfadeEngine::new(TrackSet::new(
            FakePlayer::default(),
            FakePlayer::default(),
            FakePlayer::default(),
        ))
    }

    #[test]
    fn first_gesture_opens_the_palace_ambience() {
        let mut engine = engine();
        let mut gate = StartGate::new(&Config::new());

        assert!(gate.on_gesture(Gesture::Scroll, &mut engine));
        assert!(gate.has_fired());
        assert!(engine.is_ramping());
        assert_eq!(engine.tracks().get(TrackId::Palace).player.plays, 1);
    }

    #[test]
    fn fires_exactly_once_even_before_the_fade_completes() {
        let mut engine = engine();
        let mut gate = StartGate::new(&Config::new());

        assert!(gate.on_gesture(Gesture::Click, &mut engine));
        engine.tick();
        assert!(!gate.on_gesture(Gesture::Scroll, &mut engine));
        assert!(!gate.on_gesture(Gesture::TouchStart, &mut engine));

        assert_eq!(engine.tracks().get(TrackId::Palace).player.plays, 1);
        for _ in 1..crate::engine::FADE_STEPS {
            engine.tick();
        }
        assert_eq!(engine.current(), Some(TrackId::Palace));
        assert_eq!(engine.tracks().get(TrackId::Palace).volume(), 0.6);
    }
}
