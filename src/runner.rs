use crate::control::{Event, Receiver};
use crate::engine::CrossfadeEngine;
use crate::playable::Playable;
use crate::shutdown::Shutdown;
use crate::start_gate::{GestureSource, StartGate};
use crate::trigger::TriggerSet;
use std::time::Duration;

/// How often to look for events while no fade is ramping.
const IDLE_POLL: Duration = Duration::from_millis(50);

/// Drive the engine on wall-clock time until `shutdown` fires.
///
/// Single-threaded by construction: the engine lives on this thread only, so
/// trigger guards read the same state the ticks mutate and nothing interleaves
/// within a step. Events are drained between ticks; while a fade ramps the
/// sleep below is one fade step long, while idle it is a coarse poll.
///
/// On shutdown every track is released before the engine is handed back.
pub(crate) fn run<P: Playable>(
    mut engine: CrossfadeEngine<P>,
    mut gate: StartGate,
    triggers: TriggerSet,
    mut gestures: Option<Box<dyn GestureSource + Send>>,
    events: Receiver,
    shutdown: Shutdown,
) -> CrossfadeEngine<P> {
    loop {
        let wait = engine.step_interval().unwrap_or(IDLE_POLL);
        if shutdown.sleep(wait) {
            break;
        }

        while let Ok(event) = events.try_recv() {
            match event {
                Event::Gesture(gesture) => {
                    if gate.on_gesture(gesture, &mut engine) {
                        if let Some(mut source) = gestures.take() {
                            source.detach();
                        }
                    }
                }
                Event::AnchorVisible(anchor) => triggers.on_visible(anchor, &mut engine),
            }
        }

        engine.tick();
    }

    engine.release_all();
    engine
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::control;
    use crate::playable::fake::FakePlayer;
    use crate::start_gate::Gesture;
    use crate::track::{TrackId, TrackSet};
    use crate::trigger::Anchor;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::thread;

    struct TestGestures {
        detached: Arc<AtomicBool>,
    }

    impl GestureSource for TestGestures {
        fn detach(&mut self) {
            self.detached.store(true, Ordering::SeqCst);
        }
    }

    fn fast_config() -> Config {
        let mut config = Config::new();
        // 60ms fades so the whole narrative fits in a test run
        config.start.duration = 0.06;
        config.docks.duration = 0.06;
        config.sea.duration = 0.06;
        config.palace_return.duration = 0.06;
        config
    }

    #[test]
    fn runner_plays_the_story_and_releases_on_shutdown() {
        let config = fast_config();
        let engine = CrossfadeEngine::new(TrackSet::new(
            FakePlayer::default(),
            FakePlayer::default(),
            FakePlayer::default(),
        ));
        let gate = StartGate::new(&config);
        let triggers = TriggerSet::from_config(&config);
        let (sender, receiver) = control::channel();
        let shutdown = Shutdown::new();
        let detached = Arc::new(AtomicBool::new(false));
        let gestures: Box<dyn GestureSource + Send> = Box::new(TestGestures {
            detached: detached.clone(),
        });

        let join = {
            let shutdown = shutdown.clone();
            thread::spawn(move || {
                run(engine, gate, triggers, Some(gestures), receiver, shutdown)
            })
        };

        sender.send(Event::Gesture(Gesture::Scroll)).unwrap();
        thread::sleep(Duration::from_millis(500));
        sender.send(Event::AnchorVisible(Anchor::DocksTransition)).unwrap();
        thread::sleep(Duration::from_millis(500));

        shutdown.signal();
        let engine = join.join().unwrap();

        assert!(detached.load(Ordering::SeqCst));
        assert_eq!(engine.current(), Some(TrackId::Docks));
        for id in TrackId::ALL.iter() {
            assert!(engine.tracks().get(*id).player.released);
            assert!(!engine.tracks().get(*id).is_playing());
        }
    }
}
