//! Scroll-synchronized ambience for a narrative page: three looping tracks
//! (palace, docks, sea) crossfaded as anchor regions enter the viewport.
//!
//! The embedder forwards user gestures and anchor-visibility events through
//! [`Soundscape::events`]; the first gesture opens the palace ambience, each
//! visible anchor fades its track in over the configured duration, and
//! teardown releases every track. One fade at a time: requests made while a
//! fade is ramping are dropped, not queued.

pub mod config;
pub mod control;
pub mod engine;
pub mod error;
pub mod playable;
pub mod player;
mod runner;
pub mod shutdown;
pub mod soundscape;
pub mod start_gate;
pub mod track;
pub mod trigger;

pub use crate::config::{Config, FadeSpec};
pub use crate::control::Event;
pub use crate::engine::{CrossfadeEngine, FADE_STEPS};
pub use crate::error::Error;
pub use crate::playable::Playable;
pub use crate::player::RodioPlayer;
pub use crate::soundscape::Soundscape;
pub use crate::start_gate::{Gesture, GestureSource, StartGate};
pub use crate::track::{Track, TrackId, TrackSet};
pub use crate::trigger::{
    Anchor, Trigger, TriggerSet, VisibilityWatcher, VISIBILITY_THRESHOLD,
};
