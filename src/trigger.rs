use crate::config::Config;
use crate::control;
use crate::engine::CrossfadeEngine;
use crate::playable::Playable;
use crate::track::TrackId;
use log::{debug, info};

/// Named viewport regions the narrative transitions hang off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    DocksTransition,
    SeaTransition,
    PalaceReturnTransition,
}

impl Anchor {
    pub const ALL: [Anchor; 3] = [
        Anchor::DocksTransition,
        Anchor::SeaTransition,
        Anchor::PalaceReturnTransition,
    ];

    /// Element id the watcher binds to on the page.
    pub fn element_id(self) -> &'static str {
        match self {
            Anchor::DocksTransition => "docks-transition",
            Anchor::SeaTransition => "sea-transition",
            Anchor::PalaceReturnTransition => "palace-return-transition",
        }
    }
}

/// Fraction of an anchor that must be visible before a watcher reports it.
pub const VISIBILITY_THRESHOLD: f32 = 0.5;

/// Whatever watches the page for anchors scrolling into view.
///
/// Implementations deliver `Event::AnchorVisible` through the sender whenever
/// at least [`VISIBILITY_THRESHOLD`] of the anchor's region is visible, and
/// return false from `watch` when the anchor does not exist on this page.
/// Nothing in this crate touches a browser API directly.
pub trait VisibilityWatcher {
    fn watch(&mut self, anchor: Anchor, events: &control::Sender) -> bool;
}

/// One viewport region bound to a destination track and its fade shape.
pub struct Trigger {
    pub anchor: Anchor,
    pub target: TrackId,
    pub duration: f64,
    pub volume: f32,
}

/// The page's triggers, pruned to the anchors that actually exist.
pub struct TriggerSet {
    triggers: Vec<Trigger>,
}

impl TriggerSet {
    pub fn from_config(config: &Config) -> TriggerSet {
        TriggerSet {
            triggers: vec![
                Trigger {
                    anchor: Anchor::DocksTransition,
                    target: TrackId::Docks,
                    duration: config.docks.duration,
                    volume: config.docks.volume,
                },
                Trigger {
                    anchor: Anchor::SeaTransition,
                    target: TrackId::Sea,
                    duration: config.sea.duration,
                    volume: config.sea.volume,
                },
                Trigger {
                    anchor: Anchor::PalaceReturnTransition,
                    target: TrackId::Palace,
                    duration: config.palace_return.duration,
                    volume: config.palace_return.volume,
                },
            ],
        }
    }

    /// Bind every trigger whose anchor exists. An absent anchor means the
    /// page simply does not have that section, so its trigger is dropped.
    pub fn attach<W: VisibilityWatcher>(&mut self, watcher: &mut W, events: &control::Sender) {
        self.triggers.retain(|trigger| {
            let bound = watcher.watch(trigger.anchor, events);
            if !bound {
                debug!(
                    "anchor #{} absent, skipping its trigger",
                    trigger.anchor.element_id()
                );
            }
            bound
        });
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    /// React to an anchor becoming visible. Level-sensitive: while the target
    /// is already the current track this does nothing, so lingering or
    /// re-entering the same region is quiet. A busy engine drops the request
    /// (not queued); scrolling on re-fires the watcher soon enough.
    pub(crate) fn on_visible<P: Playable>(
        &self,
        anchor: Anchor,
        engine: &mut CrossfadeEngine<P>,
    ) {
        let trigger = match self.triggers.iter().find(|t| t.anchor == anchor) {
            Some(trigger) => trigger,
            None => return,
        };
        if engine.current() == Some(trigger.target) {
            return;
        }
        info!(
            "Transitioning to {} ({}s)",
            trigger.target.name(),
            trigger.duration
        );
        engine.crossfade(engine.current(), trigger.target, trigger.duration, trigger.volume);
    }
}
