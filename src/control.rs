use crate::start_gate::Gesture;
use crate::trigger::Anchor;

/// What the embedding page reports into the soundscape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A user gesture of any kind; only the first one matters.
    Gesture(Gesture),
    /// An anchor region became meaningfully visible in the viewport.
    AnchorVisible(Anchor),
}

pub type Sender = crossbeam_channel::Sender<Event>;
pub type Receiver = crossbeam_channel::Receiver<Event>;

pub fn channel() -> (Sender, Receiver) {
    crossbeam_channel::unbounded()
}
