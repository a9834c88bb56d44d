/// Seam between the soundscape and whatever actually produces sound.
///
/// None of the methods return errors: a refused or failed playback start is
/// the implementation's to log, and the soundscape degrades to silence.
pub trait Playable {
    /// Enable looping and begin preloading the underlying resource.
    fn prepare(&mut self);

    /// Rewind to the beginning and start playback. Fire and forget.
    fn play_from_start(&mut self);

    fn pause(&mut self);

    fn set_volume(&mut self, volume: f32);

    /// Pause and drop the underlying resource. Idempotent.
    fn release(&mut self);
}

#[cfg(test)]
pub(crate) mod fake {
    use super::Playable;

    /// Records calls instead of making noise.
    #[derive(Debug, Default)]
    pub struct FakePlayer {
        pub prepared: bool,
        pub plays: usize,
        pub paused: bool,
        pub released: bool,
        pub volume: f32,
    }

    impl Playable for FakePlayer {
        fn prepare(&mut self) {
            self.prepared = true;
        }

        fn play_from_start(&mut self) {
            self.plays += 1;
            self.paused = false;
            self.released = false;
        }

        fn pause(&mut self) {
            self.paused = true;
        }

        fn set_volume(&mut self, volume: f32) {
            self.volume = volume;
        }

        fn release(&mut self) {
            self.paused = true;
            self.released = true;
        }
    }
}
