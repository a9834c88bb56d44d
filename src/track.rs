use crate::playable::Playable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackId {
    Palace = 0,
    Docks = 1,
    Sea = 2,
}

impl TrackId {
    pub const ALL: [TrackId; 3] = [TrackId::Palace, TrackId::Docks, TrackId::Sea];

    pub fn name(self) -> &'static str {
        match self {
            TrackId::Palace => "palace",
            TrackId::Docks => "docks",
            TrackId::Sea => "sea",
        }
    }

    /// File stem conventionally used for this track's asset.
    pub fn asset_stem(self) -> &'static str {
        self.name()
    }
}

/// One ambient track: a playable resource plus the volume and playback state
/// the crossfade engine works against.
pub struct Track<P> {
    id: TrackId,
    pub(crate) player: P,
    volume: f32,
    playing: bool,
}

impl<P: Playable> Track<P> {
    fn new(id: TrackId, player: P) -> Track<P> {
        Track {
            id,
            player,
            volume: 0.0,
            playing: false,
        }
    }

    pub fn id(&self) -> TrackId {
        self.id
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub(crate) fn set_volume(&mut self, volume: f32) {
        self.volume = f32::clamp(volume, 0.0, 1.0);
        self.player.set_volume(self.volume);
    }

    pub(crate) fn start(&mut self) {
        self.player.play_from_start();
        self.playing = true;
    }

    pub(crate) fn pause(&mut self) {
        self.player.pause();
        self.playing = false;
    }

    fn release(&mut self) {
        self.player.release();
        self.playing = false;
    }
}

/// Owns the three ambient tracks and their uniform configuration.
pub struct TrackSet<P> {
    tracks: [Track<P>; 3],
}

impl<P: Playable> TrackSet<P> {
    pub fn new(palace: P, docks: P, sea: P) -> TrackSet<P> {
        let mut set = TrackSet {
            tracks: [
                Track::new(TrackId::Palace, palace),
                Track::new(TrackId::Docks, docks),
                Track::new(TrackId::Sea, sea),
            ],
        };
        set.configure();
        set
    }

    /// Loop, silence and preload every track.
    pub fn configure(&mut self) {
        for track in self.tracks.iter_mut() {
            track.player.prepare();
            track.set_volume(0.0);
        }
    }

    /// Pause every track and drop its resource. Safe to call repeatedly and
    /// at any point, including mid-fade.
    pub fn release_all(&mut self) {
        for track in self.tracks.iter_mut() {
            track.release();
        }
    }

    pub fn get(&self, id: TrackId) -> &Track<P> {
        &self.tracks[id as usize]
    }

    pub(crate) fn get_mut(&mut self, id: TrackId) -> &mut Track<P> {
        &mut self.tracks[id as usize]
    }
}
