//! Audio seams
//!
//! The core never touches an audio device. Frontends implement these traits
//! over whatever mixer they have; tests use recording mocks.

use crate::AudioError;

/// One playable audio resource in a playlist
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Track(String);

impl Track {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Track {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for Track {
    fn from(path: String) -> Self {
        Self(path)
    }
}

/// Handle of a loaded sound effect clip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundId(pub u16);

/// Fire-and-forget sound effects. Overlapping plays are allowed.
pub trait SoundPlayer {
    /// Decode a clip up front so playing it later cannot fail
    fn load_clip(&mut self, path: &str) -> Result<SoundId, AudioError>;

    fn play_clip(&mut self, clip: SoundId);
}

/// Streaming background music with a single active track
pub trait MusicBackend {
    fn load(&mut self, track: &Track) -> Result<(), AudioError>;

    /// Start the loaded track, repeating forever
    fn play_looped(&mut self) -> Result<(), AudioError>;

    fn pause(&mut self);

    fn unpause(&mut self) -> Result<(), AudioError>;

    /// True while the track is audibly playing
    fn is_busy(&self) -> bool;

    fn unload(&mut self);

    /// True while a load has not completed yet
    fn is_loading(&self) -> bool {
        false
    }

    fn fade_out(&mut self, _ms: u32) {}
}
