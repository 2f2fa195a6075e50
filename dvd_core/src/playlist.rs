use crate::{AudioError, MusicBackend, PlaylistError, Track};

/// Playback state after a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Playing,
    Paused,
    /// Toggle ignored while a track is still loading
    Loading,
    /// Toggle ignored because the last track failed to load
    Unloaded,
}

/// Looping background music over an ordered list of tracks
pub struct Playlist<B: MusicBackend> {
    tracks: Vec<Track>,
    index: usize,
    paused: bool,
    loaded: bool,
    fade_out_ms: u32,
    backend: B,
}

impl<B: MusicBackend> Playlist<B> {
    /// Load and start the first track. Fails without touching the backend
    /// when `tracks` is empty.
    pub fn new(tracks: Vec<Track>, backend: B) -> Result<Self, PlaylistError> {
        if tracks.is_empty() {
            return Err(PlaylistError::Empty);
        }

        let mut playlist = Self {
            tracks,
            index: 0,
            paused: false,
            loaded: false,
            fade_out_ms: 0,
            backend,
        };
        playlist.start(0)?;
        Ok(playlist)
    }

    /// Fade the old track out over `ms` before switching (0 = cut)
    pub fn with_fade_out(mut self, ms: u32) -> Self {
        self.fade_out_ms = ms;
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn current(&self) -> &Track {
        &self.tracks[self.index]
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether the backend holds a track that can be resumed
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Pause if playing, resume if not
    pub fn toggle_pause(&mut self) -> Result<PlaybackState, AudioError> {
        if !self.loaded {
            log::warn!("No track loaded, cannot resume {}", self.current().path());
            return Ok(PlaybackState::Unloaded);
        }
        if self.backend.is_loading() {
            return Ok(PlaybackState::Loading);
        }

        if self.backend.is_busy() {
            self.backend.pause();
            self.paused = true;
            log::info!("Music paused: {}", self.current().path());
            Ok(PlaybackState::Paused)
        } else {
            self.backend.unpause()?;
            self.paused = false;
            log::info!("Music resumed: {}", self.current().path());
            Ok(PlaybackState::Playing)
        }
    }

    /// Advance to the next track, wrapping to the first
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<&Track, PlaylistError> {
        let index = (self.index + 1) % self.tracks.len();
        self.start(index)?;
        Ok(self.current())
    }

    /// Step back to the previous track, wrapping to the last
    pub fn previous(&mut self) -> Result<&Track, PlaylistError> {
        let len = self.tracks.len();
        let index = (self.index + len - 1) % len;
        self.start(index)?;
        Ok(self.current())
    }

    /// Replace the active track with `track` and play it looped.
    /// The playlist position is left as is. On failure the playlist stays
    /// paused and, if loading failed, refuses to resume until a track loads.
    pub fn change_track(&mut self, track: &Track) -> Result<(), AudioError> {
        if self.fade_out_ms > 0 && self.backend.is_busy() {
            self.backend.fade_out(self.fade_out_ms);
        }
        self.backend.unload();
        self.loaded = false;
        self.paused = true;

        self.backend.load(track)?;
        self.loaded = true;
        self.backend.play_looped()?;
        self.paused = false;
        Ok(())
    }

    /// Stop playback for teardown
    pub fn stop(&mut self) {
        self.backend.unload();
        self.loaded = false;
        self.paused = false;
    }

    fn start(&mut self, index: usize) -> Result<(), AudioError> {
        let track = self.tracks[index].clone();
        // The old track is unloaded either way, so follow the new one
        self.index = index;
        self.change_track(&track)?;
        log::info!(
            "Now playing track {}/{}: {}",
            index + 1,
            self.tracks.len(),
            track.path()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockMusic {
        loaded: Option<Track>,
        busy: bool,
        loading: bool,
        calls: Vec<String>,
        fail_load: bool,
    }

    impl MusicBackend for MockMusic {
        fn load(&mut self, track: &Track) -> Result<(), AudioError> {
            self.calls.push(format!("load {}", track.path()));
            if self.fail_load {
                return Err(AudioError::Load {
                    track: track.path().to_string(),
                    reason: "missing".to_string(),
                });
            }
            self.loaded = Some(track.clone());
            Ok(())
        }

        fn play_looped(&mut self) -> Result<(), AudioError> {
            self.calls.push("play".to_string());
            self.busy = true;
            Ok(())
        }

        fn pause(&mut self) {
            self.calls.push("pause".to_string());
            self.busy = false;
        }

        fn unpause(&mut self) -> Result<(), AudioError> {
            self.calls.push("unpause".to_string());
            self.busy = true;
            Ok(())
        }

        fn is_busy(&self) -> bool {
            self.busy
        }

        fn unload(&mut self) {
            self.calls.push("unload".to_string());
            self.loaded = None;
            self.busy = false;
        }

        fn is_loading(&self) -> bool {
            self.loading
        }

        fn fade_out(&mut self, ms: u32) {
            self.calls.push(format!("fade {}", ms));
        }
    }

    fn tracks(n: usize) -> Vec<Track> {
        (0..n).map(|i| Track::new(format!("track{}.mp3", i))).collect()
    }

    #[test]
    fn test_new_starts_first_track_looped() {
        let playlist = Playlist::new(tracks(3), MockMusic::default()).unwrap();
        assert_eq!(playlist.index(), 0);
        assert_eq!(playlist.backend().loaded, Some(Track::new("track0.mp3")));
        assert!(playlist.backend().is_busy());
        assert!(!playlist.is_paused());
    }

    #[test]
    fn test_empty_playlist_rejected_without_playback() {
        let result = Playlist::new(Vec::new(), MockMusic::default());
        assert!(matches!(result, Err(PlaylistError::Empty)));
    }

    #[test]
    fn test_next_cycles_back_to_start() {
        let mut playlist = Playlist::new(tracks(4), MockMusic::default()).unwrap();
        for _ in 0..4 {
            playlist.next().unwrap();
        }
        assert_eq!(playlist.index(), 0);
        assert_eq!(playlist.current(), &Track::new("track0.mp3"));
    }

    #[test]
    fn test_next_with_single_track_stays_put() {
        let mut playlist = Playlist::new(tracks(1), MockMusic::default()).unwrap();
        let track = playlist.next().unwrap().clone();
        assert_eq!(playlist.index(), 0);
        assert_eq!(track, Track::new("track0.mp3"));
        assert!(playlist.backend().is_busy(), "Should restart the same track");
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut playlist = Playlist::new(tracks(3), MockMusic::default()).unwrap();
        playlist.previous().unwrap();
        assert_eq!(playlist.index(), 2);
        playlist.previous().unwrap();
        assert_eq!(playlist.index(), 1);
    }

    #[test]
    fn test_next_unloads_then_loads_and_plays() {
        let mut playlist = Playlist::new(tracks(2), MockMusic::default()).unwrap();
        playlist.backend_mut().calls.clear();
        playlist.next().unwrap();
        assert_eq!(
            playlist.backend().calls,
            vec!["unload", "load track1.mp3", "play"]
        );
    }

    #[test]
    fn test_toggle_pause_pairs_back_to_playing() {
        let mut playlist = Playlist::new(tracks(2), MockMusic::default()).unwrap();
        assert_eq!(playlist.toggle_pause().unwrap(), PlaybackState::Paused);
        assert!(!playlist.backend().is_busy());
        assert!(playlist.is_paused());
        assert_eq!(playlist.toggle_pause().unwrap(), PlaybackState::Playing);
        assert!(playlist.backend().is_busy());
        assert!(!playlist.is_paused());
    }

    #[test]
    fn test_toggle_pause_ignored_while_loading() {
        let mut playlist = Playlist::new(tracks(2), MockMusic::default()).unwrap();
        playlist.backend_mut().loading = true;
        playlist.backend_mut().calls.clear();
        assert_eq!(playlist.toggle_pause().unwrap(), PlaybackState::Loading);
        assert!(playlist.backend().calls.is_empty());
        assert!(playlist.backend().is_busy());
    }

    #[test]
    fn test_skip_while_paused_resumes_playback() {
        let mut playlist = Playlist::new(tracks(2), MockMusic::default()).unwrap();
        playlist.toggle_pause().unwrap();
        playlist.next().unwrap();
        assert!(!playlist.is_paused());
        assert!(playlist.backend().is_busy());
    }

    #[test]
    fn test_fade_out_before_switch() {
        let mut playlist = Playlist::new(tracks(2), MockMusic::default())
            .unwrap()
            .with_fade_out(500);
        playlist.backend_mut().calls.clear();
        playlist.next().unwrap();
        assert_eq!(playlist.backend().calls[0], "fade 500");
    }

    #[test]
    fn test_load_failure_pauses_on_failed_track() {
        let mut playlist = Playlist::new(tracks(3), MockMusic::default()).unwrap();
        playlist.backend_mut().fail_load = true;
        let result = playlist.next();
        assert!(matches!(result, Err(PlaylistError::Audio(AudioError::Load { .. }))));

        assert_eq!(playlist.index(), 1);
        assert_eq!(playlist.current(), &Track::new("track1.mp3"));
        assert_eq!(playlist.backend().loaded, None);
        assert!(!playlist.is_loaded());
        assert!(playlist.is_paused());
    }

    #[test]
    fn test_toggle_after_load_failure_does_not_resume() {
        let mut playlist = Playlist::new(tracks(3), MockMusic::default()).unwrap();
        playlist.backend_mut().fail_load = true;
        playlist.next().unwrap_err();
        playlist.backend_mut().calls.clear();

        assert_eq!(playlist.toggle_pause().unwrap(), PlaybackState::Unloaded);
        assert!(playlist.backend().calls.is_empty(), "Should not unpause an empty backend");
        assert!(!playlist.backend().is_busy());
        assert!(playlist.is_paused());
    }

    #[test]
    fn test_next_recovers_after_load_failure() {
        let mut playlist = Playlist::new(tracks(3), MockMusic::default()).unwrap();
        playlist.backend_mut().fail_load = true;
        playlist.next().unwrap_err();
        playlist.backend_mut().fail_load = false;

        playlist.next().unwrap();
        assert_eq!(playlist.index(), 2);
        assert_eq!(playlist.backend().loaded, Some(Track::new("track2.mp3")));
        assert!(playlist.is_loaded());
        assert!(!playlist.is_paused());
        assert_eq!(playlist.toggle_pause().unwrap(), PlaybackState::Paused);
    }

    #[test]
    fn test_load_failure_on_first_track() {
        let backend = MockMusic {
            fail_load: true,
            ..MockMusic::default()
        };
        let result = Playlist::new(tracks(2), backend);
        assert!(matches!(result, Err(PlaylistError::Audio(_))));
    }
}
