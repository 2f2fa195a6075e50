use thiserror::Error;

/// Invalid startup configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("viewport must be non-empty, got {width}x{height}")]
    EmptyViewport { width: i32, height: i32 },
    #[error("min speed must be at least 1, got {0}")]
    ZeroSpeed(i32),
    #[error("min speed {min} exceeds max speed {max}")]
    SpeedRange { min: i32, max: i32 },
    #[error("frame rate must be positive")]
    ZeroFps,
}

/// Failure reported by an audio backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioError {
    #[error("failed to load {track}: {reason}")]
    Load { track: String, reason: String },
    #[error("playback failed: {0}")]
    Playback(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaylistError {
    #[error("playlist has no tracks")]
    Empty,
    #[error(transparent)]
    Audio(#[from] AudioError),
}

/// Startup failure of the whole app
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("music: {0}")]
    Playlist(#[from] PlaylistError),
    #[error(transparent)]
    Audio(#[from] AudioError),
}
