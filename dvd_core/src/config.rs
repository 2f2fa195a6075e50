use std::time::Duration;

use rand::Rng;

use crate::{ConfigError, GameRng, Params, Rgb, Track, Viewport};

/// What happens to a velocity component when it hits a wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BouncePolicy {
    /// Keep the magnitude, flip the sign
    #[default]
    Negate,
    /// Flip the sign and draw a fresh magnitude in `[min_speed, max_speed]`
    Rerandomize,
}

/// App configuration, passed into every constructor at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub viewport: Viewport,
    pub background: Rgb,
    pub text_color: Rgb,
    pub text: String,
    pub font_size: u32,
    pub min_speed: i32,
    pub max_speed: i32,
    pub fps: u32,
    pub bounce_policy: BouncePolicy,
    pub self_bounce_range: Option<u32>,
    pub bounce_sound: String,
    pub music: Vec<Track>,
    pub fade_out_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(Params::SCREEN_WIDTH, Params::SCREEN_HEIGHT),
            background: Params::BACKGROUND.into(),
            text_color: Params::TEXT_COLOR.into(),
            text: Params::TEXT.to_string(),
            font_size: Params::FONT_SIZE,
            min_speed: Params::MIN_SPEED,
            max_speed: Params::MAX_SPEED,
            fps: Params::FPS,
            bounce_policy: BouncePolicy::default(),
            self_bounce_range: Some(Params::SELF_BOUNCE_RANGE),
            bounce_sound: Params::BOUNCE_SOUND.to_string(),
            music: Vec::new(),
            fade_out_ms: Params::FADE_OUT_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_viewport(mut self, width: i32, height: i32) -> Self {
        self.viewport = Viewport::new(width, height);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>, font_size: u32) -> Self {
        self.text = text.into();
        self.font_size = font_size;
        self
    }

    pub fn with_speed_range(mut self, min_speed: i32, max_speed: i32) -> Self {
        self.min_speed = min_speed;
        self.max_speed = max_speed;
        self
    }

    pub fn with_bounce_policy(mut self, policy: BouncePolicy) -> Self {
        self.bounce_policy = policy;
        self
    }

    pub fn with_self_bounce_range(mut self, range: Option<u32>) -> Self {
        self.self_bounce_range = range;
        self
    }

    pub fn with_music<I, T>(mut self, tracks: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Track>,
    {
        self.music = tracks.into_iter().map(Into::into).collect();
        self
    }

    /// Tracks under `Params::MUSIC_DIR`, in the given order
    pub fn with_music_files<I, S>(self, file_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tracks: Vec<Track> = file_names
            .into_iter()
            .map(|name| Track::new(format!("{}/{}", Params::MUSIC_DIR, name.as_ref())))
            .collect();
        self.with_music(tracks)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let Viewport { width, height } = self.viewport;
        if width <= 0 || height <= 0 {
            return Err(ConfigError::EmptyViewport { width, height });
        }
        if self.min_speed < 1 {
            return Err(ConfigError::ZeroSpeed(self.min_speed));
        }
        if self.min_speed > self.max_speed {
            return Err(ConfigError::SpeedRange {
                min: self.min_speed,
                max: self.max_speed,
            });
        }
        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        Ok(())
    }

    /// Wall time of one tick
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }

    /// Random speed magnitude in `[min_speed, max_speed]`
    pub fn random_speed(&self, rng: &mut GameRng) -> i32 {
        rng.0.gen_range(self.min_speed..=self.max_speed)
    }

    /// Velocity component after a wall hit, given the component before it
    pub fn bounced_speed(&self, before: i32, rng: &mut GameRng) -> i32 {
        match self.bounce_policy {
            BouncePolicy::Negate => -before,
            BouncePolicy::Rerandomize => {
                let speed = self.random_speed(rng);
                if before < 0 {
                    speed
                } else {
                    -speed
                }
            }
        }
    }
}
