/// Tuning parameters for the bouncing text
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Viewport
    pub const SCREEN_WIDTH: i32 = 800;
    pub const SCREEN_HEIGHT: i32 = 600;

    // Colors
    pub const BACKGROUND: [u8; 3] = [0, 0, 0]; // Black
    pub const TEXT_COLOR: [u8; 3] = [255, 255, 255]; // White
    pub const COLOR_MIN: u8 = 50; // Keeps text readable on black
    pub const COLOR_MAX: u8 = 255;

    // Text
    pub const TEXT: &'static str = "DVD";
    pub const FONT_SIZE: u32 = 50;

    // Speed (pixels per tick)
    pub const MIN_SPEED: i32 = 3;
    pub const MAX_SPEED: i32 = 7;

    // Free motion reverses itself when a draw in 0..=SELF_BOUNCE_RANGE hits 0
    pub const SELF_BOUNCE_RANGE: u32 = 100;

    // Frame pacing
    pub const FPS: u32 = 60;
    pub const MAX_CATCH_UP_TICKS: u32 = 6;

    // Audio
    pub const BOUNCE_SOUND: &'static str = "./sounds/bounce.mp3";
    pub const MUSIC_DIR: &'static str = "./music";
    pub const FADE_OUT_MS: u32 = 0;
}
