use rand::Rng;

use crate::{GameRng, Params};

/// RGB display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS color string, e.g. `rgb(255, 80, 12)`
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// Draw a new display color, each channel uniform in `[COLOR_MIN, COLOR_MAX]`
pub fn next_color(rng: &mut GameRng) -> Rgb {
    let mut channel = || rng.0.gen_range(Params::COLOR_MIN..=Params::COLOR_MAX);
    Rgb::new(channel(), channel(), channel())
}
