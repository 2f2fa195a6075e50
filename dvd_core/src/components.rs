use glam::IVec2;

use crate::{Axes, Rgb, SoundId};

/// Rendered rectangle of a text entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Body {
    pub pos: IVec2,  // Top-left corner
    pub size: IVec2, // Bounding box of the rendered text
}

impl Body {
    pub fn new(pos: IVec2, size: IVec2) -> Self {
        Self { pos, size }
    }
}

/// Pixels per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Velocity(pub IVec2);

/// Which axes a text moves and bounces on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Slides up and down at a fixed X
    AlongY,
    /// Slides left and right at a fixed Y
    AlongX,
    /// Bounces on both axes and occasionally reverses on its own
    Free,
}

impl Motion {
    pub fn axes(self) -> Axes {
        match self {
            Motion::AlongY => Axes::Y,
            Motion::AlongX => Axes::X,
            Motion::Free => Axes::BOTH,
        }
    }

    /// Zero the velocity components this motion does not control
    pub fn mask(self, vel: IVec2) -> IVec2 {
        let axes = self.axes();
        IVec2::new(
            if axes.x { vel.x } else { 0 },
            if axes.y { vel.y } else { 0 },
        )
    }
}

/// Current text color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tint(pub Rgb);

/// Text content and font size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub text: String,
    pub font_size: u32,
}

impl Label {
    pub fn new(text: impl Into<String>, font_size: u32) -> Self {
        Self {
            text: text.into(),
            font_size,
        }
    }
}

/// Clip played when the text bounces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BounceSound(pub SoundId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motion_axes() {
        assert_eq!(Motion::AlongY.axes(), Axes::Y);
        assert_eq!(Motion::AlongX.axes(), Axes::X);
        assert_eq!(Motion::Free.axes(), Axes::BOTH);
    }

    #[test]
    fn test_motion_mask_freezes_uncontrolled_axis() {
        let vel = IVec2::new(3, -4);
        assert_eq!(Motion::AlongY.mask(vel), IVec2::new(0, -4));
        assert_eq!(Motion::AlongX.mask(vel), IVec2::new(3, 0));
        assert_eq!(Motion::Free.mask(vel), vel);
    }
}
