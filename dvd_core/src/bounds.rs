use glam::IVec2;

/// Fixed drawing area that bounds all motion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }

    /// Largest top-left coordinate that keeps a rectangle of `size` inside.
    /// Never negative: an oversized rectangle pins to the origin.
    pub fn max_pos(&self, size: IVec2) -> IVec2 {
        (self.size() - size).max(IVec2::ZERO)
    }

    /// Clamp a top-left coordinate so the rectangle stays inside
    pub fn clamp(&self, pos: IVec2, size: IVec2) -> IVec2 {
        pos.clamp(IVec2::ZERO, self.max_pos(size))
    }

    /// Top-left coordinate that centers a rectangle of `size`
    pub fn center_pos(&self, size: IVec2) -> IVec2 {
        self.max_pos(size) / 2
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub(crate) fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }
}

/// Set of axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Axes {
    pub x: bool,
    pub y: bool,
}

impl Axes {
    pub const NONE: Axes = Axes { x: false, y: false };
    pub const X: Axes = Axes { x: true, y: false };
    pub const Y: Axes = Axes { x: false, y: true };
    pub const BOTH: Axes = Axes { x: true, y: true };

    pub fn contains(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    pub fn insert(&mut self, axis: Axis) {
        match axis {
            Axis::X => self.x = true,
            Axis::Y => self.y = true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.x && !self.y
    }

    pub fn iter(self) -> impl Iterator<Item = Axis> {
        [Axis::X, Axis::Y]
            .into_iter()
            .filter(move |axis| self.contains(*axis))
    }
}

/// Outcome of one reflection step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reflection {
    pub pos: IVec2,
    pub vel: IVec2,
    pub collided: Axes,
}

impl Reflection {
    pub fn collided(&self) -> bool {
        !self.collided.is_empty()
    }
}

/// Advance a rectangle by its velocity on the given axes, clamping it into the
/// viewport and negating the velocity component of every axis that was clamped.
/// Axes outside `axes` keep their position and velocity.
pub fn reflect(pos: IVec2, vel: IVec2, size: IVec2, viewport: Viewport, axes: Axes) -> Reflection {
    let max_pos = viewport.max_pos(size);
    let mut next_pos = pos;
    let mut next_vel = vel;
    let mut collided = Axes::NONE;

    for axis in axes.iter() {
        let i = axis.index();
        let candidate = pos[i] + vel[i];
        let clamped = candidate.clamp(0, max_pos[i]);

        next_pos[i] = clamped;
        if clamped != candidate {
            next_vel[i] = -vel[i];
            collided.insert(axis);
        }
    }

    Reflection {
        pos: next_pos,
        vel: next_vel,
        collided,
    }
}
