pub mod motion;
pub mod recolor;
pub mod render;
pub mod self_bounce;
pub mod sound;

pub use motion::*;
pub use recolor::*;
pub use render::*;
pub use self_bounce::*;
pub use sound::*;
