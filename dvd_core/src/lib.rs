pub mod app;
pub mod audio;
pub mod bounds;
pub mod clock;
pub mod color;
pub mod components;
pub mod config;
pub mod error;
pub mod input;
pub mod params;
pub mod playlist;
pub mod resources;
pub mod surface;
pub mod systems;

pub use app::*;
pub use audio::*;
pub use bounds::*;
pub use clock::*;
pub use color::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use input::*;
pub use params::*;
pub use playlist::*;
pub use resources::*;
pub use surface::*;

use glam::IVec2;
use hecs::World;
use rand::Rng;
use systems::*;

/// Advance every text by one tick
pub fn step(world: &mut World, config: &Config, rng: &mut GameRng, events: &mut Events) {
    // Clear events at start of tick
    events.clear();

    // 1. Move and bounce off the viewport edges
    move_texts(world, config, rng, events);

    // 2. One new color per text that hit a wall
    recolor_on_wall_hit(world, events, rng);

    // 3. Random reversal of free motion, independent of walls
    check_self_bounces(world, config, rng, events);
}

/// Where a new text starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Centered,
    At(IVec2), // Top-left corner
}

/// Everything needed to spawn a text entity
#[derive(Debug, Clone)]
pub struct TextSpawn {
    pub label: Label,
    pub size: IVec2,
    pub placement: Placement,
    pub velocity: IVec2,
    pub motion: Motion,
    pub tint: Rgb,
    pub sound: Option<SoundId>,
}

/// Helper to create a bouncing text entity. The position is clamped into the
/// viewport and velocity on uncontrolled axes is dropped.
pub fn create_text(world: &mut World, config: &Config, spawn: TextSpawn) -> hecs::Entity {
    let viewport = config.viewport;
    let pos = match spawn.placement {
        Placement::Centered => viewport.center_pos(spawn.size),
        Placement::At(pos) => viewport.clamp(pos, spawn.size),
    };
    let body = Body::new(pos, spawn.size);
    let velocity = Velocity(spawn.motion.mask(spawn.velocity));

    let mut builder = hecs::EntityBuilder::new();
    builder
        .add(body)
        .add(velocity)
        .add(spawn.motion)
        .add(Tint(spawn.tint))
        .add(spawn.label);
    if let Some(clip) = spawn.sound {
        builder.add(BounceSound(clip));
    }
    world.spawn(builder.build())
}

/// Random starting velocity: each controlled component gets a speed in
/// `[min_speed, max_speed]` and a random sign
pub fn random_velocity(rng: &mut GameRng, config: &Config, motion: Motion) -> IVec2 {
    let mut component = || {
        let speed = config.random_speed(rng);
        if rng.0.gen_bool(0.5) {
            speed
        } else {
            -speed
        }
    };
    let vel = IVec2::new(component(), component());
    motion.mask(vel)
}
