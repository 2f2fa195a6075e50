use crate::{next_color, Events, GameRng, Tint};
use hecs::World;

/// Give every text that hit a wall this tick a new color
pub fn recolor_on_wall_hit(world: &mut World, events: &Events, rng: &mut GameRng) {
    for entity in events.wall_hits() {
        if let Ok(mut tint) = world.get::<&mut Tint>(entity) {
            tint.0 = next_color(rng);
        }
    }
}
