use crate::{BounceSound, Events, SoundPlayer};
use hecs::World;

/// Play the bounce clip once per bounce event. Returns how many clips were
/// started.
pub fn play_bounce_sounds<S: SoundPlayer>(world: &World, events: &Events, player: &mut S) -> usize {
    let mut played = 0;
    for event in &events.bounces {
        if let Ok(sound) = world.get::<&BounceSound>(event.entity) {
            player.play_clip(sound.0);
            played += 1;
        }
    }
    played
}
