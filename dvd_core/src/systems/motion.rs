use crate::{reflect, BounceKind, BouncePolicy, Body, Config, Events, GameRng, Motion, Velocity};
use hecs::World;

/// Move every text one tick along its controlled axes, bouncing off the
/// viewport edges. Emits one wall event per text that hit anything, even
/// when it hit two edges at once.
pub fn move_texts(world: &mut World, config: &Config, rng: &mut GameRng, events: &mut Events) {
    for (entity, (body, vel, motion)) in world.query_mut::<(&mut Body, &mut Velocity, &Motion)>()
    {
        let result = reflect(body.pos, vel.0, body.size, config.viewport, motion.axes());
        body.pos = result.pos;

        if !result.collided() {
            vel.0 = result.vel;
            continue;
        }

        let mut next_vel = result.vel;
        if config.bounce_policy == BouncePolicy::Rerandomize {
            for axis in result.collided.iter() {
                let i = axis.index();
                next_vel[i] = config.bounced_speed(vel.0[i], rng);
            }
        }
        vel.0 = next_vel;

        log::trace!(
            "Wall bounce {:?} at {:?}, velocity now {:?}",
            entity,
            body.pos,
            vel.0
        );
        events.push(entity, BounceKind::Wall);
    }
}
