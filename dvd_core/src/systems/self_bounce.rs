use crate::{BounceKind, Config, Events, GameRng, Motion, Velocity};
use hecs::World;
use rand::Rng;

/// Free-moving texts reverse on their own once in a while, independent of
/// walls. Each tick draws from `0..=range` and reverses on 0.
pub fn check_self_bounces(
    world: &mut World,
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) {
    let Some(range) = config.self_bounce_range else {
        return;
    };

    for (entity, (vel, motion)) in world.query_mut::<(&mut Velocity, &Motion)>() {
        if *motion != Motion::Free {
            continue;
        }
        if rng.0.gen_range(0..=range) == 0 {
            vel.0 = -vel.0;
            log::trace!("Self bounce {:?}, velocity now {:?}", entity, vel.0);
            events.push(entity, BounceKind::SelfBounce);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    #[test]
    fn test_always_reverses_with_zero_range() {
        let mut world = World::new();
        let config = Config::new().with_self_bounce_range(Some(0));
        let mut rng = GameRng::new(1);
        let mut events = Events::new();
        let text = world.spawn((Velocity(IVec2::new(3, -4)), Motion::Free));

        check_self_bounces(&mut world, &config, &mut rng, &mut events);

        assert_eq!(world.get::<&Velocity>(text).unwrap().0, IVec2::new(-3, 4));
        assert_eq!(events.self_bounces().collect::<Vec<_>>(), vec![text]);
    }

    #[test]
    fn test_disabled_never_reverses() {
        let mut world = World::new();
        let config = Config::new().with_self_bounce_range(None);
        let mut rng = GameRng::new(1);
        let mut events = Events::new();
        let text = world.spawn((Velocity(IVec2::new(3, -4)), Motion::Free));

        for _ in 0..1_000 {
            check_self_bounces(&mut world, &config, &mut rng, &mut events);
        }

        assert_eq!(world.get::<&Velocity>(text).unwrap().0, IVec2::new(3, -4));
        assert!(events.bounces.is_empty());
    }

    #[test]
    fn test_only_free_motion_self_bounces() {
        let mut world = World::new();
        let config = Config::new().with_self_bounce_range(Some(0));
        let mut rng = GameRng::new(1);
        let mut events = Events::new();
        let along_x = world.spawn((Velocity(IVec2::new(3, 0)), Motion::AlongX));
        let along_y = world.spawn((Velocity(IVec2::new(0, 3)), Motion::AlongY));

        check_self_bounces(&mut world, &config, &mut rng, &mut events);

        assert_eq!(world.get::<&Velocity>(along_x).unwrap().0, IVec2::new(3, 0));
        assert_eq!(world.get::<&Velocity>(along_y).unwrap().0, IVec2::new(0, 3));
        assert!(events.bounces.is_empty());
    }

    #[test]
    fn test_default_rate_is_rare_but_happens() {
        let mut world = World::new();
        let config = Config::new();
        let mut rng = GameRng::new(12345);
        let mut events = Events::new();
        world.spawn((Velocity(IVec2::new(3, -4)), Motion::Free));

        for _ in 0..10_100 {
            check_self_bounces(&mut world, &config, &mut rng, &mut events);
        }

        // Expect ~100 reversals out of 10,100 draws
        let count = events.self_bounces().count();
        assert!((40..=200).contains(&count), "Got {} self bounces", count);
    }
}
