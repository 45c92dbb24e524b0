use crate::config::SimConfig;
use crate::ecs::components::{Asteroid, Bullet, Position, PrevPosition, Velocity};
use crate::ship::Ship;

/// Integrate velocities into positions for one tick.
///
/// Boundary policy is fixed per entity type: ship and asteroids wrap to the
/// opposite bound, bullets despawn the moment they leave the field.
/// Particles are handled by the particle pool.
pub fn update(ship: &mut Ship, world: &mut hecs::World, cfg: &SimConfig) {
    ship.prev_pos = ship.pos;
    ship.pos = cfg.wrap(ship.pos + ship.vel);

    for (_, (pos, prev_pos, vel, _)) in world
        .query_mut::<(&mut Position, &mut PrevPosition, &Velocity, &Asteroid)>()
    {
        prev_pos.0 = pos.0;
        pos.0 = cfg.wrap(pos.0 + vel.0);
    }

    let mut escaped: Vec<hecs::Entity> = Vec::new();
    for (entity, (pos, prev_pos, vel, _)) in world
        .query_mut::<(&mut Position, &mut PrevPosition, &Velocity, &Bullet)>()
    {
        prev_pos.0 = pos.0;
        pos.0 += vel.0;
        if !cfg.contains(pos.0) {
            escaped.push(entity);
        }
    }
    for entity in escaped {
        // Entity came out of the query above, so the despawn cannot fail.
        let _ = world.despawn(entity);
    }
}
