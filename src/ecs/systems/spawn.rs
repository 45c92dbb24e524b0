use glam::Vec2;

use crate::config::SimConfig;
use crate::ecs::components::{Asteroid, Position, PrevPosition, Velocity};

/// Top the asteroid list up to the configured floor. Runs as the last system
/// in a tick so the floor invariant holds at every tick boundary.
pub fn top_up(world: &mut hecs::World, ship_pos: Vec2, rng: &mut fastrand::Rng, cfg: &SimConfig) {
    let mut count = world.query_mut::<&Asteroid>().into_iter().count();
    while count < cfg.asteroid_floor {
        let size = cfg.asteroid_size_min
            + rng.f32() * (cfg.asteroid_size_max - cfg.asteroid_size_min);
        spawn_asteroid(world, ship_pos, rng, cfg, size);
        count += 1;
    }
}

/// Spawn a single asteroid of the given size at a cleared position with a
/// random drift velocity (magnitude capped by the config).
pub fn spawn_asteroid(
    world: &mut hecs::World,
    ship_pos: Vec2,
    rng: &mut fastrand::Rng,
    cfg: &SimConfig,
    size: f32,
) -> hecs::Entity {
    let pos = clear_point(ship_pos, size, rng, cfg);
    let angle = rng.f32() * std::f32::consts::TAU;
    let speed = rng.f32() * cfg.asteroid_max_drift;
    let vel = Vec2::new(angle.cos(), angle.sin()) * speed;

    world.spawn((Position(pos), PrevPosition(pos), Velocity(vel), Asteroid { size }))
}

/// Rejection-sample an in-bounds point outside the ship's safety radius.
/// The retry count is bounded (a tiny playfield could make the safety circle
/// cover most of it); on exhaustion fall back to a point just off an edge,
/// one size-length outside the field.
fn clear_point(ship_pos: Vec2, size: f32, rng: &mut fastrand::Rng, cfg: &SimConfig) -> Vec2 {
    let safety_sq = cfg.safety_radius * cfg.safety_radius;
    for _ in 0..cfg.spawn_retry_limit {
        let p = Vec2::new(rng.f32() * cfg.width, rng.f32() * cfg.height);
        if p.distance_squared(ship_pos) > safety_sq {
            return p;
        }
    }
    edge_point(size, rng, cfg)
}

/// A random point beyond one of the four edges, offset by the asteroid's
/// size so it drifts in rather than popping into view.
fn edge_point(size: f32, rng: &mut fastrand::Rng, cfg: &SimConfig) -> Vec2 {
    match rng.u8(0..4) {
        0 => Vec2::new(-size, rng.f32() * cfg.height),
        1 => Vec2::new(cfg.width + size, rng.f32() * cfg.height),
        2 => Vec2::new(rng.f32() * cfg.width, -size),
        _ => Vec2::new(rng.f32() * cfg.width, cfg.height + size),
    }
}
