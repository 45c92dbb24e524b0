use glam::Vec2;

use crate::config::SimConfig;
use crate::ecs::components::{Asteroid, Bullet, Position, Velocity};
use crate::ecs::systems::spawn;
use crate::game::GameEvent;
use crate::particles::ParticleSystem;
use crate::ship::Ship;

/// What the collision pass did this tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollisionOutcome {
    /// The ship overlapped an asteroid; the game ends this tick.
    pub ship_destroyed: bool,
    /// Asteroids removed by bullets this tick.
    pub asteroids_destroyed: u32,
}

struct AsteroidSnap {
    entity: hecs::Entity,
    pos: Vec2,
    size: f32,
}

/// Run all collision checks for one tick, in priority order:
///
/// 1. ship vs. asteroids: `dist < ship.radius + size`; on hit the tick ends,
///    nothing else is checked.
/// 2. bullets vs. asteroids: bullets are points, `dist < size`; first match
///    consumes both the bullet and the asteroid, oversized asteroids split
///    into two freshly placed half-size children.
/// 3. asteroid separation heuristic (config-gated).
///
/// All checks are circle-circle. Destruction spawns a debris burst and pushes
/// an event for the host; scoring is applied by the caller from the outcome.
pub fn update(
    ship: &Ship,
    world: &mut hecs::World,
    particles: &mut ParticleSystem,
    rng: &mut fastrand::Rng,
    cfg: &SimConfig,
    events: &mut Vec<GameEvent>,
) -> CollisionOutcome {
    // Snapshot asteroids once; the write phase below must not run inside a
    // live query borrow.
    let asteroids: Vec<AsteroidSnap> = world
        .query_mut::<(&Position, &Asteroid)>()
        .into_iter()
        .map(|(entity, (pos, asteroid))| AsteroidSnap {
            entity,
            pos: pos.0,
            size: asteroid.size,
        })
        .collect();

    for a in &asteroids {
        let threshold = ship.radius + a.size;
        if a.pos.distance_squared(ship.pos) < threshold * threshold {
            particles.burst(ship.pos, rng);
            events.push(GameEvent::ShipDestroyed { pos: ship.pos });
            return CollisionOutcome {
                ship_destroyed: true,
                asteroids_destroyed: 0,
            };
        }
    }

    let bullets: Vec<(hecs::Entity, Vec2)> = world
        .query_mut::<(&Position, &Bullet)>()
        .into_iter()
        .map(|(entity, (pos, _))| (entity, pos.0))
        .collect();

    let mut consumed = vec![false; asteroids.len()];
    let mut destroyed = 0u32;
    for (bullet_entity, bullet_pos) in bullets {
        for (idx, a) in asteroids.iter().enumerate() {
            if consumed[idx] {
                continue;
            }
            if bullet_pos.distance_squared(a.pos) < a.size * a.size {
                consumed[idx] = true;
                destroyed += 1;
                let _ = world.despawn(bullet_entity);
                let _ = world.despawn(a.entity);
                particles.burst(bullet_pos, rng);
                events.push(GameEvent::AsteroidDestroyed {
                    pos: a.pos,
                    size: a.size,
                });
                if a.size > cfg.split_threshold {
                    // Children are re-sampled through the spawn policy, not
                    // dropped at the parent's position.
                    for _ in 0..2 {
                        spawn::spawn_asteroid(world, ship.pos, rng, cfg, a.size * 0.5);
                    }
                }
                break;
            }
        }
    }

    if cfg.separation {
        separate(world, cfg);
    }

    CollisionOutcome {
        ship_destroyed: false,
        asteroids_destroyed: destroyed,
    }
}

/// Push overlapping asteroid pairs directly apart at a fixed speed. A cheap
/// heuristic, not an elastic collision: both velocities are replaced with
/// unit vectors pointing away from each other.
fn separate(world: &mut hecs::World, cfg: &SimConfig) {
    let snaps: Vec<AsteroidSnap> = world
        .query_mut::<(&Position, &Asteroid)>()
        .into_iter()
        .map(|(entity, (pos, asteroid))| AsteroidSnap {
            entity,
            pos: pos.0,
            size: asteroid.size,
        })
        .collect();

    for i in 0..snaps.len() {
        for j in (i + 1)..snaps.len() {
            let delta = snaps[i].pos - snaps[j].pos;
            let dist_sq = delta.length_squared();
            let overlap = snaps[i].size + snaps[j].size;
            if dist_sq >= overlap * overlap || dist_sq < 1e-6 {
                continue;
            }
            let away = delta / dist_sq.sqrt();
            if let Ok(mut vel) = world.get::<&mut Velocity>(snaps[i].entity) {
                vel.0 = away * cfg.separation_speed;
            }
            if let Ok(mut vel) = world.get::<&mut Velocity>(snaps[j].entity) {
                vel.0 = -away * cfg.separation_speed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::PrevPosition;
    use crate::ecs::systems::movement;

    fn spawn_asteroid_at(world: &mut hecs::World, pos: Vec2, size: f32) -> hecs::Entity {
        world.spawn((
            Position(pos),
            PrevPosition(pos),
            Velocity(Vec2::ZERO),
            Asteroid { size },
        ))
    }

    fn spawn_bullet_at(world: &mut hecs::World, pos: Vec2, vel: Vec2) -> hecs::Entity {
        world.spawn((Position(pos), PrevPosition(pos), Velocity(vel), Bullet))
    }

    #[test]
    fn overlapping_ship_ends_the_game() {
        // Ship at (400,300) radius 15, asteroid at (410,300) size 40:
        // distance 10 < 55.
        let cfg = SimConfig::default();
        let ship = Ship::new(Vec2::new(400.0, 300.0), 15.0);
        let mut world = hecs::World::new();
        let mut particles = ParticleSystem::new();
        let mut rng = fastrand::Rng::with_seed(1);
        let mut events = Vec::new();
        spawn_asteroid_at(&mut world, Vec2::new(410.0, 300.0), 40.0);

        let outcome = update(&ship, &mut world, &mut particles, &mut rng, &cfg, &mut events);
        assert!(outcome.ship_destroyed);
        assert!(particles.count() > 0);
        assert!(matches!(
            events.as_slice(),
            [GameEvent::ShipDestroyed { .. }]
        ));
    }

    #[test]
    fn distant_ship_survives() {
        let cfg = SimConfig::default();
        let ship = Ship::new(Vec2::new(100.0, 100.0), 15.0);
        let mut world = hecs::World::new();
        let mut particles = ParticleSystem::new();
        let mut rng = fastrand::Rng::with_seed(1);
        let mut events = Vec::new();
        spawn_asteroid_at(&mut world, Vec2::new(500.0, 500.0), 40.0);

        let outcome = update(&ship, &mut world, &mut particles, &mut rng, &cfg, &mut events);
        assert!(!outcome.ship_destroyed);
        assert!(events.is_empty());
    }

    #[test]
    fn bullet_destroys_large_asteroid_and_splits_it() {
        // Bullet at (100,100) moving (5,0) toward an asteroid of size 40
        // centered at (140,100).
        let cfg = SimConfig::default();
        let mut ship = Ship::new(Vec2::new(700.0, 500.0), 15.0);
        let mut world = hecs::World::new();
        let mut particles = ParticleSystem::new();
        let mut rng = fastrand::Rng::with_seed(2);
        let mut events = Vec::new();
        spawn_asteroid_at(&mut world, Vec2::new(140.0, 100.0), 40.0);
        spawn_bullet_at(&mut world, Vec2::new(100.0, 100.0), Vec2::new(5.0, 0.0));

        let mut destroyed = 0;
        for _ in 0..8 {
            movement::update(&mut ship, &mut world, &cfg);
            let outcome =
                update(&ship, &mut world, &mut particles, &mut rng, &cfg, &mut events);
            destroyed += outcome.asteroids_destroyed;
        }

        assert_eq!(destroyed, 1);
        assert_eq!(world.query_mut::<&Bullet>().into_iter().count(), 0);
        let children: Vec<f32> = world
            .query_mut::<&Asteroid>()
            .into_iter()
            .map(|(_, a)| a.size)
            .collect();
        assert_eq!(children.len(), 2);
        assert!(children.iter().all(|&s| s == 20.0));
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::AsteroidDestroyed { size, .. } if *size == 40.0)));
    }

    #[test]
    fn small_asteroid_leaves_no_children() {
        let cfg = SimConfig::default();
        let ship = Ship::new(Vec2::new(700.0, 500.0), 15.0);
        let mut world = hecs::World::new();
        let mut particles = ParticleSystem::new();
        let mut rng = fastrand::Rng::with_seed(3);
        let mut events = Vec::new();
        spawn_asteroid_at(&mut world, Vec2::new(100.0, 100.0), 20.0);
        spawn_bullet_at(&mut world, Vec2::new(100.0, 100.0), Vec2::ZERO);

        let outcome = update(&ship, &mut world, &mut particles, &mut rng, &cfg, &mut events);
        assert_eq!(outcome.asteroids_destroyed, 1);
        assert_eq!(world.query_mut::<&Asteroid>().into_iter().count(), 0);
    }

    #[test]
    fn one_bullet_per_asteroid_per_tick() {
        let cfg = SimConfig {
            // keep the children out of the way
            split_threshold: 100.0,
            ..SimConfig::default()
        };
        let ship = Ship::new(Vec2::new(700.0, 500.0), 15.0);
        let mut world = hecs::World::new();
        let mut particles = ParticleSystem::new();
        let mut rng = fastrand::Rng::with_seed(4);
        let mut events = Vec::new();
        spawn_asteroid_at(&mut world, Vec2::new(100.0, 100.0), 30.0);
        spawn_bullet_at(&mut world, Vec2::new(95.0, 100.0), Vec2::ZERO);
        spawn_bullet_at(&mut world, Vec2::new(105.0, 100.0), Vec2::ZERO);

        let outcome = update(&ship, &mut world, &mut particles, &mut rng, &cfg, &mut events);
        assert_eq!(outcome.asteroids_destroyed, 1);
        // The second bullet did not resolve against the same asteroid.
        assert_eq!(world.query_mut::<&Bullet>().into_iter().count(), 1);
    }

    #[test]
    fn separation_pushes_overlapping_asteroids_apart() {
        let cfg = SimConfig {
            separation: true,
            ..SimConfig::default()
        };
        let ship = Ship::new(Vec2::new(700.0, 500.0), 15.0);
        let mut world = hecs::World::new();
        let mut particles = ParticleSystem::new();
        let mut rng = fastrand::Rng::with_seed(5);
        let mut events = Vec::new();
        let a = spawn_asteroid_at(&mut world, Vec2::new(100.0, 100.0), 30.0);
        let b = spawn_asteroid_at(&mut world, Vec2::new(120.0, 100.0), 30.0);

        update(&ship, &mut world, &mut particles, &mut rng, &cfg, &mut events);

        let va = world.get::<&Velocity>(a).unwrap().0;
        let vb = world.get::<&Velocity>(b).unwrap().0;
        assert!(va.x < 0.0, "left asteroid pushed further left");
        assert!(vb.x > 0.0, "right asteroid pushed further right");
        assert!((va.length() - cfg.separation_speed).abs() < 1e-4);
        assert!((vb.length() - cfg.separation_speed).abs() < 1e-4);
    }
}
