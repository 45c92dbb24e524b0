pub mod collision;
pub mod control;
pub mod movement;
pub mod spawn;

use crate::config::SimConfig;
use crate::game::GameEvent;
use crate::input::InputSnapshot;
use crate::particles::ParticleSystem;
use crate::ship::Ship;

pub use collision::CollisionOutcome;

/// Run the simulation systems for one tick, in fixed order.
///
/// The spawn step runs last so the asteroid floor holds at every tick
/// boundary, unless the ship was destroyed, in which case the tick stops
/// dead (the field freezes exactly as the player saw it).
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut hecs::World,
    ship: &mut Ship,
    particles: &mut ParticleSystem,
    input: &InputSnapshot,
    fire_edge: bool,
    rng: &mut fastrand::Rng,
    cfg: &SimConfig,
    events: &mut Vec<GameEvent>,
) -> CollisionOutcome {
    // 1. Input: heading, thrust, bullet spawn on the fire edge
    control::update(ship, world, input, fire_edge, cfg, events);

    // 2. Integrate motion, wrap ship/asteroids, cull escaped bullets
    movement::update(ship, world, cfg);

    // 3. Circle-circle collision checks, destruction, splitting
    let outcome = collision::update(ship, world, particles, rng, cfg, events);

    // 4. Top the asteroid field back up to the floor
    if !outcome.ship_destroyed {
        spawn::top_up(world, ship.pos, rng, cfg);
    }

    outcome
}
