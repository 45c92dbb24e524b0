use crate::config::{ControlScheme, SimConfig};
use crate::ecs::components::{Bullet, Position, PrevPosition, Velocity};
use crate::game::GameEvent;
use crate::input::InputSnapshot;
use crate::ship::Ship;

/// Pointer deltas shorter than this don't retarget the heading, so the ship
/// doesn't thrash when the pointer sits on top of it.
const POINTER_DEADZONE_SQ: f32 = 4.0;

/// Apply one tick of input to the ship: heading, thrust, drag, fire.
/// `fire_edge` is true only on the fire control's down transition.
pub fn update(
    ship: &mut Ship,
    world: &mut hecs::World,
    input: &InputSnapshot,
    fire_edge: bool,
    cfg: &SimConfig,
    events: &mut Vec<GameEvent>,
) {
    match cfg.control {
        ControlScheme::Keyboard => {
            if input.left {
                ship.heading -= cfg.turn_step;
            }
            if input.right {
                ship.heading += cfg.turn_step;
            }
        }
        ControlScheme::PointerFollow => {
            if let Some(pointer) = input.pointer {
                let to_pointer = pointer - ship.pos;
                if to_pointer.length_squared() > POINTER_DEADZONE_SQ {
                    ship.heading = to_pointer.y.atan2(to_pointer.x);
                }
            }
        }
    }

    // Thrust is acceleration along the heading, never a direct speed set.
    if input.thrust {
        ship.vel += ship.heading_vec() * cfg.thrust_accel;
    }

    ship.vel *= cfg.drag;
    let speed_sq = ship.vel.length_squared();
    if speed_sq > cfg.max_speed * cfg.max_speed {
        ship.vel = ship.vel / speed_sq.sqrt() * cfg.max_speed;
    }

    if fire_edge {
        let nose = ship.nose();
        world.spawn((
            Position(nose),
            PrevPosition(nose),
            Velocity(ship.heading_vec() * cfg.bullet_speed),
            Bullet,
        ));
        events.push(GameEvent::ShotFired);
    }
}
