//! Headless demo host: stands in for the render/input/audio/persistence
//! collaborators so `cargo run` plays a full session. An autopilot supplies
//! input, events are logged where a real host would draw and play sounds,
//! and the high score lives in a one-line file.

use std::error::Error;
use std::fs;
use std::time::Duration;

use glam::Vec2;
use instant::Instant;

use crate::config::SimConfig;
use crate::game::{Game, GameEvent, GamePhase};
use crate::input::InputSnapshot;
use crate::view::FrameView;

/// Target simulation tick rate (seconds per tick).
const TICK_RATE: f64 = 1.0 / 60.0;
/// Max accumulated time before we clamp (prevents spiral of death).
const MAX_ACCUMULATOR: f64 = 0.25;
/// How often to log loop stats (seconds).
const STATS_LOG_INTERVAL: f64 = 5.0;
/// The persistence collaborator: a single high-score slot on disk.
const HIGH_SCORE_FILE: &str = "highscore.txt";
/// Hard cap on the demo session so the process always exits.
const DEMO_TIME_LIMIT: f64 = 60.0;

/// Autopilot fires once aimed within this many radians of the target.
const AIM_TOLERANCE: f32 = 0.15;
/// Autopilot only thrusts while the nearest asteroid is beyond this.
const CRUISE_DISTANCE: f32 = 250.0;

// ---------------------------------------------------------------------------
// Loop timing
// ---------------------------------------------------------------------------

struct FrameStats {
    frame_count: u64,
    last_log_time: Instant,
    frame_time_sum: f64,
    frames_since_log: u32,
}

impl FrameStats {
    fn new() -> Self {
        Self {
            frame_count: 0,
            last_log_time: Instant::now(),
            frame_time_sum: 0.0,
            frames_since_log: 0,
        }
    }

    fn record_frame(&mut self, dt: f64, game: &Game) {
        self.frame_count += 1;
        self.frames_since_log += 1;
        self.frame_time_sum += dt;

        let elapsed = self.last_log_time.elapsed().as_secs_f64();
        if elapsed >= STATS_LOG_INTERVAL {
            let avg_ms = (self.frame_time_sum / self.frames_since_log as f64) * 1000.0;
            log::info!(
                "tick {} | avg frame {:.2}ms | score {} | asteroids {} | bullets {}",
                game.tick_count(),
                avg_ms,
                game.score(),
                game.asteroid_count(),
                game.bullet_count(),
            );
            self.last_log_time = Instant::now();
            self.frame_time_sum = 0.0;
            self.frames_since_log = 0;
        }
    }
}

// ---------------------------------------------------------------------------
// Collaborator stand-ins
// ---------------------------------------------------------------------------

fn load_high_score() -> u32 {
    match fs::read_to_string(HIGH_SCORE_FILE) {
        Ok(text) => text.trim().parse().unwrap_or_else(|_| {
            log::warn!("unreadable high score file, starting from 0");
            0
        }),
        Err(_) => 0,
    }
}

/// Write failures are logged and swallowed; persistence problems never
/// reach gameplay.
fn save_high_score(score: u32) {
    if let Err(e) = fs::write(HIGH_SCORE_FILE, score.to_string()) {
        log::warn!("failed to persist high score: {e}");
    }
}

/// Audio/render collaborator stand-in: one log line per event.
fn handle_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::ShotFired => log::debug!("sfx: shot"),
            GameEvent::AsteroidDestroyed { pos, size } => {
                log::debug!("sfx: explosion (size {size:.0}) at {pos}")
            }
            GameEvent::ShipDestroyed { pos } => log::info!("ship destroyed at {pos}"),
            GameEvent::NewHighScore { score } => {
                log::info!("new high score: {score}");
                save_high_score(*score);
            }
            GameEvent::GameOver { score } => log::info!("game over, final score {score}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Autopilot
// ---------------------------------------------------------------------------

/// Normalize an angle difference into [-pi, pi].
fn wrap_angle(a: f32) -> f32 {
    let tau = std::f32::consts::TAU;
    let a = a.rem_euclid(tau);
    if a > std::f32::consts::PI {
        a - tau
    } else {
        a
    }
}

/// Turn toward the nearest asteroid and fire once lined up. Fire is held
/// only every other tick so the rising-edge fire control keeps re-arming.
fn autopilot(view: &FrameView, tick: u64) -> InputSnapshot {
    let Some(ship) = view.ship else {
        return InputSnapshot::none();
    };

    let mut nearest: Option<(f32, Vec2)> = None;
    for a in &view.asteroids {
        let dist_sq = a.pos.distance_squared(ship.pos);
        if nearest.map_or(true, |(best, _)| dist_sq < best) {
            nearest = Some((dist_sq, a.pos));
        }
    }
    let Some((dist_sq, target)) = nearest else {
        return InputSnapshot::none();
    };

    let to_target = target - ship.pos;
    let diff = wrap_angle(to_target.y.atan2(to_target.x) - ship.heading);
    let aimed = diff.abs() <= AIM_TOLERANCE;

    InputSnapshot {
        left: diff < -AIM_TOLERANCE,
        right: diff > AIM_TOLERANCE,
        thrust: dist_sq > CRUISE_DISTANCE * CRUISE_DISTANCE,
        fire: aimed && tick % 2 == 0,
        pointer: None,
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Run one autopiloted session at a fixed 60 Hz timestep.
pub fn run() -> Result<(), Box<dyn Error>> {
    let high_score = load_high_score();
    log::info!("stored high score: {high_score}");

    let mut game = Game::new(SimConfig::default(), high_score);
    game.start();

    let session_start = Instant::now();
    let mut last_frame = Instant::now();
    let mut accumulator = 0.0f64;
    let mut stats = FrameStats::new();

    while game.phase() == GamePhase::Running {
        if session_start.elapsed().as_secs_f64() > DEMO_TIME_LIMIT {
            log::info!("demo time limit reached");
            break;
        }

        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f64();
        last_frame = now;
        stats.record_frame(dt, &game);

        accumulator += dt;
        if accumulator > MAX_ACCUMULATOR {
            accumulator = MAX_ACCUMULATOR;
        }

        while accumulator >= TICK_RATE {
            let view = FrameView::build(&game, 1.0);
            let input = autopilot(&view, game.tick_count());
            let events: Vec<GameEvent> = game.tick(input).to_vec();
            handle_events(&events);

            accumulator -= TICK_RATE;
            if game.phase() != GamePhase::Running {
                break;
            }
        }

        std::thread::sleep(Duration::from_millis(2));
    }

    // Let the final debris burn out under the frozen field.
    for _ in 0..60 {
        game.tick(InputSnapshot::none());
    }

    log::info!(
        "session done: score {} | high score {}",
        game.score(),
        game.high_score()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn wrap_angle_stays_in_half_open_circle() {
        assert_relative_eq!(wrap_angle(0.0), 0.0);
        assert_relative_eq!(wrap_angle(std::f32::consts::TAU + 0.5), 0.5, epsilon = 1e-5);
        assert_relative_eq!(wrap_angle(-0.5), -0.5, epsilon = 1e-5);
        assert!(wrap_angle(3.5).abs() <= std::f32::consts::PI);
    }

    #[test]
    fn autopilot_turns_toward_the_target() {
        let mut game = Game::with_seed(SimConfig::default(), 0, 8);
        game.start();
        let view = FrameView::build(&game, 1.0);
        let input = autopilot(&view, 0);
        // With a populated field the autopilot always does something.
        assert!(input.left || input.right || input.fire || input.thrust);
    }
}
