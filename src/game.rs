use glam::Vec2;

use crate::config::SimConfig;
use crate::ecs::systems;
use crate::input::{FireControl, InputSnapshot};
use crate::particles::ParticleSystem;
use crate::ship::Ship;

/// Where the game is in its lifecycle.
///
/// Title → Running → GameOver; GameOver is terminal until `restart`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Title,
    Running,
    GameOver,
}

/// Side effects the host should act on: play a sound, persist the high
/// score, flash the screen. The sim itself never touches audio or storage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A bullet left the ship's nose.
    ShotFired,
    /// An asteroid was shot down (+score already applied).
    AsteroidDestroyed { pos: Vec2, size: f32 },
    /// The ship hit an asteroid.
    ShipDestroyed { pos: Vec2 },
    /// The run ended. Emitted exactly once per run.
    GameOver { score: u32 },
    /// The final score beat the stored high score; persist it.
    NewHighScore { score: u32 },
}

/// The whole simulation in one explicit struct: tick it, read events out,
/// build frame views. No globals, no I/O, deterministic for a given seed
/// and input sequence.
pub struct Game {
    cfg: SimConfig,
    phase: GamePhase,
    paused: bool,
    score: u32,
    high_score: u32,
    tick_count: u64,

    pub(crate) world: hecs::World,
    pub(crate) ship: Ship,
    pub(crate) particles: ParticleSystem,

    fire: FireControl,
    rng: fastrand::Rng,
    events: Vec<GameEvent>,
}

impl Game {
    /// `high_score` is whatever the host's persistence slot held at startup.
    pub fn new(cfg: SimConfig, high_score: u32) -> Self {
        Self::with_seed(cfg, high_score, fastrand::u64(..))
    }

    /// Seeded constructor. Same seed and inputs replay the same game.
    pub fn with_seed(cfg: SimConfig, high_score: u32, seed: u64) -> Self {
        let ship = Ship::new(cfg.center(), cfg.ship_radius);
        Self {
            cfg,
            phase: GamePhase::Title,
            paused: false,
            score: 0,
            high_score,
            tick_count: 0,
            world: hecs::World::new(),
            ship,
            particles: ParticleSystem::new(),
            fire: FireControl::new(),
            rng: fastrand::Rng::with_seed(seed),
            events: Vec::with_capacity(16),
        }
    }

    /// Leave the title screen and begin a fresh run.
    pub fn start(&mut self) {
        self.reset();
        self.phase = GamePhase::Running;
    }

    /// From GameOver (or anywhere) back to a freshly initialized run.
    pub fn restart(&mut self) {
        self.start();
    }

    /// Toggle the pause substate. Only meaningful while Running; rendering
    /// may continue, simulation does not.
    pub fn toggle_pause(&mut self) {
        if self.phase == GamePhase::Running {
            self.paused = !self.paused;
        }
    }

    /// Advance the simulation one frame. Returns the events this tick
    /// emitted; the slice is valid until the next call.
    ///
    /// Outside Running this is almost a no-op: Title ticks do nothing, and
    /// GameOver ticks only let the final debris burn out under the frozen
    /// field. Paused ticks do nothing at all.
    pub fn tick(&mut self, input: InputSnapshot) -> &[GameEvent] {
        self.events.clear();

        match self.phase {
            GamePhase::Title => return &self.events,
            GamePhase::GameOver => {
                self.particles.update();
                return &self.events;
            }
            GamePhase::Running if self.paused => return &self.events,
            GamePhase::Running => {}
        }

        self.tick_count += 1;
        let fire_edge = self.fire.rising_edge(input.fire);

        let outcome = systems::step(
            &mut self.world,
            &mut self.ship,
            &mut self.particles,
            &input,
            fire_edge,
            &mut self.rng,
            &self.cfg,
            &mut self.events,
        );

        self.score += outcome.asteroids_destroyed * self.cfg.asteroid_score;
        self.particles.update();

        if outcome.ship_destroyed {
            self.finish_run();
        }

        &self.events
    }

    /// RUNNING → GAME_OVER, exactly once per run.
    fn finish_run(&mut self) {
        self.phase = GamePhase::GameOver;
        self.paused = false;
        if self.score > self.high_score {
            self.high_score = self.score;
            self.events.push(GameEvent::NewHighScore { score: self.score });
        }
        self.events.push(GameEvent::GameOver { score: self.score });
        log::info!(
            "game over at tick {} - score {} (best {})",
            self.tick_count,
            self.score,
            self.high_score
        );
    }

    /// Wipe all entities and counters back to a fresh field. The initial
    /// asteroid field is spawned immediately so the first rendered frame
    /// is not empty.
    fn reset(&mut self) {
        self.world.clear();
        self.particles.clear();
        self.ship = Ship::new(self.cfg.center(), self.cfg.ship_radius);
        self.score = 0;
        self.tick_count = 0;
        self.paused = false;
        self.fire = FireControl::new();
        systems::spawn::top_up(&mut self.world, self.ship.pos, &mut self.rng, &self.cfg);
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn config(&self) -> &SimConfig {
        &self.cfg
    }

    /// Live asteroid count, never below the configured floor while Running.
    pub fn asteroid_count(&self) -> usize {
        self.world
            .query::<&crate::ecs::components::Asteroid>()
            .iter()
            .count()
    }

    /// Live bullet count.
    pub fn bullet_count(&self) -> usize {
        self.world
            .query::<&crate::ecs::components::Bullet>()
            .iter()
            .count()
    }
}
