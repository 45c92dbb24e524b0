use glam::Vec2;

/// How the ship's heading is driven each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlScheme {
    /// Left/right keys step the heading, up key thrusts along it.
    Keyboard,
    /// Heading snaps toward the pointer every tick; up key still thrusts.
    PointerFollow,
}

/// All gameplay tunables in one place. Velocities and accelerations are in
/// pixels per tick: the sim has no dt, one call to `tick` is one frame.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Playfield width in pixels.
    pub width: f32,
    /// Playfield height in pixels.
    pub height: f32,
    /// Control scheme for the ship.
    pub control: ControlScheme,

    /// Ship collision radius.
    pub ship_radius: f32,
    /// Heading change per tick while a turn key is held (radians).
    pub turn_step: f32,
    /// Acceleration along the heading while thrusting.
    pub thrust_accel: f32,
    /// Per-tick velocity multiplier; bleeds off speed when coasting.
    pub drag: f32,
    /// Speed clamp for the ship.
    pub max_speed: f32,

    /// Bullet speed along the heading at fire time.
    pub bullet_speed: f32,

    /// The spawn step tops the asteroid list up to this count every tick.
    pub asteroid_floor: usize,
    /// Spawn size range (size doubles as collision radius).
    pub asteroid_size_min: f32,
    pub asteroid_size_max: f32,
    /// Max magnitude of a freshly spawned asteroid's velocity.
    pub asteroid_max_drift: f32,
    /// New asteroids must land at least this far from the ship.
    pub safety_radius: f32,
    /// Rejection-sampling attempts before falling back to an edge spawn.
    pub spawn_retry_limit: u32,
    /// Destroyed asteroids larger than this split into two half-size children.
    pub split_threshold: f32,
    /// Score awarded per asteroid destroyed.
    pub asteroid_score: u32,

    /// Enable the asteroid-asteroid separation heuristic.
    pub separation: bool,
    /// Speed given to both asteroids when separation kicks in.
    pub separation_speed: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            control: ControlScheme::Keyboard,
            ship_radius: 15.0,
            turn_step: 0.05,
            thrust_accel: 0.15,
            drag: 0.99,
            max_speed: 6.0,
            bullet_speed: 5.0,
            asteroid_floor: 5,
            asteroid_size_min: 20.0,
            asteroid_size_max: 40.0,
            asteroid_max_drift: 1.0,
            safety_radius: 200.0,
            spawn_retry_limit: 20,
            split_threshold: 20.0,
            asteroid_score: 10,
            separation: false,
            separation_speed: 1.0,
        }
    }
}

impl SimConfig {
    /// Center of the playfield, where the ship starts.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// True if the point lies inside the playfield.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }

    /// Map a coordinate that left one side of the field onto the other.
    pub fn wrap(&self, mut p: Vec2) -> Vec2 {
        if p.x < 0.0 {
            p.x += self.width;
        } else if p.x > self.width {
            p.x -= self.width;
        }
        if p.y < 0.0 {
            p.y += self.height;
        } else if p.y > self.height {
            p.y -= self.height;
        }
        p
    }
}
