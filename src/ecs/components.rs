use glam::Vec2;

/// Current position in playfield pixels.
#[derive(Debug, Clone, Copy)]
pub struct Position(pub Vec2);

/// Previous tick's position, kept for render interpolation.
#[derive(Debug, Clone, Copy)]
pub struct PrevPosition(pub Vec2);

/// Velocity in pixels/tick.
#[derive(Debug, Clone, Copy)]
pub struct Velocity(pub Vec2);

/// A drifting rock. `size` is its radius, its collision threshold, and its
/// split-eligibility threshold all at once.
#[derive(Debug, Clone, Copy)]
pub struct Asteroid {
    pub size: f32,
}

/// Marker for ship projectiles. Bullets are points with no radius.
#[derive(Debug, Clone, Copy)]
pub struct Bullet;
