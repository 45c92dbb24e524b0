use glam::Vec2;

/// The player ship. Singular, so it lives outside the ECS as a plain struct;
/// the control and movement systems mutate it directly.
#[derive(Debug, Clone, Copy)]
pub struct Ship {
    pub pos: Vec2,
    /// Previous tick's position, kept for render interpolation.
    pub prev_pos: Vec2,
    /// Heading in radians. 0 points along +x, increasing clockwise in
    /// screen coordinates (y down).
    pub heading: f32,
    pub vel: Vec2,
    /// Collision radius.
    pub radius: f32,
}

impl Ship {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            prev_pos: pos,
            heading: 0.0,
            vel: Vec2::ZERO,
            radius,
        }
    }

    /// Unit vector along the current heading.
    pub fn heading_vec(&self) -> Vec2 {
        Vec2::new(self.heading.cos(), self.heading.sin())
    }

    /// Tip of the ship, where bullets leave from.
    pub fn nose(&self) -> Vec2 {
        self.pos + self.heading_vec() * self.radius
    }
}
