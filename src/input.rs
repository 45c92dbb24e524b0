use glam::Vec2;

/// One frame's worth of input, sampled by the host once per tick.
/// Unset fields simply have no effect; there is no invalid input.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub thrust: bool,
    pub fire: bool,
    /// Pointer position in playfield pixels, if the host tracks one.
    pub pointer: Option<Vec2>,
}

impl InputSnapshot {
    /// No keys held, no pointer.
    pub fn none() -> Self {
        Self::default()
    }
}

/// Tracks the previous frame's fire state so a held key fires exactly once.
#[derive(Debug, Default)]
pub struct FireControl {
    was_down: bool,
}

impl FireControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed this frame's fire state; true only on the down transition.
    pub fn rising_edge(&mut self, down: bool) -> bool {
        let fired = down && !self.was_down;
        self.was_down = down;
        fired
    }
}
