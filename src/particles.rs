use glam::Vec2;

/// Maximum concurrent debris particles.
const MAX_PARTICLES: usize = 1024;
/// Particles per destruction burst.
const BURST_COUNT: usize = 14;
/// Debris speed range in pixels/tick.
const DEBRIS_SPEED_MIN: f32 = 0.5;
const DEBRIS_SPEED_MAX: f32 = 3.0;
/// Debris lifetime range in ticks.
const DEBRIS_LIFE_MIN: i32 = 20;
const DEBRIS_LIFE_MAX: i32 = 50;
/// Per-tick velocity multiplier so debris slows as it fades.
const DEBRIS_DRAG: f32 = 0.96;

/// A single piece of explosion debris. Purely cosmetic; nothing collides
/// with it and it never affects gameplay.
#[derive(Debug, Clone, Copy)]
struct Particle {
    pos: Vec2,
    vel: Vec2,
    life: i32,
    max_life: i32,
}

/// What the host renders for one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleView {
    pub pos: Vec2,
    /// Remaining life / initial life, in [0, 1].
    pub alpha: f32,
}

/// Pool of debris particles spawned on destructive collisions.
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self {
            particles: Vec::with_capacity(MAX_PARTICLES),
        }
    }

    /// Scatter a burst of debris from a destruction point.
    pub fn burst(&mut self, pos: Vec2, rng: &mut fastrand::Rng) {
        for _ in 0..BURST_COUNT {
            if self.particles.len() >= MAX_PARTICLES {
                break;
            }
            let angle = rng.f32() * std::f32::consts::TAU;
            let speed = DEBRIS_SPEED_MIN + rng.f32() * (DEBRIS_SPEED_MAX - DEBRIS_SPEED_MIN);
            let life = rng.i32(DEBRIS_LIFE_MIN..=DEBRIS_LIFE_MAX);
            self.particles.push(Particle {
                pos,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                life,
                max_life: life,
            });
        }
    }

    /// Advance all particles one tick: move, age, swap-remove the dead.
    pub fn update(&mut self) {
        let mut i = 0;
        while i < self.particles.len() {
            let p = &mut self.particles[i];
            p.pos += p.vel;
            p.vel *= DEBRIS_DRAG;
            p.life -= 1;

            if p.life <= 0 {
                self.particles.swap_remove(i);
            } else {
                i += 1;
            }
        }
    }

    /// Append render views to the host's buffer. Alpha fades with remaining
    /// life so debris burns out instead of blinking off.
    pub fn build_views(&self, buf: &mut Vec<ParticleView>) {
        for p in &self.particles {
            let alpha = (p.life as f32 / p.max_life as f32).clamp(0.0, 1.0);
            buf.push(ParticleView { pos: p.pos, alpha });
        }
    }

    /// Number of live particles.
    pub fn count(&self) -> usize {
        self.particles.len()
    }

    /// Drop all particles (game reset).
    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_spawns_and_update_ages_out() {
        let mut rng = fastrand::Rng::with_seed(1);
        let mut ps = ParticleSystem::new();
        ps.burst(Vec2::new(100.0, 100.0), &mut rng);
        assert_eq!(ps.count(), BURST_COUNT);

        for _ in 0..DEBRIS_LIFE_MAX {
            ps.update();
        }
        assert_eq!(ps.count(), 0);
    }

    #[test]
    fn alpha_tracks_remaining_life() {
        let mut rng = fastrand::Rng::with_seed(2);
        let mut ps = ParticleSystem::new();
        ps.burst(Vec2::ZERO, &mut rng);

        let mut before = Vec::new();
        ps.build_views(&mut before);
        for _ in 0..DEBRIS_LIFE_MIN / 2 {
            ps.update();
        }
        let mut after = Vec::new();
        ps.build_views(&mut after);

        assert!(!after.is_empty());
        assert!(after[0].alpha < before[0].alpha);
        assert!(after.iter().all(|v| v.alpha > 0.0 && v.alpha <= 1.0));
    }

    #[test]
    fn pool_is_capped() {
        let mut rng = fastrand::Rng::with_seed(3);
        let mut ps = ParticleSystem::new();
        for _ in 0..(MAX_PARTICLES / BURST_COUNT) + 10 {
            ps.burst(Vec2::ZERO, &mut rng);
        }
        assert!(ps.count() <= MAX_PARTICLES);
    }
}
