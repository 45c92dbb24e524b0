use glam::Vec2;

use crate::ecs::components::{Asteroid, Bullet, Position, PrevPosition};
use crate::game::{Game, GamePhase};
use crate::particles::ParticleView;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipView {
    pub pos: Vec2,
    pub heading: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsteroidView {
    pub pos: Vec2,
    pub size: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulletView {
    pub pos: Vec2,
}

/// Everything the host needs to draw one frame. Positions are interpolated
/// between the previous and current tick by `alpha` in [0, 1], so a renderer
/// running faster than the tick rate stays smooth.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameView {
    pub phase: GamePhase,
    pub paused: bool,
    pub score: u32,
    pub high_score: u32,
    /// None on the title screen.
    pub ship: Option<ShipView>,
    pub asteroids: Vec<AsteroidView>,
    pub bullets: Vec<BulletView>,
    pub particles: Vec<ParticleView>,
}

impl FrameView {
    pub fn build(game: &Game, alpha: f32) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        let phase = game.phase();

        let ship = (phase != GamePhase::Title).then(|| ShipView {
            pos: game.ship.prev_pos.lerp(game.ship.pos, alpha),
            heading: game.ship.heading,
            radius: game.ship.radius,
        });

        let mut asteroids = Vec::new();
        for (_, (pos, prev, asteroid)) in game
            .world
            .query::<(&Position, &PrevPosition, &Asteroid)>()
            .iter()
        {
            asteroids.push(AsteroidView {
                pos: prev.0.lerp(pos.0, alpha),
                size: asteroid.size,
            });
        }

        let mut bullets = Vec::new();
        for (_, (pos, prev, _)) in game
            .world
            .query::<(&Position, &PrevPosition, &Bullet)>()
            .iter()
        {
            bullets.push(BulletView {
                pos: prev.0.lerp(pos.0, alpha),
            });
        }

        let mut particles = Vec::new();
        game.particles.build_views(&mut particles);

        Self {
            phase,
            paused: game.is_paused(),
            score: game.score(),
            high_score: game.high_score(),
            ship,
            asteroids,
            bullets,
            particles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::input::InputSnapshot;

    #[test]
    fn title_frame_has_no_ship() {
        let game = Game::with_seed(SimConfig::default(), 0, 1);
        let view = FrameView::build(&game, 1.0);
        assert_eq!(view.phase, GamePhase::Title);
        assert!(view.ship.is_none());
        assert!(view.asteroids.is_empty());
    }

    #[test]
    fn running_frame_shows_the_field() {
        let mut game = Game::with_seed(SimConfig::default(), 30, 2);
        game.start();
        game.tick(InputSnapshot::none());

        let view = FrameView::build(&game, 1.0);
        assert!(view.ship.is_some());
        assert_eq!(view.asteroids.len(), game.config().asteroid_floor);
        assert_eq!(view.high_score, 30);
    }

    #[test]
    fn alpha_interpolates_between_ticks() {
        let mut game = Game::with_seed(SimConfig::default(), 0, 3);
        game.start();
        // Thrust a few ticks so the ship has prev != current.
        for _ in 0..5 {
            game.tick(InputSnapshot {
                thrust: true,
                ..InputSnapshot::none()
            });
        }

        let at_prev = FrameView::build(&game, 0.0).ship.unwrap().pos;
        let at_curr = FrameView::build(&game, 1.0).ship.unwrap().pos;
        let midway = FrameView::build(&game, 0.5).ship.unwrap().pos;
        assert_ne!(at_prev, at_curr);
        let expected = (at_prev + at_curr) * 0.5;
        approx::assert_relative_eq!(midway.x, expected.x, epsilon = 1e-3);
        approx::assert_relative_eq!(midway.y, expected.y, epsilon = 1e-3);
    }
}
