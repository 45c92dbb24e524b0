//! Headless Asteroids simulation core.
//!
//! The host owns the frame loop, the pixels, the speakers, and the storage;
//! this crate owns the rules. Call [`Game::tick`] once per frame with an
//! [`InputSnapshot`], act on the returned [`GameEvent`]s, and draw whatever
//! [`FrameView`] hands back.

pub mod app;
pub mod config;
pub mod ecs;
pub mod game;
pub mod input;
pub mod particles;
pub mod ship;
pub mod view;

pub use config::{ControlScheme, SimConfig};
pub use game::{Game, GameEvent, GamePhase};
pub use input::InputSnapshot;
pub use view::FrameView;
