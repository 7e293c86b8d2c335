//! Tick-driven simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - One integration step per tick (no wall-clock delta)
//! - Fixed order of collision resolution within a tick
//! - Board size is owned by `GameState` and passed into every query

pub mod ball;
pub mod collision;
pub mod error;
pub mod geometry;
pub mod paddle;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod wall;

pub use ball::Ball;
pub use collision::{circle_frame_collision, circle_rect_collision, paddle_deflection, reflect_horizontal};
pub use error::SimError;
pub use geometry::{BoardSize, Rect};
pub use paddle::{Paddle, PaddleSide};
pub use snapshot::DebugSnapshot;
pub use state::GameState;
pub use tick::{GameEvent, resolve_collisions, tick};
pub use wall::Wall;
