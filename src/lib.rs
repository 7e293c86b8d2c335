//! Ping Pong - a two-paddle ball simulation
//!
//! Core modules:
//! - `sim`: Tick-driven simulation (entities, collisions, game state)
//! - `scene`: Draw list handed to the host's rendering surface
//! - `renderer`: CPU tessellation of a scene into colored triangles
//! - `settings`: Session geometry configuration

pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;

pub use scene::{Scene, Shape};
pub use settings::{ConfigError, GameConfig};
pub use sim::{GameEvent, GameState, SimError, tick};

/// Game configuration constants
pub mod consts {
    /// Wall stroke width (board-space units)
    pub const WALL_WIDTH: f32 = 4.0;
    pub const WALL_CORNER_RADIUS: f32 = 28.0;

    /// Ball defaults
    pub const BALL_DIAMETER: f32 = 32.0;
    pub const BALL_MAX_SPEED: f32 = 6.0;
    pub const BALL_START_SPEED: f32 = 1.0;
    /// Speed gained per paddle hit (additive, capped at max speed)
    pub const BALL_SPEED_STEP: f32 = 0.1;
    /// Initial velocity in board-space units per tick
    pub const BALL_START_VELOCITY: (f32, f32) = (0.1, 5.0);

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 128.0;
    pub const PADDLE_HEIGHT: f32 = 32.0;
    /// Gap between the paddle and its wall edge
    pub const PADDLE_PADDING: f32 = 16.0;

    /// Deflection angle at the paddle's outer reach (linear scale, not trig)
    pub const PADDLE_MAX_ANGLE: f32 = 45.0;
    /// Divisor turning the deflection angle into horizontal velocity
    pub const PADDLE_ANGLE_DIVISOR: f32 = 10.0;
}
