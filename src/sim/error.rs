//! Simulation errors

/// Failures raised by the simulation core
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SimError {
    /// A collision query ran before any resize gave the board a positive area.
    /// This is a caller ordering bug; the tick is aborted.
    #[error("Board size is not set (got {width} x {height})")]
    BoardSizeNotSet { width: f32, height: f32 },
}
