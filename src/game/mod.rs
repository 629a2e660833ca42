//! Core game logic for the Snake environment
//!
//! Everything in here is synchronous and free of I/O or rendering
//! dependencies; the environment wrapper in [`crate::env`] builds
//! observations on top of it.

pub mod action;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Heading};
pub use config::{EnvConfig, IdPolicy, ObservationMode};
pub use engine::{GameEngine, StepDiagnostics, StepResult};
pub use state::{GameState, Position, SnakeBody};
