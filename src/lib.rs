//! A gym-style Snake environment
//!
//! This library provides:
//! - Core game logic: heading/turn mechanics, grid movement, collision and
//!   apple-eating rules, reward and termination (game module)
//! - The agent-facing environment with feature-vector and frame
//!   observations (env module)
//! - TUI rendering and input for interactive play (render, input modules)
//! - Execution modes: human play and a random-policy baseline (modes module)
//! - Session and rollout metrics (metrics module)

pub mod env;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
