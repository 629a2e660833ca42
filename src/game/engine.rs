use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::action::Action;
use super::config::EnvConfig;
use super::state::{GameState, Position};

/// Diagnostic snapshot returned with every step, alongside the observation.
///
/// Not used for reward or termination logic.
#[derive(Debug, Clone, PartialEq)]
pub struct StepDiagnostics {
    /// Head position after the move
    pub head: Position,
    /// Full body snapshot, oldest segment first
    pub body: Vec<Position>,
    /// Apple position, if one is on the board
    pub apple: Option<Position>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Reward for this step
    pub reward: i32,
    /// Whether the game has terminated
    pub done: bool,
    /// Diagnostic snapshot of the step
    pub info: StepDiagnostics,
}

/// The transition function of the game.
///
/// Owns the apple-placement RNG; all other state lives in [`GameState`] so
/// that `reset` can rebuild it without touching the RNG stream.
pub struct GameEngine {
    config: EnvConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new engine. A seed in the config makes apple placement
    /// deterministic.
    pub fn new(config: EnvConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Build a fresh initial state for this engine's configuration.
    pub fn reset(&self) -> GameState {
        GameState::initial(&self.config)
    }

    /// Execute one step. The order of the checks below is load-bearing:
    /// the apple spawn must see the moved head, the eating check must see
    /// the fresh apple, and the dying malus overrides the apple reward when
    /// both fire on the same tick.
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        let cell = self.config.cell_size;

        state.heading = state.heading.turn(action);
        state.move_score = self.config.move_reward;

        if action != Action::Still {
            state.head = state.head.moved_in(state.heading, cell);
        }

        state.body.push_head(state.head);

        // Self-collision is judged against the body as appended, before the
        // tail eviction: a segment leaving the board this tick still kills.
        let hit_self = {
            let len = state.body.len();
            state
                .body
                .iter()
                .take(len - 1)
                .any(|&segment| segment == state.head)
        };

        if state.body.len() > state.snake_length {
            state.body.evict_oldest();
        }

        if state.apple_eaten {
            state.apple = Some(self.spawn_apple());
            state.apple_eaten = false;
        }

        if !state.in_bounds(state.head, &self.config) {
            state.done = true;
        }

        if state.apple == Some(state.head) {
            state.snake_length += 1;
            state.apple_eaten = true;
            state.move_score = self.config.apple_reward;
        }

        if hit_self {
            state.done = true;
        }

        if state.done {
            state.move_score = self.config.death_penalty;
        }

        state.score += i64::from(state.move_score);

        StepResult {
            reward: state.move_score,
            done: state.done,
            info: StepDiagnostics {
                head: state.head,
                body: state.body.to_vec(),
                apple: state.apple,
            },
        }
    }

    /// Draw a new apple position, uniform over grid-aligned cells.
    ///
    /// The last cell of each axis is excluded, matching the half-open range
    /// `[0, dim - cell)` stepped by `cell` that the board has always used.
    fn spawn_apple(&mut self) -> Position {
        let cell = self.config.cell_size;
        let nx = (self.config.board_width - cell) / cell;
        let ny = (self.config.board_height - cell) / cell;
        Position::new(
            self.rng.gen_range(0..nx) * cell,
            self.rng.gen_range(0..ny) * cell,
        )
    }
}
