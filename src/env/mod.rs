//! Gym-style environment wrapper around the core game
//!
//! Provides:
//! - `reset` / `step` / `render` in the classic agent-environment shape
//! - feature-vector and frame observation encoding
//! - a random-action sampler for baseline policies
//! - explicit, caller-owned id allocation

pub mod error;
pub mod frame;
pub mod observation;

pub use error::EnvError;
pub use frame::{FrameBuffer, RenderTarget, Rgb, APPLE_COLOR, BACKGROUND, HEAD_COLOR};
pub use observation::FeatureObservation;

use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

use rand::Rng;

use crate::game::{
    Action, EnvConfig, GameEngine, GameState, IdPolicy, ObservationMode, StepDiagnostics,
};
use frame::encode_frame;
use observation::encode_features;

/// Hands out monotonically increasing environment ids.
///
/// Owned by the caller instead of living in process-global state, so its
/// lifecycle (and with it id reproducibility) is explicit.
#[derive(Debug)]
pub struct IdAllocator {
    next: AtomicU32,
}

impl IdAllocator {
    /// Ids start at 1.
    pub fn new() -> Self {
        Self {
            next: AtomicU32::new(1),
        }
    }

    pub fn allocate(&self) -> u32 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only construction snapshot of an environment.
///
/// Fixed at construction; `reset` does not update it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvInfo {
    pub name: String,
    pub id: u32,
    pub observation_mode: ObservationMode,
    pub storage_path: PathBuf,
}

/// The discrete action space of the environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionSpace;

impl ActionSpace {
    /// Number of actions a policy chooses from. Reversal is impossible with
    /// relative turns, so the three regular choices are all legal.
    pub fn shape(&self) -> usize {
        Action::CHOICES.len()
    }

    /// A uniformly random legal action.
    pub fn sample(&self) -> Action {
        let mut rng = rand::thread_rng();
        Action::CHOICES[rng.gen_range(0..Action::CHOICES.len())]
    }
}

/// What `step` hands back to the agent.
#[derive(Debug, Clone, PartialEq)]
pub enum Observation {
    /// Blocked flags plus apple angle (maths mode)
    Features(FeatureObservation),
    /// Rasterized board (image mode)
    Frame(FrameBuffer),
}

impl Observation {
    pub fn as_features(&self) -> Option<&FeatureObservation> {
        match self {
            Observation::Features(features) => Some(features),
            Observation::Frame(_) => None,
        }
    }

    pub fn as_frame(&self) -> Option<&FrameBuffer> {
        match self {
            Observation::Frame(frame) => Some(frame),
            Observation::Features(_) => None,
        }
    }
}

/// Full return of one environment step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub observation: Observation,
    pub reward: i32,
    pub done: bool,
    pub info: StepDiagnostics,
}

/// A single-agent Snake environment in the classic gym shape.
///
/// One instance models exactly one game; concurrent games each own their
/// instance with no shared mutable state.
pub struct SnakeEnv {
    config: EnvConfig,
    engine: GameEngine,
    state: GameState,
    info: EnvInfo,
    action_space: ActionSpace,
    visible: bool,
    frame: FrameBuffer,
}

impl SnakeEnv {
    /// Create an environment from a full configuration.
    ///
    /// Fails with [`EnvError::InvalidBoard`] when the board cannot hold the
    /// game grid; no id is allocated in that case.
    pub fn new(config: EnvConfig, ids: &IdAllocator) -> Result<Self, EnvError> {
        config.validate()?;
        let id = match config.id {
            IdPolicy::Auto => ids.allocate(),
            IdPolicy::Fixed(id) => id,
        };
        let info = EnvInfo {
            name: config.name.clone(),
            id,
            observation_mode: config.observation_mode,
            storage_path: config.storage_path.clone(),
        };
        let frame = FrameBuffer::for_board(&config);
        let engine = GameEngine::new(config.clone());
        let state = engine.reset();
        // Image mode always keeps the frame current; maths mode only after
        // render() has been called.
        let visible = config.observation_mode == ObservationMode::Image;

        Ok(Self {
            config,
            engine,
            state,
            info,
            action_space: ActionSpace,
            visible,
            frame,
        })
    }

    /// Create an environment from the original option set, validating the
    /// observation mode string. Fails with
    /// [`EnvError::InvalidObservationMode`] before any state is built; board
    /// geometry is checked like in [`SnakeEnv::new`].
    pub fn make(
        name: impl Into<String>,
        id: IdPolicy,
        observation_mode: &str,
        storage_path: impl Into<PathBuf>,
        ids: &IdAllocator,
    ) -> Result<Self, EnvError> {
        let observation_mode = observation_mode.parse::<ObservationMode>()?;
        let config = EnvConfig {
            name: name.into(),
            id,
            observation_mode,
            storage_path: storage_path.into(),
            ..EnvConfig::default()
        };
        Self::new(config, ids)
    }

    /// Rebuild the game state from the construction configuration.
    ///
    /// The RNG stream continues where it left off; `info` keeps its
    /// construction-time snapshot.
    pub fn reset(&mut self) {
        self.state = self.engine.reset();
        self.frame = FrameBuffer::for_board(&self.config);
        self.visible = self.config.observation_mode == ObservationMode::Image;
    }

    /// Execute one step with an already-parsed action.
    pub fn step(&mut self, action: Action) -> StepOutcome {
        let result = self.engine.step(&mut self.state, action);

        if self.visible {
            encode_frame(&self.state, &self.config, &mut self.frame);
        }

        let observation = match self.config.observation_mode {
            ObservationMode::Maths => {
                Observation::Features(encode_features(&self.state, &self.config))
            }
            ObservationMode::Image => Observation::Frame(self.frame.clone()),
        };

        StepOutcome {
            observation,
            reward: result.reward,
            done: result.done,
            info: result.info,
        }
    }

    /// Execute one step from an action token
    /// (`"left" | "straight" | "right" | "still"`).
    ///
    /// An unknown token fails with [`EnvError::InvalidAction`] and leaves the
    /// game state untouched.
    pub fn step_token(&mut self, token: &str) -> Result<StepOutcome, EnvError> {
        let action = token.parse::<Action>()?;
        Ok(self.step(action))
    }

    /// Keep the frame buffer updated on subsequent steps. Idempotent; image
    /// mode is always visible.
    pub fn render(&mut self) {
        self.visible = true;
    }

    /// A uniformly random legal action.
    pub fn sample(&self) -> Action {
        self.action_space.sample()
    }

    pub fn action_space(&self) -> &ActionSpace {
        &self.action_space
    }

    /// Construction-time snapshot: name, id, observation mode, storage path.
    pub fn info(&self) -> &EnvInfo {
        &self.info
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Current game state (for rendering, tests and diagnostics).
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The most recently rasterized frame.
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
