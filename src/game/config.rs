use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::env::EnvError;

/// Which observation the environment returns from `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObservationMode {
    /// Compact feature vector: three blocked flags plus the apple angle.
    #[serde(rename = "maths")]
    Maths,
    /// Rasterized RGB frame of the board.
    #[serde(rename = "image")]
    Image,
}

impl ObservationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObservationMode::Maths => "maths",
            ObservationMode::Image => "image",
        }
    }
}

impl fmt::Display for ObservationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObservationMode {
    type Err = EnvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "maths" => Ok(ObservationMode::Maths),
            "image" => Ok(ObservationMode::Image),
            other => Err(EnvError::InvalidObservationMode(other.to_string())),
        }
    }
}

/// How the environment gets its numeric id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdPolicy {
    /// Take the next value from the caller's [`IdAllocator`].
    ///
    /// [`IdAllocator`]: crate::env::IdAllocator
    Auto,
    /// Use this exact id.
    Fixed(u32),
}

impl FromStr for IdPolicy {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "auto" {
            Ok(IdPolicy::Auto)
        } else {
            s.parse::<u32>().map(IdPolicy::Fixed)
        }
    }
}

/// Configuration for the environment.
///
/// Dimensions are in pixels; every position is aligned to `cell_size`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Free-form label for the environment
    pub name: String,
    /// Id assignment policy
    pub id: IdPolicy,
    /// Observation returned by `step`
    pub observation_mode: ObservationMode,
    /// Where an external codec may put temporary frames in image mode
    pub storage_path: PathBuf,

    /// Board width in pixels
    pub board_width: i32,
    /// Board height in pixels
    pub board_height: i32,
    /// Side of one grid cell in pixels
    pub cell_size: i32,

    // Rewards (for RL)
    /// Reward for an ordinary move
    pub move_reward: i32,
    /// Reward for eating an apple
    pub apple_reward: i32,
    /// Reward override when the snake dies
    pub death_penalty: i32,

    /// Seed for the apple-placement RNG; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            name: "snake".to_string(),
            id: IdPolicy::Auto,
            observation_mode: ObservationMode::Maths,
            storage_path: PathBuf::from("snake_tmp"),
            board_width: 800,
            board_height: 600,
            cell_size: 20,
            move_reward: 1,
            apple_reward: 3,
            death_penalty: -5,
            seed: None,
        }
    }
}

impl EnvConfig {
    /// Create a configuration with a custom board size
    pub fn new(board_width: i32, board_height: i32) -> Self {
        Self {
            board_width,
            board_height,
            ..Default::default()
        }
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self::new(200, 200)
    }

    /// Check that the board can hold the game grid.
    ///
    /// The cell size must be positive and each axis must fit at least two
    /// cells, so apple placement always has a cell left to choose from.
    pub fn validate(&self) -> Result<(), EnvError> {
        if self.cell_size <= 0
            || self.board_width < 2 * self.cell_size
            || self.board_height < 2 * self.cell_size
        {
            return Err(EnvError::InvalidBoard {
                width: self.board_width,
                height: self.board_height,
                cell_size: self.cell_size,
            });
        }
        Ok(())
    }

    /// Board width in cells
    pub fn cells_wide(&self) -> i32 {
        self.board_width / self.cell_size
    }

    /// Board height in cells
    pub fn cells_high(&self) -> i32 {
        self.board_height / self.cell_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EnvConfig::default();
        assert_eq!(config.board_width, 800);
        assert_eq!(config.board_height, 600);
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.move_reward, 1);
        assert_eq!(config.apple_reward, 3);
        assert_eq!(config.death_penalty, -5);
        assert_eq!(config.observation_mode, ObservationMode::Maths);
    }

    #[test]
    fn test_custom_config() {
        let config = EnvConfig::new(400, 300);
        assert_eq!(config.board_width, 400);
        assert_eq!(config.board_height, 300);
        assert_eq!(config.cells_wide(), 20);
        assert_eq!(config.cells_high(), 15);
    }

    #[test]
    fn test_validate_board_geometry() {
        assert!(EnvConfig::default().validate().is_ok());
        assert!(EnvConfig::small().validate().is_ok());
        // Two cells per axis is the smallest playable board.
        assert!(EnvConfig::new(40, 40).validate().is_ok());

        assert!(EnvConfig::new(10, 10).validate().is_err());
        assert!(EnvConfig::new(800, 30).validate().is_err());
        let zero_cell = EnvConfig {
            cell_size: 0,
            ..EnvConfig::default()
        };
        assert!(zero_cell.validate().is_err());
    }

    #[test]
    fn test_observation_mode_parsing() {
        assert_eq!(
            "maths".parse::<ObservationMode>().unwrap(),
            ObservationMode::Maths
        );
        assert_eq!(
            "image".parse::<ObservationMode>().unwrap(),
            ObservationMode::Image
        );
        assert!("video".parse::<ObservationMode>().is_err());
    }

    #[test]
    fn test_id_policy_parsing() {
        assert_eq!("auto".parse::<IdPolicy>().unwrap(), IdPolicy::Auto);
        assert_eq!("7".parse::<IdPolicy>().unwrap(), IdPolicy::Fixed(7));
        assert!("seven".parse::<IdPolicy>().is_err());
    }
}
