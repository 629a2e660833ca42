use thiserror::Error;

/// Errors raised by the environment surface.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvError {
    /// Construction was asked for an observation mode that does not exist.
    #[error("wrong observation mode {0:?}: available are \"maths\" and \"image\"")]
    InvalidObservationMode(String),

    /// `step` received a token that is not one of the four recognized
    /// actions. The game state is left untouched.
    #[error("{0:?} is not a valid move")]
    InvalidAction(String),

    /// Construction was asked for a board that cannot hold the game grid.
    #[error(
        "a {width}x{height} px board cannot hold a {cell_size} px grid: \
         the cell size must be positive and each axis must fit at least two cells"
    )]
    InvalidBoard {
        width: i32,
        height: i32,
        cell_size: i32,
    },
}
