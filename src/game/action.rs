use std::fmt;
use std::str::FromStr;

use crate::env::EnvError;

/// Compass direction the snake is currently moving in.
///
/// Screen coordinates: the origin is the top-left corner, x grows to the
/// right and y grows downward, so `Up` decreases y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Right,
    Down,
    Left,
}

impl Heading {
    /// Returns the pixel delta (dx, dy) for one step of `cell_size` in this
    /// heading.
    pub fn delta(&self, cell_size: i32) -> (i32, i32) {
        match self {
            Heading::Up => (0, -cell_size),
            Heading::Right => (cell_size, 0),
            Heading::Down => (0, cell_size),
            Heading::Left => (-cell_size, 0),
        }
    }

    /// Applies a relative turn and returns the new heading.
    ///
    /// `Left` is one counter-clockwise step, `Right` one clockwise step,
    /// `Straight` and `Still` leave the heading unchanged. Four identical
    /// turns in the same direction come back to the starting heading.
    pub fn turn(self, action: Action) -> Heading {
        match action {
            Action::Straight | Action::Still => self,
            Action::Left => match self {
                Heading::Up => Heading::Left,
                Heading::Left => Heading::Down,
                Heading::Down => Heading::Right,
                Heading::Right => Heading::Up,
            },
            Action::Right => match self {
                Heading::Up => Heading::Right,
                Heading::Right => Heading::Down,
                Heading::Down => Heading::Left,
                Heading::Left => Heading::Up,
            },
        }
    }

    /// The heading pointing back into the segment behind the head.
    pub fn reverse(self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }
}

/// Relative action fed to the environment each step.
///
/// `Still` keeps the snake in place and exists for debugging; the three
/// others are the regular move choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Left,
    Straight,
    Right,
    Still,
}

impl Action {
    /// The three non-reversal actions a policy may pick from.
    pub const CHOICES: [Action; 3] = [Action::Left, Action::Straight, Action::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Left => "left",
            Action::Straight => "straight",
            Action::Right => "right",
            Action::Still => "still",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = EnvError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "left" => Ok(Action::Left),
            "straight" => Ok(Action::Straight),
            "right" => Ok(Action::Right),
            "still" => Ok(Action::Still),
            other => Err(EnvError::InvalidAction(other.to_string())),
        }
    }
}
