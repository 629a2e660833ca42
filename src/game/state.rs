use std::collections::VecDeque;

use super::action::Heading;
use super::config::EnvConfig;

/// A grid-aligned position on the board, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move one cell in a heading
    pub fn moved_in(&self, heading: Heading, cell_size: i32) -> Self {
        let (dx, dy) = heading.delta(cell_size);
        self.moved_by(dx, dy)
    }
}

/// The snake body as a bounded queue of positions.
///
/// Oldest segment at the front, the most recently added head at the back.
/// The step engine appends the new head every tick and evicts the oldest
/// segment once the queue exceeds the current snake length.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SnakeBody {
    segments: VecDeque<Position>,
}

impl SnakeBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new head segment at the back.
    pub fn push_head(&mut self, pos: Position) {
        self.segments.push_back(pos);
    }

    /// Drop the oldest segment.
    pub fn evict_oldest(&mut self) -> Option<Position> {
        self.segments.pop_front()
    }

    /// The most recently added segment, if any.
    pub fn head(&self) -> Option<Position> {
        self.segments.back().copied()
    }

    /// The segment right behind the head, if the body has at least two.
    pub fn second(&self) -> Option<Position> {
        let len = self.segments.len();
        if len >= 2 {
            self.segments.get(len - 2).copied()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.segments.iter()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.segments.contains(&pos)
    }

    /// Snapshot of all segments, oldest first.
    pub fn to_vec(&self) -> Vec<Position> {
        self.segments.iter().copied().collect()
    }
}

/// Complete mutable state of one game.
///
/// Built fresh by [`GameState::initial`] on construction and on every reset,
/// and mutated only by the step engine.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Head position, tracked even before the first segment is appended
    pub head: Position,
    /// Current compass heading
    pub heading: Heading,
    /// Body segments, oldest first
    pub body: SnakeBody,
    /// Apple position; `None` until the first spawn
    pub apple: Option<Position>,
    /// Set when the apple was just eaten; forces a spawn next step
    pub apple_eaten: bool,
    /// Target body length, grows by one per apple
    pub snake_length: usize,
    /// Cumulative reward over the episode
    pub score: i64,
    /// Reward of the last step
    pub move_score: i32,
    /// Terminal flag
    pub done: bool,
}

impl GameState {
    /// Build the initial state for a configuration.
    ///
    /// The head starts near the bottom center of the board, aligned to the
    /// cell grid; the heading is up, the length one, and the eaten flag set
    /// so that the first step spawns an apple.
    pub fn initial(config: &EnvConfig) -> Self {
        let cell = config.cell_size;
        let start_x = (config.board_width / 2 - cell / 2) / cell * cell;
        let start_y = config.board_height - 3 * cell;

        Self {
            head: Position::new(start_x, start_y),
            heading: Heading::Up,
            body: SnakeBody::new(),
            apple: None,
            apple_eaten: true,
            snake_length: 1,
            score: 0,
            move_score: 0,
            done: false,
        }
    }

    /// Check whether a position lies inside the board.
    pub fn in_bounds(&self, pos: Position, config: &EnvConfig) -> bool {
        pos.x >= 0
            && pos.x < config.board_width
            && pos.y >= 0
            && pos.y < config.board_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(100, 100);
        assert_eq!(pos.moved_by(20, 0), Position::new(120, 100));
        assert_eq!(pos.moved_in(Heading::Up, 20), Position::new(100, 80));
        assert_eq!(pos.moved_in(Heading::Down, 20), Position::new(100, 120));
        assert_eq!(pos.moved_in(Heading::Left, 20), Position::new(80, 100));
        assert_eq!(pos.moved_in(Heading::Right, 20), Position::new(120, 100));
    }

    #[test]
    fn test_body_queue_semantics() {
        let mut body = SnakeBody::new();
        body.push_head(Position::new(0, 0));
        body.push_head(Position::new(20, 0));
        body.push_head(Position::new(40, 0));

        assert_eq!(body.len(), 3);
        assert_eq!(body.head(), Some(Position::new(40, 0)));
        assert_eq!(body.second(), Some(Position::new(20, 0)));

        // Eviction removes the oldest segment, not the head.
        assert_eq!(body.evict_oldest(), Some(Position::new(0, 0)));
        assert_eq!(body.len(), 2);
        assert_eq!(body.head(), Some(Position::new(40, 0)));
    }

    #[test]
    fn test_body_second_requires_two_segments() {
        let mut body = SnakeBody::new();
        assert_eq!(body.second(), None);
        body.push_head(Position::new(0, 0));
        assert_eq!(body.second(), None);
        body.push_head(Position::new(20, 0));
        assert_eq!(body.second(), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_initial_state() {
        let config = EnvConfig::default();
        let state = GameState::initial(&config);

        // 800x600 board with 20px cells puts the start at (380, 540).
        assert_eq!(state.head, Position::new(380, 540));
        assert_eq!(state.head.x % config.cell_size, 0);
        assert_eq!(state.heading, Heading::Up);
        assert_eq!(state.snake_length, 1);
        assert!(state.body.is_empty());
        assert!(state.apple_eaten);
        assert_eq!(state.apple, None);
        assert_eq!(state.score, 0);
        assert!(!state.done);
    }

    #[test]
    fn test_bounds_checking() {
        let config = EnvConfig::default();
        let state = GameState::initial(&config);

        assert!(state.in_bounds(Position::new(0, 0), &config));
        assert!(state.in_bounds(Position::new(780, 580), &config));
        assert!(!state.in_bounds(Position::new(-20, 0), &config));
        assert!(!state.in_bounds(Position::new(800, 0), &config));
        assert!(!state.in_bounds(Position::new(0, 600), &config));
    }
}
