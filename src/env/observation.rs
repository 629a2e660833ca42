use std::f64::consts::PI;

use crate::game::{EnvConfig, GameState, Heading};

/// Norm substituted for a zero-length vector in the angle computation.
///
/// This keeps the division defined at the cost of the result no longer being
/// a true direction; it is a numeric guard, not an error path.
const DEGENERATE_NORM: f64 = 10.0;

/// Compact feature observation: what the snake can "see".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureObservation {
    /// A body segment lies ahead of the head along the current heading
    pub ahead_blocked: bool,
    /// A body segment lies to the snake's right
    pub right_blocked: bool,
    /// A body segment lies to the snake's left
    pub left_blocked: bool,
    /// Signed angle between the apple direction and the snake's motion
    /// vector, scaled to half-turns, in `[-1, 1]`
    pub apple_angle: f64,
}

/// Build the feature observation for the current state.
pub fn encode_features(state: &GameState, config: &EnvConfig) -> FeatureObservation {
    let (ahead_blocked, right_blocked, left_blocked) = blocked_flags(state, config);
    FeatureObservation {
        ahead_blocked,
        right_blocked,
        left_blocked,
        apple_angle: apple_angle(state, config),
    }
}

/// Compute the three blocked flags, keyed on the compass heading.
///
/// "Ahead" is true when any body segment lies strictly beyond the head along
/// the heading axis and the head is not already flush against that boundary;
/// right and left use the perpendicular axis. The four cases mirror each
/// other by axis swap and sign flip.
fn blocked_flags(state: &GameState, config: &EnvConfig) -> (bool, bool, bool) {
    let head = state.head;
    let cell = config.cell_size;
    let body = &state.body;

    match state.heading {
        Heading::Up => (
            body.iter().any(|p| p.y < head.y) && head.y != 0,
            body.iter().any(|p| p.x > head.x),
            body.iter().any(|p| p.x < head.x),
        ),
        Heading::Down => (
            body.iter().any(|p| p.y > head.y) && head.y != config.board_height - cell,
            body.iter().any(|p| p.x < head.x),
            body.iter().any(|p| p.x > head.x),
        ),
        Heading::Right => (
            body.iter().any(|p| p.x > head.x) && head.x != config.board_width - cell,
            body.iter().any(|p| p.y > head.y),
            body.iter().any(|p| p.y < head.y),
        ),
        Heading::Left => (
            body.iter().any(|p| p.x < head.x) && head.x != 0,
            body.iter().any(|p| p.y < head.y),
            body.iter().any(|p| p.y > head.y),
        ),
    }
}

/// Signed angle between the apple direction and the snake's own motion
/// vector, in half-turns.
///
/// The motion vector is head minus the second body segment; with fewer than
/// two segments it falls back to the current heading's unit delta, which is
/// the vector the last move followed.
fn apple_angle(state: &GameState, config: &EnvConfig) -> f64 {
    let Some(apple) = state.apple else {
        return 0.0;
    };
    let head = state.head;

    let d_apple = (f64::from(apple.x - head.x), f64::from(apple.y - head.y));
    let d_snake = match state.body.second() {
        Some(second) => (f64::from(head.x - second.x), f64::from(head.y - second.y)),
        None => {
            let (dx, dy) = state.heading.delta(config.cell_size);
            (f64::from(dx), f64::from(dy))
        }
    };

    let (ax, ay) = normalized(d_apple);
    let (sx, sy) = normalized(d_snake);

    (ax * sy - ay * sx).atan2(ax * sx + ay * sy) / PI
}

fn normalized((x, y): (f64, f64)) -> (f64, f64) {
    let mut norm = (x * x + y * y).sqrt();
    if norm == 0.0 {
        norm = DEGENERATE_NORM;
    }
    (x / norm, y / norm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameState, Position, SnakeBody};

    fn state_with(
        head: Position,
        heading: Heading,
        segments: &[Position],
        apple: Position,
    ) -> GameState {
        let config = EnvConfig::default();
        let mut state = GameState::initial(&config);
        let mut body = SnakeBody::new();
        for &segment in segments {
            body.push_head(segment);
        }
        body.push_head(head);
        state.body = body;
        state.head = head;
        state.heading = heading;
        state.apple = Some(apple);
        state.apple_eaten = false;
        state
    }

    #[test]
    fn test_nothing_blocked_for_lone_head() {
        let config = EnvConfig::default();
        let state = state_with(
            Position::new(400, 300),
            Heading::Up,
            &[],
            Position::new(100, 100),
        );
        let obs = encode_features(&state, &config);
        assert!(!obs.ahead_blocked);
        assert!(!obs.right_blocked);
        assert!(!obs.left_blocked);
    }

    #[test]
    fn test_blocked_flags_heading_up() {
        let config = EnvConfig::default();
        let head = Position::new(400, 300);
        let apple = Position::new(100, 100);

        let obs = encode_features(
            &state_with(head, Heading::Up, &[Position::new(400, 280)], apple),
            &config,
        );
        assert!(obs.ahead_blocked);

        let obs = encode_features(
            &state_with(head, Heading::Up, &[Position::new(420, 300)], apple),
            &config,
        );
        assert!(!obs.ahead_blocked);
        assert!(obs.right_blocked);
        assert!(!obs.left_blocked);

        let obs = encode_features(
            &state_with(head, Heading::Up, &[Position::new(380, 300)], apple),
            &config,
        );
        assert!(obs.left_blocked);
        assert!(!obs.right_blocked);
    }

    #[test]
    fn test_blocked_flags_mirror_heading_down() {
        let config = EnvConfig::default();
        let head = Position::new(400, 300);
        let apple = Position::new(100, 100);

        let obs = encode_features(
            &state_with(head, Heading::Down, &[Position::new(400, 320)], apple),
            &config,
        );
        assert!(obs.ahead_blocked);

        // Moving down, a segment at larger x is on the snake's left.
        let obs = encode_features(
            &state_with(head, Heading::Down, &[Position::new(420, 300)], apple),
            &config,
        );
        assert!(obs.left_blocked);
        assert!(!obs.right_blocked);
    }

    #[test]
    fn test_blocked_flags_sideways_headings() {
        let config = EnvConfig::default();
        let head = Position::new(400, 300);
        let apple = Position::new(100, 100);
        let below = Position::new(400, 320);

        // Moving right, "below" is on the snake's right.
        let obs = encode_features(&state_with(head, Heading::Right, &[below], apple), &config);
        assert!(obs.right_blocked);
        assert!(!obs.left_blocked);

        // Moving left, the same segment is on the snake's left.
        let obs = encode_features(&state_with(head, Heading::Left, &[below], apple), &config);
        assert!(obs.left_blocked);
        assert!(!obs.right_blocked);
    }

    #[test]
    fn test_ahead_not_blocked_when_flush_with_boundary() {
        let config = EnvConfig::default();
        // Head flush with the top edge; a segment beyond it cannot block.
        let state = state_with(
            Position::new(400, 0),
            Heading::Up,
            &[Position::new(400, -20)],
            Position::new(100, 100),
        );
        let obs = encode_features(&state, &config);
        assert!(!obs.ahead_blocked);
    }

    #[test]
    fn test_angle_zero_when_apple_dead_ahead() {
        let config = EnvConfig::default();
        // Moving up with the apple straight above.
        let state = state_with(
            Position::new(400, 300),
            Heading::Up,
            &[Position::new(400, 320)],
            Position::new(400, 100),
        );
        let obs = encode_features(&state, &config);
        assert!(obs.apple_angle.abs() < 1e-9);
    }

    #[test]
    fn test_angle_sign_left_and_right() {
        let config = EnvConfig::default();
        let head = Position::new(400, 300);
        let behind = [Position::new(400, 320)];

        // Apple to the snake's right while moving up.
        let right = state_with(head, Heading::Up, &behind, Position::new(600, 300));
        assert!((encode_features(&right, &config).apple_angle + 0.5).abs() < 1e-9);

        // Apple to the snake's left.
        let left = state_with(head, Heading::Up, &behind, Position::new(200, 300));
        assert!((encode_features(&left, &config).apple_angle - 0.5).abs() < 1e-9);

        // Apple directly behind is a half-turn.
        let behind_apple = state_with(head, Heading::Up, &behind, Position::new(400, 500));
        assert!((encode_features(&behind_apple, &config).apple_angle.abs() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_angle_falls_back_to_heading_for_single_segment() {
        let config = EnvConfig::default();
        // Length-one snake: no second segment, so the heading stands in for
        // the motion vector.
        let state = state_with(
            Position::new(400, 300),
            Heading::Up,
            &[],
            Position::new(600, 300),
        );
        let obs = encode_features(&state, &config);
        assert!((obs.apple_angle + 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_norm_guard() {
        let config = EnvConfig::default();
        // Apple exactly under the head: the apple vector has zero norm and
        // the sentinel keeps the computation finite.
        let head = Position::new(400, 300);
        let state = state_with(head, Heading::Up, &[Position::new(400, 320)], head);
        let obs = encode_features(&state, &config);
        assert_eq!(obs.apple_angle, 0.0);
    }

    #[test]
    fn test_angle_range() {
        let config = EnvConfig::default();
        let head = Position::new(400, 300);
        let behind = [Position::new(400, 320)];
        for x in (0..800).step_by(40) {
            for y in (0..600).step_by(40) {
                let state = state_with(head, Heading::Up, &behind, Position::new(x, y));
                let angle = encode_features(&state, &config).apple_angle;
                assert!((-1.0..=1.0).contains(&angle));
            }
        }
    }
}
