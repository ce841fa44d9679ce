use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::error::UnmappedKey;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the `(dx, dy)` step for one cell of movement. `y` grows downward.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Resolves the pending direction after a direction request.
///
/// A request that reverses `facing` is dropped and `pending` survives.
/// Any other request replaces `pending`; requests do not queue.
#[must_use]
pub fn buffer_direction(facing: Direction, pending: Direction, requested: Direction) -> Direction {
    if requested == facing.opposite() {
        pending
    } else {
        requested
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Pause,
    Quit,
    Confirm,
}

impl TryFrom<KeyEvent> for GameInput {
    type Error = UnmappedKey;

    fn try_from(key: KeyEvent) -> Result<Self, Self::Error> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c' | 'C') => Ok(Self::Quit),
                other => Err(UnmappedKey(other)),
            };
        }

        let input = match key.code {
            KeyCode::Up | KeyCode::Char('w' | 'W' | 'k') => Self::Direction(Direction::Up),
            KeyCode::Down | KeyCode::Char('s' | 'S' | 'j') => Self::Direction(Direction::Down),
            KeyCode::Left | KeyCode::Char('a' | 'A' | 'h') => Self::Direction(Direction::Left),
            KeyCode::Right | KeyCode::Char('d' | 'D' | 'l') => Self::Direction(Direction::Right),
            KeyCode::Char('p' | 'P' | ' ') => Self::Pause,
            KeyCode::Enter | KeyCode::Char('r' | 'R') => Self::Confirm,
            KeyCode::Esc | KeyCode::Char('q' | 'Q') => Self::Quit,
            other => return Err(UnmappedKey(other)),
        };

        Ok(input)
    }
}
