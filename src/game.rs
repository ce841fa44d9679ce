use std::fmt;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{GridSize, INITIAL_SPEED_MS, MIN_SPEED_MS, SPEED_INCREMENT_MS};
use crate::food::place_food;
use crate::input::{buffer_direction, Direction};
use crate::snake::{Cell, Snake};

/// Why a game reached its terminal state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EndReason {
    WallCollision,
    SelfCollision,
    /// The snake covers every cell, so no food can be placed.
    GridFilled,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::WallCollision => "hit wall",
            Self::SelfCollision => "hit self",
            Self::GridFilled => "grid filled",
        };
        f.write_str(text)
    }
}

/// Immutable snapshot of one game.
///
/// Produced by [`GameEngine::reset`] and [`GameEngine::advance`]; the host
/// replaces its copy wholesale after every call. Only
/// [`GameState::buffer_direction`] mutates in place, and only the pending
/// direction.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// Never on the snake. `None` only when the snake covers the whole grid,
    /// which ends the game with [`EndReason::GridFilled`].
    pub food: Option<Cell>,
    /// Direction applied on the most recent tick.
    pub facing_direction: Direction,
    /// Direction that the next tick will apply.
    pub pending_direction: Direction,
    pub score: u32,
    pub tick_interval_ms: u64,
    /// Set once the game is over; the state is frozen from then on.
    pub end_reason: Option<EndReason>,
}

impl GameState {
    /// Builds the start-of-game state: one cell centred in `bounds`, facing right.
    #[must_use]
    pub fn initial(bounds: GridSize, food: Option<Cell>) -> Self {
        let start = Cell {
            x: i32::from(bounds.width / 2),
            y: i32::from(bounds.height / 2),
        };

        Self {
            snake: Snake::new(start),
            food,
            facing_direction: Direction::Right,
            pending_direction: Direction::Right,
            score: 0,
            tick_interval_ms: INITIAL_SPEED_MS,
            end_reason: None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.end_reason.is_some()
    }

    /// Current tick interval for the scheduler.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Records a direction request for the next tick.
    ///
    /// Ignored once the game is over, and when `requested` reverses the
    /// facing direction.
    pub fn buffer_direction(&mut self, requested: Direction) {
        if self.is_over() {
            return;
        }

        self.pending_direction =
            buffer_direction(self.facing_direction, self.pending_direction, requested);
    }

    fn ended(&self, facing: Direction, reason: EndReason) -> Self {
        log::info!("game over ({reason}) with score {}", self.score);

        Self {
            facing_direction: facing,
            pending_direction: facing,
            end_reason: Some(reason),
            ..self.clone()
        }
    }
}

/// Owns the random source and produces successive [`GameState`] values.
#[derive(Debug, Clone)]
pub struct GameEngine {
    bounds: GridSize,
    rng: StdRng,
}

impl GameEngine {
    /// Creates an engine on the standard grid seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bounds: GridSize::DEFAULT,
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a deterministic engine for tests and reproducible sessions.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_bounds_and_seed(GridSize::DEFAULT, seed)
    }

    /// Creates a deterministic engine on a custom grid.
    #[must_use]
    pub fn with_bounds_and_seed(bounds: GridSize, seed: u64) -> Self {
        debug_assert!(bounds.width > 0 && bounds.height > 0);

        Self {
            bounds,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Returns a fresh initial state, independent of any previous game.
    pub fn reset(&mut self) -> GameState {
        let start = GameState::initial(self.bounds, None);
        let Some(food) = self.place_food(&start.snake) else {
            log::info!("new game on a grid the start cell already fills");
            return GameState {
                end_reason: Some(EndReason::GridFilled),
                ..start
            };
        };
        log::info!("new game, food at {food}");

        GameState {
            food: Some(food),
            ..start
        }
    }

    /// Picks a random free cell outside `snake`; `None` when the grid is full.
    pub fn place_food(&mut self, snake: &Snake) -> Option<Cell> {
        place_food(&mut self.rng, self.bounds, snake)
    }

    /// Advances `state` by one tick using its pending direction.
    ///
    /// Self collision is tested against the whole pre-move body, so moving
    /// onto the cell the tail is about to leave still ends the game.
    pub fn advance(&mut self, state: &GameState) -> GameState {
        if state.is_over() {
            return state.clone();
        }

        let facing = state.pending_direction;
        let new_head = state.snake.head().stepped(facing);

        if !new_head.is_within_bounds(self.bounds) {
            return state.ended(facing, EndReason::WallCollision);
        }

        if state.snake.occupies(new_head) {
            return state.ended(facing, EndReason::SelfCollision);
        }

        let ate_food = state.food == Some(new_head);
        let snake = state.snake.advanced(new_head, ate_food);

        let mut next = GameState {
            snake,
            food: state.food,
            facing_direction: facing,
            pending_direction: facing,
            score: state.score,
            tick_interval_ms: state.tick_interval_ms,
            end_reason: None,
        };

        if ate_food {
            next.score += 1;
            next.tick_interval_ms = state
                .tick_interval_ms
                .saturating_sub(SPEED_INCREMENT_MS)
                .max(MIN_SPEED_MS);
            log::debug!(
                "food eaten at {new_head}: score {}, interval {}ms",
                next.score,
                next.tick_interval_ms
            );

            next.food = self.place_food(&next.snake);
            if next.food.is_none() {
                log::info!("grid filled with score {}", next.score);
                next.end_reason = Some(EndReason::GridFilled);
            }
        }

        next
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{GridSize, INITIAL_SPEED_MS, MIN_SPEED_MS};
    use crate::input::Direction;
    use crate::snake::{Cell, Snake};

    use super::{EndReason, GameEngine, GameState};

    fn state_with(snake: Vec<Cell>, facing: Direction, food: Cell) -> GameState {
        GameState {
            snake: Snake::from_segments(snake).expect("segments are non-empty"),
            food: Some(food),
            facing_direction: facing,
            pending_direction: facing,
            score: 0,
            tick_interval_ms: INITIAL_SPEED_MS,
            end_reason: None,
        }
    }

    #[test]
    fn reset_centres_a_single_cell_facing_right() {
        let mut engine = GameEngine::with_seed(1);
        let state = engine.reset();

        assert_eq!(state.snake.segments().copied().collect::<Vec<_>>(), vec![Cell::new(10, 10)]);
        assert_eq!(state.facing_direction, Direction::Right);
        assert_eq!(state.pending_direction, Direction::Right);
        assert_eq!(state.score, 0);
        assert_eq!(state.tick_interval_ms, INITIAL_SPEED_MS);
        assert!(!state.is_over());
        let food = state.food.expect("an empty grid always has room for food");
        assert!(!state.snake.occupies(food));
    }

    #[test]
    fn plain_move_keeps_length_and_food() {
        let mut engine = GameEngine::with_seed(2);
        let state = state_with(
            vec![Cell::new(5, 5), Cell::new(4, 5)],
            Direction::Right,
            Cell::new(0, 0),
        );

        let next = engine.advance(&state);

        assert_eq!(
            next.snake.segments().copied().collect::<Vec<_>>(),
            vec![Cell::new(6, 5), Cell::new(5, 5)]
        );
        assert_eq!(next.food, Some(Cell::new(0, 0)));
        assert_eq!(next.score, 0);
        assert_eq!(next.tick_interval_ms, INITIAL_SPEED_MS);
    }

    #[test]
    fn eating_grows_scores_and_speeds_up() {
        let mut engine = GameEngine::with_seed(3);
        let state = state_with(vec![Cell::new(10, 10)], Direction::Right, Cell::new(11, 10));

        let next = engine.advance(&state);

        assert_eq!(next.snake.len(), 2);
        assert_eq!(next.snake.head(), Cell::new(11, 10));
        assert_eq!(next.score, 1);
        assert_eq!(next.tick_interval_ms, 195);
        let food = next.food.expect("grid has free cells");
        assert!(!next.snake.occupies(food));
        assert!(!next.is_over());
    }

    #[test]
    fn speed_never_drops_below_floor() {
        let mut engine = GameEngine::with_seed(4);
        let mut state = state_with(vec![Cell::new(10, 10)], Direction::Right, Cell::new(11, 10));
        state.tick_interval_ms = MIN_SPEED_MS + 2;

        let next = engine.advance(&state);

        assert_eq!(next.tick_interval_ms, MIN_SPEED_MS);
    }

    #[test]
    fn moving_into_wall_freezes_everything_but_the_flag() {
        let mut engine = GameEngine::with_seed(5);
        let mut state = state_with(vec![Cell::new(0, 5)], Direction::Left, Cell::new(3, 3));
        state.score = 4;

        let next = engine.advance(&state);

        assert_eq!(next.end_reason, Some(EndReason::WallCollision));
        assert_eq!(next.snake, state.snake);
        assert_eq!(next.food, state.food);
        assert_eq!(next.score, 4);
    }

    #[test]
    fn moving_onto_departing_tail_is_a_collision() {
        let mut engine = GameEngine::with_seed(6);
        // A 2x2 loop: the head's next cell is the current tail.
        let state = state_with(
            vec![Cell::new(5, 5), Cell::new(6, 5), Cell::new(6, 6), Cell::new(5, 6)],
            Direction::Down,
            Cell::new(0, 0),
        );

        let next = engine.advance(&state);

        assert_eq!(next.end_reason, Some(EndReason::SelfCollision));
        assert_eq!(next.snake, state.snake);
    }

    #[test]
    fn finished_game_ignores_ticks_and_input() {
        let mut engine = GameEngine::with_seed(7);
        let state = state_with(vec![Cell::new(19, 5)], Direction::Right, Cell::new(3, 3));
        let mut over = engine.advance(&state);
        assert!(over.is_over());

        over.buffer_direction(Direction::Up);
        assert_eq!(over.pending_direction, Direction::Right);

        let frozen = over.clone();
        for _ in 0..5 {
            over = engine.advance(&over);
        }
        assert_eq!(over, frozen);
    }

    #[test]
    fn eating_the_last_free_cell_ends_the_game() {
        let bounds = GridSize {
            width: 2,
            height: 1,
        };
        let mut engine = GameEngine::with_bounds_and_seed(bounds, 8);
        let state = state_with(vec![Cell::new(0, 0)], Direction::Right, Cell::new(1, 0));

        let next = engine.advance(&state);

        assert_eq!(next.snake.len(), 2);
        assert_eq!(next.score, 1);
        assert_eq!(next.end_reason, Some(EndReason::GridFilled));
        assert_eq!(next.food, None);
    }

    #[test]
    fn reset_on_a_single_cell_grid_has_no_food() {
        let bounds = GridSize {
            width: 1,
            height: 1,
        };
        let mut engine = GameEngine::with_bounds_and_seed(bounds, 10);

        let state = engine.reset();

        assert_eq!(state.food, None);
        assert_eq!(state.end_reason, Some(EndReason::GridFilled));
        assert_eq!(state.snake.head(), Cell::new(0, 0));
    }

    #[test]
    fn pending_direction_is_committed_on_tick() {
        let mut engine = GameEngine::with_seed(9);
        let mut state = engine.reset();
        state.buffer_direction(Direction::Up);
        assert_eq!(state.facing_direction, Direction::Right);

        let next = engine.advance(&state);

        assert_eq!(next.facing_direction, Direction::Up);
        assert_eq!(next.snake.head(), Cell::new(10, 9));
    }
}
