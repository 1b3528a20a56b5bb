use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::SCORE_PER_FOOD;
use crate::grid;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
///
/// `Playing` is the only live state. `GameOver` and `Won` are absorbing:
/// once reached, `tick` and `set_direction` are no-ops until `start`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
    Won,
}

impl GameStatus {
    /// Returns true for the absorbing end states.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::GameOver | Self::Won)
    }
}

/// What ended the game, for the game-over screen.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Read-only view of the state a host layer needs after a tick: enough to
/// render a frame and to decide whether a new high score was set.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub snake: &'a Snake,
    pub food: Position,
    pub score: u32,
    pub terminal: bool,
}

/// Complete mutable game state for one session.
///
/// All movement, growth, and termination rules live in `tick`; input events
/// only ever touch the pending direction. The applied direction is the one
/// the most recent tick moved along, and is what reversal rejection checks
/// against.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub score: u32,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    direction: Direction,
    pending_direction: Direction,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh live state with an entropy-seeded RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: StdRng) -> Self {
        let snake = Snake::starting();
        let food =
            grid::place_food(&mut rng, &snake).expect("a fresh board always has free cells");

        Self {
            snake,
            food,
            score: 0,
            status: GameStatus::Playing,
            death_reason: None,
            direction: Direction::Right,
            pending_direction: Direction::Right,
            rng,
        }
    }

    /// Resets to a fresh live state, keeping the RNG stream.
    ///
    /// The host must have stopped its tick cadence for the previous session
    /// before calling this.
    pub fn start(&mut self) {
        self.snake = Snake::starting();
        self.food = grid::place_food(&mut self.rng, &self.snake)
            .expect("a fresh board always has free cells");
        self.score = 0;
        self.status = GameStatus::Playing;
        self.death_reason = None;
        self.direction = Direction::Right;
        self.pending_direction = Direction::Right;
    }

    /// Buffers a direction change for the next tick.
    ///
    /// A reversal of the applied direction is rejected outright: the pending
    /// direction keeps its previous value rather than being cleared, so an
    /// invalid input never cancels an earlier valid one. Multiple valid
    /// calls between ticks follow last-input-wins.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.status.is_terminal() {
            return;
        }
        if direction == self.direction.opposite() {
            return;
        }
        self.pending_direction = direction;
    }

    /// Advances the simulation by one gameplay tick.
    ///
    /// A collision leaves the snake and score exactly as they were before
    /// the tick; the invalid head cell is discarded, not appended.
    pub fn tick(&mut self) {
        if self.status.is_terminal() {
            return;
        }

        self.direction = self.pending_direction;
        let next_head = self.snake.head().step(self.direction);

        if !grid::is_in_bounds(next_head) {
            self.status = GameStatus::GameOver;
            self.death_reason = Some(DeathReason::WallCollision);
            return;
        }

        if self.snake.would_collide(next_head) {
            self.status = GameStatus::GameOver;
            self.death_reason = Some(DeathReason::SelfCollision);
            return;
        }

        let ate = next_head == self.food;
        self.snake.advance(next_head, ate);

        if ate {
            self.score += SCORE_PER_FOOD;
            match grid::place_food(&mut self.rng, &self.snake) {
                Some(food) => self.food = food,
                // Snake covers the whole grid: nothing left to eat.
                None => self.status = GameStatus::Won,
            }
        }
    }

    /// Returns the read surface host layers consume after each tick.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            snake: &self.snake,
            food: self.food,
            score: self.score,
            terminal: self.status.is_terminal(),
        }
    }

    /// Returns the direction the most recent tick moved along.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{GRID_SIZE, SCORE_PER_FOOD};
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    use super::{DeathReason, GameState, GameStatus};

    fn segments(state: &GameState) -> Vec<Position> {
        state.snake.segments().copied().collect()
    }

    #[test]
    fn eating_food_grows_scores_and_relocates_food() {
        let mut state = GameState::new_with_seed(1);
        state.food = Position { x: 4, y: 3 };

        state.tick();

        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.score, SCORE_PER_FOOD);
        assert!(!state.snake.occupies(state.food));
    }

    #[test]
    fn plain_tick_keeps_length_and_score() {
        let mut state = GameState::new_with_seed(2);
        state.food = Position { x: 10, y: 10 };

        state.tick();

        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.head(), Position { x: 4, y: 3 });
    }

    #[test]
    fn wall_exit_terminates_without_mutating_snake_or_score() {
        let mut state = GameState::new_with_seed(3);
        state.snake = Snake::from_segments(vec![
            Position { x: 14, y: 5 },
            Position { x: 13, y: 5 },
            Position { x: 12, y: 5 },
        ]);
        state.food = Position { x: 0, y: 0 };
        let before = segments(&state);

        state.tick();

        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.death_reason, Some(DeathReason::WallCollision));
        assert_eq!(segments(&state), before);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn self_collision_terminates_without_mutating_snake() {
        // Head at (2,2) turning down into (2,3), a non-tail body cell.
        let mut state = GameState::new_with_seed(4);
        state.snake = Snake::from_segments(vec![
            Position { x: 2, y: 2 },
            Position { x: 3, y: 2 },
            Position { x: 3, y: 3 },
            Position { x: 2, y: 3 },
            Position { x: 1, y: 3 },
        ]);
        state.food = Position { x: 10, y: 10 };
        let before = segments(&state);

        state.set_direction(Direction::Down);
        state.tick();

        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.death_reason, Some(DeathReason::SelfCollision));
        assert_eq!(segments(&state), before);
    }

    #[test]
    fn moving_onto_the_vacating_tail_cell_is_legal() {
        // 2x2 loop: the head chases its own tail, which moves away on the
        // same tick.
        let mut state = GameState::new_with_seed(5);
        state.snake = Snake::from_segments(vec![
            Position { x: 5, y: 5 },
            Position { x: 6, y: 5 },
            Position { x: 6, y: 6 },
            Position { x: 5, y: 6 },
        ]);
        state.food = Position { x: 10, y: 10 };

        state.set_direction(Direction::Down);
        state.tick();

        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.snake.head(), Position { x: 5, y: 6 });
    }

    #[test]
    fn reversal_input_is_rejected_and_keeps_previous_pending() {
        let mut state = GameState::new_with_seed(6);
        state.food = Position { x: 10, y: 10 };

        // Applied direction is Right. Buffer Up (valid), then Left (a
        // reversal of the applied direction): Left must not clobber Up.
        state.set_direction(Direction::Up);
        state.set_direction(Direction::Left);
        state.tick();

        assert_eq!(state.snake.head(), Position { x: 3, y: 2 });
        assert_eq!(state.direction(), Direction::Up);
    }

    #[test]
    fn plain_reversal_is_ignored_and_tick_continues_straight() {
        let mut state = GameState::new_with_seed(7);
        state.food = Position { x: 10, y: 10 };

        state.set_direction(Direction::Left);
        state.tick();

        assert_eq!(state.snake.head(), Position { x: 4, y: 3 });
        assert_eq!(state.direction(), Direction::Right);
    }

    #[test]
    fn terminal_state_absorbs_ticks_and_inputs() {
        let mut state = GameState::new_with_seed(8);
        state.snake = Snake::from_segments(vec![
            Position { x: 0, y: 5 },
            Position { x: 1, y: 5 },
            Position { x: 2, y: 5 },
        ]);
        state.food = Position { x: 10, y: 10 };

        state.set_direction(Direction::Left);
        // Applied is still Right, so Left was rejected; drive into the wall
        // the long way by turning up and out instead.
        state.set_direction(Direction::Up);
        for _ in 0..10 {
            state.tick();
        }
        assert_eq!(state.status, GameStatus::GameOver);

        let before = segments(&state);
        let score_before = state.score;
        state.set_direction(Direction::Down);
        state.tick();
        state.tick();

        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(segments(&state), before);
        assert_eq!(state.score, score_before);
    }

    #[test]
    fn start_resets_to_the_canonical_configuration() {
        let mut state = GameState::new_with_seed(9);
        state.food = Position { x: 4, y: 3 };
        state.tick();
        assert_eq!(state.score, SCORE_PER_FOOD);

        state.set_direction(Direction::Up);
        state.start();

        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.death_reason, None);
        assert_eq!(
            segments(&state),
            vec![
                Position { x: 3, y: 3 },
                Position { x: 2, y: 3 },
                Position { x: 1, y: 3 },
            ]
        );
        assert_eq!(state.direction(), Direction::Right);
        assert!(!state.snake.occupies(state.food));

        // The buffered Up from before the reset must not leak into the new
        // session.
        state.food = Position { x: 10, y: 10 };
        state.tick();
        assert_eq!(state.snake.head(), Position { x: 4, y: 3 });
    }

    #[test]
    fn snake_cells_stay_pairwise_distinct_while_live() {
        let mut state = GameState::new_with_seed(10);

        // Circle the board; eat whatever happens to be in the way.
        let script = [
            Direction::Right,
            Direction::Down,
            Direction::Left,
            Direction::Up,
        ];
        let mut step = 0usize;
        while state.status == GameStatus::Playing && step < 500 {
            state.set_direction(script[(step / 9) % script.len()]);
            state.tick();

            let cells = segments(&state);
            for (i, a) in cells.iter().enumerate() {
                for b in cells.iter().skip(i + 1) {
                    assert_ne!(a, b, "live snake must not overlap itself");
                }
            }
            if state.status == GameStatus::Playing {
                assert!(!state.snake.occupies(state.food));
            }
            step += 1;
        }
    }

    #[test]
    fn filling_the_grid_wins_the_game() {
        // Snake covers every cell except the origin; the food sits there.
        // Eating it leaves no free cell for replacement.
        let mut state = GameState::new_with_seed(11);
        let mut cells: Vec<Position> = (0..i32::from(GRID_SIZE))
            .flat_map(|y| (0..i32::from(GRID_SIZE)).map(move |x| Position { x, y }))
            .filter(|position| *position != Position { x: 0, y: 0 })
            .collect();
        // Put (0,1) at the front so the head sits below the last free cell.
        cells.retain(|position| *position != Position { x: 0, y: 1 });
        cells.insert(0, Position { x: 0, y: 1 });

        state.snake = Snake::from_segments(cells);
        state.food = Position { x: 0, y: 0 };
        state.set_direction(Direction::Up);

        state.tick();

        assert_eq!(state.status, GameStatus::Won);
        assert_eq!(state.snake.len(), usize::from(GRID_SIZE) * usize::from(GRID_SIZE));
        assert_eq!(state.score, SCORE_PER_FOOD);
    }

    #[test]
    fn snapshot_reflects_the_current_state() {
        let mut state = GameState::new_with_seed(12);
        state.food = Position { x: 4, y: 3 };
        state.tick();

        let snapshot = state.snapshot();

        assert_eq!(snapshot.score, SCORE_PER_FOOD);
        assert_eq!(snapshot.food, state.food);
        assert!(!snapshot.terminal);
        assert_eq!(snapshot.snake.len(), 4);
    }
}
