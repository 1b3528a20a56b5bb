use std::collections::VecDeque;

use crate::config::{INITIAL_HEAD_X, INITIAL_HEAD_Y, INITIAL_SNAKE_LENGTH};
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns the neighboring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Snake body as an ordered cell sequence, head first.
///
/// The body is never empty. Direction buffering lives in the game state, not
/// here; the snake only knows how to occupy and vacate cells.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates the canonical starting snake: three horizontally adjacent
    /// segments with the head at the fixed start offset, facing right.
    #[must_use]
    pub fn starting() -> Self {
        let body = (0..INITIAL_SNAKE_LENGTH as i32)
            .map(|offset| Position {
                x: INITIAL_HEAD_X - offset,
                y: INITIAL_HEAD_Y,
            })
            .collect();

        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        assert!(
            !segments.is_empty(),
            "snake body must contain at least one segment"
        );
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Prepends `new_head` and, unless growing, vacates the tail cell.
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if `position` lies on the body excluding the tail.
    ///
    /// The tail is excluded because it vacates its cell on the same tick the
    /// head would enter it (unless the snake grows, in which case the entered
    /// cell held food and cannot have been a body cell).
    #[must_use]
    pub fn would_collide(&self, position: Position) -> bool {
        let last = self.body.len() - 1;
        self.body
            .iter()
            .take(last)
            .any(|segment| *segment == position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments. Never true in practice.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
