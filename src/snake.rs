use std::collections::{HashSet, VecDeque};

use crate::config::GridSize;
use crate::geometry::Cell;
use crate::input::Direction;

/// Direction every new or reset snake starts moving in.
pub const START_DIRECTION: Direction = Direction::Right;

/// Mutable snake state on a wrap-around grid.
///
/// The body grows toward `target_length` by skipping tail removal, so a call
/// to [`Snake::grow`] only becomes visible on the following [`Snake::advance`].
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    pending_direction: Option<Direction>,
    target_length: usize,
    vacated: Option<Cell>,
    bounds: GridSize,
}

impl Snake {
    /// Creates a one-cell snake at the centre of `bounds`, moving right.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        let mut body = VecDeque::new();
        body.push_front(Cell::center_of(bounds));

        Self {
            body,
            direction: START_DIRECTION,
            pending_direction: None,
            target_length: 1,
            vacated: None,
            bounds,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// The target length is the number of segments given.
    #[must_use]
    pub fn from_segments(bounds: GridSize, segments: Vec<Cell>, direction: Direction) -> Self {
        assert!(
            !segments.is_empty(),
            "snake needs at least one segment to have a head"
        );

        Self {
            target_length: segments.len(),
            body: VecDeque::from(segments),
            direction,
            pending_direction: None,
            vacated: None,
            bounds,
        }
    }

    /// Buffers a direction change for the next tick.
    ///
    /// Reversals of the current direction are dropped. A later request in the
    /// same tick replaces an earlier one.
    pub fn request_direction_change(&mut self, direction: Direction) {
        if direction == self.direction.opposite() {
            return;
        }
        self.pending_direction = Some(direction);
    }

    /// Promotes the buffered direction, if any, to the current direction.
    pub fn apply_pending_direction(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
    }

    /// Moves one cell in the current direction, wrapping at the field edges.
    pub fn advance(&mut self) {
        debug_assert!(self.bounds.width > 0 && self.bounds.height > 0);

        let next_head = self.next_head_position();
        self.body.push_front(next_head);

        self.vacated = if self.body.len() > self.target_length {
            self.body.pop_back()
        } else {
            None
        };
    }

    /// Returns the head position for the next movement tick.
    #[must_use]
    pub fn next_head_position(&self) -> Cell {
        let (dcol, drow) = self.direction.delta();
        self.head().offset(dcol, drow).wrapped(self.bounds)
    }

    /// Raises the target length by one segment.
    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn detect_self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Replaces the whole state with a fresh snake on the same grid.
    pub fn reset(&mut self) {
        *self = Self::new(self.bounds);
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns the set of cells covered by the body.
    #[must_use]
    pub fn occupied_cells(&self) -> HashSet<Cell> {
        self.body.iter().copied().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    #[must_use]
    pub fn target_length(&self) -> usize {
        self.target_length
    }

    /// Tail cell dropped by the last advance; only meaningful for rendering.
    #[must_use]
    pub fn vacated(&self) -> Option<Cell> {
        self.vacated
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}
