use ratatui::layout::Rect;

use crate::config::{CELL_COLUMNS, CELL_ROWS, GridSize, SCREEN_COLUMNS, SCREEN_ROWS};

/// Grid cell in logical coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Returns the cell at the centre of `bounds`.
    #[must_use]
    pub fn center_of(bounds: GridSize) -> Self {
        Self {
            col: i32::from(bounds.width / 2),
            row: i32::from(bounds.height / 2),
        }
    }

    /// Returns the cell shifted by `(dcol, drow)` without wrapping.
    #[must_use]
    pub fn offset(self, dcol: i32, drow: i32) -> Self {
        Self {
            col: self.col + dcol,
            row: self.row + drow,
        }
    }

    /// Returns true when the cell lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.col >= 0
            && self.row >= 0
            && self.col < i32::from(bounds.width)
            && self.row < i32::from(bounds.height)
    }

    /// Returns this cell wrapped into bounds on both axes.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            col: self.col.rem_euclid(i32::from(bounds.width)),
            row: self.row.rem_euclid(i32::from(bounds.height)),
        }
    }
}

/// Size of the whole playing field in terminal cells.
#[must_use]
pub fn field_size() -> (u16, u16) {
    (SCREEN_COLUMNS, SCREEN_ROWS)
}

/// Converts a grid cell into the terminal region it covers, relative to the
/// field origin. Cells outside the `u16` range map to an empty region.
#[must_use]
pub fn cell_to_region(cell: Cell) -> Rect {
    let (Ok(col), Ok(row)) = (u16::try_from(cell.col), u16::try_from(cell.row)) else {
        return Rect::default();
    };

    Rect::new(
        col.saturating_mul(CELL_COLUMNS),
        row.saturating_mul(CELL_ROWS),
        CELL_COLUMNS,
        CELL_ROWS,
    )
}
