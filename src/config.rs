use ratatui::style::Color;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Colors used for every element of the playing field.
#[derive(Debug)]
pub struct Palette {
    /// Empty field cells and erased tail cells.
    pub background: Color,
    pub border: Color,
    pub food: Color,
    pub snake_body: Color,
    /// The head is drawn brighter than the rest of the body.
    pub snake_head: Color,
}

pub const PALETTE: Palette = Palette {
    background: Color::Rgb(0, 0, 0),
    border: Color::Rgb(93, 216, 228),
    food: Color::Rgb(255, 0, 0),
    snake_body: Color::Rgb(0, 255, 0),
    snake_head: Color::Rgb(170, 255, 170),
};

/// Playing field width in terminal columns.
pub const SCREEN_COLUMNS: u16 = 64;

/// Playing field height in terminal rows.
pub const SCREEN_ROWS: u16 = 24;

/// Terminal columns covered by one grid cell. Two columns keep cells roughly square.
pub const CELL_COLUMNS: u16 = 2;

/// Terminal rows covered by one grid cell.
pub const CELL_ROWS: u16 = 1;

/// Grid extent in cells, derived from the screen and cell sizes.
pub const GRID: GridSize = GridSize {
    width: SCREEN_COLUMNS / CELL_COLUMNS,
    height: SCREEN_ROWS / CELL_ROWS,
};

/// Fixed logical tick rate.
pub const TICKS_PER_SECOND: u32 = 10;

/// Glyph used to fill snake and food regions.
pub const GLYPH_BLOCK: &str = "█";

/// Terminal window title.
pub const WINDOW_TITLE: &str = "Snake";
