use std::io;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Clear};

use crate::config::{GLYPH_BLOCK, PALETTE};
use crate::geometry::{Cell, cell_to_region, field_size};

/// Everything the rendering surface needs to draw one tick.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Scene {
    pub head: Cell,
    /// Body segments behind the head, head-side first.
    pub body: Vec<Cell>,
    pub food: Cell,
    /// Tail cell dropped this tick, erased explicitly.
    pub vacated: Option<Cell>,
}

/// Output surface that commits one frame per tick.
pub trait Surface {
    fn render(&mut self, scene: &Scene) -> io::Result<()>;
}

/// Returns the bordered field rectangle centred inside `area`, clipped to it.
#[must_use]
pub fn field_area(area: Rect) -> Rect {
    let (columns, rows) = field_size();
    let width = columns.saturating_add(2);
    let height = rows.saturating_add(2);

    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height).intersection(area)
}

/// Clears the field and draws the scene into `frame`.
pub fn render(frame: &mut Frame<'_>, scene: &Scene) {
    let field = field_area(frame.area());
    let block = Block::bordered()
        .border_style(Style::new().fg(PALETTE.border))
        .style(Style::new().bg(PALETTE.background));
    let inner = block.inner(field);

    frame.render_widget(Clear, field);
    frame.render_widget(block, field);

    if let Some(vacated) = scene.vacated {
        fill_cell(frame, inner, vacated, " ", Style::new().bg(PALETTE.background));
    }

    fill_cell(frame, inner, scene.food, GLYPH_BLOCK, Style::new().fg(PALETTE.food));

    let body_style = Style::new().fg(PALETTE.snake_body);
    for segment in &scene.body {
        fill_cell(frame, inner, *segment, GLYPH_BLOCK, body_style);
    }

    fill_cell(
        frame,
        inner,
        scene.head,
        GLYPH_BLOCK,
        Style::new()
            .fg(PALETTE.snake_head)
            .add_modifier(Modifier::BOLD),
    );
}

fn fill_cell(frame: &mut Frame<'_>, inner: Rect, cell: Cell, glyph: &str, style: Style) {
    let Some(region) = terminal_region(inner, cell) else {
        return;
    };

    let row_text = glyph.repeat(usize::from(region.width));
    let buffer = frame.buffer_mut();
    for y in region.top()..region.bottom() {
        buffer.set_string(region.x, y, &row_text, style);
    }
}

/// Maps a cell to its on-screen region inside the field, clipped to `inner`.
fn terminal_region(inner: Rect, cell: Cell) -> Option<Rect> {
    let relative = cell_to_region(cell);
    if relative.is_empty() {
        return None;
    }

    let region = Rect::new(
        inner.x.saturating_add(relative.x),
        inner.y.saturating_add(relative.y),
        relative.width,
        relative.height,
    )
    .intersection(inner);

    (!region.is_empty()).then_some(region)
}
