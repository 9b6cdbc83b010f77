//! Stage grid geometry

use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One grid unit, addressed from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row={}, col={}", self.row, self.col)
    }
}

/// Fixed rows x columns stage, sized in pixels by `cell_size`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageGrid {
    rows: u32,
    cols: u32,
    cell_size: f32,
}

impl StageGrid {
    /// Create a grid. Callers validate dimensions through `StageConfig`.
    pub fn new(rows: u32, cols: u32, cell_size: f32) -> Self {
        debug_assert!(rows > 0 && cols > 0, "grid dimensions must be positive");
        Self { rows, cols, cell_size }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Pixel width (`cols * cell_size`)
    pub fn width(&self) -> f32 {
        self.cols as f32 * self.cell_size
    }

    /// Pixel height (`rows * cell_size`)
    pub fn height(&self) -> f32 {
        self.rows as f32 * self.cell_size
    }

    pub fn pixel_size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }

    /// Grid bounds when its top-left corner sits at `origin`
    pub fn rect_at(&self, origin: Pos2) -> Rect {
        Rect::from_min_size(origin, self.pixel_size())
    }

    /// Map a grid-relative pixel offset to a cell.
    ///
    /// Bounds are half-open: `0 <= x < width`, `0 <= y < height`.
    pub fn cell_at_offset(&self, offset: Vec2) -> Option<Cell> {
        if offset.x < 0.0 || offset.y < 0.0 || offset.x >= self.width() || offset.y >= self.height() {
            return None;
        }
        let row = ((offset.y / self.cell_size).floor() as u32).min(self.rows - 1);
        let col = ((offset.x / self.cell_size).floor() as u32).min(self.cols - 1);
        Some(Cell::new(row, col))
    }

    /// Top-left corner of `cell`, relative to the grid origin
    pub fn cell_offset(&self, cell: Cell) -> Vec2 {
        Vec2::new(cell.col as f32 * self.cell_size, cell.row as f32 * self.cell_size)
    }
}
