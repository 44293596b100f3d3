use klock_graphics::{Color, Point, Rect};

/// Cells per side.
pub const GRID_SIZE: usize = 400;
/// Side of one cell in device-independent pixels.
pub const CELL_SIZE: f32 = 4.0;
pub const EMPTY_COLOR: Color = Color::BLACK;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Screen rectangle `[4·col, 4·col+4) × [4·row, 4·row+4)`.
    pub fn rect(&self) -> Rect {
        Rect::from_xywh(
            self.col as f32 * CELL_SIZE,
            self.row as f32 * CELL_SIZE,
            CELL_SIZE,
            CELL_SIZE,
        )
    }
}

/// Row-major grid of cell colors. Never shrinks or grows.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    cells: Vec<Color>,
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: vec![EMPTY_COLOR; GRID_SIZE * GRID_SIZE],
        }
    }

    /// Cell under a screen position, or `None` outside the grid.
    pub fn cell_at(&self, point: Point) -> Option<Cell> {
        if point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let col = (point.x / CELL_SIZE) as usize;
        let row = (point.y / CELL_SIZE) as usize;
        (row < GRID_SIZE && col < GRID_SIZE).then_some(Cell::new(row, col))
    }

    pub fn get(&self, cell: Cell) -> Color {
        self.cells[Self::index(cell)]
    }

    pub fn set(&mut self, cell: Cell, color: Color) {
        self.cells[Self::index(cell)] = color;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, Color)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, color)| (Cell::new(index / GRID_SIZE, index % GRID_SIZE), *color))
    }

    /// Cells whose color differs from [`EMPTY_COLOR`].
    pub fn painted(&self) -> impl Iterator<Item = (Cell, Color)> + '_ {
        self.iter().filter(|(_, color)| *color != EMPTY_COLOR)
    }

    fn index(cell: Cell) -> usize {
        debug_assert!(cell.row < GRID_SIZE && cell.col < GRID_SIZE);
        cell.row * GRID_SIZE + cell.col
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/grid_tests.rs"]
mod tests;
