//! # Grid and occupancy
//!
//! Cells are addressed as `(row, col)` with `row < height` and `col < width`.
//! Occupancy is append-only for the lifetime of one instance build: cells are
//! claimed once a path is known to be valid and are never released.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell one step away in `dir`, ignoring the upper grid bounds.
    pub fn step(self, dir: Direction) -> Option<Cell> {
        let (dr, dc) = dir.delta();
        Some(Cell {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }

    pub fn shares_axis(self, other: Cell) -> bool {
        self.row == other.row || self.col == other.col
    }

    pub fn manhattan(self, other: Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Fixed expansion order used by the pathfinder.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(d_row, d_col)`.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Direction of the single step from `from` to `to`, if they are adjacent.
    pub fn between(from: Cell, to: Cell) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&dir| from.step(dir) == Some(to))
    }

    /// Move symbol used by the `.metromap` solution format.
    pub const fn symbol(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Direction> {
        match symbol {
            "U" => Some(Direction::Up),
            "D" => Some(Direction::Down),
            "L" => Some(Direction::Left),
            "R" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Number of heading changes along a sequence of adjacent cells.
pub fn count_turns(cells: &[Cell]) -> usize {
    let headings: Vec<Option<Direction>> = cells
        .windows(2)
        .map(|w| Direction::between(w[0], w[1]))
        .collect();
    headings.windows(2).filter(|h| h[0] != h[1]).count()
}

/// Fixed-size grid with an occupancy bitmap.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    occupied: Vec<bool>,
    n_claimed: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            occupied: vec![false; width * height],
            n_claimed: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn num_cells(&self) -> usize {
        self.width * self.height
    }

    pub fn num_free(&self) -> usize {
        self.num_cells() - self.n_claimed
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    /// Row-major index of an in-bounds cell.
    pub fn index(&self, cell: Cell) -> usize {
        cell.row * self.width + cell.col
    }

    pub fn cell_at(&self, index: usize) -> Cell {
        Cell::new(index / self.width, index % self.width)
    }

    /// The in-bounds neighbour of `cell` in `dir`.
    pub fn neighbor(&self, cell: Cell, dir: Direction) -> Option<Cell> {
        cell.step(dir).filter(|&c| self.contains(c))
    }

    pub fn is_free(&self, cell: Cell) -> bool {
        self.contains(cell) && !self.occupied[self.index(cell)]
    }

    /// Marks every cell as occupied. Claiming an already claimed cell is a no-op.
    pub fn claim(&mut self, cells: &[Cell]) {
        for &cell in cells {
            let i = self.index(cell);
            if !self.occupied[i] {
                self.occupied[i] = true;
                self.n_claimed += 1;
            }
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.num_cells()).map(|i| self.cell_at(i))
    }

    /// Free cells in row-major order.
    pub fn free_cells(&self) -> Vec<Cell> {
        self.cells().filter(|&c| self.is_free(c)).collect()
    }
}
