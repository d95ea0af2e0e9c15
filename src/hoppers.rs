//! The hoppers puzzle: frogs jumping over frogs on a pond grid.
//!
//! Lily pads sit on a checkerboard of valid cells separated by water. A
//! frog jumps over an adjacent green frog onto the empty pad beyond it,
//! orthogonally (over a pad two cells away, landing four away) or
//! diagonally (over the corner neighbor, landing two cells away in each
//! axis); the jumped frog is removed. The puzzle is solved when only the
//! red frog remains, so it is driven by goal-predicate search.
//!
//! Boards load from text files: a `rows cols` header line, then one line
//! per row of whitespace-separated cell characters.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

use crate::config::{Configuration, Neighbors};

/// One cell of the pond grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    GreenFrog,
    RedFrog,
    /// An empty lily pad a frog may land on.
    Empty,
    Water,
}

impl Cell {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'G' => Some(Cell::GreenFrog),
            'R' => Some(Cell::RedFrog),
            '.' => Some(Cell::Empty),
            '*' => Some(Cell::Water),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            Cell::GreenFrog => 'G',
            Cell::RedFrog => 'R',
            Cell::Empty => '.',
            Cell::Water => '*',
        }
    }

    fn is_frog(self) -> bool {
        matches!(self, Cell::GreenFrog | Cell::RedFrog)
    }
}

/// Errors from loading a hoppers board.
#[derive(Debug, Error)]
pub enum HoppersError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("first line must be two grid dimensions, got {0:?}")]
    BadDimensions(String),
    #[error("expected {expected} rows, found {found}")]
    MissingRows { expected: usize, found: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    BadRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unrecognized cell {cell:?} at row {row}, column {col}")]
    BadCell { cell: char, row: usize, col: usize },
}

/// One arrangement of frogs on the pond.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HoppersConfig {
    rows: usize,
    cols: usize,
    /// Row-major grid, `rows * cols` cells.
    grid: Vec<Cell>,
}

/// Jump offsets from the jumping frog: the cell jumped over and the
/// landing cell, for each of the eight directions.
const JUMPS: [((i32, i32), (i32, i32)); 8] = [
    ((-2, 0), (-4, 0)),
    ((2, 0), (4, 0)),
    ((0, 2), (0, 4)),
    ((0, -2), (0, -4)),
    ((-1, 1), (-2, 2)),
    ((1, 1), (2, 2)),
    ((-1, -1), (-2, -2)),
    ((1, -1), (2, -2)),
];

impl HoppersConfig {
    /// Load the starting board from a puzzle file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, HoppersError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| HoppersError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        text.parse()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The cell at (row, col), or `None` outside the grid.
    fn cell(&self, row: i32, col: i32) -> Option<Cell> {
        if row < 0 || col < 0 || row >= self.rows as i32 || col >= self.cols as i32 {
            return None;
        }
        Some(self.grid[row as usize * self.cols + col as usize])
    }

    fn set_cell(&mut self, row: i32, col: i32, cell: Cell) {
        self.grid[row as usize * self.cols + col as usize] = cell;
    }

    /// The board after the frog at (row, col) jumps over `over` and
    /// lands on `land`.
    fn jump(&self, frog: Cell, row: i32, col: i32, over: (i32, i32), land: (i32, i32)) -> Self {
        let mut next = self.clone();
        next.set_cell(row + over.0, col + over.1, Cell::Empty);
        next.set_cell(row, col, Cell::Empty);
        next.set_cell(row + land.0, col + land.1, frog);
        next
    }
}

impl Configuration for HoppersConfig {
    fn neighbors(&self) -> Neighbors<Self> {
        let mut neighbors = Neighbors::new();
        for row in 0..self.rows as i32 {
            for col in 0..self.cols as i32 {
                let frog = self.grid[row as usize * self.cols + col as usize];
                if !frog.is_frog() {
                    continue;
                }
                for (over, land) in JUMPS {
                    if self.cell(row + over.0, col + over.1) == Some(Cell::GreenFrog)
                        && self.cell(row + land.0, col + land.1) == Some(Cell::Empty)
                    {
                        neighbors.push(self.jump(frog, row, col, over, land));
                    }
                }
            }
        }
        neighbors
    }

    /// Solved when the red frog is still on the board and every green
    /// frog is gone.
    fn is_goal(&self) -> bool {
        self.grid.iter().any(|&c| c == Cell::RedFrog)
            && !self.grid.iter().any(|&c| c == Cell::GreenFrog)
    }
}

impl FromStr for HoppersConfig {
    type Err = HoppersError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines();
        let header = lines.next().unwrap_or_default();
        let dims: Vec<usize> = header
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()
            .map_err(|_| HoppersError::BadDimensions(header.to_string()))?;
        let &[rows, cols] = &dims[..] else {
            return Err(HoppersError::BadDimensions(header.to_string()));
        };

        let mut grid = Vec::with_capacity(rows * cols);
        let mut found = 0;
        for (row, line) in lines.take(rows).enumerate() {
            found += 1;
            let cells: Vec<&str> = line.split_whitespace().collect();
            if cells.len() != cols {
                return Err(HoppersError::BadRow {
                    row,
                    expected: cols,
                    found: cells.len(),
                });
            }
            for (col, token) in cells.iter().enumerate() {
                let c = token.chars().next().unwrap_or(' ');
                let cell = Cell::from_char(c).ok_or(HoppersError::BadCell {
                    cell: c,
                    row,
                    col,
                })?;
                grid.push(cell);
            }
        }
        if found < rows {
            return Err(HoppersError::MissingRows {
                expected: rows,
                found,
            });
        }
        Ok(Self { rows, cols, grid })
    }
}

impl fmt::Display for HoppersConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row != 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols {
                if col != 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.grid[row * self.cols + col].as_char())?;
            }
        }
        Ok(())
    }
}
