//! Rectangular grids stored as one row-major buffer

use aoc_solver::ParseError;
use itertools::{Itertools, iproduct};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;
use thiserror::Error;

/// Zero-based (row, column) coordinate, ordered row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid input is empty")]
    Empty,
    #[error("line {line}, column {col}: {found:?} is not a digit")]
    InvalidDigit { line: usize, col: usize, found: char },
    #[error("line {line} is blank")]
    BlankLine { line: usize },
    #[error("line {line} has {found} cells, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("{cells} cells cannot fill a {rows}x{cols} grid")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        cells: usize,
    },
    #[error("tile factors must be non-zero, got {vertical}x{horizontal}")]
    ZeroTileFactor { vertical: usize, horizontal: usize },
    #[error("tiling a {rows}x{cols} grid {vertical}x{horizontal} times overflows")]
    TileOverflow {
        rows: usize,
        cols: usize,
        vertical: usize,
        horizontal: usize,
    },
}

impl From<GridError> for ParseError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::Empty => ParseError::MissingData(err.to_string()),
            _ => ParseError::InvalidFormat(err.to_string()),
        }
    }
}

/// A `rows x cols` grid with at least one cell.
///
/// The shape is fixed at construction. Cell `(row, col)` lives at
/// `row * cols + col` in the backing buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Wrap a row-major buffer, checking it matches the shape
    pub fn from_vec(rows: usize, cols: usize, cells: Vec<T>) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        if rows.checked_mul(cols) != Some(cells.len()) {
            return Err(GridError::ShapeMismatch {
                rows,
                cols,
                cells: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// A grid of this grid's shape with every cell set to `value`
    pub fn same_shape<U: Clone>(&self, value: U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: vec![value; self.cells.len()],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Bottom-right cell
    pub fn last_pos(&self) -> Pos {
        Pos::new(self.rows - 1, self.cols - 1)
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    #[inline]
    fn flat(&self, pos: Pos) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.cols + pos.col)
    }

    pub fn get(&self, pos: Pos) -> Option<&T> {
        self.flat(pos).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, pos: Pos) -> Option<&mut T> {
        self.flat(pos).map(|i| &mut self.cells[i])
    }

    pub fn row(&self, row: usize) -> Option<&[T]> {
        (row < self.rows).then(|| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks_exact(self.cols)
    }

    /// Every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        iproduct!(0..self.rows, 0..self.cols).map(|(row, col)| Pos::new(row, col))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pos, &T)> {
        self.positions().zip(self.cells.iter())
    }

    /// In-bounds orthogonal neighbours of `pos`: up, left, down, right
    pub fn neighbors4(&self, pos: Pos) -> impl Iterator<Item = Pos> {
        let (rows, cols) = (self.rows, self.cols);
        [(-1, 0), (0, -1), (1, 0), (0, 1)]
            .into_iter()
            .filter_map(move |(dr, dc)| {
                let row = pos.row.checked_add_signed(dr)?;
                let col = pos.col.checked_add_signed(dc)?;
                (row < rows && col < cols).then_some(Pos::new(row, col))
            })
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Repeat the grid `vertical` times down and `horizontal` times across.
    ///
    /// Each copy's cells go through `shift(cell, tile_distance)`, where the
    /// distance of the tile at (tile_row, tile_col) is `tile_row + tile_col`,
    /// so the original tile is passed distance 0.
    pub fn tiled<F>(&self, vertical: usize, horizontal: usize, shift: F) -> Result<Grid<T>, GridError>
    where
        F: Fn(&T, usize) -> T,
    {
        if vertical == 0 || horizontal == 0 {
            return Err(GridError::ZeroTileFactor {
                vertical,
                horizontal,
            });
        }
        let overflow = || GridError::TileOverflow {
            rows: self.rows,
            cols: self.cols,
            vertical,
            horizontal,
        };
        let rows = self.rows.checked_mul(vertical).ok_or_else(overflow)?;
        let cols = self.cols.checked_mul(horizontal).ok_or_else(overflow)?;
        rows.checked_mul(cols).ok_or_else(overflow)?;
        let cells = iproduct!(0..rows, 0..cols)
            .map(|(row, col)| {
                let base = &self.cells[(row % self.rows) * self.cols + col % self.cols];
                shift(base, row / self.rows + col / self.cols)
            })
            .collect();
        Grid::from_vec(rows, cols, cells)
    }
}

impl Grid<u8> {
    /// Parse lines of single decimal digits.
    ///
    /// Trailing line breaks are ignored and `\r\n` endings are accepted.
    /// Every line must be as wide as the first one, and none may be blank.
    pub fn parse_digits(input: &str) -> Result<Self, GridError> {
        let body = input.trim_end_matches(['\r', '\n']);
        if body.is_empty() {
            return Err(GridError::Empty);
        }

        let mut rows = 0;
        let mut cols = 0;
        let mut cells = Vec::with_capacity(body.len());
        for (line_idx, line) in body.lines().enumerate() {
            let row_start = cells.len();
            for (col_idx, ch) in line.chars().enumerate() {
                let digit = ch.to_digit(10).ok_or(GridError::InvalidDigit {
                    line: line_idx + 1,
                    col: col_idx + 1,
                    found: ch,
                })?;
                cells.push(digit as u8);
            }

            let width = cells.len() - row_start;
            if width == 0 {
                return Err(GridError::BlankLine { line: line_idx + 1 });
            }
            if line_idx == 0 {
                cols = width;
            } else if width != cols {
                return Err(GridError::RaggedRow {
                    line: line_idx + 1,
                    expected: cols,
                    found: width,
                });
            }
            rows += 1;
        }

        Grid::from_vec(rows, cols, cells)
    }
}

impl FromStr for Grid<u8> {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse_digits(s)
    }
}

impl<T> Index<Pos> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Pos) -> &T {
        match self.flat(pos) {
            Some(i) => &self.cells[i],
            None => panic!("{pos:?} outside {}x{} grid", self.rows, self.cols),
        }
    }
}

impl<T> IndexMut<Pos> for Grid<T> {
    fn index_mut(&mut self, pos: Pos) -> &mut T {
        match self.flat(pos) {
            Some(i) => &mut self.cells[i],
            None => panic!("{pos:?} outside {}x{} grid", self.rows, self.cols),
        }
    }
}

/// One line per row, cells written back to back
impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row.iter().format(""))?;
        }
        Ok(())
    }
}
