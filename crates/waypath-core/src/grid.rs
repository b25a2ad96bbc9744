//! A free/blocked cell grid for map representation.
//!
//! [`Grid`] stores one [`Cell`] per position of its bounding [`Range`].
//! Movement between cells is implicit: 4-directional, unit cost, and only
//! through free cells. [`Grid::parse`] reads the row notation used by the
//! built-in maps, where `S` and `G` mark the start and goal cells.

use std::fmt;

use crate::error::MapError;
use crate::geom::{Point, Range};

/// A map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Free,
    Blocked,
}

impl Cell {
    /// Numeric form used by the row notation: `0` free, `1` blocked.
    pub const fn value(self) -> u8 {
        match self {
            Cell::Free => 0,
            Cell::Blocked => 1,
        }
    }
}

/// A 2D grid of [`Cell`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
}

/// A parsed grid together with the start and goal markers it contained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    pub grid: Grid,
    pub start: Option<Point>,
    pub goal: Option<Point>,
}

impl Grid {
    /// Create a new grid with every cell free.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::sized(width, height);
        Self {
            cells: vec![Cell::Free; bounds.len()],
            bounds,
        }
    }

    /// Parse rows of cell characters.
    ///
    /// `0`/`.` is free, `1`/`#` is blocked, `S`/`G` are free cells marking the
    /// start and goal. Spaces, tabs and commas between cells are ignored.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<GridMap, MapError> {
        let mut cells = Vec::new();
        let mut width = None;
        let mut start = None;
        let mut goal = None;

        for (row, line) in rows.iter().enumerate() {
            let mut count = 0;
            for ch in line.as_ref().chars() {
                if matches!(ch, ' ' | '\t' | ',') {
                    continue;
                }
                let here = Point::new(count as i32, row as i32);
                let cell = match ch {
                    '0' | '.' => Cell::Free,
                    '1' | '#' => Cell::Blocked,
                    'S' | 's' => {
                        if start.replace(here).is_some() {
                            return Err(MapError::DuplicateMarker('S'));
                        }
                        Cell::Free
                    }
                    'G' | 'g' => {
                        if goal.replace(here).is_some() {
                            return Err(MapError::DuplicateMarker('G'));
                        }
                        Cell::Free
                    }
                    _ => return Err(MapError::UnknownCell { row, col: count, ch }),
                };
                cells.push(cell);
                count += 1;
            }
            match width {
                None => width = Some(count),
                Some(expected) if expected != count => {
                    return Err(MapError::RaggedRow {
                        row,
                        expected,
                        found: count,
                    });
                }
                Some(_) => {}
            }
        }

        let width = width.unwrap_or(0);
        if width == 0 {
            return Err(MapError::EmptyGrid);
        }
        let bounds = Range::sized(width as i32, rows.len() as i32);
        log::debug!("parsed {}x{} grid", bounds.width(), bounds.height());
        Ok(GridMap {
            grid: Grid { cells, bounds },
            start,
            goal,
        })
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether the grid contains the given point.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        let x = (p.x - self.bounds.min.x) as usize;
        let y = (p.y - self.bounds.min.y) as usize;
        Some(y * self.bounds.width() as usize + x)
    }

    /// Get the cell at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the cell at a point. Out-of-bounds writes are ignored.
    pub fn set(&mut self, p: Point, c: Cell) {
        if let Some(i) = self.index(p) {
            self.cells[i] = c;
        }
    }

    /// Whether `p` is inside the grid and free.
    #[inline]
    pub fn is_free(&self, p: Point) -> bool {
        self.at(p) == Some(Cell::Free)
    }

    /// Free in-bounds cardinal neighbours of `p`, in
    /// [`Point::neighbors_4`] order.
    pub fn free_neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_4().into_iter().filter(|&n| self.is_free(n))
    }

    /// Number of cells equal to `c`.
    pub fn count(&self, c: Cell) -> usize {
        self.cells.iter().filter(|&&x| x == c).count()
    }

    /// Row-major iterator over `(Point, Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

impl fmt::Display for Grid {
    /// One line per row, `0` for free and `1` for blocked.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (p, c) in self.iter() {
            write!(f, "{}", c.value())?;
            if p.x == self.bounds.max.x - 1 && p.y < self.bounds.max.y - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
