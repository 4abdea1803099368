use crate::error::{MazeError, Result};
use rustc_hash::FxHashSet;
use std::fmt;
use std::str::FromStr;

/// A 0-indexed grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Manhattan distance, the A* heuristic on a 4-connected grid.
    pub fn manhattan(&self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn is_adjacent(&self, other: Position) -> bool {
        self.manhattan(other) == 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Position {
    type Err = MazeError;

    /// Parses `"row,col"`, e.g. `"3,7"`.
    fn from_str(s: &str) -> Result<Self> {
        let (row, col) = s
            .split_once(',')
            .ok_or_else(|| MazeError::Config(format!("expected 'row,col', got '{}'", s)))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|e| MazeError::Config(format!("bad coordinate '{}': {}", part, e)))
        };
        Ok(Position::new(parse(row)?, parse(col)?))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Open,
    Wall,
}

impl Cell {
    pub fn is_open(self) -> bool {
        self == Cell::Open
    }
}

/// The four moves allowed on the grid. No diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Down,
    Up,
    Left,
}

impl Direction {
    /// Default neighbor order: right, down, up, left.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Up,
        Direction::Left,
    ];

    /// (row delta, col delta)
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::Left => (0, -1),
        }
    }
}

/// Rectangular grid of open and wall cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Creates a `rows` x `cols` grid with every cell set to `cell`.
    pub fn filled(rows: usize, cols: usize, cell: Cell) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        Ok(Grid {
            rows,
            cols,
            cells: vec![vec![cell; cols]; rows],
        })
    }

    /// Wraps existing rows of cells. Rows must be non-empty and of equal length.
    pub fn from_cells(cells: Vec<Vec<Cell>>) -> Result<Self> {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 || cells.iter().any(|row| row.len() != cols) {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        Ok(Grid { rows, cols, cells })
    }

    /// Parses a text picture where `.` is open and `#` is a wall, one line per row.
    /// Blank lines and surrounding whitespace are ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let cells = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|ch| match ch {
                        '.' => Ok(Cell::Open),
                        '#' => Ok(Cell::Wall),
                        other => Err(MazeError::Config(format!(
                            "unexpected maze character '{}'",
                            other
                        ))),
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_cells(cells)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.cells.get(pos.row)?.get(pos.col).copied()
    }

    pub fn is_open(&self, pos: Position) -> bool {
        self.cell(pos).is_some_and(Cell::is_open)
    }

    /// Overwrites a cell. Out-of-bounds positions are ignored.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        if let Some(slot) = self
            .cells
            .get_mut(pos.row)
            .and_then(|row| row.get_mut(pos.col))
        {
            *slot = cell;
        }
    }

    /// The in-bounds neighbor of `pos` in direction `dir`, open or not.
    pub fn step(&self, pos: Position, dir: Direction) -> Option<Position> {
        let (dr, dc) = dir.offset();
        let row = pos.row.checked_add_signed(dr)?;
        let col = pos.col.checked_add_signed(dc)?;
        let next = Position { row, col };
        self.in_bounds(next).then_some(next)
    }

    /// Open 4-neighbors of `pos` in `Direction::ALL` order.
    pub fn open_neighbors(&self, pos: Position) -> Vec<Position> {
        Direction::ALL
            .iter()
            .filter_map(|&dir| self.step(pos, dir))
            .filter(|&next| self.is_open(next))
            .collect()
    }

    pub fn open_cells(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_open())
            .count()
    }

    /// Plain-text picture of the grid with a search overlaid.
    ///
    /// `#` wall, `.` open, `o` visited, `*` path, `S` start and `E` end of the path.
    pub fn render(&self, visited: &[Position], path: &[Position]) -> String {
        let visited: FxHashSet<Position> = visited.iter().copied().collect();
        let on_path: FxHashSet<Position> = path.iter().copied().collect();
        let (first, last) = (path.first(), path.last());

        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in 0..self.rows {
            for col in 0..self.cols {
                let pos = Position { row, col };
                let ch = if Some(&pos) == first {
                    'S'
                } else if Some(&pos) == last {
                    'E'
                } else if on_path.contains(&pos) {
                    '*'
                } else if visited.contains(&pos) {
                    'o'
                } else if self.is_open(pos) {
                    '.'
                } else {
                    '#'
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&[], &[]))
    }
}
