use crate::error::Result;
use crate::grid::{Cell, Direction, Grid, Position};
use log::debug;
use pathfinding::prelude::bfs_reach;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;

const ORIGIN: Position = Position::new(0, 0);

/// Builds mazes with a seeded or entropy-backed random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct MazeGenerator {
    seed: Option<u64>,
}

impl MazeGenerator {
    pub fn new() -> Self {
        MazeGenerator { seed: None }
    }

    /// Same seed and dimensions always give the same maze.
    pub fn with_seed(seed: u64) -> Self {
        MazeGenerator { seed: Some(seed) }
    }

    pub fn generate(&self, rows: usize, cols: usize) -> Result<Grid> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        generate(rows, cols, &mut rng)
    }
}

/// Generates a maze with a randomized Prim's growth from (0, 0).
///
/// A frontier wall is carved only when exactly one of its 4-neighbors is open,
/// so the open region stays a tree. The opposite corner (rows-1, cols-1) is
/// always open and reachable from (0, 0).
pub fn generate<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Result<Grid> {
    let mut grid = Grid::filled(rows, cols, Cell::Wall)?;
    grid.set(ORIGIN, Cell::Open);

    let mut frontier: Vec<Position> = [Direction::Right, Direction::Down]
        .iter()
        .filter_map(|&dir| grid.step(ORIGIN, dir))
        .collect();

    while !frontier.is_empty() {
        // Uniform pick, not FIFO/LIFO.
        let candidate = frontier.swap_remove(rng.gen_range(0..frontier.len()));
        if grid.is_open(candidate) {
            continue;
        }

        if grid.open_neighbors(candidate).len() == 1 {
            grid.set(candidate, Cell::Open);
            frontier.extend(
                Direction::ALL
                    .iter()
                    .filter_map(|&dir| grid.step(candidate, dir))
                    .filter(|&next| !grid.is_open(next)),
            );
        }
    }

    let end = Position::new(rows - 1, cols - 1);
    grid.set(end, Cell::Open);
    let repaired = connect_to_origin(&mut grid, end);

    debug!(
        "Generated {}x{} maze: {} open cells{}",
        rows,
        cols,
        grid.open_cells(),
        if repaired { " (end corridor carved)" } else { "" }
    );
    Ok(grid)
}

/// Carves a corridor from `end` toward the origin, up first then left, until it
/// touches the region reachable from the origin. Returns whether anything was carved.
fn connect_to_origin(grid: &mut Grid, end: Position) -> bool {
    let reachable: FxHashSet<Position> = bfs_reach(ORIGIN, |&pos| grid.open_neighbors(pos)).collect();
    if reachable.contains(&end) {
        return false;
    }

    let touches = |pos: Position| {
        reachable.contains(&pos)
            || Direction::ALL
                .iter()
                .filter_map(|&dir| grid.step(pos, dir))
                .any(|next| reachable.contains(&next))
    };

    let mut corridor = Vec::new();
    let mut current = end;
    while !touches(current) {
        current = if current.row > 0 {
            Position::new(current.row - 1, current.col)
        } else {
            Position::new(current.row, current.col - 1)
        };
        corridor.push(current);
    }
    for pos in corridor {
        grid.set(pos, Cell::Open);
    }
    true
}
