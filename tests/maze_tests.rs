use maze_solver::{generate, Cell, Grid, MazeError, MazeGenerator, Position};
use pathfinding::prelude::bfs_reach;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn reachable_from_origin(grid: &Grid) -> HashSet<Position> {
    bfs_reach(Position::new(0, 0), |&p| grid.open_neighbors(p)).collect()
}

fn open_positions(grid: &Grid) -> HashSet<Position> {
    (0..grid.rows())
        .flat_map(|row| (0..grid.cols()).map(move |col| Position::new(row, col)))
        .filter(|&p| grid.is_open(p))
        .collect()
}

#[test]
fn injected_rng_gives_the_same_maze() {
    let a = generate(16, 24, &mut StdRng::seed_from_u64(7)).unwrap();
    let b = generate(16, 24, &mut StdRng::seed_from_u64(7)).unwrap();
    let c = MazeGenerator::with_seed(7).generate(16, 24).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, c);
}

#[test]
fn different_seeds_give_different_mazes() {
    let a = MazeGenerator::with_seed(1).generate(32, 48).unwrap();
    let b = MazeGenerator::with_seed(2).generate(32, 48).unwrap();
    assert_ne!(a, b);
}

#[test]
fn every_open_cell_is_reachable_from_the_origin() {
    for seed in 0..50 {
        let grid = MazeGenerator::with_seed(seed).generate(17, 31).unwrap();
        assert_eq!(reachable_from_origin(&grid), open_positions(&grid), "seed {}", seed);
    }
}

#[test]
fn maze_is_neither_empty_nor_fully_open() {
    let grid = MazeGenerator::with_seed(12).generate(16, 24).unwrap();
    let open = grid.open_cells();
    assert!(open > 2);
    assert!(open < 16 * 24);
}

#[test]
fn degenerate_strips_are_fully_connected() {
    for seed in 0..10 {
        let row = MazeGenerator::with_seed(seed).generate(1, 7).unwrap();
        assert_eq!(row.open_cells(), 7);
        let column = MazeGenerator::with_seed(seed).generate(9, 1).unwrap();
        assert_eq!(column.open_cells(), 9);
        assert_eq!(reachable_from_origin(&column).len(), 9);
    }
}

#[test]
fn invalid_dimensions_are_reported() {
    assert_eq!(
        MazeGenerator::new().generate(0, 0),
        Err(MazeError::InvalidDimensions { rows: 0, cols: 0 })
    );
    assert!(Grid::filled(3, 0, Cell::Open).is_err());
}
