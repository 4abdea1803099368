use maze_solver::solver::{solve_all, spawn_solve, SolveEvent};
use maze_solver::{solve, Cell, Grid, MazeError, MazeGenerator, Position, Solver, Strategy};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

/// 4x4 grid whose bottom-right cell is sealed off by walls.
fn sealed_pocket() -> Grid {
    Grid::parse(
        "
        ....
        ....
        ..##
        ..#.
        ",
    )
    .unwrap()
}

#[test]
fn start_equal_to_end_is_trivial_for_every_strategy() {
    let grid = MazeGenerator::with_seed(11).generate(8, 8).unwrap();
    let p = pos(0, 0);
    for strategy in Strategy::ALL {
        let mut emissions = Vec::new();
        let solution = solve(&grid, strategy, p, p, |visited| emissions.push(visited.to_vec()))
            .unwrap();
        assert_eq!(solution.path, vec![p], "{}", strategy);
        assert_eq!(solution.visit_order, vec![p], "{}", strategy);
        assert_eq!(emissions, vec![vec![p]], "{}", strategy);
    }
}

#[test]
fn diagonal_only_start_has_no_path() {
    let mut grid = Grid::filled(4, 4, Cell::Open).unwrap();
    grid.set(pos(0, 1), Cell::Wall);
    grid.set(pos(1, 0), Cell::Wall);

    let solution = solve(&grid, Strategy::Bfs, pos(0, 0), pos(3, 3), |_| {}).unwrap();
    assert!(solution.path.is_empty());
    assert_eq!(solution.visit_order, vec![pos(0, 0)]);

    for strategy in Strategy::ALL {
        let solution = Solver::new(strategy)
            .seed(1)
            .solve(&grid, pos(0, 0), pos(3, 3), |_| {})
            .unwrap();
        assert!(!solution.found(), "{}", strategy);
        assert_eq!(solution.visit_order, vec![pos(0, 0)], "{}", strategy);
    }
}

#[test]
fn unreachable_end_settles_exactly_the_reachable_cells() {
    let grid = sealed_pocket();
    let end = pos(3, 3);
    let reachable: HashSet<Position> = (0..4)
        .flat_map(|row| (0..4).map(move |col| pos(row, col)))
        .filter(|&p| grid.is_open(p) && p != end)
        .collect();
    assert_eq!(reachable.len(), 12);

    for strategy in Strategy::ALL {
        let solution = Solver::new(strategy)
            .seed(5)
            .solve(&grid, pos(0, 0), end, |_| {})
            .unwrap();
        assert!(solution.path.is_empty(), "{}", strategy);
        assert_eq!(solution.visit_order.len(), reachable.len(), "{}", strategy);
        let settled: HashSet<Position> = solution.visit_order.iter().copied().collect();
        assert_eq!(settled, reachable, "{}", strategy);
    }
}

#[test]
fn bfs_visits_in_direction_order() {
    let grid = Grid::filled(2, 2, Cell::Open).unwrap();
    let solution = solve(&grid, Strategy::Bfs, pos(0, 0), pos(1, 1), |_| {}).unwrap();
    assert_eq!(
        solution.visit_order,
        vec![pos(0, 0), pos(0, 1), pos(1, 0), pos(1, 1)]
    );
    assert_eq!(solution.path, vec![pos(0, 0), pos(0, 1), pos(1, 1)]);
}

#[test]
fn bfs_finishes_the_expansion_that_discovers_the_end() {
    let grid = Grid::filled(2, 2, Cell::Open).unwrap();
    let solution = solve(&grid, Strategy::Bfs, pos(0, 0), pos(0, 1), |_| {}).unwrap();
    assert_eq!(solution.visit_order, vec![pos(0, 0), pos(0, 1), pos(1, 0)]);
    assert_eq!(solution.path, vec![pos(0, 0), pos(0, 1)]);

    let grid = Grid::filled(3, 3, Cell::Open).unwrap();
    let solution = solve(&grid, Strategy::Bfs, pos(1, 1), pos(1, 2), |_| {}).unwrap();
    assert_eq!(
        solution.visit_order,
        vec![pos(1, 1), pos(1, 2), pos(2, 1), pos(0, 1), pos(1, 0)]
    );
    assert_eq!(solution.path, vec![pos(1, 1), pos(1, 2)]);
}

#[test]
fn a_star_is_pulled_toward_the_end() {
    let grid = Grid::filled(3, 5, Cell::Open).unwrap();
    let (start, end) = (pos(1, 2), pos(1, 4));

    let a_star = solve(&grid, Strategy::AStar, start, end, |_| {}).unwrap();
    assert_eq!(a_star.visit_order, vec![pos(1, 2), pos(1, 3), pos(1, 4)]);
    assert_eq!(a_star.path, a_star.visit_order);

    let dijkstra = solve(&grid, Strategy::Dijkstra, start, end, |_| {}).unwrap();
    assert_eq!(
        dijkstra.visit_order,
        vec![pos(1, 2), pos(1, 3), pos(2, 2), pos(0, 2), pos(1, 1), pos(1, 4)]
    );
    assert_eq!(dijkstra.path.len(), a_star.path.len());
}

#[test]
fn progress_grows_one_cell_at_a_time() {
    let grid = MazeGenerator::with_seed(21).generate(16, 24).unwrap();
    let end = pos(15, 23);
    for strategy in Strategy::ALL {
        let mut emissions: Vec<Vec<Position>> = Vec::new();
        let solution = Solver::new(strategy)
            .seed(3)
            .solve(&grid, pos(0, 0), end, |visited| emissions.push(visited.to_vec()))
            .unwrap();

        for (i, prefix) in emissions.iter().enumerate() {
            assert_eq!(prefix.len(), i + 1, "{}", strategy);
        }
        assert_eq!(emissions.last(), Some(&solution.visit_order), "{}", strategy);
        assert_eq!(solution.path.last(), Some(&end), "{}", strategy);
    }
}

#[test]
fn seeded_dfs_is_reproducible() {
    let grid = Grid::filled(6, 6, Cell::Open).unwrap();
    let run = |seed| {
        Solver::new(Strategy::Dfs)
            .seed(seed)
            .solve(&grid, pos(0, 0), pos(5, 5), |_| {})
            .unwrap()
    };
    assert_eq!(run(99), run(99));
}

#[test]
fn shutdown_signal_interrupts_at_the_next_settled_cell() {
    let grid = Grid::filled(10, 10, Cell::Open).unwrap();
    let signal = Arc::new(AtomicBool::new(false));
    let mut emitted = 0;

    let result = Solver::new(Strategy::Dijkstra)
        .shutdown_signal(Arc::clone(&signal))
        .solve(&grid, pos(0, 0), pos(9, 9), |visited| {
            emitted = visited.len();
            if visited.len() == 3 {
                signal.store(true, Ordering::Relaxed);
            }
        });

    assert_eq!(result, Err(MazeError::Interrupted));
    assert_eq!(emitted, 3);
}

#[test]
fn wall_endpoints_are_rejected() {
    let grid = sealed_pocket();
    let err = solve(&grid, Strategy::Dfs, pos(0, 0), pos(2, 2), |_| {}).unwrap_err();
    assert!(matches!(err, MazeError::InvalidEndpoint { position, .. } if position == pos(2, 2)));
}

#[test]
fn spawned_solve_streams_the_visit_order() {
    let grid = Arc::new(MazeGenerator::with_seed(8).generate(12, 12).unwrap());
    let handle = spawn_solve(grid, Solver::new(Strategy::Bfs), pos(0, 0), pos(11, 11), 4);

    let mut streamed = Vec::new();
    let mut finished = None;
    for event in handle.events() {
        match event {
            SolveEvent::Settled(p) => streamed.push(p),
            SolveEvent::Finished(result) => finished = Some(result),
        }
    }

    let solution = finished.expect("worker sends a final event").unwrap();
    assert_eq!(streamed, solution.visit_order);
    assert!(solution.found());
}

#[test]
fn cancelled_spawned_solve_reports_interruption() {
    let grid = Arc::new(Grid::filled(10, 10, Cell::Open).unwrap());
    let handle = spawn_solve(grid, Solver::new(Strategy::Bfs), pos(0, 0), pos(9, 9), 0);

    let first = handle.events().next();
    assert_eq!(first, Some(SolveEvent::Settled(pos(0, 0))));
    handle.cancel();
    assert_eq!(handle.wait(), Some(Err(MazeError::Interrupted)));
}

#[test]
fn solver_is_reusable_after_a_cancelled_spawn() {
    let grid = Arc::new(Grid::filled(6, 6, Cell::Open).unwrap());
    let solver = Solver::new(Strategy::Dijkstra);

    let handle = spawn_solve(Arc::clone(&grid), solver.clone(), pos(0, 0), pos(5, 5), 0);
    assert_eq!(handle.events().next(), Some(SolveEvent::Settled(pos(0, 0))));
    handle.cancel();
    assert_eq!(handle.wait(), Some(Err(MazeError::Interrupted)));

    let solution = solver.solve(&grid, pos(0, 0), pos(5, 5), |_| {}).unwrap();
    assert_eq!(solution.path.len(), 11);

    let again = spawn_solve(grid, solver, pos(0, 0), pos(5, 5), 4).wait();
    assert_eq!(again.map(|result| result.map(|s| s.path.len())), Some(Ok(11)));
}

#[test]
fn spawned_solve_honours_the_solver_shutdown_signal() {
    let grid = Arc::new(Grid::filled(5, 5, Cell::Open).unwrap());
    let signal = Arc::new(AtomicBool::new(true));
    let solver = Solver::new(Strategy::Bfs).shutdown_signal(Arc::clone(&signal));

    let handle = spawn_solve(grid, solver, pos(0, 0), pos(4, 4), 4);
    let events: Vec<SolveEvent> = handle.events().collect();
    assert_eq!(
        events,
        vec![
            SolveEvent::Settled(pos(0, 0)),
            SolveEvent::Finished(Err(MazeError::Interrupted)),
        ]
    );
    assert!(signal.load(Ordering::Relaxed));
}

#[test]
fn wait_after_draining_events_has_no_result() {
    let grid = Arc::new(Grid::filled(3, 3, Cell::Open).unwrap());
    let handle = spawn_solve(grid, Solver::new(Strategy::AStar), pos(0, 0), pos(2, 2), 4);

    let finished = handle
        .events()
        .filter(|event| matches!(event, SolveEvent::Finished(Ok(_))))
        .count();
    assert_eq!(finished, 1);
    assert_eq!(handle.wait(), None);
}

#[test]
fn solve_all_reports_every_strategy_in_order() {
    let grid = MazeGenerator::with_seed(4).generate(20, 30).unwrap();
    let reports = solve_all(&grid, pos(0, 0), pos(19, 29), Some(4)).unwrap();

    let strategies: Vec<Strategy> = reports.iter().map(|r| r.strategy).collect();
    assert_eq!(strategies, Strategy::ALL.to_vec());

    let lengths: Vec<usize> = reports.iter().map(|r| r.solution.path.len()).collect();
    assert!(lengths.iter().all(|&len| len > 0));
    assert_eq!(lengths[1], lengths[2]);
    assert_eq!(lengths[2], lengths[3]);
    assert!(lengths[0] >= lengths[1]);
}
