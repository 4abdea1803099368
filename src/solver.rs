use crate::algorithms::{AStar, BreadthFirst, DepthFirst, Dijkstra, SearchContext, SearchStrategy};
use crate::error::{MazeError, Result};
use crate::grid::{Grid, Position};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Exploration discipline selected per solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Dfs,
    Bfs,
    AStar,
    Dijkstra,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Dfs,
        Strategy::Bfs,
        Strategy::AStar,
        Strategy::Dijkstra,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Dfs => "DFS",
            Strategy::Bfs => "BFS",
            Strategy::AStar => "A*",
            Strategy::Dijkstra => "Dijkstra",
        }
    }

    /// Whether the strategy always returns a shortest path.
    pub fn is_optimal(self) -> bool {
        !matches!(self, Strategy::Dfs)
    }

    fn build(self, seed: Option<u64>) -> Box<dyn SearchStrategy> {
        match self {
            Strategy::Dfs => {
                let rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                Box::new(DepthFirst::new(rng))
            }
            Strategy::Bfs => Box::new(BreadthFirst::new()),
            Strategy::AStar => Box::new(AStar::new()),
            Strategy::Dijkstra => Box::new(Dijkstra::new()),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" => Ok(Strategy::Dfs),
            "bfs" => Ok(Strategy::Bfs),
            "a_star" | "a-star" | "astar" | "a*" => Ok(Strategy::AStar),
            "dijkstra" => Ok(Strategy::Dijkstra),
            other => Err(MazeError::Config(format!(
                "unknown algorithm '{}': select 'dfs', 'bfs', 'a_star' or 'dijkstra'",
                other
            ))),
        }
    }
}

/// Outcome of one solve: every settled cell in settlement order, and the
/// start-to-end path. An empty path means the end was not reachable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    pub visit_order: Vec<Position>,
    pub path: Vec<Position>,
}

impl Solution {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of moves along the path, `None` when no path was found.
    pub fn path_steps(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

/// Configures and runs solves.
///
/// ```ignore
/// let solution = Solver::new(Strategy::Dfs)
///     .seed(7)
///     .solve(&grid, start, end, |visited| println!("{} settled", visited.len()))?;
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    strategy: Strategy,
    seed: Option<u64>,
    shutdown_signal: Arc<AtomicBool>,
}

impl Solver {
    pub fn new(strategy: Strategy) -> Self {
        Solver {
            strategy,
            seed: None,
            shutdown_signal: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Seeds the DFS neighbor shuffle. Other strategies are deterministic already.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Provides an external shutdown signal, checked after every settled cell.
    pub fn shutdown_signal(mut self, signal: Arc<AtomicBool>) -> Self {
        self.shutdown_signal = signal;
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Explores `grid` from `start` to `end`.
    ///
    /// `on_progress` receives the visit order after each newly settled cell, so
    /// successive calls grow by exactly one and the last equals the returned
    /// `visit_order`.
    ///
    /// # Errors
    ///
    /// * `MazeError::InvalidEndpoint` if `start` or `end` is out of bounds or a wall.
    /// * `MazeError::Interrupted` if the shutdown signal is raised mid-search.
    pub fn solve<F>(&self, grid: &Grid, start: Position, end: Position, mut on_progress: F) -> Result<Solution>
    where
        F: FnMut(&[Position]),
    {
        validate_endpoint(grid, start)?;
        validate_endpoint(grid, end)?;

        let mut search = self.strategy.build(self.seed);
        let mut ctx = SearchContext::new(grid, start, end, &mut on_progress, &self.shutdown_signal);
        search.explore(&mut ctx)?;

        let settled = ctx.settled_count();
        let solution = ctx.into_solution();
        if solution.found() {
            debug!(
                "{} settled {} cells, path of {} cells from {} to {}",
                search.name(),
                settled,
                solution.path.len(),
                start,
                end
            );
        } else {
            warn!(
                "{} found no path from {} to {} after settling {} cells",
                search.name(),
                start,
                end,
                settled
            );
        }
        Ok(solution)
    }
}

fn validate_endpoint(grid: &Grid, pos: Position) -> Result<()> {
    if !grid.in_bounds(pos) {
        return Err(MazeError::InvalidEndpoint {
            position: pos,
            reason: "out of bounds",
        });
    }
    if !grid.is_open(pos) {
        return Err(MazeError::InvalidEndpoint {
            position: pos,
            reason: "cell is a wall",
        });
    }
    Ok(())
}

/// Solves with a fresh `Solver` for `strategy` (DFS shuffles from entropy).
pub fn solve<F>(grid: &Grid, strategy: Strategy, start: Position, end: Position, on_progress: F) -> Result<Solution>
where
    F: FnMut(&[Position]),
{
    Solver::new(strategy).solve(grid, start, end, on_progress)
}

/// Messages from a solve running on a worker thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveEvent {
    /// One more cell was settled; appending it to the previous ones gives the visit order so far.
    Settled(Position),
    /// The final message.
    Finished(Result<Solution>),
}

/// Handle to a solve started with [`spawn_solve`].
pub struct SolveHandle {
    events: Receiver<SolveEvent>,
    shutdown_signal: Arc<AtomicBool>,
    worker: JoinHandle<()>,
}

impl SolveHandle {
    /// Blocking iterator over events; ends after `Finished`.
    pub fn events(&self) -> mpsc::Iter<'_, SolveEvent> {
        self.events.iter()
    }

    /// Asks the worker to stop at its next settled cell.
    pub fn cancel(&self) {
        self.shutdown_signal.store(true, Ordering::Relaxed);
    }

    /// Drains the remaining events and returns the final result, or `None` if
    /// `Finished` was already taken through [`Self::events`].
    pub fn wait(self) -> Option<Result<Solution>> {
        let mut outcome = None;
        for event in self.events.iter() {
            if let SolveEvent::Finished(result) = event {
                outcome = Some(result);
            }
        }
        if let Err(panic) = self.worker.join() {
            std::panic::resume_unwind(panic);
        }
        outcome
    }
}

/// Runs `solver` on a worker thread and streams its progress over a bounded
/// channel of `capacity` events, so a slow consumer throttles the search.
///
/// Each spawned solve gets its own abort flag, raised by [`SolveHandle::cancel`]
/// or by dropping the handle. The solver's shutdown signal is still honoured
/// but never written, so the solver can be reused afterwards.
pub fn spawn_solve(grid: Arc<Grid>, solver: Solver, start: Position, end: Position, capacity: usize) -> SolveHandle {
    let (tx, events) = mpsc::sync_channel(capacity);
    let abort = Arc::new(AtomicBool::new(false));
    let external = Arc::clone(&solver.shutdown_signal);
    let solver = solver.shutdown_signal(Arc::clone(&abort));
    let shutdown_signal = Arc::clone(&abort);

    let worker = thread::spawn(move || {
        let progress_tx = tx.clone();
        let result = solver.solve(&grid, start, end, |visited| {
            if let Some(&pos) = visited.last() {
                if progress_tx.send(SolveEvent::Settled(pos)).is_err() {
                    abort.store(true, Ordering::Relaxed);
                }
            }
            if external.load(Ordering::Relaxed) {
                abort.store(true, Ordering::Relaxed);
            }
        });
        if tx.send(SolveEvent::Finished(result)).is_err() {
            debug!("Solve receiver dropped before completion");
        }
    });

    SolveHandle {
        events,
        shutdown_signal,
        worker,
    }
}

/// One strategy's result from [`solve_all`]. `elapsed` is wall-clock time of the solve.
#[derive(Debug, Clone)]
pub struct StrategyReport {
    pub strategy: Strategy,
    pub solution: Solution,
    pub elapsed: Duration,
}

/// Runs every strategy on the same maze, one worker thread each.
/// Reports come back in `Strategy::ALL` order.
pub fn solve_all(grid: &Grid, start: Position, end: Position, seed: Option<u64>) -> Result<Vec<StrategyReport>> {
    validate_endpoint(grid, start)?;
    validate_endpoint(grid, end)?;

    thread::scope(|scope| {
        let workers: Vec<_> = Strategy::ALL
            .iter()
            .map(|&strategy| {
                scope.spawn(move || -> Result<StrategyReport> {
                    let mut solver = Solver::new(strategy);
                    if let Some(seed) = seed {
                        solver = solver.seed(seed);
                    }
                    let started = Instant::now();
                    let solution = solver.solve(grid, start, end, |_| {})?;
                    Ok(StrategyReport {
                        strategy,
                        solution,
                        elapsed: started.elapsed(),
                    })
                })
            })
            .collect();

        workers
            .into_iter()
            .map(|worker| worker.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .collect()
    })
}
