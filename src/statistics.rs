use crate::grid::{Grid, Position};
use crate::solver::{Strategy, StrategyReport};
use pathfinding::prelude::astar;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SolveStats {
    pub strategy: Strategy,
    pub settled_cells: usize,
    pub open_cells: usize,
    pub path_steps: Option<usize>,
    pub optimal_steps: Option<usize>,
    pub elapsed: Duration,
}

impl SolveStats {
    pub fn new(report: &StrategyReport, open_cells: usize, optimal_steps: Option<usize>) -> Self {
        SolveStats {
            strategy: report.strategy,
            settled_cells: report.solution.visit_order.len(),
            open_cells,
            path_steps: report.solution.path_steps(),
            optimal_steps,
            elapsed: report.elapsed,
        }
    }

    /// Path length over the shortest possible; 1.0 means optimal.
    pub fn path_efficiency(&self) -> Option<f64> {
        match (self.path_steps, self.optimal_steps) {
            (Some(steps), Some(0)) => Some(if steps == 0 { 1.0 } else { f64::INFINITY }),
            (Some(steps), Some(optimal)) => Some(steps as f64 / optimal as f64),
            _ => None,
        }
    }

    /// Share of open cells the search settled.
    pub fn coverage(&self) -> f64 {
        if self.open_cells == 0 {
            0.0
        } else {
            self.settled_cells as f64 / self.open_cells as f64
        }
    }
}

/// Shortest number of moves between two cells, independent of the solver's
/// own strategies. `None` when unreachable.
pub fn optimal_steps(grid: &Grid, start: Position, end: Position) -> Option<usize> {
    astar(
        &start,
        |&p| grid.open_neighbors(p).into_iter().map(|next| (next, 1usize)),
        |p| p.manhattan(end),
        |p| *p == end,
    )
    .map(|(_, cost)| cost)
}

impl fmt::Display for SolveStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Statistics:", self.strategy)?;
        writeln!(
            f,
            "Cells settled: {} of {} open ({:.1}%)",
            self.settled_cells,
            self.open_cells,
            self.coverage() * 100.0
        )?;
        match self.path_steps {
            Some(steps) => writeln!(f, "Path length: {} moves", steps)?,
            None => writeln!(f, "Path length: no path found")?,
        }
        if let Some(optimal) = self.optimal_steps {
            writeln!(f, "Optimal path length: {} moves", optimal)?;
        }
        if let Some(efficiency) = self.path_efficiency() {
            writeln!(f, "Path efficiency: {:.3}", efficiency)?;
            if efficiency > 1.0 && self.strategy.is_optimal() {
                writeln!(f, "⚠ {} returned a longer path than the optimum", self.strategy)?;
            }
        }
        writeln!(f, "Solve time: {:.2?}", self.elapsed)?;
        Ok(())
    }
}

/// Prints a table comparing strategies run on the same maze.
pub fn print_comparison(stats: &[SolveStats]) {
    println!("\n=== ALGORITHM COMPARISON RESULTS ===");
    println!();
    println!(
        "{:<10} {:<8} {:<10} {:<10} {:<10} {:<12} {:<12}",
        "Algorithm", "Found", "Settled", "Coverage", "Path", "Efficiency", "Time"
    );
    println!("{}", "-".repeat(76));

    for stat in stats {
        let found_str = if stat.path_steps.is_some() { "✓" } else { "✗" };
        let path_str = stat
            .path_steps
            .map_or_else(|| "-".to_string(), |steps| steps.to_string());
        let efficiency_str = stat
            .path_efficiency()
            .map_or_else(|| "-".to_string(), |e| format!("{:.3}", e));

        println!(
            "{:<10} {:<8} {:<10} {:<10} {:<10} {:<12} {:<12}",
            stat.strategy.name(),
            found_str,
            stat.settled_cells,
            format!("{:.1}%", stat.coverage() * 100.0),
            path_str,
            efficiency_str,
            format!("{:.2?}", stat.elapsed),
        );
    }

    println!();
    if let Some(fewest) = stats
        .iter()
        .filter(|s| s.path_steps.is_some())
        .min_by_key(|s| s.settled_cells)
    {
        println!(
            "Fewest cells settled: {} ({} cells)",
            fewest.strategy, fewest.settled_cells
        );
    } else {
        println!("No algorithm reached the end cell.");
    }
}
