use crate::error::{MazeError, Result};
use crate::grid::Position;
use crate::solver::Strategy;
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::ops::RangeInclusive;

pub const ROW_RANGE: RangeInclusive<usize> = 4..=32;
pub const COL_RANGE: RangeInclusive<usize> = 4..=48;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmChoice {
    Dfs,
    Bfs,
    AStar,
    Dijkstra,
    /// Run every algorithm on the same maze and compare.
    All,
}

impl AlgorithmChoice {
    /// The single strategy to run, `None` for `all`.
    pub fn strategy(self) -> Option<Strategy> {
        match self {
            AlgorithmChoice::Dfs => Some(Strategy::Dfs),
            AlgorithmChoice::Bfs => Some(Strategy::Bfs),
            AlgorithmChoice::AStar => Some(Strategy::AStar),
            AlgorithmChoice::Dijkstra => Some(Strategy::Dijkstra),
            AlgorithmChoice::All => None,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Generate a maze and solve it with DFS, BFS, A* or Dijkstra", long_about = None)]
pub struct Config {
    #[arg(long, default_value_t = 16)]
    pub rows: usize,

    #[arg(long, default_value_t = 24)]
    pub cols: usize,

    #[arg(long, value_enum, default_value_t = AlgorithmChoice::Dfs)]
    pub algorithm: AlgorithmChoice,

    /// Seed for maze generation and the DFS shuffle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start cell as `row,col` (default: top-left corner)
    #[arg(long)]
    pub start: Option<Position>,

    /// End cell as `row,col` (default: bottom-right corner)
    #[arg(long)]
    pub end: Option<Position>,

    /// Only print the summary, not the maze
    #[arg(long, default_value_t = false)]
    pub quiet: bool,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}

impl Config {
    /// Checks the maze size against the supported bounds.
    pub fn validate(&self) -> Result<()> {
        if !ROW_RANGE.contains(&self.rows) {
            return Err(MazeError::Config(format!(
                "rows must be between {} and {}, got {}",
                ROW_RANGE.start(),
                ROW_RANGE.end(),
                self.rows
            )));
        }
        if !COL_RANGE.contains(&self.cols) {
            return Err(MazeError::Config(format!(
                "cols must be between {} and {}, got {}",
                COL_RANGE.start(),
                COL_RANGE.end(),
                self.cols
            )));
        }
        Ok(())
    }

    pub fn start(&self) -> Position {
        self.start.unwrap_or(Position::new(0, 0))
    }

    pub fn end(&self) -> Position {
        self.end
            .unwrap_or(Position::new(self.rows.saturating_sub(1), self.cols.saturating_sub(1)))
    }
}
