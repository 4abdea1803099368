//! Grid maze generation and step-by-step pathfinding with pluggable search
//! strategies (DFS, BFS, A*, Dijkstra).

pub mod algorithms;
pub mod config;
pub mod error;
pub mod grid;
pub mod logging;
pub mod maze;
pub mod solver;
pub mod statistics;

pub use error::{MazeError, Result};
pub use grid::{Cell, Direction, Grid, Position};
pub use maze::{generate, MazeGenerator};
pub use solver::{solve, solve_all, spawn_solve, Solution, SolveEvent, SolveHandle, Solver, Strategy};
