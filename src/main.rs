use clap::Parser;
use log::info;
use maze_solver::config::Config;
use maze_solver::error::Result;
use maze_solver::logging::init_logger;
use maze_solver::maze::MazeGenerator;
use maze_solver::solver::{self, Solver, Strategy, StrategyReport};
use maze_solver::statistics::{self, SolveStats};
use maze_solver::Grid;
use std::time::Instant;

fn main() {
    let config = Config::parse();
    init_logger(&config);

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    config.validate()?;

    let generator = config
        .seed
        .map_or_else(MazeGenerator::new, MazeGenerator::with_seed);
    let grid = generator.generate(config.rows, config.cols)?;
    let (start, end) = (config.start(), config.end());

    info!(
        "Maze {}x{} with {} open cells, solving {} -> {}",
        config.rows,
        config.cols,
        grid.open_cells(),
        start,
        end
    );

    let optimal = statistics::optimal_steps(&grid, start, end);
    match config.algorithm.strategy() {
        Some(strategy) => run_single(config, &grid, strategy, optimal),
        None => run_all(config, &grid, optimal),
    }
}

fn run_single(config: &Config, grid: &Grid, strategy: Strategy, optimal: Option<usize>) -> Result<()> {
    let mut solver = Solver::new(strategy);
    if let Some(seed) = config.seed {
        solver = solver.seed(seed);
    }

    let started = Instant::now();
    let solution = solver.solve(grid, config.start(), config.end(), |visited| {
        if visited.len() % 50 == 0 {
            log::debug!("{} cells settled", visited.len());
        }
    })?;
    let report = StrategyReport {
        strategy,
        solution,
        elapsed: started.elapsed(),
    };

    if !config.quiet {
        println!("Legend: S=Start, E=End, *=Path, o=Visited, #=Wall, .=Open");
        println!("{}", grid.render(&report.solution.visit_order, &report.solution.path));
    }

    println!("=== FINAL RESULTS ===");
    print!("{}", SolveStats::new(&report, grid.open_cells(), optimal));
    Ok(())
}

fn run_all(config: &Config, grid: &Grid, optimal: Option<usize>) -> Result<()> {
    println!("Running comparison of {} algorithms...", Strategy::ALL.len());
    let reports = solver::solve_all(grid, config.start(), config.end(), config.seed)?;

    if !config.quiet {
        for report in &reports {
            println!("--- {} ---", report.strategy);
            println!("{}", grid.render(&report.solution.visit_order, &report.solution.path));
        }
    }

    let stats: Vec<SolveStats> = reports
        .iter()
        .map(|report| SolveStats::new(report, grid.open_cells(), optimal))
        .collect();
    statistics::print_comparison(&stats);
    Ok(())
}
