use crate::algorithms::common::{best_first_search, SearchContext, SearchStrategy};
use crate::error::Result;
use crate::grid::Direction;

/// Neighbor order used when relaxing: down, right, up, left.
const RELAX_ORDER: [Direction; 4] = [
    Direction::Down,
    Direction::Right,
    Direction::Up,
    Direction::Left,
];

/// A* with the Manhattan distance to the end as heuristic.
///
/// On a 4-connected grid with unit steps the heuristic is admissible and
/// consistent, so the first time the end is popped its path is shortest.
#[derive(Default)]
pub struct AStar;

impl AStar {
    /// Creates a new instance of the A* strategy.
    pub fn new() -> Self {
        AStar
    }
}

impl SearchStrategy for AStar {
    fn explore(&mut self, ctx: &mut SearchContext<'_>) -> Result<()> {
        let end = ctx.end();
        best_first_search(ctx, &RELAX_ORDER, |pos| pos.manhattan(end))
    }

    fn name(&self) -> &'static str {
        "A*"
    }
}
