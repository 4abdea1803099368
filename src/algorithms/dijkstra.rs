use crate::algorithms::common::{best_first_search, SearchContext, SearchStrategy};
use crate::error::Result;
use crate::grid::Direction;

/// Dijkstra's algorithm: best-first on distance from the start alone.
/// Settles cells in non-decreasing distance with no pull toward the end.
#[derive(Default)]
pub struct Dijkstra;

impl Dijkstra {
    pub fn new() -> Self {
        Dijkstra
    }
}

impl SearchStrategy for Dijkstra {
    fn explore(&mut self, ctx: &mut SearchContext<'_>) -> Result<()> {
        best_first_search(ctx, &Direction::ALL, |_| 0)
    }

    fn name(&self) -> &'static str {
        "Dijkstra"
    }
}
