use crate::algorithms::common::{SearchContext, SearchStrategy};
use crate::error::Result;
use crate::grid::Direction;
use std::collections::VecDeque;

/// Breadth-first search. A cell is settled the moment it is discovered, so
/// nothing is queued twice. Once the end is discovered the current cell's
/// remaining neighbors are still settled, and the search stops before the next dequeue.
#[derive(Default)]
pub struct BreadthFirst;

impl BreadthFirst {
    pub fn new() -> Self {
        BreadthFirst
    }
}

impl SearchStrategy for BreadthFirst {
    fn explore(&mut self, ctx: &mut SearchContext<'_>) -> Result<()> {
        let grid = ctx.grid();
        let start = ctx.start();
        if ctx.settle(start)? {
            return Ok(());
        }

        let mut queue = VecDeque::from([start]);
        let mut found = false;
        while !found {
            let Some(current) = queue.pop_front() else {
                break;
            };
            for &dir in &Direction::ALL {
                let Some(next) = grid.step(current, dir) else {
                    continue;
                };
                if !ctx.can_enter(next) {
                    continue;
                }
                ctx.set_parent(next, current);
                found |= ctx.settle(next)?;
                queue.push_back(next);
            }
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "BFS"
    }
}
