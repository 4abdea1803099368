use crate::algorithms::common::{SearchContext, SearchStrategy};
use crate::error::Result;
use crate::grid::{Direction, Position};
use rand::seq::SliceRandom;
use rand::Rng;

/// Depth-first search with the neighbor order reshuffled at every expansion.
///
/// Runs on an explicit stack of frames instead of recursion, so deep mazes
/// cannot overflow the call stack. The path it finds is not necessarily shortest.
pub struct DepthFirst<R> {
    rng: R,
}

/// A cell being expanded and the directions it still has to try.
struct Frame {
    pos: Position,
    directions: [Direction; 4],
    next: usize,
}

impl<R: Rng> DepthFirst<R> {
    pub fn new(rng: R) -> Self {
        DepthFirst { rng }
    }

    fn expand(&mut self, pos: Position) -> Frame {
        let mut directions = Direction::ALL;
        directions.shuffle(&mut self.rng);
        Frame {
            pos,
            directions,
            next: 0,
        }
    }
}

impl<R: Rng> SearchStrategy for DepthFirst<R> {
    fn explore(&mut self, ctx: &mut SearchContext<'_>) -> Result<()> {
        let grid = ctx.grid();
        let start = ctx.start();
        if ctx.settle(start)? {
            return Ok(());
        }

        let mut stack = vec![self.expand(start)];
        while let Some(frame) = stack.last_mut() {
            if frame.next >= frame.directions.len() {
                stack.pop();
                continue;
            }
            let dir = frame.directions[frame.next];
            frame.next += 1;
            let pos = frame.pos;

            let Some(next) = grid.step(pos, dir) else {
                continue;
            };
            if !ctx.can_enter(next) {
                continue;
            }

            ctx.set_parent(next, pos);
            if ctx.settle(next)? {
                break;
            }
            let frame = self.expand(next);
            stack.push(frame);
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "DFS"
    }
}
