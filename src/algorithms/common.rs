use crate::error::{MazeError, Result};
use crate::grid::{Direction, Grid, Position};
use crate::solver::Solution;
use log::trace;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

/// One exploration discipline. Implementations settle cells through the
/// context and stop once `settle` reports the end cell.
pub trait SearchStrategy {
    fn explore(&mut self, ctx: &mut SearchContext<'_>) -> Result<()>;

    fn name(&self) -> &'static str;
}

/// Per-call search state shared by every strategy: settled cells, parent
/// pointers and the settlement order.
pub struct SearchContext<'a> {
    grid: &'a Grid,
    start: Position,
    end: Position,
    visited: Vec<Vec<bool>>,
    parent: FxHashMap<Position, Position>,
    order: Vec<Position>,
    on_progress: &'a mut dyn FnMut(&[Position]),
    shutdown: &'a AtomicBool,
}

impl<'a> SearchContext<'a> {
    pub fn new(
        grid: &'a Grid,
        start: Position,
        end: Position,
        on_progress: &'a mut dyn FnMut(&[Position]),
        shutdown: &'a AtomicBool,
    ) -> Self {
        SearchContext {
            grid,
            start,
            end,
            visited: vec![vec![false; grid.cols()]; grid.rows()],
            parent: FxHashMap::default(),
            order: Vec::new(),
            on_progress,
            shutdown,
        }
    }

    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    pub fn is_settled(&self, pos: Position) -> bool {
        self.visited
            .get(pos.row)
            .and_then(|row| row.get(pos.col))
            .copied()
            .unwrap_or(false)
    }

    /// Open and not yet settled.
    pub fn can_enter(&self, pos: Position) -> bool {
        self.grid.is_open(pos) && !self.is_settled(pos)
    }

    pub fn set_parent(&mut self, child: Position, parent: Position) {
        self.parent.insert(child, parent);
    }

    /// Records `pos` as settled, hands the caller the visit order so far and
    /// then honours the shutdown signal. Returns true when `pos` is the end cell.
    pub fn settle(&mut self, pos: Position) -> Result<bool> {
        self.visited[pos.row][pos.col] = true;
        self.order.push(pos);
        trace!("Settled {} (#{})", pos, self.order.len());

        (self.on_progress)(&self.order);

        if self.shutdown.load(AtomicOrdering::Relaxed) {
            return Err(MazeError::Interrupted);
        }
        Ok(pos == self.end)
    }

    pub fn settled_count(&self) -> usize {
        self.order.len()
    }

    /// Walks parent pointers back from the end cell. Empty if the end was never settled.
    pub fn reconstruct_path(&self) -> Vec<Position> {
        if !self.is_settled(self.end) {
            return Vec::new();
        }

        let mut path = vec![self.end];
        let mut current = self.end;
        while current != self.start {
            match self.parent.get(&current) {
                Some(&prev) => {
                    path.push(prev);
                    current = prev;
                }
                None => return Vec::new(),
            }
        }
        path.reverse();
        path
    }

    pub fn into_solution(self) -> Solution {
        let path = self.reconstruct_path();
        Solution {
            visit_order: self.order,
            path,
        }
    }
}

/// Frontier entry ordered by priority, then by insertion sequence.
/// `Ord` is reversed so `BinaryHeap` pops the smallest entry first.
#[derive(Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    priority: usize,
    seq: usize,
    pos: Position,
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-priority frontier. Equal priorities pop in insertion order.
#[derive(Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: usize,
}

impl Frontier {
    pub fn push(&mut self, priority: usize, pos: Position) {
        self.heap.push(FrontierEntry {
            priority,
            seq: self.next_seq,
            pos,
        });
        self.next_seq += 1;
    }

    pub fn pop(&mut self) -> Option<Position> {
        self.heap.pop().map(|entry| entry.pos)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// Relaxation loop shared by A* and Dijkstra. Cells are settled when popped;
/// stale frontier entries for settled cells are skipped.
pub(crate) fn best_first_search<H>(
    ctx: &mut SearchContext<'_>,
    directions: &[Direction],
    heuristic: H,
) -> Result<()>
where
    H: Fn(Position) -> usize,
{
    let grid = ctx.grid();
    let start = ctx.start();
    let mut dist = vec![vec![usize::MAX; grid.cols()]; grid.rows()];
    let mut frontier = Frontier::default();

    dist[start.row][start.col] = 0;
    frontier.push(heuristic(start), start);

    while let Some(current) = frontier.pop() {
        if ctx.is_settled(current) {
            continue;
        }
        if ctx.settle(current)? {
            break;
        }

        let cost = dist[current.row][current.col] + 1;
        for &dir in directions {
            let Some(next) = grid.step(current, dir) else {
                continue;
            };
            if !ctx.can_enter(next) {
                continue;
            }
            if cost < dist[next.row][next.col] {
                dist[next.row][next.col] = cost;
                ctx.set_parent(next, current);
                frontier.push(cost + heuristic(next), next);
            }
        }
    }
    Ok(())
}
