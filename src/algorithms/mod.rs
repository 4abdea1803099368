pub mod a_star;
pub mod bfs;
pub mod common;
pub mod dfs;
pub mod dijkstra;

pub use a_star::AStar;
pub use bfs::BreadthFirst;
pub use common::{SearchContext, SearchStrategy};
pub use dfs::DepthFirst;
pub use dijkstra::Dijkstra;
