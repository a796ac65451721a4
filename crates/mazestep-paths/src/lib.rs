//! Stepwise pathfinding over mazestep grids.
//!
//! The centrepiece is [`PathfindingEngine`], an A* search that advances one
//! expansion per [`step`](PathfindingEngine::step) so a driver can show the
//! open and closed lists between iterations. Once it finishes,
//! [`reconstruct_path`](PathfindingEngine::reconstruct_path) follows parent
//! links from the goal back to the start.
//!
//! [`bfs_distance`] is a plain breadth-first search used to check results.

mod bfs;
mod distance;
mod engine;
mod node;
mod traits;

pub use bfs::bfs_distance;
pub use distance::{euclidean, manhattan};
pub use engine::{PathfindingEngine, SearchOutcome, SearchState, StepResult};
pub use mazestep_core::Rediscovery;
pub use node::{NodeId, NodeList, SearchNode};
pub use traits::Pather;
