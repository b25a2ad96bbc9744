//! Graph search over small in-memory maps.
//!
//! This crate implements the classical search strategies over anything that
//! can enumerate its neighbours:
//!
//! - **BFS** fewest-hops search ([`Finder::bfs`])
//! - **DFS** first-found depth-first search ([`Finder::dfs`])
//! - **UCS** minimum-weight search ([`Finder::ucs`])
//! - **Greedy Best-First** heuristic-only search ([`Finder::greedy`])
//! - **A\*** heuristic-guided minimum-weight search ([`Finder::astar`])
//!
//! Every strategy is a method of [`Finder`], which borrows an immutable
//! pather and allocates its frontier and visited set per call.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS, DFS, UCS |
//! | [`AstarPather`] : [`Pather`] | Greedy, A* |
//!
//! [`Graph`](waypath_core::Graph) and [`Grid`](waypath_core::Grid) implement
//! both; [`GridPather`] selects a different heuristic for a grid.

mod astar;
mod bfs;
#[cfg(feature = "serde")]
pub mod contract;
mod dfs;
mod distance;
mod error;
mod finder;
mod frontier;
mod greedy;
mod pathers;
mod reconstruct;
mod traits;
mod ucs;

pub use distance::{Heuristic, euclidean, manhattan};
pub use error::SearchError;
pub use finder::{Algorithm, Finder, Route};
pub use pathers::GridPather;
pub use reconstruct::reconstruct;
pub use traits::{AstarPather, Pather};
pub use waypath_core::Cost;
