//! **waypath-core** — core types for the waypath search kernel.
//!
//! This crate provides the structures searches run over: geometry
//! primitives, a labelled weighted undirected [`Graph`], a free/blocked
//! [`Grid`], and the built-in [`maps`] used by the `waypath` binary.
//! With the `serde` feature enabled, maps can also be loaded from TOML
//! files (see [`mapfile`]).

pub mod error;
pub mod geom;
pub mod graph;
pub mod grid;
#[cfg(feature = "serde")]
pub mod mapfile;
pub mod maps;

pub use error::MapError;
pub use geom::{Point, Range};
pub use graph::{Cost, Graph, GraphBuilder, NodeId};
pub use grid::{Cell, Grid, GridMap};
#[cfg(feature = "serde")]
pub use mapfile::{MapFile, MapSpec};
