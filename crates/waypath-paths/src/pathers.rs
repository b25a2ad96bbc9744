//! [`Pather`] implementations for the core map types.

use waypath_core::{Cost, Graph, Grid, NodeId, Point};

use crate::distance::Heuristic;
use crate::traits::{AstarPather, Pather};

impl Pather for Graph {
    type Node = NodeId;

    fn contains(&self, n: NodeId) -> bool {
        Graph::contains(self, n)
    }

    fn neighbors(&self, n: NodeId, buf: &mut Vec<(NodeId, Cost)>) {
        buf.extend_from_slice(Graph::neighbors(self, n));
    }
}

/// Graphs carry no coordinates, so the estimate is zero: A* behaves like
/// UCS and Greedy expands in discovery order.
impl AstarPather for Graph {
    fn estimate(&self, _from: NodeId, _to: NodeId) -> f64 {
        0.0
    }
}

/// Free cells are nodes; each cardinal move between free cells costs 1.
impl Pather for Grid {
    type Node = Point;

    fn contains(&self, p: Point) -> bool {
        self.is_free(p)
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<(Point, Cost)>) {
        buf.extend(self.free_neighbors(p).map(|n| (n, 1)));
    }
}

impl AstarPather for Grid {
    fn estimate(&self, from: Point, to: Point) -> f64 {
        Heuristic::Manhattan.estimate(from, to)
    }
}

/// A grid paired with a chosen [`Heuristic`].
#[derive(Debug, Clone, Copy)]
pub struct GridPather<'a> {
    grid: &'a Grid,
    heuristic: Heuristic,
}

impl<'a> GridPather<'a> {
    pub fn new(grid: &'a Grid, heuristic: Heuristic) -> Self {
        Self { grid, heuristic }
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }
}

impl Pather for GridPather<'_> {
    type Node = Point;

    fn contains(&self, p: Point) -> bool {
        self.grid.is_free(p)
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<(Point, Cost)>) {
        self.grid.neighbors(p, buf);
    }
}

impl AstarPather for GridPather<'_> {
    fn estimate(&self, from: Point, to: Point) -> f64 {
        self.heuristic.estimate(from, to)
    }
}
