use std::fmt::Debug;
use std::hash::Hash;

use waypath_core::Cost;

/// Minimal search interface — node membership and neighbour enumeration.
pub trait Pather {
    /// Node identity. Cheap to copy and hash.
    type Node: Copy + Eq + Hash + Debug;

    /// Whether `n` is a node searches may start or end at.
    fn contains(&self, n: Self::Node) -> bool;

    /// Append the neighbours of `n` with their step cost into `buf`, in the
    /// order they should be expanded. The caller clears `buf` before calling.
    fn neighbors(&self, n: Self::Node, buf: &mut Vec<(Self::Node, Cost)>);
}

/// Pather with a heuristic, for Greedy Best-First and A*.
pub trait AstarPather: Pather {
    /// Estimated remaining cost from `from` to `to`.
    /// Must never overestimate the true cost for A* to stay optimal.
    fn estimate(&self, from: Self::Node, to: Self::Node) -> f64;
}
