use std::collections::{HashSet, VecDeque};

use waypath_core::Cost;

use crate::finder::{Finder, Route};
use crate::traits::Pather;
use crate::SearchError;

impl<P: Pather> Finder<'_, P> {
    /// Breadth-first search from `start` to `goal`.
    ///
    /// Paths are expanded in FIFO order, so the route found has the fewest
    /// hops. Among equally short paths, the one reached through earlier
    /// declared neighbours wins. Weights are ignored while searching but
    /// summed into [`Route::cost`].
    pub fn bfs(&self, start: P::Node, goal: P::Node) -> Result<Route<P::Node>, SearchError> {
        self.check(start, goal)?;
        if start == goal {
            return Ok(Route::trivial(start));
        }
        log::debug!("bfs {start:?} -> {goal:?}");

        let mut queue: VecDeque<(Vec<P::Node>, Cost)> = VecDeque::new();
        queue.push_back((vec![start], 0));
        let mut visited = HashSet::new();
        let mut nbuf = Vec::new();

        while let Some((path, cost)) = queue.pop_front() {
            let Some(&node) = path.last() else {
                continue;
            };
            if node == goal {
                log::debug!("bfs reached goal, {} nodes expanded", visited.len());
                return Ok(Route { path, cost });
            }
            if !visited.insert(node) {
                continue;
            }
            log::trace!("bfs expand {node:?}");

            nbuf.clear();
            self.pather.neighbors(node, &mut nbuf);
            for &(next, w) in nbuf.iter() {
                if visited.contains(&next) {
                    continue;
                }
                let mut extended = Vec::with_capacity(path.len() + 1);
                extended.extend_from_slice(&path);
                extended.push(next);
                queue.push_back((extended, cost.saturating_add(w)));
            }
        }

        log::debug!("bfs exhausted frontier after {} nodes", visited.len());
        Err(SearchError::NoPath)
    }
}
