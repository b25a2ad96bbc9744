use std::collections::HashSet;

use waypath_core::Cost;

use crate::finder::{Finder, Route};
use crate::traits::Pather;
use crate::SearchError;

impl<P: Pather> Finder<'_, P> {
    /// Depth-first search from `start` to `goal`.
    ///
    /// Neighbours are pushed in declared order, so the last declared one is
    /// explored first. The route is valid but not necessarily short.
    pub fn dfs(&self, start: P::Node, goal: P::Node) -> Result<Route<P::Node>, SearchError> {
        self.check(start, goal)?;
        if start == goal {
            return Ok(Route::trivial(start));
        }
        log::debug!("dfs {start:?} -> {goal:?}");

        let mut stack: Vec<(Vec<P::Node>, Cost)> = vec![(vec![start], 0)];
        let mut visited = HashSet::new();
        let mut nbuf = Vec::new();

        while let Some((path, cost)) = stack.pop() {
            let Some(&node) = path.last() else {
                continue;
            };
            if node == goal {
                log::debug!("dfs reached goal at depth {}", path.len() - 1);
                return Ok(Route { path, cost });
            }
            if !visited.insert(node) {
                continue;
            }

            nbuf.clear();
            self.pather.neighbors(node, &mut nbuf);
            for &(next, w) in nbuf.iter() {
                if !visited.contains(&next) {
                    let mut extended = path.clone();
                    extended.push(next);
                    stack.push((extended, cost.saturating_add(w)));
                }
            }
        }

        Err(SearchError::NoPath)
    }
}
