use std::collections::HashMap;

use waypath_core::Cost;

use crate::finder::{Finder, Route};
use crate::frontier::{MinQueue, Priority};
use crate::reconstruct::reconstruct;
use crate::traits::AstarPather;
use crate::SearchError;

impl<P: AstarPather> Finder<'_, P> {
    /// Compute the shortest route from `start` to `goal` using A*.
    ///
    /// Entries are ordered by `g + h`, then by lower `g`, then by insertion.
    /// A node is re-queued whenever a strictly cheaper route to it is found;
    /// the superseded entry is skipped when it surfaces. With an admissible
    /// estimate the returned route has minimum total cost.
    pub fn astar(&self, start: P::Node, goal: P::Node) -> Result<Route<P::Node>, SearchError> {
        self.check(start, goal)?;
        if start == goal {
            return Ok(Route::trivial(start));
        }
        log::debug!("astar {start:?} -> {goal:?}");

        let mut open: MinQueue<(Priority, Cost), P::Node> = MinQueue::new();
        open.push((Priority(self.pather.estimate(start, goal)), 0), start);
        let mut best: HashMap<P::Node, Cost> = HashMap::from([(start, 0)]);
        let mut parents = HashMap::new();
        let mut nbuf = Vec::new();
        let mut expanded = 0usize;

        while let Some(((_, g), current)) = open.pop() {
            if current == goal {
                let path = reconstruct(&parents, start, goal)?;
                log::debug!(
                    "astar reached goal at cost {g}, {expanded} expanded, frontier peak {}",
                    open.peak()
                );
                return Ok(Route { path, cost: g });
            }
            // Skip stale entries.
            if best.get(&current).is_some_and(|&known| g > known) {
                continue;
            }
            expanded += 1;

            nbuf.clear();
            self.pather.neighbors(current, &mut nbuf);
            for &(next, w) in nbuf.iter() {
                let tentative = g.saturating_add(w);
                if best.get(&next).is_some_and(|&known| tentative >= known) {
                    continue;
                }
                best.insert(next, tentative);
                parents.insert(next, current);
                let f = f64::from(tentative) + self.pather.estimate(next, goal);
                open.push((Priority(f), tentative), next);
            }
        }

        log::debug!("astar exhausted frontier after {expanded} expansions");
        Err(SearchError::NoPath)
    }
}
