use std::collections::HashSet;

use waypath_core::Cost;

use crate::finder::{Finder, Route};
use crate::frontier::MinQueue;
use crate::traits::Pather;
use crate::SearchError;

impl<P: Pather> Finder<'_, P> {
    /// Uniform-cost search: the minimum-weight route from `start` to `goal`.
    ///
    /// The frontier holds whole paths keyed by accumulated cost; equal costs
    /// pop in insertion order. Entries for already expanded nodes are left
    /// in the queue and skipped when popped.
    pub fn ucs(&self, start: P::Node, goal: P::Node) -> Result<Route<P::Node>, SearchError> {
        self.check(start, goal)?;
        if start == goal {
            return Ok(Route::trivial(start));
        }
        log::debug!("ucs {start:?} -> {goal:?}");

        let mut open: MinQueue<Cost, Vec<P::Node>> = MinQueue::new();
        open.push(0, vec![start]);
        let mut visited = HashSet::new();
        let mut nbuf = Vec::new();

        while let Some((cost, path)) = open.pop() {
            let Some(&node) = path.last() else {
                continue;
            };
            if node == goal {
                log::debug!(
                    "ucs reached goal at cost {cost}, {} expanded, frontier peak {}",
                    visited.len(),
                    open.peak()
                );
                return Ok(Route { path, cost });
            }
            // Stale duplicate.
            if !visited.insert(node) {
                continue;
            }
            log::trace!("ucs expand {node:?} at cost {cost}");

            nbuf.clear();
            self.pather.neighbors(node, &mut nbuf);
            for &(next, w) in nbuf.iter() {
                if visited.contains(&next) {
                    continue;
                }
                let mut extended = path.clone();
                extended.push(next);
                open.push(cost.saturating_add(w), extended);
            }
        }

        log::debug!("ucs exhausted frontier after {} nodes", visited.len());
        Err(SearchError::NoPath)
    }
}
