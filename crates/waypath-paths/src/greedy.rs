use std::collections::{HashMap, HashSet};

use waypath_core::Cost;

use crate::finder::{Finder, Route};
use crate::frontier::{MinQueue, Priority};
use crate::reconstruct::reconstruct;
use crate::traits::AstarPather;
use crate::SearchError;

impl<P: AstarPather> Finder<'_, P> {
    /// Greedy best-first search: always expand the node that looks closest
    /// to `goal`, ignoring the cost paid so far.
    ///
    /// Fast on open maps but not optimal. A neighbour's back-pointer is
    /// recorded when it is pushed and overwritten if another node reaches
    /// it before it is expanded.
    pub fn greedy(&self, start: P::Node, goal: P::Node) -> Result<Route<P::Node>, SearchError> {
        self.check(start, goal)?;
        if start == goal {
            return Ok(Route::trivial(start));
        }
        log::debug!("greedy {start:?} -> {goal:?}");

        let mut open = MinQueue::new();
        open.push(Priority(self.pather.estimate(start, goal)), start);
        let mut parents = HashMap::new();
        let mut cost_to: HashMap<P::Node, Cost> = HashMap::from([(start, 0)]);
        let mut visited = HashSet::new();
        let mut nbuf = Vec::new();

        while let Some((_, current)) = open.pop() {
            if current == goal {
                let path = reconstruct(&parents, start, goal)?;
                let cost = cost_to
                    .get(&goal)
                    .copied()
                    .ok_or(SearchError::Reconstruction)?;
                log::debug!("greedy reached goal, {} expanded", visited.len());
                return Ok(Route { path, cost });
            }
            if !visited.insert(current) {
                continue;
            }
            let base = cost_to.get(&current).copied().unwrap_or_default();

            nbuf.clear();
            self.pather.neighbors(current, &mut nbuf);
            for &(next, w) in nbuf.iter() {
                if visited.contains(&next) {
                    continue;
                }
                parents.insert(next, current);
                cost_to.insert(next, base.saturating_add(w));
                open.push(Priority(self.pather.estimate(next, goal)), next);
            }
        }

        Err(SearchError::NoPath)
    }
}
