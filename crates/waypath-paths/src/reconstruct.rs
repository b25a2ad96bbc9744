use std::collections::HashMap;
use std::hash::Hash;

use crate::SearchError;

/// Rebuild the path from `start` to `goal` out of a child → parent map.
///
/// Walks parents from `goal` back to `start` and reverses. A missing parent,
/// or a chain longer than the map itself (a cycle), yields
/// [`SearchError::Reconstruction`].
pub fn reconstruct<N>(parents: &HashMap<N, N>, start: N, goal: N) -> Result<Vec<N>, SearchError>
where
    N: Copy + Eq + Hash,
{
    let mut path = vec![goal];
    let mut cur = goal;
    while cur != start {
        if path.len() > parents.len() {
            return Err(SearchError::Reconstruction);
        }
        cur = *parents.get(&cur).ok_or(SearchError::Reconstruction)?;
        path.push(cur);
    }
    path.reverse();
    Ok(path)
}
