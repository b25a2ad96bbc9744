use std::fmt;
use std::str::FromStr;

use waypath_core::Cost;

use crate::SearchError;
use crate::traits::{AstarPather, Pather};

/// A successful search result: the path including both endpoints, and the
/// sum of step costs along it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route<N> {
    pub path: Vec<N>,
    pub cost: Cost,
}

impl<N: Copy> Route<N> {
    /// The single-node route of a search whose start is its goal.
    pub(crate) fn trivial(node: N) -> Self {
        Self {
            path: vec![node],
            cost: 0,
        }
    }

    /// Number of moves (path length minus one).
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Runs searches over a borrowed, immutable pather.
///
/// Each call builds its own frontier and visited set; nothing is carried
/// between calls, so repeated calls with the same arguments return the
/// same route.
pub struct Finder<'a, P> {
    pub(crate) pather: &'a P,
}

impl<'a, P: Pather> Finder<'a, P> {
    /// Create a finder over `pather`.
    pub fn new(pather: &'a P) -> Self {
        Self { pather }
    }

    /// Validate both endpoints before searching.
    pub(crate) fn check(&self, start: P::Node, goal: P::Node) -> Result<(), SearchError> {
        if !self.pather.contains(start) {
            return Err(SearchError::not_found("start", start));
        }
        if !self.pather.contains(goal) {
            return Err(SearchError::not_found("goal", goal));
        }
        Ok(())
    }
}

impl<P: AstarPather> Finder<'_, P> {
    /// Dispatch to the strategy named by `algorithm`.
    pub fn run(
        &self,
        algorithm: Algorithm,
        start: P::Node,
        goal: P::Node,
    ) -> Result<Route<P::Node>, SearchError> {
        match algorithm {
            Algorithm::Bfs => self.bfs(start, goal),
            Algorithm::Dfs => self.dfs(start, goal),
            Algorithm::Ucs => self.ucs(start, goal),
            Algorithm::Greedy => self.greedy(start, goal),
            Algorithm::Astar => self.astar(start, goal),
        }
    }
}

/// Search strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Ucs,
    Greedy,
    Astar,
}

impl Algorithm {
    /// Every strategy, in menu order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Ucs,
        Algorithm::Greedy,
        Algorithm::Astar,
    ];

    /// Whether the strategy minimises total weight, so its cost is worth
    /// reporting.
    pub fn reports_cost(self) -> bool {
        matches!(self, Algorithm::Ucs | Algorithm::Astar)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Ucs => "UCS",
            Algorithm::Greedy => "Greedy BFS",
            Algorithm::Astar => "A*",
        })
    }
}

impl FromStr for Algorithm {
    type Err = String;

    /// Accepts names in any case and the campus menu digits `1`–`3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "1" => Ok(Algorithm::Bfs),
            "dfs" | "2" => Ok(Algorithm::Dfs),
            "ucs" | "3" => Ok(Algorithm::Ucs),
            "greedy" | "gbfs" | "greedy-bfs" | "greedy bfs" => Ok(Algorithm::Greedy),
            "astar" | "a*" | "a-star" => Ok(Algorithm::Astar),
            other => Err(format!("unknown algorithm {other:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names_and_menu_digits() {
        assert_eq!("BFS".parse::<Algorithm>(), Ok(Algorithm::Bfs));
        assert_eq!("dfs".parse::<Algorithm>(), Ok(Algorithm::Dfs));
        assert_eq!("3".parse::<Algorithm>(), Ok(Algorithm::Ucs));
        assert_eq!("A*".parse::<Algorithm>(), Ok(Algorithm::Astar));
        assert_eq!("gbfs".parse::<Algorithm>(), Ok(Algorithm::Greedy));
        assert!("4".parse::<Algorithm>().is_err());
    }

    #[test]
    fn display_parses_back() {
        for a in Algorithm::ALL {
            assert_eq!(a.to_string().parse::<Algorithm>(), Ok(a));
        }
    }

    #[test]
    fn only_weight_minimising_strategies_report_cost() {
        let reporting: Vec<_> = Algorithm::ALL
            .into_iter()
            .filter(|a| a.reports_cost())
            .collect();
        assert_eq!(reporting, [Algorithm::Ucs, Algorithm::Astar]);
    }

    #[test]
    fn start_equal_to_goal_is_trivial_for_every_strategy() {
        let g = waypath_core::maps::lab();
        let c = g.node("C").unwrap();
        let finder = Finder::new(&g);
        for a in Algorithm::ALL {
            assert_eq!(finder.run(a, c, c), Ok(Route::trivial(c)), "{a}");
        }
    }

    #[test]
    fn route_steps() {
        let r = Route {
            path: vec![1, 2, 3],
            cost: 9,
        };
        assert_eq!(r.steps(), 2);
        assert_eq!(Route::trivial(5).steps(), 0);
    }
}
