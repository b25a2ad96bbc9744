//! Human and JSON renderings of search results.

use std::collections::HashSet;
use std::fmt;
use std::fmt::Write as _;

use serde::Serialize;
use waypath_core::{Cost, Graph, Grid, NodeId, Point};
use waypath_paths::contract::PathResponse;
use waypath_paths::{Algorithm, Heuristic, Route, SearchError};

/// Campus-style report: the path on its own line, distance for UCS.
pub fn campus_report(graph: &Graph, algorithm: Algorithm, route: Option<&Route<NodeId>>) -> String {
    let mut out = format!("{algorithm} Result:\n");
    match route {
        None => out.push_str("No path found.\n"),
        Some(r) => {
            let _ = writeln!(out, "Path:\n{}", graph.join_path(&r.path));
            if algorithm.reports_cost() {
                let _ = writeln!(out, "Total Distance: {} meters", r.cost);
            }
        }
    }
    out
}

/// Lab-style report: path and total cost on every success.
pub fn lab_report(graph: &Graph, route: Option<&Route<NodeId>>) -> String {
    match route {
        None => "No path found.\n".to_string(),
        Some(r) => format!("Path: {}\nTotal cost: {}\n", graph.join_path(&r.path), r.cost),
    }
}

/// The JSON shape shared with the request/response contract.
pub fn graph_response(graph: &Graph, algorithm: Algorithm, route: Option<&Route<NodeId>>) -> PathResponse {
    match route {
        Some(r) => PathResponse::found(graph, algorithm, r),
        None => PathResponse::failed(&SearchError::NoPath),
    }
}

/// One strategy's result on a grid.
///
/// Displays cells as `(row, col)`.
#[derive(Debug, Clone, Serialize)]
pub struct GridReport {
    pub algorithm: Algorithm,
    pub heuristic: Heuristic,
    pub path: Option<Vec<Point>>,
    pub cost: Option<Cost>,
}

impl GridReport {
    pub fn new(algorithm: Algorithm, heuristic: Heuristic, route: Option<Route<Point>>) -> Self {
        let (path, cost) = match route {
            Some(r) => (Some(r.path), Some(r.cost)),
            None => (None, None),
        };
        Self {
            algorithm,
            heuristic,
            path,
            cost,
        }
    }
}

impl fmt::Display for GridReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): ", self.algorithm, self.heuristic)?;
        match &self.path {
            None => f.write_str("None"),
            Some(path) => {
                let cells: Vec<_> = path.iter().map(|p| format!("({}, {})", p.y, p.x)).collect();
                write!(f, "[{}]", cells.join(", "))
            }
        }
    }
}

/// Draw `grid` with the route marked: `S`/`G` endpoints, `*` path,
/// `.` free, `#` blocked.
pub fn render(grid: &Grid, start: Point, goal: Point, path: &[Point]) -> String {
    let on_path: HashSet<Point> = path.iter().copied().collect();
    let b = grid.bounds();
    let mut out = String::with_capacity(b.len() + b.height() as usize);
    for y in b.min.y..b.max.y {
        for x in b.min.x..b.max.x {
            let p = Point::new(x, y);
            out.push(if p == start {
                'S'
            } else if p == goal {
                'G'
            } else if on_path.contains(&p) {
                '*'
            } else if grid.is_free(p) {
                '.'
            } else {
                '#'
            });
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypath_core::maps;
    use waypath_paths::Finder;

    #[test]
    fn campus_report_shows_distance_for_ucs_only() {
        let g = maps::campus();
        let (a, b) = (g.node("Main Gate").unwrap(), g.node("AC1").unwrap());
        let r = Finder::new(&g).ucs(a, b).unwrap();
        assert_eq!(
            campus_report(&g, Algorithm::Ucs, Some(&r)),
            "UCS Result:\nPath:\nMain Gate -> ID gate -> AC1\nTotal Distance: 180 meters\n"
        );
        assert_eq!(
            campus_report(&g, Algorithm::Bfs, Some(&r)),
            "BFS Result:\nPath:\nMain Gate -> ID gate -> AC1\n"
        );
        assert_eq!(campus_report(&g, Algorithm::Dfs, None), "DFS Result:\nNo path found.\n");
    }

    #[test]
    fn lab_report_lines() {
        let g = maps::lab();
        let (a, d) = (g.node("A").unwrap(), g.node("D").unwrap());
        let r = Finder::new(&g).ucs(a, d).unwrap();
        assert_eq!(lab_report(&g, Some(&r)), "Path: A -> C -> D\nTotal cost: 5\n");
        assert_eq!(lab_report(&g, None), "No path found.\n");
    }

    #[test]
    fn graph_response_hides_cost_for_bfs() {
        let g = maps::lab();
        let (a, d) = (g.node("A").unwrap(), g.node("D").unwrap());
        let r = Finder::new(&g).bfs(a, d).unwrap();
        let resp = graph_response(&g, Algorithm::Bfs, Some(&r));
        assert_eq!(resp.path, ["A", "B", "D"]);
        assert_eq!(resp.cost, None);
        assert!(!graph_response(&g, Algorithm::Bfs, None).success);
    }

    #[test]
    fn grid_report_display() {
        let found = GridReport::new(
            Algorithm::Astar,
            Heuristic::Euclidean,
            Some(Route {
                path: vec![Point::new(0, 0), Point::new(1, 0)],
                cost: 1,
            }),
        );
        assert_eq!(found.to_string(), "A* (Euclidean): [(0, 0), (0, 1)]");
        let missing = GridReport::new(Algorithm::Greedy, Heuristic::Manhattan, None);
        assert_eq!(missing.to_string(), "Greedy BFS (Manhattan): None");
    }

    #[test]
    fn render_marks_route() {
        let m = Grid::parse(&["S1", "0G"]).unwrap();
        let (s, g) = (m.start.unwrap(), m.goal.unwrap());
        let path = [s, Point::new(0, 1), g];
        assert_eq!(render(&m.grid, s, g, &path), "S#\n*G\n");
    }
}
