use proptest::prelude::*;
use proptest::sample::Index;
use waypath_core::{Cell, Cost, Graph, GraphBuilder, Grid, NodeId, Point};
use waypath_paths::{Algorithm, Finder, GridPather, Heuristic, Route, SearchError};

fn graph(max_nodes: usize, unit: bool) -> impl Strategy<Value = Graph> {
    (2..=max_nodes).prop_flat_map(move |n| {
        let weight = if unit {
            Just(1 as Cost).boxed()
        } else {
            (0 as Cost..=9).boxed()
        };
        proptest::collection::vec((0..n, 0..n, weight), 0..=n * 2).prop_map(move |edges| {
            let mut b = GraphBuilder::new();
            for i in 0..n {
                b.add_node(format!("n{i}"));
            }
            for (u, v, w) in edges {
                b.add_edge(format!("n{u}"), format!("n{v}"), w);
            }
            b.build()
        })
    })
}

fn grid() -> impl Strategy<Value = Grid> {
    proptest::collection::vec(proptest::bool::weighted(0.3), 36).prop_map(|blocked| {
        let mut g = Grid::new(6, 6);
        for (i, b) in blocked.into_iter().enumerate() {
            if b {
                g.set(Point::new((i % 6) as i32, (i / 6) as i32), Cell::Blocked);
            }
        }
        g
    })
}

fn pick(g: &Graph, i: &Index) -> NodeId {
    let nodes: Vec<_> = g.nodes().collect();
    nodes[i.index(nodes.len())]
}

/// Cheapest simple path by exhaustive enumeration.
fn brute_force_min(g: &Graph, from: NodeId, to: NodeId) -> Option<Cost> {
    fn walk(g: &Graph, at: NodeId, to: NodeId, seen: &mut Vec<NodeId>, cost: Cost, best: &mut Option<Cost>) {
        if at == to {
            *best = Some(best.map_or(cost, |b| b.min(cost)));
            return;
        }
        for &(next, w) in g.neighbors(at) {
            if !seen.contains(&next) {
                seen.push(next);
                walk(g, next, to, seen, cost + w, best);
                seen.pop();
            }
        }
    }
    let mut best = None;
    walk(g, from, to, &mut vec![from], 0, &mut best);
    best
}

fn assert_walk(g: &Graph, route: &Route<NodeId>, from: NodeId, to: NodeId) {
    assert_eq!(route.path.first(), Some(&from));
    assert_eq!(route.path.last(), Some(&to));
    for pair in route.path.windows(2) {
        assert!(g.weight(pair[0], pair[1]).is_some(), "no edge in {pair:?}");
    }
}

proptest! {
    #[test]
    fn ucs_cost_is_the_true_minimum(g in graph(6, false), a in any::<Index>(), b in any::<Index>()) {
        let (from, to) = (pick(&g, &a), pick(&g, &b));
        let expected = brute_force_min(&g, from, to);
        match Finder::new(&g).ucs(from, to) {
            Ok(route) => {
                assert_walk(&g, &route, from, to);
                prop_assert_eq!(Some(route.cost), expected);
            }
            Err(e) => {
                prop_assert_eq!(e, SearchError::NoPath);
                prop_assert_eq!(expected, None);
            }
        }
    }

    #[test]
    fn bfs_never_takes_more_hops_than_dfs(g in graph(8, true), a in any::<Index>(), b in any::<Index>()) {
        let (from, to) = (pick(&g, &a), pick(&g, &b));
        let finder = Finder::new(&g);
        match (finder.bfs(from, to), finder.dfs(from, to)) {
            (Ok(wide), Ok(deep)) => {
                assert_walk(&g, &wide, from, to);
                assert_walk(&g, &deep, from, to);
                prop_assert!(wide.steps() <= deep.steps());
            }
            (Err(x), Err(y)) => {
                prop_assert_eq!(x, SearchError::NoPath);
                prop_assert_eq!(y, SearchError::NoPath);
            }
            (x, y) => prop_assert!(false, "bfs {:?} but dfs {:?}", x, y),
        }
    }

    #[test]
    fn astar_matches_ucs_on_grids(g in grid(), a in any::<Index>(), b in any::<Index>()) {
        let free: Vec<Point> = g.bounds().iter().filter(|&p| g.is_free(p)).collect();
        prop_assume!(!free.is_empty());
        let (from, to) = (free[a.index(free.len())], free[b.index(free.len())]);
        let ucs = Finder::new(&g).ucs(from, to);
        for h in [Heuristic::Manhattan, Heuristic::Euclidean] {
            let astar = Finder::new(&GridPather::new(&g, h)).astar(from, to);
            match (&ucs, &astar) {
                (Ok(u), Ok(s)) => prop_assert_eq!(u.cost, s.cost),
                (Err(_), Err(_)) => {}
                _ => prop_assert!(false, "{} disagrees with ucs: {:?} vs {:?}", h, astar, ucs),
            }
        }
    }

    #[test]
    fn every_algorithm_is_idempotent(g in graph(7, false), a in any::<Index>(), b in any::<Index>()) {
        let (from, to) = (pick(&g, &a), pick(&g, &b));
        let finder = Finder::new(&g);
        for algo in Algorithm::ALL {
            let first = finder.run(algo, from, to);
            prop_assert_eq!(&finder.run(algo, from, to), &first);
            if let Ok(route) = &first {
                assert_walk(&g, route, from, to);
            }
        }
    }

    #[test]
    fn start_equal_to_goal_is_trivial(g in graph(6, false), a in any::<Index>()) {
        let node = pick(&g, &a);
        for algo in Algorithm::ALL {
            let route = Finder::new(&g).run(algo, node, node).unwrap();
            prop_assert_eq!(route.path, vec![node]);
            prop_assert_eq!(route.cost, 0);
        }
    }

    #[test]
    fn isolated_goal_has_no_path(g in graph(6, false), a in any::<Index>(), b in any::<Index>()) {
        let (from, to) = (pick(&g, &a), pick(&g, &b));
        prop_assume!(from != to);
        let cut = g.isolate(to);
        for algo in Algorithm::ALL {
            prop_assert_eq!(Finder::new(&cut).run(algo, from, to), Err(SearchError::NoPath));
        }
    }
}

#[test]
fn isolated_grid_goal_has_no_path() {
    let m = waypath_core::maps::haunted_house();
    let (s, g) = (m.start.unwrap(), m.goal.unwrap());
    let mut walled = m.grid.clone();
    for n in g.neighbors_4() {
        walled.set(n, Cell::Blocked);
    }
    let p = GridPather::new(&walled, Heuristic::Euclidean);
    for algo in Algorithm::ALL {
        assert_eq!(Finder::new(&p).run(algo, s, g), Err(SearchError::NoPath), "{algo}");
    }
}

#[test]
fn unknown_endpoints_are_not_found() {
    let g = waypath_core::maps::lab();
    let outsider = waypath_core::maps::campus()
        .node("Sports Area")
        .unwrap();
    let a = g.node("A").unwrap();
    for algo in Algorithm::ALL {
        let err = Finder::new(&g).run(algo, a, outsider).unwrap_err();
        assert!(matches!(err, SearchError::NotFound { endpoint: "goal", .. }));
        let err = Finder::new(&g).run(algo, outsider, a).unwrap_err();
        assert!(matches!(err, SearchError::NotFound { endpoint: "start", .. }));
    }
}
