//! Subcommand handlers.

use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use waypath_core::{Graph, GridMap, MapFile, MapSpec, maps};
use waypath_paths::contract;
use waypath_paths::{Algorithm, AstarPather, Finder, GridPather, Heuristic, Route, SearchError};

use crate::cli::{Cli, Commands, HauntedArgs, RouteArgs};
use crate::output::{self, GridReport};
use crate::prompt::Prompter;

/// The strategies compared on a grid when none is named.
const GRID_DEFAULTS: [(Algorithm, Heuristic); 3] = [
    (Algorithm::Greedy, Heuristic::Manhattan),
    (Algorithm::Astar, Heuristic::Manhattan),
    (Algorithm::Astar, Heuristic::Euclidean),
];

pub fn run(cli: Cli) -> Result<ExitCode> {
    let json = cli.json;
    match cli.command {
        Commands::Campus(args) => campus(args, json),
        Commands::Lab(args) => lab(args, json),
        Commands::Haunted(args) => haunted(args, json),
        Commands::Query { body, map } => query(body, map.as_deref()),
        Commands::Locations { map } => locations(map.as_deref(), json),
    }
}

fn campus(args: RouteArgs, json: bool) -> Result<ExitCode> {
    let graph = load_graph(args.map.as_deref(), maps::campus)?;
    let stdin = io::stdin();
    let mut prompt = Prompter::new(stdin.lock(), io::stdout());

    if args.start.is_none() || args.goal.is_none() {
        println!("Campus Pathfinding");
        println!("Available Locations:");
        for label in graph.labels() {
            println!("- {label}");
        }
    }
    let start = match args.start {
        Some(s) => s.trim().to_string(),
        None => prompt.ask("\nEnter START location: ")?,
    };
    let goal = match args.goal {
        Some(g) => g.trim().to_string(),
        None => prompt.ask("Enter GOAL location: ")?,
    };
    let (Some(from), Some(to)) = (graph.node(&start), graph.node(&goal)) else {
        bail!("Invalid location(s).");
    };

    let algorithm = match args.algorithm {
        Some(a) => a,
        None => {
            println!("\nChoose algorithm:\n1. BFS\n2. DFS\n3. UCS");
            let choice = prompt.ask("Enter choice (1/2/3): ")?;
            match choice.parse() {
                Ok(a) => a,
                Err(_) => bail!("Invalid choice."),
            }
        }
    };

    let route = search(&graph, algorithm, from, to)?;
    if json {
        let resp = output::graph_response(&graph, algorithm, route.as_ref());
        println!("{}", serde_json::to_string_pretty(&resp)?);
    } else {
        print!("\n{}", output::campus_report(&graph, algorithm, route.as_ref()));
    }
    Ok(ExitCode::SUCCESS)
}

fn lab(args: RouteArgs, json: bool) -> Result<ExitCode> {
    let graph = load_graph(args.map.as_deref(), maps::lab)?;
    // Built-in lab labels are single capitals; user maps keep their case.
    let builtin = args.map.is_none();
    let normalize = |s: String| {
        if builtin {
            s.trim().to_uppercase()
        } else {
            s.trim().to_string()
        }
    };
    let stdin = io::stdin();
    let mut prompt = Prompter::new(stdin.lock(), io::stdout());

    let start = normalize(match args.start {
        Some(s) => s,
        None => prompt.ask("Enter starting node: ")?,
    });
    let goal = normalize(match args.goal {
        Some(g) => g,
        None => prompt.ask("Enter target node: ")?,
    });
    let algorithm = match args.algorithm {
        Some(a) => a,
        None => match prompt.ask("Choose algorithm (DFS / BFS / UCS): ")?.parse() {
            Ok(a) => a,
            Err(_) => bail!("Invalid algorithm choice!"),
        },
    };

    let (Some(from), Some(to)) = (graph.node(&start), graph.node(&goal)) else {
        bail!("Invalid node(s): {start:?}, {goal:?}");
    };
    let route = search(&graph, algorithm, from, to)?;
    if json {
        let resp = output::graph_response(&graph, algorithm, route.as_ref());
        println!("{}", serde_json::to_string_pretty(&resp)?);
    } else {
        print!("{}", output::lab_report(&graph, route.as_ref()));
    }
    Ok(ExitCode::SUCCESS)
}

fn haunted(args: HauntedArgs, json: bool) -> Result<ExitCode> {
    let map = match args.map.as_deref() {
        None => maps::haunted_house(),
        Some(path) => load_grid(path)?,
    };
    let (Some(start), Some(goal)) = (map.start, map.goal) else {
        bail!("grid map needs both an S and a G marker");
    };

    let combos = match (args.algorithm, args.heuristic) {
        (None, None) => GRID_DEFAULTS.to_vec(),
        (a, h) => vec![(a.unwrap_or(Algorithm::Astar), h.unwrap_or_default())],
    };

    let mut reports = Vec::with_capacity(combos.len());
    for (algorithm, heuristic) in combos {
        let pather = GridPather::new(&map.grid, heuristic);
        let route = search(&pather, algorithm, start, goal)?;
        reports.push(GridReport::new(algorithm, heuristic, route));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(ExitCode::SUCCESS);
    }
    for report in &reports {
        println!("{report}");
        if args.show {
            let path = report.path.as_deref().unwrap_or_default();
            println!("{}", output::render(&map.grid, start, goal, path));
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn query(body: Option<String>, map: Option<&Path>) -> Result<ExitCode> {
    let graph = load_graph(map, maps::campus)?;
    let body = match body {
        Some(b) => b,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading request from stdin")?;
            buf
        }
    };
    let (status, reply) = contract::handle_json(&graph, &body);
    println!("{reply}");
    Ok(if status == 200 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn locations(map: Option<&Path>, json: bool) -> Result<ExitCode> {
    let graph = load_graph(map, maps::campus)?;
    if json {
        let labels: Vec<&str> = graph.labels().collect();
        println!("{}", serde_json::to_string_pretty(&labels)?);
    } else {
        for label in graph.labels() {
            println!("{label}");
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Run one search, turning an empty frontier into `None`.
fn search<P: AstarPather>(
    pather: &P,
    algorithm: Algorithm,
    start: P::Node,
    goal: P::Node,
) -> Result<Option<Route<P::Node>>> {
    match Finder::new(pather).run(algorithm, start, goal) {
        Ok(route) => Ok(Some(route)),
        Err(SearchError::NoPath) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn load_graph(path: Option<&Path>, builtin: fn() -> Graph) -> Result<Graph> {
    let Some(path) = path else {
        return Ok(builtin());
    };
    match MapFile::load(path).with_context(|| format!("loading {}", path.display()))? {
        MapSpec::Graph(graph) => Ok(graph),
        MapSpec::Grid(_) => bail!("{} defines a grid, expected a graph", path.display()),
    }
}

fn load_grid(path: &Path) -> Result<GridMap> {
    match MapFile::load(path).with_context(|| format!("loading {}", path.display()))? {
        MapSpec::Grid(map) => Ok(map),
        MapSpec::Graph(_) => bail!("{} defines a graph, expected a grid", path.display()),
    }
}
