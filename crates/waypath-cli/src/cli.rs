//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use waypath_paths::{Algorithm, Heuristic};

/// Route finding over small graphs and grids.
#[derive(Parser, Debug)]
#[command(name = "waypath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log filter, e.g. `warn`, `debug` or `waypath_paths=trace`
    #[arg(long, global = true, env = "WAYPATH_LOG", default_value = "warn")]
    pub log_level: String,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a route between campus locations
    Campus(RouteArgs),
    /// Search the five-node lab graph (A to E)
    Lab(RouteArgs),
    /// Run Greedy and A* across the haunted house grid
    Haunted(HauntedArgs),
    /// Answer a JSON route request against the campus map
    Query {
        /// Request body; read from stdin when omitted
        body: Option<String>,
        /// Graph map file to serve instead of the campus
        #[arg(long)]
        map: Option<PathBuf>,
    },
    /// List the locations of a graph map
    Locations {
        /// Graph map file to list instead of the campus
        #[arg(long)]
        map: Option<PathBuf>,
    },
}

/// Endpoints and strategy for a graph search. Missing values are prompted for.
#[derive(Args, Debug, Default)]
pub struct RouteArgs {
    /// Start node label
    #[arg(long, short)]
    pub start: Option<String>,

    /// Goal node label
    #[arg(long, short)]
    pub goal: Option<String>,

    /// bfs, dfs, ucs, greedy or astar (menu digits 1-3 also work)
    #[arg(long, short)]
    pub algorithm: Option<Algorithm>,

    /// Graph map file (TOML) to search instead of the built-in one
    #[arg(long)]
    pub map: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct HauntedArgs {
    /// Run a single strategy instead of the default three
    #[arg(long, short)]
    pub algorithm: Option<Algorithm>,

    /// manhattan or euclidean
    #[arg(long)]
    pub heuristic: Option<Heuristic>,

    /// Grid map file (TOML) with S and G markers
    #[arg(long)]
    pub map: Option<PathBuf>,

    /// Draw each route over the grid
    #[arg(long)]
    pub show: bool,
}
