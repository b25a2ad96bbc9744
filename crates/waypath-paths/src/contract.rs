//! JSON request/response contract for route lookups over a labelled graph.
//!
//! A [`PathRequest`] names a start, a goal and an algorithm. [`handle`]
//! validates it and answers with a [`PathResponse`], or a [`ContractError`]
//! for malformed requests. A search that simply finds nothing is not an
//! error: it is a response with `success: false`.
//!
//! The `algorithm` field takes anything [`Algorithm`] parses: the names
//! `bfs`, `dfs` and `ucs` in any case, the menu digits `1`-`3`, and the
//! informed strategies `greedy` and `astar` (or `a*`).

use serde::{Deserialize, Serialize};
use thiserror::Error;
use waypath_core::{Cost, Graph, NodeId};

use crate::finder::{Algorithm, Finder, Route};
use crate::SearchError;

/// Incoming request. Every field is optional on the wire so that missing
/// parameters can be reported as such rather than as a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathRequest {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub algorithm: Option<String>,
}

/// Outcome of a well-formed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResponse {
    pub path: Vec<String>,
    pub cost: Option<Cost>,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PathResponse {
    /// A successful response carrying `route` as labels.
    ///
    /// The cost is kept only for strategies that minimise it (see
    /// [`Algorithm::reports_cost`]).
    pub fn found(graph: &Graph, algorithm: Algorithm, route: &Route<NodeId>) -> Self {
        Self {
            path: route
                .path
                .iter()
                .map(|&id| graph.label(id).to_owned())
                .collect(),
            cost: algorithm.reports_cost().then_some(route.cost),
            success: true,
            error: None,
        }
    }

    /// An unsuccessful response describing `err`.
    pub fn failed(err: &SearchError) -> Self {
        Self {
            path: Vec::new(),
            cost: None,
            success: false,
            error: Some(err.to_string()),
        }
    }
}

/// A request that could not be served.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    #[error("Missing parameters")]
    MissingParameters,
    #[error("Invalid locations")]
    InvalidLocations,
    #[error("Invalid algorithm")]
    InvalidAlgorithm,
}

/// Body sent back alongside a [`ContractError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ContractError {
    /// HTTP-style status code for the error.
    pub fn status(&self) -> u16 {
        400
    }

    /// The JSON body describing the error.
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_string(),
        }
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Serve one request against `graph`.
pub fn handle(graph: &Graph, req: &PathRequest) -> Result<PathResponse, ContractError> {
    let (Some(start), Some(goal), Some(algorithm)) = (
        present(&req.start),
        present(&req.goal),
        present(&req.algorithm),
    ) else {
        return Err(ContractError::MissingParameters);
    };

    let (Some(from), Some(to)) = (graph.node(start), graph.node(goal)) else {
        return Err(ContractError::InvalidLocations);
    };
    let algorithm: Algorithm = algorithm
        .parse()
        .map_err(|_| ContractError::InvalidAlgorithm)?;

    log::info!("route request {start:?} -> {goal:?} via {algorithm}");
    match Finder::new(graph).run(algorithm, from, to) {
        Ok(route) => Ok(PathResponse::found(graph, algorithm, &route)),
        Err(e) => {
            if !matches!(e, SearchError::NoPath) {
                log::error!("route request failed: {e}");
            }
            Ok(PathResponse::failed(&e))
        }
    }
}

/// Parse a JSON request, serve it and render the JSON reply together with
/// its status code.
pub fn handle_json(graph: &Graph, body: &str) -> (u16, String) {
    let req: PathRequest = match serde_json::from_str(body) {
        Ok(req) => req,
        Err(e) => {
            log::warn!("unparseable route request: {e}");
            PathRequest::default()
        }
    };
    let rendered = match handle(graph, &req) {
        Ok(resp) => serde_json::to_string(&resp).map(|s| (200, s)),
        Err(e) => serde_json::to_string(&e.body()).map(|s| (e.status(), s)),
    };
    rendered.unwrap_or_else(|e| (500, format!("{{\"error\":\"{e}\"}}")))
}
