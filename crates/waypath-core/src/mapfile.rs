//! TOML map files.
//!
//! A map file defines either a graph or a grid:
//!
//! ```toml
//! [graph]
//! nodes = ["Annex"]            # optional, for nodes without edges
//! edges = [["A", "B", 2], ["B", "C", 5]]
//! ```
//!
//! ```toml
//! [grid]
//! rows = ["S010", "000G"]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::MapError;
use crate::graph::{Cost, Graph, GraphBuilder};
use crate::grid::{Grid, GridMap};

/// On-disk layout of a map file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MapFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<GraphSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridSection>,
}

/// `[graph]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphSection {
    #[serde(default)]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<(String, String, Cost)>,
}

/// `[grid]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridSection {
    pub rows: Vec<String>,
}

/// A map loaded from a file, ready to search.
#[derive(Debug, Clone)]
pub enum MapSpec {
    Graph(Graph),
    Grid(GridMap),
}

impl MapFile {
    /// Read and build the map at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<MapSpec, MapError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loading map file {}", path.display());
        Self::parse(&text, path)
    }

    /// Build a map from TOML text. `origin` only labels errors.
    pub fn parse(text: &str, origin: impl Into<PathBuf>) -> Result<MapSpec, MapError> {
        let file: MapFile = toml::from_str(text).map_err(|source| MapError::Toml {
            path: origin.into(),
            source,
        })?;
        file.build()
    }

    /// Turn the parsed sections into a searchable map.
    pub fn build(self) -> Result<MapSpec, MapError> {
        match (self.graph, self.grid) {
            (Some(section), None) => {
                let mut b = GraphBuilder::new();
                for node in section.nodes {
                    b.add_node(node);
                }
                for (u, v, w) in section.edges {
                    b.add_edge(u, v, w);
                }
                Ok(MapSpec::Graph(b.build()))
            }
            (None, Some(section)) => Grid::parse(&section.rows).map(MapSpec::Grid),
            _ => Err(MapError::AmbiguousMap),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;

    #[test]
    fn graph_section_builds_graph() {
        let text = r#"
            [graph]
            nodes = ["Annex"]
            edges = [["A", "B", 2], ["B", "C", 5]]
        "#;
        let MapSpec::Graph(g) = MapFile::parse(text, "inline.toml").unwrap() else {
            panic!("expected a graph");
        };
        assert_eq!(g.labels().collect::<Vec<_>>(), ["Annex", "A", "B", "C"]);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn grid_section_builds_grid() {
        let text = r#"
            [grid]
            rows = ["S01", "00G"]
        "#;
        let MapSpec::Grid(m) = MapFile::parse(text, "inline.toml").unwrap() else {
            panic!("expected a grid");
        };
        assert_eq!(m.start, Some(Point::new(0, 0)));
        assert_eq!(m.goal, Some(Point::new(2, 1)));
    }

    #[test]
    fn both_or_neither_section_is_rejected() {
        assert!(matches!(
            MapFile::parse("", "empty.toml").unwrap_err(),
            MapError::AmbiguousMap
        ));
        let both = "[graph]\nedges = []\n[grid]\nrows = [\"0\"]\n";
        assert!(matches!(
            MapFile::parse(both, "both.toml").unwrap_err(),
            MapError::AmbiguousMap
        ));
    }

    #[test]
    fn negative_weight_is_a_toml_error() {
        let text = "[graph]\nedges = [[\"A\", \"B\", -3]]\n";
        assert!(matches!(
            MapFile::parse(text, "neg.toml").unwrap_err(),
            MapError::Toml { .. }
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = MapFile::load("/nonexistent/waypath/map.toml").unwrap_err();
        assert!(matches!(err, MapError::Io { .. }));
    }

    #[test]
    fn map_file_json_round_trip() {
        let file = MapFile {
            graph: Some(GraphSection {
                nodes: vec![],
                edges: vec![("A".into(), "B".into(), 4)],
            }),
            grid: None,
        };
        let json = serde_json::to_string(&file).unwrap();
        let back: MapFile = serde_json::from_str(&json).unwrap();
        assert_eq!(file, back);
    }
}
