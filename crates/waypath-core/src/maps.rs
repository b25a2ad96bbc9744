//! Built-in maps.
//!
//! Each constructor builds a fresh immutable structure; nothing is global.

use crate::graph::{Cost, Graph};
use crate::grid::{Grid, GridMap};

/// Campus walkways, weights in meters.
pub const CAMPUS_EDGES: [(&str, &str, Cost); 11] = [
    ("Main Gate", "ID gate", 100),
    ("ID gate", "AC1", 80),
    ("AC1", "Lawn area", 60),
    ("AC1", "Library", 90),
    ("AC1", "ACB1-LW", 70),
    ("ACB1-LW", "Cafe", 40),
    ("Lawn area", "Library", 50),
    ("Lawn area", "Ac-Block2", 75),
    ("Ac-Block2", "Hostel", 85),
    ("Ac-Block2", "Food Court", 65),
    ("Hostel", "Sports Area", 100),
];

/// The five-node lab graph.
pub const LAB_EDGES: [(&str, &str, Cost); 6] = [
    ("A", "B", 2),
    ("A", "C", 4),
    ("B", "D", 7),
    ("B", "E", 3),
    ("C", "D", 1),
    ("D", "E", 2),
];

/// The haunted house: `S` top-left, `G` on the right edge of the third row.
pub const HAUNTED_HOUSE: [&str; 6] = [
    "S01000",
    "101010",
    "00001G",
    "011000",
    "000110",
    "010000",
];

/// The campus map.
pub fn campus() -> Graph {
    Graph::from_edges(CAMPUS_EDGES)
}

/// The lab graph.
pub fn lab() -> Graph {
    Graph::from_edges(LAB_EDGES)
}

/// The haunted house grid with its start and goal.
pub fn haunted_house() -> GridMap {
    match Grid::parse(&HAUNTED_HOUSE) {
        Ok(m) => m,
        Err(e) => unreachable!("built-in haunted house layout is valid: {e}"),
    }
}
