//! The [`Graph`] type — a labelled, weighted, undirected graph.
//!
//! Nodes are interned: every distinct label gets a dense [`NodeId`] in order
//! of first appearance, and searches work on ids rather than strings.
//! Adjacency lists keep edge-list insertion order, which is the order
//! searches expand neighbours in.

use std::collections::HashMap;

/// Edge weight and accumulated path cost.
pub type Cost = u32;

/// Dense identifier of a node inside one [`Graph`].
///
/// Ids are only meaningful for the graph that produced them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the graph's node table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// An immutable weighted undirected graph with string labels.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    labels: Vec<String>,
    index: HashMap<String, NodeId>,
    adjacency: Vec<Vec<(NodeId, Cost)>>,
    edges: Vec<(NodeId, NodeId, Cost)>,
}

impl Graph {
    /// Start building a graph.
    pub fn builder() -> GraphBuilder {
        GraphBuilder::new()
    }

    /// Build a graph from an edge list of `(u, v, weight)` triples.
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S, Cost)>,
        S: Into<String>,
    {
        let mut b = GraphBuilder::new();
        for (u, v, w) in edges {
            b.add_edge(u, v, w);
        }
        b.build()
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of undirected edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Look up a node by label.
    pub fn node(&self, label: &str) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    /// Label of `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this graph.
    pub fn label(&self, id: NodeId) -> &str {
        &self.labels[id.0]
    }

    /// Whether `id` belongs to this graph.
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.labels.len()
    }

    /// Neighbours of `id` with edge weights, in declaration order.
    ///
    /// Unknown ids have no neighbours.
    pub fn neighbors(&self, id: NodeId) -> &[(NodeId, Cost)] {
        self.adjacency.get(id.0).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Weight of the first declared edge between `u` and `v`, if any.
    pub fn weight(&self, u: NodeId, v: NodeId) -> Option<Cost> {
        self.neighbors(u)
            .iter()
            .find(|&&(n, _)| n == v)
            .map(|&(_, w)| w)
    }

    /// All node ids in order of first appearance.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.labels.len()).map(NodeId)
    }

    /// All labels in order of first appearance.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }

    /// The edge list the graph was built from.
    pub fn edges(&self) -> &[(NodeId, NodeId, Cost)] {
        &self.edges
    }

    /// Render a path of ids as `A -> B -> C`.
    pub fn join_path(&self, path: &[NodeId]) -> String {
        path.iter()
            .map(|&id| self.label(id))
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    /// Return a copy of the graph with every edge touching `id` removed.
    ///
    /// The node itself is kept, so ids stay valid across both graphs.
    pub fn isolate(&self, id: NodeId) -> Graph {
        let mut b = GraphBuilder::new();
        for label in &self.labels {
            b.add_node(label.as_str());
        }
        for &(u, v, w) in &self.edges {
            if u != id && v != id {
                b.add_edge(self.label(u), self.label(v), w);
            }
        }
        b.build()
    }
}

/// Incremental constructor for [`Graph`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node, possibly without edges.
    pub fn node(mut self, label: impl Into<String>) -> Self {
        self.add_node(label);
        self
    }

    /// Declare an undirected edge.
    pub fn edge(mut self, u: impl Into<String>, v: impl Into<String>, weight: Cost) -> Self {
        self.add_edge(u, v, weight);
        self
    }

    /// Declare a node in place and return its id.
    pub fn add_node(&mut self, label: impl Into<String>) -> NodeId {
        let label = label.into();
        if let Some(&id) = self.graph.index.get(&label) {
            return id;
        }
        let id = NodeId(self.graph.labels.len());
        self.graph.index.insert(label.clone(), id);
        self.graph.labels.push(label);
        self.graph.adjacency.push(Vec::new());
        id
    }

    /// Declare an undirected edge in place.
    ///
    /// A self-loop is recorded once in the node's adjacency list.
    pub fn add_edge(&mut self, u: impl Into<String>, v: impl Into<String>, weight: Cost) {
        let u = self.add_node(u);
        let v = self.add_node(v);
        self.graph.adjacency[u.0].push((v, weight));
        if u != v {
            self.graph.adjacency[v.0].push((u, weight));
        }
        self.graph.edges.push((u, v, weight));
    }

    /// Finish building.
    pub fn build(self) -> Graph {
        log::debug!(
            "built graph with {} nodes and {} edges",
            self.graph.labels.len(),
            self.graph.edges.len()
        );
        self.graph
    }
}
