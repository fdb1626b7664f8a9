//! The graph traits.
//!
//! The traits are roughly split up by different access types:
//!  - immutable reference (`ImmutableGraphContainer`)
//!  - mutable reference (`MutableGraphContainer`)
//!  - immutable reference into the adjacency lists (`NavigableGraph`)
//!
//! Whether a graph is directed or undirected is encoded in its `Direction` type, such that algorithms for only one of the two kinds can require it in their type bounds.

use crate::index::{GraphIndex, GraphIndices};

/// The direction of the edges of a graph, implemented by the marker types [Directed] and [Undirected].
pub trait EdgeDirection: std::fmt::Debug + Default + Clone + Copy + Eq {
    /// True if edges are stored only in the adjacency list of their tail.
    const IS_DIRECTED: bool;
}

/// Marker type for graphs whose edges have a tail and a head.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Directed;

/// Marker type for graphs whose edges are stored symmetrically in the adjacency lists of both endpoints.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Undirected;

impl EdgeDirection for Directed {
    const IS_DIRECTED: bool = true;
}

impl EdgeDirection for Undirected {
    const IS_DIRECTED: bool = false;
}

/// Contains the associated types of a graph.
pub trait GraphBase {
    /// The index type used for nodes.
    type NodeIndex: GraphIndex;
    /// The direction of the edges in this graph.
    type Direction: EdgeDirection;
}

/// A container that contains a set of nodes and edges.
///
/// Graphs that implement this trait must have their nodes indexed consecutively.
pub trait ImmutableGraphContainer: GraphBase {
    /// Returns an iterator over the node indices in this graph.
    fn node_indices(&self) -> GraphIndices<Self::NodeIndex>;

    /// Returns the amount of nodes in this graph.
    fn node_count(&self) -> usize;

    /// Returns the amount of edges in this graph.
    /// An undirected edge is counted once, even though it appears in the adjacency lists of both of its endpoints.
    fn edge_count(&self) -> usize;

    /// Returns true if this graph contains the given node index.
    fn contains_node_index(&self, node_id: Self::NodeIndex) -> bool {
        node_id.as_usize() < self.node_count()
    }

    /// Returns the amount of edges `(from, to)`.
    fn edge_count_between(&self, from: Self::NodeIndex, to: Self::NodeIndex) -> usize;

    /// Returns true if the graph contains an edge `(from, to)`.
    fn contains_edge_between(&self, from: Self::NodeIndex, to: Self::NodeIndex) -> bool {
        self.edge_count_between(from, to) > 0
    }

    /// Returns true if the graph is empty, i.e. contains no nodes or edges.
    fn is_empty(&self) -> bool {
        // Zero nodes must imply zero edges.
        debug_assert!(self.node_count() != 0 || self.edge_count() == 0);
        self.node_count() == 0
    }

    /// Returns true if no node of the graph has an incident edge.
    fn has_no_edges(&self) -> bool {
        self.edge_count() == 0
    }
}

/// A container that allows adding nodes as well as adding and removing edges.
pub trait MutableGraphContainer: ImmutableGraphContainer {
    /// Adds a new node to the graph.
    fn add_node(&mut self) -> Self::NodeIndex;

    /// Adds a new edge `(from, to)` to the graph.
    /// Parallel edges are allowed.
    fn add_edge(&mut self, from: Self::NodeIndex, to: Self::NodeIndex);

    /// Removes a single edge `(from, to)` from the graph, even if there are multiple.
    /// Returns false if there was no such edge.
    fn remove_edge(&mut self, from: Self::NodeIndex, to: Self::NodeIndex) -> bool;

    /// Removes all nodes and edges from the graph.
    fn clear(&mut self);
}

/// A graph that can be navigated, i.e. that can iterate the neighbors of its nodes.
pub trait NavigableGraph: ImmutableGraphContainer {
    /// Returns the adjacency list of the given node.
    /// In an undirected graph, a self loop appears twice in this list.
    fn out_neighbors(&self, node_id: Self::NodeIndex) -> &[Self::NodeIndex];

    /// Returns the amount of outgoing edges from a node.
    /// In an undirected graph, this is the degree of the node.
    fn out_degree(&self, node_id: Self::NodeIndex) -> usize {
        self.out_neighbors(node_id).len()
    }

    /// Returns the amount of incoming edges to a node.
    /// This scans all adjacency lists, use [in_degrees](NavigableGraph::in_degrees) to get the indegrees of all nodes at once.
    fn in_degree(&self, node_id: Self::NodeIndex) -> usize {
        self.node_indices()
            .map(|node| {
                self.out_neighbors(node)
                    .iter()
                    .filter(|&&neighbor| neighbor == node_id)
                    .count()
            })
            .sum()
    }

    /// Returns the indegrees of all nodes, indexed by node.
    fn in_degrees(&self) -> Vec<usize> {
        let mut in_degrees = vec![0; self.node_count()];
        for node in self.node_indices() {
            for &neighbor in self.out_neighbors(node) {
                in_degrees[neighbor.as_usize()] += 1;
            }
        }
        in_degrees
    }

    /// Returns the first node in the adjacency list of the given node, or `None` if the node has no outgoing edges.
    fn first_out_neighbor(&self, node_id: Self::NodeIndex) -> Option<Self::NodeIndex> {
        self.out_neighbors(node_id).first().copied()
    }

    /// Returns all edges of the graph, ordered by their tail.
    /// Undirected edges are returned once, with `from_node <= to_node`.
    fn edges(&self) -> Vec<Edge<Self::NodeIndex>> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for from_node in self.node_indices() {
            let mut self_loop_entries = 0;
            for &to_node in self.out_neighbors(from_node) {
                if <Self::Direction as EdgeDirection>::IS_DIRECTED || from_node < to_node {
                    edges.push(Edge { from_node, to_node });
                } else if from_node == to_node {
                    // Undirected self loops are stored twice.
                    self_loop_entries += 1;
                    if self_loop_entries % 2 == 0 {
                        edges.push(Edge { from_node, to_node });
                    }
                }
            }
        }
        edges
    }
}

/// A graph implementing all common graph traits that do not require mutable access.
/// This is a useful shortcut for generic type bounds when the graph should not be mutated.
pub trait StaticGraph: ImmutableGraphContainer + NavigableGraph {}
impl<T: ImmutableGraphContainer + NavigableGraph> StaticGraph for T {}

/// A graph implementing all common graph traits, including those requiring mutable access.
/// This is a useful shortcut for generic type bounds when the graph should be mutated.
pub trait DynamicGraph: StaticGraph + MutableGraphContainer {}
impl<T: StaticGraph + MutableGraphContainer> DynamicGraph for T {}

/// An edge represented as a pair of node indices.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub struct Edge<NodeIndex> {
    /// The tail of this edge.
    pub from_node: NodeIndex,
    /// The head of this edge.
    pub to_node: NodeIndex,
}
