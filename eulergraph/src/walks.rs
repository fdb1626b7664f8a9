use crate::interface::{DynamicGraph, GraphBase, ImmutableGraphContainer, MutableGraphContainer};
use std::iter::FromIterator;

/// A sequence of nodes in a graph, where each consecutive pair of nodes is connected by an edge.
/// The walk is represented as a vector of node indices.
#[derive(Clone)]
pub struct VecNodeWalk<Graph: GraphBase> {
    walk: Vec<Graph::NodeIndex>,
}

impl<Graph: GraphBase> VecNodeWalk<Graph> {
    /// Creates a new walk over the given node indices.
    pub fn new(walk: Vec<Graph::NodeIndex>) -> Self {
        Self { walk }
    }

    /// Returns an iterator over the nodes of this walk.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Graph::NodeIndex>> {
        self.walk.iter().copied()
    }

    /// Returns the length of this walk as its amount of nodes.
    pub fn len(&self) -> usize {
        self.walk.len()
    }

    /// Returns true if this walk contains no nodes.
    pub fn is_empty(&self) -> bool {
        self.walk.is_empty()
    }

    /// Returns the first node of this walk or `None`, if this walk is empty.
    pub fn first(&self) -> Option<Graph::NodeIndex> {
        self.walk.first().copied()
    }

    /// Returns the last node of this walk or `None` if this walk is empty.
    pub fn last(&self) -> Option<Graph::NodeIndex> {
        self.walk.last().copied()
    }

    /// Returns true if this walk is non-empty and starts and ends in the same node.
    pub fn is_closed(&self) -> bool {
        !self.is_empty() && self.first() == self.last()
    }

    /// Returns the nodes of this walk as slice.
    pub fn as_slice(&self) -> &[Graph::NodeIndex] {
        &self.walk
    }

    /// Returns this walk in reverse order.
    pub fn reversed(&self) -> Self {
        self.walk.iter().rev().copied().collect()
    }

    /// Consumes this walk and returns its nodes.
    pub fn into_vec(self) -> Vec<Graph::NodeIndex> {
        self.walk
    }
}

impl<Graph: DynamicGraph + Clone> VecNodeWalk<Graph> {
    /// Returns true if this walk uses every edge of the given graph exactly once, i.e. if it is an Eulerian path.
    ///
    /// The consecutive node pairs of the walk need to be exactly the multiset of edges of the graph.
    /// In an undirected graph, a pair may use an edge in either direction.
    /// For a graph without edges, the empty walk as well as any walk of a single node of the graph are Eulerian.
    pub fn is_eulerian_walk_of(&self, graph: &Graph) -> bool {
        if !self.iter().all(|node| graph.contains_node_index(node)) {
            return false;
        }
        if graph.has_no_edges() {
            return self.len() <= 1;
        }
        if self.len() != graph.edge_count() + 1 {
            return false;
        }

        let mut remaining_graph = graph.clone();
        for node_pair in self.walk.windows(2) {
            if !remaining_graph.remove_edge(node_pair[0], node_pair[1]) {
                return false;
            }
        }

        debug_assert!(remaining_graph.has_no_edges());
        true
    }
}

impl<Graph: GraphBase> From<Vec<Graph::NodeIndex>> for VecNodeWalk<Graph> {
    fn from(vec: Vec<Graph::NodeIndex>) -> Self {
        Self::new(vec)
    }
}

impl<'a, Graph: GraphBase> From<&'a [Graph::NodeIndex]> for VecNodeWalk<Graph> {
    fn from(slice: &'a [Graph::NodeIndex]) -> Self {
        Self::new(slice.to_vec())
    }
}

impl<Graph: GraphBase> FromIterator<Graph::NodeIndex> for VecNodeWalk<Graph> {
    fn from_iter<T: IntoIterator<Item = Graph::NodeIndex>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<Graph: GraphBase> IntoIterator for VecNodeWalk<Graph> {
    type Item = Graph::NodeIndex;
    type IntoIter = std::vec::IntoIter<Graph::NodeIndex>;

    fn into_iter(self) -> Self::IntoIter {
        self.walk.into_iter()
    }
}

impl<Graph: GraphBase> std::ops::Index<usize> for VecNodeWalk<Graph> {
    type Output = Graph::NodeIndex;

    fn index(&self, index: usize) -> &Self::Output {
        &self.walk[index]
    }
}

impl<Graph: GraphBase> PartialEq for VecNodeWalk<Graph> {
    fn eq(&self, rhs: &Self) -> bool {
        self.walk == rhs.walk
    }
}

impl<Graph: GraphBase> Eq for VecNodeWalk<Graph> {}

impl<Graph: GraphBase> std::fmt::Debug for VecNodeWalk<Graph> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.walk)
    }
}

/// Prints the nodes of the walk separated by single spaces.
impl<Graph: GraphBase> std::fmt::Display for VecNodeWalk<Graph> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut once = false;
        for node in &self.walk {
            if once {
                write!(f, " ")?;
            } else {
                once = true;
            }
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}
