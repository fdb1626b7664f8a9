use crate::index::{GraphIndex, GraphIndices, NodeIndex};
use crate::interface::{
    Directed, EdgeDirection, GraphBase, ImmutableGraphContainer, MutableGraphContainer,
    NavigableGraph, Undirected,
};
use num_traits::PrimInt;
use std::hash::Hash;
use std::marker::PhantomData;

/// A directed graph stored as adjacency lists.
pub type DirectedGraph<IndexType = usize> = AdjacencyGraph<Directed, IndexType>;
/// An undirected graph stored as symmetric adjacency lists.
pub type UndirectedGraph<IndexType = usize> = AdjacencyGraph<Undirected, IndexType>;

/// A graph with a fixed set of nodes `0..node_count` and a multiset of edges, stored as one ordered adjacency list per node.
///
/// If `Direction` is [Undirected], then each edge `(u, v)` is stored in the lists of both `u` and `v`.
/// A self loop `(u, u)` is then stored twice in the list of `u`, such that it contributes two to the degree of `u`.
/// If `Direction` is [Directed], then each edge `(u, v)` is stored only in the list of `u`.
///
/// The graph is a plain value: cloning it deep-copies all adjacency lists.
#[derive(Clone, PartialEq, Eq)]
pub struct AdjacencyGraph<Direction, IndexType: PrimInt + Hash = usize> {
    adjacency_lists: Vec<Vec<NodeIndex<IndexType>>>,
    edge_count: usize,
    direction: PhantomData<Direction>,
}

impl<Direction: EdgeDirection, IndexType: PrimInt + Hash> AdjacencyGraph<Direction, IndexType> {
    /// Creates a graph without nodes.
    pub fn new() -> Self {
        Self::with_node_count(0)
    }

    /// Creates a graph with the given amount of nodes and no edges.
    pub fn with_node_count(node_count: usize) -> Self {
        Self {
            adjacency_lists: vec![Vec::new(); node_count],
            edge_count: 0,
            direction: Default::default(),
        }
    }

    /// Creates a graph with the given amount of nodes and the given edges, inserted in order.
    /// Panics if an edge has an endpoint that is not a node of the graph.
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> Self {
        let mut graph = Self::with_node_count(node_count);
        for &(from, to) in edges {
            graph.add_edge(from.into(), to.into());
        }
        graph
    }

    /// Returns the degree of a node in an undirected graph, or the outdegree in a directed graph.
    pub fn degree(&self, node_id: NodeIndex<IndexType>) -> usize {
        self.adjacency_lists[node_id.as_usize()].len()
    }
}

impl<Direction: EdgeDirection, IndexType: PrimInt + Hash> Default
    for AdjacencyGraph<Direction, IndexType>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Direction: EdgeDirection, IndexType: PrimInt + Hash> GraphBase
    for AdjacencyGraph<Direction, IndexType>
{
    type NodeIndex = NodeIndex<IndexType>;
    type Direction = Direction;
}

impl<Direction: EdgeDirection, IndexType: PrimInt + Hash> ImmutableGraphContainer
    for AdjacencyGraph<Direction, IndexType>
{
    fn node_indices(&self) -> GraphIndices<Self::NodeIndex> {
        GraphIndices::from((0, self.node_count()))
    }

    fn node_count(&self) -> usize {
        self.adjacency_lists.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn edge_count_between(&self, from: Self::NodeIndex, to: Self::NodeIndex) -> usize {
        debug_assert!(self.contains_node_index(from) && self.contains_node_index(to));
        let count = self.adjacency_lists[from.as_usize()]
            .iter()
            .filter(|&&neighbor| neighbor == to)
            .count();

        if !Direction::IS_DIRECTED && from == to {
            count / 2
        } else {
            count
        }
    }

    fn has_no_edges(&self) -> bool {
        debug_assert_eq!(
            self.edge_count == 0,
            self.adjacency_lists.iter().all(Vec::is_empty)
        );
        self.edge_count == 0
    }
}

impl<Direction: EdgeDirection, IndexType: PrimInt + Hash> MutableGraphContainer
    for AdjacencyGraph<Direction, IndexType>
{
    fn add_node(&mut self) -> Self::NodeIndex {
        self.adjacency_lists.push(Vec::new());
        (self.adjacency_lists.len() - 1).into()
    }

    fn add_edge(&mut self, from: Self::NodeIndex, to: Self::NodeIndex) {
        assert!(
            self.contains_node_index(from) && self.contains_node_index(to),
            "Edge ({}, {}) has an endpoint outside of the graph with {} nodes",
            from,
            to,
            self.node_count()
        );
        self.adjacency_lists[from.as_usize()].push(to);
        if !Direction::IS_DIRECTED {
            self.adjacency_lists[to.as_usize()].push(from);
        }
        self.edge_count += 1;
    }

    fn remove_edge(&mut self, from: Self::NodeIndex, to: Self::NodeIndex) -> bool {
        debug_assert!(self.contains_node_index(from) && self.contains_node_index(to));
        if !remove_first_occurrence(&mut self.adjacency_lists[from.as_usize()], to) {
            return false;
        }

        if !Direction::IS_DIRECTED {
            // For a self loop this removes the second copy from the same list.
            let removed_mirror =
                remove_first_occurrence(&mut self.adjacency_lists[to.as_usize()], from);
            debug_assert!(
                removed_mirror,
                "Undirected edge ({}, {}) is missing its mirror",
                from, to
            );
        }

        self.edge_count -= 1;
        true
    }

    fn clear(&mut self) {
        self.adjacency_lists.clear();
        self.edge_count = 0;
    }
}

impl<Direction: EdgeDirection, IndexType: PrimInt + Hash> NavigableGraph
    for AdjacencyGraph<Direction, IndexType>
{
    fn out_neighbors(&self, node_id: Self::NodeIndex) -> &[Self::NodeIndex] {
        &self.adjacency_lists[node_id.as_usize()]
    }

    fn in_degree(&self, node_id: Self::NodeIndex) -> usize {
        if Direction::IS_DIRECTED {
            self.adjacency_lists
                .iter()
                .flatten()
                .filter(|&&neighbor| neighbor == node_id)
                .count()
        } else {
            self.degree(node_id)
        }
    }
}

impl<Direction: EdgeDirection, IndexType: PrimInt + Hash> std::ops::Index<NodeIndex<IndexType>>
    for AdjacencyGraph<Direction, IndexType>
{
    type Output = [NodeIndex<IndexType>];

    fn index(&self, node_id: NodeIndex<IndexType>) -> &Self::Output {
        &self.adjacency_lists[node_id.as_usize()]
    }
}

impl<Direction: EdgeDirection, IndexType: PrimInt + Hash> std::fmt::Debug
    for AdjacencyGraph<Direction, IndexType>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdjacencyGraph")
            .field("direction", &Direction::default())
            .field("adjacency_lists", &self.adjacency_lists)
            .finish()
    }
}

/// Prints one line per node of the form `<node>: <neighbor> <neighbor> ...`.
impl<Direction: EdgeDirection, IndexType: PrimInt + Hash> std::fmt::Display
    for AdjacencyGraph<Direction, IndexType>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (node, neighbors) in self.adjacency_lists.iter().enumerate() {
            write!(f, "{}:", node)?;
            for neighbor in neighbors {
                write!(f, " {}", neighbor)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn remove_first_occurrence<T: Eq>(list: &mut Vec<T>, element: T) -> bool {
    if let Some(position) = list.iter().position(|entry| *entry == element) {
        // Keep the order of the remaining neighbors, it determines the constructed walks.
        list.remove(position);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::{DirectedGraph, UndirectedGraph};
    use crate::index::NodeIndex;
    use crate::interface::{
        Edge, ImmutableGraphContainer, MutableGraphContainer, NavigableGraph,
    };

    fn n(index: usize) -> NodeIndex<usize> {
        index.into()
    }

    #[test]
    fn test_undirected_edges_are_symmetric() {
        let mut graph = UndirectedGraph::<u32>::new();
        let n0 = graph.add_node();
        let n1 = graph.add_node();
        let n2 = graph.add_node();
        graph.add_edge(n0, n1);
        graph.add_edge(n1, n2);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(&graph[n0], &[n1]);
        assert_eq!(&graph[n1], &[n0, n2]);
        assert_eq!(&graph[n2], &[n1]);
        assert!(graph.contains_edge_between(n2, n1));
        assert_eq!(graph.in_degree(n1), 2);
    }

    #[test]
    fn test_directed_edges_are_stored_at_tail() {
        let graph = DirectedGraph::<usize>::from_edges(3, &[(0, 1), (1, 2), (2, 0), (0, 2)]);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.out_neighbors(n(0)), &[n(1), n(2)]);
        assert!(!graph.contains_edge_between(n(1), n(0)));
        assert_eq!(graph.in_degree(n(2)), 2);
        assert_eq!(graph.in_degrees(), vec![1, 1, 2]);
    }

    #[test]
    fn test_remove_edge_removes_single_parallel_edge() {
        let mut graph = UndirectedGraph::<usize>::from_edges(2, &[(0, 1), (0, 1), (1, 0)]);
        assert_eq!(graph.edge_count_between(n(0), n(1)), 3);

        assert!(graph.remove_edge(n(1), n(0)));
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edge_count_between(n(0), n(1)), 2);
        assert_eq!(graph.out_degree(n(0)), 2);
        assert_eq!(graph.out_degree(n(1)), 2);

        let mut directed = DirectedGraph::<usize>::from_edges(2, &[(0, 1), (0, 1)]);
        assert!(!directed.remove_edge(n(1), n(0)));
        assert!(directed.remove_edge(n(0), n(1)));
        assert_eq!(directed.edge_count_between(n(0), n(1)), 1);
    }

    #[test]
    fn test_undirected_self_loop() {
        let mut graph = UndirectedGraph::<usize>::from_edges(2, &[(0, 0), (0, 1)]);
        assert_eq!(graph.degree(n(0)), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edge_count_between(n(0), n(0)), 1);
        assert_eq!(
            graph.edges(),
            vec![
                Edge {
                    from_node: n(0),
                    to_node: n(0),
                },
                Edge {
                    from_node: n(0),
                    to_node: n(1),
                }
            ]
        );

        assert!(graph.remove_edge(n(0), n(0)));
        assert_eq!(graph.degree(n(0)), 1);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_has_no_edges_and_clone() {
        let mut graph = UndirectedGraph::<usize>::from_edges(3, &[(0, 1)]);
        let original = graph.clone();
        assert!(!graph.has_no_edges());
        assert!(graph.remove_edge(n(0), n(1)));
        assert!(graph.has_no_edges());
        assert!(!graph.is_empty());
        assert_eq!(original.edge_count(), 1);

        graph.clear();
        assert!(graph.is_empty());
    }

    #[test]
    fn test_display() {
        let graph = DirectedGraph::<usize>::from_edges(3, &[(0, 1), (0, 2), (2, 0)]);
        assert_eq!(graph.to_string(), "0: 1 2\n1:\n2: 0\n");
    }
}
