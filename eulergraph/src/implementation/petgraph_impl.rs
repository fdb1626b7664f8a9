use crate::implementation::adjacency_graph::{DirectedGraph, UndirectedGraph};
use crate::index::GraphIndex;
use crate::interface::{ImmutableGraphContainer, MutableGraphContainer, NavigableGraph};
use num_traits::PrimInt;
use petgraph::graph::{DiGraph, UnGraph};
use petgraph::visit::EdgeRef;
use std::hash::Hash;

/// Copies the topology of a petgraph `DiGraph`, keeping node indices and parallel edges.
/// Node and edge data are dropped.
impl<NodeData, EdgeData, PetgraphIndexType, IndexType> From<&DiGraph<NodeData, EdgeData, PetgraphIndexType>>
    for DirectedGraph<IndexType>
where
    PetgraphIndexType: petgraph::graph::IndexType,
    IndexType: PrimInt + Hash,
{
    fn from(source: &DiGraph<NodeData, EdgeData, PetgraphIndexType>) -> Self {
        let mut graph = Self::with_node_count(source.node_count());
        for edge in source.edge_references() {
            graph.add_edge(edge.source().index().into(), edge.target().index().into());
        }
        graph
    }
}

/// Copies the topology of a petgraph `UnGraph`, keeping node indices and parallel edges.
/// Node and edge data are dropped.
impl<NodeData, EdgeData, PetgraphIndexType, IndexType> From<&UnGraph<NodeData, EdgeData, PetgraphIndexType>>
    for UndirectedGraph<IndexType>
where
    PetgraphIndexType: petgraph::graph::IndexType,
    IndexType: PrimInt + Hash,
{
    fn from(source: &UnGraph<NodeData, EdgeData, PetgraphIndexType>) -> Self {
        let mut graph = Self::with_node_count(source.node_count());
        for edge in source.edge_references() {
            graph.add_edge(edge.source().index().into(), edge.target().index().into());
        }
        graph
    }
}

impl<IndexType: PrimInt + Hash> DirectedGraph<IndexType> {
    /// Copies the topology of this graph into a petgraph `DiGraph` with empty node and edge data.
    pub fn to_petgraph(&self) -> DiGraph<(), ()> {
        let mut result = DiGraph::with_capacity(self.node_count(), self.edge_count());
        for _ in self.node_indices() {
            result.add_node(());
        }
        for edge in self.edges() {
            result.add_edge(
                petgraph::graph::NodeIndex::new(edge.from_node.as_usize()),
                petgraph::graph::NodeIndex::new(edge.to_node.as_usize()),
                (),
            );
        }
        result
    }
}

impl<IndexType: PrimInt + Hash> UndirectedGraph<IndexType> {
    /// Copies the topology of this graph into a petgraph `UnGraph` with empty node and edge data.
    pub fn to_petgraph(&self) -> UnGraph<(), ()> {
        let mut result = UnGraph::with_capacity(self.node_count(), self.edge_count());
        for _ in self.node_indices() {
            result.add_node(());
        }
        for edge in self.edges() {
            result.add_edge(
                petgraph::graph::NodeIndex::new(edge.from_node.as_usize()),
                petgraph::graph::NodeIndex::new(edge.to_node.as_usize()),
                (),
            );
        }
        result
    }
}
