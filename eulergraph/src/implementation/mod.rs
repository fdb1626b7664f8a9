/// A graph implementation based on ordered adjacency lists.
pub mod adjacency_graph;
/// Conversions from and to graphs of the `petgraph` crate.
pub mod petgraph_impl;

pub use adjacency_graph::{AdjacencyGraph, DirectedGraph, UndirectedGraph};
