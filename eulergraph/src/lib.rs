//! A crate to decide if a graph has an Eulerian path, and to construct one if it does.
//!
//! Graphs are stored as adjacency lists, either directed or undirected (see [AdjacencyGraph](implementation::adjacency_graph::AdjacencyGraph)).
//! The algorithms are written against the traits in [interface], and live in [algo].
#![warn(missing_docs)]
#![recursion_limit = "1024"]
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;

/// Graph algorithms, i.e. traversals, Eulerian path checks and constructions as well as random graph generators.
pub mod algo;
/// The graph implementations of this crate.
pub mod implementation;
/// Strongly typed node indices.
pub mod index;
/// The graph traits.
pub mod interface;
/// Reading and writing graphs in a simple text format.
pub mod io;
/// Walks in a graph, i.e. sequences of nodes.
pub mod walks;

pub use petgraph;
