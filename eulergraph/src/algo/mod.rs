/// Algorithms related to Eulerian graphs, i.e. checking if a graph has an Eulerian path and constructing it.
pub mod eulerian;
/// Algorithms to create certain parameterisable graph classes, like random graphs or cycles.
pub mod predefined_graphs;
/// A trait for bidirected queues to abstract over the different implementations in the standard library.
pub mod queue;
/// Algorithms for graph traversals, i.e. preorder breadth or depth first search, and reachability markings.
pub mod traversal;
