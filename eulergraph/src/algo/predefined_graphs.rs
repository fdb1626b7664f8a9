use crate::interface::{Directed, DynamicGraph, Undirected};
use rand::Rng;

/// Adds `node_amount` nodes and `edge_amount` random edges between them to the given graph.
/// The endpoints of each edge are chosen uniformly at random among the added nodes, and they are always distinct.
/// Multiple edges between the same nodes may occur.
///
/// Panics if edges are requested but less than two nodes.
pub fn create_random_graph<Graph: DynamicGraph, Random: Rng>(
    graph: &mut Graph,
    node_amount: usize,
    edge_amount: usize,
    random: &mut Random,
) {
    assert!(
        edge_amount == 0 || node_amount >= 2,
        "Cannot add {} edges without self-loops to {} nodes",
        edge_amount,
        node_amount
    );

    let nodes: Vec<_> = (0..node_amount).map(|_| graph.add_node()).collect();
    let mut added_edges = 0;
    while added_edges < edge_amount {
        let n1 = nodes[random.gen_range(0..node_amount)];
        let n2 = nodes[random.gen_range(0..node_amount)];

        if n1 != n2 {
            graph.add_edge(n1, n2);
            added_edges += 1;
        }
    }
}

/// Adds a random undirected graph to the given graph.
/// See [create_random_graph].
pub fn create_random_undirected_graph<
    Graph: DynamicGraph<Direction = Undirected>,
    Random: Rng,
>(
    graph: &mut Graph,
    node_amount: usize,
    edge_amount: usize,
    random: &mut Random,
) {
    create_random_graph(graph, node_amount, edge_amount, random)
}

/// Adds a random directed graph to the given graph.
/// See [create_random_graph].
pub fn create_random_directed_graph<Graph: DynamicGraph<Direction = Directed>, Random: Rng>(
    graph: &mut Graph,
    node_amount: usize,
    edge_amount: usize,
    random: &mut Random,
) {
    create_random_graph(graph, node_amount, edge_amount, random)
}

/// Returns a new random undirected graph with the given amount of nodes and edges.
pub fn generate_undirected_graph<
    Graph: DynamicGraph<Direction = Undirected> + Default,
    Random: Rng,
>(
    node_amount: usize,
    edge_amount: usize,
    random: &mut Random,
) -> Graph {
    let mut graph = Graph::default();
    create_random_undirected_graph(&mut graph, node_amount, edge_amount, random);
    graph
}

/// Returns a new random directed graph with the given amount of nodes and edges.
pub fn generate_directed_graph<Graph: DynamicGraph<Direction = Directed> + Default, Random: Rng>(
    node_amount: usize,
    edge_amount: usize,
    random: &mut Random,
) -> Graph {
    let mut graph = Graph::default();
    create_random_directed_graph(&mut graph, node_amount, edge_amount, random);
    graph
}

/// Adds a cycle through `node_amount` new nodes to the given graph.
/// The nodes are connected in the order they are added, and the last node is connected to the first.
/// A single node gets a self-loop.
pub fn create_eulerian_circuit_graph<Graph: DynamicGraph>(
    graph: &mut Graph,
    node_amount: usize,
) -> Option<Graph::NodeIndex> {
    let nodes: Vec<_> = (0..node_amount).map(|_| graph.add_node()).collect();
    for (&n1, &n2) in nodes.iter().zip(nodes.iter().skip(1)) {
        graph.add_edge(n1, n2);
    }

    let first = *nodes.first()?;
    let last = *nodes.last()?;
    graph.add_edge(last, first);
    Some(first)
}
