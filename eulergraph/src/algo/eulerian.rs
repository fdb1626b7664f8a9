use crate::algo::queue::BidirectedQueue;
use crate::algo::traversal::mark_reachable_nodes;
use crate::index::GraphIndex;
use crate::interface::{Directed, DynamicGraph, EdgeDirection, StaticGraph, Undirected};
use crate::walks::VecNodeWalk;
use std::collections::VecDeque;

//////////////////////////////
////// FEASIBILITY CHECK /////
//////////////////////////////

/// Returns true if the undirected graph has an Eulerian path, i.e. a walk that uses every edge exactly once.
///
/// This is the case if the graph has no edges, or if it has zero or two nodes of odd degree
/// and all nodes with incident edges are connected.
pub fn has_undirected_eulerian_path<Graph: StaticGraph<Direction = Undirected>>(
    graph: &Graph,
) -> bool {
    if graph.has_no_edges() {
        return true;
    }

    let odd_degree_node_count = graph
        .node_indices()
        .filter(|&node| graph.out_degree(node) % 2 == 1)
        .count();
    if odd_degree_node_count > 2 {
        debug!(
            "Graph has {} nodes of odd degree, but an Eulerian path allows at most two",
            odd_degree_node_count
        );
        return false;
    }

    let seed = match find_first_node_with_out_neighbors(graph) {
        Some(seed) => seed,
        None => return true,
    };
    reaches_all_nodes_with_edges(graph, seed, |node| graph.out_degree(node) > 0)
}

/// Returns true if the directed graph has an Eulerian path, i.e. a walk that uses every edge exactly once in its direction.
///
/// This is the case if the graph has no edges, or if
///  - every node has `|outdegree - indegree| <= 1`,
///  - at most one node has `outdegree - indegree = 1` and at most one has `indegree - outdegree = 1`, and
///  - all nodes with incident edges are reachable from the node where an Eulerian path would start.
///
/// Since the differences of all nodes sum up to zero, the two imbalanced nodes always have opposite signs.
pub fn has_directed_eulerian_path<Graph: StaticGraph<Direction = Directed>>(graph: &Graph) -> bool {
    if graph.has_no_edges() {
        return true;
    }

    let in_degrees = graph.in_degrees();
    let mut surplus_out_node_count = 0;
    let mut surplus_in_node_count = 0;
    for node in graph.node_indices() {
        let difference = graph.out_degree(node) as isize - in_degrees[node.as_usize()] as isize;
        match difference {
            0 => {}
            1 => surplus_out_node_count += 1,
            -1 => surplus_in_node_count += 1,
            _ => {
                debug!(
                    "Node {} has outdegree - indegree = {}, but an Eulerian path allows at most a difference of one",
                    node, difference
                );
                return false;
            }
        }
    }
    if surplus_out_node_count > 1 || surplus_in_node_count > 1 {
        debug!(
            "Graph has {} nodes with surplus outgoing edges and {} nodes with surplus incoming edges, but an Eulerian path allows at most one of each",
            surplus_out_node_count, surplus_in_node_count
        );
        return false;
    }
    debug_assert_eq!(surplus_out_node_count, surplus_in_node_count);

    let seed = match select_directed_start(graph, &in_degrees) {
        Some(seed) => seed,
        None => return true,
    };
    reaches_all_nodes_with_edges(graph, seed, |node| {
        graph.out_degree(node) > 0 || in_degrees[node.as_usize()] > 0
    })
}

/// Returns true if all nodes selected by `has_edges` are reachable from `seed`.
fn reaches_all_nodes_with_edges<Graph: StaticGraph, HasEdges: Fn(Graph::NodeIndex) -> bool>(
    graph: &Graph,
    seed: Graph::NodeIndex,
    has_edges: HasEdges,
) -> bool {
    let mut visited = vec![false; graph.node_count()];
    mark_reachable_nodes(graph, &mut visited, seed);

    for node in graph.node_indices() {
        if has_edges(node) && !visited[node.as_usize()] {
            debug!(
                "Node {} has edges but is not reachable from node {}",
                node, seed
            );
            return false;
        }
    }

    true
}

/// Returns true if the directed graph decomposes into Eulerian cycles, i.e. if each node has indegree == outdegree.
pub fn decomposes_into_eulerian_cycles<Graph: StaticGraph<Direction = Directed>>(
    graph: &Graph,
) -> bool {
    let in_degrees = graph.in_degrees();
    graph
        .node_indices()
        .all(|node| graph.out_degree(node) == in_degrees[node.as_usize()])
}

/// Compute a vector of nodes that has indegree != outdegree.
pub fn find_non_eulerian_nodes<Graph: StaticGraph<Direction = Directed>>(
    graph: &Graph,
) -> Vec<Graph::NodeIndex> {
    find_non_eulerian_nodes_with_differences(graph)
        .into_iter()
        .map(|(node, _)| node)
        .collect()
}

/// Compute a vector of tuples of nodes and outdegree - indegree that has indegree != outdegree.
pub fn find_non_eulerian_nodes_with_differences<Graph: StaticGraph<Direction = Directed>>(
    graph: &Graph,
) -> Vec<(Graph::NodeIndex, isize)> {
    let in_degrees = graph.in_degrees();
    let mut node_indices_and_differences = Vec::new();
    for node_index in graph.node_indices() {
        let difference =
            graph.out_degree(node_index) as isize - in_degrees[node_index.as_usize()] as isize;
        if difference != 0 {
            node_indices_and_differences.push((node_index, difference));
        }
    }
    node_indices_and_differences
}

/// Compute a vector of nodes of odd degree in an undirected graph.
pub fn find_odd_degree_nodes<Graph: StaticGraph<Direction = Undirected>>(
    graph: &Graph,
) -> Vec<Graph::NodeIndex> {
    graph
        .node_indices()
        .filter(|&node| graph.out_degree(node) % 2 == 1)
        .collect()
}

/////////////////////////////
////// START SELECTION //////
/////////////////////////////

fn find_first_node_with_out_neighbors<Graph: StaticGraph>(
    graph: &Graph,
) -> Option<Graph::NodeIndex> {
    graph
        .node_indices()
        .find(|&node| graph.out_degree(node) > 0)
}

/// Returns the node where the Eulerian path of an undirected graph is constructed from.
///
/// This is the first node of odd degree if there is one, otherwise the first node with incident edges.
/// If the graph has no edges, then this is the first node, and if it has no nodes, then `None`.
pub fn select_undirected_eulerian_path_start<Graph: StaticGraph<Direction = Undirected>>(
    graph: &Graph,
) -> Option<Graph::NodeIndex> {
    select_start(graph, |node| graph.out_degree(node) % 2 == 1)
}

/// Returns the node where the Eulerian path of a directed graph is constructed from.
///
/// This is the first node with outdegree - indegree = 1 if there is one, otherwise the first node with outgoing edges.
/// If the graph has no edges, then this is the first node, and if it has no nodes, then `None`.
pub fn select_directed_eulerian_path_start<Graph: StaticGraph<Direction = Directed>>(
    graph: &Graph,
) -> Option<Graph::NodeIndex> {
    select_directed_start(graph, &graph.in_degrees())
}

fn select_directed_start<Graph: StaticGraph>(
    graph: &Graph,
    in_degrees: &[usize],
) -> Option<Graph::NodeIndex> {
    select_start(graph, |node| {
        graph.out_degree(node) == in_degrees[node.as_usize()] + 1
    })
}

/// Returns the first node that is a start candidate, otherwise the first node with outgoing edges, otherwise the first node.
fn select_start<Graph: StaticGraph, IsStartCandidate: Fn(Graph::NodeIndex) -> bool>(
    graph: &Graph,
    is_start_candidate: IsStartCandidate,
) -> Option<Graph::NodeIndex> {
    graph
        .node_indices()
        .find(|&node| is_start_candidate(node))
        .or_else(|| find_first_node_with_out_neighbors(graph))
        .or_else(|| graph.node_indices().next())
}

//////////////////////////////
////// PATH CONSTRUCTION /////
//////////////////////////////

/// The end of the path where the Hierholzer construction inserts a node once all its edges are used.
pub trait PathEmissionStrategy<NodeIndex, Path: BidirectedQueue<NodeIndex>> {
    /// Insert a finished node into the path.
    fn emit(path: &mut Path, node: NodeIndex);
}

/// Appends finished nodes, which yields the path from its end to its start.
pub struct AppendEmissionStrategy;

impl<NodeIndex, Path: BidirectedQueue<NodeIndex>> PathEmissionStrategy<NodeIndex, Path>
    for AppendEmissionStrategy
{
    fn emit(path: &mut Path, node: NodeIndex) {
        path.push_back(node);
    }
}

/// Prepends finished nodes, which yields the path from its start to its end.
pub struct PrependEmissionStrategy;

impl<NodeIndex, Path: BidirectedQueue<NodeIndex>> PathEmissionStrategy<NodeIndex, Path>
    for PrependEmissionStrategy
{
    fn emit(path: &mut Path, node: NodeIndex) {
        path.push_front(node);
    }
}

/// Consumes the graph along an Eulerian path starting in `start`, using Hierholzer's algorithm with an explicit stack.
///
/// The graph must have an Eulerian path starting in `start`, otherwise the returned walk does not use all edges.
/// Each node is emitted as soon as it has no unused edges left, where the emission strategy decides at which end of the path.
/// After the construction, the graph has no edges left.
pub fn consume_eulerian_path_from<
    Graph: DynamicGraph,
    EmissionStrategy: PathEmissionStrategy<Graph::NodeIndex, VecDeque<Graph::NodeIndex>>,
>(
    mut graph: Graph,
    start: Graph::NodeIndex,
) -> VecNodeWalk<Graph> {
    debug!("Constructing Eulerian path from node {}", start);
    let edge_count = graph.edge_count();
    let mut path = VecDeque::with_capacity(edge_count + 1);
    let mut stack = vec![start];

    while let Some(&node) = stack.last() {
        // Copy the neighbor before removing the edge, the removal shifts the adjacency list.
        if let Some(neighbor) = graph.first_out_neighbor(node) {
            stack.push(neighbor);
            let removed = graph.remove_edge(node, neighbor);
            debug_assert!(removed);
            trace!("Used edge ({}, {})", node, neighbor);
        } else {
            stack.pop();
            EmissionStrategy::emit(&mut path, node);
        }
    }

    debug_assert!(
        graph.has_no_edges(),
        "The graph has no Eulerian path starting in node {}",
        start
    );
    debug_assert_eq!(path.len(), edge_count + 1);
    path.into_iter().collect()
}

/// Computes an Eulerian path of the undirected graph, without modifying it.
///
/// The path is returned in the order it is emitted by the construction, i.e. its first node is where the construction ended.
/// See [consume_undirected_eulerian_path] for details.
pub fn compute_undirected_eulerian_path<Graph: DynamicGraph<Direction = Undirected> + Clone>(
    graph: &Graph,
) -> VecNodeWalk<Graph> {
    consume_undirected_eulerian_path(graph.clone())
}

/// Computes an Eulerian path of the undirected graph by consuming it.
///
/// The graph must have an Eulerian path, which can be checked with [has_undirected_eulerian_path].
/// The construction starts at [select_undirected_eulerian_path_start] and appends each finished node,
/// so the last node of the returned walk is the start node.
/// If the graph has no nodes, then the returned walk is empty, and if it has no edges, then it contains only the first node.
pub fn consume_undirected_eulerian_path<Graph: DynamicGraph<Direction = Undirected>>(
    graph: Graph,
) -> VecNodeWalk<Graph> {
    match select_undirected_eulerian_path_start(&graph) {
        Some(start) => consume_eulerian_path_from::<_, AppendEmissionStrategy>(graph, start),
        None => VecNodeWalk::new(Vec::new()),
    }
}

/// Computes an Eulerian path of the directed graph, without modifying it.
/// See [consume_directed_eulerian_path] for details.
pub fn compute_directed_eulerian_path<Graph: DynamicGraph<Direction = Directed> + Clone>(
    graph: &Graph,
) -> VecNodeWalk<Graph> {
    consume_directed_eulerian_path(graph.clone())
}

/// Computes an Eulerian path of the directed graph by consuming it.
///
/// The graph must have an Eulerian path, which can be checked with [has_directed_eulerian_path].
/// The construction starts at [select_directed_eulerian_path_start] and prepends each finished node,
/// so the returned walk follows the edge directions from its first to its last node.
/// If the graph has no nodes, then the returned walk is empty, and if it has no edges, then it contains only the first node.
pub fn consume_directed_eulerian_path<Graph: DynamicGraph<Direction = Directed>>(
    graph: Graph,
) -> VecNodeWalk<Graph> {
    match select_directed_eulerian_path_start(&graph) {
        Some(start) => consume_eulerian_path_from::<_, PrependEmissionStrategy>(graph, start),
        None => VecNodeWalk::new(Vec::new()),
    }
}

/// Returns an Eulerian path of the undirected graph, or `None` if it has none.
pub fn find_undirected_eulerian_path<Graph: DynamicGraph<Direction = Undirected> + Clone>(
    graph: &Graph,
) -> Option<VecNodeWalk<Graph>> {
    if has_undirected_eulerian_path(graph) {
        Some(compute_undirected_eulerian_path(graph))
    } else {
        None
    }
}

/// Returns an Eulerian path of the directed graph, or `None` if it has none.
pub fn find_directed_eulerian_path<Graph: DynamicGraph<Direction = Directed> + Clone>(
    graph: &Graph,
) -> Option<VecNodeWalk<Graph>> {
    if has_directed_eulerian_path(graph) {
        Some(compute_directed_eulerian_path(graph))
    } else {
        None
    }
}

/// Returns the start node of an Eulerian path of the given graph, if it has nodes.
/// Dispatches on the direction of the graph.
pub fn select_eulerian_path_start<Graph: StaticGraph>(graph: &Graph) -> Option<Graph::NodeIndex> {
    if <Graph::Direction as EdgeDirection>::IS_DIRECTED {
        select_directed_start(graph, &graph.in_degrees())
    } else {
        select_start(graph, |node| graph.out_degree(node) % 2 == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        compute_directed_eulerian_path, compute_undirected_eulerian_path,
        consume_directed_eulerian_path, decomposes_into_eulerian_cycles,
        find_directed_eulerian_path, find_non_eulerian_nodes,
        find_non_eulerian_nodes_with_differences, find_odd_degree_nodes,
        find_undirected_eulerian_path, has_directed_eulerian_path, has_undirected_eulerian_path,
        select_directed_eulerian_path_start, select_eulerian_path_start,
        select_undirected_eulerian_path_start,
    };
    use crate::algo::predefined_graphs::{generate_directed_graph, generate_undirected_graph};
    use crate::implementation::{DirectedGraph, UndirectedGraph};
    use crate::index::NodeIndex;
    use crate::interface::{DynamicGraph, ImmutableGraphContainer};
    use crate::walks::VecNodeWalk;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn n(index: usize) -> NodeIndex<usize> {
        index.into()
    }

    fn walk<Graph: crate::interface::GraphBase<NodeIndex = NodeIndex<usize>>>(
        nodes: &[usize],
    ) -> VecNodeWalk<Graph> {
        nodes.iter().map(|&node| n(node)).collect()
    }

    /// Searches an Eulerian path by trying all walks.
    fn brute_force_has_eulerian_path<Graph: DynamicGraph + Clone>(graph: &Graph) -> bool {
        fn extend<Graph: DynamicGraph>(graph: &mut Graph, node: Graph::NodeIndex) -> bool {
            if graph.has_no_edges() {
                return true;
            }

            for neighbor in graph.out_neighbors(node).to_vec() {
                graph.remove_edge(node, neighbor);
                let found = extend(graph, neighbor);
                graph.add_edge(node, neighbor);
                if found {
                    return true;
                }
            }
            false
        }

        graph.has_no_edges()
            || graph
                .node_indices()
                .any(|start| extend(&mut graph.clone(), start))
    }

    #[test]
    fn test_undirected_two_odd_nodes() {
        let graph =
            UndirectedGraph::<usize>::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]);
        assert!(has_undirected_eulerian_path(&graph));
        assert_eq!(find_odd_degree_nodes(&graph), vec![n(0), n(2)]);
        assert_eq!(select_undirected_eulerian_path_start(&graph), Some(n(0)));
        assert_eq!(select_eulerian_path_start(&graph), Some(n(0)));

        let path = compute_undirected_eulerian_path(&graph);
        assert_eq!(path, walk(&[2, 0, 3, 2, 1, 0]));
        assert_eq!(path.len(), 6);
        assert!(path.is_eulerian_walk_of(&graph));
        assert_eq!(graph.edge_count(), 5);
    }

    #[test]
    fn test_directed_circuit() {
        let graph = DirectedGraph::<usize>::from_edges(
            4,
            &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2), (2, 0)],
        );
        assert!(has_directed_eulerian_path(&graph));
        assert!(decomposes_into_eulerian_cycles(&graph));
        assert!(find_non_eulerian_nodes(&graph).is_empty());
        assert_eq!(select_directed_eulerian_path_start(&graph), Some(n(0)));

        let path = compute_directed_eulerian_path(&graph);
        assert_eq!(path, walk(&[0, 1, 2, 3, 0, 2, 0]));
        assert!(path.is_closed());
        assert!(path.is_eulerian_walk_of(&graph));
    }

    #[test]
    fn test_undirected_star_is_not_eulerian() {
        let graph = UndirectedGraph::<usize>::from_edges(4, &[(0, 1), (0, 2), (0, 3)]);
        assert_eq!(find_odd_degree_nodes(&graph).len(), 4);
        assert!(!has_undirected_eulerian_path(&graph));
        assert_eq!(find_undirected_eulerian_path(&graph), None);
    }

    #[test]
    fn test_undirected_disconnected_is_not_eulerian() {
        let graph = UndirectedGraph::<usize>::from_edges(4, &[(0, 1), (2, 3)]);
        assert!(!has_undirected_eulerian_path(&graph));

        let graph = UndirectedGraph::<usize>::from_edges(6, &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]);
        assert!(find_odd_degree_nodes(&graph).is_empty());
        assert!(!has_undirected_eulerian_path(&graph));
    }

    #[test]
    fn test_isolated_nodes_do_not_matter() {
        let graph = UndirectedGraph::<usize>::from_edges(5, &[(1, 2), (2, 3)]);
        assert!(has_undirected_eulerian_path(&graph));
        let path = compute_undirected_eulerian_path(&graph);
        assert_eq!(path, walk(&[3, 2, 1]));

        let graph = DirectedGraph::<usize>::from_edges(5, &[(3, 2), (2, 3)]);
        assert!(has_directed_eulerian_path(&graph));
        assert_eq!(compute_directed_eulerian_path(&graph), walk(&[2, 3, 2]));
    }

    #[test]
    fn test_graphs_without_edges() {
        let graph = UndirectedGraph::<usize>::with_node_count(3);
        assert!(has_undirected_eulerian_path(&graph));
        assert_eq!(compute_undirected_eulerian_path(&graph), walk(&[0]));

        let graph = DirectedGraph::<usize>::new();
        assert!(has_directed_eulerian_path(&graph));
        assert!(compute_directed_eulerian_path(&graph).is_empty());
        assert_eq!(select_eulerian_path_start(&graph), None);
    }

    #[test]
    fn test_directed_start_needs_surplus_out_edge() {
        // The first node with outgoing edges is 0, but the path has to start in 1.
        let graph = DirectedGraph::<usize>::from_edges(3, &[(1, 0), (0, 2)]);
        assert!(has_directed_eulerian_path(&graph));
        assert_eq!(select_directed_eulerian_path_start(&graph), Some(n(1)));
        assert_eq!(select_eulerian_path_start(&graph), Some(n(1)));
        assert_eq!(find_directed_eulerian_path(&graph), Some(walk(&[1, 0, 2])));
        assert_eq!(
            find_non_eulerian_nodes_with_differences(&graph),
            vec![(n(1), 1), (n(2), -1)]
        );
    }

    #[test]
    fn test_directed_imbalances() {
        let graph = DirectedGraph::<usize>::from_edges(3, &[(0, 1), (0, 2)]);
        assert!(!has_directed_eulerian_path(&graph));

        let graph = DirectedGraph::<usize>::from_edges(4, &[(0, 1), (2, 3)]);
        assert_eq!(find_non_eulerian_nodes(&graph).len(), 4);
        assert!(!has_directed_eulerian_path(&graph));

        let graph = DirectedGraph::<usize>::from_edges(4, &[(0, 1), (1, 0), (2, 3), (3, 2)]);
        assert!(decomposes_into_eulerian_cycles(&graph));
        assert!(!has_directed_eulerian_path(&graph));
    }

    #[test]
    fn test_parallel_edges_and_self_loops() {
        let graph = UndirectedGraph::<usize>::from_edges(2, &[(0, 1), (0, 1), (1, 1)]);
        assert!(has_undirected_eulerian_path(&graph));
        let path = compute_undirected_eulerian_path(&graph);
        assert_eq!(path.len(), 4);
        assert!(path.is_closed());
        assert!(path.is_eulerian_walk_of(&graph));

        let graph = DirectedGraph::<usize>::from_edges(2, &[(0, 0), (0, 1), (1, 0), (0, 1)]);
        assert!(has_directed_eulerian_path(&graph));
        let path = compute_directed_eulerian_path(&graph);
        assert_eq!(path.first(), Some(n(0)));
        assert_eq!(path.last(), Some(n(1)));
        assert!(path.is_eulerian_walk_of(&graph));
    }

    #[test]
    fn test_construction_is_deterministic_and_keeps_the_original() {
        let graph =
            UndirectedGraph::<usize>::from_edges(5, &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)]);
        let original = graph.clone();
        let first = compute_undirected_eulerian_path(&graph);
        let second = compute_undirected_eulerian_path(&graph);
        assert_eq!(first, second);
        assert_eq!(graph, original);

        let directed = DirectedGraph::<usize>::from_edges(3, &[(0, 1), (1, 2), (2, 0)]);
        let consumed = consume_directed_eulerian_path(directed.clone());
        assert_eq!(consumed, compute_directed_eulerian_path(&directed));
        assert_eq!(directed.edge_count(), 3);
    }

    #[test]
    fn test_long_circuit_does_not_overflow_the_stack() {
        let node_count = 100_000;
        let edges: Vec<_> = (0..node_count)
            .map(|node| (node, (node + 1) % node_count))
            .collect();
        let graph = DirectedGraph::<u32>::from_edges(node_count, &edges);
        assert!(has_directed_eulerian_path(&graph));
        let path = compute_directed_eulerian_path(&graph);
        assert_eq!(path.len(), node_count + 1);
        assert!(path.is_closed());
    }

    #[test]
    fn test_random_undirected_graphs_against_brute_force() {
        let mut random = StdRng::seed_from_u64(0);
        for _ in 0..300 {
            let graph: UndirectedGraph = generate_undirected_graph(4, 5, &mut random);
            let has_path = has_undirected_eulerian_path(&graph);
            assert_eq!(
                has_path,
                brute_force_has_eulerian_path(&graph),
                "Wrong decision for\n{}",
                graph
            );
            if has_path {
                let path = compute_undirected_eulerian_path(&graph);
                assert!(path.is_eulerian_walk_of(&graph), "{:?} in\n{}", path, graph);
            }
        }
    }

    #[test]
    fn test_random_directed_graphs_against_brute_force() {
        let mut random = StdRng::seed_from_u64(1);
        for _ in 0..300 {
            let graph: DirectedGraph = generate_directed_graph(4, 6, &mut random);
            let has_path = has_directed_eulerian_path(&graph);
            assert_eq!(
                has_path,
                brute_force_has_eulerian_path(&graph),
                "Wrong decision for\n{}",
                graph
            );
            if has_path {
                let path = compute_directed_eulerian_path(&graph);
                assert!(path.is_eulerian_walk_of(&graph), "{:?} in\n{}", path, graph);
            }
        }
    }
}
