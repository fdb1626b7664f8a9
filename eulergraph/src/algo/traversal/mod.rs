use crate::algo::queue::BidirectedQueue;
use crate::index::GraphIndex;
use crate::interface::{GraphBase, StaticGraph};
use std::collections::VecDeque;
use std::marker::PhantomData;

/// A preorder BFS following the adjacency lists of the graph.
pub type PreOrderBfs<'a, Graph> =
    PreOrderTraversal<'a, Graph, BfsQueueStrategy, VecDeque<<Graph as GraphBase>::NodeIndex>>;
/// A preorder DFS following the adjacency lists of the graph.
pub type PreOrderDfs<'a, Graph> =
    PreOrderTraversal<'a, Graph, DfsQueueStrategy, VecDeque<<Graph as GraphBase>::NodeIndex>>;

/// A generic preorder graph traversal.
/// The traversal is generic over the graph implementation,
/// as well as the order of processing (`QueueStrategy`) and the queue implementation itself (`Queue`).
///
/// Edges are followed in the direction they are stored in, so in a directed graph only forward edges are traversed,
/// while in an undirected graph the symmetric adjacency lists make the traversal undirected.
/// The traversal keeps a visited marking, where a node gets marked as soon as it is discovered.
/// The queue is explicit, so the depth of the traversal is not limited by the call stack.
pub struct PreOrderTraversal<
    'a,
    Graph: GraphBase,
    QueueStrategy,
    Queue: BidirectedQueue<Graph::NodeIndex>,
> {
    graph: &'a Graph,
    queue: Queue,
    visited: Vec<bool>,
    queue_strategy: PhantomData<QueueStrategy>,
}

impl<
        'a,
        Graph: StaticGraph,
        QueueStrategy: TraversalQueueStrategy<Graph, Queue>,
        Queue: BidirectedQueue<Graph::NodeIndex>,
    > PreOrderTraversal<'a, Graph, QueueStrategy, Queue>
{
    /// Creates a new traversal that operates on the given graph starting from the given node.
    pub fn new(graph: &'a Graph, start: Graph::NodeIndex) -> Self {
        Self::with_visited(graph, vec![false; graph.node_count()], start)
    }

    /// Creates a new traversal that operates on the given graph.
    /// Does not start the traversal.
    pub fn new_without_start(graph: &'a Graph) -> Self {
        Self {
            graph,
            queue: Queue::default(),
            visited: vec![false; graph.node_count()],
            queue_strategy: Default::default(),
        }
    }

    /// Creates a new traversal starting from the given node that continues on an existing visited marking.
    /// Nodes already marked in `visited` are not traversed again, but `start` itself is always traversed.
    pub fn with_visited(graph: &'a Graph, visited: Vec<bool>, start: Graph::NodeIndex) -> Self {
        assert_eq!(
            visited.len(),
            graph.node_count(),
            "The visited marking must have one entry per node"
        );
        let mut queue = Queue::default();
        QueueStrategy::push(&mut queue, start);
        let mut result = Self {
            graph,
            queue,
            visited,
            queue_strategy: Default::default(),
        };
        result.visited[start.as_usize()] = true;
        result
    }

    /// Resets the traversal to start from the given node.
    pub fn reset(&mut self, start: Graph::NodeIndex) {
        self.queue.clear();
        for visited in &mut self.visited {
            *visited = false;
        }
        QueueStrategy::push(&mut self.queue, start);
        self.visited[start.as_usize()] = true;
    }

    /// Resets the traversal to start from the given node without resetting the visited nodes.
    /// Returns false and does nothing if the node was visited already.
    pub fn continue_traversal_from(&mut self, start: Graph::NodeIndex) -> bool {
        debug_assert!(self.queue.is_empty());
        if self.visited[start.as_usize()] {
            false
        } else {
            self.visited[start.as_usize()] = true;
            QueueStrategy::push(&mut self.queue, start);
            true
        }
    }

    /// Returns true if the given node has been discovered by the traversal.
    pub fn is_visited(&self, node: Graph::NodeIndex) -> bool {
        self.visited[node.as_usize()]
    }

    /// Returns the visited marking, indexed by node.
    pub fn visited(&self) -> &[bool] {
        &self.visited
    }

    /// Consumes the traversal and returns its visited marking.
    pub fn into_visited(self) -> Vec<bool> {
        self.visited
    }
}

impl<
        'a,
        Graph: StaticGraph,
        QueueStrategy: TraversalQueueStrategy<Graph, Queue>,
        Queue: BidirectedQueue<Graph::NodeIndex>,
    > Iterator for PreOrderTraversal<'a, Graph, QueueStrategy, Queue>
{
    type Item = Graph::NodeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let first = QueueStrategy::pop(&mut self.queue)?;
        for &neighbor in self.graph.out_neighbors(first) {
            let visited = &mut self.visited[neighbor.as_usize()];
            if !*visited {
                *visited = true;
                QueueStrategy::push(&mut self.queue, neighbor);
            }
        }

        Some(first)
    }
}

/// Marks `start` and all nodes reachable from `start` in `visited`.
/// Edges are followed in the direction they are stored in.
/// Nodes that are marked already are not expanded again, so a fresh all-false marking yields exactly the nodes reachable from `start`.
pub fn mark_reachable_nodes<Graph: StaticGraph>(
    graph: &Graph,
    visited: &mut Vec<bool>,
    start: Graph::NodeIndex,
) {
    let mut traversal = PreOrderDfs::with_visited(graph, std::mem::take(visited), start);
    traversal.by_ref().for_each(drop);
    *visited = traversal.into_visited();
}

/// Returns a marking that is true for all nodes reachable from `start`, including `start` itself.
pub fn compute_reachable_nodes<Graph: StaticGraph>(
    graph: &Graph,
    start: Graph::NodeIndex,
) -> Vec<bool> {
    let mut visited = vec![false; graph.node_count()];
    mark_reachable_nodes(graph, &mut visited, start);
    visited
}

/// A type that defines the order of node processing in a traversal, i.e. queue-based or stack-based.
pub trait TraversalQueueStrategy<Graph: GraphBase, Queue: BidirectedQueue<Graph::NodeIndex>> {
    /// Insert a node into the queue.
    fn push(queue: &mut Queue, node: Graph::NodeIndex);
    /// Remove and return a node from the queue.
    fn pop(queue: &mut Queue) -> Option<Graph::NodeIndex>;
}

/// A queue strategy that works by the first-in first-out principle.
pub struct BfsQueueStrategy;

impl<Graph: GraphBase, Queue: BidirectedQueue<Graph::NodeIndex>>
    TraversalQueueStrategy<Graph, Queue> for BfsQueueStrategy
{
    fn push(queue: &mut Queue, node: Graph::NodeIndex) {
        queue.push_back(node)
    }

    fn pop(queue: &mut Queue) -> Option<Graph::NodeIndex> {
        queue.pop_front()
    }
}

/// A queue strategy that works by the last-in first-out principle.
pub struct DfsQueueStrategy;

impl<Graph: GraphBase, Queue: BidirectedQueue<Graph::NodeIndex>>
    TraversalQueueStrategy<Graph, Queue> for DfsQueueStrategy
{
    fn push(queue: &mut Queue, node: Graph::NodeIndex) {
        queue.push_back(node)
    }

    fn pop(queue: &mut Queue) -> Option<Graph::NodeIndex> {
        queue.pop_back()
    }
}
