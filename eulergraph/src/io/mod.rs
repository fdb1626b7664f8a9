use crate::index::GraphIndex;
use crate::interface::{DynamicGraph, GraphBase, StaticGraph};
use crate::walks::VecNodeWalk;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

error_chain! {
    foreign_links {
        Io(std::io::Error);
        ParseInt(std::num::ParseIntError);
    }

    errors {
        MissingHeader {
            description("the input contains no header line")
            display("the input contains no header line")
        }

        MalformedLine(line_number: usize, line: String) {
            description("malformed line")
            display("malformed line {}: '{}'", line_number, line)
        }

        NodeOutOfRange(node: usize, node_count: usize) {
            description("an edge refers to a node that does not exist")
            display("an edge refers to node {}, but there are only {} nodes", node, node_count)
        }

        TooManyNodes(declared: usize, limit: usize) {
            description("the header declares more nodes than the graph can hold")
            display("the header declares {} nodes, but at most {} can be added", declared, limit)
        }

        EdgeCountMismatch(expected: usize, actual: usize) {
            description("the amount of edges does not match the header")
            display("the header declares {} edges, but {} were given", expected, actual)
        }
    }
}

/// Write the graph in the following format.
///
/// ```text
/// <node count> <edge count>
/// <from node> <to node>
/// ```
///
/// The second line is repeated for each edge.
/// Undirected edges are written once, with `<from node> <= <to node>`.
pub fn write_topology<Graph: StaticGraph, Writer: Write>(
    graph: &Graph,
    writer: &mut Writer,
) -> Result<()> {
    writeln!(writer, "{} {}", graph.node_count(), graph.edge_count())?;
    for edge in graph.edges() {
        writeln!(
            writer,
            "{} {}",
            edge.from_node.as_usize(),
            edge.to_node.as_usize()
        )?;
    }
    Ok(())
}

/// Write the graph to the given file in the format of [write_topology].
pub fn write_topology_to_file<Graph: StaticGraph, P: AsRef<Path>>(
    graph: &Graph,
    path: P,
) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_topology(graph, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// The maximum amount of nodes [read_topology] accepts in a header.
pub const DEFAULT_NODE_LIMIT: usize = 1 << 26;

/// Read a graph in the format of [write_topology], adding its nodes and edges to the given graph.
/// Blank lines are ignored, and the edges are added in the order they are given.
///
/// If the graph already has nodes, then the new nodes are added after them, and the edges refer to the new nodes only.
/// Headers declaring more than [DEFAULT_NODE_LIMIT] nodes are rejected, see [read_topology_with_node_limit].
pub fn read_topology<Graph: DynamicGraph, Reader: BufRead>(
    graph: &mut Graph,
    reader: Reader,
) -> Result<()> {
    read_topology_with_node_limit(graph, reader, DEFAULT_NODE_LIMIT)
}

/// Like [read_topology], but rejects headers declaring more than `node_limit` nodes.
/// Headers declaring more nodes than the index type of the graph can hold are rejected as well.
/// Nothing is added to the graph if the header is rejected.
pub fn read_topology_with_node_limit<Graph: DynamicGraph, Reader: BufRead>(
    graph: &mut Graph,
    reader: Reader,
    node_limit: usize,
) -> Result<()> {
    let node_limit = <Graph::NodeIndex as GraphIndex>::max_node_count()
        .saturating_sub(graph.node_count())
        .min(node_limit);
    let mut nodes = None;
    let mut declared_edge_count = 0;
    let mut edge_count = 0;

    for (line_index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = line_index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let (first, second) = parse_pair(&line)
            .chain_err(|| ErrorKind::MalformedLine(line_number, line.clone()))?;

        match &nodes {
            None => {
                trace!(
                    "Reading graph with {} nodes and {} edges",
                    first,
                    second
                );
                if first > node_limit {
                    bail!(ErrorKind::TooManyNodes(first, node_limit));
                }
                nodes = Some((0..first).map(|_| graph.add_node()).collect::<Vec<_>>());
                declared_edge_count = second;
            }
            Some(nodes) => {
                for &node in &[first, second] {
                    if node >= nodes.len() {
                        bail!(ErrorKind::NodeOutOfRange(node, nodes.len()));
                    }
                }
                graph.add_edge(nodes[first], nodes[second]);
                edge_count += 1;
            }
        }
    }

    if nodes.is_none() {
        bail!(ErrorKind::MissingHeader);
    }
    if edge_count != declared_edge_count {
        bail!(ErrorKind::EdgeCountMismatch(declared_edge_count, edge_count));
    }
    Ok(())
}

/// Read a graph from the given file in the format of [write_topology].
/// See [read_topology] for details.
pub fn read_topology_from_file<Graph: DynamicGraph + Default, P: AsRef<Path>>(
    path: P,
) -> Result<Graph> {
    let path = path.as_ref();
    debug!("Reading graph from {:?}", path);
    let mut graph = Graph::default();
    read_topology(&mut graph, BufReader::new(File::open(path)?))
        .chain_err(|| format!("could not read graph from {:?}", path))?;
    Ok(graph)
}

fn parse_pair(line: &str) -> Result<(usize, usize)> {
    let mut columns = line.split_whitespace();
    match (columns.next(), columns.next(), columns.next()) {
        (Some(first), Some(second), None) => Ok((first.parse()?, second.parse()?)),
        _ => bail!("expected two columns"),
    }
}

/// Write the walk as a single line of node indices separated by spaces.
pub fn write_walk<Graph: GraphBase, Writer: Write>(
    walk: &VecNodeWalk<Graph>,
    writer: &mut Writer,
) -> Result<()> {
    writeln!(writer, "{}", walk)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        read_topology, read_topology_with_node_limit, write_topology, write_walk, ErrorKind,
        DEFAULT_NODE_LIMIT,
    };
    use crate::implementation::{DirectedGraph, UndirectedGraph};
    use crate::interface::ImmutableGraphContainer;
    use crate::walks::VecNodeWalk;

    #[test]
    fn test_write_undirected_topology() {
        let graph = UndirectedGraph::<usize>::from_edges(3, &[(1, 0), (1, 2), (2, 2), (0, 1)]);
        let mut output = Vec::new();
        write_topology(&graph, &mut output).unwrap();
        assert_eq!(output, b"3 4\n0 1\n0 1\n1 2\n2 2\n".to_vec());
    }

    #[test]
    fn test_write_directed_topology() {
        let graph = DirectedGraph::<u32>::from_edges(3, &[(2, 0), (0, 1), (1, 0)]);
        let mut output = Vec::new();
        write_topology(&graph, &mut output).unwrap();
        assert_eq!(output, b"3 3\n0 1\n1 0\n2 0\n".to_vec());
    }

    #[test]
    fn test_read_topology() {
        let input = b"4 3\n\n0 1\n  1 2  \n3 3\n";
        let mut graph = UndirectedGraph::<usize>::new();
        read_topology(&mut graph, &input[..]).unwrap();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(
            graph,
            UndirectedGraph::<usize>::from_edges(4, &[(0, 1), (1, 2), (3, 3)])
        );

        let mut written = Vec::new();
        write_topology(&graph, &mut written).unwrap();
        assert_eq!(written, b"4 3\n0 1\n1 2\n3 3\n".to_vec());
    }

    #[test]
    fn test_read_topology_errors() {
        let mut graph = DirectedGraph::<usize>::new();
        match read_topology(&mut graph, &b"\n\n"[..]).unwrap_err().kind() {
            ErrorKind::MissingHeader => {}
            other => panic!("unexpected error: {}", other),
        }

        let mut graph = DirectedGraph::<usize>::new();
        match read_topology(&mut graph, &b"2 1\n0 x\n"[..]).unwrap_err().kind() {
            ErrorKind::MalformedLine(2, line) => assert_eq!(line, "0 x"),
            other => panic!("unexpected error: {}", other),
        }

        let mut graph = DirectedGraph::<usize>::new();
        match read_topology(&mut graph, &b"2 1\n0 1 2\n"[..]).unwrap_err().kind() {
            ErrorKind::MalformedLine(2, _) => {}
            other => panic!("unexpected error: {}", other),
        }

        let mut graph = DirectedGraph::<usize>::new();
        match read_topology(&mut graph, &b"2 1\n0 2\n"[..]).unwrap_err().kind() {
            ErrorKind::NodeOutOfRange(2, 2) => {}
            other => panic!("unexpected error: {}", other),
        }

        let mut graph = DirectedGraph::<usize>::new();
        match read_topology(&mut graph, &b"2 2\n0 1\n"[..]).unwrap_err().kind() {
            ErrorKind::EdgeCountMismatch(2, 1) => {}
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_read_topology_rejects_too_many_nodes() {
        let mut graph = DirectedGraph::<u8>::new();
        match read_topology(&mut graph, &b"300 0\n"[..]).unwrap_err().kind() {
            ErrorKind::TooManyNodes(300, 255) => {}
            other => panic!("unexpected error: {}", other),
        }
        assert_eq!(graph.node_count(), 0);

        let mut graph = DirectedGraph::<u8>::new();
        read_topology(&mut graph, &b"255 1\n254 0\n"[..]).unwrap();
        assert_eq!(graph.node_count(), 255);
        assert_eq!(graph.edge_count(), 1);

        let mut graph = DirectedGraph::<u8>::with_node_count(200);
        match read_topology(&mut graph, &b"100 0\n"[..]).unwrap_err().kind() {
            ErrorKind::TooManyNodes(100, 55) => {}
            other => panic!("unexpected error: {}", other),
        }
        assert_eq!(graph.node_count(), 200);

        let mut graph = UndirectedGraph::<usize>::new();
        match read_topology(&mut graph, &b"99999999999999 0\n"[..]).unwrap_err().kind() {
            ErrorKind::TooManyNodes(99999999999999, limit) => {
                assert_eq!(*limit, DEFAULT_NODE_LIMIT)
            }
            other => panic!("unexpected error: {}", other),
        }
        assert_eq!(graph.node_count(), 0);

        let mut graph = UndirectedGraph::<usize>::new();
        assert!(read_topology_with_node_limit(&mut graph, &b"3 0\n"[..], 2).is_err());
        read_topology_with_node_limit(&mut graph, &b"2 0\n"[..], 2).unwrap();
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn test_write_walk() {
        let walk: VecNodeWalk<DirectedGraph> =
            vec![3usize, 0, 1].into_iter().map(Into::into).collect();
        let mut output = Vec::new();
        write_walk(&walk, &mut output).unwrap();
        assert_eq!(output, b"3 0 1\n".to_vec());
    }
}
