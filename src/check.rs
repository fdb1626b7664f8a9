use crate::CliOptions;
use clap::Parser;
use colored::Colorize;
use eulergraph::algo::eulerian::{
    decomposes_into_eulerian_cycles, find_non_eulerian_nodes_with_differences,
    find_odd_degree_nodes, has_directed_eulerian_path, has_undirected_eulerian_path,
    select_eulerian_path_start,
};
use eulergraph::implementation::{DirectedGraph, UndirectedGraph};
use eulergraph::interface::{ImmutableGraphContainer, StaticGraph};
use eulergraph::io::read_topology_from_file;
use log::info;

#[derive(Parser)]
pub struct CheckCommand {
    #[clap(short, long, help = "The input file in topology format")]
    pub input: String,

    #[clap(short, long, help = "Interpret the edges of the input as directed")]
    pub directed: bool,
}

pub(crate) fn check(_options: &CliOptions, subcommand: &CheckCommand) -> crate::Result<()> {
    info!("Reading graph from input file: '{}'", &subcommand.input);
    if subcommand.directed {
        let graph: DirectedGraph = read_topology_from_file(&subcommand.input)?;
        print_graph_size(&graph);

        let differences = find_non_eulerian_nodes_with_differences(&graph);
        println!(
            "Nodes with outdegree != indegree: {}",
            differences.len().to_string().yellow()
        );
        for (node, difference) in &differences {
            println!("  {}: {:+}", node, difference);
        }
        println!(
            "Decomposes into Eulerian cycles: {}",
            decomposes_into_eulerian_cycles(&graph)
        );
        print_verdict(&graph, has_directed_eulerian_path(&graph));
    } else {
        let graph: UndirectedGraph = read_topology_from_file(&subcommand.input)?;
        print_graph_size(&graph);

        let odd_degree_nodes = find_odd_degree_nodes(&graph);
        println!(
            "Nodes of odd degree: {}",
            odd_degree_nodes.len().to_string().yellow()
        );
        for node in &odd_degree_nodes {
            println!("  {}: {}", node, graph.degree(*node));
        }
        print_verdict(&graph, has_undirected_eulerian_path(&graph));
    }

    Ok(())
}

fn print_graph_size<Graph: ImmutableGraphContainer>(graph: &Graph) {
    println!("{}", "Graph".bold());
    println!("Nodes: {}", graph.node_count());
    println!("Edges: {}", graph.edge_count());
}

fn print_verdict<Graph: StaticGraph>(graph: &Graph, has_eulerian_path: bool) {
    if has_eulerian_path {
        println!("{}", "The graph has an Eulerian path".green());
        if let Some(start) = select_eulerian_path_start(graph) {
            println!("It is constructed from node {}", start);
        }
    } else {
        println!("{}", "The graph has no Eulerian path".red());
    }
}
