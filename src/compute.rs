use crate::CliOptions;
use clap::Parser;
use colored::Colorize;
use eulergraph::algo::eulerian::{find_directed_eulerian_path, find_undirected_eulerian_path};
use eulergraph::implementation::{DirectedGraph, UndirectedGraph};
use eulergraph::interface::{GraphBase, ImmutableGraphContainer};
use eulergraph::io::{read_topology_from_file, write_walk};
use eulergraph::walks::VecNodeWalk;
use log::{info, warn};
use std::fs::File;
use std::io::{BufWriter, Write};

#[derive(Parser)]
pub struct ComputeCommand {
    #[clap(short, long, help = "The input file in topology format")]
    pub input: String,

    #[clap(short, long, help = "Interpret the edges of the input as directed")]
    pub directed: bool,

    #[clap(
        short,
        long,
        help = "The file to write the Eulerian path to, as a single line of node indices"
    )]
    pub output: Option<String>,
}

pub(crate) fn compute(_options: &CliOptions, subcommand: &ComputeCommand) -> crate::Result<()> {
    info!("Reading graph from input file: '{}'", &subcommand.input);
    if subcommand.directed {
        let graph: DirectedGraph = read_topology_from_file(&subcommand.input)?;
        info!(
            "Read directed graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        output(subcommand, find_directed_eulerian_path(&graph))
    } else {
        let graph: UndirectedGraph = read_topology_from_file(&subcommand.input)?;
        info!(
            "Read undirected graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        output(subcommand, find_undirected_eulerian_path(&graph))
    }
}

fn output<Graph: GraphBase>(
    subcommand: &ComputeCommand,
    walk: Option<VecNodeWalk<Graph>>,
) -> crate::Result<()> {
    let walk = if let Some(walk) = walk {
        walk
    } else {
        warn!("{}", "The graph has no Eulerian path".yellow());
        return Ok(());
    };

    info!("Found Eulerian path with {} nodes", walk.len());
    if let Some(output) = &subcommand.output {
        info!("Writing Eulerian path to '{}'", output);
        let mut output_writer = BufWriter::new(File::create(output)?);
        write_walk(&walk, &mut output_writer)?;
        output_writer.flush()?;
    } else {
        println!("{}", "Eulerian path".bold());
        println!("{}", walk);
    }

    Ok(())
}
