use crate::{CliOptions, Error, ErrorKind};
use clap::Parser;
use colored::Colorize;
use error_chain::bail;
use eulergraph::algo::eulerian::{
    compute_directed_eulerian_path, compute_undirected_eulerian_path, has_directed_eulerian_path,
    has_undirected_eulerian_path,
};
use eulergraph::algo::predefined_graphs::{
    create_random_directed_graph, create_random_undirected_graph,
};
use eulergraph::implementation::{DirectedGraph, UndirectedGraph};
use eulergraph::interface::{DynamicGraph, StaticGraph};
use eulergraph::io::write_topology_to_file;
use eulergraph::walks::VecNodeWalk;
use log::{error, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scan_fmt::scan_fmt;
use std::fmt::Display;

#[derive(Parser)]
pub struct RandomCommand {
    #[clap(
        short,
        long,
        help = "The size of the generated graphs. Must have an argument of the form n<node count>+m<edge count>."
    )]
    pub random: String,

    #[clap(
        short,
        long,
        help = "Generate directed graphs instead of undirected ones"
    )]
    pub directed: bool,

    #[clap(
        short,
        long,
        help = "The seed of the random number generator. If not given, the generator is seeded by the system."
    )]
    pub seed: Option<u64>,

    #[clap(
        long,
        default_value = "10000",
        help = "The amount of graphs to generate before giving up"
    )]
    pub max_attempts: usize,

    #[clap(
        short,
        long,
        help = "The file to write the generated graph to, in topology format"
    )]
    pub output: Option<String>,
}

pub(crate) fn random(_options: &CliOptions, subcommand: &RandomCommand) -> crate::Result<()> {
    let (node_count, edge_count) = scan_fmt!(&subcommand.random, "n{d}+m{d}", usize, usize)
        .map_err(|scan_error| {
            error!(
                "Could not parse argument of random '{}': {}. Make sure it fulfills the format in the help message.",
                subcommand.random, scan_error
            );
            Error::from(ErrorKind::Parameter)
        })?;
    if edge_count > 0 && node_count < 2 {
        error!(
            "Cannot generate {} edges without self loops between {} nodes",
            edge_count, node_count
        );
        bail!(ErrorKind::Parameter);
    }
    if subcommand.max_attempts == 0 {
        error!("The maximum amount of attempts must be positive");
        bail!(ErrorKind::Parameter);
    }

    if let Some(seed) = subcommand.seed {
        info!("Seeding random number generator with {}", seed);
        random_with(subcommand, node_count, edge_count, &mut StdRng::seed_from_u64(seed))
    } else {
        random_with(subcommand, node_count, edge_count, &mut rand::thread_rng())
    }
}

fn random_with<Random: Rng>(
    subcommand: &RandomCommand,
    node_count: usize,
    edge_count: usize,
    random: &mut Random,
) -> crate::Result<()> {
    if subcommand.directed {
        let graph: DirectedGraph = generate_until_eulerian(
            subcommand,
            node_count,
            edge_count,
            random,
            create_random_directed_graph,
            has_directed_eulerian_path,
        )?;
        output(subcommand, &graph, &compute_directed_eulerian_path(&graph))
    } else {
        let graph: UndirectedGraph = generate_until_eulerian(
            subcommand,
            node_count,
            edge_count,
            random,
            create_random_undirected_graph,
            has_undirected_eulerian_path,
        )?;
        output(subcommand, &graph, &compute_undirected_eulerian_path(&graph))
    }
}

fn generate_until_eulerian<Graph: DynamicGraph + Default, Random: Rng>(
    subcommand: &RandomCommand,
    node_count: usize,
    edge_count: usize,
    random: &mut Random,
    generate: impl Fn(&mut Graph, usize, usize, &mut Random),
    has_eulerian_path: impl Fn(&Graph) -> bool,
) -> crate::Result<Graph> {
    let mut graph = Graph::default();
    let mut loop_count = 0;

    loop {
        graph.clear();
        generate(&mut graph, node_count, edge_count, random);
        loop_count += 1;
        if has_eulerian_path(&graph) {
            break;
        }

        if loop_count == subcommand.max_attempts {
            bail!(ErrorKind::NoEulerianGraphFound(loop_count));
        }
        if loop_count % 1000 == 0 {
            info!(
                "Did not find a graph with an Eulerian path after {} attempts, using n = {} and m = {}",
                loop_count, node_count, edge_count
            );
        }
    }

    info!(
        "Generated graph with an Eulerian path with {} nodes and {} edges after {} attempts",
        graph.node_count(),
        graph.edge_count(),
        loop_count
    );
    Ok(graph)
}

fn output<Graph: StaticGraph + Display>(
    subcommand: &RandomCommand,
    graph: &Graph,
    walk: &VecNodeWalk<Graph>,
) -> crate::Result<()> {
    println!("{}", "Graph".bold());
    print!("{}", graph);
    println!("{}", "Eulerian path".bold());
    println!("{}", walk);

    if let Some(output) = &subcommand.output {
        info!("Writing graph to '{}'", output);
        write_topology_to_file(graph, output)?;
    }

    Ok(())
}
