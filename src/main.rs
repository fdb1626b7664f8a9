#![recursion_limit = "1024"]

use clap::Parser;
use error_chain::{error_chain, ChainedError, ExitCode};
use log::{error, info};
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};

mod check;
mod compute;
mod random;

error_chain! {
    foreign_links {
        Io(std::io::Error);
    }

    links {
        GraphIo(eulergraph::io::Error, eulergraph::io::ErrorKind);
    }

    errors {
        Parameter {
            description("a parameter was missing, superfluous or had an illegal value, see the log for more details")
            display("a parameter was missing, superfluous or had an illegal value, see the log for more details")
        }

        NoEulerianGraphFound(attempts: usize) {
            description("no random graph with an Eulerian path was found")
            display("no random graph with an Eulerian path was found after {} attempts", attempts)
        }
    }
}

#[derive(Parser)]
#[clap(name = "Eulerian Paths", version = env!("CARGO_PKG_VERSION"), author = "Sebastian Schmidt <sebastian.schmidt@helsinki.fi>")]
struct CliOptions {
    #[clap(subcommand)]
    pub subcommand: Command,

    #[clap(
        long,
        default_value = "Info",
        help = "The log level to use, one of Error, Warn, Info, Debug, Trace"
    )]
    pub log_level: LevelFilter,
}

#[derive(Parser)]
enum Command {
    #[clap(
        about = "Generates random graphs until one has an Eulerian path, and prints the graph and the path."
    )]
    Random(random::RandomCommand),
    #[clap(about = "Computes an Eulerian path of the input graph.")]
    Compute(compute::ComputeCommand),
    /// Checks if the input graph has an Eulerian path and prints the nodes that violate the degree conditions.
    Check(check::CheckCommand),
}

// The main is unpacked from an error-chain macro.
// The real main is run(), below this method.
fn main() {
    ::std::process::exit(match run() {
        Ok(()) => ExitCode::code(()),
        Err(ref e) => {
            error!("{}", ChainedError::display_chain(e));
            1
        }
    });
}

fn initialise_logging(level_filter: LevelFilter) {
    CombinedLogger::init(vec![TermLogger::new(
        level_filter,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .unwrap();

    info!("Logging initialised successfully");
}

fn run() -> Result<()> {
    let options = &CliOptions::parse();
    initialise_logging(options.log_level);

    info!("Hello");

    match &options.subcommand {
        Command::Random(subcommand) => random::random(options, subcommand),
        Command::Compute(subcommand) => compute::compute(options, subcommand),
        Command::Check(subcommand) => check::check(options, subcommand),
    }?;

    info!("Goodbye");
    Ok(())
}
