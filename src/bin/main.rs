use std::process;
use std::str::FromStr;

use clap::Parser;
use digraph_shortest_path::{types::*, utils::{measure_time, random_graph::random_graph}, AdjacencyList, ShortestPath, Result};
use rand::{rngs::StdRng, SeedableRng};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Opts {

    /// more log output, may be repeated (ignored when RUST_LOG is set)
    #[clap(short, long, parse(from_occurrences))]
    verbose: usize,

    #[clap(subcommand)]
    subcmd: SubCommand
}

#[derive(Parser)]
enum SubCommand {
    Query(QueryCommand),
    Random(RandomCommand)
}

/// builds a graph from the given arcs and runs a single shortest path query
#[derive(Parser)]
struct QueryCommand {

    /// number of vertices of the graph
    #[clap(short, long)]
    num_vertices: usize,

    /// arc given as origin:destination:weight, may be repeated
    #[clap(short, long = "arc")]
    arcs: Vec<ArcArgument>,

    /// start vertex of the query
    #[clap(short, long)]
    origin: NodeId,

    /// target vertex of the query
    #[clap(short, long)]
    destination: NodeId
}

/// creates a random graph and runs a single shortest path query on it
#[derive(Parser)]
struct RandomCommand {

    /// number of vertices of the graph
    #[clap(short, long)]
    num_vertices: usize,

    /// number of random arcs
    #[clap(short = 'm', long)]
    num_arcs: usize,

    /// largest arc weight
    #[clap(short = 'w', long, default_value="100")]
    max_weight: Weight,

    /// seed for the random number generator
    #[clap(short, long, default_value="0")]
    seed: u64,

    /// start vertex of the query
    #[clap(short, long)]
    origin: NodeId,

    /// target vertex of the query
    #[clap(short, long)]
    destination: NodeId
}

struct ArcArgument {
    origin: NodeId,
    destination: NodeId,
    weight: Weight
}

impl FromStr for ArcArgument {

    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        let split = value.split(':').collect::<Vec<&str>>();

        if split.len() != 3 {
            return Err(format!("expected origin:destination:weight, got '{}'", value));
        }

        let parse = |part: &str| part.trim().parse::<u64>().map_err(|e| format!("'{}' in arc '{}': {}", part, value, e));
        let weight = Weight::try_from(parse(split[2])?).map_err(|e| format!("weight in arc '{}': {}", value, e))?;

        Ok(ArcArgument {
            origin: parse(split[0])? as NodeId,
            destination: parse(split[1])? as NodeId,
            weight
        })
    }
}

fn main() {
    let opts: Opts = Opts::parse();
    init_logging(opts.verbose);

    if let Err(err) = run(opts.subcmd) {
        error!(%err, "query failed");
        process::exit(1);
    }
}

fn init_logging(verbose: usize) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(subcmd: SubCommand) -> Result<()> {
    match subcmd {
        SubCommand::Query(query) => {
            let mut graph = AdjacencyList::new(query.num_vertices);

            for arc in &query.arcs {
                graph.add_arc(arc.origin, arc.destination, arc.weight)?;
            }

            info!(num_vertices = graph.num_vertices(), num_arcs = graph.num_arcs(), "graph built");

            let result = graph.shortest_path(query.origin, query.destination)?;
            print_result(query.origin, query.destination, &result);
        },
        SubCommand::Random(random) => {
            let mut rng = StdRng::seed_from_u64(random.seed);
            let graph = random_graph(random.num_vertices, random.num_arcs, random.max_weight, &mut rng)?;

            info!(num_vertices = graph.num_vertices(), num_arcs = graph.num_arcs(), seed = random.seed, "random graph built");

            let (query_time, result) = measure_time(|| graph.shortest_path(random.origin, random.destination));
            let result = result?;

            print_result(random.origin, random.destination, &result);
            println!("query time: {} ns", query_time.as_nanos());
        }
    }

    Ok(())
}

fn print_result(origin: NodeId, destination: NodeId, result: &ShortestPath) {
    let path = result.path.iter().map(|node| node.to_string()).collect::<Vec<String>>().join(" -> ");

    if result.is_reachable() {
        println!("shortest path distance from {} to {}: {}", origin, destination, result.distance);
    }
    else {
        println!("shortest path distance from {} to {}: unreachable", origin, destination);
    }

    println!("path: {}", path);
}
