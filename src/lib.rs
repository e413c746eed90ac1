#![deny(clippy::all)]

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};

use itertools::Itertools;
use log::LevelFilter;
use thiserror::Error;

use std::fs::File;
use std::io::{self, Read, Write};

pub mod input;

pub use input::{InputError, Network};

type Error = anyhow::Error;

pub fn app() -> App<'static, 'static> {
    App::new("graphlab")
        .version("1.0")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Explore weighted, undirected graphs")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .value_name("INPUT")
                .help("Graph description to read, or - for stdin")
                .global(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .global(true)
                .help("Log more detail, repeat for even more"),
        )
        .subcommand(SubCommand::with_name("print").about("Show each vertex and its neighbors"))
        .subcommand(
            SubCommand::with_name("bfs")
                .about("Breadth-first traversal from a vertex")
                .arg(Arg::with_name("start").value_name("START").required(true)),
        )
        .subcommand(
            SubCommand::with_name("dijkstra")
                .about("Distance from a vertex to every other vertex")
                .arg(Arg::with_name("start").value_name("START").required(true)),
        )
        .subcommand(
            SubCommand::with_name("path")
                .about("Shortest path between two vertices")
                .arg(Arg::with_name("from").value_name("FROM").required(true))
                .arg(Arg::with_name("to").value_name("TO").required(true)),
        )
}

pub fn driver() -> Result<(), Error> {
    let matches = app().get_matches();

    init_logging(&matches);

    let (command, submatches) = matches.subcommand();
    let submatches = submatches.ok_or(GraphLabError::MissingCommand)?;

    let filename = submatches
        .value_of("input")
        .or_else(|| matches.value_of("input"));
    let reader = get_input_reader(filename)?;
    let network = Network::read(reader)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(command, submatches, &network, &mut out)
}

fn init_logging(matches: &ArgMatches) {
    let (_, submatches) = matches.subcommand();
    let verbosity = std::cmp::max(
        matches.occurrences_of("verbose"),
        submatches.map(|m| m.occurrences_of("verbose")).unwrap_or(0),
    );

    let mut builder = env_logger::Builder::from_default_env();
    match verbosity {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        2 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    // Only fails when a logger is already installed, e.g. across tests.
    if let Err(e) = builder.try_init() {
        log::debug!("Logger already initialized: {}", e);
    }
}

/// Execute a single subcommand against a graph, writing results to `out`.
pub fn run(
    command: &str,
    matches: &ArgMatches,
    network: &Network,
    out: &mut dyn Write,
) -> Result<(), Error> {
    match command {
        "print" => write!(out, "{}", network.graph())?,
        "bfs" => {
            let start = network.lookup(required(matches, "start")?)?;
            writeln!(out, "{}", bfs(network, start)?)?;
        }
        "dijkstra" => {
            let start = network.lookup(required(matches, "start")?)?;
            write!(out, "{}", dijkstra(network, start)?)?;
        }
        "path" => {
            let from = network.lookup(required(matches, "from")?)?;
            let to = network.lookup(required(matches, "to")?)?;
            writeln!(out, "{}", path(network, from, to)?)?;
        }
        other => return Err(GraphLabError::UnknownCommand(other.to_owned()).into()),
    }
    Ok(())
}

fn required<'a>(matches: &'a ArgMatches, name: &'static str) -> Result<&'a str, GraphLabError> {
    matches
        .value_of(name)
        .ok_or(GraphLabError::MissingArgument(name))
}

/// Names of the vertices reachable from `start`, in visitation order.
pub fn bfs(network: &Network, start: graph::VertexId) -> Result<String, InputError> {
    Ok(network
        .graph()
        .bfs(start)?
        .map(|(_, name)| name.as_str())
        .join(" "))
}

/// One line per vertex with its distance from `start`.
pub fn dijkstra(network: &Network, start: graph::VertexId) -> Result<String, InputError> {
    let distances = network.graph().dijkstra(start)?;
    let mut report = String::new();
    for (id, distance) in distances.iter() {
        report.push_str(&format!("{}: {}\n", network.name(id)?, distance));
    }
    Ok(report)
}

pub fn path(
    network: &Network,
    from: graph::VertexId,
    to: graph::VertexId,
) -> Result<String, InputError> {
    match network.graph().shortest_path(from, to)? {
        Some(route) => {
            let names = route
                .nodes()
                .iter()
                .map(|id| network.name(*id))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(format!("{} (total {})", names.join(" -> "), route.weight()))
        }
        None => Ok(format!(
            "No path from {} to {}",
            network.name(from)?,
            network.name(to)?
        )),
    }
}

type BoxedRead = Box<dyn Read + 'static>;

pub fn get_input_reader(filename: Option<&str>) -> Result<BoxedRead, GraphLabError> {
    let reader: BoxedRead = match filename {
        None | Some("-") => Box::new(io::stdin()),
        Some(path) => {
            let f = File::open(path)
                .map_err(|e| GraphLabError::InputNotFound(path.to_owned(), e))?;
            Box::new(f)
        }
    };
    Ok(reader)
}

#[derive(Debug, Error)]
pub enum GraphLabError {
    #[error("No command given")]
    MissingCommand,

    #[error("Unknown command {0}")]
    UnknownCommand(String),

    #[error("Missing argument {0}")]
    MissingArgument(&'static str),

    #[error("Input not found: {0}")]
    InputNotFound(String, #[source] io::Error),
}
