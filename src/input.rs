//! Reading named graphs from plain text.
//!
//! Each line is either a single vertex name, or an edge written as
//! two vertex names and a weight, e.g. `A B 1.5`. Names and weights
//! may also be separated by commas or colons, and the two names by a
//! standalone `-`, as in `A - B : 1.5`. Names can't start with `-`.
//! Blank lines and anything after a `#` are ignored.

use std::collections::HashMap;
use std::io::{self, BufRead, BufReader, Read};
use std::str::FromStr;

use graph::{GraphError, VertexId, WeightedGraph};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Can't parse line {0}: {1:?}")]
    Malformed(usize, String),

    #[error("Invalid weight {1:?} on line {0}")]
    InvalidWeight(usize, String),

    #[error("No vertex named {0:?}")]
    UnknownVertex(String),

    #[error("Unable to read input")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type Result<T> = std::result::Result<T, InputError>;

#[derive(Debug, Clone, PartialEq)]
enum Statement {
    Vertex(String),
    Edge(String, String, f64),
}

fn parse_line(number: usize, line: &str) -> Result<Option<Statement>> {
    lazy_static! {
        static ref RE: Regex = Regex::new(
            r"^(?P<a>[^\s,:-][^\s,:]*)(?:[\s,:]+(?:-[\s,:]+)?(?P<b>[^\s,:-][^\s,:]*)[\s,:]+(?P<weight>[^\s,:]+))?$"
        )
        .unwrap();
    }

    let line = match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    }
    .trim();

    if line.is_empty() {
        return Ok(None);
    }

    let cap = RE
        .captures(line)
        .ok_or_else(|| InputError::Malformed(number, line.to_owned()))?;

    let a = cap["a"].to_owned();
    match (cap.name("b"), cap.name("weight")) {
        (Some(b), Some(w)) => {
            let weight: f64 = w
                .as_str()
                .parse()
                .map_err(|_| InputError::InvalidWeight(number, w.as_str().to_owned()))?;

            // Shortest paths are only meaningful for finite, non-negative weights.
            if !weight.is_finite() || weight < 0.0 {
                return Err(InputError::InvalidWeight(number, w.as_str().to_owned()));
            }
            Ok(Some(Statement::Edge(a, b.as_str().to_owned(), weight)))
        }
        _ => Ok(Some(Statement::Vertex(a))),
    }
}

/// A graph whose vertices are identified by name.
#[derive(Debug, Default, Clone)]
pub struct Network {
    graph: WeightedGraph<String>,
    names: HashMap<String, VertexId>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the vertex with this name, adding it if necessary.
    pub fn vertex(&mut self, name: &str) -> VertexId {
        if let Some(id) = self.names.get(name) {
            return *id;
        }
        let id = self.graph.insert(name.to_owned());
        self.names.insert(name.to_owned(), id);
        id
    }

    /// Connect two named vertices, adding them if necessary.
    pub fn connect(&mut self, a: &str, b: &str, weight: f64) -> Result<()> {
        let a = self.vertex(a);
        let b = self.vertex(b);
        self.graph.add_edge(a, b, weight)?;
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Result<VertexId> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| InputError::UnknownVertex(name.to_owned()))
    }

    pub fn name(&self, id: VertexId) -> Result<&str> {
        Ok(self.graph.data(id)?.as_str())
    }

    pub fn graph(&self) -> &WeightedGraph<String> {
        &self.graph
    }

    fn apply(&mut self, statement: Statement) -> Result<()> {
        match statement {
            Statement::Vertex(name) => {
                self.vertex(&name);
                Ok(())
            }
            Statement::Edge(a, b, weight) => self.connect(&a, &b, weight),
        }
    }

    pub fn read(input: Box<dyn Read + 'static>) -> Result<Self> {
        let reader = BufReader::new(input);

        let mut network = Network::new();
        for (idx, line) in reader.lines().enumerate() {
            if let Some(statement) = parse_line(idx + 1, &line?)? {
                network.apply(statement)?;
            }
        }

        debug!(
            "Read {} vertices and {} edges",
            network.graph.vertex_count(),
            network.graph.edge_count()
        );
        Ok(network)
    }
}

impl FromStr for Network {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self> {
        let mut network = Network::new();
        for (idx, line) in s.lines().enumerate() {
            if let Some(statement) = parse_line(idx + 1, line)? {
                network.apply(statement)?;
            }
        }
        Ok(network)
    }
}
