use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::error::{ResolverError, Result};
use crate::graph::SimpleGraph;

/// Degree every pregraph vertex must reach.
pub const CUBIC_DEGREE: usize = 3;

/// One entry of a pregraph's connection list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Connection {
    /// A proper edge when the endpoints differ, a loop when they coincide.
    Pair(usize, usize),
    /// A semi-edge hanging off a single vertex.
    Single(usize),
}

impl Connection {
    pub fn edge(u: usize, v: usize) -> Self {
        Connection::Pair(u, v)
    }

    pub fn loop_at(u: usize) -> Self {
        Connection::Pair(u, u)
    }

    pub fn semi_edge(u: usize) -> Self {
        Connection::Single(u)
    }

    pub fn is_loop(&self) -> bool {
        matches!(self, Connection::Pair(u, v) if u == v)
    }

    pub fn is_semi_edge(&self) -> bool {
        matches!(self, Connection::Single(_))
    }

    /// Endpoints as stored; a loop lists its vertex twice.
    pub fn endpoints(&self) -> impl Iterator<Item = usize> {
        let (first, second) = match *self {
            Connection::Pair(u, v) => (u, Some(v)),
            Connection::Single(u) => (u, None),
        };
        std::iter::once(first).chain(second)
    }

    fn map(&self, mut f: impl FnMut(usize) -> usize) -> Self {
        match *self {
            Connection::Pair(u, v) => Connection::Pair(f(u), f(v)),
            Connection::Single(u) => Connection::Single(f(u)),
        }
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connection::Pair(u, v) => write!(f, "({u}, {v})"),
            Connection::Single(u) => write!(f, "({u},)"),
        }
    }
}

/// Connections in production order. Relabeling, and therefore the matrix
/// and its sign variants, follow that order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pregraph {
    connections: Vec<Connection>,
}

impl Pregraph {
    pub fn new(connections: Vec<Connection>) -> Self {
        Pregraph { connections }
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Matrix order: largest vertex id plus one.
    pub fn order(&self) -> usize {
        self.connections
            .iter()
            .flat_map(Connection::endpoints)
            .max()
            .map_or(0, |max| max + 1)
    }

    /// Total degree of each vertex that appears in a connection.
    pub fn degrees(&self) -> BTreeMap<usize, usize> {
        let mut degrees = BTreeMap::new();
        for vertex in self.connections.iter().flat_map(Connection::endpoints) {
            *degrees.entry(vertex).or_insert(0) += 1;
        }
        degrees
    }

    pub fn degree(&self, vertex: usize) -> usize {
        self.connections
            .iter()
            .flat_map(Connection::endpoints)
            .filter(|&u| u == vertex)
            .count()
    }

    /// Checks that every vertex in `0..order` has degree exactly 3.
    pub fn validate(&self) -> Result<()> {
        let degrees = self.degrees();
        for vertex in 0..self.order() {
            let degree = degrees.get(&vertex).copied().unwrap_or(0);
            if degree != CUBIC_DEGREE {
                return Err(ResolverError::NotCubic { vertex, degree });
            }
        }
        Ok(())
    }

    pub fn is_cubic(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn loop_count(&self) -> usize {
        self.connections.iter().filter(|c| c.is_loop()).count()
    }

    pub fn semi_edge_count(&self) -> usize {
        self.connections.iter().filter(|c| c.is_semi_edge()).count()
    }

    /// Number of proper edges that repeat an earlier proper edge.
    pub fn repeated_edge_count(&self) -> usize {
        let mut seen: HashMap<(usize, usize), usize> = HashMap::new();
        for connection in &self.connections {
            if let Connection::Pair(u, v) = *connection {
                if u != v {
                    *seen.entry((u.min(v), u.max(v))).or_insert(0) += 1;
                }
            }
        }
        seen.values().map(|count| count - 1).sum()
    }

    /// Renumbers vertices to `0..k` in order of first appearance.
    pub fn relabel(&self) -> Pregraph {
        let mut labels: HashMap<usize, usize> = HashMap::new();
        let connections = self
            .connections
            .iter()
            .map(|connection| {
                connection.map(|u| {
                    let next = labels.len();
                    *labels.entry(u).or_insert(next)
                })
            })
            .collect();
        Pregraph { connections }
    }

    /// Strips loops and semi-edges and collapses repeated edges.
    pub fn underlying_graph(&self) -> Result<SimpleGraph> {
        let mut graph = SimpleGraph::new(self.order());
        for connection in &self.connections {
            if let Connection::Pair(u, v) = *connection {
                if u != v {
                    graph.add_edge(u, v)?;
                }
            }
        }
        Ok(graph)
    }
}

impl From<Vec<Connection>> for Pregraph {
    fn from(connections: Vec<Connection>) -> Self {
        Pregraph::new(connections)
    }
}

impl fmt::Display for Pregraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, connection) in self.connections.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{connection}")?;
        }
        write!(f, "]")
    }
}
