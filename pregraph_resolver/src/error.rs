use thiserror::Error;

use crate::feasibility::SolverError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ResolverError>;

/// Everything that can go wrong between reading a corpus and printing a verdict.
#[derive(Error, Debug)]
pub enum ResolverError {
    /// A graph6 string could not be decoded.
    #[error("invalid graph6 string {encoding:?}: {reason}")]
    Graph6 { encoding: String, reason: String },

    /// A vertex id does not fit the graph it is used in.
    #[error("vertex {vertex} out of range for a graph on {order} vertices")]
    VertexOutOfRange { vertex: usize, order: usize },

    /// Simple graphs carry no loops.
    #[error("loop at vertex {0} is not allowed in a simple graph")]
    SelfLoop(usize),

    /// Only edges of the underlying graph can be doubled.
    #[error("({u}, {v}) is not an edge of the underlying graph")]
    NotAnEdge { u: usize, v: usize },

    /// Underlying graphs must have maximum degree 3.
    #[error("vertex {vertex} has degree {degree}, a cubic pregraph needs at most 3")]
    DegreeTooLarge { vertex: usize, degree: usize },

    /// A pregraph vertex whose total degree is not 3.
    #[error("vertex {vertex} has degree {degree} in the pregraph, expected 3")]
    NotCubic { vertex: usize, degree: usize },

    /// Bitmask enumeration is capped at 63 elements.
    #[error("{count} {what} exceed the enumeration limit of {limit}")]
    EnumerationLimit {
        what: &'static str,
        count: usize,
        limit: usize,
    },

    /// No corpus registered for the requested orbit count.
    #[error("Missing data: provide underlying graphs for {0} orbits")]
    MissingCorpus(usize),

    /// A value left the range of `i64`.
    #[error("integer overflow while {0}")]
    Overflow(&'static str),

    /// IO error while reading corpus files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The feasibility solver failed for a reason other than infeasibility.
    #[error(transparent)]
    Solver(#[from] SolverError),
}
