//! Cubic pregraphs over small simple graphs, and a search for positive
//! kernel vectors of their signed adjacency matrices.
//!
//! [`cover`] turns each underlying graph into its distinct cubic pregraphs.
//! [`certifier`] tries to disprove each one: a pregraph survives only if
//! some sign variant of its adjacency matrix has an integer kernel vector
//! with every coordinate at least 1. [`engine::Resolver`] drives both over
//! a [`corpus::Corpus`] and reports the survivors.

pub mod certifier;
pub mod config;
pub mod corpus;
pub mod cover;
pub mod engine;
pub mod error;
pub mod feasibility;
pub mod graph;
pub mod isomorphism;
pub mod kernel;
pub mod matrix;
pub mod pregraph;
pub mod stats;
mod subsets;

pub use certifier::{disprove, Certificate, Certifier, Pretest, SearchPolicy, Verdict, Witness};
pub use config::ResolverConfig;
pub use corpus::Corpus;
pub use cover::{generate_pregraphs, generate_pregraphs_with};
pub use engine::{Report, Resolution, Resolver};
pub use error::{ResolverError, Result};
pub use feasibility::{
    Feasibility, FeasibilitySolver, IlpSolver, IntegerProgram, SolverError,
};
pub use graph::SimpleGraph;
pub use isomorphism::{ExactIsomorphism, IsomorphismOracle};
pub use matrix::{
    adjacency_matrix, enumerate_sign_variants, flippable_positions, sign_variants, SignVariants,
};
pub use pregraph::{Connection, Pregraph};
pub use stats::RunStats;
