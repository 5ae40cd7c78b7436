use std::io::{self, Write};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::certifier::{Certificate, Certifier};
use crate::config::ResolverConfig;
use crate::corpus::Corpus;
use crate::cover::generate_pregraphs_with;
use crate::error::Result;
use crate::feasibility::{FeasibilitySolver, IlpSolver};
use crate::graph::SimpleGraph;
use crate::isomorphism::{ExactIsomorphism, IsomorphismOracle};
use crate::pregraph::Pregraph;
use crate::stats::{kernel_dimension_histogram, RunStats};

/// A pregraph that was not disproved, with the evidence.
#[derive(Clone, Debug)]
pub struct Resolution {
    pub pregraph: Pregraph,
    pub certificate: Certificate,
}

#[derive(Clone, Debug)]
pub struct Report {
    pub pregraph_count: usize,
    /// NOT_DISPROVED pregraphs, in generation order.
    pub survivors: Vec<Resolution>,
    pub stats: RunStats,
}

impl Report {
    pub fn remaining(&self) -> usize {
        self.survivors.len()
    }

    /// Console report: pregraph count, each survivor (preceded by its
    /// witnesses when asked), then the number of remaining cases.
    pub fn write_summary<W: Write>(&self, out: &mut W, show_witnesses: bool) -> io::Result<()> {
        writeln!(out, "Number of pregraphs: {}", self.pregraph_count)?;
        for survivor in &self.survivors {
            if show_witnesses {
                for witness in &survivor.certificate.witnesses {
                    writeln!(out, "{witness}")?;
                }
            }
            writeln!(out, "{}", survivor.pregraph)?;
        }
        writeln!(out, "Remaining cases: {}", self.remaining())
    }
}

/// Runs generation and certification over a corpus.
pub struct Resolver<S = IlpSolver, O = ExactIsomorphism> {
    certifier: Certifier<S>,
    oracle: O,
    parallel: bool,
}

impl Resolver {
    pub fn new(config: &ResolverConfig) -> Self {
        Resolver::with_parts(
            Certifier::new(config.solver(), config.policy),
            ExactIsomorphism,
            config.parallel,
        )
    }
}

impl<S, O> Resolver<S, O>
where
    S: FeasibilitySolver + Sync,
    O: IsomorphismOracle + Sync,
{
    pub fn with_parts(certifier: Certifier<S>, oracle: O, parallel: bool) -> Self {
        Resolver {
            certifier,
            oracle,
            parallel,
        }
    }

    /// Decodes each graph6 string and collects its covers, in input order.
    pub fn pregraphs(&self, encodings: &[String]) -> Result<Vec<Pregraph>> {
        let mut pregraphs = Vec::new();
        for encoding in encodings {
            let graph = SimpleGraph::from_graph6(encoding)?;
            let covers = generate_pregraphs_with(&graph, &self.oracle)?;
            debug!(%encoding, covers = covers.len(), "expanded base graph");
            pregraphs.extend(covers);
        }
        Ok(pregraphs)
    }

    /// One certificate per pregraph, in input order.
    pub fn certify(&self, pregraphs: &[Pregraph]) -> Result<Vec<Certificate>> {
        if self.parallel {
            pregraphs
                .par_iter()
                .map(|pregraph| self.certifier.disprove(pregraph))
                .collect()
        } else {
            pregraphs
                .iter()
                .map(|pregraph| self.certifier.disprove(pregraph))
                .collect()
        }
    }

    pub fn resolve(&self, corpus: &Corpus, orbits: usize) -> Result<Report> {
        let encodings = corpus.graphs(orbits)?;
        let pregraphs = self.pregraphs(encodings)?;
        info!(
            orbits,
            base_graphs = encodings.len(),
            pregraphs = pregraphs.len(),
            "generated pregraphs"
        );
        self.resolve_pregraphs(pregraphs)
    }

    pub fn resolve_pregraphs(&self, pregraphs: Vec<Pregraph>) -> Result<Report> {
        let certificates = self.certify(&pregraphs)?;
        let stats = RunStats::from_certificates(&certificates);
        info!(
            pregraphs = stats.pregraphs,
            kernel_too_large = stats.kernel_too_large,
            zero_coordinate = stats.zero_coordinate,
            disproved_by_search = stats.disproved_by_search,
            not_disproved = stats.not_disproved,
            solver_calls = stats.solver_calls,
            "certification finished"
        );
        debug!(
            histogram = ?kernel_dimension_histogram(&certificates, 4),
            "base kernel dimensions"
        );

        let pregraph_count = pregraphs.len();
        let survivors = pregraphs
            .into_iter()
            .zip(certificates)
            .filter(|(_, certificate)| !certificate.is_disproved())
            .map(|(pregraph, certificate)| Resolution {
                pregraph,
                certificate,
            })
            .collect();
        Ok(Report {
            pregraph_count,
            survivors,
            stats,
        })
    }
}
