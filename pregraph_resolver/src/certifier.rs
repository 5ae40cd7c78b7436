use std::fmt;

use nalgebra::DMatrix;
use tracing::{debug, info, trace};

use crate::error::Result;
use crate::feasibility::{Feasibility, FeasibilitySolver, IntegerProgram, IlpSolver};
use crate::kernel::right_kernel;
use crate::matrix::{adjacency_matrix, sign_variants};
use crate::pregraph::Pregraph;

/// How far the sign-variant sweep goes once a certificate turns up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchPolicy {
    /// Stop at the first witness.
    #[default]
    FirstSuccess,
    /// Sweep every variant and keep every witness.
    Exhaustive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// No sign variant admits a positive kernel vector.
    Disproved,
    /// At least one witness exists.
    NotDisproved,
}

/// Outcome of the check on the unsigned adjacency matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pretest {
    /// Kernel of dimension 2 or more: a zero coordinate can always be forced.
    KernelTooLarge { dimension: usize },
    /// One-dimensional kernel whose basis vector vanishes at `index`.
    ZeroCoordinate { index: usize },
    /// Nothing decided; the full search runs.
    Inconclusive { dimension: usize },
}

impl Pretest {
    pub fn disproves(&self) -> bool {
        !matches!(self, Pretest::Inconclusive { .. })
    }

    pub fn kernel_dimension(&self) -> usize {
        match *self {
            Pretest::KernelTooLarge { dimension } | Pretest::Inconclusive { dimension } => dimension,
            Pretest::ZeroCoordinate { .. } => 1,
        }
    }
}

pub fn pretest(base: &DMatrix<i64>) -> Result<Pretest> {
    let kernel = right_kernel(base)?;
    let dimension = kernel.dimension();
    if dimension > 1 {
        return Ok(Pretest::KernelTooLarge { dimension });
    }
    if let Some(vector) = kernel.basis().first() {
        if let Some(index) = vector.iter().position(|&x| x == 0) {
            return Ok(Pretest::ZeroCoordinate { index });
        }
    }
    Ok(Pretest::Inconclusive { dimension })
}

/// A positive kernel vector of one sign variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Witness {
    /// Subset mask of the sign variant that produced it.
    pub variant: usize,
    /// Integer coefficients of the kernel basis vectors.
    pub coefficients: Vec<i64>,
    /// The combined vector, one coordinate per matrix row, all at least 1.
    pub vector: Vec<i64>,
}

impl fmt::Display for Witness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.vector.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, "]")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Certificate {
    pub verdict: Verdict,
    pub pretest: Pretest,
    pub witnesses: Vec<Witness>,
    pub variants_examined: usize,
    pub solver_calls: usize,
}

impl Certificate {
    pub fn is_disproved(&self) -> bool {
        self.verdict == Verdict::Disproved
    }
}

pub struct Certifier<S = IlpSolver> {
    solver: S,
    policy: SearchPolicy,
}

impl Default for Certifier<IlpSolver> {
    fn default() -> Self {
        Certifier::new(IlpSolver, SearchPolicy::default())
    }
}

impl<S: FeasibilitySolver> Certifier<S> {
    pub fn new(solver: S, policy: SearchPolicy) -> Self {
        Certifier { solver, policy }
    }

    pub fn policy(&self) -> SearchPolicy {
        self.policy
    }

    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// A pregraph survives when some sign variant of its matrix has a kernel
    /// vector with every coordinate at least 1.
    pub fn disprove(&self, pregraph: &Pregraph) -> Result<Certificate> {
        let pregraph = pregraph.relabel();
        let base = adjacency_matrix(&pregraph);

        let pretest = pretest(&base)?;
        if pretest.disproves() {
            debug!(%pregraph, ?pretest, "disproved by pretest");
            return Ok(Certificate {
                verdict: Verdict::Disproved,
                pretest,
                witnesses: Vec::new(),
                variants_examined: 0,
                solver_calls: 0,
            });
        }

        let mut witnesses = Vec::new();
        let mut variants_examined = 0;
        let mut solver_calls = 0;
        for (variant, matrix) in sign_variants(&base)?.enumerate() {
            variants_examined += 1;
            let kernel = right_kernel(&matrix)?;
            if kernel.is_trivial() {
                continue;
            }
            let program = IntegerProgram::kernel_positivity(&kernel);
            solver_calls += 1;
            match self.solver.solve(&program)? {
                Feasibility::Infeasible => trace!(variant, "no positive kernel vector"),
                Feasibility::Feasible(coefficients) => {
                    let vector = kernel.combine(&coefficients)?;
                    info!(%pregraph, variant, ?vector, "witness found");
                    witnesses.push(Witness {
                        variant,
                        coefficients,
                        vector,
                    });
                    if self.policy == SearchPolicy::FirstSuccess {
                        break;
                    }
                }
            }
        }

        let verdict = if witnesses.is_empty() {
            Verdict::Disproved
        } else {
            Verdict::NotDisproved
        };
        debug!(%pregraph, ?verdict, variants_examined, solver_calls, "search finished");
        Ok(Certificate {
            verdict,
            pretest,
            witnesses,
            variants_examined,
            solver_calls,
        })
    }
}

/// Runs the certifier with the default simplex solver.
pub fn disprove(pregraph: &Pregraph, policy: SearchPolicy) -> Result<Certificate> {
    Certifier::new(IlpSolver, policy).disprove(pregraph)
}
