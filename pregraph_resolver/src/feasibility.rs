use good_lp::solvers::microlp::microlp;
use good_lp::{
    variable, Expression, IntoAffineExpression, ProblemVariables, ResolutionError, Solution,
    SolverModel, Variable,
};
use thiserror::Error;
use tracing::trace;

use crate::kernel::Kernel;

/// Distance from the nearest integer tolerated when reading values back.
const INTEGRALITY_TOLERANCE: f64 = 1e-6;

/// One constraint `coefficients · y >= lower`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constraint {
    pub coefficients: Vec<i64>,
    pub lower: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegerProgram {
    variables: usize,
    constraints: Vec<Constraint>,
}

impl IntegerProgram {
    pub fn new(variables: usize) -> Self {
        IntegerProgram {
            variables,
            constraints: Vec::new(),
        }
    }

    pub fn add_constraint(&mut self, coefficients: Vec<i64>, lower: i64) -> Result<(), SolverError> {
        if coefficients.len() != self.variables {
            return Err(SolverError::DimensionMismatch {
                row: self.constraints.len(),
                expected: self.variables,
                found: coefficients.len(),
            });
        }
        self.constraints.push(Constraint {
            coefficients,
            lower,
        });
        Ok(())
    }

    /// One integer coefficient per basis vector; every coordinate of the
    /// combined vector must be at least 1.
    pub fn kernel_positivity(kernel: &Kernel) -> Self {
        let constraints = (0..kernel.ambient_dimension())
            .map(|i| Constraint {
                coefficients: kernel.basis().iter().map(|vector| vector[i]).collect(),
                lower: 1,
            })
            .collect();
        IntegerProgram {
            variables: kernel.dimension(),
            constraints,
        }
    }

    pub fn variables(&self) -> usize {
        self.variables
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Index of the first constraint `y` violates, if any.
    pub fn first_violated(&self, y: &[i64]) -> Option<usize> {
        self.constraints.iter().position(|constraint| {
            let value: i128 = constraint
                .coefficients
                .iter()
                .zip(y)
                .map(|(&a, &x)| i128::from(a) * i128::from(x))
                .sum();
            value < i128::from(constraint.lower)
        })
    }

    pub fn is_satisfied_by(&self, y: &[i64]) -> bool {
        y.len() == self.variables && self.first_violated(y).is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Feasibility {
    /// An integer assignment satisfying every constraint.
    Feasible(Vec<i64>),
    /// No integer assignment exists. This is an answer, not a failure.
    Infeasible,
}

/// Solver failures other than infeasibility. These abort a run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("constraint {row} has {found} coefficients, expected {expected}")]
    DimensionMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("integer program is unbounded")]
    Unbounded,

    #[error("solver backend failed: {0}")]
    Backend(String),

    #[error("value of variable {index} is not an integer in range")]
    NotIntegral { index: usize },

    #[error("returned point violates constraint {row}")]
    Rounding { row: usize },
}

pub trait FeasibilitySolver {
    fn solve(&self, program: &IntegerProgram) -> Result<Feasibility, SolverError>;
}

impl<S: FeasibilitySolver + ?Sized> FeasibilitySolver for &S {
    fn solve(&self, program: &IntegerProgram) -> Result<Feasibility, SolverError> {
        (**self).solve(program)
    }
}

/// Mixed-integer solver on the `good_lp` microlp backend.
///
/// Minimises the sum of all rows. That objective is bounded below by the sum
/// of the lower bounds, so a feasible program always has an optimum.
#[derive(Clone, Copy, Debug, Default)]
pub struct IlpSolver;

impl FeasibilitySolver for IlpSolver {
    fn solve(&self, program: &IntegerProgram) -> Result<Feasibility, SolverError> {
        // 1. Rows without variables decide themselves.
        let mut rows = Vec::with_capacity(program.constraints().len());
        for constraint in program.constraints() {
            if constraint.coefficients.iter().all(|&a| a == 0) {
                if constraint.lower > 0 {
                    return Ok(Feasibility::Infeasible);
                }
                continue;
            }
            rows.push(constraint);
        }
        if rows.is_empty() {
            return Ok(Feasibility::Feasible(vec![0; program.variables()]));
        }

        // 2. One free integer variable per column.
        let mut vars = ProblemVariables::new();
        let y: Vec<Variable> = (0..program.variables())
            .map(|_| vars.add(variable().integer()))
            .collect();

        let mut objective: Expression = 0.into();
        let mut constraints = Vec::with_capacity(rows.len());
        for constraint in &rows {
            let mut row: Expression = 0.into();
            for (&a, &v) in constraint.coefficients.iter().zip(&y) {
                if a != 0 {
                    row += v.into_expression() * a as f64;
                }
            }
            objective += row.clone();
            constraints.push(row.geq(constraint.lower as f64));
        }

        // 3. Solve; infeasibility is an answer, anything else is fatal.
        let mut model = vars.minimise(objective).using(microlp);
        for constraint in constraints {
            model.add_constraint(constraint);
        }
        let solution = match model.solve() {
            Ok(solution) => solution,
            Err(ResolutionError::Infeasible) => {
                trace!(rows = rows.len(), "integer program infeasible");
                return Ok(Feasibility::Infeasible);
            }
            Err(ResolutionError::Unbounded) => return Err(SolverError::Unbounded),
            Err(e) => return Err(SolverError::Backend(e.to_string())),
        };

        // 4. Read back integers and re-check them exactly.
        let point = y
            .iter()
            .enumerate()
            .map(|(index, &v)| {
                integral(solution.value(v)).ok_or(SolverError::NotIntegral { index })
            })
            .collect::<Result<Vec<i64>, SolverError>>()?;
        if let Some(row) = program.first_violated(&point) {
            return Err(SolverError::Rounding { row });
        }
        Ok(Feasibility::Feasible(point))
    }
}

fn integral(value: f64) -> Option<i64> {
    let rounded = value.round();
    // Integers beyond 2^53 are not exact in f64.
    if !rounded.is_finite() || rounded.abs() > 9.0e15 {
        return None;
    }
    if (value - rounded).abs() > INTEGRALITY_TOLERANCE {
        return None;
    }
    Some(rounded as i64)
}
