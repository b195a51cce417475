//! Error and test-outcome types.

use std::fmt;
use thiserror::Error;

/// Errors raised when building a graph strategy.
///
/// Both variants are configuration errors surfaced once at strategy
/// construction; no error is raised per draw.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphStratError {
    /// A bound is ill-formed on its own (zero minimum, max below min).
    #[error("invalid constraints: {message}")]
    InvalidConstraints { message: String },

    /// The bounds are individually well-formed but mutually unsatisfiable.
    #[error("infeasible constraints: {details}")]
    InfeasibleConstraints { details: String },
}

/// Result type for graphstrat operations.
pub type Result<T> = std::result::Result<T, GraphStratError>;

/// A shrinking step in the failure progression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShrinkStep {
    /// The counterexample value at this step.
    pub counterexample: String,
    /// The step number (0 = original, 1+ = shrink attempts).
    pub step: usize,
    /// Optional variable name for this input (e.g., "graph", "partition").
    pub variable_name: Option<String>,
}

/// Outcome of running a property over drawn graphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestResult {
    /// All tests passed.
    Pass { tests_run: usize },

    /// A test failed; `counterexample` is the minimal failing value found.
    Fail {
        counterexample: String,
        tests_run: usize,
        shrinks_performed: usize,
        /// The shrinking progression toward the minimal counterexample.
        shrink_steps: Vec<ShrinkStep>,
    },
}

impl TestResult {
    /// True for a passing outcome.
    pub fn is_pass(&self) -> bool {
        matches!(self, TestResult::Pass { .. })
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestResult::Pass { tests_run } => {
                write!(f, "  ✓ passed {} tests.", tests_run)
            }
            TestResult::Fail {
                counterexample,
                tests_run,
                shrinks_performed,
                shrink_steps,
            } => {
                writeln!(
                    f,
                    "  ✗ failed after {} tests and {} shrinks.",
                    tests_run, shrinks_performed
                )?;

                if !shrink_steps.is_empty() {
                    writeln!(f)?;
                    writeln!(f, "    Shrinking progression:")?;
                    for step in shrink_steps {
                        match &step.variable_name {
                            Some(name) => writeln!(
                                f,
                                "      │ forAll {} = {} -- {}",
                                step.step, step.counterexample, name
                            )?,
                            None => {
                                writeln!(f, "      │ Step {}: {}", step.step, step.counterexample)?
                            }
                        }
                    }
                    writeln!(f)?;
                }

                write!(f, "    Minimal counterexample: {}", counterexample)
            }
        }
    }
}
