//! Error types for solver setup.

use thiserror::Error;

use crate::kernels::KernelLanguage;
use crate::types::Dimension;

/// Errors that can occur during solver setup.
///
/// Setup performs no retry or recovery: the first failure aborts the
/// routine and surfaces to the caller unmodified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// Kernel language not supported for the requested dimension.
    #[error("Only Fortran kernels are supported in {dimension}; got {language}")]
    UnsupportedKernel {
        language: KernelLanguage,
        dimension: Dimension,
    },

    /// Limiter list length is neither 1 nor the number of wave families.
    #[error("Limiter table must have 1 or {expected} entries, got {actual}")]
    InvalidLimiterTable { expected: usize, actual: usize },

    /// Numeric limiter identifier outside the catalog.
    #[error("Unknown limiter code {0} (valid codes are 0-4)")]
    UnknownLimiterCode(u8),

    /// The solution registry has no entry under the requested label.
    #[error("No solution registered under label {0:?}")]
    MissingSolution(String),

    /// State shape is inconsistent with the solver configuration.
    #[error("State has {state_num_eqn} equations but the solver is configured for {config_num_eqn}")]
    StateMismatch {
        state_num_eqn: usize,
        config_num_eqn: usize,
    },

    /// A patch dimension or spacing is not strictly positive.
    #[error("Invalid patch geometry: {0}")]
    InvalidPatch(String),
}

impl SetupError {
    /// Create an unsupported-kernel error.
    pub fn unsupported_kernel(language: KernelLanguage, dimension: Dimension) -> Self {
        Self::UnsupportedKernel {
            language,
            dimension,
        }
    }

    /// Create a missing-solution error.
    pub fn missing_solution(label: impl Into<String>) -> Self {
        Self::MissingSolution(label.into())
    }
}

/// Convenience alias for setup results.
pub type SetupResult<T> = Result<T, SetupError>;
