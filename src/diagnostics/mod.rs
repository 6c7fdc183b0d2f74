//! Structured setup diagnostics.
//!
//! Advisory findings from solver setup are collected into a typed report
//! returned to the caller, instead of being printed to ambient output. The
//! same findings are also emitted through the `log` facade so embedding
//! applications with a logger installed keep visibility.

use std::fmt;

use crate::types::Dimension;

/// Advisory warnings produced during solver setup.
///
/// Warnings never abort setup; they describe configurations that are legal
/// but outside the recommended operating envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum SetupWarning {
    /// Configured CFL bound exceeds the recommended maximum for this
    /// sweep mode.
    CflExceedsRecommended {
        /// Configured bound.
        cfl_max: f64,
        /// Recommended maximum.
        recommended: f64,
        /// Whether dimensional splitting is enabled.
        dim_split: bool,
    },
}

impl fmt::Display for SetupWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CflExceedsRecommended {
                cfl_max,
                recommended,
                dim_split,
            } => {
                let mode = if *dim_split {
                    "dimensionally split"
                } else {
                    "unsplit"
                };
                write!(
                    f,
                    "cfl_max={cfl_max} exceeds the recommended value {recommended} for {mode} sweeps"
                )
            }
        }
    }
}

/// Outcome of a successful solver setup.
#[derive(Debug, Clone, PartialEq)]
pub struct SetupReport {
    /// Dimension of the solver that ran setup.
    pub dimension: Dimension,
    /// Ghost width the state was left with.
    pub ghost_width: usize,
    /// Advisory warnings collected during setup.
    pub warnings: Vec<SetupWarning>,
}

impl SetupReport {
    /// Create a clean report with no warnings.
    pub fn new(dimension: Dimension, ghost_width: usize) -> Self {
        Self {
            dimension,
            ghost_width,
            warnings: Vec::new(),
        }
    }

    /// Record a warning, also emitting it through the `log` facade.
    pub fn warn(&mut self, warning: SetupWarning) {
        log::warn!("{warning}");
        self.warnings.push(warning);
    }

    /// Whether any warnings were collected.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
