//! # wavefv
//!
//! Setup layer for finite-volume wave-propagation solvers over
//! partitioned 1D/2D states.
//!
//! The numerical update itself (Riemann solves, sweeps, ghost exchange)
//! belongs to external kernels and the surrounding driver; this crate
//! owns what has to be agreed on before the first step:
//!
//! - Ghost-width reconciliation: a state's stencil width is forced to the
//!   solver's requirement through an explicit collective operation
//! - Limiter tables: per-wave-family slope-limiter selection, validated
//!   and broadcast
//! - Kernel dispatch: Fortran kernels get their working arrays allocated
//!   and sized up front; 2D rejects anything else
//! - CFL policy: advisory bound checks and the length-1 reduction vector
//!   that carries the per-step CFL maximum across partitions
//!
//! # Example
//!
//! ```
//! use wavefv::grid::Patch1D;
//! use wavefv::solver::{SolverConfig1D, WaveSolver1D};
//! use wavefv::state::{Solution, Solutions, State1D};
//!
//! let patches = vec![Patch1D::new(100, 0.01).unwrap()];
//! let state = State1D::new(patches, 2, 0).unwrap();
//! let mut solutions = Solutions::with_current(Solution::new(state));
//!
//! let mut solver = WaveSolver1D::new(SolverConfig1D::new(2, 2));
//! let report = solver.setup(&mut solutions).unwrap();
//! assert_eq!(report.ghost_width, 2);
//! ```

pub mod diagnostics;
pub mod error;
pub mod grid;
pub mod kernels;
pub mod limiters;
pub mod solver;
pub mod state;
pub mod types;

// Re-export the main types for convenience
pub use diagnostics::{SetupReport, SetupWarning};
pub use error::{SetupError, SetupResult};
pub use grid::{Patch1D, Patch2D};
pub use kernels::{FortranWorkspace1D, FortranWorkspace2D, KernelLanguage};
pub use limiters::{LimiterKind, LimiterTable};
pub use solver::{ReductionVec, SolverConfig1D, SolverConfig2D, WaveSolver1D, WaveSolver2D};
pub use state::{Solution, Solutions, State1D, State2D, CURRENT};
pub use types::{CellIndex, Dimension, PartitionIndex, WaveIndex};
