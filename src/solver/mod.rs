//! Dimensional solvers and their setup orchestration.
//!
//! # Submodules
//!
//! - [`config`]: solver configuration with classic defaults
//! - [`wave_1d`]: 1D solver
//! - [`wave_2d`]: 2D solver (Fortran kernels only)
//! - [`reduction`]: length-1 reduction vector for the CFL maximum
//!
//! Setup is a single-shot, sequential initialization routine invoked by
//! the driver exactly once before the first step. Both dimensional setups
//! run to completion or fail; there is no partial or retryable state in
//! between. Because the ghost-width change and the reduction-vector
//! allocation are collective, the driver must invoke setup uniformly on
//! every partition.

pub mod config;
pub mod reduction;
pub mod wave_1d;
pub mod wave_2d;

pub use config::{SolverConfig1D, SolverConfig2D};
pub use reduction::ReductionVec;
pub use wave_1d::WaveSolver1D;
pub use wave_2d::WaveSolver2D;
