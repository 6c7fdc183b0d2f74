//! 2D wave-propagation solver.

use crate::diagnostics::{SetupReport, SetupWarning};
use crate::error::{SetupError, SetupResult};
use crate::kernels::{FortranWorkspace2D, KernelLanguage};
use crate::limiters::LimiterTable;
use crate::state::{Solutions, State2D};
use crate::types::Dimension;

use super::config::SolverConfig2D;
use super::reduction::ReductionVec;

/// 2D finite-volume solver over a partitioned state.
///
/// Only Fortran kernels are supported in 2D. Besides the limiter table
/// and kernel workspace, setup allocates the length-1 reduction vector
/// that carries the per-step CFL maximum across partitions.
#[derive(Clone, Debug)]
pub struct WaveSolver2D {
    config: SolverConfig2D,
    mthlim: Option<LimiterTable>,
    workspace: Option<FortranWorkspace2D>,
    cfl_vec: Option<ReductionVec>,
}

impl WaveSolver2D {
    /// Create a solver from a configuration. No allocation happens until
    /// [`WaveSolver2D::setup`].
    pub fn new(config: SolverConfig2D) -> Self {
        Self {
            config,
            mthlim: None,
            workspace: None,
            cfl_vec: None,
        }
    }

    /// The solver configuration.
    pub fn config(&self) -> &SolverConfig2D {
        &self.config
    }

    /// The limiter table, once setup has run.
    pub fn limiter_table(&self) -> Option<&LimiterTable> {
        self.mthlim.as_ref()
    }

    /// The kernel workspace, once setup has run.
    pub fn workspace(&self) -> Option<&FortranWorkspace2D> {
        self.workspace.as_ref()
    }

    /// The CFL reduction vector, once setup has run.
    pub fn cfl_vec(&self) -> Option<&ReductionVec> {
        self.cfl_vec.as_ref()
    }

    /// The CFL reduction vector, mutably, for per-step updates.
    pub fn cfl_vec_mut(&mut self) -> Option<&mut ReductionVec> {
        self.cfl_vec.as_mut()
    }

    /// Prepare the solver and the current solution state for stepping.
    ///
    /// Called exactly once by the driver before the first step, uniformly
    /// on every partition. Performs the 1D setup effects plus the 2D-only
    /// ones, in order:
    ///
    /// 1. forces the current state's ghost width to exactly `mbc`;
    /// 2. builds the per-wave-family limiter table;
    /// 3. checks the configured CFL bound against the recommended maximum
    ///    for the sweep mode (advisory; a warning is recorded and
    ///    execution continues);
    /// 4. rejects non-Fortran kernel languages, before any CFL vector is
    ///    allocated;
    /// 5. allocates the kernel working arrays and the length-1 CFL
    ///    reduction vector, which persists for the solver's lifetime.
    ///
    /// Re-running with the same configuration reproduces the same ghost
    /// width and limiter table.
    pub fn setup(&mut self, solutions: &mut Solutions<State2D>) -> SetupResult<SetupReport> {
        let state = &mut solutions.current_mut()?.state;
        state.set_stencil_width(self.config.mbc);

        self.mthlim = Some(LimiterTable::build(
            &self.config.limiters,
            self.config.num_waves,
        )?);

        let mut report = SetupReport::new(Dimension::Two, state.stencil_width());

        let recommended = self.config.recommended_cfl_max();
        if self.config.cfl_max > recommended {
            report.warn(SetupWarning::CflExceedsRecommended {
                cfl_max: self.config.cfl_max,
                recommended,
                dim_split: self.config.dim_split,
            });
        }

        if self.config.kernel_language != KernelLanguage::Fortran {
            return Err(SetupError::unsupported_kernel(
                self.config.kernel_language,
                Dimension::Two,
            ));
        }

        self.workspace = Some(FortranWorkspace2D::allocate(state, &self.config)?);
        self.cfl_vec = Some(ReductionVec::from_array(&[0.0], state.n_partitions()));

        Ok(report)
    }
}
