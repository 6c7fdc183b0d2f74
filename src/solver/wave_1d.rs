//! 1D wave-propagation solver.

use crate::diagnostics::SetupReport;
use crate::error::SetupResult;
use crate::kernels::FortranWorkspace1D;
use crate::limiters::LimiterTable;
use crate::state::{Solutions, State1D};
use crate::types::Dimension;

use super::config::SolverConfig1D;

/// 1D finite-volume solver over a partitioned state.
///
/// The numerical update is delegated to external kernels; this type owns
/// the configuration and the setup-time products (limiter table, kernel
/// workspace) the kernels are driven with.
#[derive(Clone, Debug)]
pub struct WaveSolver1D {
    config: SolverConfig1D,
    mthlim: Option<LimiterTable>,
    workspace: Option<FortranWorkspace1D>,
}

impl WaveSolver1D {
    /// Create a solver from a configuration. No allocation happens until
    /// [`WaveSolver1D::setup`].
    pub fn new(config: SolverConfig1D) -> Self {
        Self {
            config,
            mthlim: None,
            workspace: None,
        }
    }

    /// The solver configuration.
    pub fn config(&self) -> &SolverConfig1D {
        &self.config
    }

    /// The limiter table, once setup has run.
    pub fn limiter_table(&self) -> Option<&LimiterTable> {
        self.mthlim.as_ref()
    }

    /// The kernel workspace, once setup has run with a Fortran
    /// configuration.
    pub fn workspace(&self) -> Option<&FortranWorkspace1D> {
        self.workspace.as_ref()
    }

    /// Prepare the solver and the current solution state for stepping.
    ///
    /// Called exactly once by the driver before the first step, uniformly
    /// on every partition (the ghost-width change is collective). In
    /// order:
    ///
    /// 1. forces the current state's ghost width to exactly `mbc`;
    /// 2. builds the per-wave-family limiter table;
    /// 3. for Fortran kernels, allocates the working arrays sized to the
    ///    state and stencil width.
    ///
    /// Re-running with the same configuration reproduces the same ghost
    /// width and limiter table.
    pub fn setup(&mut self, solutions: &mut Solutions<State1D>) -> SetupResult<SetupReport> {
        let state = &mut solutions.current_mut()?.state;
        state.set_stencil_width(self.config.mbc);

        self.mthlim = Some(LimiterTable::build(
            &self.config.limiters,
            self.config.num_waves,
        )?);

        if self.config.kernel_language.needs_workspace() {
            self.workspace = Some(FortranWorkspace1D::allocate(state, &self.config)?);
        }

        Ok(SetupReport::new(Dimension::One, state.stencil_width()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Patch1D;
    use crate::kernels::KernelLanguage;
    use crate::limiters::LimiterKind;
    use crate::state::Solution;

    fn solutions(mx: usize, num_eqn: usize) -> Solutions<State1D> {
        let patches = vec![Patch1D::new(mx, 0.1).unwrap()];
        let state = State1D::new(patches, num_eqn, 0).unwrap();
        Solutions::with_current(Solution::new(state))
    }

    #[test]
    fn test_setup_forces_ghost_width() {
        let mut solver = WaveSolver1D::new(SolverConfig1D::new(2, 2).with_mbc(2));
        let mut sols = solutions(10, 2);

        let report = solver.setup(&mut sols).unwrap();

        assert_eq!(report.ghost_width, 2);
        assert_eq!(sols.current().unwrap().state.stencil_width(), 2);
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_setup_builds_limiter_table_and_workspace() {
        let mut solver = WaveSolver1D::new(
            SolverConfig1D::new(2, 2).with_limiters(vec![LimiterKind::Superbee]),
        );
        let mut sols = solutions(10, 2);

        solver.setup(&mut sols).unwrap();

        let table = solver.limiter_table().unwrap();
        assert_eq!(table.entries(), &[LimiterKind::Superbee; 2]);
        assert!(solver.workspace().is_some());
    }

    #[test]
    fn test_native_kernel_skips_workspace() {
        let mut solver = WaveSolver1D::new(
            SolverConfig1D::new(2, 2).with_kernel_language(KernelLanguage::Native),
        );
        let mut sols = solutions(10, 2);

        solver.setup(&mut sols).unwrap();

        assert!(solver.workspace().is_none());
        assert_eq!(sols.current().unwrap().state.stencil_width(), 2);
    }

    #[test]
    fn test_setup_without_current_solution_fails() {
        let mut solver = WaveSolver1D::new(SolverConfig1D::new(2, 2));
        let mut sols: Solutions<State1D> = Solutions::new();
        assert!(solver.setup(&mut sols).is_err());
    }
}
