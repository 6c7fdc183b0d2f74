//! Solver configuration types.

use crate::kernels::KernelLanguage;
use crate::limiters::LimiterKind;

/// Configuration for the 1D solver.
///
/// Constructed by the caller before setup. `num_eqn` and `num_waves` are
/// problem properties and have no defaults; everything else starts from
/// the classic values and can be adjusted with the builder methods.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig1D {
    /// Number of conserved variables per cell.
    pub num_eqn: usize,
    /// Number of wave families in the Riemann solution.
    pub num_waves: usize,
    /// Number of auxiliary variables per cell.
    pub num_aux: usize,
    /// Required ghost (stencil) width.
    pub mbc: usize,
    /// Which kernel family drives the sweeps.
    pub kernel_language: KernelLanguage,
    /// Limiter selection; one entry broadcasts to all wave families.
    pub limiters: Vec<LimiterKind>,
    /// Hard CFL bound; steps exceeding it are rejected by the driver.
    pub cfl_max: f64,
    /// Target CFL the driver aims for when picking dt.
    pub cfl_desired: f64,
}

impl SolverConfig1D {
    /// Create a configuration with classic defaults.
    pub fn new(num_eqn: usize, num_waves: usize) -> Self {
        Self {
            num_eqn,
            num_waves,
            num_aux: 0,
            mbc: 2,
            kernel_language: KernelLanguage::Fortran,
            limiters: vec![LimiterKind::Minmod],
            cfl_max: 1.0,
            cfl_desired: 0.9,
        }
    }

    /// Set the required ghost width.
    pub fn with_mbc(mut self, mbc: usize) -> Self {
        self.mbc = mbc;
        self
    }

    /// Set the number of auxiliary variables.
    pub fn with_num_aux(mut self, num_aux: usize) -> Self {
        self.num_aux = num_aux;
        self
    }

    /// Set the kernel language.
    pub fn with_kernel_language(mut self, language: KernelLanguage) -> Self {
        self.kernel_language = language;
        self
    }

    /// Set the limiter selection.
    pub fn with_limiters(mut self, limiters: Vec<LimiterKind>) -> Self {
        self.limiters = limiters;
        self
    }

    /// Set the hard CFL bound.
    pub fn with_cfl_max(mut self, cfl_max: f64) -> Self {
        self.cfl_max = cfl_max;
        self
    }

    /// Set the target CFL.
    pub fn with_cfl_desired(mut self, cfl_desired: f64) -> Self {
        self.cfl_desired = cfl_desired;
        self
    }
}

/// Configuration for the 2D solver.
///
/// Adds the sweep-mode choice to the 1D fields. With dimensional
/// splitting the update runs as a sequence of 1D sweeps, which halves the
/// stable CFL range; the defaults reflect that.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig2D {
    /// Number of conserved variables per cell.
    pub num_eqn: usize,
    /// Number of wave families in the Riemann solution.
    pub num_waves: usize,
    /// Number of auxiliary variables per cell.
    pub num_aux: usize,
    /// Required ghost (stencil) width.
    pub mbc: usize,
    /// Which kernel family drives the sweeps.
    pub kernel_language: KernelLanguage,
    /// Limiter selection; one entry broadcasts to all wave families.
    pub limiters: Vec<LimiterKind>,
    /// Hard CFL bound; steps exceeding it are rejected by the driver.
    pub cfl_max: f64,
    /// Target CFL the driver aims for when picking dt.
    pub cfl_desired: f64,
    /// Whether the update runs as dimensionally split 1D sweeps.
    pub dim_split: bool,
}

impl SolverConfig2D {
    /// Create a configuration with classic defaults.
    pub fn new(num_eqn: usize, num_waves: usize) -> Self {
        Self {
            num_eqn,
            num_waves,
            num_aux: 0,
            mbc: 2,
            kernel_language: KernelLanguage::Fortran,
            limiters: vec![LimiterKind::Minmod],
            cfl_max: 0.5,
            cfl_desired: 0.45,
            dim_split: true,
        }
    }

    /// Set the required ghost width.
    pub fn with_mbc(mut self, mbc: usize) -> Self {
        self.mbc = mbc;
        self
    }

    /// Set the number of auxiliary variables.
    pub fn with_num_aux(mut self, num_aux: usize) -> Self {
        self.num_aux = num_aux;
        self
    }

    /// Set the kernel language.
    pub fn with_kernel_language(mut self, language: KernelLanguage) -> Self {
        self.kernel_language = language;
        self
    }

    /// Set the limiter selection.
    pub fn with_limiters(mut self, limiters: Vec<LimiterKind>) -> Self {
        self.limiters = limiters;
        self
    }

    /// Set the hard CFL bound.
    pub fn with_cfl_max(mut self, cfl_max: f64) -> Self {
        self.cfl_max = cfl_max;
        self
    }

    /// Set the target CFL.
    pub fn with_cfl_desired(mut self, cfl_desired: f64) -> Self {
        self.cfl_desired = cfl_desired;
        self
    }

    /// Enable or disable dimensional splitting.
    pub fn with_dim_split(mut self, dim_split: bool) -> Self {
        self.dim_split = dim_split;
        self
    }

    /// Recommended CFL bound for the configured sweep mode.
    ///
    /// 0.5 with dimensional splitting, 1.0 for unsplit sweeps.
    pub fn recommended_cfl_max(&self) -> f64 {
        if self.dim_split {
            0.5
        } else {
            1.0
        }
    }
}
