//! Working storage for the 1D compiled kernels.

use crate::error::{SetupError, SetupResult};
use crate::solver::SolverConfig1D;
use crate::state::State1D;

/// Per-sweep arrays required by the classic 1D kernel.
///
/// Sized to the widest partition plus the ghost padding, so a single
/// workspace serves every partition's sweep. Allocated once during setup
/// and reused on each call.
#[derive(Clone, Debug)]
pub struct FortranWorkspace1D {
    /// Flux differences at cell interfaces, `padded * num_eqn`.
    pub f: Vec<f64>,
    /// Wave decomposition, `padded * num_eqn * num_waves`.
    pub wave: Vec<f64>,
    /// Wave speeds, `padded * num_waves`.
    pub s: Vec<f64>,
    /// Left-going fluctuations, `padded * num_eqn`.
    pub amdq: Vec<f64>,
    /// Right-going fluctuations, `padded * num_eqn`.
    pub apdq: Vec<f64>,
    /// Per-cell dt/dx ratios for capacity-form updates, `padded`.
    pub dtdx: Vec<f64>,
}

impl FortranWorkspace1D {
    /// Allocate working storage for `state` under `config`.
    ///
    /// Validates that the state's equation count matches the configuration
    /// before sizing anything.
    pub fn allocate(state: &State1D, config: &SolverConfig1D) -> SetupResult<Self> {
        if state.num_eqn() != config.num_eqn {
            return Err(SetupError::StateMismatch {
                state_num_eqn: state.num_eqn(),
                config_num_eqn: config.num_eqn,
            });
        }

        let padded = state.max_interior_dim() + 2 * config.mbc;
        let num_eqn = config.num_eqn;
        let num_waves = config.num_waves;

        Ok(Self {
            f: vec![0.0; padded * num_eqn],
            wave: vec![0.0; padded * num_eqn * num_waves],
            s: vec![0.0; padded * num_waves],
            amdq: vec![0.0; padded * num_eqn],
            apdq: vec![0.0; padded * num_eqn],
            dtdx: vec![0.0; padded],
        })
    }

    /// Padded sweep length this workspace was sized for.
    pub fn sweep_len(&self) -> usize {
        self.dtdx.len()
    }
}
