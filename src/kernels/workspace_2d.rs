//! Working storage for the 2D compiled kernels.

use crate::error::{SetupError, SetupResult};
use crate::solver::SolverConfig2D;
use crate::state::State2D;

/// Per-sweep arrays required by the classic 2D kernels.
///
/// 2D sweeps process one grid line at a time, so line-shaped arrays are
/// sized to the longest row or column over all partitions, plus ghost
/// padding. The flat `work` array covers the kernel's internal scratch;
/// its size depends on whether sweeps are dimensionally split.
#[derive(Clone, Debug)]
pub struct FortranWorkspace2D {
    /// Normal-direction flux accumulator, `padded * num_eqn`.
    pub qadd: Vec<f64>,
    /// First transverse flux accumulator, `padded * num_eqn`.
    pub fadd: Vec<f64>,
    /// Second transverse flux accumulator, `padded * num_eqn * 2`.
    pub gadd: Vec<f64>,
    /// Kernel-internal scratch.
    pub work: Vec<f64>,
    padded: usize,
}

/// Scratch size required by the 2D kernel for one sweep line.
///
/// Split sweeps carry an extra copy of the line state, hence the larger
/// leading factor.
pub fn work_size(
    padded: usize,
    num_eqn: usize,
    num_waves: usize,
    num_aux: usize,
    dim_split: bool,
) -> usize {
    let factor = if dim_split { 10 } else { 9 };
    padded * (factor * num_eqn + num_waves + num_eqn * num_waves + 3 * num_aux + 2)
}

impl FortranWorkspace2D {
    /// Allocate working storage for `state` under `config`.
    ///
    /// Validates that the state's equation count matches the configuration
    /// before sizing anything.
    pub fn allocate(state: &State2D, config: &SolverConfig2D) -> SetupResult<Self> {
        if state.num_eqn() != config.num_eqn {
            return Err(SetupError::StateMismatch {
                state_num_eqn: state.num_eqn(),
                config_num_eqn: config.num_eqn,
            });
        }

        let padded = state.max_interior_dim() + 2 * config.mbc;
        let num_eqn = config.num_eqn;

        Ok(Self {
            qadd: vec![0.0; padded * num_eqn],
            fadd: vec![0.0; padded * num_eqn],
            gadd: vec![0.0; padded * num_eqn * 2],
            work: vec![
                0.0;
                work_size(
                    padded,
                    num_eqn,
                    config.num_waves,
                    config.num_aux,
                    config.dim_split,
                )
            ],
            padded,
        })
    }

    /// Padded sweep length this workspace was sized for.
    pub fn sweep_len(&self) -> usize {
        self.padded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Patch2D;

    fn state(num_eqn: usize) -> State2D {
        let patches = vec![
            Patch2D::new(16, 24, 1.0, 1.0).unwrap(),
            Patch2D::new(20, 10, 1.0, 1.0).unwrap(),
        ];
        State2D::new(patches, num_eqn, 0).unwrap()
    }

    #[test]
    fn test_work_size_split_vs_unsplit() {
        let split = work_size(28, 3, 3, 1, true);
        let unsplit = work_size(28, 3, 3, 1, false);
        assert_eq!(split, 28 * (30 + 3 + 9 + 3 + 2));
        assert_eq!(unsplit, 28 * (27 + 3 + 9 + 3 + 2));
        assert!(split > unsplit);
    }

    #[test]
    fn test_allocation_sizes() {
        let state = state(3);
        let config = SolverConfig2D::new(3, 3).with_mbc(2);
        let ws = FortranWorkspace2D::allocate(&state, &config).unwrap();

        // longest line is 24, padded by 2*mbc
        let padded = 24 + 4;
        assert_eq!(ws.sweep_len(), padded);
        assert_eq!(ws.qadd.len(), padded * 3);
        assert_eq!(ws.fadd.len(), padded * 3);
        assert_eq!(ws.gadd.len(), padded * 3 * 2);
        assert_eq!(
            ws.work.len(),
            work_size(padded, 3, 3, 0, config.dim_split)
        );
    }

    #[test]
    fn test_equation_mismatch_rejected() {
        let state = state(2);
        let config = SolverConfig2D::new(3, 3);
        match FortranWorkspace2D::allocate(&state, &config) {
            Err(SetupError::StateMismatch { .. }) => {}
            other => panic!("expected StateMismatch, got {other:?}"),
        }
    }
}
