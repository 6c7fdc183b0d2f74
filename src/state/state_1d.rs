//! 1D partitioned solution state.

use crate::error::{SetupError, SetupResult};
use crate::grid::Patch1D;
use crate::types::PartitionIndex;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One partition's padded storage block.
///
/// Conserved variables are stored interleaved:
/// `q[cell * num_eqn + var]`, where `cell` counts from the start of the
/// left ghost region. Interior cell `i` lives at padded cell `i + ghost`.
#[derive(Clone, Debug)]
pub struct PartitionBlock1D {
    /// Subdomain geometry.
    pub patch: Patch1D,
    /// Conserved variables, `(mx + 2*ghost) * num_eqn` values.
    pub q: Vec<f64>,
    /// Auxiliary variables, `(mx + 2*ghost) * num_aux` values.
    pub aux: Vec<f64>,
}

impl PartitionBlock1D {
    fn new(patch: Patch1D, num_eqn: usize, num_aux: usize, ghost: usize) -> Self {
        let padded = patch.mx + 2 * ghost;
        Self {
            patch,
            q: vec![0.0; padded * num_eqn],
            aux: vec![0.0; padded * num_aux],
        }
    }

    /// Re-pad this block to a new ghost width.
    ///
    /// Interior values are preserved; ghost cells come out zeroed and must
    /// be re-exchanged by the driver before the next kernel call.
    fn repad(&mut self, num_eqn: usize, num_aux: usize, old_ghost: usize, new_ghost: usize) {
        let mx = self.patch.mx;
        self.q = repad_field(&self.q, mx, num_eqn, old_ghost, new_ghost);
        self.aux = repad_field(&self.aux, mx, num_aux, old_ghost, new_ghost);
    }
}

fn repad_field(
    old: &[f64],
    mx: usize,
    n_var: usize,
    old_ghost: usize,
    new_ghost: usize,
) -> Vec<f64> {
    let mut fresh = vec![0.0; (mx + 2 * new_ghost) * n_var];
    for i in 0..mx {
        let src = (i + old_ghost) * n_var;
        let dst = (i + new_ghost) * n_var;
        fresh[dst..dst + n_var].copy_from_slice(&old[src..src + n_var]);
    }
    fresh
}

/// Partitioned 1D solution state with a reconfigurable ghost width.
///
/// The ghost (stencil) width is a property of the whole state, uniform
/// across partitions. It starts at the width given to the constructor and
/// can be changed later through [`State1D::set_stencil_width`], which is a
/// collective operation: every partition re-pads its storage.
#[derive(Clone, Debug)]
pub struct State1D {
    num_eqn: usize,
    num_aux: usize,
    ghost: usize,
    blocks: Vec<PartitionBlock1D>,
}

impl State1D {
    /// Create a state over the given partition patches with ghost width 0.
    ///
    /// `num_eqn` is the number of conserved variables per cell, `num_aux`
    /// the number of auxiliary variables (0 for none).
    pub fn new(patches: Vec<Patch1D>, num_eqn: usize, num_aux: usize) -> SetupResult<Self> {
        Self::with_stencil_width(patches, num_eqn, num_aux, 0)
    }

    /// Create a state with an initial ghost width.
    pub fn with_stencil_width(
        patches: Vec<Patch1D>,
        num_eqn: usize,
        num_aux: usize,
        ghost: usize,
    ) -> SetupResult<Self> {
        if patches.is_empty() {
            return Err(SetupError::InvalidPatch(
                "at least one partition patch is required".into(),
            ));
        }
        let blocks = patches
            .into_iter()
            .map(|p| PartitionBlock1D::new(p, num_eqn, num_aux, ghost))
            .collect();
        Ok(Self {
            num_eqn,
            num_aux,
            ghost,
            blocks,
        })
    }

    /// Number of conserved variables per cell.
    pub fn num_eqn(&self) -> usize {
        self.num_eqn
    }

    /// Number of auxiliary variables per cell.
    pub fn num_aux(&self) -> usize {
        self.num_aux
    }

    /// Current ghost (stencil) width.
    pub fn stencil_width(&self) -> usize {
        self.ghost
    }

    /// Number of partitions.
    pub fn n_partitions(&self) -> usize {
        self.blocks.len()
    }

    /// Widest interior extent over all partitions.
    ///
    /// Kernel working storage is sized to this plus the ghost padding.
    pub fn max_interior_dim(&self) -> usize {
        self.blocks.iter().map(|b| b.patch.max_dim()).max().unwrap_or(0)
    }

    /// Access a partition block.
    pub fn block(&self, p: PartitionIndex) -> &PartitionBlock1D {
        &self.blocks[p.as_usize()]
    }

    /// Set the ghost (stencil) width, re-padding every partition.
    ///
    /// Collective: all partitions participate uniformly. Interior data is
    /// preserved; ghost cells are zero-filled and stale until the driver
    /// performs the next exchange. A no-op when the width already matches.
    pub fn set_stencil_width(&mut self, width: usize) {
        if width == self.ghost {
            return;
        }
        let (num_eqn, num_aux, old) = (self.num_eqn, self.num_aux, self.ghost);

        #[cfg(feature = "parallel")]
        self.blocks
            .par_iter_mut()
            .for_each(|b| b.repad(num_eqn, num_aux, old, width));

        #[cfg(not(feature = "parallel"))]
        for b in &mut self.blocks {
            b.repad(num_eqn, num_aux, old, width);
        }

        self.ghost = width;
    }

    /// Get a conserved variable at interior cell `i` of partition `p`.
    pub fn interior(&self, p: PartitionIndex, i: usize, var: usize) -> f64 {
        let b = &self.blocks[p.as_usize()];
        debug_assert!(i < b.patch.mx);
        b.q[(i + self.ghost) * self.num_eqn + var]
    }

    /// Set a conserved variable at interior cell `i` of partition `p`.
    pub fn set_interior(&mut self, p: PartitionIndex, i: usize, var: usize, value: f64) {
        let ghost = self.ghost;
        let num_eqn = self.num_eqn;
        let b = &mut self.blocks[p.as_usize()];
        debug_assert!(i < b.patch.mx);
        b.q[(i + ghost) * num_eqn + var] = value;
    }

    /// Get a ghost-region value on partition `p`.
    ///
    /// `cell` indexes the padded storage directly, so `0..ghost` is the
    /// left halo and `mx + ghost..mx + 2*ghost` the right halo.
    pub fn padded(&self, p: PartitionIndex, cell: usize, var: usize) -> f64 {
        self.blocks[p.as_usize()].q[cell * self.num_eqn + var]
    }
}
