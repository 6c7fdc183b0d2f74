//! 2D partitioned solution state.

use crate::error::{SetupError, SetupResult};
use crate::grid::Patch2D;
use crate::types::PartitionIndex;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One partition's padded storage block.
///
/// Conserved variables are stored row-major with a ghost border of uniform
/// width on all four sides: `q[(row * padded_mx + col) * num_eqn + var]`,
/// where `row`/`col` count from the corner of the padded array. Interior
/// cell `(i, j)` lives at `(i + ghost, j + ghost)`.
#[derive(Clone, Debug)]
pub struct PartitionBlock2D {
    /// Subdomain geometry.
    pub patch: Patch2D,
    /// Conserved variables, `(mx + 2g) * (my + 2g) * num_eqn` values.
    pub q: Vec<f64>,
    /// Auxiliary variables, `(mx + 2g) * (my + 2g) * num_aux` values.
    pub aux: Vec<f64>,
}

impl PartitionBlock2D {
    fn new(patch: Patch2D, num_eqn: usize, num_aux: usize, ghost: usize) -> Self {
        let padded = (patch.mx + 2 * ghost) * (patch.my + 2 * ghost);
        Self {
            patch,
            q: vec![0.0; padded * num_eqn],
            aux: vec![0.0; padded * num_aux],
        }
    }

    fn repad(&mut self, num_eqn: usize, num_aux: usize, old_ghost: usize, new_ghost: usize) {
        let (mx, my) = (self.patch.mx, self.patch.my);
        self.q = repad_field(&self.q, mx, my, num_eqn, old_ghost, new_ghost);
        self.aux = repad_field(&self.aux, mx, my, num_aux, old_ghost, new_ghost);
    }
}

fn repad_field(
    old: &[f64],
    mx: usize,
    my: usize,
    n_var: usize,
    old_ghost: usize,
    new_ghost: usize,
) -> Vec<f64> {
    let old_w = mx + 2 * old_ghost;
    let new_w = mx + 2 * new_ghost;
    let mut fresh = vec![0.0; new_w * (my + 2 * new_ghost) * n_var];
    for j in 0..my {
        let src = ((j + old_ghost) * old_w + old_ghost) * n_var;
        let dst = ((j + new_ghost) * new_w + new_ghost) * n_var;
        fresh[dst..dst + mx * n_var].copy_from_slice(&old[src..src + mx * n_var]);
    }
    fresh
}

/// Partitioned 2D solution state with a reconfigurable ghost width.
///
/// Same contract as the 1D state: the ghost width is uniform across
/// partitions, and [`State2D::set_stencil_width`] is a collective
/// re-padding operation that preserves interior data.
#[derive(Clone, Debug)]
pub struct State2D {
    num_eqn: usize,
    num_aux: usize,
    ghost: usize,
    blocks: Vec<PartitionBlock2D>,
}

impl State2D {
    /// Create a state over the given partition patches with ghost width 0.
    pub fn new(patches: Vec<Patch2D>, num_eqn: usize, num_aux: usize) -> SetupResult<Self> {
        Self::with_stencil_width(patches, num_eqn, num_aux, 0)
    }

    /// Create a state with an initial ghost width.
    pub fn with_stencil_width(
        patches: Vec<Patch2D>,
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
            .map(|p| PartitionBlock2D::new(p, num_eqn, num_aux, ghost))
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

    /// Largest one-dimensional interior extent over all partitions.
    ///
    /// Sweep kernels process one row or column at a time, so working
    /// storage is sized to the longest line.
    pub fn max_interior_dim(&self) -> usize {
        self.blocks.iter().map(|b| b.patch.max_dim()).max().unwrap_or(0)
    }

    /// Access a partition block.
    pub fn block(&self, p: PartitionIndex) -> &PartitionBlock2D {
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

    /// Get a conserved variable at interior cell `(i, j)` of partition `p`.
    pub fn interior(&self, p: PartitionIndex, i: usize, j: usize, var: usize) -> f64 {
        let b = &self.blocks[p.as_usize()];
        debug_assert!(i < b.patch.mx && j < b.patch.my);
        let padded_mx = b.patch.mx + 2 * self.ghost;
        b.q[((j + self.ghost) * padded_mx + i + self.ghost) * self.num_eqn + var]
    }

    /// Set a conserved variable at interior cell `(i, j)` of partition `p`.
    pub fn set_interior(&mut self, p: PartitionIndex, i: usize, j: usize, var: usize, value: f64) {
        let ghost = self.ghost;
        let num_eqn = self.num_eqn;
        let b = &mut self.blocks[p.as_usize()];
        debug_assert!(i < b.patch.mx && j < b.patch.my);
        let padded_mx = b.patch.mx + 2 * ghost;
        b.q[((j + ghost) * padded_mx + i + ghost) * num_eqn + var] = value;
    }
}
