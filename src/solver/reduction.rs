//! Length-1 reduction vector for collective scalar reductions.

use crate::types::PartitionIndex;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A length-1 distributed vector with one local slot per partition.
///
/// Each partition writes its local value after a sweep; the collective
/// [`ReductionVec::reduce_max`] read folds the slots into the global
/// maximum. The solver allocates one of these during setup to carry the
/// per-step CFL number and keeps it for its lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct ReductionVec {
    local: Vec<f64>,
}

impl ReductionVec {
    /// Create a reduction vector from an initial value array.
    ///
    /// The logical length is the array's length (1 for CFL use); every
    /// partition slot starts at `initial[0]`.
    pub fn from_array(initial: &[f64], n_partitions: usize) -> Self {
        let seed = initial.first().copied().unwrap_or(0.0);
        Self {
            local: vec![seed; n_partitions.max(1)],
        }
    }

    /// Logical vector length.
    pub fn len(&self) -> usize {
        1
    }

    /// Always false; the vector holds exactly one logical value.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of partition slots.
    pub fn n_partitions(&self) -> usize {
        self.local.len()
    }

    /// Write one partition's local value.
    pub fn set_local(&mut self, p: PartitionIndex, value: f64) {
        self.local[p.as_usize()] = value;
    }

    /// Read one partition's local value.
    pub fn local(&self, p: PartitionIndex) -> f64 {
        self.local[p.as_usize()]
    }

    /// Collective maximum over all partition slots.
    pub fn reduce_max(&self) -> f64 {
        #[cfg(feature = "parallel")]
        {
            self.local
                .par_iter()
                .copied()
                .reduce(|| f64::NEG_INFINITY, f64::max)
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.local.iter().copied().fold(f64::NEG_INFINITY, f64::max)
        }
    }

    /// Broadcast a value into every partition slot.
    pub fn broadcast(&mut self, value: f64) {
        self.local.fill(value);
    }
}
