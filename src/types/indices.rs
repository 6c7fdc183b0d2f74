//! Strongly-typed index newtypes.
//!
//! These types prevent mixing up different kinds of indices
//! (partition vs wave family vs cell).

use std::fmt;

/// Macro to generate index newtypes with common functionality.
macro_rules! define_index {
    (
        $(#[$meta:meta])*
        $name:ident, $display_prefix:literal
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Create a new index.
            #[inline]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Get the raw index value.
            #[inline]
            pub const fn get(self) -> usize {
                self.0
            }

            /// Convert to usize.
            #[inline]
            pub const fn as_usize(self) -> usize {
                self.0
            }

            /// First index (0).
            pub const ZERO: Self = Self(0);

            /// Increment index by one.
            #[inline]
            pub fn next(self) -> Self {
                Self(self.0 + 1)
            }

            /// Decrement index by one, saturating at zero.
            #[inline]
            pub fn prev(self) -> Self {
                Self(self.0.saturating_sub(1))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<usize> for $name {
            #[inline]
            fn from(index: usize) -> Self {
                Self(index)
            }
        }

        impl From<$name> for usize {
            #[inline]
            fn from(idx: $name) -> usize {
                idx.0
            }
        }

        // Allow using as array index
        impl<T> std::ops::Index<$name> for [T] {
            type Output = T;
            #[inline]
            fn index(&self, idx: $name) -> &T {
                &self[idx.0]
            }
        }

        impl<T> std::ops::IndexMut<$name> for [T] {
            #[inline]
            fn index_mut(&mut self, idx: $name) -> &mut T {
                &mut self[idx.0]
            }
        }

        impl<T> std::ops::Index<$name> for Vec<T> {
            type Output = T;
            #[inline]
            fn index(&self, idx: $name) -> &T {
                &self[idx.0]
            }
        }

        impl<T> std::ops::IndexMut<$name> for Vec<T> {
            #[inline]
            fn index_mut(&mut self, idx: $name) -> &mut T {
                &mut self[idx.0]
            }
        }
    };
}

define_index!(
    /// Partition index in a decomposed domain.
    ///
    /// Identifies one worker's subdomain of the partitioned solution state.
    ///
    /// # Example
    ///
    /// ```
    /// use wavefv::types::PartitionIndex;
    ///
    /// let p = PartitionIndex::new(3);
    /// assert_eq!(p.get(), 3);
    /// ```
    PartitionIndex,
    "P"
);

define_index!(
    /// Wave-family index.
    ///
    /// Identifies one characteristic family of the hyperbolic system,
    /// e.g. for limiter-table lookups.
    ///
    /// # Example
    ///
    /// ```
    /// use wavefv::types::WaveIndex;
    ///
    /// let w = WaveIndex::new(1);
    /// assert_eq!(w.get(), 1);
    /// ```
    WaveIndex,
    "W"
);

define_index!(
    /// Cell index within a partition's padded storage.
    ///
    /// Counts from the start of the ghost region, not the interior.
    ///
    /// # Example
    ///
    /// ```
    /// use wavefv::types::CellIndex;
    ///
    /// let c = CellIndex::new(7);
    /// assert_eq!(c.get(), 7);
    /// ```
    CellIndex,
    "C"
);

// =============================================================================
// Iterator support
// =============================================================================

impl PartitionIndex {
    /// Create an iterator over [0, n) partition indices.
    ///
    /// # Example
    ///
    /// ```
    /// use wavefv::types::PartitionIndex;
    ///
    /// let indices: Vec<_> = PartitionIndex::iter(4).collect();
    /// assert_eq!(indices.len(), 4);
    /// assert_eq!(indices[3].get(), 3);
    /// ```
    pub fn iter(n: usize) -> impl Iterator<Item = PartitionIndex> + ExactSizeIterator {
        (0..n).map(PartitionIndex)
    }
}

impl WaveIndex {
    /// Create an iterator over [0, n) wave-family indices.
    pub fn iter(n: usize) -> impl Iterator<Item = WaveIndex> + ExactSizeIterator {
        (0..n).map(WaveIndex)
    }
}

impl CellIndex {
    /// Create an iterator over [0, n) cell indices.
    pub fn iter(n: usize) -> impl Iterator<Item = CellIndex> + ExactSizeIterator {
        (0..n).map(CellIndex)
    }
}

// =============================================================================
// Tests
// =============================================================================
