//! Partitioned solution state.
//!
//! # Submodules
//!
//! - [`state_1d`]: 1D state with per-partition padded storage
//! - [`state_2d`]: 2D state with per-partition padded storage
//! - [`solution`]: solution objects and the label registry
//!
//! The ghost (stencil) width of a state is mutable after construction:
//! [`State1D::set_stencil_width`] and [`State2D::set_stencil_width`] are
//! explicit collective operations in which every partition re-pads its
//! storage. Solver setup uses them to force the ghost width to the stencil
//! width its kernels require.

pub mod solution;
pub mod state_1d;
pub mod state_2d;

pub use solution::{Solution, Solutions, CURRENT};
pub use state_1d::{PartitionBlock1D, State1D};
pub use state_2d::{PartitionBlock2D, State2D};
