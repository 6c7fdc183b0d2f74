//! Local patch geometry.
//!
//! A patch describes the interior extent and grid spacing of one
//! partition's subdomain. Ghost padding is a property of the state, not
//! of the patch: the same patch can back states with different stencil
//! widths.

use crate::error::{SetupError, SetupResult};

/// Geometry of a 1D partition subdomain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Patch1D {
    /// Number of interior cells.
    pub mx: usize,
    /// Cell width.
    pub dx: f64,
}

impl Patch1D {
    /// Create a 1D patch with `mx` interior cells of width `dx`.
    pub fn new(mx: usize, dx: f64) -> SetupResult<Self> {
        if mx == 0 {
            return Err(SetupError::InvalidPatch("mx must be positive".into()));
        }
        if !(dx > 0.0) {
            return Err(SetupError::InvalidPatch(format!(
                "dx must be positive, got {dx}"
            )));
        }
        Ok(Self { mx, dx })
    }

    /// Largest interior extent, used for kernel work-array sizing.
    pub fn max_dim(&self) -> usize {
        self.mx
    }
}

/// Geometry of a 2D partition subdomain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Patch2D {
    /// Number of interior cells in x.
    pub mx: usize,
    /// Number of interior cells in y.
    pub my: usize,
    /// Cell width in x.
    pub dx: f64,
    /// Cell width in y.
    pub dy: f64,
}

impl Patch2D {
    /// Create a 2D patch with `mx` by `my` interior cells.
    pub fn new(mx: usize, my: usize, dx: f64, dy: f64) -> SetupResult<Self> {
        if mx == 0 || my == 0 {
            return Err(SetupError::InvalidPatch(
                "mx and my must be positive".into(),
            ));
        }
        if !(dx > 0.0) || !(dy > 0.0) {
            return Err(SetupError::InvalidPatch(format!(
                "dx and dy must be positive, got ({dx}, {dy})"
            )));
        }
        Ok(Self { mx, my, dx, dy })
    }

    /// Number of interior cells.
    pub fn n_cells(&self) -> usize {
        self.mx * self.my
    }

    /// Largest one-dimensional extent, used for kernel work-array sizing.
    ///
    /// Sweep kernels process one row or column at a time, so working
    /// storage is sized to the longer of the two.
    pub fn max_dim(&self) -> usize {
        self.mx.max(self.my)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_1d() {
        let p = Patch1D::new(100, 0.01).unwrap();
        assert_eq!(p.mx, 100);
        assert_eq!(p.max_dim(), 100);
    }

    #[test]
    fn test_patch_1d_rejects_degenerate() {
        assert!(Patch1D::new(0, 0.01).is_err());
        assert!(Patch1D::new(10, 0.0).is_err());
        assert!(Patch1D::new(10, -1.0).is_err());
    }

    #[test]
    fn test_patch_2d() {
        let p = Patch2D::new(40, 60, 0.5, 0.25).unwrap();
        assert_eq!(p.n_cells(), 2400);
        assert_eq!(p.max_dim(), 60);
    }

    #[test]
    fn test_patch_2d_rejects_degenerate() {
        assert!(Patch2D::new(0, 10, 1.0, 1.0).is_err());
        assert!(Patch2D::new(10, 10, 1.0, f64::NAN).is_err());
    }
}
