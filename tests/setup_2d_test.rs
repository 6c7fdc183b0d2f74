//! Integration tests for 2D solver setup.
//!
//! These tests verify:
//! - The kernel-language gate (Fortran only in 2D)
//! - CFL policy warnings for split and unsplit sweeps
//! - CFL reduction-vector allocation and reduction
//! - Work-array sizing for both sweep modes

use wavefv::{
    Dimension, KernelLanguage, Patch2D, PartitionIndex, SetupError, SetupWarning, Solution,
    Solutions, SolverConfig2D, State2D, WaveSolver2D,
};

fn solutions_two_partitions(num_eqn: usize) -> Solutions<State2D> {
    let patches = vec![
        Patch2D::new(16, 16, 0.25, 0.25).unwrap(),
        Patch2D::new(16, 24, 0.25, 0.25).unwrap(),
    ];
    let state = State2D::new(patches, num_eqn, 0).unwrap();
    Solutions::with_current(Solution::new(state))
}

/// Valid Fortran configuration: ghost width forced, CFL vector allocated.
#[test]
fn test_setup_full_effects() {
    let mut solutions = solutions_two_partitions(3);
    let mut solver = WaveSolver2D::new(SolverConfig2D::new(3, 3).with_mbc(2));

    let report = solver.setup(&mut solutions).unwrap();

    assert_eq!(report.dimension, Dimension::Two);
    assert_eq!(solutions.current().unwrap().state.stencil_width(), 2);
    assert!(solver.limiter_table().is_some());
    assert!(solver.workspace().is_some());

    let cfl = solver.cfl_vec().expect("cfl vector after setup");
    assert_eq!(cfl.len(), 1);
    assert_eq!(cfl.n_partitions(), 2);
}

/// Non-Fortran kernels fail setup before the CFL vector is allocated.
#[test]
fn test_non_fortran_kernels_rejected() {
    let mut solutions = solutions_two_partitions(3);
    let mut solver = WaveSolver2D::new(
        SolverConfig2D::new(3, 3).with_kernel_language(KernelLanguage::Native),
    );

    match solver.setup(&mut solutions) {
        Err(SetupError::UnsupportedKernel {
            language: KernelLanguage::Native,
            dimension: Dimension::Two,
        }) => {}
        other => panic!("expected UnsupportedKernel, got {other:?}"),
    }

    assert!(solver.cfl_vec().is_none());
    assert!(solver.workspace().is_none());

    // The ghost width was still reconciled before the gate, matching the
    // documented effect order
    assert_eq!(solutions.current().unwrap().state.stencil_width(), 2);
}

/// The error message names the supported kernel family.
#[test]
fn test_unsupported_kernel_message() {
    let err = SetupError::unsupported_kernel(KernelLanguage::Native, Dimension::Two);
    let text = format!("{err}");
    assert!(text.contains("Only Fortran kernels are supported in 2D"));
}

/// cfl_max = 0.6 with dimensional splitting exceeds the 0.5
/// recommendation and must warn.
#[test]
fn test_cfl_warning_when_split() {
    let mut solutions = solutions_two_partitions(3);
    let mut solver = WaveSolver2D::new(
        SolverConfig2D::new(3, 3).with_dim_split(true).with_cfl_max(0.6),
    );

    let report = solver.setup(&mut solutions).unwrap();

    assert!(report.has_warnings());
    match &report.warnings[0] {
        SetupWarning::CflExceedsRecommended {
            cfl_max,
            recommended,
            dim_split,
        } => {
            assert!((cfl_max - 0.6).abs() < 1e-14);
            assert!((recommended - 0.5).abs() < 1e-14);
            assert!(*dim_split);
        }
    }
}

/// cfl_max = 0.6 without splitting is within the 1.0 recommendation.
#[test]
fn test_no_cfl_warning_when_unsplit() {
    let mut solutions = solutions_two_partitions(3);
    let mut solver = WaveSolver2D::new(
        SolverConfig2D::new(3, 3)
            .with_dim_split(false)
            .with_cfl_max(0.6),
    );

    let report = solver.setup(&mut solutions).unwrap();
    assert!(!report.has_warnings());
}

/// The advisory warning does not block setup: all products still exist.
#[test]
fn test_cfl_warning_is_nonfatal() {
    let mut solutions = solutions_two_partitions(3);
    let mut solver = WaveSolver2D::new(SolverConfig2D::new(3, 3).with_cfl_max(0.9));

    let report = solver.setup(&mut solutions).unwrap();

    assert!(report.has_warnings());
    assert!(solver.cfl_vec().is_some());
    assert!(solver.workspace().is_some());
}

/// The reduction vector folds per-partition CFL values into the maximum.
#[test]
fn test_cfl_reduction_across_partitions() {
    let mut solutions = solutions_two_partitions(3);
    let mut solver = WaveSolver2D::new(SolverConfig2D::new(3, 3));
    solver.setup(&mut solutions).unwrap();

    let cfl = solver.cfl_vec_mut().unwrap();
    cfl.set_local(PartitionIndex::new(0), 0.41);
    cfl.set_local(PartitionIndex::new(1), 0.47);

    assert!((cfl.reduce_max() - 0.47).abs() < 1e-14);
}

/// Work-array size differs between split and unsplit sweep modes.
#[test]
fn test_work_array_tracks_sweep_mode() {
    let mut split_solutions = solutions_two_partitions(3);
    let mut split_solver = WaveSolver2D::new(SolverConfig2D::new(3, 3).with_dim_split(true));
    split_solver.setup(&mut split_solutions).unwrap();

    let mut unsplit_solutions = solutions_two_partitions(3);
    let mut unsplit_solver = WaveSolver2D::new(
        SolverConfig2D::new(3, 3).with_dim_split(false).with_cfl_max(1.0),
    );
    unsplit_solver.setup(&mut unsplit_solutions).unwrap();

    let split_ws = split_solver.workspace().unwrap();
    let unsplit_ws = unsplit_solver.workspace().unwrap();
    assert!(split_ws.work.len() > unsplit_ws.work.len());
    assert_eq!(split_ws.sweep_len(), unsplit_ws.sweep_len());
}

/// Running setup twice with the same configuration is idempotent with
/// respect to ghost width and limiter table.
#[test]
fn test_double_setup_is_idempotent() {
    let mut solutions = solutions_two_partitions(3);
    let mut solver = WaveSolver2D::new(SolverConfig2D::new(3, 3));

    solver.setup(&mut solutions).unwrap();
    let ghost_first = solutions.current().unwrap().state.stencil_width();
    let table_first = solver.limiter_table().unwrap().clone();

    solver.setup(&mut solutions).unwrap();

    assert_eq!(
        solutions.current().unwrap().state.stencil_width(),
        ghost_first
    );
    assert_eq!(solver.limiter_table().unwrap(), &table_first);
}
