//! Solution objects and the label registry handed to solver setup.

use std::collections::HashMap;

use crate::error::{SetupError, SetupResult};

/// Label under which the driver registers the current solution.
pub const CURRENT: &str = "n";

/// A solution owns a solver state plus its simulation time.
#[derive(Clone, Debug)]
pub struct Solution<S> {
    /// The partitioned solution state.
    pub state: S,
    /// Simulation time this solution corresponds to.
    pub t: f64,
}

impl<S> Solution<S> {
    /// Create a solution at time zero.
    pub fn new(state: S) -> Self {
        Self { state, t: 0.0 }
    }

    /// Create a solution at a given time.
    pub fn at_time(state: S, t: f64) -> Self {
        Self { state, t }
    }
}

/// Registry mapping labels to solutions.
///
/// The time-stepping driver registers at least the current solution under
/// the label [`CURRENT`] (`"n"`) before calling solver setup.
#[derive(Clone, Debug, Default)]
pub struct Solutions<S> {
    entries: HashMap<String, Solution<S>>,
}

impl<S> Solutions<S> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Create a registry holding `solution` as the current solution.
    pub fn with_current(solution: Solution<S>) -> Self {
        let mut s = Self::new();
        s.register(CURRENT, solution);
        s
    }

    /// Register a solution under a label, replacing any previous entry.
    pub fn register(&mut self, label: impl Into<String>, solution: Solution<S>) {
        self.entries.insert(label.into(), solution);
    }

    /// Look up a solution by label.
    pub fn get(&self, label: &str) -> SetupResult<&Solution<S>> {
        self.entries
            .get(label)
            .ok_or_else(|| SetupError::missing_solution(label))
    }

    /// Look up a solution by label, mutably.
    pub fn get_mut(&mut self, label: &str) -> SetupResult<&mut Solution<S>> {
        self.entries
            .get_mut(label)
            .ok_or_else(|| SetupError::missing_solution(label))
    }

    /// The current solution (label `"n"`).
    pub fn current(&self) -> SetupResult<&Solution<S>> {
        self.get(CURRENT)
    }

    /// The current solution (label `"n"`), mutably.
    pub fn current_mut(&mut self) -> SetupResult<&mut Solution<S>> {
        self.get_mut(CURRENT)
    }

    /// Number of registered solutions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no solutions are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
