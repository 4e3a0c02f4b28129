//! Per-generation progress reporting.
//!
//! The runner pushes a [`GenerationProgress`] snapshot to an observer
//! after every completed generation. Observers own all side effects such
//! as printing or recording convergence curves; the runner itself does no
//! I/O on this path. Any `FnMut(GenerationProgress)` closure is an
//! observer.

/// Snapshot of a run after a completed generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationProgress {
    /// 1-based index of the generation that just completed.
    pub generation: usize,

    /// Evaluations consumed so far, including the initial parents.
    pub evaluations: usize,

    /// Best objective value in the new parent set. Under comma
    /// replacement this may be worse than `global_best`.
    pub current_best: f64,

    /// Best objective value seen anywhere in the run so far.
    pub global_best: f64,
}

/// Receives progress snapshots from a running search.
pub trait ProgressObserver {
    /// Called once per completed generation.
    fn on_generation(&mut self, progress: GenerationProgress);
}

impl<F: FnMut(GenerationProgress)> ProgressObserver for F {
    fn on_generation(&mut self, progress: GenerationProgress) {
        self(progress);
    }
}
