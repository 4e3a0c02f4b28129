//! The problem contract between user code and the search engines.

use rand::Rng;

use crate::candidate::Candidate;
use crate::error::Result;

/// Defines an optimization problem.
///
/// Implementations own the genome encoding, the initialization rule, and
/// the objective function. The engines treat genomes as opaque data and
/// objective index 0 as the ranking criterion (lower is better).
///
/// # Thread safety
///
/// `Problem` must be `Send + Sync` because runners may evaluate offspring
/// in parallel.
///
/// # Errors
///
/// [`evaluate`](Self::evaluate) failures propagate out of the running
/// algorithm as [`Error::Evaluation`](crate::error::Error): the triggering
/// generation is abandoned and no partial result is produced. Prefer
/// encoding infeasibility as a penalty objective (for example
/// `f64::INFINITY`) and reserving errors for genuine failures.
pub trait Problem: Send + Sync {
    /// Creates one fresh candidate according to the problem's
    /// initialization rule.
    ///
    /// The candidate is returned unevaluated; the caller evaluates it and
    /// charges the evaluation budget.
    fn initial_candidate<R: Rng>(&self, rng: &mut R) -> Candidate;

    /// Computes objective values for `candidate`, storing them via
    /// [`Candidate::set_objective`].
    ///
    /// This is typically the most expensive operation in a run and may be
    /// called concurrently across a batch of candidates.
    fn evaluate(&self, candidate: &mut Candidate) -> Result<()>;
}
