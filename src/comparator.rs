//! Total-order comparison of candidates by objective value.

use std::cmp::Ordering;

use crate::candidate::Candidate;

/// Compares candidates by a single objective index.
///
/// The order is total even for NaN and infinite objectives
/// (`f64::total_cmp`), so population sorting never panics on exotic
/// values. Unevaluated candidates carry `f64::INFINITY` and rank last
/// under minimization.
///
/// # Examples
///
/// ```
/// use evocore::candidate::{Candidate, Genome};
/// use evocore::comparator::ObjectiveComparator;
///
/// let mut cheap = Candidate::new(Genome::Real(vec![0.0]));
/// cheap.set_objective(0, 1.0);
/// let mut costly = Candidate::new(Genome::Real(vec![0.0]));
/// costly.set_objective(0, 5.0);
///
/// let comparator = ObjectiveComparator::minimizing(0);
/// assert!(comparator.is_better(&cheap, &costly));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectiveComparator {
    objective: usize,
    descending: bool,
}

impl ObjectiveComparator {
    /// Minimizing comparator on `objective`: smaller values are better.
    pub fn minimizing(objective: usize) -> Self {
        Self {
            objective,
            descending: false,
        }
    }

    /// Maximizing comparator on `objective`: larger values are better.
    pub fn maximizing(objective: usize) -> Self {
        Self {
            objective,
            descending: true,
        }
    }

    /// Objective index this comparator inspects.
    pub fn objective(&self) -> usize {
        self.objective
    }

    /// Ordering of `a` relative to `b`, best first.
    ///
    /// # Panics
    /// Panics if either candidate lacks the inspected objective index.
    pub fn compare(&self, a: &Candidate, b: &Candidate) -> Ordering {
        let ordering = a
            .objective(self.objective)
            .total_cmp(&b.objective(self.objective));
        if self.descending {
            ordering.reverse()
        } else {
            ordering
        }
    }

    /// True when `a` is strictly better than `b`. Ties are not better, so
    /// first-seen holders survive tie comparisons.
    pub fn is_better(&self, a: &Candidate, b: &Candidate) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Genome;

    fn candidate(objective: f64) -> Candidate {
        let mut c = Candidate::new(Genome::Real(vec![0.0]));
        c.set_objective(0, objective);
        c
    }

    // ---- Ordering ----

    #[test]
    fn test_minimizing_prefers_smaller() {
        let cmp = ObjectiveComparator::minimizing(0);
        assert_eq!(
            cmp.compare(&candidate(1.0), &candidate(2.0)),
            Ordering::Less
        );
        assert_eq!(
            cmp.compare(&candidate(2.0), &candidate(1.0)),
            Ordering::Greater
        );
        assert_eq!(
            cmp.compare(&candidate(3.0), &candidate(3.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_maximizing_reverses() {
        let cmp = ObjectiveComparator::maximizing(0);
        assert_eq!(
            cmp.compare(&candidate(1.0), &candidate(2.0)),
            Ordering::Greater
        );
        assert!(cmp.is_better(&candidate(2.0), &candidate(1.0)));
    }

    #[test]
    fn test_secondary_objective_index() {
        let mut a = Candidate::with_objectives(Genome::Real(vec![0.0]), 2);
        a.set_objective(0, 100.0);
        a.set_objective(1, 1.0);
        let mut b = Candidate::with_objectives(Genome::Real(vec![0.0]), 2);
        b.set_objective(0, 0.0);
        b.set_objective(1, 2.0);

        let cmp = ObjectiveComparator::minimizing(1);
        assert!(cmp.is_better(&a, &b), "index 1 should drive the comparison");
    }

    // ---- Strictness ----

    #[test]
    fn test_ties_are_not_better() {
        let cmp = ObjectiveComparator::minimizing(0);
        assert!(!cmp.is_better(&candidate(5.0), &candidate(5.0)));
    }

    // ---- Exotic values ----

    #[test]
    fn test_total_order_with_infinity_and_nan() {
        let cmp = ObjectiveComparator::minimizing(0);
        let unevaluated = candidate(f64::INFINITY);
        let finite = candidate(1e300);
        let nan = candidate(f64::NAN);

        assert!(cmp.is_better(&finite, &unevaluated));
        // total_cmp places NaN above +infinity, so NaN ranks worst.
        assert!(cmp.is_better(&unevaluated, &nan));
        assert_eq!(cmp.compare(&nan, &nan), Ordering::Equal);
    }
}
