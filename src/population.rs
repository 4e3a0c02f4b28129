//! Ordered, growable collections of candidates.

use std::ops::Index;
use std::slice::{Iter, IterMut};

use crate::candidate::Candidate;
use crate::comparator::ObjectiveComparator;

/// An ordered collection of candidates.
///
/// `capacity` records the intended steady-state size (parents kept between
/// generations, or offspring produced per generation). It is a
/// preallocation hint only and is never enforced: generational loops
/// legitimately grow a population past its target before truncating
/// survivors, so [`push`](Self::push) never rejects members.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Population {
    members: Vec<Candidate>,
    capacity: usize,
}

impl Population {
    /// Creates an empty population with a target capacity hint.
    pub fn new(capacity: usize) -> Self {
        Self {
            members: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Target steady-state size. Informational only.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends a candidate, growing past `capacity` if needed.
    pub fn push(&mut self, candidate: Candidate) {
        self.members.push(candidate);
    }

    /// Member at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.members.get(index)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True when the population holds no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Sorts members in place, best first under `comparator`.
    ///
    /// The sort is stable: members comparing equal keep their previous
    /// relative order, so earlier insertion wins ties. Sorting reorders
    /// members but never duplicates or drops them.
    pub fn sort(&mut self, comparator: &ObjectiveComparator) {
        self.members.sort_by(|a, b| comparator.compare(a, b));
    }

    /// Keeps the first `keep` members and drops the rest. A no-op when the
    /// population is already at most `keep` long.
    pub fn truncate(&mut self, keep: usize) {
        self.members.truncate(keep);
    }

    /// Removes all members. The allocation is kept so the population can
    /// be refilled without reallocating.
    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Iterates members in order.
    pub fn iter(&self) -> Iter<'_, Candidate> {
        self.members.iter()
    }

    /// Iterates members mutably, in order. Used by evaluation loops that
    /// fill objective values in place.
    pub fn iter_mut(&mut self) -> IterMut<'_, Candidate> {
        self.members.iter_mut()
    }

    /// Members as a slice.
    pub fn as_slice(&self) -> &[Candidate] {
        &self.members
    }

    /// Members as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [Candidate] {
        &mut self.members
    }
}

impl Index<usize> for Population {
    type Output = Candidate;

    fn index(&self, index: usize) -> &Candidate {
        &self.members[index]
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Candidate;
    type IntoIter = Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl Extend<Candidate> for Population {
    fn extend<T: IntoIterator<Item = Candidate>>(&mut self, iter: T) {
        self.members.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Genome;

    fn tagged(tag: usize, objective: f64) -> Candidate {
        let mut c = Candidate::new(Genome::Permutation(vec![tag]));
        c.set_objective(0, objective);
        c
    }

    // ---- Append / access ----

    #[test]
    fn test_push_and_get() {
        let mut population = Population::new(2);
        assert!(population.is_empty());

        population.push(tagged(0, 1.0));
        population.push(tagged(1, 2.0));

        assert_eq!(population.len(), 2);
        assert_eq!(population.get(1).map(|c| c.objective(0)), Some(2.0));
        assert!(population.get(2).is_none());
        assert_eq!(population[0].genome, Genome::Permutation(vec![0]));
    }

    #[test]
    fn test_capacity_is_a_hint_not_a_limit() {
        let mut population = Population::new(1);
        population.push(tagged(0, 0.0));
        population.push(tagged(1, 0.0));
        population.push(tagged(2, 0.0));

        assert_eq!(population.capacity(), 1);
        assert_eq!(population.len(), 3, "growth past capacity must succeed");
    }

    // ---- Sorting ----

    #[test]
    fn test_sort_orders_best_first() {
        let mut population = Population::new(3);
        population.push(tagged(0, 3.0));
        population.push(tagged(1, 1.0));
        population.push(tagged(2, 2.0));

        population.sort(&ObjectiveComparator::minimizing(0));

        let objectives: Vec<f64> = population.iter().map(|c| c.objective(0)).collect();
        assert_eq!(objectives, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut population = Population::new(4);
        population.push(tagged(0, 2.0));
        population.push(tagged(1, 1.0));
        population.push(tagged(2, 1.0));
        population.push(tagged(3, 1.0));

        population.sort(&ObjectiveComparator::minimizing(0));

        let tags: Vec<Genome> = population.iter().map(|c| c.genome.clone()).collect();
        assert_eq!(
            tags,
            vec![
                Genome::Permutation(vec![1]),
                Genome::Permutation(vec![2]),
                Genome::Permutation(vec![3]),
                Genome::Permutation(vec![0]),
            ],
            "tied members must keep insertion order"
        );
    }

    #[test]
    fn test_sort_preserves_membership() {
        let mut population = Population::new(8);
        for tag in 0..8 {
            population.push(tagged(tag, (tag as f64 * 7.0) % 3.0));
        }
        population.sort(&ObjectiveComparator::minimizing(0));

        let mut tags: Vec<usize> = population
            .iter()
            .map(|c| match &c.genome {
                Genome::Permutation(order) => order[0],
                _ => unreachable!(),
            })
            .collect();
        tags.sort_unstable();
        assert_eq!(tags, (0..8).collect::<Vec<_>>(), "no member lost or duplicated");
    }

    // ---- Truncate / clear ----

    #[test]
    fn test_truncate_keeps_prefix() {
        let mut population = Population::new(4);
        for tag in 0..4 {
            population.push(tagged(tag, tag as f64));
        }
        population.truncate(2);

        assert_eq!(population.len(), 2);
        assert_eq!(population[0].genome, Genome::Permutation(vec![0]));
        assert_eq!(population[1].genome, Genome::Permutation(vec![1]));
    }

    #[test]
    fn test_truncate_and_clear_on_empty_are_noops() {
        let mut population = Population::new(0);
        population.truncate(3);
        population.clear();
        assert!(population.is_empty());
    }

    #[test]
    fn test_clear_allows_reuse() {
        let mut population = Population::new(2);
        population.push(tagged(0, 1.0));
        population.push(tagged(1, 2.0));
        population.clear();

        assert!(population.is_empty());

        population.push(tagged(2, 3.0));
        assert_eq!(population.len(), 1);
        assert_eq!(population[0].genome, Genome::Permutation(vec![2]));
    }

    // ---- Truncation after growth (survivor selection pattern) ----

    #[test]
    fn test_sort_then_truncate_selects_best_prefix() {
        let mut population = Population::new(3);
        for (tag, objective) in [(0, 9.0), (1, 4.0), (2, 6.0), (3, 1.0), (4, 8.0)] {
            population.push(tagged(tag, objective));
        }

        population.sort(&ObjectiveComparator::minimizing(0));
        population.truncate(3);

        let objectives: Vec<f64> = population.iter().map(|c| c.objective(0)).collect();
        assert_eq!(objectives, vec![1.0, 4.0, 6.0]);
    }
}
