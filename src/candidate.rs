//! Candidate solutions and their genome encodings.

/// Decision variables of a candidate solution.
///
/// The engine never interprets genome contents; only operators do, and each
/// operator reports [`Error::EncodingMismatch`](crate::error::Error) when
/// handed an encoding it does not support. What the variables mean is
/// entirely up to the problem implementation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Genome {
    /// Continuous decision variables.
    Real(Vec<f64>),
    /// Bit-string decision variables.
    Binary(Vec<bool>),
    /// An ordering of `0..n`. Permutation operators assume every value
    /// below `n` appears exactly once.
    Permutation(Vec<usize>),
}

impl Genome {
    /// Number of decision variables.
    pub fn len(&self) -> usize {
        match self {
            Self::Real(values) => values.len(),
            Self::Binary(bits) => bits.len(),
            Self::Permutation(order) => order.len(),
        }
    }

    /// True when the genome holds no variables.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Encoding name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Real(_) => "real",
            Self::Binary(_) => "binary",
            Self::Permutation(_) => "permutation",
        }
    }
}

/// A candidate solution: a genome plus its objective values.
///
/// Objective values start at `f64::INFINITY` (the worst possible value
/// under minimization) and are meaningless until the owning problem has
/// evaluated the candidate after its most recent genome change.
///
/// Candidates are plain values: cloning one yields storage-independent
/// state, which is what population truncation and best-so-far tracking
/// rely on.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// Decision variables.
    pub genome: Genome,
    /// Objective values, index 0 first. Single-objective algorithms rank
    /// by index 0 and ignore the rest.
    pub objectives: Vec<f64>,
}

impl Candidate {
    /// Creates a single-objective candidate with an unevaluated objective.
    pub fn new(genome: Genome) -> Self {
        Self::with_objectives(genome, 1)
    }

    /// Creates a candidate carrying `objective_count` objective slots, all
    /// unevaluated.
    pub fn with_objectives(genome: Genome, objective_count: usize) -> Self {
        Self {
            genome,
            objectives: vec![f64::INFINITY; objective_count],
        }
    }

    /// Objective value at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn objective(&self, index: usize) -> f64 {
        self.objectives[index]
    }

    /// Stores an objective value, normally called from
    /// [`Problem::evaluate`](crate::problem::Problem::evaluate).
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn set_objective(&mut self, index: usize, value: f64) {
        self.objectives[index] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Genome ----

    #[test]
    fn test_genome_len_per_encoding() {
        assert_eq!(Genome::Real(vec![1.0, 2.0]).len(), 2);
        assert_eq!(Genome::Binary(vec![true, false, true]).len(), 3);
        assert_eq!(Genome::Permutation(vec![2, 0, 1, 3]).len(), 4);
        assert!(Genome::Real(vec![]).is_empty());
    }

    #[test]
    fn test_genome_kind_names() {
        assert_eq!(Genome::Real(vec![]).kind(), "real");
        assert_eq!(Genome::Binary(vec![]).kind(), "binary");
        assert_eq!(Genome::Permutation(vec![]).kind(), "permutation");
    }

    // ---- Candidate ----

    #[test]
    fn test_new_candidate_is_unevaluated() {
        let candidate = Candidate::new(Genome::Real(vec![0.5]));
        assert_eq!(candidate.objectives.len(), 1);
        assert_eq!(candidate.objective(0), f64::INFINITY);
    }

    #[test]
    fn test_with_objectives_sizes_vector() {
        let candidate = Candidate::with_objectives(Genome::Binary(vec![true]), 3);
        assert_eq!(candidate.objectives, vec![f64::INFINITY; 3]);
    }

    #[test]
    fn test_set_objective_round_trips() {
        let mut candidate = Candidate::new(Genome::Permutation(vec![0, 1]));
        candidate.set_objective(0, -4.5);
        assert_eq!(candidate.objective(0), -4.5);
    }

    #[test]
    fn test_clone_is_storage_independent() {
        let mut original = Candidate::new(Genome::Real(vec![1.0, 2.0]));
        original.set_objective(0, 7.0);

        let mut copy = original.clone();
        copy.set_objective(0, 0.0);
        if let Genome::Real(values) = &mut copy.genome {
            values[0] = 99.0;
        }

        assert_eq!(original.objective(0), 7.0);
        assert_eq!(original.genome, Genome::Real(vec![1.0, 2.0]));
    }
}
