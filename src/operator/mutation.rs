//! Mutation operators: in-place perturbation of a single candidate.
//!
//! Mutations modify the genome and leave the objective slots untouched;
//! callers re-evaluate the candidate afterwards. Real-coded mutations use
//! the unbounded textbook formulations and do not clamp to variable
//! bounds.

use rand::Rng;
use std::fmt;

use crate::candidate::Candidate;
use crate::error::{Error, Result};
use crate::operator::settings::OperatorSettings;
use crate::operator::{
    binary_genome_mut, permutation_genome_mut, positive_or, real_genome_mut,
    required_probability, OperatorKind,
};

/// Perturbs a candidate's genome in place.
pub trait MutationOperator {
    /// Mutates `candidate`. The genome encoding must match the operator.
    fn mutate<R: Rng>(&self, candidate: &mut Candidate, rng: &mut R) -> Result<()>;
}

/// The closed set of mutation names the registry recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    /// Independent per-bit flips (binary genomes).
    BitFlip,
    /// Polynomial perturbation (real genomes).
    Polynomial,
    /// Uniform perturbation (real genomes).
    Uniform,
    /// Exchange of two positions (permutation genomes).
    Swap,
}

impl MutationKind {
    /// Every recognized mutation, in registry order.
    pub const ALL: [MutationKind; 4] = [
        Self::BitFlip,
        Self::Polynomial,
        Self::Uniform,
        Self::Swap,
    ];

    /// Canonical registry name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BitFlip => BitFlipMutation::NAME,
            Self::Polynomial => PolynomialMutation::NAME,
            Self::Uniform => UniformMutation::NAME,
            Self::Swap => SwapMutation::NAME,
        }
    }

    /// Looks up a kind by registry name, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Concrete operators
// ============================================================================

/// Flips each bit independently with the configured probability.
#[derive(Debug, Clone, PartialEq)]
pub struct BitFlipMutation {
    probability: f64,
}

impl BitFlipMutation {
    /// Registry name.
    pub const NAME: &'static str = "BitFlipMutation";

    /// Builds from settings: `probability` (required, in [0, 1]).
    pub fn from_settings(settings: &OperatorSettings) -> Result<Self> {
        Ok(Self {
            probability: required_probability(settings, Self::NAME, "probability")?,
        })
    }
}

impl MutationOperator for BitFlipMutation {
    fn mutate<R: Rng>(&self, candidate: &mut Candidate, rng: &mut R) -> Result<()> {
        let bits = binary_genome_mut(Self::NAME, candidate)?;
        for bit in bits.iter_mut() {
            if rng.random::<f64>() < self.probability {
                *bit = !*bit;
            }
        }
        Ok(())
    }
}

/// Polynomial mutation for real genomes (Deb & Goyal, 1996).
///
/// Each gene is perturbed with the configured probability by a delta drawn
/// from a polynomial distribution; the delta magnitude is always below one
/// and shrinks as `distributionIndex` grows.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialMutation {
    probability: f64,
    distribution_index: f64,
}

impl PolynomialMutation {
    /// Registry name.
    pub const NAME: &'static str = "PolynomialMutation";

    /// Builds from settings: `probability` (required, in [0, 1]) and
    /// `distributionIndex` (optional, default 20, > 0).
    pub fn from_settings(settings: &OperatorSettings) -> Result<Self> {
        Ok(Self {
            probability: required_probability(settings, Self::NAME, "probability")?,
            distribution_index: positive_or(settings, Self::NAME, "distributionIndex", 20.0)?,
        })
    }
}

impl MutationOperator for PolynomialMutation {
    fn mutate<R: Rng>(&self, candidate: &mut Candidate, rng: &mut R) -> Result<()> {
        let genes = real_genome_mut(Self::NAME, candidate)?;
        let exponent = 1.0 / (self.distribution_index + 1.0);
        for gene in genes.iter_mut() {
            if rng.random::<f64>() >= self.probability {
                continue;
            }
            let u: f64 = rng.random();
            let delta = if u < 0.5 {
                (2.0 * u).powf(exponent) - 1.0
            } else {
                1.0 - (2.0 * (1.0 - u)).powf(exponent)
            };
            *gene += delta;
        }
        Ok(())
    }
}

/// Adds a uniform random offset in `(-perturbation, perturbation)` to each
/// gene, independently with the configured probability.
#[derive(Debug, Clone, PartialEq)]
pub struct UniformMutation {
    probability: f64,
    perturbation: f64,
}

impl UniformMutation {
    /// Registry name.
    pub const NAME: &'static str = "UniformMutation";

    /// Builds from settings: `probability` (required, in [0, 1]) and
    /// `perturbation` (required, finite and > 0).
    pub fn from_settings(settings: &OperatorSettings) -> Result<Self> {
        let probability = required_probability(settings, Self::NAME, "probability")?;
        let perturbation = settings.require(Self::NAME, "perturbation")?;
        if !perturbation.is_finite() || perturbation <= 0.0 {
            return Err(Error::InvalidSetting {
                operator: Self::NAME,
                key: "perturbation",
                value: perturbation,
                expected: "a finite value > 0",
            });
        }
        Ok(Self {
            probability,
            perturbation,
        })
    }
}

impl MutationOperator for UniformMutation {
    fn mutate<R: Rng>(&self, candidate: &mut Candidate, rng: &mut R) -> Result<()> {
        let genes = real_genome_mut(Self::NAME, candidate)?;
        for gene in genes.iter_mut() {
            if rng.random::<f64>() < self.probability {
                *gene += rng.random_range(-self.perturbation..self.perturbation);
            }
        }
        Ok(())
    }
}

/// Exchanges two distinct positions of a permutation with the configured
/// probability. Permutations shorter than two elements pass through
/// unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapMutation {
    probability: f64,
}

impl SwapMutation {
    /// Registry name.
    pub const NAME: &'static str = "SwapMutation";

    /// Builds from settings: `probability` (required, in [0, 1]).
    pub fn from_settings(settings: &OperatorSettings) -> Result<Self> {
        Ok(Self {
            probability: required_probability(settings, Self::NAME, "probability")?,
        })
    }
}

impl MutationOperator for SwapMutation {
    fn mutate<R: Rng>(&self, candidate: &mut Candidate, rng: &mut R) -> Result<()> {
        let order = permutation_genome_mut(Self::NAME, candidate)?;
        let n = order.len();
        if n < 2 || rng.random::<f64>() >= self.probability {
            return Ok(());
        }
        let i = rng.random_range(0..n);
        // Draw j from the n-1 positions other than i.
        let mut j = rng.random_range(0..n - 1);
        if j >= i {
            j += 1;
        }
        order.swap(i, j);
        Ok(())
    }
}

// ============================================================================
// Dispatch enum
// ============================================================================

/// A mutation operator resolved from the registry.
///
/// # Examples
///
/// ```
/// use evocore::operator::{Mutation, MutationKind, OperatorSettings};
///
/// let settings = OperatorSettings::new().with("probability", 0.05);
/// let operator = Mutation::from_name("bitflipmutation", &settings).unwrap();
/// assert_eq!(operator.kind(), MutationKind::BitFlip);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// See [`BitFlipMutation`].
    BitFlip(BitFlipMutation),
    /// See [`PolynomialMutation`].
    Polynomial(PolynomialMutation),
    /// See [`UniformMutation`].
    Uniform(UniformMutation),
    /// See [`SwapMutation`].
    Swap(SwapMutation),
}

impl Mutation {
    /// Builds the operator registered under `name` (case-insensitive).
    pub fn from_name(name: &str, settings: &OperatorSettings) -> Result<Self> {
        let kind = MutationKind::parse(name).ok_or_else(|| Error::UnknownOperator {
            kind: OperatorKind::Mutation,
            name: name.to_string(),
        })?;
        Self::from_kind(kind, settings)
    }

    /// Builds the operator for an already-resolved kind.
    pub fn from_kind(kind: MutationKind, settings: &OperatorSettings) -> Result<Self> {
        Ok(match kind {
            MutationKind::BitFlip => Self::BitFlip(BitFlipMutation::from_settings(settings)?),
            MutationKind::Polynomial => {
                Self::Polynomial(PolynomialMutation::from_settings(settings)?)
            }
            MutationKind::Uniform => Self::Uniform(UniformMutation::from_settings(settings)?),
            MutationKind::Swap => Self::Swap(SwapMutation::from_settings(settings)?),
        })
    }

    /// Registry kind of this operator.
    pub fn kind(&self) -> MutationKind {
        match self {
            Self::BitFlip(_) => MutationKind::BitFlip,
            Self::Polynomial(_) => MutationKind::Polynomial,
            Self::Uniform(_) => MutationKind::Uniform,
            Self::Swap(_) => MutationKind::Swap,
        }
    }
}

impl MutationOperator for Mutation {
    fn mutate<R: Rng>(&self, candidate: &mut Candidate, rng: &mut R) -> Result<()> {
        match self {
            Self::BitFlip(op) => op.mutate(candidate, rng),
            Self::Polynomial(op) => op.mutate(candidate, rng),
            Self::Uniform(op) => op.mutate(candidate, rng),
            Self::Swap(op) => op.mutate(candidate, rng),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use crate::candidate::Genome;
    use crate::random::create_rng;

    fn real(values: &[f64]) -> Candidate {
        Candidate::new(Genome::Real(values.to_vec()))
    }

    fn bits(values: &[bool]) -> Candidate {
        Candidate::new(Genome::Binary(values.to_vec()))
    }

    fn perm(values: &[usize]) -> Candidate {
        Candidate::new(Genome::Permutation(values.to_vec()))
    }

    fn probability(p: f64) -> OperatorSettings {
        OperatorSettings::new().with("probability", p)
    }

    // ---- Registry ----

    #[test]
    fn test_kind_parse_is_case_insensitive() {
        for kind in MutationKind::ALL {
            let name = kind.name();
            assert_eq!(MutationKind::parse(name), Some(kind));
            assert_eq!(MutationKind::parse(&name.to_lowercase()), Some(kind));
            assert_eq!(MutationKind::parse(&name.to_uppercase()), Some(kind));
        }
    }

    #[test]
    fn test_from_name_unknown_is_configuration_error() {
        let err = Mutation::from_name("GaussianMutation", &probability(0.1)).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("GaussianMutation"));
    }

    #[test]
    fn test_from_name_resolves_every_registered_kind() {
        let settings = probability(0.1).with("perturbation", 0.5);
        for kind in MutationKind::ALL {
            let operator = Mutation::from_name(kind.name(), &settings)
                .unwrap_or_else(|e| panic!("{} failed to build: {e}", kind.name()));
            assert_eq!(operator.kind(), kind);
        }
    }

    // ---- Bit flip ----

    #[test]
    fn test_bit_flip_full_probability_flips_everything() {
        let operator = BitFlipMutation::from_settings(&probability(1.0)).unwrap();
        let mut candidate = bits(&[true, false, true, false]);
        operator.mutate(&mut candidate, &mut create_rng(42)).unwrap();
        assert_eq!(
            candidate.genome,
            Genome::Binary(vec![false, true, false, true])
        );
    }

    #[test]
    fn test_bit_flip_zero_probability_is_identity() {
        let operator = BitFlipMutation::from_settings(&probability(0.0)).unwrap();
        let mut candidate = bits(&[true, false, true]);
        let before = candidate.clone();
        operator.mutate(&mut candidate, &mut create_rng(42)).unwrap();
        assert_eq!(candidate, before);
    }

    #[test]
    fn test_bit_flip_rejects_real_genomes() {
        let operator = BitFlipMutation::from_settings(&probability(0.1)).unwrap();
        let mut candidate = real(&[1.0]);
        let err = operator
            .mutate(&mut candidate, &mut create_rng(0))
            .unwrap_err();
        assert!(matches!(err, Error::EncodingMismatch { .. }));
        assert!(err.is_precondition());
    }

    // ---- Polynomial ----

    #[test]
    fn test_polynomial_deltas_are_bounded_by_one() {
        let operator = PolynomialMutation::from_settings(&probability(1.0)).unwrap();
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let mut candidate = real(&[0.0, 10.0, -10.0]);
            let before = match &candidate.genome {
                Genome::Real(v) => v.clone(),
                _ => unreachable!(),
            };
            operator.mutate(&mut candidate, &mut rng).unwrap();
            let Genome::Real(after) = &candidate.genome else {
                unreachable!()
            };
            for j in 0..3 {
                assert!(
                    (after[j] - before[j]).abs() < 1.0,
                    "delta {} exceeds the unit bound",
                    after[j] - before[j]
                );
            }
        }
    }

    #[test]
    fn test_polynomial_full_probability_perturbs_genes() {
        let operator = PolynomialMutation::from_settings(&probability(1.0)).unwrap();
        let mut candidate = real(&[0.0, 0.0, 0.0, 0.0, 0.0]);
        operator.mutate(&mut candidate, &mut create_rng(42)).unwrap();
        let Genome::Real(after) = &candidate.genome else {
            unreachable!()
        };
        assert!(after.iter().any(|&g| g != 0.0));
    }

    #[test]
    fn test_polynomial_zero_probability_is_identity() {
        let operator = PolynomialMutation::from_settings(&probability(0.0)).unwrap();
        let mut candidate = real(&[1.5, -2.5]);
        let before = candidate.clone();
        operator.mutate(&mut candidate, &mut create_rng(42)).unwrap();
        assert_eq!(candidate, before);
    }

    #[test]
    fn test_polynomial_default_distribution_index_is_twenty() {
        let implicit = PolynomialMutation::from_settings(&probability(1.0)).unwrap();
        let explicit =
            PolynomialMutation::from_settings(&probability(1.0).with("distributionIndex", 20.0))
                .unwrap();

        let mut a = real(&[0.0, 1.0, 2.0]);
        let mut b = a.clone();
        implicit.mutate(&mut a, &mut create_rng(9)).unwrap();
        explicit.mutate(&mut b, &mut create_rng(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_polynomial_invalid_distribution_index_rejected() {
        let err =
            PolynomialMutation::from_settings(&probability(0.1).with("distributionIndex", 0.0))
                .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidSetting {
                key: "distributionIndex",
                ..
            }
        ));
    }

    // ---- Uniform ----

    #[test]
    fn test_uniform_offsets_stay_within_perturbation() {
        let settings = probability(1.0).with("perturbation", 0.25);
        let operator = UniformMutation::from_settings(&settings).unwrap();
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let mut candidate = real(&[5.0, -5.0]);
            operator.mutate(&mut candidate, &mut rng).unwrap();
            let Genome::Real(after) = &candidate.genome else {
                unreachable!()
            };
            assert!((after[0] - 5.0).abs() <= 0.25);
            assert!((after[1] + 5.0).abs() <= 0.25);
        }
    }

    #[test]
    fn test_uniform_requires_perturbation() {
        let err = UniformMutation::from_settings(&probability(0.1)).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingSetting {
                key: "perturbation",
                ..
            }
        ));
    }

    #[test]
    fn test_uniform_rejects_non_positive_perturbation() {
        let err = UniformMutation::from_settings(&probability(0.1).with("perturbation", 0.0))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidSetting {
                key: "perturbation",
                ..
            }
        ));
    }

    // ---- Swap ----

    #[test]
    fn test_swap_preserves_values_and_moves_exactly_two() {
        let operator = SwapMutation::from_settings(&probability(1.0)).unwrap();
        let mut rng = create_rng(42);
        let original = [0usize, 1, 2, 3, 4, 5, 6, 7];

        for _ in 0..100 {
            let mut candidate = perm(&original);
            operator.mutate(&mut candidate, &mut rng).unwrap();
            let Genome::Permutation(after) = &candidate.genome else {
                unreachable!()
            };
            let values: HashSet<usize> = after.iter().copied().collect();
            assert_eq!(values.len(), original.len(), "values must be preserved");
            let moved = original
                .iter()
                .zip(after.iter())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(moved, 2, "a swap moves exactly two positions");
        }
    }

    #[test]
    fn test_swap_zero_probability_is_identity() {
        let operator = SwapMutation::from_settings(&probability(0.0)).unwrap();
        let mut candidate = perm(&[2, 0, 1]);
        let before = candidate.clone();
        operator.mutate(&mut candidate, &mut create_rng(42)).unwrap();
        assert_eq!(candidate, before);
    }

    #[test]
    fn test_swap_short_permutations_pass_through() {
        let operator = SwapMutation::from_settings(&probability(1.0)).unwrap();
        for order in [vec![], vec![0]] {
            let mut candidate = perm(&order);
            operator.mutate(&mut candidate, &mut create_rng(1)).unwrap();
            assert_eq!(candidate.genome, Genome::Permutation(order));
        }
    }

    #[test]
    fn test_swap_rejects_binary_genomes() {
        let operator = SwapMutation::from_settings(&probability(1.0)).unwrap();
        let mut candidate = bits(&[true, false]);
        let err = operator
            .mutate(&mut candidate, &mut create_rng(0))
            .unwrap_err();
        assert!(matches!(err, Error::EncodingMismatch { .. }));
    }

    // ---- Enum dispatch ----

    #[test]
    fn test_enum_dispatch_matches_concrete_operator() {
        let settings = probability(1.0);
        let concrete = BitFlipMutation::from_settings(&settings).unwrap();
        let dispatched = Mutation::from_name("BitFlipMutation", &settings).unwrap();

        let mut a = bits(&[true, false, true]);
        let mut b = a.clone();
        concrete.mutate(&mut a, &mut create_rng(7)).unwrap();
        dispatched.mutate(&mut b, &mut create_rng(7)).unwrap();
        assert_eq!(a, b);
    }
}
