//! Genetic operators and their name-based registry.
//!
//! Operators come in three capabilities, each behind its own trait:
//!
//! - [`CrossoverOperator`]: recombines parents into offspring
//! - [`MutationOperator`]: perturbs one candidate in place
//! - [`SelectionOperator`]: chooses member indices from a population
//!
//! Every capability has a closed set of registered names (see
//! [`CrossoverKind`], [`MutationKind`], [`SelectionKind`]). Names resolve
//! case-insensitively; parameters travel in an immutable
//! [`OperatorSettings`] value. Constructing an operator validates name and
//! parameters up front — an unknown name or a bad parameter fails with a
//! configuration error before any search work happens.
//!
//! Heterogeneous operator values are composed through the tagged enums
//! ([`Crossover`], [`Mutation`], [`Selection`]) rather than trait objects,
//! so registry-built operators are plain values.
//!
//! # References
//!
//! - Deb & Agrawal (1995), "Simulated Binary Crossover for Continuous
//!   Search Space"
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman
//!   Problem"
//! - Eshelman (1991), "The CHC Adaptive Search Algorithm" (HUX)
//! - Storn & Price (1997), "Differential Evolution — A Simple and Efficient
//!   Heuristic for Global Optimization over Continuous Spaces"

use std::fmt;

use crate::candidate::{Candidate, Genome};
use crate::error::{Error, Result};

mod crossover;
mod mutation;
mod selection;
mod settings;

pub use crossover::{
    BlxAlphaCrossover, Crossover, CrossoverKind, CrossoverOperator,
    DifferentialEvolutionCrossover, HuxCrossover, PmxCrossover, SbxCrossover,
    SinglePointCrossover, TwoPointsCrossover,
};
pub use mutation::{
    BitFlipMutation, Mutation, MutationKind, MutationOperator, PolynomialMutation, SwapMutation,
    UniformMutation,
};
pub use selection::{
    BestSolutionSelection, BinaryTournament, DifferentialEvolutionSelection, RandomSelection,
    Selection, SelectionKind, SelectionOperator, WorstSolutionSelection,
};
pub use settings::OperatorSettings;

/// The capability an operator name was looked up under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperatorKind {
    /// Recombination of two or more parents.
    Crossover,
    /// In-place perturbation of one candidate.
    Mutation,
    /// Index selection from a population.
    Selection,
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Crossover => "crossover",
            Self::Mutation => "mutation",
            Self::Selection => "selection",
        };
        f.write_str(label)
    }
}

// ============================================================================
// Shared genome / settings checks
// ============================================================================

pub(crate) fn real_genome<'a>(operator: &'static str, candidate: &'a Candidate) -> Result<&'a [f64]> {
    match &candidate.genome {
        Genome::Real(values) => Ok(values),
        other => Err(Error::EncodingMismatch {
            operator,
            expected: "real",
            found: other.kind(),
        }),
    }
}

pub(crate) fn real_genome_mut<'a>(
    operator: &'static str,
    candidate: &'a mut Candidate,
) -> Result<&'a mut Vec<f64>> {
    match &mut candidate.genome {
        Genome::Real(values) => Ok(values),
        other => Err(Error::EncodingMismatch {
            operator,
            expected: "real",
            found: other.kind(),
        }),
    }
}

pub(crate) fn binary_genome<'a>(
    operator: &'static str,
    candidate: &'a Candidate,
) -> Result<&'a [bool]> {
    match &candidate.genome {
        Genome::Binary(bits) => Ok(bits),
        other => Err(Error::EncodingMismatch {
            operator,
            expected: "binary",
            found: other.kind(),
        }),
    }
}

pub(crate) fn binary_genome_mut<'a>(
    operator: &'static str,
    candidate: &'a mut Candidate,
) -> Result<&'a mut Vec<bool>> {
    match &mut candidate.genome {
        Genome::Binary(bits) => Ok(bits),
        other => Err(Error::EncodingMismatch {
            operator,
            expected: "binary",
            found: other.kind(),
        }),
    }
}

pub(crate) fn permutation_genome<'a>(
    operator: &'static str,
    candidate: &'a Candidate,
) -> Result<&'a [usize]> {
    match &candidate.genome {
        Genome::Permutation(order) => Ok(order),
        other => Err(Error::EncodingMismatch {
            operator,
            expected: "permutation",
            found: other.kind(),
        }),
    }
}

pub(crate) fn permutation_genome_mut<'a>(
    operator: &'static str,
    candidate: &'a mut Candidate,
) -> Result<&'a mut Vec<usize>> {
    match &mut candidate.genome {
        Genome::Permutation(order) => Ok(order),
        other => Err(Error::EncodingMismatch {
            operator,
            expected: "permutation",
            found: other.kind(),
        }),
    }
}

pub(crate) fn same_length(operator: &'static str, left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(Error::GenomeLengthMismatch {
            operator,
            left,
            right,
        });
    }
    Ok(())
}

/// Required probability-valued setting, validated to [0, 1].
pub(crate) fn required_probability(
    settings: &OperatorSettings,
    operator: &'static str,
    key: &'static str,
) -> Result<f64> {
    let value = settings.require(operator, key)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(Error::InvalidSetting {
            operator,
            key,
            value,
            expected: "a probability in [0, 1]",
        });
    }
    Ok(value)
}

/// Optional setting with a default, validated to be finite and > 0.
pub(crate) fn positive_or(
    settings: &OperatorSettings,
    operator: &'static str,
    key: &'static str,
    default: f64,
) -> Result<f64> {
    let value = settings.get_or(key, default);
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidSetting {
            operator,
            key,
            value,
            expected: "a finite value > 0",
        });
    }
    Ok(value)
}
