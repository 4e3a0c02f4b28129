//! Crossover operators: recombination of parents into offspring.
//!
//! A crossover takes a primary parent plus a fixed number of auxiliary
//! parents (one for the pairwise operators, two for differential evolution)
//! and produces one or two offspring. Offspring are returned unevaluated:
//! their objective slots are reset to `f64::INFINITY` regardless of what
//! the parents carried.
//!
//! Real-coded operators use the textbook unbounded formulations; variable
//! bounds are a problem concern and are not clamped here.

use rand::Rng;
use std::fmt;

use crate::candidate::{Candidate, Genome};
use crate::error::{Error, Result};
use crate::operator::settings::OperatorSettings;
use crate::operator::{
    binary_genome, permutation_genome, positive_or, real_genome, required_probability,
    same_length, OperatorKind,
};

/// Recombines a primary parent with auxiliary parents into offspring.
pub trait CrossoverOperator {
    /// Number of auxiliary parents [`cross`](Self::cross) expects.
    fn auxiliary_arity(&self) -> usize;

    /// Produces offspring from `primary` and `auxiliary` parents.
    ///
    /// All parents must share the operator's genome encoding and length;
    /// `auxiliary` must hold exactly [`auxiliary_arity`](Self::auxiliary_arity)
    /// entries.
    fn cross<R: Rng>(
        &self,
        primary: &Candidate,
        auxiliary: &[&Candidate],
        rng: &mut R,
    ) -> Result<Vec<Candidate>>;
}

/// The closed set of crossover names the registry recognizes.
///
/// [`parse`](Self::parse) matches case-insensitively, so `"sbxcrossover"`
/// and `"SBXCrossover"` resolve to the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrossoverKind {
    /// Simulated binary crossover (real genomes).
    Sbx,
    /// One-cut recombination (binary genomes).
    SinglePoint,
    /// Partially mapped crossover (permutation genomes).
    Pmx,
    /// Two-cut order-preserving recombination (permutation genomes).
    TwoPoints,
    /// Half-uniform crossover (binary genomes).
    Hux,
    /// Binomial differential-evolution recombination (real genomes).
    DifferentialEvolution,
    /// Blend crossover (real genomes).
    BlxAlpha,
}

impl CrossoverKind {
    /// Every recognized crossover, in registry order.
    pub const ALL: [CrossoverKind; 7] = [
        Self::Sbx,
        Self::SinglePoint,
        Self::Pmx,
        Self::TwoPoints,
        Self::Hux,
        Self::DifferentialEvolution,
        Self::BlxAlpha,
    ];

    /// Canonical registry name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sbx => SbxCrossover::NAME,
            Self::SinglePoint => SinglePointCrossover::NAME,
            Self::Pmx => PmxCrossover::NAME,
            Self::TwoPoints => TwoPointsCrossover::NAME,
            Self::Hux => HuxCrossover::NAME,
            Self::DifferentialEvolution => DifferentialEvolutionCrossover::NAME,
            Self::BlxAlpha => BlxAlphaCrossover::NAME,
        }
    }

    /// Looks up a kind by registry name, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for CrossoverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Concrete operators
// ============================================================================

/// Simulated binary crossover for real genomes (Deb & Agrawal, 1995).
///
/// Each gene pair is recombined with probability 0.5 using a spread factor
/// drawn from a polynomial distribution. Larger `distributionIndex` values
/// keep children closer to their parents. Child gene sums always equal the
/// parent gene sums.
#[derive(Debug, Clone, PartialEq)]
pub struct SbxCrossover {
    probability: f64,
    distribution_index: f64,
}

impl SbxCrossover {
    /// Registry name.
    pub const NAME: &'static str = "SBXCrossover";

    /// Builds from settings: `probability` (required, in [0, 1]) and
    /// `distributionIndex` (optional, default 20, > 0).
    pub fn from_settings(settings: &OperatorSettings) -> Result<Self> {
        Ok(Self {
            probability: required_probability(settings, Self::NAME, "probability")?,
            distribution_index: positive_or(settings, Self::NAME, "distributionIndex", 20.0)?,
        })
    }
}

impl CrossoverOperator for SbxCrossover {
    fn auxiliary_arity(&self) -> usize {
        1
    }

    fn cross<R: Rng>(
        &self,
        primary: &Candidate,
        auxiliary: &[&Candidate],
        rng: &mut R,
    ) -> Result<Vec<Candidate>> {
        let other = one_auxiliary(Self::NAME, auxiliary)?;
        let a = real_genome(Self::NAME, primary)?;
        let b = real_genome(Self::NAME, other)?;
        same_length(Self::NAME, a.len(), b.len())?;

        let mut child_a = a.to_vec();
        let mut child_b = b.to_vec();
        if rng.random::<f64>() < self.probability {
            for j in 0..a.len() {
                if !rng.random_bool(0.5) {
                    continue;
                }
                let (low, high) = if a[j] <= b[j] { (a[j], b[j]) } else { (b[j], a[j]) };
                if high - low <= f64::EPSILON {
                    continue;
                }
                let u: f64 = rng.random();
                let exponent = 1.0 / (self.distribution_index + 1.0);
                let beta = if u <= 0.5 {
                    (2.0 * u).powf(exponent)
                } else {
                    (1.0 / (2.0 * (1.0 - u))).powf(exponent)
                };
                let mean = 0.5 * (low + high);
                let spread = 0.5 * beta * (high - low);
                let (near_low, near_high) = (mean - spread, mean + spread);
                if rng.random_bool(0.5) {
                    child_a[j] = near_high;
                    child_b[j] = near_low;
                } else {
                    child_a[j] = near_low;
                    child_b[j] = near_high;
                }
            }
        }
        Ok(vec![
            unevaluated(primary, Genome::Real(child_a)),
            unevaluated(primary, Genome::Real(child_b)),
        ])
    }
}

/// One-cut recombination for binary genomes.
///
/// A cut point in `1..len` splits both parents; children exchange the
/// suffixes. Genomes shorter than two bits pass through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct SinglePointCrossover {
    probability: f64,
}

impl SinglePointCrossover {
    /// Registry name.
    pub const NAME: &'static str = "SinglePointCrossover";

    /// Builds from settings: `probability` (required, in [0, 1]).
    pub fn from_settings(settings: &OperatorSettings) -> Result<Self> {
        Ok(Self {
            probability: required_probability(settings, Self::NAME, "probability")?,
        })
    }
}

impl CrossoverOperator for SinglePointCrossover {
    fn auxiliary_arity(&self) -> usize {
        1
    }

    fn cross<R: Rng>(
        &self,
        primary: &Candidate,
        auxiliary: &[&Candidate],
        rng: &mut R,
    ) -> Result<Vec<Candidate>> {
        let other = one_auxiliary(Self::NAME, auxiliary)?;
        let a = binary_genome(Self::NAME, primary)?;
        let b = binary_genome(Self::NAME, other)?;
        same_length(Self::NAME, a.len(), b.len())?;

        let mut child_a = a.to_vec();
        let mut child_b = b.to_vec();
        if a.len() >= 2 && rng.random::<f64>() < self.probability {
            let cut = rng.random_range(1..a.len());
            child_a[cut..].copy_from_slice(&b[cut..]);
            child_b[cut..].copy_from_slice(&a[cut..]);
        }
        Ok(vec![
            unevaluated(primary, Genome::Binary(child_a)),
            unevaluated(primary, Genome::Binary(child_b)),
        ])
    }
}

/// Partially mapped crossover for permutation genomes
/// (Goldberg & Lingle, 1985).
///
/// Copies a random segment from one parent and resolves the displaced
/// values of the other parent through the segment's mapping chains, so
/// children keep absolute positions where possible.
#[derive(Debug, Clone, PartialEq)]
pub struct PmxCrossover {
    probability: f64,
}

impl PmxCrossover {
    /// Registry name.
    pub const NAME: &'static str = "PMXCrossover";

    /// Builds from settings: `probability` (required, in [0, 1]).
    pub fn from_settings(settings: &OperatorSettings) -> Result<Self> {
        Ok(Self {
            probability: required_probability(settings, Self::NAME, "probability")?,
        })
    }
}

impl CrossoverOperator for PmxCrossover {
    fn auxiliary_arity(&self) -> usize {
        1
    }

    fn cross<R: Rng>(
        &self,
        primary: &Candidate,
        auxiliary: &[&Candidate],
        rng: &mut R,
    ) -> Result<Vec<Candidate>> {
        let other = one_auxiliary(Self::NAME, auxiliary)?;
        let a = permutation_genome(Self::NAME, primary)?;
        let b = permutation_genome(Self::NAME, other)?;
        same_length(Self::NAME, a.len(), b.len())?;

        let (child_a, child_b) = if a.len() >= 2 && rng.random::<f64>() < self.probability {
            let (start, end) = random_segment(a.len(), rng);
            (pmx_child(a, b, start, end), pmx_child(b, a, start, end))
        } else {
            (a.to_vec(), b.to_vec())
        };
        Ok(vec![
            unevaluated(primary, Genome::Permutation(child_a)),
            unevaluated(primary, Genome::Permutation(child_b)),
        ])
    }
}

/// Two-cut order-preserving crossover for permutation genomes.
///
/// Keeps the segment between two random cut points from one parent and
/// fills the remaining positions with the other parent's values in their
/// original relative order, wrapping around the second cut.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoPointsCrossover {
    probability: f64,
}

impl TwoPointsCrossover {
    /// Registry name.
    pub const NAME: &'static str = "TwoPointsCrossover";

    /// Builds from settings: `probability` (required, in [0, 1]).
    pub fn from_settings(settings: &OperatorSettings) -> Result<Self> {
        Ok(Self {
            probability: required_probability(settings, Self::NAME, "probability")?,
        })
    }
}

impl CrossoverOperator for TwoPointsCrossover {
    fn auxiliary_arity(&self) -> usize {
        1
    }

    fn cross<R: Rng>(
        &self,
        primary: &Candidate,
        auxiliary: &[&Candidate],
        rng: &mut R,
    ) -> Result<Vec<Candidate>> {
        let other = one_auxiliary(Self::NAME, auxiliary)?;
        let a = permutation_genome(Self::NAME, primary)?;
        let b = permutation_genome(Self::NAME, other)?;
        same_length(Self::NAME, a.len(), b.len())?;

        let (child_a, child_b) = if a.len() >= 2 && rng.random::<f64>() < self.probability {
            let (start, end) = random_segment(a.len(), rng);
            (
                two_points_child(a, b, start, end),
                two_points_child(b, a, start, end),
            )
        } else {
            (a.to_vec(), b.to_vec())
        };
        Ok(vec![
            unevaluated(primary, Genome::Permutation(child_a)),
            unevaluated(primary, Genome::Permutation(child_b)),
        ])
    }
}

/// Half-uniform crossover for binary genomes (Eshelman, 1991).
///
/// Exchanges roughly half of the differing bits between the parents;
/// positions where the parents agree are always preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct HuxCrossover {
    probability: f64,
}

impl HuxCrossover {
    /// Registry name.
    pub const NAME: &'static str = "HUXCrossover";

    /// Builds from settings: `probability` (required, in [0, 1]).
    pub fn from_settings(settings: &OperatorSettings) -> Result<Self> {
        Ok(Self {
            probability: required_probability(settings, Self::NAME, "probability")?,
        })
    }
}

impl CrossoverOperator for HuxCrossover {
    fn auxiliary_arity(&self) -> usize {
        1
    }

    fn cross<R: Rng>(
        &self,
        primary: &Candidate,
        auxiliary: &[&Candidate],
        rng: &mut R,
    ) -> Result<Vec<Candidate>> {
        let other = one_auxiliary(Self::NAME, auxiliary)?;
        let a = binary_genome(Self::NAME, primary)?;
        let b = binary_genome(Self::NAME, other)?;
        same_length(Self::NAME, a.len(), b.len())?;

        let mut child_a = a.to_vec();
        let mut child_b = b.to_vec();
        if rng.random::<f64>() < self.probability {
            for j in 0..a.len() {
                if a[j] != b[j] && rng.random_bool(0.5) {
                    child_a[j] = b[j];
                    child_b[j] = a[j];
                }
            }
        }
        Ok(vec![
            unevaluated(primary, Genome::Binary(child_a)),
            unevaluated(primary, Genome::Binary(child_b)),
        ])
    }
}

/// Binomial differential-evolution recombination for real genomes
/// (Storn & Price, 1997).
///
/// Produces one trial candidate: each gene is taken from
/// `base + F * (aux1 - aux2)` with probability `CR`, and copied from the
/// base otherwise. One random position is always taken from the mutant so
/// the trial never equals the base exactly when the auxiliaries differ.
#[derive(Debug, Clone, PartialEq)]
pub struct DifferentialEvolutionCrossover {
    cr: f64,
    f: f64,
}

impl DifferentialEvolutionCrossover {
    /// Registry name.
    pub const NAME: &'static str = "DifferentialEvolutionCrossover";

    /// Builds from settings: `CR` (required, in [0, 1]) and `F` (required,
    /// in [0, 2]). Both are fixed for the operator's lifetime.
    pub fn from_settings(settings: &OperatorSettings) -> Result<Self> {
        let cr = settings.require(Self::NAME, "CR")?;
        if !(0.0..=1.0).contains(&cr) {
            return Err(Error::InvalidSetting {
                operator: Self::NAME,
                key: "CR",
                value: cr,
                expected: "a crossover rate in [0, 1]",
            });
        }
        let f = settings.require(Self::NAME, "F")?;
        if !(0.0..=2.0).contains(&f) {
            return Err(Error::InvalidSetting {
                operator: Self::NAME,
                key: "F",
                value: f,
                expected: "a differential weight in [0, 2]",
            });
        }
        Ok(Self { cr, f })
    }

    /// Builds one trial candidate from `base` and the difference pair
    /// `(aux_a, aux_b)`.
    pub fn trial<R: Rng>(
        &self,
        base: &Candidate,
        aux_a: &Candidate,
        aux_b: &Candidate,
        rng: &mut R,
    ) -> Result<Candidate> {
        let x = real_genome(Self::NAME, base)?;
        let a = real_genome(Self::NAME, aux_a)?;
        let b = real_genome(Self::NAME, aux_b)?;
        same_length(Self::NAME, x.len(), a.len())?;
        same_length(Self::NAME, x.len(), b.len())?;

        let mut genes = x.to_vec();
        if !genes.is_empty() {
            let forced = rng.random_range(0..genes.len());
            for j in 0..genes.len() {
                if j == forced || rng.random::<f64>() < self.cr {
                    genes[j] = x[j] + self.f * (a[j] - b[j]);
                }
            }
        }
        Ok(unevaluated(base, Genome::Real(genes)))
    }
}

impl CrossoverOperator for DifferentialEvolutionCrossover {
    fn auxiliary_arity(&self) -> usize {
        2
    }

    fn cross<R: Rng>(
        &self,
        primary: &Candidate,
        auxiliary: &[&Candidate],
        rng: &mut R,
    ) -> Result<Vec<Candidate>> {
        if auxiliary.len() != 2 {
            return Err(Error::ArityMismatch {
                operator: Self::NAME,
                expected: 2,
                got: auxiliary.len(),
            });
        }
        Ok(vec![self.trial(primary, auxiliary[0], auxiliary[1], rng)?])
    }
}

/// Blend crossover for real genomes (BLX-alpha).
///
/// Each child gene is drawn uniformly from the parents' interval expanded
/// by `alpha` times its width on both sides.
#[derive(Debug, Clone, PartialEq)]
pub struct BlxAlphaCrossover {
    probability: f64,
    alpha: f64,
}

impl BlxAlphaCrossover {
    /// Registry name.
    pub const NAME: &'static str = "BLXAlphaCrossover";

    /// Builds from settings: `probability` (required, in [0, 1]) and
    /// `alpha` (optional, default 0.5, finite and >= 0).
    pub fn from_settings(settings: &OperatorSettings) -> Result<Self> {
        let probability = required_probability(settings, Self::NAME, "probability")?;
        let alpha = settings.get_or("alpha", 0.5);
        if !alpha.is_finite() || alpha < 0.0 {
            return Err(Error::InvalidSetting {
                operator: Self::NAME,
                key: "alpha",
                value: alpha,
                expected: "a finite value >= 0",
            });
        }
        Ok(Self { probability, alpha })
    }
}

impl CrossoverOperator for BlxAlphaCrossover {
    fn auxiliary_arity(&self) -> usize {
        1
    }

    fn cross<R: Rng>(
        &self,
        primary: &Candidate,
        auxiliary: &[&Candidate],
        rng: &mut R,
    ) -> Result<Vec<Candidate>> {
        let other = one_auxiliary(Self::NAME, auxiliary)?;
        let a = real_genome(Self::NAME, primary)?;
        let b = real_genome(Self::NAME, other)?;
        same_length(Self::NAME, a.len(), b.len())?;

        let mut child_a = a.to_vec();
        let mut child_b = b.to_vec();
        if rng.random::<f64>() < self.probability {
            for j in 0..a.len() {
                let (low, high) = if a[j] <= b[j] { (a[j], b[j]) } else { (b[j], a[j]) };
                let margin = self.alpha * (high - low);
                let floor = low - margin;
                let span = (high + margin) - floor;
                child_a[j] = floor + rng.random::<f64>() * span;
                child_b[j] = floor + rng.random::<f64>() * span;
            }
        }
        Ok(vec![
            unevaluated(primary, Genome::Real(child_a)),
            unevaluated(primary, Genome::Real(child_b)),
        ])
    }
}

// ============================================================================
// Dispatch enum
// ============================================================================

/// A crossover operator resolved from the registry.
///
/// Tagged dispatch keeps registry-built operators as plain values; the
/// enum implements [`CrossoverOperator`] by delegating to its payload.
///
/// # Examples
///
/// ```
/// use evocore::operator::{Crossover, CrossoverKind, OperatorSettings};
///
/// let settings = OperatorSettings::new().with("probability", 0.9);
/// let operator = Crossover::from_name("sbxcrossover", &settings).unwrap();
/// assert_eq!(operator.kind(), CrossoverKind::Sbx);
///
/// assert!(Crossover::from_name("FancyCrossover", &settings).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Crossover {
    /// See [`SbxCrossover`].
    Sbx(SbxCrossover),
    /// See [`SinglePointCrossover`].
    SinglePoint(SinglePointCrossover),
    /// See [`PmxCrossover`].
    Pmx(PmxCrossover),
    /// See [`TwoPointsCrossover`].
    TwoPoints(TwoPointsCrossover),
    /// See [`HuxCrossover`].
    Hux(HuxCrossover),
    /// See [`DifferentialEvolutionCrossover`].
    DifferentialEvolution(DifferentialEvolutionCrossover),
    /// See [`BlxAlphaCrossover`].
    BlxAlpha(BlxAlphaCrossover),
}

impl Crossover {
    /// Builds the operator registered under `name` (case-insensitive).
    ///
    /// Unknown names fail with [`Error::UnknownOperator`] and construct
    /// nothing; known names validate their settings before returning.
    pub fn from_name(name: &str, settings: &OperatorSettings) -> Result<Self> {
        let kind = CrossoverKind::parse(name).ok_or_else(|| Error::UnknownOperator {
            kind: OperatorKind::Crossover,
            name: name.to_string(),
        })?;
        Self::from_kind(kind, settings)
    }

    /// Builds the operator for an already-resolved kind.
    pub fn from_kind(kind: CrossoverKind, settings: &OperatorSettings) -> Result<Self> {
        Ok(match kind {
            CrossoverKind::Sbx => Self::Sbx(SbxCrossover::from_settings(settings)?),
            CrossoverKind::SinglePoint => {
                Self::SinglePoint(SinglePointCrossover::from_settings(settings)?)
            }
            CrossoverKind::Pmx => Self::Pmx(PmxCrossover::from_settings(settings)?),
            CrossoverKind::TwoPoints => {
                Self::TwoPoints(TwoPointsCrossover::from_settings(settings)?)
            }
            CrossoverKind::Hux => Self::Hux(HuxCrossover::from_settings(settings)?),
            CrossoverKind::DifferentialEvolution => {
                Self::DifferentialEvolution(DifferentialEvolutionCrossover::from_settings(settings)?)
            }
            CrossoverKind::BlxAlpha => Self::BlxAlpha(BlxAlphaCrossover::from_settings(settings)?),
        })
    }

    /// Registry kind of this operator.
    pub fn kind(&self) -> CrossoverKind {
        match self {
            Self::Sbx(_) => CrossoverKind::Sbx,
            Self::SinglePoint(_) => CrossoverKind::SinglePoint,
            Self::Pmx(_) => CrossoverKind::Pmx,
            Self::TwoPoints(_) => CrossoverKind::TwoPoints,
            Self::Hux(_) => CrossoverKind::Hux,
            Self::DifferentialEvolution(_) => CrossoverKind::DifferentialEvolution,
            Self::BlxAlpha(_) => CrossoverKind::BlxAlpha,
        }
    }
}

impl CrossoverOperator for Crossover {
    fn auxiliary_arity(&self) -> usize {
        match self {
            Self::Sbx(op) => op.auxiliary_arity(),
            Self::SinglePoint(op) => op.auxiliary_arity(),
            Self::Pmx(op) => op.auxiliary_arity(),
            Self::TwoPoints(op) => op.auxiliary_arity(),
            Self::Hux(op) => op.auxiliary_arity(),
            Self::DifferentialEvolution(op) => op.auxiliary_arity(),
            Self::BlxAlpha(op) => op.auxiliary_arity(),
        }
    }

    fn cross<R: Rng>(
        &self,
        primary: &Candidate,
        auxiliary: &[&Candidate],
        rng: &mut R,
    ) -> Result<Vec<Candidate>> {
        match self {
            Self::Sbx(op) => op.cross(primary, auxiliary, rng),
            Self::SinglePoint(op) => op.cross(primary, auxiliary, rng),
            Self::Pmx(op) => op.cross(primary, auxiliary, rng),
            Self::TwoPoints(op) => op.cross(primary, auxiliary, rng),
            Self::Hux(op) => op.cross(primary, auxiliary, rng),
            Self::DifferentialEvolution(op) => op.cross(primary, auxiliary, rng),
            Self::BlxAlpha(op) => op.cross(primary, auxiliary, rng),
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// An offspring shell: new genome, unevaluated objective slots sized like
/// the parent's.
fn unevaluated(parent: &Candidate, genome: Genome) -> Candidate {
    Candidate::with_objectives(genome, parent.objectives.len())
}

fn one_auxiliary<'a>(operator: &'static str, auxiliary: &[&'a Candidate]) -> Result<&'a Candidate> {
    if auxiliary.len() != 1 {
        return Err(Error::ArityMismatch {
            operator,
            expected: 1,
            got: auxiliary.len(),
        });
    }
    Ok(auxiliary[0])
}

/// Pick a random segment `[start, end]` within `0..n` where `start <= end`.
fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Build one PMX child: keep `keeper`'s segment, resolve the donor's
/// displaced segment values through mapping chains, fill the rest from
/// `donor`. Assumes both slices are permutations of `0..n`.
fn pmx_child(keeper: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = keeper.len();
    let unset = usize::MAX;
    let mut child = vec![unset; n];
    let mut placed = vec![false; n];

    for i in start..=end {
        child[i] = keeper[i];
        placed[keeper[i]] = true;
    }

    // Donor position of every value, for walking mapping chains.
    let mut donor_position = vec![0usize; n];
    for (i, &value) in donor.iter().enumerate() {
        donor_position[value] = i;
    }

    for i in start..=end {
        let value = donor[i];
        if placed[value] {
            continue;
        }
        // Follow keeper→donor mappings until a position outside the
        // segment is free.
        let mut position = i;
        loop {
            position = donor_position[keeper[position]];
            if position < start || position > end {
                child[position] = value;
                placed[value] = true;
                break;
            }
        }
    }

    for i in 0..n {
        if child[i] == unset {
            child[i] = donor[i];
        }
    }
    child
}

/// Build one two-points child: keep `keeper`'s segment, fill the remaining
/// positions with `donor`'s values in donor order, starting after the
/// segment and wrapping. Assumes both slices are permutations of `0..n`.
fn two_points_child(keeper: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = keeper.len();
    let mut child = vec![0usize; n];
    let mut in_segment = vec![false; n];

    for i in start..=end {
        child[i] = keeper[i];
        in_segment[keeper[i]] = true;
    }

    let mut write = (end + 1) % n;
    for offset in 0..n {
        let value = donor[(end + 1 + offset) % n];
        if !in_segment[value] {
            child[write] = value;
            write = (write + 1) % n;
        }
    }
    child
}

// ============================================================================
// Tests
// ============================================================================
