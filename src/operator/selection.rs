//! Selection operators: choosing members of a population by index.
//!
//! Selections return indices rather than candidates so callers decide
//! whether to clone, borrow, or move the chosen members. All selectors
//! rank by the first objective, minimizing — the engine convention
//! throughout this crate.

use rand::Rng;
use std::fmt;

use crate::comparator::ObjectiveComparator;
use crate::error::{Error, Result};
use crate::operator::settings::OperatorSettings;
use crate::operator::OperatorKind;
use crate::population::Population;
use crate::random::sample_distinct;

/// Chooses member indices from a population.
pub trait SelectionOperator {
    /// Selects indices into `population`.
    ///
    /// `target` carries the index of the member being varied, for
    /// selectors that must avoid it; selectors that do not use a target
    /// ignore it.
    fn select<R: Rng>(
        &self,
        population: &Population,
        target: Option<usize>,
        rng: &mut R,
    ) -> Result<Vec<usize>>;
}

/// The closed set of selection names the registry recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionKind {
    /// Better of two distinct random members.
    BinaryTournament,
    /// The single best member.
    Best,
    /// The single worst member.
    Worst,
    /// One member, uniformly at random.
    Random,
    /// Three distinct members, none of them the target.
    DifferentialEvolution,
}

impl SelectionKind {
    /// Every recognized selection, in registry order.
    pub const ALL: [SelectionKind; 5] = [
        Self::BinaryTournament,
        Self::Best,
        Self::Worst,
        Self::Random,
        Self::DifferentialEvolution,
    ];

    /// Canonical registry name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BinaryTournament => BinaryTournament::NAME,
            Self::Best => BestSolutionSelection::NAME,
            Self::Worst => WorstSolutionSelection::NAME,
            Self::Random => RandomSelection::NAME,
            Self::DifferentialEvolution => DifferentialEvolutionSelection::NAME,
        }
    }

    /// Looks up a kind by registry name, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Concrete operators
// ============================================================================

/// Draws two distinct members and returns the index of the better one.
///
/// With a single-member population the sole index is returned. Ties are
/// broken by draw order, which the shuffle already randomizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryTournament;

impl BinaryTournament {
    /// Registry name.
    pub const NAME: &'static str = "BinaryTournament";

    /// Builds from settings. Takes no parameters.
    pub fn from_settings(_settings: &OperatorSettings) -> Result<Self> {
        Ok(Self)
    }
}

impl SelectionOperator for BinaryTournament {
    fn select<R: Rng>(
        &self,
        population: &Population,
        _target: Option<usize>,
        rng: &mut R,
    ) -> Result<Vec<usize>> {
        at_least("binary tournament", population, 1)?;
        if population.len() == 1 {
            return Ok(vec![0]);
        }
        let comparator = ObjectiveComparator::minimizing(0);
        let picks = sample_distinct(population.len(), 2, None, rng);
        let winner = if comparator.is_better(&population[picks[1]], &population[picks[0]]) {
            picks[1]
        } else {
            picks[0]
        };
        Ok(vec![winner])
    }
}

/// Returns the index of the best member. The earliest index wins ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestSolutionSelection;

impl BestSolutionSelection {
    /// Registry name.
    pub const NAME: &'static str = "BestSolutionSelection";

    /// Builds from settings. Takes no parameters.
    pub fn from_settings(_settings: &OperatorSettings) -> Result<Self> {
        Ok(Self)
    }
}

impl SelectionOperator for BestSolutionSelection {
    fn select<R: Rng>(
        &self,
        population: &Population,
        _target: Option<usize>,
        _rng: &mut R,
    ) -> Result<Vec<usize>> {
        at_least("best-member selection", population, 1)?;
        let comparator = ObjectiveComparator::minimizing(0);
        let mut best = 0;
        for i in 1..population.len() {
            if comparator.is_better(&population[i], &population[best]) {
                best = i;
            }
        }
        Ok(vec![best])
    }
}

/// Returns the index of the worst member. The earliest index wins ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorstSolutionSelection;

impl WorstSolutionSelection {
    /// Registry name.
    pub const NAME: &'static str = "WorstSolutionSelection";

    /// Builds from settings. Takes no parameters.
    pub fn from_settings(_settings: &OperatorSettings) -> Result<Self> {
        Ok(Self)
    }
}

impl SelectionOperator for WorstSolutionSelection {
    fn select<R: Rng>(
        &self,
        population: &Population,
        _target: Option<usize>,
        _rng: &mut R,
    ) -> Result<Vec<usize>> {
        at_least("worst-member selection", population, 1)?;
        let comparator = ObjectiveComparator::minimizing(0);
        let mut worst = 0;
        for i in 1..population.len() {
            if comparator.is_better(&population[worst], &population[i]) {
                worst = i;
            }
        }
        Ok(vec![worst])
    }
}

/// Returns one index drawn uniformly at random.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomSelection;

impl RandomSelection {
    /// Registry name.
    pub const NAME: &'static str = "RandomSelection";

    /// Builds from settings. Takes no parameters.
    pub fn from_settings(_settings: &OperatorSettings) -> Result<Self> {
        Ok(Self)
    }
}

impl SelectionOperator for RandomSelection {
    fn select<R: Rng>(
        &self,
        population: &Population,
        _target: Option<usize>,
        rng: &mut R,
    ) -> Result<Vec<usize>> {
        at_least("random selection", population, 1)?;
        Ok(vec![rng.random_range(0..population.len())])
    }
}

/// Returns three distinct indices, none of them the target.
///
/// Feeds the base and difference pair of a differential-evolution step, so
/// the population must hold at least four members: the target plus three
/// others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifferentialEvolutionSelection;

impl DifferentialEvolutionSelection {
    /// Registry name.
    pub const NAME: &'static str = "DifferentialEvolutionSelection";

    /// Builds from settings. Takes no parameters.
    pub fn from_settings(_settings: &OperatorSettings) -> Result<Self> {
        Ok(Self)
    }
}

impl SelectionOperator for DifferentialEvolutionSelection {
    fn select<R: Rng>(
        &self,
        population: &Population,
        target: Option<usize>,
        rng: &mut R,
    ) -> Result<Vec<usize>> {
        let target = target.ok_or(Error::MissingTarget {
            operator: Self::NAME,
        })?;
        at_least("differential-evolution selection", population, 4)?;
        debug_assert!(target < population.len(), "target must index the population");
        Ok(sample_distinct(population.len(), 3, Some(target), rng))
    }
}

// ============================================================================
// Dispatch enum
// ============================================================================

/// A selection operator resolved from the registry.
///
/// # Examples
///
/// ```
/// use evocore::operator::{OperatorSettings, Selection, SelectionKind};
///
/// let settings = OperatorSettings::new();
/// let operator = Selection::from_name("binarytournament", &settings).unwrap();
/// assert_eq!(operator.kind(), SelectionKind::BinaryTournament);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// See [`BinaryTournament`].
    BinaryTournament(BinaryTournament),
    /// See [`BestSolutionSelection`].
    Best(BestSolutionSelection),
    /// See [`WorstSolutionSelection`].
    Worst(WorstSolutionSelection),
    /// See [`RandomSelection`].
    Random(RandomSelection),
    /// See [`DifferentialEvolutionSelection`].
    DifferentialEvolution(DifferentialEvolutionSelection),
}

impl Selection {
    /// Builds the operator registered under `name` (case-insensitive).
    pub fn from_name(name: &str, settings: &OperatorSettings) -> Result<Self> {
        let kind = SelectionKind::parse(name).ok_or_else(|| Error::UnknownOperator {
            kind: OperatorKind::Selection,
            name: name.to_string(),
        })?;
        Self::from_kind(kind, settings)
    }

    /// Builds the operator for an already-resolved kind.
    pub fn from_kind(kind: SelectionKind, settings: &OperatorSettings) -> Result<Self> {
        Ok(match kind {
            SelectionKind::BinaryTournament => {
                Self::BinaryTournament(BinaryTournament::from_settings(settings)?)
            }
            SelectionKind::Best => Self::Best(BestSolutionSelection::from_settings(settings)?),
            SelectionKind::Worst => Self::Worst(WorstSolutionSelection::from_settings(settings)?),
            SelectionKind::Random => Self::Random(RandomSelection::from_settings(settings)?),
            SelectionKind::DifferentialEvolution => {
                Self::DifferentialEvolution(DifferentialEvolutionSelection::from_settings(settings)?)
            }
        })
    }

    /// Registry kind of this operator.
    pub fn kind(&self) -> SelectionKind {
        match self {
            Self::BinaryTournament(_) => SelectionKind::BinaryTournament,
            Self::Best(_) => SelectionKind::Best,
            Self::Worst(_) => SelectionKind::Worst,
            Self::Random(_) => SelectionKind::Random,
            Self::DifferentialEvolution(_) => SelectionKind::DifferentialEvolution,
        }
    }
}

impl SelectionOperator for Selection {
    fn select<R: Rng>(
        &self,
        population: &Population,
        target: Option<usize>,
        rng: &mut R,
    ) -> Result<Vec<usize>> {
        match self {
            Self::BinaryTournament(op) => op.select(population, target, rng),
            Self::Best(op) => op.select(population, target, rng),
            Self::Worst(op) => op.select(population, target, rng),
            Self::Random(op) => op.select(population, target, rng),
            Self::DifferentialEvolution(op) => op.select(population, target, rng),
        }
    }
}

fn at_least(operation: &'static str, population: &Population, required: usize) -> Result<()> {
    if population.len() < required {
        return Err(Error::PopulationTooSmall {
            operation,
            required,
            size: population.len(),
        });
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
