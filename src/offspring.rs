//! Offspring generation for differential evolution.
//!
//! Packages auxiliary-parent selection and trial construction into one
//! step: pick two distinct members other than the target, then recombine
//! them with the target through
//! [`DifferentialEvolutionCrossover`](crate::operator::DifferentialEvolutionCrossover).
//! Steady-state DE loops call [`DifferentialEvolutionOffspring::generate`]
//! once per target and decide replacement themselves.

use rand::Rng;

use crate::candidate::Candidate;
use crate::error::{Error, Result};
use crate::operator::{DifferentialEvolutionCrossover, OperatorSettings};
use crate::population::Population;
use crate::random::sample_distinct;

/// Builds one trial candidate per target member of a population.
///
/// The target serves as the recombination base; the difference vector
/// comes from two distinct members drawn at random, neither of them the
/// target. The population must therefore hold at least three members.
///
/// # Examples
///
/// ```
/// use evocore::candidate::{Candidate, Genome};
/// use evocore::offspring::DifferentialEvolutionOffspring;
/// use evocore::population::Population;
/// use evocore::random::create_rng;
///
/// let mut population = Population::new(4);
/// for i in 0..4 {
///     population.push(Candidate::new(Genome::Real(vec![i as f64, 0.0])));
/// }
///
/// let generator = DifferentialEvolutionOffspring::new(0.9, 0.5).unwrap();
/// let trial = generator
///     .generate(&population, 0, &mut create_rng(1))
///     .unwrap();
/// assert_eq!(trial.genome.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DifferentialEvolutionOffspring {
    crossover: DifferentialEvolutionCrossover,
}

impl DifferentialEvolutionOffspring {
    /// Creates a generator with crossover rate `cr` (in [0, 1]) and
    /// differential weight `f` (in [0, 2]).
    pub fn new(cr: f64, f: f64) -> Result<Self> {
        let settings = OperatorSettings::new().with("CR", cr).with("F", f);
        Ok(Self {
            crossover: DifferentialEvolutionCrossover::from_settings(&settings)?,
        })
    }

    /// Produces one unevaluated trial candidate for the member at
    /// `target_index`.
    ///
    /// # Panics
    ///
    /// Panics if `target_index` does not index into `population`.
    pub fn generate<R: Rng>(
        &self,
        population: &Population,
        target_index: usize,
        rng: &mut R,
    ) -> Result<Candidate> {
        if population.len() < 3 {
            return Err(Error::PopulationTooSmall {
                operation: "differential-evolution offspring generation",
                required: 3,
                size: population.len(),
            });
        }
        let picks = sample_distinct(population.len(), 2, Some(target_index), rng);
        self.crossover.trial(
            &population[target_index],
            &population[picks[0]],
            &population[picks[1]],
            rng,
        )
    }
}
