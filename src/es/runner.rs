//! The (mu, lambda) evolution-strategy loop.
//!
//! [`EsRunner`] orchestrates the full process: seed mu parents → mutate
//! each into lambda/mu children → evaluate → rank → replace → repeat
//! until the evaluation budget is spent.

use tracing::{debug, info};

use crate::candidate::Candidate;
use crate::comparator::ObjectiveComparator;
use crate::error::Result;
use crate::es::config::{EsConfig, Replacement};
use crate::es::observer::{GenerationProgress, ProgressObserver};
use crate::operator::MutationOperator;
use crate::population::Population;
use crate::problem::Problem;
use crate::random::create_rng;

/// Outcome of an evolution-strategy run.
#[derive(Debug, Clone)]
pub struct EsResult {
    /// Final population: a single member, the top-ranked parent of the
    /// last generation. Under comma replacement it can be worse than
    /// `best`.
    pub result: Population,

    /// Best candidate evaluated at any point of the run.
    pub best: Candidate,

    /// Objective value of `best`.
    pub best_objective: f64,

    /// Total objective evaluations performed.
    pub evaluations: usize,

    /// Completed generations.
    pub generations: usize,
}

/// Executes the evolution-strategy loop.
///
/// # Usage
///
/// ```
/// use evocore::candidate::{Candidate, Genome};
/// use evocore::error::Result;
/// use evocore::es::{EsConfig, EsRunner};
/// use evocore::operator::{Mutation, OperatorSettings};
/// use evocore::problem::Problem;
/// use rand::Rng;
///
/// struct Sphere;
///
/// impl Problem for Sphere {
///     fn initial_candidate<R: Rng>(&self, rng: &mut R) -> Candidate {
///         let genes = (0..4).map(|_| rng.random_range(-5.0..5.0)).collect();
///         Candidate::new(Genome::Real(genes))
///     }
///
///     fn evaluate(&self, candidate: &mut Candidate) -> Result<()> {
///         if let Genome::Real(genes) = &candidate.genome {
///             candidate.set_objective(0, genes.iter().map(|g| g * g).sum());
///         }
///         Ok(())
///     }
/// }
///
/// let mutation = Mutation::from_name(
///     "UniformMutation",
///     &OperatorSettings::new()
///         .with("probability", 1.0)
///         .with("perturbation", 0.5),
/// )?;
/// let config = EsConfig::new()
///     .with_mu(5)
///     .with_lambda(25)
///     .with_max_evaluations(2_000)
///     .with_parallel(false)
///     .with_seed(42);
///
/// let outcome = EsRunner::run(&Sphere, &mutation, &config)?;
/// assert_eq!(outcome.evaluations, 2_005);
/// assert!(outcome.best_objective.is_finite());
/// # Ok::<(), evocore::error::Error>(())
/// ```
pub struct EsRunner;

impl EsRunner {
    /// Runs the strategy to budget exhaustion.
    pub fn run<P, M>(problem: &P, mutation: &M, config: &EsConfig) -> Result<EsResult>
    where
        P: Problem,
        M: MutationOperator,
    {
        Self::run_with_observer(problem, mutation, config, &mut |_: GenerationProgress| {})
    }

    /// Runs the strategy, pushing a snapshot to `observer` after every
    /// completed generation.
    pub fn run_with_observer<P, M, O>(
        problem: &P,
        mutation: &M,
        config: &EsConfig,
        observer: &mut O,
    ) -> Result<EsResult>
    where
        P: Problem,
        M: MutationOperator,
        O: ProgressObserver + ?Sized,
    {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(seed);
        let comparator = ObjectiveComparator::minimizing(0);

        info!(
            mu = config.mu,
            lambda = config.lambda,
            max_evaluations = config.max_evaluations,
            seed,
            "starting evolution strategy"
        );

        // 1. Seed and evaluate the parents. The first parent seeds the
        // all-time best; later candidates take it over only on strict
        // improvement, so the earliest holder survives ties.
        let mut parents = Population::new(config.mu);
        let mut first = problem.initial_candidate(&mut rng);
        problem.evaluate(&mut first)?;
        let mut best = first.clone();
        parents.push(first);
        for _ in 1..config.mu {
            let mut candidate = problem.initial_candidate(&mut rng);
            problem.evaluate(&mut candidate)?;
            if comparator.is_better(&candidate, &best) {
                best = candidate.clone();
            }
            parents.push(candidate);
        }
        let mut evaluations = config.mu;
        let mut generations = 0usize;

        let per_parent = config.offspring_per_parent();
        let pool_capacity = match config.replacement {
            Replacement::MuCommaLambda => config.lambda,
            Replacement::MuPlusLambda => config.lambda + config.mu,
        };
        let mut pool = Population::new(pool_capacity);

        // 2. Generational loop. The budget is checked between
        // generations, so the final generation may overshoot it.
        while evaluations < config.max_evaluations {
            for i in 0..parents.len() {
                for _ in 0..per_parent {
                    let mut child = parents[i].clone();
                    mutation.mutate(&mut child, &mut rng)?;
                    pool.push(child);
                }
            }
            evaluations += evaluate_batch(problem, &mut pool, config.parallel)?;

            // Parents join the ranking only under plus replacement; they
            // were already evaluated, so they are added after the batch.
            if config.replacement == Replacement::MuPlusLambda {
                for i in 0..parents.len() {
                    pool.push(parents[i].clone());
                }
            }

            pool.sort(&comparator);
            if comparator.is_better(&pool[0], &best) {
                best = pool[0].clone();
            }

            parents.clear();
            for i in 0..config.mu {
                parents.push(pool[i].clone());
            }
            pool.clear();
            generations += 1;

            let progress = GenerationProgress {
                generation: generations,
                evaluations,
                current_best: parents[0].objective(0),
                global_best: best.objective(0),
            };
            debug!(
                generation = progress.generation,
                evaluations = progress.evaluations,
                current_best = progress.current_best,
                global_best = progress.global_best,
                "generation complete"
            );
            observer.on_generation(progress);
        }

        info!(
            evaluations,
            generations,
            best_objective = best.objective(0),
            "evolution strategy finished"
        );

        // 3. Package the outcome. The returned population holds the
        // top-ranked parent; the all-time best rides alongside because
        // comma replacement may have discarded it.
        let mut result = Population::new(1);
        result.push(parents[0].clone());
        Ok(EsResult {
            result,
            best_objective: best.objective(0),
            best,
            evaluations,
            generations,
        })
    }
}

/// Evaluates every member of `batch`, across threads when requested, and
/// returns the number of evaluations charged. Ranking happens only after
/// the whole batch is done.
fn evaluate_batch<P: Problem>(
    problem: &P,
    batch: &mut Population,
    parallel: bool,
) -> Result<usize> {
    #[cfg(feature = "parallel")]
    if parallel {
        use rayon::prelude::*;
        batch
            .as_mut_slice()
            .par_iter_mut()
            .try_for_each(|candidate| problem.evaluate(candidate))?;
        return Ok(batch.len());
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for candidate in batch.iter_mut() {
        problem.evaluate(candidate)?;
    }
    Ok(batch.len())
}
