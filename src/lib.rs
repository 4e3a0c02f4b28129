//! Population-based evolutionary optimization.
//!
//! Three layers build on each other:
//!
//! - **Data model**: [`candidate::Candidate`] pairs a typed genome (real
//!   vector, bit string, or permutation) with its objective values;
//!   [`population::Population`] adds the sort/truncate survivor
//!   operations; [`problem::Problem`] is the user's seam for seeding and
//!   evaluating candidates.
//! - **Operators**: crossover, mutation, and selection behind capability
//!   traits, constructed from registry names and an
//!   [`operator::OperatorSettings`] value object. The registries are
//!   closed sets matched case-insensitively.
//! - **Search drivers**: [`es::EsRunner`] runs a (mu, lambda) evolution
//!   strategy under an evaluation budget;
//!   [`offspring::DifferentialEvolutionOffspring`] builds trial
//!   candidates for steady-state differential-evolution loops.
//!
//! # Architecture
//!
//! The crate is domain-agnostic: genomes carry no meaning beyond their
//! encoding, and objective values come solely from the consumer's
//! [`problem::Problem`] implementation. All ranking minimizes the first
//! objective; maximize by negating. Failures are classified into
//! configuration, precondition, and evaluation errors ([`error::Error`])
//! so callers can tell bad setup apart from a failing objective function.

pub mod candidate;
pub mod comparator;
pub mod error;
pub mod es;
pub mod offspring;
pub mod operator;
pub mod population;
pub mod problem;
pub mod random;
