//! Evolution strategies under an evaluation budget.
//!
//! A (mu, lambda) strategy keeps `mu` parents and breeds `lambda`
//! offspring per generation through mutation alone, with each parent
//! contributing an equal share. Ranking is by the first objective,
//! minimizing. Replacement is non-elitist by default — parents are
//! discarded wholesale each generation — with an optional elitist
//! (mu + lambda) scheme.
//!
//! # Key Types
//!
//! - [`EsConfig`]: Strategy parameters (mu, lambda, budget, replacement)
//! - [`EsRunner`]: Executes the generational loop
//! - [`EsResult`]: Final population plus the all-time best candidate
//! - [`ProgressObserver`]: Per-generation progress callback
//!
//! # References
//!
//! - Rechenberg (1973), *Evolutionsstrategie*
//! - Schwefel (1981), *Numerical Optimization of Computer Models*
//! - Beyer & Schwefel (2002), *Evolution Strategies: A Comprehensive Introduction*

mod config;
mod observer;
mod runner;

pub use config::{EsConfig, Replacement};
pub use observer::{GenerationProgress, ProgressObserver};
pub use runner::{EsResult, EsRunner};
