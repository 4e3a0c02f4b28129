//! Error types shared across the crate.
//!
//! Every fallible operation returns [`Result`]. Errors fall into three
//! classes, mirroring how callers recover from them:
//!
//! - **Configuration**: a name or parameter handed to a registry or config
//!   builder is wrong. Raised before any evaluation budget is spent.
//! - **Precondition**: an operation was invoked on state that cannot satisfy
//!   its contract (population too small, wrong genome encoding, ...).
//! - **Evaluation**: the user-supplied objective function failed. The running
//!   algorithm aborts without committing the current generation.
//!
//! [`Error::is_configuration`], [`Error::is_precondition`], and
//! [`Error::is_evaluation`] classify an error without matching on variants.

use thiserror::Error;

use crate::operator::OperatorKind;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// An operator name outside the registry's recognized set.
    #[error("unknown {kind} operator {name:?}")]
    UnknownOperator {
        /// Capability the name was looked up under.
        kind: OperatorKind,
        /// The rejected name, as given.
        name: String,
    },

    /// A required operator setting was absent.
    #[error("{operator}: missing required setting {key:?}")]
    MissingSetting {
        /// Operator that needed the setting.
        operator: &'static str,
        /// The absent key.
        key: &'static str,
    },

    /// An operator setting outside its valid range.
    #[error("{operator}: setting {key:?} = {value} is invalid, expected {expected}")]
    InvalidSetting {
        /// Operator that rejected the setting.
        operator: &'static str,
        /// The offending key.
        key: &'static str,
        /// The rejected value.
        value: f64,
        /// Description of the accepted range.
        expected: &'static str,
    },

    /// A parameter that must be strictly positive was zero.
    #[error("{name} must be greater than zero")]
    ZeroParameter {
        /// Parameter name as it appears in the configuration.
        name: &'static str,
    },

    /// Offspring cannot be divided evenly among parents.
    #[error("lambda ({lambda}) must be a positive multiple of mu ({mu})")]
    LambdaNotDivisible {
        /// Configured parent count.
        mu: usize,
        /// Configured offspring count.
        lambda: usize,
    },

    /// An operation that needs more members than the population holds.
    #[error("{operation} requires a population of at least {required}, got {size}")]
    PopulationTooSmall {
        /// The rejecting operation.
        operation: &'static str,
        /// Minimum member count the operation needs.
        required: usize,
        /// Actual member count.
        size: usize,
    },

    /// A crossover invoked with the wrong number of auxiliary parents.
    #[error("{operator} takes {expected} auxiliary parent(s), got {got}")]
    ArityMismatch {
        /// The rejecting operator.
        operator: &'static str,
        /// Auxiliary parents the operator expects.
        expected: usize,
        /// Auxiliary parents it received.
        got: usize,
    },

    /// An operator applied to a genome encoding it does not support.
    #[error("{operator} operates on {expected} genomes, got {found}")]
    EncodingMismatch {
        /// The rejecting operator.
        operator: &'static str,
        /// Encoding the operator supports.
        expected: &'static str,
        /// Encoding it received.
        found: &'static str,
    },

    /// Parent genomes of different lengths handed to a recombination.
    #[error("{operator}: parent genomes differ in length ({left} vs {right})")]
    GenomeLengthMismatch {
        /// The rejecting operator.
        operator: &'static str,
        /// Length of the first genome.
        left: usize,
        /// Length of the offending genome.
        right: usize,
    },

    /// A selection that needs a target index was invoked without one.
    #[error("{operator} requires a target index")]
    MissingTarget {
        /// The rejecting operator.
        operator: &'static str,
    },

    /// The user-supplied objective function reported a failure.
    #[error("candidate evaluation failed: {0}")]
    Evaluation(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wraps a problem-side failure raised during candidate evaluation.
    ///
    /// Accepts anything convertible into a boxed error, including plain
    /// strings:
    ///
    /// ```
    /// use evocore::error::Error;
    ///
    /// let err = Error::evaluation("simulation diverged");
    /// assert!(err.is_evaluation());
    /// ```
    pub fn evaluation<E>(source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Evaluation(source.into())
    }

    /// True for bad names or parameter values, detected before any
    /// evaluation budget is spent.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::UnknownOperator { .. }
                | Self::MissingSetting { .. }
                | Self::InvalidSetting { .. }
                | Self::ZeroParameter { .. }
        )
    }

    /// True for operations invoked on state that cannot satisfy their
    /// contract.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::LambdaNotDivisible { .. }
                | Self::PopulationTooSmall { .. }
                | Self::ArityMismatch { .. }
                | Self::EncodingMismatch { .. }
                | Self::GenomeLengthMismatch { .. }
                | Self::MissingTarget { .. }
        )
    }

    /// True when the user-supplied objective function failed.
    pub fn is_evaluation(&self) -> bool {
        matches!(self, Self::Evaluation(_))
    }
}
