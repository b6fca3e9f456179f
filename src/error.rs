use crate::distribution::DistributionKind;
use crate::form::Field;

/// Errors returned by the sampling task.
///
/// None of these are fatal for an interactive form: invalid input only keeps
/// the answer from being generated until the user corrects it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Returned when a required text field is empty after trimming.
    #[error("{0} is empty")]
    EmptyField(Field),

    /// Returned when a text field does not convert to a number.
    #[error("{field} is not a number: '{text}'")]
    InvalidNumber {
        /// The field holding the text.
        field: Field,
        /// The offending text.
        text: String,
    },

    /// Returned when no distribution has been selected.
    #[error("no distribution selected")]
    MissingDistribution,

    /// Returned when a distribution parameter is outside its domain.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// The parameter name, e.g. `p` or `lambda`.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Returned when a distribution receives the wrong number of parameters.
    #[error("{kind} takes {expected} parameter(s), got {got}")]
    ParameterCount {
        /// The distribution being built.
        kind: DistributionKind,
        /// Number of parameters the distribution takes.
        expected: usize,
        /// Number of parameters supplied.
        got: usize,
    },

    /// Returned when a distribution name is not recognized.
    #[error("unknown distribution '{0}'")]
    UnknownDistribution(String),

    /// Returned when distribution notation cannot be parsed.
    #[error("cannot parse distribution '{input}': {reason}")]
    Syntax {
        /// The text that failed to parse.
        input: String,
        /// What was expected.
        reason: &'static str,
    },

    /// Returned when snippet options are inconsistent.
    #[error("invalid snippet options: {0}")]
    InvalidOptions(&'static str),
}

pub type Result<T> = core::result::Result<T, Error>;
