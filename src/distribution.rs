//! Probability distributions offered by the exercise.
//!
//! A [`Distribution`] is a tagged value: the variant picks the family, the
//! fields carry its parameters. It is built once when the learner selects it
//! and replaced wholesale when they pick another one.
//!
//! # Example
//!
//! ```
//! use sampling_task::{Distribution, DistributionKind};
//!
//! let d: Distribution = "binomial(10, 0.3)".parse().unwrap();
//! assert_eq!(d.kind(), DistributionKind::Binomial);
//! assert_eq!(d, Distribution::binomial(10, 0.3).unwrap());
//! assert_eq!(d.to_string(), "binomial(10, 0.3)");
//! ```

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::form::Field;
use crate::number::parse_number;

/// The family of a [`Distribution`], without parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DistributionKind {
    /// A single trial with success probability `p`.
    Bernoulli,
    /// Number of successes in `n` trials.
    Binomial,
    /// Number of trials up to and including the first success.
    Geometric,
    /// Event count with rate `lambda`.
    Poisson,
    /// Continuous uniform on `[a, b)`.
    Uniform,
    /// Waiting time with rate `lambda`.
    Exponential,
    /// Gaussian with `mean` and standard deviation `std_dev`.
    Normal,
}

impl DistributionKind {
    /// Every kind, in selection-list order.
    pub const ALL: [Self; 7] = [
        Self::Bernoulli,
        Self::Binomial,
        Self::Geometric,
        Self::Poisson,
        Self::Uniform,
        Self::Exponential,
        Self::Normal,
    ];

    /// Lower-case name used in the `name(args)` notation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bernoulli => "bernoulli",
            Self::Binomial => "binomial",
            Self::Geometric => "geometric",
            Self::Poisson => "poisson",
            Self::Uniform => "uniform",
            Self::Exponential => "exponential",
            Self::Normal => "normal",
        }
    }

    /// Parameter names, in positional order.
    #[must_use]
    pub const fn parameter_names(self) -> &'static [&'static str] {
        match self {
            Self::Bernoulli | Self::Geometric => &["p"],
            Self::Binomial => &["n", "p"],
            Self::Poisson | Self::Exponential => &["lambda"],
            Self::Uniform => &["a", "b"],
            Self::Normal => &["mean", "std_dev"],
        }
    }

    /// Position in [`DistributionKind::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|&k| k == self)
            .unwrap_or_default()
    }

    /// The kind at `index` in [`DistributionKind::ALL`], if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Bernoulli => "Bernoulli",
            Self::Binomial => "Binomial",
            Self::Geometric => "Geometric",
            Self::Poisson => "Poisson",
            Self::Uniform => "Uniform",
            Self::Exponential => "Exponential",
            Self::Normal => "Normal",
        };
        f.write_str(label)
    }
}

impl FromStr for DistributionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownDistribution(name.to_string()))
    }
}

/// A distribution together with its parameters.
///
/// Fields are public so a selection widget can pattern-match on them; prefer
/// the validating constructors ([`Distribution::uniform`] and friends) or
/// [`FromStr`] when building one from user input.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum Distribution {
    /// Bernoulli trial.
    Bernoulli {
        /// Success probability.
        p: f64,
    },
    /// Binomial distribution.
    Binomial {
        /// Number of trials.
        n: u64,
        /// Success probability per trial.
        p: f64,
    },
    /// Geometric distribution.
    Geometric {
        /// Success probability per trial.
        p: f64,
    },
    /// Poisson distribution.
    Poisson {
        /// Rate.
        lambda: f64,
    },
    /// Continuous uniform distribution.
    Uniform {
        /// Lower bound.
        a: f64,
        /// Upper bound.
        b: f64,
    },
    /// Exponential distribution.
    Exponential {
        /// Rate; the NumPy scale is `1 / lambda`.
        lambda: f64,
    },
    /// Normal distribution.
    Normal {
        /// Mean.
        mean: f64,
        /// Standard deviation.
        std_dev: f64,
    },
}

impl Distribution {
    /// Bernoulli with success probability `p` in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `p` is outside `[0, 1]`.
    pub fn bernoulli(p: f64) -> Result<Self> {
        Self::Bernoulli { p }.validated()
    }

    /// Binomial with `n` trials and success probability `p` in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `p` is outside `[0, 1]`.
    pub fn binomial(n: u64, p: f64) -> Result<Self> {
        Self::Binomial { n, p }.validated()
    }

    /// Geometric with success probability `p` in `(0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `p` is outside `(0, 1]`.
    pub fn geometric(p: f64) -> Result<Self> {
        Self::Geometric { p }.validated()
    }

    /// Poisson with positive rate `lambda`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `lambda` is not positive and finite.
    pub fn poisson(lambda: f64) -> Result<Self> {
        Self::Poisson { lambda }.validated()
    }

    /// Uniform on `[a, b)` with `a < b`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if a bound is not finite or `a >= b`.
    pub fn uniform(a: f64, b: f64) -> Result<Self> {
        Self::Uniform { a, b }.validated()
    }

    /// Exponential with positive rate `lambda`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `lambda` is not positive and finite.
    pub fn exponential(lambda: f64) -> Result<Self> {
        Self::Exponential { lambda }.validated()
    }

    /// Normal with the given `mean` and positive `std_dev`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `mean` is not finite or
    /// `std_dev` is not positive and finite.
    pub fn normal(mean: f64, std_dev: f64) -> Result<Self> {
        Self::Normal { mean, std_dev }.validated()
    }

    /// Builds a distribution of `kind` from positional parameters, in the
    /// order given by [`DistributionKind::parameter_names`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParameterCount`] on an arity mismatch and
    /// [`Error::InvalidParameter`] if a value is outside its domain.
    pub fn from_kind(kind: DistributionKind, params: &[f64]) -> Result<Self> {
        let expected = kind.parameter_names().len();
        if params.len() != expected {
            return Err(Error::ParameterCount {
                kind,
                expected,
                got: params.len(),
            });
        }

        match (kind, params) {
            (DistributionKind::Bernoulli, &[p]) => Self::bernoulli(p),
            (DistributionKind::Binomial, &[n, p]) => Self::binomial(trial_count(n)?, p),
            (DistributionKind::Geometric, &[p]) => Self::geometric(p),
            (DistributionKind::Poisson, &[lambda]) => Self::poisson(lambda),
            (DistributionKind::Uniform, &[a, b]) => Self::uniform(a, b),
            (DistributionKind::Exponential, &[lambda]) => Self::exponential(lambda),
            (DistributionKind::Normal, &[mean, std_dev]) => Self::normal(mean, std_dev),
            _ => Err(Error::ParameterCount {
                kind,
                expected,
                got: params.len(),
            }),
        }
    }

    /// The family of this distribution.
    #[must_use]
    pub const fn kind(&self) -> DistributionKind {
        match self {
            Self::Bernoulli { .. } => DistributionKind::Bernoulli,
            Self::Binomial { .. } => DistributionKind::Binomial,
            Self::Geometric { .. } => DistributionKind::Geometric,
            Self::Poisson { .. } => DistributionKind::Poisson,
            Self::Uniform { .. } => DistributionKind::Uniform,
            Self::Exponential { .. } => DistributionKind::Exponential,
            Self::Normal { .. } => DistributionKind::Normal,
        }
    }

    /// Positional parameter values, formatted the way they appear in
    /// generated code.
    #[must_use]
    pub fn parameter_texts(&self) -> Vec<String> {
        match *self {
            Self::Bernoulli { p } | Self::Geometric { p } => vec![p.to_string()],
            Self::Binomial { n, p } => vec![n.to_string(), p.to_string()],
            Self::Poisson { lambda } | Self::Exponential { lambda } => vec![lambda.to_string()],
            Self::Uniform { a, b } => vec![a.to_string(), b.to_string()],
            Self::Normal { mean, std_dev } => vec![mean.to_string(), std_dev.to_string()],
        }
    }

    /// Checks every parameter against its domain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] naming the first offending parameter.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::Bernoulli { p } | Self::Binomial { p, .. } => probability("p", p, true),
            Self::Geometric { p } => probability("p", p, false),
            Self::Poisson { lambda } | Self::Exponential { lambda } => positive("lambda", lambda),
            Self::Uniform { a, b } => {
                finite("a", a)?;
                finite("b", b)?;
                if a < b {
                    Ok(())
                } else {
                    Err(Error::InvalidParameter {
                        name: "b",
                        reason: format!("upper bound {b} must exceed lower bound {a}"),
                    })
                }
            }
            Self::Normal { mean, std_dev } => {
                finite("mean", mean)?;
                positive("std_dev", std_dev)
            }
        }
    }

    fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind().name(), self.parameter_texts().join(", "))
    }
}

impl FromStr for Distribution {
    type Err = Error;

    /// Parses `name(arg, ...)`, e.g. `uniform(0, 1)` or `Poisson(3.5)`.
    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim();
        let syntax = |reason| Error::Syntax {
            input: input.to_string(),
            reason,
        };

        let (name, rest) = input
            .split_once('(')
            .ok_or_else(|| syntax("expected '(' after the distribution name"))?;
        let args = rest
            .strip_suffix(')')
            .ok_or_else(|| syntax("expected ')' at the end"))?;
        let kind: DistributionKind = name.parse()?;

        let params = args
            .split(',')
            .map(str::trim)
            .map(|arg| {
                if arg.is_empty() {
                    return Err(syntax("empty parameter"));
                }
                parse_number(arg).ok_or_else(|| Error::InvalidNumber {
                    field: Field::Distribution,
                    text: arg.to_string(),
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        Self::from_kind(kind, &params)
    }
}

fn finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name,
            reason: format!("{value} is not finite"),
        })
    }
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name,
            reason: format!("{value} must be positive"),
        })
    }
}

fn probability(name: &'static str, value: f64, allow_zero: bool) -> Result<()> {
    let in_range = if allow_zero {
        (0.0..=1.0).contains(&value)
    } else {
        value > 0.0 && value <= 1.0
    };
    if in_range {
        Ok(())
    } else {
        let interval = if allow_zero { "[0, 1]" } else { "(0, 1]" };
        Err(Error::InvalidParameter {
            name,
            reason: format!("{value} is outside {interval}"),
        })
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_cmp
)]
fn trial_count(value: f64) -> Result<u64> {
    // 2^53: beyond this f64 no longer represents every integer.
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= MAX_EXACT {
        Ok(value as u64)
    } else {
        Err(Error::InvalidParameter {
            name: "n",
            reason: format!("{value} is not a non-negative whole number"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_round_trip_through_index() {
        for (i, kind) in DistributionKind::ALL.into_iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(DistributionKind::from_index(i), Some(kind));
        }
        assert_eq!(DistributionKind::from_index(7), None);
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(
            Distribution::Exponential { lambda: 2.0 }.kind(),
            DistributionKind::Exponential
        );
        assert_eq!(
            Distribution::Normal {
                mean: 0.0,
                std_dev: 1.0
            }
            .kind(),
            DistributionKind::Normal
        );
    }

    #[test]
    fn parameter_texts_drop_trailing_zero_fraction() {
        let d = Distribution::uniform(0.0, 1.0).unwrap();
        assert_eq!(d.parameter_texts(), vec!["0", "1"]);

        let d = Distribution::normal(-1.5, 0.25).unwrap();
        assert_eq!(d.parameter_texts(), vec!["-1.5", "0.25"]);
    }

    #[test]
    fn trial_count_rejects_fractions_and_negatives() {
        assert_eq!(trial_count(10.0), Ok(10));
        assert!(trial_count(2.5).is_err());
        assert!(trial_count(-1.0).is_err());
        assert!(trial_count(f64::INFINITY).is_err());
    }
}
