//! Validation of the form.
//!
//! Validity is a pure function of [`FormState`] and is recomputed on every
//! call. A field is either valid or not; there is no partial state beyond
//! the three per-field indicators.

use crate::distribution::Distribution;
use crate::error::{Error, Result};
use crate::form::{Field, FormState};
use crate::number::{is_valid_number, parse_number};

/// Per-field validity indicators.
///
/// # Examples
///
/// ```
/// use sampling_task::{FieldValidity, FormState};
///
/// let mut form = FormState::default();
/// form.set_sample_size("0");
/// form.set_seed("abc");
///
/// let validity = FieldValidity::of(&form);
/// assert!(validity.sample_size);
/// assert!(!validity.distribution);
/// assert!(!validity.seed);
/// assert!(!validity.all());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldValidity {
    /// Sample size text is a number.
    pub sample_size: bool,
    /// A distribution is selected.
    pub distribution: bool,
    /// Seed text is a number.
    pub seed: bool,
}

impl FieldValidity {
    /// Evaluates every field of `form`.
    #[must_use]
    pub fn of(form: &FormState) -> Self {
        Self {
            sample_size: is_valid_number(form.sample_size()),
            distribution: form.distribution().is_some(),
            seed: is_valid_number(form.seed()),
        }
    }

    /// Validity of a single field.
    #[must_use]
    pub const fn get(&self, field: Field) -> bool {
        match field {
            Field::SampleSize => self.sample_size,
            Field::Distribution => self.distribution,
            Field::Seed => self.seed,
        }
    }

    /// `true` when every field is valid.
    #[must_use]
    pub const fn all(&self) -> bool {
        self.sample_size && self.distribution && self.seed
    }
}

/// Returns `true` iff the sample size and seed are numbers and a
/// distribution is selected.
#[must_use]
pub fn check_parameters(form: &FormState) -> bool {
    FieldValidity::of(form).all()
}

/// Parsed values of a fully valid form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValidatedForm {
    /// Numeric sample size.
    pub sample_size: f64,
    /// The selected distribution.
    pub distribution: Distribution,
    /// Numeric seed.
    pub seed: f64,
}

impl FormState {
    /// Validates the form and returns the parsed values.
    ///
    /// Decides exactly like [`check_parameters`], but reports why a form is
    /// rejected. Fields are checked in display order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyField`] or [`Error::InvalidNumber`] for a bad
    /// sample size or seed, and [`Error::MissingDistribution`] when nothing
    /// is selected.
    pub fn validated(&self) -> Result<ValidatedForm> {
        let sample_size = number_field(Field::SampleSize, self.sample_size())?;
        let distribution = *self.distribution().ok_or(Error::MissingDistribution)?;
        let seed = number_field(Field::Seed, self.seed())?;
        Ok(ValidatedForm {
            sample_size,
            distribution,
            seed,
        })
    }
}

fn number_field(field: Field, text: &str) -> Result<f64> {
    if text.trim().is_empty() {
        trace_debug!(%field, "field is empty");
        return Err(Error::EmptyField(field));
    }
    parse_number(text).ok_or_else(|| {
        trace_debug!(%field, text, "field is not a number");
        Error::InvalidNumber {
            field,
            text: text.to_string(),
        }
    })
}
