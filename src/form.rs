//! Raw input state of the exercise form.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::distribution::Distribution;

/// One of the three input fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Field {
    /// Sample size, `n`.
    SampleSize,
    /// Selected distribution.
    Distribution,
    /// Random seed.
    Seed,
}

impl Field {
    /// Every field, in display order.
    pub const ALL: [Self; 3] = [Self::SampleSize, Self::Distribution, Self::Seed];
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SampleSize => "sample size",
            Self::Distribution => "distribution",
            Self::Seed => "random seed",
        })
    }
}

/// Text of the sample size and seed fields plus the selected distribution.
///
/// Texts are stored trimmed but otherwise as typed. Nothing is parsed here:
/// [`FieldValidity`](crate::FieldValidity) and the snippet generator parse
/// on every read, so a stale parse can never outlive an edit.
///
/// # Examples
///
/// ```
/// use sampling_task::{Distribution, FormState};
///
/// let mut form = FormState::default();
/// form.set_sample_size("  10 ");
/// form.set_seed("7");
/// form.set_distribution(Some(Distribution::poisson(3.0).unwrap()));
///
/// assert_eq!(form.sample_size(), "10");
/// assert_eq!(form.seed(), "7");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormState {
    sample_size: String,
    distribution: Option<Distribution>,
    seed: String,
}

impl FormState {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the sample size text with `text`, trimmed.
    pub fn set_sample_size(&mut self, text: &str) {
        self.sample_size = text.trim().to_string();
    }

    /// Replaces the distribution selection. `None` clears it.
    pub fn set_distribution(&mut self, distribution: Option<Distribution>) {
        self.distribution = distribution;
    }

    /// Replaces the seed text with `text`, trimmed.
    pub fn set_seed(&mut self, text: &str) {
        self.seed = text.trim().to_string();
    }

    /// Trimmed sample size text.
    #[must_use]
    pub fn sample_size(&self) -> &str {
        &self.sample_size
    }

    /// Currently selected distribution.
    #[must_use]
    pub fn distribution(&self) -> Option<&Distribution> {
        self.distribution.as_ref()
    }

    /// Trimmed seed text.
    #[must_use]
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Text shown for `field`; the distribution renders in `name(args)` notation.
    #[must_use]
    pub fn text(&self, field: Field) -> String {
        match field {
            Field::SampleSize => self.sample_size.clone(),
            Field::Distribution => self
                .distribution
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            Field::Seed => self.seed.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn updates_touch_only_their_field() {
        let mut form = FormState::new();
        form.set_sample_size("5");
        form.set_seed("42");
        let uniform = Distribution::uniform(0.0, 1.0).unwrap();
        form.set_distribution(Some(uniform));

        form.set_seed(" 43\t");
        assert_eq!(form.sample_size(), "5");
        assert_eq!(form.distribution(), Some(&uniform));
        assert_eq!(form.seed(), "43");

        form.set_distribution(None);
        assert_eq!(form.sample_size(), "5");
        assert_eq!(form.seed(), "43");
        assert!(form.distribution().is_none());
    }

    #[test]
    fn text_renders_each_field() {
        let mut form = FormState::new();
        assert_eq!(form.text(Field::Distribution), "");

        form.set_distribution(Some(Distribution::exponential(4.0).unwrap()));
        assert_eq!(form.text(Field::Distribution), "exponential(4)");
    }
}
