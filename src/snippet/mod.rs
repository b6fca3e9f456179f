//! Generation of the program the learner runs elsewhere.
//!
//! A snippet has three parts, concatenated in order:
//!
//! 1. a prologue that seeds the interpreter's random generator,
//! 2. one sampling line chosen by the [`Distribution`] variant,
//! 3. an epilogue printing the first and last few values and the mean.
//!
//! All substitutions are textual. The sample size and seed appear exactly as
//! typed (after trimming), and arithmetic such as `1 / 4` or `10 - 5 + i`
//! is left for the interpreter to evaluate.
//!
//! The [`Dialect`] trait decides what the three parts look like. [`Numpy`]
//! is the dialect the exercise ships with.

mod numpy;

use core::fmt::{self, Debug};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use self::numpy::Numpy;
use crate::distribution::Distribution;
use crate::error::{Error, Result};
use crate::form::FormState;

/// Target language of a generated snippet.
pub trait Dialect: Debug + Send + Sync {
    /// Human-readable interpreter name, used in the instructions.
    fn interpreter(&self) -> &'static str;

    /// Lines that import the library and seed its generator with `seed`.
    fn prologue(&self, seed: &str) -> String;

    /// The single line that draws `sample_size` values from `distribution`.
    fn sampling_line(&self, distribution: &Distribution, sample_size: &str) -> String;

    /// Lines that print the preview values and the mean.
    fn epilogue(&self, sample_size: &str, options: &SnippetOptions) -> String;
}

/// Formatting options for generated snippets.
///
/// Use [`Default::default()`] for the exercise's settings, or
/// [`SnippetOptions::builder()`] to change them with validation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SnippetOptions {
    /// How many values to print from each end of the sample (default: 5).
    pub preview_len: usize,
    /// Decimal places for the printed values (default: 2).
    pub decimals: u32,
    /// Where the learner can run the code (default: `https://repl.it`).
    pub interpreter_hint: String,
}

impl Default for SnippetOptions {
    fn default() -> Self {
        Self {
            preview_len: 5,
            decimals: 2,
            interpreter_hint: "https://repl.it".to_string(),
        }
    }
}

impl SnippetOptions {
    /// Returns a builder starting from the default options.
    ///
    /// # Examples
    ///
    /// ```
    /// use sampling_task::SnippetOptions;
    ///
    /// let options = SnippetOptions::builder().preview_len(3).decimals(4).build().unwrap();
    /// assert_eq!(options.preview_len, 3);
    /// assert!(SnippetOptions::builder().preview_len(0).build().is_err());
    /// ```
    #[must_use]
    pub fn builder() -> SnippetOptionsBuilder {
        SnippetOptionsBuilder {
            options: Self::default(),
        }
    }

    /// Checks that the options produce a meaningful snippet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`] if `preview_len` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.preview_len == 0 {
            return Err(Error::InvalidOptions("preview_len must be at least 1"));
        }
        Ok(())
    }
}

/// Fluent builder for [`SnippetOptions`].
#[derive(Clone, Debug)]
pub struct SnippetOptionsBuilder {
    options: SnippetOptions,
}

impl SnippetOptionsBuilder {
    /// Set how many values to print from each end of the sample.
    #[must_use]
    pub fn preview_len(mut self, preview_len: usize) -> Self {
        self.options.preview_len = preview_len;
        self
    }

    /// Set the number of decimal places for printed values.
    #[must_use]
    pub fn decimals(mut self, decimals: u32) -> Self {
        self.options.decimals = decimals;
        self
    }

    /// Set the interpreter suggestion shown with the answer.
    #[must_use]
    pub fn interpreter_hint(mut self, hint: impl Into<String>) -> Self {
        self.options.interpreter_hint = hint.into();
        self
    }

    /// Validate and return the options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`] if `preview_len` is zero.
    pub fn build(self) -> Result<SnippetOptions> {
        self.options.validate()?;
        Ok(self.options)
    }
}

/// Generated program text.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snippet {
    code: String,
}

impl Snippet {
    /// The full program, newline-terminated.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The program line by line.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.code.lines()
    }
}

impl fmt::Display for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// Generates a NumPy snippet for `form`.
///
/// Returns `None` when the sample size, distribution or seed is missing.
/// Presence is all that is checked; callers validate first with
/// [`check_parameters`](crate::check_parameters).
///
/// # Examples
///
/// ```
/// use sampling_task::snippet::generate;
/// use sampling_task::{Distribution, FormState, SnippetOptions};
///
/// let mut form = FormState::default();
/// form.set_sample_size("5");
/// form.set_distribution(Some(Distribution::uniform(0.0, 1.0).unwrap()));
/// form.set_seed("42");
///
/// let snippet = generate(&form, &SnippetOptions::default()).unwrap();
/// assert!(snippet.code().contains("np.random.seed(42)"));
/// ```
#[must_use]
pub fn generate(form: &FormState, options: &SnippetOptions) -> Option<Snippet> {
    generate_with(&Numpy, form, options)
}

/// Generates a snippet for `form` in the given dialect.
///
/// Returns `None` when the sample size, distribution or seed is missing.
#[must_use]
pub fn generate_with(
    dialect: &dyn Dialect,
    form: &FormState,
    options: &SnippetOptions,
) -> Option<Snippet> {
    let sample_size = form.sample_size();
    let seed = form.seed();
    let distribution = form.distribution()?;
    if sample_size.is_empty() || seed.is_empty() {
        return None;
    }

    let mut code = dialect.prologue(seed);
    code.push_str(&dialect.sampling_line(distribution, sample_size));
    code.push('\n');
    code.push_str(&dialect.epilogue(sample_size, options));

    Some(Snippet { code })
}
