#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! A sampling exercise for statistics courses. The learner enters a sample
//! size, picks a probability distribution and types a random seed; once all
//! three are valid the task produces a short NumPy program that draws the
//! sample, prints its first and last values and its mean. The learner runs
//! that program in any Python interpreter and pastes the printed lines back.
//!
//! No sampling happens in this crate. It validates input and generates text.
//!
//! # Getting Started
//!
//! ```
//! use sampling_task::prelude::*;
//!
//! let mut task = Task61::new();
//! task.set_sample_size(" 5 ");
//! task.set_distribution(Some(Distribution::uniform(0.0, 1.0).unwrap()));
//! task.set_seed("42");
//!
//! assert!(task.check_parameters());
//!
//! let answer = task.render_answer().unwrap();
//! assert!(answer.snippet.code().contains("np.random.uniform(0, 1, 5)"));
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`FormState`] | Raw, trimmed text of the three input fields plus the selected distribution. |
//! | [`Distribution`] | One of seven distributions with its parameters. |
//! | [`FieldValidity`] | Per-field validity indicators, re-evaluated on every read. |
//! | [`Snippet`] | Generated program text for the selected distribution. |
//! | [`Task61`] | The exercise itself: form, options, answer lifecycle. |
//!
//! # Supported Distributions
//!
//! Below, `size` stands for the sample size text.
//!
//! | Distribution | Notation | Sampling call |
//! |--------------|----------|---------------|
//! | Bernoulli | `bernoulli(p)` | `np.random.binomial(1, p, size)` |
//! | Binomial | `binomial(n, p)` | `np.random.binomial(n, p, size)` |
//! | Geometric | `geometric(p)` | `np.random.geometric(p, size)` |
//! | Poisson | `poisson(l)` | `np.random.poisson(l, size)` |
//! | Uniform | `uniform(a, b)` | `np.random.uniform(a, b, size)` |
//! | Exponential | `exponential(l)` | `np.random.exponential(1 / l, size)` |
//! | Normal | `normal(a, d)` | `np.random.normal(a, d, size)` |
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `async` | [`Task61::render_answer_async`] for async UI shells | off |
//! | `serde` | `Serialize`/`Deserialize` on distributions, form state, options and answers | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) on edits and answers | off |
//! | `cli` | The `sampling-task` command-line binary (enables `serde` and `tracing`) | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod answer;
pub mod distribution;
mod error;
mod form;
pub mod number;
pub mod snippet;
pub mod task;
pub mod validation;

pub use answer::Answer;
pub use distribution::{Distribution, DistributionKind};
pub use error::{Error, Result};
pub use form::{Field, FormState};
pub use snippet::{Snippet, SnippetOptions, SnippetOptionsBuilder};
pub use task::{FieldView, Phase, Task, Task61, TaskBuilder};
pub use validation::{FieldValidity, ValidatedForm, check_parameters};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use sampling_task::prelude::*;
/// ```
pub mod prelude {
    pub use crate::answer::Answer;
    pub use crate::distribution::{Distribution, DistributionKind};
    pub use crate::error::{Error, Result};
    pub use crate::form::{Field, FormState};
    pub use crate::number::{is_valid_number, parse_number};
    pub use crate::snippet::{Dialect, Numpy, Snippet, SnippetOptions};
    pub use crate::task::{FieldView, Phase, Task, Task61};
    pub use crate::validation::{FieldValidity, ValidatedForm, check_parameters};
}
