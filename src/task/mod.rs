//! The exercise and the shell seam it plugs into.
//!
//! A [`Task`] owns some input parameters, reports whether they are complete,
//! describes them for display, and produces an answer on request. [`Task61`]
//! is the sampling exercise: sample size, distribution, and seed in; a NumPy
//! snippet out.

#[cfg(feature = "async")]
mod async_impl;
mod builder;

use core::fmt;

pub use self::builder::TaskBuilder;
use crate::answer::Answer;
use crate::distribution::Distribution;
use crate::form::{Field, FormState};
use crate::snippet::{self, Dialect, Numpy, SnippetOptions};
use crate::validation::FieldValidity;

/// Where a task is in its answer lifecycle.
///
/// `Unanswered -> AnswerRequested -> AnswerDisplayed`. Any edit sends the task
/// back to `Unanswered`; nothing else does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Parameters are being edited.
    #[default]
    Unanswered,
    /// The answer has been requested and is being generated.
    AnswerRequested,
    /// The answer is on screen.
    AnswerDisplayed,
}

/// One input field as the shell should draw it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldView {
    /// Which field this is.
    pub field: Field,
    /// Label shown before the input.
    pub label: &'static str,
    /// Current text of the field.
    pub value: String,
    /// Validity indicator shown after the input.
    pub valid: bool,
}

/// A question-and-answer exercise.
pub trait Task {
    /// Returns `true` when every parameter is valid and an answer may be requested.
    fn check_parameters(&self) -> bool;

    /// Describes the parameter inputs with their current values and validity.
    fn render_parameters(&self) -> Vec<FieldView>;

    /// Produces the answer for the current parameters.
    ///
    /// Returns `None` if a required parameter is missing.
    fn render_answer(&mut self) -> Option<Answer>;

    /// Produces the answer only if [`check_parameters`](Task::check_parameters) passes.
    fn request_answer(&mut self) -> Option<Answer> {
        if !self.check_parameters() {
            return None;
        }
        self.render_answer()
    }
}

type ChangeListener = Box<dyn FnMut(Field, &FormState) + Send>;

/// The sampling exercise.
///
/// # Examples
///
/// ```
/// use sampling_task::{Distribution, Phase, Task, Task61};
///
/// let mut task = Task61::new();
/// assert!(task.request_answer().is_none());
///
/// task.set_sample_size("10");
/// task.set_distribution(Some(Distribution::exponential(4.0).unwrap()));
/// task.set_seed("2024");
///
/// let answer = task.request_answer().unwrap();
/// assert!(answer.snippet.code().contains("np.random.exponential(1 / 4, 10)"));
/// assert_eq!(task.phase(), Phase::AnswerDisplayed);
///
/// task.set_seed("2025");
/// assert_eq!(task.phase(), Phase::Unanswered);
/// ```
pub struct Task61 {
    form: FormState,
    options: SnippetOptions,
    dialect: Box<dyn Dialect>,
    phase: Phase,
    revision: u64,
    on_change: Option<ChangeListener>,
}

impl fmt::Debug for Task61 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task61")
            .field("form", &self.form)
            .field("options", &self.options)
            .field("dialect", &self.dialect)
            .field("phase", &self.phase)
            .field("revision", &self.revision)
            .field("has_listener", &self.on_change.is_some())
            .finish()
    }
}

impl Default for Task61 {
    fn default() -> Self {
        Self::new()
    }
}

impl Task61 {
    /// Creates the exercise with an empty form, default options and the
    /// NumPy dialect.
    #[must_use]
    pub fn new() -> Self {
        Self {
            form: FormState::default(),
            options: SnippetOptions::default(),
            dialect: Box::new(Numpy),
            phase: Phase::Unanswered,
            revision: 0,
            on_change: None,
        }
    }

    /// Returns a builder for customizing options, dialect and change listener.
    #[must_use]
    pub fn builder() -> TaskBuilder {
        TaskBuilder::new()
    }

    /// Replaces the sample size text (trimmed).
    pub fn set_sample_size(&mut self, text: &str) {
        self.form.set_sample_size(text);
        self.changed(Field::SampleSize);
    }

    /// Replaces the distribution selection.
    pub fn set_distribution(&mut self, distribution: Option<Distribution>) {
        self.form.set_distribution(distribution);
        self.changed(Field::Distribution);
    }

    /// Replaces the seed text (trimmed).
    pub fn set_seed(&mut self, text: &str) {
        self.form.set_seed(text);
        self.changed(Field::Seed);
    }

    /// Registers a listener called after every field update, replacing any
    /// previous one. The shell uses it to schedule a redraw.
    pub fn set_on_change(&mut self, listener: impl FnMut(Field, &FormState) + Send + 'static) {
        self.on_change = Some(Box::new(listener));
    }

    /// Current form contents.
    #[must_use]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Snippet options in use.
    #[must_use]
    pub fn options(&self) -> &SnippetOptions {
        &self.options
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of field updates so far. Changes exactly when a redraw is due.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Per-field validity indicators for the current form.
    #[must_use]
    pub fn validity(&self) -> FieldValidity {
        FieldValidity::of(&self.form)
    }

    fn changed(&mut self, field: Field) {
        self.revision += 1;
        self.phase = Phase::Unanswered;
        trace_debug!(%field, revision = self.revision, "field updated");
        if let Some(listener) = self.on_change.as_mut() {
            listener(field, &self.form);
        }
    }
}

impl Task for Task61 {
    fn check_parameters(&self) -> bool {
        self.validity().all()
    }

    fn render_parameters(&self) -> Vec<FieldView> {
        let validity = self.validity();
        Field::ALL
            .into_iter()
            .map(|field| FieldView {
                field,
                label: match field {
                    Field::SampleSize => "Sample size (n =)",
                    Field::Distribution => "Distribution",
                    Field::Seed => "random seed =",
                },
                value: self.form.text(field),
                valid: validity.get(field),
            })
            .collect()
    }

    fn render_answer(&mut self) -> Option<Answer> {
        self.phase = Phase::AnswerRequested;
        let Some(snippet) = snippet::generate_with(self.dialect.as_ref(), &self.form, &self.options)
        else {
            trace_debug!("answer requested with missing fields");
            self.phase = Phase::Unanswered;
            return None;
        };

        trace_info!(
            sample_size = self.form.sample_size(),
            seed = self.form.seed(),
            distribution = %self.form.text(Field::Distribution),
            "answer generated"
        );
        self.phase = Phase::AnswerDisplayed;
        Some(Answer::new(
            self.dialect.interpreter(),
            &self.options.interpreter_hint,
            snippet,
        ))
    }
}

#[cfg(test)]
mod tests {
    use core::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[test]
    fn listener_sees_every_update() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);

        let mut task = Task61::new();
        task.set_on_change(move |_, _| {
            seen.fetch_add(1, Ordering::Relaxed);
        });

        task.set_sample_size("1");
        task.set_distribution(None);
        task.set_seed("2");

        assert_eq!(calls.load(Ordering::Relaxed), 3);
        assert_eq!(task.revision(), 3);
    }

    #[test]
    fn missing_field_returns_to_unanswered() {
        let mut task = Task61::new();
        task.set_sample_size("5");
        assert!(task.render_answer().is_none());
        assert_eq!(task.phase(), Phase::Unanswered);
    }

    #[test]
    fn debug_hides_listener() {
        let mut task = Task61::new();
        task.set_on_change(|_, _| {});
        let text = format!("{task:?}");
        assert!(text.contains("has_listener: true"));
    }
}
