use crate::error::Result;
use crate::form::{Field, FormState};
use crate::snippet::{Dialect, Numpy, SnippetOptions};

use super::{ChangeListener, Phase, Task61};

/// A builder for constructing [`Task61`] instances with a fluent API.
///
/// Created via [`Task61::builder()`].
///
/// # Defaults
///
/// - Options: [`SnippetOptions::default()`]
/// - Dialect: [`Numpy`]
/// - Change listener: none
///
/// # Examples
///
/// ```
/// use sampling_task::{SnippetOptions, Task61};
///
/// let task = Task61::builder()
///     .options(SnippetOptions::builder().decimals(3).build().unwrap())
///     .on_change(|field, _form| println!("{field} changed"))
///     .build()
///     .unwrap();
///
/// assert_eq!(task.options().decimals, 3);
/// ```
pub struct TaskBuilder {
    options: SnippetOptions,
    dialect: Option<Box<dyn Dialect>>,
    on_change: Option<ChangeListener>,
}

impl TaskBuilder {
    pub(super) fn new() -> Self {
        Self {
            options: SnippetOptions::default(),
            dialect: None,
            on_change: None,
        }
    }

    /// Set the snippet options.
    #[must_use]
    pub fn options(mut self, options: SnippetOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the target dialect of generated snippets.
    #[must_use]
    pub fn dialect(mut self, dialect: impl Dialect + 'static) -> Self {
        self.dialect = Some(Box::new(dialect));
        self
    }

    /// Set the listener called after every field update.
    #[must_use]
    pub fn on_change(mut self, listener: impl FnMut(Field, &FormState) + Send + 'static) -> Self {
        self.on_change = Some(Box::new(listener));
        self
    }

    /// Build the task.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`](crate::Error::InvalidOptions) if the
    /// options fail validation.
    pub fn build(self) -> Result<Task61> {
        self.options.validate()?;
        Ok(Task61 {
            form: FormState::default(),
            options: self.options,
            dialect: self.dialect.unwrap_or_else(|| Box::new(Numpy)),
            phase: Phase::Unanswered,
            revision: 0,
            on_change: self.on_change,
        })
    }
}
