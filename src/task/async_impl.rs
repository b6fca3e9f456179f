use crate::answer::Answer;

use super::{Task, Task61};

impl Task61 {
    /// Async form of [`render_answer`](Task::render_answer) for shells that
    /// await their answers.
    ///
    /// Generation does no I/O and never blocks, so the future is ready on its
    /// first poll. It borrows the task mutably for its whole lifetime, which
    /// keeps edits from interleaving with generation.
    ///
    /// # Examples
    ///
    /// ```
    /// use sampling_task::{Distribution, Task61};
    ///
    /// # #[cfg(feature = "async")]
    /// # async fn example() {
    /// let mut task = Task61::new();
    /// task.set_sample_size("5");
    /// task.set_distribution(Some(Distribution::poisson(2.0).unwrap()));
    /// task.set_seed("1");
    ///
    /// let answer = task.render_answer_async().await.unwrap();
    /// assert!(answer.snippet.code().contains("np.random.poisson(2, 5)"));
    /// # }
    /// ```
    pub async fn render_answer_async(&mut self) -> Option<Answer> {
        self.render_answer()
    }
}
