//! These tests are only compiled when the `async` feature is enabled.

#![cfg(feature = "async")]

use sampling_task::{Distribution, Phase, Task61};

#[tokio::test]
async fn render_answer_async_matches_sync() {
    let mut task = Task61::new();
    task.set_sample_size("10");
    task.set_distribution(Some(Distribution::exponential(4.0).unwrap()));
    task.set_seed("5");

    let answer = task.render_answer_async().await.unwrap();
    assert_eq!(task.phase(), Phase::AnswerDisplayed);
    assert!(answer.snippet.code().contains("np.random.exponential(1 / 4, 10)"));
}

#[tokio::test]
async fn render_answer_async_with_missing_field() {
    let mut task = Task61::new();
    task.set_sample_size("10");
    assert!(task.render_answer_async().await.is_none());
    assert_eq!(task.phase(), Phase::Unanswered);
}
