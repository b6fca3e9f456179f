use thiserror::Error;

pub(crate) type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Task(#[from] sampling_task::Error),

    #[error("input ended before the form was complete")]
    UnexpectedEof,
}

impl CliError {
    #[must_use]
    pub(crate) fn exit_code(&self) -> i32 {
        match self {
            Self::Task(_) => 2,
            _ => 1,
        }
    }
}
