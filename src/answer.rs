use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::snippet::Snippet;

/// What the exercise shows once the learner asks for the answer: how to run
/// the snippet, the snippet itself, and what to do with its output.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Answer {
    /// Sentence introducing the code.
    pub instructions: String,
    /// The generated program.
    pub snippet: Snippet,
    /// Sentence following the code.
    pub closing: String,
}

impl Answer {
    pub(crate) fn new(interpreter: &str, hint: &str, snippet: Snippet) -> Self {
        let instructions = if hint.is_empty() {
            format!("Run the following code in a {interpreter} interpreter:")
        } else {
            format!("Run the following code in a {interpreter} interpreter (for example, at {hint}):")
        };
        Self {
            instructions,
            snippet,
            closing: "Then copy the printed lines into the answer fields.".to_string(),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.instructions)?;
        writeln!(f)?;
        write!(f, "{}", self.snippet)?;
        writeln!(f)?;
        write!(f, "{}", self.closing)
    }
}
