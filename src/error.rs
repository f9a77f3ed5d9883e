use thiserror::Error;

/// Why [crate::Canvas::prompt] could not produce an answer.
///
/// Only input problems show up here; output problems while drawing the prompt are
/// logged and otherwise ignored.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The input reached end-of-file before anything was typed.
    #[error("input stream closed")]
    Closed,

    /// The input ended in the middle of a line.
    #[error("input stream closed before end of line (read {partial:?})")]
    Truncated { partial: String },

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
