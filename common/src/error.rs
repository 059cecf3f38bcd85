use thiserror::Error;

/// Failures while turning the operator's menu input into a camera pick.
/// Bad input aborts the run with one of these; there is no re-prompt.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("selection must be a number, got '{input}'")]
    NotANumber { input: String },

    #[error("selection {index} is out of range, pick a number between 1 and {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("there are no cameras to select from")]
    Empty,
}
