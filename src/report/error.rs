use thiserror::Error;

/// Failures surfaced by the report renderer.
#[derive(Error, Debug)]
pub enum ReportError {
    /// `longest_of` was handed nothing to compare.
    #[error("cannot pick the longest string of an empty collection")]
    EmptyCollection,

    /// A required element was absent.
    #[error("element at index {index} is null")]
    NullElement { index: usize },

    /// A plus sign was requested outside of the dash run.
    #[error("border index {index} is outside a line of length {len}")]
    BorderIndexOutOfRange { index: usize, len: usize },

    /// Writing the finished table failed.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
