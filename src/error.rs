use thiserror::Error;

use crate::api::Algorithm;

/// Every way a paragraph-breaking request can fail.
///
/// A single line that does not fit is not an error: that is
/// [`LineCost::Infeasible`](crate::cost::LineCost::Infeasible). Only a
/// paragraph with no feasible layout at all surfaces here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Line width must be a finite, strictly positive number.
    #[error("invalid line width: expected a finite value > 0, got {width}")]
    InvalidWidth { width: f64 },

    /// Ideal gap must be a finite, non-negative number.
    #[error("invalid ideal gap: expected a finite value >= 0, got {ideal_gap}")]
    InvalidIdealGap { ideal_gap: f64 },

    /// Word lengths must be strictly positive.
    #[error("invalid word length {length} at index {index}: lengths must be > 0")]
    InvalidWordLength { index: usize, length: u32 },

    /// No layout exists because this word alone is wider than a line.
    #[error("word {index} has length {length}, which does not fit in a line of width {width}")]
    WordTooLong { index: usize, length: u32, width: f64 },

    /// A line range outside the word sequence was requested.
    #[error("line range {start}..={end} is out of bounds for {words} word(s)")]
    InvalidRange { start: usize, end: usize, words: usize },

    /// Cut points are not strictly increasing or do not fall before the last word.
    #[error("invalid cut points {cuts:?} for {words} word(s)")]
    InvalidCuts { cuts: Vec<usize>, words: usize },

    /// The input is larger than the solver is allowed to handle.
    #[error("{algorithm} refuses {words} words (limit {limit})")]
    TooManyWords {
        algorithm: Algorithm,
        words: usize,
        limit: usize,
    },

    /// Bench configuration could not be parsed or is inconsistent.
    #[error("config error: {0}")]
    Config(String),
}

pub type LayoutResult<T> = Result<T, LayoutError>;
