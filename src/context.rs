use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};

/// Width constraint and spacing target for one solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutParams {
    /// Maximum line width `L`, in the same unit as word lengths.
    pub width: f64,
    /// Ideal width `b` of a single inter-word gap.
    pub ideal_gap: f64,
}

impl LayoutParams {
    pub const fn new(width: f64, ideal_gap: f64) -> Self {
        LayoutParams { width, ideal_gap }
    }

    pub fn validate(&self) -> LayoutResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(LayoutError::InvalidWidth { width: self.width });
        }
        if !self.ideal_gap.is_finite() || self.ideal_gap < 0.0 {
            return Err(LayoutError::InvalidIdealGap {
                ideal_gap: self.ideal_gap,
            });
        }
        Ok(())
    }
}

/// Reject zero-length words; lengths are unsigned so nothing else can go wrong.
pub fn validate_words(words: &[u32]) -> LayoutResult<()> {
    match words.iter().position(|&w| w == 0) {
        Some(index) => Err(LayoutError::InvalidWordLength { index, length: 0 }),
        None => Ok(()),
    }
}

/// Read-only view of one solve: the words, the parameters and precomputed prefix sums.
pub struct Context<'a> {
    pub words: &'a [u32],
    pub params: LayoutParams,
    /// `prefix[i]` is the total length of `words[..i]`.
    prefix: Vec<u64>,
}

impl<'a> Context<'a> {
    pub fn new(words: &'a [u32], params: LayoutParams) -> Self {
        let mut prefix = Vec::with_capacity(words.len() + 1);
        let mut total = 0u64;
        prefix.push(total);
        for &w in words {
            total += u64::from(w);
            prefix.push(total);
        }
        Context {
            words,
            params,
            prefix,
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Total length of `words[start..=end]`.
    pub fn span_length(&self, start: usize, end: usize) -> u64 {
        self.prefix[end + 1] - self.prefix[start]
    }

    /// Whether `end` is the final word of the whole paragraph.
    pub fn is_last_word(&self, end: usize) -> bool {
        end + 1 == self.words.len()
    }
}

/// Length of each word in `text_words`, counted in `char`s.
pub fn word_lengths(text_words: &[&str]) -> Vec<u32> {
    text_words
        .iter()
        .map(|w| w.chars().count() as u32)
        .collect()
}
