use serde::Serialize;
use smallvec::SmallVec;

use crate::cost::LineCost;

/// Cut points as produced during a search. Most paragraphs break into few lines.
pub type Cuts = SmallVec<[usize; 8]>;

/// Result of searching a word range: the best cost found and where its lines end.
///
/// A cut `i` means a line ends right after word `i`. The last word of the
/// paragraph is never a cut.
#[derive(Debug, Clone, PartialEq)]
pub struct Breaks {
    pub cost: LineCost,
    pub cuts: Cuts,
}

impl Breaks {
    /// The layout of nothing: free, no cuts.
    pub fn empty() -> Self {
        Breaks {
            cost: LineCost::ZERO,
            cuts: Cuts::new(),
        }
    }

    /// No feasible layout exists.
    pub fn unsolvable() -> Self {
        Breaks {
            cost: LineCost::Infeasible,
            cuts: Cuts::new(),
        }
    }

    pub const fn is_unsolvable(&self) -> bool {
        !self.cost.is_feasible()
    }
}

/// An optimal, feasible layout of a whole paragraph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    pub cost: f64,
    pub cuts: Vec<usize>,
}

impl Solution {
    /// Line ranges `(start, end)`, both inclusive, for a paragraph of `word_count` words.
    pub fn lines(&self, word_count: usize) -> Vec<(usize, usize)> {
        lines(&self.cuts, word_count)
    }
}

/// Turn cut points into inclusive `(start, end)` line ranges.
pub fn lines(cuts: &[usize], word_count: usize) -> Vec<(usize, usize)> {
    if word_count == 0 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(cuts.len() + 1);
    let mut start = 0;
    for &cut in cuts {
        out.push((start, cut));
        start = cut + 1;
    }
    out.push((start, word_count - 1));
    out
}

/// Cuts must be strictly increasing and all below `word_count - 1`.
pub fn cuts_are_valid(cuts: &[usize], word_count: usize) -> bool {
    let increasing = cuts.windows(2).all(|w| w[0] < w[1]);
    let in_range = cuts.iter().all(|&c| c + 1 < word_count);
    increasing && in_range
}
