use smallvec::SmallVec;

use crate::context::Context;
use crate::cost::{line_cost, LineCost};
use crate::solution::{Breaks, Cuts};

/// Largest paragraph the enumerator can represent: one bit per gap in a `u64`.
pub const MAX_WORDS: usize = 64;

/// Every composition of `n` into positive parts, in the order of the
/// bitmask that encodes it (bit `g` set = a line ends after word `g`).
/// Each item is the list of part sizes.
pub(crate) struct Compositions {
    n: usize,
    next: u64,
    end: u64,
}

impl Iterator for Compositions {
    type Item = SmallVec<[usize; 8]>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let mask = self.next;
        self.next += 1;

        let mut parts = SmallVec::new();
        let mut size = 1;
        for gap in 0..self.n - 1 {
            if mask & (1u64 << gap) != 0 {
                parts.push(size);
                size = 1;
            } else {
                size += 1;
            }
        }
        parts.push(size);
        Some(parts)
    }
}

/// Compositions of `n`; there are `2^(n-1)` of them for `n >= 1` and none for `n = 0`.
pub(crate) fn compositions(n: usize) -> Compositions {
    assert!(n <= MAX_WORDS, "compositions support up to {MAX_WORDS} parts");
    let end = if n == 0 { 0 } else { 1u64 << (n - 1) };
    Compositions { n, next: 0, end }
}

/// Score every composition of the paragraph and keep the cheapest.
pub(crate) fn solve(ctx: &Context<'_>) -> Breaks {
    let k = ctx.len();
    if k == 0 {
        return Breaks::empty();
    }

    let mut best_cost = LineCost::Infeasible;
    let mut best_parts: Option<SmallVec<[usize; 8]>> = None;

    for parts in compositions(k) {
        let mut total = LineCost::ZERO;
        let mut pos = 0;
        for &size in &parts {
            total = total + line_cost(ctx, pos, pos + size - 1);
            if !total.is_feasible() {
                break;
            }
            pos += size;
        }
        if total < best_cost {
            best_cost = total;
            best_parts = Some(parts);
        }
    }

    let Some(parts) = best_parts else {
        return Breaks::unsolvable();
    };

    let mut cuts = Cuts::new();
    let mut acc = 0;
    for size in parts {
        acc += size;
        if acc < k {
            cuts.push(acc - 1);
        }
    }
    Breaks {
        cost: best_cost,
        cuts,
    }
}
