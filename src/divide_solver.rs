use hashbrown::HashMap;

use crate::context::Context;
use crate::cost::line_cost;
use crate::solution::{Breaks, Cuts};

/// Memoization key for `solve_range`: the half-open word range `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Key {
    start: usize,
    end: usize,
}

/// Top-down divide and conquer with memoization.
///
/// The memo lives only for this call.
pub(crate) fn solve(ctx: &Context<'_>) -> Breaks {
    let mut memo = HashMap::new();
    solve_range(0, ctx.len(), ctx, &mut memo)
}

/// Best layout of `words[start..end]`, split into a first line and the rest.
///
/// Whether a line is the paragraph's last is decided by its absolute end
/// index, so a subrange ending before `k` never gets the last-line discount.
pub(crate) fn solve_range(
    start: usize,
    end: usize,
    ctx: &Context<'_>,
    memo: &mut HashMap<Key, Breaks>,
) -> Breaks {
    if start >= end {
        return Breaks::empty();
    }

    let key = Key { start, end };
    if let Some(hit) = memo.get(&key) {
        return hit.clone();
    }

    let mut best = Breaks::unsolvable();
    for split in start + 1..=end {
        let line = line_cost(ctx, start, split - 1);
        if !line.is_feasible() {
            continue;
        }
        let rest = solve_range(split, end, ctx, memo);
        let total = line + rest.cost;
        if total < best.cost {
            let mut cuts = Cuts::with_capacity(rest.cuts.len() + 1);
            if !ctx.is_last_word(split - 1) {
                cuts.push(split - 1);
            }
            cuts.extend_from_slice(&rest.cuts);
            best = Breaks { cost: total, cuts };
        }
    }

    memo.insert(key, best.clone());
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::LayoutParams;
    use crate::dp_solver;

    #[test]
    fn matches_dynamic_programming() {
        let words = [3, 4, 2, 5, 3, 4, 6, 2, 3, 5];
        let ctx = Context::new(&words, LayoutParams::new(20.0, 2.0));
        let dc = solve(&ctx);
        let dp = dp_solver::solve(&ctx);
        let diff = (dc.cost.value().expect("feasible") - dp.cost.value().expect("feasible")).abs();
        assert!(diff < 1e-9);
    }

    #[test]
    fn memo_holds_every_visited_suffix() {
        let words = [2, 2, 2, 2];
        let ctx = Context::new(&words, LayoutParams::new(100.0, 1.0));
        let mut memo = HashMap::new();
        solve_range(0, words.len(), &ctx, &mut memo);
        // Every suffix start 0..4 with the fixed end 4.
        assert_eq!(memo.len(), 4);
        assert!(memo.contains_key(&Key { start: 3, end: 4 }));
    }

    #[test]
    fn interior_subrange_is_not_treated_as_last() {
        // Alone, [5] would be a free-ish last line; as the head of [5, 3]
        // it is an interior line and pays for its wasted space.
        let words = [5, 3];
        let ctx = Context::new(&words, LayoutParams::new(15.0, 1.5));
        let mut memo = HashMap::new();
        let head = solve_range(0, 1, &ctx, &mut memo);
        let expected = (10.0f64 / 15.0).powi(2);
        assert!((head.cost.value().expect("feasible") - expected).abs() < 1e-12);
        assert_eq!(head.cuts.as_slice(), &[0]);
    }

    #[test]
    fn unsolvable_range() {
        let words = [4, 40];
        let ctx = Context::new(&words, LayoutParams::new(15.0, 1.5));
        assert!(solve(&ctx).is_unsolvable());
    }
}
