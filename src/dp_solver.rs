use crate::context::Context;
use crate::cost::{line_cost, LineCost};
use crate::solution::{Breaks, Cuts};

/// Bottom-up dynamic programming over prefixes.
///
/// `best[i]` is the cheapest layout of `words[..i]` and `best_from[i]` the
/// start of its final line. O(k^2) time, O(k) space.
pub(crate) fn solve(ctx: &Context<'_>) -> Breaks {
    let k = ctx.len();
    if k == 0 {
        return Breaks::empty();
    }

    let mut best = vec![LineCost::Infeasible; k + 1];
    let mut best_from = vec![usize::MAX; k + 1];
    best[0] = LineCost::ZERO;

    for i in 1..=k {
        for j in 0..i {
            let line = line_cost(ctx, j, i - 1);
            if !line.is_feasible() {
                continue;
            }
            let total = best[j] + line;
            if total < best[i] {
                best[i] = total;
                best_from[i] = j;
            }
        }
    }

    if !best[k].is_feasible() {
        return Breaks::unsolvable();
    }

    let mut cuts = Cuts::new();
    let mut i = k;
    while i > 0 {
        let start = best_from[i];
        if start > 0 {
            cuts.push(start - 1);
        }
        i = start;
    }
    cuts.reverse();
    cuts.dedup();
    cuts.retain(|c| *c + 1 < k);

    Breaks {
        cost: best[k],
        cuts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::LayoutParams;

    #[test]
    fn three_words_fit_on_one_line() {
        let words = [5, 3, 4];
        let ctx = Context::new(&words, LayoutParams::new(15.0, 1.5));
        let result = solve(&ctx);
        assert!(result.cuts.is_empty());
        let cost = result.cost.value().expect("feasible");
        assert!((cost - (1.0f64 / 15.0).powi(2)).abs() < 1e-9);
    }

    #[test]
    fn one_word_per_line_when_nothing_pairs() {
        let words = [10, 10, 10];
        let ctx = Context::new(&words, LayoutParams::new(15.0, 1.0));
        let result = solve(&ctx);
        assert_eq!(result.cuts.as_slice(), &[0, 1]);
    }

    #[test]
    fn oversized_word_is_unsolvable() {
        let words = [3, 20, 3];
        let ctx = Context::new(&words, LayoutParams::new(15.0, 1.0));
        assert!(solve(&ctx).is_unsolvable());
    }

    #[test]
    fn empty_paragraph() {
        let ctx = Context::new(&[], LayoutParams::new(15.0, 1.0));
        assert_eq!(solve(&ctx), Breaks::empty());
    }
}
