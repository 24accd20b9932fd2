use crate::context::Context;
use crate::cost::line_cost;
use crate::solution::{Breaks, Cuts};

/// Exhaustive recursion over where the next line ends, with no caching.
///
/// Revisits the same suffix once per path that reaches it, so the running
/// time grows exponentially. Only lines that do not fit are pruned.
pub(crate) fn solve(ctx: &Context<'_>) -> Breaks {
    solve_from(0, ctx)
}

fn solve_from(pos: usize, ctx: &Context<'_>) -> Breaks {
    if pos == ctx.len() {
        return Breaks::empty();
    }

    let mut best = Breaks::unsolvable();
    for next in pos + 1..=ctx.len() {
        let line = line_cost(ctx, pos, next - 1);
        if !line.is_feasible() {
            continue;
        }
        let rest = solve_from(next, ctx);
        let total = line + rest.cost;
        if total < best.cost {
            let mut cuts = Cuts::new();
            if next < ctx.len() {
                cuts.push(next - 1);
            }
            cuts.extend_from_slice(&rest.cuts);
            best = Breaks { cost: total, cuts };
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::LayoutParams;
    use crate::dp_solver;

    #[test]
    fn agrees_with_dp_on_small_input() {
        let words = [3, 4, 2];
        let ctx = Context::new(&words, LayoutParams::new(15.0, 1.5));
        let rec = solve(&ctx).cost.value().expect("feasible");
        let dp = dp_solver::solve(&ctx).cost.value().expect("feasible");
        assert!((rec - dp).abs() < 1e-9);
    }

    #[test]
    fn pairs_the_last_two_words() {
        // [5] [5 5] beats both [5 5] [5] and one word per line
        let words = [5, 5, 5];
        let ctx = Context::new(&words, LayoutParams::new(12.0, 1.0));
        let result = solve(&ctx);
        assert_eq!(result.cuts.as_slice(), &[0]);
    }
}
