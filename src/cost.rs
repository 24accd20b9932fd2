use std::cmp::Ordering;
use std::iter::Sum;
use std::ops::Add;

use crate::context::Context;

/// Cost of a line or of a whole layout.
///
/// `Infeasible` sorts above every finite cost and absorbs addition, so a
/// layout containing a line that does not fit can never win a comparison.
#[derive(Debug, Clone, Copy)]
pub enum LineCost {
    Finite(f64),
    Infeasible,
}

impl LineCost {
    pub const ZERO: LineCost = LineCost::Finite(0.0);

    pub const fn is_feasible(&self) -> bool {
        matches!(self, LineCost::Finite(_))
    }

    pub const fn value(&self) -> Option<f64> {
        match *self {
            LineCost::Finite(v) => Some(v),
            LineCost::Infeasible => None,
        }
    }
}

impl Ord for LineCost {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (LineCost::Finite(a), LineCost::Finite(b)) => a.total_cmp(b),
            (LineCost::Finite(_), LineCost::Infeasible) => Ordering::Less,
            (LineCost::Infeasible, LineCost::Finite(_)) => Ordering::Greater,
            (LineCost::Infeasible, LineCost::Infeasible) => Ordering::Equal,
        }
    }
}

impl PartialOrd for LineCost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for LineCost {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for LineCost {}

impl Add for LineCost {
    type Output = LineCost;

    fn add(self, rhs: LineCost) -> LineCost {
        match (self, rhs) {
            (LineCost::Finite(a), LineCost::Finite(b)) => LineCost::Finite(a + b),
            _ => LineCost::Infeasible,
        }
    }
}

impl Sum for LineCost {
    fn sum<I: Iterator<Item = LineCost>>(iter: I) -> LineCost {
        iter.fold(LineCost::ZERO, Add::add)
    }
}

/// Cost of putting `words[start..=end]` on a single line.
///
/// Every gap takes at least one unit of width. The final line of the
/// paragraph only pays for its trailing slack; any other line also pays
/// `gaps * (actual_gap - ideal_gap)^2` for stretching its gaps.
pub fn line_cost(ctx: &Context<'_>, start: usize, end: usize) -> LineCost {
    let width = ctx.params.width;
    let sum_len = ctx.span_length(start, end) as f64;
    let gaps = (end - start) as f64;
    let needed = sum_len + gaps;
    if needed > width {
        return LineCost::Infeasible;
    }

    let slack = width - needed;
    if ctx.is_last_word(end) || end == start {
        // A lone word has no gaps, so `slack` is already `width - sum_len`.
        return LineCost::Finite((slack / width).powi(2));
    }

    let actual_gap = 1.0 + slack / gaps;
    let stretch = gaps * (actual_gap - ctx.params.ideal_gap).powi(2);
    LineCost::Finite(stretch + (slack / width).powi(2))
}
