use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::brute_force_solver;
use crate::context::{validate_words, Context, LayoutParams};
use crate::cost::{line_cost, LineCost};
use crate::divide_solver;
use crate::dp_solver;
use crate::error::{LayoutError, LayoutResult};
use crate::recursive_solver;
use crate::solution::{Breaks, Solution};

/// The four interchangeable solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    DynamicProgramming,
    DivideAndConquer,
    Recursive,
    BruteForce,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::DynamicProgramming,
        Algorithm::DivideAndConquer,
        Algorithm::Recursive,
        Algorithm::BruteForce,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Algorithm::DynamicProgramming => "dynamic programming",
            Algorithm::DivideAndConquer => "divide and conquer",
            Algorithm::Recursive => "pure recursion",
            Algorithm::BruteForce => "brute force",
        }
    }

    /// Time complexity in the number of words `n`.
    pub const fn complexity(&self) -> &'static str {
        match self {
            Algorithm::DynamicProgramming => "O(n^2)",
            Algorithm::DivideAndConquer => "O(n^2)",
            Algorithm::Recursive => "O(2^n)",
            Algorithm::BruteForce => "O(n * 2^n)",
        }
    }

    /// Whether the running time is exponential in the word count.
    pub const fn is_exponential(&self) -> bool {
        matches!(self, Algorithm::Recursive | Algorithm::BruteForce)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "dp" | "dynamic_programming" | "iterative" => Ok(Algorithm::DynamicProgramming),
            "dc" | "divide_and_conquer" => Ok(Algorithm::DivideAndConquer),
            "recursive" | "pure_recursion" => Ok(Algorithm::Recursive),
            "brute_force" | "exhaustive" => Ok(Algorithm::BruteForce),
            other => Err(format!("unknown algorithm '{other}'")),
        }
    }
}

/// Cost of a single line holding `words[start..=end]`.
pub fn cost(words: &[u32], params: &LayoutParams, start: usize, end: usize) -> LayoutResult<LineCost> {
    params.validate()?;
    validate_words(words)?;
    if start > end || end >= words.len() {
        return Err(LayoutError::InvalidRange {
            start,
            end,
            words: words.len(),
        });
    }
    let ctx = Context::new(words, *params);
    Ok(line_cost(&ctx, start, end))
}

/// Solve with the given algorithm.
pub fn solve(algorithm: Algorithm, words: &[u32], params: &LayoutParams) -> LayoutResult<Solution> {
    params.validate()?;
    validate_words(words)?;
    if algorithm == Algorithm::BruteForce && words.len() > brute_force_solver::MAX_WORDS {
        return Err(LayoutError::TooManyWords {
            algorithm,
            words: words.len(),
            limit: brute_force_solver::MAX_WORDS,
        });
    }

    let ctx = Context::new(words, *params);
    let breaks = match algorithm {
        Algorithm::DynamicProgramming => dp_solver::solve(&ctx),
        Algorithm::DivideAndConquer => divide_solver::solve(&ctx),
        Algorithm::Recursive => recursive_solver::solve(&ctx),
        Algorithm::BruteForce => brute_force_solver::solve(&ctx),
    };
    let solution = finish(breaks, &ctx)?;
    debug!(
        %algorithm,
        words = words.len(),
        cost = solution.cost,
        lines = solution.cuts.len() + usize::from(!words.is_empty()),
        "paragraph solved"
    );
    Ok(solution)
}

/// Bottom-up dynamic programming. The production solver.
pub fn solve_dp(words: &[u32], params: &LayoutParams) -> LayoutResult<Solution> {
    solve(Algorithm::DynamicProgramming, words, params)
}

/// Memoized divide and conquer over word ranges.
pub fn solve_divide_and_conquer(words: &[u32], params: &LayoutParams) -> LayoutResult<Solution> {
    solve(Algorithm::DivideAndConquer, words, params)
}

/// Unmemoized recursion. Exponential; meant for small paragraphs.
pub fn solve_recursive(words: &[u32], params: &LayoutParams) -> LayoutResult<Solution> {
    solve(Algorithm::Recursive, words, params)
}

/// Enumerates every composition of the paragraph. Exponential; meant for small paragraphs.
pub fn solve_brute_force(words: &[u32], params: &LayoutParams) -> LayoutResult<Solution> {
    solve(Algorithm::BruteForce, words, params)
}

fn finish(breaks: Breaks, ctx: &Context<'_>) -> LayoutResult<Solution> {
    match breaks.cost {
        LineCost::Finite(cost) => Ok(Solution {
            cost,
            cuts: breaks.cuts.into_vec(),
        }),
        LineCost::Infeasible => Err(unbreakable(ctx)),
    }
}

/// A paragraph has no layout only when some word is wider than a line on its own.
fn unbreakable(ctx: &Context<'_>) -> LayoutError {
    let width = ctx.params.width;
    let (index, length) = ctx
        .words
        .iter()
        .copied()
        .enumerate()
        .find(|&(_, w)| f64::from(w) > width)
        .unwrap_or((0, ctx.words.first().copied().unwrap_or(0)));
    LayoutError::WordTooLong {
        index,
        length,
        width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!("DP".parse::<Algorithm>(), Ok(Algorithm::DynamicProgramming));
        assert_eq!("exhaustive".parse::<Algorithm>(), Ok(Algorithm::BruteForce));
        assert!("simulated annealing".parse::<Algorithm>().is_err());
    }

    #[test]
    fn cost_checks_its_range() {
        let params = LayoutParams::new(15.0, 1.5);
        assert!(cost(&[5, 3, 4], &params, 0, 2).is_ok());
        assert_eq!(
            cost(&[5, 3, 4], &params, 1, 3),
            Err(LayoutError::InvalidRange {
                start: 1,
                end: 3,
                words: 3
            })
        );
        assert!(cost(&[5, 3, 4], &params, 2, 1).is_err());
    }

    #[test]
    fn invalid_params_are_rejected_before_solving() {
        assert_eq!(
            solve_dp(&[1, 2], &LayoutParams::new(-1.0, 1.0)),
            Err(LayoutError::InvalidWidth { width: -1.0 })
        );
        assert!(solve_dp(&[], &LayoutParams::new(10.0, -1.0)).is_err());
        assert_eq!(
            solve_recursive(&[3, 0], &LayoutParams::new(10.0, 1.0)),
            Err(LayoutError::InvalidWordLength { index: 1, length: 0 })
        );
    }

    #[test]
    fn unbreakable_names_the_offending_word() {
        let err = solve_divide_and_conquer(&[3, 4, 18, 2], &LayoutParams::new(15.0, 1.0))
            .unwrap_err();
        assert_eq!(
            err,
            LayoutError::WordTooLong {
                index: 2,
                length: 18,
                width: 15.0
            }
        );
    }

    #[test]
    fn brute_force_guard() {
        let words = vec![1u32; brute_force_solver::MAX_WORDS + 1];
        assert!(matches!(
            solve_brute_force(&words, &LayoutParams::new(10.0, 1.0)),
            Err(LayoutError::TooManyWords { .. })
        ));
    }
}
