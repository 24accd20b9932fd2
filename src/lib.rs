//! Optimal paragraph breaking.
//!
//! Given word lengths, a line width `L` and an ideal gap width `b`, split the
//! words into lines minimizing the total line cost (see [`cost::line_cost`]).
//! Four solvers share the same cost model and agree on the optimum:
//! bottom-up dynamic programming, memoized divide and conquer, plain
//! recursion and brute-force enumeration of compositions.

pub mod api;
pub mod bench;
pub mod brute_force_solver;
pub mod context;
pub mod cost;
pub mod error;
pub mod format;
pub mod solution;

mod divide_solver;
mod dp_solver;
mod recursive_solver;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use api::{
    cost, solve, solve_brute_force, solve_divide_and_conquer, solve_dp, solve_recursive,
    Algorithm,
};
pub use context::{word_lengths, LayoutParams};
pub use cost::LineCost;
pub use error::{LayoutError, LayoutResult};
pub use format::{describe_lines, format_layout, format_text, LineSummary};
pub use solution::{cuts_are_valid, Solution};

#[cfg(target_arch = "wasm32")]
pub use wasm::{algorithm_names, solve_paragraph};
