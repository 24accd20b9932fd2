use serde::Serialize;

use crate::context::{validate_words, Context, LayoutParams};
use crate::cost::{line_cost, LineCost};
use crate::error::{LayoutError, LayoutResult};
use crate::solution::{cuts_are_valid, lines, Solution};

/// One line of a finished layout, with the numbers needed to explain its cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSummary {
    /// 0-based line number.
    pub index: usize,
    /// First and last word on the line, inclusive.
    pub start: usize,
    pub end: usize,
    pub lengths: Vec<u32>,
    /// Word lengths plus one unit per gap.
    pub used_width: u64,
    /// Width each gap gets once the line is stretched to `L`.
    /// `None` for a lone word and for the last line, which is never stretched.
    pub gap_width: Option<f64>,
    /// `None` if the line does not fit.
    pub cost: Option<f64>,
    pub is_last: bool,
}

fn check_cuts(cuts: &[usize], words: usize) -> LayoutResult<()> {
    if cuts_are_valid(cuts, words) {
        Ok(())
    } else {
        Err(LayoutError::InvalidCuts {
            cuts: cuts.to_vec(),
            words,
        })
    }
}

fn check_layout(words: &[u32], cuts: &[usize], params: &LayoutParams) -> LayoutResult<()> {
    params.validate()?;
    validate_words(words)?;
    check_cuts(cuts, words.len())
}

/// Break a layout down line by line.
pub fn describe_lines(
    words: &[u32],
    cuts: &[usize],
    params: &LayoutParams,
) -> LayoutResult<Vec<LineSummary>> {
    check_layout(words, cuts, params)?;
    let ctx = Context::new(words, *params);
    Ok(lines(cuts, words.len())
        .into_iter()
        .enumerate()
        .map(|(index, (start, end))| {
            let gaps = end - start;
            let sum_len = ctx.span_length(start, end);
            let is_last = ctx.is_last_word(end);
            let gap_width = if gaps == 0 || is_last {
                None
            } else {
                Some((params.width - sum_len as f64) / gaps as f64)
            };
            LineSummary {
                index,
                start,
                end,
                lengths: words[start..=end].to_vec(),
                used_width: sum_len + gaps as u64,
                gap_width,
                cost: line_cost(&ctx, start, end).value(),
                is_last,
            }
        })
        .collect())
}

/// Tabular description of a layout given only word lengths.
pub fn format_layout(
    words: &[u32],
    solution: &Solution,
    params: &LayoutParams,
) -> LayoutResult<String> {
    fn format_cost(cost: Option<f64>) -> String {
        match cost {
            Some(c) => format!("{c:.4}"),
            None => "infeasible".to_string(),
        }
    }

    let summary = describe_lines(words, &solution.cuts, params)?;
    let mut out = String::new();
    if words.is_empty() {
        out.push_str("(empty paragraph)\n");
        return Ok(out);
    }

    for line in summary {
        out.push_str(&format!(
            "Line {}: words {} to {}{}\n",
            line.index + 1,
            line.start + 1,
            line.end + 1,
            if line.is_last { " (last)" } else { "" }
        ));
        out.push_str(&format!("  Lengths: {:?}\n", line.lengths));
        out.push_str(&format!("  Width used: {}/{}\n", line.used_width, params.width));
        match line.gap_width {
            Some(gap) => {
                out.push_str(&format!("  Gap width: {gap:.2} (ideal {})\n", params.ideal_gap));
            }
            None if line.is_last && line.start != line.end => {
                out.push_str("  Gap width: - (last line, not stretched)\n");
            }
            None => out.push_str("  Gap width: - (single word)\n"),
        }
        out.push_str(&format!("  Cost: {}\n", format_cost(line.cost)));
    }
    out.push_str(&format!("Total cost: {:.4}\n", solution.cost));
    Ok(out)
}

/// The paragraph as text, one output line per layout line, padded on the right to `width`.
pub fn format_text(text_words: &[&str], cuts: &[usize], width: usize) -> LayoutResult<String> {
    check_cuts(cuts, text_words.len())?;
    let mut out = String::new();
    for (start, end) in lines(cuts, text_words.len()) {
        let line = text_words[start..=end].join(" ");
        let pad = width.saturating_sub(line.chars().count());
        out.push('|');
        out.push_str(&line);
        out.push_str(&" ".repeat(pad));
        out.push_str("|\n");
    }
    Ok(out)
}

/// Sum of the per-line costs of a layout, recomputed from scratch.
pub fn layout_cost(words: &[u32], cuts: &[usize], params: &LayoutParams) -> LayoutResult<LineCost> {
    check_layout(words, cuts, params)?;
    let ctx = Context::new(words, *params);
    Ok(lines(cuts, words.len())
        .into_iter()
        .map(|(start, end)| line_cost(&ctx, start, end))
        .sum())
}
