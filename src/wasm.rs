use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::api::{solve, Algorithm};
use crate::context::LayoutParams;
use crate::format::{describe_lines, LineSummary};

#[derive(Serialize)]
struct WasmSolution {
    algorithm: Algorithm,
    cost: f64,
    cuts: Vec<usize>,
    lines: Vec<LineSummary>,
}

fn words_from_js(value: JsValue) -> Result<Vec<u32>, JsValue> {
    from_value(value).map_err(|e| {
        JsValue::from_str(&format!("Word lengths must be an array of positive integers: {e}"))
    })
}

/// WebAssembly entry point: break a paragraph of word lengths into lines.
#[wasm_bindgen]
pub fn solve_paragraph(
    word_lengths: JsValue,
    width: f64,
    ideal_gap: f64,
    algorithm: &str,
) -> Result<JsValue, JsValue> {
    let words = words_from_js(word_lengths)?;
    let algorithm: Algorithm = algorithm.parse().map_err(|e: String| JsValue::from_str(&e))?;
    let params = LayoutParams::new(width, ideal_gap);

    let solution =
        solve(algorithm, &words, &params).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let lines = describe_lines(&words, &solution.cuts, &params)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_value(&WasmSolution {
        algorithm,
        cost: solution.cost,
        cuts: solution.cuts,
        lines,
    })
    .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Convenience helper exposed to JS: the names accepted by `solve_paragraph`.
#[wasm_bindgen]
pub fn algorithm_names() -> Result<JsValue, JsValue> {
    let names: Vec<&str> = Algorithm::ALL.iter().map(Algorithm::name).collect();
    to_value(&names).map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}
