use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use paragraph_breaking::bench::{best, compare, BenchConfig, Measurement};
use paragraph_breaking::{format_layout, format_text, solve_dp, word_lengths, Algorithm, LayoutParams};

fn print_results(measurements: &[Measurement]) {
    for m in measurements {
        match &m.outcome {
            Ok(solution) => println!(
                "{:<22} | cost {:>10.4} | {:>10.4} ms | cuts {:?}",
                m.algorithm.name(),
                solution.cost,
                m.elapsed.as_secs_f64() * 1000.0,
                solution.cuts
            ),
            Err(e) => println!("{:<22} | error: {}", m.algorithm.name(), e),
        }
    }
}

fn run_case(title: &str, words: &[u32], params: LayoutParams, config: &BenchConfig) {
    println!("{title}");
    println!("Word lengths: {words:?} | L = {} | b = {}", params.width, params.ideal_gap);
    let measurements = compare(words, &params, config);
    print_results(&measurements);
    match best(&measurements) {
        Some(m) => {
            println!("Best: {}", m.algorithm.name());
            if let Ok(solution) = &m.outcome {
                match format_layout(words, solution, &params) {
                    Ok(report) => print!("{report}"),
                    Err(e) => println!("Cannot describe layout: {e}"),
                }
            }
        }
        None => println!("No solver found a layout."),
    }
}

fn print_complexity() {
    println!("{:<22} | complexity", "algorithm");
    for algorithm in Algorithm::ALL {
        println!("{:<22} | {}", algorithm.name(), algorithm.complexity());
    }
}

fn run_text(text: &str, width: usize, ideal_gap: f64) {
    let words: Vec<&str> = text.split_whitespace().collect();
    let lengths = word_lengths(&words);
    match solve_dp(&lengths, &LayoutParams::new(width as f64, ideal_gap)) {
        Ok(solution) => {
            println!("Text at L = {width}, b = {ideal_gap} (cost {:.4}):", solution.cost);
            match format_text(&words, &solution.cuts, width) {
                Ok(text) => print!("{text}"),
                Err(e) => println!("Cannot render text: {e}"),
            }
        }
        Err(e) => println!("Cannot lay out text: {e}"),
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_CRATE_NAME")))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = BenchConfig::default();
    run_case(
        "--- Small case ---",
        &[5, 3, 4, 6, 2],
        LayoutParams::new(15.0, 1.5),
        &config,
    );
    println!();
    run_case(
        "--- Medium case ---",
        &[3, 4, 2, 5, 3, 4, 6, 2, 3, 5],
        LayoutParams::new(20.0, 2.0),
        &config,
    );
    println!();
    print_complexity();
    println!();
    run_text(
        "the quick brown fox jumps over the lazy dog while the cat watches from the window",
        24,
        1.0,
    );
}
