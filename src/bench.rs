//! Timing and comparison runs over the solvers.
//!
//! Nothing here changes what a solver returns: each run is wrapped, timed
//! and recorded, and failures are captured in the measurement instead of
//! being propagated. Exponential solvers are kept away from large inputs
//! by the limits in [`BenchConfig`].

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::api::{solve, Algorithm};
use crate::brute_force_solver;
use crate::context::LayoutParams;
use crate::error::{LayoutError, LayoutResult};
use crate::solution::Solution;

/// Settings for a benchmarking session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// A run longer than this is logged as slow. Default: 30 s.
    pub slow_threshold_ms: u64,
    /// Largest input handed to the pure recursive solver. Default: 20.
    pub recursive_limit: usize,
    /// Largest input handed to the brute-force solver. Default: 16.
    pub brute_force_limit: usize,
    /// Seed for the random word lengths of a sweep. Default: 42.
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            slow_threshold_ms: 30_000,
            recursive_limit: 20,
            brute_force_limit: 16,
            seed: 42,
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> LayoutResult<()> {
        if self.slow_threshold_ms == 0 {
            return Err(LayoutError::Config(
                "slow_threshold_ms must be > 0".to_string(),
            ));
        }
        if self.brute_force_limit > brute_force_solver::MAX_WORDS {
            return Err(LayoutError::Config(format!(
                "brute_force_limit must be <= {}, got {}",
                brute_force_solver::MAX_WORDS,
                self.brute_force_limit
            )));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> LayoutResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| LayoutError::Config(format!("JSON parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub const fn slow_threshold(&self) -> Duration {
        Duration::from_millis(self.slow_threshold_ms)
    }

    /// Input size limit for `algorithm`, if any.
    pub const fn limit_for(&self, algorithm: Algorithm) -> Option<usize> {
        match algorithm {
            Algorithm::Recursive => Some(self.recursive_limit),
            Algorithm::BruteForce => Some(self.brute_force_limit),
            Algorithm::DynamicProgramming | Algorithm::DivideAndConquer => None,
        }
    }
}

/// One timed solver run.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub algorithm: Algorithm,
    pub outcome: LayoutResult<Solution>,
    pub elapsed: Duration,
    /// Whether `elapsed` exceeded the configured slow threshold.
    pub slow: bool,
}

/// Serializable form of a [`Measurement`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasurementRecord {
    pub algorithm: Algorithm,
    pub success: bool,
    pub cost: Option<f64>,
    pub cuts: Option<Vec<usize>>,
    pub error: Option<String>,
    pub elapsed_ms: f64,
    pub slow: bool,
}

impl Measurement {
    pub fn cost(&self) -> Option<f64> {
        self.outcome.as_ref().ok().map(|s| s.cost)
    }

    pub fn record(&self) -> MeasurementRecord {
        let (cost, cuts, error) = match &self.outcome {
            Ok(solution) => (Some(solution.cost), Some(solution.cuts.clone()), None),
            Err(e) => (None, None, Some(e.to_string())),
        };
        MeasurementRecord {
            algorithm: self.algorithm,
            success: self.outcome.is_ok(),
            cost,
            cuts,
            error,
            elapsed_ms: self.elapsed.as_secs_f64() * 1000.0,
            slow: self.slow,
        }
    }
}

/// Time a single solver run, honoring the size limits in `config`.
pub fn measure(
    algorithm: Algorithm,
    words: &[u32],
    params: &LayoutParams,
    config: &BenchConfig,
) -> Measurement {
    if let Some(limit) = config.limit_for(algorithm) {
        if words.len() > limit {
            info!(%algorithm, words = words.len(), limit, "skipping run over size limit");
            return Measurement {
                algorithm,
                outcome: Err(LayoutError::TooManyWords {
                    algorithm,
                    words: words.len(),
                    limit,
                }),
                elapsed: Duration::ZERO,
                slow: false,
            };
        }
    }

    let start = Instant::now();
    let outcome = solve(algorithm, words, params);
    let elapsed = start.elapsed();
    let slow = elapsed > config.slow_threshold();

    match &outcome {
        Ok(solution) => info!(
            %algorithm,
            words = words.len(),
            cost = solution.cost,
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "measured"
        ),
        Err(e) => info!(%algorithm, words = words.len(), error = %e, "run failed"),
    }
    if slow {
        warn!(
            %algorithm,
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            threshold_ms = config.slow_threshold_ms,
            exponential = algorithm.is_exponential(),
            "solver is slower than the configured threshold"
        );
    }

    Measurement {
        algorithm,
        outcome,
        elapsed,
        slow,
    }
}

/// Measure every algorithm on the same input.
pub fn compare(words: &[u32], params: &LayoutParams, config: &BenchConfig) -> Vec<Measurement> {
    Algorithm::ALL
        .iter()
        .map(|&algorithm| measure(algorithm, words, params, config))
        .collect()
}

/// The cheapest successful measurement. Earlier entries win ties.
pub fn best(measurements: &[Measurement]) -> Option<&Measurement> {
    measurements
        .iter()
        .filter(|m| m.outcome.is_ok())
        .min_by(|a, b| {
            let (a, b) = (a.cost().unwrap_or(f64::MAX), b.cost().unwrap_or(f64::MAX));
            a.total_cmp(&b)
        })
}

/// Whether all successful measurements report the same cost, up to a relative `tolerance`.
pub fn agree(measurements: &[Measurement], tolerance: f64) -> bool {
    let costs: Vec<f64> = measurements.iter().filter_map(Measurement::cost).collect();
    let Some(&first) = costs.first() else {
        return true;
    };
    costs
        .iter()
        .all(|&c| (c - first).abs() <= tolerance * first.abs().max(1.0))
}

/// Measurements for one input size of a sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepRow {
    pub words: usize,
    pub measurements: Vec<MeasurementRecord>,
}

/// Deterministic workload of `n` words made by repeating `pattern`.
pub fn cycled_words(pattern: &[u32], n: usize) -> Vec<u32> {
    pattern.iter().copied().cycle().take(n).collect()
}

/// Word lengths drawn by `random_words`: `MIN_RANDOM_LEN..MAX_RANDOM_LEN`.
pub const MIN_RANDOM_LEN: u32 = 2;
pub const MAX_RANDOM_LEN: u32 = 8;

/// `n` word lengths drawn uniformly from `MIN_RANDOM_LEN..MAX_RANDOM_LEN`.
/// The same seed always yields the same words.
pub fn random_words(n: usize, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| rng.gen_range(MIN_RANDOM_LEN..MAX_RANDOM_LEN))
        .collect()
}

/// Measure every algorithm at each size in `sizes`, on seeded random word lengths.
pub fn sweep(
    sizes: &[usize],
    params: &LayoutParams,
    config: &BenchConfig,
) -> LayoutResult<Vec<SweepRow>> {
    config.validate()?;
    Ok(sizes
        .iter()
        .map(|&n| {
            let words = random_words(n, config.seed);
            SweepRow {
                words: n,
                measurements: compare(&words, params, config)
                    .iter()
                    .map(Measurement::record)
                    .collect(),
            }
        })
        .collect())
}

/// Pretty JSON for a sweep.
pub fn sweep_to_json(rows: &[SweepRow]) -> LayoutResult<String> {
    serde_json::to_string_pretty(rows)
        .map_err(|e| LayoutError::Config(format!("JSON serialization error: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(BenchConfig::default().validate().is_ok());
        assert_eq!(BenchConfig::default().slow_threshold(), Duration::from_secs(30));
    }

    #[test]
    fn config_from_partial_json() {
        let config = BenchConfig::from_json(r#"{"recursive_limit": 12}"#).expect("valid json");
        assert_eq!(config.recursive_limit, 12);
        assert_eq!(config.brute_force_limit, 16);

        assert!(matches!(
            BenchConfig::from_json("not json"),
            Err(LayoutError::Config(_))
        ));
        assert!(BenchConfig::from_json(r#"{"brute_force_limit": 100}"#).is_err());
        assert!(BenchConfig::from_json(r#"{"slow_threshold_ms": 0}"#).is_err());
    }

    #[test]
    fn compare_runs_all_and_agrees() {
        let params = LayoutParams::new(15.0, 1.5);
        let results = compare(&[5, 3, 4, 6, 2], &params, &BenchConfig::default());
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|m| m.outcome.is_ok()));
        assert!(agree(&results, 1e-6));
        let winner = best(&results).expect("some success").cost().expect("finite");
        let dp = results[0].cost().expect("finite");
        assert!(winner <= dp && dp - winner < 1e-9);
    }

    #[test]
    fn limits_skip_exponential_solvers() {
        let config = BenchConfig {
            recursive_limit: 3,
            brute_force_limit: 3,
            ..BenchConfig::default()
        };
        let words = cycled_words(&[3, 4, 2, 5], 10);
        let results = compare(&words, &LayoutParams::new(20.0, 2.0), &config);
        for m in &results {
            if m.algorithm.is_exponential() {
                assert!(matches!(m.outcome, Err(LayoutError::TooManyWords { limit: 3, .. })));
                assert_eq!(m.elapsed, Duration::ZERO);
            } else {
                assert!(m.outcome.is_ok());
            }
        }
        assert!(agree(&results, 1e-6));
    }

    #[test]
    fn failures_are_captured() {
        let m = measure(
            Algorithm::DynamicProgramming,
            &[30],
            &LayoutParams::new(15.0, 1.0),
            &BenchConfig::default(),
        );
        let record = m.record();
        assert!(!record.success);
        assert!(record.cost.is_none());
        assert!(record.error.expect("error message").contains("does not fit"));
    }

    #[test]
    fn agree_detects_mismatch() {
        let make = |cost| Measurement {
            algorithm: Algorithm::DynamicProgramming,
            outcome: Ok(Solution {
                cost,
                cuts: vec![],
            }),
            elapsed: Duration::ZERO,
            slow: false,
        };
        assert!(agree(&[make(2.0), make(2.0 + 1e-9)], 1e-6));
        assert!(!agree(&[make(2.0), make(2.5)], 1e-6));
        assert!(agree(&[], 1e-6));
    }

    #[test]
    fn sweep_produces_one_row_per_size() {
        let rows = sweep(
            &[0, 4, 8],
            &LayoutParams::new(20.0, 2.0),
            &BenchConfig::default(),
        )
        .expect("sweep runs");
        assert_eq!(rows.iter().map(|r| r.words).collect::<Vec<_>>(), vec![0, 4, 8]);
        assert!(rows.iter().all(|r| r.measurements.len() == 4));
        assert_eq!(rows[0].measurements[0].cost, Some(0.0));

        let json = sweep_to_json(&rows).expect("serializes");
        assert!(json.contains("\"dynamic_programming\""));
        let bad = BenchConfig {
            slow_threshold_ms: 0,
            ..BenchConfig::default()
        };
        assert!(sweep(&[1], &LayoutParams::new(20.0, 2.0), &bad).is_err());
    }

    #[test]
    fn random_words_are_seeded_and_in_range() {
        let a = random_words(200, 42);
        assert_eq!(a.len(), 200);
        assert!(a.iter().all(|w| (MIN_RANDOM_LEN..MAX_RANDOM_LEN).contains(w)));
        assert_eq!(a, random_words(200, 42));
        assert_ne!(a, random_words(200, 7));
        assert!(random_words(0, 42).is_empty());
    }

    #[test]
    fn sweep_uses_the_configured_seed() {
        let params = LayoutParams::new(20.0, 2.0);
        let config = BenchConfig {
            recursive_limit: 0,
            brute_force_limit: 0,
            ..BenchConfig::default()
        };
        let first = sweep(&[30], &params, &config).expect("sweep runs");
        let expected = crate::api::solve_dp(&random_words(30, config.seed), &params)
            .expect("random words fit");
        assert_eq!(first[0].measurements[0].cost, Some(expected.cost));
    }
}
