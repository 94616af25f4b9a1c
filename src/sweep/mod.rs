use std::path::PathBuf;

use crate::error::SweepError;
use crate::runner::{self, Variant};

/// Parameters of a full benchmark sweep, fixed at startup.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Path to the benchmark executable.
    pub executable: PathBuf,
    /// Inclusive lower bound on the element count.
    pub lower: u64,
    /// Exclusive upper bound on the element count.
    pub upper: u64,
    /// Element count increment between sweep points.
    pub step: u64,
    /// Number of repeated trials averaged per point and variant.
    pub trials: u64,
    /// Traversal iteration count passed to every benchmark invocation.
    pub iterations: u64,
}

/// One combination of benchmark parameters to measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterPoint {
    pub element_count: u64,
    pub iteration_count: u64,
}

/// Aggregated timing for one parameter point of one variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub element_count: u64,
    pub mean_time: f64,
}

/// The aggregated size-vs-time curve of one variant across the whole sweep.
#[derive(Debug, Clone)]
pub struct VariantSeries {
    pub variant: Variant,
    pub points: Vec<SeriesPoint>,
}

impl SweepConfig {
    /// Checks the configuration invariants.
    ///
    /// `lower >= upper` is deliberately not rejected: it yields an empty
    /// sweep rather than an error.
    pub fn validate(&self) -> Result<(), SweepError> {
        if self.executable.as_os_str().is_empty() {
            return Err(SweepError::Config(
                "benchmark executable path is empty".to_string(),
            ));
        }
        if self.step == 0 {
            return Err(SweepError::Config("step must be greater than zero".to_string()));
        }
        if self.trials == 0 {
            return Err(SweepError::Config(
                "trial count must be greater than zero".to_string(),
            ));
        }
        if self.iterations == 0 {
            return Err(SweepError::Config(
                "iteration count must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// The ordered parameter grid: element counts in `[lower, upper)`
    /// stepping by `step`, each paired with the fixed iteration count.
    pub fn parameter_points(&self) -> Vec<ParameterPoint> {
        (self.lower..self.upper)
            .step_by(self.step as usize)
            .map(|element_count| ParameterPoint {
                element_count,
                iteration_count: self.iterations,
            })
            .collect()
    }
}

/// Runs the full sweep: every parameter point, both variants, `trials`
/// repeats each, reduced to one mean per point and variant.
///
/// Trials run strictly sequentially, one child process at a time. The first
/// failure aborts the sweep and discards everything gathered so far.
pub fn run_sweep(config: &SweepConfig) -> Result<Vec<VariantSeries>, SweepError> {
    run_sweep_with(config, |point, variant| {
        runner::run_trial(&config.executable, point, variant)
    })
}

/// Sweep loop over an arbitrary trial function.
fn run_sweep_with<F>(config: &SweepConfig, mut trial: F) -> Result<Vec<VariantSeries>, SweepError>
where
    F: FnMut(&ParameterPoint, Variant) -> Result<u64, SweepError>,
{
    let points = config.parameter_points();
    let mut series: Vec<VariantSeries> = Variant::ALL
        .iter()
        .map(|&variant| VariantSeries {
            variant,
            points: Vec::with_capacity(points.len()),
        })
        .collect();

    for (i, point) in points.iter().enumerate() {
        println!(
            "({}/{}) Benchmarking {} elements",
            i + 1,
            points.len(),
            point.element_count
        );

        // All trials of one point and variant complete before the next starts.
        for variant_series in series.iter_mut() {
            let mut timings = Vec::with_capacity(config.trials as usize);
            for _ in 0..config.trials {
                timings.push(trial(point, variant_series.variant)?);
            }
            variant_series.points.push(SeriesPoint {
                element_count: point.element_count,
                mean_time: mean(&timings),
            });
        }
    }

    Ok(series)
}

/// Arithmetic mean of the trial timings.
fn mean(timings: &[u64]) -> f64 {
    timings.iter().sum::<u64>() as f64 / timings.len() as f64
}
