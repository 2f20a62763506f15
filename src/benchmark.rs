//! Benchmark harness: time both sorters over each dataset and cross-check
//! their outputs.
//!
//! Results are an explicit return value owned by the caller; the harness
//! keeps no state between runs.

use std::time::{Duration, Instant};

use crate::error::BenchError;
use crate::merge::merge_sort;
use crate::quick::{QuickStrategy, quick_sort_with};

/// A named, already-loaded input sequence.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub label: String,
    pub values: Vec<i64>,
}

impl Dataset {
    pub fn new(label: impl Into<String>, values: Vec<i64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }
}

/// Per-dataset measurement: timings for both sorters plus the sorted
/// outputs. Built once per dataset and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct BenchmarkRecord {
    pub label: String,
    pub len: usize,
    pub merge_time: Duration,
    pub quick_time: Duration,
    pub merge_sorted: Vec<i64>,
    pub quick_sorted: Vec<i64>,
}

impl BenchmarkRecord {
    /// Relative speed difference of quicksort over mergesort, in percent.
    /// Positive means quicksort was faster.
    pub fn speedup_percent(&self) -> f64 {
        (self.merge_time.as_secs_f64() / self.quick_time.as_secs_f64() - 1.0) * 100.0
    }
}

/// Benchmark every dataset in order.
///
/// One dataset failing must not abort the rest of the batch, so each
/// dataset yields its own `Result` in the returned vector.
pub fn run_benchmarks(
    datasets: &[Dataset],
    strategy: QuickStrategy,
) -> Vec<Result<BenchmarkRecord, BenchError>> {
    datasets
        .iter()
        .map(|dataset| benchmark_dataset(dataset, strategy))
        .collect()
}

/// Time both sorters over one dataset and verify their outputs agree.
///
/// Each sorter gets its own untouched copy of the input, cloned outside
/// the measured interval; only the sort call itself is timed.
pub fn benchmark_dataset(
    dataset: &Dataset,
    strategy: QuickStrategy,
) -> Result<BenchmarkRecord, BenchError> {
    let merge_input = dataset.values.clone();
    let start = Instant::now();
    let merge_sorted = merge_sort(&merge_input);
    let merge_time = start.elapsed();

    let quick_input = dataset.values.clone();
    let start = Instant::now();
    let quick_sorted = quick_sort_with(&quick_input, strategy);
    let quick_time = start.elapsed();

    // Both sorters over the same multiset must be indistinguishable as
    // value sequences; a divergence is a correctness fault.
    if let Some(index) = first_divergence(&merge_sorted, &quick_sorted) {
        return Err(BenchError::ResultMismatch {
            label: dataset.label.clone(),
            index,
        });
    }

    Ok(BenchmarkRecord {
        label: dataset.label.clone(),
        len: dataset.values.len(),
        merge_time,
        quick_time,
        merge_sorted,
        quick_sorted,
    })
}

fn first_divergence(merge_sorted: &[i64], quick_sorted: &[i64]) -> Option<usize> {
    if merge_sorted.len() != quick_sorted.len() {
        return Some(merge_sorted.len().min(quick_sorted.len()));
    }
    merge_sorted
        .iter()
        .zip(quick_sorted)
        .position(|(m, q)| m != q)
}
