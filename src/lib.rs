//! Library for the `sortbench` package.
//!
//! Compares MergeSort and QuickSort over integer datasets: both sorters,
//! a timing harness that cross-checks their outputs, dataset file I/O,
//! table reporting and a grouped bar chart.
//!
//! # Modules
//!
//! - `merge` - MergeSort returning a new sorted vector (stable)
//! - `quick` - QuickSort with median-of-three pivot selection
//! - `benchmark` - Per-dataset timing and output verification
//! - `io` - Dataset reading, sorted-output writing, chart naming
//! - `report` - Summary table and sorted previews
//! - `visualization` - Grouped bar chart via plotters
//! - `config` - Benchmark/generator options (clap + TOML)
//! - `error` - Dataset and benchmark error taxonomy

pub mod benchmark;
pub mod config;
pub mod error;
pub mod io;
pub mod merge;
pub mod quick;
pub mod report;
pub mod visualization;

// Re-export commonly used types and functions
pub use benchmark::{BenchmarkRecord, Dataset, benchmark_dataset, run_benchmarks};
pub use config::{BenchConfig, GenerateConfig};
pub use error::{BenchError, DataError};
pub use io::{next_chart_path, read_integer_file, sorted_output_path, write_integer_file};
pub use merge::{merge_sort, merge_sort_by_key};
pub use quick::{QuickStrategy, median_of_three, quick_sort, quick_sort_with};
pub use report::{print_sorted_previews, print_summary};
pub use visualization::render_comparison_chart;
