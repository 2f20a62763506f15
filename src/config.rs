//! Run configuration for the benchmark and generator subcommands.
//!
//! `BenchConfig` doubles as clap arguments and a TOML-deserializable
//! structure, so a run can be described either on the command line or in
//! a config file.

use anyhow::Result;
use clap::Args;
use serde::Deserialize;
use std::path::PathBuf;

use crate::quick::QuickStrategy;

/// Options for a benchmark run.
#[derive(Debug, Clone, Args, Deserialize)]
pub struct BenchConfig {
    /// Directory for sorted outputs and charts
    #[arg(short = 'D', long, default_value = "results/")]
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Quicksort driver (the iterative driver avoids deep call stacks)
    #[arg(long, value_enum, default_value_t = QuickStrategy::Recursive)]
    #[serde(default)]
    pub strategy: QuickStrategy,

    /// Render the grouped comparison chart
    #[arg(long)]
    #[serde(default)]
    pub chart: bool,

    /// Print the first elements of each sorted output
    #[arg(long)]
    #[serde(default)]
    pub preview: bool,
}

impl BenchConfig {
    /// Load a benchmark configuration from a TOML file.
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: BenchConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("results/")
}

/// Options for the dataset generator.
#[derive(Debug, Clone, Args)]
pub struct GenerateConfig {
    /// Number of integers to generate
    #[arg(short = 'n', long)]
    pub count: usize,

    /// RNG seed, fixed so generated datasets are reproducible
    #[arg(short, long, default_value_t = 12345)]
    pub seed: u64,

    /// Values are drawn uniformly from [-max-abs, max-abs]
    #[arg(long, default_value_t = 1_000_000)]
    pub max_abs: i64,
}

impl GenerateConfig {
    /// Validate generator parameters.
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            anyhow::bail!("count must be greater than 0");
        }
        if self.max_abs < 0 {
            anyhow::bail!("max-abs must be non-negative, got {}", self.max_abs);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_generate_config_validation() {
        let mut config = GenerateConfig {
            count: 100,
            seed: 1,
            max_abs: 50,
        };
        assert!(config.validate().is_ok());

        config.count = 0;
        assert!(config.validate().is_err());

        config.count = 100;
        config.max_abs = -1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bench_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "output_dir = \"out/\"").unwrap();
        writeln!(file, "strategy = \"iterative\"").unwrap();
        writeln!(file, "chart = true").unwrap();

        let config = BenchConfig::from_file(file.path()).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("out/"));
        assert_eq!(config.strategy, QuickStrategy::Iterative);
        assert!(config.chart);
        assert!(!config.preview);
    }

    #[test]
    fn test_bench_config_defaults_from_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let config = BenchConfig::from_file(file.path()).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("results/"));
        assert_eq!(config.strategy, QuickStrategy::Recursive);
        assert!(!config.chart);
    }
}
