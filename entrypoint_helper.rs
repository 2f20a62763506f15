use clap::{Parser, Subcommand};
use std::path::PathBuf;

use sortbench::{BenchConfig, GenerateConfig};

/// MergeSort vs QuickSort benchmark over integer dataset files
#[derive(Parser, Debug)]
#[command(name = "sortbench")]
#[command(about = "Benchmark MergeSort against QuickSort on integer datasets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Time both sorters over each input file and compare the results
    Bench {
        /// Input files, one integer per line
        #[arg(value_name = "FILES", required = true)]
        files: Vec<PathBuf>,

        /// Read benchmark options from a TOML file instead of flags
        #[arg(short, long)]
        config_file: Option<PathBuf>,

        #[command(flatten)]
        config: BenchConfig,
    },

    /// Write a reproducible random dataset file
    Generate {
        /// Destination file, one integer per line
        #[arg(value_name = "PATH")]
        path: PathBuf,

        #[command(flatten)]
        config: GenerateConfig,
    },
}
