use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;

use sortbench::{
    BenchConfig, Dataset, GenerateConfig, benchmark_dataset, next_chart_path,
    print_sorted_previews, print_summary, read_integer_file, render_comparison_chart,
    sorted_output_path, write_integer_file,
};

// Include entrypoint helper module
#[path = "entrypoint_helper.rs"]
mod entrypoint_helper;

use entrypoint_helper::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            files,
            config_file,
            config,
        } => run_bench(&files, config_file, config),
        Commands::Generate { path, config } => run_generate(&path, &config),
    }
}

fn run_bench(files: &[PathBuf], config_file: Option<PathBuf>, config: BenchConfig) -> Result<()> {
    let config = match config_file {
        Some(path) => BenchConfig::from_file(&path)?,
        None => config,
    };

    println!("\n=== BENCHMARK MODE ===");
    println!("Datasets: {}", files.len());
    println!("Output: {}\n", config.output_dir.display());

    let mut records = Vec::new();
    let mut failures = 0usize;
    let mut mismatch = false;

    // Strictly sequential: one dataset at a time, so measured intervals
    // never interfere with each other.
    for file in files {
        println!("Processing {}...", file.display());

        let values = match read_integer_file(file) {
            Ok(values) => values,
            Err(e) => {
                eprintln!("Error: {}", e);
                failures += 1;
                continue;
            }
        };

        let label = file
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("dataset")
            .to_string();
        let dataset = Dataset::new(label, values);

        let record = match benchmark_dataset(&dataset, config.strategy) {
            Ok(record) => record,
            Err(e) => {
                eprintln!("Error: {}", e);
                mismatch = true;
                failures += 1;
                continue;
            }
        };

        let merge_path = sorted_output_path(&config.output_dir, "mergesort", record.len);
        let quick_path = sorted_output_path(&config.output_dir, "quicksort", record.len);
        write_integer_file(&merge_path, &record.merge_sorted)?;
        write_integer_file(&quick_path, &record.quick_sorted)?;
        println!("  Sorted vectors saved:");
        println!("    MergeSort: {}", merge_path.display());
        println!("    QuickSort: {}", quick_path.display());

        records.push(record);
    }

    if !records.is_empty() {
        println!();
        print_summary(&records);
        println!();

        if config.preview {
            print_sorted_previews(&records);
        }

        if config.chart {
            let chart_path = next_chart_path(&config.output_dir, "comparison_chart")?;
            render_comparison_chart(&records, &chart_path)
                .map_err(|e| anyhow::anyhow!("failed to render chart: {}", e))?;
            println!("Chart saved to: {}", chart_path.display());
        }
    }

    if mismatch {
        anyhow::bail!("cross-algorithm mismatch detected, see errors above");
    }
    if records.is_empty() {
        anyhow::bail!("no dataset could be processed ({} failed)", failures);
    }
    if failures > 0 {
        eprintln!("Warning: {} of {} datasets failed", failures, files.len());
    }

    println!("\n✓ Completed successfully!");
    Ok(())
}

fn run_generate(path: &PathBuf, config: &GenerateConfig) -> Result<()> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let values: Vec<i64> = (0..config.count)
        .map(|_| rng.gen_range(-config.max_abs..=config.max_abs))
        .collect();

    write_integer_file(path, &values)?;
    println!(
        "✓ Wrote {} integers in [-{}, {}] to: {} (seed {})",
        config.count,
        config.max_abs,
        config.max_abs,
        path.display(),
        config.seed
    );
    Ok(())
}
