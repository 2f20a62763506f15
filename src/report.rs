//! Plain-text reporting: summary table and sorted-output previews.

use crate::benchmark::BenchmarkRecord;

const RULE_WIDTH: usize = 90;
const PREVIEW_LEN: usize = 10;

/// Print the per-dataset timing table.
pub fn print_summary(records: &[BenchmarkRecord]) {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("BENCHMARK SUMMARY");
    println!("{}", "=".repeat(RULE_WIDTH));
    println!(
        "{:<20} | {:>10} | {:>17} | {:>17} | {:>9}",
        "Dataset", "N", "MergeSort (s)", "QuickSort (s)", "Speedup"
    );
    println!("{}", "-".repeat(RULE_WIDTH));

    for record in records {
        println!(
            "{:<20} | {:>10} | {:>17.6} | {:>17.6} | {:>+8.1}%",
            record.label,
            group_thousands(record.len),
            record.merge_time.as_secs_f64(),
            record.quick_time.as_secs_f64(),
            record.speedup_percent(),
        );
    }
    println!("{}", "=".repeat(RULE_WIDTH));
}

/// Print the first elements of both sorted outputs per dataset.
pub fn print_sorted_previews(records: &[BenchmarkRecord]) {
    println!("Sorted output preview:");
    println!("{}", "=".repeat(RULE_WIDTH));
    for record in records {
        println!("Dataset: {}", record.label);
        println!("  MergeSort: {}", preview(&record.merge_sorted));
        println!("  QuickSort: {}", preview(&record.quick_sorted));
        println!();
    }
}

fn preview(values: &[i64]) -> String {
    let shown: Vec<String> = values
        .iter()
        .take(PREVIEW_LEN)
        .map(|v| v.to_string())
        .collect();
    if values.len() > PREVIEW_LEN {
        format!("[{}, ...]", shown.join(", "))
    } else {
        format!("[{}]", shown.join(", "))
    }
}

fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(20_000), "20,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_preview_short() {
        assert_eq!(preview(&[1, 2, 3]), "[1, 2, 3]");
        assert_eq!(preview(&[]), "[]");
    }

    #[test]
    fn test_preview_truncated() {
        let values: Vec<i64> = (1..=12).collect();
        assert_eq!(preview(&values), "[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, ...]");
    }
}
