//! Grouped bar chart comparing the two sorters, rendered with plotters.

use plotters::prelude::*;
use std::path::Path;

use crate::benchmark::BenchmarkRecord;

const MERGE_COLOR: RGBColor = RGBColor(11, 97, 88);
const QUICK_COLOR: RGBColor = RGBColor(170, 209, 150);

/// Render one pair of bars (MergeSort, QuickSort) per dataset.
///
/// Writes a 1280x720 PNG to `output_path`. The y axis is execution time
/// in seconds; each bar carries its value as a label.
pub fn render_comparison_chart<P: AsRef<Path>>(
    records: &[BenchmarkRecord],
    output_path: P,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(output_path.as_ref(), (1280, 720)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_time = records
        .iter()
        .map(|r| r.merge_time.as_secs_f64().max(r.quick_time.as_secs_f64()))
        .fold(0.0_f64, f64::max);
    // Headroom so bar value labels stay inside the plot area.
    let y_top = if max_time > 0.0 { max_time * 1.15 } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Performance comparison: MergeSort vs QuickSort",
            ("sans-serif", 30).into_font(),
        )
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0f64..records.len() as f64, 0f64..y_top)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("Execution time (seconds)")
        .x_desc("Dataset (element count)")
        .x_labels(records.len() + 1)
        .x_label_formatter(&|x| {
            let i = x.round() as usize;
            if (x - i as f64).abs() < 1e-6 && i < records.len() {
                format!("{} ({} elements)", records[i].label, records[i].len)
            } else {
                String::new()
            }
        })
        .draw()?;

    chart
        .draw_series(records.iter().enumerate().map(|(i, r)| {
            let x = i as f64;
            Rectangle::new(
                [(x + 0.15, 0.0), (x + 0.45, r.merge_time.as_secs_f64())],
                MERGE_COLOR.filled(),
            )
        }))?
        .label("MergeSort")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], MERGE_COLOR.filled()));

    chart
        .draw_series(records.iter().enumerate().map(|(i, r)| {
            let x = i as f64;
            Rectangle::new(
                [(x + 0.55, 0.0), (x + 0.85, r.quick_time.as_secs_f64())],
                QUICK_COLOR.filled(),
            )
        }))?
        .label("QuickSort")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], QUICK_COLOR.filled()));

    // Value labels above each bar.
    chart.draw_series(records.iter().enumerate().flat_map(|(i, r)| {
        let x = i as f64;
        let style = ("sans-serif", 13).into_font();
        [
            Text::new(
                format!("{:.4}s", r.merge_time.as_secs_f64()),
                (x + 0.15, r.merge_time.as_secs_f64() + y_top * 0.01),
                style.clone(),
            ),
            Text::new(
                format!("{:.4}s", r.quick_time.as_secs_f64()),
                (x + 0.55, r.quick_time.as_secs_f64() + y_top * 0.01),
                style,
            ),
        ]
    }))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .border_style(&BLACK)
        .background_style(WHITE.mix(0.9).filled())
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::{Dataset, benchmark_dataset};
    use crate::quick::QuickStrategy;
    use tempfile::tempdir;

    #[test]
    fn test_render_creates_png() {
        let records: Vec<BenchmarkRecord> = [
            Dataset::new("small", (0..100).rev().collect()),
            Dataset::new("large", (0..5000).rev().collect()),
        ]
        .iter()
        .map(|d| benchmark_dataset(d, QuickStrategy::Recursive).unwrap())
        .collect();

        let dir = tempdir().unwrap();
        let path = dir.path().join("chart.png");
        render_comparison_chart(&records, &path).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }
}
