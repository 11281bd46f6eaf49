//! Two-panel comparison chart
//!
//! Left panel: per-group box plot overlaid with the individual observations,
//! captioned with the ANOVA p-value. Right panel: per-group mean with a 95%
//! confidence interval. Rendered as a PNG raster image.

use std::ops::Range;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use varia_stats::mean_confidence_interval;

use crate::dataset::Dataset;
use crate::error::ChartError;

/// Output raster size in pixels: 10in x 4in at 300 DPI
pub const CHART_SIZE: (u32, u32) = (3000, 1200);

/// Confidence level for the means panel
const MEAN_CI: f64 = 0.95;

/// Render the comparison chart for a validated dataset
pub fn render_chart(path: &Path, dataset: &Dataset, p_value: f64) -> Result<(), ChartError> {
    let (min, max) = dataset
        .value_range()
        .ok_or_else(|| ChartError::Render("dataset has no observations".into()))?;
    let span = (max - min).max(1e-9);
    // Quartiles emit f32, so both panels draw on an f32 value axis
    let y_range = (min - span * 0.1) as f32..(max + span * 0.1) as f32;

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(to_chart_error)?;
    let panels = root.split_evenly((1, 2));

    draw_box_panel(&panels[0], dataset, p_value, y_range.clone())?;
    draw_means_panel(&panels[1], dataset, y_range)?;

    root.present().map_err(to_chart_error)?;
    Ok(())
}

fn draw_box_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    dataset: &Dataset,
    p_value: f64,
    y_range: Range<f32>,
) -> Result<(), ChartError> {
    let k = dataset.n_groups() as i32;
    let labels: Vec<String> = dataset.labels().iter().map(|s| s.to_string()).collect();

    let mut chart = ChartBuilder::on(area)
        .caption(
            format!("Group Comparisons (p = {p_value:.4})"),
            ("sans-serif", 48),
        )
        .margin(30)
        .x_label_area_size(70)
        .y_label_area_size(110)
        .build_cartesian_2d((0..k).into_segmented(), y_range)
        .map_err(to_chart_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|segment| segment_label(segment, &labels))
        .label_style(("sans-serif", 28))
        .draw()
        .map_err(to_chart_error)?;

    for (index, group) in dataset.groups().iter().enumerate() {
        let x = SegmentValue::CenterOf(index as i32);
        let quartiles = Quartiles::new(&group.values);

        chart
            .draw_series([Boxplot::new_vertical(x.clone(), &quartiles)
                .width(60)
                .whisker_width(0.5)
                .style(BLUE)])
            .map_err(to_chart_error)?;

        chart
            .draw_series(
                group
                    .values
                    .iter()
                    .map(|v| Circle::new((x.clone(), *v as f32), 6, BLACK.mix(0.4).filled())),
            )
            .map_err(to_chart_error)?;
    }

    Ok(())
}

fn draw_means_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    dataset: &Dataset,
    y_range: Range<f32>,
) -> Result<(), ChartError> {
    let k = dataset.n_groups() as i32;
    let labels: Vec<String> = dataset.labels().iter().map(|s| s.to_string()).collect();

    let mut chart = ChartBuilder::on(area)
        .caption("Group Means with 95% CI", ("sans-serif", 48))
        .margin(30)
        .x_label_area_size(70)
        .y_label_area_size(110)
        .build_cartesian_2d((0..k).into_segmented(), y_range)
        .map_err(to_chart_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|segment| segment_label(segment, &labels))
        .label_style(("sans-serif", 28))
        .draw()
        .map_err(to_chart_error)?;

    for (index, group) in dataset.groups().iter().enumerate() {
        let mean = group.values.iter().sum::<f64>() / group.values.len() as f64;
        let (ci_lower, ci_upper) = mean_confidence_interval(&group.values, MEAN_CI)
            .map_err(|e| ChartError::Render(e.to_string()))?;

        chart
            .draw_series([ErrorBar::new_vertical(
                SegmentValue::CenterOf(index as i32),
                ci_lower as f32,
                mean as f32,
                ci_upper as f32,
                BLUE.filled(),
                20,
            )])
            .map_err(to_chart_error)?;
    }

    Ok(())
}

fn segment_label(segment: &SegmentValue<i32>, labels: &[String]) -> String {
    match segment {
        SegmentValue::CenterOf(index) if (0..labels.len() as i32).contains(index) => {
            labels[*index as usize].clone()
        }
        _ => String::new(),
    }
}

fn to_chart_error<E: std::fmt::Display>(error: E) -> ChartError {
    ChartError::Render(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use varia_io::{Cell, Table};

    fn dataset() -> Dataset {
        let table = Table::new(
            vec!["Group".into(), "Value".into()],
            vec![
                vec![Cell::Text("A".into()), Cell::Number(10.0)],
                vec![Cell::Text("A".into()), Cell::Number(12.0)],
                vec![Cell::Text("A".into()), Cell::Number(11.0)],
                vec![Cell::Text("B".into()), Cell::Number(20.0)],
                vec![Cell::Text("B".into()), Cell::Number(22.0)],
                vec![Cell::Text("B".into()), Cell::Number(21.0)],
            ],
        );
        Dataset::from_table(&table, "Group", "Value").unwrap()
    }

    #[test]
    fn test_render_chart_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");

        render_chart(&path, &dataset(), 0.0003).unwrap();

        assert!(path.exists());
        // PNG signature
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_segment_label_out_of_range() {
        let labels = vec!["A".to_string()];
        assert_eq!(
            segment_label(&SegmentValue::CenterOf(0), &labels),
            "A".to_string()
        );
        assert_eq!(segment_label(&SegmentValue::CenterOf(5), &labels), "");
    }
}
