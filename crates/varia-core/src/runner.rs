//! Analysis configuration and the pipeline runner
//!
//! [`AnovaRunner::run`] executes the whole procedure in one linear pass:
//! load the table, group by the grouping column, run the one-way ANOVA and
//! Tukey HSD, write the results workbook and the comparison chart, and print
//! a console transcript. Any failure aborts the run; there is no
//! partial-success mode.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::info;

use varia_io::{read_table, Cell, WorkbookWriter};
use varia_stats::{one_way_anova, tukey_hsd, AnovaResult, SampleSummary};

use crate::dataset::Dataset;
use crate::error::AnalysisResult;
use crate::{plot, report};

/// Configuration for one analysis run
///
/// All parameters default to the conventional values; output files land in
/// `output_dir` as `<prefix>_results_<timestamp>.xlsx` and
/// `<prefix>_plot_<timestamp>.png`. The timestamp is taken from the local
/// clock unless injected, so tests can produce deterministic file names.
/// Two runs within the same second overwrite each other's output.
#[derive(Debug, Clone)]
pub struct AnovaConfig {
    /// Path of the tabular input file (CSV or XLSX)
    pub input_path: PathBuf,
    /// Name of the column holding group labels
    pub group_column: String,
    /// Name of the column holding measurements
    pub value_column: String,
    /// Prefix for the two output files
    pub output_prefix: String,
    /// Directory the output files are written to
    pub output_dir: PathBuf,
    /// Family-wise error rate for the Tukey test
    pub alpha: f64,
    /// Fixed timestamp for output naming; `None` reads the local clock
    pub timestamp: Option<NaiveDateTime>,
}

impl Default for AnovaConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("data.xlsx"),
            group_column: "Group".to_string(),
            value_column: "Value".to_string(),
            output_prefix: "anova".to_string(),
            output_dir: PathBuf::from("."),
            alpha: 0.05,
            timestamp: None,
        }
    }
}

impl AnovaConfig {
    /// Configuration for `input_path` with all other parameters defaulted
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            ..Self::default()
        }
    }

    /// Set the group and value column names
    pub fn with_columns(mut self, group: impl Into<String>, value: impl Into<String>) -> Self {
        self.group_column = group.into();
        self.value_column = value.into();
        self
    }

    /// Set the output-file prefix
    pub fn with_output_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.output_prefix = prefix.into();
        self
    }

    /// Set the directory output files are written to
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the family-wise error rate
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Fix the output-naming timestamp
    pub fn with_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// Descriptive statistics for one group, rounded for display and storage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupReport {
    /// Group label
    pub label: String,
    /// Count, mean, std, sem rounded to 4 decimal places
    pub summary: SampleSummary,
}

/// One Tukey pairwise comparison with group labels attached
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledComparison {
    pub group_a: String,
    pub group_b: String,
    /// mean(group_b) - mean(group_a)
    pub mean_diff: f64,
    pub p_adjusted: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub reject: bool,
}

/// Everything one run computed, plus where it was persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub anova: AnovaResult,
    pub descriptives: Vec<GroupReport>,
    pub tukey: Vec<LabeledComparison>,
    pub workbook_path: PathBuf,
    pub chart_path: PathBuf,
}

/// Single-shot analysis runner
pub struct AnovaRunner {
    config: AnovaConfig,
}

impl AnovaRunner {
    pub fn new(config: AnovaConfig) -> Self {
        Self { config }
    }

    /// Run the full analysis
    ///
    /// Validation happens before any output file is created, so a failed run
    /// produces no files.
    pub fn run(&self) -> AnalysisResult<AnalysisReport> {
        let config = &self.config;

        info!(path = %config.input_path.display(), "reading data");
        let table = read_table(&config.input_path)?;

        let dataset = Dataset::from_table(&table, &config.group_column, &config.value_column)?;
        dataset.validate()?;
        info!(
            groups = dataset.n_groups(),
            observations = dataset.n_total(),
            "running one-way ANOVA with Tukey HSD"
        );

        let slices = dataset.value_slices();
        let anova = one_way_anova(&slices)?;
        let pairwise = tukey_hsd(&slices, config.alpha)?;

        let labels = dataset.labels();
        let tukey: Vec<LabeledComparison> = pairwise
            .into_iter()
            .map(|c| LabeledComparison {
                group_a: labels[c.group_a].to_string(),
                group_b: labels[c.group_b].to_string(),
                mean_diff: c.mean_diff,
                p_adjusted: c.p_adjusted,
                ci_lower: c.ci_lower,
                ci_upper: c.ci_upper,
                reject: c.reject,
            })
            .collect();

        let descriptives: Vec<GroupReport> = dataset
            .groups()
            .iter()
            .map(|g| GroupReport {
                label: g.label.clone(),
                summary: SampleSummary::from_data(&g.values).rounded(4),
            })
            .collect();

        let stamp = config
            .timestamp
            .unwrap_or_else(|| Local::now().naive_local())
            .format("%Y%m%d_%H%M%S");
        let workbook_path = config
            .output_dir
            .join(format!("{}_results_{}.xlsx", config.output_prefix, stamp));
        let chart_path = config
            .output_dir
            .join(format!("{}_plot_{}.png", config.output_prefix, stamp));

        self.write_workbook(&workbook_path, &anova, &descriptives, &tukey)?;
        info!(path = %workbook_path.display(), "results workbook saved");

        plot::render_chart(&chart_path, &dataset, anova.p_value)?;
        info!(path = %chart_path.display(), "comparison chart saved");

        let analysis = AnalysisReport {
            anova,
            descriptives,
            tukey,
            workbook_path,
            chart_path,
        };
        report::print_summary(&analysis);
        Ok(analysis)
    }

    /// Write the three-sheet results workbook
    fn write_workbook(
        &self,
        path: &Path,
        anova: &AnovaResult,
        descriptives: &[GroupReport],
        tukey: &[LabeledComparison],
    ) -> AnalysisResult<()> {
        let mut writer = WorkbookWriter::new();

        writer.add_sheet(
            "ANOVA Results",
            [
                "Test Type",
                "F-statistic",
                "p-value",
                "Significant",
                "Number of Groups",
                "Total Observations",
            ]
            .map(String::from)
            .to_vec(),
            vec![vec![
                Cell::Text("One-way ANOVA".to_string()),
                Cell::Number(anova.f_statistic),
                Cell::Number(anova.p_value),
                Cell::Text(if anova.significant { "Yes" } else { "No" }.to_string()),
                Cell::Number(anova.n_groups as f64),
                Cell::Number(anova.n_total as f64),
            ]],
        );

        let mut headers = vec![self.config.group_column.clone()];
        headers.extend(["count", "mean", "std", "sem"].map(String::from));
        writer.add_sheet(
            "Descriptive Stats",
            headers,
            descriptives
                .iter()
                .map(|g| {
                    vec![
                        Cell::Text(g.label.clone()),
                        Cell::Number(g.summary.count as f64),
                        Cell::Number(g.summary.mean),
                        Cell::Number(g.summary.std_dev),
                        Cell::Number(g.summary.sem),
                    ]
                })
                .collect(),
        );

        writer.add_sheet(
            "Tukey Results",
            ["group1", "group2", "meandiff", "p-adj", "lower", "upper", "reject"]
                .map(String::from)
                .to_vec(),
            tukey
                .iter()
                .map(|c| {
                    vec![
                        Cell::Text(c.group_a.clone()),
                        Cell::Text(c.group_b.clone()),
                        Cell::Number(c.mean_diff),
                        Cell::Number(c.p_adjusted),
                        Cell::Number(c.ci_lower),
                        Cell::Number(c.ci_upper),
                        Cell::Bool(c.reject),
                    ]
                })
                .collect(),
        );

        writer.save(path)?;
        Ok(())
    }
}
