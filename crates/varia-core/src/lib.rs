//! varia-core - Grouped-measurement comparison pipeline
//!
//! Runs a one-way ANOVA with Tukey HSD post-hoc comparison over a tabular
//! data file and persists the results:
//!
//! - a workbook with summary, descriptive, and pairwise-comparison sheets
//! - a two-panel comparison chart (box plot + group means with 95% CI)
//! - a console transcript of every computed value
//!
//! ```no_run
//! use varia_core::{AnovaConfig, AnovaRunner};
//!
//! let config = AnovaConfig::new("data.xlsx")
//!     .with_columns("Group", "Value")
//!     .with_output_prefix("anova");
//! let report = AnovaRunner::new(config).run()?;
//! assert_eq!(report.anova.n_groups, report.descriptives.len());
//! # Ok::<(), varia_core::AnovaError>(())
//! ```

pub mod dataset;
pub mod error;
pub mod plot;
pub mod report;
pub mod runner;

pub use dataset::{Dataset, GroupData};
pub use error::{AnovaError, ChartError};
pub use runner::{AnalysisReport, AnovaConfig, AnovaRunner, GroupReport, LabeledComparison};
