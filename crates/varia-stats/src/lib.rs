//! varia-stats - Statistical tests for grouped measurements
//!
//! This crate provides the statistical layer for varia:
//!
//! - **Summaries**: per-sample count, mean, standard deviation, SEM
//! - **One-way ANOVA**: between/within variance decomposition with an
//!   F-distribution p-value
//! - **Tukey HSD**: pairwise post-hoc comparison controlling the
//!   family-wise error rate via the studentized range distribution

pub mod anova;
pub mod error;
pub mod range;
pub mod summary;
pub mod tukey;

pub use anova::*;
pub use error::{StatsError, StatsResult};
pub use summary::*;
pub use tukey::*;
