//! Grouped observations extracted from a table
//!
//! A [`Dataset`] partitions the rows of a table by the distinct values of a
//! grouping column. Labels are kept sorted so that the order in which groups
//! appear in the file never affects results.

use std::collections::BTreeMap;

use varia_io::Table;

use crate::error::{AnalysisResult, AnovaError};

/// One group of observations
#[derive(Debug, Clone)]
pub struct GroupData {
    /// Group label from the grouping column
    pub label: String,
    /// Observations in row order
    pub values: Vec<f64>,
}

/// Immutable grouped dataset for a single analysis run
#[derive(Debug, Clone)]
pub struct Dataset {
    groups: Vec<GroupData>,
    n_total: usize,
}

impl Dataset {
    /// Partition a table by the grouping column
    ///
    /// The schema is checked before any values are read, so a missing column
    /// fails before any computation. Every cell of the value column must be
    /// numeric.
    pub fn from_table(
        table: &Table,
        group_column: &str,
        value_column: &str,
    ) -> AnalysisResult<Self> {
        table.require_column(group_column)?;
        table.require_column(value_column)?;

        let labels = table.text_column(group_column)?;
        let values = table.numeric_column(value_column)?;

        // Sorted grouping; discovery order is irrelevant
        let mut grouped: BTreeMap<String, Vec<f64>> = BTreeMap::new();
        for (label, value) in labels.into_iter().zip(values) {
            grouped.entry(label).or_default().push(value);
        }

        let n_total = grouped.values().map(Vec::len).sum();
        let groups = grouped
            .into_iter()
            .map(|(label, values)| GroupData { label, values })
            .collect();

        Ok(Self { groups, n_total })
    }

    /// Groups in sorted label order
    pub fn groups(&self) -> &[GroupData] {
        &self.groups
    }

    /// Number of groups
    pub fn n_groups(&self) -> usize {
        self.groups.len()
    }

    /// Total number of observations
    pub fn n_total(&self) -> usize {
        self.n_total
    }

    /// Group labels in sorted order
    pub fn labels(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.label.as_str()).collect()
    }

    /// Observation slices in group order, as the statistical layer expects
    pub fn value_slices(&self) -> Vec<&[f64]> {
        self.groups.iter().map(|g| g.values.as_slice()).collect()
    }

    /// Minimum and maximum over all observations
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut iter = self.groups.iter().flat_map(|g| g.values.iter().copied());
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some((min, max))
    }

    /// Check the minimums required for variance-based tests: at least two
    /// groups, each with at least two observations
    pub fn validate(&self) -> AnalysisResult<()> {
        if self.groups.len() < 2 {
            return Err(AnovaError::NotEnoughGroups {
                found: self.groups.len(),
            });
        }
        for group in &self.groups {
            if group.values.len() < 2 {
                return Err(AnovaError::GroupTooSmall {
                    label: group.label.clone(),
                    count: group.values.len(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use varia_io::Cell;

    fn table(rows: &[(&str, f64)]) -> Table {
        Table::new(
            vec!["Group".into(), "Value".into()],
            rows.iter()
                .map(|(g, v)| vec![Cell::Text(g.to_string()), Cell::Number(*v)])
                .collect(),
        )
    }

    #[test]
    fn test_grouping_sorts_labels() {
        let table = table(&[("B", 20.0), ("A", 10.0), ("B", 22.0), ("A", 12.0)]);
        let dataset = Dataset::from_table(&table, "Group", "Value").unwrap();

        assert_eq!(dataset.labels(), vec!["A", "B"]);
        assert_eq!(dataset.groups()[0].values, vec![10.0, 12.0]);
        assert_eq!(dataset.groups()[1].values, vec![20.0, 22.0]);
        assert_eq!(dataset.n_total(), 4);
    }

    #[test]
    fn test_missing_column_is_schema_error() {
        let table = table(&[("A", 1.0)]);
        let err = Dataset::from_table(&table, "Treatment", "Value").unwrap_err();
        assert!(matches!(
            err,
            AnovaError::Table(varia_io::TableError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn test_non_numeric_value_column() {
        let table = Table::new(
            vec!["Group".into(), "Value".into()],
            vec![
                vec![Cell::Text("A".into()), Cell::Number(1.0)],
                vec![Cell::Text("A".into()), Cell::Text("n/a".into())],
            ],
        );
        let err = Dataset::from_table(&table, "Group", "Value").unwrap_err();
        assert!(matches!(
            err,
            AnovaError::Table(varia_io::TableError::NonNumeric { row: 2, .. })
        ));
    }

    #[test]
    fn test_validate_minimums() {
        let one_group = table(&[("A", 1.0), ("A", 2.0)]);
        let dataset = Dataset::from_table(&one_group, "Group", "Value").unwrap();
        assert!(matches!(
            dataset.validate(),
            Err(AnovaError::NotEnoughGroups { found: 1 })
        ));

        let tiny_group = table(&[("A", 1.0), ("A", 2.0), ("B", 3.0)]);
        let dataset = Dataset::from_table(&tiny_group, "Group", "Value").unwrap();
        match dataset.validate() {
            Err(AnovaError::GroupTooSmall { label, count }) => {
                assert_eq!(label, "B");
                assert_eq!(count, 1);
            }
            other => panic!("expected GroupTooSmall, got {other:?}"),
        }
    }

    #[test]
    fn test_value_range() {
        let table = table(&[("A", 3.0), ("B", -1.0), ("A", 7.0)]);
        let dataset = Dataset::from_table(&table, "Group", "Value").unwrap();
        assert_eq!(dataset.value_range(), Some((-1.0, 7.0)));
    }
}
