//! Group trials by tree size and build the statistics table.
//!
//! Groups are positional: trial `i` belongs to group `i / TRIALS_PER_GROUP`.
//! The node count of each row is never used as a key.

use super::metrics::{summarize, Moments};
use crate::parser::schema::{StatsRow, TrialRecord};
use crate::utils::config::TRIALS_PER_GROUP;
use crate::utils::error::AggregateError;
use log::{debug, warn};

/// Statistics of one group of trials
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupStatistics {
    /// Mean node count of the group
    pub nodes: f64,
    pub height: Moments,
    pub insert_time: Moments,
    pub delete_time: Moments,

    /// Trials in the group (short only for a trailing partial group)
    pub trials: usize,
}

impl GroupStatistics {
    /// Build the table row, appending log2(n) and n*log2(n)
    ///
    /// **Private** - caller has checked that `nodes > 0`
    fn into_row(self) -> StatsRow {
        let log_nodes = self.nodes.log2();
        StatsRow {
            nodes: self.nodes,
            height_mean: self.height.mean,
            height_variance: self.height.variance,
            insert_time_mean: self.insert_time.mean,
            insert_time_variance: self.insert_time.variance,
            delete_time_mean: self.delete_time.mean,
            delete_time_variance: self.delete_time.variance,
            log_nodes,
            n_log_n: self.nodes * log_nodes,
        }
    }
}

/// Statistics table, one row per tree size
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsTable {
    pub rows: Vec<StatsRow>,
}

impl StatsTable {
    pub fn new(rows: Vec<StatsRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sort rows by ascending node count
    ///
    /// The sort is stable, so sorting an already sorted table is a no-op.
    pub fn sort_by_nodes(&mut self) {
        self.rows.sort_by(|a, b| a.nodes.total_cmp(&b.nodes));
    }

    /// Render the table as aligned text
    ///
    /// **Public** - for `--summary` output
    pub fn summary(&self) -> String {
        let mut out = format!(
            "{:>10} {:>12} {:>12} {:>14} {:>14} {:>14} {:>14} {:>10} {:>14}\n",
            "Nodes", "Height", "Height var", "Insert (s)", "Insert var", "Delete (s)", "Delete var",
            "log2(n)", "n*log2(n)"
        );
        for row in &self.rows {
            out.push_str(&format!(
                "{:>10.1} {:>12.3} {:>12.3} {:>14.6} {:>14.3e} {:>14.6} {:>14.3e} {:>10.3} {:>14.1}\n",
                row.nodes,
                row.height_mean,
                row.height_variance,
                row.insert_time_mean,
                row.insert_time_variance,
                row.delete_time_mean,
                row.delete_time_variance,
                row.log_nodes,
                row.n_log_n
            ));
        }
        out
    }
}

/// Split trials into consecutive groups of `TRIALS_PER_GROUP`
///
/// A trailing partial group is kept as is.
pub fn group_trials(trials: &[TrialRecord]) -> impl Iterator<Item = &[TrialRecord]> {
    trials.chunks(TRIALS_PER_GROUP)
}

/// Calculate mean/variance of every measurement in one group
///
/// **Public** - useful for inspecting a single tree size
pub fn summarize_group(trials: &[TrialRecord]) -> GroupStatistics {
    GroupStatistics {
        nodes: summarize(&column(trials, |t| t.node_count)).mean,
        height: summarize(&column(trials, |t| t.height)),
        insert_time: summarize(&column(trials, |t| t.insert_time)),
        delete_time: summarize(&column(trials, |t| t.delete_time)),
        trials: trials.len(),
    }
}

fn column(trials: &[TrialRecord], field: impl Fn(&TrialRecord) -> f64) -> Vec<f64> {
    trials.iter().map(field).collect()
}

/// Aggregate trials into the statistics table
///
/// **Public** - main entry point of the aggregation stage
///
/// # Returns
/// One row per group, sorted by ascending node count, with the
/// `Log(Nodes)` and `n*Log(n)` columns filled in.
///
/// # Errors
/// * `AggregateError::EmptyInput` - no trials
/// * `AggregateError::NonPositiveNodes` - a group's mean node count is not > 0
pub fn aggregate(trials: &[TrialRecord]) -> Result<StatsTable, AggregateError> {
    if trials.is_empty() {
        return Err(AggregateError::EmptyInput);
    }

    let remainder = trials.len() % TRIALS_PER_GROUP;
    if remainder != 0 {
        warn!(
            "{} trials is not a multiple of {}; last group has {} trials",
            trials.len(),
            TRIALS_PER_GROUP,
            remainder
        );
    }

    let mut groups = Vec::new();
    for (index, group) in group_trials(trials).enumerate() {
        check_group_key(index, group);

        let stats = summarize_group(group);
        debug!(
            "Group {}: {} trials, {} nodes, height {:.3}",
            index, stats.trials, stats.nodes, stats.height.mean
        );
        groups.push((index, stats));
    }

    groups.sort_by(|(_, a), (_, b)| a.nodes.total_cmp(&b.nodes));

    let mut rows = Vec::with_capacity(groups.len());
    for (index, stats) in groups {
        if !(stats.nodes > 0.0 && stats.nodes.is_finite()) {
            return Err(AggregateError::NonPositiveNodes {
                group: index,
                nodes: stats.nodes,
            });
        }
        rows.push(stats.into_row());
    }

    Ok(StatsTable::new(rows))
}

/// Warn when a group mixes tree sizes
///
/// **Private** - grouping stays positional; this only reports a mismatch
fn check_group_key(index: usize, group: &[TrialRecord]) {
    let Some(first) = group.first() else {
        return;
    };

    if let Some(other) = group.iter().find(|t| t.node_count != first.node_count) {
        warn!(
            "Group {} mixes node counts {} and {}; trial files may be misordered",
            index, first.node_count, other.node_count
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trials(nodes: f64, heights: &[f64]) -> Vec<TrialRecord> {
        heights
            .iter()
            .map(|&h| TrialRecord::new(nodes, h, 0.01, 0.02))
            .collect()
    }

    #[test]
    fn test_two_groups() {
        let mut data = trials(50.0, &[10.0; 100]);
        let alternating: Vec<f64> = (0..100).map(|i| if i % 2 == 0 { 20.0 } else { 30.0 }).collect();
        data.extend(trials(200.0, &alternating));

        let table = aggregate(&data).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].nodes, 50.0);
        assert_eq!(table.rows[0].height_mean, 10.0);
        assert_eq!(table.rows[0].height_variance, 0.0);
        assert_eq!(table.rows[1].nodes, 200.0);
        assert_eq!(table.rows[1].height_mean, 25.0);
        assert_eq!(table.rows[1].height_variance, 25.0);
    }

    #[test]
    fn test_partial_last_group() {
        let mut data = trials(10.0, &[1.0; 100]);
        data.extend(trials(20.0, &[2.0, 4.0]));

        let table = aggregate(&data).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1].nodes, 20.0);
        assert_eq!(table.rows[1].height_mean, 3.0);
        assert_eq!(table.rows[1].height_variance, 1.0);
    }

    #[test]
    fn test_sorted_by_nodes() {
        // lexicographic file order puts 1000 before 200
        let mut data = trials(1000.0, &[5.0; 100]);
        data.extend(trials(200.0, &[3.0; 100]));

        let table = aggregate(&data).unwrap();
        assert_eq!(table.rows[0].nodes, 200.0);
        assert_eq!(table.rows[1].nodes, 1000.0);
    }

    #[test]
    fn test_derived_columns() {
        let mut data = trials(1.0, &[0.0; 100]);
        data.extend(trials(1024.0, &[10.0; 100]));

        let table = aggregate(&data).unwrap();

        assert_eq!(table.rows[0].log_nodes, 0.0);
        assert_eq!(table.rows[0].n_log_n, 0.0);
        assert_eq!(table.rows[1].log_nodes, 10.0);
        assert_eq!(table.rows[1].n_log_n, 10240.0);
    }

    #[test]
    fn test_non_positive_nodes() {
        let data = trials(0.0, &[1.0; 100]);
        assert_eq!(
            aggregate(&data),
            Err(AggregateError::NonPositiveNodes { group: 0, nodes: 0.0 })
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(aggregate(&[]), Err(AggregateError::EmptyInput));
    }

    #[test]
    fn test_sort_idempotent() {
        let mut data = trials(300.0, &[1.0; 100]);
        data.extend(trials(100.0, &[1.0; 100]));
        data.extend(trials(200.0, &[1.0; 100]));

        let mut table = aggregate(&data).unwrap();
        let once = table.clone();
        table.sort_by_nodes();

        assert_eq!(table, once);
    }

    #[test]
    fn test_summary_has_row_per_group() {
        let table = aggregate(&trials(64.0, &[6.0; 100])).unwrap();
        let summary = table.summary();

        assert_eq!(summary.lines().count(), 2);
        assert!(summary.contains("64.0"));
    }
}
