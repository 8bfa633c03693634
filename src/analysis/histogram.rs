use crate::analysis::groups::group_members;
use crate::input::MovieTable;
use crate::model::group::{GroupBy, GroupKey};
use crate::model::record::{HISTOGRAM_BUCKETS, Record};

/// Element-wise mean of member histograms for one group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupAverage {
    pub key: GroupKey,
    pub members: usize,
    pub average: [f64; HISTOGRAM_BUCKETS],
}

/// Averages per group along the requested axis. Group order follows
/// `group_members`; a table with no matching groups yields an empty vector,
/// not an error.
pub fn average_histograms(table: &MovieTable, group_by: GroupBy) -> Vec<GroupAverage> {
    group_members(table, group_by)
        .into_iter()
        .map(|(key, members)| GroupAverage {
            key,
            members: members.len(),
            average: average_of(&members),
        })
        .collect()
}

/// Average for a single key, or None if that group does not exist.
pub fn average_histogram(
    table: &MovieTable,
    group_by: GroupBy,
    key: &GroupKey,
) -> Option<[f64; HISTOGRAM_BUCKETS]> {
    average_histograms(table, group_by)
        .into_iter()
        .find(|g| g.key == *key)
        .map(|g| g.average)
}

/// Pure reduction: sum histograms element-wise and divide by the member
/// count. Short histograms count as zero in the missing buckets; anything
/// past bucket 10 is ignored.
pub fn average_of(members: &[&Record]) -> [f64; HISTOGRAM_BUCKETS] {
    let mut average = [0.0f64; HISTOGRAM_BUCKETS];
    if members.is_empty() {
        return average;
    }

    let mut sums = [0u64; HISTOGRAM_BUCKETS];
    for record in members {
        for (bucket, &count) in record.histogram.iter().take(HISTOGRAM_BUCKETS).enumerate() {
            sums[bucket] += count as u64;
        }
    }
    for bucket in 0..HISTOGRAM_BUCKETS {
        average[bucket] = sums[bucket] as f64 / members.len() as f64;
    }
    average
}

#[cfg(test)]
#[path = "../../tests/src_inline/analysis/histogram.rs"]
mod tests;
