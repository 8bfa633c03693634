use std::collections::BTreeMap;

use crate::analysis::TOP_DIRECTORS;
use crate::analysis::counts::director_ranking;
use crate::input::MovieTable;
use crate::model::group::{GroupBy, GroupKey};
use crate::model::record::Record;

/// Explicit multi-map construction: key → member records, in a deterministic
/// group order (genres ascending, decades ascending, directors in rank
/// order). Empty groups are never materialized.
pub fn group_members(table: &MovieTable, group_by: GroupBy) -> Vec<(GroupKey, Vec<&Record>)> {
    match group_by {
        GroupBy::Genres => by_genre(table),
        GroupBy::Decades => by_decade(table),
        GroupBy::Directors => by_top_directors(table),
    }
}

fn by_genre(table: &MovieTable) -> Vec<(GroupKey, Vec<&Record>)> {
    let mut groups: BTreeMap<&str, Vec<&Record>> = BTreeMap::new();
    for record in &table.records {
        for genre in &record.genres {
            groups.entry(genre.as_str()).or_default().push(record);
        }
    }
    groups
        .into_iter()
        .map(|(genre, members)| (GroupKey::Genre(genre.to_string()), members))
        .collect()
}

fn by_decade(table: &MovieTable) -> Vec<(GroupKey, Vec<&Record>)> {
    let mut groups: BTreeMap<i32, Vec<&Record>> = BTreeMap::new();
    for record in &table.records {
        groups.entry(record.decade).or_default().push(record);
    }
    groups
        .into_iter()
        .map(|(decade, members)| (GroupKey::Decade(decade), members))
        .collect()
}

fn by_top_directors(table: &MovieTable) -> Vec<(GroupKey, Vec<&Record>)> {
    let ranking = director_ranking(table, TOP_DIRECTORS);
    let mut out = Vec::with_capacity(ranking.len());
    for (name, _count) in ranking {
        let members: Vec<&Record> = table
            .records
            .iter()
            .filter(|r| r.director == name)
            .collect();
        out.push((GroupKey::Director(name), members));
    }
    out
}
