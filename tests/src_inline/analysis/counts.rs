use std::path::PathBuf;

use super::{director_ranking, genre_distribution, theme_frequencies, yearly_trends};
use crate::input::MovieTable;
use crate::model::record::Record;

fn record(year: i32, director: &str, genres: &[&str], themes: &[&str]) -> Record {
    Record {
        year,
        decade: year.div_euclid(10) * 10,
        director: director.to_string(),
        genres: genres.iter().map(|s| s.to_string()).collect(),
        themes: themes.iter().map(|s| s.to_string()).collect(),
        histogram: vec![],
    }
}

fn table(records: Vec<Record>) -> MovieTable {
    MovieTable {
        path: PathBuf::from("test.csv"),
        records,
    }
}

#[test]
fn test_genre_distribution_counts_and_order() {
    let t = table(vec![
        record(1990, "A", &["Drama", "Crime"], &[]),
        record(1991, "B", &["Drama"], &[]),
        record(1992, "C", &["Action"], &[]),
        record(1993, "D", &[], &[]),
    ]);
    // descending count, tie broken by ascending name
    assert_eq!(
        genre_distribution(&t),
        vec![
            ("Drama".to_string(), 2),
            ("Action".to_string(), 1),
            ("Crime".to_string(), 1),
        ]
    );
}

#[test]
fn test_empty_genre_record_contributes_to_no_group() {
    let t = table(vec![record(1990, "A", &[], &[])]);
    assert!(genre_distribution(&t).is_empty());
}

#[test]
fn test_theme_frequencies() {
    let t = table(vec![
        record(1990, "A", &[], &["war", "honor"]),
        record(1991, "B", &[], &["war"]),
    ]);
    assert_eq!(
        theme_frequencies(&t),
        vec![("war".to_string(), 2), ("honor".to_string(), 1)]
    );
}

#[test]
fn test_yearly_trends_ascending_by_year() {
    let t = table(vec![
        record(2001, "A", &[], &[]),
        record(1990, "B", &[], &[]),
        record(2001, "C", &[], &[]),
        record(1995, "D", &[], &[]),
    ]);
    assert_eq!(
        yearly_trends(&t),
        vec![(1990, 1), (1995, 1), (2001, 2)]
    );
}

#[test]
fn test_director_ranking_descending() {
    let t = table(vec![
        record(1990, "B", &[], &[]),
        record(1991, "A", &[], &[]),
        record(1992, "A", &[], &[]),
    ]);
    assert_eq!(
        director_ranking(&t, 10),
        vec![("A".to_string(), 2), ("B".to_string(), 1)]
    );
}

#[test]
fn test_director_ranking_skips_empty_names() {
    let t = table(vec![
        record(1990, "", &[], &[]),
        record(1991, "A", &[], &[]),
    ]);
    assert_eq!(director_ranking(&t, 10), vec![("A".to_string(), 1)]);
}

#[test]
fn test_director_ranking_tie_break_by_input_order() {
    // 11 directors, counts 10,9,...,2,1,1 with the two count-1 directors tied.
    // D10 appears in the input before D11, so the cut at ten keeps D10.
    let mut records = Vec::new();
    for (idx, count) in [10usize, 9, 8, 7, 6, 5, 4, 3, 2, 1, 1].into_iter().enumerate() {
        let name = format!("D{}", idx + 1);
        for i in 0..count {
            records.push(record(1990 + i as i32, &name, &[], &[]));
        }
    }
    let t = table(records);

    let ranking = director_ranking(&t, 10);
    assert_eq!(ranking.len(), 10);
    let names: Vec<&str> = ranking.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(
        names,
        vec!["D1", "D2", "D3", "D4", "D5", "D6", "D7", "D8", "D9", "D10"]
    );
    assert!(!names.contains(&"D11"));
    assert_eq!(ranking[0].1, 10);
    assert_eq!(ranking[9].1, 1);
}

#[test]
fn test_director_ranking_limit_larger_than_pool() {
    let t = table(vec![record(1990, "A", &[], &[])]);
    assert_eq!(director_ranking(&t, 10).len(), 1);
}
