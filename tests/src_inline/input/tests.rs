use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;

use super::{InputError, load_table};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("filmscope_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_file(path: &Path, contents: &str) {
    let mut f = BufWriter::new(File::create(path).unwrap());
    f.write_all(contents.as_bytes()).unwrap();
}

fn write_gz(path: &Path, contents: &str) {
    let file = File::create(path).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(contents.as_bytes()).unwrap();
    encoder.finish().unwrap();
}

const CATALOG: &str = "\
title,year,director,genres,themes,histogram\n\
Seven Samurai,1954,Akira Kurosawa,\"Action, Drama\",\"honor, sacrifice\",\"[0, 0, 0, 1, 2, 4, 9, 20, 41, 60]\"\n\
Ran,1985,Akira Kurosawa,Drama,betrayal,\"[0, 0, 0, 0, 1, 3, 8, 18, 30, 22]\"\n\
Mystery Film,1999,,,,\n\
Broken Histogram,2005,Someone,Comedy,luck,not-a-list\n\
";

#[test]
fn test_load_table_plain() {
    let dir = make_temp_dir();
    let path = dir.join("movies.csv");
    write_file(&path, CATALOG);

    let table = load_table(&path).unwrap();
    assert_eq!(table.records.len(), 4);

    let samurai = &table.records[0];
    assert_eq!(samurai.year, 1954);
    assert_eq!(samurai.decade, 1950);
    assert_eq!(samurai.director, "Akira Kurosawa");
    assert_eq!(samurai.genres, vec!["Action", "Drama"]);
    assert_eq!(samurai.themes, vec!["honor", "sacrifice"]);
    assert_eq!(samurai.histogram.len(), 10);
    assert_eq!(samurai.histogram[9], 60);

    let mystery = &table.records[2];
    assert!(mystery.director.is_empty());
    assert!(mystery.genres.is_empty());
    assert!(mystery.themes.is_empty());
    assert!(mystery.histogram.is_empty());

    // malformed histogram text normalizes to unrated, not an error
    let broken = &table.records[3];
    assert!(broken.histogram.is_empty());
    assert_eq!(broken.genres, vec!["Comedy"]);
}

#[test]
fn test_load_table_gz_matches_plain() {
    let dir = make_temp_dir();
    let plain = dir.join("movies.csv");
    let gz = dir.join("movies.csv.gz");
    write_file(&plain, CATALOG);
    write_gz(&gz, CATALOG);

    let from_plain = load_table(&plain).unwrap();
    let from_gz = load_table(&gz).unwrap();
    assert_eq!(from_plain.records, from_gz.records);
}

#[test]
fn test_load_table_collects_all_bad_years() {
    let dir = make_temp_dir();
    let path = dir.join("movies.csv");
    write_file(
        &path,
        "title,year,director,genres,themes,histogram\n\
         Good,1990,A,,,\n\
         Bad One,199O,B,,,\n\
         Bad Two,,C,,,\n",
    );

    let err = load_table(&path).unwrap_err();
    match err {
        InputError::InvalidRows(errors) => {
            assert_eq!(errors.len(), 2);
            assert_eq!(errors[0].row, 3);
            assert_eq!(errors[0].field, "year");
            assert_eq!(errors[0].value, "199O");
            assert_eq!(errors[1].row, 4);
            assert_eq!(errors[1].value, "");
        }
        other => panic!("expected InvalidRows, got {other:?}"),
    }
}

#[test]
fn test_load_table_header_only_is_empty() {
    let dir = make_temp_dir();
    let path = dir.join("movies.csv");
    write_file(&path, "title,year,director,genres,themes,histogram\n");

    let err = load_table(&path).unwrap_err();
    assert!(matches!(err, InputError::EmptyTable));
}

#[test]
fn test_load_table_missing_file() {
    let dir = make_temp_dir();
    let err = load_table(&dir.join("absent.csv")).unwrap_err();
    assert!(matches!(err, InputError::Io(_)));
}

#[test]
fn test_load_table_ignores_unknown_columns() {
    let dir = make_temp_dir();
    let path = dir.join("movies.csv");
    write_file(
        &path,
        "title,year,runtime,director,genres\n\
         Short,2010,90,D,Documentary\n",
    );

    let table = load_table(&path).unwrap();
    assert_eq!(table.records.len(), 1);
    let record = &table.records[0];
    assert_eq!(record.year, 2010);
    assert_eq!(record.genres, vec!["Documentary"]);
    // absent columns normalize to empty, not an error
    assert!(record.themes.is_empty());
    assert!(record.histogram.is_empty());
}
