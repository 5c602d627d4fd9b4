//! Load, refresh, and save book lists on disk.

use hoard_core::{CatalogFile, CoreError, Rating, RatingSource, RatingTable, plan_targets};
use pretty_assertions::assert_eq;

const FULL_LIST: &str = r#"[
    {
        "title": "Temeraire",
        "author": "Naomi Novik",
        "url": "https://www.goodreads.com/book/show/28876.His_Majesty_s_Dragon",
        "rating": "4",
        "r_count": "100"
    },
    {
        "title": "Dragon Serial",
        "author": "Anon",
        "url": null,
        "vendors": {
            "rr": {
                "url": "https://www.royalroad.com/fiction/4242/dragon-serial"
            }
        },
        "rating": "",
        "r_count": ""
    }
]
"#;

const CLUB_LIST: &str = r#"[
    {
        "title": "Temeraire",
        "url": "https://www.goodreads.com/book/show/28876.His_Majesty_s_Dragon?from_search=true",
        "rating": "4",
        "r_count": "100",
        "month": "March"
    }
]
"#;

fn write(dir: &tempfile::TempDir, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, text).unwrap();
    path
}

#[test]
fn targets_span_lists_and_dedupe() {
    let dir = tempfile::tempdir().unwrap();
    let full = CatalogFile::load(write(&dir, "books(full-list).json", FULL_LIST)).unwrap();
    let club = CatalogFile::load(write(&dir, "books(book-club).json", CLUB_LIST)).unwrap();

    let targets = plan_targets(full.books.iter().chain(club.books.iter()));
    assert_eq!(targets.len(), 2);
    assert_eq!(targets[0].source, RatingSource::Goodreads);
    assert_eq!(targets[1].source, RatingSource::RoyalRoad);
}

#[test]
fn refresh_rewrites_only_rating_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "books(book-club).json", CLUB_LIST);
    let mut club = CatalogFile::load(&path).unwrap();

    let mut ratings = RatingTable::new();
    ratings.insert(
        "https://www.goodreads.com/book/show/28876.His_Majesty_s_Dragon".into(),
        Rating::new(4.02, 131_553),
    );

    assert_eq!(club.apply(&ratings), 1);
    club.save().unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    let expected = CLUB_LIST
        .replace("\"rating\": \"4\"", "\"rating\": \"4.02\"")
        .replace("\"r_count\": \"100\"", "\"r_count\": \"131553\"");
    assert_eq!(written, expected);
}

#[test]
fn unchanged_list_reports_zero() {
    let dir = tempfile::tempdir().unwrap();
    let mut full = CatalogFile::load(write(&dir, "full.json", FULL_LIST)).unwrap();

    let mut ratings = RatingTable::new();
    ratings.insert(
        "https://www.goodreads.com/book/show/28876.His_Majesty_s_Dragon".into(),
        Rating::new(4.0, 100),
    );
    assert_eq!(full.apply(&ratings), 0);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CatalogFile::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, CoreError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}
