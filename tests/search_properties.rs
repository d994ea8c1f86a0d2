use std::fs::{self, File};
use std::sync::Arc;

use arrow::array::{Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use tempfile::TempDir;

use karaoke_search::{load_catalog, search, Catalog, CatalogCache, CatalogError, Record, Scope};

fn library() -> Catalog {
    Catalog::from_records(vec![
        Record::new("Bon Jovi", "Livin on a Prayer"),
        Record::new("Bon Jovi", "It's My Life"),
        Record::new("Queen", "Don't Stop Me Now"),
        Record::new("Journey", "Don't Stop Believin'"),
        Record::new("A.C.", "X"),
        Record::new("Die Ärzte", "Straße"),
        Record::new("Unknown", ""),
        Record::new("Queen", "Don't Stop Me Now"),
    ])
}

const QUERIES: &[&str] = &[
    "bon", "BON", "don't stop", "queen now", "a*c", "a.c.", "STRASSE", "ärzte", "x", "zzz", "o",
];

fn positions(catalog: &Catalog, raw: &str, scope: Scope) -> Vec<usize> {
    let result = search(catalog, raw, scope);
    result
        .iter()
        .map(|rec| {
            catalog
                .records()
                .iter()
                .position(|r| std::ptr::eq(r, rec))
                .unwrap()
        })
        .collect()
}

#[test]
fn empty_query_returns_catalog_unchanged() {
    let catalog = library();
    for scope in Scope::ALL {
        let result = search(&catalog, "", scope);
        let rows: Vec<&Record> = result.iter().collect();
        let all: Vec<&Record> = catalog.records().iter().collect();
        assert_eq!(rows, all);
    }
}

#[test]
fn filtering_never_adds_rows_and_keeps_order() {
    let catalog = library();
    for scope in Scope::ALL {
        for q in QUERIES {
            let pos = positions(&catalog, q, scope);
            assert!(pos.len() <= catalog.len());
            assert!(pos.windows(2).all(|w| w[0] < w[1]), "{q:?} {scope:?}: {pos:?}");
        }
    }
}

#[test]
fn reapplying_a_query_is_a_no_op() {
    let catalog = library();
    for scope in Scope::ALL {
        for q in QUERIES {
            let once = search(&catalog, q, scope);
            let narrowed = once.to_catalog();
            let twice = search(&narrowed, q, scope);
            let a: Vec<&Record> = once.iter().collect();
            let b: Vec<&Record> = twice.iter().collect();
            assert_eq!(a, b, "{q:?} {scope:?}");
        }
    }
}

#[test]
fn token_and_field_or() {
    let catalog = library();
    let result = search(&catalog, "Bon Prayer", Scope::All);
    assert_eq!(result.len(), 1);
    assert_eq!(result.rows()[0].song, "Livin on a Prayer");

    // Both duplicates match.
    assert_eq!(search(&catalog, "queen now", Scope::All).len(), 2);
    assert_eq!(search(&catalog, "queen now", Scope::ArtistOnly).len(), 0);
}

#[test]
fn unicode_case_fold() {
    let catalog = library();
    assert_eq!(search(&catalog, "strasse", Scope::SongOnly).len(), 1);
    assert_eq!(search(&catalog, "ÄRZTE", Scope::ArtistOnly).len(), 1);
}

#[test]
fn literal_matching_and_empty_fields() {
    let catalog = library();
    assert!(search(&catalog, "A*C", Scope::All).is_empty());
    assert_eq!(search(&catalog, "a.c.", Scope::ArtistOnly).len(), 1);
    // "Unknown" has no song; only the artist side can match it.
    assert_eq!(positions(&catalog, "n", Scope::SongOnly), vec![0, 2, 3, 7]);
}

#[test]
fn csv_file_through_cache_and_search() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("SongList.csv");
    fs::write(
        &path,
        "ID,Artist,Song,Path\n\
         1,Bon Jovi,Livin on a Prayer,/k/1.cdg\n\
         2,Bon Jovi,It's My Life,/k/2.cdg\n\
         3,Toto,,/k/3.cdg\n",
    )
    .unwrap();

    let cache = CatalogCache::new(&path);
    let catalog = cache.get_or_load().unwrap();
    assert_eq!(catalog.column_names, vec!["ID", "Path"]);

    assert_eq!(search(&catalog, "Jovi", Scope::SongOnly).len(), 0);
    assert_eq!(search(&catalog, "Jovi", Scope::ArtistOnly).len(), 2);
    // The path column is never searched.
    assert!(search(&catalog, "cdg", Scope::All).is_empty());
}

#[test]
fn parquet_nulls_and_numbers_become_text() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("SongList.parquet");

    let schema = Arc::new(Schema::new(vec![
        Field::new("ID", DataType::Int64, false),
        Field::new("Artist", DataType::Utf8, false),
        Field::new("Song", DataType::Utf8, true),
    ]));
    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from(vec![10, 11])),
            Arc::new(StringArray::from(vec!["ABBA", "Queen"])),
            Arc::new(StringArray::from(vec![Some("Waterloo"), None])),
        ],
    )
    .unwrap();
    let mut writer = ArrowWriter::try_new(File::create(&path).unwrap(), schema, None).unwrap();
    writer.write(&batch).unwrap();
    writer.close().unwrap();

    let catalog = load_catalog(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.records()[0].song, "Waterloo");
    assert_eq!(catalog.records()[0].extra["ID"], "10");
    assert_eq!(catalog.records()[1].song, "");
    assert!(search(&catalog, "queen", Scope::SongOnly).is_empty());
}

#[test]
fn parquet_without_song_column() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("SongList.pq");

    let schema = Arc::new(Schema::new(vec![Field::new("Artist", DataType::Utf8, false)]));
    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![Arc::new(StringArray::from(vec!["ABBA"]))],
    )
    .unwrap();
    let mut writer = ArrowWriter::try_new(File::create(&path).unwrap(), schema, None).unwrap();
    writer.write(&batch).unwrap();
    writer.close().unwrap();

    assert!(matches!(
        load_catalog(&path).unwrap_err(),
        CatalogError::MissingColumn { column: "Song" }
    ));
}
