use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Array, AsArray};
use arrow::compute::cast;
use arrow::datatypes::DataType;
use arrow::error::ArrowError;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::errors::ParquetError;
use serde_json::{Map, Value as JsonValue};

use super::error::{CatalogError, Result};
use super::model::{Catalog, Record, ARTIST_COLUMN, SONG_COLUMN};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a song list from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row; `Artist` and `Song` columns required
/// * `.json`    – `[{ "Artist": "...", "Song": "...", ...extra }, ...]`
/// * `.parquet` – `Artist` and `Song` columns, any other columns kept as extra
///
/// Blank cells always come back as empty strings. Nothing is returned unless
/// every row loads.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => {
            return Err(CatalogError::UnsupportedFormat {
                extension: other.to_string(),
            })
        }
    };

    let catalog = Catalog::from_records(records);
    log::info!(
        "Loaded {} songs from {} (extra columns {:?})",
        catalog.len(),
        path.display(),
        catalog.column_names
    );
    Ok(catalog)
}

fn unreadable(path: &Path, source: std::io::Error) -> CatalogError {
    CatalogError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    }
}

/// Open the source, refusing anything that is not a readable file.
fn open_source(path: &Path) -> Result<File> {
    let file = File::open(path).map_err(|source| unreadable(path, source))?;
    let meta = file.metadata().map_err(|source| unreadable(path, source))?;
    if meta.is_dir() {
        return Err(unreadable(path, std::io::Error::other("is a directory")));
    }
    Ok(file)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, `Artist` and `Song` required.
/// Short rows are accepted; their missing cells become empty strings.
/// Rows with more cells than the header are rejected.
fn load_csv(path: &Path) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(open_source(path)?);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| csv_error(path, e, None))?
        .iter()
        .map(|h| h.to_string())
        .collect();
    let artist_idx = column_index(&headers, ARTIST_COLUMN)?;
    let song_idx = column_index(&headers, SONG_COLUMN)?;

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let row = result.map_err(|e| csv_error(path, e, Some(row_no)))?;
        if row.len() > headers.len() {
            return Err(CatalogError::MalformedRecord {
                row: row_no,
                reason: format!("expected {} fields, found {}", headers.len(), row.len()),
            });
        }

        let mut extra = BTreeMap::new();
        for (col_idx, col_name) in headers.iter().enumerate() {
            if col_idx == artist_idx || col_idx == song_idx {
                continue;
            }
            extra.insert(col_name.clone(), row.get(col_idx).unwrap_or("").to_string());
        }

        records.push(Record {
            artist: row.get(artist_idx).unwrap_or("").to_string(),
            song: row.get(song_idx).unwrap_or("").to_string(),
            extra,
        });
    }

    Ok(records)
}

/// I/O failures mean the source is unreadable; anything else is bad content.
fn csv_error(path: &Path, err: csv::Error, row: Option<usize>) -> CatalogError {
    if !err.is_io_error() {
        return match row {
            Some(row) => CatalogError::MalformedRecord {
                row,
                reason: err.to_string(),
            },
            None => CatalogError::Csv(err),
        };
    }
    match err.into_kind() {
        csv::ErrorKind::Io(source) => unreadable(path, source),
        other => CatalogError::MalformedRecord {
            row: row.unwrap_or(0),
            reason: format!("{other:?}"),
        },
    }
}

fn column_index(headers: &[String], column: &'static str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or(CatalogError::MissingColumn { column })
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, as written by `df.to_json(orient='records')`.
/// `null` cells become empty strings; numbers and booleans become their text.
fn load_json(path: &Path) -> Result<Vec<Record>> {
    let text =
        std::io::read_to_string(open_source(path)?).map_err(|source| unreadable(path, source))?;
    let root: JsonValue = serde_json::from_str(&text)?;

    let rows = root.as_array().ok_or_else(|| CatalogError::MalformedRecord {
        row: 0,
        reason: "expected a top-level JSON array".to_string(),
    })?;

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let obj = row.as_object().ok_or_else(|| CatalogError::MalformedRecord {
                row: i,
                reason: "not a JSON object".to_string(),
            })?;
            json_record(obj, i)
        })
        .collect()
}

fn json_record(obj: &Map<String, JsonValue>, row: usize) -> Result<Record> {
    let required = |column: &str| -> Result<String> {
        let value = obj.get(column).ok_or_else(|| CatalogError::MalformedRecord {
            row,
            reason: format!("missing '{column}'"),
        })?;
        json_scalar_text(value).ok_or_else(|| CatalogError::MalformedRecord {
            row,
            reason: format!("'{column}' is not a text value"),
        })
    };

    let artist = required(ARTIST_COLUMN)?;
    let song = required(SONG_COLUMN)?;

    let extra = obj
        .iter()
        .filter(|(key, _)| key.as_str() != ARTIST_COLUMN && key.as_str() != SONG_COLUMN)
        .map(|(key, val)| {
            let text = json_scalar_text(val).unwrap_or_else(|| val.to_string());
            (key.clone(), text)
        })
        .collect();

    Ok(Record { artist, song, extra })
}

fn json_scalar_text(val: &JsonValue) -> Option<String> {
    match val {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Null => Some(String::new()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        JsonValue::Array(_) | JsonValue::Object(_) => None,
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet song list written by Pandas or Polars.
///
/// Every column is cast to UTF-8 text; nulls become empty strings.
fn load_parquet(path: &Path) -> Result<Vec<Record>> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(open_source(path)?)
        .map_err(|e| parquet_error(path, e))?;

    let schema = builder.schema().clone();
    let artist_idx = schema
        .index_of(ARTIST_COLUMN)
        .map_err(|_| CatalogError::MissingColumn { column: ARTIST_COLUMN })?;
    let song_idx = schema
        .index_of(SONG_COLUMN)
        .map_err(|_| CatalogError::MissingColumn { column: SONG_COLUMN })?;

    let reader = builder.build().map_err(|e| parquet_error(path, e))?;
    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.map_err(|e| arrow_error(path, e))?;

        let text_columns: Vec<(String, Arc<dyn Array>)> = schema
            .fields()
            .iter()
            .zip(batch.columns())
            .map(|(field, col)| -> Result<(String, Arc<dyn Array>)> {
                Ok((field.name().clone(), cast(col, &DataType::Utf8)?))
            })
            .collect::<Result<_>>()?;

        for row in 0..batch.num_rows() {
            let mut extra = BTreeMap::new();
            for (col_idx, (name, col)) in text_columns.iter().enumerate() {
                if col_idx == artist_idx || col_idx == song_idx {
                    continue;
                }
                extra.insert(name.clone(), text_cell(col, row));
            }

            records.push(Record {
                artist: text_cell(&text_columns[artist_idx].1, row),
                song: text_cell(&text_columns[song_idx].1, row),
                extra,
            });
        }
    }

    Ok(records)
}

/// Footer and page reads surface I/O failures as boxed external errors.
fn parquet_error(path: &Path, err: ParquetError) -> CatalogError {
    match err {
        ParquetError::External(inner) => match inner.downcast::<std::io::Error>() {
            Ok(source) => unreadable(path, *source),
            Err(inner) => CatalogError::Parquet(ParquetError::External(inner)),
        },
        other => CatalogError::Parquet(other),
    }
}

fn arrow_error(path: &Path, err: ArrowError) -> CatalogError {
    match err {
        ArrowError::IoError(_, source) => unreadable(path, source),
        ArrowError::ExternalError(inner) => match inner.downcast::<std::io::Error>() {
            Ok(source) => unreadable(path, *source),
            Err(inner) => CatalogError::Arrow(ArrowError::ExternalError(inner)),
        },
        other => CatalogError::Arrow(other),
    }
}

/// Read one cell of a column already cast to `Utf8`.
fn text_cell(col: &Arc<dyn Array>, row: usize) -> String {
    if col.is_null(row) {
        return String::new();
    }
    col.as_string::<i32>().value(row).to_string()
}
