use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use clap::Parser;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

/// Write a demonstration song list as CSV and Parquet.
#[derive(Parser, Debug)]
#[command(name = "generate_sample")]
struct Args {
    /// Directory receiving SongList.csv and SongList.parquet
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
}

/// One row in the DJ's export format.
#[derive(Debug, Serialize)]
struct SampleRow<'a> {
    #[serde(rename = "ID")]
    id: i64,
    #[serde(rename = "Artist")]
    artist: &'a str,
    #[serde(rename = "Song")]
    song: &'a str,
    #[serde(rename = "Path")]
    path: String,
}

const SONGS: &[(&str, &str)] = &[
    ("Bon Jovi", "Livin' on a Prayer"),
    ("Bon Jovi", "It's My Life"),
    ("Journey", "Don't Stop Believin'"),
    ("Queen", "Bohemian Rhapsody"),
    ("Queen", "Don't Stop Me Now"),
    ("ABBA", "Dancing Queen"),
    ("ABBA", "Waterloo"),
    ("Whitney Houston", "I Wanna Dance with Somebody"),
    ("Toto", "Africa"),
    ("Weezer", "Africa"),
    ("Beyoncé", "Single Ladies (Put a Ring on It)"),
    ("R.E.M.", "Losing My Religion"),
    ("AC/DC", "You Shook Me All Night Long"),
    ("Die Ärzte", "Schrei nach Liebe"),
    ("Rednex", "Cotton Eye Joe"),
    ("Unknown Artist", ""),
];

fn sample_rows() -> Vec<SampleRow<'static>> {
    SONGS
        .iter()
        .zip(1i64..)
        .map(|(&(artist, song), id)| SampleRow {
            id,
            artist,
            song,
            path: format!("/karaoke/{id:05}.cdg"),
        })
        .collect()
}

fn write_csv(path: &Path, rows: &[SampleRow<'_>]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    for row in rows {
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn write_parquet(path: &Path, rows: &[SampleRow<'_>]) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("ID", DataType::Int64, false),
        Field::new("Artist", DataType::Utf8, false),
        Field::new("Song", DataType::Utf8, true),
        Field::new("Path", DataType::Utf8, false),
    ]));

    let ids = Int64Array::from(rows.iter().map(|r| r.id).collect::<Vec<_>>());
    let artists = StringArray::from(rows.iter().map(|r| r.artist).collect::<Vec<_>>());
    // Empty titles are stored as nulls to exercise the loader's null handling.
    let songs = StringArray::from(
        rows.iter()
            .map(|r| (!r.song.is_empty()).then_some(r.song))
            .collect::<Vec<Option<&str>>>(),
    );
    let paths = StringArray::from(rows.iter().map(|r| r.path.as_str()).collect::<Vec<_>>());

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(ids),
            Arc::new(artists),
            Arc::new(songs),
            Arc::new(paths),
        ],
    )
    .context("building record batch")?;

    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let rows = sample_rows();

    let csv_path = args.out_dir.join("SongList.csv");
    write_csv(&csv_path, &rows)?;
    log::info!("Wrote {} songs to {}", rows.len(), csv_path.display());

    let parquet_path = args.out_dir.join("SongList.parquet");
    write_parquet(&parquet_path, &rows)?;
    log::info!("Wrote {} songs to {}", rows.len(), parquet_path.display());

    println!(
        "Wrote {} songs to {} and {}",
        rows.len(),
        csv_path.display(),
        parquet_path.display()
    );
    Ok(())
}
