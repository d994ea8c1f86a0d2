use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Required column holding the performer name.
pub const ARTIST_COLUMN: &str = "Artist";
/// Required column holding the song title.
pub const SONG_COLUMN: &str = "Song";

// ---------------------------------------------------------------------------
// Record – one row of the song list
// ---------------------------------------------------------------------------

/// A single catalog entry (one row of the source table).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub artist: String,
    pub song: String,
    /// Remaining columns (ID, file path, ...): column_name → text.
    /// Never searched and never shown to patrons.
    pub extra: BTreeMap<String, String>,
}

impl Record {
    /// Build a record with no extra columns.
    pub fn new(artist: impl Into<String>, song: impl Into<String>) -> Self {
        Record {
            artist: artist.into(),
            song: song.into(),
            extra: BTreeMap::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog – the complete loaded song list
// ---------------------------------------------------------------------------

/// The full parsed song list plus case-folded search keys.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<Record>,
    /// `(artist, song)` per record, folded with [`fold_case`].
    folded: Vec<(String, String)>,
    /// Ordered list of extra column names (excludes Artist, Song).
    pub column_names: Vec<String>,
}

impl Catalog {
    /// Build the catalog and its folded keys from loaded records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut column_names_set: BTreeSet<String> = BTreeSet::new();
        for rec in &records {
            column_names_set.extend(rec.extra.keys().cloned());
        }
        let folded = records
            .iter()
            .map(|rec| (fold_case(&rec.artist), fold_case(&rec.song)))
            .collect();

        Catalog {
            records,
            folded,
            column_names: column_names_set.into_iter().collect(),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Folded `(artist, song)` keys, index-aligned with [`Catalog::records`].
    pub(crate) fn folded_keys(&self) -> &[(String, String)] {
        &self.folded
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Locale-independent case fold used on both sides of every comparison.
///
/// Full Unicode uppercase mapping, so `ß` folds to `SS` and `"strasse"`
/// finds `"Straße"`.
pub fn fold_case(s: &str) -> String {
    s.to_uppercase()
}

// ---------------------------------------------------------------------------
// Scope – which fields a query looks at
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Scope {
    /// Match against Artist or Song.
    #[default]
    #[value(name = "all")]
    All,
    /// Match against Artist only.
    #[value(name = "artist")]
    ArtistOnly,
    /// Match against Song only.
    #[value(name = "song")]
    SongOnly,
}

impl Scope {
    /// Every scope, in the order the UI offers them.
    pub const ALL: [Scope; 3] = [Scope::All, Scope::ArtistOnly, Scope::SongOnly];

    /// User-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Scope::All => "Artist or Song",
            Scope::ArtistOnly => "Artist only",
            Scope::SongOnly => "Song only",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Query – raw text + scope
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub text: String,
    pub scope: Scope,
}

impl Query {
    pub fn new(text: impl Into<String>, scope: Scope) -> Self {
        Query {
            text: text.into(),
            scope,
        }
    }

    /// Empty or whitespace-only: no query has been issued.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Whitespace-separated, case-folded tokens. Never contains an empty token.
    pub fn tokens(&self) -> Vec<String> {
        self.text.split_whitespace().map(fold_case).collect()
    }
}

// ---------------------------------------------------------------------------
// MatchResult – ordered subsequence of the catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'a> {
    rows: Vec<&'a Record>,
}

impl<'a> MatchResult<'a> {
    pub(crate) fn new(rows: Vec<&'a Record>) -> Self {
        MatchResult { rows }
    }

    pub fn rows(&self) -> &[&'a Record] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.rows.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Copy the matched rows into a standalone catalog.
    pub fn to_catalog(&self) -> Catalog {
        Catalog::from_records(self.rows.iter().map(|r| (*r).clone()).collect())
    }
}
