use super::model::{Catalog, MatchResult, Query, Scope};

// ---------------------------------------------------------------------------
// Token matching
// ---------------------------------------------------------------------------

/// Whether one record passes every token under `scope`.
///
/// `artist` and `song` must already be folded, as must every token.
/// A token may be satisfied by a different field than its neighbours.
pub fn record_matches(artist: &str, song: &str, tokens: &[String], scope: Scope) -> bool {
    tokens.iter().all(|tok| {
        let tok = tok.as_str();
        match scope {
            Scope::All => artist.contains(tok) || song.contains(tok),
            Scope::ArtistOnly => artist.contains(tok),
            Scope::SongOnly => song.contains(tok),
        }
    })
}

/// Return indices of records matching `query`, in catalog order.
///
/// A blank query returns every index.
pub fn matched_indices(catalog: &Catalog, query: &Query) -> Vec<usize> {
    let tokens = query.tokens();
    if tokens.is_empty() {
        return (0..catalog.len()).collect();
    }

    let indices: Vec<usize> = catalog
        .folded_keys()
        .iter()
        .enumerate()
        .filter(|(_, (artist, song))| record_matches(artist, song, &tokens, query.scope))
        .map(|(i, _)| i)
        .collect();

    log::debug!(
        "query {:?} ({} tokens, {:?}) matched {}/{}",
        query.text,
        tokens.len(),
        query.scope,
        indices.len(),
        catalog.len()
    );
    indices
}

/// Filter `catalog` by the raw query text and scope.
pub fn search<'a>(catalog: &'a Catalog, raw_query: &str, scope: Scope) -> MatchResult<'a> {
    let query = Query::new(raw_query, scope);
    let rows = matched_indices(catalog, &query)
        .into_iter()
        .filter_map(|i| catalog.get(i))
        .collect();
    MatchResult::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn bon_jovi() -> Catalog {
        Catalog::from_records(vec![
            Record::new("Bon Jovi", "Livin on a Prayer"),
            Record::new("Bon Jovi", "It's My Life"),
        ])
    }

    fn songs(result: &MatchResult<'_>) -> Vec<String> {
        result.iter().map(|r| r.song.clone()).collect()
    }

    #[test]
    fn test_blank_query_returns_everything() {
        let catalog = bon_jovi();
        for scope in Scope::ALL {
            assert_eq!(search(&catalog, "", scope).len(), 2);
            assert_eq!(search(&catalog, "   \t", scope).len(), 2);
        }
    }

    #[test]
    fn test_tokens_are_anded() {
        let catalog = bon_jovi();
        let result = search(&catalog, "Bon Prayer", Scope::All);
        assert_eq!(songs(&result), vec!["Livin on a Prayer"]);
    }

    #[test]
    fn test_field_scoping() {
        let catalog = bon_jovi();
        assert!(search(&catalog, "Jovi", Scope::SongOnly).is_empty());
        assert_eq!(search(&catalog, "Jovi", Scope::ArtistOnly).len(), 2);
        assert_eq!(search(&catalog, "Jovi", Scope::All).len(), 2);
        assert_eq!(search(&catalog, "life", Scope::SongOnly).len(), 1);
        assert!(search(&catalog, "life", Scope::ArtistOnly).is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let catalog = bon_jovi();
        assert_eq!(
            search(&catalog, "bon", Scope::All),
            search(&catalog, "BON", Scope::All)
        );
        assert_eq!(search(&catalog, "pRaYeR", Scope::SongOnly).len(), 1);
    }

    #[test]
    fn test_pattern_characters_are_literal() {
        let catalog = Catalog::from_records(vec![Record::new("A.C.", "X")]);
        assert!(search(&catalog, "A*C", Scope::All).is_empty());
        assert!(search(&catalog, "A.?", Scope::All).is_empty());
        assert_eq!(search(&catalog, "a.c.", Scope::All).len(), 1);

        let parens = Catalog::from_records(vec![Record::new("Prince", "1999 (Remix)")]);
        assert_eq!(search(&parens, "(remix)", Scope::SongOnly).len(), 1);
    }

    #[test]
    fn test_empty_song_never_matches_song_side() {
        let catalog = Catalog::from_records(vec![Record::new("Queen", "")]);
        assert!(search(&catalog, "a", Scope::SongOnly).is_empty());
        assert!(search(&catalog, "x", Scope::All).is_empty());
        assert_eq!(search(&catalog, "que", Scope::All).len(), 1);
    }

    #[test]
    fn test_duplicates_kept_in_order() {
        let catalog = Catalog::from_records(vec![
            Record::new("Toto", "Africa"),
            Record::new("Weezer", "Africa"),
            Record::new("Toto", "Africa"),
        ]);
        let result = search(&catalog, "africa", Scope::SongOnly);
        let artists: Vec<&str> = result.iter().map(|r| r.artist.as_str()).collect();
        assert_eq!(artists, vec!["Toto", "Weezer", "Toto"]);
    }

    #[test]
    fn test_matched_indices_positions() {
        let catalog = Catalog::from_records(vec![
            Record::new("ABBA", "Waterloo"),
            Record::new("Queen", "Bohemian Rhapsody"),
            Record::new("ABBA", "Dancing Queen"),
        ]);
        let q = Query::new("queen", Scope::All);
        assert_eq!(matched_indices(&catalog, &q), vec![1, 2]);
        let q = Query::new("queen", Scope::ArtistOnly);
        assert_eq!(matched_indices(&catalog, &q), vec![1]);
    }

    #[test]
    fn test_record_matches_needs_every_token() {
        let tokens = vec!["BON".to_string(), "LIFE".to_string()];
        assert!(record_matches("BON JOVI", "IT'S MY LIFE", &tokens, Scope::All));
        assert!(!record_matches("BON JOVI", "IT'S MY LIFE", &tokens, Scope::ArtistOnly));
        assert!(record_matches("BON JOVI", "", &[], Scope::SongOnly));
    }
}
