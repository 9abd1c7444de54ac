//! Jump-to-song lookup for the `:open` command.
//!
//! A query that is only a hymn number (`510`, `#510`, `Hymn 510`) selects by
//! number. Anything else is matched against titles: substring first, then
//! skim fuzzy scoring for typos.

use std::sync::LazyLock;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use regex::Regex;

use super::{Catalog, Song};
use crate::constants::catalog::MIN_FUZZY_SCORE;

/// A whole query naming a hymn number, with optional `#` or `Hymn` prefix.
#[allow(clippy::expect_used)]
static NUMBER_QUERY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:hymn\s*)?#?\s*(\d+)$").expect("valid regex: NUMBER_QUERY")
});

/// Find the song a free-text query most likely refers to.
pub fn find_song<'a>(catalog: &'a Catalog, query: &str) -> Option<&'a Song> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    if let Some(number) = hymn_number(query) {
        return catalog.songs().iter().find(|s| s.number == Some(number));
    }

    let needle = query.to_lowercase();
    let songs = catalog.songs();
    songs
        .iter()
        .find(|s| s.title.to_lowercase().contains(&needle))
        .or_else(|| best_fuzzy_title(songs, query))
}

fn best_fuzzy_title<'a>(songs: &'a [Song], query: &str) -> Option<&'a Song> {
    let matcher = SkimMatcherV2::default();
    songs
        .iter()
        .filter_map(|song| matcher.fuzzy_match(&song.title, query).map(|score| (score, song)))
        .filter(|(score, _)| *score >= MIN_FUZZY_SCORE)
        .max_by_key(|(score, _)| *score)
        .map(|(_, song)| song)
}

fn hymn_number(query: &str) -> Option<u32> {
    NUMBER_QUERY.captures(query)?.get(1)?.as_str().parse().ok()
}
