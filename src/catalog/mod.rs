//! Hymn catalogue: regions, artists and songs.
//!
//! The built-in tables are fixed at compile time. A curated hymnal directory
//! can add more songs at runtime under a single "Local Hymnal" artist.
//!
//! ## Sub-modules
//! - `data` - built-in tables
//! - `hymnal` - `#NUMBER - Title.txt` directory import
//! - `lookup` - find a song by hymn number or fuzzy title

mod data;
pub mod hymnal;
pub mod lookup;

use crate::constants::catalog::{LOCAL_ARTIST_ID, LOCAL_ARTIST_NAME};
use crate::favorites::Favorites;
use crate::types::{ArtistId, RegionId, SongId};

pub use hymnal::HymnEntry;
pub use lookup::find_song;

/// Placeholder lyrics for songs without a lyric sheet.
pub const MISSING_LYRICS: &str = "The lyrics for this song are not available at the moment.";

/// A geographic region hymns are grouped under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Region identifier.
    pub id: RegionId,
    /// Display name.
    pub name: String,
    /// Advertised number of hymns.
    pub song_count: u32,
    /// Emoji shown next to the name.
    pub icon: String,
}

/// A hymn writer or performing group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    /// Artist identifier.
    pub id: ArtistId,
    /// Display name.
    pub name: String,
    /// Advertised number of songs.
    pub song_count: u32,
    /// Region the artist is listed under. Imported hymns have none.
    pub region: Option<RegionId>,
}

/// One song in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    /// Song identifier.
    pub id: SongId,
    /// Display title.
    pub title: String,
    /// Who wrote it.
    pub artist: ArtistId,
    /// Year of writing, when known.
    pub year: Option<String>,
    /// Chord-annotated lyrics, when available.
    pub lyrics: Option<String>,
    /// Whether the song starts out favorited.
    pub favorite: bool,
    /// Number in the hymnal it was imported from.
    pub number: Option<u32>,
}

/// Everything the lyrics viewer needs to show one song.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongSheet {
    /// Song identifier as requested.
    pub id: SongId,
    /// Display title.
    pub title: String,
    /// Artist display name.
    pub artist: String,
    /// Year, or `N/A`.
    pub year: String,
    /// Lyrics with chord markers, or the placeholder text.
    pub lyrics: String,
    /// False when the placeholder sheet was substituted.
    pub available: bool,
}

/// Which artists the artist screen lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtistScope {
    /// Artists from one region, in table order.
    Region(RegionId),
    /// Every artist, sorted by name.
    Alphabetical,
}

/// The in-memory hymn catalogue.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    regions: Vec<Region>,
    artists: Vec<Artist>,
    songs: Vec<Song>,
}

impl Catalog {
    /// The catalogue shipped with the application.
    pub fn builtin() -> Self {
        let regions = data::REGIONS
            .iter()
            .map(|&(id, name, song_count, icon)| Region {
                id: RegionId::new(id),
                name: name.to_string(),
                song_count,
                icon: icon.to_string(),
            })
            .collect();

        let artists = data::ARTISTS
            .iter()
            .map(|&(id, name, song_count, region)| Artist {
                id: ArtistId::new(id),
                name: name.to_string(),
                song_count,
                region: Some(RegionId::new(region)),
            })
            .collect();

        let songs = data::SONGS
            .iter()
            .map(|&(id, title, artist, favorite)| {
                let sheet = data::LYRICS.iter().find(|(song_id, _, _)| *song_id == id);
                Song {
                    id: SongId::new(id),
                    title: title.to_string(),
                    artist: ArtistId::new(artist),
                    year: sheet.map(|(_, year, _)| (*year).to_string()),
                    lyrics: sheet.map(|(_, _, lyrics)| (*lyrics).to_string()),
                    favorite,
                    number: None,
                }
            })
            .collect();

        Self { regions, artists, songs }
    }

    /// All regions in display order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Look up a region.
    pub fn region(&self, id: &RegionId) -> Option<&Region> {
        self.regions.iter().find(|r| &r.id == id)
    }

    /// Look up an artist.
    pub fn artist(&self, id: &ArtistId) -> Option<&Artist> {
        self.artists.iter().find(|a| &a.id == id)
    }

    /// Artists listed under a region, in table order.
    pub fn artists_in(&self, region: &RegionId) -> Vec<&Artist> {
        self.artists
            .iter()
            .filter(|a| a.region.as_ref() == Some(region))
            .collect()
    }

    /// Every artist sorted by name, ignoring case.
    pub fn artists_alphabetical(&self) -> Vec<&Artist> {
        let mut artists: Vec<&Artist> = self.artists.iter().collect();
        artists.sort_by_cached_key(|a| a.name.to_lowercase());
        artists
    }

    /// Artists for an artist-screen scope.
    pub fn artists_for(&self, scope: &ArtistScope) -> Vec<&Artist> {
        match scope {
            ArtistScope::Region(region) => self.artists_in(region),
            ArtistScope::Alphabetical => self.artists_alphabetical(),
        }
    }

    /// Every song in the catalogue.
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Songs by one artist, in table order.
    pub fn songs_by(&self, artist: &ArtistId) -> Vec<&Song> {
        self.songs.iter().filter(|s| &s.artist == artist).collect()
    }

    /// Look up a song.
    pub fn song(&self, id: &SongId) -> Option<&Song> {
        self.songs.iter().find(|s| &s.id == id)
    }

    /// The lyric sheet for a song, or a "not found" placeholder.
    ///
    /// A listed song without lyrics keeps its own title on the placeholder.
    pub fn sheet(&self, id: &SongId) -> SongSheet {
        let song = self.song(id);
        let artist = song.and_then(|s| self.artist(&s.artist));

        match (song, song.and_then(|s| s.lyrics.as_ref())) {
            (Some(song), Some(lyrics)) => SongSheet {
                id: id.clone(),
                title: song.title.clone(),
                artist: artist.map_or_else(|| "Unknown".to_string(), |a| a.name.clone()),
                year: song.year.clone().unwrap_or_else(|| "N/A".to_string()),
                lyrics: lyrics.clone(),
                available: true,
            },
            _ => SongSheet {
                id: id.clone(),
                title: song.map_or_else(|| "Song Not Found".to_string(), |s| s.title.clone()),
                artist: "Unknown".to_string(),
                year: "N/A".to_string(),
                lyrics: MISSING_LYRICS.to_string(),
                available: false,
            },
        }
    }

    /// Songs flagged as favorites in the source tables.
    pub fn initial_favorites(&self) -> impl Iterator<Item = &SongId> {
        self.songs.iter().filter(|s| s.favorite).map(|s| &s.id)
    }

    /// Replace any previously imported hymns with `entries`.
    ///
    /// Imported hymns appear under the "Local Hymnal" artist, which is only
    /// reachable from the alphabetical artist list. Returns the number added.
    pub fn add_local_hymns(&mut self, entries: Vec<HymnEntry>) -> usize {
        let local = ArtistId::new(LOCAL_ARTIST_ID);
        self.songs.retain(|s| s.artist != local);
        self.artists.retain(|a| a.id != local);

        if entries.is_empty() {
            return 0;
        }

        let count = entries.len();
        self.artists.push(Artist {
            id: local.clone(),
            name: LOCAL_ARTIST_NAME.to_string(),
            song_count: u32::try_from(count).unwrap_or(u32::MAX),
            region: None,
        });

        self.songs.extend(entries.into_iter().map(|entry| Song {
            id: SongId::new(format!("h{}", entry.number)),
            title: entry.title,
            artist: local.clone(),
            year: None,
            lyrics: Some(entry.content.join("\n")),
            favorite: false,
            number: Some(entry.number),
        }));

        count
    }
}

/// Artists whose name contains `query`, ignoring case.
pub fn filter_artists<'a>(artists: &[&'a Artist], query: &str) -> Vec<&'a Artist> {
    let query = query.to_lowercase();
    artists
        .iter()
        .filter(|a| a.name.to_lowercase().contains(&query))
        .copied()
        .collect()
}

/// Songs whose title contains `query`, optionally limited to favorites.
pub fn filter_songs<'a>(
    songs: &[&'a Song],
    query: &str,
    favorites_only: bool,
    favorites: &Favorites,
) -> Vec<&'a Song> {
    let query = query.to_lowercase();
    songs
        .iter()
        .filter(|s| s.title.to_lowercase().contains(&query))
        .filter(|s| !favorites_only || favorites.is_favorite(&s.id))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_builtin_tables() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.regions().len(), 6);
        assert_eq!(catalog.songs().len(), 18);
        assert_eq!(catalog.region(&RegionId::new("3")).unwrap().name, "Europe");
    }

    #[test]
    fn test_artists_in_region() {
        let catalog = Catalog::builtin();
        let names: Vec<_> = catalog
            .artists_in(&RegionId::new("1"))
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, ["Fanny Crosby", "Ira D. Sankey", "Charles Wesley"]);
        assert!(catalog.artists_in(&RegionId::new("99")).is_empty());
    }

    #[test]
    fn test_artists_alphabetical() {
        let catalog = Catalog::builtin();
        let artists = catalog.artists_alphabetical();
        assert_eq!(artists.len(), 10);
        assert_eq!(artists[0].name, "Alex Campos");
        assert_eq!(artists[9].name, "Marcos Witt");
    }

    #[test]
    fn test_songs_by_artist() {
        let catalog = Catalog::builtin();
        let titles: Vec<_> = catalog
            .songs_by(&ArtistId::new("a7"))
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(titles, ["Joy to the World", "When I Survey the Wondrous Cross"]);
    }

    #[test]
    fn test_sheet_with_lyrics() {
        let sheet = Catalog::builtin().sheet(&SongId::new("s11"));
        assert!(sheet.available);
        assert_eq!(sheet.title, "Amazing Grace");
        assert_eq!(sheet.artist, "John Newton");
        assert_eq!(sheet.year, "1779");
        assert!(sheet.lyrics.contains("[G7]grace"));
    }

    #[test]
    fn test_sheet_placeholder_keeps_listed_title() {
        let sheet = Catalog::builtin().sheet(&SongId::new("s12"));
        assert!(!sheet.available);
        assert_eq!(sheet.title, "Joy to the World");
        assert_eq!(sheet.artist, "Unknown");
        assert_eq!(sheet.year, "N/A");
        assert_eq!(sheet.lyrics, MISSING_LYRICS);
    }

    #[test]
    fn test_sheet_unknown_song() {
        let sheet = Catalog::builtin().sheet(&SongId::new("nope"));
        assert_eq!(sheet.title, "Song Not Found");
    }

    #[test]
    fn test_filter_artists_ignores_case() {
        let catalog = Catalog::builtin();
        let all = catalog.artists_alphabetical();
        let found = filter_artists(&all, "WES");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Charles Wesley");
        assert_eq!(filter_artists(&all, "").len(), 10);
    }

    #[test]
    fn test_filter_songs_favorites_only() {
        let catalog = Catalog::builtin();
        let favorites = Favorites::from_catalog(&catalog);
        let songs = catalog.songs_by(&ArtistId::new("a1"));

        assert_eq!(filter_songs(&songs, "", false, &favorites).len(), 3);
        let favs = filter_songs(&songs, "", true, &favorites);
        let titles: Vec<_> = favs.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Blessed Assurance", "Jesus Is Tenderly Calling"]);
        assert_eq!(filter_songs(&songs, "glory", true, &favorites).len(), 0);
    }

    #[test]
    fn test_local_hymns_replace_previous_import() {
        let mut catalog = Catalog::builtin();
        let entry = |number: u32, title: &str| HymnEntry {
            number,
            title: title.to_string(),
            content: vec!["[C]Holy, holy, holy".to_string()],
        };

        assert_eq!(catalog.add_local_hymns(vec![entry(1, "Holy, Holy, Holy"), entry(2, "Doxology")]), 2);
        assert_eq!(catalog.artists_alphabetical().len(), 11);
        assert_eq!(catalog.songs_by(&ArtistId::new(LOCAL_ARTIST_ID)).len(), 2);

        assert_eq!(catalog.add_local_hymns(vec![entry(3, "Be Thou My Vision")]), 1);
        let local = catalog.songs_by(&ArtistId::new(LOCAL_ARTIST_ID));
        assert_eq!(local.len(), 1);
        assert_eq!(local[0].id, SongId::new("h3"));

        let sheet = catalog.sheet(&SongId::new("h3"));
        assert_eq!(sheet.artist, LOCAL_ARTIST_NAME);
        assert_eq!(sheet.year, "N/A");

        assert_eq!(catalog.add_local_hymns(Vec::new()), 0);
        assert_eq!(catalog.artists_alphabetical().len(), 10);
    }
}
