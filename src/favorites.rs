//! Favorite songs.
//!
//! One store shared by the song list and the lyrics viewer, so a star set on
//! either screen shows on the other. Seeded from the catalogue's initial
//! flags and kept in memory only.

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::types::SongId;

/// Set of favorited songs.
#[derive(Debug, Clone, Default)]
pub struct Favorites {
    songs: HashSet<SongId>,
}

impl Favorites {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from the songs the catalogue marks as favorites.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            songs: catalog.initial_favorites().cloned().collect(),
        }
    }

    /// Check if a song is a favorite.
    pub fn is_favorite(&self, id: &SongId) -> bool {
        self.songs.contains(id)
    }

    /// Set the favorite flag for a song.
    pub fn set(&mut self, id: &SongId, favorite: bool) {
        if favorite {
            self.songs.insert(id.clone());
        } else {
            self.songs.remove(id);
        }
    }

    /// Flip the favorite flag and return the new value.
    pub fn toggle(&mut self, id: &SongId) -> bool {
        let favorite = !self.is_favorite(id);
        self.set(id, favorite);
        favorite
    }

    /// Get an iterator over all favorited song IDs.
    pub fn iter(&self) -> impl Iterator<Item = &SongId> {
        self.songs.iter()
    }

    /// Get the number of favorites.
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Check if there are no favorites.
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_from_catalog() {
        let favorites = Favorites::from_catalog(&Catalog::builtin());
        assert_eq!(favorites.len(), 9);
        assert!(favorites.is_favorite(&SongId::new("s11")));
        assert!(!favorites.is_favorite(&SongId::new("s12")));
    }

    #[test]
    fn test_toggle() {
        let mut favorites = Favorites::new();
        let id = SongId::new("s2");

        assert!(favorites.toggle(&id));
        assert!(favorites.is_favorite(&id));
        assert!(!favorites.toggle(&id));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut favorites = Favorites::new();
        let id = SongId::new("s9");
        favorites.set(&id, true);
        favorites.set(&id, true);
        assert_eq!(favorites.iter().count(), 1);
        favorites.set(&id, false);
        favorites.set(&id, false);
        assert!(favorites.is_empty());
    }
}
