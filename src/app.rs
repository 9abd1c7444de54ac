//! Application state and key handling.
//!
//! `App` owns the catalogue, favorites and preference store, and tracks
//! which screen is shown. Screens form a stack: opening something pushes,
//! going back pops.

use arboard::Clipboard;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::widgets::ListState;
use tokio::sync::mpsc;

use crate::catalog::{self, find_song, hymnal, Artist, ArtistScope, Catalog, HymnEntry, Song};
use crate::config::Config;
use crate::constants::async_tasks::CHANNEL_BUFFER_SIZE;
use crate::error::{Error, Result};
use crate::favorites::Favorites;
use crate::input::{dispatch, Action, InputContext, InputResult};
use crate::preferences::{PreferenceStore, RegionSelection};
use crate::types::{ArtistId, SongId};
use crate::viewer::{share_message, LyricsView};

/// Messages sent back from background tasks.
#[derive(Debug)]
pub enum AppUpdate {
    /// The curated hymnal directory finished loading.
    HymnalLoaded(Result<Vec<HymnEntry>>),
}

/// The screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen.
    Home,
    /// Region picker.
    Regions,
    /// Artists in a region, or all of them A-Z.
    Artists,
    /// Songs by one artist.
    Songs,
    /// Lyrics of one song.
    Lyrics,
}

impl Screen {
    /// Title shown in the screen's border.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Hymnbook",
            Self::Regions => "Select Region",
            Self::Artists => "Artists",
            Self::Songs => "Songs",
            Self::Lyrics => "Lyrics",
        }
    }
}

/// Label of the extra entry at the bottom of the region list.
pub const ALPHABETICAL_ENTRY: &str = "View All Hymns (A-Z)";

/// Application state.
#[allow(clippy::struct_excessive_bools)]
pub struct App {
    /// Screen currently shown.
    pub screen: Screen,
    history: Vec<Screen>,
    /// Regions, artists and songs.
    pub catalog: Catalog,
    /// Starred songs.
    pub favorites: Favorites,
    /// Persisted region choice.
    pub preferences: PreferenceStore,
    /// Loaded configuration.
    pub config: Config,
    /// Selection in the region list; the last row is the A-Z entry.
    pub region_state: ListState,
    /// Selection in the artist list.
    pub artist_state: ListState,
    /// Selection in the song list.
    pub song_state: ListState,
    /// Which artists the artist screen lists.
    pub artist_scope: ArtistScope,
    /// Artist whose songs are listed.
    pub current_artist: Option<ArtistId>,
    /// Artist search text.
    pub artist_query: String,
    /// Song search text.
    pub song_query: String,
    /// Whether keys go into the search box.
    pub is_search_mode: bool,
    /// Whether the song list shows favorites only.
    pub favorites_only: bool,
    /// Open song, when on the lyrics screen.
    pub viewer: Option<LyricsView>,
    /// Text typed after `:`.
    pub command_buffer: String,
    /// Whether keys go into the command line.
    pub is_command_mode: bool,
    /// Whether the help modal is shown.
    pub show_help: bool,
    /// Error modal text.
    pub error_message: Option<String>,
    /// Status modal text.
    pub status_message: Option<String>,
    /// Whether a background load is running.
    pub is_loading: bool,
    should_quit: bool,
    async_task_tx: mpsc::Sender<AppUpdate>,
    async_task_rx: mpsc::Receiver<AppUpdate>,
}

impl App {
    /// Create the app, reading preferences from the configured data directory.
    pub fn new(config: Config) -> Self {
        let preferences = PreferenceStore::open(config.preferences_path());
        Self::with_preferences(config, preferences)
    }

    /// Create the app with an explicit preference store.
    pub fn with_preferences(config: Config, preferences: PreferenceStore) -> Self {
        let catalog = Catalog::builtin();
        let favorites = Favorites::from_catalog(&catalog);
        let (async_task_tx, async_task_rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);

        Self {
            screen: Screen::Home,
            history: Vec::new(),
            catalog,
            favorites,
            preferences,
            config,
            region_state: ListState::default(),
            artist_state: ListState::default(),
            song_state: ListState::default(),
            artist_scope: ArtistScope::Alphabetical,
            current_artist: None,
            artist_query: String::new(),
            song_query: String::new(),
            is_search_mode: false,
            favorites_only: false,
            viewer: None,
            command_buffer: String::new(),
            is_command_mode: false,
            show_help: false,
            error_message: None,
            status_message: None,
            is_loading: false,
            should_quit: false,
            async_task_tx,
            async_task_rx,
        }
    }

    /// Whether the main loop should stop.
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Ask the main loop to stop.
    pub const fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Whether there is a screen to go back to.
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Start loading the curated hymnal in the background.
    ///
    /// Must be called from inside a tokio runtime.
    pub fn start_background_tasks(&mut self) {
        let Some(path) = self.config.hymnal_path.clone() else {
            return;
        };

        self.is_loading = true;
        let tx = self.async_task_tx.clone();
        tokio::spawn(async move {
            let result = tokio::task::spawn_blocking(move || hymnal::load_dir(&path))
                .await
                .unwrap_or_else(|e| Err(Error::Catalog(format!("Hymnal loader stopped: {e}"))));
            if tx.send(AppUpdate::HymnalLoaded(result)).await.is_err() {
                tracing::debug!("App closed before the hymnal finished loading");
            }
        });
    }

    /// Apply any messages from background tasks.
    pub fn handle_updates(&mut self) {
        while let Ok(update) = self.async_task_rx.try_recv() {
            match update {
                AppUpdate::HymnalLoaded(result) => {
                    self.is_loading = false;
                    match result {
                        Ok(entries) => {
                            let count = self.catalog.add_local_hymns(entries);
                            tracing::info!("Added {count} hymns to the catalogue");
                        }
                        Err(e) => {
                            tracing::warn!("Hymnal import failed: {e}");
                            self.error_message = Some(format!("Failed to load hymnal: {e}"));
                        }
                    }
                }
            }
        }
    }

    /// Process one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?')) {
                self.show_help = false;
            }
            return;
        }

        if self.error_message.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.error_message = None;
            }
            return;
        }

        if self.status_message.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.status_message = None;
            }
            return;
        }

        if self.is_command_mode {
            self.handle_command_input(key);
            return;
        }

        if self.is_search_mode {
            self.handle_search_input(key);
            return;
        }

        let ctx = InputContext {
            screen: self.screen,
            can_go_back: self.can_go_back(),
        };
        match dispatch(key, &ctx) {
            InputResult::Ignored => {}
            InputResult::Quit => self.quit(),
            InputResult::Action(action) => self.apply(action),
        }
    }

    /// Carry out an action on the current screen.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::ShowHelp => self.show_help = true,
            Action::EnterCommandMode => {
                self.is_command_mode = true;
                self.command_buffer.clear();
            }
            Action::Back => self.go_back(),
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::MoveFirst => self.select_index(0),
            Action::MoveLast => self.select_index(self.list_len().saturating_sub(1)),
            Action::Select => self.select(),
            Action::StartSearch => self.is_search_mode = true,
            Action::ToggleFavoritesOnly => {
                self.favorites_only = !self.favorites_only;
                self.reset_song_selection();
            }
            Action::ToggleFavorite => self.toggle_favorite(),
            Action::Share => self.share_current_song(),
            Action::TransposeUp
            | Action::TransposeDown
            | Action::ResetTranspose
            | Action::ToggleChords
            | Action::FontUp
            | Action::FontDown
            | Action::Scroll(_) => {
                if let Some(view) = self.viewer.as_mut() {
                    match action {
                        Action::TransposeUp => view.transpose_up(),
                        Action::TransposeDown => view.transpose_down(),
                        Action::ResetTranspose => view.reset_transpose(),
                        Action::ToggleChords => view.toggle_chords(),
                        Action::FontUp => view.increase_font(),
                        Action::FontDown => view.decrease_font(),
                        Action::Scroll(rows) => view.scroll_by(rows),
                        _ => {}
                    }
                }
            }
        }
    }

    fn handle_command_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.is_command_mode = false;
                self.command_buffer.clear();
            }
            KeyCode::Enter => {
                self.is_command_mode = false;
                let command = std::mem::take(&mut self.command_buffer);
                self.execute_command(&command);
            }
            KeyCode::Backspace => {
                if self.command_buffer.pop().is_none() {
                    self.is_command_mode = false;
                }
            }
            KeyCode::Char(c) => self.command_buffer.push(c),
            _ => {}
        }
    }

    /// Run a `:` command line.
    pub fn execute_command(&mut self, command: &str) {
        let command = command.trim();
        let (name, arg) = command.split_once(' ').unwrap_or((command, ""));

        match name {
            "q" | "quit" => self.quit(),
            "h" | "help" => self.show_help = true,
            "reload" => {
                if self.config.hymnal_path.is_some() {
                    self.start_background_tasks();
                } else {
                    self.error_message = Some("No hymnal directory configured (set HYMNAL_PATH)".to_string());
                }
            }
            "o" | "open" => {
                let found = find_song(&self.catalog, arg).map(|song| song.id.clone());
                match found {
                    Some(id) => self.open_song(id),
                    None => self.error_message = Some(format!("No song matches \"{}\"", arg.trim())),
                }
            }
            "" => {}
            _ => self.error_message = Some(format!("Unknown command: {command}")),
        }
    }

    fn handle_search_input(&mut self, key: KeyEvent) {
        let query = match self.screen {
            Screen::Artists => &mut self.artist_query,
            Screen::Songs => &mut self.song_query,
            _ => {
                self.is_search_mode = false;
                return;
            }
        };

        match key.code {
            KeyCode::Esc => {
                query.clear();
                self.is_search_mode = false;
            }
            KeyCode::Enter => self.is_search_mode = false,
            KeyCode::Backspace => {
                query.pop();
            }
            KeyCode::Char(c) => query.push(c),
            _ => return,
        }

        match self.screen {
            Screen::Artists => self.reset_artist_selection(),
            Screen::Songs => self.reset_song_selection(),
            _ => {}
        }
    }

    /// Artists listed on the artist screen after searching.
    pub fn visible_artists(&self) -> Vec<&Artist> {
        catalog::filter_artists(&self.catalog.artists_for(&self.artist_scope), &self.artist_query)
    }

    /// Songs listed on the song screen after searching and filtering.
    pub fn visible_songs(&self) -> Vec<&Song> {
        let Some(artist) = &self.current_artist else {
            return Vec::new();
        };
        catalog::filter_songs(
            &self.catalog.songs_by(artist),
            &self.song_query,
            self.favorites_only,
            &self.favorites,
        )
    }

    fn list_len(&self) -> usize {
        match self.screen {
            Screen::Regions => self.catalog.regions().len() + 1,
            Screen::Artists => self.visible_artists().len(),
            Screen::Songs => self.visible_songs().len(),
            Screen::Home | Screen::Lyrics => 0,
        }
    }

    fn list_state_mut(&mut self) -> Option<&mut ListState> {
        match self.screen {
            Screen::Regions => Some(&mut self.region_state),
            Screen::Artists => Some(&mut self.artist_state),
            Screen::Songs => Some(&mut self.song_state),
            Screen::Home | Screen::Lyrics => None,
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.list_len();
        if len == 0 {
            return;
        }
        if let Some(state) = self.list_state_mut() {
            let current = state.selected().unwrap_or(0);
            let next = current.saturating_add_signed(delta).min(len - 1);
            state.select(Some(next));
        }
    }

    fn select_index(&mut self, index: usize) {
        let len = self.list_len();
        if let Some(state) = self.list_state_mut() {
            state.select((len > 0).then(|| index.min(len - 1)));
        }
    }

    fn reset_artist_selection(&mut self) {
        let empty = self.visible_artists().is_empty();
        self.artist_state.select(if empty { None } else { Some(0) });
    }

    fn reset_song_selection(&mut self) {
        let empty = self.visible_songs().is_empty();
        self.song_state.select(if empty { None } else { Some(0) });
    }

    fn navigate(&mut self, screen: Screen) {
        self.history.push(self.screen);
        self.screen = screen;
    }

    fn go_back(&mut self) {
        let Some(previous) = self.history.pop() else {
            return;
        };
        if self.screen == Screen::Lyrics {
            self.viewer = None;
        }
        self.is_search_mode = false;
        self.screen = previous;
    }

    fn select(&mut self) {
        match self.screen {
            Screen::Home => self.open_regions(),
            Screen::Regions => self.choose_region(),
            Screen::Artists => self.choose_artist(),
            Screen::Songs => {
                let selected = self.song_state.selected();
                let id = selected.and_then(|i| self.visible_songs().get(i).map(|s| s.id.clone()));
                if let Some(id) = id {
                    self.open_song(id);
                }
            }
            Screen::Lyrics => {}
        }
    }

    fn open_regions(&mut self) {
        let regions = self.catalog.regions();
        let index = match self.preferences.get_selected_region() {
            Some(RegionSelection::Region { region_id, .. }) => {
                regions.iter().position(|r| &r.id == region_id).unwrap_or(0)
            }
            Some(RegionSelection::Alphabetical { .. }) => regions.len(),
            None => 0,
        };
        self.region_state.select(Some(index));
        self.navigate(Screen::Regions);
    }

    fn choose_region(&mut self) {
        let Some(index) = self.region_state.selected() else {
            return;
        };

        let (scope, selection) = match self.catalog.regions().get(index) {
            Some(region) => (
                ArtistScope::Region(region.id.clone()),
                RegionSelection::region(region.id.clone(), region.name.clone()),
            ),
            None => (ArtistScope::Alphabetical, RegionSelection::alphabetical()),
        };

        // Navigation goes ahead even when the choice cannot be saved
        if let Err(e) = self.preferences.set_selected_region(selection) {
            tracing::warn!("Could not save region preference: {e}");
        }

        self.artist_scope = scope;
        self.artist_query.clear();
        self.reset_artist_selection();
        self.navigate(Screen::Artists);
    }

    fn choose_artist(&mut self) {
        let selected = self.artist_state.selected();
        let Some(id) = selected.and_then(|i| self.visible_artists().get(i).map(|a| a.id.clone())) else {
            return;
        };

        self.current_artist = Some(id);
        self.song_query.clear();
        self.favorites_only = false;
        self.reset_song_selection();
        self.navigate(Screen::Songs);
    }

    /// Open the lyrics viewer on a song.
    ///
    /// Opening from the lyrics screen replaces the current song rather than
    /// stacking another viewer.
    pub fn open_song(&mut self, id: SongId) {
        self.viewer = Some(LyricsView::with_font_size(id, self.config.font_size));
        if self.screen != Screen::Lyrics {
            self.navigate(Screen::Lyrics);
        }
    }

    fn toggle_favorite(&mut self) {
        let id = match self.screen {
            Screen::Lyrics => self.viewer.as_ref().map(|v| v.song_id.clone()),
            Screen::Songs => {
                let selected = self.song_state.selected();
                selected.and_then(|i| self.visible_songs().get(i).map(|s| s.id.clone()))
            }
            _ => None,
        };
        let Some(id) = id else {
            return;
        };

        let favorite = self.favorites.toggle(&id);
        tracing::debug!("Song {id} favorite: {favorite}");

        if self.screen == Screen::Songs && self.favorites_only {
            let len = self.visible_songs().len();
            let selected = self.song_state.selected().filter(|_| len > 0).map(|i| i.min(len - 1));
            self.song_state.select(selected);
        }
    }

    fn share_current_song(&mut self) {
        let Some(view) = &self.viewer else {
            return;
        };
        let sheet = self.catalog.sheet(&view.song_id);
        let message = share_message(&sheet);

        match clipboard_write(&message) {
            Ok(()) => self.status_message = Some(format!("Copied \"{}\" to the clipboard", sheet.title)),
            Err(e) => {
                tracing::warn!("Share failed: {e}");
                self.error_message = Some(format!("Could not share song: {e}"));
            }
        }
    }
}

/// Write text to the system clipboard.
fn clipboard_write(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.to_owned())?;
    Ok(())
}
