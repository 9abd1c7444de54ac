//! Input handling abstractions.
//!
//! Key events are translated into [`Action`]s by small per-screen handlers,
//! so key bindings can be tested without building a full [`crate::app::App`].
//! Text entry (command line and search box) is handled by the app directly
//! before any handler runs.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Screen;

/// Something the user asked the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Open the help modal.
    ShowHelp,
    /// Start typing a `:` command.
    EnterCommandMode,
    /// Return to the previous screen.
    Back,
    /// Move the list selection up.
    MoveUp,
    /// Move the list selection down.
    MoveDown,
    /// Jump to the first list entry.
    MoveFirst,
    /// Jump to the last list entry.
    MoveLast,
    /// Open the selected entry.
    Select,
    /// Start typing into the search box.
    StartSearch,
    /// Show only favorite songs, or everything again.
    ToggleFavoritesOnly,
    /// Star or unstar the selected song.
    ToggleFavorite,
    /// Raise chords by a semitone.
    TransposeUp,
    /// Lower chords by a semitone.
    TransposeDown,
    /// Back to the written key.
    ResetTranspose,
    /// Show or hide chord rows.
    ToggleChords,
    /// Larger text.
    FontUp,
    /// Smaller text.
    FontDown,
    /// Copy the song to the clipboard.
    Share,
    /// Scroll the lyrics by a number of rows.
    Scroll(i32),
}

/// Result of processing an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// The input was ignored (not applicable to this handler).
    Ignored,
    /// The application should quit.
    Quit,
    /// The input maps to an action.
    Action(Action),
}

/// Context passed to input handlers.
///
/// This provides handlers with the information they need to process
/// input without directly accessing the full App state.
#[derive(Debug, Clone, Copy)]
pub struct InputContext {
    /// Screen currently shown.
    pub screen: Screen,
    /// Whether there is a screen to go back to.
    pub can_go_back: bool,
}

/// Trait for handling keyboard input.
///
/// Implementations of this trait handle input for specific screens
/// or input contexts.
pub trait InputHandler {
    /// Handle a key event.
    ///
    /// # Arguments
    /// * `key` - The key event to handle
    /// * `ctx` - Context about the current application state
    ///
    /// # Returns
    /// The result of handling the input.
    fn handle(&mut self, key: KeyEvent, ctx: &InputContext) -> InputResult;

    /// Get the name of this handler (for debugging).
    fn name(&self) -> &'static str;
}

/// Handler for global shortcuts (help, command line, back, Ctrl-C).
#[derive(Debug, Default)]
pub struct GlobalHandler;

impl InputHandler for GlobalHandler {
    fn handle(&mut self, key: KeyEvent, ctx: &InputContext) -> InputResult {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return InputResult::Quit;
        }

        match key.code {
            KeyCode::F(1) | KeyCode::Char('?') => InputResult::Action(Action::ShowHelp),
            KeyCode::Char(':') => InputResult::Action(Action::EnterCommandMode),
            KeyCode::Esc if ctx.can_go_back => InputResult::Action(Action::Back),
            _ => InputResult::Ignored,
        }
    }

    fn name(&self) -> &'static str {
        "GlobalHandler"
    }
}

/// Handler for the home screen.
#[derive(Debug, Default)]
pub struct HomeHandler;

impl InputHandler for HomeHandler {
    fn handle(&mut self, key: KeyEvent, _ctx: &InputContext) -> InputResult {
        match key.code {
            KeyCode::Char('q') => InputResult::Quit,
            // Nothing to go back to from the splash
            KeyCode::Esc => InputResult::Ignored,
            // Any other key continues to the region list
            _ => InputResult::Action(Action::Select),
        }
    }

    fn name(&self) -> &'static str {
        "HomeHandler"
    }
}

/// Handler for the region, artist and song lists.
#[derive(Debug, Default)]
pub struct BrowseHandler;

impl InputHandler for BrowseHandler {
    fn handle(&mut self, key: KeyEvent, ctx: &InputContext) -> InputResult {
        let action = match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
            KeyCode::Home | KeyCode::Char('g') => Action::MoveFirst,
            KeyCode::End | KeyCode::Char('G') => Action::MoveLast,
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => Action::Select,
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace if ctx.can_go_back => Action::Back,
            KeyCode::Char('/') if ctx.screen != Screen::Regions => Action::StartSearch,
            KeyCode::Char('f') if ctx.screen == Screen::Songs => Action::ToggleFavoritesOnly,
            KeyCode::Char(' ') if ctx.screen == Screen::Songs => Action::ToggleFavorite,
            _ => return InputResult::Ignored,
        };
        InputResult::Action(action)
    }

    fn name(&self) -> &'static str {
        "BrowseHandler"
    }
}

/// Handler for the lyrics viewer.
#[derive(Debug, Default)]
pub struct LyricsHandler;

impl InputHandler for LyricsHandler {
    fn handle(&mut self, key: KeyEvent, _ctx: &InputContext) -> InputResult {
        let page = i32::from(crate::constants::viewer::PAGE_SCROLL);
        let action = match key.code {
            KeyCode::Char('+' | '=') => Action::TransposeUp,
            KeyCode::Char('-' | '_') => Action::TransposeDown,
            KeyCode::Char('0') => Action::ResetTranspose,
            KeyCode::Char('c') => Action::ToggleChords,
            KeyCode::Char(']') => Action::FontUp,
            KeyCode::Char('[') => Action::FontDown,
            KeyCode::Char('s') => Action::ToggleFavorite,
            KeyCode::Char('y') => Action::Share,
            KeyCode::Up | KeyCode::Char('k') => Action::Scroll(-1),
            KeyCode::Down | KeyCode::Char('j') => Action::Scroll(1),
            KeyCode::PageUp => Action::Scroll(-page),
            KeyCode::PageDown => Action::Scroll(page),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => Action::Back,
            _ => return InputResult::Ignored,
        };
        InputResult::Action(action)
    }

    fn name(&self) -> &'static str {
        "LyricsHandler"
    }
}

/// Run the global handler, then the handler for the current screen.
pub fn dispatch(key: KeyEvent, ctx: &InputContext) -> InputResult {
    match run(GlobalHandler, key, ctx) {
        InputResult::Ignored => {}
        result => return result,
    }

    match ctx.screen {
        Screen::Home => run(HomeHandler, key, ctx),
        Screen::Regions | Screen::Artists | Screen::Songs => run(BrowseHandler, key, ctx),
        Screen::Lyrics => run(LyricsHandler, key, ctx),
    }
}

fn run(mut handler: impl InputHandler, key: KeyEvent, ctx: &InputContext) -> InputResult {
    let result = handler.handle(key, ctx);
    if result != InputResult::Ignored {
        tracing::trace!("{} on {:?}: {:?} -> {result:?}", handler.name(), ctx.screen, key.code);
    }
    result
}
