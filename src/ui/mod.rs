//! User interface components.
//!
//! Provides TUI widgets and drawing functions for the application's
//! terminal-based user interface using ratatui.

mod browse;
mod lyrics;

pub use browse::{draw_artists, draw_regions, draw_songs};
pub use lyrics::draw_lyrics;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Screen};

/// Render the full application UI to the terminal frame.
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(3), // Command/status bar at bottom
        ])
        .split(f.size());

    match app.screen {
        Screen::Home => draw_home(f, chunks[0]),
        Screen::Regions => draw_regions(f, app, chunks[0]),
        Screen::Artists => draw_artists(f, app, chunks[0]),
        Screen::Songs => draw_songs(f, app, chunks[0]),
        Screen::Lyrics => draw_lyrics(f, app, chunks[0]),
    }

    if app.screen == Screen::Home {
        draw_centered_line(f, chunks[1], "Press any key to continue...", Style::default().fg(Color::Yellow));
    } else {
        draw_command_bar(f, app, chunks[1]);
    }

    if app.is_loading {
        draw_loading_indicator(f);
    }

    // Modals are blocking, only the top one is drawn
    if let Some(status) = &app.status_message {
        draw_status_message(f, status);
    } else if let Some(error) = &app.error_message {
        draw_error_message(f, error);
    } else if app.show_help {
        draw_help_modal(f, app);
    }
}

fn draw_command_bar(f: &mut Frame, app: &App, area: Rect) {
    let (title, border_color) = if app.is_command_mode {
        ("Command", Color::Yellow)
    } else if app.is_search_mode {
        ("Search", Color::Cyan)
    } else {
        ("Commands/Status", Color::Yellow)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(title, Style::default().fg(border_color)));
    let inner_area = block.inner(area);
    f.render_widget(block, area);

    if app.is_command_mode {
        let command = Paragraph::new(format!(" :{}", app.command_buffer)).style(Style::default().fg(Color::Yellow));
        f.render_widget(command, inner_area);
        return;
    }

    if app.is_search_mode {
        let query = if app.screen == Screen::Songs { &app.song_query } else { &app.artist_query };
        let search = Paragraph::new(format!(" /{query}")).style(Style::default().fg(Color::Cyan));
        f.render_widget(search, inner_area);
        return;
    }

    let help_text = match app.screen {
        Screen::Home => Vec::new(),
        Screen::Regions => create_help_text(&[("Enter", "Open"), ("ESC", "Back"), ("?", "Help"), (":q", "Quit")]),
        Screen::Artists => create_help_text(&[("Enter", "Open"), ("/", "Search"), ("ESC", "Back"), (":q", "Quit")]),
        Screen::Songs => create_help_text(&[
            ("Enter", "Open"),
            ("/", "Search"),
            ("f", if app.favorites_only { "All songs" } else { "Favorites" }),
            ("Space", "Star"),
            ("ESC", "Back"),
        ]),
        Screen::Lyrics => create_help_text(&[
            ("+/-", "Transpose"),
            ("0", "Reset"),
            ("c", "Chords"),
            ("[/]", "Size"),
            ("s", "Star"),
            ("y", "Share"),
            ("ESC", "Back"),
        ]),
    };

    let status_bar = Paragraph::new(Line::from(help_text)).style(Style::default().fg(Color::Gray));
    f.render_widget(status_bar, inner_area);
}

/// Build styled help text spans from key-description pairs for the command bar.
pub fn create_help_text<'a>(commands: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut text = vec![Span::raw(" ")];

    for (i, (key, description)) in commands.iter().enumerate() {
        text.push(Span::styled(*key, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)));
        text.push(Span::raw(format!(": {description}")));

        if i + 1 < commands.len() {
            text.push(Span::raw(" | "));
        }
    }

    text
}

/// Create a bordered block with a title, highlighted when focused.
pub fn create_titled_block(title: &str, is_focused: bool) -> Block<'_> {
    let (title_style, border_style) = if is_focused {
        (
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Yellow),
        )
    } else {
        (Style::default(), Style::default())
    };

    Block::default()
        .title(Span::styled(title, title_style))
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// A rectangle of at most `width` x `height` centered in `outer`.
fn centered_rect(outer: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(outer.width);
    let height = height.min(outer.height);
    Rect {
        x: outer.x + (outer.width - width) / 2,
        y: outer.y + (outer.height - height) / 2,
        width,
        height,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn draw_centered_line(f: &mut Frame, area: Rect, text: &str, style: Style) {
    let width = text.width() as u16;
    if area.width < width || area.height < 3 {
        return;
    }
    let text_area = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + 1,
        width,
        height: 1,
    };
    f.render_widget(Paragraph::new(text).style(style), text_area);
}

#[allow(clippy::cast_possible_truncation)]
fn draw_home(f: &mut Frame, area: Rect) {
    let logo = [
        r"  _   _                       _                 _    ",
        r" | | | |_   _ _ __ ___  _ __ | |__   ___   ___ | | __",
        r" | |_| | | | | '_ ` _ \| '_ \| '_ \ / _ \ / _ \| |/ /",
        r" |  _  | |_| | | | | | | | | | |_) | (_) | (_) |   < ",
        r" |_| |_|\__, |_| |_| |_|_| |_|_.__/ \___/ \___/|_|\_\",
        r"        |___/                                        ",
        r"",
        r"    Hymns from around the world, with chords",
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightBlue))
        .title(Span::styled(
            Screen::Home.title(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let lines: Vec<Line> = logo
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let style = if i < 6 {
                Style::default().fg(Color::LightBlue).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Yellow)
            };
            Line::styled(*line, style)
        })
        .collect();

    let logo_width = logo.iter().map(|l| l.width()).max().unwrap_or(0) as u16;
    let logo_area = centered_rect(inner_area, logo_width, logo.len() as u16);
    f.render_widget(Paragraph::new(lines), logo_area);

    let version_text = format!("v{}", env!("CARGO_PKG_VERSION"));
    let version_width = version_text.width() as u16;
    if area.width > version_width + 2 && area.height >= 2 {
        let version_area = Rect {
            x: area.right() - version_width - 2,
            y: area.bottom() - 2,
            width: version_width,
            height: 1,
        };
        f.render_widget(
            Paragraph::new(version_text).style(Style::default().fg(Color::Gray)),
            version_area,
        );
    }
}

fn draw_loading_indicator(f: &mut Frame) {
    let area = centered_rect(f.size(), 22, 3);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));
    let text = Paragraph::new("Loading hymnal...")
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);

    f.render_widget(Clear, area);
    let inner_area = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(text, inner_area);
}

fn draw_error_message(f: &mut Frame, message: &str) {
    let size = f.size();
    let area = centered_rect(size, 50.min(size.width.saturating_sub(4)), 6);

    let block = Block::default()
        .title(Span::styled("Error", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    draw_modal_text(f, area, block, message);
}

#[allow(clippy::cast_possible_truncation)]
fn draw_status_message(f: &mut Frame, message: &str) {
    let size = f.size();

    // Box width is 50 to 80% of the screen
    let max_width = (size.width as usize * 80) / 100;
    let width = message.width().saturating_add(6).min(max_width).max(50) as u16;
    let inner_width = width.saturating_sub(4).max(1) as usize;
    let msg_lines = message.width().div_ceil(inner_width);
    let area = centered_rect(size, width, msg_lines as u16 + 4);

    let block = Block::default()
        .title(Span::styled("Info", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    draw_modal_text(f, area, block, message);
}

fn draw_modal_text(f: &mut Frame, area: Rect, block: Block<'_>, message: &str) {
    let text = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner_area);

    f.render_widget(text, rows[0]);
    let hint = Paragraph::new("Press Esc to dismiss")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(hint, rows[1]);
}

fn draw_help_modal(f: &mut Frame, app: &App) {
    let size = f.size();
    let area = centered_rect(size, 60.min(size.width.saturating_sub(4)), 26.min(size.height.saturating_sub(4)));

    let block = Block::default()
        .title(Span::styled(
            " Help - Keybindings ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    f.render_widget(Clear, area);
    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let help_text: Vec<Line> = build_help_content(app.screen)
        .iter()
        .map(|(key, desc, is_header)| {
            if *is_header {
                Line::from(Span::styled(*key, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)))
            } else {
                Line::from(vec![
                    Span::styled(format!("{key:>12}"), Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                    Span::raw("  "),
                    Span::styled(*desc, Style::default().fg(Color::White)),
                ])
            }
        })
        .collect();

    f.render_widget(Paragraph::new(help_text).wrap(Wrap { trim: true }), inner_area);
}

fn build_help_content(screen: Screen) -> Vec<(&'static str, &'static str, bool)> {
    let mut lines = vec![
        ("── Global ──", "", true),
        ("F1 / ?", "Show this help", false),
        (":q / :quit", "Quit application", false),
        (":open <song>", "Open a song by title or #number", false),
        (":reload", "Reload the hymnal directory", false),
        ("Esc", "Go back / dismiss modal", false),
        ("", "", false),
    ];

    match screen {
        Screen::Home => lines.extend([("── Home ──", "", true), ("Any key", "Choose a region", false)]),
        Screen::Regions => lines.extend([
            ("── Regions ──", "", true),
            ("↑/↓ or j/k", "Navigate", false),
            ("Enter", "Show artists", false),
        ]),
        Screen::Artists => lines.extend([
            ("── Artists ──", "", true),
            ("↑/↓ or j/k", "Navigate", false),
            ("/", "Search artists", false),
            ("Enter", "Show songs", false),
        ]),
        Screen::Songs => lines.extend([
            ("── Songs ──", "", true),
            ("↑/↓ or j/k", "Navigate", false),
            ("/", "Search songs", false),
            ("f", "Favorites only", false),
            ("Space", "Toggle favorite", false),
            ("Enter", "Show lyrics", false),
        ]),
        Screen::Lyrics => lines.extend([
            ("── Lyrics ──", "", true),
            ("+ / -", "Transpose up / down", false),
            ("0", "Original key", false),
            ("c", "Show / hide chords", false),
            ("] / [", "Larger / smaller text", false),
            ("s", "Toggle favorite", false),
            ("y", "Copy song to clipboard", false),
            ("↑/↓ PgUp/PgDn", "Scroll", false),
        ]),
    }

    lines.push(("", "", false));
    lines.push(("Press Esc, F1 or ? to close", "", true));
    lines
}

#[cfg(test)]
pub(crate) mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::config::Config;
    use crate::preferences::PreferenceStore;

    /// Render the app once and return the screen as text rows.
    pub(crate) fn render(app: &mut App, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(usize::from(width))
            .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect())
            .collect()
    }

    #[test]
    fn test_home_screen() {
        let mut app = App::with_preferences(Config::default(), PreferenceStore::in_memory());
        let screen = render(&mut app, 80, 24).join("\n");
        assert!(screen.contains("Press any key to continue"));
    }

    #[test]
    fn test_help_modal_lists_screen_keys() {
        let mut app = App::with_preferences(Config::default(), PreferenceStore::in_memory());
        app.execute_command("open amazing");
        app.show_help = true;
        let screen = render(&mut app, 80, 40).join("\n");
        assert!(screen.contains("Transpose up / down"));
    }

    #[test]
    fn test_error_modal() {
        let mut app = App::with_preferences(Config::default(), PreferenceStore::in_memory());
        app.error_message = Some("Something broke".to_string());
        let screen = render(&mut app, 80, 24).join("\n");
        assert!(screen.contains("Something broke"));
        assert!(screen.contains("Press Esc to dismiss"));
    }

    #[test]
    fn test_help_text_separators() {
        let spans = create_help_text(&[("a", "one"), ("b", "two")]);
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, " a: one | b: two");
    }

    #[test]
    fn test_centered_rect_clamps() {
        let outer = Rect::new(0, 0, 10, 4);
        assert_eq!(centered_rect(outer, 4, 2), Rect::new(3, 1, 4, 2));
        assert_eq!(centered_rect(outer, 40, 20), outer);
    }
}
