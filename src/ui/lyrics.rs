use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::chords::ChordLine;
use crate::constants::ui::{CONTROLS_HEIGHT, HEADER_HEIGHT};
use crate::ui::create_titled_block;

/// Draw the lyrics viewer: song header, control bar and chord sheet.
pub fn draw_lyrics(f: &mut Frame, app: &mut App, area: Rect) {
    let Some(view) = app.viewer.as_mut() else {
        return;
    };
    let sheet = app.catalog.sheet(&view.song_id);
    let is_favorite = app.favorites.is_favorite(&view.song_id);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(CONTROLS_HEIGHT),
            Constraint::Min(1),
        ])
        .split(area);

    // Header
    let star = if is_favorite {
        Span::styled(" ★", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" ☆", Style::default().fg(Color::DarkGray))
    };
    let header = vec![
        Line::from(vec![
            Span::styled(sheet.title.clone(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            star,
        ]),
        Line::from(Span::styled(sheet.artist.clone(), Style::default().fg(Color::Cyan))),
        Line::from(Span::styled(format!("Year: {}", sheet.year), Style::default().fg(Color::Gray))),
    ];
    let header_block = create_titled_block("Lyrics", true);
    f.render_widget(Paragraph::new(header).block(header_block), chunks[0]);

    // Controls
    let mut controls = vec![
        Span::raw(" Transpose: "),
        Span::styled(view.shift_label(), Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
    ];
    if let Some(key) = view.key_label(&sheet) {
        controls.push(Span::raw("  |  "));
        controls.push(Span::styled(key, Style::default().fg(Color::Green)));
    }
    controls.push(Span::raw("  |  Chords: "));
    controls.push(Span::raw(if view.show_chords { "on" } else { "off" }));
    controls.push(Span::raw(format!("  |  Size: {}", view.font_size)));
    f.render_widget(
        Paragraph::new(Line::from(controls)).block(create_titled_block("Controls", false)),
        chunks[1],
    );

    // Sheet
    let sheet_block = create_titled_block("", false);
    let inner = sheet_block.inner(chunks[2]);
    let lines = sheet_lines(&view.render(&sheet), view.line_spacing(), sheet.available);

    let max_scroll = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_sub(inner.height);
    view.scroll = view.scroll.min(max_scroll);

    f.render_widget(
        Paragraph::new(lines).block(sheet_block).scroll((view.scroll, 0)),
        chunks[2],
    );
}

/// Turn laid-out lyric lines into styled rows with blank spacing rows.
fn sheet_lines(chord_lines: &[ChordLine], spacing: u16, available: bool) -> Vec<Line<'static>> {
    let chord_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let lyric_style = if available {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC)
    };

    let mut lines = Vec::new();
    for line in chord_lines {
        if let Some(chords) = &line.chords {
            lines.push(Line::styled(format!(" {chords}"), chord_style));
        }
        lines.push(Line::styled(format!(" {}", line.lyrics), lyric_style));
        for _ in 0..spacing {
            lines.push(Line::default());
        }
    }
    lines
}
