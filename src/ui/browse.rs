use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

use crate::app::{App, ALPHABETICAL_ENTRY};
use crate::catalog::ArtistScope;
use crate::ui::create_titled_block;

fn row_style(is_selected: bool) -> (&'static str, Style) {
    if is_selected {
        ("> ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    } else {
        ("  ", Style::default().fg(Color::White))
    }
}

fn render_list(f: &mut Frame, area: Rect, title: &str, items: Vec<ListItem<'_>>, state: &mut ListState) {
    let list = List::new(items)
        .block(create_titled_block(title, true))
        .highlight_style(Style::default().bg(Color::Rgb(80, 80, 120)).add_modifier(Modifier::BOLD));
    f.render_stateful_widget(list, area, state);
}

/// Draw the region list with the A-Z entry last.
pub fn draw_regions(f: &mut Frame, app: &mut App, area: Rect) {
    let selected = app.region_state.selected();
    let regions = app.catalog.regions();

    let mut items: Vec<ListItem> = regions
        .iter()
        .enumerate()
        .map(|(i, region)| {
            let (prefix, style) = row_style(Some(i) == selected);
            ListItem::new(Line::from(vec![
                Span::raw(prefix),
                Span::raw(format!("{} ", region.icon)),
                Span::styled(region.name.clone(), style),
                Span::styled(format!("  {} hymns", region.song_count), Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();

    let (prefix, style) = row_style(selected == Some(regions.len()));
    items.push(ListItem::new(Line::from(vec![
        Span::raw(prefix),
        Span::styled(ALPHABETICAL_ENTRY, style.fg(Color::Cyan)),
    ])));

    render_list(f, area, app.screen.title(), items, &mut app.region_state);
}

/// Draw the artist list for the current scope and search.
pub fn draw_artists(f: &mut Frame, app: &mut App, area: Rect) {
    let selected = app.artist_state.selected();
    let title = match &app.artist_scope {
        ArtistScope::Region(id) => app
            .catalog
            .region(id)
            .map_or_else(|| "Artists".to_string(), |r| format!("Artists - {}", r.name)),
        ArtistScope::Alphabetical => "All Artists (A-Z)".to_string(),
    };
    let title = with_query(title, &app.artist_query);

    let items: Vec<ListItem> = app
        .visible_artists()
        .iter()
        .enumerate()
        .map(|(i, artist)| {
            let (prefix, style) = row_style(Some(i) == selected);
            ListItem::new(Line::from(vec![
                Span::raw(prefix),
                Span::styled(artist.name.clone(), style),
                Span::styled(format!("  {} songs", artist.song_count), Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();

    let items = or_placeholder(items, "No artists found");
    render_list(f, area, &title, items, &mut app.artist_state);
}

/// Draw the song list for the current artist, search and filter.
pub fn draw_songs(f: &mut Frame, app: &mut App, area: Rect) {
    let selected = app.song_state.selected();
    let artist_name = app
        .current_artist
        .as_ref()
        .and_then(|id| app.catalog.artist(id))
        .map_or("Songs", |a| a.name.as_str());
    let mut title = with_query(artist_name.to_string(), &app.song_query);
    if app.favorites_only {
        title.push_str(" [favorites]");
    }

    let items: Vec<ListItem> = app
        .visible_songs()
        .iter()
        .enumerate()
        .map(|(i, song)| {
            let (prefix, style) = row_style(Some(i) == selected);
            let star = if app.favorites.is_favorite(&song.id) {
                Span::styled("★ ", Style::default().fg(Color::Yellow))
            } else {
                Span::styled("☆ ", Style::default().fg(Color::DarkGray))
            };
            let mut spans = vec![Span::raw(prefix), star];
            if let Some(number) = song.number {
                spans.push(Span::styled(format!("#{number} "), Style::default().fg(Color::Gray)));
            }
            spans.push(Span::styled(song.title.clone(), style));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let placeholder = if app.favorites_only { "No favorite songs" } else { "No songs found" };
    let items = or_placeholder(items, placeholder);
    render_list(f, area, &title, items, &mut app.song_state);
}

fn with_query(title: String, query: &str) -> String {
    if query.is_empty() {
        title
    } else {
        format!("{title} (search: {query})")
    }
}

fn or_placeholder<'a>(items: Vec<ListItem<'a>>, text: &'a str) -> Vec<ListItem<'a>> {
    if items.is_empty() {
        vec![ListItem::new(Span::styled(text, Style::default().fg(Color::Gray)))]
    } else {
        items
    }
}
