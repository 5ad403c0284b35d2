//! UI rendering helpers for the terminal user interface.
//!
//! Two screens share one layout: header, status box, main list, and a
//! controls footer. The playlist screen adds a timeline gauge.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::{LibraryEntry, LibraryScreen, PlaylistScreen, Shortcut};
use crate::config::Settings;
use crate::player::PlaybackDevice;

const LIBRARY_CONTROLS: &[(&str, &str)] = &[
    ("j/k", "up/down"),
    ("enter", "open playlist"),
    ("/", "search"),
    ("x", "exact match"),
    ("f", "like"),
    ("q", "quit"),
];

fn padded(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding {
            left: 1,
            right: 0,
            top: 0,
            bottom: 0,
        })
}

fn header(frame: &mut Frame, area: Rect, text: &str) {
    let header = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" mixtape ")
            .title_alignment(Alignment::Center),
    );
    frame.render_widget(header, area);
}

fn footer(frame: &mut Frame, area: Rect, text: String) {
    let footer = Paragraph::new(text)
        .block(padded(" controls "))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, area);
}

/// Render `items` with the `selected` row highlighted, keeping it in view.
fn selectable_list(frame: &mut Frame, area: Rect, title: &str, items: Vec<ListItem>, selected: usize) {
    let total = items.len();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if total > 0 {
        state.select(Some(selected.min(total - 1)));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn heart(liked: bool) -> &'static str {
    if liked { "♥" } else { "♡" }
}

/// Render the library: playlists and songs filtered by the search box.
pub fn draw_library(frame: &mut Frame, screen: &LibraryScreen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(4),
        ])
        .split(frame.area());

    header(frame, chunks[0], "Library");

    let status = {
        let mut parts: Vec<String> = Vec::new();
        let cursor = if screen.typing { "_" } else { "" };
        parts.push(format!("SEARCH: {}{}", screen.query.text, cursor));
        parts.push(if screen.query.exact {
            "EXACT: on".to_string()
        } else {
            "EXACT: off".to_string()
        });
        let results = screen.results();
        parts.push(format!(
            "{} playlist(s), {} song(s)",
            results.playlists.len(),
            results.songs.len()
        ));
        parts.join(" • ")
    };
    frame.render_widget(
        Paragraph::new(status).block(padded(" status ")),
        chunks[1],
    );

    let items: Vec<ListItem> = screen
        .entries()
        .into_iter()
        .map(|entry| match entry {
            LibraryEntry::Playlist(p) => {
                ListItem::new(format!("▤ {} ({} songs) - {}", p.name, p.songs.len(), p.description))
            }
            LibraryEntry::Song(s) => {
                ListItem::new(format!("{} {} | {} | {}", heart(s.liked), s.name, s.artist, s.genre))
            }
        })
        .collect();
    selectable_list(frame, chunks[2], " library ", items, screen.selected);

    let controls = LIBRARY_CONTROLS
        .iter()
        .map(|(k, v)| format!("[{k}] {v}"))
        .collect::<Vec<_>>()
        .join(" | ");
    footer(frame, chunks[3], controls);
}

/// Render the open playlist, its transport state and timeline.
pub fn draw_playlist<D: PlaybackDevice>(frame: &mut Frame, screen: &PlaylistScreen<D>, settings: &Settings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let title = screen
        .playlist
        .as_ref()
        .map(|p| format!("{} - {}", p.name, p.description))
        .unwrap_or_else(|| "No playlist".to_string());
    header(frame, chunks[0], &title);

    let controller = &screen.controller;
    let status = {
        let mut parts: Vec<String> = Vec::new();
        match screen.now_playing(&settings.ui) {
            Some(label) => parts.push(format!("Now playing: {label}")),
            None => parts.push("Nothing loaded".to_string()),
        }
        parts.push(if controller.is_paused() { "Paused" } else { "Playing" }.to_string());
        parts.push(if controller.is_shuffled() {
            "Shuffle: ON".to_string()
        } else {
            "Shuffle: OFF".to_string()
        });
        if controller.is_muted() {
            parts.push("Muted".to_string());
        }
        if let Some(typed) = &screen.jump {
            parts.push(format!("Go to track: {typed}_"));
        }
        parts.join(" • ")
    };
    frame.render_widget(
        Paragraph::new(status)
            .block(padded(" status "))
            .wrap(Wrap { trim: true }),
        chunks[1],
    );

    let timeline = controller.timeline();
    let ratio = (timeline.percent() / 100.0).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" timeline "))
        .ratio(if ratio.is_nan() { 0.0 } else { ratio })
        .label(format!("{} / {}", timeline.current_label(), timeline.end_label()));
    frame.render_widget(gauge, chunks[2]);

    let current = controller.current_index();
    let items: Vec<ListItem> = screen
        .songs()
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let marker = if i == current { "▶" } else { " " };
            ListItem::new(format!(
                "{marker} {:>2}  {} | {} | {} {}",
                i + 1,
                s.name,
                s.genre,
                s.artist,
                heart(s.liked)
            ))
        })
        .collect();
    selectable_list(frame, chunks[3], " songs ", items, screen.selected);

    let skip = settings.controls.skip_seconds;
    let mut controls: Vec<String> = vec!["[j/k] up/down".to_string(), "[enter] play".to_string()];
    controls.extend(Shortcut::ALL.iter().map(|s| s.hint(skip)));
    controls.push("[0-9] seek".to_string());
    controls.push("[g] go to track".to_string());
    controls.push("[s] shuffle".to_string());
    controls.push("[esc] back".to_string());
    controls.push("[q] quit".to_string());
    footer(frame, chunks[4], controls.join(" | "));
}
