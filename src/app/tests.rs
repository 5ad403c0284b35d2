use super::*;
use crate::config::UiSettings;
use crate::library::{DEFAULT_THUMBNAIL, PlaylistItem, Song};
use crate::player::{PlaybackController, PlaybackDevice, SilentDevice};
use crate::store::{MemoryBackend, PersistentStore, SONGS_KEY};
use crossterm::event::KeyCode;
use std::collections::HashSet;

/// Silent device whose "song finished" flag can be raised by hand.
#[derive(Debug, Default)]
struct EndingDevice {
    inner: SilentDevice,
    ended: bool,
}

impl PlaybackDevice for EndingDevice {
    fn load(&mut self, src: &str) {
        self.ended = false;
        self.inner.load(src);
    }

    fn play(&mut self) {
        self.inner.play();
    }

    fn pause(&mut self) {
        self.inner.pause();
    }

    fn paused(&self) -> bool {
        self.inner.paused()
    }

    fn current_time(&self) -> f64 {
        self.inner.current_time()
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.inner.set_current_time(seconds);
    }

    fn duration(&self) -> f64 {
        self.inner.duration()
    }

    fn volume(&self) -> f64 {
        self.inner.volume()
    }

    fn set_volume(&mut self, volume: f64) {
        self.inner.set_volume(volume);
    }

    fn ended(&self) -> bool {
        self.ended
    }
}

fn seeded_store() -> PersistentStore {
    let mut store = PersistentStore::new(MemoryBackend::new());
    store.load_all_data().unwrap();
    store
}

fn playlist_screen(store: &PersistentStore, id: Option<i64>) -> PlaylistScreen<SilentDevice> {
    let mut screen = PlaylistScreen::new(PlaybackController::new(SilentDevice::new()), 5);
    screen.open(store, id);
    screen
}

fn song_names(songs: &[Song]) -> Vec<&str> {
    songs.iter().map(|s| s.name.as_str()).collect()
}

// Library screen

#[test]
fn library_open_seeds_and_lists_everything() {
    let mut store = PersistentStore::new(MemoryBackend::new());
    let screen = LibraryScreen::open(&mut store, false).unwrap();

    assert_eq!(screen.playlists.len(), 1);
    assert_eq!(screen.songs.len(), 5);
    assert_eq!(screen.entries().len(), 6);
    assert!(matches!(screen.entries()[0], LibraryEntry::Playlist(p) if p.id == 0));
    assert_eq!(screen.selected_playlist_id(), Some(0));
    assert_eq!(screen.selected_song_id(), None);
}

#[test]
fn library_search_filters_both_lists() {
    let mut store = PersistentStore::new(MemoryBackend::new());
    let mut screen = LibraryScreen::open(&mut store, false).unwrap();

    let results = screen.search("coma");
    assert!(results.playlists.is_empty());
    assert_eq!(song_names(&results.songs), vec!["Intrigue Fun", "Bounce"]);

    let results = screen.search("base");
    assert_eq!(results.playlists.len(), 1);
    assert!(results.songs.is_empty());

    let results = screen.search("");
    assert_eq!(results.playlists.len(), 1);
    assert_eq!(results.songs.len(), 5);
}

#[test]
fn library_exact_toggle_anchors_and_respects_case() {
    let mut store = PersistentStore::new(MemoryBackend::new());
    let mut screen = LibraryScreen::open(&mut store, false).unwrap();

    screen.search("electronic");
    assert_eq!(screen.results().songs.len(), 2);

    assert!(screen.toggle_exact());
    assert!(screen.results().songs.is_empty());

    screen.search("Electronic");
    assert_eq!(song_names(&screen.results().songs), vec!["Whip", "Bounce"]);

    assert!(!screen.toggle_exact());
}

#[test]
fn library_open_honours_initial_exact_setting() {
    let mut store = PersistentStore::new(MemoryBackend::new());
    let screen = LibraryScreen::open(&mut store, true).unwrap();
    assert!(screen.query.exact);
}

#[test]
fn library_typing_edits_query() {
    let mut store = PersistentStore::new(MemoryBackend::new());
    let mut screen = LibraryScreen::open(&mut store, false).unwrap();

    screen.typing = true;
    screen.push_query_char('p');
    screen.push_query_char('o');
    assert_eq!(screen.query.text, "po");
    assert_eq!(song_names(&screen.results().songs), vec!["Summer Pranks"]);

    screen.pop_query_char();
    assert_eq!(screen.query.text, "p");

    screen.clear_query();
    assert!(screen.query.text.is_empty());
    assert!(!screen.typing);
    assert_eq!(screen.entries().len(), 6);
}

#[test]
fn library_cursor_wraps_and_clamps_after_filtering() {
    let mut store = PersistentStore::new(MemoryBackend::new());
    let mut screen = LibraryScreen::open(&mut store, false).unwrap();

    screen.prev();
    assert_eq!(screen.selected, 5);
    assert_eq!(screen.selected_song_id(), Some(4));
    screen.next();
    assert_eq!(screen.selected, 0);

    screen.selected = 5;
    screen.search("whip");
    assert_eq!(screen.selected, 0);
    assert_eq!(screen.selected_song_id(), Some(0));

    screen.search("nothing matches this");
    assert_eq!(screen.selected, 0);
    assert!(screen.selected_entry().is_none());
    screen.next();
    assert_eq!(screen.selected, 0);
}

#[test]
fn toggle_liked_persists_through_replace() {
    let mut store = PersistentStore::new(MemoryBackend::new());
    let mut screen = LibraryScreen::open(&mut store, false).unwrap();

    assert_eq!(screen.toggle_liked(&mut store, 2).unwrap(), Some(true));
    assert!(screen.songs[2].liked);
    let stored: Song = store.find_by_id(SONGS_KEY, 2).unwrap();
    assert!(stored.liked);

    assert_eq!(screen.toggle_liked(&mut store, 2).unwrap(), Some(false));
    let stored: Song = store.find_by_id(SONGS_KEY, 2).unwrap();
    assert!(!stored.liked);

    let others: Vec<Song> = store.read(SONGS_KEY).unwrap();
    assert!(others.iter().all(|s| !s.liked));
}

#[test]
fn toggle_liked_unknown_song_is_none() {
    let mut store = PersistentStore::new(MemoryBackend::new());
    let mut screen = LibraryScreen::open(&mut store, false).unwrap();
    assert_eq!(screen.toggle_liked(&mut store, 99).unwrap(), None);
}

#[test]
fn liked_state_survives_reopening_the_library() {
    let mut store = PersistentStore::new(MemoryBackend::new());
    let mut screen = LibraryScreen::open(&mut store, false).unwrap();
    screen.toggle_liked(&mut store, 0).unwrap();

    let reopened = LibraryScreen::open(&mut store, false).unwrap();
    assert!(reopened.songs[0].liked);
}

// Playlist screen

#[test]
fn playlist_open_resolves_songs_in_order() {
    let store = seeded_store();
    let screen = playlist_screen(&store, Some(0));

    assert_eq!(screen.playlist.as_ref().map(|p| p.id), Some(0));
    assert_eq!(song_names(screen.songs()), vec!["Whip", "Overflow"]);
    assert_eq!(screen.controller.current_index(), 0);
    assert_eq!(screen.controller.device().src(), Some("./assets/media/01_song.mp3"));
    assert!(screen.controller.is_paused());
}

#[test]
fn playlist_open_without_or_with_unknown_id_loads_nothing() {
    let store = seeded_store();

    let mut screen = playlist_screen(&store, None);
    assert!(screen.playlist.is_none());
    assert!(screen.songs().is_empty());

    assert!(!screen.open(&store, Some(42)));
    assert!(screen.songs().is_empty());

    assert!(screen.open(&store, Some(0)));
    assert!(!screen.open(&store, None));
    assert!(screen.songs().is_empty());
}

#[test]
fn play_selected_switches_track() {
    let store = seeded_store();
    let mut screen = playlist_screen(&store, Some(0));

    screen.next();
    screen.play_selected();
    assert_eq!(screen.controller.current_index(), 1);
    assert!(!screen.controller.is_paused());
    assert_eq!(screen.controller.device().src(), Some("./assets/media/02_song.mp3"));
}

#[test]
fn jump_to_plays_the_typed_track_number() {
    let store = seeded_store();
    let mut screen = playlist_screen(&store, Some(0));

    assert!(screen.jump_to("2"));
    assert_eq!(screen.selected, 1);
    assert_eq!(screen.controller.current_index(), 1);
    assert!(!screen.controller.is_paused());
    assert_eq!(screen.controller.device().src(), Some("./assets/media/02_song.mp3"));

    assert!(screen.jump_to(" 1 "));
    assert_eq!(screen.controller.current_index(), 0);
}

#[test]
fn jump_to_rejects_numbers_outside_the_playlist() {
    let store = seeded_store();
    let mut screen = playlist_screen(&store, Some(0));

    for raw in ["0", "3", "-1", "1.5", "two", ""] {
        assert!(!screen.jump_to(raw), "{raw:?}");
    }
    assert_eq!(screen.selected, 0);
    assert_eq!(screen.controller.current_index(), 0);
    assert!(screen.controller.is_paused());
}

#[test]
fn cursor_wraps_over_songs() {
    let store = seeded_store();
    let mut screen = playlist_screen(&store, Some(0));

    screen.prev();
    assert_eq!(screen.selected, 1);
    screen.next();
    assert_eq!(screen.selected, 0);

    let mut empty = playlist_screen(&store, None);
    empty.next();
    empty.prev();
    assert_eq!(empty.selected, 0);
}

#[test]
fn shortcuts_drive_the_controller() {
    let store = seeded_store();
    let mut screen = playlist_screen(&store, Some(0));

    screen.handle_shortcut(Shortcut::PlayPause);
    assert!(!screen.controller.is_paused());
    screen.handle_shortcut(Shortcut::PlayPause);
    assert!(screen.controller.is_paused());

    screen.handle_shortcut(Shortcut::GoForward);
    assert_eq!(screen.controller.device().current_time(), 5.0);
    screen.handle_shortcut(Shortcut::GoForward);
    screen.handle_shortcut(Shortcut::GoBack);
    assert_eq!(screen.controller.device().current_time(), 5.0);

    screen.handle_shortcut(Shortcut::NextSong);
    assert_eq!(screen.controller.current_index(), 1);
    screen.handle_shortcut(Shortcut::NextSong);
    assert_eq!(screen.controller.current_index(), 0);
    screen.handle_shortcut(Shortcut::PreviousSong);
    assert_eq!(screen.controller.current_index(), 1);

    screen.handle_shortcut(Shortcut::Mute);
    assert!(screen.controller.is_muted());
    screen.handle_shortcut(Shortcut::Mute);
    assert!(!screen.controller.is_muted());
    assert_eq!(screen.controller.device().volume(), 1.0);
}

#[test]
fn skip_length_follows_configuration() {
    let store = seeded_store();
    let mut screen = PlaylistScreen::new(PlaybackController::new(SilentDevice::new()), 12);
    screen.open(&store, Some(0));

    screen.handle_shortcut(Shortcut::GoForward);
    assert_eq!(screen.controller.device().current_time(), 12.0);
}

#[test]
fn seek_percent_needs_a_known_length() {
    let store = seeded_store();
    let mut screen = playlist_screen(&store, Some(0));

    screen.handle_shortcut(Shortcut::GoForward);
    screen.seek_percent(50.0);
    assert_eq!(screen.controller.device().current_time(), 5.0);
}

#[test]
fn shuffle_toggle_flips_controller_state() {
    let store = seeded_store();
    let mut screen = playlist_screen(&store, Some(0));
    assert!(screen.toggle_shuffle());
    assert!(screen.controller.is_shuffled());
    assert!(!screen.toggle_shuffle());
}

#[test]
fn now_playing_uses_configured_fields() {
    let store = seeded_store();
    let mut screen = playlist_screen(&store, Some(0));

    let ui = UiSettings::default();
    assert_eq!(screen.now_playing(&ui).as_deref(), Some("Whip - Prazkhanal"));

    screen.handle_shortcut(Shortcut::NextSong);
    assert_eq!(screen.now_playing(&ui).as_deref(), Some("Overflow - Everet Almond"));

    let empty = playlist_screen(&store, None);
    assert_eq!(empty.now_playing(&ui), None);
}

#[test]
fn tick_advances_when_the_song_ends() {
    let store = seeded_store();
    let mut screen = PlaylistScreen::new(PlaybackController::new(EndingDevice::default()), 5);
    screen.open(&store, Some(0));
    screen.play_selected();

    screen.tick();
    assert_eq!(screen.controller.current_index(), 0);

    screen.controller.device_mut().ended = true;
    screen.tick();
    assert_eq!(screen.controller.current_index(), 1);
    assert!(!screen.controller.device().ended);
    assert!(!screen.controller.is_paused());
}

#[test]
fn close_pauses_and_forgets_the_playlist() {
    let store = seeded_store();
    let mut screen = playlist_screen(&store, Some(0));
    screen.play_selected();

    screen.close();
    assert!(screen.controller.is_paused());
    assert!(screen.playlist.is_none());
}

// Shortcuts

#[test]
fn shortcuts_bind_six_distinct_keys() {
    let keys: HashSet<KeyCode> = Shortcut::ALL.iter().map(|s| s.key()).collect();
    assert_eq!(keys.len(), 6);

    for shortcut in Shortcut::ALL {
        assert_eq!(Shortcut::from_key(shortcut.key()), Some(shortcut));
    }
}

#[test]
fn keys_map_back_to_shortcuts() {
    assert_eq!(Shortcut::from_key(KeyCode::Right), Some(Shortcut::GoForward));
    assert_eq!(Shortcut::from_key(KeyCode::Left), Some(Shortcut::GoBack));
    assert_eq!(Shortcut::from_key(KeyCode::Char(' ')), Some(Shortcut::PlayPause));
    assert_eq!(Shortcut::from_key(KeyCode::Char('n')), Some(Shortcut::NextSong));
    assert_eq!(Shortcut::from_key(KeyCode::Char('p')), Some(Shortcut::PreviousSong));
    assert_eq!(Shortcut::from_key(KeyCode::Char('m')), Some(Shortcut::Mute));
    assert_eq!(Shortcut::from_key(KeyCode::Char('z')), None);
}

#[test]
fn hints_mention_the_skip_length() {
    assert_eq!(Shortcut::GoForward.hint(5), "[→] +5s");
    assert_eq!(Shortcut::GoBack.hint(10), "[←] -10s");
}

// Playlist editor

#[test]
fn create_playlist_maps_names_and_assigns_id() {
    let mut store = seeded_store();

    let draft = PlaylistDraft {
        name: "Road trip".to_string(),
        description: "Loud".to_string(),
        thumbnail: None,
        song_names: vec!["Whip".into(), "Not a song".into(), "Bounce".into()],
    };
    let created = create_playlist(&mut store, draft).unwrap();

    assert_eq!(created.id, 1);
    assert_eq!(created.thumbnail, DEFAULT_THUMBNAIL);
    assert_eq!(
        created.songs,
        vec![PlaylistItem::Ref { id: 0 }, PlaylistItem::Ref { id: 3 }]
    );

    let screen = playlist_screen(&store, Some(created.id));
    assert_eq!(song_names(screen.songs()), vec!["Whip", "Bounce"]);
}

#[test]
fn create_playlist_keeps_given_thumbnail_and_ignores_blank_one() {
    let mut store = seeded_store();

    let with_image = create_playlist(
        &mut store,
        PlaylistDraft {
            name: "A".into(),
            thumbnail: Some("./assets/img/a.png".into()),
            ..PlaylistDraft::default()
        },
    )
    .unwrap();
    assert_eq!(with_image.thumbnail, "./assets/img/a.png");

    let blank = create_playlist(
        &mut store,
        PlaylistDraft {
            name: "B".into(),
            thumbnail: Some("  ".into()),
            ..PlaylistDraft::default()
        },
    )
    .unwrap();
    assert_eq!(blank.thumbnail, DEFAULT_THUMBNAIL);
    assert_eq!(blank.id, with_image.id + 1);
    assert!(blank.songs.is_empty());
}

#[test]
fn created_playlist_shows_up_in_the_library() {
    let mut store = PersistentStore::new(MemoryBackend::new());
    let mut screen = LibraryScreen::open(&mut store, false).unwrap();

    create_playlist(
        &mut store,
        PlaylistDraft {
            name: "Chill".into(),
            description: "evening".into(),
            ..PlaylistDraft::default()
        },
    )
    .unwrap();
    screen.reload(&store);

    assert_eq!(screen.playlists.len(), 2);
    screen.search("evening");
    assert_eq!(screen.results().playlists.len(), 1);
    assert_eq!(screen.results().playlists[0].name, "Chill");
}
