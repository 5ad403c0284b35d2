use crate::app::{PlaylistDraft, create_playlist};
use crate::store::{self, PersistentStore};

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the interactive library.
    Browse,
    /// Create a playlist from the command line.
    NewPlaylist(PlaylistDraft),
    /// Wipe the stored library.
    Reset,
}

pub const USAGE: &str = "usage: mixtape [new-playlist <name> <description> [song names...] | reset]";

/// Parse the arguments following the program name.
pub fn parse_args<I>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let Some(cmd) = args.next() else {
        return Ok(Command::Browse);
    };

    match cmd.as_str() {
        "new-playlist" => {
            let name = args.next().ok_or_else(|| "new-playlist: missing <name>".to_string())?;
            let description = args.next().unwrap_or_default();
            Ok(Command::NewPlaylist(PlaylistDraft {
                name,
                description,
                thumbnail: None,
                song_names: args.collect(),
            }))
        }
        "reset" => match args.next() {
            None => Ok(Command::Reset),
            Some(extra) => Err(format!("reset: unexpected argument `{extra}`")),
        },
        "-h" | "--help" | "help" => Err(USAGE.to_string()),
        other => Err(format!("unknown command `{other}`\n{USAGE}")),
    }
}

pub fn new_playlist(store: &mut PersistentStore, draft: PlaylistDraft) -> store::Result<()> {
    store.load_all_data()?;
    let wanted = draft.song_names.len();
    let playlist = create_playlist(store, draft)?;
    println!(
        "created playlist {} \"{}\" with {} of {} song(s)",
        playlist.id,
        playlist.name,
        playlist.songs.len(),
        wanted
    );
    Ok(())
}

pub fn reset(store: &mut PersistentStore) -> store::Result<()> {
    store.reset_all()?;
    println!("library reset; defaults are restored on next start");
    Ok(())
}
