use crossterm::event::KeyCode;

/// Keyboard actions available while a playlist is open.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Shortcut {
    GoForward,
    GoBack,
    PlayPause,
    NextSong,
    PreviousSong,
    Mute,
}

impl Shortcut {
    pub const ALL: [Shortcut; 6] = [
        Shortcut::GoForward,
        Shortcut::GoBack,
        Shortcut::PlayPause,
        Shortcut::NextSong,
        Shortcut::PreviousSong,
        Shortcut::Mute,
    ];

    pub fn key(self) -> KeyCode {
        match self {
            Shortcut::GoForward => KeyCode::Right,
            Shortcut::GoBack => KeyCode::Left,
            Shortcut::PlayPause => KeyCode::Char(' '),
            Shortcut::NextSong => KeyCode::Char('n'),
            Shortcut::PreviousSong => KeyCode::Char('p'),
            Shortcut::Mute => KeyCode::Char('m'),
        }
    }

    pub fn from_key(code: KeyCode) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == code)
    }

    /// Key hint shown in the controls bar.
    pub fn hint(self, skip_seconds: u64) -> String {
        match self {
            Shortcut::GoForward => format!("[→] +{skip_seconds}s"),
            Shortcut::GoBack => format!("[←] -{skip_seconds}s"),
            Shortcut::PlayPause => "[space] play/pause".to_string(),
            Shortcut::NextSong => "[n] next".to_string(),
            Shortcut::PreviousSong => "[p] previous".to_string(),
            Shortcut::Mute => "[m] mute".to_string(),
        }
    }
}
