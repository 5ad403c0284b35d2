use crate::library::Song;

use super::device::PlaybackDevice;
use super::random::{IndexSource, ThreadRngSource};
use super::timeline::Timeline;

/// Which neighbour `advance` moves to when shuffle is off.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Now-playing state over a loaded track list.
///
/// `current_index` always points into `tracks` while the list is non-empty.
/// Every operation on an empty list, or with an index outside the list, is a
/// no-op.
pub struct PlaybackController<D: PlaybackDevice> {
    device: D,
    tracks: Vec<Song>,
    current_index: usize,
    shuffle: bool,
    index_source: Box<dyn IndexSource>,
    /// Volume to restore on unmute, remembered when muting.
    restore_volume: Option<f64>,
    default_volume: f64,
}

impl<D: PlaybackDevice> PlaybackController<D> {
    pub fn new(device: D) -> Self {
        Self::with_index_source(device, ThreadRngSource)
    }

    pub fn with_index_source(device: D, index_source: impl IndexSource + 'static) -> Self {
        Self {
            device,
            tracks: Vec::new(),
            current_index: 0,
            shuffle: false,
            index_source: Box::new(index_source),
            restore_volume: None,
            default_volume: 1.0,
        }
    }

    /// Volume restored by unmuting when no level was remembered.
    pub fn with_default_volume(mut self, volume: f64) -> Self {
        if volume > 0.0 {
            self.default_volume = volume.min(1.0);
        }
        self
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    #[cfg(test)]
    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    pub fn tracks(&self) -> &[Song] {
        &self.tracks
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffle
    }

    pub fn set_shuffle(&mut self, shuffle: bool) {
        self.shuffle = shuffle;
    }

    pub fn is_paused(&self) -> bool {
        self.device.paused()
    }

    /// Replace the track list and cue its first track without playing it.
    pub fn load(&mut self, tracks: Vec<Song>) {
        self.tracks = tracks;
        self.current_index = 0;
        if let Some(first) = self.tracks.first() {
            self.device.load(&first.src);
        }
        tracing::debug!(tracks = self.tracks.len(), "loaded track list");
    }

    /// The track at `index`, when `index` lies in `0..len`.
    pub fn track_at(&self, index: i64) -> Option<&Song> {
        usize::try_from(index).ok().and_then(|i| self.tracks.get(i))
    }

    pub fn current_track(&self) -> Option<&Song> {
        self.tracks.get(self.current_index)
    }

    /// Without an index, resume when paused and pause otherwise. With an
    /// index, switch to that track and start playing it.
    pub fn play_or_toggle(&mut self, index: Option<i64>) {
        let Some(index) = index else {
            if self.device.paused() {
                self.device.play();
            } else {
                self.device.pause();
            }
            return;
        };

        let Some(src) = self.track_at(index).map(|t| t.src.clone()) else {
            tracing::debug!(index, tracks = self.tracks.len(), "ignoring invalid track index");
            return;
        };

        self.device.load(&src);
        // track_at only resolves indices inside the list.
        self.current_index = index as usize;
        self.device.play();
        tracing::debug!(index, src = %src, "playing track");
    }

    /// Move to the neighbouring track, or a random one while shuffling, and play it.
    pub fn advance(&mut self, direction: Direction) {
        let len = self.tracks.len();
        if len == 0 {
            return;
        }

        let next = if self.shuffle {
            self.index_source.next_index(len).min(len - 1)
        } else {
            match direction {
                Direction::Previous => (self.current_index + len - 1) % len,
                Direction::Next => (self.current_index + 1) % len,
            }
        };

        self.play_or_toggle(Some(next as i64));
    }

    /// Called when the device reports the current track finished.
    pub fn on_track_ended(&mut self) {
        self.advance(Direction::Next);
    }

    /// Jump to `percent` (0-100) of the current track's duration.
    pub fn seek_to_fraction(&mut self, percent: f64) {
        let duration = self.device.duration();
        if !duration.is_finite() || !percent.is_finite() {
            return;
        }
        let percent = percent.clamp(0.0, 100.0);
        self.device.set_current_time(percent * duration / 100.0);
    }

    /// Nudge the playback position by `delta` seconds, either way.
    pub fn scrub(&mut self, delta: f64) {
        let now = self.device.current_time();
        self.device.set_current_time(now + delta);
    }

    pub fn is_muted(&self) -> bool {
        self.device.volume() == 0.0
    }

    /// Flip between silence and the last audible volume. Returns whether the
    /// device is muted afterwards.
    pub fn mute_toggle(&mut self) -> bool {
        if self.is_muted() {
            let volume = self.restore_volume.take().unwrap_or(self.default_volume);
            self.device.set_volume(volume);
            false
        } else {
            self.restore_volume = Some(self.device.volume());
            self.device.set_volume(0.0);
            true
        }
    }

    pub fn shuffle_toggle(&mut self) -> bool {
        self.shuffle = !self.shuffle;
        self.shuffle
    }

    /// Position and length of the current track.
    pub fn timeline(&self) -> Timeline {
        Timeline {
            current: self.device.current_time(),
            duration: self.device.duration(),
        }
    }
}

/// Parse a track index typed or stored as text.
///
/// Only plain integers are accepted; `"true"`, `"1.5"` or `"a"` are rejected.
pub fn parse_index(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}
