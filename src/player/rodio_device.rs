//! Audio output through `rodio`.
//!
//! Decoding is left to rodio; track length comes from the file's tags via
//! `lofty`. Seeking rebuilds the sink and skips into the file.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use lofty::file::AudioFile;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};

use super::device::PlaybackDevice;

pub struct RodioDevice {
    // `None` only for devices built without an output.
    stream: Option<OutputStream>,
    media_root: PathBuf,
    path: Option<PathBuf>,
    sink: Option<Sink>,
    paused: bool,
    // Elapsed time is tracked by hand: time played before the last pause plus
    // time since the last resume.
    started_at: Option<Instant>,
    accumulated: Duration,
    duration: f64,
    volume: f64,
}

impl RodioDevice {
    /// Open the default output. Relative sources are resolved against `media_root`.
    pub fn open(media_root: impl Into<PathBuf>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // rodio logs to stderr when the stream is dropped, which garbles the TUI.
        stream.log_on_drop(false);

        Ok(Self::with_stream(Some(stream), media_root.into()))
    }

    #[cfg(test)]
    fn without_output(media_root: impl Into<PathBuf>) -> Self {
        Self::with_stream(None, media_root.into())
    }

    fn with_stream(stream: Option<OutputStream>, media_root: PathBuf) -> Self {
        Self {
            stream,
            media_root,
            path: None,
            sink: None,
            paused: true,
            started_at: None,
            accumulated: Duration::ZERO,
            duration: f64::NAN,
            volume: 1.0,
        }
    }

    fn resolve(&self, src: &str) -> PathBuf {
        let p = Path::new(src);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            self.media_root.join(p)
        }
    }

    fn elapsed(&self) -> Duration {
        self.accumulated + self.started_at.map_or(Duration::ZERO, |st| st.elapsed())
    }

    /// Replace the sink with one positioned at `start_at`, keeping play/pause state.
    fn rebuild_at(&mut self, start_at: Duration) {
        if let Some(old) = self.sink.take() {
            old.stop();
        }
        self.accumulated = start_at;
        self.started_at = None;

        let (Some(stream), Some(path)) = (self.stream.as_ref(), self.path.as_deref()) else {
            return;
        };
        self.sink = create_sink_at(stream, path, start_at);

        if let Some(sink) = &self.sink {
            sink.set_volume(self.volume as f32);
            if !self.paused {
                sink.play();
                self.started_at = Some(Instant::now());
            }
        }
    }
}

/// Create a paused sink for `path` starting at `start_at`, or `None` when the
/// file cannot be opened or decoded.
fn create_sink_at(stream: &OutputStream, path: &Path, start_at: Duration) -> Option<Sink> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot open track");
            return None;
        }
    };

    let source = match Decoder::new(BufReader::new(file)) {
        Ok(d) => d.skip_duration(start_at),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot decode track");
            return None;
        }
    };

    let sink = Sink::connect_new(stream.mixer());
    sink.append(source);
    sink.pause();
    Some(sink)
}

fn read_duration(path: &Path) -> f64 {
    match lofty::read_from_path(path) {
        Ok(tagged) => tagged.properties().duration().as_secs_f64(),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "track length unknown");
            f64::NAN
        }
    }
}

impl PlaybackDevice for RodioDevice {
    fn load(&mut self, src: &str) {
        let path = self.resolve(src);
        self.duration = read_duration(&path);
        self.path = Some(path);
        self.paused = true;
        self.rebuild_at(Duration::ZERO);
    }

    fn play(&mut self) {
        if !self.paused {
            return;
        }
        let Some(sink) = &self.sink else {
            tracing::warn!(path = ?self.path, "nothing playable loaded, staying paused");
            return;
        };
        sink.play();
        self.paused = false;
        self.started_at = Some(Instant::now());
    }

    fn pause(&mut self) {
        if self.paused {
            return;
        }
        self.paused = true;
        if let Some(sink) = &self.sink {
            sink.pause();
        }
        if let Some(st) = self.started_at.take() {
            self.accumulated += st.elapsed();
        }
    }

    fn paused(&self) -> bool {
        self.paused
    }

    fn current_time(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    fn set_current_time(&mut self, seconds: f64) {
        if !seconds.is_finite() {
            return;
        }
        let mut seconds = seconds.max(0.0);
        if self.duration.is_finite() {
            seconds = seconds.min(self.duration);
        }
        self.rebuild_at(Duration::from_secs_f64(seconds));
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
        if let Some(sink) = &self.sink {
            sink.set_volume(self.volume as f32);
        }
    }

    fn ended(&self) -> bool {
        !self.paused && self.sink.as_ref().is_some_and(Sink::empty)
    }
}
