/// The host's audio output, used as an opaque transport.
///
/// Times are in seconds, volume in `0.0..=1.0`. `duration` is `NaN` until a
/// source with a known length is loaded.
pub trait PlaybackDevice {
    /// Point the device at `src`, stopped at the start.
    fn load(&mut self, src: &str);
    fn play(&mut self);
    fn pause(&mut self);
    fn paused(&self) -> bool;
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64);
    fn duration(&self) -> f64;
    fn volume(&self) -> f64;
    fn set_volume(&mut self, volume: f64);

    /// Whether a loaded source played through to its end.
    fn ended(&self) -> bool {
        false
    }
}

impl<D: PlaybackDevice + ?Sized> PlaybackDevice for Box<D> {
    fn load(&mut self, src: &str) {
        (**self).load(src)
    }

    fn play(&mut self) {
        (**self).play()
    }

    fn pause(&mut self) {
        (**self).pause()
    }

    fn paused(&self) -> bool {
        (**self).paused()
    }

    fn current_time(&self) -> f64 {
        (**self).current_time()
    }

    fn set_current_time(&mut self, seconds: f64) {
        (**self).set_current_time(seconds)
    }

    fn duration(&self) -> f64 {
        (**self).duration()
    }

    fn volume(&self) -> f64 {
        (**self).volume()
    }

    fn set_volume(&mut self, volume: f64) {
        (**self).set_volume(volume)
    }

    fn ended(&self) -> bool {
        (**self).ended()
    }
}

/// Keeps transport state without producing sound.
///
/// Used when no audio output is available.
#[derive(Debug, Clone)]
pub struct SilentDevice {
    src: Option<String>,
    paused: bool,
    current_time: f64,
    volume: f64,
}

impl Default for SilentDevice {
    fn default() -> Self {
        Self {
            src: None,
            paused: true,
            current_time: 0.0,
            volume: 1.0,
        }
    }
}

impl SilentDevice {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }
}

impl PlaybackDevice for SilentDevice {
    fn load(&mut self, src: &str) {
        self.src = Some(src.to_string());
        self.paused = true;
        self.current_time = 0.0;
    }

    fn play(&mut self) {
        self.paused = false;
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn paused(&self) -> bool {
        self.paused
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.current_time = seconds.max(0.0);
    }

    fn duration(&self) -> f64 {
        f64::NAN
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
    }
}
