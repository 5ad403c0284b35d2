use crate::config;
use crate::player::{PlaybackController, PlaybackDevice, SilentDevice};
use crate::store::{self, FileBackend, MemoryBackend, PersistentStore};

/// Open the library store described by `settings.storage`.
pub fn open_store(settings: &config::Settings) -> store::Result<PersistentStore> {
    if settings.storage.in_memory {
        tracing::info!("using in-memory library");
        return Ok(PersistentStore::new(MemoryBackend::new()));
    }

    match settings.data_file() {
        Some(path) => {
            tracing::info!(path = %path.display(), "opening library file");
            Ok(PersistentStore::new(FileBackend::open(path)?))
        }
        None => {
            tracing::warn!("no data directory could be determined, library will not be saved");
            Ok(PersistentStore::new(MemoryBackend::new()))
        }
    }
}

/// Open the audio output, or a silent stand-in when none is available.
#[cfg_attr(not(feature = "rodio-device"), allow(unused_variables))]
pub fn open_device(settings: &config::Settings) -> Box<dyn PlaybackDevice> {
    #[cfg(feature = "rodio-device")]
    {
        let media_root = settings
            .playback
            .media_dir
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| std::path::PathBuf::from("."));

        match crate::player::RodioDevice::open(media_root) {
            Ok(device) => return Box::new(device),
            Err(e) => tracing::warn!(error = %e, "no audio output, playback will be silent"),
        }
    }

    Box::new(SilentDevice::new())
}

/// Controller over `device` with the playback defaults applied.
pub fn build_controller<D: PlaybackDevice>(device: D, settings: &config::Settings) -> PlaybackController<D> {
    let mut controller =
        PlaybackController::new(device).with_default_volume(settings.playback.default_volume);
    controller.set_shuffle(settings.playback.shuffle);
    controller
}
