//! Playback control.
//!
//! The controller owns the now-playing state and drives a single
//! [`PlaybackDevice`]. Randomness for shuffle comes from an injected
//! index source so the choice of next track can be scripted.

mod controller;
mod device;
mod random;
#[cfg(feature = "rodio-device")]
mod rodio_device;
mod timeline;

pub use controller::{Direction, PlaybackController, parse_index};
pub use device::{PlaybackDevice, SilentDevice};
#[cfg(feature = "rodio-device")]
pub use rodio_device::RodioDevice;
