//! Audio subsystem module

pub mod device;
pub mod playback;
pub mod synth;

pub use device::{find_output_device, list_output_devices, OutputDeviceInfo};
pub use playback::{CpalSink, WaveformSink};
pub use synth::{synthesize, PcmBuffer};
