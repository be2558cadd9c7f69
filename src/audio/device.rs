//! Audio output device enumeration
//!
//! Thin wrapper over cpal for the output side: listing devices so the UI
//! collaborator can render a picker, and resolving the device the waveform
//! sink should open.

use cpal::traits::{DeviceTrait, HostTrait};
use serde::Serialize;

use crate::error::TransmitError;

/// Output device summary for display and configuration
#[derive(Debug, Clone, Serialize)]
pub struct OutputDeviceInfo {
    pub name: String,
    pub is_default: bool,
    pub sample_rates: Vec<u32>,
    pub channels: Vec<u16>,
}

/// List all available audio output devices
pub fn list_output_devices() -> Vec<OutputDeviceInfo> {
    let host = cpal::default_host();
    let mut devices = Vec::new();

    let default_name = host.default_output_device().and_then(|d| d.name().ok());

    if let Ok(output_devices) = host.output_devices() {
        for device in output_devices {
            if let Ok(name) = device.name() {
                let is_default = default_name.as_ref() == Some(&name);
                let (sample_rates, channels) = output_capabilities(&device);

                devices.push(OutputDeviceInfo {
                    name,
                    is_default,
                    sample_rates,
                    channels,
                });
            }
        }
    }

    devices
}

/// Probe which common sample rates and channel counts a device supports
fn output_capabilities(device: &cpal::Device) -> (Vec<u32>, Vec<u16>) {
    let mut sample_rates = Vec::new();
    let mut channels = Vec::new();

    if let Ok(configs) = device.supported_output_configs() {
        for config in configs {
            for rate_val in [44100u32, 48000, 88200, 96000, 176400, 192000] {
                let rate = cpal::SampleRate(rate_val);
                if rate >= config.min_sample_rate()
                    && rate <= config.max_sample_rate()
                    && !sample_rates.contains(&rate_val)
                {
                    sample_rates.push(rate_val);
                }
            }

            let ch = config.channels();
            if !channels.contains(&ch) {
                channels.push(ch);
            }
        }
    }

    sample_rates.sort();
    channels.sort();

    (sample_rates, channels)
}

/// Resolve the output device to play through
///
/// `name` of `None` means the system default. A named device that is not
/// present is an error rather than a silent fallback, so a misconfigured
/// blaster setup surfaces instead of playing IR noise on the wrong output.
pub fn find_output_device(name: Option<&str>) -> Result<cpal::Device, TransmitError> {
    let host = cpal::default_host();

    match name {
        None => host
            .default_output_device()
            .ok_or_else(|| TransmitError::NoOutputDevice("no default output device".into())),
        Some(wanted) => {
            let devices = host
                .output_devices()
                .map_err(|e| TransmitError::NoOutputDevice(e.to_string()))?;

            for device in devices {
                if let Ok(device_name) = device.name() {
                    if device_name == wanted {
                        return Ok(device);
                    }
                }
            }

            Err(TransmitError::NoOutputDevice(wanted.to_string()))
        }
    }
}
