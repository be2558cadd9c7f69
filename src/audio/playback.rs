//! Waveform playback
//!
//! [`WaveformSink`] is the seam between the audio-jack transmitter and the
//! physical output device. The production implementation opens a cpal
//! stream; tests substitute a mock to observe acquisition and release.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use cpal::traits::{DeviceTrait, StreamTrait};

use crate::audio::device::find_output_device;
use crate::audio::synth::PcmBuffer;
use crate::error::TransmitError;

/// How often the playback wait loop polls the stop flag
const STOP_POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Destination for a synthesized waveform
///
/// `play` acquires the output device, plays the buffer to completion (or
/// until `stop` is raised), and releases the device before returning. The
/// device must be released on every exit path, including stream failure.
pub trait WaveformSink: Send {
    fn play(&mut self, buffer: &PcmBuffer, stop: &AtomicBool) -> Result<(), TransmitError>;
}

/// cpal-backed sink playing through a configured or default output device
pub struct CpalSink {
    device_name: Option<String>,
}

impl CpalSink {
    pub fn new(device_name: Option<String>) -> Self {
        Self { device_name }
    }
}

impl WaveformSink for CpalSink {
    fn play(&mut self, buffer: &PcmBuffer, stop: &AtomicBool) -> Result<(), TransmitError> {
        let device = find_output_device(self.device_name.as_deref())?;

        let config = cpal::StreamConfig {
            channels: 2,
            sample_rate: cpal::SampleRate(buffer.sample_rate()),
            buffer_size: cpal::BufferSize::Default,
        };

        let samples: Arc<[i16]> = Arc::from(buffer.samples());
        let position = Arc::new(AtomicUsize::new(0));
        let writer_position = position.clone();

        // Output as f32; the i16 contract is on the buffer, not the wire to
        // the device
        let stream = device
            .build_output_stream(
                &config,
                move |out: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    let mut pos = writer_position.load(Ordering::Relaxed);
                    for slot in out.iter_mut() {
                        *slot = if pos < samples.len() {
                            let v = samples[pos] as f32 / 32768.0;
                            pos += 1;
                            v
                        } else {
                            0.0
                        };
                    }
                    writer_position.store(pos, Ordering::Relaxed);
                },
                move |err| {
                    tracing::warn!("Audio output stream error: {}", err);
                },
                None,
            )
            .map_err(|e| TransmitError::Stream(e.to_string()))?;

        stream.play().map_err(|e| TransmitError::Stream(e.to_string()))?;

        // Hold until the buffer duration elapses or we are preempted by a
        // newer transmit; dropping the stream releases the device either way
        let deadline = Instant::now() + Duration::from_millis(buffer.duration_ms() + 50);
        while Instant::now() < deadline && !stop.load(Ordering::Relaxed) {
            std::thread::sleep(STOP_POLL_INTERVAL);
        }

        Ok(())
    }
}
