//! Audio-jack IR blaster backend
//!
//! Always available: any device with audio output qualifies. Transmission
//! synthesizes the carrier waveform and plays it on a dedicated worker
//! thread so the caller never blocks for the pulse-train duration.
//!
//! At most one playback is in flight per instance. A new transmit preempts
//! the previous one: raise its stop flag, join its worker (which releases
//! the output device), then start the next. Last request wins; nothing is
//! queued. Exclusivity comes from `&mut self` plus this sequential
//! hand-off, not from a lock.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use crossbeam_channel::{bounded, Receiver, Sender};

use crate::audio::playback::{CpalSink, WaveformSink};
use crate::audio::synth;
use crate::config::AudioConfig;
use crate::error::TransmitError;
use crate::signal::CanonicalSignal;
use crate::transmit::Transmitter;

type SinkFactory = Arc<dyn Fn() -> Box<dyn WaveformSink> + Send + Sync>;

pub struct AudioBlaster {
    sample_rate: u32,
    make_sink: SinkFactory,

    /// In-flight playback worker, if any
    worker: Option<JoinHandle<()>>,
    /// Stop flag of the in-flight worker
    stop: Arc<AtomicBool>,

    error_tx: Sender<TransmitError>,
    error_rx: Receiver<TransmitError>,
}

impl AudioBlaster {
    pub fn new(config: &AudioConfig) -> Self {
        let device_name = config.output_device.clone();
        Self::with_sink_factory(
            config.sample_rate,
            Arc::new(move || Box::new(CpalSink::new(device_name.clone())) as Box<dyn WaveformSink>),
        )
    }

    /// Construct with a custom sink factory; used by tests to substitute a
    /// mock output device
    pub fn with_sink_factory(sample_rate: u32, make_sink: SinkFactory) -> Self {
        let (error_tx, error_rx) = bounded::<TransmitError>(16);
        Self {
            sample_rate,
            make_sink,
            worker: None,
            stop: Arc::new(AtomicBool::new(false)),
            error_tx,
            error_rx,
        }
    }

    /// Stop and join the in-flight worker, releasing the output device
    fn stop_current(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    /// Block until any in-flight playback finishes naturally
    pub fn flush(&mut self) {
        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    /// Drain one asynchronous worker failure, if any
    pub fn take_error(&self) -> Option<TransmitError> {
        self.error_rx.try_recv().ok()
    }
}

impl Transmitter for AudioBlaster {
    fn name(&self) -> &str {
        "Audio Jack IR Blaster"
    }

    fn has_emitter(&self) -> bool {
        true
    }

    fn transmit(&mut self, signal: &CanonicalSignal) -> Result<(), TransmitError> {
        // Preempt the previous playback before touching the device again
        self.stop_current();

        let stop = Arc::new(AtomicBool::new(false));
        self.stop = stop.clone();

        let carrier_hz = signal.carrier_hz();
        let pulses = signal.pulses().to_vec();
        let sample_rate = self.sample_rate;
        let make_sink = self.make_sink.clone();
        let error_tx = self.error_tx.clone();

        let handle = std::thread::Builder::new()
            .name("ir-audio-playback".to_string())
            .spawn(move || {
                let buffer = synth::synthesize(carrier_hz, &pulses, sample_rate);
                tracing::debug!(
                    "Synthesized {} frames ({} ms) at {} Hz carrier",
                    buffer.frames(),
                    buffer.duration_ms(),
                    carrier_hz
                );

                let mut sink = (make_sink)();
                if let Err(e) = sink.play(&buffer, &stop) {
                    tracing::error!("Audio playback failed: {}", e);
                    let _ = error_tx.try_send(e);
                }
                // Sink drops here on every path, releasing the device
            })
            .map_err(|e| TransmitError::WorkerSpawn(e.to_string()))?;

        self.worker = Some(handle);
        Ok(())
    }
}

impl Drop for AudioBlaster {
    fn drop(&mut self) {
        self.stop_current();
    }
}
