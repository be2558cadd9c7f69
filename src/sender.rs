//! Transmit orchestration
//!
//! [`IrSender`] composes the pipeline: resolve a source record to a
//! canonical signal, pick the highest-priority available backend, transmit.

use crate::codec::resolver;
use crate::config::AppConfig;
use crate::error::{Error, Result, TransmitError};
use crate::signal::{CanonicalSignal, SourceCode};
use crate::transmit::{
    select_index, AudioBlaster, BuiltinBlaster, Transmitter, TransmitterDescriptor, UsbBlaster,
};

/// Interface to the external code database
///
/// Implementors match `device` and `function` case-insensitively.
pub trait CodeLookup {
    fn lookup(&self, brand: &str, device: &str, function: &str) -> Option<SourceCode>;
}

/// Top-level IR sender owning the three backends in priority order
pub struct IrSender {
    builtin: BuiltinBlaster,
    usb: UsbBlaster,
    audio: AudioBlaster,
}

impl IrSender {
    pub fn new(config: &AppConfig) -> Self {
        Self::from_parts(
            BuiltinBlaster::new(&config.builtin),
            UsbBlaster::new(&config.usb),
            AudioBlaster::new(&config.audio),
        )
    }

    /// Assemble from pre-built backends (tests substitute a mock audio sink)
    pub fn from_parts(builtin: BuiltinBlaster, usb: UsbBlaster, audio: AudioBlaster) -> Self {
        Self {
            builtin,
            usb,
            audio,
        }
    }

    /// Resolve and transmit a source record
    ///
    /// The resolver never fails, so once a record exists transmission never
    /// fails for "no code found".
    pub fn transmit_code(&mut self, record: &SourceCode) -> Result<()> {
        let signal = resolver::resolve(record);
        self.transmit_signal(&signal)
    }

    /// Look up a record by name and transmit it
    pub fn transmit_named(
        &mut self,
        lookup: &dyn CodeLookup,
        brand: &str,
        device: &str,
        function: &str,
    ) -> Result<()> {
        let record = lookup.lookup(brand, device, function).ok_or_else(|| {
            Error::NotFound(format!("{}/{}/{}", brand, device, function))
        })?;
        self.transmit_code(&record)
    }

    /// Transmit an already-canonical signal through the selected backend
    pub fn transmit_signal(&mut self, signal: &CanonicalSignal) -> Result<()> {
        // Availability is hardware state; query it fresh every time
        let available = [
            self.builtin.has_emitter(),
            self.usb.has_emitter(),
            self.audio.has_emitter(),
        ];
        let index = select_index(&available);

        let backend: &mut dyn Transmitter = match index {
            0 => &mut self.builtin,
            1 => &mut self.usb,
            _ => &mut self.audio,
        };

        tracing::info!(
            "Transmitting {} pulses at {} Hz via {}",
            signal.pulses().len(),
            signal.carrier_hz(),
            backend.name()
        );
        backend.transmit(signal)?;
        Ok(())
    }

    /// Name and current availability of every backend, in priority order
    pub fn descriptors(&self) -> Vec<TransmitterDescriptor> {
        vec![
            self.builtin.descriptor(),
            self.usb.descriptor(),
            self.audio.descriptor(),
        ]
    }

    /// Block until any in-flight audio playback completes
    pub fn flush(&mut self) {
        self.audio.flush();
    }

    /// Drain one asynchronous playback failure, if any
    pub fn take_error(&self) -> Option<TransmitError> {
        self.audio.take_error()
    }
}
