//! Built-in IR blaster backend
//!
//! Wraps the platform IR character device (Linux lirc, `/dev/lirc*`). The
//! lirc transmit format is a native-endian `u32` array of alternating
//! pulse/space durations in microseconds, starting and ending with a pulse;
//! a trailing space is dropped before writing.

use std::io::Write;
use std::path::PathBuf;

use crate::config::BuiltinConfig;
use crate::error::TransmitError;
use crate::signal::CanonicalSignal;
use crate::transmit::Transmitter;

pub struct BuiltinBlaster {
    device_paths: Vec<PathBuf>,
}

impl BuiltinBlaster {
    pub fn new(config: &BuiltinConfig) -> Self {
        Self {
            device_paths: config.device_paths.clone(),
        }
    }

    /// First present device node, if any
    fn device(&self) -> Option<&PathBuf> {
        self.device_paths.iter().find(|p| p.exists())
    }
}

impl Transmitter for BuiltinBlaster {
    fn name(&self) -> &str {
        "Built-in IR Blaster"
    }

    fn has_emitter(&self) -> bool {
        self.device().is_some()
    }

    fn transmit(&mut self, signal: &CanonicalSignal) -> Result<(), TransmitError> {
        let Some(path) = self.device() else {
            tracing::debug!("No built-in IR hardware present; transmit is a no-op");
            return Ok(());
        };

        let mut pulses = signal.pulses();
        if pulses.len() % 2 == 0 {
            // lirc requires an odd count ending on a pulse
            pulses = &pulses[..pulses.len() - 1];
        }

        let mut frame = Vec::with_capacity(pulses.len() * 4);
        for &pulse in pulses {
            frame.extend_from_slice(&pulse.to_ne_bytes());
        }

        let mut device = std::fs::OpenOptions::new()
            .write(true)
            .open(path)
            .map_err(|e| TransmitError::Hardware(format!("{}: {}", path.display(), e)))?;
        device
            .write_all(&frame)
            .map_err(|e| TransmitError::Hardware(format!("{}: {}", path.display(), e)))?;

        tracing::info!(
            "Transmitted {} pulses at {} Hz via {}",
            pulses.len(),
            signal.carrier_hz(),
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_hardware_is_silent_noop() {
        let config = BuiltinConfig {
            device_paths: vec![PathBuf::from("/dev/nonexistent-lirc-device")],
        };
        let mut blaster = BuiltinBlaster::new(&config);

        assert!(!blaster.has_emitter());

        let signal = CanonicalSignal::new(38000, vec![9000, 4500, 560]).unwrap();
        assert!(blaster.transmit(&signal).is_ok());
    }

    #[test]
    fn test_descriptor_reflects_probe() {
        let config = BuiltinConfig {
            device_paths: vec![PathBuf::from("/dev/nonexistent-lirc-device")],
        };
        let blaster = BuiltinBlaster::new(&config);
        let descriptor = blaster.descriptor();
        assert_eq!(descriptor.name, "Built-in IR Blaster");
        assert!(!descriptor.available);
    }
}
