//! Transmitter backends and selection
//!
//! Every backend implements [`Transmitter`]; selection scans a fixed
//! priority order (built-in, USB-serial, audio-jack) and picks the first
//! backend reporting an emitter. Availability is hardware state and can
//! change between calls (USB attach/detach), so it is queried fresh on
//! every send — never cached.

pub mod audio;
pub mod builtin;
pub mod usb;

use serde::Serialize;

use crate::error::TransmitError;
use crate::signal::CanonicalSignal;

pub use audio::AudioBlaster;
pub use builtin::BuiltinBlaster;
pub use usb::UsbBlaster;

/// Capability interface implemented by every IR output backend
pub trait Transmitter {
    /// Human-readable backend name
    fn name(&self) -> &str;

    /// Whether this backend can emit IR right now; side effects (device
    /// probing, USB enumeration) are confined to this method
    fn has_emitter(&self) -> bool;

    /// Transmit a canonical signal
    fn transmit(&mut self, signal: &CanonicalSignal) -> Result<(), TransmitError>;

    /// Snapshot of name and current availability
    fn descriptor(&self) -> TransmitterDescriptor {
        TransmitterDescriptor {
            name: self.name().to_string(),
            available: self.has_emitter(),
        }
    }
}

/// Name and freshly-queried availability of a backend
#[derive(Debug, Clone, Serialize)]
pub struct TransmitterDescriptor {
    pub name: String,
    pub available: bool,
}

/// Pick the index of the first available backend
///
/// Falls back to the last entry when none report availability; in practice
/// the audio backend sits last and is always available.
pub fn select_index(available: &[bool]) -> usize {
    available
        .iter()
        .position(|&a| a)
        .unwrap_or(available.len().saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_available_wins() {
        assert_eq!(select_index(&[true, true, true]), 0);
        assert_eq!(select_index(&[true, false, false]), 0);
        assert_eq!(select_index(&[false, true, true]), 1);
        assert_eq!(select_index(&[false, false, true]), 2);
    }

    #[test]
    fn test_none_available_defaults_to_last() {
        assert_eq!(select_index(&[false, false, false]), 2);
        assert_eq!(select_index(&[]), 0);
    }
}
