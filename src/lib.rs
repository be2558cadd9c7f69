//! # irblast
//!
//! IR remote-control signal pipeline: normalizes heterogeneous IR code
//! encodings into one canonical form and transmits it through whichever
//! output hardware is present.
//!
//! ```text
//!  SourceCode record
//!   ├─ raw (carrier, pattern) ──────────────┐
//!   ├─ Pronto Hex ──── codec::pronto ───────┤
//!   ├─ protocol str ── codec::protocol ─────┤
//!   └─ (none) ──────── default fallback ────┤
//!                                           ▼
//!                                  CanonicalSignal
//!                                           │
//!                              transmit::select_index
//!                    ┌──────────────────────┼──────────────────────┐
//!                    ▼                      ▼                      ▼
//!           Built-in IR Blaster      USB IR Blaster      Audio Jack IR Blaster
//!             (/dev/lirc*)          (serial adapter)              │
//!                                                         audio::synthesize
//!                                                                 ▼
//!                                                     stereo PCM → output device
//! ```
//!
//! The audio-jack backend synthesizes a carrier-modulated PCM waveform and
//! plays it on a background worker; at most one playback is in flight per
//! sender, and a new transmit preempts the previous one.

pub mod audio;
pub mod codec;
pub mod config;
pub mod error;
pub mod sender;
pub mod signal;
pub mod transmit;

pub use error::{Error, Result};
pub use sender::{CodeLookup, IrSender};
pub use signal::{CanonicalSignal, SourceCode};

/// Application-wide constants
pub mod constants {
    /// Default PCM sample rate for waveform synthesis
    pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

    /// Carrier frequency used by NEC and the fallback signal
    pub const DEFAULT_CARRIER_HZ: u32 = crate::signal::DEFAULT_CARRIER_HZ;
}
