//! Canonical signal representation and source code records
//!
//! Every codec in the pipeline converges on [`CanonicalSignal`]: a carrier
//! frequency plus a pulse train of alternating mark/space durations in
//! microseconds, starting with a mark. A trailing unmatched mark is valid
//! and means "final mark with no following space".

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Default carrier frequency used by the NEC protocol and the fallback signal
pub const DEFAULT_CARRIER_HZ: u32 = 38_000;

/// Fallback pulse pattern (NEC-power-like demonstration frame)
pub const DEFAULT_FALLBACK_PATTERN: [u32; 10] =
    [9000, 4500, 560, 560, 560, 1690, 560, 560, 560, 560];

/// Normalized (carrier, pulse-train) pair, ready for transmission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalSignal {
    carrier_hz: u32,
    pulses: Vec<u32>,
}

impl CanonicalSignal {
    /// Construct a signal, rejecting values no backend could transmit
    pub fn new(carrier_hz: u32, pulses: Vec<u32>) -> Result<Self, CodecError> {
        if carrier_hz == 0 {
            return Err(CodecError::ZeroCarrier);
        }
        if pulses.is_empty() {
            return Err(CodecError::EmptyPattern);
        }
        Ok(Self { carrier_hz, pulses })
    }

    /// Carrier frequency in Hz (always > 0)
    pub fn carrier_hz(&self) -> u32 {
        self.carrier_hz
    }

    /// Mark/space durations in microseconds, starting with mark (never empty)
    pub fn pulses(&self) -> &[u32] {
        &self.pulses
    }

    /// Total pulse-train duration in microseconds
    pub fn duration_us(&self) -> u64 {
        self.pulses.iter().map(|&p| p as u64).sum()
    }

    /// The hard-coded fallback signal used when nothing else resolves
    pub fn default_fallback() -> Self {
        Self {
            carrier_hz: DEFAULT_CARRIER_HZ,
            pulses: DEFAULT_FALLBACK_PATTERN.to_vec(),
        }
    }
}

/// Source-format IR code record, as yielded by the external code database
///
/// Payload shapes are tested in fixed priority order: raw pattern, then
/// Pronto Hex, then protocol string, then the default fallback. Field names
/// serialize in camelCase to match the upstream irdb-style records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceCode {
    /// Raw carrier frequency in Hz, paired with `raw_pattern`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_frequency: Option<u32>,

    /// Raw mark/space durations in microseconds, paired with `raw_frequency`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_pattern: Option<Vec<u32>>,

    /// Pronto Hex string, e.g. "0000 006D 0000 0022 00AC 00AC ..."
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronto_hex: Option<String>,

    /// Compact protocol-parameter string, e.g. "NEC,32,159,0"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_code: Option<String>,
}

impl SourceCode {
    /// Record carrying only a raw pattern
    pub fn from_raw(carrier_hz: u32, pattern: Vec<u32>) -> Self {
        Self {
            raw_frequency: Some(carrier_hz),
            raw_pattern: Some(pattern),
            ..Default::default()
        }
    }

    /// Record carrying only a Pronto Hex string
    pub fn from_pronto(pronto_hex: impl Into<String>) -> Self {
        Self {
            pronto_hex: Some(pronto_hex.into()),
            ..Default::default()
        }
    }

    /// Record carrying only a protocol string
    pub fn from_protocol(protocol_code: impl Into<String>) -> Self {
        Self {
            protocol_code: Some(protocol_code.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_invariants() {
        assert_eq!(
            CanonicalSignal::new(0, vec![100]),
            Err(CodecError::ZeroCarrier)
        );
        assert_eq!(
            CanonicalSignal::new(38000, vec![]),
            Err(CodecError::EmptyPattern)
        );

        let signal = CanonicalSignal::new(38000, vec![9000, 4500, 560]).unwrap();
        assert_eq!(signal.carrier_hz(), 38000);
        assert_eq!(signal.pulses(), &[9000, 4500, 560]);
        assert_eq!(signal.duration_us(), 14060);
    }

    #[test]
    fn test_odd_pulse_count_is_valid() {
        // A trailing unmatched mark is a legal frame terminator
        let signal = CanonicalSignal::new(38000, vec![560]).unwrap();
        assert_eq!(signal.pulses().len(), 1);
    }

    #[test]
    fn test_default_fallback() {
        let signal = CanonicalSignal::default_fallback();
        assert_eq!(signal.carrier_hz(), 38000);
        assert_eq!(signal.pulses(), &DEFAULT_FALLBACK_PATTERN);
    }

    #[test]
    fn test_source_code_camel_case() {
        let record = SourceCode::from_protocol("NEC,32,159,0");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"protocolCode":"NEC,32,159,0"}"#);

        let parsed: SourceCode =
            serde_json::from_str(r#"{"prontoHex":"0000 006D 0000 0001 00AC 00AC"}"#).unwrap();
        assert!(parsed.pronto_hex.is_some());
        assert!(parsed.raw_pattern.is_none());
    }
}
