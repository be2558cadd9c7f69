//! Canonical code resolver
//!
//! Turns a [`SourceCode`] record into exactly one transmittable signal.
//! Payload shapes are tried in fixed priority order and every failure falls
//! through to the next stage, ending at a hard-coded fallback signal — so
//! resolution never fails. Callers can always obtain something to transmit
//! instead of branching on parse errors.

use crate::codec::{pronto, protocol};
use crate::signal::{CanonicalSignal, SourceCode};

/// Resolve a source record to a canonical signal; never fails
pub fn resolve(record: &SourceCode) -> CanonicalSignal {
    try_raw(record)
        .or_else(|| try_pronto(record))
        .or_else(|| try_protocol(record))
        .unwrap_or_else(|| {
            tracing::debug!("No payload resolved; using default fallback signal");
            CanonicalSignal::default_fallback()
        })
}

/// Raw payload, if both halves are present and structurally valid
fn try_raw(record: &SourceCode) -> Option<CanonicalSignal> {
    let carrier_hz = record.raw_frequency?;
    let pattern = record.raw_pattern.as_ref()?;
    CanonicalSignal::new(carrier_hz, pattern.clone()).ok()
}

/// Pronto payload, if present and it passes the validity pre-check
fn try_pronto(record: &SourceCode) -> Option<CanonicalSignal> {
    let text = record.pronto_hex.as_deref()?;
    if !pronto::is_valid(text) {
        return None;
    }
    match pronto::decode(text) {
        Ok(signal) => Some(signal),
        Err(e) => {
            tracing::debug!("Pronto decode failed, falling through: {}", e);
            None
        }
    }
}

/// Protocol payload, if present and the codec recognizes it
fn try_protocol(record: &SourceCode) -> Option<CanonicalSignal> {
    protocol::decode(record.protocol_code.as_deref()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::DEFAULT_FALLBACK_PATTERN;

    #[test]
    fn test_empty_record_resolves_to_fallback() {
        let signal = resolve(&SourceCode::default());
        assert_eq!(signal.carrier_hz(), 38000);
        assert_eq!(signal.pulses(), &DEFAULT_FALLBACK_PATTERN);
    }

    #[test]
    fn test_raw_takes_priority() {
        let mut record = SourceCode::from_raw(40000, vec![100, 200]);
        record.pronto_hex = Some("0004 0000 0000 0001 00AC 00AC".into());
        record.protocol_code = Some("NEC,32,159".into());

        let signal = resolve(&record);
        assert_eq!(signal.carrier_hz(), 40000);
        assert_eq!(signal.pulses(), &[100, 200]);
    }

    #[test]
    fn test_invalid_raw_falls_through_to_pronto() {
        let mut record = SourceCode::from_raw(0, vec![100, 200]);
        record.pronto_hex = Some("0004 0000 0000 0001 00AC 00AC".into());

        let signal = resolve(&record);
        assert_eq!(signal.carrier_hz(), 38000);
        assert_eq!(signal.pulses().len(), 2);
    }

    #[test]
    fn test_raw_missing_pattern_is_absent() {
        let record = SourceCode {
            raw_frequency: Some(38000),
            ..Default::default()
        };
        let signal = resolve(&record);
        assert_eq!(signal.pulses(), &DEFAULT_FALLBACK_PATTERN);
    }

    #[test]
    fn test_invalid_pronto_falls_through_to_protocol() {
        let mut record = SourceCode::from_pronto("not pronto");
        record.protocol_code = Some("NEC,32,159".into());

        let signal = resolve(&record);
        assert_eq!(signal.pulses().len(), 67);
    }

    #[test]
    fn test_unknown_protocol_falls_through_to_fallback() {
        let signal = resolve(&SourceCode::from_protocol("FOO,1,2"));
        assert_eq!(signal.pulses(), &DEFAULT_FALLBACK_PATTERN);
    }

    #[test]
    fn test_resolve_never_panics_on_garbage() {
        let mut record = SourceCode::from_pronto("zz zz zz zz zz");
        record.protocol_code = Some(",,,".into());
        let signal = resolve(&record);
        assert!(!signal.pulses().is_empty());
    }
}
