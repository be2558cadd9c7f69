//! Pronto Hex decoder
//!
//! Pronto Hex is a whitespace-separated sequence of hex words:
//! `[frequency code] [kHz if code is 0] [repeat count] [burst-pair count]
//! [timings...]`, each timing in Pronto units of ~0.241246 µs.
//!
//! The declared burst-pair count is accepted but never checked against the
//! timing tokens that actually follow; real-world strings disagree with
//! their own header often enough that tolerating the mismatch is the only
//! workable policy.

use crate::error::CodecError;
use crate::signal::CanonicalSignal;

/// Microseconds per Pronto time unit
pub const PRONTO_UNIT_US: f64 = 0.241246;

/// Check whether a string is tokenizable as Pronto Hex
///
/// Callers use this as a pre-check before [`decode`]; both share the same
/// tokenization rule (≥ 4 whitespace-separated tokens of 1–4 hex digits).
pub fn is_valid(text: &str) -> bool {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() < 4 {
        return false;
    }
    tokens.iter().all(|t| is_hex_token(t))
}

fn is_hex_token(token: &str) -> bool {
    !token.is_empty() && token.len() <= 4 && token.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Decode a Pronto Hex string into a canonical signal
pub fn decode(text: &str) -> Result<CanonicalSignal, CodecError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() < 4 {
        return Err(CodecError::TooFewTokens(tokens.len()));
    }

    let mut words = Vec::with_capacity(tokens.len());
    for token in &tokens {
        if !is_hex_token(token) {
            return Err(CodecError::InvalidToken(token.to_string()));
        }
        let word = u32::from_str_radix(token, 16)
            .map_err(|_| CodecError::InvalidToken(token.to_string()))?;
        words.push(word);
    }

    let carrier_hz = carrier_from_code(words[0], words[1]);

    // words[2] is the repeat count; repetition is a transmission-layer
    // concern, so it is accepted and ignored here. words[3] is the declared
    // burst-pair count, likewise accepted but not trusted.
    let timings = &words[4..];

    let mut pulses = Vec::with_capacity(timings.len());
    for pair in timings.chunks(2) {
        // Odd tail: the last token stands alone as a trailing mark
        for &units in pair {
            pulses.push((units as f64 * PRONTO_UNIT_US) as u32);
        }
    }

    CanonicalSignal::new(carrier_hz, pulses)
}

/// Resolve the carrier frequency from the first two header words
fn carrier_from_code(code: u32, khz_word: u32) -> u32 {
    if code == 0 {
        // Second word is the frequency in kHz
        return khz_word * 1000;
    }
    match code {
        0x0001 => 30_000,
        0x0002 => 33_333,
        0x0003 => 36_000,
        0x0004 => 38_000,
        0x0005 => 40_000,
        0x0006 => 56_000,
        _ => 38_000,
    }
}
