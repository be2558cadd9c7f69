//! Protocol-parameter string decoder
//!
//! Decodes compact `PROTOCOL,arg1,arg2,...` strings into canonical signals.
//! Currently only NEC is supported; unknown protocols yield `None` so the
//! resolver can fall through rather than fail.
//!
//! NEC framing here is always *standard* NEC: address, complement of
//! address, command, complement of command. Three-argument strings like
//! `NEC,32,159,0` are ambiguous — elsewhere in the ecosystem the same triple
//! denotes extended-NEC (address low, address high, command) — but this
//! decoder deliberately keeps the standard framing. See the pinning test
//! below before changing it.

use crate::signal::CanonicalSignal;

const NEC_CARRIER_HZ: u32 = 38_000;
const NEC_LEADER_MARK_US: u32 = 9000;
const NEC_LEADER_SPACE_US: u32 = 4500;
const NEC_BIT_MARK_US: u32 = 560;
const NEC_ZERO_SPACE_US: u32 = 560;
const NEC_ONE_SPACE_US: u32 = 1690;

/// Decode a protocol string, or `None` if the protocol is unknown or the
/// arguments are malformed
pub fn decode(text: &str) -> Option<CanonicalSignal> {
    let parts: Vec<&str> = text.split(',').collect();
    let protocol = parts.first()?.trim();

    match protocol.to_ascii_uppercase().as_str() {
        "NEC" => decode_nec(&parts),
        _ => None,
    }
}

/// NEC: leader, address, ~address, command, ~command, trailing mark
fn decode_nec(parts: &[&str]) -> Option<CanonicalSignal> {
    if parts.len() < 3 {
        return None;
    }

    // Wider-than-8-bit values contribute their low byte
    let address = parts[1].trim().parse::<u32>().ok()? as u8;
    let command = parts[2].trim().parse::<u32>().ok()? as u8;

    let mut pulses = Vec::with_capacity(67);
    pulses.push(NEC_LEADER_MARK_US);
    pulses.push(NEC_LEADER_SPACE_US);

    push_byte(&mut pulses, address);
    push_byte(&mut pulses, !address);
    push_byte(&mut pulses, command);
    push_byte(&mut pulses, !command);

    // Frame terminator: a lone 560 µs mark
    pulses.push(NEC_BIT_MARK_US);

    CanonicalSignal::new(NEC_CARRIER_HZ, pulses).ok()
}

/// Emit one byte LSB-first as (mark, space) pairs
fn push_byte(pulses: &mut Vec<u32>, byte: u8) {
    for bit in 0..8 {
        pulses.push(NEC_BIT_MARK_US);
        if (byte >> bit) & 1 == 1 {
            pulses.push(NEC_ONE_SPACE_US);
        } else {
            pulses.push(NEC_ZERO_SPACE_US);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nec_frame_shape() {
        let signal = decode("NEC,32,159,0").unwrap();
        assert_eq!(signal.carrier_hz(), 38000);
        // Leader (2) + 4 bytes * 8 bits * 2 pulses (64) + trailing mark (1)
        assert_eq!(signal.pulses().len(), 67);
        assert_eq!(&signal.pulses()[..3], &[9000, 4500, 560]);
        assert_eq!(*signal.pulses().last().unwrap(), 560);
    }

    #[test]
    fn test_nec_bit_encoding_lsb_first() {
        // Address 32 = 0b0010_0000: LSB-first the sixth bit is the only 1
        let signal = decode("NEC,32,0").unwrap();
        let address_pulses = &signal.pulses()[2..18];
        for (i, pair) in address_pulses.chunks(2).enumerate() {
            assert_eq!(pair[0], 560);
            if i == 5 {
                assert_eq!(pair[1], 1690);
            } else {
                assert_eq!(pair[1], 560);
            }
        }
    }

    #[test]
    fn test_nec_standard_complement_framing() {
        // Byte 2 of the frame is always the bitwise complement of the
        // address, never an extended-NEC high byte. Pinned deliberately.
        let signal = decode("NEC,32,159,0").unwrap();
        let complement_pulses = &signal.pulses()[18..34];
        // !32 = 0xDF = 0b1101_1111: LSB-first, bit 5 is the only 0
        for (i, pair) in complement_pulses.chunks(2).enumerate() {
            let expected_space = if i == 5 { 560 } else { 1690 };
            assert_eq!(pair[1], expected_space, "bit {}", i);
        }
    }

    #[test]
    fn test_case_insensitive_protocol_name() {
        assert!(decode("nec,32,159").is_some());
        assert!(decode("Nec,32,159").is_some());
    }

    #[test]
    fn test_unknown_protocol() {
        assert!(decode("FOO,1,2").is_none());
        assert!(decode("").is_none());
    }

    #[test]
    fn test_malformed_nec_arguments() {
        assert!(decode("NEC").is_none());
        assert!(decode("NEC,32").is_none());
        assert!(decode("NEC,abc,159").is_none());
        assert!(decode("NEC,32,xyz").is_none());
        assert!(decode("NEC,-1,159").is_none());
    }

    #[test]
    fn test_wide_values_truncate_to_low_byte() {
        let wide = decode("NEC,288,159").unwrap();
        let narrow = decode("NEC,32,159").unwrap();
        assert_eq!(wide, narrow);
    }

    #[test]
    fn test_extra_arguments_ignored() {
        let with_extra = decode("NEC,32,159,0").unwrap();
        let without = decode("NEC,32,159").unwrap();
        assert_eq!(with_extra, without);
    }
}
