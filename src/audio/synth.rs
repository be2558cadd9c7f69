//! IR carrier waveform synthesis
//!
//! Converts a canonical pulse train into an interleaved stereo 16-bit PCM
//! buffer for playback through an audio-jack IR blaster. During a mark the
//! buffer carries a full-amplitude sine at the carrier frequency; during a
//! space it carries silence. The right channel is the negated left channel,
//! which doubles the voltage swing across the jack for passive two-LED
//! blaster dongles.
//!
//! All µs-to-sample conversions floor toward zero. Where mark/space
//! boundaries land relative to whole samples is part of the observable
//! contract, so do not substitute rounding.

/// Interleaved stereo 16-bit PCM buffer
#[derive(Debug, Clone)]
pub struct PcmBuffer {
    samples: Vec<i16>,
    sample_rate: u32,
}

impl PcmBuffer {
    /// Interleaved samples: left, right, left, right, ...
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Consume the buffer, yielding the interleaved samples
    pub fn into_samples(self) -> Vec<i16> {
        self.samples
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of stereo frames (sample pairs)
    pub fn frames(&self) -> usize {
        self.samples.len() / 2
    }

    /// Playback duration in milliseconds, floored
    pub fn duration_ms(&self) -> u64 {
        self.frames() as u64 * 1000 / self.sample_rate as u64
    }
}

/// Synthesize a carrier-modulated PCM waveform from a pulse train
///
/// `carrier_hz` must be positive; `CanonicalSignal` guarantees this for
/// signals coming out of the codec layer.
pub fn synthesize(carrier_hz: u32, pulses: &[u32], sample_rate: u32) -> PcmBuffer {
    debug_assert!(carrier_hz > 0);

    let total_us: u64 = pulses.iter().map(|&p| p as u64).sum();
    let total_samples = (total_us * sample_rate as u64 / 1_000_000) as usize;

    let mut samples = vec![0i16; total_samples * 2];

    // Carrier period in samples; phase lives in [0, 1)
    let carrier_period = sample_rate as f64 / carrier_hz as f64;
    let mut phase = 0.0f64;

    let mut index = 0usize;
    let mut is_mark = true;

    'pulses: for &segment_us in pulses {
        let segment_samples = (segment_us as u64 * sample_rate as u64 / 1_000_000) as usize;

        for _ in 0..segment_samples {
            if index >= total_samples {
                break 'pulses;
            }

            let value = if is_mark {
                let angle = 2.0 * std::f64::consts::PI * phase;
                let v = (angle.sin() * i16::MAX as f64) as i32 as i16;
                phase += 1.0 / carrier_period;
                if phase > 1.0 {
                    phase -= 1.0;
                }
                v
            } else {
                // Every mark restarts at phase 0; phase is deliberately not
                // carried across the gap
                phase = 0.0;
                0
            };

            samples[index * 2] = value;
            samples[index * 2 + 1] = -value;
            index += 1;
        }

        is_mark = !is_mark;
    }

    PcmBuffer {
        samples,
        sample_rate,
    }
}
