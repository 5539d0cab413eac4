//! Conversion Operations
//!
//! Each operation checks the input layout, decodes the payload, applies a
//! per-frame transform and builds a fresh output stream. Layout checks run
//! before any sample is touched.
//!
//! | Operation         | Input                | Output               |
//! |-------------------|----------------------|----------------------|
//! | `stereo_to_mono`  | 2 ch, 16-bit         | 1 ch, 16-bit         |
//! | `mono_to_stereo`  | 2 × (1 ch, 16-bit)   | 2 ch, 16-bit         |
//! | `encode_combined` | 2 ch, 16-bit         | 1 ch, 32-bit         |
//! | `decode_combined` | 1 ch, 32-bit         | 2 ch, 16-bit         |

pub mod file;

use log::debug;

use crate::container::pcm::{decode_i16_samples, decode_words, encode_i16_samples, encode_words};
use crate::container::{HeaderRecord, PcmStream, MAX_PAYLOAD_BYTES};
use crate::error::{Result, WavchanError};
use crate::transform::{interleave, pack_frame, unpack_frame, ChannelMode, StereoFrame};

/// Channel mode used when the caller does not choose one
pub const DEFAULT_CHANNEL_MODE: ChannelMode = ChannelMode::Sum;

fn describe(header: &HeaderRecord) -> String {
    format!(
        "{}-channel {}-bit at {} Hz",
        header.channel_count, header.bits_per_sample, header.sample_rate
    )
}

/// Split an interleaved 16-bit stereo payload into frames
fn decode_stereo_frames(payload: &[u8]) -> Vec<StereoFrame> {
    decode_i16_samples(payload)
        .chunks_exact(2)
        .map(|pair| StereoFrame::new(pair[0], pair[1]))
        .collect()
}

fn encode_stereo_frames(frames: &[StereoFrame]) -> Vec<u8> {
    let samples: Vec<i16> = frames.iter().flat_map(|f| [f.left, f.right]).collect();
    encode_i16_samples(&samples)
}

/// Payload length of a stereo stream joined from two mono payloads of
/// `mono_bytes` each, if it fits in a container
fn stereo_payload_len(mono_bytes: u32) -> Option<u32> {
    mono_bytes
        .checked_mul(2)
        .filter(|&len| len <= MAX_PAYLOAD_BYTES)
}

fn require_layout(header: &HeaderRecord, channels: u16, bits: u16) -> Result<()> {
    if header.channel_count != channels || header.bits_per_sample != bits {
        return Err(WavchanError::UnsupportedFormat {
            details: format!(
                "expected {}-channel {}-bit input, got {}",
                channels,
                bits,
                describe(header)
            ),
        });
    }
    Ok(())
}

/// Derive a 16-bit mono stream from a 16-bit stereo stream
///
/// # Errors
/// `UnsupportedFormat` unless the input is 16-bit stereo.
pub fn stereo_to_mono(stereo: &PcmStream, mode: ChannelMode) -> Result<PcmStream> {
    let header = stereo.header();
    require_layout(header, 2, 16)?;

    let mono: Vec<i16> = decode_stereo_frames(stereo.payload())
        .into_iter()
        .map(|frame| mode.apply(frame))
        .collect();

    debug!("stereo_to_mono: {} frames, mode {}", mono.len(), mode);
    Ok(PcmStream::new(
        1,
        header.sample_rate,
        16,
        encode_i16_samples(&mono),
    ))
}

/// Interleave two 16-bit mono streams into one stereo stream
///
/// # Errors
/// `FormatMismatch` unless both inputs are 16-bit mono with the same sample
/// rate and the same payload length. Streams of different lengths are
/// rejected rather than truncated. `UnsupportedFormat` if the joined payload
/// would not fit in a container.
pub fn mono_to_stereo(left: &PcmStream, right: &PcmStream) -> Result<PcmStream> {
    let (lh, rh) = (left.header(), right.header());

    for (side, header) in [("left", lh), ("right", rh)] {
        if !header.is_pcm16(1) {
            return Err(WavchanError::FormatMismatch {
                details: format!("{} input must be 1-channel 16-bit, got {}", side, describe(header)),
            });
        }
    }
    if lh.sample_rate != rh.sample_rate {
        return Err(WavchanError::FormatMismatch {
            details: format!(
                "sample rates differ: left {} Hz, right {} Hz",
                lh.sample_rate, rh.sample_rate
            ),
        });
    }
    if lh.payload_byte_count != rh.payload_byte_count {
        return Err(WavchanError::FormatMismatch {
            details: format!(
                "lengths differ: left {} frames, right {} frames",
                lh.frame_count(),
                rh.frame_count()
            ),
        });
    }

    if stereo_payload_len(lh.payload_byte_count).is_none() {
        return Err(WavchanError::UnsupportedFormat {
            details: format!(
                "joined payload of {} frames exceeds the container limit",
                lh.frame_count()
            ),
        });
    }

    let frames = interleave(
        &decode_i16_samples(left.payload()),
        &decode_i16_samples(right.payload()),
    );

    debug!("mono_to_stereo: {} frames", frames.len());
    Ok(PcmStream::new(
        2,
        lh.sample_rate,
        16,
        encode_stereo_frames(&frames),
    ))
}

/// Pack a 16-bit stereo stream into a mono-compatible 32-bit stream
///
/// # Errors
/// `UnsupportedFormat` unless the input is 16-bit stereo.
pub fn encode_combined(stereo: &PcmStream) -> Result<PcmStream> {
    let header = stereo.header();
    require_layout(header, 2, 16)?;

    let words: Vec<u32> = decode_stereo_frames(stereo.payload())
        .into_iter()
        .map(pack_frame)
        .collect();

    debug!("encode_combined: {} frames", words.len());
    Ok(PcmStream::new(1, header.sample_rate, 32, encode_words(&words)))
}

/// Unpack a combined 32-bit stream back into 16-bit stereo
///
/// # Errors
/// `UnsupportedFormat` unless the input is 32-bit mono.
pub fn decode_combined(combined: &PcmStream) -> Result<PcmStream> {
    let header = combined.header();
    require_layout(header, 1, 32)?;

    let frames: Vec<_> = decode_words(combined.payload())
        .into_iter()
        .map(unpack_frame)
        .collect();

    debug!("decode_combined: {} frames", frames.len());
    Ok(PcmStream::new(
        2,
        header.sample_rate,
        16,
        encode_stereo_frames(&frames),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEFT: [i16; 8] = [100, -100, 0, 32767, -32768, 5, -5, 1];
    const RIGHT: [i16; 8] = [100, 100, 0, -32768, 32767, 5, 5, -1];

    fn stereo(rate: u32) -> PcmStream {
        let frames = interleave(&LEFT, &RIGHT);
        PcmStream::new(2, rate, 16, encode_stereo_frames(&frames))
    }

    fn mono(samples: &[i16], rate: u32) -> PcmStream {
        PcmStream::new(1, rate, 16, encode_i16_samples(samples))
    }

    #[test]
    fn test_stereo_to_mono_modes() {
        let input = stereo(44100);
        let cases = [
            (ChannelMode::Left, LEFT.to_vec()),
            (ChannelMode::Right, RIGHT.to_vec()),
            (ChannelMode::Sum, vec![100, 0, 0, -1, -1, 5, 0, 0]),
            (ChannelMode::Diff, vec![0, -100, 0, 32767, -32768, 0, -5, 1]),
        ];
        for (mode, expected) in cases {
            let out = stereo_to_mono(&input, mode).unwrap();
            assert_eq!(
                *out.header(),
                HeaderRecord::new(1, 44100, 16, 16),
                "mode {}",
                mode
            );
            assert_eq!(decode_i16_samples(out.payload()), expected, "mode {}", mode);
        }
    }

    #[test]
    fn test_default_mode_is_sum() {
        assert_eq!(DEFAULT_CHANNEL_MODE, ChannelMode::Sum);
    }

    #[test]
    fn test_stereo_to_mono_rejects_mono_input() {
        let err = stereo_to_mono(&mono(&[1, 2], 44100), ChannelMode::Left).unwrap_err();
        assert!(matches!(err, WavchanError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_split_and_rejoin_is_lossless() {
        let input = stereo(48000);
        let left = stereo_to_mono(&input, ChannelMode::Left).unwrap();
        let right = stereo_to_mono(&input, ChannelMode::Right).unwrap();
        assert_eq!(mono_to_stereo(&left, &right).unwrap(), input);
    }

    #[test]
    fn test_mono_to_stereo_interleaves() {
        let out = mono_to_stereo(&mono(&[1, 2, 3], 8000), &mono(&[-1, -2, -3], 8000)).unwrap();
        assert_eq!(*out.header(), HeaderRecord::new(2, 8000, 16, 12));
        assert_eq!(decode_i16_samples(out.payload()), vec![1, -1, 2, -2, 3, -3]);
    }

    #[test]
    fn test_mono_to_stereo_mismatches() {
        let base = mono(&[1, 2, 3], 8000);

        let shorter = mono(&[1, 2], 8000);
        let other_rate = mono(&[1, 2, 3], 16000);
        let not_mono = stereo(8000);
        let wide = PcmStream::new(1, 8000, 32, vec![0; 12]);

        for other in [&shorter, &other_rate, &not_mono, &wide] {
            assert!(matches!(
                mono_to_stereo(&base, other),
                Err(WavchanError::FormatMismatch { .. })
            ));
            assert!(matches!(
                mono_to_stereo(other, &base),
                Err(WavchanError::FormatMismatch { .. })
            ));
        }
    }

    #[test]
    fn test_stereo_payload_limit() {
        assert_eq!(stereo_payload_len(12), Some(24));
        assert_eq!(stereo_payload_len(0), Some(0));

        let largest = MAX_PAYLOAD_BYTES / 2;
        assert_eq!(stereo_payload_len(largest), Some(largest * 2));
        assert_eq!(stereo_payload_len(largest + 2), None);
        assert_eq!(stereo_payload_len(u32::MAX), None);
    }

    #[test]
    fn test_encode_combined_layout() {
        let out = encode_combined(&stereo(44100)).unwrap();
        assert_eq!(*out.header(), HeaderRecord::new(1, 44100, 32, 32));

        let words = decode_words(out.payload());
        // (100, 100): sum 100, diff 0
        assert_eq!(words[0], 100 << 16);
        // (-32768, 32767): sum -1, diff -32768
        assert_eq!(words[4], 0xFFFF_8000);
    }

    #[test]
    fn test_combined_round_trip() {
        let input = stereo(44100);
        let decoded = decode_combined(&encode_combined(&input).unwrap()).unwrap();
        assert_eq!(decoded.header(), input.header());

        let before = decode_stereo_frames(input.payload());
        let after = decode_stereo_frames(decoded.payload());
        for (a, b) in before.iter().zip(&after) {
            let even = (a.left as i32 + a.right as i32) % 2 == 0;
            if even {
                assert_eq!(a, b);
            } else {
                assert!((a.left as i32 - b.left as i32).abs() <= 1);
                assert!((a.right as i32 - b.right as i32).abs() <= 1);
            }
        }
        assert_eq!(after[0], StereoFrame::new(100, 100));
    }

    #[test]
    fn test_combined_layout_checks() {
        assert!(matches!(
            encode_combined(&mono(&[1], 8000)),
            Err(WavchanError::UnsupportedFormat { .. })
        ));
        assert!(matches!(
            decode_combined(&stereo(8000)),
            Err(WavchanError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_empty_streams() {
        let empty = PcmStream::new(2, 44100, 16, Vec::new());
        assert_eq!(stereo_to_mono(&empty, ChannelMode::Sum).unwrap().frame_count(), 0);
        assert_eq!(encode_combined(&empty).unwrap().frame_count(), 0);
    }
}
