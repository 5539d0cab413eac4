//! Mono-compatible 32-bit channel packing
//!
//! A stereo frame is stored as one 32-bit word: the high half holds the
//! semi-sum in two's complement, so a mono reader hears `(L + R) / 2`; the
//! low half holds the semi-difference as a raw 16-bit pattern, which mono
//! playback treats as noise far below the signal.

use crate::transform::channel::{combine_diff, combine_sum, StereoFrame};

/// Store a semi-difference in the low word (`diff & 0xFFFF`)
#[inline]
pub fn diff_to_low_word(diff: i16) -> u16 {
    (diff as i32 & 0xFFFF) as u16
}

/// Recover a semi-difference from the low word
///
/// Patterns at or above `0x8000` are negative: `0x8000` maps to `-32768`,
/// `0xFFFF` to `-1`. Inverse of [`diff_to_low_word`].
#[inline]
pub fn low_word_to_diff(raw: u16) -> i16 {
    let raw = raw as i32;
    let diff = if raw >= 0x8000 { raw - 0x10000 } else { raw };
    diff as i16
}

/// Pack one stereo frame
#[inline]
pub fn pack_frame(frame: StereoFrame) -> u32 {
    let sum = combine_sum(frame.left, frame.right);
    let diff = combine_diff(frame.left, frame.right);
    ((sum as u16 as u32) << 16) | diff_to_low_word(diff) as u32
}

/// Unpack one word into a stereo frame
///
/// `sum ± diff` can leave the 16-bit range (the frame `(-32768, 32767)`
/// packs to `sum = -1, diff = -32768`); such samples saturate.
#[inline]
pub fn unpack_frame(word: u32) -> StereoFrame {
    let sum = (word >> 16) as u16 as i16 as i32;
    let diff = low_word_to_diff(word as u16) as i32;
    StereoFrame {
        left: saturate(sum + diff),
        right: saturate(sum - diff),
    }
}

#[inline]
fn saturate(value: i32) -> i16 {
    value.clamp(i16::MIN as i32, i16::MAX as i32) as i16
}
