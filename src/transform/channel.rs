//! Channel selection and combination
//!
//! Per-frame transforms from a 16-bit stereo pair to one 16-bit sample.

use std::fmt;
use std::str::FromStr;

/// One instant of 16-bit stereo audio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StereoFrame {
    pub left: i16,
    pub right: i16,
}

impl StereoFrame {
    pub fn new(left: i16, right: i16) -> Self {
        Self { left, right }
    }
}

/// Halve a sum or difference of two 16-bit samples
///
/// The quotient rounds toward negative infinity, so `-1` halves to `-1` and
/// `-65535` to `-32768`. For any two `i16` operands the result fits in `i16`.
#[inline]
pub fn halve(value: i32) -> i16 {
    let half = value.div_euclid(2);
    debug_assert!((i16::MIN as i32..=i16::MAX as i32).contains(&half));
    half as i16
}

#[inline]
pub fn select_left(left: i16, _right: i16) -> i16 {
    left
}

#[inline]
pub fn select_right(_left: i16, right: i16) -> i16 {
    right
}

/// Semi-sum `(L + R) / 2`
#[inline]
pub fn combine_sum(left: i16, right: i16) -> i16 {
    halve(left as i32 + right as i32)
}

/// Semi-difference `(L - R) / 2`
#[inline]
pub fn combine_diff(left: i16, right: i16) -> i16 {
    halve(left as i32 - right as i32)
}

/// Which mono signal to derive from a stereo frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelMode {
    /// Left channel only
    Left,
    /// Right channel only
    Right,
    /// Semi-sum of both channels
    Sum,
    /// Semi-difference of both channels
    Diff,
}

impl ChannelMode {
    /// Apply the mode to one frame
    #[inline]
    pub fn apply(self, frame: StereoFrame) -> i16 {
        match self {
            ChannelMode::Left => select_left(frame.left, frame.right),
            ChannelMode::Right => select_right(frame.left, frame.right),
            ChannelMode::Sum => combine_sum(frame.left, frame.right),
            ChannelMode::Diff => combine_diff(frame.left, frame.right),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChannelMode::Left => "left",
            ChannelMode::Right => "right",
            ChannelMode::Sum => "sum",
            ChannelMode::Diff => "diff",
        }
    }
}

impl fmt::Display for ChannelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChannelMode {
    type Err = String;

    /// Accepts the mode names (any case) and the numeric codes `0`..`3`
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "0" => Ok(ChannelMode::Left),
            "right" | "1" => Ok(ChannelMode::Right),
            "sum" | "2" => Ok(ChannelMode::Sum),
            "diff" | "3" => Ok(ChannelMode::Diff),
            other => Err(format!(
                "unknown channel mode '{}' (expected left, right, sum or diff)",
                other
            )),
        }
    }
}

/// Pair same-index samples into stereo frames
///
/// Callers check that both channels have the same length.
pub fn interleave(left: &[i16], right: &[i16]) -> Vec<StereoFrame> {
    debug_assert_eq!(left.len(), right.len());
    left.iter()
        .zip(right)
        .map(|(&l, &r)| StereoFrame::new(l, r))
        .collect()
}
