//! Sample Transform Engine
//!
//! Pure integer transforms over decoded samples. Nothing here touches bytes
//! or files.

mod channel;
mod packing;

pub use channel::{
    combine_diff, combine_sum, halve, interleave, select_left, select_right, ChannelMode,
    StereoFrame,
};
pub use packing::{diff_to_low_word, low_word_to_diff, pack_frame, unpack_frame};
