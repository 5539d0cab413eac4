//! Wavchan - Stereo/Mono WAV Channel Conversion
//!
//! Converts 16-bit PCM WAV streams between stereo and mono, and packs stereo
//! into a mono-compatible 32-bit stream that a mono player hears as the
//! semi-sum of both channels while the semi-difference rides in the low bits.
//!
//! # Architecture
//!
//! - `container`: RIFF/WAVE header codec and PCM sample codecs
//! - `transform`: pure per-frame channel arithmetic
//! - `convert`: the four conversion operations, in memory and on files
//! - `cli`: command-line front end

pub mod cli;
pub mod container;
pub mod convert;
pub mod error;
pub mod transform;

pub use container::{parse_header, write_header, HeaderRecord, PcmStream};
pub use convert::{decode_combined, encode_combined, mono_to_stereo, stereo_to_mono};
pub use error::{Result, WavchanError};
pub use transform::ChannelMode;
