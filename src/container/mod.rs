//! Container Codec
//!
//! RIFF/WAVE header parsing and emission, PCM sample codecs and the owned
//! `PcmStream` value built on top of them.

pub mod header;
pub mod pcm;
mod stream;

pub use header::{parse_header, write_header, HeaderRecord, HEADER_LEN, MAX_PAYLOAD_BYTES};
pub use stream::PcmStream;
