//! Owned PCM stream (header plus payload)

use crate::container::header::{
    parse_header, write_header, HeaderRecord, HEADER_LEN, MAX_PAYLOAD_BYTES,
};
use crate::error::Result;

/// A parsed or freshly built PCM stream
///
/// Streams are never modified in place; conversions build new ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcmStream {
    header: HeaderRecord,
    payload: Vec<u8>,
}

impl PcmStream {
    /// Build a stream whose header is derived from the payload length
    ///
    /// The payload must hold whole frames for the given layout and be at most
    /// `MAX_PAYLOAD_BYTES` long.
    pub fn new(channel_count: u16, sample_rate: u32, bits_per_sample: u16, payload: Vec<u8>) -> Self {
        debug_assert!(payload.len() <= MAX_PAYLOAD_BYTES as usize);
        let header = HeaderRecord::new(
            channel_count,
            sample_rate,
            bits_per_sample,
            payload.len() as u32,
        );
        debug_assert_eq!(payload.len() % header.frame_size() as usize, 0);
        Self { header, payload }
    }

    /// Parse a complete container buffer
    ///
    /// Only the declared payload is kept; trailing sub-blocks are dropped.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let (header, offset) = parse_header(bytes)?;
        let end = offset + header.payload_byte_count as usize;
        Ok(Self {
            header,
            payload: bytes[offset..end].to_vec(),
        })
    }

    /// Serialize as a canonical container: header then payload
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.payload.len());
        out.extend_from_slice(&write_header(&self.header));
        out.extend_from_slice(&self.payload);
        out
    }

    pub fn header(&self) -> &HeaderRecord {
        &self.header
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn frame_count(&self) -> usize {
        self.header.frame_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_header() {
        let stream = PcmStream::new(2, 44100, 16, vec![0; 12]);
        assert_eq!(stream.header().payload_byte_count, 12);
        assert_eq!(stream.frame_count(), 3);
    }

    #[test]
    fn test_to_bytes_then_parse() {
        let stream = PcmStream::new(1, 8000, 32, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        let bytes = stream.to_bytes();
        assert_eq!(bytes.len(), HEADER_LEN + 8);
        assert_eq!(PcmStream::parse(&bytes).unwrap(), stream);
    }

    #[test]
    fn test_parse_drops_trailing_sub_blocks() {
        let stream = PcmStream::new(1, 8000, 16, vec![1, 0, 2, 0]);
        let mut bytes = stream.to_bytes();
        bytes.extend_from_slice(b"LIST\x00\x00\x00\x00");
        let parsed = PcmStream::parse(&bytes).unwrap();
        assert_eq!(parsed.payload(), &[1, 0, 2, 0]);
    }
}
