//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::path::Path;

use log::info;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::container::{HeaderRecord, PcmStream};
use crate::convert::file;
use crate::error::Result;
use crate::transform::ChannelMode;

/// Summary of a stream as printed by `info`.
#[derive(Debug, Clone, Serialize)]
pub struct StreamInfo {
    #[serde(flatten)]
    pub header: HeaderRecord,
    pub frame_count: usize,
    pub byte_rate: u32,
    pub block_align: u16,
    pub duration_secs: f64,
    pub payload_sha256: String,
}

impl StreamInfo {
    pub fn from_stream(stream: &PcmStream) -> Self {
        let header = *stream.header();
        Self {
            header,
            frame_count: header.frame_count(),
            byte_rate: header.byte_rate(),
            block_align: header.block_align(),
            duration_secs: header.duration_secs(),
            payload_sha256: format!("{:x}", Sha256::digest(stream.payload())),
        }
    }
}

fn report(output: &Path, stream: &PcmStream) {
    let header = stream.header();
    println!(
        "Wrote {}: {} ch, {}-bit, {} Hz, {} frames",
        output.display(),
        header.channel_count,
        header.bits_per_sample,
        header.sample_rate,
        header.frame_count()
    );
}

/// Convert a stereo file to mono.
pub fn stereo_to_mono(input: &Path, output: &Path, mode: ChannelMode) -> Result<()> {
    info!(
        "Converting {} to mono ({}) -> {}",
        input.display(),
        mode,
        output.display()
    );
    let stream = file::stereo_to_mono_file(input, output, mode)?;
    report(output, &stream);
    Ok(())
}

/// Join two mono files into one stereo file.
pub fn mono_to_stereo(left: &Path, right: &Path, output: &Path) -> Result<()> {
    info!(
        "Joining {} + {} -> {}",
        left.display(),
        right.display(),
        output.display()
    );
    let stream = file::mono_to_stereo_file(left, right, output)?;
    report(output, &stream);
    Ok(())
}

/// Pack a stereo file into the combined 32-bit representation.
pub fn encode(input: &Path, output: &Path) -> Result<()> {
    info!("Encoding {} -> {}", input.display(), output.display());
    let stream = file::encode_combined_file(input, output)?;
    report(output, &stream);
    Ok(())
}

/// Unpack a combined 32-bit file into stereo.
pub fn decode(input: &Path, output: &Path) -> Result<()> {
    info!("Decoding {} -> {}", input.display(), output.display());
    let stream = file::decode_combined_file(input, output)?;
    report(output, &stream);
    Ok(())
}

/// Print the header of a file.
pub fn show_info(input: &Path, json: bool) -> Result<()> {
    let stream = file::read_stream(input)?;
    let info = StreamInfo::from_stream(&stream);

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("File: {}", input.display());
    println!("{:-<60}", "");
    println!("Channels:        {}", info.header.channel_count);
    println!("Sample rate:     {} Hz", info.header.sample_rate);
    println!("Bits per sample: {}", info.header.bits_per_sample);
    println!("Byte rate:       {}", info.byte_rate);
    println!("Block align:     {}", info.block_align);
    println!("Payload:         {} bytes", info.header.payload_byte_count);
    println!("Frames:          {}", info.frame_count);
    println!("Duration:        {:.3}s", info.duration_secs);
    println!("Payload SHA-256: {}", info.payload_sha256);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_info() {
        let stream = PcmStream::new(2, 4, 16, vec![0; 16]);
        let info = StreamInfo::from_stream(&stream);
        assert_eq!(info.frame_count, 4);
        assert_eq!(info.byte_rate, 16);
        assert_eq!(info.block_align, 4);
        assert!((info.duration_secs - 1.0).abs() < 1e-9);
        assert_eq!(info.payload_sha256.len(), 64);

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["channel_count"], 2);
        assert_eq!(json["payload_byte_count"], 16);
    }

    #[test]
    fn test_empty_payload_digest() {
        let stream = PcmStream::new(1, 8000, 16, Vec::new());
        let info = StreamInfo::from_stream(&stream);
        assert_eq!(
            info.payload_sha256,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
