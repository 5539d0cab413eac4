//! RIFF/WAVE header codec
//!
//! Reads and writes the canonical 44-byte PCM header. `write_header` is the
//! only place where the derived fields (RIFF size, byte rate, block align)
//! are computed.

use serde::Serialize;

use crate::error::{Result, WavchanError};

// ============================================================================
// Constants
// ============================================================================

/// Size of the canonical header (RIFF + fmt + data sub-block headers)
pub const HEADER_LEN: usize = 44;

const RIFF_TAG: &[u8; 4] = b"RIFF";
const WAVE_TAG: &[u8; 4] = b"WAVE";
const FMT_TAG: &[u8; 4] = b"fmt ";
const DATA_TAG: &[u8; 4] = b"data";

/// Size of the PCM format sub-block
const PCM_FMT_LEN: u32 = 16;

/// Format code for linear PCM
const FORMAT_PCM: u16 = 1;

/// Bytes between the RIFF size field and the payload in the canonical layout
const RIFF_OVERHEAD: u32 = 36;

/// Largest payload whose RIFF size field still fits in 32 bits
pub const MAX_PAYLOAD_BYTES: u32 = u32::MAX - RIFF_OVERHEAD;

// ============================================================================
// Header Record
// ============================================================================

/// Validated description of a PCM stream
///
/// The record is a plain value: operations build a new one for their output
/// rather than modifying the header of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeaderRecord {
    /// Number of channels (1 = mono, 2 = stereo)
    pub channel_count: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Bits per sample (16 or 32)
    pub bits_per_sample: u16,
    /// Length of the sample payload in bytes
    pub payload_byte_count: u32,
}

impl HeaderRecord {
    pub fn new(
        channel_count: u16,
        sample_rate: u32,
        bits_per_sample: u16,
        payload_byte_count: u32,
    ) -> Self {
        Self {
            channel_count,
            sample_rate,
            bits_per_sample,
            payload_byte_count,
        }
    }

    /// Bytes per frame (one sample for every channel)
    pub fn frame_size(&self) -> u16 {
        self.channel_count * (self.bits_per_sample / 8)
    }

    /// Block alignment as stored in the format sub-block
    pub fn block_align(&self) -> u16 {
        self.frame_size()
    }

    /// Bytes per second of audio, or `None` if it does not fit in 32 bits
    pub fn checked_byte_rate(&self) -> Option<u32> {
        self.sample_rate.checked_mul(self.frame_size() as u32)
    }

    /// Bytes per second of audio
    ///
    /// Saturates for sample rates no parsed header can carry.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate.saturating_mul(self.frame_size() as u32)
    }

    /// Number of frames in the payload
    pub fn frame_count(&self) -> usize {
        match self.frame_size() {
            0 => 0,
            size => self.payload_byte_count as usize / size as usize,
        }
    }

    /// Duration of the payload in seconds
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frame_count() as f64 / self.sample_rate as f64
    }

    /// True when the record describes 16-bit samples on `channels` channels
    pub fn is_pcm16(&self, channels: u16) -> bool {
        self.channel_count == channels && self.bits_per_sample == 16
    }
}

// ============================================================================
// Parsing
// ============================================================================

#[inline]
fn read_u16(bytes: &[u8], pos: usize) -> u16 {
    u16::from_le_bytes([bytes[pos], bytes[pos + 1]])
}

#[inline]
fn read_u32(bytes: &[u8], pos: usize) -> u32 {
    u32::from_le_bytes([bytes[pos], bytes[pos + 1], bytes[pos + 2], bytes[pos + 3]])
}

/// Parse a container header
///
/// Validates the structural tags, the PCM format sub-block and the payload
/// size, then locates the `data` sub-block. Sub-blocks between `fmt ` and
/// `data` (such as `LIST` metadata) are skipped.
///
/// # Returns
/// The validated header and the byte offset at which the payload begins.
///
/// # Errors
/// `MalformedContainer` for a truncated buffer, a wrong tag, a non-PCM or
/// out-of-range format sub-block, inconsistent derived fields, or a payload
/// that does not fit in the buffer.
pub fn parse_header(bytes: &[u8]) -> Result<(HeaderRecord, usize)> {
    if bytes.len() < HEADER_LEN {
        return Err(WavchanError::malformed(format!(
            "header needs {} bytes, buffer has {}",
            HEADER_LEN,
            bytes.len()
        )));
    }
    if &bytes[0..4] != RIFF_TAG {
        return Err(WavchanError::malformed("missing RIFF signature"));
    }
    if &bytes[8..12] != WAVE_TAG {
        return Err(WavchanError::malformed("missing WAVE signature"));
    }
    if &bytes[12..16] != FMT_TAG {
        return Err(WavchanError::malformed("missing fmt sub-block"));
    }

    let fmt_len = read_u32(bytes, 16);
    if fmt_len < PCM_FMT_LEN {
        return Err(WavchanError::malformed(format!(
            "fmt sub-block too short: {} bytes",
            fmt_len
        )));
    }

    let format_code = read_u16(bytes, 20);
    let channel_count = read_u16(bytes, 22);
    let sample_rate = read_u32(bytes, 24);
    let byte_rate = read_u32(bytes, 28);
    let block_align = read_u16(bytes, 32);
    let bits_per_sample = read_u16(bytes, 34);

    if format_code != FORMAT_PCM {
        return Err(WavchanError::malformed(format!(
            "format code {} is not linear PCM",
            format_code
        )));
    }
    if channel_count != 1 && channel_count != 2 {
        return Err(WavchanError::malformed(format!(
            "{} channels (only mono/stereo supported)",
            channel_count
        )));
    }
    if bits_per_sample != 16 && bits_per_sample != 32 {
        return Err(WavchanError::malformed(format!(
            "{}-bit samples (only 16 and 32 supported)",
            bits_per_sample
        )));
    }
    if sample_rate == 0 {
        return Err(WavchanError::malformed("sample rate is zero"));
    }

    let mut header = HeaderRecord::new(channel_count, sample_rate, bits_per_sample, 0);
    let expected_byte_rate = header
        .checked_byte_rate()
        .ok_or_else(|| WavchanError::malformed("byte rate overflows"))?;
    if block_align != header.block_align() || byte_rate != expected_byte_rate {
        return Err(WavchanError::malformed(format!(
            "inconsistent fmt fields: block_align {} byte_rate {} (expected {} and {})",
            block_align,
            byte_rate,
            header.block_align(),
            expected_byte_rate
        )));
    }

    // Walk the remaining sub-blocks until `data`
    let mut pos = 20 + fmt_len as usize + (fmt_len as usize & 1);
    loop {
        if pos + 8 > bytes.len() {
            return Err(WavchanError::malformed("no data sub-block"));
        }
        let tag = &bytes[pos..pos + 4];
        let len = read_u32(bytes, pos + 4) as usize;
        let body = pos + 8;

        if tag == DATA_TAG {
            let remaining = bytes.len() - body;
            if len > remaining {
                return Err(WavchanError::malformed(format!(
                    "payload declares {} bytes but only {} remain",
                    len, remaining
                )));
            }
            if len > MAX_PAYLOAD_BYTES as usize {
                return Err(WavchanError::malformed(format!(
                    "payload of {} bytes exceeds the container limit",
                    len
                )));
            }
            if len % header.frame_size() as usize != 0 {
                return Err(WavchanError::malformed(format!(
                    "payload of {} bytes is not a whole number of {}-byte frames",
                    len,
                    header.frame_size()
                )));
            }
            header.payload_byte_count = len as u32;
            return Ok((header, body));
        }

        pos = body.saturating_add(len).saturating_add(len & 1);
    }
}

// ============================================================================
// Writing
// ============================================================================

/// Serialize a header record into the canonical 44-byte layout
///
/// Callers pass validated parameters (payload at most `MAX_PAYLOAD_BYTES`,
/// byte rate within 32 bits); there is no error path.
pub fn write_header(header: &HeaderRecord) -> [u8; HEADER_LEN] {
    let mut out = [0u8; HEADER_LEN];

    // RIFF header
    out[0..4].copy_from_slice(RIFF_TAG);
    let riff_size = RIFF_OVERHEAD.saturating_add(header.payload_byte_count);
    out[4..8].copy_from_slice(&riff_size.to_le_bytes());
    out[8..12].copy_from_slice(WAVE_TAG);

    // fmt sub-block
    out[12..16].copy_from_slice(FMT_TAG);
    out[16..20].copy_from_slice(&PCM_FMT_LEN.to_le_bytes());
    out[20..22].copy_from_slice(&FORMAT_PCM.to_le_bytes());
    out[22..24].copy_from_slice(&header.channel_count.to_le_bytes());
    out[24..28].copy_from_slice(&header.sample_rate.to_le_bytes());
    out[28..32].copy_from_slice(&header.byte_rate().to_le_bytes());
    out[32..34].copy_from_slice(&header.block_align().to_le_bytes());
    out[34..36].copy_from_slice(&header.bits_per_sample.to_le_bytes());

    // data sub-block
    out[36..40].copy_from_slice(DATA_TAG);
    out[40..44].copy_from_slice(&header.payload_byte_count.to_le_bytes());

    out
}

// ============================================================================
// Tests
// ============================================================================
