//! Little-endian PCM sample codecs
//!
//! Converts between raw payload bytes and typed samples. Callers validate the
//! header first, so payload lengths are whole frames; any trailing partial
//! frame is ignored.

/// Decode 16-bit signed samples
pub fn decode_i16_samples(payload: &[u8]) -> Vec<i16> {
    payload
        .chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]))
        .collect()
}

/// Encode 16-bit signed samples
pub fn encode_i16_samples(samples: &[i16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(samples.len() * 2);
    for sample in samples {
        out.extend_from_slice(&sample.to_le_bytes());
    }
    out
}

/// Decode 32-bit words as raw bit patterns
pub fn decode_words(payload: &[u8]) -> Vec<u32> {
    payload
        .chunks_exact(4)
        .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect()
}

/// Encode 32-bit words as raw bit patterns
pub fn encode_words(words: &[u32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(words.len() * 4);
    for word in words {
        out.extend_from_slice(&word.to_le_bytes());
    }
    out
}
