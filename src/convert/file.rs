//! File-level conversions
//!
//! Inputs are read fully into memory; outputs are assembled in memory and
//! written to a sibling temporary file that is renamed over the destination.
//! A failed conversion therefore leaves the destination untouched.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::container::PcmStream;
use crate::convert;
use crate::error::{Result, WavchanError};
use crate::transform::ChannelMode;

/// Read and parse a container file
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `FileReadError` - If the file cannot be read
/// * `MalformedContainer` - If the contents are not a valid PCM container
pub fn read_stream(path: &Path) -> Result<PcmStream> {
    if !path.exists() {
        return Err(WavchanError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let bytes = fs::read(path).map_err(|e| WavchanError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let stream = PcmStream::parse(&bytes)?;
    debug!(
        "read {}: {:?}",
        path.display(),
        stream.header()
    );
    Ok(stream)
}

/// Write a stream as one contiguous container (header then payload)
///
/// The destination is replaced atomically.
pub fn write_stream(path: &Path, stream: &PcmStream) -> Result<()> {
    let tmp_path = temp_path_for(path);
    let bytes = stream.to_bytes();

    let written = write_and_sync(&tmp_path, &bytes).and_then(|_| fs::rename(&tmp_path, path));
    if let Err(e) = written {
        if tmp_path.exists() {
            if let Err(cleanup) = fs::remove_file(&tmp_path) {
                warn!(
                    "could not remove temporary file {}: {}",
                    tmp_path.display(),
                    cleanup
                );
            }
        }
        return Err(WavchanError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        });
    }

    debug!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

fn write_and_sync(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    path.with_file_name(format!(".{}.{}.partial", name, std::process::id()))
}

/// Convert a stereo file to mono
pub fn stereo_to_mono_file(input: &Path, output: &Path, mode: ChannelMode) -> Result<PcmStream> {
    let stereo = read_stream(input)?;
    let mono = convert::stereo_to_mono(&stereo, mode)?;
    write_stream(output, &mono)?;
    Ok(mono)
}

/// Join two mono files into one stereo file
pub fn mono_to_stereo_file(left: &Path, right: &Path, output: &Path) -> Result<PcmStream> {
    let left = read_stream(left)?;
    let right = read_stream(right)?;
    let stereo = convert::mono_to_stereo(&left, &right)?;
    write_stream(output, &stereo)?;
    Ok(stereo)
}

/// Pack a stereo file into a combined 32-bit file
pub fn encode_combined_file(input: &Path, output: &Path) -> Result<PcmStream> {
    let stereo = read_stream(input)?;
    let combined = convert::encode_combined(&stereo)?;
    write_stream(output, &combined)?;
    Ok(combined)
}

/// Unpack a combined 32-bit file into a stereo file
pub fn decode_combined_file(input: &Path, output: &Path) -> Result<PcmStream> {
    let combined = read_stream(input)?;
    let stereo = convert::decode_combined(&combined)?;
    write_stream(output, &stereo)?;
    Ok(stereo)
}
