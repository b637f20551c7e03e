//! RIFF/WAVE container writing.

use std::io::Write;

use crate::error::SynthResult;

use super::format::WavFormat;

/// Size of the canonical header written before the PCM payload.
pub const WAV_HEADER_LEN: usize = 44;

/// Builds the RIFF header, `fmt ` chunk and `data` chunk header.
///
/// # Arguments
/// * `format` - WAV format parameters
/// * `data_len` - Size of the PCM payload in bytes
///
/// # Returns
/// The 44-byte canonical header
pub fn wav_header(format: &WavFormat, data_len: u32) -> [u8; WAV_HEADER_LEN] {
    let mut header = [0u8; WAV_HEADER_LEN];
    let fields: [&[u8]; 13] = [
        b"RIFF",
        &(36 + data_len).to_le_bytes(),
        b"WAVE",
        b"fmt ",
        &16u32.to_le_bytes(),
        &1u16.to_le_bytes(), // PCM
        &format.channels.to_le_bytes(),
        &format.sample_rate.to_le_bytes(),
        &format.byte_rate().to_le_bytes(),
        &format.block_align().to_le_bytes(),
        &format.bits_per_sample.to_le_bytes(),
        b"data",
        &data_len.to_le_bytes(),
    ];

    let mut pos = 0;
    for field in fields {
        header[pos..pos + field.len()].copy_from_slice(field);
        pos += field.len();
    }
    header
}

/// Writes a complete WAV file to `writer`.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
///
/// # Returns
/// `SynthError::Io` if the writer fails
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> SynthResult<()> {
    writer.write_all(&wav_header(format, pcm_data.len() as u32))?;
    writer.write_all(pcm_data)?;
    Ok(())
}

/// Builds a complete WAV file in memory.
///
/// # Arguments
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
///
/// # Returns
/// Complete WAV file as bytes
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(WAV_HEADER_LEN + pcm_data.len());
    buffer.extend_from_slice(&wav_header(format, pcm_data.len() as u32));
    buffer.extend_from_slice(pcm_data);
    buffer
}
