//! PCM conversion, extraction and hashing.

/// Converts samples to little-endian 16-bit PCM, clipping to `[-1.0, 1.0]`.
///
/// # Arguments
/// * `samples` - Audio samples in f64 format
///
/// # Returns
/// PCM data, two bytes per sample
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    samples
        .iter()
        .flat_map(|&sample| {
            let value = (sample.clamp(-1.0, 1.0) * 32767.0).round() as i16;
            value.to_le_bytes()
        })
        .collect()
}

/// Finds the payload of the `data` chunk in a WAV file.
///
/// # Arguments
/// * `wav_data` - Complete WAV file bytes
///
/// # Returns
/// PCM data if found, or None if the file is malformed or truncated
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < 12 || &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let id = &wav_data[pos..pos + 4];
        let size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;
        let start = pos + 8;

        if id == b"data" {
            return wav_data.get(start..start.checked_add(size)?);
        }
        // Chunks are word aligned.
        pos = start + size + (size & 1);
    }

    None
}

/// BLAKE3 hex digest of a WAV file's PCM payload.
///
/// # Arguments
/// * `wav_data` - Complete WAV file bytes
///
/// # Returns
/// Hex-encoded hash, or None if no PCM data is found
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}
