//! Encoded rendering.

use std::path::Path;

use serde::Serialize;

use crate::error::SynthResult;

use super::format::WavFormat;
use super::pcm::samples_to_pcm16;
use super::writer::write_wav_to_vec;

/// A rendered buffer encoded as a WAV file.
#[derive(Debug, Clone, Serialize)]
pub struct WavResult {
    /// Complete WAV file bytes.
    #[serde(skip)]
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM payload.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes mono samples.
    ///
    /// # Arguments
    /// * `samples` - Rendered mono samples
    /// * `sample_rate` - Sample rate in Hz
    pub fn from_mono(samples: &[f64], sample_rate: u32) -> Self {
        let pcm = samples_to_pcm16(samples);
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let wav_data = write_wav_to_vec(&WavFormat::mono(sample_rate), &pcm);

        Self {
            wav_data,
            pcm_hash,
            sample_rate,
            num_samples: samples.len(),
        }
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }

    /// Writes the WAV file to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> SynthResult<()> {
        let path = path.as_ref();
        std::fs::write(path, &self.wav_data)?;
        log::info!("wrote {} ({} bytes)", path.display(), self.wav_data.len());
        Ok(())
    }
}
