//! 16-bit PCM WAV encoding.
//!
//! Output is mono, carries no metadata and is byte-for-byte reproducible, so
//! the BLAKE3 hash of the PCM payload identifies a rendering.

mod format;
mod pcm;
mod result;
mod writer;


pub use format::WavFormat;
pub use pcm::{compute_pcm_hash, extract_pcm_data, samples_to_pcm16};
pub use result::WavResult;
pub use writer::{wav_header, write_wav, write_wav_to_vec, WAV_HEADER_LEN};
