//! Deterministic WAV file writer.
//!
//! This module writes mono 16-bit PCM WAV files with no timestamps or
//! variable metadata, so the same samples always produce the same bytes.
//! The BLAKE3 hash of the PCM payload identifies a sound independently of
//! its container.

mod file;
mod format;
mod pcm;
mod result;
mod writer;


// Re-export public API
pub use file::{read_wav_file, write_wav_file};
pub use format::WavFormat;
pub use pcm::{compute_pcm_hash, extract_pcm_data, parse_format};
pub use result::WavResult;
pub use writer::{pcm16_value, samples_to_pcm16, write_wav, write_wav_to_vec};
