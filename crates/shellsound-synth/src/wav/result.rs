//! An encoded sound together with its PCM hash.

use super::format::WavFormat;
use super::writer::{samples_to_pcm16, write_wav_to_vec, HEADER_SIZE};

/// An encoded mono WAV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavResult {
    /// Header plus PCM payload, ready to write.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hex digest of the PCM payload alone.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of mono samples in the payload.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes `samples` as mono PCM16 at `sample_rate`.
    pub fn from_mono(samples: &[f64], sample_rate: u32) -> Self {
        let pcm = samples_to_pcm16(samples);
        Self {
            wav_data: write_wav_to_vec(&WavFormat::mono(sample_rate), &pcm),
            pcm_hash: blake3::hash(&pcm).to_hex().to_string(),
            sample_rate,
            num_samples: samples.len(),
        }
    }

    /// Length in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }

    /// The PCM payload following the header.
    pub fn pcm_data(&self) -> &[u8] {
        &self.wav_data[HEADER_SIZE..]
    }
}
