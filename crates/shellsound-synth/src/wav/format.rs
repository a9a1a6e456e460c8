//! WAV file format parameters.

use serde::Serialize;

use crate::{BITS_PER_SAMPLE, CHANNELS};

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WavFormat {
    /// Number of channels (always 1 for catalog sounds).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16 for this implementation).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a mono 16-bit format.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: CHANNELS,
            sample_rate,
            bits_per_sample: BITS_PER_SAMPLE,
        }
    }

    /// Bytes in one sample of one channel.
    pub(crate) fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample.div_ceil(8)
    }

    /// Bytes in one frame across all channels.
    pub(crate) fn block_align(&self) -> u16 {
        self.bytes_per_sample() * self.channels
    }

    /// Bytes of PCM per second of audio.
    pub(crate) fn byte_rate(&self) -> u32 {
        u32::from(self.block_align()) * self.sample_rate
    }

    /// Whole frames contained in `data_len` bytes of PCM.
    pub fn frames_in(&self, data_len: usize) -> usize {
        match self.block_align() {
            0 => 0,
            align => data_len / align as usize,
        }
    }
}
