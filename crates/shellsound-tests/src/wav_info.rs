//! WAV inspection through `hound`, independent of the crate's own encoder.

use std::path::Path;

/// Header fields and samples of a decoded WAV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavInfo {
    /// Channel count from the `fmt ` chunk.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Integer or float samples.
    pub sample_format: hound::SampleFormat,
    /// Decoded 16-bit samples.
    pub samples: Vec<i16>,
    /// Size of the file on disk.
    pub file_size: u64,
}

impl WavInfo {
    /// Number of samples per channel.
    pub fn num_samples(&self) -> usize {
        self.samples.len() / self.channels.max(1) as usize
    }

    /// Largest absolute sample value.
    pub fn peak(&self) -> i32 {
        self.samples
            .iter()
            .map(|&s| (s as i32).abs())
            .max()
            .unwrap_or(0)
    }
}

/// Opens `path` with `hound` and decodes all samples.
pub fn read_wav_info(path: &Path) -> Result<WavInfo, hound::Error> {
    let file_size = std::fs::metadata(path)?.len();
    let reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    let samples = reader
        .into_samples::<i16>()
        .collect::<Result<Vec<i16>, _>>()?;

    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        sample_format: spec.sample_format,
        samples,
        file_size,
    })
}
