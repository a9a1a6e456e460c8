//! Rendering catalog entries and writing them to disk.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::catalog::{CatalogEntry, SoundKey};
use crate::error::SoundResult;
use crate::wav::{write_wav_file, WavResult};
use crate::{MAX_AMPLITUDE, SAMPLE_RATE};

/// Summary statistics of a rendered sound.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoundStats {
    /// Number of samples.
    pub num_samples: usize,
    /// Duration in seconds.
    pub duration_seconds: f64,
    /// Largest absolute sample value before encoding.
    pub peak: f64,
    /// Root-mean-square level before encoding.
    pub rms: f64,
    /// Samples the encoder had to clamp.
    pub clipped_samples: usize,
    /// BLAKE3 hash of the PCM payload.
    pub pcm_hash: String,
}

impl SoundStats {
    fn measure(samples: &[f64], wav: &WavResult) -> Self {
        let peak = samples.iter().fold(0.0f64, |acc, s| acc.max(s.abs()));
        let rms = if samples.is_empty() {
            0.0
        } else {
            (samples.iter().map(|s| s * s).sum::<f64>() / samples.len() as f64).sqrt()
        };
        let clipped_samples = samples
            .iter()
            .filter(|s| (*s * MAX_AMPLITUDE).abs() > MAX_AMPLITUDE)
            .count();

        Self {
            num_samples: samples.len(),
            duration_seconds: wav.duration_seconds(),
            peak,
            rms,
            clipped_samples,
            pcm_hash: wav.pcm_hash.clone(),
        }
    }
}

/// A catalog entry rendered in memory.
#[derive(Debug, Clone)]
pub struct RenderedSound {
    /// Which sound this is.
    pub key: SoundKey,
    /// Final float samples.
    pub samples: Vec<f64>,
    /// Encoded WAV file.
    pub wav: WavResult,
    /// Statistics.
    pub stats: SoundStats,
}

/// Renders and encodes a catalog entry at [`SAMPLE_RATE`].
pub fn render(entry: &CatalogEntry) -> RenderedSound {
    let samples = entry.recipe.render(SAMPLE_RATE);
    let wav = WavResult::from_mono(&samples, SAMPLE_RATE);
    let stats = SoundStats::measure(&samples, &wav);

    RenderedSound {
        key: entry.key,
        samples,
        wav,
        stats,
    }
}

/// A sound that has been written to disk.
#[derive(Debug, Clone, Serialize)]
pub struct WrittenSound {
    /// Which sound this is.
    pub key: SoundKey,
    /// Where it was written.
    pub path: PathBuf,
    /// Size of the file in bytes.
    pub file_size: usize,
    /// Statistics.
    pub stats: SoundStats,
}

/// Renders `entry` and writes it to `<out_root>/<pack>/<category>/<intensity>.wav`,
/// replacing any existing file.
pub fn write_sound(out_root: &Path, entry: &CatalogEntry) -> SoundResult<WrittenSound> {
    let rendered = render(entry);
    let path = out_root.join(entry.key.relative_path());
    write_wav_file(&path, &rendered.wav.wav_data)?;

    Ok(WrittenSound {
        key: entry.key,
        path,
        file_size: rendered.wav.wav_data.len(),
        stats: rendered.stats,
    })
}
