//! Header serialization and float-to-PCM16 conversion.

use std::io::{self, Write};

use super::format::WavFormat;
use crate::MAX_AMPLITUDE;

/// Size of the canonical PCM header written by [`write_wav`].
pub const HEADER_SIZE: usize = 44;

/// Size of a PCM `fmt ` chunk body.
const FMT_CHUNK_SIZE: u32 = 16;
/// `fmt ` audio format tag for uncompressed PCM.
const FORMAT_PCM: u16 = 1;

/// Builds the 44-byte RIFF/WAVE header for `data_len` bytes of PCM.
fn header(format: &WavFormat, data_len: u32) -> [u8; HEADER_SIZE] {
    let fields: [&[u8]; 13] = [
        b"RIFF",
        &(HEADER_SIZE as u32 - 8 + data_len).to_le_bytes(),
        b"WAVE",
        b"fmt ",
        &FMT_CHUNK_SIZE.to_le_bytes(),
        &FORMAT_PCM.to_le_bytes(),
        &format.channels.to_le_bytes(),
        &format.sample_rate.to_le_bytes(),
        &format.byte_rate().to_le_bytes(),
        &format.block_align().to_le_bytes(),
        &format.bits_per_sample.to_le_bytes(),
        b"data",
        &data_len.to_le_bytes(),
    ];

    let mut out = [0u8; HEADER_SIZE];
    let mut pos = 0;
    for field in fields {
        out[pos..pos + field.len()].copy_from_slice(field);
        pos += field.len();
    }
    out
}

/// Writes the header followed by `pcm_data`.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    writer.write_all(&header(format, pcm_data.len() as u32))?;
    writer.write_all(pcm_data)
}

/// Assembles a complete WAV file in memory.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(HEADER_SIZE + pcm_data.len());
    buffer.extend_from_slice(&header(format, pcm_data.len() as u32));
    buffer.extend_from_slice(pcm_data);
    buffer
}

/// Converts one float sample to a 16-bit value.
///
/// The sample is scaled by 32767, clamped to [-32767, 32767] and truncated
/// toward zero. NaN maps to 0.
#[inline]
pub fn pcm16_value(sample: f64) -> i16 {
    (sample * MAX_AMPLITUDE).clamp(-MAX_AMPLITUDE, MAX_AMPLITUDE) as i16
}

/// Little-endian PCM16 bytes for `samples`. Out-of-range input is clamped,
/// never wrapped.
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    samples
        .iter()
        .flat_map(|&s| pcm16_value(s).to_le_bytes())
        .collect()
}
