//! Reading chunks back out of an encoded WAV buffer.

use super::format::WavFormat;

/// Iterator over the `(id, body)` chunks following a RIFF/WAVE header.
///
/// Stops at the first chunk whose declared size runs past the buffer.
struct Chunks<'a> {
    rest: &'a [u8],
}

impl<'a> Chunks<'a> {
    fn new(wav_data: &'a [u8]) -> Option<Self> {
        match wav_data {
            [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'A', b'V', b'E', rest @ ..] => {
                Some(Self { rest })
            }
            _ => None,
        }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = (&'a [u8], &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        let (head, tail) = self.rest.split_at_checked(8)?;
        let size = u32::from_le_bytes([head[4], head[5], head[6], head[7]]) as usize;
        let body = tail.get(..size)?;
        // Chunk bodies are padded to an even length.
        let padded = size + size % 2;
        self.rest = tail.get(padded..).unwrap_or(&[]);
        Some((&head[..4], body))
    }
}

fn find_chunk<'a>(wav_data: &'a [u8], id: &[u8; 4]) -> Option<&'a [u8]> {
    Chunks::new(wav_data)?
        .find(|&(chunk_id, _)| chunk_id == id.as_slice())
        .map(|(_, body)| body)
}

/// The `data` chunk of a WAV buffer, or None if the buffer is not a
/// well-formed RIFF/WAVE file with a complete `data` chunk.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    find_chunk(wav_data, b"data")
}

/// Parses the `fmt ` chunk of a WAV buffer.
///
/// Returns None unless the file is uncompressed PCM.
pub fn parse_format(wav_data: &[u8]) -> Option<WavFormat> {
    let fmt = find_chunk(wav_data, b"fmt ")?;
    let le16 = |at: usize| u16::from_le_bytes([fmt[at], fmt[at + 1]]);

    if fmt.len() < 16 || le16(0) != 1 {
        return None;
    }
    Some(WavFormat {
        channels: le16(2),
        sample_rate: u32::from_le_bytes([fmt[4], fmt[5], fmt[6], fmt[7]]),
        bits_per_sample: le16(14),
    })
}

/// BLAKE3 hex digest of the `data` chunk, or None if there is none.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}
