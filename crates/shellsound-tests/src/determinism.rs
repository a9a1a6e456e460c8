//! Byte-level comparison of generated output.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use shellsound_synth::SoundKey;

/// First byte difference between two buffers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffInfo {
    /// Byte offset of the difference.
    pub offset: usize,
    /// Byte from the first buffer, if it is long enough.
    pub expected: Option<u8>,
    /// Byte from the second buffer, if it is long enough.
    pub actual: Option<u8>,
}

impl fmt::Display for DiffInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let byte = |b: Option<u8>| b.map_or_else(|| "EOF".to_string(), |b| format!("0x{:02X}", b));
        write!(
            f,
            "Difference at byte {}: expected {}, got {}",
            self.offset,
            byte(self.expected),
            byte(self.actual)
        )
    }
}

/// BLAKE3 hex digest of `data`.
pub fn compute_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Finds the first differing byte, or None if the buffers are identical.
pub fn first_difference(a: &[u8], b: &[u8]) -> Option<DiffInfo> {
    let offset = a
        .iter()
        .zip(b)
        .position(|(x, y)| x != y)
        .or_else(|| (a.len() != b.len()).then(|| a.len().min(b.len())))?;
    Some(DiffInfo {
        offset,
        expected: a.get(offset).copied(),
        actual: b.get(offset).copied(),
    })
}

/// Compares every catalog file under two output roots.
///
/// Returns `(relative path, description)` for each file that differs or is
/// missing from either side.
pub fn compare_trees(a: &Path, b: &Path) -> Vec<(PathBuf, String)> {
    let mut differences = Vec::new();
    for key in SoundKey::all() {
        let relative = key.relative_path();
        match (fs::read(a.join(&relative)), fs::read(b.join(&relative))) {
            (Ok(left), Ok(right)) => {
                if let Some(diff) = first_difference(&left, &right) {
                    differences.push((relative, diff.to_string()));
                }
            }
            (Err(e), _) | (_, Err(e)) => differences.push((relative, e.to_string())),
        }
    }
    differences
}
