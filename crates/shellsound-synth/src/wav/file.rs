//! Reading and writing WAV files on disk.

use std::fs;
use std::path::Path;

use crate::error::{SoundError, SoundResult};

/// Writes `wav_data` to `path`, creating parent directories as needed and
/// replacing any existing file.
pub fn write_wav_file(path: &Path, wav_data: &[u8]) -> SoundResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| SoundError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, wav_data).map_err(|source| SoundError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a WAV file from disk.
pub fn read_wav_file(path: &Path) -> SoundResult<Vec<u8>> {
    fs::read(path).map_err(|source| SoundError::Read {
        path: path.to_path_buf(),
        source,
    })
}
