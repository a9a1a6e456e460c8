//! Comparing generated files on disk against a fresh render.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::catalog::{CatalogEntry, SoundKey};
use crate::error::{SoundError, SoundResult};
use crate::generate::render;
use crate::wav::{extract_pcm_data, parse_format, read_wav_file, WavFormat};

/// State of one generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// PCM payload matches a fresh render.
    Ok,
    /// File does not exist.
    Missing,
    /// File parses but its format or payload differs.
    Stale,
    /// File could not be read or is not a PCM WAV file.
    Unreadable,
}

impl FileStatus {
    /// Lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            FileStatus::Ok => "ok",
            FileStatus::Missing => "missing",
            FileStatus::Stale => "stale",
            FileStatus::Unreadable => "unreadable",
        }
    }
}

/// Verification result for one catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerifiedSound {
    /// Catalog key.
    pub key: SoundKey,
    /// File that was checked.
    pub path: PathBuf,
    /// Outcome of the comparison.
    pub status: FileStatus,
    /// PCM hash of a fresh render.
    pub expected_hash: String,
    /// PCM hash of the file on disk, when it could be computed.
    pub found_hash: Option<String>,
    /// Why the file is not `ok`.
    pub detail: Option<String>,
}

/// Checks `<out_root>/<pack>/<category>/<intensity>.wav` against `entry`.
pub fn verify_sound(out_root: &Path, entry: &CatalogEntry) -> VerifiedSound {
    let path = out_root.join(entry.key.relative_path());
    let expected = render(entry).wav;
    let expected_format = WavFormat::mono(expected.sample_rate);

    let mut verified = VerifiedSound {
        key: entry.key,
        path,
        status: FileStatus::Ok,
        expected_hash: expected.pcm_hash,
        found_hash: None,
        detail: None,
    };

    if !verified.path.exists() {
        verified.status = FileStatus::Missing;
        return verified;
    }

    match load_wav(&verified.path) {
        Err(e) => {
            verified.status = FileStatus::Unreadable;
            verified.detail = Some(e.to_string());
        }
        Ok(OnDisk {
            format,
            hash,
            num_samples,
        }) => {
            if format != expected_format {
                verified.status = FileStatus::Stale;
                verified.detail = Some(format!(
                    "format is {} ch / {} Hz / {} bit, expected {} ch / {} Hz / {} bit",
                    format.channels,
                    format.sample_rate,
                    format.bits_per_sample,
                    expected_format.channels,
                    expected_format.sample_rate,
                    expected_format.bits_per_sample
                ));
            } else if hash != verified.expected_hash {
                verified.status = FileStatus::Stale;
                verified.detail = Some(format!(
                    "PCM payload differs from a fresh render ({} samples on disk, {} expected)",
                    num_samples, expected.num_samples
                ));
            }
            verified.found_hash = Some(hash);
        }
    }

    verified
}

struct OnDisk {
    format: WavFormat,
    hash: String,
    num_samples: usize,
}

fn load_wav(path: &Path) -> SoundResult<OnDisk> {
    let data = read_wav_file(path)?;
    let invalid = |message: &str| SoundError::InvalidWav {
        path: path.to_path_buf(),
        message: message.to_string(),
    };
    let format = parse_format(&data).ok_or_else(|| invalid("missing or non-PCM fmt chunk"))?;
    let pcm = extract_pcm_data(&data).ok_or_else(|| invalid("missing or truncated data chunk"))?;
    Ok(OnDisk {
        format,
        hash: blake3::hash(pcm).to_hex().to_string(),
        num_samples: format.frames_in(pcm.len()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category, Intensity, Pack};
    use crate::generate::write_sound;
    use crate::wav::WavResult;

    fn entry() -> &'static CatalogEntry {
        let key = SoundKey::new(Pack::Chill, Category::Warning, Intensity::Heavy);
        Catalog::builtin().require(&key).unwrap()
    }

    #[test]
    fn test_verify_fresh_file_is_ok() {
        let tmp = tempfile::tempdir().unwrap();
        let written = write_sound(tmp.path(), entry()).unwrap();

        let verified = verify_sound(tmp.path(), entry());
        assert_eq!(verified.status, FileStatus::Ok);
        assert_eq!(verified.found_hash.as_deref(), Some(written.stats.pcm_hash.as_str()));
        assert_eq!(verified.detail, None);
    }

    #[test]
    fn test_verify_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let verified = verify_sound(tmp.path(), entry());
        assert_eq!(verified.status, FileStatus::Missing);
        assert_eq!(verified.found_hash, None);
    }

    #[test]
    fn test_verify_stale_payload() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(entry().key.relative_path());
        let other = WavResult::from_mono(&[0.25; 64], crate::SAMPLE_RATE);
        crate::wav::write_wav_file(&path, &other.wav_data).unwrap();

        let verified = verify_sound(tmp.path(), entry());
        assert_eq!(verified.status, FileStatus::Stale);
        assert_eq!(verified.found_hash, Some(other.pcm_hash));
        assert!(verified.detail.unwrap().contains("64 samples on disk"));
    }

    #[test]
    fn test_verify_stale_format() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(entry().key.relative_path());
        let other = WavResult::from_mono(&entry().recipe.render(crate::SAMPLE_RATE), 44100);
        crate::wav::write_wav_file(&path, &other.wav_data).unwrap();

        let verified = verify_sound(tmp.path(), entry());
        assert_eq!(verified.status, FileStatus::Stale);
        assert!(verified.detail.unwrap().contains("44100 Hz"));
    }

    #[test]
    fn test_verify_garbage_is_unreadable() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(entry().key.relative_path());
        crate::wav::write_wav_file(&path, b"definitely not a wav file").unwrap();

        let verified = verify_sound(tmp.path(), entry());
        assert_eq!(verified.status, FileStatus::Unreadable);
        assert!(verified.detail.unwrap().contains("invalid WAV file"));
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(FileStatus::Ok.as_str(), "ok");
        assert_eq!(FileStatus::Unreadable.as_str(), "unreadable");
        assert_eq!(
            serde_json::to_string(&FileStatus::Missing).unwrap(),
            "\"missing\""
        );
    }
}
