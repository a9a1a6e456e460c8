//! End-to-end determinism tests
//!
//! Two independent generation runs must produce byte-identical files.

use shellsound_synth::{render, Catalog, SoundKey};
use shellsound_tests::{compare_trees, compute_hash, GeneratedCatalog};

#[test]
fn test_two_runs_are_byte_identical() {
    let first = GeneratedCatalog::new();
    let second = GeneratedCatalog::new();

    let differences = compare_trees(first.path(), second.path());
    assert!(
        differences.is_empty(),
        "generation is not deterministic:\n{}",
        differences
            .iter()
            .map(|(path, why)| format!("  {}: {}", path.display(), why))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

#[test]
fn test_summary_hashes_match_files() {
    let catalog = GeneratedCatalog::new();

    for outcome in &catalog.summary.sounds {
        let bytes = std::fs::read(&outcome.path).unwrap();
        // PCM payload follows the 44-byte header
        assert_eq!(
            outcome.pcm_hash.as_deref(),
            Some(compute_hash(&bytes[44..]).as_str()),
            "{}",
            outcome.key
        );
    }
}

#[test]
fn test_file_matches_in_memory_render() {
    let catalog = GeneratedCatalog::new();

    for entry in Catalog::builtin() {
        let bytes = std::fs::read(catalog.file(&entry.key)).unwrap();
        assert!(bytes == render(entry).wav.wav_data, "{} differs", entry.key);
    }
}

#[test]
fn test_all_sounds_are_distinct() {
    let catalog = GeneratedCatalog::new();

    let mut hashes: Vec<String> = SoundKey::all()
        .map(|key| compute_hash(&std::fs::read(catalog.file(&key)).unwrap()))
        .collect();
    hashes.sort();
    hashes.dedup();
    assert_eq!(hashes.len(), 27);
}
