//! Shellsound End-to-End Test Infrastructure
//!
//! Integration tests for the generated catalog:
//!
//! - Generation: catalog -> 27 WAV files under an output root
//! - Format: every file parses as mono 16-bit 22050 Hz PCM
//! - **Determinism**: repeated runs produce byte-identical files
//! - Verification: the `check` flow detects missing and stale files
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p shellsound-tests
//! ```

pub mod determinism;
pub mod fixtures;
pub mod wav_info;

pub use determinism::{compare_trees, compute_hash, first_difference, DiffInfo};
pub use fixtures::GeneratedCatalog;
pub use wav_info::{read_wav_info, WavInfo};
