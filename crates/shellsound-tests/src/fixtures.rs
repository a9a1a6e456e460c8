//! Test fixtures for generated catalogs.

use std::path::{Path, PathBuf};

use shellsound_cli::commands::generate::{generate_into, GenerationSummary};
use shellsound_synth::{CatalogFilter, SoundKey};
use tempfile::TempDir;

/// A catalog generated into a temporary output root.
pub struct GeneratedCatalog {
    pub root: TempDir,
    pub summary: GenerationSummary,
}

impl GeneratedCatalog {
    /// Generates the full catalog into a fresh temp dir.
    pub fn new() -> Self {
        Self::with_filter(&CatalogFilter::default())
    }

    /// Generates the part of the catalog passing `filter`.
    pub fn with_filter(filter: &CatalogFilter) -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        let summary = generate_into(root.path(), filter);
        Self { root, summary }
    }

    /// Output root path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Path of one sound under this output root.
    pub fn file(&self, key: &SoundKey) -> PathBuf {
        self.root.path().join(key.relative_path())
    }
}

impl Default for GeneratedCatalog {
    fn default() -> Self {
        Self::new()
    }
}
