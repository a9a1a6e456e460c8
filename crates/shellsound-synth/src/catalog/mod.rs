//! The built-in sound catalog.
//!
//! The catalog is a static table of 27 entries, one for every combination of
//! [`Pack`], [`Category`] and [`Intensity`]. It is built at compile time and
//! never mutated.

mod chill;
mod keys;
mod meme;
mod retro;

use serde::Serialize;

use crate::error::{SoundError, SoundResult};
use crate::recipe::Recipe;

pub use keys::{Category, Intensity, Pack, SoundKey};

/// One catalog sound: its key, a short description and its recipe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CatalogEntry {
    /// Unique key.
    pub key: SoundKey,
    /// Human-readable description.
    pub description: &'static str,
    /// How to synthesize it.
    pub recipe: Recipe,
}

impl CatalogEntry {
    /// Creates an entry.
    pub const fn new(
        pack: Pack,
        category: Category,
        intensity: Intensity,
        description: &'static str,
        recipe: Recipe,
    ) -> Self {
        Self {
            key: SoundKey::new(pack, category, intensity),
            description,
            recipe,
        }
    }
}

static ENTRIES: [[CatalogEntry; 9]; 3] = [meme::ENTRIES, chill::ENTRIES, retro::ENTRIES];

/// Optional pack/category/intensity filter. `None` matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    /// Restrict to one pack.
    pub pack: Option<Pack>,
    /// Restrict to one category.
    pub category: Option<Category>,
    /// Restrict to one intensity.
    pub intensity: Option<Intensity>,
}

impl CatalogFilter {
    /// Returns true if `key` passes the filter.
    pub fn matches(&self, key: &SoundKey) -> bool {
        self.pack.map_or(true, |p| p == key.pack)
            && self.category.map_or(true, |c| c == key.category)
            && self.intensity.map_or(true, |i| i == key.intensity)
    }
}

/// Read-only view of the built-in catalog.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    entries: &'static [CatalogEntry],
}

impl Catalog {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        Self {
            entries: ENTRIES.as_flattened(),
        }
    }

    /// All entries, grouped by pack.
    pub fn entries(&self) -> &'static [CatalogEntry] {
        self.entries
    }

    /// Iterates over all entries.
    pub fn iter(&self) -> std::slice::Iter<'static, CatalogEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by key.
    pub fn get(&self, key: &SoundKey) -> Option<&'static CatalogEntry> {
        self.entries.iter().find(|e| &e.key == key)
    }

    /// Looks up an entry by key, failing with [`SoundError::UnknownSound`].
    pub fn require(&self, key: &SoundKey) -> SoundResult<&'static CatalogEntry> {
        self.get(key).ok_or_else(|| SoundError::UnknownSound {
            key: key.to_string(),
        })
    }

    /// Entries passing `filter`, in catalog order.
    pub fn select(&self, filter: &CatalogFilter) -> Vec<&'static CatalogEntry> {
        self.entries
            .iter()
            .filter(|e| filter.matches(&e.key))
            .collect()
    }
}

impl IntoIterator for Catalog {
    type Item = &'static CatalogEntry;
    type IntoIter = std::slice::Iter<'static, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SAMPLE_RATE;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

    #[test]
    fn test_catalog_has_27_entries() {
        assert_eq!(Catalog::builtin().len(), 27);
    }

    #[test]
    fn test_catalog_covers_every_key_once() {
        let catalog = Catalog::builtin();
        let keys: BTreeSet<SoundKey> = catalog.iter().map(|e| e.key).collect();
        let expected: BTreeSet<SoundKey> = SoundKey::all().collect();
        assert_eq!(keys.len(), catalog.len());
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_entries_grouped_by_declared_pack() {
        let catalog = Catalog::builtin();
        for (n, entry) in catalog.iter().enumerate() {
            assert_eq!(entry.key.pack, Pack::ALL[n / 9]);
        }
    }

    #[test]
    fn test_get_and_require() {
        let catalog = Catalog::builtin();
        let key = SoundKey::new(Pack::Meme, Category::Success, Intensity::Light);
        let entry = catalog.require(&key).unwrap();
        assert_eq!(entry.key, key);
        assert_eq!(entry.recipe.duration, 0.2);
        assert_eq!(entry.recipe.gain, 0.6);
    }

    #[test]
    fn test_filter_by_pack_and_category() {
        let catalog = Catalog::builtin();
        let filter = CatalogFilter {
            pack: Some(Pack::Retro),
            category: Some(Category::Warning),
            intensity: None,
        };
        let selected = catalog.select(&filter);
        assert_eq!(selected.len(), 3);
        assert!(selected
            .iter()
            .all(|e| e.key.pack == Pack::Retro && e.key.category == Category::Warning));
        assert_eq!(catalog.select(&CatalogFilter::default()).len(), 27);
    }

    #[test]
    fn test_every_recipe_renders_expected_length() {
        for entry in Catalog::builtin() {
            let samples = entry.recipe.render(SAMPLE_RATE);
            let nominal = (entry.recipe.duration * SAMPLE_RATE as f64).floor() as i64;
            assert!(
                (samples.len() as i64 - nominal).abs() <= 1,
                "{}: {} samples, expected about {}",
                entry.key,
                samples.len(),
                nominal
            );
        }
    }

    #[test]
    fn test_every_recipe_within_peak_bound() {
        for entry in Catalog::builtin() {
            let bound = entry.recipe.peak_bound();
            for &s in &entry.recipe.render(SAMPLE_RATE) {
                assert!(s.is_finite());
                assert!(s.abs() <= bound + 1e-12, "{} exceeds {}", entry.key, bound);
            }
        }
    }
}
