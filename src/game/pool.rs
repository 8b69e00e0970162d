//! Image pool: the full, immutable deck a session draws from.

use crate::assets::AssetProvider;
use crate::game::types::{Category, ImageEntry};

#[derive(Debug, Clone, Default)]
pub struct ImagePool {
    entries: Vec<ImageEntry>,
}

impl ImagePool {
    /// Build a pool from explicit entries. Repeated paths collapse to the
    /// first occurrence so the deck never holds the same image twice.
    pub fn new(entries: Vec<ImageEntry>) -> Self {
        let mut unique: Vec<ImageEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            if !unique.iter().any(|e| e.path == entry.path) {
                unique.push(entry);
            }
        }
        Self { entries: unique }
    }

    /// Pair every image reference the provider lists with its category.
    pub fn from_provider(provider: &dyn AssetProvider) -> Self {
        let entries = Category::ALL
            .into_iter()
            .flat_map(|category| {
                provider
                    .images(category)
                    .into_iter()
                    .map(move |path| ImageEntry::new(path, category))
            })
            .collect();
        Self::new(entries)
    }

    pub fn entries(&self) -> &[ImageEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
