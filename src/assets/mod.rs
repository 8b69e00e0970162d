//! Asset provider: where image and sound references come from.
//!
//! The round controller only needs the two flat image lists; the session
//! layer also resolves sound cues and button labels through the provider.

pub mod catalog;
pub mod error;

pub use catalog::StaticCatalog;
pub use error::CatalogError;

use crate::game::systems::cues::SoundEffect;
use crate::game::types::Category;

pub trait AssetProvider: Send + Sync {
    /// Ordered image references for one category.
    fn images(&self, category: Category) -> Vec<String>;

    /// Playable reference for a sound effect, if the catalog has one.
    fn sound(&self, effect: SoundEffect) -> Option<String>;

    /// Human-readable name shown on the guess button.
    fn display_name(&self, category: Category) -> String;
}
